use ida_assurance::{
    ArrayConstraint, ConstraintNode, PresenceState, VerifiedClaimsConstraint,
    VerifiedClaimsContainerConstraint, extract_verified_claims, extract_verified_claims_container,
};
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

fn full_request() -> Map<String, Value> {
    object(json!({
        "verified_claims": {
            "verification": {
                "trust_framework": { "value": "de_aml" },
                "time": { "max_age": 63_113_852 },
                "verification_process": null,
                "evidence": [
                    {
                        "type": { "value": "id_document" },
                        "method": { "value": "pipp" },
                        "time": null,
                        "document": {
                            "type": { "values": ["idcard", "passport"] },
                            "number": null,
                            "issuer": { "country": { "essential": true } },
                            "date_of_expiry": null
                        }
                    }
                ]
            },
            "claims": {
                "given_name": { "essential": true, "purpose": "To make communication look more personal" },
                "family_name": null,
                "birthdate": { "value": "1956-01-28" }
            }
        }
    }))
}

#[test]
fn verification_tree_is_typed() {
    let constraint = extract_verified_claims(&full_request()).unwrap();
    let verification = constraint.verification();

    assert_eq!(verification.trust_framework().value(), Some("de_aml"));
    assert_eq!(verification.time().max_age(), Some(63_113_852));
    assert_eq!(verification.verification_process().presence().state(), PresenceState::Null);

    let evidence = verification.evidence();
    assert!(evidence.exists());
    assert_eq!(evidence.len(), 1);

    let item = &evidence.elements()[0];
    assert_eq!(item.kind().value(), Some("id_document"));
    assert_eq!(item.method().value(), Some("pipp"));
    assert!(item.time().is_null());

    let document = item.document();
    assert_eq!(
        document.kind().values(),
        Some(&["idcard".to_owned(), "passport".to_owned()][..])
    );
    assert!(document.number().is_null());
    assert!(document.issuer().country().is_essential());
    assert!(!document.issuer().name().exists());
    assert!(!document.date_of_issuance().exists());
    assert!(document.date_of_expiry().is_null());
}

#[test]
fn claims_keep_each_leaf() {
    let constraint = extract_verified_claims(&full_request()).unwrap();
    let claims = constraint.claims();

    assert_eq!(claims.len(), 3);
    assert_eq!(claims.names().collect::<Vec<_>>(), ["birthdate", "family_name", "given_name"]);

    let given_name = claims.get("given_name").unwrap();
    assert!(given_name.is_essential());
    assert_eq!(given_name.purpose(), Some("To make communication look more personal"));

    let family_name = claims.get("family_name").unwrap();
    assert!(family_name.exists());
    assert!(family_name.is_null());
    assert!(!family_name.is_essential());

    assert_eq!(claims.get("birthdate").and_then(|c| c.value()), Some("1956-01-28"));
    assert!(!claims.contains("email"));
}

#[test]
fn claim_with_scalar_value_is_rejected() {
    let err = extract_verified_claims(&object(json!({
        "verified_claims": { "claims": { "given_name": true } }
    })))
    .unwrap_err();

    assert_eq!(err.message(), "'given_name' is not an object.");
    assert_eq!(err.path(), Some("verified_claims.claims"));
}

#[test]
fn structured_claim_keeps_sub_claims() {
    let constraint = extract_verified_claims(&object(json!({
        "verified_claims": {
            "claims": {
                "address": {
                    "purpose": "Shipping",
                    "country": { "essential": true, "value": "DE" },
                    "locality": null,
                    "comment": "ignored"
                },
                "given_name": null
            }
        }
    })))
    .unwrap();

    let address = constraint.claims().get("address").unwrap();
    assert!(address.is_structured());
    assert_eq!(address.purpose(), Some("Shipping"));
    assert_eq!(address.sub_claims().map(|(name, _)| name).collect::<Vec<_>>(), ["country", "locality"]);

    let country = address.sub_claim("country").unwrap();
    assert!(country.is_essential());
    assert_eq!(country.value(), Some("DE"));
    assert!(!country.is_structured());

    let locality = address.sub_claim("locality").unwrap();
    assert!(locality.exists());
    assert!(locality.is_null());
    assert!(address.sub_claim("comment").is_none());

    assert!(!constraint.claims().get("given_name").unwrap().is_structured());

    let rendered = serde_json::to_value(&constraint).unwrap();
    let address = &rendered["claims"]["claims"]["address"];
    assert_eq!(address["presence"], "present");
    assert_eq!(address["sub_claims"]["country"]["essential"], true);
    assert_eq!(address["sub_claims"]["locality"]["presence"], "null");
    assert!(rendered["claims"]["claims"]["given_name"].get("sub_claims").is_none());
}

#[test]
fn sub_claim_mismatch_is_routed() {
    let err = extract_verified_claims(&object(json!({
        "verified_claims": { "claims": { "address": { "country": { "essential": "yes" } } } }
    })))
    .unwrap_err();

    assert_eq!(err.message(), "'essential' is not a boolean.");
    assert_eq!(err.path(), Some("verified_claims.claims.address.country"));
}

#[test]
fn evidence_must_be_an_array() {
    let err = extract_verified_claims(&object(json!({
        "verified_claims": { "verification": { "evidence": { "type": null } } }
    })))
    .unwrap_err();

    assert_eq!(err.message(), "'evidence' is not an array.");
    assert_eq!(err.path(), Some("verified_claims.verification"));
}

#[test]
fn max_age_must_be_a_non_negative_integer() {
    let err = extract_verified_claims(&object(json!({
        "verified_claims": { "verification": { "time": { "max_age": "1 day" } } }
    })))
    .unwrap_err();

    assert_eq!(err.message(), "'max_age' is not a non-negative integer.");
}

#[test]
fn values_must_be_strings() {
    let err = extract_verified_claims(&object(json!({
        "verified_claims": { "verification": { "trust_framework": { "values": ["de_aml", 1] } } }
    })))
    .unwrap_err();

    assert_eq!(err.message(), "'values' is not an array of strings.");
}

#[test]
fn container_accepts_a_single_object() {
    let container = extract_verified_claims_container(&full_request()).unwrap();

    assert!(container.exists());
    assert!(!container.is_array());
    assert_eq!(container.elements().len(), 1);
    assert!(container.single().is_some());
}

#[test]
fn container_accepts_an_array() {
    let container = extract_verified_claims_container(&object(json!({
        "verified_claims": [
            { "claims": null },
            { "claims": { "given_name": null } }
        ]
    })))
    .unwrap();

    assert!(container.is_array());
    assert!(container.single().is_none());
    let requested: Vec<bool> =
        container.elements().iter().map(|vc| vc.is_all_claims_requested()).collect();
    assert_eq!(requested, [true, false]);
}

#[test]
fn container_labels_bad_elements() {
    let err = extract_verified_claims_container(&object(json!({
        "verified_claims": [{ "claims": null }, 42]
    })))
    .unwrap_err();

    assert_eq!(err.message(), "'verified_claims[1]' is not an object.");

    let err = extract_verified_claims_container(&object(json!({
        "verified_claims": [{ "verification": [] }]
    })))
    .unwrap_err();

    assert_eq!(err.message(), "'verification' is not an object.");
    assert_eq!(err.path(), Some("verified_claims[0]"));
}

#[test]
fn container_array_agrees_with_array_member() {
    let request = object(json!({
        "verified_claims": [
            { "claims": { "given_name": { "essential": true } } },
            null,
            { "verification": { "trust_framework": { "value": "eidas" } } }
        ]
    }));

    let container = extract_verified_claims_container(&request).unwrap();
    let array = ArrayConstraint::<VerifiedClaimsConstraint>::extract(&request, "verified_claims").unwrap();
    assert_eq!(container.elements(), array.elements());
    assert!(container.elements()[1].is_null());

    let bad = object(json!({ "verified_claims": [{}, { "claims": [] }] }));
    let from_container = extract_verified_claims_container(&bad).unwrap_err();
    let from_array =
        ArrayConstraint::<VerifiedClaimsConstraint>::extract(&bad, "verified_claims").unwrap_err();
    assert_eq!(from_container, from_array);
    assert_eq!(from_container.path(), Some("verified_claims[1]"));
}

#[test]
fn container_rejects_scalars() {
    let err = VerifiedClaimsContainerConstraint::extract(
        &object(json!({ "verified_claims": 1 })),
        "verified_claims",
    )
    .unwrap_err();

    assert_eq!(err.message(), "'verified_claims' is not an object or an array.");
}

#[test]
fn container_null_and_absent() {
    let null = extract_verified_claims_container(&object(json!({ "verified_claims": null }))).unwrap();
    assert!(null.is_null());
    assert!(null.elements().is_empty());

    let absent = extract_verified_claims_container(&Map::new()).unwrap();
    assert!(!absent.exists());
    assert!(absent.elements().is_empty());
}

#[test]
fn tree_serializes_with_presence_states() {
    let constraint = extract_verified_claims(&object(json!({
        "verified_claims": { "claims": { "given_name": { "essential": true } } }
    })))
    .unwrap();

    let rendered = serde_json::to_value(&constraint).unwrap();
    assert_eq!(rendered["presence"], "present");
    assert_eq!(rendered["verification"]["presence"], "absent");
    assert_eq!(rendered["claims"]["claims"]["given_name"]["essential"], true);
    assert!(rendered["claims"]["claims"]["given_name"].get("value").is_none());
}
