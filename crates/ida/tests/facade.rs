use ida::assurance::ConstraintError;
use ida::domain::keys::VERIFIED_CLAIMS;
use serde_json::json;

#[test]
fn inspect_reads_the_configured_key() {
    let request = json!({ "verified_claims": [{ "claims": null }, { "claims": {} }] });

    let container = ida::inspect(request.as_object().unwrap(), VERIFIED_CLAIMS).unwrap();
    assert!(container.is_array());
    assert_eq!(container.elements().len(), 2);
    assert!(container.elements()[0].is_all_claims_requested());
    assert!(!container.elements()[1].is_all_claims_requested());
}

#[test]
fn inspect_propagates_shape_errors() {
    let request = json!({ "verified_claims": { "verification": "bad" } });

    let err = ida::inspect(request.as_object().unwrap(), VERIFIED_CLAIMS).unwrap_err();
    assert!(matches!(err, ConstraintError::Shape { .. }));
    assert!(err.to_string().contains("'verification' is not an object."));
}
