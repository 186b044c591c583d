use crate::constraints::LeafConstraint;
use crate::constraints::leaf::LEAF_KEYWORDS;
use crate::error::ConstraintError;
use crate::extract::{ConstraintNode, Populate, extract_entry};
use crate::presence::Presence;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::trace;

/// Constraint for `verified_claims.claims`.
///
/// Unlike the other nodes the member names are not fixed by the schema: every
/// member is a claim name whose value is `null` or a [`ClaimConstraint`] object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimsConstraint {
    presence: Presence,
    claims: BTreeMap<String, ClaimConstraint>,
}

impl ClaimsConstraint {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClaimConstraint> {
        self.claims.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.claims.contains_key(name)
    }

    /// Requested claim names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.claims.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClaimConstraint)> {
        self.claims.iter().map(|(name, claim)| (name.as_str(), claim))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl ConstraintNode for ClaimsConstraint {
    fn presence(&self) -> &Presence {
        &self.presence
    }
}

impl Populate for ClaimsConstraint {
    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }

    fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError> {
        for (name, value) in object {
            let claim = extract_entry(Some(value), name)?;
            self.claims.insert(name.clone(), claim);
        }
        Ok(())
    }
}

/// One requested claim.
///
/// The leaf keywords (`essential`, `value`, `values`, `purpose`) constrain the
/// claim itself. A structured claim such as `address` may instead name its
/// sub-claims, each requested with `null` or its own claim object:
///
/// ```json
/// { "address": { "country": { "essential": true }, "locality": null } }
/// ```
///
/// Members that are neither keywords nor `null`/object sub-claims are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimConstraint {
    #[serde(flatten)]
    leaf: LeafConstraint,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    sub_claims: BTreeMap<String, ClaimConstraint>,
}

impl ClaimConstraint {
    /// Keyword constraints on the claim itself.
    #[must_use]
    pub const fn leaf(&self) -> &LeafConstraint {
        &self.leaf
    }

    #[must_use]
    pub const fn essential(&self) -> Option<bool> {
        self.leaf.essential()
    }

    #[must_use]
    pub fn is_essential(&self) -> bool {
        self.leaf.is_essential()
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.leaf.value()
    }

    #[must_use]
    pub fn values(&self) -> Option<&[String]> {
        self.leaf.values()
    }

    #[must_use]
    pub fn purpose(&self) -> Option<&str> {
        self.leaf.purpose()
    }

    /// `true` if the claim names sub-claims (e.g. `address.country`).
    #[must_use]
    pub fn is_structured(&self) -> bool {
        !self.sub_claims.is_empty()
    }

    #[must_use]
    pub fn sub_claim(&self, name: &str) -> Option<&Self> {
        self.sub_claims.get(name)
    }

    /// Sub-claims in lexicographic order of their names.
    pub fn sub_claims(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.sub_claims.iter().map(|(name, claim)| (name.as_str(), claim))
    }
}

impl ConstraintNode for ClaimConstraint {
    fn presence(&self) -> &Presence {
        self.leaf.presence()
    }
}

impl Populate for ClaimConstraint {
    fn presence_mut(&mut self) -> &mut Presence {
        self.leaf.presence_mut()
    }

    fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError> {
        self.leaf.fill(object)?;

        let nested = object.iter().filter(|(name, value)| {
            !LEAF_KEYWORDS.contains(&name.as_str()) && (value.is_null() || value.is_object())
        });
        for (name, value) in nested {
            trace!(key = name.as_str(), "sub-claim");
            let claim = extract_entry(Some(value), name)?;
            self.sub_claims.insert(name.clone(), claim);
        }
        Ok(())
    }
}
