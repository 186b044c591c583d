use crate::constraints::{ClaimsConstraint, VerificationConstraint};
use crate::error::ConstraintError;
use crate::extract::{
    ConstraintNode, Populate, extract, extract_elements, extract_entry, json_type,
};
use crate::presence::Presence;
use ida_domain::keys::{CLAIMS, VERIFICATION};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Constraint for one `verified_claims` object.
///
/// ```json
/// {
///   "verified_claims": {
///     "verification": { "trust_framework": null },
///     "claims": { "given_name": null }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifiedClaimsConstraint {
    presence: Presence,
    verification: VerificationConstraint,
    claims: ClaimsConstraint,
}

impl VerifiedClaimsConstraint {
    /// Extracts the `verified_claims` object stored under `key`.
    ///
    /// # Errors
    /// Returns [`ConstraintError::Shape`] if the value is not an object or any
    /// nested member does not conform.
    pub fn extract(parent: &Map<String, Value>, key: &str) -> Result<Self, ConstraintError> {
        extract(parent, key)
    }

    #[must_use]
    pub const fn verification(&self) -> &VerificationConstraint {
        &self.verification
    }

    #[must_use]
    pub const fn claims(&self) -> &ClaimsConstraint {
        &self.claims
    }

    /// `true` when `claims` is omitted or `null`.
    ///
    /// OpenID Connect for Identity Assurance 1.0, 5.1: a `claims` sub-element with
    /// value `null` is a request for all possible claims, and omitting it is
    /// equivalent to `null`. An empty object requests no claims.
    #[must_use]
    pub fn is_all_claims_requested(&self) -> bool {
        !self.claims.exists() || self.claims.is_null()
    }
}

impl ConstraintNode for VerifiedClaimsConstraint {
    fn presence(&self) -> &Presence {
        &self.presence
    }
}

impl Populate for VerifiedClaimsConstraint {
    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }

    fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError> {
        self.verification = extract(object, VERIFICATION)?;
        self.claims = extract(object, CLAIMS)?;
        Ok(())
    }
}

/// `verified_claims` as it may appear in a request: one object or an array of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifiedClaimsContainerConstraint {
    presence: Presence,
    array: bool,
    elements: Vec<VerifiedClaimsConstraint>,
}

impl VerifiedClaimsContainerConstraint {
    /// Extracts `verified_claims` stored under `key`, accepting an object or an array.
    ///
    /// # Errors
    /// Returns [`ConstraintError::Shape`] if the value is neither `null`, an object nor
    /// an array, or if any contained object does not conform.
    pub fn extract(parent: &Map<String, Value>, key: &str) -> Result<Self, ConstraintError> {
        let mut container = Self::default();

        let Some(value) = parent.get(key) else {
            trace!(key, state = "absent", "verified claims container");
            return Ok(container);
        };
        container.presence.set_exists(true);

        match value {
            Value::Null => container.presence.set_null(true),
            Value::Object(_) => {
                container.elements.push(extract_entry(Some(value), key)?);
            },
            Value::Array(items) => {
                trace!(key, len = items.len(), "verified claims container is an array");
                container.array = true;
                container.elements = extract_elements(items, key)?;
            },
            other => {
                debug!(key, found = json_type(other), "verified claims container has the wrong type");
                return Err(ConstraintError::not_a(key, "an object or an array"));
            },
        }

        Ok(container)
    }

    #[must_use]
    pub const fn presence(&self) -> &Presence {
        &self.presence
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.presence.exists()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.presence.is_null()
    }

    /// `true` if the source value was an array, even an empty one.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.array
    }

    #[must_use]
    pub fn elements(&self) -> &[VerifiedClaimsConstraint] {
        &self.elements
    }

    /// The single object when `verified_claims` was not an array.
    #[must_use]
    pub fn single(&self) -> Option<&VerifiedClaimsConstraint> {
        if self.array { None } else { self.elements.first() }
    }
}
