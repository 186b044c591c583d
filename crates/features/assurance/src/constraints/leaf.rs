use crate::error::ConstraintError;
use crate::extract::{ConstraintNode, Populate};
use crate::presence::Presence;
use crate::scalar::{read_bool, read_string, read_strings, read_u64};
use ida_domain::keys::{ESSENTIAL, MAX_AGE, PURPOSE, VALUE, VALUES};
use serde::Serialize;
use serde_json::{Map, Value};

/// Members a leaf object understands; anything else is not a constraint keyword.
pub(crate) const LEAF_KEYWORDS: [&str; 4] = [ESSENTIAL, VALUE, VALUES, PURPOSE];

/// Constraint on a single claim or verification element.
///
/// ```json
/// { "essential": true, "value": "de_aml", "values": ["eidas", "nist_800_63A"], "purpose": "..." }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeafConstraint {
    presence: Presence,
    #[serde(skip_serializing_if = "Option::is_none")]
    essential: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<String>,
}

impl LeafConstraint {
    #[must_use]
    pub const fn essential(&self) -> Option<bool> {
        self.essential
    }

    /// `true` only when `essential` was given as `true`.
    #[must_use]
    pub fn is_essential(&self) -> bool {
        self.essential == Some(true)
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    #[must_use]
    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }
}

impl ConstraintNode for LeafConstraint {
    fn presence(&self) -> &Presence {
        &self.presence
    }
}

impl Populate for LeafConstraint {
    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }

    fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError> {
        self.essential = read_bool(object, ESSENTIAL)?;
        self.value = read_string(object, VALUE)?;
        self.values = read_strings(object, VALUES)?;
        self.purpose = read_string(object, PURPOSE)?;
        Ok(())
    }
}

/// Constraint on a point in time, e.g. `verification.time`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateConstraint {
    presence: Presence,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_age: Option<u64>,
}

impl DateConstraint {
    /// Maximum age in seconds.
    #[must_use]
    pub const fn max_age(&self) -> Option<u64> {
        self.max_age
    }
}

impl ConstraintNode for DateConstraint {
    fn presence(&self) -> &Presence {
        &self.presence
    }
}

impl Populate for DateConstraint {
    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }

    fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError> {
        self.max_age = read_u64(object, MAX_AGE)?;
        Ok(())
    }
}
