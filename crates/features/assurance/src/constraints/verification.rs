use crate::constraints::{DateConstraint, EvidenceArrayConstraint, LeafConstraint};
use crate::error::ConstraintError;
use crate::extract::{ConstraintNode, Populate, extract};
use crate::presence::Presence;
use ida_domain::keys::{EVIDENCE, TIME, TRUST_FRAMEWORK, VERIFICATION_PROCESS};
use serde::Serialize;
use serde_json::{Map, Value};

/// Constraint for `verified_claims.verification`.
///
/// ```json
/// {
///   "trust_framework": { "value": "de_aml" },
///   "time": { "max_age": 63113852 },
///   "evidence": [ { "type": { "value": "id_document" } } ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationConstraint {
    presence: Presence,
    trust_framework: LeafConstraint,
    time: DateConstraint,
    verification_process: LeafConstraint,
    evidence: EvidenceArrayConstraint,
}

impl VerificationConstraint {
    #[must_use]
    pub const fn trust_framework(&self) -> &LeafConstraint {
        &self.trust_framework
    }

    #[must_use]
    pub const fn time(&self) -> &DateConstraint {
        &self.time
    }

    #[must_use]
    pub const fn verification_process(&self) -> &LeafConstraint {
        &self.verification_process
    }

    #[must_use]
    pub const fn evidence(&self) -> &EvidenceArrayConstraint {
        &self.evidence
    }
}

impl ConstraintNode for VerificationConstraint {
    fn presence(&self) -> &Presence {
        &self.presence
    }
}

impl Populate for VerificationConstraint {
    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }

    fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError> {
        self.trust_framework = extract(object, TRUST_FRAMEWORK)?;
        self.time = extract(object, TIME)?;
        self.verification_process = extract(object, VERIFICATION_PROCESS)?;
        self.evidence = EvidenceArrayConstraint::extract(object, EVIDENCE)?;
        Ok(())
    }
}
