use crate::constraints::{DateConstraint, LeafConstraint};
use crate::error::ConstraintError;
use crate::extract::{ArrayConstraint, ConstraintNode, Populate, extract};
use crate::presence::Presence;
use ida_domain::keys::{
    COUNTRY, DATE_OF_EXPIRY, DATE_OF_ISSUANCE, DOCUMENT, ISSUER, METHOD, NAME, NUMBER, TIME, TYPE,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Constraint for `verification.evidence`.
pub type EvidenceArrayConstraint = ArrayConstraint<EvidenceConstraint>;

/// Constraint for one element of `verification.evidence`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvidenceConstraint {
    presence: Presence,
    #[serde(rename = "type")]
    kind: LeafConstraint,
    method: LeafConstraint,
    time: DateConstraint,
    document: DocumentConstraint,
}

impl EvidenceConstraint {
    /// Constraint for `type` (`id_document`, `utility_bill`, ...).
    #[must_use]
    pub const fn kind(&self) -> &LeafConstraint {
        &self.kind
    }

    #[must_use]
    pub const fn method(&self) -> &LeafConstraint {
        &self.method
    }

    #[must_use]
    pub const fn time(&self) -> &DateConstraint {
        &self.time
    }

    #[must_use]
    pub const fn document(&self) -> &DocumentConstraint {
        &self.document
    }
}

impl ConstraintNode for EvidenceConstraint {
    fn presence(&self) -> &Presence {
        &self.presence
    }
}

impl Populate for EvidenceConstraint {
    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }

    fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError> {
        self.kind = extract(object, TYPE)?;
        self.method = extract(object, METHOD)?;
        self.time = extract(object, TIME)?;
        self.document = extract(object, DOCUMENT)?;
        Ok(())
    }
}

/// Constraint for `evidence.document`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentConstraint {
    presence: Presence,
    #[serde(rename = "type")]
    kind: LeafConstraint,
    number: LeafConstraint,
    issuer: IssuerConstraint,
    date_of_issuance: LeafConstraint,
    date_of_expiry: LeafConstraint,
}

impl DocumentConstraint {
    #[must_use]
    pub const fn kind(&self) -> &LeafConstraint {
        &self.kind
    }

    #[must_use]
    pub const fn number(&self) -> &LeafConstraint {
        &self.number
    }

    #[must_use]
    pub const fn issuer(&self) -> &IssuerConstraint {
        &self.issuer
    }

    #[must_use]
    pub const fn date_of_issuance(&self) -> &LeafConstraint {
        &self.date_of_issuance
    }

    #[must_use]
    pub const fn date_of_expiry(&self) -> &LeafConstraint {
        &self.date_of_expiry
    }
}

impl ConstraintNode for DocumentConstraint {
    fn presence(&self) -> &Presence {
        &self.presence
    }
}

impl Populate for DocumentConstraint {
    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }

    fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError> {
        self.kind = extract(object, TYPE)?;
        self.number = extract(object, NUMBER)?;
        self.issuer = extract(object, ISSUER)?;
        self.date_of_issuance = extract(object, DATE_OF_ISSUANCE)?;
        self.date_of_expiry = extract(object, DATE_OF_EXPIRY)?;
        Ok(())
    }
}

/// Constraint for `document.issuer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuerConstraint {
    presence: Presence,
    name: LeafConstraint,
    country: LeafConstraint,
}

impl IssuerConstraint {
    #[must_use]
    pub const fn name(&self) -> &LeafConstraint {
        &self.name
    }

    #[must_use]
    pub const fn country(&self) -> &LeafConstraint {
        &self.country
    }
}

impl ConstraintNode for IssuerConstraint {
    fn presence(&self) -> &Presence {
        &self.presence
    }
}

impl Populate for IssuerConstraint {
    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }

    fn fill(&mut self, object: &Map<String, Value>) -> Result<(), ConstraintError> {
        self.name = extract(object, NAME)?;
        self.country = extract(object, COUNTRY)?;
        Ok(())
    }
}
