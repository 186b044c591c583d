//! # Identity Assurance Request Constraints
//!
//! This crate turns the `verified_claims` part of an OpenID Connect for Identity
//! Assurance 1.0 request into a typed tree of constraint nodes, checking that the
//! input has the shape the schema prescribes.
//!
//! ## Architecture
//!
//! 1.  **Presence ([`presence`]):** every node records whether its member was absent,
//!     explicitly `null`, or present with a value.
//! 2.  **Extraction ([`extract`]):** one generic recursive algorithm decides presence,
//!     rejects non-objects and delegates to each node's field table.
//! 3.  **Nodes ([`constraints`]):** `verified_claims`, `verification`, `claims`,
//!     `evidence`, `document`, `issuer` and the leaf constraints below them.
//!
//! The input is an already-parsed JSON object (`serde_json::Map`). Only structure is
//! checked; whether a trust framework or evidence type is acceptable is left to the
//! caller's policy.
//!
//! ## Example
//!
//! ```rust
//! use ida_assurance::extract_verified_claims;
//! use serde_json::json;
//!
//! let request = json!({
//!     "verified_claims": {
//!         "verification": { "trust_framework": { "value": "de_aml" } },
//!         "claims": { "given_name": null }
//!     }
//! });
//!
//! let constraint = extract_verified_claims(request.as_object().unwrap()).unwrap();
//! assert!(!constraint.is_all_claims_requested());
//! assert_eq!(constraint.verification().trust_framework().value(), Some("de_aml"));
//! ```

pub mod constraints;
mod error;
pub mod extract;
pub mod presence;
mod scalar;

pub use crate::constraints::{
    ClaimConstraint, ClaimsConstraint, DateConstraint, DocumentConstraint, EvidenceArrayConstraint,
    EvidenceConstraint, IssuerConstraint, LeafConstraint, VerificationConstraint,
    VerifiedClaimsConstraint, VerifiedClaimsContainerConstraint,
};
pub use crate::error::{ConstraintError, ConstraintErrorExt};
pub use crate::extract::{ArrayConstraint, ConstraintNode, extract, extract_entry};
pub use crate::presence::{Presence, PresenceState};
use ida_domain::keys::VERIFIED_CLAIMS;
use serde_json::{Map, Value};

/// Extracts the `verified_claims` member of a request object.
///
/// This is the usual entry point; it is equivalent to
/// `extract::<VerifiedClaimsConstraint>(request, "verified_claims")`.
///
/// # Errors
/// Returns [`ConstraintError::Shape`] if `verified_claims` or anything below it does
/// not conform to the schema.
pub fn extract_verified_claims(
    request: &Map<String, Value>,
) -> Result<VerifiedClaimsConstraint, ConstraintError> {
    VerifiedClaimsConstraint::extract(request, VERIFIED_CLAIMS)
}

/// Like [`extract_verified_claims`], but also accepts an array of `verified_claims` objects.
///
/// # Errors
/// Returns [`ConstraintError::Shape`] if the member is neither an object nor an array,
/// or if any contained object does not conform.
pub fn extract_verified_claims_container(
    request: &Map<String, Value>,
) -> Result<VerifiedClaimsContainerConstraint, ConstraintError> {
    VerifiedClaimsContainerConstraint::extract(request, VERIFIED_CLAIMS)
}
