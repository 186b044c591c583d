//! Facade crate for the Identity Assurance workspace.
//! Re-exports the constraint core and the domain models under one name.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Depend on `ida` and call [`inspect`] with a parsed request object, or reach the
//!   individual node types through [`assurance`].

pub use ida_assurance as assurance;
pub use ida_domain as domain;

use ida_assurance::{ConstraintError, VerifiedClaimsContainerConstraint};
use serde_json::{Map, Value};

/// Extracts `verified_claims` (object or array) stored under `key` of a request object.
///
/// # Errors
/// Returns [`ConstraintError::Shape`] if the member does not conform to the schema.
pub fn inspect(
    request: &Map<String, Value>,
    key: &str,
) -> Result<VerifiedClaimsContainerConstraint, ConstraintError> {
    let container = VerifiedClaimsContainerConstraint::extract(request, key)?;
    tracing::debug!(
        key,
        exists = container.exists(),
        elements = container.elements().len(),
        "verified claims extracted"
    );
    Ok(container)
}
