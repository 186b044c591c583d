//! Constraint nodes of the `verified_claims` request schema.
//!
//! ```text
//! verified_claims
//! ├── verification
//! │   ├── trust_framework          leaf
//! │   ├── time                     date
//! │   ├── verification_process     leaf
//! │   └── evidence[]
//! │       ├── type, method         leaf
//! │       ├── time                 date
//! │       └── document
//! │           ├── type, number, date_of_issuance, date_of_expiry   leaf
//! │           └── issuer
//! │               └── name, country                              leaf
//! └── claims
//!     └── <claim name>             leaf keywords
//!         └── <sub-claim name>     same shape, recursively
//! ```

mod claims;
mod evidence;
mod leaf;
mod verification;
mod verified_claims;

pub use claims::{ClaimConstraint, ClaimsConstraint};
pub use evidence::{DocumentConstraint, EvidenceArrayConstraint, EvidenceConstraint, IssuerConstraint};
pub use leaf::{DateConstraint, LeafConstraint};
pub use verification::VerificationConstraint;
pub use verified_claims::{VerifiedClaimsConstraint, VerifiedClaimsContainerConstraint};
