//! Member names of the OpenID Connect for Identity Assurance 1.0 request schema.
//!
//! Every constraint node looks up its children by these names, in the order they
//! appear in each node's field table.

// verified_claims
pub const VERIFIED_CLAIMS: &str = "verified_claims";
pub const VERIFICATION: &str = "verification";
pub const CLAIMS: &str = "claims";

// verification
pub const TRUST_FRAMEWORK: &str = "trust_framework";
pub const TIME: &str = "time";
pub const VERIFICATION_PROCESS: &str = "verification_process";
pub const EVIDENCE: &str = "evidence";

// evidence
pub const TYPE: &str = "type";
pub const METHOD: &str = "method";
pub const DOCUMENT: &str = "document";

// document
pub const NUMBER: &str = "number";
pub const ISSUER: &str = "issuer";
pub const DATE_OF_ISSUANCE: &str = "date_of_issuance";
pub const DATE_OF_EXPIRY: &str = "date_of_expiry";

// issuer
pub const NAME: &str = "name";
pub const COUNTRY: &str = "country";

// leaf constraints
pub const ESSENTIAL: &str = "essential";
pub const VALUE: &str = "value";
pub const VALUES: &str = "values";
pub const PURPOSE: &str = "purpose";
pub const MAX_AGE: &str = "max_age";
