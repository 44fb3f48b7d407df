//! Construction-time errors for the result API.

use thiserror::Error;

/// Invalid-argument misuse of the result construction contract.
///
/// These indicate a defect in the producing authenticator, never a failed
/// authentication attempt — a rejected credential is represented as a
/// normally constructed [`crate::AuthResult`] with a non-success code and
/// is handled through ordinary control flow, not through this error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthResultError {
    /// A success result was built without a usable identity.
    #[error("identity can not be empty with a success code")]
    IdentityRequired,

    /// A present value does not satisfy the record capability.
    #[error("identity must be a record, got {kind}")]
    NotARecord {
        /// JSON kind of the offending value (e.g. `"string"`, `"array"`).
        kind: &'static str,
    },
}
