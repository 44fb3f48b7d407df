//! Producer contract for authenticators.
//!
//! An authenticator inspects one credential and reports the outcome as
//! an [`AuthResult`]. How credentials are verified, how identities are
//! looked up, and how several authenticators are combined into a chain
//! are concerns of the embedding application, not of this trait.

use async_trait::async_trait;

use authkit_core::AuthResult;

/// A component that verifies one credential and reports the outcome.
///
/// Every attempt produces exactly one [`AuthResult`] satisfying the
/// construction invariants: a success result carries the established
/// identity; a failure result carries the failure class and optional
/// diagnostics. Rejection is an expected outcome returned as data —
/// implementations must not surface it as a panic or an `Err`.
///
/// ## Code selection
///
/// - [`ResultCode::CredentialsNotFound`] — the request carried no
///   credential material at all
/// - [`ResultCode::IdentityNotFound`] — no identity matched the
///   credential
/// - [`ResultCode::CredentialInvalid`] — an identity was found, but the
///   credential did not verify
/// - [`ResultCode::Other`] — any other rejection reason
/// - [`ResultCode::Failure`] — reserved for cases not otherwise
///   classified
///
/// [`ResultCode::CredentialsNotFound`]: authkit_core::ResultCode::CredentialsNotFound
/// [`ResultCode::IdentityNotFound`]: authkit_core::ResultCode::IdentityNotFound
/// [`ResultCode::CredentialInvalid`]: authkit_core::ResultCode::CredentialInvalid
/// [`ResultCode::Other`]: authkit_core::ResultCode::Other
/// [`ResultCode::Failure`]: authkit_core::ResultCode::Failure
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// The credential material this authenticator consumes.
    type Credential: ?Sized + Sync;

    /// Attempt to authenticate the given credential.
    ///
    /// Called once per attempt; the returned result is immutable and
    /// may be read concurrently by any number of consumers.
    async fn authenticate(&self, credential: &Self::Credential) -> AuthResult;
}
