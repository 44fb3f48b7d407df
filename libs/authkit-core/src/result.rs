use std::sync::Arc;

use crate::code::ResultCode;
use crate::error::AuthResultError;
use crate::identity::Identity;

/// Outcome of a single authentication attempt.
///
/// Produced exactly once by an authenticator at the end of an attempt,
/// then held and read by consumers. Construction either yields a fully
/// valid instance or fails atomically; no field changes afterwards, so
/// instances can be shared across threads without synchronization.
///
/// An unsuccessful attempt is *not* an error: it is a normally
/// constructed result with a non-success [`ResultCode`] and, usually,
/// diagnostic messages. Consumers branch on [`AuthResult::is_valid`] and
/// may inspect [`AuthResult::code`] for finer-grained handling.
#[derive(Clone, Debug)]
pub struct AuthResult {
    code: ResultCode,
    identity: Option<Arc<dyn Identity>>,
    errors: Vec<String>,
}

impl AuthResult {
    /// Build a result from an optional identity, an outcome code, and
    /// failure messages.
    ///
    /// The identity and messages are stored as given — shared, not
    /// copied. Messages should be empty for a success outcome, and no
    /// failure path is obliged to populate them.
    ///
    /// # Errors
    ///
    /// [`AuthResultError::IdentityRequired`] if `code` is
    /// [`ResultCode::Success`] and `identity` is absent or empty.
    pub fn new(
        identity: Option<Arc<dyn Identity>>,
        code: ResultCode,
        messages: Vec<String>,
    ) -> Result<Self, AuthResultError> {
        let usable = identity.as_ref().is_some_and(|id| !id.is_empty());
        if code.is_success() && !usable {
            return Err(AuthResultError::IdentityRequired);
        }

        Ok(Self {
            code,
            identity,
            errors: messages,
        })
    }

    /// Build a success result for the given identity.
    ///
    /// # Errors
    ///
    /// [`AuthResultError::IdentityRequired`] if the identity record is
    /// empty.
    pub fn success(identity: Arc<dyn Identity>) -> Result<Self, AuthResultError> {
        Self::new(Some(identity), ResultCode::Success, Vec::new())
    }

    /// Build a failure result carrying the given failure reasons.
    ///
    /// Use [`AuthResult::new`] when a (non-usable) identity should still
    /// travel with the failure, e.g. for audit trails.
    ///
    /// # Panics
    ///
    /// Panics if `code` is [`ResultCode::Success`]; a success result
    /// requires an identity — use [`AuthResult::success`].
    #[must_use]
    pub fn failure(code: ResultCode, messages: Vec<String>) -> Self {
        assert!(
            !code.is_success(),
            "a success result requires an identity"
        );
        Self {
            code,
            identity: None,
            errors: messages,
        }
    }

    /// Whether the attempt succeeded (`code` has a positive value).
    ///
    /// The single source of truth for success/failure branching.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.code.value() > 0
    }

    /// The outcome code for this attempt.
    #[must_use]
    pub fn code(&self) -> ResultCode {
        self.code
    }

    /// The identity established by the attempt, if any.
    ///
    /// Always present on success; may be present or absent on failure.
    #[must_use]
    pub fn identity(&self) -> Option<&Arc<dyn Identity>> {
        self.identity.as_ref()
    }

    /// Why the attempt was unsuccessful.
    ///
    /// Empty on success. Not every failure path populates it, so absence
    /// of messages must not be read as success.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
