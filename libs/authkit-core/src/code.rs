use std::fmt;

use thiserror::Error;

/// Outcome classifier for a single authentication attempt.
///
/// A closed set: [`ResultCode::Success`] is the only member with a positive
/// numeric value, so validity and success coincide exactly (see
/// [`crate::AuthResult::is_valid`]). The numeric values are stable for
/// log compatibility with existing consumers; no arithmetic beyond the
/// sign comparison is meaningful over them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ResultCode {
    /// Authentication succeeded.
    Success,
    /// General failure.
    Failure,
    /// No identity matched the supplied credential.
    IdentityNotFound,
    /// An identity was found, but the credential did not verify.
    CredentialInvalid,
    /// Failure due to other circumstances.
    Other,
    /// No credential material was present in the request at all.
    CredentialsNotFound,
}

impl ResultCode {
    /// The numeric code for this outcome.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Success => 1,
            Self::Failure => 0,
            Self::IdentityNotFound => -1,
            Self::CredentialInvalid => -2,
            Self::Other => -3,
            Self::CredentialsNotFound => -4,
        }
    }

    /// Returns `true` iff this is the success outcome (`value() > 0`).
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.value() > 0
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::IdentityNotFound => "identity_not_found",
            Self::CredentialInvalid => "credential_invalid",
            Self::Other => "other",
            Self::CredentialsNotFound => "credentials_not_found",
        };
        f.write_str(label)
    }
}

impl From<ResultCode> for i32 {
    #[inline]
    fn from(code: ResultCode) -> Self {
        code.value()
    }
}

/// An integer that does not name a member of the closed code set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown result code {0}")]
pub struct UnknownCode(pub i32);

impl TryFrom<i32> for ResultCode {
    type Error = UnknownCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Success),
            0 => Ok(Self::Failure),
            -1 => Ok(Self::IdentityNotFound),
            -2 => Ok(Self::CredentialInvalid),
            -3 => Ok(Self::Other),
            -4 => Ok(Self::CredentialsNotFound),
            other => Err(UnknownCode(other)),
        }
    }
}
