#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Value types describing the outcome of a single authentication attempt.

pub mod code;
pub mod error;
pub mod identity;
pub mod result;

pub use code::{ResultCode, UnknownCode};
pub use error::AuthResultError;
pub use identity::{ClaimsIdentity, ClaimsIdentityBuilder, Identity};
pub use result::AuthResult;
