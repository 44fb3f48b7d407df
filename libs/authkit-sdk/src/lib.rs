#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! AuthKit SDK
//!
//! This crate provides the public contract between authenticators and
//! the code that consumes their outcomes:
//!
//! - [`Authenticator`] - Producer trait for credential checkers
//! - [`AuthResult`] - Immutable outcome of one authentication attempt
//! - [`ResultCode`] - Closed outcome taxonomy
//! - [`Identity`] / [`ClaimsIdentity`] - The principal record capability
//! - [`AuthResultError`] - Construction-time misuse errors
//!
//! ## Usage
//!
//! Consumers branch on the outcome, never on raised errors:
//!
//! ```ignore
//! let result = authenticator.authenticate(&credential).await;
//! if result.is_valid() {
//!     let identity = result.identity().expect("present on success");
//!     // establish the session...
//! } else {
//!     tracing::debug!(code = %result.code(), "authentication refused");
//! }
//! ```

pub mod api;

// Re-export main types at crate root
pub use api::Authenticator;
pub use authkit_core::{AuthResult, AuthResultError, ClaimsIdentity, Identity, ResultCode};
