//! Generic OAuth2 strategy primitives.
//!
//! Provides:
//! - [`OAuth2Client`] — Trait for the two OAuth2 primitives a strategy consumes
//!   (authorization-code exchange and authenticated GET)
//! - [`HttpOAuth2Client`] — `reqwest`-backed implementation of [`OAuth2Client`]
//! - [`Verify`] / [`AuthOutcome`] — Application callback that turns a provider
//!   profile into an application user
//! - [`OAuthError`] — Collaborator error types
//!
//! Provider crates (e.g. `oauth-strategy-paypal`) compose these primitives;
//! they never subclass or wrap a concrete client type.

mod client;
mod error;
mod http;
mod verify;

pub use client::{BoxFuture, CodeExchange, OAuth2Client, ProtectedResource, TokenGrant};
pub use error::OAuthError;
pub use http::HttpOAuth2Client;
pub use verify::{AuthOutcome, Verify, VerifyError};
