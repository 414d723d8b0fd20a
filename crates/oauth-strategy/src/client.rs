//! The OAuth2 client seam consumed by provider strategies.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::OAuthError;

/// Boxed, sendable future returned by the trait methods in this crate.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Parameters for an authorization-code exchange.
#[derive(Debug, Clone)]
pub struct CodeExchange {
    /// Token endpoint URL.
    pub token_url: String,
    /// OAuth2 client ID.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// The authorization code returned to the callback URL.
    pub code: String,
    /// The callback URL used in the authorization request, if any.
    pub redirect_uri: Option<String>,
}

/// A successful token endpoint response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenGrant {
    /// Bearer access token.
    pub access_token: String,
    /// Refresh token, when the provider issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Token type (normally `Bearer`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// OpenID Connect ID token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    /// Granted scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Body and status of an authenticated GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedResource {
    /// HTTP status code (always a success status when returned as `Ok`).
    pub status: u16,
    /// Response body, unmodified.
    pub body: String,
}

/// The OAuth2 primitives a login strategy needs.
///
/// Implementations own transport concerns (TLS, pooling, timeouts). A
/// strategy calls each primitive at most once per operation and never
/// retries.
pub trait OAuth2Client: Send + Sync + 'static {
    /// Exchange an authorization code for tokens.
    fn exchange_code(&self, exchange: CodeExchange) -> BoxFuture<'_, Result<TokenGrant, OAuthError>>;

    /// GET `url` with `access_token` as a bearer credential.
    ///
    /// Non-success statuses are reported as [`OAuthError::Status`].
    fn get_protected_resource(
        &self,
        url: &str,
        access_token: &str,
    ) -> BoxFuture<'_, Result<ProtectedResource, OAuthError>>;
}
