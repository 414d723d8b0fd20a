//! `reqwest`-backed OAuth2 client.

use serde::Deserialize;

use crate::client::{BoxFuture, CodeExchange, OAuth2Client, ProtectedResource, TokenGrant};
use crate::OAuthError;

/// Error body returned by a token endpoint (RFC 6749 §5.2).
#[derive(Debug, Deserialize)]
struct TokenErrorBody {
    error: String,
    error_description: Option<String>,
}

/// [`OAuth2Client`] that talks HTTP through a shared `reqwest::Client`.
///
/// Each primitive issues exactly one request. Timeouts, proxies and TLS
/// settings come from the `reqwest::Client` passed to [`with_client`](Self::with_client).
#[derive(Debug, Clone, Default)]
pub struct HttpOAuth2Client {
    http: reqwest::Client,
}

impl HttpOAuth2Client {
    /// Create a client with default `reqwest` settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client around a preconfigured `reqwest::Client`.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn request_token(&self, exchange: CodeExchange) -> Result<TokenGrant, OAuthError> {
        let mut params = vec![
            ("grant_type", "authorization_code"),
            ("code", exchange.code.as_str()),
            ("client_id", exchange.client_id.as_str()),
            ("client_secret", exchange.client_secret.as_str()),
        ];
        if let Some(redirect_uri) = exchange.redirect_uri.as_deref() {
            params.push(("redirect_uri", redirect_uri));
        }

        log::debug!("Exchanging authorization code at {}", exchange.token_url);

        let response = self
            .http
            .post(&exchange.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<TokenErrorBody>(&body) {
                Ok(err) => OAuthError::TokenResponse {
                    error: err.error,
                    description: err.error_description,
                },
                Err(_) => OAuthError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| OAuthError::InvalidResponse(format!("token response parse failed: {e}")))
    }

    async fn get(&self, url: String, access_token: String) -> Result<ProtectedResource, OAuthError> {
        let response = self
            .http
            .get(&url)
            .bearer_auth(&access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(OAuthError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ProtectedResource {
            status: status.as_u16(),
            body,
        })
    }
}

impl OAuth2Client for HttpOAuth2Client {
    fn exchange_code(&self, exchange: CodeExchange) -> BoxFuture<'_, Result<TokenGrant, OAuthError>> {
        Box::pin(self.request_token(exchange))
    }

    fn get_protected_resource(
        &self,
        url: &str,
        access_token: &str,
    ) -> BoxFuture<'_, Result<ProtectedResource, OAuthError>> {
        let url = url.to_string();
        let access_token = access_token.to_string();
        Box::pin(self.get(url, access_token))
    }
}
