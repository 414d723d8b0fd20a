//! Strategy options.
//!
//! Options can be built in code or loaded from TOML. Both snake_case keys and
//! the camelCase names used by other strategy implementations are accepted:
//!
//! ```toml
//! clientID = "ABC123"
//! clientSecret = "secret"
//! callbackURL = "https://www.example.net/auth/paypal/callback"
//! paypalEnvironment = "sandbox"
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::environment::{self, EnvironmentConfig};
use crate::error::{Result, StrategyError};

/// Scopes requested when none are configured.
pub const DEFAULT_SCOPES: &[&str] = &["openid", "profile", "email"];

/// Configuration for [`PayPalStrategy`](crate::PayPalStrategy).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyOptions {
    /// Your application's client ID.
    #[serde(alias = "clientID", alias = "clientId")]
    pub client_id: String,
    /// Your application's client secret.
    #[serde(alias = "clientSecret")]
    pub client_secret: String,
    /// URL PayPal redirects to after the user grants authorization.
    #[serde(alias = "callbackURL", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// `"live"` (default) or `"sandbox"`.
    #[serde(alias = "paypalEnvironment", skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Overrides the environment's authorization endpoint.
    #[serde(alias = "authorizationURL", skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    /// Overrides the environment's token endpoint.
    #[serde(alias = "tokenURL", skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    /// Overrides the environment's user-info endpoint.
    #[serde(alias = "userProfileURL", skip_serializing_if = "Option::is_none")]
    pub user_profile_url: Option<String>,
    /// Requested scopes. Empty means [`DEFAULT_SCOPES`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
}

impl StrategyOptions {
    /// Options with the given client credentials and everything else default.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Self::default()
        }
    }

    /// Set the callback URL.
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Set the environment name.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Set the requested scopes.
    pub fn with_scope<I, S>(mut self, scope: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = scope.into_iter().map(Into::into).collect();
        self
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| StrategyError::configuration(format!("invalid strategy options: {e}")))
    }

    /// Load options from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StrategyError::configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Check required options.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(StrategyError::configuration(
                "OAuth2Strategy requires a clientID option",
            ));
        }
        if self.callback_url.as_deref().is_some_and(str::is_empty) {
            return Err(StrategyError::configuration(
                "callbackURL option must not be empty",
            ));
        }
        Ok(())
    }

    /// Resolve the endpoint URLs these options select.
    pub fn endpoints(&self) -> Result<EnvironmentConfig> {
        environment::resolve(self.environment.as_deref())?.with_overrides(
            self.authorization_url.as_deref(),
            self.token_url.as_deref(),
            self.user_profile_url.as_deref(),
        )
    }

    /// The scopes to request, space separated.
    pub fn scope_param(&self) -> String {
        if self.scope.is_empty() {
            DEFAULT_SCOPES.join(" ")
        } else {
            self.scope.join(" ")
        }
    }
}

impl fmt::Debug for StrategyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyOptions")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("callback_url", &self.callback_url)
            .field("environment", &self.environment)
            .field("authorization_url", &self.authorization_url)
            .field("token_url", &self.token_url)
            .field("user_profile_url", &self.user_profile_url)
            .field("scope", &self.scope)
            .finish()
    }
}
