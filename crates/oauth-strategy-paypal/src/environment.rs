//! PayPal deployment environments and their endpoint URLs.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StrategyError};

/// Live authorization endpoint.
pub const LIVE_AUTHORIZATION_URL: &str = "https://www.paypal.com/signin/authorize";
/// Live token endpoint.
pub const LIVE_TOKEN_URL: &str = "https://api.paypal.com/v1/identity/openidconnect/tokenservice";
/// Live user-info endpoint.
pub const LIVE_USER_PROFILE_URL: &str = "https://api.paypal.com/v1/identity/openidconnect/userinfo/";

/// Sandbox authorization endpoint.
pub const SANDBOX_AUTHORIZATION_URL: &str = "https://www.sandbox.paypal.com/signin/authorize";
/// Sandbox token endpoint.
pub const SANDBOX_TOKEN_URL: &str =
    "https://api.sandbox.paypal.com/v1/identity/openidconnect/tokenservice";
/// Sandbox user-info endpoint.
pub const SANDBOX_USER_PROFILE_URL: &str =
    "https://api.sandbox.paypal.com/v1/identity/openidconnect/userinfo/";

const INVALID_ENVIRONMENT: &str =
    r#"paypalEnvironment option must be "sandbox", "live" or not set at all (default to "live")"#;

/// A PayPal deployment mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Production endpoints.
    #[default]
    Live,
    /// Developer sandbox endpoints.
    Sandbox,
}

impl Environment {
    /// The option value naming this environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Live => "live",
            Environment::Sandbox => "sandbox",
        }
    }

    /// The built-in endpoint triple for this environment.
    pub fn config(&self) -> EnvironmentConfig {
        match self {
            Environment::Live => EnvironmentConfig {
                authorization_url: LIVE_AUTHORIZATION_URL.to_string(),
                token_url: LIVE_TOKEN_URL.to_string(),
                user_profile_url: LIVE_USER_PROFILE_URL.to_string(),
            },
            Environment::Sandbox => EnvironmentConfig {
                authorization_url: SANDBOX_AUTHORIZATION_URL.to_string(),
                token_url: SANDBOX_TOKEN_URL.to_string(),
                user_profile_url: SANDBOX_USER_PROFILE_URL.to_string(),
            },
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "live" => Ok(Environment::Live),
            "sandbox" => Ok(Environment::Sandbox),
            _ => Err(StrategyError::configuration(INVALID_ENVIRONMENT)),
        }
    }
}

/// Endpoint URLs for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    /// Where the user is sent to grant authorization.
    pub authorization_url: String,
    /// Where authorization codes are exchanged for tokens.
    pub token_url: String,
    /// OpenID Connect user-info endpoint.
    pub user_profile_url: String,
}

impl EnvironmentConfig {
    /// Replace endpoints with explicitly configured URLs.
    ///
    /// Each override must be an absolute URL.
    pub fn with_overrides(
        mut self,
        authorization_url: Option<&str>,
        token_url: Option<&str>,
        user_profile_url: Option<&str>,
    ) -> Result<Self> {
        if let Some(url) = authorization_url {
            self.authorization_url = parse_endpoint("authorizationURL", url)?;
        }
        if let Some(url) = token_url {
            self.token_url = parse_endpoint("tokenURL", url)?;
        }
        if let Some(url) = user_profile_url {
            self.user_profile_url = parse_endpoint("userProfileURL", url)?;
        }
        Ok(self)
    }
}

fn parse_endpoint(option: &str, url: &str) -> Result<String> {
    reqwest::Url::parse(url)
        .map(|_| url.to_string())
        .map_err(|e| StrategyError::configuration(format!("{option} option is not a valid URL: {e}")))
}

/// Resolve an environment name to its endpoint URLs.
///
/// `None` selects live. Unknown names fail with
/// [`StrategyError::Configuration`].
pub fn resolve(env_name: Option<&str>) -> Result<EnvironmentConfig> {
    let environment = match env_name {
        Some(name) => name.parse::<Environment>()?,
        None => Environment::default(),
    };
    log::debug!("Resolved PayPal environment '{environment}'");
    Ok(environment.config())
}
