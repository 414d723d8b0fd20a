//! PayPal strategy error types.

use oauth_strategy::{OAuthError, VerifyError};

/// Result type alias for strategy operations.
pub type Result<T> = std::result::Result<T, StrategyError>;

/// Errors that can occur while configuring the strategy or loading a profile.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StrategyError {
    /// Invalid options. Raised at construction, before any network activity.
    #[error("{message}")]
    Configuration {
        /// What is wrong with the options.
        message: String,
    },

    /// The user-info request failed at the transport or HTTP level.
    #[error("failed to fetch user profile: {source}")]
    ProfileFetch {
        /// Underlying collaborator error.
        #[source]
        source: OAuthError,
    },

    /// The user-info response body is not a usable JSON object.
    #[error("failed to parse user profile: {source}")]
    ProfileParse {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// The response body as received.
        body: String,
    },

    /// The authorization-code exchange failed.
    #[error("failed to obtain access token: {source}")]
    TokenExchange {
        /// Underlying collaborator error.
        #[source]
        source: OAuthError,
    },

    /// The application's verify callback failed.
    #[error("verify callback failed: {0}")]
    Verify(#[source] VerifyError),
}

impl StrategyError {
    /// Creates a configuration error.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        StrategyError::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error was raised while validating options.
    pub fn is_configuration(&self) -> bool {
        matches!(self, StrategyError::Configuration { .. })
    }

    /// The raw response body, for profile parse failures.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            StrategyError::ProfileParse { body, .. } => Some(body),
            StrategyError::ProfileFetch {
                source: OAuthError::Status { body, .. },
            } => Some(body),
            _ => None,
        }
    }
}
