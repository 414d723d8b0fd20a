//! OAuth2 collaborator error types.

/// Errors returned by an [`OAuth2Client`](crate::OAuth2Client).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OAuthError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// The token endpoint returned an OAuth2 error response (RFC 6749 §5.2).
    #[error("token endpoint returned '{error}'{}", describe(.description))]
    TokenResponse {
        /// The `error` code.
        error: String,
        /// The optional `error_description`.
        description: Option<String>,
    },

    /// A response could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

fn describe(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl OAuthError {
    /// Whether the failure is likely transient (network trouble or a 5xx).
    ///
    /// Strategies never retry on their own; this is for callers that do.
    pub fn is_transient(&self) -> bool {
        match self {
            OAuthError::Transport(_) => true,
            OAuthError::Status { status, .. } => *status >= 500,
            OAuthError::TokenResponse { .. } | OAuthError::InvalidResponse(_) => false,
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            OAuthError::Status { status, .. } => Some(*status),
            OAuthError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
