//! Application-side user resolution.

use crate::client::BoxFuture;

/// Error type an application returns from [`Verify::verify`].
pub type VerifyError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a completed login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome<U> {
    /// The application accepted the profile and resolved a user.
    Authenticated(U),
    /// The application rejected the credentials without an error.
    Rejected,
}

impl<U> AuthOutcome<U> {
    /// The resolved user, if authentication succeeded.
    pub fn user(self) -> Option<U> {
        match self {
            AuthOutcome::Authenticated(user) => Some(user),
            AuthOutcome::Rejected => None,
        }
    }

    /// Whether the application accepted the login.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated(_))
    }
}

/// Maps provider credentials and profile to an application user.
///
/// Return `Ok(Some(user))` to accept, `Ok(None)` to reject, and `Err` when
/// resolution itself failed (e.g. the user store is unavailable).
pub trait Verify<P>: Send + Sync {
    /// Application user type.
    type User: Send;

    /// Resolve a user from the tokens and normalized profile.
    fn verify(
        &self,
        access_token: String,
        refresh_token: Option<String>,
        profile: P,
    ) -> BoxFuture<'_, Result<Option<Self::User>, VerifyError>>;
}
