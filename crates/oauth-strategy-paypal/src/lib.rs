//! PayPal OAuth 2.0 / OpenID Connect strategy.
//!
//! Composes [`oauth_strategy::OAuth2Client`] with two PayPal-specific pieces:
//! - [`environment`]: `live` / `sandbox` endpoint resolution
//! - [`profile`]: user-info retrieval and profile normalization
//!
//! ```no_run
//! use oauth_strategy_paypal::{PayPalStrategy, StrategyOptions};
//!
//! # async fn run() -> oauth_strategy_paypal::Result<()> {
//! let strategy = PayPalStrategy::new(
//!     StrategyOptions::new("ABC123", "secret")
//!         .with_callback_url("https://www.example.net/auth/paypal/callback")
//!         .with_environment("sandbox"),
//! )?;
//! let profile = strategy.user_profile("access-token").await?;
//! println!("{} <{}>", profile.display_name, profile.id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod profile;
mod strategy;

pub use config::StrategyOptions;
pub use environment::{resolve, Environment, EnvironmentConfig};
pub use error::{Result, StrategyError};
pub use profile::{fetch_profile, normalize, NormalizedProfile, ProfileName, PAYPAL_IDENTITY_PREFIX};
pub use strategy::PayPalStrategy;

pub use oauth_strategy::{AuthOutcome, Verify, VerifyError};
