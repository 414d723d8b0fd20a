//! The PayPal login strategy.

use oauth_strategy::{AuthOutcome, CodeExchange, HttpOAuth2Client, OAuth2Client, Verify};

use crate::config::StrategyOptions;
use crate::environment::EnvironmentConfig;
use crate::error::{Result, StrategyError};
use crate::profile::{self, NormalizedProfile, PROVIDER};

/// Authenticates users by delegating to PayPal over OAuth 2.0.
///
/// Construction validates the options and resolves the environment's
/// endpoints; an unknown environment fails here, before any request is made.
/// The OAuth2 primitives come from the injected [`OAuth2Client`].
#[derive(Debug, Clone)]
pub struct PayPalStrategy<C = HttpOAuth2Client> {
    options: StrategyOptions,
    endpoints: EnvironmentConfig,
    client: C,
}

impl PayPalStrategy<HttpOAuth2Client> {
    /// Create a strategy that talks HTTP through `reqwest`.
    pub fn new(options: StrategyOptions) -> Result<Self> {
        Self::with_client(options, HttpOAuth2Client::new())
    }
}

impl<C: OAuth2Client> PayPalStrategy<C> {
    /// Create a strategy around a specific OAuth2 client.
    pub fn with_client(options: StrategyOptions, client: C) -> Result<Self> {
        options.validate()?;
        let endpoints = options.endpoints()?;
        log::debug!(
            "Configured PayPal strategy for client '{}' (authorize: {})",
            options.client_id,
            endpoints.authorization_url
        );
        Ok(Self {
            options,
            endpoints,
            client,
        })
    }

    /// Strategy name.
    pub fn name(&self) -> &'static str {
        PROVIDER
    }

    /// Resolved endpoint URLs.
    pub fn endpoints(&self) -> &EnvironmentConfig {
        &self.endpoints
    }

    /// Options this strategy was built from.
    pub fn options(&self) -> &StrategyOptions {
        &self.options
    }

    /// The underlying OAuth2 client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// URL to send the user to for authorization.
    ///
    /// `state` is passed through untouched; generating and checking it is
    /// the caller's job.
    pub fn authorization_url(&self, state: Option<&str>) -> Result<String> {
        let mut url = reqwest::Url::parse(&self.endpoints.authorization_url).map_err(|e| {
            StrategyError::configuration(format!("authorizationURL option is not a valid URL: {e}"))
        })?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("response_type", "code")
                .append_pair("client_id", &self.options.client_id)
                .append_pair("scope", &self.options.scope_param());
            if let Some(callback_url) = self.options.callback_url.as_deref() {
                query.append_pair("redirect_uri", callback_url);
            }
            if let Some(state) = state {
                query.append_pair("state", state);
            }
        }
        Ok(url.into())
    }

    /// Retrieve and normalize the PayPal profile for `access_token`.
    pub async fn user_profile(&self, access_token: &str) -> Result<NormalizedProfile> {
        profile::fetch_profile(&self.client, access_token, &self.endpoints).await
    }

    /// Complete a login from the authorization code PayPal returned.
    ///
    /// Exchanges the code, loads the profile and hands both to `verify`.
    pub async fn authenticate<V>(&self, code: &str, verify: &V) -> Result<AuthOutcome<V::User>>
    where
        V: Verify<NormalizedProfile> + ?Sized,
    {
        let exchange = CodeExchange {
            token_url: self.endpoints.token_url.clone(),
            client_id: self.options.client_id.clone(),
            client_secret: self.options.client_secret.clone(),
            code: code.to_string(),
            redirect_uri: self.options.callback_url.clone(),
        };

        let grant = self.client.exchange_code(exchange).await.map_err(|source| {
            log::warn!("PayPal token exchange failed: {source}");
            StrategyError::TokenExchange { source }
        })?;

        let profile = self.user_profile(&grant.access_token).await?;
        let profile_id = profile.id.clone();

        let user = verify
            .verify(grant.access_token, grant.refresh_token, profile)
            .await
            .map_err(StrategyError::Verify)?;

        Ok(match user {
            Some(user) => {
                log::info!("PayPal user '{profile_id}' authenticated");
                AuthOutcome::Authenticated(user)
            }
            None => {
                log::info!("PayPal user '{profile_id}' rejected by verify callback");
                AuthOutcome::Rejected
            }
        })
    }
}
