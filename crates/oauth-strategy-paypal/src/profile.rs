//! PayPal user-info retrieval and profile normalization.
//!
//! The canonical upstream contract is the flat OpenID Connect user-info
//! object (`user_id`, `name`, `given_name`, `family_name`, `email`). Older
//! payload shapes that nest identity fields or return email arrays are not
//! recognised; their fields are still available through
//! [`NormalizedProfile::json`].

use oauth_strategy::OAuth2Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::environment::EnvironmentConfig;
use crate::error::{Result, StrategyError};

/// Provider name reported on every profile.
pub const PROVIDER: &str = "paypal";

/// Prefix PayPal puts in front of `user_id` in some responses.
pub const PAYPAL_IDENTITY_PREFIX: &str = "https://www.paypal.com/webapps/auth/identity/user/";

/// Fields of the user-info payload the normalizer reads.
#[derive(Debug, Default, Deserialize)]
struct UserInfo {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    given_name: Option<String>,
    #[serde(default)]
    family_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// Structured name parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Full display form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

/// A PayPal user profile in the common provider-neutral shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
    /// Always `"paypal"`.
    pub provider: String,
    /// PayPal user identifier, without [`PAYPAL_IDENTITY_PREFIX`]. Empty when absent.
    pub id: String,
    /// Human readable name. Empty when the payload carries no name.
    pub display_name: String,
    /// Name parts.
    pub name: ProfileName,
    /// Email addresses.
    pub emails: Vec<String>,
    /// The response body exactly as received.
    #[serde(rename = "_raw")]
    pub raw: String,
    /// The parsed response body.
    #[serde(rename = "_json")]
    pub json: Value,
}

/// Remove [`PAYPAL_IDENTITY_PREFIX`] from a user identifier.
pub fn strip_identity_prefix(user_id: &str) -> &str {
    user_id
        .strip_prefix(PAYPAL_IDENTITY_PREFIX)
        .unwrap_or(user_id)
}

/// Parse a user-info response body and build the normalized profile.
pub fn normalize(body: &str) -> Result<NormalizedProfile> {
    let parse_error = |source| StrategyError::ProfileParse {
        source,
        body: body.to_string(),
    };

    let json: Value = serde_json::from_str(body).map_err(parse_error)?;
    if !json.is_object() {
        return Err(parse_error(<serde_json::Error as serde::de::Error>::custom(
            "user info is not a JSON object",
        )));
    }
    let info = UserInfo::deserialize(&json).map_err(parse_error)?;

    let full_name = info.name.as_deref().filter(|name| !name.is_empty());
    let display_name = match (full_name, &info.given_name, &info.family_name) {
        (Some(name), _, _) => name.to_string(),
        (None, Some(given), Some(family)) => format!("{given} {family}"),
        (None, Some(given), None) => given.clone(),
        (None, None, Some(family)) => family.clone(),
        (None, None, None) => String::new(),
    };

    let name = ProfileName {
        family_name: info.family_name,
        given_name: info.given_name,
        formatted: (!display_name.is_empty()).then(|| display_name.clone()),
    };

    Ok(NormalizedProfile {
        provider: PROVIDER.to_string(),
        id: info
            .user_id
            .as_deref()
            .map(strip_identity_prefix)
            .unwrap_or_default()
            .to_string(),
        display_name,
        name,
        emails: info.email.into_iter().collect(),
        raw: body.to_string(),
        json,
    })
}

/// Build the user-info request URL.
///
/// `schema=openid` is appended unless the configured URL already sets `schema`.
pub fn user_info_url(env: &EnvironmentConfig) -> Result<String> {
    let mut url = reqwest::Url::parse(&env.user_profile_url).map_err(|e| {
        StrategyError::configuration(format!("userProfileURL option is not a valid URL: {e}"))
    })?;
    if !url.query_pairs().any(|(key, _)| key == "schema") {
        url.query_pairs_mut().append_pair("schema", "openid");
    }
    Ok(url.into())
}

/// Fetch the authenticated user's profile and normalize it.
///
/// Performs exactly one request; failures are returned, never retried.
pub async fn fetch_profile<C>(
    client: &C,
    access_token: &str,
    env: &EnvironmentConfig,
) -> Result<NormalizedProfile>
where
    C: OAuth2Client + ?Sized,
{
    let url = user_info_url(env)?;
    log::debug!("Fetching PayPal user profile from {url}");

    let resource = client
        .get_protected_resource(&url, access_token)
        .await
        .map_err(|source| {
            log::warn!("PayPal user profile request failed: {source}");
            StrategyError::ProfileFetch { source }
        })?;

    normalize(&resource.body)
}
