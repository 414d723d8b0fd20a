//! User-info retrieval against a mock PayPal.

use oauth_strategy::{HttpOAuth2Client, OAuthError};
use oauth_strategy_paypal::{
    fetch_profile, EnvironmentConfig, PayPalStrategy, StrategyError, StrategyOptions,
};
use wiremock::{MockServer, ResponseTemplate};

use crate::common::{mount_userinfo, strategy_for, unreachable_base_url, JARED, USERINFO_PATH};

#[tokio::test]
async fn test_loads_profile() {
    let server = MockServer::start().await;
    mount_userinfo(&server, "access-token", ResponseTemplate::new(200).set_body_string(JARED)).await;

    let profile = strategy_for(&server).user_profile("access-token").await.unwrap();

    assert_eq!(profile.provider, "paypal");
    assert_eq!(profile.id, "123456789");
    assert_eq!(profile.display_name, "Jared Hanson");
    assert_eq!(profile.json["name"], "Jared Hanson");
    assert_eq!(profile.name.family_name.as_deref(), Some("Hanson"));
    assert_eq!(profile.name.given_name.as_deref(), Some("Jared"));
    assert_eq!(profile.emails[0], "jaredhanson@example.com");
    assert_eq!(profile.raw, JARED);
    assert!(profile.json.is_object());
}

#[tokio::test]
async fn test_strips_identity_prefix_from_real_user_id() {
    let server = MockServer::start().await;
    let body = r#"{"user_id": "https://www.paypal.com/webapps/auth/identity/user/123456789","name": "Jared Hanson","given_name": "Jared","family_name": "Hanson", "email": "jaredhanson@example.com" }"#;
    mount_userinfo(&server, "access-token", ResponseTemplate::new(200).set_body_string(body)).await;

    let profile = strategy_for(&server).user_profile("access-token").await.unwrap();
    assert_eq!(profile.id, "123456789");
}

#[tokio::test]
async fn test_unauthorized_is_fetch_error() {
    let server = MockServer::start().await;
    mount_userinfo(
        &server,
        "expired-token",
        ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid_token"}"#),
    )
    .await;

    let err = strategy_for(&server)
        .user_profile("expired-token")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StrategyError::ProfileFetch {
            source: OAuthError::Status { status: 401, .. }
        }
    ));
    assert_eq!(err.raw_body(), Some(r#"{"error":"invalid_token"}"#));
}

#[tokio::test]
async fn test_transport_failure_is_fetch_error() {
    let mut options = StrategyOptions::new("ABC123", "secret");
    options.user_profile_url = Some(format!("{}{USERINFO_PATH}", unreachable_base_url()));
    let strategy = PayPalStrategy::new(options).unwrap();

    let err = strategy.user_profile("access-token").await.unwrap_err();
    assert!(matches!(
        err,
        StrategyError::ProfileFetch {
            source: OAuthError::Transport(_)
        }
    ));
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let server = MockServer::start().await;
    mount_userinfo(
        &server,
        "access-token",
        ResponseTemplate::new(200).set_body_string("Hello, world."),
    )
    .await;

    let err = strategy_for(&server)
        .user_profile("access-token")
        .await
        .unwrap_err();

    assert!(matches!(err, StrategyError::ProfileParse { .. }));
    assert_eq!(err.raw_body(), Some("Hello, world."));
}

#[tokio::test]
async fn test_repeated_fetches_are_equal() {
    let server = MockServer::start().await;
    mount_userinfo(&server, "access-token", ResponseTemplate::new(200).set_body_string(JARED)).await;

    let strategy = strategy_for(&server);
    let first = strategy.user_profile("access-token").await.unwrap();
    let second = strategy.user_profile("access-token").await.unwrap();

    assert_eq!(first, second);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2, "profiles are never cached");
}

#[tokio::test]
async fn test_fetch_profile_with_custom_environment() {
    let server = MockServer::start().await;
    mount_userinfo(&server, "access-token", ResponseTemplate::new(200).set_body_string(JARED)).await;

    let env = EnvironmentConfig {
        authorization_url: format!("{}/signin/authorize", server.uri()),
        token_url: format!("{}/token", server.uri()),
        user_profile_url: format!("{}{USERINFO_PATH}", server.uri()),
    };
    let profile = fetch_profile(&HttpOAuth2Client::new(), "access-token", &env)
        .await
        .unwrap();
    assert_eq!(profile.id, "123456789");
}
