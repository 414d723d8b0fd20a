//! Common test utilities for PayPal strategy integration tests.

use oauth_strategy_paypal::{PayPalStrategy, StrategyOptions};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the user-info endpoint on the mock server.
pub const USERINFO_PATH: &str = "/v1/identity/openidconnect/userinfo/";

/// Path of the token endpoint on the mock server.
pub const TOKEN_PATH: &str = "/v1/identity/openidconnect/tokenservice";

/// User-info body for the canonical test user.
pub const JARED: &str = r#"{"user_id": "123456789","name": "Jared Hanson","given_name": "Jared","family_name": "Hanson", "email": "jaredhanson@example.com" }"#;

/// Options pointing every endpoint at `server`.
pub fn options_for(server: &MockServer) -> StrategyOptions {
    let mut options = StrategyOptions::new("ABC123", "secret")
        .with_callback_url("https://www.example.net/auth/paypal/callback");
    options.authorization_url = Some(format!("{}/signin/authorize", server.uri()));
    options.token_url = Some(format!("{}{TOKEN_PATH}", server.uri()));
    options.user_profile_url = Some(format!("{}{USERINFO_PATH}", server.uri()));
    options
}

/// Base URL of a local port with no listener behind it.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Strategy pointed at `server`.
pub fn strategy_for(server: &MockServer) -> PayPalStrategy {
    PayPalStrategy::new(options_for(server)).unwrap()
}

/// Mount a user-info response that only matches a correctly authenticated request.
pub async fn mount_userinfo(server: &MockServer, token: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(USERINFO_PATH))
        .and(query_param("schema", "openid"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(response)
        .mount(server)
        .await;
}
