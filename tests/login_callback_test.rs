//! Login-callback hand-off against a live HTTP identity endpoint.

mod common;

use common::*;
use regionswitch::adapters::ReqwestHttpClient;
use regionswitch::config::SwitcherConfig;
use regionswitch::session::{CallbackOutcome, LoginCallback, RemoteTokenValidator};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOGIN_URL: &str = "https://auth.easyship.com/login";

async fn identity_server(status: u16, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/get_current_user"))
        .and(header("Authorization", "Bearer handoff-tok"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

fn callback(server: &MockServer, jar: &MemoryCookieJar, nav: &MockNavigator) -> LoginCallback {
    let config = SwitcherConfig::default()
        .with_validation_url(format!("{}/api/v1/users/get_current_user", server.uri()));
    let validator =
        RemoteTokenValidator::new(ReqwestHttpClient::new(), config.validation_url.clone());
    LoginCallback::new(
        &config,
        Arc::new(jar.clone()),
        Arc::new(validator),
        Arc::new(nav.clone()),
    )
}

#[tokio::test]
async fn test_valid_handoff_restores_session() {
    let server = identity_server(200, 1).await;
    let jar = MemoryCookieJar::new();
    jar.set_value("safeCredentials", "handoff-tok");
    let nav = MockNavigator::new(LOGIN_URL);

    let outcome = callback(&server, &jar, &nav).run().await;

    assert_eq!(outcome, CallbackOutcome::Restored);
    assert_eq!(jar.value("credentials"), Some("handoff-tok".to_string()));
    assert_eq!(
        nav.actions(),
        vec![NavAction::Navigate("https://app.easyship.com/dashboard".to_string())]
    );
}

#[tokio::test]
async fn test_rejected_handoff_clears_credential() {
    let server = identity_server(401, 1).await;
    let jar = MemoryCookieJar::new();
    jar.set_value("safeCredentials", "handoff-tok");
    let nav = MockNavigator::new(LOGIN_URL);

    let outcome = callback(&server, &jar, &nav).run().await;

    assert_eq!(outcome, CallbackOutcome::Rejected);
    assert_eq!(jar.value("credentials"), Some(String::new()));
    assert_eq!(jar.value("safeCredentials"), Some(String::new()));
    assert!(nav.actions().is_empty());
}

#[tokio::test]
async fn test_no_handoff_makes_no_request() {
    let server = identity_server(200, 0).await;
    let jar = MemoryCookieJar::new();
    let nav = MockNavigator::new(LOGIN_URL);

    let outcome = callback(&server, &jar, &nav).run().await;

    assert_eq!(outcome, CallbackOutcome::NoHandoffToken);
    assert!(jar.assignments().is_empty());
    server.verify().await;
}

#[tokio::test]
async fn test_unreachable_endpoint_counts_as_rejected() {
    let jar = MemoryCookieJar::new();
    jar.set_value("safeCredentials", "handoff-tok");
    let nav = MockNavigator::new(LOGIN_URL);

    let config = SwitcherConfig::default().with_validation_url("http://127.0.0.1:59998/me");
    let validator =
        RemoteTokenValidator::new(ReqwestHttpClient::new(), config.validation_url.clone());
    let callback = LoginCallback::new(
        &config,
        Arc::new(jar.clone()),
        Arc::new(validator),
        Arc::new(nav.clone()),
    );

    assert_eq!(callback.run().await, CallbackOutcome::Rejected);
    assert_eq!(jar.value("credentials"), Some(String::new()));
}
