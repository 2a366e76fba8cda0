//! CLI integration tests over the file-backed store.

use regionswitch::adapters::FileKeyValueStore;
use regionswitch::cli::{execute, parse_args, CliCommand, CliContext};
use regionswitch::config::SwitcherConfig;
use regionswitch::error::SwitchError;
use regionswitch::traits::KeyValueStore;
use tempfile::TempDir;
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn args(list: &[&str]) -> CliCommand {
    let mut full = vec!["regionswitch".to_string()];
    full.extend(list.iter().map(|a| a.to_string()));
    parse_args(full.into_iter()).unwrap()
}

fn context(temp_dir: &TempDir, validate_url: &str) -> CliContext {
    let config = SwitcherConfig::default()
        .with_store_path(temp_dir.path().join("storage.json"))
        .with_validation_url(validate_url);
    CliContext::from_config(config).unwrap()
}

#[tokio::test]
async fn test_store_persists_across_contexts() {
    let temp_dir = TempDir::new().unwrap();

    let ctx = context(&temp_dir, "http://127.0.0.1:1/unused");
    execute(args(&["store", "hk", "hk-secret"]), &ctx).await.unwrap();

    // A fresh context reads the same file
    let ctx = context(&temp_dir, "http://127.0.0.1:1/unused");
    let listing = execute(args(&["tokens"]), &ctx).await.unwrap();
    assert_eq!(listing, "HK  hk-s…");

    let file = FileKeyValueStore::new(temp_dir.path().join("storage.json"));
    let raw = file.get("region_sessions").unwrap().unwrap();
    assert_eq!(raw, r#"{"HK":"hk-secret"}"#);
    // The hand-off carrier is kept alongside the map
    assert!(file.get("cookie:safeCredentials").unwrap().is_some());
}

#[tokio::test]
async fn test_validate_against_identity_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Authorization", "Bearer gb-good"))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let ctx = context(&temp_dir, &format!("{}/me", server.uri()));
    execute(args(&["store", "GB", "gb-good"]), &ctx).await.unwrap();
    execute(args(&["store", "NL", "nl-bad"]), &ctx).await.unwrap();

    let ok = execute(args(&["validate", "GB"]), &ctx).await.unwrap();
    assert_eq!(ok, "GB: token gb-g… is valid");

    let rejected = execute(args(&["validate", "NL"]), &ctx).await;
    assert!(matches!(rejected, Err(SwitchError::TokenRejected)));
}

#[tokio::test]
async fn test_resolve_uses_configured_regions() {
    let temp_dir = TempDir::new().unwrap();
    let config = SwitcherConfig::from_lookup(|key| match key {
        "REGIONSWITCH_REGIONS" => Some("de,fr".to_string()),
        "REGIONSWITCH_MARKER_PREFIX" => Some("X".to_string()),
        _ => None,
    })
    .with_store_path(temp_dir.path().join("storage.json"));
    let ctx = CliContext::from_config(config).unwrap();

    let out = execute(args(&["resolve", "https://app.example.com/?XFR&ESGB"]), &ctx)
        .await
        .unwrap();
    assert_eq!(out, "FR");

    let out = execute(
        args(&["resolve", "https://app.example.com/?ESGB", "--current", "DE"]),
        &ctx,
    )
    .await
    .unwrap();
    assert_eq!(out, "DE (no switch)");
}

#[test]
fn test_parse_errors_are_configuration_errors() {
    let parsed = parse_args(vec!["regionswitch".to_string(), "frobnicate".to_string()].into_iter());
    let err = parsed.unwrap_err();
    assert!(matches!(err, SwitchError::Config(_)));
    assert!(err.to_string().contains("frobnicate"));
}
