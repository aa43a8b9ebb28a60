//! Builder-only tests (no env, no files).

use std::time::Duration;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use secrecy::ExposeSecret;

#[test]
fn test_builder_with_token() {
    let config = ConfigLoader::new()
        .with_base_url("http://localhost:8000".to_string())
        .with_api_token("abc123".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "http://localhost:8000");
    assert_eq!(config.connection.api_root, "/api/");
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert_eq!(config.connection.max_retries, 3);
    assert!(config.fetch_root_on_startup);
    match config.auth.strategy {
        AuthStrategy::ApiToken { token } => assert_eq!(token.expose_secret(), "abc123"),
        _ => panic!("Expected ApiToken"),
    }
}

#[test]
fn test_token_takes_precedence_over_basic() {
    let config = ConfigLoader::new()
        .with_base_url("http://localhost:8000".to_string())
        .with_username("clerk".to_string())
        .with_password("pw".to_string())
        .with_api_token("abc123".to_string())
        .build()
        .unwrap();

    assert!(matches!(config.auth.strategy, AuthStrategy::ApiToken { .. }));
}

#[test]
fn test_builder_with_basic_auth() {
    let config = ConfigLoader::new()
        .with_base_url("http://localhost:8000".to_string())
        .with_username("clerk".to_string())
        .with_password("pw".to_string())
        .with_api_root("inventory/api".to_string())
        .with_fetch_root(false)
        .build()
        .unwrap();

    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::Basic { ref username, .. } if username == "clerk"
    ));
    assert_eq!(config.connection.api_root, "/inventory/api/");
    assert_eq!(
        config.api_root_url(),
        "http://localhost:8000/inventory/api/"
    );
    assert!(!config.fetch_root_on_startup);
}

#[test]
fn test_missing_base_url() {
    let err = ConfigLoader::new()
        .with_api_token("abc".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingBaseUrl));
}

#[test]
fn test_username_without_password_is_missing_auth() {
    let err = ConfigLoader::new()
        .with_base_url("http://localhost:8000".to_string())
        .with_username("clerk".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingAuth));
}
