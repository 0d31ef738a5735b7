use std::env;
use std::time::Duration;
use storefront_client::application::config::Config;
use storefront_client::constants::{DEFAULT_LOGIN_TIMEOUT_SECS, DEFAULT_PUBLIC_URL};

#[test]
fn test_config_with_base_url_uses_defaults() {
    let config = Config::with_base_url("http://127.0.0.1:8080/");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.public_url, DEFAULT_PUBLIC_URL);
    assert_eq!(
        config.login_timeout(),
        Duration::from_secs(DEFAULT_LOGIN_TIMEOUT_SECS)
    );
    assert_eq!(config.session.token_file, None);
}

#[test]
fn test_config_reads_environment() {
    unsafe {
        env::set_var("STOREFRONT_API_BASE_URL", "https://api.checkout.tech/");
        env::set_var("STOREFRONT_PUBLIC_URL", "https://checkout.tech");
        env::set_var("STOREFRONT_LOGIN_TIMEOUT_SECS", "9");
        env::set_var("STOREFRONT_POLL_INTERVAL_SECS", "2");
        env::set_var("STOREFRONT_POLL_MAX_ATTEMPTS", "10");
        env::set_var("STOREFRONT_TOKEN_FILE", "/tmp/storefront-token.json");

        let config = Config::new();

        env::remove_var("STOREFRONT_API_BASE_URL");
        env::remove_var("STOREFRONT_PUBLIC_URL");
        env::remove_var("STOREFRONT_LOGIN_TIMEOUT_SECS");
        env::remove_var("STOREFRONT_POLL_INTERVAL_SECS");
        env::remove_var("STOREFRONT_POLL_MAX_ATTEMPTS");
        env::remove_var("STOREFRONT_TOKEN_FILE");

        assert_eq!(config.rest_api.base_url, "https://api.checkout.tech");
        assert_eq!(config.public_url, "https://checkout.tech");
        assert_eq!(config.login_timeout(), Duration::from_secs(9));
        assert_eq!(config.poll_interval(), Duration::from_secs(2));
        assert_eq!(config.polling.max_attempts, 10);
        assert_eq!(
            config.session.token_file.as_deref(),
            Some("/tmp/storefront-token.json")
        );
    }
}

#[test]
fn test_config_token_store_defaults_to_memory() {
    let config = Config::with_base_url("http://localhost:5000");
    let store = config.token_store();
    assert!(!store.has_token());
    store.set_token("abc").unwrap();
    assert_eq!(store.token().as_deref(), Some("abc"));
}

#[test]
fn test_config_display_is_json() {
    let config = Config::with_base_url("http://localhost:5000");
    let rendered = config.to_string();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["rest_api"]["base_url"], "http://localhost:5000");
}
