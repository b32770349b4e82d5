//! Startup behavior when configuration comes from process environment.
//!
//! Kept in its own test binary: env mutation is process-global, and the
//! single test below owns the variables for its whole run.

use centpay::{
    CentpayClient, GatewayConfig,
    config::{ENV_BASE_URL, ENV_KEY_ID, ENV_KEY_SECRET},
};

#[test]
fn from_env_fails_fast_without_credentials() {
    unsafe {
        std::env::remove_var(ENV_KEY_ID);
        std::env::remove_var(ENV_KEY_SECRET);
        std::env::remove_var(ENV_BASE_URL);
    }

    // Missing credentials must fail initialization, not fall through to
    // empty Basic auth.
    assert!(GatewayConfig::from_env().is_err());
    assert!(CentpayClient::from_env().is_err());

    unsafe {
        std::env::set_var(ENV_KEY_ID, "key_live_abc123");
        std::env::set_var(ENV_KEY_SECRET, "");
    }
    // An empty secret is as fatal as a missing one.
    assert!(GatewayConfig::from_env().is_err());

    unsafe {
        std::env::set_var(ENV_KEY_SECRET, "topsecret");
        std::env::set_var(ENV_BASE_URL, "http://127.0.0.1:9400/v1");
    }
    let config = GatewayConfig::from_env().unwrap();
    assert_eq!(config.credentials.key_id, "key_live_abc123");
    assert_eq!(config.base_url, "http://127.0.0.1:9400/v1");
    assert!(CentpayClient::from_env().is_ok());

    unsafe {
        std::env::remove_var(ENV_KEY_ID);
        std::env::remove_var(ENV_KEY_SECRET);
        std::env::remove_var(ENV_BASE_URL);
    }
}
