//! Gateway configuration and credentials.
//!
//! Credentials are read once at startup and injected into the client; there
//! is no ambient global state. Construction fails fast when either credential
//! field is missing or empty, so no request can ever be sent with blank
//! Basic auth.

use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::error::{GatewayError, Result};

/// Default production endpoint for the Centpay REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.centpay.com/v1";

/// Environment variable holding the API key identifier.
pub const ENV_KEY_ID: &str = "CENTPAY_KEY_ID";

/// Environment variable holding the API key secret.
pub const ENV_KEY_SECRET: &str = "CENTPAY_KEY_SECRET";

/// Environment variable overriding the API base URL (sandbox or stub
/// environments).
pub const ENV_BASE_URL: &str = "CENTPAY_BASE_URL";

/// API key pair used as HTTP Basic auth on every call.
///
/// The key identifier becomes the Basic auth username and the secret the
/// password. Both fields must be non-empty; [`Credentials::validate`] is
/// called during client construction, before any network I/O.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// Key identifier (Basic auth username).
    pub key_id: String,
    /// Key secret (Basic auth password).
    pub key_secret: String,
}

impl Credentials {
    /// Creates a validated credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if either field is empty or
    /// whitespace-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use centpay::Credentials;
    ///
    /// let credentials = Credentials::new("key_live_abc123", "topsecret").unwrap();
    /// assert_eq!(credentials.key_id, "key_live_abc123");
    ///
    /// assert!(Credentials::new("key_live_abc123", "").is_err());
    /// ```
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Result<Self> {
        let credentials = Self { key_id: key_id.into(), key_secret: key_secret.into() };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Validates that both fields are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.key_id.trim().is_empty() {
            return Err(GatewayError::Config("key_id must not be empty".to_owned()));
        }
        if self.key_secret.trim().is_empty() {
            return Err(GatewayError::Config("key_secret must not be empty".to_owned()));
        }
        Ok(())
    }
}

// The secret never appears in logs or debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .finish()
    }
}

/// Client configuration: credentials plus the API base URL.
///
/// Deserializable so it can be embedded in an application's own
/// configuration file; `base_url` defaults to [`DEFAULT_BASE_URL`] when
/// omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// API key pair.
    pub credentials: Credentials,

    /// Base URL for all requests, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl GatewayConfig {
    /// Creates a configuration with the default production base URL.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials, base_url: default_base_url() }
    }

    /// Reads configuration from process environment.
    ///
    /// `CENTPAY_KEY_ID` and `CENTPAY_KEY_SECRET` are required; startup fails
    /// when either is unset or empty. `CENTPAY_BASE_URL` optionally overrides
    /// the endpoint for sandbox or stub environments.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if a required variable is missing or
    /// the resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        let key_id = require_env(ENV_KEY_ID)?;
        let key_secret = require_env(ENV_KEY_SECRET)?;
        let base_url = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| default_base_url());

        let config = Self { credentials: Credentials { key_id, key_secret }, base_url };
        config.validate()?;
        Ok(config)
    }

    /// Validates credentials and base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if credentials are empty, the base
    /// URL does not parse, or its scheme is not HTTP(S).
    pub fn validate(&self) -> Result<()> {
        self.credentials.validate()?;

        let url = Url::parse(&self.base_url).map_err(|e| {
            GatewayError::Config(format!("invalid base_url '{}': {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayError::Config(format!(
                "base_url must use http or https, got: {}",
                url.scheme()
            )));
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(GatewayError::Config(format!(
            "required environment variable {name} is missing or empty"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new_valid() {
        let credentials = Credentials::new("key_live_abc123", "topsecret").unwrap();
        assert_eq!(credentials.key_id, "key_live_abc123");
        assert_eq!(credentials.key_secret, "topsecret");
    }

    #[test]
    fn test_credentials_empty_key_id_rejected() {
        let result = Credentials::new("", "topsecret");
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_credentials_empty_secret_rejected() {
        let result = Credentials::new("key_live_abc123", "");
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_credentials_whitespace_only_rejected() {
        assert!(Credentials::new("   ", "topsecret").is_err());
        assert!(Credentials::new("key_live_abc123", "  \t").is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("key_live_abc123", "topsecret").unwrap();
        let debug = format!("{credentials:?}");
        assert!(debug.contains("key_live_abc123"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("topsecret"));
    }

    #[test]
    fn test_config_default_base_url() {
        let credentials = Credentials::new("key_live_abc123", "topsecret").unwrap();
        let config = GatewayConfig::new(credentials);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_invalid_base_url() {
        let credentials = Credentials::new("key_live_abc123", "topsecret").unwrap();
        let config = GatewayConfig { credentials, base_url: "not a url".to_owned() };
        assert!(matches!(config.validate(), Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_config_rejects_non_http_scheme() {
        let credentials = Credentials::new("key_live_abc123", "topsecret").unwrap();
        let config = GatewayConfig { credentials, base_url: "ftp://api.centpay.com".to_owned() };
        assert!(matches!(config.validate(), Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_config_allows_http_for_stub_servers() {
        let credentials = Credentials::new("key_live_abc123", "topsecret").unwrap();
        let config =
            GatewayConfig { credentials, base_url: "http://127.0.0.1:9400/v1".to_owned() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserializes_with_default_base_url() {
        let config: GatewayConfig = serde_json::from_str(
            r#"{"credentials": {"key_id": "key_live_abc123", "key_secret": "topsecret"}}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.credentials.key_id, "key_live_abc123");
    }
}
