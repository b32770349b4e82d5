//! Error types for the Centpay client.
//!
//! Every fallible operation in this crate returns [`Result`], with
//! [`GatewayError`] covering the three ways a call can fail:
//!
//! - **Configuration** ([`GatewayError::Config`]): credentials or base URL
//!   rejected before any network I/O is attempted
//! - **Transport** ([`GatewayError::Transport`]): the HTTP call itself failed
//!   and no response was received
//! - **Decoding** ([`GatewayError::Decode`]): a response arrived but its body
//!   is not valid JSON
//!
//! HTTP status codes are deliberately *not* an error category. The gateway
//! reports application-level failures (bad request, missing entity, auth
//! rejection) inside a JSON error envelope, and that envelope is returned to
//! the caller as a successful decode. Callers inspect the payload's own
//! `error` fields to detect those conditions.

use thiserror::Error;

/// Result type alias for gateway operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that can occur when talking to the gateway.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP call could not complete.
    ///
    /// Wraps [`reqwest::Error`] and covers DNS failures, refused connections,
    /// TLS errors, and client-side timeouts. No response was received, so no
    /// body was parsed. The client never retries automatically; whether and
    /// when to retry is the caller's decision.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response was received but its body is not valid JSON.
    ///
    /// The gateway answers every request with a JSON document, including
    /// error responses, so a non-JSON body usually means the request never
    /// reached the gateway proper (a proxy error page, an HTML gateway
    /// timeout). The HTTP status of the offending response is kept for
    /// diagnostics.
    #[error("response body is not valid JSON (HTTP status {status}): {source}")]
    Decode {
        /// HTTP status of the response whose body failed to parse.
        status: u16,
        /// The underlying JSON parse failure.
        source: serde_json::Error,
    },

    /// Client configuration was rejected.
    ///
    /// Raised when credentials are missing or empty, or when the configured
    /// base URL does not parse. Always raised before any network I/O.
    #[error("invalid gateway configuration: {0}")]
    Config(String),

    /// A request URL could not be constructed from the base URL and path.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}
