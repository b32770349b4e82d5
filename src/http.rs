//! The request executor: one HTTP call per invocation, uniform response
//! normalization.
//!
//! Every resource operation in this crate funnels through
//! [`RequestExecutor::get`] or [`RequestExecutor::post`], which share one
//! execution path:
//!
//! 1. joins the configured base URL with the resource path, appending the
//!    query pairs in the order they were supplied (no sorting),
//! 2. attaches HTTP Basic auth from the configured credentials,
//! 3. sends exactly one request, and
//! 4. parses whatever body comes back as JSON, **regardless of HTTP status
//!    code**.
//!
//! The status-code-agnostic step 4 mirrors the gateway's own contract: error
//! responses carry a JSON error envelope, and the caller inspects it. Only a
//! transport failure (no response at all) or a non-JSON body produce an
//! `Err`. There are no retries and no executor-level timeouts; the underlying
//! [`reqwest::Client`] defaults govern.

use std::{borrow::Cow, sync::LazyLock};

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    config::{Credentials, GatewayConfig},
    error::{GatewayError, Result},
};

/// Default HTTP client shared by all executors.
///
/// A singleton keeps reqwest's connection pool shared across every client
/// constructed with [`RequestExecutor::new`].
static DEFAULT_HTTP_CLIENT: LazyLock<Client> =
    LazyLock::new(|| Client::builder().build().expect("failed to build default HTTP client"));

/// HTTP methods used by the gateway surface.
///
/// The REST API only ever reads with GET and writes with form-encoded POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read operation; parameters travel in the query string.
    Get,
    /// Write operation; parameters travel as a form-encoded body.
    Post,
}

impl Method {
    /// Returns the wire name of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A scalar request parameter value.
///
/// Values stringify without loss: integers in decimal, booleans as `1`/`0`
/// (the gateway's wire convention for flags such as `payment_capture` and
/// `authorized`).
///
/// # Examples
///
/// ```
/// use centpay::ParamValue;
///
/// assert_eq!(ParamValue::from(42i64).to_query(), "42");
/// assert_eq!(ParamValue::from(true).to_query(), "1");
/// assert_eq!(ParamValue::from(false).to_query(), "0");
/// assert_eq!(ParamValue::from("zap453").to_query(), "zap453");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// String value, passed through verbatim (percent-encoding happens at
    /// URL-construction time).
    Str(String),
    /// Integer value, rendered in decimal.
    Int(i64),
    /// Boolean flag, rendered as `1` or `0`.
    Bool(bool),
}

impl ParamValue {
    /// Renders the value as it appears on the wire.
    #[must_use]
    pub fn to_query(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Bool(true) => Cow::Borrowed("1"),
            Self::Bool(false) => Cow::Borrowed("0"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Insertion-ordered request parameters.
///
/// Parameter names in the gateway surface are fixed string literals; order is
/// preserved all the way to the wire.
pub type Params = Vec<(&'static str, ParamValue)>;

/// Stateless executor for gateway calls.
///
/// Holds the configured base URL, the credential pair, and a
/// [`reqwest::Client`]. Each call is an independent request/response cycle;
/// there is no cross-call state, so a single executor may be used from many
/// tasks concurrently.
///
/// # Examples
///
/// ```
/// use centpay::{Credentials, GatewayConfig, RequestExecutor};
///
/// let config = GatewayConfig::new(Credentials::new("key_live_abc123", "topsecret")?);
/// let executor = RequestExecutor::new(&config)?;
/// # Ok::<(), centpay::GatewayError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl RequestExecutor {
    /// Creates an executor using the shared default HTTP client.
    ///
    /// Validates the configuration first, so empty credentials or a
    /// malformed base URL fail here, before any request can be issued.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if validation fails.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        Self::with_client(config, DEFAULT_HTTP_CLIENT.clone())
    }

    /// Creates an executor with a caller-supplied HTTP client.
    ///
    /// Use this to control pooling, timeouts, or proxies; the executor
    /// itself adds no policy of its own.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if validation fails.
    pub fn with_client(config: &GatewayConfig, client: Client) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            GatewayError::Config(format!("invalid base_url '{}': {e}", config.base_url))
        })?;

        Ok(Self { client, base_url, credentials: config.credentials.clone() })
    }

    /// Issues a GET request and decodes the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if no response was received, or
    /// [`GatewayError::Decode`] if the body is not valid JSON.
    pub async fn get(&self, path: &str, query: Params) -> Result<serde_json::Value> {
        self.execute(Method::Get, path, &query, None).await
    }

    /// Issues a form-encoded POST request and decodes the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if no response was received, or
    /// [`GatewayError::Decode`] if the body is not valid JSON.
    pub async fn post(&self, path: &str, form: Params) -> Result<serde_json::Value> {
        self.execute(Method::Post, path, &Params::new(), Some(&form)).await
    }

    /// Executes a single request/response cycle.
    #[instrument(skip(self, query, form))]
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &Params,
        form: Option<&Params>,
    ) -> Result<serde_json::Value> {
        let url = self.build_url(path, query)?;

        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        request = request
            .basic_auth(&self.credentials.key_id, Some(&self.credentials.key_secret));

        if let Some(form) = form {
            let pairs: Vec<(&str, String)> =
                form.iter().map(|(key, value)| (*key, value.to_query().into_owned())).collect();
            request = request.form(&pairs);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        debug!(status, path, "gateway response received");

        // Any received response is decoded as JSON, 4xx/5xx included; the
        // gateway's error envelope is data, not a transport failure.
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| GatewayError::Decode { status, source })
    }

    /// Joins base URL and path, appending query pairs in supplied order.
    ///
    /// An empty `query` leaves the path untouched (no trailing `?`).
    fn build_url(&self, path: &str, query: &Params) -> Result<Url> {
        let full = format!("{}{path}", self.base_url.as_str().trim_end_matches('/'));
        let mut url = Url::parse(&full)
            .map_err(|e| GatewayError::InvalidUrl(format!("'{full}': {e}")))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, &value.to_query());
            }
        }

        Ok(url)
    }
}
