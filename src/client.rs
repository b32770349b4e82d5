//! The top-level client handle.

use reqwest::Client;

use crate::{
    config::GatewayConfig,
    error::Result,
    http::RequestExecutor,
    resources::{Orders, Payments, Refunds},
};

/// Client for the Centpay REST API.
///
/// Owns a single [`RequestExecutor`]; the resource accessors are cheap views
/// over it. The client is `Clone` and holds no mutable state, so one instance
/// can serve any number of concurrent calls.
///
/// # Examples
///
/// ```rust,no_run
/// use centpay::{CentpayClient, CreateOrder};
///
/// # async fn example() -> centpay::Result<()> {
/// let client = CentpayClient::from_env()?;
///
/// let order = client
///     .orders()
///     .create(CreateOrder {
///         amount: 10_000,
///         currency: "INR".to_owned(),
///         receipt: Some("zap453".to_owned()),
///         payment_capture: true,
///     })
///     .await?;
///
/// println!("created: {order}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CentpayClient {
    executor: RequestExecutor,
}

impl CentpayClient {
    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`](crate::GatewayError::Config) if the
    /// configuration fails validation.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        Ok(Self { executor: RequestExecutor::new(config)? })
    }

    /// Creates a client from process environment.
    ///
    /// See [`GatewayConfig::from_env`] for the variables read. Initialization
    /// fails fast when credentials are absent; the client never falls back to
    /// empty Basic auth.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`](crate::GatewayError::Config) if a
    /// required variable is missing or validation fails.
    pub fn from_env() -> Result<Self> {
        Self::new(&GatewayConfig::from_env()?)
    }

    /// Creates a client with a caller-supplied [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`](crate::GatewayError::Config) if the
    /// configuration fails validation.
    pub fn with_http_client(config: &GatewayConfig, client: Client) -> Result<Self> {
        Ok(Self { executor: RequestExecutor::with_client(config, client)? })
    }

    /// Order operations.
    #[must_use]
    pub fn orders(&self) -> Orders<'_> {
        Orders::new(&self.executor)
    }

    /// Payment operations.
    #[must_use]
    pub fn payments(&self) -> Payments<'_> {
        Payments::new(&self.executor)
    }

    /// Refund operations.
    #[must_use]
    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(&self.executor)
    }
}
