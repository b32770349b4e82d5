//! Refund operations on the global refunds collection.
//!
//! Refund creation is tied to a payment and lives on
//! [`Payments::refund`](crate::resources::Payments::refund); this module
//! only reads the flat `/refunds` collection.

use serde_json::Value;

use crate::{
    error::Result,
    http::{Params, RequestExecutor},
    resources::ListWindow,
};

fn refunds_path() -> String {
    "/refunds".to_owned()
}

fn refund_path(refund_id: &str) -> String {
    format!("/refunds/{refund_id}")
}

/// Refund operations, obtained from [`CentpayClient::refunds`].
///
/// [`CentpayClient::refunds`]: crate::client::CentpayClient::refunds
#[derive(Debug, Clone, Copy)]
pub struct Refunds<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Lists refunds across all payments: `GET /refunds`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn list(&self, window: ListWindow) -> Result<Value> {
        self.executor.get(&refunds_path(), window.into_params()).await
    }

    /// Fetches one refund: `GET /refunds/{id}`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn fetch(&self, refund_id: &str) -> Result<Value> {
        self.executor.get(&refund_path(refund_id), Params::new()).await
    }
}
