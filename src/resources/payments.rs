//! Payment operations, including per-payment refunds.

use serde_json::Value;

use crate::{
    error::Result,
    http::{Params, RequestExecutor},
    resources::ListWindow,
};

fn payments_path() -> String {
    "/payments".to_owned()
}

fn payment_path(payment_id: &str) -> String {
    format!("/payments/{payment_id}")
}

fn capture_path(payment_id: &str) -> String {
    format!("/payments/{payment_id}/capture")
}

fn refund_path(payment_id: &str) -> String {
    format!("/payments/{payment_id}/refund")
}

fn payment_refunds_path(payment_id: &str) -> String {
    format!("/payments/{payment_id}/refunds")
}

fn payment_refund_path(payment_id: &str, refund_id: &str) -> String {
    format!("/payments/{payment_id}/refunds/{refund_id}")
}

/// Payment operations, obtained from [`CentpayClient::payments`].
///
/// [`CentpayClient::payments`]: crate::client::CentpayClient::payments
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Lists payments: `GET /payments`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn list(&self, window: ListWindow) -> Result<Value> {
        self.executor.get(&payments_path(), window.into_params()).await
    }

    /// Fetches one payment: `GET /payments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn fetch(&self, payment_id: &str) -> Result<Value> {
        self.executor.get(&payment_path(payment_id), Params::new()).await
    }

    /// Captures an authorized payment: `POST /payments/{id}/capture`.
    ///
    /// `amount` is in the currency's smallest unit and must equal the
    /// authorized amount; the gateway rejects mismatches in its error
    /// envelope.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn capture(&self, payment_id: &str, amount: i64) -> Result<Value> {
        self.executor.post(&capture_path(payment_id), vec![("amount", amount.into())]).await
    }

    /// Refunds a captured payment: `POST /payments/{id}/refund`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn refund(&self, payment_id: &str, amount: i64) -> Result<Value> {
        self.executor.post(&refund_path(payment_id), vec![("amount", amount.into())]).await
    }

    /// Lists refunds of one payment: `GET /payments/{id}/refunds`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn refunds(&self, payment_id: &str, window: ListWindow) -> Result<Value> {
        self.executor.get(&payment_refunds_path(payment_id), window.into_params()).await
    }

    /// Fetches one refund of one payment:
    /// `GET /payments/{id}/refunds/{refund_id}`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn fetch_refund(&self, payment_id: &str, refund_id: &str) -> Result<Value> {
        self.executor.get(&payment_refund_path(payment_id, refund_id), Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_paths() {
        assert_eq!(payments_path(), "/payments");
        assert_eq!(payment_path("pay_29QQoUBi66xm2f"), "/payments/pay_29QQoUBi66xm2f");
        assert_eq!(
            capture_path("pay_29QQoUBi66xm2f"),
            "/payments/pay_29QQoUBi66xm2f/capture"
        );
        assert_eq!(
            refund_path("pay_29QQoUBi66xm2f"),
            "/payments/pay_29QQoUBi66xm2f/refund"
        );
        assert_eq!(
            payment_refunds_path("pay_29QQoUBi66xm2f"),
            "/payments/pay_29QQoUBi66xm2f/refunds"
        );
        assert_eq!(
            payment_refund_path("pay_29QQoUBi66xm2f", "rfnd_FP8QHiV938haTz"),
            "/payments/pay_29QQoUBi66xm2f/refunds/rfnd_FP8QHiV938haTz"
        );
    }
}
