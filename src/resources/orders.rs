//! Order operations.

use serde_json::Value;

use crate::{
    error::Result,
    http::{Params, RequestExecutor},
    resources::ListWindow,
};

fn orders_path() -> String {
    "/orders".to_owned()
}

fn order_path(order_id: &str) -> String {
    format!("/orders/{order_id}")
}

fn order_payments_path(order_id: &str) -> String {
    format!("/orders/{order_id}/payments")
}

/// Filters for [`Orders::list`].
#[derive(Debug, Clone, Default)]
pub struct ListOrders {
    /// Pagination window.
    pub window: ListWindow,
    /// Only orders for which at least one authorized payment exists (`true`)
    /// or none does (`false`).
    pub authorized: Option<bool>,
    /// Only the order carrying this receipt identifier.
    pub receipt: Option<String>,
}

impl ListOrders {
    /// Query parameters in the gateway's documented order:
    /// `from, to, count, skip, authorized, receipt`.
    fn into_params(self) -> Params {
        let mut params = self.window.into_params();
        if let Some(authorized) = self.authorized {
            params.push(("authorized", authorized.into()));
        }
        if let Some(receipt) = self.receipt {
            params.push(("receipt", receipt.into()));
        }
        params
    }
}

/// Fields for [`Orders::create`].
#[derive(Debug, Clone)]
pub struct CreateOrder {
    /// Amount in the currency's smallest unit (e.g. paise for INR).
    pub amount: i64,
    /// ISO currency code, e.g. `INR`.
    pub currency: String,
    /// Merchant-side receipt identifier.
    pub receipt: Option<String>,
    /// Capture payments automatically (`1` on the wire) or leave them for
    /// manual capture (`0`).
    pub payment_capture: bool,
}

impl CreateOrder {
    /// Form fields in the gateway's documented order:
    /// `amount, currency, receipt, payment_capture`.
    fn into_form(self) -> Params {
        let mut form = Params::new();
        form.push(("amount", self.amount.into()));
        form.push(("currency", self.currency.into()));
        if let Some(receipt) = self.receipt {
            form.push(("receipt", receipt.into()));
        }
        form.push(("payment_capture", self.payment_capture.into()));
        form
    }
}

/// Order operations, obtained from [`CentpayClient::orders`].
///
/// [`CentpayClient::orders`]: crate::client::CentpayClient::orders
#[derive(Debug, Clone, Copy)]
pub struct Orders<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Lists orders: `GET /orders`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn list(&self, options: ListOrders) -> Result<Value> {
        self.executor.get(&orders_path(), options.into_params()).await
    }

    /// Fetches one order: `GET /orders/{id}`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn fetch(&self, order_id: &str) -> Result<Value> {
        self.executor.get(&order_path(order_id), Params::new()).await
    }

    /// Creates an order: `POST /orders` with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn create(&self, order: CreateOrder) -> Result<Value> {
        self.executor.post(&orders_path(), order.into_form()).await
    }

    /// Lists payments made against an order: `GET /orders/{id}/payments`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails in transport or the response body is
    /// not valid JSON.
    pub async fn payments(&self, order_id: &str) -> Result<Value> {
        self.executor.get(&order_payments_path(order_id), Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ParamValue;

    #[test]
    fn test_order_paths() {
        assert_eq!(orders_path(), "/orders");
        assert_eq!(order_path("order_H8a23xyz"), "/orders/order_H8a23xyz");
        assert_eq!(
            order_payments_path("order_H8a23xyz"),
            "/orders/order_H8a23xyz/payments"
        );
    }

    #[test]
    fn test_list_orders_param_order() {
        let options = ListOrders {
            window: ListWindow { from: Some(1), to: Some(2), count: Some(3), skip: Some(4) },
            authorized: Some(true),
            receipt: Some("zap453".to_owned()),
        };
        let keys: Vec<&str> = options.into_params().iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["from", "to", "count", "skip", "authorized", "receipt"]);
    }

    #[test]
    fn test_list_orders_authorized_flag_is_numeric() {
        let options = ListOrders { authorized: Some(false), ..Default::default() };
        assert_eq!(options.into_params(), vec![("authorized", ParamValue::Bool(false))]);
    }

    #[test]
    fn test_create_order_form_table() {
        let order = CreateOrder {
            amount: 10_000,
            currency: "INR".to_owned(),
            receipt: Some("zap453".to_owned()),
            payment_capture: true,
        };
        assert_eq!(order.into_form(), vec![
            ("amount", ParamValue::Int(10_000)),
            ("currency", ParamValue::Str("INR".to_owned())),
            ("receipt", ParamValue::Str("zap453".to_owned())),
            ("payment_capture", ParamValue::Bool(true)),
        ]);
    }

    #[test]
    fn test_create_order_without_receipt() {
        let order = CreateOrder {
            amount: 500,
            currency: "INR".to_owned(),
            receipt: None,
            payment_capture: false,
        };
        let keys: Vec<&str> = order.into_form().iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["amount", "currency", "payment_capture"]);
    }
}
