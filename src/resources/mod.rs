//! Resource modules: orders, payments, refunds.
//!
//! Each resource is a thin view over the shared [`RequestExecutor`]: a table
//! of paths and parameter names with no logic of its own. Operations return
//! the gateway's decoded JSON body verbatim ([`serde_json::Value`]); response
//! shapes are owned by the remote API, not modeled here.
//!
//! [`RequestExecutor`]: crate::http::RequestExecutor

use crate::http::Params;

pub mod orders;
pub mod payments;
pub mod refunds;

pub use orders::{CreateOrder, ListOrders, Orders};
pub use payments::Payments;
pub use refunds::Refunds;

/// Common pagination window for list operations.
///
/// `from`/`to` are Unix timestamps bounding the creation time; `count` and
/// `skip` page through results. Unset fields are omitted from the query
/// string entirely.
///
/// # Examples
///
/// ```
/// use centpay::ListWindow;
///
/// let window = ListWindow { count: Some(25), ..Default::default() };
/// assert_eq!(window.count, Some(25));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ListWindow {
    /// Only include items created at or after this Unix timestamp.
    pub from: Option<i64>,
    /// Only include items created at or before this Unix timestamp.
    pub to: Option<i64>,
    /// Number of items to return.
    pub count: Option<u32>,
    /// Number of items to skip.
    pub skip: Option<u32>,
}

impl ListWindow {
    /// Renders the window as query parameters in the gateway's documented
    /// order: `from, to, count, skip`.
    pub(crate) fn into_params(self) -> Params {
        let mut params = Params::new();
        if let Some(from) = self.from {
            params.push(("from", from.into()));
        }
        if let Some(to) = self.to {
            params.push(("to", to.into()));
        }
        if let Some(count) = self.count {
            params.push(("count", count.into()));
        }
        if let Some(skip) = self.skip {
            params.push(("skip", skip.into()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ParamValue;

    #[test]
    fn test_list_window_empty_emits_no_params() {
        assert!(ListWindow::default().into_params().is_empty());
    }

    #[test]
    fn test_list_window_documented_order() {
        let window = ListWindow {
            from: Some(1_600_000_000),
            to: Some(1_700_000_000),
            count: Some(10),
            skip: Some(20),
        };
        let params = window.into_params();
        let keys: Vec<&str> = params.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["from", "to", "count", "skip"]);
    }

    #[test]
    fn test_list_window_skips_unset_fields() {
        let window = ListWindow { count: Some(2), ..Default::default() };
        assert_eq!(window.into_params(), vec![("count", ParamValue::Int(2))]);
    }
}
