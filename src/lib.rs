//! Rust client for the Centpay payment gateway REST API.
//!
//! Centpay's API is a flat REST surface over three resources (orders,
//! payments, refunds) authenticated with HTTP Basic auth. This crate wraps
//! it as thinly as possible: every operation builds one URL, performs one
//! HTTP call, and hands back the gateway's decoded JSON body. There is no
//! retry logic, no caching, and no client-side interpretation of HTTP status
//! codes.
//!
//! # Response contract
//!
//! The gateway reports application-level failures (validation errors, missing
//! entities, auth rejection) as a JSON error envelope with a 4xx/5xx status.
//! This client returns that envelope as `Ok(body)` just like any success
//! response; only a transport failure or a non-JSON body is an `Err`. Check
//! the payload's own `error` fields to detect gateway-side failures.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use centpay::{CentpayClient, ListOrders, ListWindow};
//!
//! # async fn example() -> centpay::Result<()> {
//! // Reads CENTPAY_KEY_ID / CENTPAY_KEY_SECRET; fails fast when missing.
//! let client = CentpayClient::from_env()?;
//!
//! let orders = client
//!     .orders()
//!     .list(ListOrders {
//!         window: ListWindow { count: Some(2), ..Default::default() },
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("{orders}");
//! # Ok(())
//! # }
//! ```
//!
//! # Module organization
//!
//! - [`client`]: the [`CentpayClient`] handle
//! - [`config`]: credentials and gateway configuration
//! - [`http`]: the request executor shared by all operations
//! - [`resources`]: per-resource operation tables (orders, payments, refunds)
//! - [`error`]: error types

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;

pub use client::CentpayClient;
pub use config::{Credentials, GatewayConfig, DEFAULT_BASE_URL};
pub use error::{GatewayError, Result};
pub use http::{Method, ParamValue, Params, RequestExecutor};
pub use resources::{CreateOrder, ListOrders, ListWindow, Orders, Payments, Refunds};
