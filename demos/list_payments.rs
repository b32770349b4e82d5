//! Lists recent payments, two at a time.
//!
//! ```sh
//! CENTPAY_KEY_ID=key_live_abc123 CENTPAY_KEY_SECRET=... \
//!     cargo run --example list_payments
//! ```

use centpay::{CentpayClient, ListWindow};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let client = CentpayClient::from_env()?;

    let payments = client
        .payments()
        .list(ListWindow { count: Some(2), ..Default::default() })
        .await?;

    // Application-level failures arrive as a JSON error envelope, not Err.
    if let Some(error) = payments.get("error") {
        eprintln!("gateway rejected the request: {error}");
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&payments)?);
    Ok(())
}
