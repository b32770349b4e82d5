//! Creates an order and prints the gateway's response.
//!
//! ```sh
//! CENTPAY_KEY_ID=key_live_abc123 CENTPAY_KEY_SECRET=... \
//!     cargo run --example create_order
//! ```

use centpay::{CentpayClient, CreateOrder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let client = CentpayClient::from_env()?;

    let order = client
        .orders()
        .create(CreateOrder {
            amount: 50_000,
            currency: "INR".to_owned(),
            receipt: Some("rcpt-0001".to_owned()),
            payment_capture: true,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}
