//! Example: LakeBTC authenticated methods.
//!
//! Reads `LAKEBTC_ACCESS_KEY` and `LAKEBTC_SECRET_KEY` from the environment
//! or a `.env` file. Placing an order is skipped unless `LAKEBTC_PLACE_ORDER=1`.
//!
//! Run with: cargo run --example private_trading

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use lakebtc_api_client::OrderSide;
use lakebtc_api_client::auth::EnvCredentials;
use lakebtc_api_client::rest::LakeBtcClient;
use lakebtc_api_client::rest::private::TradeParameters;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set LAKEBTC_ACCESS_KEY and LAKEBTC_SECRET_KEY to run this example.");
            return Ok(());
        }
    };

    let client = LakeBtcClient::builder()
        .credentials(credentials)
        .timeout(Duration::from_secs(10))
        .verbose(true)
        .build();

    println!("Taker fee: {}%, maker fee: {}%", client.fee(false), client.fee(true));

    // Responses are not interpreted; print what the exchange said.
    let info = client.get_account_info().await?;
    println!("Account info ({}): {}", info.status, info.text());

    let orders = client.get_orders().await?;
    println!("Open orders ({}): {}", orders.status, orders.text());

    let trades = client.get_trades(None).await?;
    println!("Trade log ({}): {}", trades.status, trades.text());

    if std::env::var("LAKEBTC_PLACE_ORDER").ok().as_deref() == Some("1") {
        let params = TradeParameters::new(
            Decimal::from_str("1.00")?,
            Decimal::from_str("0.001")?,
            "USD",
        );
        let placed = client.trade(OrderSide::Buy, &params).await?;
        println!("Buy order ({}): {}", placed.status, placed.text());
    }

    Ok(())
}
