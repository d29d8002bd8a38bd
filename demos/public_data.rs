//! Example: Fetching public market data from LakeBTC.
//!
//! Run with: RUST_LOG=debug cargo run --example public_data

use lakebtc_api_client::rest::LakeBtcClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a client for public endpoints (no credentials needed)
    let client = LakeBtcClient::new();

    println!("=== Ticker ===");
    let ticker = client.get_ticker().await?;
    for currency in ["USD", "CNY"] {
        if let Some(snapshot) = ticker.get(currency) {
            println!(
                "{}: last={} bid={} ask={} high={} low={}",
                currency, snapshot.last, snapshot.bid, snapshot.ask, snapshot.high, snapshot.low
            );
        }
    }

    println!("\n=== Order Book (USD) ===");
    let book = client.get_order_book("USD").await?;
    for level in book.asks.iter().take(5) {
        println!("ask {} x {}", level.price, level.amount);
    }
    for level in book.bids.iter().take(5) {
        println!("bid {} x {}", level.price, level.amount);
    }

    println!("\n=== Recent Trades ===");
    let trades = client.get_trade_history().await?;
    for trade in trades.iter().take(10) {
        println!("{} #{}: {} @ {}", trade.date, trade.tid, trade.amount, trade.price);
    }

    Ok(())
}
