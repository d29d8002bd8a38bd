//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::LakeBtcError;
use crate::rest::LakeBtcClient;
use crate::rest::endpoints::public;

/// Currency code that has its own order book endpoint.
pub const CNY: &str = "CNY";

/// Order book path for a currency: CNY has a dedicated endpoint, every
/// other code uses the default book.
pub fn order_book_path(currency: &str) -> &'static str {
    if currency == CNY {
        public::ORDER_BOOK_CNY
    } else {
        public::ORDER_BOOK
    }
}

impl LakeBtcClient {
    /// Get the ticker for every quoted currency.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lakebtc_api_client::rest::LakeBtcClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = LakeBtcClient::new();
    ///     let ticker = client.get_ticker().await?;
    ///     if let Some(usd) = ticker.get("USD") {
    ///         println!("last={} bid={} ask={}", usd.last, usd.bid, usd.ask);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_ticker(&self) -> Result<TickerResponse, LakeBtcError> {
        self.public_get(public::TICKER).await
    }

    /// Get the order book.
    ///
    /// # Arguments
    ///
    /// * `currency` - `"CNY"` selects the CNY book; anything else the default book.
    pub async fn get_order_book(&self, currency: &str) -> Result<OrderBook, LakeBtcError> {
        self.public_get(order_book_path(currency)).await
    }

    /// Get recent public trades.
    pub async fn get_trade_history(&self) -> Result<Vec<PublicTrade>, LakeBtcError> {
        self.public_get(public::TRADES).await
    }
}
