//! Types for public REST API endpoints.

use serde::Deserialize;
use serde_with::{TimestampSeconds, serde_as};
use time::OffsetDateTime;

/// Price snapshot for one quote currency.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TickerSnapshot {
    /// Last traded price.
    pub last: f64,
    /// Best bid.
    pub bid: f64,
    /// Best ask.
    pub ask: f64,
    /// 24h high.
    pub high: f64,
    /// 24h low.
    pub low: f64,
}

/// Ticker response, one snapshot per quote currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TickerResponse {
    /// BTC/USD snapshot.
    #[serde(rename = "USD", default)]
    pub usd: Option<TickerSnapshot>,
    /// BTC/CNY snapshot.
    #[serde(rename = "CNY", default)]
    pub cny: Option<TickerSnapshot>,
}

impl TickerResponse {
    /// Snapshot for a currency code such as `"USD"` or `"CNY"`.
    pub fn get(&self, currency: &str) -> Option<&TickerSnapshot> {
        match currency {
            "USD" => self.usd.as_ref(),
            "CNY" => self.cny.as_ref(),
            _ => None,
        }
    }
}

/// One price level of the order book, decoded from `[price, amount]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct OrderBookLevel {
    /// Price of the level.
    pub price: f64,
    /// Total amount resting at this price.
    pub amount: f64,
}

impl From<(f64, f64)> for OrderBookLevel {
    fn from((price, amount): (f64, f64)) -> Self {
        Self { price, amount }
    }
}

/// Order book snapshot.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OrderBook {
    /// Sell side, best first.
    #[serde(default)]
    pub asks: Vec<OrderBookLevel>,
    /// Buy side, best first.
    #[serde(default)]
    pub bids: Vec<OrderBookLevel>,
}

impl OrderBook {
    /// Lowest ask, if any.
    pub fn best_ask(&self) -> Option<&OrderBookLevel> {
        self.asks.first()
    }

    /// Highest bid, if any.
    pub fn best_bid(&self) -> Option<&OrderBookLevel> {
        self.bids.first()
    }
}

/// A trade from the public trade history.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublicTrade {
    /// Execution time.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub date: OffsetDateTime,
    /// Execution price.
    pub price: f64,
    /// Traded amount.
    pub amount: f64,
    /// Trade id.
    pub tid: u64,
}
