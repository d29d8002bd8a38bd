//! Parameter encoders for authenticated methods.
//!
//! Each method takes a single opaque `params` string. Its exact text is part
//! of the signed body, so every encoder here is versioned by its tests.

use rust_decimal::Decimal;
use time::OffsetDateTime;

/// Decimal places used for order price and amount.
pub const ORDER_DECIMALS: u32 = 8;

/// Price, amount and currency of a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeParameters {
    /// Limit price.
    pub price: Decimal,
    /// Order amount in BTC.
    pub amount: Decimal,
    /// Quote currency code, e.g. `"USD"`.
    pub currency: String,
}

impl TradeParameters {
    /// Create order parameters.
    pub fn new(price: Decimal, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            price,
            amount,
            currency: currency.into(),
        }
    }

    /// Encode as `price,amount,currency` with 8 decimal places.
    ///
    /// Values with more precision are rounded half-to-even.
    pub fn encode(&self) -> String {
        format!(
            "{},{},{}",
            fixed_decimals(self.price),
            fixed_decimals(self.amount),
            self.currency
        )
    }
}

fn fixed_decimals(value: Decimal) -> String {
    let width = ORDER_DECIMALS as usize;
    format!("{:.width$}", value.round_dp(ORDER_DECIMALS))
}

/// Encode the parameter of `cancelOrder`.
pub fn cancel_order_params(order_id: i64) -> String {
    order_id.to_string()
}

/// Encode the parameter of `getTrades`.
///
/// `None` means "no lower bound" and encodes to an empty string. Any
/// timestamp, the UNIX epoch included, encodes as decimal seconds.
pub fn trades_since_params(since: Option<OffsetDateTime>) -> String {
    since
        .map(|ts| ts.unix_timestamp().to_string())
        .unwrap_or_default()
}
