//! Trait definition for the LakeBTC REST API client.
//!
//! [`LakeBtcApi`] abstracts every public and authenticated operation so that
//! code placing orders can be exercised against a mock.
//!
//! # Example
//!
//! ```rust,ignore
//! use lakebtc_api_client::rest::{LakeBtcApi, LakeBtcClient};
//!
//! async fn spread<C: LakeBtcApi>(client: &C) -> Result<f64, lakebtc_api_client::LakeBtcError> {
//!     let book = client.get_order_book("USD").await?;
//!     Ok(book.asks[0].price - book.bids[0].price)
//! }
//! ```

use std::future::Future;

use time::OffsetDateTime;

use crate::error::LakeBtcError;
use crate::rest::private::TradeParameters;
use crate::rest::public::{OrderBook, PublicTrade, TickerResponse, TickerSnapshot};
use crate::rest::transport::RawResponse;
use crate::types::OrderSide;

/// Trait defining all LakeBTC API operations.
///
/// Authenticated operations return the raw response; see
/// [`RawResponse`] for why it is not interpreted.
pub trait LakeBtcApi: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the ticker for every quoted currency.
    fn get_ticker(&self) -> impl Future<Output = Result<TickerResponse, LakeBtcError>> + Send;

    /// Get the order book; `"CNY"` selects the CNY book.
    fn get_order_book(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<OrderBook, LakeBtcError>> + Send;

    /// Get recent public trades.
    fn get_trade_history(
        &self,
    ) -> impl Future<Output = Result<Vec<PublicTrade>, LakeBtcError>> + Send;

    // ========== Authenticated Methods ==========

    /// Get account balances and profile.
    fn get_account_info(&self) -> impl Future<Output = Result<RawResponse, LakeBtcError>> + Send;

    /// Place an order on the given side.
    fn trade(
        &self,
        side: OrderSide,
        params: &TradeParameters,
    ) -> impl Future<Output = Result<RawResponse, LakeBtcError>> + Send;

    /// List open orders.
    fn get_orders(&self) -> impl Future<Output = Result<RawResponse, LakeBtcError>> + Send;

    /// Cancel an order.
    fn cancel_order(
        &self,
        order_id: i64,
    ) -> impl Future<Output = Result<RawResponse, LakeBtcError>> + Send;

    /// Get the account trade log, optionally bounded below by `since`.
    fn get_trades(
        &self,
        since: Option<OffsetDateTime>,
    ) -> impl Future<Output = Result<RawResponse, LakeBtcError>> + Send;
}

/// Convenience methods available on every [`LakeBtcApi`] implementation.
pub trait LakeBtcApiExt: LakeBtcApi {
    /// Ticker snapshot for one currency, if the exchange quotes it.
    fn get_ticker_for(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Option<TickerSnapshot>, LakeBtcError>> + Send {
        async move {
            let ticker = self.get_ticker().await?;
            Ok(ticker.get(currency).copied())
        }
    }

    /// Midpoint between best bid and best ask, if both sides are present.
    fn get_mid_price(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Option<f64>, LakeBtcError>> + Send {
        async move {
            let book = self.get_order_book(currency).await?;
            Ok(match (book.best_bid(), book.best_ask()) {
                (Some(bid), Some(ask)) => Some((bid.price + ask.price) / 2.0),
                _ => None,
            })
        }
    }
}

impl<T: LakeBtcApi> LakeBtcApiExt for T {}
