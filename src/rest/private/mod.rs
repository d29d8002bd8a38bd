//! Authenticated JSON-RPC methods (credentials required).
//!
//! Every method returns the [`RawResponse`] untouched. LakeBTC signals
//! rejected requests inside the body, often with a 200 status, so callers
//! that care about the outcome must inspect it themselves.

mod types;

pub use types::*;

use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::error::LakeBtcError;
use crate::rest::endpoints::RpcMethod;
use crate::rest::{LakeBtcClient, RawResponse};
use crate::types::OrderSide;

impl LakeBtcClient {
    /// Get account balances and profile.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lakebtc_api_client::rest::LakeBtcClient;
    /// use lakebtc_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("trader@example.com", "secret"));
    ///     let client = LakeBtcClient::builder().credentials(credentials).build();
    ///
    ///     let response = client.get_account_info().await?;
    ///     println!("{}: {}", response.status, response.text());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_account_info(&self) -> Result<RawResponse, LakeBtcError> {
        self.call_authenticated(RpcMethod::GetAccountInfo, "").await
    }

    /// Place an order on the given side.
    pub async fn trade(
        &self,
        side: OrderSide,
        params: &TradeParameters,
    ) -> Result<RawResponse, LakeBtcError> {
        self.call_authenticated(side.rpc_method(), &params.encode())
            .await
    }

    /// Place a buy order.
    pub async fn buy_order(
        &self,
        price: Decimal,
        amount: Decimal,
        currency: &str,
    ) -> Result<RawResponse, LakeBtcError> {
        self.trade(OrderSide::Buy, &TradeParameters::new(price, amount, currency))
            .await
    }

    /// Place a sell order.
    pub async fn sell_order(
        &self,
        price: Decimal,
        amount: Decimal,
        currency: &str,
    ) -> Result<RawResponse, LakeBtcError> {
        self.trade(OrderSide::Sell, &TradeParameters::new(price, amount, currency))
            .await
    }

    /// List open orders.
    pub async fn get_orders(&self) -> Result<RawResponse, LakeBtcError> {
        self.call_authenticated(RpcMethod::GetOrders, "").await
    }

    /// Cancel an order.
    pub async fn cancel_order(&self, order_id: i64) -> Result<RawResponse, LakeBtcError> {
        self.call_authenticated(RpcMethod::CancelOrder, &cancel_order_params(order_id))
            .await
    }

    /// Get the account trade log.
    ///
    /// # Arguments
    ///
    /// * `since` - Only trades after this time; `None` returns the default window.
    pub async fn get_trades(
        &self,
        since: Option<OffsetDateTime>,
    ) -> Result<RawResponse, LakeBtcError> {
        self.call_authenticated(RpcMethod::GetTrades, &trades_since_params(since))
            .await
    }
}
