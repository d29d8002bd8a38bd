//! LakeBTC API endpoint constants.

/// Base URL for the LakeBTC HTTP API.
pub const LAKEBTC_BASE_URL: &str = "https://www.lakebtc.com";

/// Path that receives every authenticated JSON-RPC call.
///
/// Authenticated methods are not routed by URL; the method name travels in
/// the request body.
pub const RPC_PATH: &str = "/api_v1/";

/// Public endpoints (no authentication required).
pub mod public {
    /// Ticker for all quoted currencies.
    pub const TICKER: &str = "/api_v1/ticker";
    /// Order book in the default currency.
    pub const ORDER_BOOK: &str = "/api_v1/bcorderbook";
    /// Order book in CNY.
    pub const ORDER_BOOK_CNY: &str = "/api_v1/bcorderbook_cny";
    /// Recent public trades.
    pub const TRADES: &str = "/api_v1/bctrades";
}

/// Authenticated JSON-RPC methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    /// Account balances and profile.
    GetAccountInfo,
    /// Place a buy order.
    BuyOrder,
    /// Place a sell order.
    SellOrder,
    /// List open orders.
    GetOrders,
    /// Cancel an order by id.
    CancelOrder,
    /// Account trade log.
    GetTrades,
}

impl RpcMethod {
    /// Name sent in the `method` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::GetAccountInfo => "getAccountInfo",
            RpcMethod::BuyOrder => "buyOrder",
            RpcMethod::SellOrder => "sellOrder",
            RpcMethod::GetOrders => "getOrders",
            RpcMethod::CancelOrder => "cancelOrder",
            RpcMethod::GetTrades => "getTrades",
        }
    }
}

impl std::fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
