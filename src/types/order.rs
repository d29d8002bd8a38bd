//! Order-related domain types.

use serde::{Deserialize, Serialize};

use crate::rest::RpcMethod;

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// The JSON-RPC method that places an order on this side.
    pub fn rpc_method(&self) -> RpcMethod {
        match self {
            OrderSide::Buy => RpcMethod::BuyOrder,
            OrderSide::Sell => RpcMethod::SellOrder,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}
