//! # LakeBTC Client
//!
//! An async Rust client library for the LakeBTC exchange HTTP trading API.
//!
//! ## Features
//!
//! - Public market data: ticker, order book, trade history
//! - Authenticated trading: account info, buy/sell, open orders, cancel, trade log
//! - HMAC-SHA256 signed JSON-RPC requests with a byte-exact canonical body
//! - Pluggable transport and nonce source for testing
//! - Financial precision for order parameters with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lakebtc_api_client::rest::LakeBtcClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LakeBtcClient::new();
//!     let ticker = client.get_ticker().await?;
//!     println!("Ticker: {:?}", ticker);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::LakeBtcError;
pub use rest::LakeBtcClient;
pub use types::{ExchangeProfile, OrderSide};

/// Result type alias using LakeBtcError
pub type Result<T> = std::result::Result<T, LakeBtcError>;
