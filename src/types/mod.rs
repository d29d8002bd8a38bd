//! Common types used across the LakeBTC client library.

pub mod exchange;
pub mod order;

pub use exchange::ExchangeProfile;
pub use order::OrderSide;
