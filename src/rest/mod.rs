//! LakeBTC REST API client.
//!
//! Public market data is fetched with plain GETs. Authenticated methods are
//! JSON-RPC calls signed with HMAC-SHA256; see [`SignedEnvelope`] for the
//! request layout.
//!
//! # Trait-based API
//!
//! The [`LakeBtcApi`] trait abstracts all operations, enabling mock
//! implementations for testing.
//!
//! ```rust,ignore
//! use lakebtc_api_client::rest::{LakeBtcApi, LakeBtcClient};
//!
//! async fn show_ticker<C: LakeBtcApi>(client: &C) -> Result<(), lakebtc_api_client::LakeBtcError> {
//!     let ticker = client.get_ticker().await?;
//!     println!("{:?}", ticker.usd);
//!     Ok(())
//! }
//! ```

mod canonical;
mod client;
mod endpoints;
pub mod private;
pub mod public;
mod signed;
mod traits;
mod transport;

pub use canonical::CanonicalParams;
pub use client::{LakeBtcClient, LakeBtcClientBuilder};
pub use endpoints::*;
pub use signed::{SignedEnvelope, TONCE_HEADER};
pub use traits::{LakeBtcApi, LakeBtcApiExt};
pub use transport::{HttpRequest, HttpTransport, RawResponse, Transport};
