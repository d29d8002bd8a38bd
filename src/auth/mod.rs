//! Authentication module for the LakeBTC API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation from the wall clock
//! - HMAC-SHA256 signing and the `Authorization` header value

mod credentials;
mod nonce;
mod signature;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use nonce::{FixedNonce, NonceProvider, UnixSecondsNonce};
pub use signature::{authorization_value, sign_payload};
