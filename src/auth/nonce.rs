//! Nonce generation for LakeBTC authenticated requests.
//!
//! LakeBTC expects the nonce (`tnonce`) to be the request time in whole
//! seconds since the UNIX epoch. The same value doubles as the JSON-RPC `id`.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
pub trait NonceProvider: Send + Sync {
    /// Generate the nonce for the next request.
    fn next_nonce(&self) -> u64;
}

/// A nonce provider that returns the current wall-clock time in seconds.
///
/// Resolution is one second: two requests issued within the same second
/// carry the same nonce. Servers that reject duplicate nonces will refuse
/// the second one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixSecondsNonce;

impl UnixSecondsNonce {
    /// Create a new wall-clock nonce provider.
    pub fn new() -> Self {
        Self
    }
}

impl NonceProvider for UnixSecondsNonce {
    fn next_nonce(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// A nonce provider that always returns the same value.
///
/// Useful for reproducing a signed request byte for byte, e.g. in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedNonce(pub u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}
