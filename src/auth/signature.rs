//! HMAC-SHA256 signature generation for LakeBTC authentication.
//!
//! LakeBTC authenticated requests carry:
//! ```text
//! Authorization: Basic base64(account_id + ":" + hex(HMAC-SHA256(secret, body)))
//! ```
//!
//! `body` is the canonical form-encoded request body, exactly as sent.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::LakeBtcError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a canonical request body.
///
/// The secret is used as raw bytes; LakeBTC secrets are not base64 encoded.
///
/// # Returns
///
/// Lowercase hex HMAC-SHA256 of `payload`.
///
/// # Example
///
/// ```rust
/// use lakebtc_api_client::auth::{Credentials, sign_payload};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("trader@example.com", "secret");
/// let mac = sign_payload(&credentials, "accesskey=trader%40example.com&id=1")?;
/// assert_eq!(mac.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_payload(credentials: &Credentials, payload: &str) -> Result<String, LakeBtcError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| LakeBtcError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(payload.as_bytes());
    Ok(hex::encode(hmac.finalize().into_bytes()))
}

/// Build the value of the `Authorization` header from a hex MAC.
pub fn authorization_value(credentials: &Credentials, mac_hex: &str) -> String {
    let token = BASE64.encode(format!("{}:{}", credentials.account_id, mac_hex));
    format!("Basic {token}")
}
