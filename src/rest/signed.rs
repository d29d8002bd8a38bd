//! Construction of signed JSON-RPC requests.

use crate::auth::{Credentials, authorization_value, sign_payload};
use crate::error::LakeBtcError;
use crate::rest::canonical::CanonicalParams;
use crate::rest::endpoints::RpcMethod;

/// Header carrying the nonce next to the body.
pub const TONCE_HEADER: &str = "Json-Rpc-Tonce";

/// A signed request body together with the values derived from it.
///
/// `canonical` is the exact string that was signed and must be sent as the
/// HTTP body without any further transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    /// Nonce used for both `tnonce` and `id`.
    pub nonce: u64,
    /// Canonical form-encoded body.
    pub canonical: String,
    /// Hex HMAC-SHA256 of `canonical`.
    pub mac_hex: String,
    /// Full `Authorization` header value, including the `Basic ` scheme.
    pub authorization: String,
}

impl SignedEnvelope {
    /// Build and sign the body for one authenticated call.
    ///
    /// `params` is the method's opaque parameter string, empty when the
    /// method takes none.
    pub fn build(
        credentials: &Credentials,
        nonce: u64,
        method: RpcMethod,
        params: &str,
    ) -> Result<Self, LakeBtcError> {
        let nonce_str = nonce.to_string();

        let mut fields = CanonicalParams::new();
        fields
            .insert("tnonce", nonce_str.as_str())
            .insert("accesskey", credentials.account_id.as_str())
            .insert("requestmethod", "POST")
            .insert("id", nonce_str.as_str())
            .insert("method", method.as_str())
            .insert("params", params);

        let canonical = fields.encode();
        let mac_hex = sign_payload(credentials, &canonical)?;
        let authorization = authorization_value(credentials, &mac_hex);

        Ok(Self {
            nonce,
            canonical,
            mac_hex,
            authorization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("user@example.com", "test_secret")
    }

    #[test]
    fn test_buy_order_envelope_fixture() {
        let envelope = SignedEnvelope::build(
            &credentials(),
            1_700_000_000,
            RpcMethod::BuyOrder,
            "100.50000000,0.00100000,USD",
        )
        .unwrap();

        assert_eq!(
            envelope.canonical,
            "accesskey=user%40example.com&id=1700000000&method=buyOrder\
             &params=100.50000000%2C0.00100000%2CUSD&requestmethod=POST&tnonce=1700000000"
        );
        assert_eq!(
            envelope.mac_hex,
            "bb153da40cdc1b9edf914ba5ed03fc03dc96b68ded34889a84e8b48bb8691eaa"
        );
        assert_eq!(
            envelope.authorization,
            "Basic dXNlckBleGFtcGxlLmNvbTpiYjE1M2RhNDBjZGMxYjllZGY5MTRiYTVlZDAzZmMwM2RjOTZiNjhkZWQzNDg4OWE4NGU4YjQ4YmI4NjkxZWFh"
        );
    }

    #[test]
    fn test_mac_covers_exact_body() {
        let creds = credentials();
        let envelope = SignedEnvelope::build(&creds, 42, RpcMethod::CancelOrder, "42").unwrap();
        assert_eq!(
            envelope.mac_hex,
            sign_payload(&creds, &envelope.canonical).unwrap()
        );
    }

    #[test]
    fn test_fixed_fields_for_every_method() {
        let methods = [
            RpcMethod::GetAccountInfo,
            RpcMethod::BuyOrder,
            RpcMethod::SellOrder,
            RpcMethod::GetOrders,
            RpcMethod::CancelOrder,
            RpcMethod::GetTrades,
        ];

        for method in methods {
            let envelope = SignedEnvelope::build(&credentials(), 1234, method, "").unwrap();
            let fields: Vec<(String, String)> =
                serde_urlencoded::from_str(&envelope.canonical).unwrap();
            let get = |key: &str| {
                fields
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.as_str())
            };

            assert_eq!(get("requestmethod"), Some("POST"));
            assert_eq!(get("id"), get("tnonce"));
            assert_eq!(get("tnonce"), Some("1234"));
            assert_eq!(get("method"), Some(method.as_str()));
            assert_eq!(get("params"), Some(""));
        }
    }

    #[test]
    fn test_different_nonce_changes_signature() {
        let a = SignedEnvelope::build(&credentials(), 1, RpcMethod::GetOrders, "").unwrap();
        let b = SignedEnvelope::build(&credentials(), 2, RpcMethod::GetOrders, "").unwrap();
        assert_ne!(a.mac_hex, b.mac_hex);
    }

    #[test]
    fn test_buy_and_sell_differ_only_in_method() {
        let params = "1.00000000,2.00000000,USD";
        let buy = SignedEnvelope::build(&credentials(), 7, RpcMethod::BuyOrder, params).unwrap();
        let sell = SignedEnvelope::build(&credentials(), 7, RpcMethod::SellOrder, params).unwrap();
        assert_eq!(
            buy.canonical.replace("method=buyOrder", "method=sellOrder"),
            sell.canonical
        );
    }
}
