//! Static exchange profile: display name, switches and fee schedule.

use rust_decimal::Decimal;

/// Descriptive settings for the LakeBTC integration.
///
/// Fees are percentages, e.g. `0.2` means 0.2%.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeProfile {
    /// Display name of the exchange.
    pub name: String,
    /// Whether the integration is switched on.
    pub enabled: bool,
    /// Log request payloads and raw responses at `info` level.
    pub verbose: bool,
    /// Fee charged on orders that take liquidity.
    pub taker_fee: Decimal,
    /// Fee charged on orders that add liquidity.
    pub maker_fee: Decimal,
}

impl ExchangeProfile {
    /// Fee for a maker (`true`) or taker (`false`) order.
    pub fn fee(&self, maker: bool) -> Decimal {
        if maker { self.maker_fee } else { self.taker_fee }
    }
}

impl Default for ExchangeProfile {
    fn default() -> Self {
        Self {
            name: "LakeBTC".to_string(),
            enabled: true,
            verbose: false,
            taker_fee: Decimal::new(2, 1),
            maker_fee: Decimal::new(15, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let profile = ExchangeProfile::default();
        assert_eq!(profile.name, "LakeBTC");
        assert!(profile.enabled);
        assert!(!profile.verbose);
    }

    #[test]
    fn test_fee_lookup() {
        let profile = ExchangeProfile::default();
        assert_eq!(profile.fee(true), "0.15".parse::<Decimal>().unwrap());
        assert_eq!(profile.fee(false), "0.2".parse::<Decimal>().unwrap());
    }
}
