//! Market-wide reference constants

use serde::{Deserialize, Serialize};

/// Hong Kong market constants used across a valuation run.
///
/// Updated only by redeploying reference data; the engine treats the
/// context as immutable for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketContext {
    /// 10-year HKD government bond yield
    pub risk_free_rate: f64,

    /// Current market-average disclosed crediting rate
    pub current_disclosed_rate: f64,

    /// USD/HKD exchange rate (informational)
    pub usd_hkd_rate: f64,

    /// 3-month HIBOR (informational)
    pub hibor_3m: f64,

    /// Annual inflation rate (informational)
    pub inflation_rate: f64,

    /// Corporate credit spread
    pub credit_spread: f64,

    /// Secondary-market liquidity premium
    pub liquidity_premium: f64,
}

impl MarketContext {
    /// Hong Kong market constants as of the 2024 reference snapshot
    pub fn hk_2024() -> Self {
        Self {
            risk_free_rate: 0.045,
            current_disclosed_rate: 0.046,
            usd_hkd_rate: 7.8,
            hibor_3m: 0.052,
            inflation_rate: 0.025,
            credit_spread: 0.008,
            liquidity_premium: 0.015,
        }
    }
}

impl Default for MarketContext {
    fn default() -> Self {
        Self::hk_2024()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hk_2024_snapshot() {
        let market = MarketContext::hk_2024();
        assert_eq!(market.risk_free_rate, 0.045);
        assert_eq!(market.current_disclosed_rate, 0.046);
        assert!(market.credit_spread > 0.0);
    }
}
