//! Valuation output records

use super::scoring::RiskGrade;
use serde::{Deserialize, Serialize};

/// Decomposition of how the final price was reached, for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationBreakdown {
    /// Accumulated account value before the MVA
    pub accumulated_value: f64,
    /// Value removed (or added, when negative) by the MVA
    pub mva_adjustment: f64,
    /// Actuarial present value of the projected stream
    pub actuarial_pv: f64,
    /// Premium amount layered on the dividend-adjusted value
    pub transfer_premium_amount: f64,
    /// Difference between the transfer value and the dividend-adjusted value
    pub final_adjustment: f64,
}

/// Explanatory block attached when the insurer was not on file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownInsurerInfo {
    /// Discount applied during profile synthesis, in [0.05, 0.25]
    pub discount_applied: f64,
    /// The substitute profile was derived from industry averages
    pub based_on_industry_average: bool,
}

/// Complete valuation result.
///
/// Constructed once per call and never mutated. Monetary fields are rounded
/// to the nearest unit at construction; all intermediate math runs at full
/// precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub accumulated_value: f64,
    pub surrender_value: f64,
    pub actuarial_present_value: f64,
    pub transfer_value: f64,
    pub platform_price: f64,

    /// Confidence in the estimate, in [0, 0.95] (0.75 ceiling when the
    /// insurer was synthesized)
    pub confidence: f64,
    pub risk_grade: RiskGrade,

    pub duration: f64,
    pub convexity: f64,

    /// Probability the policy would still be in force if kept
    pub probability_of_persistence: f64,
    /// Annualized return on premium paid, scaled by dividend performance
    pub expected_annualized_return: f64,

    pub breakdown: ValuationBreakdown,

    pub is_unknown_insurer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown_insurer: Option<UnknownInsurerInfo>,
}

/// Round to the nearest monetary unit
pub(crate) fn round_unit(value: f64) -> f64 {
    value.round()
}

/// Round to `places` decimal places
pub(crate) fn round_places(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_unit(40_466.4), 40_466.0);
        assert_eq!(round_unit(40_466.5), 40_467.0);
        assert_eq!(round_places(0.93456, 3), 0.935);
        assert_eq!(round_places(5.678, 2), 5.68);
    }

    #[test]
    fn test_result_serializes_without_unknown_block() {
        let result = ValuationResult {
            accumulated_value: 42_000.0,
            surrender_value: 40_000.0,
            actuarial_present_value: 38_000.0,
            transfer_value: 45_000.0,
            platform_price: 43_650.0,
            confidence: 0.93,
            risk_grade: RiskGrade::B,
            duration: 5.6,
            convexity: 38.2,
            probability_of_persistence: 0.67,
            expected_annualized_return: 0.025,
            breakdown: ValuationBreakdown {
                accumulated_value: 42_000.0,
                mva_adjustment: 2_000.0,
                actuarial_pv: 38_000.0,
                transfer_premium_amount: 7_000.0,
                final_adjustment: 7_000.0,
            },
            is_unknown_insurer: false,
            unknown_insurer: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("\"unknown_insurer\""));
        assert!(json.contains("\"is_unknown_insurer\":false"));
        assert!(json.contains("\"risk_grade\":\"B\""));
    }
}
