//! Accumulated account value from a premium payment history
//!
//! Each paid premium is split into expense, risk, and investment components
//! and the investment component is compounded forward to the valuation date
//! at the insurer's disclosed rate.

use crate::reference::ProductProfile;

/// Expense multiplier applied to renewal-year premiums (front-loaded charge)
const RENEWAL_EXPENSE_FACTOR: f64 = 0.3;

/// Share of the lapse rate charged as part of the risk premium
const LAPSE_CHARGE_WEIGHT: f64 = 0.1;

/// Accumulate a premium history to the valuation date.
///
/// `premiums` holds the per-year amounts; when shorter than `paid_years`
/// the last entry is reused for the remaining years. No floor is applied:
/// a premium smaller than its risk load contributes negatively.
pub fn accumulated_value(
    premiums: &[f64],
    paid_years: u32,
    disclosed_rate: f64,
    product: &ProductProfile,
) -> f64 {
    let last = premiums.last().copied().unwrap_or(0.0);
    let mut accumulated = 0.0;

    for year in 0..paid_years {
        let premium = premiums.get(year as usize).copied().unwrap_or(last);

        // First-year expense charge is the full ratio, renewals a fraction
        let expense_rate = if year == 0 {
            product.expense_ratio
        } else {
            product.expense_ratio * RENEWAL_EXPENSE_FACTOR
        };
        let net_premium = premium * (1.0 - expense_rate);

        let risk_premium =
            premium * (product.mortality_weight + product.lapse_rate * LAPSE_CHARGE_WEIGHT);
        let investment_premium = net_premium - risk_premium;

        let years_to_accumulate = (paid_years - year) as f64;
        accumulated += investment_premium * (1.0 + disclosed_rate).powf(years_to_accumulate);
    }

    accumulated
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn savings_plan() -> ProductProfile {
        ProductProfile {
            risk_factor: 0.05,
            mortality_weight: 0.02,
            lapse_rate: 0.08,
            expense_ratio: 0.15,
            guaranteed_rate: 0.025,
            bonus_rate: 0.02,
        }
    }

    #[test]
    fn test_single_year_hand_computed() {
        let product = savings_plan();
        // 8000 paid for one year at 4.8%:
        // net = 8000 * 0.85 = 6800; risk = 8000 * 0.028 = 224
        // invest = 6576; fv = 6576 * 1.048
        let value = accumulated_value(&[8_000.0], 1, 0.048, &product);
        assert_relative_eq!(value, 6_576.0 * 1.048, epsilon = 1e-9);
    }

    #[test]
    fn test_five_year_level_premiums() {
        let product = savings_plan();
        let premiums = vec![8_000.0; 5];
        let value = accumulated_value(&premiums, 5, 0.048, &product);

        // First year carries the full expense load, renewals 30% of it
        let mut expected = 0.0;
        for year in 0..5u32 {
            let expense = if year == 0 { 0.15 } else { 0.045 };
            let invest = 8_000.0 * (1.0 - expense) - 8_000.0 * 0.028;
            expected += invest * 1.048_f64.powf((5 - year) as f64);
        }
        assert_relative_eq!(value, expected, epsilon = 1e-9);
        assert!(value > 40_000.0 && value < 45_000.0);
    }

    #[test]
    fn test_short_history_reuses_last_premium() {
        let product = savings_plan();
        let from_short = accumulated_value(&[8_000.0], 3, 0.048, &product);
        let from_full = accumulated_value(&[8_000.0; 3], 3, 0.048, &product);
        assert_relative_eq!(from_short, from_full);
    }

    #[test]
    fn test_no_negative_floor() {
        // Pathological product whose loads exceed the net premium
        let product = ProductProfile {
            risk_factor: 0.05,
            mortality_weight: 0.9,
            lapse_rate: 0.5,
            expense_ratio: 0.15,
            guaranteed_rate: 0.0,
            bonus_rate: 0.0,
        };
        let value = accumulated_value(&[1_000.0], 1, 0.04, &product);
        assert!(value < 0.0);
    }

    #[test]
    fn test_zero_paid_years_is_zero() {
        let product = savings_plan();
        assert_eq!(accumulated_value(&[], 0, 0.048, &product), 0.0);
    }
}
