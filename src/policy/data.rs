//! Policy data structure matching the listing intake format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single transferable policy as supplied by the listing layer.
///
/// The record is immutable and consumed once per valuation. The caller is
/// responsible for the arithmetic preconditions: `paid_years >= 1` and
/// `total_premium_paid > 0`, otherwise the expected-return figure is
/// undefined (non-finite values propagate rather than being defended
/// against).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyInput {
    /// Issuing insurer, matched case-sensitively against the reference table.
    /// Names without an exact match are valued via a synthesized profile.
    pub insurer_name: String,

    /// Product category key. Must match a known product profile exactly.
    pub product_category: String,

    /// Total contract length in years (> 0)
    pub contract_period_years: u32,

    /// Years of premium actually paid, 0..=contract_period_years
    pub paid_years: u32,

    /// Annual premium amount
    pub annual_premium: f64,

    /// Total premium paid to date
    pub total_premium_paid: f64,

    /// Contract start date (informational; not used by the formulas)
    pub start_date: NaiveDate,
}

impl PolicyInput {
    /// Remaining contract months, floored at zero for over-paid inputs
    pub fn remaining_months(&self) -> u32 {
        (self.contract_period_years.saturating_sub(self.paid_years)) * 12
    }

    /// Remaining contract years, floored at zero
    pub fn remaining_years(&self) -> u32 {
        self.contract_period_years.saturating_sub(self.paid_years)
    }

    /// Level premium history: `paid_years` entries of the annual premium.
    /// The intake format carries a single level premium; the accumulation
    /// calculator accepts an arbitrary history for seasoned imports.
    pub fn premium_history(&self) -> Vec<f64> {
        vec![self.annual_premium; self.paid_years as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PolicyInput {
        PolicyInput {
            insurer_name: "AIA Group Limited".to_string(),
            product_category: "Savings Plan".to_string(),
            contract_period_years: 10,
            paid_years: 5,
            annual_premium: 8_000.0,
            total_premium_paid: 40_000.0,
            start_date: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_remaining_months() {
        let policy = sample();
        assert_eq!(policy.remaining_months(), 60);
        assert_eq!(policy.remaining_years(), 5);
    }

    #[test]
    fn test_remaining_months_floors_at_zero() {
        let mut policy = sample();
        policy.paid_years = 12; // paid beyond contract length
        assert_eq!(policy.remaining_months(), 0);
    }

    #[test]
    fn test_premium_history_is_level() {
        let policy = sample();
        let history = policy.premium_history();
        assert_eq!(history.len(), 5);
        assert!(history.iter().all(|&p| p == 8_000.0));
    }
}
