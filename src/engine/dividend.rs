//! Dividend-performance adjustment
//!
//! Blends the insurer's historical fulfillment ratio with a dampened future
//! expectation, weighted by how much payment history exists.

/// Years of history at which the historical ratio is fully trusted
const FULL_HISTORY_YEARS: f64 = 5.0;

/// Fraction of historical over/under-performance extrapolated forward
const FUTURE_CARRY: f64 = 0.8;

/// Blended adjustment factor for a given history length
pub fn adjustment_factor(dividend_performance: f64, paid_years: u32) -> f64 {
    let history_weight = (paid_years as f64 / FULL_HISTORY_YEARS).min(1.0);
    let future_expectation = 1.0 + (dividend_performance - 1.0) * FUTURE_CARRY;
    dividend_performance * history_weight + future_expectation * (1.0 - history_weight)
}

/// Apply the dividend adjustment to a base value (the actuarial PV)
pub fn adjust_for_dividends(base_value: f64, dividend_performance: f64, paid_years: u32) -> f64 {
    base_value * adjustment_factor(dividend_performance, paid_years)
}
