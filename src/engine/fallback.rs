//! Degraded estimator for when the full pipeline cannot run
//!
//! A fixed-ratio recovery model over the total premium paid, matching the
//! listing client's offline path. It is intentionally crude: no reference
//! data, fixed confidence, fixed grade. Never called by `evaluate`.

use super::scoring::RiskGrade;
use serde::Serialize;

/// Markup from surrender value to transfer value
const FALLBACK_TRANSFER_MARKUP: f64 = 1.18;

/// Platform fee retention, matching the full engine
const FALLBACK_PLATFORM_RETENTION: f64 = 0.97;

/// Quick estimate produced by the degraded path
#[derive(Debug, Clone, Serialize)]
pub struct FallbackEstimate {
    pub surrender_value: f64,
    pub transfer_value: f64,
    pub platform_price: f64,
    pub confidence: f64,
    pub risk_grade: RiskGrade,
}

/// Hong Kong seven-year recovery curve: the fraction of paid premium
/// recoverable at surrender, by years held. Crosses 100% at year seven.
pub fn recovery_rate(paid_years: u32) -> f64 {
    let years = paid_years as f64;
    if paid_years <= 2 {
        0.15
    } else if paid_years <= 5 {
        0.40 + (years - 2.0) * 0.15
    } else if paid_years <= 7 {
        0.85 + (years - 5.0) * 0.075
    } else {
        1.0 + (years - 7.0) * 0.055
    }
}

/// Fixed-ratio estimate from total premium paid and years held.
///
/// Each price is rounded once, from the unrounded intermediates; rounding
/// is display-only and never feeds the next stage.
pub fn quick_estimate(total_premium_paid: f64, paid_years: u32) -> FallbackEstimate {
    let surrender_value = total_premium_paid * recovery_rate(paid_years);
    let transfer_value = surrender_value * FALLBACK_TRANSFER_MARKUP;
    let platform_price = transfer_value * FALLBACK_PLATFORM_RETENTION;

    FallbackEstimate {
        surrender_value: surrender_value.round(),
        transfer_value: transfer_value.round(),
        platform_price: platform_price.round(),
        confidence: 0.78,
        risk_grade: RiskGrade::B,
    }
}
