//! Confidence score and risk grade
//!
//! Both are derived from the same inputs as the price but never feed back
//! into it. Synthesized insurers get a lower confidence ceiling and a
//! stricter grade ladder (A is unreachable by design).

use crate::reference::{InsurerProfile, ProductProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter risk grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskGrade {
    A,
    B,
    C,
    D,
}

impl fmt::Display for RiskGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            RiskGrade::A => "A",
            RiskGrade::B => "B",
            RiskGrade::C => "C",
            RiskGrade::D => "D",
        };
        f.write_str(letter)
    }
}

/// Bounded confidence score in [0, 0.95] (0.75 for synthesized insurers)
pub fn confidence(
    paid_years: u32,
    total_premium_paid: f64,
    insurer: &InsurerProfile,
    duration: f64,
) -> f64 {
    let synthesized = insurer.is_synthesized();
    let mut confidence: f64 = if synthesized { 0.50 } else { 0.70 };

    confidence += if insurer.solvency_ratio > 4.0 {
        0.10
    } else if insurer.solvency_ratio > 3.5 {
        0.05
    } else {
        0.0
    };

    // Data quality
    if paid_years >= 3 {
        confidence += 0.05;
    }
    if total_premium_paid > 10_000.0 {
        confidence += 0.03;
    }

    // Shorter duration means a more stable estimate
    confidence += if duration < 5.0 {
        0.05
    } else if duration < 10.0 {
        0.02
    } else {
        0.0
    };

    if insurer.dividend_performance > 1.05 {
        confidence += 0.03;
    }

    let ceiling = if synthesized { 0.75 } else { 0.95 };
    confidence.min(ceiling)
}

/// Composite risk score feeding the grade ladder
pub fn risk_score(insurer: &InsurerProfile, product: &ProductProfile, duration: f64) -> f64 {
    let mut score = if insurer.is_synthesized() { 0.05 } else { 0.0 };

    score += insurer.risk_factor * 0.3;
    score += product.risk_factor * 0.3;
    score += (duration / 20.0).min(0.15) * 0.2;
    score += (4.5 - insurer.solvency_ratio) * 0.02 * 0.2;

    score
}

/// Letter grade for the risk score. The synthesized ladder starts at B.
pub fn risk_grade(insurer: &InsurerProfile, product: &ProductProfile, duration: f64) -> RiskGrade {
    let score = risk_score(insurer, product, duration);

    if insurer.is_synthesized() {
        if score < 0.08 {
            RiskGrade::B
        } else if score < 0.12 {
            RiskGrade::C
        } else {
            RiskGrade::D
        }
    } else if score < 0.05 {
        RiskGrade::A
    } else if score < 0.10 {
        RiskGrade::B
    } else if score < 0.15 {
        RiskGrade::C
    } else {
        RiskGrade::D
    }
}

/// Expected annualized return on the premium paid, scaled by dividend
/// performance.
///
/// Undefined for `paid_years == 0` or `total_premium_paid == 0`; the
/// division and fractional exponent propagate non-finite values rather than
/// being defended against.
pub fn expected_annualized_return(
    transfer_value: f64,
    total_premium_paid: f64,
    paid_years: u32,
    dividend_performance: f64,
) -> f64 {
    let total_return = (transfer_value - total_premium_paid) / total_premium_paid;
    let annualized = (1.0 + total_return).powf(1.0 / paid_years as f64) - 1.0;
    annualized * dividend_performance
}
