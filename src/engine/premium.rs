//! Transfer premium assembly and final pricing
//!
//! The composite premium stacks rate-environment, holding-period,
//! credit-quality, scarcity, and tax-treatment components on a fixed base,
//! then the price applies the synthetic-insurer haircut and the platform fee.

use super::ValuationConfig;
use crate::reference::{InsurerProfile, MarketContext, ProductProfile};

/// Premium reduction factor for synthesized insurers
const SYNTHETIC_PREMIUM_FACTOR: f64 = 0.8;

/// Premium added per percentage point of disclosed-rate spread
const RATE_SPREAD_MULTIPLIER: f64 = 2.0;

/// Per-year holding bonus and its cap
const HOLDING_PREMIUM_PER_YEAR: f64 = 0.01;
const HOLDING_PREMIUM_CAP: f64 = 0.08;

/// Lapse rate below which the product earns a scarcity premium
const SCARCITY_LAPSE_THRESHOLD: f64 = 0.06;
const SCARCITY_PREMIUM: f64 = 0.02;

/// Holding-period premium component, capped
pub fn holding_premium(paid_years: u32) -> f64 {
    (paid_years as f64 * HOLDING_PREMIUM_PER_YEAR).min(HOLDING_PREMIUM_CAP)
}

/// Credit-quality step premium on the solvency ratio
pub fn credit_premium(solvency_ratio: f64) -> f64 {
    if solvency_ratio > 4.0 {
        0.03
    } else if solvency_ratio > 3.5 {
        0.02
    } else if solvency_ratio > 3.0 {
        0.01
    } else {
        0.0
    }
}

/// Composite transfer premium rate, floored at the configured minimum
pub fn transfer_premium_rate(
    paid_years: u32,
    insurer: &InsurerProfile,
    product: &ProductProfile,
    market: &MarketContext,
    config: &ValuationConfig,
) -> f64 {
    let mut premium = config.base_transfer_premium;

    if insurer.is_synthesized() {
        premium *= SYNTHETIC_PREMIUM_FACTOR;
    }

    // Rate environment: rising rates since issuance add value to the
    // locked-in contract (spread can be negative)
    let rate_spread = market.current_disclosed_rate - insurer.disclosed_rate_prior;
    premium += rate_spread * RATE_SPREAD_MULTIPLIER;

    premium += holding_premium(paid_years);
    premium += credit_premium(insurer.solvency_ratio);

    if product.lapse_rate < SCARCITY_LAPSE_THRESHOLD {
        premium += SCARCITY_PREMIUM;
    }

    // Hong Kong transfer-tax exemption allowance
    premium += config.tax_premium;

    premium.max(config.min_transfer_premium)
}

/// Transfer value and platform price for a dividend-adjusted base value.
///
/// The platform fee multiplies the unrounded transfer value; any rounding
/// happens at result construction only.
pub fn price(
    dividend_adjusted_value: f64,
    premium_rate: f64,
    insurer: &InsurerProfile,
    config: &ValuationConfig,
) -> (f64, f64) {
    let mut transfer_value = dividend_adjusted_value * (1.0 + premium_rate);

    if let Some(discount) = insurer.synthetic_discount {
        transfer_value *= 1.0 - discount;
    }

    let platform_price = transfer_value * config.platform_retention;
    (transfer_value, platform_price)
}
