//! Closed-form valuation pipeline
//!
//! Stages in dependency order: accumulation, market value adjustment,
//! actuarial present value, rate sensitivity, dividend adjustment, transfer
//! premium assembly, and scoring. All stages are pure functions over the
//! reference data; `ValuationEngine` runs them as one forward pass.

pub mod accumulation;
pub mod dividend;
pub mod fallback;
pub mod mva;
pub mod present_value;
pub mod premium;
mod result;
pub mod scoring;
pub mod sensitivity;
mod valuation;

pub use fallback::{quick_estimate, FallbackEstimate};
pub use result::{UnknownInsurerInfo, ValuationBreakdown, ValuationResult};
pub use scoring::RiskGrade;
pub use valuation::ValuationEngine;

use serde::{Deserialize, Serialize};

/// Fixed assumptions of the valuation model, pulled into one explicit
/// immutable object so the pure-function contract is testable with
/// alternate scenarios. The defaults reproduce the reference behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Assumed policyholder age at evaluation (no age field exists in the
    /// policy input; the model uses a fixed market-average assumption)
    pub assumed_age: u32,

    /// Fraction of the transfer value retained after the platform fee
    pub platform_retention: f64,

    /// Flat tax-treatment premium component (HK transfer-tax exemption)
    pub tax_premium: f64,

    /// Starting transfer premium rate before adjustments
    pub base_transfer_premium: f64,

    /// Floor on the composite transfer premium
    pub min_transfer_premium: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            assumed_age: 35,
            platform_retention: 0.97,
            tax_premium: 0.08,
            base_transfer_premium: 0.15,
            min_transfer_premium: 0.03,
        }
    }
}
