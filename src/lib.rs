//! Policy Valuation - Actuarial valuation engine for transferable insurance policies
//!
//! This library provides:
//! - Accumulated value, Hong Kong MVA, and actuarial present value calculations
//! - Duration/convexity rate-sensitivity reporting
//! - Transfer premium assembly and platform pricing
//! - Confidence scoring and letter risk grades
//! - Synthetic profile resolution for insurers not on file
//! - Batch valuation of policy blocks

pub mod engine;
pub mod error;
pub mod policy;
pub mod reference;
pub mod runner;

// Re-export commonly used types
pub use engine::{RiskGrade, ValuationConfig, ValuationEngine, ValuationResult};
pub use error::ValuationError;
pub use policy::PolicyInput;
pub use reference::{InsurerProfile, MarketContext, ProductProfile, ReferenceData};
pub use runner::ValuationRunner;
