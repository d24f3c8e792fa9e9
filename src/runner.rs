//! Batch valuation runner
//!
//! Pre-loads reference data once, then values many policies without
//! re-reading CSV files. Parallel execution via rayon for listing blocks.

use crate::engine::{ValuationConfig, ValuationEngine, ValuationResult};
use crate::error::ValuationError;
use crate::policy::PolicyInput;
use crate::reference::ReferenceData;
use rayon::prelude::*;

/// Pre-loaded runner for efficient batch valuations
#[derive(Debug, Clone)]
pub struct ValuationRunner {
    engine: ValuationEngine,
}

impl ValuationRunner {
    /// Runner over the embedded reference snapshot
    pub fn new() -> Self {
        Self {
            engine: ValuationEngine::new(ReferenceData::default_hk()),
        }
    }

    /// Runner loading reference data from CSV files
    pub fn from_csv() -> Result<Self, ValuationError> {
        Ok(Self {
            engine: ValuationEngine::new(ReferenceData::from_csv()?),
        })
    }

    /// Runner with explicit reference data and configuration
    pub fn with_config(reference: ReferenceData, config: ValuationConfig) -> Self {
        Self {
            engine: ValuationEngine::with_config(reference, config),
        }
    }

    /// Value a single policy
    pub fn run(&self, policy: &PolicyInput) -> Result<ValuationResult, ValuationError> {
        self.engine.evaluate(policy)
    }

    /// Value a block of policies in parallel, preserving input order
    pub fn run_block(
        &self,
        policies: &[PolicyInput],
    ) -> Vec<Result<ValuationResult, ValuationError>> {
        policies
            .par_iter()
            .map(|policy| self.engine.evaluate(policy))
            .collect()
    }

    /// Engine in use (for inspection)
    pub fn engine(&self) -> &ValuationEngine {
        &self.engine
    }
}

impl Default for ValuationRunner {
    fn default() -> Self {
        Self::new()
    }
}
