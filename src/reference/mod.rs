//! Static reference tables: insurers, product categories, market constants
//!
//! The store is the only long-lived state in the crate. It is built once
//! (embedded defaults or CSV) and read-only thereafter; lookups are
//! exact-string keyed with no normalization or fuzzy matching.

mod insurer;
pub mod loader;
mod market;
mod product;
pub mod synthesis;

pub use insurer::InsurerProfile;
pub use market::MarketContext;
pub use product::ProductProfile;
pub use synthesis::IndustryAverages;

use crate::error::ValuationError;
use std::collections::HashMap;
use std::path::Path;

/// Container for all reference tables used by a valuation run
#[derive(Debug, Clone)]
pub struct ReferenceData {
    insurers: HashMap<String, InsurerProfile>,
    products: HashMap<String, ProductProfile>,
    market: MarketContext,
}

impl ReferenceData {
    /// Build the store from the embedded Hong Kong 2024 snapshot.
    /// Infallible: the data is compiled in.
    pub fn default_hk() -> Self {
        Self {
            insurers: insurer::default_hk_insurers().into_iter().collect(),
            products: product::default_products().into_iter().collect(),
            market: MarketContext::hk_2024(),
        }
    }

    /// Load the store from CSV files in the default location (data/reference/)
    pub fn from_csv() -> Result<Self, ValuationError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_REFERENCE_PATH))
    }

    /// Load the store from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, ValuationError> {
        Ok(Self {
            insurers: loader::load_insurers(path)?.into_iter().collect(),
            products: loader::load_products(path)?.into_iter().collect(),
            market: loader::load_market(path)?,
        })
    }

    /// Exact-string lookup of an insurer profile
    pub fn lookup_insurer(&self, name: &str) -> Option<&InsurerProfile> {
        self.insurers.get(name)
    }

    /// Exact-string lookup of a product profile
    pub fn lookup_product(&self, category: &str) -> Option<&ProductProfile> {
        self.products.get(category)
    }

    /// Market constants for the run
    pub fn market(&self) -> &MarketContext {
        &self.market
    }

    /// Arithmetic means across the known insurer table
    pub fn industry_averages(&self) -> IndustryAverages {
        IndustryAverages::from_profiles(self.insurers.values())
    }

    /// Resolve an insurer name: the reference profile when on file,
    /// otherwise a synthesized substitute. Exactly one profile per
    /// valuation; synthesis is the fallback of last resort and never fails.
    pub fn resolve_insurer(&self, name: &str) -> InsurerProfile {
        match self.lookup_insurer(name) {
            Some(profile) => profile.clone(),
            None => {
                log::debug!("insurer '{}' not on file, synthesizing profile", name);
                synthesis::synthesize_profile(name, &self.industry_averages())
            }
        }
    }

    /// Known insurer names (for diagnostics and CLI output)
    pub fn insurer_names(&self) -> impl Iterator<Item = &str> {
        self.insurers.keys().map(String::as_str)
    }

    /// Known product categories
    pub fn product_categories(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::default_hk()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_lookup_only() {
        let reference = ReferenceData::default_hk();

        assert!(reference.lookup_insurer("AIA Group Limited").is_some());
        // No normalization: casing and whitespace variants miss
        assert!(reference.lookup_insurer("aia group limited").is_none());
        assert!(reference.lookup_insurer("AIA Group Limited ").is_none());
        assert!(reference.lookup_insurer("AIA").is_none());
    }

    #[test]
    fn test_resolve_known_insurer_is_reference_profile() {
        let reference = ReferenceData::default_hk();
        let profile = reference.resolve_insurer("New York Life");
        assert!(!profile.is_synthesized());
        assert_eq!(profile.credit_rating, "AAA");
    }

    #[test]
    fn test_resolve_unknown_insurer_synthesizes() {
        let reference = ReferenceData::default_hk();
        let profile = reference.resolve_insurer("Totally Unknown Insurer Co");
        assert!(profile.is_synthesized());
        let discount = profile.synthetic_discount.unwrap();
        assert!((0.05..=0.25).contains(&discount));
    }

    #[test]
    fn test_product_lookup() {
        let reference = ReferenceData::default_hk();
        assert!(reference.lookup_product("Savings Plan").is_some());
        assert!(reference.lookup_product("Nonexistent Category").is_none());
    }
}
