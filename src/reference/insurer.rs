//! Insurer reference profiles (public disclosure metrics)

use serde::{Deserialize, Serialize};

/// Metrics for a single insurer, sourced from public disclosures or
/// synthesized from industry averages when the insurer is not on file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurerProfile {
    /// Agency-style credit rating (e.g. "AA+"). Synthesized profiles are
    /// always pinned at "B+".
    pub credit_rating: String,

    /// Solvency ratio (regulatory capital multiple, > 0)
    pub solvency_ratio: f64,

    /// Historical dividend fulfillment ratio (1.0 = met target exactly)
    pub dividend_performance: f64,

    /// Annual probability a policyholder keeps the policy, in (0, 1]
    pub persistence_rate: f64,

    /// Current-year disclosed crediting rate
    pub disclosed_rate_current: f64,

    /// Prior-year disclosed crediting rate (taken as the rate at issuance)
    pub disclosed_rate_prior: f64,

    /// Year of establishment (informational)
    pub established_year: u32,

    /// Insurer-specific risk loading (>= 0)
    pub risk_factor: f64,

    /// Discount applied during synthesis, in [0.05, 0.25].
    /// `None` for insurers on file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetic_discount: Option<f64>,
}

impl InsurerProfile {
    /// Whether this profile was synthesized for an unknown insurer
    pub fn is_synthesized(&self) -> bool {
        self.synthetic_discount.is_some()
    }
}

/// Build the Hong Kong insurer table from public 2023/2024 disclosures
pub fn default_hk_insurers() -> Vec<(String, InsurerProfile)> {
    fn profile(
        credit_rating: &str,
        solvency_ratio: f64,
        dividend_performance: f64,
        persistence_rate: f64,
        disclosed_rate_current: f64,
        disclosed_rate_prior: f64,
        established_year: u32,
        risk_factor: f64,
    ) -> InsurerProfile {
        InsurerProfile {
            credit_rating: credit_rating.to_string(),
            solvency_ratio,
            dividend_performance,
            persistence_rate,
            disclosed_rate_current,
            disclosed_rate_prior,
            established_year,
            risk_factor,
            synthetic_discount: None,
        }
    }

    vec![
        (
            "AIA Group Limited".to_string(),
            profile("AA+", 4.2, 1.083, 0.923, 0.048, 0.045, 1931, 0.05),
        ),
        (
            "Prudential plc".to_string(),
            profile("AA", 3.8, 1.061, 0.891, 0.046, 0.043, 1964, 0.07),
        ),
        (
            "FWD Group".to_string(),
            profile("A+", 3.2, 1.042, 0.847, 0.044, 0.041, 2013, 0.09),
        ),
        (
            "Great Eastern Holdings".to_string(),
            profile("A+", 3.5, 1.055, 0.876, 0.045, 0.042, 1908, 0.08),
        ),
        (
            "Zurich Insurance Group".to_string(),
            profile("AA-", 3.9, 1.067, 0.885, 0.047, 0.044, 1872, 0.06),
        ),
        (
            "Manulife Financial".to_string(),
            profile("AA-", 3.7, 1.052, 0.863, 0.046, 0.043, 1897, 0.07),
        ),
        (
            "Sun Life Financial".to_string(),
            profile("A+", 3.4, 1.048, 0.869, 0.045, 0.042, 1865, 0.08),
        ),
        (
            "Allianz".to_string(),
            profile("AA", 3.6, 1.058, 0.882, 0.046, 0.043, 1890, 0.07),
        ),
        (
            "AXA".to_string(),
            profile("AA-", 3.8, 1.063, 0.888, 0.047, 0.044, 1817, 0.06),
        ),
        (
            "Generali".to_string(),
            profile("A+", 3.3, 1.045, 0.871, 0.044, 0.041, 1831, 0.08),
        ),
        (
            "MetLife".to_string(),
            profile("A", 3.1, 1.039, 0.854, 0.043, 0.040, 1868, 0.09),
        ),
        (
            "New York Life".to_string(),
            profile("AAA", 4.5, 1.092, 0.935, 0.049, 0.046, 1845, 0.04),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_shape() {
        let insurers = default_hk_insurers();
        assert_eq!(insurers.len(), 12);

        for (name, profile) in &insurers {
            assert!(!name.is_empty());
            assert!(profile.solvency_ratio > 0.0);
            assert!(profile.persistence_rate > 0.0 && profile.persistence_rate <= 1.0);
            assert!(profile.risk_factor >= 0.0);
            assert!(!profile.is_synthesized());
        }
    }

    #[test]
    fn test_aia_profile_values() {
        let insurers = default_hk_insurers();
        let (_, aia) = insurers
            .iter()
            .find(|(name, _)| name == "AIA Group Limited")
            .unwrap();

        assert_eq!(aia.credit_rating, "AA+");
        assert_eq!(aia.solvency_ratio, 4.2);
        assert_eq!(aia.disclosed_rate_current, 0.048);
        assert_eq!(aia.disclosed_rate_prior, 0.045);
    }
}
