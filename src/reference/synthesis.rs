//! Synthetic insurer profiles for names not on file
//!
//! An unmatched insurer name is never an error: the resolver derives a
//! substitute profile from industry averages, penalized by a name-heuristic
//! discount. The heuristic sums fixed deltas from substring checks with no
//! mutual exclusivity; that behavior is load-bearing for compatibility and
//! is kept verbatim behind `unknown_name_discount`.

use super::insurer::InsurerProfile;
use serde::Serialize;

/// Discount bounds for synthesized profiles
pub const MIN_SYNTHETIC_DISCOUNT: f64 = 0.05;
pub const MAX_SYNTHETIC_DISCOUNT: f64 = 0.25;

/// Arithmetic means across the known insurer table
#[derive(Debug, Clone, Serialize)]
pub struct IndustryAverages {
    pub solvency_ratio: f64,
    pub dividend_performance: f64,
    pub persistence_rate: f64,
    pub disclosed_rate_current: f64,
    pub disclosed_rate_prior: f64,
    pub established_year: u32,
    pub risk_factor: f64,
}

impl IndustryAverages {
    /// Average the metric columns over all known insurers.
    /// The established year is a rounded mean and informational only.
    pub fn from_profiles<'a, I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = &'a InsurerProfile>,
    {
        let profiles: Vec<&InsurerProfile> = profiles.into_iter().collect();
        let count = profiles.len() as f64;

        let sum = |f: fn(&InsurerProfile) -> f64| -> f64 {
            profiles.iter().map(|p| f(p)).sum::<f64>() / count
        };

        Self {
            solvency_ratio: sum(|p| p.solvency_ratio),
            dividend_performance: sum(|p| p.dividend_performance),
            persistence_rate: sum(|p| p.persistence_rate),
            disclosed_rate_current: sum(|p| p.disclosed_rate_current),
            disclosed_rate_prior: sum(|p| p.disclosed_rate_prior),
            established_year: sum(|p| p.established_year as f64).round() as u32,
            risk_factor: sum(|p| p.risk_factor),
        }
    }
}

/// Name-heuristic discount for an unknown insurer, in [0.05, 0.25].
///
/// Deltas are summed over all matching rules; a name hitting several
/// keywords accumulates every adjustment before clamping.
pub fn unknown_name_discount(name: &str) -> f64 {
    let mut discount: f64 = 0.10;

    // Short names are treated as less established
    if name.chars().count() < 10 {
        discount += 0.05;
    }

    let lower = name.to_lowercase();

    if lower.contains("life") || lower.contains("insurance") || lower.contains("assurance") {
        discount -= 0.02;
    }
    if lower.contains("international") || lower.contains("global") {
        discount -= 0.01;
    }
    if lower.contains("hong kong") || lower.contains("asia") || lower.contains("pacific") {
        discount -= 0.02;
    }
    if lower.contains("limited") && !lower.contains("group") {
        discount += 0.02;
    }
    if lower.contains("new") || lower.contains("startup") {
        discount += 0.05;
    }

    discount.clamp(MIN_SYNTHETIC_DISCOUNT, MAX_SYNTHETIC_DISCOUNT)
}

/// Build a synthetic profile for an insurer not on file.
///
/// The averages are discounted field by field: solvency at half the
/// discount, persistence at 30% of it, disclosed rates at 20%, dividend
/// performance at the full discount, and the risk factor inflated at twice
/// it. Credit rating and establishment year are fixed assumptions.
pub fn synthesize_profile(name: &str, averages: &IndustryAverages) -> InsurerProfile {
    let discount = unknown_name_discount(name);
    log::debug!("synthesizing profile for '{}', discount {:.3}", name, discount);

    InsurerProfile {
        credit_rating: "B+".to_string(),
        solvency_ratio: averages.solvency_ratio * (1.0 - discount * 0.5),
        dividend_performance: averages.dividend_performance * (1.0 - discount),
        persistence_rate: averages.persistence_rate * (1.0 - discount * 0.3),
        disclosed_rate_current: averages.disclosed_rate_current * (1.0 - discount * 0.2),
        disclosed_rate_prior: averages.disclosed_rate_prior * (1.0 - discount * 0.2),
        established_year: 2000,
        risk_factor: averages.risk_factor * (1.0 + discount * 2.0),
        synthetic_discount: Some(discount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::insurer::default_hk_insurers;
    use approx::assert_relative_eq;

    fn averages() -> IndustryAverages {
        let insurers = default_hk_insurers();
        IndustryAverages::from_profiles(insurers.iter().map(|(_, p)| p))
    }

    #[test]
    fn test_averages_within_column_ranges() {
        let avg = averages();
        assert!(avg.solvency_ratio > 3.1 && avg.solvency_ratio < 4.5);
        assert!(avg.dividend_performance > 1.0 && avg.dividend_performance < 1.1);
        assert!(avg.persistence_rate > 0.84 && avg.persistence_rate < 0.94);
        assert!(avg.established_year > 1800 && avg.established_year < 2014);
    }

    #[test]
    fn test_discount_base_case() {
        // Long name, no keywords: stays at the 0.10 base
        assert_relative_eq!(unknown_name_discount("Quiet Harbor Underwriters"), 0.10);
    }

    #[test]
    fn test_discount_keyword_deltas_sum() {
        // Short (+0.05) and "new" (+0.05): 0.10 + 0.10 = 0.20
        assert_relative_eq!(unknown_name_discount("Newco"), 0.20);

        // "life" (-0.02) and "asia" (-0.02) on a long name: 0.06
        assert_relative_eq!(unknown_name_discount("Asia Harmony Life Holdings"), 0.06);

        // "limited" without "group": +0.02
        assert_relative_eq!(unknown_name_discount("Evergrand Holdings Limited"), 0.12);

        // "limited" with "group" does not add the delta
        assert_relative_eq!(unknown_name_discount("Evergrand Group Limited"), 0.10);
    }

    #[test]
    fn test_discount_clamped() {
        // Positive deltas stacked: "new"/"startup" rule plus bare "limited"
        let discount = unknown_name_discount("New Startup Ltd Limited Co");
        assert_relative_eq!(discount, 0.17);
        assert!(discount <= MAX_SYNTHETIC_DISCOUNT);

        // Every negative keyword stacked still floors at the minimum
        let discount =
            unknown_name_discount("Hong Kong Asia Pacific Global International Life Assurance");
        assert_relative_eq!(discount, MIN_SYNTHETIC_DISCOUNT);
    }

    #[test]
    fn test_synthesized_profile_derivation() {
        let avg = averages();
        let profile = synthesize_profile("Quiet Harbor Underwriters", &avg);
        let discount = profile.synthetic_discount.unwrap();

        assert!(profile.is_synthesized());
        assert_relative_eq!(discount, 0.10);
        assert_eq!(profile.credit_rating, "B+");
        assert_eq!(profile.established_year, 2000);
        assert_relative_eq!(profile.solvency_ratio, avg.solvency_ratio * 0.95);
        assert_relative_eq!(profile.dividend_performance, avg.dividend_performance * 0.90);
        assert_relative_eq!(profile.persistence_rate, avg.persistence_rate * 0.97);
        assert_relative_eq!(profile.risk_factor, avg.risk_factor * 1.20);
    }
}
