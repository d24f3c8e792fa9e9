//! Hong Kong market value adjustment
//!
//! Models the surrender penalty/bonus from the spread between the crediting
//! rate locked in at issuance and the insurer's current rate. Rising rates
//! make the fixed obligation less attractive to the insurer, so surrender
//! is penalized; falling rates produce a bonus.

/// Spread added to the current rate at surrender
const SURRENDER_RATE_LOADING: f64 = 0.005;

/// Symmetric cap on the adjustment
const MVA_CAP: f64 = 0.20;

/// MVA factor: `1 - [(1 + original) / (1 + current + 0.5%)]^(months/12)`,
/// clamped to [-0.20, 0.20]. Positive reduces the surrender value.
pub fn market_value_adjustment(
    original_rate: f64,
    current_rate: f64,
    remaining_months: u32,
) -> f64 {
    let adjusted_current = current_rate + SURRENDER_RATE_LOADING;
    let ratio = (1.0 + original_rate) / (1.0 + adjusted_current);
    let mva = 1.0 - ratio.powf(remaining_months as f64 / 12.0);
    mva.clamp(-MVA_CAP, MVA_CAP)
}

/// Surrender value after the adjustment
pub fn surrender_value(
    accumulated_value: f64,
    original_rate: f64,
    current_rate: f64,
    remaining_months: u32,
) -> f64 {
    let mva = market_value_adjustment(original_rate, current_rate, remaining_months);
    accumulated_value * (1.0 - mva)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mva_bounded_over_rate_grid() {
        let rates = [0.0, 0.01, 0.03, 0.045, 0.06, 0.10, 0.20];
        let months = [0u32, 1, 12, 60, 120, 360, 600];

        for &original in &rates {
            for &current in &rates {
                for &m in &months {
                    let mva = market_value_adjustment(original, current, m);
                    assert!(
                        (-MVA_CAP..=MVA_CAP).contains(&mva),
                        "mva {mva} out of bounds for ({original}, {current}, {m})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_sign_semantics() {
        // Rates rose since issuance: penalty (positive MVA)
        let penalty = market_value_adjustment(0.03, 0.05, 60);
        assert!(penalty > 0.0);

        // Rates fell well below the locked-in rate: bonus (negative MVA).
        // The 0.5% loading means a small drop still nets out positive.
        let bonus = market_value_adjustment(0.05, 0.03, 60);
        assert!(bonus < 0.0);
    }

    #[test]
    fn test_zero_remaining_months_is_neutral() {
        let mva = market_value_adjustment(0.03, 0.06, 0);
        assert_relative_eq!(mva, 0.0);
        assert_relative_eq!(surrender_value(50_000.0, 0.03, 0.06, 0), 50_000.0);
    }

    #[test]
    fn test_surrender_value_hand_computed() {
        // original 4.5%, current 4.8% + 0.5% loading, 60 months
        let ratio: f64 = 1.045 / 1.053;
        let expected_mva = 1.0 - ratio.powf(5.0);
        let value = surrender_value(42_000.0, 0.045, 0.048, 60);
        assert_relative_eq!(value, 42_000.0 * (1.0 - expected_mva), epsilon = 1e-9);
        assert!(value < 42_000.0);
    }

    #[test]
    fn test_extreme_spread_hits_cap() {
        // Huge upward rate move over a long horizon saturates the penalty cap
        let mva = market_value_adjustment(0.0, 0.20, 600);
        assert_relative_eq!(mva, MVA_CAP);

        // And the mirror move saturates the bonus cap
        let mva = market_value_adjustment(0.20, 0.0, 600);
        assert_relative_eq!(mva, -MVA_CAP);
    }
}
