//! Product category reference profiles

use serde::{Deserialize, Serialize};

/// Actuarial characteristics of a product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    /// Product-specific risk loading
    pub risk_factor: f64,

    /// Mortality charge weight applied to each premium
    pub mortality_weight: f64,

    /// Annual lapse rate for the category
    pub lapse_rate: f64,

    /// Expense load on the first-year premium (renewal years charge 30% of it)
    pub expense_ratio: f64,

    /// Minimum guaranteed crediting rate
    pub guaranteed_rate: f64,

    /// Annual bonus dividend rate projected on the surrender value
    pub bonus_rate: f64,
}

/// Build the product category table.
///
/// Categories are exact-match keys; the Korean-named entries are aliases
/// carried by the intake forms and share the metrics of their English
/// counterparts.
pub fn default_products() -> Vec<(String, ProductProfile)> {
    fn profile(
        risk_factor: f64,
        mortality_weight: f64,
        lapse_rate: f64,
        expense_ratio: f64,
        guaranteed_rate: f64,
        bonus_rate: f64,
    ) -> ProductProfile {
        ProductProfile {
            risk_factor,
            mortality_weight,
            lapse_rate,
            expense_ratio,
            guaranteed_rate,
            bonus_rate,
        }
    }

    let savings = profile(0.05, 0.02, 0.08, 0.15, 0.025, 0.02);
    let pension = profile(0.03, 0.025, 0.05, 0.12, 0.03, 0.025);
    let investment_linked = profile(0.12, 0.015, 0.12, 0.20, 0.0, 0.035);
    let whole_life = profile(0.06, 0.03, 0.06, 0.18, 0.025, 0.02);
    let endowment = profile(0.07, 0.025, 0.07, 0.16, 0.025, 0.022);

    vec![
        ("Savings Plan".to_string(), savings.clone()),
        ("저축형 보험".to_string(), savings),
        ("Pension Plan".to_string(), pension.clone()),
        ("연금보험".to_string(), pension),
        ("Investment Linked".to_string(), investment_linked.clone()),
        ("투자연계보험".to_string(), investment_linked),
        ("Whole Life".to_string(), whole_life.clone()),
        ("종신보험".to_string(), whole_life),
        ("Endowment Plan".to_string(), endowment.clone()),
        ("양로보험".to_string(), endowment),
    ]
}
