//! CSV-based reference data loader
//!
//! Loads insurer, product, and market tables from CSV files in
//! data/reference/. The embedded defaults in `insurer.rs`/`product.rs`/
//! `market.rs` mirror these files exactly.

use super::insurer::InsurerProfile;
use super::market::MarketContext;
use super::product::ProductProfile;
use crate::error::ValuationError;
use std::fs::File;
use std::path::Path;

/// Default path to the reference data directory
pub const DEFAULT_REFERENCE_PATH: &str = "data/reference";

#[derive(Debug, serde::Deserialize)]
struct InsurerRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "CreditRating")]
    credit_rating: String,
    #[serde(rename = "SolvencyRatio")]
    solvency_ratio: f64,
    #[serde(rename = "DividendPerformance")]
    dividend_performance: f64,
    #[serde(rename = "PersistenceRate")]
    persistence_rate: f64,
    #[serde(rename = "DisclosedRateCurrent")]
    disclosed_rate_current: f64,
    #[serde(rename = "DisclosedRatePrior")]
    disclosed_rate_prior: f64,
    #[serde(rename = "EstablishedYear")]
    established_year: u32,
    #[serde(rename = "RiskFactor")]
    risk_factor: f64,
}

#[derive(Debug, serde::Deserialize)]
struct ProductRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "RiskFactor")]
    risk_factor: f64,
    #[serde(rename = "MortalityWeight")]
    mortality_weight: f64,
    #[serde(rename = "LapseRate")]
    lapse_rate: f64,
    #[serde(rename = "ExpenseRatio")]
    expense_ratio: f64,
    #[serde(rename = "GuaranteedRate")]
    guaranteed_rate: f64,
    #[serde(rename = "BonusRate")]
    bonus_rate: f64,
}

#[derive(Debug, serde::Deserialize)]
struct MarketRow {
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Value")]
    value: f64,
}

/// Load the insurer table from insurers.csv
pub fn load_insurers(path: &Path) -> Result<Vec<(String, InsurerProfile)>, ValuationError> {
    let file = File::open(path.join("insurers.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut insurers = Vec::new();
    for result in reader.deserialize() {
        let row: InsurerRow = result?;
        insurers.push((
            row.name,
            InsurerProfile {
                credit_rating: row.credit_rating,
                solvency_ratio: row.solvency_ratio,
                dividend_performance: row.dividend_performance,
                persistence_rate: row.persistence_rate,
                disclosed_rate_current: row.disclosed_rate_current,
                disclosed_rate_prior: row.disclosed_rate_prior,
                established_year: row.established_year,
                risk_factor: row.risk_factor,
                synthetic_discount: None,
            },
        ));
    }

    if insurers.is_empty() {
        return Err(ValuationError::Reference(
            "insurers.csv contains no rows".to_string(),
        ));
    }
    Ok(insurers)
}

/// Load the product table from products.csv
pub fn load_products(path: &Path) -> Result<Vec<(String, ProductProfile)>, ValuationError> {
    let file = File::open(path.join("products.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut products = Vec::new();
    for result in reader.deserialize() {
        let row: ProductRow = result?;
        products.push((
            row.category,
            ProductProfile {
                risk_factor: row.risk_factor,
                mortality_weight: row.mortality_weight,
                lapse_rate: row.lapse_rate,
                expense_ratio: row.expense_ratio,
                guaranteed_rate: row.guaranteed_rate,
                bonus_rate: row.bonus_rate,
            },
        ));
    }

    if products.is_empty() {
        return Err(ValuationError::Reference(
            "products.csv contains no rows".to_string(),
        ));
    }
    Ok(products)
}

/// Load market constants from market.csv (key/value rows)
pub fn load_market(path: &Path) -> Result<MarketContext, ValuationError> {
    let file = File::open(path.join("market.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut market = MarketContext::hk_2024();
    for result in reader.deserialize() {
        let row: MarketRow = result?;
        match row.key.as_str() {
            "risk_free_rate" => market.risk_free_rate = row.value,
            "current_disclosed_rate" => market.current_disclosed_rate = row.value,
            "usd_hkd_rate" => market.usd_hkd_rate = row.value,
            "hibor_3m" => market.hibor_3m = row.value,
            "inflation_rate" => market.inflation_rate = row.value,
            "credit_spread" => market.credit_spread = row.value,
            "liquidity_premium" => market.liquidity_premium = row.value,
            other => {
                return Err(ValuationError::Reference(format!(
                    "unrecognized market constant: {other}"
                )))
            }
        }
    }

    Ok(market)
}
