//! Load policy blocks from CSV listing exports

use super::PolicyInput;
use chrono::NaiveDate;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to the sample policy block
pub const DEFAULT_BLOCK_PATH: &str = "data/policies/sample_block.csv";

/// Raw CSV row matching the listing export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Insurer")]
    insurer: String,
    #[serde(rename = "ProductCategory")]
    product_category: String,
    #[serde(rename = "ContractYears")]
    contract_years: u32,
    #[serde(rename = "PaidYears")]
    paid_years: u32,
    #[serde(rename = "AnnualPremium")]
    annual_premium: f64,
    #[serde(rename = "TotalPremiumPaid")]
    total_premium_paid: f64,
    #[serde(rename = "StartDate")]
    start_date: String,
}

/// Load a policy block from a CSV file
pub fn load_policy_block(path: &Path) -> Result<Vec<PolicyInput>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut policies = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let start_date = NaiveDate::parse_from_str(&row.start_date, "%Y-%m-%d")?;
        policies.push(PolicyInput {
            insurer_name: row.insurer,
            product_category: row.product_category,
            contract_period_years: row.contract_years,
            paid_years: row.paid_years,
            annual_premium: row.annual_premium,
            total_premium_paid: row.total_premium_paid,
            start_date,
        });
    }

    Ok(policies)
}

/// Load the sample block shipped with the crate
pub fn load_default_block() -> Result<Vec<PolicyInput>, Box<dyn Error>> {
    load_policy_block(Path::new(DEFAULT_BLOCK_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_block() {
        let result = load_default_block();
        assert!(result.is_ok(), "Failed to load block: {:?}", result.err());

        let policies = result.unwrap();
        assert!(!policies.is_empty());
        for policy in &policies {
            assert!(policy.contract_period_years > 0);
            assert!(policy.paid_years <= policy.contract_period_years);
            assert!(policy.annual_premium >= 0.0);
        }
    }
}
