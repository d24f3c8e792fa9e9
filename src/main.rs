//! Policy Valuation CLI
//!
//! Values a sample policy and prints the full pricing breakdown

use chrono::NaiveDate;
use policy_valuation::{PolicyInput, ReferenceData, ValuationEngine};

fn main() {
    env_logger::init();

    println!("Policy Valuation v0.1.0");
    println!("=======================\n");

    let policy = PolicyInput {
        insurer_name: "AIA Group Limited".to_string(),
        product_category: "Savings Plan".to_string(),
        contract_period_years: 10,
        paid_years: 5,
        annual_premium: 8_000.0,
        total_premium_paid: 40_000.0,
        start_date: NaiveDate::from_ymd_opt(2019, 6, 1).expect("valid date"),
    };

    println!("Policy:");
    println!("  Insurer: {}", policy.insurer_name);
    println!("  Product: {}", policy.product_category);
    println!(
        "  Contract: {} years, {} paid",
        policy.contract_period_years, policy.paid_years
    );
    println!("  Annual Premium: ${:.2}", policy.annual_premium);
    println!("  Total Paid: ${:.2}", policy.total_premium_paid);
    println!();

    let engine = ValuationEngine::new(ReferenceData::default_hk());
    let result = match engine.evaluate(&policy) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Valuation failed: {err}");
            std::process::exit(1);
        }
    };

    println!("Valuation:");
    println!("  Accumulated Value:  ${:>12.0}", result.accumulated_value);
    println!("  Surrender Value:    ${:>12.0}", result.surrender_value);
    println!("  Actuarial PV:       ${:>12.0}", result.actuarial_present_value);
    println!("  Transfer Value:     ${:>12.0}", result.transfer_value);
    println!("  Platform Price:     ${:>12.0}", result.platform_price);
    println!();

    println!("Breakdown:");
    println!("  MVA Adjustment:     ${:>12.0}", result.breakdown.mva_adjustment);
    println!(
        "  Transfer Premium:   ${:>12.0}",
        result.breakdown.transfer_premium_amount
    );
    println!(
        "  Final Adjustment:   ${:>12.0}",
        result.breakdown.final_adjustment
    );
    println!();

    println!("Risk Metrics:");
    println!("  Risk Grade:         {}", result.risk_grade);
    println!("  Confidence:         {:.3}", result.confidence);
    println!("  Duration:           {:.2}", result.duration);
    println!("  Convexity:          {:.2}", result.convexity);
    println!(
        "  P(keep in force):   {:.3}",
        result.probability_of_persistence
    );
    println!(
        "  Expected Return:    {:.2}%",
        result.expected_annualized_return * 100.0
    );

    if result.is_unknown_insurer {
        if let Some(info) = &result.unknown_insurer {
            println!();
            println!(
                "Note: insurer not on file; valued from industry averages with a {:.1}% discount",
                info.discount_applied * 100.0
            );
        }
    }
}
