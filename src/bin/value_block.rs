//! Value an entire policy block from a CSV listing export
//!
//! Writes one result row per policy for comparison with the listing
//! platform's displayed prices.

use anyhow::Context;
use clap::Parser;
use policy_valuation::policy::{load_policy_block, DEFAULT_BLOCK_PATH};
use policy_valuation::{ReferenceData, ValuationRunner};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "value_block", about = "Batch valuation of a policy block")]
struct Args {
    /// Path to the policy block CSV
    #[arg(long, default_value = DEFAULT_BLOCK_PATH)]
    block: PathBuf,

    /// Load reference data from CSV instead of the embedded snapshot
    #[arg(long)]
    reference_dir: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "valuation_output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let policies = load_policy_block(&args.block)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("loading block from {}", args.block.display()))?;
    println!("Loaded {} policies in {:?}", policies.len(), start.elapsed());

    let runner = match &args.reference_dir {
        Some(dir) => {
            let reference = ReferenceData::from_csv_path(dir)
                .with_context(|| format!("loading reference data from {}", dir.display()))?;
            ValuationRunner::with_config(reference, Default::default())
        }
        None => ValuationRunner::new(),
    };

    let results = runner.run_block(&policies);

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writeln!(
        file,
        "Insurer,Product,PaidYears,AccumulatedValue,SurrenderValue,TransferValue,PlatformPrice,Confidence,RiskGrade,Duration,Unknown"
    )?;

    let mut failures = 0;
    for (policy, result) in policies.iter().zip(&results) {
        match result {
            Ok(v) => writeln!(
                file,
                "{},{},{},{:.0},{:.0},{:.0},{:.0},{:.3},{},{:.2},{}",
                policy.insurer_name,
                policy.product_category,
                policy.paid_years,
                v.accumulated_value,
                v.surrender_value,
                v.transfer_value,
                v.platform_price,
                v.confidence,
                v.risk_grade,
                v.duration,
                v.is_unknown_insurer,
            )?,
            Err(err) => {
                failures += 1;
                eprintln!("{}: {err}", policy.insurer_name);
            }
        }
    }

    println!(
        "Valued {} policies ({failures} failed) in {:?}",
        results.len() - failures,
        start.elapsed()
    );
    println!("Results written to: {}", args.output.display());

    Ok(())
}
