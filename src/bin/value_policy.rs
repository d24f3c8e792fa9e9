//! Value a single policy supplied as JSON
//!
//! Reads a `PolicyInput` JSON document from a file (or stdin with `-`) and
//! prints the `ValuationResult` as JSON, mirroring the request/response
//! shape of the listing platform's valuation endpoint.

use anyhow::Context;
use policy_valuation::{PolicyInput, ReferenceData, ValuationEngine};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "-".to_string());
    let raw = if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading policy JSON from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&arg).with_context(|| format!("reading {arg}"))?
    };

    let policy: PolicyInput = serde_json::from_str(&raw).context("parsing policy JSON")?;

    let engine = ValuationEngine::new(ReferenceData::default_hk());
    let result = engine.evaluate(&policy)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
