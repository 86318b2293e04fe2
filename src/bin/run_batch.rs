//! Evaluate a file of scenarios in parallel
//!
//! Reads scenarios from CSV and writes one summary row per scenario

use anyhow::Context;
use clap::Parser;
use home_loan::scenario::{load_scenarios, DEFAULT_SCENARIOS_PATH};
use home_loan::{ScenarioReport, ScenarioRunner};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Evaluate every scenario in a CSV file")]
struct Cli {
    /// Scenario CSV
    #[arg(long, default_value = DEFAULT_SCENARIOS_PATH)]
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "batch_results.csv")]
    output: PathBuf,

    /// Directory holding lending_policy.csv (standard values when omitted)
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

/// One output line per scenario
#[derive(Debug, Serialize)]
struct SummaryRow {
    scenario_id: u32,
    loan_amount: f64,
    monthly_principal_interest: f64,
    monthly_piti: f64,
    total_monthly_housing_cost: f64,
    housing_dti: f64,
    total_dti: f64,
    affordability: &'static str,
    recommended_term: Option<u32>,
    total_interest: f64,
    pmi_months: u32,
    lifetime_cost: f64,
    equity_after_five_years: f64,
}

impl SummaryRow {
    fn new(scenario_id: u32, report: &ScenarioReport) -> Self {
        let f = &report.figures;
        Self {
            scenario_id,
            loan_amount: round2(f.loan_amount),
            monthly_principal_interest: round2(f.monthly_principal_interest),
            monthly_piti: round2(f.monthly_piti),
            total_monthly_housing_cost: round2(f.total_monthly_housing_cost),
            housing_dti: round2(f.housing_dti),
            total_dti: round2(f.total_dti),
            affordability: f.affordability.as_str(),
            recommended_term: report.comparison.recommended_term,
            total_interest: round2(f.total_interest_lifetime),
            pmi_months: report.lifetime.pmi_months,
            lifetime_cost: round2(report.lifetime.total_cost),
            equity_after_five_years: round2(report.lifetime.equity_after_five_years),
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let runner = match &cli.assumptions {
        Some(dir) => ScenarioRunner::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => ScenarioRunner::new(),
    };

    let start = Instant::now();
    println!("Loading scenarios from {}...", cli.input.display());
    let scenarios = load_scenarios(&cli.input)?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let eval_start = Instant::now();
    let results: Vec<(u32, ScenarioReport)> = scenarios
        .par_iter()
        .map(|labeled| (labeled.scenario_id, runner.evaluate(&labeled.scenario)))
        .collect();
    println!("Evaluation complete in {:?}", eval_start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    for (id, report) in &results {
        writer.serialize(SummaryRow::new(*id, report))?;
    }
    writer.flush()?;
    println!("Output written to {}", cli.output.display());

    println!();
    println!("{:>4} {:>12} {:>10} {:>9} {:>11}", "ID", "PITI", "Housing%", "Total%", "Tier");
    println!("{}", "-".repeat(50));
    for (id, report) in &results {
        let f = &report.figures;
        println!("{:>4} {:>12.2} {:>10.1} {:>9.1} {:>11}",
            id, f.monthly_piti, f.housing_dti, f.total_dti, f.affordability.as_str());
    }

    let comfortable = results
        .iter()
        .filter(|(_, r)| r.figures.affordability == home_loan::AffordabilityTier::Comfortable)
        .count();
    println!("\n{} of {} scenarios are comfortable", comfortable, results.len());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
