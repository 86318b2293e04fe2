//! Write the monthly amortization schedule and equity series for one scenario

use anyhow::Context;
use clap::Parser;
use home_loan::cli::ScenarioArgs;
use home_loan::projection::{amortization_schedule, project};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Export the amortization schedule and equity series as CSV")]
struct Cli {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Monthly schedule output
    #[arg(long, default_value = "amortization_schedule.csv")]
    schedule_out: PathBuf,

    /// Equity series output
    #[arg(long, default_value = "equity_series.csv")]
    equity_out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let scenario = cli.scenario.scenario()?;

    let schedule = amortization_schedule(&scenario);
    let mut writer = csv::Writer::from_path(&cli.schedule_out)
        .with_context(|| format!("creating {}", cli.schedule_out.display()))?;
    for row in &schedule.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let equity = project(&scenario);
    let mut writer = csv::Writer::from_path(&cli.equity_out)
        .with_context(|| format!("creating {}", cli.equity_out.display()))?;
    for point in &equity {
        writer.serialize(point)?;
    }
    writer.flush()?;

    let summary = schedule.summary();
    println!("Payment: ${:.2} x {}", schedule.monthly_payment, summary.total_payments);
    println!("Total Paid:     ${:.2}", summary.total_paid);
    println!("Total Interest: ${:.2}", summary.total_interest);
    println!("Final Balance:  ${:.2}", summary.final_balance);
    println!();

    println!("{:>5} {:>12} {:>12} {:>14}", "Year", "Interest", "Principal", "Balance");
    for year in schedule.yearly() {
        println!("{:>5} {:>12.2} {:>12.2} {:>14.2}", year.year, year.interest, year.principal, year.ending_balance);
    }

    println!();
    println!("Schedule written to {}", cli.schedule_out.display());
    println!("Equity series written to {}", cli.equity_out.display());

    Ok(())
}
