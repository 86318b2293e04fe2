//! Compare loan terms for one scenario
//!
//! Usage: cargo run --bin compare_terms -- --price 400000 --terms 10,15,20,30

use clap::Parser;
use home_loan::cli::ScenarioArgs;
use home_loan::scenario::{MAX_LOAN_TERM_YEARS, SUPPORTED_TERMS};
use home_loan::TermComparator;

#[derive(Parser, Debug)]
#[command(about = "Compare monthly payment and lifetime interest across loan terms")]
struct Cli {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Candidate terms in years (defaults to 15, 20 and 30)
    #[arg(long, value_delimiter = ',')]
    terms: Vec<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scenario = cli.scenario.scenario()?;
    let comparator = TermComparator::new(cli.scenario.load_assumptions()?);

    let terms = if cli.terms.is_empty() { SUPPORTED_TERMS.to_vec() } else { cli.terms };
    if let Some(bad) = terms.iter().find(|&&t| t == 0 || t > MAX_LOAN_TERM_YEARS) {
        anyhow::bail!("loan terms must be between 1 and {MAX_LOAN_TERM_YEARS} years, got {bad}");
    }

    let comparison = comparator.compare(&scenario, &terms);

    println!("Loan amount: ${:.0} at {}%", scenario.loan_amount(), scenario.interest_rate);
    println!("{:>5} {:>12} {:>14} {:>14} {:>14}", "Term", "Payment", "Interest", "Total", "Savings vs 30");
    println!("{}", "-".repeat(63));

    for row in &comparison.rows {
        println!("{:>5} {:>12.2} {:>14.2} {:>14.2} {:>14.2}",
            row.term,
            row.monthly_payment,
            row.total_interest,
            row.total_cost,
            row.interest_savings_vs_30_year,
        );
    }

    match comparison.recommended() {
        Some(row) => println!("\nRecommended: {} years (${:.2}/month)", row.term, row.monthly_payment),
        None => println!("\nNo terms to recommend"),
    }

    Ok(())
}
