//! Home Loan CLI
//!
//! Prints the full cost and affordability report for one scenario

use anyhow::Context;
use clap::Parser;
use home_loan::cli::ScenarioArgs;
use home_loan::ScenarioRunner;

#[derive(Parser, Debug)]
#[command(name = "home_loan", about = "Estimate the monthly and lifetime cost of a home loan", version)]
struct Cli {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scenario = cli.scenario.scenario()?;
    let runner = ScenarioRunner::with_assumptions(cli.scenario.load_assumptions()?);
    let report = runner.evaluate(&scenario);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
        return Ok(());
    }

    let f = &report.figures;

    println!("Home Loan Estimate");
    println!("==================\n");

    println!("Scenario:");
    println!("  Home Price:     ${:.0}", scenario.home_price);
    println!("  Annual Income:  ${:.0}", scenario.annual_income);
    println!("  Down Payment:   {}% (${:.0})", scenario.down_payment_percent, f.down_payment);
    println!("  Rate / Term:    {}% / {} years", scenario.interest_rate, scenario.loan_term_years);
    println!("  Loan Amount:    ${:.0}", f.loan_amount);
    println!();

    println!("Monthly Payment (PITI): ${:.2}", f.monthly_piti);
    println!("  {:<14} {:>10.2}", "Principal", f.principal_portion);
    println!("  {:<14} {:>10.2}", "Interest", f.interest_portion);
    println!("  {:<14} {:>10.2}", "Property Tax", f.monthly_property_tax);
    println!("  {:<14} {:>10.2}", "Insurance", f.monthly_insurance);
    if f.has_pmi() {
        println!("  {:<14} {:>10.2}", "PMI", f.monthly_pmi);
    }
    println!("Total Housing Cost:     ${:.2} ({:.1}% of income)", f.total_monthly_housing_cost, f.housing_cost_share());
    println!();

    println!("Affordability: {} - {}", f.affordability, f.affordability.summary());
    let insights = &report.insights;
    println!("  Housing DTI:      {:.1}% ({:?}, comfortable <= {:.0}%)", f.housing_dti, insights.housing_dti_status, runner.assumptions().affordability.comfortable_housing_dti);
    println!("  Total DTI:        {:.1}% ({:?}, comfortable <= {:.0}%)", f.total_dti, insights.total_dti_status, runner.assumptions().affordability.comfortable_total_dti);
    println!("  Left each month:  ${:.0}", f.remaining_monthly_budget);
    if insights.price_exceeds_income_guideline {
        println!("  Price is {:.1}x income, above the usual 5x guideline", insights.price_to_income_ratio);
    }
    for suggestion in f.affordability.suggestions() {
        println!("  - {}", suggestion);
    }
    println!();

    let (closing_low, closing_high) = insights.closing_cost_range;
    println!("Closing Costs: ${:.0} - ${:.0} (budget ${:.0})", closing_low, closing_high, insights.closing_cost_budget);
    println!();

    println!("Loan Term Comparison:");
    println!("{:>5} {:>12} {:>14} {:>14} {:>14}", "Term", "Payment", "Interest", "Total", "Savings vs 30");
    println!("{}", "-".repeat(63));
    for row in &report.comparison.rows {
        let marker = if Some(row.term) == report.comparison.recommended_term { " *" } else { "" };
        println!("{:>5} {:>12.2} {:>14.0} {:>14.0} {:>14.0}{}",
            row.term,
            row.monthly_payment,
            row.total_interest,
            row.total_cost,
            row.interest_savings_vs_30_year,
            marker,
        );
    }
    println!();

    println!("Equity Over Time:");
    println!("{:>5} {:>14} {:>14}", "Year", "Balance", "Equity");
    for point in &report.equity {
        println!("{:>5} {:>14.0} {:>14.0}", point.year_offset, point.outstanding_balance, point.equity);
    }
    println!();

    let lifetime = &report.lifetime;
    println!("Lifetime Cost: ${:.0}", lifetime.total_cost);
    println!("  Total Interest:   ${:.0} ({:.0}% of the loan)", lifetime.total_interest, lifetime.interest_to_loan_percent);
    println!("  Taxes + Insurance: ${:.0}", lifetime.total_escrow());
    if lifetime.pmi_months > 0 {
        println!("  PMI:              ${:.0} over {} months", lifetime.total_pmi, lifetime.pmi_months);
    }
    println!("  Equity after 5 years: ${:.0}", lifetime.equity_after_five_years);

    Ok(())
}
