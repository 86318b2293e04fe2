//! Command-line arguments shared by the binaries

use crate::assumptions::Assumptions;
use crate::scenario::{SavedSettings, Scenario};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Scenario inputs. Defaults match the starting scenario of the interactive flow.
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Home purchase price
    #[arg(long, default_value_t = 350_000.0)]
    pub price: f64,

    /// Gross annual household income
    #[arg(long, default_value_t = 75_000.0)]
    pub income: f64,

    /// Down payment as a percent of price
    #[arg(long = "down", default_value_t = 10.0)]
    pub down_payment_percent: f64,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 6.5)]
    pub rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    pub term: u32,

    #[arg(long, default_value_t = 200.0)]
    pub utilities: f64,

    #[arg(long, default_value_t = 150.0)]
    pub maintenance: f64,

    #[arg(long, default_value_t = 0.0)]
    pub hoa: f64,

    /// Other recurring monthly debt payments
    #[arg(long, default_value_t = 0.0)]
    pub debts: f64,

    /// JSON file of saved settings to overlay on the flags
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Directory holding lending_policy.csv (standard values when omitted)
    #[arg(long)]
    pub assumptions: Option<PathBuf>,
}

impl ScenarioArgs {
    /// Build and validate the scenario, applying saved settings if given
    pub fn scenario(&self) -> anyhow::Result<Scenario> {
        let mut scenario = Scenario::new(
            self.price,
            self.income,
            self.down_payment_percent,
            self.rate,
            self.term,
        )
        .with_recurring_costs(self.utilities, self.maintenance, self.hoa, self.debts);

        if let Some(path) = &self.settings {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings from {}", path.display()))?;
            let settings = SavedSettings::from_json(&json)
                .with_context(|| format!("parsing settings in {}", path.display()))?;
            scenario = settings.apply_to(&scenario);
        }

        scenario.validate().context("invalid scenario")?;
        Ok(scenario)
    }

    pub fn load_assumptions(&self) -> anyhow::Result<Assumptions> {
        match &self.assumptions {
            Some(dir) => Assumptions::from_csv_path(dir)
                .with_context(|| format!("loading assumptions from {}", dir.display())),
            None => Ok(Assumptions::standard()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        scenario: ScenarioArgs,
    }

    #[test]
    fn test_defaults_build_default_scenario() {
        let cli = TestCli::parse_from(["home_loan"]);
        assert_eq!(cli.scenario.scenario().unwrap(), Scenario::default());
        assert_eq!(cli.scenario.load_assumptions().unwrap(), Assumptions::standard());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from(["home_loan", "--price", "500000", "--down", "20", "--term", "15"]);
        let s = cli.scenario.scenario().unwrap();
        assert_eq!(s.home_price, 500_000.0);
        assert_eq!(s.down_payment_percent, 20.0);
        assert_eq!(s.loan_term_years, 15);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let cli = TestCli::parse_from(["home_loan", "--down", "150"]);
        assert!(cli.scenario.scenario().is_err());
    }
}
