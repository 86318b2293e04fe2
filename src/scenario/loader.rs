//! Load scenarios from CSV
//!
//! One scenario per row. The four monthly cost columns may be left blank.

use super::{Scenario, ScenarioError};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the sample scenario file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/sample_scenarios.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read scenarios from {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("scenario {scenario_id} is invalid: {source}")]
    InvalidScenario {
        scenario_id: u32,
        #[source]
        source: ScenarioError,
    },
}

/// A scenario together with the identifier it was loaded under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledScenario {
    pub scenario_id: u32,
    pub scenario: Scenario,
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    scenario_id: u32,
    home_price: f64,
    annual_income: f64,
    down_payment_percent: f64,
    interest_rate: f64,
    loan_term_years: u32,
    monthly_utilities: Option<f64>,
    monthly_maintenance: Option<f64>,
    monthly_hoa: Option<f64>,
    monthly_other_debts: Option<f64>,
}

impl CsvRow {
    fn into_labeled(self) -> Result<LabeledScenario, LoadError> {
        let scenario = Scenario::new(
            self.home_price,
            self.annual_income,
            self.down_payment_percent,
            self.interest_rate,
            self.loan_term_years,
        )
        .with_recurring_costs(
            self.monthly_utilities.unwrap_or(0.0),
            self.monthly_maintenance.unwrap_or(0.0),
            self.monthly_hoa.unwrap_or(0.0),
            self.monthly_other_debts.unwrap_or(0.0),
        );

        scenario
            .validate()
            .map_err(|source| LoadError::InvalidScenario {
                scenario_id: self.scenario_id,
                source,
            })?;

        Ok(LabeledScenario {
            scenario_id: self.scenario_id,
            scenario,
        })
    }
}

fn read_all<R: std::io::Read>(
    mut reader: Reader<R>,
    origin: &Path,
) -> Result<Vec<LabeledScenario>, LoadError> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result.map_err(|source| LoadError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        scenarios.push(row.into_labeled()?);
    }

    log::debug!("Loaded {} scenarios from {}", scenarios.len(), origin.display());
    Ok(scenarios)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledScenario>, LoadError> {
    let path = path.as_ref();
    let reader = Reader::from_path(path).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    read_all(reader, path)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<LabeledScenario>, LoadError> {
    read_all(Reader::from_reader(reader), Path::new("<reader>"))
}

/// Load scenarios from the default sample file
pub fn load_default_scenarios() -> Result<Vec<LabeledScenario>, LoadError> {
    load_scenarios(DEFAULT_SCENARIOS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "scenario_id,home_price,annual_income,down_payment_percent,interest_rate,loan_term_years,monthly_utilities,monthly_maintenance,monthly_hoa,monthly_other_debts\n";

    #[test]
    fn test_load_default_scenarios() {
        let scenarios = load_default_scenarios().expect("Failed to load scenarios");
        assert!(!scenarios.is_empty());

        let first = &scenarios[0];
        assert_eq!(first.scenario_id, 1);
        assert_eq!(first.scenario, Scenario::default());
    }

    #[test]
    fn test_blank_costs_default_to_zero() {
        let csv = format!("{HEADER}7,500000,150000,25,5.75,15,,,,\n");
        let scenarios = load_scenarios_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].scenario_id, 7);
        assert_eq!(scenarios[0].scenario.monthly_hoa, 0.0);
        assert_eq!(scenarios[0].scenario.loan_term_years, 15);
    }

    #[test]
    fn test_invalid_row_names_scenario() {
        let csv = format!("{HEADER}1,300000,80000,10,6,30,0,0,0,0\n2,300000,80000,120,6,30,0,0,0,0\n");
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();

        match err {
            LoadError::InvalidScenario { scenario_id, source } => {
                assert_eq!(scenario_id, 2);
                assert_eq!(source, ScenarioError::DownPaymentOutOfRange(120.0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let csv = format!("{HEADER}1,lots,80000,10,6,30,0,0,0,0\n");
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }));
    }
}
