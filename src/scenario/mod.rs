//! Scenario inputs, validation, CSV loading and saved settings

mod data;
pub mod loader;
mod settings;

pub use data::{
    is_supported_term, Scenario, ScenarioError, BENCHMARK_TERM_YEARS, MAX_LOAN_TERM_YEARS,
    SUPPORTED_TERMS,
};
pub use loader::{load_default_scenarios, DEFAULT_SCENARIOS_PATH, load_scenarios, load_scenarios_from_reader, LabeledScenario, LoadError};
pub use settings::SavedSettings;
