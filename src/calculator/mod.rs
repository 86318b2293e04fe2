//! Mortgage calculator for a single scenario and term

pub mod amortization;
mod engine;
mod figures;

pub use engine::MortgageCalculator;
pub use figures::DerivedFigures;

use crate::scenario::Scenario;

/// Compute derived figures under the standard lending assumptions
pub fn compute(scenario: &Scenario) -> DerivedFigures {
    MortgageCalculator::default().compute(scenario)
}
