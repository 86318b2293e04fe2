//! Scenario runner for efficient batch evaluation
//!
//! Pre-loads lending assumptions once, then evaluates any number of scenarios
//! against them without re-reading CSV files.

use crate::assumptions::{Assumptions, AssumptionsError};
use crate::calculator::{DerivedFigures, MortgageCalculator};
use crate::comparison::{TermComparator, TermComparison};
use crate::insights::ScenarioInsights;
use crate::projection::{self, EquityPoint, LifetimeCostBreakdown};
use crate::scenario::{LabeledScenario, Scenario};
use serde::{Deserialize, Serialize};

/// Everything computed for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub figures: DerivedFigures,
    pub comparison: TermComparison,
    pub equity: Vec<EquityPoint>,
    pub lifetime: LifetimeCostBreakdown,
    pub insights: ScenarioInsights,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// for price in [300_000.0, 350_000.0, 400_000.0] {
///     let report = runner.evaluate(&Scenario::default().with_home_price(price));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with the standard lending assumptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self, AssumptionsError> {
        Ok(Self {
            assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner from specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, AssumptionsError> {
        Ok(Self {
            assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn calculator(&self) -> MortgageCalculator {
        MortgageCalculator::new(self.assumptions)
    }

    pub fn comparator(&self) -> TermComparator {
        TermComparator::new(self.assumptions)
    }

    /// Derived figures only
    pub fn compute(&self, scenario: &Scenario) -> DerivedFigures {
        self.calculator().compute(scenario)
    }

    /// Full report: figures, term comparison, equity series, lifetime cost and insights
    pub fn evaluate(&self, scenario: &Scenario) -> ScenarioReport {
        let figures = self.compute(scenario);

        ScenarioReport {
            scenario: *scenario,
            figures,
            comparison: self.comparator().compare_supported(scenario),
            equity: projection::project(scenario),
            lifetime: LifetimeCostBreakdown::compute(
                scenario,
                &figures,
                self.assumptions.pmi_cancellation,
            ),
            insights: ScenarioInsights::with_thresholds(
                scenario,
                &figures,
                &self.assumptions.affordability,
            ),
        }
    }

    /// Evaluate many scenarios in order
    pub fn evaluate_batch(&self, scenarios: &[LabeledScenario]) -> Vec<(u32, ScenarioReport)> {
        log::info!("Evaluating {} scenarios", scenarios.len());
        scenarios
            .iter()
            .map(|labeled| (labeled.scenario_id, self.evaluate(&labeled.scenario)))
            .collect()
    }

    /// Get reference to the assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get mutable reference to the assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }
}
