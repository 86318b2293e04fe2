//! Read-outs about a scenario that the buyer sees next to the numbers

use crate::assumptions::{AffordabilityThresholds, RatioStatus};
use crate::calculator::DerivedFigures;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Price-to-income multiple above which a purchase is flagged
pub const MAX_PRICE_TO_INCOME: f64 = 5.0;

/// Rates below this (percent) are cheaper than the current market
pub const BELOW_AVERAGE_RATE: f64 = 5.0;

/// Rates above this (percent) are worth shopping around on
pub const ABOVE_AVERAGE_RATE: f64 = 7.5;

/// Closing costs as a share of home price: low and high end of the usual range
pub const CLOSING_COST_LOW_RATE: f64 = 0.02;
pub const CLOSING_COST_HIGH_RATE: f64 = 0.05;

/// Share of home price to set aside for closing costs
pub const CLOSING_COST_BUDGET_RATE: f64 = 0.03;

/// Where the scenario's rate sits against typical market rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateBand {
    BelowAverage,
    Typical,
    AboveAverage,
}

impl RateBand {
    pub fn from_rate(interest_rate: f64) -> Self {
        if interest_rate < BELOW_AVERAGE_RATE {
            RateBand::BelowAverage
        } else if interest_rate > ABOVE_AVERAGE_RATE {
            RateBand::AboveAverage
        } else {
            RateBand::Typical
        }
    }
}

/// A component of the first monthly payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentComponent {
    Principal,
    Interest,
    PropertyTax,
    Insurance,
    Pmi,
}

impl PaymentComponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentComponent::Principal => "Principal",
            PaymentComponent::Interest => "Interest",
            PaymentComponent::PropertyTax => "Property Tax",
            PaymentComponent::Insurance => "Insurance",
            PaymentComponent::Pmi => "PMI",
        }
    }
}

/// First payment split into its components, PMI only when charged
pub fn payment_components(figures: &DerivedFigures) -> Vec<(PaymentComponent, f64)> {
    let mut components = vec![
        (PaymentComponent::Principal, figures.principal_portion),
        (PaymentComponent::Interest, figures.interest_portion),
        (PaymentComponent::PropertyTax, figures.monthly_property_tax),
        (PaymentComponent::Insurance, figures.monthly_insurance),
    ];
    if figures.has_pmi() {
        components.push((PaymentComponent::Pmi, figures.monthly_pmi));
    }
    components
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInsights {
    pub price_to_income_ratio: f64,
    pub price_exceeds_income_guideline: bool,
    pub rate_band: RateBand,
    pub largest_payment_component: PaymentComponent,
    /// Share of PITI against gross monthly income, percent
    pub piti_income_percent: f64,
    pub housing_dti_status: RatioStatus,
    pub total_dti_status: RatioStatus,
    /// Expected closing costs, low to high
    pub closing_cost_range: (f64, f64),
    pub closing_cost_budget: f64,
}

impl ScenarioInsights {
    /// Insights graded against the standard DTI limits
    pub fn from_figures(scenario: &Scenario, figures: &DerivedFigures) -> Self {
        Self::with_thresholds(scenario, figures, &AffordabilityThresholds::default())
    }

    pub fn with_thresholds(
        scenario: &Scenario,
        figures: &DerivedFigures,
        thresholds: &AffordabilityThresholds,
    ) -> Self {
        let price_to_income_ratio = scenario.home_price / scenario.annual_income;

        // Ties go to the later component
        let largest_payment_component = payment_components(figures)
            .into_iter()
            .fold(None::<(PaymentComponent, f64)>, |best, (component, value)| match best {
                Some((_, best_value)) if best_value > value => best,
                _ => Some((component, value)),
            })
            .map(|(component, _)| component)
            .unwrap_or(PaymentComponent::Principal);

        Self {
            price_to_income_ratio,
            price_exceeds_income_guideline: price_to_income_ratio > MAX_PRICE_TO_INCOME,
            rate_band: RateBand::from_rate(scenario.interest_rate),
            largest_payment_component,
            piti_income_percent: figures.housing_dti,
            housing_dti_status: thresholds.housing_status(figures.housing_dti),
            total_dti_status: thresholds.total_status(figures.total_dti),
            closing_cost_range: closing_cost_range(scenario.home_price),
            closing_cost_budget: scenario.home_price * CLOSING_COST_BUDGET_RATE,
        }
    }
}

/// Usual closing cost range for a home price
pub fn closing_cost_range(home_price: f64) -> (f64, f64) {
    (home_price * CLOSING_COST_LOW_RATE, home_price * CLOSING_COST_HIGH_RATE)
}
