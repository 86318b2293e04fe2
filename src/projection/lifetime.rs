//! Lifetime cost breakdown with PMI limited to its cancellation horizon

use crate::assumptions::{Assumptions, PmiCancellation};
use crate::calculator::{DerivedFigures, MortgageCalculator};
use crate::scenario::Scenario;
use super::equity::{balance_at_month, equity_after_years};
use serde::{Deserialize, Serialize};

/// What the loan costs over its whole life
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifetimeCostBreakdown {
    pub down_payment: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_property_tax: f64,
    pub total_insurance: f64,
    pub total_pmi: f64,
    /// Number of monthly PMI premiums paid
    pub pmi_months: u32,
    pub total_cost: f64,
    /// Lifetime interest as a percent of the amount borrowed
    pub interest_to_loan_percent: f64,
    pub interest_exceeds_loan: bool,
    pub equity_after_five_years: f64,
}

/// Number of months PMI is paid under the cancellation policy
pub fn pmi_months(scenario: &Scenario, figures: &DerivedFigures, policy: PmiCancellation) -> u32 {
    let n = scenario.num_payments();

    if !figures.has_pmi() {
        return 0;
    }

    match policy {
        PmiCancellation::Never => n,
        PmiCancellation::FixedMonths { months } => months.min(n),
        PmiCancellation::EquityThreshold { max_loan_to_value } => {
            let limit = max_loan_to_value * scenario.home_price;
            // PMI is owed on each payment made while the balance is above the limit
            (0..=n)
                .find(|&k| balance_at_month(scenario, k) <= limit)
                .unwrap_or(n)
        }
    }
}

impl LifetimeCostBreakdown {
    pub fn compute(scenario: &Scenario, figures: &DerivedFigures, policy: PmiCancellation) -> Self {
        let payments = scenario.num_payments() as f64;

        let total_principal = figures.loan_amount;
        let total_interest = figures.total_interest_lifetime;
        let total_property_tax = figures.monthly_property_tax * payments;
        let total_insurance = figures.monthly_insurance * payments;

        let pmi_months = pmi_months(scenario, figures, policy);
        let total_pmi = figures.monthly_pmi * pmi_months as f64;

        let total_cost = figures.down_payment
            + total_principal
            + total_interest
            + total_property_tax
            + total_insurance
            + total_pmi;

        let interest_to_loan_percent = if total_principal > 0.0 {
            total_interest / total_principal * 100.0
        } else {
            0.0
        };

        Self {
            down_payment: figures.down_payment,
            total_principal,
            total_interest,
            total_property_tax,
            total_insurance,
            total_pmi,
            pmi_months,
            total_cost,
            interest_to_loan_percent,
            interest_exceeds_loan: total_interest > total_principal,
            equity_after_five_years: equity_after_years(scenario, 5),
        }
    }

    /// Property tax plus insurance over the term
    pub fn total_escrow(&self) -> f64 {
        self.total_property_tax + self.total_insurance
    }
}

/// Lifetime breakdown under the standard lending assumptions
pub fn lifetime_breakdown(scenario: &Scenario) -> LifetimeCostBreakdown {
    let assumptions = Assumptions::standard();
    let figures = MortgageCalculator::new(assumptions).compute(scenario);
    LifetimeCostBreakdown::compute(scenario, &figures, assumptions.pmi_cancellation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{PMI_APPROXIMATE_MONTHS, PMI_CANCELLATION_LTV};
    use crate::calculator;
    use approx::assert_abs_diff_eq;

    fn equity_policy() -> PmiCancellation {
        PmiCancellation::EquityThreshold {
            max_loan_to_value: PMI_CANCELLATION_LTV,
        }
    }

    #[test]
    fn test_equity_threshold_month() {
        let s = Scenario::default();
        let f = calculator::compute(&s);
        let months = pmi_months(&s, &f, equity_policy());

        // 315,000 reaches 80% of 350,000 a little under eight years in
        assert_eq!(months, 95);
        assert!(balance_at_month(&s, months) <= 280_000.0);
        assert!(balance_at_month(&s, months - 1) > 280_000.0);
    }

    #[test]
    fn test_fixed_and_never_policies() {
        let s = Scenario::default();
        let f = calculator::compute(&s);
        let fixed = PmiCancellation::FixedMonths { months: PMI_APPROXIMATE_MONTHS };

        assert_eq!(pmi_months(&s, &f, fixed), 132);
        assert_eq!(pmi_months(&s, &f, PmiCancellation::Never), 360);

        let short = s.with_term(10);
        let fs = calculator::compute(&short);
        assert_eq!(pmi_months(&short, &fs, fixed), 120);
    }

    #[test]
    fn test_no_pmi_no_months() {
        let s = Scenario::new(400_000.0, 120_000.0, 25.0, 6.0, 30);
        let f = calculator::compute(&s);
        assert_eq!(pmi_months(&s, &f, PmiCancellation::Never), 0);

        let breakdown = LifetimeCostBreakdown::compute(&s, &f, equity_policy());
        assert_eq!(breakdown.total_pmi, 0.0);
    }

    #[test]
    fn test_breakdown_for_default_scenario() {
        let s = Scenario::default();
        let f = calculator::compute(&s);
        let b = LifetimeCostBreakdown::compute(&s, &f, PmiCancellation::FixedMonths { months: 132 });

        assert_abs_diff_eq!(b.total_pmi, 131.25 * 132.0, epsilon = 1e-6);
        assert_abs_diff_eq!(b.total_property_tax, 126_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(b.total_insurance, 15_750.0, epsilon = 1e-6);
        assert_abs_diff_eq!(b.interest_to_loan_percent, 127.54, epsilon = 0.01);
        assert!(b.interest_exceeds_loan);
        assert_abs_diff_eq!(b.equity_after_five_years, 55_125.42, epsilon = 0.01);

        let expected = 35_000.0 + 315_000.0 + f.total_interest_lifetime + 126_000.0 + 15_750.0 + 17_325.0;
        assert_abs_diff_eq!(b.total_cost, expected, epsilon = 1e-6);
        // Full-term PMI figure is larger
        assert!(b.total_cost < f.total_cost_lifetime);
    }

    #[test]
    fn test_standard_breakdown_uses_equity_threshold() {
        let b = lifetime_breakdown(&Scenario::default());
        assert_eq!(b.pmi_months, 95);
        assert_abs_diff_eq!(b.total_pmi, 131.25 * 95.0, epsilon = 1e-6);
    }

    #[test]
    fn test_paid_off_purchase() {
        let mut s = Scenario::default();
        s.down_payment_percent = 100.0;
        let f = calculator::compute(&s);
        let b = LifetimeCostBreakdown::compute(&s, &f, equity_policy());

        assert_eq!(b.total_principal, 0.0);
        assert_eq!(b.interest_to_loan_percent, 0.0);
        assert!(!b.interest_exceeds_loan);
    }
}
