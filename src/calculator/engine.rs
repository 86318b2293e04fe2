//! Mortgage calculator: scenario in, derived figures out

use crate::assumptions::Assumptions;
use crate::scenario::Scenario;
use super::amortization;
use super::figures::DerivedFigures;

/// Computes derived figures under a fixed set of lending assumptions
#[derive(Debug, Clone, Copy, Default)]
pub struct MortgageCalculator {
    assumptions: Assumptions,
}

impl MortgageCalculator {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Compute all derived figures for a scenario.
    ///
    /// Total over valid scenarios. Invalid input is not rejected here and may give
    /// meaningless numbers; see `Scenario::validate`.
    pub fn compute(&self, scenario: &Scenario) -> DerivedFigures {
        let escrow = &self.assumptions.escrow;

        // Loan
        let down_payment = scenario.down_payment();
        let loan_amount = scenario.loan_amount();
        let rate = scenario.monthly_rate();
        let n = scenario.num_payments();

        // Amortized payment and its first-period split
        let monthly_principal_interest = amortization::monthly_payment(loan_amount, rate, n);
        let interest_portion = loan_amount * rate;
        let principal_portion = monthly_principal_interest - interest_portion;

        // Escrow on the home price, PMI on the loan
        let monthly_property_tax = escrow.monthly_property_tax(scenario.home_price);
        let monthly_insurance = escrow.monthly_insurance(scenario.home_price);
        let monthly_pmi = escrow.monthly_pmi(loan_amount, scenario.down_payment_percent);

        let monthly_piti =
            monthly_principal_interest + monthly_property_tax + monthly_insurance + monthly_pmi;
        let total_monthly_housing_cost = monthly_piti + scenario.monthly_recurring_costs();

        // Ratios
        let monthly_income = scenario.monthly_income();
        let housing_dti = monthly_piti / monthly_income * 100.0;
        let total_dti =
            (total_monthly_housing_cost + scenario.monthly_other_debts) / monthly_income * 100.0;
        let affordability = self.assumptions.affordability.classify(housing_dti, total_dti);
        let remaining_monthly_budget =
            monthly_income - total_monthly_housing_cost - scenario.monthly_other_debts;

        // Lifetime
        let payments = n as f64;
        let total_interest_lifetime =
            amortization::total_interest(loan_amount, monthly_principal_interest, n);
        let total_cost_lifetime = down_payment
            + monthly_principal_interest * payments
            + monthly_property_tax * payments
            + monthly_insurance * payments
            + monthly_pmi * payments;

        log::debug!(
            "price={:.0} rate={}% term={}y -> P&I={:.2} PITI={:.2} housing DTI={:.1}% ({})",
            scenario.home_price,
            scenario.interest_rate,
            scenario.loan_term_years,
            monthly_principal_interest,
            monthly_piti,
            housing_dti,
            affordability,
        );

        DerivedFigures {
            down_payment,
            loan_amount,
            monthly_principal_interest,
            principal_portion,
            interest_portion,
            monthly_property_tax,
            monthly_insurance,
            monthly_pmi,
            monthly_piti,
            total_monthly_housing_cost,
            monthly_income,
            housing_dti,
            total_dti,
            affordability,
            remaining_monthly_budget,
            total_interest_lifetime,
            total_cost_lifetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AffordabilityTier;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::{prop_assert, proptest};

    fn calc() -> MortgageCalculator {
        MortgageCalculator::new(Assumptions::standard())
    }

    #[test]
    fn test_default_scenario_figures() {
        let f = calc().compute(&Scenario::default());

        assert_eq!(f.down_payment, 35_000.0);
        assert_eq!(f.loan_amount, 315_000.0);
        assert_abs_diff_eq!(f.monthly_principal_interest, 1991.08, epsilon = 0.1);
        assert_abs_diff_eq!(f.monthly_pmi, 131.25, epsilon = 1e-9);
        assert_abs_diff_eq!(f.monthly_property_tax, 350.0, epsilon = 1e-9);
        assert_abs_diff_eq!(f.monthly_insurance, 43.75, epsilon = 1e-9);
        assert_abs_diff_eq!(f.monthly_piti, 2516.01, epsilon = 0.01);
        assert_abs_diff_eq!(f.total_monthly_housing_cost, 2866.01, epsilon = 0.01);
        assert_abs_diff_eq!(f.housing_dti, 40.26, epsilon = 0.01);
        assert_abs_diff_eq!(f.total_dti, 45.86, epsilon = 0.01);
        assert_abs_diff_eq!(f.total_interest_lifetime, 401_765.14, epsilon = 0.01);
        assert_abs_diff_eq!(f.remaining_monthly_budget, 6250.0 - 2866.01, epsilon = 0.01);
        assert_eq!(f.affordability, AffordabilityTier::Difficult);
    }

    #[test]
    fn test_total_cost_includes_full_term_escrow() {
        let s = Scenario::default();
        let f = calc().compute(&s);
        let expected = 35_000.0 + (f.monthly_principal_interest + 350.0 + 43.75 + 131.25) * 360.0;
        assert_relative_eq!(f.total_cost_lifetime, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rate_boundary() {
        let mut s = Scenario::new(300_000.0, 90_000.0, 20.0, 0.0, 20);
        s.monthly_other_debts = 100.0;
        let f = calc().compute(&s);

        assert_eq!(f.monthly_principal_interest, 240_000.0 / 240.0);
        assert_eq!(f.interest_portion, 0.0);
        assert_eq!(f.principal_portion, f.monthly_principal_interest);
        assert_eq!(f.total_interest_lifetime, 0.0);
    }

    #[test]
    fn test_pmi_only_below_twenty_percent() {
        let below = calc().compute(&Scenario::new(400_000.0, 120_000.0, 19.0, 6.0, 30));
        let at = calc().compute(&Scenario::new(400_000.0, 120_000.0, 20.0, 6.0, 30));
        assert!(below.has_pmi());
        assert_eq!(at.monthly_pmi, 0.0);
    }

    #[test]
    fn test_comfortable_scenario() {
        let s = Scenario::new(250_000.0, 120_000.0, 20.0, 6.0, 30).with_recurring_costs(200.0, 100.0, 0.0, 300.0);
        let f = calc().compute(&s);
        assert!(f.housing_dti <= 28.0);
        assert!(f.total_dti <= 36.0);
        assert_eq!(f.affordability, AffordabilityTier::Comfortable);
    }

    #[test]
    fn test_custom_assumptions_flow_through() {
        let mut assumptions = Assumptions::standard();
        assumptions.escrow.property_tax_rate = 0.024;
        let f = MortgageCalculator::new(assumptions).compute(&Scenario::default());
        assert_abs_diff_eq!(f.monthly_property_tax, 700.0, epsilon = 1e-9);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_first_payment_split_sums_to_payment(
            price in 50_000u32..2_000_000,
            down_pct in 0u32..=100,
            rate_bp in 0u32..1500,
            term in 1u32..=40
        ) {
            let s = Scenario::new(price as f64, 80_000.0, down_pct as f64, rate_bp as f64 / 100.0, term);
            let f = calc().compute(&s);
            prop_assert!((f.principal_portion + f.interest_portion - f.monthly_principal_interest).abs() < 1e-6);
        }

        #[test]
        fn prop_pmi_follows_down_payment_threshold(
            price in 50_000u32..2_000_000,
            down_pct in 0u32..=60,
            rate_bp in 100u32..1200
        ) {
            let s = Scenario::new(price as f64, 80_000.0, down_pct as f64, rate_bp as f64 / 100.0, 30);
            let f = calc().compute(&s);
            if down_pct >= 20 {
                prop_assert!(f.monthly_pmi == 0.0);
            } else {
                prop_assert!(f.monthly_pmi > 0.0);
            }
        }

        #[test]
        fn prop_zero_rate_has_no_interest(
            price in 50_000u32..2_000_000,
            down_pct in 0u32..100,
            term in 1u32..=40
        ) {
            let s = Scenario::new(price as f64, 80_000.0, down_pct as f64, 0.0, term);
            let f = calc().compute(&s);
            let expected = f.loan_amount / (term * 12) as f64;
            prop_assert!((f.monthly_principal_interest - expected).abs() < 1e-9);
            prop_assert!(f.total_interest_lifetime.abs() < 1e-6);
        }

        #[test]
        fn prop_tier_never_improves_as_price_rises(
            income in 30_000u32..250_000,
            down_pct in 0u32..=50,
            rate_bp in 300u32..1000,
            debts in 0u32..2_000
        ) {
            let base = Scenario::new(100_000.0, income as f64, down_pct as f64, rate_bp as f64 / 100.0, 30)
                .with_recurring_costs(200.0, 150.0, 0.0, debts as f64);
            let mut previous = AffordabilityTier::Comfortable;
            for step in 0..60 {
                let price = 100_000.0 + step as f64 * 25_000.0;
                let tier = calc().compute(&base.with_home_price(price)).affordability;
                prop_assert!(tier >= previous, "tier improved from {} to {} at {}", previous, tier, price);
                previous = tier;
            }
        }
    }
}
