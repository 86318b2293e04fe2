//! Loan term comparison and recommendation
//!
//! Re-runs the payment formula once per candidate term. Escrow, PMI and DTI are not
//! re-derived per term except for the housing ratio used by the recommendation.

use crate::assumptions::Assumptions;
use crate::calculator::{amortization, MortgageCalculator};
use crate::scenario::{Scenario, BENCHMARK_TERM_YEARS, SUPPORTED_TERMS};
use serde::{Deserialize, Serialize};

/// Payment and interest for one candidate term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermComparisonRow {
    pub term: u32,
    pub monthly_payment: f64,
    pub total_interest: f64,
    /// Sum of all principal and interest payments
    pub total_cost: f64,
    /// Interest saved relative to the 30-year term (negative for longer terms)
    pub interest_savings_vs_30_year: f64,
}

/// Rows in the caller's order plus the recommended term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermComparison {
    pub rows: Vec<TermComparisonRow>,
    /// `None` only when there were no candidates
    pub recommended_term: Option<u32>,
}

impl TermComparison {
    pub fn row(&self, term: u32) -> Option<&TermComparisonRow> {
        self.rows.iter().find(|r| r.term == term)
    }

    pub fn recommended(&self) -> Option<&TermComparisonRow> {
        self.recommended_term.and_then(|term| self.row(term))
    }
}

/// Compares candidate terms for a scenario
#[derive(Debug, Clone, Copy, Default)]
pub struct TermComparator {
    calculator: MortgageCalculator,
}

impl TermComparator {
    pub fn new(assumptions: Assumptions) -> Self {
        Self {
            calculator: MortgageCalculator::new(assumptions),
        }
    }

    /// Payment, interest and savings for each candidate term
    pub fn rows(&self, scenario: &Scenario, candidate_terms: &[u32]) -> Vec<TermComparisonRow> {
        let loan_amount = scenario.loan_amount();
        let rate = scenario.monthly_rate();

        let benchmark_interest = term_interest(loan_amount, rate, BENCHMARK_TERM_YEARS);

        candidate_terms
            .iter()
            .map(|&term| {
                let n = term.saturating_mul(12);
                let monthly_payment = amortization::monthly_payment(loan_amount, rate, n);
                let total_interest = amortization::total_interest(loan_amount, monthly_payment, n);
                let interest_savings_vs_30_year = if term == BENCHMARK_TERM_YEARS {
                    0.0
                } else {
                    benchmark_interest - total_interest
                };

                TermComparisonRow {
                    term,
                    monthly_payment,
                    total_interest,
                    total_cost: monthly_payment * n as f64,
                    interest_savings_vs_30_year,
                }
            })
            .collect()
    }

    /// Shortest candidate whose housing DTI stays comfortable, else the longest.
    ///
    /// The housing ratio uses the term's P&I plus the scenario's own tax, insurance
    /// and PMI, so only the loan payment changes between terms.
    pub fn recommend(&self, scenario: &Scenario, candidate_terms: &[u32]) -> Option<u32> {
        let mut terms = candidate_terms.to_vec();
        terms.sort_unstable();
        terms.dedup();

        let longest = *terms.last()?;

        let figures = self.calculator.compute(scenario);
        let escrow = figures.monthly_escrow();
        let thresholds = &self.calculator.assumptions().affordability;
        let loan_amount = scenario.loan_amount();
        let rate = scenario.monthly_rate();

        let recommended = terms
            .into_iter()
            .find(|&term| {
                let payment = amortization::monthly_payment(loan_amount, rate, term.saturating_mul(12));
                let housing_dti = (payment + escrow) / figures.monthly_income * 100.0;
                thresholds.housing_is_comfortable(housing_dti)
            })
            .unwrap_or(longest);

        Some(recommended)
    }

    pub fn compare(&self, scenario: &Scenario, candidate_terms: &[u32]) -> TermComparison {
        if candidate_terms.is_empty() {
            log::warn!("Term comparison requested with no candidate terms");
        }

        TermComparison {
            rows: self.rows(scenario, candidate_terms),
            recommended_term: self.recommend(scenario, candidate_terms),
        }
    }

    /// Compare the 15, 20 and 30 year terms
    pub fn compare_supported(&self, scenario: &Scenario) -> TermComparison {
        self.compare(scenario, &SUPPORTED_TERMS)
    }
}

fn term_interest(loan_amount: f64, rate: f64, term: u32) -> f64 {
    let n = term.saturating_mul(12);
    let payment = amortization::monthly_payment(loan_amount, rate, n);
    amortization::total_interest(loan_amount, payment, n)
}

/// Comparison rows under the standard lending assumptions
pub fn compare(scenario: &Scenario, candidate_terms: &[u32]) -> Vec<TermComparisonRow> {
    TermComparator::default().rows(scenario, candidate_terms)
}
