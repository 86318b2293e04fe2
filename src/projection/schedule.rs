//! Month-by-month amortization schedule

use crate::calculator::amortization;
use crate::scenario::Scenario;
use super::state::AmortizationState;
use serde::{Deserialize, Serialize};

/// One monthly payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    // Timing
    pub payment_number: u32,
    pub year: u32,
    pub month_in_year: u32,

    // Payment split
    pub bop_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub eop_balance: f64,

    // Running totals
    pub cumulative_interest: f64,
    pub cumulative_principal: f64,
}

/// Interest and principal paid in one loan year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub interest: f64,
    pub principal: f64,
    pub ending_balance: f64,
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_payments: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_principal: f64,
    pub final_balance: f64,
}

/// Complete schedule for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub monthly_payment: f64,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Roll the loan forward one payment at a time
    pub fn build(scenario: &Scenario) -> Self {
        let loan_amount = scenario.loan_amount();
        let rate = scenario.monthly_rate();
        let n = scenario.num_payments();
        let monthly_payment = amortization::monthly_payment(loan_amount, rate, n);

        let mut state = AmortizationState::at_origination(loan_amount);
        let mut rows = Vec::with_capacity(n as usize);

        for _month in 1..=n {
            state.advance_month();

            let interest = state.bop_balance * rate;
            // Last payment clears whatever rounding left behind
            let principal = if state.payment_number == n {
                state.bop_balance
            } else {
                (monthly_payment - interest).min(state.bop_balance)
            };
            state.apply_payment(interest, principal);

            rows.push(AmortizationRow {
                payment_number: state.payment_number,
                year: state.year,
                month_in_year: state.month_in_year,
                bop_balance: state.bop_balance,
                payment: interest + principal,
                interest,
                principal,
                eop_balance: state.eop_balance,
                cumulative_interest: state.cumulative_interest,
                cumulative_principal: state.cumulative_principal,
            });
        }

        Self { monthly_payment, rows }
    }

    /// Balance after a given number of payments (0 = origination)
    pub fn balance_after(&self, payments_made: u32) -> Option<f64> {
        match payments_made {
            0 => self.rows.first().map(|r| r.bop_balance),
            k => self.rows.get(k as usize - 1).map(|r| r.eop_balance),
        }
    }

    /// Per-year totals
    pub fn yearly(&self) -> Vec<YearSummary> {
        let mut years: Vec<YearSummary> = Vec::new();

        for row in &self.rows {
            match years.last_mut() {
                Some(current) if current.year == row.year => {
                    current.interest += row.interest;
                    current.principal += row.principal;
                    current.ending_balance = row.eop_balance;
                }
                _ => years.push(YearSummary {
                    year: row.year,
                    interest: row.interest,
                    principal: row.principal,
                    ending_balance: row.eop_balance,
                }),
            }
        }

        years
    }

    pub fn summary(&self) -> ScheduleSummary {
        let total_interest: f64 = self.rows.iter().map(|r| r.interest).sum();
        let total_principal: f64 = self.rows.iter().map(|r| r.principal).sum();

        ScheduleSummary {
            total_payments: self.rows.len() as u32,
            total_paid: total_interest + total_principal,
            total_interest,
            total_principal,
            final_balance: self.rows.last().map(|r| r.eop_balance).unwrap_or(0.0),
        }
    }
}

/// Build the monthly amortization schedule for a scenario
pub fn amortization_schedule(scenario: &Scenario) -> AmortizationSchedule {
    AmortizationSchedule::build(scenario)
}
