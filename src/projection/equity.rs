//! Equity projection at fixed year steps
//!
//! Home value is held at the purchase price; equity grows only by paying down the loan.

use crate::calculator::amortization;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Years between points of the equity series
pub const EQUITY_STEP_YEARS: u32 = 5;

/// Balance and equity at a year offset from origination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub year_offset: u32,
    pub outstanding_balance: f64,
    pub equity: f64,
}

/// Outstanding balance after `payments_made` monthly payments
pub fn balance_at_month(scenario: &Scenario, payments_made: u32) -> f64 {
    let loan_amount = scenario.loan_amount();
    let rate = scenario.monthly_rate();
    let payment = amortization::monthly_payment(loan_amount, rate, scenario.num_payments());
    amortization::remaining_balance(loan_amount, rate, payment, payments_made)
}

/// Equity after `payments_made` monthly payments
pub fn equity_at_month(scenario: &Scenario, payments_made: u32) -> f64 {
    scenario.home_price - balance_at_month(scenario, payments_made)
}

/// Equity after a whole number of years
pub fn equity_after_years(scenario: &Scenario, years: u32) -> f64 {
    equity_at_month(scenario, years.saturating_mul(12))
}

/// Year offsets of the series: every step from 0, plus the final year
fn series_years(term: u32) -> Vec<u32> {
    let mut years: Vec<u32> = (0..=term).step_by(EQUITY_STEP_YEARS as usize).collect();
    if years.last() != Some(&term) {
        years.push(term);
    }
    years
}

/// Balance and equity every five years from origination through the final year
pub fn project(scenario: &Scenario) -> Vec<EquityPoint> {
    series_years(scenario.loan_term_years)
        .into_iter()
        .map(|year| {
            if year == 0 {
                return EquityPoint {
                    year_offset: 0,
                    outstanding_balance: scenario.loan_amount(),
                    equity: scenario.down_payment(),
                };
            }

            let outstanding_balance = balance_at_month(scenario, year.saturating_mul(12));
            EquityPoint {
                year_offset: year,
                outstanding_balance,
                equity: scenario.home_price - outstanding_balance,
            }
        })
        .collect()
}
