//! Derived figures for a single scenario

use crate::assumptions::AffordabilityTier;
use serde::{Deserialize, Serialize};

/// Everything the calculator derives from one scenario. Monthly amounts unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFigures {
    // Loan
    pub down_payment: f64,
    pub loan_amount: f64,

    // First payment split
    pub monthly_principal_interest: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,

    // Escrow and insurance
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_pmi: f64,

    // Totals
    pub monthly_piti: f64,
    pub total_monthly_housing_cost: f64,

    // Ratios (percent)
    pub monthly_income: f64,
    pub housing_dti: f64,
    pub total_dti: f64,
    pub affordability: AffordabilityTier,

    /// Income left after housing and other debts
    pub remaining_monthly_budget: f64,

    // Lifetime (whole term, PMI included for every month)
    pub total_interest_lifetime: f64,
    pub total_cost_lifetime: f64,
}

impl DerivedFigures {
    /// Tax, insurance and PMI: the non-loan part of PITI
    pub fn monthly_escrow(&self) -> f64 {
        self.monthly_property_tax + self.monthly_insurance + self.monthly_pmi
    }

    pub fn has_pmi(&self) -> bool {
        self.monthly_pmi > 0.0
    }

    /// Share of monthly income taken by the full housing cost, in percent
    pub fn housing_cost_share(&self) -> f64 {
        self.total_monthly_housing_cost / self.monthly_income * 100.0
    }
}
