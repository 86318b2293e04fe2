//! Escrow and mortgage insurance rates
//!
//! Property tax and homeowners insurance are charged on the home price, PMI on the
//! loan amount. All rates are annual and converted to monthly amounts here.

use serde::{Deserialize, Serialize};

/// Annual property tax as a fraction of home price
pub const PROPERTY_TAX_RATE: f64 = 0.012;

/// Annual homeowners insurance as a fraction of home price
pub const HOMEOWNERS_INSURANCE_RATE: f64 = 0.0015;

/// Annual private mortgage insurance as a fraction of the loan amount
pub const PMI_RATE: f64 = 0.005;

/// Down payment percent at or above which no PMI is charged
pub const PMI_DOWN_PAYMENT_THRESHOLD: f64 = 20.0;

/// Loan-to-value at which PMI is dropped under the equity threshold policy
pub const PMI_CANCELLATION_LTV: f64 = 0.80;

/// Approximate PMI duration (about 11 years) used by the fixed-horizon policy
pub const PMI_APPROXIMATE_MONTHS: u32 = 132;

/// Escrow and PMI rates applied to a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EscrowRates {
    /// Annual property tax rate on home price
    pub property_tax_rate: f64,

    /// Annual insurance rate on home price
    pub insurance_rate: f64,

    /// Annual PMI rate on loan amount
    pub pmi_rate: f64,

    /// PMI applies when the down payment percent is strictly below this value
    pub pmi_down_payment_threshold: f64,
}

impl Default for EscrowRates {
    fn default() -> Self {
        Self {
            property_tax_rate: PROPERTY_TAX_RATE,
            insurance_rate: HOMEOWNERS_INSURANCE_RATE,
            pmi_rate: PMI_RATE,
            pmi_down_payment_threshold: PMI_DOWN_PAYMENT_THRESHOLD,
        }
    }
}

impl EscrowRates {
    pub fn monthly_property_tax(&self, home_price: f64) -> f64 {
        home_price * self.property_tax_rate / 12.0
    }

    pub fn monthly_insurance(&self, home_price: f64) -> f64 {
        home_price * self.insurance_rate / 12.0
    }

    /// Whether a down payment of this size triggers PMI
    pub fn requires_pmi(&self, down_payment_percent: f64) -> bool {
        down_payment_percent < self.pmi_down_payment_threshold
    }

    /// Monthly PMI premium, zero when the down payment clears the threshold
    pub fn monthly_pmi(&self, loan_amount: f64, down_payment_percent: f64) -> f64 {
        if self.requires_pmi(down_payment_percent) {
            loan_amount * self.pmi_rate / 12.0
        } else {
            0.0
        }
    }
}

/// How long PMI is assumed to be paid when totalling lifetime cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PmiCancellation {
    /// Drop PMI at the first month the balance reaches this loan-to-value
    EquityThreshold { max_loan_to_value: f64 },
    /// Pay PMI for a fixed number of months (capped at the loan term)
    FixedMonths { months: u32 },
    /// Pay PMI for the whole term
    Never,
}

impl Default for PmiCancellation {
    fn default() -> Self {
        PmiCancellation::EquityThreshold {
            max_loan_to_value: PMI_CANCELLATION_LTV,
        }
    }
}
