//! Scenario inputs for a home purchase

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Loan terms offered by the interactive flow
pub const SUPPORTED_TERMS: [u32; 3] = [15, 20, 30];

/// Term the comparison savings are measured against
pub const BENCHMARK_TERM_YEARS: u32 = 30;

/// Longest loan term accepted by validation
pub const MAX_LOAN_TERM_YEARS: u32 = 50;

/// Whether a term is one of the offered choices
pub fn is_supported_term(years: u32) -> bool {
    SUPPORTED_TERMS.contains(&years)
}

/// A scenario field outside its documented domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("home price must be positive, got {0}")]
    NonPositivePrice(f64),

    #[error("annual income must be positive, got {0}")]
    NonPositiveIncome(f64),

    #[error("down payment percent must be between 0 and 100, got {0}")]
    DownPaymentOutOfRange(f64),

    #[error("interest rate must be between 0 and 100 percent, got {0}")]
    RateOutOfRange(f64),

    #[error("loan term must be at least one year")]
    ZeroTerm,

    #[error("loan term must be at most {max} years, got {0}", max = MAX_LOAN_TERM_YEARS)]
    TermTooLong(u32),

    #[error("{field} must be a non-negative amount, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },
}

/// One home purchase scenario. All amounts are in currency units, rates in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Purchase price of the home
    pub home_price: f64,

    /// Gross household income per year
    pub annual_income: f64,

    /// Down payment as a percent of home price
    pub down_payment_percent: f64,

    /// Annual nominal interest rate in percent (6.5 = 6.5%)
    pub interest_rate: f64,

    /// Loan term in years
    pub loan_term_years: u32,

    #[serde(default)]
    pub monthly_utilities: f64,

    #[serde(default)]
    pub monthly_maintenance: f64,

    #[serde(default)]
    pub monthly_hoa: f64,

    /// Car loans, student loans, card minimums and other recurring debt payments
    #[serde(default)]
    pub monthly_other_debts: f64,
}

impl Default for Scenario {
    /// Starting point of the interactive flow
    fn default() -> Self {
        Self::new(350_000.0, 75_000.0, 10.0, 6.5, 30).with_recurring_costs(200.0, 150.0, 0.0, 0.0)
    }
}

impl Scenario {
    /// Create a scenario with no recurring costs besides the mortgage
    pub fn new(
        home_price: f64,
        annual_income: f64,
        down_payment_percent: f64,
        interest_rate: f64,
        loan_term_years: u32,
    ) -> Self {
        Self {
            home_price,
            annual_income,
            down_payment_percent,
            interest_rate,
            loan_term_years,
            monthly_utilities: 0.0,
            monthly_maintenance: 0.0,
            monthly_hoa: 0.0,
            monthly_other_debts: 0.0,
        }
    }

    pub fn with_recurring_costs(
        mut self,
        utilities: f64,
        maintenance: f64,
        hoa: f64,
        other_debts: f64,
    ) -> Self {
        self.monthly_utilities = utilities;
        self.monthly_maintenance = maintenance;
        self.monthly_hoa = hoa;
        self.monthly_other_debts = other_debts;
        self
    }

    /// Same scenario with a different loan term
    pub fn with_term(mut self, loan_term_years: u32) -> Self {
        self.loan_term_years = loan_term_years;
        self
    }

    /// Same scenario with a different home price
    pub fn with_home_price(mut self, home_price: f64) -> Self {
        self.home_price = home_price;
        self
    }

    pub fn down_payment(&self) -> f64 {
        self.home_price * self.down_payment_percent / 100.0
    }

    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment()
    }

    /// Monthly nominal rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Total number of monthly payments
    pub fn num_payments(&self) -> u32 {
        self.loan_term_years.saturating_mul(12)
    }

    pub fn monthly_income(&self) -> f64 {
        self.annual_income / 12.0
    }

    /// Utilities, maintenance and HOA on top of PITI
    pub fn monthly_recurring_costs(&self) -> f64 {
        self.monthly_utilities + self.monthly_maintenance + self.monthly_hoa
    }

    /// Check the scenario against its input domain.
    ///
    /// The calculator itself never calls this; callers validate before computing.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !(self.home_price > 0.0) || !self.home_price.is_finite() {
            return Err(ScenarioError::NonPositivePrice(self.home_price));
        }
        if !(self.annual_income > 0.0) || !self.annual_income.is_finite() {
            return Err(ScenarioError::NonPositiveIncome(self.annual_income));
        }
        if !(0.0..=100.0).contains(&self.down_payment_percent) {
            return Err(ScenarioError::DownPaymentOutOfRange(self.down_payment_percent));
        }
        if !(0.0..=100.0).contains(&self.interest_rate) {
            return Err(ScenarioError::RateOutOfRange(self.interest_rate));
        }
        if self.loan_term_years == 0 {
            return Err(ScenarioError::ZeroTerm);
        }
        if self.loan_term_years > MAX_LOAN_TERM_YEARS {
            return Err(ScenarioError::TermTooLong(self.loan_term_years));
        }

        let amounts = [
            ("monthly utilities", self.monthly_utilities),
            ("monthly maintenance", self.monthly_maintenance),
            ("monthly HOA", self.monthly_hoa),
            ("monthly other debts", self.monthly_other_debts),
        ];
        for (field, value) in amounts {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ScenarioError::NegativeAmount { field, value });
            }
        }

        Ok(())
    }
}
