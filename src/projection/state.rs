//! Loan state tracking for the month-by-month schedule

/// State of the loan at a point in the schedule
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Payments made so far (0 before the first payment)
    pub payment_number: u32,

    /// Loan year (1-indexed)
    pub year: u32,

    /// Month within loan year (1-12)
    pub month_in_year: u32,

    /// Balance before this month's payment
    pub bop_balance: f64,

    /// Balance after this month's payment
    pub eop_balance: f64,

    pub cumulative_interest: f64,

    pub cumulative_principal: f64,
}

impl AmortizationState {
    /// State at loan origination, before any payment
    pub fn at_origination(loan_amount: f64) -> Self {
        Self {
            payment_number: 0,
            year: 1,
            month_in_year: 0,
            bop_balance: loan_amount,
            eop_balance: loan_amount,
            cumulative_interest: 0.0,
            cumulative_principal: 0.0,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.payment_number += 1;
        self.year = (self.payment_number - 1) / 12 + 1;
        self.month_in_year = (self.payment_number - 1) % 12 + 1;

        // BOP balance comes from prior EOP
        self.bop_balance = self.eop_balance;
    }

    /// Record this month's split
    pub fn apply_payment(&mut self, interest: f64, principal: f64) {
        self.cumulative_interest += interest;
        self.cumulative_principal += principal;
        self.eop_balance = (self.bop_balance - principal).max(0.0);
    }
}
