//! Fixed-rate amortization formulas
//!
//! Closed-form level payment and remaining balance. A zero rate falls back to
//! straight-line repayment instead of dividing by zero.

/// Convert an annual nominal rate in percent to a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Level monthly payment that fully repays a loan.
///
/// # Arguments
/// * `principal` - Amount borrowed
/// * `monthly_rate` - Monthly rate as a decimal (0.065 / 12 for 6.5% annual)
/// * `num_payments` - Number of monthly payments, must be positive
///
/// # Returns
/// * `f64` - Principal and interest per month; `principal / num_payments` when the rate is zero
pub fn monthly_payment(principal: f64, monthly_rate: f64, num_payments: u32) -> f64 {
    let n = num_payments as f64;

    if monthly_rate > 0.0 {
        let growth = (1.0 + monthly_rate).powi(num_payments as i32);
        principal * monthly_rate * growth / (growth - 1.0)
    } else {
        principal / n
    }
}

/// Outstanding balance after `payments_made` level payments, floored at zero.
///
/// Balance(k) = L(1+r)^k - P((1+r)^k - 1)/r, or L - P*k when r is zero.
pub fn remaining_balance(principal: f64, monthly_rate: f64, payment: f64, payments_made: u32) -> f64 {
    let k = payments_made as f64;

    let balance = if monthly_rate > 0.0 {
        let growth = (1.0 + monthly_rate).powi(payments_made as i32);
        principal * growth - payment * (growth - 1.0) / monthly_rate
    } else {
        principal - payment * k
    };

    // Drift near maturity can leave a tiny negative remainder
    balance.max(0.0)
}

/// Total interest paid over the life of a loan
pub fn total_interest(principal: f64, payment: f64, num_payments: u32) -> f64 {
    payment * num_payments as f64 - principal
}
