//! Home Loan - mortgage cost and affordability engine for home buyers
//!
//! This library provides:
//! - Monthly payment, escrow, PMI and debt-to-income figures for a scenario
//! - Affordability classification against standard lending ratios
//! - Side-by-side comparison of 15, 20 and 30 year terms with a recommendation
//! - Equity projection and month-by-month amortization schedules
//! - Lifetime cost breakdown with configurable PMI cancellation
//!
//! All computation is pure: a scenario goes in, values come out.

pub mod assumptions;
pub mod calculator;
pub mod cli;
pub mod comparison;
pub mod insights;
pub mod projection;
pub mod runner;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{AffordabilityTier, Assumptions, PmiCancellation};
pub use calculator::{compute, DerivedFigures, MortgageCalculator};
pub use comparison::{compare, TermComparator, TermComparison, TermComparisonRow};
pub use projection::{amortization_schedule, equity_at_month, project, EquityPoint};
pub use runner::{ScenarioReport, ScenarioRunner};
pub use scenario::Scenario;
