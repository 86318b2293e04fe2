//! Loan projections over time: equity series, monthly schedule and lifetime cost

mod equity;
mod lifetime;
mod schedule;
mod state;

pub use equity::{balance_at_month, equity_after_years, equity_at_month, project, EquityPoint, EQUITY_STEP_YEARS};
pub use lifetime::{lifetime_breakdown, pmi_months, LifetimeCostBreakdown};
pub use schedule::{amortization_schedule, AmortizationRow, AmortizationSchedule, ScheduleSummary, YearSummary};
pub use state::AmortizationState;
