//! Calculation logic for the Paid Throne engine.
//!
//! This module contains the pure functions that turn a profile into time and
//! money figures: minutes worked per horizon, break minutes, the truncated
//! per-minute rate, break-time earnings, the share of a shift spent on break
//! and the optional tax breakdown. It also folds stored results into kingdom
//! statistics and top-five rankings.

mod aggregate;
mod assessment;
mod break_time;
mod earnings;
mod minutes_worked;
mod pay_rate;
mod ranking;
mod shift_share;
mod tax;

pub use aggregate::aggregate;
pub use assessment::{Assessment, NO_TAX_TABLE_WARNING, assess_profile};
pub use break_time::{humanize_minutes, minutes_spent};
pub use earnings::{earnings, earnings_at_rate};
pub use minutes_worked::{days_in_horizon, minutes_worked};
pub use pay_rate::{MINUTES_PER_HOUR, RATE_DECIMAL_PLACES, pay_period_minutes, per_minute_rate};
pub use ranking::{RANKING_SIZE, rank, rank_all};
pub use shift_share::daily_percentage_of_shift;
pub use tax::{
    BREAKDOWN_DECIMAL_PLACES, income_tax, monthly_salary, social_security_contribution,
    tax_breakdowns,
};
