//! Break-time calculation.
//!
//! Break minutes are a daily figure (`average_break_minutes x visits_per_day`)
//! scaled by the number of working days in the horizon. All arithmetic is on
//! whole minutes.

use crate::models::{Horizon, Profile};

use super::days_in_horizon;

/// Returns the minutes a profile spends on break over a horizon.
///
/// # Examples
///
/// ```
/// use throne_engine::calculation::minutes_spent;
/// use throne_engine::models::{Horizon, PayType, Profile, WorkSchedule};
/// use rust_decimal::Decimal;
///
/// let profile = Profile {
///     username: "KingJohn123".to_string(),
///     average_break_minutes: 10,
///     visits_per_day: 3,
///     wage: Decimal::new(60, 0),
///     pay_type: PayType::Hourly,
///     work_schedule: WorkSchedule::FiveOnTwo,
/// };
///
/// assert_eq!(minutes_spent(&profile, Horizon::Daily), 30);
/// assert_eq!(minutes_spent(&profile, Horizon::Monthly), 600);
/// assert_eq!(minutes_spent(&profile, Horizon::Yearly), 7200);
/// ```
pub fn minutes_spent(profile: &Profile, horizon: Horizon) -> u32 {
    profile.daily_break_minutes() * days_in_horizon(profile.work_schedule, horizon)
}

/// Renders a minute count for display: `45 min`, `2h` or `2h05`.
pub fn humanize_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let remaining = minutes % 60;
    match (hours, remaining) {
        (0, _) => format!("{} min", minutes),
        (_, 0) => format!("{}h", hours),
        _ => format!("{}h{:02}", hours, remaining),
    }
}
