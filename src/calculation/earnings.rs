//! Break-time earnings calculation.
//!
//! Earnings are the already-truncated per-minute rate multiplied by the
//! break minutes for the horizon. Rounding happens once, when the rate is
//! derived; the product is never rounded again.

use rust_decimal::Decimal;

use crate::models::{Horizon, Profile};

use super::{minutes_spent, per_minute_rate};

/// Returns the wage a profile earns while on break over a horizon.
///
/// # Examples
///
/// ```
/// use throne_engine::calculation::earnings;
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
/// assert_eq!(earnings(&profile, Horizon::Daily).to_string(), "30.00");
/// ```
pub fn earnings(profile: &Profile, horizon: Horizon) -> Decimal {
    earnings_at_rate(per_minute_rate(profile), minutes_spent(profile, horizon))
}

/// Multiplies a per-minute rate by a number of minutes.
pub fn earnings_at_rate(rate: Decimal, minutes: u32) -> Decimal {
    rate * Decimal::from(minutes)
}
