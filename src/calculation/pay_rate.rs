//! Per-minute pay rate resolution.
//!
//! This module converts a wage quoted per hour, day, month or year into a
//! wage per minute. The division is exact decimal arithmetic and the result
//! is truncated toward zero to two decimal places. Stored earnings were
//! produced with this truncated rate, so the rounding policy must not change.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Horizon, PayType, Profile};

use super::minutes_worked;

/// Number of decimal places kept on a per-minute rate.
pub const RATE_DECIMAL_PLACES: u32 = 2;

/// Minutes in an hour, the divisor for hourly wages.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Returns the number of minutes a wage of the profile's pay type covers.
///
/// Hourly wages cover 60 minutes; daily, monthly and yearly wages cover the
/// minutes worked on the profile's schedule over that horizon.
pub fn pay_period_minutes(profile: &Profile) -> u32 {
    match profile.pay_type {
        PayType::Hourly => MINUTES_PER_HOUR,
        PayType::Daily => minutes_worked(profile.work_schedule, Horizon::Daily),
        PayType::Monthly => minutes_worked(profile.work_schedule, Horizon::Monthly),
        PayType::Yearly => minutes_worked(profile.work_schedule, Horizon::Yearly),
    }
}

/// Returns the profile's wage per minute, truncated to two decimal places.
///
/// The result always carries exactly two fractional digits.
///
/// # Panics
///
/// Panics if the pay period has zero minutes. Every schedule in the catalog
/// has a positive shift length, so this cannot happen for a valid profile.
///
/// # Examples
///
/// ```
/// use throne_engine::calculation::per_minute_rate;
/// use throne_engine::models::{PayType, Profile, WorkSchedule};
/// use rust_decimal::Decimal;
///
/// let profile = Profile {
///     username: "KingJohn123".to_string(),
///     average_break_minutes: 10,
///     visits_per_day: 3,
///     wage: Decimal::new(100, 0),
///     pay_type: PayType::Hourly,
///     work_schedule: WorkSchedule::FiveOnTwo,
/// };
///
/// // 100 / 60 = 1.666... which truncates to 1.66, never 1.67
/// assert_eq!(per_minute_rate(&profile).to_string(), "1.66");
/// ```
pub fn per_minute_rate(profile: &Profile) -> Decimal {
    let minutes = pay_period_minutes(profile);
    assert!(
        minutes > 0,
        "pay period for {:?} on {:?} has no minutes",
        profile.pay_type,
        profile.work_schedule
    );

    let mut rate = (profile.wage / Decimal::from(minutes))
        .round_dp_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::ToZero);
    rate.rescale(RATE_DECIMAL_PLACES);
    rate
}
