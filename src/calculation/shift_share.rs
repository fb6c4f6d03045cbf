//! Shift-share calculation.
//!
//! The share of a daily shift spent on break is a display percentage, so it
//! is computed in floating point rather than currency decimals.

/// Returns the percentage of a daily shift spent on break.
///
/// `minutes_worked_daily` comes from the schedule catalog and is always
/// positive.
///
/// # Examples
///
/// ```
/// use throne_engine::calculation::daily_percentage_of_shift;
///
/// assert_eq!(daily_percentage_of_shift(10, 3, 480), 6.25);
/// ```
pub fn daily_percentage_of_shift(
    average_break_minutes: u32,
    visits_per_day: u32,
    minutes_worked_daily: u32,
) -> f64 {
    debug_assert!(minutes_worked_daily > 0, "daily shift has no minutes");

    let break_minutes = f64::from(average_break_minutes * visits_per_day);
    (break_minutes * 100.0) / f64::from(minutes_worked_daily)
}
