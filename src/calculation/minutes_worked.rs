//! Time-horizon conversion.
//!
//! This module converts a work schedule into the number of working days and
//! working minutes in a day, month or year.

use crate::models::{Horizon, WorkSchedule, schedule_spec};

/// Returns how many working days a horizon spans on a schedule.
///
/// A daily quantity is multiplied by this figure to express it over the
/// horizon: 1 for a day, `days_per_month` for a month and `days_per_year`
/// for a year.
///
/// # Examples
///
/// ```
/// use throne_engine::calculation::days_in_horizon;
/// use throne_engine::models::{Horizon, WorkSchedule};
///
/// assert_eq!(days_in_horizon(WorkSchedule::SixOnOne, Horizon::Daily), 1);
/// assert_eq!(days_in_horizon(WorkSchedule::SixOnOne, Horizon::Monthly), 26);
/// assert_eq!(days_in_horizon(WorkSchedule::SixOnOne, Horizon::Yearly), 312);
/// ```
pub fn days_in_horizon(schedule: WorkSchedule, horizon: Horizon) -> u32 {
    let spec = schedule_spec(schedule);
    match horizon {
        Horizon::Daily => 1,
        Horizon::Monthly => spec.days_per_month,
        Horizon::Yearly => spec.days_per_year,
    }
}

/// Returns the total minutes worked on a schedule over a horizon.
///
/// # Examples
///
/// ```
/// use throne_engine::calculation::minutes_worked;
/// use throne_engine::models::{Horizon, WorkSchedule};
///
/// assert_eq!(minutes_worked(WorkSchedule::FiveOnTwo, Horizon::Daily), 480);
/// assert_eq!(minutes_worked(WorkSchedule::FiveOnTwo, Horizon::Monthly), 9_600);
/// assert_eq!(minutes_worked(WorkSchedule::FiveOnTwo, Horizon::Yearly), 115_200);
/// ```
pub fn minutes_worked(schedule: WorkSchedule, horizon: Horizon) -> u32 {
    schedule_spec(schedule).minutes_per_shift * days_in_horizon(schedule, horizon)
}
