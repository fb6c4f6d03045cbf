//! Work schedule catalog.
//!
//! The catalog is static data: each [`WorkSchedule`] variant maps to a
//! [`ScheduleSpec`] through [`schedule_spec`]. Conversions that use the
//! figures live in the calculation module, not on the enum.

use serde::{Deserialize, Serialize};

/// A named work rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkSchedule {
    /// Six days on, one day off (retail and services).
    SixOnOne,
    /// Five days on, two days off (the standard working week).
    FiveOnTwo,
    /// Four days on, three days off.
    FourOnThree,
    /// Twelve hours on, thirty-six hours off (healthcare shifts).
    TwelveOnThirtySix,
}

impl WorkSchedule {
    /// Every schedule in the catalog.
    pub const ALL: [WorkSchedule; 4] = [
        WorkSchedule::SixOnOne,
        WorkSchedule::FiveOnTwo,
        WorkSchedule::FourOnThree,
        WorkSchedule::TwelveOnThirtySix,
    ];
}

/// The figures that define a work schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Days worked per week.
    pub days_per_week: u32,
    /// Days worked per month.
    pub days_per_month: u32,
    /// Days worked per year.
    pub days_per_year: u32,
    /// Minutes in one shift.
    pub minutes_per_shift: u32,
}

/// Returns the catalog entry for a schedule.
///
/// # Examples
///
/// ```
/// use throne_engine::models::{schedule_spec, WorkSchedule};
///
/// let spec = schedule_spec(WorkSchedule::FiveOnTwo);
/// assert_eq!(spec.days_per_month, 20);
/// assert_eq!(spec.minutes_per_shift, 480);
/// ```
pub const fn schedule_spec(schedule: WorkSchedule) -> ScheduleSpec {
    match schedule {
        WorkSchedule::SixOnOne => ScheduleSpec {
            days_per_week: 6,
            days_per_month: 26,
            days_per_year: 312,
            minutes_per_shift: 440,
        },
        WorkSchedule::FiveOnTwo => ScheduleSpec {
            days_per_week: 5,
            days_per_month: 20,
            days_per_year: 240,
            minutes_per_shift: 480,
        },
        WorkSchedule::FourOnThree => ScheduleSpec {
            days_per_week: 4,
            days_per_month: 16,
            days_per_year: 192,
            minutes_per_shift: 480,
        },
        WorkSchedule::TwelveOnThirtySix => ScheduleSpec {
            days_per_week: 3,
            days_per_month: 12,
            days_per_year: 144,
            minutes_per_shift: 720,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_reference_figures() {
        let expected = [
            (WorkSchedule::SixOnOne, 6, 26, 312, 440),
            (WorkSchedule::FiveOnTwo, 5, 20, 240, 480),
            (WorkSchedule::FourOnThree, 4, 16, 192, 480),
            (WorkSchedule::TwelveOnThirtySix, 3, 12, 144, 720),
        ];

        for (schedule, week, month, year, shift) in expected {
            let spec = schedule_spec(schedule);
            assert_eq!(spec.days_per_week, week, "{:?}", schedule);
            assert_eq!(spec.days_per_month, month, "{:?}", schedule);
            assert_eq!(spec.days_per_year, year, "{:?}", schedule);
            assert_eq!(spec.minutes_per_shift, shift, "{:?}", schedule);
        }
    }

    #[test]
    fn test_every_schedule_has_positive_shift_minutes() {
        for schedule in WorkSchedule::ALL {
            assert!(schedule_spec(schedule).minutes_per_shift > 0);
        }
    }

    #[test]
    fn test_work_schedule_serialization() {
        assert_eq!(
            serde_json::to_string(&WorkSchedule::TwelveOnThirtySix).unwrap(),
            "\"twelve_on_thirty_six\""
        );
        let schedule: WorkSchedule = serde_json::from_str("\"six_on_one\"").unwrap();
        assert_eq!(schedule, WorkSchedule::SixOnOne);
    }
}
