//! Profile model and related types.
//!
//! A [`Profile`] is the immutable input to one calculation: who is asking,
//! how long and how often they take a break, what they earn and on which
//! schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WorkSchedule;

/// The unit in which a wage is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Wage per hour.
    Hourly,
    /// Wage per shift day.
    Daily,
    /// Wage per month.
    Monthly,
    /// Wage per year.
    Yearly,
}

/// A time window over which minutes or earnings are totalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    /// One working day.
    Daily,
    /// One month of working days.
    Monthly,
    /// One year of working days.
    Yearly,
}

impl Horizon {
    /// Every horizon, shortest first.
    pub const ALL: [Horizon; 3] = [Horizon::Daily, Horizon::Monthly, Horizon::Yearly];

    /// Returns the lowercase name used in logs and audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Horizon::Daily => "daily",
            Horizon::Monthly => "monthly",
            Horizon::Yearly => "yearly",
        }
    }
}

/// A worker's break habits and pay.
///
/// The engine assumes a profile has passed
/// [`validate_profile`](crate::validation::validate_profile).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name used in rankings.
    pub username: String,
    /// Average minutes per break visit.
    pub average_break_minutes: u32,
    /// Break visits per working day.
    pub visits_per_day: u32,
    /// Wage amount, quoted per `pay_type`.
    pub wage: Decimal,
    /// The unit the wage is quoted in.
    pub pay_type: PayType,
    /// The worker's rotation.
    pub work_schedule: WorkSchedule,
}

impl Profile {
    /// Minutes spent on break in one working day.
    ///
    /// # Examples
    ///
    /// ```
    /// use throne_engine::models::{PayType, Profile, WorkSchedule};
    /// use rust_decimal::Decimal;
    ///
    /// let profile = Profile {
    ///     username: "KingJohn123".to_string(),
    ///     average_break_minutes: 10,
    ///     visits_per_day: 3,
    ///     wage: Decimal::new(5000, 0),
    ///     pay_type: PayType::Monthly,
    ///     work_schedule: WorkSchedule::FiveOnTwo,
    /// };
    /// assert_eq!(profile.daily_break_minutes(), 30);
    /// ```
    pub fn daily_break_minutes(&self) -> u32 {
        self.average_break_minutes * self.visits_per_day
    }
}
