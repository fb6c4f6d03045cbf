//! Boundary validation of profiles.
//!
//! The calculation functions assume a valid profile and never check their
//! inputs. Everything that reaches them must pass [`validate_profile`] first.

use crate::config::ProfileLimits;
use crate::error::{EngineError, EngineResult};
use crate::models::Profile;

/// Checks a profile against the configured limits.
///
/// Fields are checked in declaration order and the first failure is
/// returned. Zero visits per day is rejected like any other out-of-range
/// count.
///
/// # Examples
///
/// ```
/// use throne_engine::config::ProfileLimits;
/// use throne_engine::models::{PayType, Profile, WorkSchedule};
/// use throne_engine::validation::validate_profile;
/// use rust_decimal::Decimal;
///
/// let mut profile = Profile {
///     username: "KingJohn123".to_string(),
///     average_break_minutes: 15,
///     visits_per_day: 4,
///     wage: Decimal::new(5000, 0),
///     pay_type: PayType::Monthly,
///     work_schedule: WorkSchedule::FiveOnTwo,
/// };
/// assert!(validate_profile(&profile, &ProfileLimits::default()).is_ok());
///
/// profile.visits_per_day = 5;
/// assert!(validate_profile(&profile, &ProfileLimits::default()).is_err());
/// ```
pub fn validate_profile(profile: &Profile, limits: &ProfileLimits) -> EngineResult<()> {
    validate_username(&profile.username, limits)?;

    if profile.average_break_minutes < limits.min_break_minutes {
        return Err(invalid(
            "average_break_minutes",
            format!("must be at least {}", limits.min_break_minutes),
        ));
    }

    if !(limits.min_visits_per_day..=limits.max_visits_per_day).contains(&profile.visits_per_day)
    {
        return Err(invalid(
            "visits_per_day",
            format!(
                "must be between {} and {}",
                limits.min_visits_per_day, limits.max_visits_per_day
            ),
        ));
    }

    if profile.wage < limits.min_wage || profile.wage > limits.max_wage {
        return Err(invalid(
            "wage",
            format!("must be between {} and {}", limits.min_wage, limits.max_wage),
        ));
    }

    let daily_break = u64::from(profile.average_break_minutes) * u64::from(profile.visits_per_day);
    if daily_break > u64::from(limits.max_daily_break_minutes) {
        return Err(invalid(
            "average_break_minutes",
            format!(
                "{} min x {} visits exceeds {} minutes per day",
                profile.average_break_minutes,
                profile.visits_per_day,
                limits.max_daily_break_minutes
            ),
        ));
    }

    Ok(())
}

fn validate_username(username: &str, limits: &ProfileLimits) -> EngineResult<()> {
    let length = username.chars().count();
    if length < limits.username_min_length || length > limits.username_max_length {
        return Err(invalid(
            "username",
            format!(
                "must be between {} and {} characters",
                limits.username_min_length, limits.username_max_length
            ),
        ));
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("username", "must contain only letters and digits"));
    }

    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidProfile {
        field: field.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayType, WorkSchedule};
    use rust_decimal::Decimal;

    fn create_valid_profile() -> Profile {
        Profile {
            username: "KingJohn123".to_string(),
            average_break_minutes: 10,
            visits_per_day: 3,
            wage: Decimal::new(5000, 0),
            pay_type: PayType::Monthly,
            work_schedule: WorkSchedule::FiveOnTwo,
        }
    }

    fn rejected_field(profile: &Profile) -> String {
        match validate_profile(profile, &ProfileLimits::default()) {
            Err(EngineError::InvalidProfile { field, .. }) => field,
            other => panic!("Expected InvalidProfile error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate_profile(&create_valid_profile(), &ProfileLimits::default()).is_ok());
    }

    /// VL-001: username shape
    #[test]
    fn test_username_rules() {
        let mut profile = create_valid_profile();

        profile.username = "King".to_string();
        assert_eq!(rejected_field(&profile), "username");

        profile.username = "KingJohnTheSixteen".to_string();
        assert_eq!(rejected_field(&profile), "username");

        profile.username = "King_John".to_string();
        assert_eq!(rejected_field(&profile), "username");

        profile.username = "Kings".to_string();
        assert!(validate_profile(&profile, &ProfileLimits::default()).is_ok());
    }

    /// VL-002: average break lower bound
    #[test]
    fn test_break_below_minimum_rejected() {
        let mut profile = create_valid_profile();
        profile.average_break_minutes = 4;

        assert_eq!(rejected_field(&profile), "average_break_minutes");
    }

    /// VL-003: zero visits is not a valid value
    #[test]
    fn test_zero_visits_rejected() {
        let mut profile = create_valid_profile();
        profile.visits_per_day = 0;

        assert_eq!(rejected_field(&profile), "visits_per_day");
    }

    #[test]
    fn test_too_many_visits_rejected() {
        let mut profile = create_valid_profile();
        profile.average_break_minutes = 5;
        profile.visits_per_day = 6;

        assert_eq!(rejected_field(&profile), "visits_per_day");
    }

    /// VL-004: wage bounds
    #[test]
    fn test_wage_bounds() {
        let mut profile = create_valid_profile();

        profile.wage = Decimal::new(99, 2);
        assert_eq!(rejected_field(&profile), "wage");

        profile.wage = Decimal::new(5_000_001, 2);
        assert_eq!(rejected_field(&profile), "wage");

        profile.wage = Decimal::new(50_000, 0);
        assert!(validate_profile(&profile, &ProfileLimits::default()).is_ok());
    }

    /// VL-005: daily break ceiling
    #[test]
    fn test_daily_ceiling() {
        let mut profile = create_valid_profile();

        profile.average_break_minutes = 12;
        profile.visits_per_day = 5;
        assert!(validate_profile(&profile, &ProfileLimits::default()).is_ok());

        profile.average_break_minutes = 13;
        match validate_profile(&profile, &ProfileLimits::default()) {
            Err(EngineError::InvalidProfile { field, message }) => {
                assert_eq!(field, "average_break_minutes");
                assert!(message.contains("exceeds 60"));
            }
            other => panic!("Expected InvalidProfile error, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_break_does_not_overflow() {
        let mut profile = create_valid_profile();
        profile.average_break_minutes = u32::MAX;
        profile.visits_per_day = 5;

        assert_eq!(rejected_field(&profile), "average_break_minutes");
    }

    #[test]
    fn test_first_failing_field_wins() {
        let mut profile = create_valid_profile();
        profile.username = "x".to_string();
        profile.visits_per_day = 0;

        assert_eq!(rejected_field(&profile), "username");
    }
}
