//! Request types for the Paid Throne API.
//!
//! This module defines the JSON request body for `/v1/calculate` and the
//! query string for `/v1/ranking`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayType, Profile, WorkSchedule};

/// Request body for the `/v1/calculate` endpoint.
///
/// The wage may be sent as a JSON number or a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
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

impl From<CalculationRequest> for Profile {
    fn from(req: CalculationRequest) -> Self {
        Profile {
            username: req.username,
            average_break_minutes: req.average_break_minutes,
            visits_per_day: req.visits_per_day,
            wage: req.wage,
            pay_type: req.pay_type,
            work_schedule: req.work_schedule,
        }
    }
}

/// Query string for the `/v1/ranking` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingQuery {
    /// The criterion name, e.g. `higher_earnings`.
    #[serde(rename = "type")]
    pub ranking_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wage_accepts_number_or_string() {
        let as_number: CalculationRequest = serde_json::from_str(
            r#"{"username":"KingJohn123","average_break_minutes":10,"visits_per_day":3,
                "wage":100,"pay_type":"hourly","work_schedule":"five_on_two"}"#,
        )
        .unwrap();
        let as_string: CalculationRequest = serde_json::from_str(
            r#"{"username":"KingJohn123","average_break_minutes":10,"visits_per_day":3,
                "wage":"100.50","pay_type":"hourly","work_schedule":"five_on_two"}"#,
        )
        .unwrap();

        assert_eq!(as_number.wage, Decimal::new(100, 0));
        assert_eq!(as_string.wage, Decimal::new(10050, 2));
    }

    #[test]
    fn test_request_converts_to_profile() {
        let request = CalculationRequest {
            username: "KingJohn123".to_string(),
            average_break_minutes: 10,
            visits_per_day: 3,
            wage: Decimal::new(60, 0),
            pay_type: PayType::Hourly,
            work_schedule: WorkSchedule::TwelveOnThirtySix,
        };

        let profile: Profile = request.into();

        assert_eq!(profile.username, "KingJohn123");
        assert_eq!(profile.daily_break_minutes(), 30);
        assert_eq!(profile.work_schedule, WorkSchedule::TwelveOnThirtySix);
    }

    #[test]
    fn test_unknown_schedule_rejected() {
        let result: Result<CalculationRequest, _> = serde_json::from_str(
            r#"{"username":"KingJohn123","average_break_minutes":10,"visits_per_day":3,
                "wage":100,"pay_type":"hourly","work_schedule":"seven_on_zero"}"#,
        );

        assert!(result.is_err());
    }
}
