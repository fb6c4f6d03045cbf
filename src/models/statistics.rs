//! Stored rows and the kingdom-wide aggregates built from them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CalculationResult;

/// A calculation result as held by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult {
    /// Unique identifier of the stored row.
    pub id: Uuid,
    /// When the row was handed off for storage.
    pub recorded_at: DateTime<Utc>,
    /// The stored figures.
    #[serde(flatten)]
    pub result: CalculationResult,
}

impl StoredResult {
    /// Wraps a result with a fresh identifier and the current time.
    pub fn new(result: CalculationResult) -> Self {
        Self::with_id(Uuid::new_v4(), result)
    }

    /// Wraps a result under an identifier chosen by the caller.
    pub fn with_id(id: Uuid, result: CalculationResult) -> Self {
        Self {
            id,
            recorded_at: Utc::now(),
            result,
        }
    }
}

/// Aggregate figures across every stored result.
///
/// For an empty store every field is zero; zero is also the sentinel for the
/// maximum daily minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomStatistics {
    /// Number of stored submissions.
    pub total_submissions: u64,
    /// Sum of yearly break minutes.
    pub total_yearly_minutes_spent: u64,
    /// Sum of yearly break-time earnings.
    pub total_yearly_earnings: Decimal,
    /// Largest daily break minutes of any submission, or 0 when there are none.
    pub max_daily_minutes_spent: u32,
}

/// The ordering used to build a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingCriterion {
    /// Daily earnings, highest first.
    HigherEarnings,
    /// Daily break minutes, highest first.
    HigherMinutes,
    /// Daily break minutes, lowest first.
    LowerMinutes,
}

impl RankingCriterion {
    /// Every criterion.
    pub const ALL: [RankingCriterion; 3] = [
        RankingCriterion::HigherEarnings,
        RankingCriterion::HigherMinutes,
        RankingCriterion::LowerMinutes,
    ];

    /// Returns the wire name of the criterion.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingCriterion::HigherEarnings => "higher_earnings",
            RankingCriterion::HigherMinutes => "higher_minutes",
            RankingCriterion::LowerMinutes => "lower_minutes",
        }
    }

    /// Looks up a criterion by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// The username of the submission.
    pub username: String,
    /// Daily break minutes.
    pub daily_minutes_spent: u32,
    /// Daily break-time earnings.
    pub daily_earnings: Decimal,
}

impl From<&CalculationResult> for RankingEntry {
    fn from(result: &CalculationResult) -> Self {
        RankingEntry {
            username: result.username.clone(),
            daily_minutes_spent: result.daily_minutes_spent,
            daily_earnings: result.daily_earnings,
        }
    }
}

/// The three rankings side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rankings {
    /// Highest daily earnings.
    pub higher_earnings: Vec<RankingEntry>,
    /// Most daily break minutes.
    pub higher_minutes: Vec<RankingEntry>,
    /// Fewest daily break minutes.
    pub lower_minutes: Vec<RankingEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_result() -> CalculationResult {
        CalculationResult {
            username: "KingJohn123".to_string(),
            daily_minutes_spent: 30,
            monthly_minutes_spent: 600,
            yearly_minutes_spent: 7200,
            daily_earnings: Decimal::from_str("30.00").unwrap(),
            monthly_earnings: Decimal::from_str("600.00").unwrap(),
            yearly_earnings: Decimal::from_str("7200.00").unwrap(),
            daily_percentage_of_shift: 6.25,
        }
    }

    #[test]
    fn test_stored_result_flattens_result_fields() {
        let stored = StoredResult::new(sample_result());
        let json = serde_json::to_value(&stored).unwrap();

        assert!(json["id"].is_string());
        assert!(json["recorded_at"].is_string());
        assert_eq!(json["username"].as_str().unwrap(), "KingJohn123");
        assert_eq!(json["daily_minutes_spent"].as_u64().unwrap(), 30);
    }

    #[test]
    fn test_stored_result_reads_back_from_json() {
        let stored = StoredResult::new(sample_result());
        let line = serde_json::to_string(&stored).unwrap();

        let parsed: StoredResult = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.id, stored.id);
        assert_eq!(parsed.result, stored.result);
    }

    #[test]
    fn test_ranking_entry_projects_daily_figures() {
        let entry = RankingEntry::from(&sample_result());

        assert_eq!(entry.username, "KingJohn123");
        assert_eq!(entry.daily_minutes_spent, 30);
        assert_eq!(entry.daily_earnings, Decimal::from_str("30.00").unwrap());
    }

    #[test]
    fn test_ranking_criterion_serialization() {
        assert_eq!(
            serde_json::to_string(&RankingCriterion::LowerMinutes).unwrap(),
            "\"lower_minutes\""
        );
        let criterion: RankingCriterion = serde_json::from_str("\"higher_earnings\"").unwrap();
        assert_eq!(criterion, RankingCriterion::HigherEarnings);
    }

    #[test]
    fn test_ranking_criterion_names_match_serde() {
        for criterion in RankingCriterion::ALL {
            let json = serde_json::to_string(&criterion).unwrap();
            assert_eq!(json, format!("\"{}\"", criterion.as_str()));
            assert_eq!(RankingCriterion::from_name(criterion.as_str()), Some(criterion));
        }
        assert_eq!(RankingCriterion::from_name("richest"), None);
    }

    #[test]
    fn test_empty_statistics_are_zero() {
        let stats = KingdomStatistics::default();

        assert_eq!(stats.total_submissions, 0);
        assert_eq!(stats.total_yearly_minutes_spent, 0);
        assert_eq!(stats.total_yearly_earnings, Decimal::ZERO);
        assert_eq!(stats.max_daily_minutes_spent, 0);
    }
}
