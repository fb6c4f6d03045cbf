//! Assessment of a single profile.
//!
//! This ties the converters together: minutes worked, break minutes,
//! per-minute rate, earnings and shift share for every horizon, plus the
//! optional tax breakdown. Each rule applied is recorded in the audit trace.

use serde::Serialize;
use serde_json::json;

use crate::config::TaxTable;
use crate::models::{AuditTrace, CalculationResult, Horizon, HorizonTaxBreakdowns, Profile};

use super::{
    daily_percentage_of_shift, earnings_at_rate, humanize_minutes, minutes_spent, minutes_worked,
    pay_period_minutes, per_minute_rate, tax_breakdowns,
};

/// Warning code recorded when no tax table is available.
pub const NO_TAX_TABLE_WARNING: &str = "NO_TAX_TABLE";

/// Everything derived from one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// The figures that are stored and ranked.
    pub result: CalculationResult,
    /// Tax breakdown of the break-time earnings, when a table was supplied.
    pub tax_breakdown: Option<HorizonTaxBreakdowns>,
    /// How each figure was reached.
    pub audit_trace: AuditTrace,
}

/// Assesses a validated profile.
///
/// The profile is assumed to have passed boundary validation. No ids,
/// clocks or I/O are involved, so the same inputs always give the same
/// assessment.
///
/// # Examples
///
/// ```
/// use throne_engine::calculation::assess_profile;
/// use throne_engine::models::{PayType, Profile, WorkSchedule};
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
/// let assessment = assess_profile(&profile, None);
/// assert_eq!(assessment.result.daily_minutes_spent, 30);
/// assert_eq!(assessment.result.daily_earnings.to_string(), "30.00");
/// assert!(assessment.tax_breakdown.is_none());
/// ```
pub fn assess_profile(profile: &Profile, tax_table: Option<&TaxTable>) -> Assessment {
    let mut trace = AuditTrace::default();
    let schedule = profile.work_schedule;

    let worked_daily = minutes_worked(schedule, Horizon::Daily);
    trace.record(
        "minutes_worked",
        "Minutes Worked",
        json!({ "work_schedule": schedule }),
        json!({
            "daily": worked_daily,
            "monthly": minutes_worked(schedule, Horizon::Monthly),
            "yearly": minutes_worked(schedule, Horizon::Yearly),
        }),
        format!("{:?} shifts last {}", schedule, humanize_minutes(worked_daily)),
    );

    let daily_minutes = minutes_spent(profile, Horizon::Daily);
    let monthly_minutes = minutes_spent(profile, Horizon::Monthly);
    let yearly_minutes = minutes_spent(profile, Horizon::Yearly);
    trace.record(
        "break_minutes",
        "Break Minutes",
        json!({
            "average_break_minutes": profile.average_break_minutes,
            "visits_per_day": profile.visits_per_day,
        }),
        json!({
            "daily": daily_minutes,
            "monthly": monthly_minutes,
            "yearly": yearly_minutes,
        }),
        format!(
            "{} min x {} visits = {} per day",
            profile.average_break_minutes,
            profile.visits_per_day,
            humanize_minutes(daily_minutes)
        ),
    );

    let period_minutes = pay_period_minutes(profile);
    let rate = per_minute_rate(profile);
    trace.record(
        "per_minute_rate",
        "Per-Minute Rate",
        json!({
            "wage": profile.wage.to_string(),
            "pay_type": profile.pay_type,
            "pay_period_minutes": period_minutes,
        }),
        json!({ "rate": rate.to_string() }),
        format!(
            "${} / {} min = ${} per minute (truncated)",
            profile.wage, period_minutes, rate
        ),
    );

    let daily_earnings = earnings_at_rate(rate, daily_minutes);
    let monthly_earnings = earnings_at_rate(rate, monthly_minutes);
    let yearly_earnings = earnings_at_rate(rate, yearly_minutes);
    trace.record(
        "break_earnings",
        "Break Earnings",
        json!({
            "rate": rate.to_string(),
            "daily_minutes": daily_minutes,
            "monthly_minutes": monthly_minutes,
            "yearly_minutes": yearly_minutes,
        }),
        json!({
            "daily": daily_earnings.to_string(),
            "monthly": monthly_earnings.to_string(),
            "yearly": yearly_earnings.to_string(),
        }),
        format!("${} x {} min = ${} per day", rate, daily_minutes, daily_earnings),
    );

    let percentage = daily_percentage_of_shift(
        profile.average_break_minutes,
        profile.visits_per_day,
        worked_daily,
    );
    trace.record(
        "shift_share",
        "Shift Share",
        json!({
            "daily_break_minutes": daily_minutes,
            "minutes_worked_daily": worked_daily,
        }),
        json!({ "daily_percentage_of_shift": percentage }),
        format!(
            "{} of a {} shift = {:.2}%",
            humanize_minutes(daily_minutes),
            humanize_minutes(worked_daily),
            percentage
        ),
    );

    let tax_breakdown = match tax_table {
        Some(table) => {
            let breakdowns = tax_breakdowns(profile, table);
            trace.record(
                "tax_breakdown",
                "Tax Breakdown",
                json!({ "tax_table_effective_date": table.effective_date.to_string() }),
                json!(breakdowns),
                format!(
                    "Monthly break gross ${} less ${} social security and ${} income tax = ${} net",
                    breakdowns.monthly.gross,
                    breakdowns.monthly.social_security,
                    breakdowns.monthly.income_tax,
                    breakdowns.monthly.net
                ),
            );
            Some(breakdowns)
        }
        None => {
            trace.warn(
                NO_TAX_TABLE_WARNING,
                "No tax table in effect; tax breakdown omitted",
            );
            None
        }
    };

    Assessment {
        result: CalculationResult {
            username: profile.username.clone(),
            daily_minutes_spent: daily_minutes,
            monthly_minutes_spent: monthly_minutes,
            yearly_minutes_spent: yearly_minutes,
            daily_earnings,
            monthly_earnings,
            yearly_earnings,
            daily_percentage_of_shift: percentage,
        },
        tax_breakdown,
        audit_trace: trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::earnings;
    use crate::config::{IncomeTaxBracket, SocialSecurityBracket};
    use crate::models::{PayType, WorkSchedule};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_profile(wage: &str, pay_type: PayType) -> Profile {
        Profile {
            username: "KingJohn123".to_string(),
            average_break_minutes: 10,
            visits_per_day: 3,
            wage: dec(wage),
            pay_type,
            work_schedule: WorkSchedule::FiveOnTwo,
        }
    }

    fn flat_table() -> TaxTable {
        TaxTable {
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            simplified_deduction: Decimal::ZERO,
            social_security: vec![SocialSecurityBracket {
                limit: dec("100000"),
                rate: dec("0.10"),
            }],
            income_tax: vec![IncomeTaxBracket {
                limit: None,
                rate: Decimal::ZERO,
                deduction: Decimal::ZERO,
            }],
        }
    }

    /// AS-001: standard week at 60/hour
    #[test]
    fn test_assess_standard_week() {
        let assessment = assess_profile(&create_profile("60", PayType::Hourly), None);
        let result = &assessment.result;

        assert_eq!(result.username, "KingJohn123");
        assert_eq!(result.daily_minutes_spent, 30);
        assert_eq!(result.monthly_minutes_spent, 600);
        assert_eq!(result.yearly_minutes_spent, 7200);
        assert_eq!(result.daily_earnings, dec("30.00"));
        assert_eq!(result.monthly_earnings, dec("600.00"));
        assert_eq!(result.yearly_earnings, dec("7200.00"));
        assert_eq!(result.daily_percentage_of_shift, 6.25);
    }

    /// AS-002: earnings use the truncated rate
    #[test]
    fn test_assess_uses_truncated_rate() {
        let assessment = assess_profile(&create_profile("100", PayType::Hourly), None);

        assert_eq!(assessment.result.daily_earnings, dec("49.80"));
        assert_eq!(assessment.result.yearly_earnings, dec("11952.00"));
    }

    /// AS-003: audit trace records each rule in order
    #[test]
    fn test_audit_trace_steps() {
        let assessment = assess_profile(&create_profile("100", PayType::Hourly), Some(&flat_table()));
        let steps = &assessment.audit_trace.steps;

        let rule_ids: Vec<&str> = steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "minutes_worked",
                "break_minutes",
                "per_minute_rate",
                "break_earnings",
                "shift_share",
                "tax_breakdown",
            ]
        );
        let numbers: Vec<u32> = steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            steps[2].reasoning,
            "$100 / 60 min = $1.66 per minute (truncated)"
        );
        assert_eq!(steps[0].reasoning, "FiveOnTwo shifts last 8h");
        assert!(assessment.audit_trace.warnings.is_empty());
    }

    /// AS-004: missing tax table warns and still succeeds
    #[test]
    fn test_missing_tax_table_warns() {
        let assessment = assess_profile(&create_profile("60", PayType::Hourly), None);

        assert!(assessment.tax_breakdown.is_none());
        assert_eq!(assessment.audit_trace.steps.len(), 5);
        assert_eq!(assessment.audit_trace.warnings.len(), 1);
        assert_eq!(assessment.audit_trace.warnings[0].code, NO_TAX_TABLE_WARNING);
    }

    /// AS-005: tax breakdown never alters break earnings
    #[test]
    fn test_tax_breakdown_reported_alongside_earnings() {
        let profile = create_profile("100", PayType::Hourly);

        let with_tax = assess_profile(&profile, Some(&flat_table()));
        let without_tax = assess_profile(&profile, None);

        assert_eq!(with_tax.result, without_tax.result);
        let breakdown = with_tax.tax_breakdown.unwrap();
        // untruncated 100/60 x 30 = 50, less a flat 10%
        assert_eq!(breakdown.daily.gross, dec("50.00"));
        assert_eq!(breakdown.daily.social_security, dec("5.00"));
        assert_eq!(breakdown.daily.net, dec("45.00"));
    }

    fn any_profile() -> impl Strategy<Value = Profile> {
        (
            5u32..=60,
            1u32..=5,
            1u64..=50_000,
            prop::sample::select(vec![
                PayType::Hourly,
                PayType::Daily,
                PayType::Monthly,
                PayType::Yearly,
            ]),
            prop::sample::select(WorkSchedule::ALL.to_vec()),
        )
            .prop_filter("break ceiling", |(avg, visits, ..)| avg * visits <= 60)
            .prop_map(|(avg, visits, wage, pay_type, schedule)| Profile {
                username: "KingJohn123".to_string(),
                average_break_minutes: avg,
                visits_per_day: visits,
                wage: Decimal::from(wage),
                pay_type,
                work_schedule: schedule,
            })
    }

    proptest! {
        #[test]
        fn prop_assessment_is_idempotent(profile in any_profile()) {
            let table = flat_table();
            prop_assert_eq!(
                assess_profile(&profile, Some(&table)),
                assess_profile(&profile, Some(&table))
            );
        }

        #[test]
        fn prop_result_matches_component_functions(profile in any_profile()) {
            let result = assess_profile(&profile, None).result;

            for horizon in Horizon::ALL {
                prop_assert_eq!(result.minutes_spent(horizon), minutes_spent(&profile, horizon));
                prop_assert_eq!(result.earnings(horizon), earnings(&profile, horizon));
            }
        }
    }
}
