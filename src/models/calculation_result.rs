//! Calculation result models for the Paid Throne engine.
//!
//! This module contains the [`CalculationResult`] type produced once per
//! profile, the optional [`TaxBreakdown`] figures reported alongside it, and
//! the audit trace structures that record how each figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Horizon;

/// The time and money figures derived from one profile.
///
/// This is the record handed to the persistence collaborator and returned to
/// the caller.
///
/// # Example
///
/// ```
/// use throne_engine::models::CalculationResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = CalculationResult {
///     username: "KingJohn123".to_string(),
///     daily_minutes_spent: 30,
///     monthly_minutes_spent: 600,
///     yearly_minutes_spent: 7200,
///     daily_earnings: Decimal::from_str("30.00").unwrap(),
///     monthly_earnings: Decimal::from_str("600.00").unwrap(),
///     yearly_earnings: Decimal::from_str("7200.00").unwrap(),
///     daily_percentage_of_shift: 6.25,
/// };
/// assert_eq!(result.minutes_spent(throne_engine::models::Horizon::Monthly), 600);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The username of the profile.
    pub username: String,
    /// Break minutes in one working day.
    pub daily_minutes_spent: u32,
    /// Break minutes in one month.
    pub monthly_minutes_spent: u32,
    /// Break minutes in one year.
    pub yearly_minutes_spent: u32,
    /// Wage earned on break in one working day.
    pub daily_earnings: Decimal,
    /// Wage earned on break in one month.
    pub monthly_earnings: Decimal,
    /// Wage earned on break in one year.
    pub yearly_earnings: Decimal,
    /// Percentage of a daily shift spent on break.
    pub daily_percentage_of_shift: f64,
}

impl CalculationResult {
    /// Returns the break minutes for a horizon.
    pub fn minutes_spent(&self, horizon: Horizon) -> u32 {
        match horizon {
            Horizon::Daily => self.daily_minutes_spent,
            Horizon::Monthly => self.monthly_minutes_spent,
            Horizon::Yearly => self.yearly_minutes_spent,
        }
    }

    /// Returns the break-time earnings for a horizon.
    pub fn earnings(&self, horizon: Horizon) -> Decimal {
        match horizon {
            Horizon::Daily => self.daily_earnings,
            Horizon::Monthly => self.monthly_earnings,
            Horizon::Yearly => self.yearly_earnings,
        }
    }
}

/// Break-time earnings split into gross, contributions and net for one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Gross wage for the break minutes.
    pub gross: Decimal,
    /// Social security (INSS) contribution for the break minutes.
    pub social_security: Decimal,
    /// Income tax (IRRF) withheld for the break minutes.
    pub income_tax: Decimal,
    /// Net wage for the break minutes.
    pub net: Decimal,
}

/// Tax breakdowns for every horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonTaxBreakdowns {
    /// Breakdown for one working day.
    pub daily: TaxBreakdown,
    /// Breakdown for one month.
    pub monthly: TaxBreakdown,
    /// Breakdown for one year.
    pub yearly: TaxBreakdown,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never change the calculated figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Appends a step, numbering it after the last recorded step.
    pub fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    /// Appends a warning.
    pub fn warn(&mut self, code: &str, message: impl Into<String>) {
        self.warnings.push(AuditWarning {
            code: code.to_string(),
            message: message.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_result() -> CalculationResult {
        CalculationResult {
            username: "KingJohn123".to_string(),
            daily_minutes_spent: 30,
            monthly_minutes_spent: 600,
            yearly_minutes_spent: 7200,
            daily_earnings: dec("30.00"),
            monthly_earnings: dec("600.00"),
            yearly_earnings: dec("7200.00"),
            daily_percentage_of_shift: 6.25,
        }
    }

    #[test]
    fn test_result_serializes_money_as_strings() {
        let json = serde_json::to_value(create_sample_result()).unwrap();

        assert_eq!(json["daily_earnings"].as_str().unwrap(), "30.00");
        assert_eq!(json["yearly_minutes_spent"].as_u64().unwrap(), 7200);
        assert_eq!(json["daily_percentage_of_shift"].as_f64().unwrap(), 6.25);
    }

    #[test]
    fn test_horizon_accessors() {
        let result = create_sample_result();

        assert_eq!(result.minutes_spent(Horizon::Daily), 30);
        assert_eq!(result.minutes_spent(Horizon::Yearly), 7200);
        assert_eq!(result.earnings(Horizon::Monthly), dec("600.00"));
    }

    #[test]
    fn test_audit_trace_numbers_steps_sequentially() {
        let mut trace = AuditTrace::default();
        trace.record(
            "first",
            "First",
            serde_json::json!({}),
            serde_json::json!({}),
            "one".to_string(),
        );
        trace.record(
            "second",
            "Second",
            serde_json::json!({}),
            serde_json::json!({}),
            "two".to_string(),
        );

        assert_eq!(trace.steps[0].step_number, 1);
        assert_eq!(trace.steps[1].step_number, 2);
        assert_eq!(trace.steps[1].rule_id, "second");
    }

    #[test]
    fn test_audit_trace_collects_warnings() {
        let mut trace = AuditTrace::default();
        trace.warn("NO_TAX_TABLE", "no table in effect");

        assert_eq!(trace.warnings.len(), 1);
        assert_eq!(trace.warnings[0].code, "NO_TAX_TABLE");
    }
}
