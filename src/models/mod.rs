//! Core data models for the Paid Throne engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod profile;
mod schedule;
mod statistics;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, HorizonTaxBreakdowns, TaxBreakdown,
};
pub use profile::{Horizon, PayType, Profile};
pub use schedule::{ScheduleSpec, WorkSchedule, schedule_spec};
pub use statistics::{KingdomStatistics, RankingCriterion, RankingEntry, Rankings, StoredResult};
