//! Configuration types for the Paid Throne engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceMetadata {
    /// The human-readable service name.
    pub name: String,
    /// The version of the configuration set.
    pub version: String,
    /// Public URL of the service.
    pub source_url: String,
}

/// Bounds a profile must respect before it reaches the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileLimits {
    /// Shortest accepted username.
    pub username_min_length: usize,
    /// Longest accepted username.
    pub username_max_length: usize,
    /// Smallest accepted average break, in minutes.
    pub min_break_minutes: u32,
    /// Fewest accepted visits per day.
    pub min_visits_per_day: u32,
    /// Most accepted visits per day.
    pub max_visits_per_day: u32,
    /// Smallest accepted wage.
    pub min_wage: Decimal,
    /// Largest accepted wage.
    pub max_wage: Decimal,
    /// Ceiling on `average_break_minutes x visits_per_day`.
    pub max_daily_break_minutes: u32,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            username_min_length: 5,
            username_max_length: 15,
            min_break_minutes: 5,
            min_visits_per_day: 1,
            max_visits_per_day: 5,
            min_wage: Decimal::ONE,
            max_wage: Decimal::new(50_000, 0),
            max_daily_break_minutes: 60,
        }
    }
}

/// Engine settings file structure (`engine.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Service metadata.
    pub service: ServiceMetadata,
    /// Profile validation limits.
    #[serde(default)]
    pub limits: ProfileLimits,
}

/// One progressive social security bracket.
///
/// The rate applies to the slice of salary between the previous bracket's
/// limit and this one.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialSecurityBracket {
    /// Upper salary limit of the bracket.
    pub limit: Decimal,
    /// Contribution rate for the slice.
    pub rate: Decimal,
}

/// One row of the income tax table.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxBracket {
    /// Upper limit of the taxable base, or `None` for the top row.
    #[serde(default)]
    pub limit: Option<Decimal>,
    /// Tax rate applied to the whole taxable base.
    pub rate: Decimal,
    /// Amount deducted after applying the rate.
    pub deduction: Decimal,
}

/// A tax table effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTable {
    /// The date from which this table applies.
    pub effective_date: NaiveDate,
    /// Deduction subtracted from the income tax base.
    pub simplified_deduction: Decimal,
    /// Social security brackets, lowest first.
    pub social_security: Vec<SocialSecurityBracket>,
    /// Income tax rows, lowest first.
    pub income_tax: Vec<IncomeTaxBracket>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct ThroneConfig {
    /// Engine settings.
    settings: EngineSettings,
    /// Tax tables by effective date (sorted oldest first).
    tax_tables: Vec<TaxTable>,
}

impl ThroneConfig {
    /// Creates a new ThroneConfig from its component parts.
    pub fn new(settings: EngineSettings, tax_tables: Vec<TaxTable>) -> Self {
        let mut sorted_tables = tax_tables;
        sorted_tables.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            settings,
            tax_tables: sorted_tables,
        }
    }

    /// Returns the service metadata.
    pub fn service(&self) -> &ServiceMetadata {
        &self.settings.service
    }

    /// Returns the profile limits.
    pub fn limits(&self) -> &ProfileLimits {
        &self.settings.limits
    }

    /// Returns all tax tables, oldest first.
    pub fn tax_tables(&self) -> &[TaxTable] {
        &self.tax_tables
    }
}
