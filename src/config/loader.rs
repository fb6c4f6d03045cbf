//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineSettings, ProfileLimits, ServiceMetadata, TaxTable, ThroneConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/paid_throne/
/// ├── engine.yaml          # Service metadata and profile limits
/// └── taxes/
///     └── 2024-01-01.yaml  # Tax table effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use throne_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/paid_throne").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let table = loader.get_tax_table(date).unwrap();
/// println!("Simplified deduction: {}", table.simplified_deduction);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ThroneConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `engine.yaml` or the `taxes` directory is missing,
    /// if `taxes` holds no YAML files, or if any file is not valid YAML for
    /// its type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let tax_tables = Self::load_tax_tables(&path.join("taxes"))?;

        Ok(Self {
            config: ThroneConfig::new(settings, tax_tables),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all tax tables from the taxes directory.
    fn load_tax_tables(taxes_dir: &Path) -> EngineResult<Vec<TaxTable>> {
        let taxes_dir_str = taxes_dir.display().to_string();

        let entries = fs::read_dir(taxes_dir).map_err(|_| EngineError::ConfigNotFound {
            path: taxes_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: taxes_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                tables.push(Self::load_yaml::<TaxTable>(&path)?);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax tables found)", taxes_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ThroneConfig {
        &self.config
    }

    /// Returns the service metadata.
    pub fn service(&self) -> &ServiceMetadata {
        self.config.service()
    }

    /// Returns the profile limits.
    pub fn limits(&self) -> &ProfileLimits {
        self.config.limits()
    }

    /// Gets the tax table in effect on a date.
    ///
    /// The most recent table effective on or before `date` applies.
    pub fn get_tax_table(&self, date: NaiveDate) -> EngineResult<&TaxTable> {
        self.config
            .tax_tables()
            .iter()
            .rfind(|table| table.effective_date <= date)
            .ok_or(EngineError::TaxTableNotFound { date })
    }
}
