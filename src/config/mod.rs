//! Configuration loading and management for the Paid Throne engine.
//!
//! This module loads engine settings and effective-dated tax tables from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use throne_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/paid_throne").unwrap();
//! println!("Loaded service: {}", config.service().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineSettings, IncomeTaxBracket, ProfileLimits, ServiceMetadata, SocialSecurityBracket,
    TaxTable, ThroneConfig,
};
