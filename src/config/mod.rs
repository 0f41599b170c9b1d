//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides the deduction tables and speed policy used by the
//! calculators, the canonical built-in tables, and functionality to load
//! replacement tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kra_2023").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod defaults;
mod loader;
mod types;

pub use defaults::{default_schedule, default_speed_policy};
pub use loader::ConfigLoader;
pub use types::{
    Bounded, HealthLevyBand, PayrollSchedule, PensionRule, ScheduleMetadata, SpeedPolicy,
    TaxBracket,
};
