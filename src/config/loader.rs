//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! schedule and speed policy from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    HealthLevyBand, PayrollSchedule, PensionRule, ScheduleMetadata, SpeedPolicy, TaxBracket,
};

/// PAYE configuration file structure.
#[derive(Debug, Deserialize)]
struct PayeConfig {
    personal_relief: Decimal,
    brackets: Vec<TaxBracket>,
}

/// Health-levy configuration file structure.
#[derive(Debug, Deserialize)]
struct HealthLevyConfig {
    bands: Vec<HealthLevyBand>,
}

/// Loads and provides access to a payroll schedule and speed policy.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates every table, and exposes the result.
///
/// # Directory Structure
///
/// ```text
/// config/kra_2023/
/// ├── schedule.yaml     # Schedule metadata
/// ├── paye.yaml         # Tax brackets and personal relief
/// ├── health_levy.yaml  # Health-levy bands
/// ├── pension.yaml      # Pension rate and cap
/// └── speed.yaml        # Speed limit and points policy
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::calculation::calculate_net_salary;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/kra_2023")?;
/// let result = calculate_net_salary(
///     Decimal::from(50_000),
///     Decimal::from(10_000),
///     loader.schedule(),
/// )?;
/// println!("Net salary: {}", result.breakdown.net_salary);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: ScheduleMetadata,
    schedule: PayrollSchedule,
    speed_policy: SpeedPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/kra_2023")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing a field (`ConfigParseError`)
    /// - Any table breaks its invariants (`InvalidSchedule`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;
        let paye = Self::load_yaml::<PayeConfig>(&path.join("paye.yaml"))?;
        let health_levy = Self::load_yaml::<HealthLevyConfig>(&path.join("health_levy.yaml"))?;
        let pension = Self::load_yaml::<PensionRule>(&path.join("pension.yaml"))?;
        let speed_policy = Self::load_yaml::<SpeedPolicy>(&path.join("speed.yaml"))?;

        let schedule = PayrollSchedule {
            name: metadata.name.clone(),
            tax_brackets: paye.brackets,
            personal_relief: paye.personal_relief,
            health_levy_bands: health_levy.bands,
            pension,
        };
        schedule.validate()?;
        speed_policy.validate()?;

        debug!(
            schedule = %schedule.name,
            path = %path.display(),
            tax_brackets = schedule.tax_brackets.len(),
            health_levy_bands = schedule.health_levy_bands.len(),
            "Loaded payroll schedule"
        );

        Ok(Self {
            metadata,
            schedule,
            speed_policy,
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

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the validated payroll schedule.
    pub fn schedule(&self) -> &PayrollSchedule {
        &self.schedule
    }

    /// Returns the validated speed policy.
    pub fn speed_policy(&self) -> &SpeedPolicy {
        &self.speed_policy
    }

    /// Consumes the loader, returning the schedule and speed policy.
    pub fn into_parts(self) -> (PayrollSchedule, SpeedPolicy) {
        (self.schedule, self.speed_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_DIR: &str = "./config/kra_2023";

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load(CONFIG_DIR).unwrap();

        assert_eq!(loader.metadata().name, "kra_2023");
        assert_eq!(loader.metadata().jurisdiction, "Kenya");
        assert_eq!(loader.metadata().effective_year, 2023);
    }

    #[test]
    fn test_shipped_config_matches_built_in_tables() {
        let loader = ConfigLoader::load(CONFIG_DIR).unwrap();

        assert_eq!(loader.schedule(), &PayrollSchedule::kenya_2023());
        assert_eq!(loader.speed_policy(), &SpeedPolicy::default());
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.ends_with("schedule.yaml"));
            }
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::load("./tests/fixtures/malformed");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("paye.yaml"));
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_gapped_bands_return_invalid_schedule() {
        let result = ConfigLoader::load("./tests/fixtures/gapped_bands");

        match result {
            Err(EngineError::InvalidSchedule { table, .. }) => {
                assert_eq!(table, "health_levy_bands");
            }
            other => panic!("expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_into_parts_returns_tables() {
        let (schedule, policy) = ConfigLoader::load(CONFIG_DIR).unwrap().into_parts();

        assert_eq!(schedule.personal_relief, Decimal::from(2_400));
        assert_eq!(policy.suspension_threshold, 12);
    }
}
