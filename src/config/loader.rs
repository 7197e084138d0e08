//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::calculation::{RangePolicy, RateBasis, RateMode};
use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// File name of the payroll settings inside a configuration directory.
pub const PAYROLL_CONFIG_FILE: &str = "payroll.yaml";

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── payroll.yaml   # Rate mode, divide-by, flat rates, range policy
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_pay::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config")?;
/// let basis = loader.rate_basis(Decimal::from(16000), None, None);
/// println!("Regular OT rate: {}", basis.resolve()?.regular);
/// # Ok::<(), attendance_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails with [`EngineError::ConfigNotFound`] if `payroll.yaml` is
    /// missing and [`EngineError::ConfigParseError`] if it is not valid.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(PAYROLL_CONFIG_FILE);
        let config = Self::load_yaml::<PayrollConfig>(&config_path)?;
        Self::validate(&config, &config_path)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
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

    fn validate(config: &PayrollConfig, path: &Path) -> EngineResult<()> {
        if config.divide_by <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("divide_by must be greater than zero, got {}", config.divide_by),
            });
        }
        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configured range policy.
    pub fn range_policy(&self) -> RangePolicy {
        self.config.range_policy
    }

    /// Builds a rate basis, letting request values override configuration.
    pub fn rate_basis(
        &self,
        basic: Decimal,
        mode: Option<RateMode>,
        divide_by: Option<Decimal>,
    ) -> RateBasis {
        self.config.rate_basis(basic, mode, divide_by)
    }
}
