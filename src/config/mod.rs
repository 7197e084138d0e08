//! Configuration loading and management for the attendance pay engine.
//!
//! This module provides functionality to load payroll settings from YAML:
//! the default rate mode, the basic-to-hourly divisor, flat OT rates and the
//! range amount policy.
//!
//! # Example
//!
//! ```no_run
//! use attendance_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded config: {}", config.config().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, PAYROLL_CONFIG_FILE};
pub use types::PayrollConfig;
