//! Error types for the attendance pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while turning attendance records
//! into overtime totals and a final salary.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the attendance pay engine.
///
/// Every computation either produces a complete result or fails with one of
/// these variants; no partial aggregates are ever returned.
///
/// # Example
///
/// ```
/// use attendance_pay::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An attendance interval was malformed or inverted.
    #[error("Invalid interval '{interval_id}': {message}")]
    InvalidInterval {
        /// The ID of the offending interval.
        interval_id: String,
        /// A description of what made the interval invalid.
        message: String,
    },

    /// The hourly rate could not be derived from the supplied configuration.
    #[error("Invalid rate configuration: divide_by must be greater than zero, got {divide_by}")]
    InvalidRateConfig {
        /// The rejected divisor.
        divide_by: Decimal,
    },

    /// A range-valued payment structure amount reached salary arithmetic.
    #[error("Payment line '{name}' has range amount '{amount}' which cannot be summed")]
    AmbiguousRangeAmount {
        /// The name of the payment structure line.
        name: String,
        /// The raw range amount, e.g. `"100-200.00"`.
        amount: String,
    },

    /// A payment structure line failed validation.
    #[error("Invalid payment line field '{field}': {message}")]
    InvalidPaymentLine {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attempt was made to remove a built-in payment structure line.
    #[error("Payment line '{name}' is built in and cannot be removed")]
    ProtectedLine {
        /// The name of the protected line.
        name: String,
    },

    /// A money or hours computation exceeded the representable range.
    #[error("Calculation overflow while computing {operation}")]
    CalculationOverflow {
        /// The quantity being computed when the overflow happened.
        operation: String,
    },

    /// An attendance import source could not be read.
    #[error("Attendance import failed at record {record}: {message}")]
    ImportError {
        /// The 1-based record number where the failure happened.
        record: u64,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Builds a [`EngineError::CalculationOverflow`] for the named quantity.
    pub fn overflow(operation: impl Into<String>) -> Self {
        EngineError::CalculationOverflow {
            operation: operation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/payroll.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/payroll.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_interval_displays_id_and_message() {
        let error = EngineError::InvalidInterval {
            interval_id: "in_out_001".to_string(),
            message: "clock-out is not after clock-in".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid interval 'in_out_001': clock-out is not after clock-in"
        );
    }

    #[test]
    fn test_invalid_rate_config_displays_divisor() {
        let error = EngineError::InvalidRateConfig {
            divide_by: Decimal::from_str("0").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rate configuration: divide_by must be greater than zero, got 0"
        );
    }

    #[test]
    fn test_ambiguous_range_amount_displays_name_and_amount() {
        let error = EngineError::AmbiguousRangeAmount {
            name: "Travel".to_string(),
            amount: "100-200.00".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payment line 'Travel' has range amount '100-200.00' which cannot be summed"
        );
    }

    #[test]
    fn test_protected_line_displays_name() {
        let error = EngineError::ProtectedLine {
            name: "EPF 8%".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payment line 'EPF 8%' is built in and cannot be removed"
        );
    }

    #[test]
    fn test_calculation_overflow_displays_operation() {
        let error = EngineError::CalculationOverflow {
            operation: "final salary".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation overflow while computing final salary"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_rate() -> EngineResult<()> {
            Err(EngineError::InvalidRateConfig {
                divide_by: Decimal::ZERO,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_rate()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
