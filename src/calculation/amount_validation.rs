//! Payment structure amount validation.
//!
//! Company payment structures accept a blank amount, a two-decimal amount
//! (`"150"` or `"150.00"`) or a range of those (`"100-200.00"`). Salary
//! payment structures accept a blank amount or a whole number only.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::LineAmount;

static STRUCTURE_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]+(?:\.[0-9]{2})?)(?:-([0-9]+(?:\.[0-9]{2})?))?)?$")
        .expect("structure amount pattern is valid")
});

static SALARY_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]*)$").expect("salary amount pattern is valid"));

fn pattern(is_salary: bool) -> &'static Regex {
    if is_salary {
        &SALARY_AMOUNT
    } else {
        &STRUCTURE_AMOUNT
    }
}

/// Returns true if `value` is an acceptable payment line amount.
///
/// # Examples
///
/// ```
/// use attendance_pay::calculation::validate_amount;
///
/// assert!(validate_amount("150.00", false));
/// assert!(validate_amount("100-200.00", false));
/// assert!(!validate_amount("150.5", false));
/// assert!(validate_amount("150", true));
/// assert!(!validate_amount("150.00", true));
/// assert!(validate_amount("", false));
/// ```
pub fn validate_amount(value: &str, is_salary: bool) -> bool {
    pattern(is_salary).is_match(value)
}

/// Parses a payment line amount into a [`LineAmount`].
///
/// Fails with [`EngineError::InvalidPaymentLine`] when the value does not
/// pass [`validate_amount`] or a number is too large to represent.
pub fn parse_amount(value: &str, is_salary: bool) -> EngineResult<LineAmount> {
    let invalid = |message: String| EngineError::InvalidPaymentLine {
        field: "amount".to_string(),
        message,
    };

    let captures = pattern(is_salary).captures(value).ok_or_else(|| {
        let expected = if is_salary {
            "a whole number"
        } else {
            "an amount with two decimals or a min-max range"
        };
        invalid(format!("'{}' is not {}", value, expected))
    })?;

    let number = |text: &str| {
        Decimal::from_str(text).map_err(|e| invalid(format!("'{}': {}", text, e)))
    };

    match (captures.get(1), captures.get(2)) {
        (Some(min), Some(max)) => Ok(LineAmount::Range {
            min: number(min.as_str())?,
            max: number(max.as_str())?,
        }),
        (Some(single), None) if !single.as_str().is_empty() => Ok(LineAmount::Fixed {
            value: number(single.as_str())?,
        }),
        _ => Ok(LineAmount::Blank),
    }
}
