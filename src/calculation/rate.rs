//! Hourly overtime rate resolution.
//!
//! Overtime is priced in one of two ways:
//! - **Flat:** a constant amount per hour (100 regular, 200 double by default)
//! - **Proportional to basic:** `basic / divide_by` per hour, doubled for double OT
//!
//! The mode is always an explicit choice of the caller or the configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Divisor used to turn monthly basic pay into an hourly rate when none is set.
pub const DEFAULT_DIVIDE_BY: Decimal = Decimal::from_parts(240, 0, 0, false, 0);

/// Default flat regular OT rate per hour.
pub const FLAT_REGULAR_RATE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Default flat double OT rate per hour.
pub const FLAT_DOUBLE_RATE: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// How overtime hours are converted to money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateMode {
    /// Constant rate per hour, independent of basic pay.
    Flat,
    /// Rate derived from basic pay as `basic / divide_by`.
    ProportionalToBasic,
}

/// The per-hour amounts used in [`RateMode::Flat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRates {
    /// Regular OT amount per hour.
    pub regular: Decimal,
    /// Double OT amount per hour.
    pub double: Decimal,
}

impl Default for FlatRates {
    fn default() -> Self {
        Self {
            regular: FLAT_REGULAR_RATE,
            double: FLAT_DOUBLE_RATE,
        }
    }
}

/// Resolved OT amounts per hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRate {
    /// Amount per regular OT hour.
    pub regular: Decimal,
    /// Amount per double OT hour.
    pub double: Decimal,
}

/// Everything needed to resolve an [`HourlyRate`] for one employee.
///
/// # Example
///
/// ```
/// use attendance_pay::calculation::{RateBasis, RateMode};
/// use rust_decimal::Decimal;
///
/// let basis = RateBasis::proportional(Decimal::from(24000), Some(Decimal::from(240)));
/// let rate = basis.resolve().unwrap();
///
/// assert_eq!(basis.mode, RateMode::ProportionalToBasic);
/// assert_eq!(rate.regular, Decimal::from(100));
/// assert_eq!(rate.double, Decimal::from(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBasis {
    /// The rate mode to apply.
    pub mode: RateMode,
    /// Monthly basic pay.
    pub basic: Decimal,
    /// Divisor from monthly basic to hourly; [`DEFAULT_DIVIDE_BY`] when unset.
    #[serde(default)]
    pub divide_by: Option<Decimal>,
    /// Per-hour amounts for flat mode.
    #[serde(default)]
    pub flat_rates: FlatRates,
}

impl RateBasis {
    /// A flat-mode basis with the default flat rates.
    pub fn flat() -> Self {
        Self {
            mode: RateMode::Flat,
            basic: Decimal::ZERO,
            divide_by: None,
            flat_rates: FlatRates::default(),
        }
    }

    /// A proportional-mode basis for the given basic pay.
    pub fn proportional(basic: Decimal, divide_by: Option<Decimal>) -> Self {
        Self {
            mode: RateMode::ProportionalToBasic,
            basic,
            divide_by,
            flat_rates: FlatRates::default(),
        }
    }

    /// Resolves the hourly rate for this basis.
    pub fn resolve(&self) -> EngineResult<HourlyRate> {
        resolve_rate_with(self.mode, self.basic, self.divide_by, &self.flat_rates)
    }
}

/// Resolves the hourly rate using the default flat rates.
///
/// See [`resolve_rate_with`].
pub fn resolve_rate(
    mode: RateMode,
    basic: Decimal,
    divide_by: Option<Decimal>,
) -> EngineResult<HourlyRate> {
    resolve_rate_with(mode, basic, divide_by, &FlatRates::default())
}

/// Resolves the hourly rate for a mode.
///
/// In proportional mode `divide_by` defaults to [`DEFAULT_DIVIDE_BY`] and must
/// be greater than zero. In flat mode `basic` and `divide_by` are ignored.
/// A basic pay too large to double fails with
/// [`EngineError::CalculationOverflow`].
///
/// # Examples
///
/// ```
/// use attendance_pay::calculation::{resolve_rate, RateMode};
/// use rust_decimal::Decimal;
///
/// let rate = resolve_rate(RateMode::Flat, Decimal::from(16000), None).unwrap();
/// assert_eq!(rate.regular, Decimal::from(100));
///
/// assert!(resolve_rate(RateMode::ProportionalToBasic, Decimal::from(16000), Some(Decimal::ZERO)).is_err());
/// ```
pub fn resolve_rate_with(
    mode: RateMode,
    basic: Decimal,
    divide_by: Option<Decimal>,
    flat_rates: &FlatRates,
) -> EngineResult<HourlyRate> {
    match mode {
        RateMode::Flat => Ok(HourlyRate {
            regular: flat_rates.regular,
            double: flat_rates.double,
        }),
        RateMode::ProportionalToBasic => {
            let divide_by = divide_by.unwrap_or(DEFAULT_DIVIDE_BY);
            if divide_by <= Decimal::ZERO {
                return Err(EngineError::InvalidRateConfig { divide_by });
            }

            let regular = basic
                .checked_div(divide_by)
                .ok_or_else(|| EngineError::overflow("regular hourly rate"))?;
            let double = Decimal::TWO
                .checked_mul(basic)
                .and_then(|doubled| doubled.checked_div(divide_by))
                .ok_or_else(|| EngineError::overflow("double hourly rate"))?;

            Ok(HourlyRate { regular, double })
        }
    }
}
