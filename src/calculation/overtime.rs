//! Overtime classification functionality.
//!
//! This module splits the worked hours of one interval into overtime tiers
//! and prices each tier.
//!
//! ## Tier Structure
//!
//! - Holiday (double): every worked hour at the double rate
//! - Hours 8 to 10: regular OT rate
//! - Hours beyond 10: double OT rate
//! - Up to 8 hours: no overtime

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::rate::HourlyRate;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, HolidayKind};

/// Hours after which overtime starts.
pub const NORMAL_OT_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Hours after which overtime is paid at the double rate.
pub const DOUBLE_OT_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Reason fragment emitted for an interval worked on a double holiday.
pub const HOLIDAY_DOUBLE_REASON: &str = "Worked on holiday (double), double OT applied.";

/// The result of classifying the overtime of one interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeClassification {
    /// Overtime hours paid at the regular OT rate.
    pub normal_ot_hours: Decimal,
    /// Overtime hours paid at the double OT rate.
    pub double_ot_hours: Decimal,
    /// Total overtime hours.
    pub ot_hours: Decimal,
    /// Overtime pay, unrounded.
    pub ot_amount: Decimal,
    /// Reason text for this interval, if it contributes one.
    ///
    /// Regular OT never produces a fragment here; it is summarised once per
    /// period by the aggregator.
    pub reason_fragment: Option<String>,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Formats an hour count for reason strings: at most two decimals, midpoints
/// away from zero, no trailing zeros.
pub(crate) fn format_hours(hours: Decimal) -> String {
    hours
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Classifies the overtime for one interval.
///
/// # Arguments
///
/// * `working_hours` - Hours worked in the interval
/// * `holiday` - The holiday classification of the interval
/// * `rate` - The resolved hourly OT rates
/// * `step_number` - The step number for audit trail sequencing
///
/// Fails with [`EngineError::CalculationOverflow`] if the overtime amount
/// exceeds the representable range.
///
/// # Examples
///
/// ## 11 hours on a regular day
///
/// ```
/// use attendance_pay::calculation::{classify_overtime, HourlyRate};
/// use attendance_pay::models::HolidayKind;
/// use rust_decimal::Decimal;
///
/// let rate = HourlyRate { regular: Decimal::from(100), double: Decimal::from(200) };
/// let result = classify_overtime(Decimal::from(11), HolidayKind::None, &rate, 1).unwrap();
///
/// assert_eq!(result.normal_ot_hours, Decimal::from(2));
/// assert_eq!(result.double_ot_hours, Decimal::from(1));
/// assert_eq!(result.ot_amount, Decimal::from(400));
/// assert_eq!(result.reason_fragment.as_deref(), Some("Double OT for 1 hour(s)."));
/// ```
///
/// ## 6 hours on a double holiday
///
/// ```
/// use attendance_pay::calculation::{classify_overtime, HourlyRate};
/// use attendance_pay::models::HolidayKind;
/// use rust_decimal::Decimal;
///
/// let rate = HourlyRate { regular: Decimal::from(100), double: Decimal::from(200) };
/// let result = classify_overtime(Decimal::from(6), HolidayKind::Double, &rate, 1).unwrap();
///
/// assert_eq!(result.ot_hours, Decimal::from(6));
/// assert_eq!(result.ot_amount, Decimal::from(1200));
/// ```
pub fn classify_overtime(
    working_hours: Decimal,
    holiday: HolidayKind,
    rate: &HourlyRate,
    step_number: u32,
) -> EngineResult<OvertimeClassification> {
    let (normal_ot_hours, double_ot_hours, reason_fragment, reasoning) = match holiday {
        HolidayKind::Double => (
            Decimal::ZERO,
            working_hours,
            Some(HOLIDAY_DOUBLE_REASON.to_string()),
            format!(
                "{} hours worked on a double holiday, all paid at the double rate",
                format_hours(working_hours)
            ),
        ),
        HolidayKind::None if working_hours > NORMAL_OT_THRESHOLD => {
            let normal = (working_hours - NORMAL_OT_THRESHOLD)
                .min(DOUBLE_OT_THRESHOLD - NORMAL_OT_THRESHOLD);
            let double = (working_hours - DOUBLE_OT_THRESHOLD).max(Decimal::ZERO);
            let fragment = (double > Decimal::ZERO)
                .then(|| format!("Double OT for {} hour(s).", format_hours(double)));
            let reasoning = format!(
                "{} hours worked exceeds {} hour threshold: {} hours regular OT, {} hours double OT",
                format_hours(working_hours),
                NORMAL_OT_THRESHOLD,
                format_hours(normal),
                format_hours(double)
            );
            (normal, double, fragment, reasoning)
        }
        HolidayKind::None => (
            Decimal::ZERO,
            Decimal::ZERO,
            None,
            format!(
                "{} hours worked is within the {} hour threshold, no overtime",
                format_hours(working_hours),
                NORMAL_OT_THRESHOLD
            ),
        ),
    };

    let ot_hours = normal_ot_hours + double_ot_hours;
    let ot_amount = normal_ot_hours
        .checked_mul(rate.regular)
        .zip(double_ot_hours.checked_mul(rate.double))
        .and_then(|(normal, double)| normal.checked_add(double))
        .ok_or_else(|| EngineError::overflow("interval overtime amount"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_classification".to_string(),
        rule_name: "Overtime Classification".to_string(),
        input: serde_json::json!({
            "working_hours": working_hours.normalize().to_string(),
            "holiday": holiday.to_string(),
            "regular_rate": rate.regular.normalize().to_string(),
            "double_rate": rate.double.normalize().to_string()
        }),
        output: serde_json::json!({
            "normal_ot_hours": normal_ot_hours.normalize().to_string(),
            "double_ot_hours": double_ot_hours.normalize().to_string(),
            "ot_amount": ot_amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(OvertimeClassification {
        normal_ot_hours,
        double_ot_hours,
        ot_hours,
        ot_amount,
        reason_fragment,
        audit_step,
    })
}
