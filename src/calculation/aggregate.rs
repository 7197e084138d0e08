//! Pay period aggregation functionality.
//!
//! This module folds the attendance intervals of one pay period into overtime
//! and no-pay totals with human-readable reasons.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::normalize::normalize_interval;
use super::overtime::{classify_overtime, format_hours};
use super::rate::{HourlyRate, RateBasis};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceInterval, AuditStep, AuditTrace, ClassifiedInterval, PayPeriodAggregate};

/// The full output of aggregating a pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodCalculation {
    /// The resolved hourly OT rates.
    pub rate: HourlyRate,
    /// Every interval with its derived values, in input order.
    pub intervals: Vec<ClassifiedInterval>,
    /// The period totals.
    pub aggregate: PayPeriodAggregate,
    /// Audit trace of every rule applied.
    pub audit_trace: AuditTrace,
}

/// Rounds a period total to two decimal places, midpoints away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Aggregates the overtime of a pay period.
///
/// Each interval is normalized and classified in input order; reason
/// fragments are concatenated in that order, followed by a single summary of
/// the regular OT hours across the period. Per-interval amounts keep full
/// precision and only the period totals are rounded.
///
/// The input slice is never modified and the same input always yields the
/// same output. Any invalid interval fails the whole calculation, as does an
/// overtime total beyond the representable range.
///
/// No-pay is not derived from attendance; the aggregate carries a zero no-pay
/// amount with an empty reason.
///
/// # Examples
///
/// ```
/// use attendance_pay::calculation::{aggregate_period, RateBasis};
/// use attendance_pay::models::{AttendanceInterval, HolidayKind};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let intervals = vec![
///     AttendanceInterval {
///         id: "mon".to_string(),
///         clock_in: at("2026-01-12 08:00:00"),
///         clock_out: at("2026-01-12 17:00:00"),
///         holiday: HolidayKind::None,
///         description: None,
///     },
///     AttendanceInterval {
///         id: "tue".to_string(),
///         clock_in: at("2026-01-13 07:00:00"),
///         clock_out: at("2026-01-13 19:00:00"),
///         holiday: HolidayKind::None,
///         description: None,
///     },
/// ];
///
/// let result = aggregate_period(&intervals, &RateBasis::flat()).unwrap();
/// assert_eq!(result.aggregate.overtime_amount, Decimal::from(700));
/// assert_eq!(
///     result.aggregate.overtime_reason,
///     "Double OT for 2 hour(s). Normal OT for a total of 3 hour(s)."
/// );
/// ```
pub fn aggregate_period(
    intervals: &[AttendanceInterval],
    basis: &RateBasis,
) -> EngineResult<PeriodCalculation> {
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let rate = basis.resolve()?;
    steps.push(AuditStep {
        step_number,
        rule_id: "rate_resolution".to_string(),
        rule_name: "Hourly Rate Resolution".to_string(),
        input: serde_json::json!({
            "mode": basis.mode,
            "basic": basis.basic.normalize().to_string(),
            "divide_by": basis.divide_by.map(|d| d.normalize().to_string())
        }),
        output: serde_json::json!({
            "regular": rate.regular.normalize().to_string(),
            "double": rate.double.normalize().to_string()
        }),
        reasoning: format!(
            "Regular OT at {} per hour, double OT at {} per hour",
            round_money(rate.regular),
            round_money(rate.double)
        ),
    });
    step_number += 1;

    let mut classified = Vec::with_capacity(intervals.len());
    let mut fragments: Vec<String> = Vec::new();
    let mut total_normal_hours = Decimal::ZERO;
    let mut total_ot_amount = Decimal::ZERO;

    for interval in intervals {
        let normalized = normalize_interval(interval)?;
        let classification =
            classify_overtime(normalized.working_hours, interval.holiday, &rate, step_number)?;
        step_number += 1;

        debug!(
            interval_id = %interval.id,
            working_hours = %normalized.working_hours.round_dp(2),
            ot_hours = %classification.ot_hours.round_dp(2),
            "Classified interval"
        );

        total_normal_hours += classification.normal_ot_hours;
        total_ot_amount = total_ot_amount
            .checked_add(classification.ot_amount)
            .ok_or_else(|| EngineError::overflow("period overtime amount"))?;
        if let Some(fragment) = classification.reason_fragment {
            fragments.push(fragment);
        }
        steps.push(classification.audit_step);

        classified.push(ClassifiedInterval {
            interval: normalized.interval,
            working_hours: normalized.working_hours,
            normal_ot_hours: classification.normal_ot_hours,
            double_ot_hours: classification.double_ot_hours,
            ot_hours: classification.ot_hours,
            ot_amount: classification.ot_amount,
        });
    }

    if total_normal_hours > Decimal::ZERO {
        fragments.push(format!(
            "Normal OT for a total of {} hour(s).",
            format_hours(total_normal_hours)
        ));
    }

    let aggregate = PayPeriodAggregate {
        overtime_amount: round_money(total_ot_amount),
        overtime_reason: fragments.join(" ").trim_end().to_string(),
        no_pay_amount: Decimal::ZERO,
        no_pay_reason: String::new(),
    };

    steps.push(AuditStep {
        step_number,
        rule_id: "period_aggregation".to_string(),
        rule_name: "Pay Period Aggregation".to_string(),
        input: serde_json::json!({
            "interval_count": intervals.len(),
            "total_normal_ot_hours": total_normal_hours.normalize().to_string(),
            "unrounded_ot_amount": total_ot_amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_amount": aggregate.overtime_amount.to_string(),
            "no_pay_amount": aggregate.no_pay_amount.to_string()
        }),
        reasoning: format!(
            "{} interval(s) aggregated to {} overtime",
            intervals.len(),
            aggregate.overtime_amount
        ),
    });

    debug!(
        intervals = intervals.len(),
        overtime_amount = %aggregate.overtime_amount,
        "Aggregated pay period"
    );

    Ok(PeriodCalculation {
        rate,
        intervals: classified,
        aggregate,
        audit_trace: AuditTrace { steps },
    })
}
