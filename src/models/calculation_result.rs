//! Calculation result models for the attendance pay engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs of a pay period calculation: the
//! classified intervals, the period aggregate, an optional salary composition
//! and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceInterval, PayPeriodAggregate, SalaryComposition};
use crate::calculation::{HourlyRate, RateMode};

/// An attendance interval together with the values derived from it.
///
/// This is a fresh value; the interval it was computed from is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedInterval {
    /// The source interval.
    pub interval: AttendanceInterval,
    /// Hours between clock-in and clock-out.
    pub working_hours: Decimal,
    /// Overtime hours paid at the regular OT rate.
    pub normal_ot_hours: Decimal,
    /// Overtime hours paid at the double OT rate.
    pub double_ot_hours: Decimal,
    /// Total overtime hours.
    pub ot_hours: Decimal,
    /// Overtime pay for the interval, unrounded.
    pub ot_amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use attendance_pay::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

/// The complete result of a pay period calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The rate basis used to price overtime.
    pub rate_mode: RateMode,
    /// The resolved hourly OT rates.
    pub rate: HourlyRate,
    /// Every interval with its derived hours and amounts, in input order.
    pub intervals: Vec<ClassifiedInterval>,
    /// Overtime and no-pay totals for the period.
    pub aggregate: PayPeriodAggregate,
    /// Final salary composition, when a payment structure was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryComposition>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_interval() -> ClassifiedInterval {
        ClassifiedInterval {
            interval: AttendanceInterval {
                id: "in_out_001".to_string(),
                clock_in: NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S")
                    .unwrap(),
                clock_out: NaiveDateTime::parse_from_str(
                    "2026-01-15 17:00:00",
                    "%Y-%m-%d %H:%M:%S",
                )
                .unwrap(),
                holiday: Default::default(),
                description: None,
            },
            working_hours: dec("9"),
            normal_ot_hours: dec("1"),
            double_ot_hours: Decimal::ZERO,
            ot_hours: dec("1"),
            ot_amount: dec("100"),
        }
    }

    fn create_sample_result() -> CalculationResult {
        CalculationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            employee_id: Some("emp_001".to_string()),
            rate_mode: RateMode::Flat,
            rate: HourlyRate {
                regular: dec("100"),
                double: dec("200"),
            },
            intervals: vec![create_sample_interval()],
            aggregate: PayPeriodAggregate {
                overtime_amount: dec("100.00"),
                overtime_reason: "Normal OT for a total of 1 hour(s).".to_string(),
                no_pay_amount: Decimal::ZERO,
                no_pay_reason: String::new(),
            },
            salary: None,
            audit_trace: AuditTrace::default(),
        }
    }

    #[test]
    fn test_calculation_result_round_trip() {
        let result = create_sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_optional_fields_skipped_when_none() {
        let mut result = create_sample_result();
        result.employee_id = None;

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("employee_id"));
        assert!(!json.contains("\"salary\""));
    }

    #[test]
    fn test_classified_interval_amounts_serialize_as_strings() {
        let json = serde_json::to_string(&create_sample_interval()).unwrap();
        assert!(json.contains("\"working_hours\":\"9\""));
        assert!(json.contains("\"ot_amount\":\"100\""));
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 2,
            rule_id: "overtime_classification".to_string(),
            rule_name: "Overtime Classification".to_string(),
            input: serde_json::json!({"working_hours": "11"}),
            output: serde_json::json!({"ot_hours": "3"}),
            reasoning: "11 hours worked".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"rule_id\":\"overtime_classification\""));
        let deserialized: AuditStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }
}
