//! Request types for the attendance pay API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/payment-structure/validate` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::RateMode;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, HolidayKind, PaymentStructure, PaymentStructureLine};

/// Request body for the `/calculate` endpoint.
///
/// Contains the attendance of one employee for one pay period, the figures
/// needed to price overtime, and optionally a payment structure to compose a
/// final salary from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Identifier of the employee, echoed in the result.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Monthly basic pay.
    pub basic: Decimal,
    /// Divisor from basic to hourly rate; configuration default when absent.
    #[serde(default)]
    pub divide_by: Option<Decimal>,
    /// Rate mode; configuration default when absent.
    #[serde(default)]
    pub rate_mode: Option<RateMode>,
    /// Attendance intervals for the period.
    #[serde(default)]
    pub intervals: Vec<IntervalRequest>,
    /// Payment structure; when present a salary composition is returned.
    #[serde(default)]
    pub payment_structure: Option<PaymentStructureRequest>,
    /// Manually entered no-pay deduction.
    #[serde(default)]
    pub no_pay_amount: Option<Decimal>,
    /// Salary advance, reported alongside the final salary.
    #[serde(default)]
    pub advance_amount: Option<Decimal>,
}

/// Attendance interval information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalRequest {
    /// Identifier for the interval.
    pub id: String,
    /// Clock-in timestamp, e.g. `"2026-01-15 08:00"`.
    pub clock_in: String,
    /// Clock-out timestamp.
    pub clock_out: String,
    /// Holiday classification.
    #[serde(default)]
    pub holiday: HolidayKind,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Payment structure information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStructureRequest {
    /// Whether amounts are restricted to whole numbers.
    #[serde(default)]
    pub is_salary: bool,
    /// Addition lines.
    #[serde(default)]
    pub additions: Vec<PaymentLineRequest>,
    /// Deduction lines.
    #[serde(default)]
    pub deductions: Vec<PaymentLineRequest>,
}

/// A single payment structure line in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentLineRequest {
    /// Display name of the line.
    pub name: String,
    /// Raw amount string.
    #[serde(default)]
    pub amount: String,
}

/// Request body for the `/payment-structure/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountValidationRequest {
    /// The amount as typed.
    pub value: String,
    /// Whether the amount belongs to a salary structure.
    #[serde(default)]
    pub is_salary: bool,
}

impl From<IntervalRequest> for AttendanceRecord {
    fn from(req: IntervalRequest) -> Self {
        AttendanceRecord {
            id: req.id,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            holiday: req.holiday,
            description: req.description,
        }
    }
}

impl From<PaymentLineRequest> for PaymentStructureLine {
    fn from(req: PaymentLineRequest) -> Self {
        PaymentStructureLine::new(req.name, req.amount)
    }
}

impl TryFrom<PaymentStructureRequest> for PaymentStructure {
    type Error = crate::error::EngineError;

    fn try_from(req: PaymentStructureRequest) -> EngineResult<Self> {
        PaymentStructure::from_lines(
            req.is_salary,
            req.additions.into_iter().map(Into::into).collect(),
            req.deductions.into_iter().map(Into::into).collect(),
        )
    }
}
