//! Pay period aggregate model.
//!
//! This module contains the [`PayPeriodAggregate`] type: the overtime and
//! no-pay totals for one employee over one pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overtime and no-pay totals for a pay period.
///
/// Always recomputed wholesale from the period's intervals; amounts are
/// rounded to two decimal places and reasons carry no trailing whitespace.
///
/// # Example
///
/// ```
/// use attendance_pay::models::PayPeriodAggregate;
/// use rust_decimal::Decimal;
///
/// let aggregate = PayPeriodAggregate::default();
/// assert_eq!(aggregate.overtime_amount, Decimal::ZERO);
/// assert!(!aggregate.has_overtime());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodAggregate {
    /// Total overtime pay for the period.
    pub overtime_amount: Decimal,
    /// Human-readable explanation of the overtime.
    pub overtime_reason: String,
    /// Total no-pay deduction for the period.
    pub no_pay_amount: Decimal,
    /// Human-readable explanation of the no-pay deduction.
    pub no_pay_reason: String,
}

impl PayPeriodAggregate {
    /// Returns true if any overtime was earned in the period.
    pub fn has_overtime(&self) -> bool {
        self.overtime_amount > Decimal::ZERO
    }
}
