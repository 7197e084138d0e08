//! Salary composition model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The figures a final salary is composed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInputs {
    /// Monthly basic pay.
    pub basic: Decimal,
    /// Aggregated overtime for the period.
    #[serde(default)]
    pub overtime_amount: Decimal,
    /// No-pay deduction for the period.
    #[serde(default)]
    pub no_pay_amount: Decimal,
    /// Salary advance already paid out. Tracked, not subtracted.
    #[serde(default)]
    pub advance_amount: Decimal,
}

/// A composed salary with every component that went into it.
///
/// `final_salary` is derived; there is no way to set it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComposition {
    /// Monthly basic pay.
    pub basic: Decimal,
    /// Aggregated overtime for the period.
    pub overtime_amount: Decimal,
    /// Sum of payment structure additions.
    pub additions_total: Decimal,
    /// Sum of payment structure deductions.
    pub deductions_total: Decimal,
    /// No-pay deduction for the period.
    pub no_pay_amount: Decimal,
    /// Salary advance, reported alongside the final salary.
    pub advance_amount: Decimal,
    /// `basic + overtime + additions - deductions - no_pay`.
    pub final_salary: Decimal,
}
