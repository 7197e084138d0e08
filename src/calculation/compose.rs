//! Final salary composition.
//!
//! `final_salary = basic + overtime + sum(additions) - sum(deductions) - no_pay`
//!
//! Blank line amounts count as zero. Range amounts cannot be summed without a
//! selection step, so they fail the composition unless the caller opts into
//! [`RangePolicy::TreatAsZero`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::aggregate::round_money;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    LineAmount, PaymentStructure, PaymentStructureLine, SalaryComposition, SalaryInputs,
};

/// How range-valued line amounts are handled when summing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Fail with [`EngineError::AmbiguousRangeAmount`].
    #[default]
    Reject,
    /// Skip the line with a warning.
    TreatAsZero,
}

/// Sums the amounts of a list of lines.
pub fn sum_lines(
    lines: &[PaymentStructureLine],
    is_salary: bool,
    policy: RangePolicy,
) -> EngineResult<Decimal> {
    let mut total = Decimal::ZERO;

    for line in lines {
        match line.parsed_amount(is_salary)? {
            LineAmount::Blank => {}
            LineAmount::Fixed { value } => {
                total = total
                    .checked_add(value)
                    .ok_or_else(|| EngineError::overflow("payment structure line total"))?;
            }
            LineAmount::Range { .. } => match policy {
                RangePolicy::Reject => {
                    return Err(EngineError::AmbiguousRangeAmount {
                        name: line.name.clone(),
                        amount: line.amount.clone(),
                    });
                }
                RangePolicy::TreatAsZero => {
                    warn!(line = %line.name, amount = %line.amount, "Range amount counted as zero");
                }
            },
        }
    }

    Ok(total)
}

fn net_salary(
    basic: Decimal,
    overtime_amount: Decimal,
    additions_total: Decimal,
    deductions_total: Decimal,
    no_pay_amount: Decimal,
) -> EngineResult<Decimal> {
    basic
        .checked_add(overtime_amount)
        .and_then(|total| total.checked_add(additions_total))
        .and_then(|total| total.checked_sub(deductions_total))
        .and_then(|total| total.checked_sub(no_pay_amount))
        .map(round_money)
        .ok_or_else(|| EngineError::overflow("final salary"))
}

/// Computes the final salary from its parts.
///
/// Line amounts are read in company-structure context and ranges are
/// rejected. Use [`compose_salary`] for the full breakdown and other policies.
///
/// # Examples
///
/// ```
/// use attendance_pay::calculation::compose_final_salary;
/// use attendance_pay::models::PaymentStructureLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let final_salary = compose_final_salary(
///     Decimal::from(16000),
///     Decimal::from_str("266.67").unwrap(),
///     &[PaymentStructureLine::new("Bonus", "1000")],
///     &[PaymentStructureLine::new("Loan", "500")],
///     Decimal::ZERO,
/// )
/// .unwrap();
///
/// assert_eq!(final_salary, Decimal::from_str("16766.67").unwrap());
/// ```
pub fn compose_final_salary(
    basic: Decimal,
    overtime_amount: Decimal,
    additions: &[PaymentStructureLine],
    deductions: &[PaymentStructureLine],
    no_pay_amount: Decimal,
) -> EngineResult<Decimal> {
    let additions_total = sum_lines(additions, false, RangePolicy::Reject)?;
    let deductions_total = sum_lines(deductions, false, RangePolicy::Reject)?;

    net_salary(
        basic,
        overtime_amount,
        additions_total,
        deductions_total,
        no_pay_amount,
    )
}

/// Composes a salary with its full breakdown.
///
/// The advance amount is carried into the result but does not reduce the
/// final salary.
pub fn compose_salary(
    inputs: &SalaryInputs,
    structure: &PaymentStructure,
    policy: RangePolicy,
) -> EngineResult<SalaryComposition> {
    let additions_total = sum_lines(structure.additions(), structure.is_salary(), policy)?;
    let deductions_total = sum_lines(structure.deductions(), structure.is_salary(), policy)?;

    let final_salary = net_salary(
        inputs.basic,
        inputs.overtime_amount,
        additions_total,
        deductions_total,
        inputs.no_pay_amount,
    )?;

    Ok(SalaryComposition {
        basic: inputs.basic,
        overtime_amount: inputs.overtime_amount,
        additions_total,
        deductions_total,
        no_pay_amount: inputs.no_pay_amount,
        advance_amount: inputs.advance_amount,
        final_salary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(name: &str, amount: &str) -> PaymentStructureLine {
        PaymentStructureLine::new(name, amount)
    }

    #[test]
    fn test_documented_scenario() {
        let result = compose_final_salary(
            dec("16000"),
            dec("266.67"),
            &[line("Bonus", "1000")],
            &[line("Loan", "500")],
            Decimal::ZERO,
        )
        .unwrap();

        assert_eq!(result, dec("16766.67"));
    }

    #[test]
    fn test_no_pay_is_subtracted() {
        let result = compose_final_salary(
            dec("16000"),
            Decimal::ZERO,
            &[],
            &[],
            dec("533.33"),
        )
        .unwrap();

        assert_eq!(result, dec("15466.67"));
    }

    #[test]
    fn test_blank_amounts_count_as_zero() {
        let result = compose_final_salary(
            dec("16000"),
            Decimal::ZERO,
            &[line("Bonus", "")],
            &[line("EPF 8%", "")],
            Decimal::ZERO,
        )
        .unwrap();

        assert_eq!(result, dec("16000"));
    }

    #[test]
    fn test_range_amount_rejected() {
        let result = compose_final_salary(
            dec("16000"),
            Decimal::ZERO,
            &[line("Travel", "100-200.00")],
            &[],
            Decimal::ZERO,
        );

        match result {
            Err(EngineError::AmbiguousRangeAmount { name, amount }) => {
                assert_eq!(name, "Travel");
                assert_eq!(amount, "100-200.00");
            }
            _ => panic!("Expected AmbiguousRangeAmount error"),
        }
    }

    #[test]
    fn test_range_treated_as_zero_when_requested() {
        let total = sum_lines(
            &[line("Travel", "100-200.00"), line("Meal", "50.00")],
            false,
            RangePolicy::TreatAsZero,
        )
        .unwrap();

        assert_eq!(total, dec("50"));
    }

    #[test]
    fn test_invalid_amount_propagates() {
        let result = sum_lines(&[line("Bonus", "abc")], false, RangePolicy::Reject);
        assert!(matches!(
            result,
            Err(EngineError::InvalidPaymentLine { .. })
        ));
    }

    #[test]
    fn test_compose_salary_breakdown() {
        let mut structure = PaymentStructure::new(true);
        structure
            .add_line(LineKind::Addition, line("Attendance bonus", "1000"))
            .unwrap();
        structure
            .add_line(LineKind::Deduction, line("Loan", "500"))
            .unwrap();

        let inputs = SalaryInputs {
            basic: dec("16000"),
            overtime_amount: dec("266.67"),
            no_pay_amount: Decimal::ZERO,
            advance_amount: dec("2000"),
        };

        let composition = compose_salary(&inputs, &structure, RangePolicy::Reject).unwrap();

        assert_eq!(composition.additions_total, dec("1000"));
        assert_eq!(composition.deductions_total, dec("500"));
        assert_eq!(composition.advance_amount, dec("2000"));
        // advance is reported, not subtracted
        assert_eq!(composition.final_salary, dec("16766.67"));
    }

    #[test]
    fn test_line_total_overflow_is_an_error() {
        // Each amount is valid on its own; nine of them exceed Decimal::MAX
        let huge = "9".repeat(28);
        let lines: Vec<PaymentStructureLine> = (1..=9)
            .map(|i| line(&format!("Bonus {}", i), &huge))
            .collect();

        let result = sum_lines(&lines, false, RangePolicy::Reject);

        match result {
            Err(EngineError::CalculationOverflow { operation }) => {
                assert_eq!(operation, "payment structure line total")
            }
            other => panic!("Expected CalculationOverflow error, got {:?}", other),
        }
    }

    #[test]
    fn test_final_salary_overflow_is_an_error() {
        let result = compose_final_salary(
            Decimal::MAX,
            dec("266.67"),
            &[],
            &[],
            Decimal::ZERO,
        );

        assert!(matches!(
            result,
            Err(EngineError::CalculationOverflow { .. })
        ));
    }

    #[test]
    fn test_compose_salary_overflow_is_an_error() {
        let structure = PaymentStructure::new(true);
        let inputs = SalaryInputs {
            basic: Decimal::MAX,
            overtime_amount: Decimal::MAX,
            ..SalaryInputs::default()
        };

        let result = compose_salary(&inputs, &structure, RangePolicy::Reject);
        assert!(matches!(
            result,
            Err(EngineError::CalculationOverflow { .. })
        ));
    }

    #[test]
    fn test_default_range_policy_is_reject() {
        assert_eq!(RangePolicy::default(), RangePolicy::Reject);
    }
}
