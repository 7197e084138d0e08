//! Editable salary form with a derived final salary.
//!
//! Every change to an input re-runs the full composition; there is no
//! incremental update. A change that would make the composition fail is
//! rejected and leaves the form as it was.

use rust_decimal::Decimal;

use super::compose::{RangePolicy, compose_salary};
use crate::error::EngineResult;
use crate::models::{PayPeriodAggregate, PaymentStructure, SalaryComposition, SalaryInputs};

/// A salary being edited for one employee and pay period.
///
/// # Example
///
/// ```
/// use attendance_pay::calculation::{RangePolicy, SalaryForm};
/// use attendance_pay::models::{PaymentStructure, SalaryInputs};
/// use rust_decimal::Decimal;
///
/// let inputs = SalaryInputs { basic: Decimal::from(16000), ..Default::default() };
/// let mut form = SalaryForm::new(inputs, PaymentStructure::new(true), RangePolicy::Reject).unwrap();
/// assert_eq!(form.final_salary(), Decimal::from(16000));
///
/// form.set_overtime_amount(Decimal::from(700)).unwrap();
/// assert_eq!(form.final_salary(), Decimal::from(16700));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryForm {
    inputs: SalaryInputs,
    structure: PaymentStructure,
    policy: RangePolicy,
    composition: SalaryComposition,
}

impl SalaryForm {
    /// Creates a form and computes its initial composition.
    pub fn new(
        inputs: SalaryInputs,
        structure: PaymentStructure,
        policy: RangePolicy,
    ) -> EngineResult<Self> {
        let composition = compose_salary(&inputs, &structure, policy)?;
        Ok(Self {
            inputs,
            structure,
            policy,
            composition,
        })
    }

    /// Returns the current inputs.
    pub fn inputs(&self) -> &SalaryInputs {
        &self.inputs
    }

    /// Returns the current payment structure.
    pub fn structure(&self) -> &PaymentStructure {
        &self.structure
    }

    /// Returns the current composition.
    pub fn composition(&self) -> &SalaryComposition {
        &self.composition
    }

    /// Returns the derived final salary.
    pub fn final_salary(&self) -> Decimal {
        self.composition.final_salary
    }

    /// Sets the basic pay.
    pub fn set_basic(&mut self, basic: Decimal) -> EngineResult<()> {
        self.update(SalaryInputs { basic, ..self.inputs }, None)
    }

    /// Sets the overtime amount.
    pub fn set_overtime_amount(&mut self, overtime_amount: Decimal) -> EngineResult<()> {
        self.update(
            SalaryInputs {
                overtime_amount,
                ..self.inputs
            },
            None,
        )
    }

    /// Sets the no-pay amount.
    pub fn set_no_pay_amount(&mut self, no_pay_amount: Decimal) -> EngineResult<()> {
        self.update(
            SalaryInputs {
                no_pay_amount,
                ..self.inputs
            },
            None,
        )
    }

    /// Sets the advance amount.
    pub fn set_advance_amount(&mut self, advance_amount: Decimal) -> EngineResult<()> {
        self.update(
            SalaryInputs {
                advance_amount,
                ..self.inputs
            },
            None,
        )
    }

    /// Takes overtime and no-pay from a period aggregate.
    pub fn apply_aggregate(&mut self, aggregate: &PayPeriodAggregate) -> EngineResult<()> {
        self.update(
            SalaryInputs {
                overtime_amount: aggregate.overtime_amount,
                no_pay_amount: aggregate.no_pay_amount,
                ..self.inputs
            },
            None,
        )
    }

    /// Replaces the payment structure.
    pub fn set_payment_structure(&mut self, structure: PaymentStructure) -> EngineResult<()> {
        self.update(self.inputs, Some(structure))
    }

    fn update(
        &mut self,
        inputs: SalaryInputs,
        structure: Option<PaymentStructure>,
    ) -> EngineResult<()> {
        let composition =
            compose_salary(&inputs, structure.as_ref().unwrap_or(&self.structure), self.policy)?;

        self.inputs = inputs;
        if let Some(structure) = structure {
            self.structure = structure;
        }
        self.composition = composition;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{LineKind, PaymentStructureLine};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_form() -> SalaryForm {
        let mut structure = PaymentStructure::new(true);
        structure
            .add_line(
                LineKind::Addition,
                PaymentStructureLine::new("Attendance bonus", "1000"),
            )
            .unwrap();
        structure
            .add_line(LineKind::Deduction, PaymentStructureLine::new("Loan", "500"))
            .unwrap();

        let inputs = SalaryInputs {
            basic: dec("16000"),
            ..Default::default()
        };
        SalaryForm::new(inputs, structure, RangePolicy::Reject).unwrap()
    }

    #[test]
    fn test_initial_composition() {
        let form = create_form();
        assert_eq!(form.final_salary(), dec("16500"));
    }

    #[test]
    fn test_every_setter_recomputes() {
        let mut form = create_form();

        form.set_overtime_amount(dec("266.67")).unwrap();
        assert_eq!(form.final_salary(), dec("16766.67"));

        form.set_basic(dec("20000")).unwrap();
        assert_eq!(form.final_salary(), dec("20766.67"));

        form.set_no_pay_amount(dec("766.67")).unwrap();
        assert_eq!(form.final_salary(), dec("20000"));

        form.set_payment_structure(PaymentStructure::new(true)).unwrap();
        assert_eq!(form.final_salary(), dec("19500"));
    }

    #[test]
    fn test_advance_does_not_change_final_salary() {
        let mut form = create_form();
        form.set_advance_amount(dec("3000")).unwrap();

        assert_eq!(form.final_salary(), dec("16500"));
        assert_eq!(form.composition().advance_amount, dec("3000"));
    }

    #[test]
    fn test_apply_aggregate() {
        let mut form = create_form();
        let aggregate = PayPeriodAggregate {
            overtime_amount: dec("700.00"),
            overtime_reason: "Double OT for 2 hour(s).".to_string(),
            no_pay_amount: dec("200"),
            no_pay_reason: String::new(),
        };

        form.apply_aggregate(&aggregate).unwrap();

        assert_eq!(form.inputs().overtime_amount, dec("700"));
        assert_eq!(form.final_salary(), dec("17000"));
    }

    #[test]
    fn test_failed_update_keeps_previous_state() {
        let mut form = create_form();
        let before = form.clone();

        let mut ranged = PaymentStructure::new(false);
        ranged
            .add_line(
                LineKind::Addition,
                PaymentStructureLine::new("Travel", "100-200"),
            )
            .unwrap();

        let result = form.set_payment_structure(ranged);
        assert!(matches!(
            result,
            Err(EngineError::AmbiguousRangeAmount { .. })
        ));
        assert_eq!(form, before);
    }

    #[test]
    fn test_overflowing_basic_keeps_previous_state() {
        let mut form = create_form();
        let before = form.clone();

        let result = form.set_basic(Decimal::MAX);

        assert!(matches!(
            result,
            Err(EngineError::CalculationOverflow { .. })
        ));
        assert_eq!(form, before);
    }
}
