//! Payment structure model: the named additions and deductions applied on
//! top of basic pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::parse_amount;
use crate::error::{EngineError, EngineResult};

/// Name of the built-in statutory deduction that every structure carries.
pub const EPF_LINE_NAME: &str = "EPF 8%";

/// Whether a line adds to or deducts from pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Added to basic pay.
    Addition,
    /// Deducted from basic pay.
    Deduction,
}

/// The parsed value of a payment line amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineAmount {
    /// No amount set yet.
    Blank,
    /// A single amount.
    Fixed {
        /// The amount.
        value: Decimal,
    },
    /// A `"min-max"` range, only allowed outside salary context.
    Range {
        /// Lower bound of the range.
        min: Decimal,
        /// Upper bound of the range.
        max: Decimal,
    },
}

/// A named addition or deduction.
///
/// The amount is kept as entered; use [`PaymentStructureLine::parsed_amount`]
/// to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStructureLine {
    /// Display name of the line, e.g. "Travel allowance".
    pub name: String,
    /// Raw amount: blank, `"150.00"`, or `"100-200.00"`.
    #[serde(default)]
    pub amount: String,
}

impl PaymentStructureLine {
    /// Creates a new line.
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    /// Checks the name is present and the amount matches the pattern allowed
    /// for the given context.
    pub fn validate(&self, is_salary: bool) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidPaymentLine {
                field: "name".to_string(),
                message: "name is required".to_string(),
            });
        }
        self.parsed_amount(is_salary).map(|_| ())
    }

    /// Parses the raw amount for the given context.
    pub fn parsed_amount(&self, is_salary: bool) -> EngineResult<LineAmount> {
        parse_amount(&self.amount, is_salary)
    }

    /// Returns true if this is the built-in EPF deduction.
    pub fn is_protected(&self) -> bool {
        self.name == EPF_LINE_NAME
    }
}

/// The additions and deductions applied to one company or one salary.
///
/// A salary structure (`is_salary = true`) accepts whole-number amounts only,
/// while a company structure also accepts two-decimal amounts and ranges.
/// The [`EPF_LINE_NAME`] deduction is always present.
///
/// # Example
///
/// ```
/// use attendance_pay::models::{LineKind, PaymentStructure, PaymentStructureLine};
///
/// let mut structure = PaymentStructure::new(true);
/// structure
///     .add_line(LineKind::Addition, PaymentStructureLine::new("Attendance bonus", "1000"))
///     .unwrap();
///
/// assert_eq!(structure.additions().len(), 1);
/// assert_eq!(structure.deductions()[0].name, "EPF 8%");
/// assert!(structure.remove_line(LineKind::Deduction, "EPF 8%").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentStructure {
    is_salary: bool,
    additions: Vec<PaymentStructureLine>,
    deductions: Vec<PaymentStructureLine>,
}

#[derive(Deserialize)]
struct PaymentStructureData {
    #[serde(default)]
    is_salary: bool,
    #[serde(default)]
    additions: Vec<PaymentStructureLine>,
    #[serde(default)]
    deductions: Vec<PaymentStructureLine>,
}

/// Deserialization goes through [`PaymentStructure::from_lines`], so every
/// line is validated and the EPF deduction is always present.
impl<'de> Deserialize<'de> for PaymentStructure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = PaymentStructureData::deserialize(deserializer)?;
        Self::from_lines(data.is_salary, data.additions, data.deductions)
            .map_err(serde::de::Error::custom)
    }
}

impl PaymentStructure {
    /// Creates an empty structure holding only the EPF deduction.
    pub fn new(is_salary: bool) -> Self {
        Self {
            is_salary,
            additions: Vec::new(),
            deductions: vec![PaymentStructureLine::new(EPF_LINE_NAME, "")],
        }
    }

    /// Builds a structure from existing lines, validating each one.
    ///
    /// The EPF deduction is inserted first if the supplied deductions do not
    /// already contain it.
    pub fn from_lines(
        is_salary: bool,
        additions: Vec<PaymentStructureLine>,
        deductions: Vec<PaymentStructureLine>,
    ) -> EngineResult<Self> {
        for line in additions.iter().chain(deductions.iter()) {
            line.validate(is_salary)?;
        }

        let mut deductions = deductions;
        if !deductions.iter().any(PaymentStructureLine::is_protected) {
            deductions.insert(0, PaymentStructureLine::new(EPF_LINE_NAME, ""));
        }

        Ok(Self {
            is_salary,
            additions,
            deductions,
        })
    }

    /// Returns true if amounts are restricted to whole numbers.
    pub fn is_salary(&self) -> bool {
        self.is_salary
    }

    /// Returns the addition lines in entry order.
    pub fn additions(&self) -> &[PaymentStructureLine] {
        &self.additions
    }

    /// Returns the deduction lines in entry order.
    pub fn deductions(&self) -> &[PaymentStructureLine] {
        &self.deductions
    }

    /// Validates and appends a line.
    pub fn add_line(&mut self, kind: LineKind, line: PaymentStructureLine) -> EngineResult<()> {
        line.validate(self.is_salary)?;
        self.lines_mut(kind).push(line);
        Ok(())
    }

    /// Removes the first line with the given name and returns it.
    ///
    /// Fails with [`EngineError::ProtectedLine`] for the EPF deduction and with
    /// [`EngineError::InvalidPaymentLine`] if no line has that name.
    pub fn remove_line(&mut self, kind: LineKind, name: &str) -> EngineResult<PaymentStructureLine> {
        if name == EPF_LINE_NAME {
            return Err(EngineError::ProtectedLine {
                name: name.to_string(),
            });
        }

        let lines = self.lines_mut(kind);
        let index = lines
            .iter()
            .position(|line| line.name == name)
            .ok_or_else(|| EngineError::InvalidPaymentLine {
                field: "name".to_string(),
                message: format!("no line named '{}'", name),
            })?;

        Ok(lines.remove(index))
    }

    fn lines_mut(&mut self, kind: LineKind) -> &mut Vec<PaymentStructureLine> {
        match kind {
            LineKind::Addition => &mut self.additions,
            LineKind::Deduction => &mut self.deductions,
        }
    }
}
