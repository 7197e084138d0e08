//! Core data models for the attendance pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod pay_period;
mod payment_structure;
mod salary;

pub use attendance::{AttendanceInterval, AttendanceRecord, HolidayKind};
pub use calculation_result::{AuditStep, AuditTrace, CalculationResult, ClassifiedInterval};
pub use pay_period::PayPeriodAggregate;
pub use payment_structure::{
    EPF_LINE_NAME, LineAmount, LineKind, PaymentStructure, PaymentStructureLine,
};
pub use salary::{SalaryComposition, SalaryInputs};
