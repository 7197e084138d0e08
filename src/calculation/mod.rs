//! Calculation logic for the attendance pay engine.
//!
//! This module contains the calculation functions for turning attendance into
//! pay: interval normalization, hourly rate resolution, overtime
//! classification, pay period aggregation, payment structure amount
//! validation, and final salary composition.

mod aggregate;
mod amount_validation;
mod compose;
mod normalize;
mod overtime;
mod rate;
mod salary_form;

pub use aggregate::{PeriodCalculation, aggregate_period, round_money};
pub use amount_validation::{parse_amount, validate_amount};
pub use compose::{RangePolicy, compose_final_salary, compose_salary, sum_lines};
pub use normalize::{
    NormalizedInterval, TIMESTAMP_FORMATS, normalize_interval, parse_record, parse_timestamp,
};
pub use overtime::{
    DOUBLE_OT_THRESHOLD, HOLIDAY_DOUBLE_REASON, NORMAL_OT_THRESHOLD, OvertimeClassification,
    classify_overtime,
};
pub use rate::{
    DEFAULT_DIVIDE_BY, FLAT_DOUBLE_RATE, FLAT_REGULAR_RATE, FlatRates, HourlyRate, RateBasis,
    RateMode, resolve_rate, resolve_rate_with,
};
pub use salary_form::SalaryForm;
