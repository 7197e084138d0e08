//! Interval normalization functionality.
//!
//! This module parses raw attendance records into typed intervals and derives
//! the worked hours of an interval from its clock-in and clock-out times.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceInterval, AttendanceRecord};

/// Timestamp layouts accepted from timekeeping imports, tried in order.
pub const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// An interval with its worked hours derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedInterval {
    /// A copy of the source interval.
    pub interval: AttendanceInterval,
    /// Hours between clock-in and clock-out, e.g. `7.5` for 7h30m.
    pub working_hours: Decimal,
}

/// Parses a timestamp in any of the [`TIMESTAMP_FORMATS`].
///
/// # Examples
///
/// ```
/// use attendance_pay::calculation::parse_timestamp;
///
/// assert!(parse_timestamp("2026-01-15 08:30").is_some());
/// assert!(parse_timestamp("2026-01-15T08:30:00").is_some());
/// assert!(parse_timestamp("15/01/2026 08:30").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Converts a raw attendance record into a typed interval.
///
/// Fails with [`EngineError::InvalidInterval`] when either timestamp cannot
/// be parsed. Ordering of the timestamps is checked by
/// [`normalize_interval`], not here.
pub fn parse_record(record: &AttendanceRecord) -> EngineResult<AttendanceInterval> {
    let parse = |label: &str, value: &str| {
        parse_timestamp(value).ok_or_else(|| EngineError::InvalidInterval {
            interval_id: record.id.clone(),
            message: format!("{} '{}' is not a recognised timestamp", label, value),
        })
    };

    Ok(AttendanceInterval {
        id: record.id.clone(),
        clock_in: parse("clock-in", &record.clock_in)?,
        clock_out: parse("clock-out", &record.clock_out)?,
        holiday: record.holiday,
        description: record.description.clone(),
    })
}

/// Derives the worked hours of an interval.
///
/// Uses plain wall-clock subtraction; the interval must satisfy
/// `clock_out > clock_in`.
///
/// # Examples
///
/// ```
/// use attendance_pay::calculation::normalize_interval;
/// use attendance_pay::models::{AttendanceInterval, HolidayKind};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let interval = AttendanceInterval {
///     id: "in_out_001".to_string(),
///     clock_in: NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     clock_out: NaiveDateTime::parse_from_str("2026-01-15 16:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     holiday: HolidayKind::None,
///     description: None,
/// };
///
/// let normalized = normalize_interval(&interval).unwrap();
/// assert_eq!(normalized.working_hours, Decimal::new(75, 1)); // 7.5
/// ```
pub fn normalize_interval(interval: &AttendanceInterval) -> EngineResult<NormalizedInterval> {
    if interval.clock_out <= interval.clock_in {
        return Err(EngineError::InvalidInterval {
            interval_id: interval.id.clone(),
            message: format!(
                "clock-out {} is not after clock-in {}",
                interval.clock_out, interval.clock_in
            ),
        });
    }

    let seconds = (interval.clock_out - interval.clock_in).num_seconds();
    let working_hours = Decimal::from(seconds) / SECONDS_PER_HOUR;

    Ok(NormalizedInterval {
        interval: interval.clone(),
        working_hours,
    })
}
