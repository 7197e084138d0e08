//! Attendance interval model and related types.
//!
//! This module defines the clock-in/clock-out records that feed the overtime
//! calculation, both in their raw imported form and in their typed form.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The holiday classification of an attendance interval.
///
/// Drives the holiday overtime branch of the classifier. Deserialization
/// goes through [`FromStr`], so JSON and CSV accept the same spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum HolidayKind {
    /// A regular working day.
    #[default]
    None,
    /// A holiday on which every worked hour is paid at the double OT rate.
    Double,
}

impl FromStr for HolidayKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(HolidayKind::None),
            "double" => Ok(HolidayKind::Double),
            other => Err(EngineError::InvalidInterval {
                interval_id: String::new(),
                message: format!("unknown holiday kind '{}'", other),
            }),
        }
    }
}

impl TryFrom<String> for HolidayKind {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayKind::None => write!(f, "none"),
            HolidayKind::Double => write!(f, "double"),
        }
    }
}

/// An attendance record as delivered by a timekeeping import or manual entry.
///
/// Timestamps are kept as the raw strings that were supplied; they are parsed
/// into an [`AttendanceInterval`] by
/// [`parse_record`](crate::calculation::parse_record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier for the record (row number, device id, etc.).
    pub id: String,
    /// The raw clock-in timestamp.
    pub clock_in: String,
    /// The raw clock-out timestamp.
    pub clock_out: String,
    /// The holiday classification for the day.
    #[serde(default)]
    pub holiday: HolidayKind,
    /// Free-text description, passed through untouched.
    #[serde(default)]
    pub description: Option<String>,
}

/// A single clock-in/clock-out pair with typed timestamps.
///
/// Both timestamps are wall-clock values in the same reference frame; no
/// timezone conversion is applied.
///
/// # Examples
///
/// ```
/// use attendance_pay::models::{AttendanceInterval, HolidayKind};
/// use chrono::NaiveDateTime;
///
/// let interval = AttendanceInterval {
///     id: "in_out_001".to_string(),
///     clock_in: NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     clock_out: NaiveDateTime::parse_from_str("2026-01-15 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     holiday: HolidayKind::None,
///     description: None,
/// };
/// assert!(!interval.is_double_holiday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceInterval {
    /// Identifier for the interval.
    pub id: String,
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out.
    pub clock_out: NaiveDateTime,
    /// The holiday classification for the day.
    #[serde(default)]
    pub holiday: HolidayKind,
    /// Free-text description, passed through untouched.
    #[serde(default)]
    pub description: Option<String>,
}

impl AttendanceInterval {
    /// Returns true if the interval was worked on a double-rate holiday.
    pub fn is_double_holiday(&self) -> bool {
        self.holiday == HolidayKind::Double
    }
}
