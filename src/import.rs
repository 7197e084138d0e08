//! Attendance import from timekeeping CSV exports.
//!
//! Expected header: `id,clock_in,clock_out,holiday,description`. The
//! `holiday` column may be blank, `none` or `double`; `holiday` and
//! `description` may be omitted entirely.

use std::io::Read;

use serde::Deserialize;

use crate::calculation::parse_record;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceInterval, AttendanceRecord, HolidayKind};

#[derive(Debug, Deserialize)]
struct CsvAttendanceRow {
    id: String,
    clock_in: String,
    clock_out: String,
    #[serde(default)]
    holiday: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Reads raw attendance records from CSV.
///
/// # Example
///
/// ```
/// use attendance_pay::import::read_attendance_csv;
///
/// let data = "id,clock_in,clock_out,holiday,description\n\
///             1,2026-01-12 08:00,2026-01-12 19:00,,\n\
///             2,2026-01-13 08:00,2026-01-13 12:00,double,Poya day\n";
///
/// let records = read_attendance_csv(data.as_bytes()).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].description.as_deref(), Some("Poya day"));
/// ```
pub fn read_attendance_csv<R: Read>(reader: R) -> EngineResult<Vec<AttendanceRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<CsvAttendanceRow>().enumerate() {
        let record_number = index as u64 + 1;
        let row = row.map_err(|e| EngineError::ImportError {
            record: record_number,
            message: e.to_string(),
        })?;

        let holiday = row
            .holiday
            .as_deref()
            .unwrap_or_default()
            .parse::<HolidayKind>()
            .map_err(|e| EngineError::ImportError {
                record: record_number,
                message: e.to_string(),
            })?;

        records.push(AttendanceRecord {
            id: row.id,
            clock_in: row.clock_in,
            clock_out: row.clock_out,
            holiday,
            description: row.description.filter(|d| !d.is_empty()),
        });
    }

    Ok(records)
}

/// Reads CSV attendance and parses every record into a typed interval.
///
/// Fails on the first record that cannot be read or parsed.
pub fn import_intervals<R: Read>(reader: R) -> EngineResult<Vec<AttendanceInterval>> {
    read_attendance_csv(reader)?
        .iter()
        .map(parse_record)
        .collect()
}
