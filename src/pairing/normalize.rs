use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;

use super::types::AssignmentRecord;
use crate::error::{PairError, PairResult};
use crate::parser::RawTable;

pub const EMPLOYEE_COLUMN: &str = "EmpID";
pub const PROJECT_COLUMN: &str = "ProjectID";
pub const DATE_FROM_COLUMN: &str = "DateFrom";
pub const DATE_TO_COLUMN: &str = "DateTo";

/// Marks an assignment that is still ongoing
pub const OPEN_END_TOKEN: &str = "NULL";

/// Accepted calendar date layouts, tried in order.
/// Slash-separated day/month is read month first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses a calendar date in any of the supported layouts
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| dt.date())
}

/// Converts raw rows into typed assignment records
///
/// `today` replaces every `DateTo` written as `NULL`. The first bad row aborts
/// the whole conversion.
pub fn normalize_records(table: &RawTable, today: NaiveDate) -> PairResult<Vec<AssignmentRecord>> {
    if table.rows.is_empty() {
        return Ok(Vec::new());
    }

    let employee_col = required_column(table, EMPLOYEE_COLUMN)?;
    let project_col = required_column(table, PROJECT_COLUMN)?;
    let from_col = required_column(table, DATE_FROM_COLUMN)?;
    let to_col = required_column(table, DATE_TO_COLUMN)?;

    let expected = table.headers.len();
    let mut records = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        if row.fields.len() != expected {
            return Err(PairError::SchemaMismatch {
                line: row.line,
                expected,
                found: row.fields.len(),
            });
        }

        let date_from = row_date(&row.fields[from_col], DATE_FROM_COLUMN, row.line)?;
        let date_to = if row.fields[to_col] == OPEN_END_TOKEN {
            today
        } else {
            row_date(&row.fields[to_col], DATE_TO_COLUMN, row.line)?
        };

        records.push(AssignmentRecord {
            employee_id: row.fields[employee_col].clone(),
            project_id: row.fields[project_col].clone(),
            date_from,
            date_to,
        });
    }

    debug!("Normalized {} assignment records", records.len());
    Ok(records)
}

fn required_column(table: &RawTable, name: &str) -> PairResult<usize> {
    table
        .column(name)
        .ok_or_else(|| PairError::MissingColumn(name.to_string()))
}

fn row_date(value: &str, column: &str, line: u64) -> PairResult<NaiveDate> {
    parse_date(value).ok_or_else(|| PairError::MalformedDate {
        line,
        column: column.to_string(),
        value: value.to_string(),
    })
}
