use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::PairResult;
use crate::pairing::DisplayRow;

/// Writes the report as CSV, header named after the report columns
pub fn export_report_to_csv(rows: &[DisplayRow], csv_path: &Path) -> PairResult<()> {
    let file = std::fs::File::create(csv_path)?;
    write_report_csv(rows, file)
}

/// Writes the report as CSV to any writer
pub fn write_report_csv<W: Write>(rows: &[DisplayRow], writer: W) -> PairResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);

    if rows.is_empty() {
        wtr.write_record(crate::pairing::DISPLAY_HEADERS)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_report_column_names() {
        let rows = vec![DisplayRow {
            employee_a: "143".to_string(),
            employee_b: "218".to_string(),
            project_id: "10".to_string(),
            days_worked: 12,
        }];
        let mut buffer = Vec::new();
        write_report_csv(&rows, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "Employee ID #1,Employee ID #2,Project ID,Days worked\n143,218,10,12\n");
    }

    #[test]
    fn empty_report_still_has_header() {
        let mut buffer = Vec::new();
        write_report_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Employee ID #1,Employee ID #2,Project ID,Days worked\n");
    }

    #[test]
    fn exports_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        export_report_to_csv(&[], &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("Employee ID #1"));
    }
}
