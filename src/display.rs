use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pairing::{DisplayRow, DISPLAY_HEADERS};

/// Outcome of processing one input, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Nothing was provided
    Absent,
    /// Input was rejected
    Invalid,
    /// Input was fine but no pair ever worked together
    Empty,
    Found,
}

impl ReportStatus {
    pub fn for_rows(rows: &[DisplayRow]) -> Self {
        if rows.is_empty() {
            ReportStatus::Empty
        } else {
            ReportStatus::Found
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportStatus::Absent => "Please upload and import a CSV file with employee data",
            ReportStatus::Invalid => "Please upload a valid CSV file",
            ReportStatus::Empty => "No pairs of employees found who have worked together",
            ReportStatus::Found => "Pair of employees who have worked together",
        }
    }
}

/// Lays the report out as aligned text lines, header first
pub fn format_table(rows: &[DisplayRow]) -> Vec<String> {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.employee_a.clone(),
                row.employee_b.clone(),
                row.project_id.clone(),
                row.days_worked.to_string(),
            ]
        })
        .collect();

    let mut widths = DISPLAY_HEADERS.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |line: [&str; 4]| -> String {
        line.iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(DISPLAY_HEADERS)];
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    for line in &cells {
        lines.push(render([line[0].as_str(), line[1].as_str(), line[2].as_str(), line[3].as_str()]));
    }
    lines
}

/// Prints the report with its status title
pub fn print_report(rows: &[DisplayRow]) {
    let status = ReportStatus::for_rows(rows);
    println!("\n=== {} ===", status.title());
    if status == ReportStatus::Empty {
        return;
    }

    let total: i64 = rows.iter().map(|r| r.days_worked).sum();
    println!("Total days worked together: {}\n", total);
    for line in format_table(rows) {
        println!("  {}", line);
    }
}

/// Writes the report to a text file in the same layout as the console
pub fn write_report_to_file<P: AsRef<Path>>(rows: &[DisplayRow], filename: P) -> Result<(), std::io::Error> {
    let mut file = File::create(filename)?;

    writeln!(file, "** {} **", ReportStatus::for_rows(rows).title())?;
    if rows.is_empty() {
        return Ok(());
    }
    for line in format_table(rows) {
        writeln!(file, "{}", line)?;
    }

    Ok(())
}
