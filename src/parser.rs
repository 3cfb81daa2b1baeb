use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PairResult;

/// One data line of the input, fields kept as trimmed strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based line number in the source text
    pub line: u64,
    pub fields: Vec<String>,
}

/// Header plus data rows as read from a CSV source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a header by exact name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Reads assignment data from CSV text
///
/// Blank lines are skipped and every field is trimmed. Rows are read
/// flexibly: a row with the wrong number of columns is kept as-is so the
/// normalizer can report it with its line number.
pub fn read_table_from_str(text: &str) -> PairResult<RawTable> {
    if text.trim().is_empty() {
        return Ok(RawTable::default());
    }
    read_table(text.as_bytes())
}

/// Reads assignment data from a CSV file
pub fn read_table_from_path<P: AsRef<Path>>(csv_path: P) -> PairResult<RawTable> {
    let text = std::fs::read_to_string(csv_path.as_ref())?;
    debug!("Read {} bytes from {}", text.len(), csv_path.as_ref().display());
    read_table_from_str(&text)
}

fn read_table<R: Read>(source: R) -> PairResult<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            // Spreadsheet exports often prepend a byte order mark
            if i == 0 {
                h.trim_start_matches('\u{feff}').trim().to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(RawRow {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    debug!("Parsed {} columns and {} rows", headers.len(), rows.len());
    Ok(RawTable { headers, rows })
}
