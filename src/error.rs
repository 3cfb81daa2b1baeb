//! Error types for the pair-finding pipeline

use thiserror::Error;

/// Result type for pipeline operations
pub type PairResult<T> = Result<T, PairError>;

/// Errors raised while reading, normalizing or evaluating assignment data
#[derive(Error, Debug)]
pub enum PairError {
    /// A data row does not have as many columns as the header
    #[error("line {line}: expected {expected} columns but found {found}")]
    SchemaMismatch {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A date field could not be parsed
    #[error("line {line}: cannot parse {column} value `{value}` as a date")]
    MalformedDate {
        line: u64,
        column: String,
        value: String,
    },

    /// A required column is absent from the header
    #[error("missing required column `{0}`")]
    MissingColumn(String),

    /// No two employees ever overlapped on a project
    #[error("no pair of employees has worked together")]
    NoPairFound,

    /// The CSV reader failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
