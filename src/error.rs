use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Csv2SqlError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("csv input is empty: no header row")]
    Empty,

    #[error("csv input has a header but no data rows")]
    NoRows,

    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    /// `row` counts data rows from 1 (the header is not a row), `line` is the
    /// physical line the record starts on.
    #[error("row {row} (line {line}) has {found} fields, expected {expected}")]
    RowLength {
        row: usize,
        line: u64,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Csv2SqlError>;
