use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures common ledger failures.
///
/// Per-field date/amount parse failures during import are deliberately not
/// represented here: those degrade to unset fields and are reported through
/// [`crate::table::ImportSummary`] instead.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("import is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("no entry at position {0}")]
    PositionNotFound(usize),
    #[error("row {row}: unknown entry type `{found}`")]
    UnknownKind { row: usize, found: String },
    #[error("invalid date window: end {end} is before start {start}")]
    WindowOrder { start: NaiveDate, end: NaiveDate },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
