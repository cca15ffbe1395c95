use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run before any output is written.
///
/// Per-transfer rejections are not errors, see [`crate::report::TransferOutcome`].
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Failed to access `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

impl LedgerError {
    pub(crate) fn missing_field(line: u64, field: &str) -> Self {
        Self::MalformedRecord {
            line,
            reason: format!("missing field `{field}`"),
        }
    }

    pub(crate) fn invalid_number(line: u64, field: &str, value: &str) -> Self {
        Self::MalformedRecord {
            line,
            reason: format!("field `{field}` is not a valid number: `{value}`"),
        }
    }

    /// Keeps I/O failures apart from rows that could not be decoded.
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        if err.is_io_error() {
            return Self::Csv(err);
        }

        match err.position() {
            Some(pos) => Self::MalformedRecord {
                line: pos.line(),
                reason: err.to_string(),
            },
            None => Self::Csv(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
