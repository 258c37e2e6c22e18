use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CookieError>;

#[derive(Debug, Error)]
pub enum CookieError {
    // Arguments
    #[error("{path} is not a proper csv file name.")]
    InvalidFileName { path: PathBuf },

    #[error("{value} has to be a valid date in the format YYYY-MM-DD.")]
    MalformedDate { value: String },

    #[error("{date} has to be a date up to today ({today}).")]
    FutureDate { date: NaiveDate, today: NaiveDate },

    // Lookup
    #[error("The given date {date} does not exist in the cookie log file.")]
    DateNotFound { date: NaiveDate },

    // Input
    #[error("failed to read cookie log {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// Coarse classification of a [`CookieError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Io,
    MalformedRecord,
}

impl CookieError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFileName { .. } | Self::MalformedDate { .. } | Self::FutureDate { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::DateNotFound { .. } => ErrorKind::NotFound,
            Self::Io { .. } => ErrorKind::Io,
            Self::MalformedRecord { .. } => ErrorKind::MalformedRecord,
        }
    }
}
