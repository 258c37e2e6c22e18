use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::{CookieError, Result};

pub const LOG_EXTENSION: &str = "csv";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn validate_file_name(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(LOG_EXTENSION) => Ok(path.to_path_buf()),
        _ => Err(CookieError::InvalidFileName {
            path: path.to_path_buf(),
        }),
    }
}

/// Parses a strict `YYYY-MM-DD` date that is not later than `today`.
///
/// chrono accepts single digit months and days as well as signed years, so the
/// shape is checked before handing the value over for calendar validation.
pub fn validate_date(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    let malformed = || CookieError::MalformedDate {
        value: value.to_string(),
    };

    if !has_date_shape(value) {
        return Err(malformed());
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed())?;

    if date > today {
        return Err(CookieError::FutureDate { date, today });
    }
    Ok(date)
}

pub fn validate_date_now(value: &str) -> Result<NaiveDate> {
    validate_date(value, Local::now().date_naive())
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
