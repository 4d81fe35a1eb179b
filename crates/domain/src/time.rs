//! Calendar date helpers.

use chrono::{NaiveDate, Utc};

use crate::error::ValidationError;

/// Calendar date without time of day, used for cleaning and maintenance dates.
pub type Date = NaiveDate;

/// Return the current UTC calendar date.
#[must_use]
pub fn today() -> Date {
    Utc::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when `value` is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(value.to_owned()))
}
