//! Field rules shared by the request DTOs.

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// `+` followed by 5 to 13 digits, nothing else.
pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[0-9]{5,13}$").unwrap_or_else(|e| panic!("phone pattern: {e}"))
});

/// Date strictly before today (UTC).
pub fn past_date(value: &NaiveDate) -> Result<(), ValidationError> {
    if *value < Utc::now().date_naive() {
        return Ok(());
    }
    let mut err = ValidationError::new("past");
    err.message = Some("must be a date in the past".into());
    Err(err)
}

/// Reject strings made only of whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.trim().is_empty() {
        return Ok(());
    }
    let mut err = ValidationError::new("not_blank");
    err.message = Some("must not be blank".into());
    Err(err)
}
