//! Semantic checks applied by the user service after syntactic validation.

use chrono::{Datelike, NaiveDate};

use crate::errors::ServiceError;

/// Whole years elapsed from `birth_date` to `today`; zero for future dates.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    if birth_date > today {
        return 0;
    }
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

pub fn ensure_min_age(birth_date: NaiveDate, today: NaiveDate, min_age: u32) -> Result<(), ServiceError> {
    if age_on(birth_date, today) < min_age {
        return Err(ServiceError::ForbiddenAge);
    }
    Ok(())
}

/// `from` must not be chronologically after `to`.
pub fn ensure_range(from: NaiveDate, to: NaiveDate) -> Result<(), ServiceError> {
    if from > to {
        return Err(ServiceError::InvalidDateRange);
    }
    Ok(())
}
