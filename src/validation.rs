//! Input validation for the demo's availability search form.
//!
//! The facade itself never validates input contents; these checks run in the
//! demo application after the confirmation dialog returns its tuple.

use chrono::NaiveDate;

/// Validates a single date field in `YYYY-MM-DD` form.
pub fn validate_date(field: &str, value: &str) -> Result<NaiveDate, String> {
    if value.trim().is_empty() {
        return Err(format!("{} date cannot be empty", field));
    }

    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{} date must be in YYYY-MM-DD form", field))
}

/// Validates a `[start, end]` tuple from the confirmation dialog.
pub fn validate_date_range(values: &[String; 2]) -> Result<(NaiveDate, NaiveDate), String> {
    let start = validate_date("Start", &values[0])?;
    let end = validate_date("End", &values[1])?;

    if end < start {
        return Err("End date cannot be before start date".to_string());
    }

    Ok((start, end))
}
