use chrono::NaiveDate;
use sea_orm::ActiveEnum;

use crate::server::error::validation::ValidationErrors;

/// Date format accepted for `birthDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the trimmed text of a required field, recording an error when it is
/// absent or blank.
///
/// # Arguments
/// - `errors` - Collector the failure is recorded into
/// - `field` - JSON path of the field, used as the error key
/// - `value` - Raw value from the request body
///
/// # Returns
/// - `Some(String)` - Non-empty value
/// - `None` - Field missing or blank, error recorded
pub fn require_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.add(field, format!("{} is required", field));
            None
        }
    }
}

/// Parses an optional enum field by its stored name.
///
/// Absent values are fine; present values outside the enumeration record an
/// error listing the accepted names.
pub fn parse_variant<T>(errors: &mut ValidationErrors, field: &str, value: Option<&str>) -> Option<T>
where
    T: ActiveEnum<Value = String>,
{
    let value = value?;
    match T::try_from_value(&value.to_string()) {
        Ok(v) => Some(v),
        Err(_) => {
            errors.add(
                field,
                format!(
                    "{} must be one of the following: {}",
                    field,
                    T::values().join(", ")
                ),
            );
            None
        }
    }
}

/// Parses an optional `YYYY-MM-DD` date field.
pub fn parse_date(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
) -> Option<NaiveDate> {
    let value = value?;
    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, format!("{} must be a date in YYYY-MM-DD format", field));
            None
        }
    }
}

/// Records an error when a present number is below `min`.
pub fn check_min(errors: &mut ValidationErrors, field: &str, value: Option<f64>, min: f64, unit: &str) {
    if let Some(v) = value {
        if !v.is_finite() || v < min {
            errors.add(field, format!("{} must be at least {} {}", field, min, unit));
        }
    }
}
