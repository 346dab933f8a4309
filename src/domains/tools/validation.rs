//! Parameter validation shared by the tool definitions.
//!
//! Deserialization already enforces types; these checks cover the value
//! constraints advertised in each tool's input schema. All of them run before
//! any network call.

use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;

use super::ToolError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Value constraints of a tool's parameters.
pub trait Validate {
    fn validate(&self) -> Result<(), ToolError>;
}

/// Check an email address shape.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Check an ISO 8601 UTC datetime such as `2025-01-31T09:30:00Z`.
pub fn is_iso_datetime(value: &str) -> bool {
    value.ends_with('Z') && DateTime::parse_from_rfc3339(value).is_ok()
}

/// Every element of an optional list must be an email address.
pub fn check_emails(field: &str, values: Option<&[String]>) -> Result<(), ToolError> {
    match values.unwrap_or_default().iter().find(|v| !is_email(v)) {
        Some(bad) => Err(ToolError::invalid_arguments(format!(
            "{field}: '{bad}' is not a valid email"
        ))),
        None => Ok(()),
    }
}

/// An optional timestamp must be an ISO 8601 UTC datetime.
pub fn check_datetime(field: &str, value: Option<&str>) -> Result<(), ToolError> {
    match value {
        Some(v) if !is_iso_datetime(v) => Err(ToolError::invalid_arguments(format!(
            "{field}: '{v}' is not an ISO 8601 datetime"
        ))),
        _ => Ok(()),
    }
}

/// An integer must fall within `min..=max`.
pub fn check_range(field: &str, value: Option<u64>, min: u64, max: u64) -> Result<(), ToolError> {
    match value {
        Some(v) if v < min || v > max => Err(ToolError::invalid_arguments(format!(
            "{field}: {v} is outside {min}..={max}"
        ))),
        _ => Ok(()),
    }
}

/// A required string must not be empty.
pub fn check_non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "{field}: must not be empty"
        )));
    }
    Ok(())
}
