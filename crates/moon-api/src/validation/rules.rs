//! Per-type value validators.
//!
//! Each validator takes the field name (for messages), the JSON value and
//! its options, and returns `Err` with a human-readable description when
//! the value is rejected. A `message` option replaces the generated
//! description.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use validator::ValidateEmail;

use super::schema::BodySchema;

/// Outcome of a single validator.
pub type Verdict = Result<(), String>;

/// Options for [`validate_string`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringRules {
    /// Minimum length in characters, after trimming.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Allowed values.
    pub one_of: Option<Vec<String>>,
    /// Custom failure message.
    pub message: Option<String>,
}

impl StringRules {
    /// Rejects empty or whitespace-only strings.
    pub fn non_empty() -> Self {
        Self {
            min_length: Some(1),
            ..Self::default()
        }
    }

    /// Restricts the value to a fixed set.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            one_of: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

/// Options for [`validate_number`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberRules {
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
    /// Require a whole number.
    pub integer: bool,
    /// Custom failure message.
    pub message: Option<String>,
}

/// Options for [`validate_array`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayRules {
    /// Minimum number of items.
    pub min_items: Option<usize>,
    /// Maximum number of items.
    pub max_items: Option<usize>,
    /// Every item must be one of these values.
    pub one_of: Option<Vec<Value>>,
    /// Custom failure message.
    pub message: Option<String>,
}

/// Options for [`validate_date`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRules {
    /// Custom failure message.
    pub message: Option<String>,
}

fn fail(message: &Option<String>, generated: String) -> Verdict {
    Err(message.clone().unwrap_or(generated))
}

/// Accepts a string satisfying `rules`.
pub fn validate_string(field: &str, value: &Value, rules: &StringRules) -> Verdict {
    let Some(s) = value.as_str() else {
        return fail(&rules.message, format!("{field} must be a string"));
    };

    let len = s.trim().chars().count();
    if let Some(min) = rules.min_length {
        if len < min {
            return fail(
                &rules.message,
                format!("{field} must be at least {min} characters"),
            );
        }
    }
    if let Some(max) = rules.max_length {
        if s.chars().count() > max {
            return fail(
                &rules.message,
                format!("{field} must be at most {max} characters"),
            );
        }
    }
    if let Some(allowed) = &rules.one_of {
        if !allowed.iter().any(|a| a == s) {
            return fail(
                &rules.message,
                format!("{field} must be one of: {}", allowed.join(", ")),
            );
        }
    }
    Ok(())
}

/// Accepts a JSON number satisfying `rules`.
pub fn validate_number(field: &str, value: &Value, rules: &NumberRules) -> Verdict {
    let Some(n) = value.as_f64() else {
        return fail(&rules.message, format!("{field} must be a number"));
    };

    if rules.integer && n.fract() != 0.0 {
        return fail(&rules.message, format!("{field} must be an integer"));
    }
    if let Some(min) = rules.min {
        if n < min {
            return fail(&rules.message, format!("{field} must be at least {min}"));
        }
    }
    if let Some(max) = rules.max {
        if n > max {
            return fail(&rules.message, format!("{field} must be at most {max}"));
        }
    }
    Ok(())
}

/// Accepts `true` or `false`.
pub fn validate_boolean(field: &str, value: &Value, message: Option<&str>) -> Verdict {
    if value.is_boolean() {
        Ok(())
    } else {
        Err(message.map_or_else(|| format!("{field} must be a boolean"), str::to_string))
    }
}

/// Accepts an array satisfying `rules`.
pub fn validate_array(field: &str, value: &Value, rules: &ArrayRules) -> Verdict {
    let Some(items) = value.as_array() else {
        return fail(&rules.message, format!("{field} must be an array"));
    };

    if let Some(min) = rules.min_items {
        if items.len() < min {
            return fail(
                &rules.message,
                format!("{field} must contain at least {min} items"),
            );
        }
    }
    if let Some(max) = rules.max_items {
        if items.len() > max {
            return fail(
                &rules.message,
                format!("{field} must contain at most {max} items"),
            );
        }
    }
    if let Some(allowed) = &rules.one_of {
        if let Some(bad) = items.iter().find(|item| !allowed.contains(item)) {
            return fail(&rules.message, format!("{field} contains invalid value {bad}"));
        }
    }
    Ok(())
}

/// Accepts a syntactically valid email address.
pub fn validate_email(field: &str, value: &Value, message: Option<&str>) -> Verdict {
    match value.as_str() {
        Some(s) if s.validate_email() => Ok(()),
        _ => Err(message.map_or_else(
            || format!("{field} must be a valid email address"),
            str::to_string,
        )),
    }
}

/// Accepts an RFC 3339 timestamp or a `YYYY-MM-DD` calendar date.
pub fn validate_date(field: &str, value: &Value, rules: &DateRules) -> Verdict {
    let parsed = value.as_str().is_some_and(|s| {
        DateTime::parse_from_rfc3339(s).is_ok() || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
    });

    if parsed {
        Ok(())
    } else {
        fail(&rules.message, format!("{field} must be a valid date"))
    }
}

/// Accepts an object whose fields satisfy `schema`.
///
/// Nested failures are joined into one description.
pub fn validate_object(
    field: &str,
    value: &Value,
    schema: &BodySchema,
    message: Option<&str>,
) -> Verdict {
    if !value.is_object() {
        return Err(message.map_or_else(|| format!("{field} must be an object"), str::to_string));
    }

    schema.validate(value).map_err(|errors| {
        message.map_or_else(
            || {
                errors
                    .iter()
                    .map(|e| format!("{field}.{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join("; ")
            },
            str::to_string,
        )
    })
}
