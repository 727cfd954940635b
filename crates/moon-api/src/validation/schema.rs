//! Field rules and body schemas.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use moon_core::error::AppError;

use super::rules::{self, ArrayRules, DateRules, NumberRules, StringRules, Verdict};

/// The check applied to a field's value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String(StringRules),
    Number(NumberRules),
    Boolean,
    Array(ArrayRules),
    Email,
    Date(DateRules),
    Object(BodySchema),
}

/// One expected field of a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    /// Key in the enclosing object.
    pub name: String,
    /// Check applied when the field is present.
    pub field_type: FieldType,
    /// Whether a missing or `null` value is an error.
    pub required: bool,
    /// Replaces every failure message for this field.
    pub message: Option<String>,
}

impl FieldRule {
    /// A field that must be present.
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
            message: None,
        }
    }

    /// A field checked only when present.
    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            required: false,
            ..Self::required(name, field_type)
        }
    }

    /// Overrides the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn check(&self, value: &Value) -> Verdict {
        let name = self.name.as_str();
        let message = self.message.as_deref();
        match &self.field_type {
            FieldType::String(r) => rules::validate_string(name, value, r),
            FieldType::Number(r) => rules::validate_number(name, value, r),
            FieldType::Boolean => rules::validate_boolean(name, value, message),
            FieldType::Array(r) => rules::validate_array(name, value, r),
            FieldType::Email => rules::validate_email(name, value, message),
            FieldType::Date(r) => rules::validate_date(name, value, r),
            FieldType::Object(schema) => rules::validate_object(name, value, schema, message),
        }
        .map_err(|generated| self.message.clone().unwrap_or(generated))
    }
}

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path of the field.
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Expected shape of a JSON object body.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodySchema {
    fields: Vec<FieldRule>,
}

impl BodySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field rule.
    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// The declared rules, in declaration order.
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Checks `body`, collecting every failure in declaration order.
    ///
    /// Failures inside nested objects are reported with dotted paths
    /// (`address.city`), unless the object field has a custom message.
    pub fn validate(&self, body: &Value) -> Result<(), Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError::new("body", "body must be a JSON object")]);
        };

        let mut errors = Vec::new();
        self.collect(object, "", &mut errors);

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    fn collect(&self, object: &Map<String, Value>, prefix: &str, errors: &mut Vec<FieldError>) {
        for rule in &self.fields {
            let path = if prefix.is_empty() {
                rule.name.clone()
            } else {
                format!("{prefix}.{}", rule.name)
            };

            match (object.get(&rule.name), &rule.field_type) {
                (None | Some(Value::Null), _) => {
                    if rule.required {
                        let message = rule
                            .message
                            .clone()
                            .unwrap_or_else(|| format!("{} is required", rule.name));
                        errors.push(FieldError::new(path, message));
                    }
                }
                (Some(Value::Object(nested)), FieldType::Object(schema)) if rule.message.is_none() => {
                    schema.collect(nested, &path, errors);
                }
                (Some(value), _) => {
                    if let Err(message) = rule.check(value) {
                        errors.push(FieldError::new(path, message));
                    }
                }
            }
        }
    }
}

/// Converts field failures into the validation error returned to clients.
///
/// The body carries every failure under `details.errors`.
pub fn into_app_error(errors: Vec<FieldError>) -> AppError {
    AppError::validation_with_details("Invalid request body", json!({ "errors": errors }))
}
