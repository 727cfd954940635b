//! Declarative request body validation.
//!
//! A [`BodySchema`] lists the expected fields of a JSON body. Each field
//! names a [`FieldType`] whose check is one of the validators in
//! [`rules`]. [`BodySchema::validate`] reports every failing field, not
//! just the first.

pub mod rules;
pub mod schema;

pub use rules::{
    ArrayRules, DateRules, NumberRules, StringRules, validate_array, validate_boolean,
    validate_date, validate_email, validate_number, validate_object, validate_string,
};
pub use schema::{BodySchema, FieldError, FieldRule, FieldType};
