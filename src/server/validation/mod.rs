//! Request payload validation.
//!
//! Each request DTO declares a static table of [`FieldRule`]s through the
//! [`Validate`] trait. The table is checked against the raw JSON body before it
//! is deserialized, so shape problems are reported per field with a stable
//! error code instead of a single serde message. Validation never touches the
//! database.
//!
//! Update DTOs set [`Validate::PARTIAL`], which ignores `required` so that only
//! the fields present in the body are checked.

pub mod extract;
pub mod pattern;
pub mod rules;

use serde_json::{Map, Value};

use crate::server::error::validation::{FieldError, ValidationErrors, Violation};

pub use pattern::Pattern;

/// Kind of JSON value a field must hold, with its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String measured in characters, optionally constrained to a [`Pattern`].
    Text {
        min_len: usize,
        max_len: usize,
        pattern: Option<Pattern>,
    },
    /// Whole number within an inclusive range.
    Integer { min: i64, max: i64 },
    Boolean,
}

/// Validation rule for a single payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// JSON key as sent by clients (camelCase).
    pub field: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn text(
        field: &'static str,
        min_len: usize,
        max_len: usize,
        pattern: Option<Pattern>,
    ) -> Self {
        Self {
            field,
            kind: FieldKind::Text {
                min_len,
                max_len,
                pattern,
            },
            required: false,
        }
    }

    pub const fn integer(field: &'static str, min: i64, max: i64) -> Self {
        Self {
            field,
            kind: FieldKind::Integer { min, max },
            required: false,
        }
    }

    pub const fn boolean(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldKind::Boolean,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Checks a present, non-null value against this rule.
    fn check(&self, value: &Value) -> Option<Violation> {
        match self.kind {
            FieldKind::Text {
                min_len,
                max_len,
                pattern,
            } => {
                let Some(text) = value.as_str() else {
                    return Some(Violation::WrongType("string"));
                };

                let len = text.chars().count();
                if len < min_len || len > max_len {
                    return Some(Violation::Length {
                        min: min_len,
                        max: max_len,
                    });
                }

                match pattern {
                    Some(pattern) if !pattern.matches(text) => Some(Violation::Format(pattern)),
                    _ => None,
                }
            }
            FieldKind::Integer { min, max } => {
                let Some(number) = value.as_i64() else {
                    return Some(Violation::WrongType("integer"));
                };

                if number < min || number > max {
                    return Some(Violation::Range { min, max });
                }

                None
            }
            FieldKind::Boolean => {
                if value.is_boolean() {
                    None
                } else {
                    Some(Violation::WrongType("boolean"))
                }
            }
        }
    }
}

/// Implemented by request DTOs that are checked before deserialization.
pub trait Validate {
    /// Rule table applied to the incoming JSON object.
    const RULES: &'static [FieldRule];

    /// When true, `required` is ignored and only present fields are checked.
    const PARTIAL: bool = false;

    /// Validates the payload against [`Self::RULES`].
    fn validate(payload: &Value) -> Result<(), ValidationErrors> {
        validate_payload(payload, Self::RULES, Self::PARTIAL)
    }
}

/// Checks a JSON payload against a rule table, collecting every violation.
///
/// Fields absent from the payload (or explicitly `null`) pass unless the rule
/// is `required` and `partial` is false. Fields without a rule are ignored.
///
/// # Arguments
/// - `payload` - Raw request body
/// - `rules` - Field rules to apply
/// - `partial` - Whether this is a partial update
///
/// # Returns
/// - `Ok(())` - Every rule passed
/// - `Err(ValidationErrors)` - One entry per failing field, in rule order
pub fn validate_payload(
    payload: &Value,
    rules: &[FieldRule],
    partial: bool,
) -> Result<(), ValidationErrors> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationErrors::new(vec![FieldError::new(
            "body",
            Violation::NotAnObject,
        )]));
    };

    let errors: Vec<FieldError> = rules
        .iter()
        .filter_map(|rule| check_field(object, rule, partial))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}

fn check_field(object: &Map<String, Value>, rule: &FieldRule, partial: bool) -> Option<FieldError> {
    match object.get(rule.field) {
        None | Some(Value::Null) => {
            if rule.required && !partial {
                Some(FieldError::new(rule.field, Violation::Missing))
            } else {
                None
            }
        }
        Some(value) => rule
            .check(value)
            .map(|violation| FieldError::new(rule.field, violation)),
    }
}
