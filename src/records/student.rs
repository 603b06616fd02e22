//! # Student Record Types
//!
//! `Student` is the stored entity. `StudentInput` is what arrives in a create
//! or update body: every field is kept as a raw JSON value so that missing,
//! `null`, empty and zero values can all be told apart and rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{RecordError, RecordResult};

/// Youngest accepted age when constraints are enforced
pub const AGE_MIN: i64 = 16;

/// Oldest accepted age when constraints are enforced
pub const AGE_MAX: i64 = 30;

/// A stored student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub age: i64,
    pub grade: String,
    pub email: String,
}

impl Student {
    /// Build a record from validated fields
    pub fn from_fields(id: u64, fields: StudentFields) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            grade: fields.grade,
            email: fields.email,
        }
    }

    /// The editable fields of this record
    pub fn fields(&self) -> StudentFields {
        StudentFields {
            name: self.name.clone(),
            age: self.age,
            grade: self.grade.clone(),
            email: self.email.clone(),
        }
    }
}

/// Typed record fields, without the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub age: i64,
    pub grade: String,
    pub email: String,
}

impl StudentFields {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        grade: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            grade: grade.into(),
            email: email.into(),
        }
    }

    /// Check the age range and email shape, reporting the first failed rule.
    pub fn check_constraints(&self) -> Result<(), ConstraintViolation> {
        if self.age < AGE_MIN || self.age > AGE_MAX {
            return Err(ConstraintViolation {
                field: "age",
                message: "Age must be between 16 and 30",
            });
        }
        if !self.email.contains('@') {
            return Err(ConstraintViolation {
                field: "email",
                message: "Please enter a valid email address",
            });
        }
        Ok(())
    }
}

/// A failed age/email rule with its user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl From<ConstraintViolation> for RecordError {
    fn from(violation: ConstraintViolation) -> Self {
        RecordError::invalid(violation.field, violation.message)
    }
}

/// How much the store checks beyond field presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Presence only: any truthy value is accepted
    #[default]
    Presence,
    /// Presence plus the age range and email shape rules
    Strict,
}

/// Raw create/update body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub grade: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl From<StudentFields> for StudentInput {
    fn from(fields: StudentFields) -> Self {
        Self {
            name: Some(Value::String(fields.name)),
            age: Some(Value::from(fields.age)),
            grade: Some(Value::String(fields.grade)),
            email: Some(Value::String(fields.email)),
        }
    }
}

impl StudentInput {
    /// Validate and coerce the raw body into typed fields.
    ///
    /// All four fields must be present and truthy. `age` is coerced to an
    /// integer by taking its leading integer part.
    pub fn validate(&self, validation: Validation) -> RecordResult<StudentFields> {
        let truthy = |field: &Option<Value>| field.as_ref().filter(|v| is_truthy(v)).cloned();
        let (Some(name), Some(age), Some(grade), Some(email)) = (
            truthy(&self.name),
            truthy(&self.age),
            truthy(&self.grade),
            truthy(&self.email),
        ) else {
            return Err(RecordError::MissingFields);
        };

        let fields = StudentFields {
            name: text_field("name", &name)?,
            age: coerce_age(&age)?,
            grade: text_field("grade", &grade)?,
            email: text_field("email", &email)?,
        };

        if validation == Validation::Strict {
            fields.check_constraints()?;
        }

        Ok(fields)
    }
}

/// JSON truthiness: null, false, 0, NaN and "" are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_field(field: &'static str, value: &Value) -> RecordResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(RecordError::invalid(
            field,
            format!("Field '{}' must be text", field),
        )),
    }
}

fn coerce_age(value: &Value) -> RecordResult<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    };

    parsed.ok_or_else(|| RecordError::invalid("age", "Age must be an integer"))
}

/// Parse the leading integer of a string: optional whitespace, an optional
/// sign, then at least one decimal digit. Trailing text is ignored and
/// values beyond the `i64` range saturate.
pub(crate) fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let digits = &rest[..digits_end];
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    match signed.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
