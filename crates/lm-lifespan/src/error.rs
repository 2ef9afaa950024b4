// error.rs — Error types for lifespan estimation.

use std::fmt;

use thiserror::Error;

use crate::units::Gender;

/// A required estimation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    Gender,
    Nationality,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Age => write!(f, "age"),
            Field::Gender => write!(f, "gender"),
            Field::Nationality => write!(f, "nationality"),
        }
    }
}

/// Errors that abort an estimate. The previous result is never touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifespanError {
    /// One or more inputs are absent, or the age has no leading integer.
    #[error("missing required field(s): {}", join_fields(.fields))]
    MissingField { fields: Vec<Field> },

    /// The nationality/gender pair is not in the table.
    #[error("no average lifespan recorded for {gender} in '{nationality}'")]
    UndefinedLookup { nationality: String, gender: Gender },
}

impl LifespanError {
    pub fn missing(fields: Vec<Field>) -> Self {
        LifespanError::MissingField { fields }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// An enumeration name that is not one of the accepted values.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_lists_every_field() {
        let err = LifespanError::missing(vec![Field::Age, Field::Nationality]);
        assert_eq!(err.to_string(), "missing required field(s): age, nationality");
    }

    #[test]
    fn undefined_lookup_names_the_pair() {
        let err = LifespanError::UndefinedLookup {
            nationality: "Atlantis".into(),
            gender: Gender::Other,
        };
        assert_eq!(
            err.to_string(),
            "no average lifespan recorded for other in 'Atlantis'"
        );
    }
}
