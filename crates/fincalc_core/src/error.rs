use std::fmt;

use thiserror::Error;

/// A single field-level input failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field was absent from the raw input
    #[error("field `{field}` is required")]
    MissingField { field: &'static str },

    /// Value was not a usable number (unparseable, NaN, or infinite)
    #[error("field `{field}` is not a number")]
    NotANumber { field: &'static str },

    /// Value is numeric but outside the field's domain
    #[error("field `{field}` {message}")]
    OutOfDomain {
        field: &'static str,
        message: &'static str,
    },

    /// A formula guard refused a mathematically undefined computation
    #[error("{message}")]
    DegenerateComputation { message: &'static str },
}

impl ValidationError {
    /// The offending field, when the failure is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::NotANumber { field }
            | ValidationError::OutOfDomain { field, .. } => Some(*field),
            ValidationError::DegenerateComputation { .. } => None,
        }
    }
}

/// Every failing field from one request, in check order.
///
/// Calculators validate the whole request before any arithmetic runs, so a
/// caller sees all problems at once instead of fixing them one at a time.
/// Holds at most one failure per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        ValidationErrors(vec![err])
    }
}

pub type Result<T> = std::result::Result<T, ValidationErrors>;
