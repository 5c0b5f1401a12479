//! Validation and field access errors

/// Empty or malformed form fields detected before a submit.
///
/// The submit never reaches the transport when this error is produced; the
/// offending fields are border-marked in the next render instead.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Required fields not filled in: {}", .fields.join(", "))]
pub struct ValidationError {
    /// Names of the fields that failed validation, in form order.
    pub fields: Vec<String>,
}

impl ValidationError {
    /// Creates a new validation error for the given field names.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

/// Error type for field access on a [`Record`](crate::model::Record).
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// The requested field does not exist in the record.
    #[error("Field '{field}' not found in record")]
    Missing {
        /// The missing field name.
        field: String,
    },

    /// The field exists but holds a different type than requested.
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The field name.
        field: String,
        /// The requested type.
        expected: &'static str,
        /// The type actually stored.
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}
