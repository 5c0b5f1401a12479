//! Error types

mod api;
mod validation;

pub use api::*;
pub use validation::*;

/// Top-level error type for widget operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (HTTP error, network error, bad response body).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// One or more form fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record field was missing or had an unexpected type.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Failed to serialize or deserialize a JSON payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The table configuration is unusable (e.g. a computed column whose
    /// input spec has no resolvable field name).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The configured mount target does not exist in the embedder's document.
    #[error("Mount target '{0}' not found")]
    ParentNotFound(String),

    /// A second edit was requested while another row's edit session is open.
    #[error("Row '{0}' is already being edited")]
    EditInProgress(String),

    /// A save or cancel referenced a row that has no open edit session.
    #[error("Row '{0}' is not being edited")]
    NotEditing(String),

    /// The command referenced a record key that is not in the loaded table.
    #[error("No record with key '{0}'")]
    UnknownKey(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
