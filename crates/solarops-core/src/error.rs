//! Error types for SolarOps

use thiserror::Error;

/// Main error type for SolarOps operations
///
/// Validation failures are not errors: they are reported as
/// [`ValidationErrors`](crate::validation::ValidationErrors) data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Path does not name a registered field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Path names a repeat group that the schema does not declare
    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    /// Row index past the end of a repeat group
    #[error("Row {index} out of range for group '{group}' ({len} rows)")]
    RowOutOfRange {
        group: String,
        index: usize,
        len: usize,
    },

    /// Field descriptor breaks its invariants (e.g. select without options)
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// Two fields in one schema share a name
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// Form slug not present in the catalog
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    /// Subscriber installation failed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using OpsError
pub type OpsResult<T> = Result<T, OpsError>;
