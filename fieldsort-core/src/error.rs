use thiserror::Error;

pub use fieldsort_model::ContractViolation;

/// Recoverable sort failures. The collection is left untouched whenever one
/// of these is returned.
#[derive(Error, Debug)]
pub enum SortError {
    /// No field with this name on the record type
    #[error("Field not found: no field named {field} in {record_type}")]
    FieldNotFound { field: String, record_type: String },

    /// Field position past the last declared field
    #[error(
        "Field position {position} out of range: {record_type} has {field_count} fields"
    )]
    PositionOutOfRange {
        position: usize,
        record_type: String,
        field_count: usize,
    },

    /// Configuration could not be parsed
    #[error("Invalid sort configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for sort operations
pub type Result<T> = std::result::Result<T, SortError>;
