//! Field value model shared across fieldsort crates.
//!
//! Records expose their sortable fields as [`FieldValue`]s. The variant of a
//! value selects the ordering rule the engine applies to that field, so the
//! set of variants is closed.

/// Values that order themselves
pub mod comparable;
/// Runtime-typed values and records
pub mod dynamic;
/// Contract violations
pub mod error;
/// Tagged field values
pub mod value;

// Intentionally curated re-exports for downstream consumers.
pub use comparable::Comparable;
pub use dynamic::{DynRecord, Value};
pub use error::ContractViolation;
pub use value::{FieldValue, ValueKind};
