//! Trait surfaces that describe how records expose their fields to the sort engine.

/// The `Record` trait
pub mod record;
/// Name to position to value lookup
pub mod schema;
/// Schemas of runtime-typed lists
pub mod shape;
/// Accessor tables for typed records
pub mod table;

/// Frequently used surfaces for code that declares sortable records.
pub mod prelude {
    pub use super::record::Record;
    pub use super::schema::Schema;
    pub use super::shape::RecordShape;
    pub use super::table::{Extractor, FieldAccessor, FieldTable};
    pub use fieldsort_model::{Comparable, FieldValue, ValueKind};
}
