//! Resolved field references.

use fieldsort_model::ValueKind;

/// A field name resolved to a position within one record type.
///
/// The kind is sampled from the first record of the collection at resolution
/// time and is `None` when the collection has no records to sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    name: String,
    position: usize,
    kind: Option<ValueKind>,
}

impl FieldRef {
    pub(crate) fn new(name: impl Into<String>, position: usize, kind: Option<ValueKind>) -> Self {
        Self {
            name: name.into(),
            position,
            kind,
        }
    }

    /// Field name as given by the caller.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field position in the schema.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Kind sampled from the first record, `None` for an empty collection.
    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }
}
