use fieldsort_model::FieldValue;

/// Name-to-position resolution and value extraction for one record type.
///
/// Positions are dense, `0..field_count()`, in declaration order.
pub trait Schema<R: ?Sized> {
    /// Record type name, used in diagnostics.
    fn type_name(&self) -> &str;

    /// Number of fields the record type declares.
    fn field_count(&self) -> usize;

    /// Position of the field called `name`. Lookup is case-sensitive.
    fn position_of(&self, name: &str) -> Option<usize>;

    /// Name of the field at `position`.
    fn field_name(&self, position: usize) -> Option<&str>;

    /// Value of the field at `position` in `record`.
    fn value_at<'r>(&self, record: &'r R, position: usize) -> Option<FieldValue<'r>>;

    /// Whether the schema describes an actual record type.
    ///
    /// A schema derived from an empty dynamic list has no element type, so
    /// nothing can be resolved against it.
    fn is_bound(&self) -> bool {
        true
    }
}

impl<R: ?Sized, S: Schema<R> + ?Sized> Schema<R> for &S {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        (**self).position_of(name)
    }

    fn field_name(&self, position: usize) -> Option<&str> {
        (**self).field_name(position)
    }

    fn value_at<'r>(&self, record: &'r R, position: usize) -> Option<FieldValue<'r>> {
        (**self).value_at(record, position)
    }

    fn is_bound(&self) -> bool {
        (**self).is_bound()
    }
}
