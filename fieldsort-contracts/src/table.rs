//! Caller-supplied field accessor tables.
//!
//! A [`FieldTable`] maps field names to extraction functions for one record
//! type. It stands in for runtime reflection: the engine resolves a name to a
//! position with a plain lookup and calls the extractor for every comparison.

use std::borrow::Cow;
use std::fmt;

use fieldsort_model::FieldValue;

use crate::schema::Schema;

/// Extracts one field from a record.
pub type Extractor<R> = for<'r> fn(&'r R) -> FieldValue<'r>;

/// A named field and its extractor.
pub struct FieldAccessor<R> {
    name: Cow<'static, str>,
    extract: Extractor<R>,
}

impl<R> FieldAccessor<R> {
    /// Pairs a field name with its extractor.
    pub fn new(name: impl Into<Cow<'static, str>>, extract: Extractor<R>) -> Self {
        Self {
            name: name.into(),
            extract,
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the extractor on `record`.
    pub fn extract<'r>(&self, record: &'r R) -> FieldValue<'r> {
        (self.extract)(record)
    }
}

impl<R> Clone for FieldAccessor<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            extract: self.extract,
        }
    }
}

impl<R> fmt::Debug for FieldAccessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered set of field accessors for record type `R`.
///
/// Field positions follow declaration order.
///
/// ```
/// use fieldsort_contracts::table::FieldTable;
/// use fieldsort_model::FieldValue;
///
/// struct Employee {
///     id: i64,
///     last_name: String,
/// }
///
/// let table = FieldTable::<Employee>::new("Employee")
///     .field("ID", |e| e.id.into())
///     .field("LastName", |e| FieldValue::text(&e.last_name));
/// assert_eq!(table.len(), 2);
/// ```
pub struct FieldTable<R> {
    type_name: Cow<'static, str>,
    fields: Vec<FieldAccessor<R>>,
}

impl<R> FieldTable<R> {
    /// Empty table for the record type named `type_name`.
    pub fn new(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Declares the next field.
    ///
    /// Names must be unique within a table; on a duplicate the first
    /// declaration wins lookups.
    pub fn field(mut self, name: impl Into<Cow<'static, str>>, extract: Extractor<R>) -> Self {
        let accessor = FieldAccessor::new(name, extract);
        debug_assert!(
            self.position_of(accessor.name()).is_none(),
            "duplicate field {} in {}",
            accessor.name(),
            self.type_name
        );
        self.fields.push(accessor);
        self
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldAccessor::name)
    }

    /// Accessor at `position`, if declared.
    pub fn accessor(&self, position: usize) -> Option<&FieldAccessor<R>> {
        self.fields.get(position)
    }
}

impl<R> Clone for FieldTable<R> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            fields: self.fields.clone(),
        }
    }
}

impl<R> fmt::Debug for FieldTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTable")
            .field("type_name", &self.type_name)
            .field("fields", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl<R> Schema<R> for FieldTable<R> {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    fn field_name(&self, position: usize) -> Option<&str> {
        self.fields.get(position).map(FieldAccessor::name)
    }

    fn value_at<'r>(&self, record: &'r R, position: usize) -> Option<FieldValue<'r>> {
        self.fields.get(position).map(|field| field.extract(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsort_model::ValueKind;

    struct Track {
        title: String,
        seconds: u32,
        explicit: bool,
    }

    fn table() -> FieldTable<Track> {
        FieldTable::<Track>::new("Track")
            .field("Title", |t| FieldValue::text(&t.title))
            .field("Seconds", |t| t.seconds.into())
            .field("Explicit", |t| t.explicit.into())
    }

    #[test]
    fn positions_follow_declaration_order() {
        let table = table();
        assert_eq!(table.position_of("Title"), Some(0));
        assert_eq!(table.position_of("Explicit"), Some(2));
        assert_eq!(table.field_name(1), Some("Seconds"));
        assert_eq!(table.field_count(), 3);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = table();
        assert_eq!(table.position_of("title"), None);
        assert_eq!(table.position_of("Missing"), None);
    }

    #[test]
    fn value_at_runs_the_extractor() {
        let track = Track {
            title: "Intro".into(),
            seconds: 95,
            explicit: false,
        };
        let table = table();

        let kinds: Vec<_> = (0..table.len())
            .filter_map(|pos| table.value_at(&track, pos))
            .map(|value| value.kind())
            .collect();
        assert_eq!(kinds, vec![ValueKind::Text, ValueKind::Integer, ValueKind::Bool]);
        assert!(table.value_at(&track, 3).is_none());
    }

    #[test]
    fn debug_lists_field_names() {
        let rendered = format!("{:?}", table());
        assert!(rendered.contains("\"Title\""));
        assert!(rendered.contains("Track"));
    }
}
