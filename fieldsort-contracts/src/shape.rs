//! Schemas derived from runtime-typed lists.

use fieldsort_model::{ContractViolation, DynRecord, FieldValue, Value};

use crate::schema::Schema;

/// Field layout shared by every record of a dynamic list.
///
/// Derived from the first record; [`RecordShape::from_list`] checks that the
/// rest of the list agrees with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShape {
    type_name: Option<String>,
    field_names: Vec<String>,
}

impl RecordShape {
    /// Shape of a single record.
    pub fn of(record: &DynRecord) -> Self {
        Self {
            type_name: Some(record.type_name().to_string()),
            field_names: record.field_names().map(str::to_string).collect(),
        }
    }

    /// Shape of a list with no elements, and so no element type.
    pub fn unbound() -> Self {
        Self {
            type_name: None,
            field_names: Vec::new(),
        }
    }

    /// Validates that `value` is a uniform list of records and returns their shape.
    ///
    /// Aborts through [`ContractViolation::raise`] when `value` is not a list,
    /// when an element is not a record, or when records differ in type.
    #[track_caller]
    pub fn from_list(value: &Value) -> Self {
        let Some(items) = value.as_list() else {
            ContractViolation::NotAList {
                found: value.kind_name(),
            }
            .raise();
        };
        Self::from_records(items)
    }

    /// Validates that every element of `items` is a record of one type and
    /// returns their shape.
    ///
    /// Aborts through [`ContractViolation::raise`] when an element is not a
    /// record, or when records differ in type.
    #[track_caller]
    pub fn from_records(items: &[Value]) -> Self {
        let mut records = items.iter().enumerate().map(|(index, item)| match item {
            Value::Record(record) => (index, record),
            other => ContractViolation::NotARecord {
                index,
                found: other.kind_name(),
            }
            .raise(),
        });

        let Some((_, first)) = records.next() else {
            return Self::unbound();
        };

        for (index, record) in records {
            if !first.has_same_shape(record) {
                ContractViolation::MixedRecordTypes {
                    index,
                    expected: first.shape_signature(),
                    found: record.shape_signature(),
                }
                .raise();
            }
        }

        Self::of(first)
    }

    /// Field names in position order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.field_names.iter().map(String::as_str)
    }
}

impl Schema<Value> for RecordShape {
    fn type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or("<empty list>")
    }

    fn field_count(&self) -> usize {
        self.field_names.len()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|field| field == name)
    }

    fn field_name(&self, position: usize) -> Option<&str> {
        self.field_names.get(position).map(String::as_str)
    }

    fn value_at<'r>(&self, record: &'r Value, position: usize) -> Option<FieldValue<'r>> {
        record
            .as_record()
            .and_then(|record| record.field_at(position))
            .map(Value::field_value)
    }

    fn is_bound(&self) -> bool {
        self.type_name.is_some()
    }
}
