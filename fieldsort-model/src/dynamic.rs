//! Runtime-typed values.
//!
//! [`Value`] models data whose shape is only known at runtime, e.g. rows
//! decoded from JSON. A list of [`DynRecord`]s sharing one type name and one
//! field layout is a sortable collection.

use crate::value::FieldValue;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// Text
    Text(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Structured value with named fields
    Record(DynRecord),
}

impl Value {
    /// Kind name used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }

    /// Record view, if this is a record.
    pub fn as_record(&self) -> Option<&DynRecord> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable elements, if this is a list.
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// View of this value as a sortable field.
    ///
    /// Nested lists, records and nulls have no ordering rule.
    pub fn field_value(&self) -> FieldValue<'_> {
        match self {
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Int(i) => FieldValue::from(*i),
            Value::Float(x) => FieldValue::Float(*x),
            Value::Text(s) => FieldValue::text(s),
            Value::Null | Value::List(_) | Value::Record(_) => FieldValue::Opaque,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<DynRecord> for Value {
    fn from(value: DynRecord) -> Self {
        Value::Record(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

/// A record whose type name and fields are known only at runtime.
///
/// Field order is declaration order and doubles as the field position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynRecord {
    type_name: String,
    fields: Vec<(String, Value)>,
}

impl DynRecord {
    /// Record of type `type_name` with no fields.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field, or replaces the value of an existing one in place.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter().position(|(existing, _)| *existing == name) {
            Some(index) => self.fields[index].1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Record type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in position order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Value of the named field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Value of the field at `position`.
    pub fn field_at(&self, position: usize) -> Option<&Value> {
        self.fields.get(position).map(|(_, value)| value)
    }

    /// Whether both records share type name and field layout.
    pub fn has_same_shape(&self, other: &DynRecord) -> bool {
        self.type_name == other.type_name && self.field_names().eq(other.field_names())
    }

    /// Type name plus field layout, e.g. `Employee(ID, Salary)`.
    pub fn shape_signature(&self) -> String {
        let mut out = format!("{}(", self.type_name);
        for (i, name) in self.field_names().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(name);
        }
        out.push(')');
        out
    }
}
