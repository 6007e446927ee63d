use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use crate::comparable::Comparable;

/// Kind tag of a [`FieldValue`].
///
/// Within a uniform collection every record yields the same kind for a given
/// field, which is what lets the engine pick one ordering rule per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Text, ordered lexicographically
    Text,
    /// Boolean, `true` before `false`
    Bool,
    /// Integer of any width
    Integer,
    /// Floating point of any width
    Float,
    /// String representation of an arbitrary value
    Stringable,
    /// Value carrying its own ordering
    Comparable,
    /// Anything without an ordering rule
    Opaque,
}

impl ValueKind {
    /// Lowercase name used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Stringable => "stringable",
            ValueKind::Comparable => "comparable",
            ValueKind::Opaque => "opaque",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field of one record, tagged with its kind.
///
/// Values borrow from the record where they can. Integers and floats are
/// widened to `i128` and `f64` so every width shares one rule.
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    /// Text field
    Text(Cow<'a, str>),
    /// Boolean field
    Bool(bool),
    /// Integer field, widened
    Integer(i128),
    /// Float field, widened
    Float(f64),
    /// Rendered string representation of a field
    Stringable(Cow<'a, str>),
    /// Field whose type orders itself
    Comparable(&'a dyn Comparable),
    /// Field with no ordering rule
    Opaque,
}

impl<'a> FieldValue<'a> {
    /// Kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Bool(_) => ValueKind::Bool,
            FieldValue::Integer(_) => ValueKind::Integer,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::Stringable(_) => ValueKind::Stringable,
            FieldValue::Comparable(_) => ValueKind::Comparable,
            FieldValue::Opaque => ValueKind::Opaque,
        }
    }

    /// Borrowed text value.
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    /// Value ordered by its `Display` rendering.
    pub fn stringable<T: Display + ?Sized>(value: &T) -> Self {
        FieldValue::Stringable(Cow::Owned(value.to_string()))
    }

    /// Value ordered by its own `Ord` implementation.
    pub fn comparable<T: Comparable>(value: &'a T) -> Self {
        FieldValue::Comparable(value)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::text(value.as_str())
    }
}

impl From<String> for FieldValue<'_> {
    fn from(value: String) -> Self {
        FieldValue::Text(Cow::Owned(value))
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f32> for FieldValue<'_> {
    fn from(value: f32) -> Self {
        FieldValue::Float(f64::from(value))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

macro_rules! integer_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue<'_> {
                fn from(value: $ty) -> Self {
                    FieldValue::Integer(value as i128)
                }
            }
        )*
    };
}

integer_field_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
