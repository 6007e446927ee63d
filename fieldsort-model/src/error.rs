use std::fmt::{self, Display};

use crate::value::ValueKind;

/// Caller-contract violations detected while binding or sorting a collection.
///
/// These indicate misuse of the engine rather than bad data, so they are not
/// returned to the caller. The engine aborts the operation through
/// [`ContractViolation::raise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// The bound value is not a list.
    NotAList { found: &'static str },
    /// A list element is not a record.
    NotARecord { index: usize, found: &'static str },
    /// A record does not share the first record's type.
    MixedRecordTypes {
        index: usize,
        expected: String,
        found: String,
    },
    /// A record has no value at a resolved field position.
    MissingField { field: String, position: usize },
    /// Two compared values disagree in kind at a resolved field.
    TypeMismatch {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },
    /// Two comparable values have different concrete types.
    ComparableMismatch {
        field: String,
        left: &'static str,
        right: &'static str,
    },
}

impl ContractViolation {
    /// Aborts the current operation with this violation as the panic message.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("fieldsort: {self}")
    }
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::NotAList { found } => write!(
                f,
                "invalid input, value must be a list of records: kind is {found}, expected list"
            ),
            ContractViolation::NotARecord { index, found } => write!(
                f,
                "invalid input, value is a list but element {index} is of kind {found}, expected record"
            ),
            ContractViolation::MixedRecordTypes {
                index,
                expected,
                found,
            } => write!(
                f,
                "invalid input, element {index} has record type {found}, expected {expected}"
            ),
            ContractViolation::MissingField { field, position } => write!(
                f,
                "record has no value for field {field} at position {position}"
            ),
            ContractViolation::TypeMismatch {
                field,
                expected,
                found,
            } => write!(f, "type mismatch on field {field}: {found} != {expected}"),
            ContractViolation::ComparableMismatch { field, left, right } => {
                write!(f, "type mismatch on field {field}: {left} != {right}")
            }
        }
    }
}

impl std::error::Error for ContractViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_kinds() {
        let err = ContractViolation::NotAList { found: "text" };
        assert_eq!(
            err.to_string(),
            "invalid input, value must be a list of records: kind is text, expected list"
        );

        let err = ContractViolation::TypeMismatch {
            field: "Salary".into(),
            expected: ValueKind::Integer,
            found: ValueKind::Text,
        };
        assert_eq!(err.to_string(), "type mismatch on field Salary: text != integer");
    }

    #[test]
    #[should_panic(expected = "fieldsort: invalid input, value is a list but element 2")]
    fn raise_panics_with_prefixed_message() {
        ContractViolation::NotARecord {
            index: 2,
            found: "int",
        }
        .raise();
    }
}
