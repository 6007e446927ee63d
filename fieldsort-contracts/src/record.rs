use crate::table::FieldTable;

/// A record type that publishes its own field table.
///
/// Implementors usually keep the table in a lazily initialised static:
///
/// ```
/// use fieldsort_contracts::{record::Record, table::FieldTable};
/// use fieldsort_model::FieldValue;
/// use once_cell::sync::Lazy;
///
/// struct Employee {
///     id: i64,
///     salary: i64,
///     name: String,
/// }
///
/// static EMPLOYEE_FIELDS: Lazy<FieldTable<Employee>> = Lazy::new(|| {
///     FieldTable::<Employee>::new("Employee")
///         .field("ID", |e| e.id.into())
///         .field("Salary", |e| e.salary.into())
///         .field("Name", |e| FieldValue::text(&e.name))
/// });
///
/// impl Record for Employee {
///     fn field_table() -> &'static FieldTable<Self> {
///         &EMPLOYEE_FIELDS
///     }
/// }
/// ```
pub trait Record: Sized + 'static {
    /// Field table describing this record type.
    fn field_table() -> &'static FieldTable<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use fieldsort_model::{FieldValue, ValueKind};
    use once_cell::sync::Lazy;

    struct Employee {
        id: i64,
        salary: i64,
        name: String,
    }

    static EMPLOYEE_FIELDS: Lazy<FieldTable<Employee>> = Lazy::new(|| {
        FieldTable::<Employee>::new("Employee")
            .field("ID", |e| e.id.into())
            .field("Salary", |e| e.salary.into())
            .field("Name", |e| FieldValue::text(&e.name))
    });

    impl Record for Employee {
        fn field_table() -> &'static FieldTable<Self> {
            &EMPLOYEE_FIELDS
        }
    }

    #[test]
    fn static_table_is_shared_and_complete() {
        let table = Employee::field_table();
        assert!(std::ptr::eq(table, Employee::field_table()));
        assert_eq!(table.type_name(), "Employee");
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["ID", "Salary", "Name"]);

        let jake = Employee {
            id: 1,
            salary: 95_000,
            name: "Jake".into(),
        };
        let kinds: Vec<_> = (0..table.field_count())
            .filter_map(|pos| table.value_at(&jake, pos))
            .map(|value| value.kind())
            .collect();
        assert_eq!(kinds, vec![ValueKind::Integer, ValueKind::Integer, ValueKind::Text]);
    }
}
