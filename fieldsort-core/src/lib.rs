//! # fieldsort
//!
//! Sort a collection of uniformly-typed records in place by field name,
//! without writing a comparator per field.
//!
//! ## Overview
//!
//! - **Field resolution**: names resolve to positions through a record
//!   schema, either a caller-supplied [`FieldTable`](fieldsort_contracts::table::FieldTable)
//!   or the shape of a runtime-typed [`Value`](fieldsort_model::Value) list
//! - **Per-kind ordering**: each field's [`FieldValue`](fieldsort_model::FieldValue)
//!   kind picks its order rule once per sort key
//! - **Single and multi-key sorts**: an unstable single-key sort, and a stable
//!   multi-key sort built from one pass per key
//!
//! ## Failures
//!
//! Unknown field names and positions are recoverable and come back as
//! [`SortError`], with the collection untouched. Misuse of the engine (binding
//! something that is not a list of uniform records, or records disagreeing on
//! a field's kind) aborts with a [`ContractViolation`] panic.
//!
//! ## Examples
//!
//! ```
//! use fieldsort_core::prelude::*;
//! use once_cell::sync::Lazy;
//!
//! struct Employee {
//!     id: i64,
//!     salary: i64,
//!     name: String,
//! }
//!
//! static EMPLOYEE_FIELDS: Lazy<FieldTable<Employee>> = Lazy::new(|| {
//!     FieldTable::<Employee>::new("Employee")
//!         .field("ID", |e| e.id.into())
//!         .field("Salary", |e| e.salary.into())
//!         .field("Name", |e| FieldValue::text(&e.name))
//! });
//!
//! impl Record for Employee {
//!     fn field_table() -> &'static FieldTable<Self> {
//!         &EMPLOYEE_FIELDS
//!     }
//! }
//!
//! let mut staff = vec![
//!     Employee { id: 1, salary: 200, name: "Jake".into() },
//!     Employee { id: 2, salary: 100, name: "Alice".into() },
//! ];
//!
//! sort_stable_by_field_names(&mut staff, &["Salary"])?;
//! assert_eq!(staff[0].id, 2);
//!
//! let err = sort_by_field_name(&mut staff, "Title").unwrap_err();
//! assert!(matches!(err, SortError::FieldNotFound { .. }));
//! # Ok::<(), SortError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Engine configuration
pub mod config;
/// Error types
pub mod error;
/// Curated imports for callers
pub mod prelude;
/// Field resolution, ordering and sort entry points
pub mod sorting;

pub use config::{KeyPriority, SortConfig};
pub use error::{ContractViolation, Result, SortError};
pub use sorting::{
    Collection, FieldRef, sort_by_field_name, sort_by_index, sort_stable_by_field_names,
    sort_stable_by_indices, sort_value_by_field_name, sort_value_stable_by_field_names,
};
