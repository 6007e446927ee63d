//! Intentional crate surface for code that sorts records.

pub use crate::config::{KeyPriority, SortConfig};
pub use crate::error::{ContractViolation, Result, SortError};
pub use crate::sorting::{
    Collection, FieldRef, sort_by_field_name, sort_by_index, sort_stable_by_field_names,
    sort_stable_by_indices, sort_value_by_field_name, sort_value_stable_by_field_names,
};
pub use fieldsort_contracts::prelude::*;
pub use fieldsort_model::{DynRecord, Value};
