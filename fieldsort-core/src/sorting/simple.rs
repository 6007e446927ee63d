//! Entry points for the common cases.
//!
//! Typed records go through their [`Record`] field table; runtime-typed data
//! goes through a [`Value::List`] of records. For a caller-supplied table or
//! a non-default [`SortConfig`](crate::SortConfig), bind a [`Collection`]
//! directly.

use fieldsort_contracts::{record::Record, table::FieldTable};
use fieldsort_model::Value;

use super::collection::Collection;
use crate::Result;

impl<'c, R: Record> Collection<'c, R, &'static FieldTable<R>> {
    /// Bind records through their own field table.
    pub fn attach_records(items: &'c mut [R]) -> Self {
        Self::attach(items, R::field_table())
    }
}

/// Sort `items` in place by the named field. Unstable.
///
/// Returns [`SortError::FieldNotFound`](crate::SortError::FieldNotFound) and
/// leaves `items` untouched if `R` has no such field.
pub fn sort_by_field_name<R: Record>(items: &mut [R], name: &str) -> Result<()> {
    Collection::attach_records(items).sort_by_name(name)
}

/// Stable multi-key sort of `items` by the named fields, first name primary.
///
/// No names is a no-op.
pub fn sort_stable_by_field_names<R: Record, N: AsRef<str>>(
    items: &mut [R],
    names: &[N],
) -> Result<()> {
    if names.is_empty() {
        return Ok(());
    }
    Collection::attach_records(items).sort_stable_by_names(names)
}

/// Sort `items` in place by the field at `position`. Unstable.
pub fn sort_by_index<R: Record>(items: &mut [R], position: usize) -> Result<()> {
    Collection::attach_records(items).sort_by_position(position)
}

/// Stable multi-key sort of `items` by field positions, first position primary.
pub fn sort_stable_by_indices<R: Record>(items: &mut [R], positions: &[usize]) -> Result<()> {
    if positions.is_empty() {
        return Ok(());
    }
    Collection::attach_records(items).sort_stable_by_positions(positions)
}

/// Sort a list of dynamic records in place by the named field. Unstable.
///
/// # Panics
///
/// If `value` is not a list of records sharing one record type.
#[track_caller]
pub fn sort_value_by_field_name(value: &mut Value, name: &str) -> Result<()> {
    Collection::attach_value(value).sort_by_name(name)
}

/// Stable multi-key sort of a list of dynamic records, first name primary.
///
/// No names is a no-op and does not inspect `value`.
///
/// # Panics
///
/// If `value` is not a list of records sharing one record type.
#[track_caller]
pub fn sort_value_stable_by_field_names<N: AsRef<str>>(
    value: &mut Value,
    names: &[N],
) -> Result<()> {
    if names.is_empty() {
        return Ok(());
    }
    Collection::attach_value(value).sort_stable_by_names(names)
}
