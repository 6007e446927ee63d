//! Binding a record collection to a schema.

use std::fmt;

use fieldsort_contracts::{schema::Schema, shape::RecordShape};
use fieldsort_model::{ContractViolation, Value, ValueKind};
use tracing::{debug, warn};

use super::fields::FieldRef;
use super::order::FieldOrder;
use super::strategy::{ChainedSort, FieldSort, SortStrategy};
use crate::{Result, SortConfig, SortError};

/// A record collection bound to the schema that describes its records.
///
/// The handle borrows the caller's storage; every sort runs in place and
/// nothing is kept once the handle is dropped.
pub struct Collection<'c, R, S> {
    items: &'c mut [R],
    schema: S,
    config: SortConfig,
}

impl<R, S: Schema<R>> fmt::Debug for Collection<'_, R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("record_type", &self.schema.type_name())
            .field("len", &self.items.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<'c, R, S: Schema<R>> Collection<'c, R, S> {
    /// Bind `items` to `schema` with the default configuration.
    pub fn attach(items: &'c mut [R], schema: S) -> Self {
        debug!(
            "Attached {} records of type {}",
            items.len(),
            schema.type_name()
        );
        Self {
            items,
            schema,
            config: SortConfig::default(),
        }
    }

    /// Replace the configuration used by later sorts.
    pub fn with_config(mut self, config: SortConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Schema the collection is bound to.
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolve a field name against the record type.
    pub fn resolve(&self, name: &str) -> Result<FieldRef> {
        let Some(position) = self.schema.position_of(name) else {
            warn!(
                "Sort field {} not found on {}",
                name,
                self.schema.type_name()
            );
            return Err(SortError::FieldNotFound {
                field: name.to_string(),
                record_type: self.schema.type_name().to_string(),
            });
        };

        let field = FieldRef::new(name, position, self.sample_kind(position));
        debug!(
            "Resolved sort field {} on {}: position={}, kind={:?}",
            name,
            self.schema.type_name(),
            position,
            field.kind()
        );
        Ok(field)
    }

    /// Resolve a field position against the record type.
    pub fn resolve_position(&self, position: usize) -> Result<FieldRef> {
        let Some(name) = self.schema.field_name(position) else {
            warn!(
                "Sort position {} out of range on {}",
                position,
                self.schema.type_name()
            );
            return Err(SortError::PositionOutOfRange {
                position,
                record_type: self.schema.type_name().to_string(),
                field_count: self.schema.field_count(),
            });
        };

        Ok(FieldRef::new(name, position, self.sample_kind(position)))
    }

    /// Unstable sort by the named field.
    pub fn sort_by_name(&mut self, name: &str) -> Result<()> {
        if !self.schema.is_bound() {
            debug!("Collection has no record type, skipping sort by {}", name);
            return Ok(());
        }
        let field = self.resolve(name)?;
        self.sort_unstable(&field);
        Ok(())
    }

    /// Stable multi-key sort by the named fields.
    ///
    /// Every name is resolved before the first pass runs; one unknown name
    /// leaves the collection untouched. Key priority follows
    /// [`SortConfig::key_priority`].
    pub fn sort_stable_by_names<N: AsRef<str>>(&mut self, names: &[N]) -> Result<()> {
        if names.is_empty() || !self.schema.is_bound() {
            return Ok(());
        }
        let fields = names
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.sort_chained(&fields);
        Ok(())
    }

    /// Unstable sort by the field at `position`.
    pub fn sort_by_position(&mut self, position: usize) -> Result<()> {
        if !self.schema.is_bound() {
            return Ok(());
        }
        let field = self.resolve_position(position)?;
        self.sort_unstable(&field);
        Ok(())
    }

    /// Stable multi-key sort by field positions, with the same validation
    /// and priority rules as [`Collection::sort_stable_by_names`].
    pub fn sort_stable_by_positions(&mut self, positions: &[usize]) -> Result<()> {
        if positions.is_empty() || !self.schema.is_bound() {
            return Ok(());
        }
        let fields = positions
            .iter()
            .map(|&position| self.resolve_position(position))
            .collect::<Result<Vec<_>>>()?;
        self.sort_chained(&fields);
        Ok(())
    }

    fn sample_kind(&self, position: usize) -> Option<ValueKind> {
        self.items
            .first()
            .and_then(|record| self.schema.value_at(record, position))
            .map(|value| value.kind())
    }

    fn sort_unstable(&mut self, field: &FieldRef) {
        let Some(order) = FieldOrder::for_field(field) else {
            return;
        };
        debug!(
            "Sorting {} records by {} ({})",
            self.items.len(),
            order.name(),
            order.kind()
        );
        FieldSort::unstable(order, &self.schema).sort(self.items);
    }

    fn sort_chained(&mut self, fields: &[FieldRef]) {
        let mut chain = ChainedSort::new(self.config.key_priority);
        for order in fields.iter().filter_map(FieldOrder::for_field) {
            chain = chain.then_by(FieldSort::stable(order, &self.schema));
        }
        if chain.is_empty() {
            return;
        }
        debug!(
            "Stable sort of {} records over {} keys ({:?})",
            self.items.len(),
            chain.len(),
            self.config.key_priority
        );
        chain.sort(self.items);
    }
}

impl<'c> Collection<'c, Value, RecordShape> {
    /// Bind a runtime-typed value that must be a list of uniform records.
    ///
    /// Aborts through [`ContractViolation::raise`] when `value` is not a
    /// list, holds a non-record element, or mixes record types.
    #[track_caller]
    pub fn attach_value(value: &'c mut Value) -> Self {
        let found = value.kind_name();
        let Some(items) = value.as_list_mut() else {
            ContractViolation::NotAList { found }.raise();
        };
        let shape = RecordShape::from_records(items);
        Self::attach(items.as_mut_slice(), shape)
    }
}
