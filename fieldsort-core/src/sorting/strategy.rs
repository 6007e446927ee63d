//! Strategy pattern for composable sorting
//!
//! A [`FieldSort`] is one pass over one field. A [`ChainedSort`] composes
//! stable passes into a multi-key sort.

use fieldsort_contracts::schema::Schema;
use tracing::trace;

use super::order::FieldOrder;
use crate::config::KeyPriority;

/// A sorting strategy that can be composed
pub trait SortStrategy<R> {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [R]);
}

/// Single field sort strategy
#[derive(Debug)]
pub struct FieldSort<'s, S> {
    order: FieldOrder,
    schema: &'s S,
    stable: bool,
}

impl<'s, S> FieldSort<'s, S> {
    /// Unstable pass; equal elements end up in unspecified order.
    pub fn unstable(order: FieldOrder, schema: &'s S) -> Self {
        Self {
            order,
            schema,
            stable: false,
        }
    }

    /// Stable pass; equal elements keep their relative order.
    pub fn stable(order: FieldOrder, schema: &'s S) -> Self {
        Self {
            order,
            schema,
            stable: true,
        }
    }

    /// Order relation this pass sorts by.
    pub fn order(&self) -> &FieldOrder {
        &self.order
    }

    /// Whether this pass keeps equal elements in order.
    pub fn is_stable(&self) -> bool {
        self.stable
    }
}

impl<R, S> SortStrategy<R> for FieldSort<'_, S>
where
    S: Schema<R>,
{
    fn sort(&self, items: &mut [R]) {
        trace!(
            "Sorting {} records by {} (stable={})",
            items.len(),
            self.order.name(),
            self.stable
        );
        let compare = |a: &R, b: &R| self.order.compare_records(self.schema, a, b);
        if self.stable {
            items.sort_by(compare);
        } else {
            items.sort_unstable_by(compare);
        }
    }
}

/// Multi-field sort built from stable passes
pub struct ChainedSort<'s, R> {
    strategies: Vec<Box<dyn SortStrategy<R> + 's>>,
    priority: KeyPriority,
}

impl<R> std::fmt::Debug for ChainedSort<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedSort")
            .field("passes", &self.strategies.len())
            .field("priority", &self.priority)
            .finish()
    }
}

impl<'s, R> ChainedSort<'s, R> {
    /// Create a new chained sort
    pub fn new(priority: KeyPriority) -> Self {
        Self {
            strategies: Vec::new(),
            priority,
        }
    }

    /// Add a sorting strategy to the chain
    ///
    /// Passes should be stable, otherwise earlier passes are not preserved.
    pub fn then_by(mut self, strategy: impl SortStrategy<R> + 's) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Number of passes.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the chain has no passes.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl<R> SortStrategy<R> for ChainedSort<'_, R> {
    fn sort(&self, items: &mut [R]) {
        match self.priority {
            // Last pass wins ties, so run the primary key last
            KeyPriority::FirstIsPrimary => {
                for strategy in self.strategies.iter().rev() {
                    strategy.sort(items);
                }
            }
            KeyPriority::LastIsPrimary => {
                for strategy in &self.strategies {
                    strategy.sort(items);
                }
            }
        }
    }
}
