//! Sorting record collections by field
//!
//! This module provides:
//! - Field resolution against a record schema
//! - Per-kind order relations
//! - Strategy pattern for single and multi-key passes
//! - Entry points for typed and runtime-typed collections

/// Binding collections to schemas
pub mod collection;
/// Resolved field references
pub mod fields;
/// Per-field order relations
pub mod order;
/// Entry points
pub mod simple;
/// Single and chained sort passes
pub mod strategy;


pub use collection::*;
pub use fields::*;
pub use order::*;
pub use simple::*;
pub use strategy::*;
