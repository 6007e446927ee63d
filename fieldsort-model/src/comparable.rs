//! Self-ordering field values.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A value that can order itself against another value of the same type.
///
/// Implemented for every `Ord + Debug + 'static` type, so a composite field
/// (a full name, a version triple) becomes sortable by implementing `Ord`.
pub trait Comparable: Any + Debug {
    /// Orders `self` against `other`, or `None` if the concrete types differ.
    fn compare_dyn(&self, other: &dyn Comparable) -> Option<Ordering>;

    /// Upcast used to downcast the other side of a comparison.
    fn as_any(&self) -> &dyn Any;

    /// Concrete type name, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Ord + Debug + Any> Comparable for T {
    fn compare_dyn(&self, other: &dyn Comparable) -> Option<Ordering> {
        other
            .as_any()
            .downcast_ref::<T>()
            .map(|other| self.cmp(other))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Version(u16, u16, u16);

    #[test]
    fn same_type_delegates_to_ord() {
        let a: &dyn Comparable = &Version(1, 2, 0);
        let b: &dyn Comparable = &Version(1, 10, 0);
        assert_eq!(a.compare_dyn(b), Some(Ordering::Less));
        assert_eq!(b.compare_dyn(a), Some(Ordering::Greater));
        assert_eq!(a.compare_dyn(a), Some(Ordering::Equal));
    }

    #[test]
    fn different_types_do_not_compare() {
        let a: &dyn Comparable = &Version(1, 0, 0);
        let b: &dyn Comparable = &7u32;
        assert_eq!(a.compare_dyn(b), None);
        assert!(b.type_name().contains("u32"));
    }
}
