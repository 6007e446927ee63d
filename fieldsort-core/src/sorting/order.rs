//! Order relations over a single field.
//!
//! The rule for a field is picked once from its kind. Each comparison then
//! only checks that both values still carry that kind before applying it.

use std::cmp::Ordering;

use fieldsort_contracts::schema::Schema;
use fieldsort_model::{Comparable, ContractViolation, FieldValue, ValueKind};
use ordered_float::OrderedFloat;

use super::fields::FieldRef;

/// Compares two values of the same kind. `None` means the values cannot be
/// ordered against each other.
type Rule = fn(&FieldValue<'_>, &FieldValue<'_>) -> Option<Ordering>;

/// The order relation induced by one resolved field.
#[derive(Clone)]
pub struct FieldOrder {
    name: String,
    position: usize,
    kind: ValueKind,
    rule: Rule,
}

impl std::fmt::Debug for FieldOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldOrder")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("kind", &self.kind)
            .finish()
    }
}

impl FieldOrder {
    /// Order relation for `field`, or `None` if its kind was never sampled.
    pub fn for_field(field: &FieldRef) -> Option<Self> {
        field
            .kind()
            .map(|kind| Self::new(field.name(), field.position(), kind))
    }

    /// Order relation over the field at `position`, using the rule for `kind`.
    pub fn new(name: impl Into<String>, position: usize, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            position,
            kind,
            rule: rule_for(kind),
        }
    }

    /// Field name, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind every compared value must carry.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Compares two records by this field.
    pub fn compare_records<R, S>(&self, schema: &S, a: &R, b: &R) -> Ordering
    where
        S: Schema<R> + ?Sized,
    {
        let left = self.value_of(schema, a);
        let right = self.value_of(schema, b);
        self.compare(&left, &right)
    }

    /// Compares two field values.
    ///
    /// Aborts if either value is not of this field's kind, or if two
    /// comparable values have different concrete types.
    pub fn compare(&self, a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
        self.check_kind(a);
        self.check_kind(b);
        match (self.rule)(a, b) {
            Some(ordering) => ordering,
            None => self.mismatch(a, b),
        }
    }

    fn value_of<'r, R, S>(&self, schema: &S, record: &'r R) -> FieldValue<'r>
    where
        S: Schema<R> + ?Sized,
    {
        match schema.value_at(record, self.position) {
            Some(value) => value,
            None => ContractViolation::MissingField {
                field: self.name.clone(),
                position: self.position,
            }
            .raise(),
        }
    }

    fn check_kind(&self, value: &FieldValue<'_>) {
        let found = value.kind();
        if found != self.kind {
            ContractViolation::TypeMismatch {
                field: self.name.clone(),
                expected: self.kind,
                found,
            }
            .raise();
        }
    }

    fn mismatch(&self, a: &FieldValue<'_>, b: &FieldValue<'_>) -> ! {
        match (a, b) {
            (FieldValue::Comparable(left), FieldValue::Comparable(right)) => {
                ContractViolation::ComparableMismatch {
                    field: self.name.clone(),
                    left: Comparable::type_name(*left),
                    right: Comparable::type_name(*right),
                }
                .raise()
            }
            _ => ContractViolation::TypeMismatch {
                field: self.name.clone(),
                expected: self.kind,
                found: b.kind(),
            }
            .raise(),
        }
    }
}

fn rule_for(kind: ValueKind) -> Rule {
    match kind {
        ValueKind::Text => compare_text,
        ValueKind::Bool => compare_bool,
        ValueKind::Integer => compare_integer,
        ValueKind::Float => compare_float,
        ValueKind::Stringable => compare_stringable,
        ValueKind::Comparable => compare_comparable,
        ValueKind::Opaque => compare_opaque,
    }
}

fn compare_text(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

// true sorts before false
fn compare_bool(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Bool(a), FieldValue::Bool(b)) => Some(b.cmp(a)),
        _ => None,
    }
}

fn compare_integer(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

// NaN orders after every number
fn compare_float(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Float(a), FieldValue::Float(b)) => {
            Some(OrderedFloat(*a).cmp(&OrderedFloat(*b)))
        }
        _ => None,
    }
}

fn compare_stringable(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Stringable(a), FieldValue::Stringable(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn compare_comparable(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Comparable(a), FieldValue::Comparable(b)) => {
            Comparable::compare_dyn(*a, *b)
        }
        _ => None,
    }
}

fn compare_opaque(_: &FieldValue<'_>, _: &FieldValue<'_>) -> Option<Ordering> {
    Some(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Badge(u8);

    fn order(kind: ValueKind) -> FieldOrder {
        FieldOrder::new("Field", 0, kind)
    }

    #[test]
    fn text_is_lexicographic() {
        let order = order(ValueKind::Text);
        assert_eq!(
            order.compare(&FieldValue::text("Anderson"), &FieldValue::text("Williams")),
            Ordering::Less
        );
        // byte-wise: uppercase sorts before lowercase
        assert_eq!(
            order.compare(&FieldValue::text("b"), &FieldValue::text("B")),
            Ordering::Greater
        );
    }

    #[test]
    fn true_sorts_before_false() {
        let order = order(ValueKind::Bool);
        let (t, f) = (FieldValue::Bool(true), FieldValue::Bool(false));
        assert_eq!(order.compare(&t, &f), Ordering::Less);
        assert_eq!(order.compare(&f, &t), Ordering::Greater);
        assert_eq!(order.compare(&t, &t), Ordering::Equal);
        assert_eq!(order.compare(&f, &f), Ordering::Equal);
    }

    #[test]
    fn integers_compare_numerically_across_widths() {
        let order = order(ValueKind::Integer);
        assert_eq!(
            order.compare(&FieldValue::from(-5i8), &FieldValue::from(3u64)),
            Ordering::Less
        );
    }

    #[test]
    fn nan_sorts_last() {
        let order = order(ValueKind::Float);
        let nan = FieldValue::Float(f64::NAN);
        let big = FieldValue::Float(f64::INFINITY);
        assert_eq!(order.compare(&big, &nan), Ordering::Less);
        assert_eq!(order.compare(&nan, &nan), Ordering::Equal);
        assert_eq!(
            order.compare(&FieldValue::from(0.5f32), &FieldValue::from(0.25f64)),
            Ordering::Greater
        );
    }

    #[test]
    fn stringable_compares_rendered_forms() {
        let order = order(ValueKind::Stringable);
        // "10" < "9" as strings
        assert_eq!(
            order.compare(&FieldValue::stringable(&10), &FieldValue::stringable(&9)),
            Ordering::Less
        );
    }

    #[test]
    fn comparable_delegates_to_ord() {
        let order = order(ValueKind::Comparable);
        let (low, high) = (Badge(1), Badge(2));
        assert_eq!(
            order.compare(&FieldValue::comparable(&high), &FieldValue::comparable(&low)),
            Ordering::Greater
        );
    }

    #[test]
    fn opaque_values_are_all_equal() {
        let order = order(ValueKind::Opaque);
        assert_eq!(
            order.compare(&FieldValue::Opaque, &FieldValue::Opaque),
            Ordering::Equal
        );
    }

    #[test]
    #[should_panic(expected = "fieldsort: type mismatch on field Field: text != integer")]
    fn kind_mismatch_aborts() {
        order(ValueKind::Integer).compare(&FieldValue::from(1i64), &FieldValue::text("1"));
    }

    #[test]
    #[should_panic(expected = "type mismatch on field Field")]
    fn comparable_type_mismatch_aborts() {
        let badge = Badge(1);
        order(ValueKind::Comparable)
            .compare(&FieldValue::comparable(&badge), &FieldValue::comparable(&7u32));
    }

    #[test]
    fn for_field_needs_a_sampled_kind() {
        assert!(FieldOrder::for_field(&FieldRef::new("ID", 0, None)).is_none());
        let order = FieldOrder::for_field(&FieldRef::new("ID", 0, Some(ValueKind::Integer)))
            .expect("kind was sampled");
        assert_eq!(order.kind(), ValueKind::Integer);
        assert_eq!(order.name(), "ID");
    }
}
