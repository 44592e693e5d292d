use crate::{
    query::predicate::{CompareOp, ComparePredicate, Predicate},
    traits::FieldValues,
    value::{TextMode, Value},
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of attempting to read a field from a row during predicate
/// evaluation. This distinguishes between a missing field and a present
/// field whose value may be `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that can expose fields by name.
/// This decouples predicate evaluation from concrete entity types, so a
/// storage adapter can overlay virtual fields (e.g. resolved status
/// activity) on top of an entity's own fields.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl<T: FieldValues> Row for T {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get_value(name) {
            Some(value) => FieldPresence::Present(value),
            None => FieldPresence::Missing,
        }
    }
}

///
/// Evaluate a predicate against a single row.
///
/// Pure runtime evaluation: no field-map access, no planning. Any
/// comparison that is not defined (missing field, cross-variant values)
/// evaluates to `false` rather than erroring.
///
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Not(inner) => !eval(row, inner),

        Predicate::Compare(cmp) => eval_compare(row, cmp),

        Predicate::IsNull { field } => {
            matches!(row.field(field), FieldPresence::Present(Value::Null))
        }

        Predicate::TextContainsCi { field, value } => {
            let FieldPresence::Present(actual) = row.field(field) else {
                return false;
            };
            // Invalid text comparisons are treated as non-matches.
            actual.text_contains(value, TextMode::Ci).unwrap_or(false)
        }
    }
}

///
/// Evaluate a single comparison predicate against a row.
///
/// Returns `false` if the field is missing or the comparison is not
/// defined between the two value variants.
///
fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let ComparePredicate { field, op, value } = cmp;

    let FieldPresence::Present(actual) = row.field(field) else {
        return false;
    };

    match op {
        CompareOp::Eq => actual.compare_eq(value).unwrap_or(false),
        CompareOp::Ne => actual.compare_eq(value).is_some_and(|v| !v),

        CompareOp::Lt => actual.compare_order(value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => actual.compare_order(value).is_some_and(Ordering::is_le),
        CompareOp::Gt => actual.compare_order(value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => actual.compare_order(value).is_some_and(Ordering::is_ge),

        CompareOp::In => in_list(&actual, value).unwrap_or(false),
    }
}

///
/// Check whether a value equals any element in a list.
///
fn in_list(actual: &Value, list: &Value) -> Option<bool> {
    let Value::List(items) = list else {
        return None;
    };

    let mut saw_valid = false;
    for item in items {
        match actual.compare_eq(item) {
            Some(true) => return Some(true),
            Some(false) => saw_valid = true,
            None => {}
        }
    }

    saw_valid.then_some(false)
}
