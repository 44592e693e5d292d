use crate::{
    query::{
        eval::{FieldPresence, Row, eval},
        predicate::{CompareOp, ComparePredicate, Predicate},
    },
    value::Value,
};
use proptest::prelude::*;
use std::collections::BTreeMap;
use ulid::Ulid;

#[derive(Clone, Debug)]
struct TestRow {
    fields: BTreeMap<String, Value>,
}

impl Row for TestRow {
    fn field(&self, name: &str) -> FieldPresence {
        match self.fields.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

fn row(pairs: &[(&str, Value)]) -> TestRow {
    TestRow {
        fields: pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect(),
    }
}

// ---- constructors ------------------------------------------------------

#[test]
fn eq_builds_compare_node() {
    let pred = Predicate::eq("code", 7i64);

    assert_eq!(
        pred,
        Predicate::Compare(ComparePredicate {
            field: "code".to_string(),
            op: CompareOp::Eq,
            value: Value::Int(7),
        })
    );
}

#[test]
fn in_wraps_values_in_a_list() {
    let pred = Predicate::in_("code", vec![Value::Int(1), Value::Int(2)]);

    let Predicate::Compare(cmp) = pred else {
        panic!("expected compare node");
    };
    assert_eq!(cmp.op, CompareOp::In);
    assert_eq!(cmp.value, Value::List(vec![Value::Int(1), Value::Int(2)]));
}

#[test]
fn bitand_and_bitor_build_connectives() {
    let a = Predicate::eq("a", 1i64);
    let b = Predicate::eq("b", 2i64);

    assert_eq!(
        a.clone() & b.clone(),
        Predicate::And(vec![a.clone(), b.clone()])
    );
    assert_eq!(a.clone() | b.clone(), Predicate::Or(vec![a, b]));
}

// ---- evaluation --------------------------------------------------------

#[test]
fn comparisons_follow_value_order() {
    let r = row(&[("code", Value::Int(5))]);

    assert!(eval(&r, &Predicate::eq("code", 5i64)));
    assert!(eval(&r, &Predicate::ne("code", 6i64)));
    assert!(eval(&r, &Predicate::lt("code", 6i64)));
    assert!(eval(&r, &Predicate::lte("code", 5i64)));
    assert!(eval(&r, &Predicate::gt("code", 4i64)));
    assert!(eval(&r, &Predicate::gte("code", 5i64)));
    assert!(!eval(&r, &Predicate::lt("code", 5i64)));
}

#[test]
fn missing_field_never_matches_any_comparison() {
    let r = row(&[]);

    assert!(!eval(&r, &Predicate::eq("code", 5i64)));
    assert!(!eval(&r, &Predicate::ne("code", 5i64)));
    assert!(!eval(&r, &Predicate::lt("code", 5i64)));
    assert!(!eval(&r, &Predicate::is_null("code")));
}

#[test]
fn cross_variant_comparison_is_undefined_not_false_positive() {
    let r = row(&[("code", Value::Text("5".to_string()))]);

    // Neither eq nor its negation holds across variants.
    assert!(!eval(&r, &Predicate::eq("code", 5i64)));
    assert!(!eval(&r, &Predicate::ne("code", 5i64)));
}

#[test]
fn is_null_distinguishes_null_from_missing() {
    let present = row(&[("detail", Value::Null)]);
    let missing = row(&[]);

    assert!(eval(&present, &Predicate::is_null("detail")));
    assert!(!eval(&missing, &Predicate::is_null("detail")));
}

#[test]
fn in_matches_membership_and_rejects_cross_variant_lists() {
    let r = row(&[("code", Value::Int(2))]);

    assert!(eval(
        &r,
        &Predicate::in_("code", vec![Value::Int(1), Value::Int(2)])
    ));
    assert!(!eval(&r, &Predicate::in_("code", vec![Value::Int(3)])));
    // A list of nothing but incomparable values is undefined, hence false.
    assert!(!eval(
        &r,
        &Predicate::in_("code", vec![Value::Text("2".to_string())])
    ));
}

#[test]
fn text_contains_ci_ignores_case() {
    let r = row(&[("name", Value::Text("Billing Cycle".to_string()))]);

    assert!(eval(&r, &Predicate::text_contains_ci("name", "billing")));
    assert!(eval(&r, &Predicate::text_contains_ci("name", "CYCLE")));
    assert!(!eval(&r, &Predicate::text_contains_ci("name", "invoice")));
}

#[test]
fn id_equality_matches_exact_ulid() {
    let id = Ulid::from(42);
    let r = row(&[("id", Value::Id(id))]);

    assert!(eval(&r, &Predicate::eq("id", id)));
    assert!(!eval(&r, &Predicate::eq("id", Ulid::from(43))));
}

// ---- properties --------------------------------------------------------

const FIELDS: [&str; 3] = ["a", "b", "c"];

fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(FIELDS[0].to_string()),
        Just(FIELDS[1].to_string()),
        Just(FIELDS[2].to_string()),
    ]
}

fn arb_scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "[a-zA-Z0-9_]{0,8}".prop_map(Value::Text),
        any::<u128>().prop_map(|n| Value::Id(Ulid::from(n))),
        Just(Value::Null),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_scalar_value(),
        prop::collection::vec(arb_scalar_value(), 0..4).prop_map(Value::List),
    ]
}

fn arb_compare_op() -> impl Strategy<Value = CompareOp> {
    prop_oneof![
        Just(CompareOp::Eq),
        Just(CompareOp::Ne),
        Just(CompareOp::Lt),
        Just(CompareOp::Lte),
        Just(CompareOp::Gt),
        Just(CompareOp::Gte),
        Just(CompareOp::In),
    ]
}

fn arb_predicate() -> impl Strategy<Value = Predicate> {
    let leaf = prop_oneof![
        Just(Predicate::True),
        Just(Predicate::False),
        arb_field().prop_map(|field| Predicate::IsNull { field }),
        (arb_field(), arb_compare_op(), arb_value()).prop_map(|(field, op, value)| {
            Predicate::Compare(ComparePredicate { field, op, value })
        }),
        (arb_field(), "[a-zA-Z0-9_]{0,8}")
            .prop_map(|(field, text)| Predicate::text_contains_ci(field, text)),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Predicate::And),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Predicate::Or),
            inner.prop_map(|p| Predicate::Not(Box::new(p))),
        ]
    })
}

fn arb_row() -> impl Strategy<Value = TestRow> {
    prop::collection::vec(
        prop_oneof![Just(None), arb_value().prop_map(Some)],
        FIELDS.len(),
    )
    .prop_map(|values| {
        let mut fields = BTreeMap::new();
        for (name, value) in FIELDS.iter().zip(values) {
            if let Some(value) = value {
                fields.insert((*name).to_string(), value);
            }
        }
        TestRow { fields }
    })
}

proptest! {
    #[test]
    fn not_is_an_involution(predicate in arb_predicate(), row in arb_row()) {
        let doubled = Predicate::not(Predicate::not(predicate.clone()));
        prop_assert_eq!(eval(&row, &predicate), eval(&row, &doubled));
    }

    #[test]
    fn and_or_follow_their_connective_semantics(
        children in prop::collection::vec(arb_predicate(), 0..4),
        row in arb_row(),
    ) {
        let each: Vec<bool> = children.iter().map(|child| eval(&row, child)).collect();

        prop_assert_eq!(
            eval(&row, &Predicate::And(children.clone())),
            each.iter().all(|b| *b)
        );
        prop_assert_eq!(
            eval(&row, &Predicate::Or(children)),
            each.iter().any(|b| *b)
        );
    }

    #[test]
    fn evaluation_is_deterministic(predicate in arb_predicate(), row in arb_row()) {
        prop_assert_eq!(eval(&row, &predicate), eval(&row, &predicate));
    }
}
