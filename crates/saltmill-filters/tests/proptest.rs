//! Property-based tests for the filters using proptest.

use minijinja::Value;
use proptest::prelude::*;
use saltmill_filters::filters::{
    deterministic_id, ensure_sequence, regex_escape, symmetric_difference, to_bool, union,
    unique, unique_ordered,
};
use saltmill_filters::{SetStrategy, DEFAULT_UUID_NAMESPACE};

fn values(items: &[i64]) -> Vec<Value> {
    items.iter().copied().map(Value::from).collect()
}

fn same_members(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x))
}

proptest! {
    /// Wrapping a scalar twice is the same as wrapping it once.
    #[test]
    fn ensure_sequence_is_idempotent_for_ints(n in any::<i64>()) {
        let once = ensure_sequence(Value::from(n));
        prop_assert_eq!(ensure_sequence(once.clone()), once);
    }

    #[test]
    fn ensure_sequence_is_idempotent_for_strings(s in ".{0,20}") {
        let once = ensure_sequence(Value::from(s));
        prop_assert_eq!(ensure_sequence(once.clone()), once);
    }

    /// Integers are true exactly when positive.
    #[test]
    fn to_bool_of_integer_is_positive(n in any::<i64>()) {
        prop_assert_eq!(to_bool(&Value::from(n)), n > 0);
    }

    /// The hashed path and the order-preserving scan agree as sets.
    #[test]
    fn unique_paths_agree(items in prop::collection::vec(-20i64..20, 0..40)) {
        let hashed = unique(&Value::from(items.clone())).unwrap();
        prop_assert_eq!(hashed.strategy, SetStrategy::Hashed);
        let ordered = unique_ordered(&values(&items));
        prop_assert!(same_members(&hashed.items, &ordered));
    }

    /// Union contains every element of both inputs and nothing else.
    #[test]
    fn union_membership(
        a in prop::collection::vec(-10i64..10, 0..20),
        b in prop::collection::vec(-10i64..10, 0..20),
    ) {
        let result = union(&Value::from(a.clone()), &Value::from(b.clone())).unwrap();
        for x in a.iter().chain(&b) {
            prop_assert!(result.contains(&Value::from(*x)));
        }
        let joined: Vec<i64> = a.iter().chain(&b).copied().collect();
        prop_assert!(same_members(&result.items, &unique_ordered(&values(&joined))));
    }

    /// An element is in the symmetric difference iff it is in exactly one input.
    #[test]
    fn symmetric_difference_membership(
        a in prop::collection::vec(-10i64..10, 0..20),
        b in prop::collection::vec(-10i64..10, 0..20),
    ) {
        let result =
            symmetric_difference(&Value::from(a.clone()), &Value::from(b.clone())).unwrap();
        for x in -10i64..10 {
            let expected = a.contains(&x) != b.contains(&x);
            prop_assert_eq!(result.contains(&Value::from(x)), expected);
        }
    }

    /// Nested inputs take the order-preserving path and keep first occurrences.
    #[test]
    fn unique_of_nested_keeps_first_occurrence(items in prop::collection::vec(0i64..5, 1..20)) {
        let nested: Vec<Vec<i64>> = items.iter().map(|x| vec![*x]).collect();
        let result = unique(&Value::from(nested)).unwrap();
        prop_assert_eq!(result.strategy, SetStrategy::OrderPreserving);

        let mut expected: Vec<i64> = Vec::new();
        for x in &items {
            if !expected.contains(x) {
                expected.push(*x);
            }
        }
        let expected: Vec<Value> = expected.into_iter().map(|x| Value::from(vec![x])).collect();
        prop_assert_eq!(result.items, expected);
    }

    /// An escaped string matches itself literally.
    #[test]
    fn regex_escape_matches_literally(s in ".{0,30}") {
        let re = regex::Regex::new(&format!("^{}$", regex_escape(&s))).unwrap();
        prop_assert!(re.is_match(&s));
    }

    /// Identifiers depend only on the input and the namespace.
    #[test]
    fn uuid_is_deterministic(s in ".{0,30}") {
        let a = deterministic_id(&DEFAULT_UUID_NAMESPACE, &Value::from(s.clone()));
        let b = deterministic_id(&DEFAULT_UUID_NAMESPACE, &Value::from(s));
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.get_version_num(), 5);
    }
}
