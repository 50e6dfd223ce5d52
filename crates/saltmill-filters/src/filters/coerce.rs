//! Coercion filters: `skip`, `sequence` and `to_bool`.

use minijinja::value::ValueKind;
use minijinja::Value;

use crate::value::{is_container, is_hashable};

/// Suppresses output.
///
/// The argument has already been evaluated by the time the filter runs, so
/// `{{ list.append(x) | skip }}` keeps the side effect and prints nothing.
pub fn skip(_value: &Value) -> String {
    String::new()
}

/// Wraps anything that is not already a sequence or mapping in a one-element list.
///
/// ```
/// use minijinja::Value;
/// use saltmill_filters::filters::ensure_sequence;
///
/// assert_eq!(ensure_sequence(Value::from("foo")), Value::from(vec!["foo"]));
/// assert_eq!(ensure_sequence(Value::from(vec!["bar"])), Value::from(vec!["bar"]));
/// ```
pub fn ensure_sequence(value: Value) -> Value {
    if is_container(&value) {
        value
    } else {
        Value::from(vec![value])
    }
}

/// The rule that decided a [`to_bool`] result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolRule {
    /// Absent values are false.
    Absent,
    /// Booleans are themselves.
    Bool,
    /// Strings are true iff they spell `yes`, `1` or `true` in any case.
    Text,
    /// Integers are true iff strictly positive.
    Integer,
    /// Collections are true iff non-empty.
    Collection,
    /// Any other hashable value is false.
    Fallback,
}

/// Logical value of `value`, together with the rule that produced it.
pub fn to_bool_with_rule(value: &Value) -> (bool, BoolRule) {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => (false, BoolRule::Absent),
        ValueKind::Bool => (value.is_true(), BoolRule::Bool),
        ValueKind::String => {
            let text = value.as_str().unwrap_or_default().to_lowercase();
            (matches!(text.as_str(), "yes" | "1" | "true"), BoolRule::Text)
        }
        ValueKind::Number if value.is_integer() => {
            let positive = i128::try_from(value.clone()).map_or(false, |n| n > 0);
            (positive, BoolRule::Integer)
        }
        _ if is_hashable(value) => (false, BoolRule::Fallback),
        _ => (
            value.len().map_or_else(|| value.is_true(), |len| len > 0),
            BoolRule::Collection,
        ),
    }
}

/// Logical value of `value`.
///
/// ```
/// use minijinja::Value;
/// use saltmill_filters::filters::to_bool;
///
/// assert!(to_bool(&Value::from("YES")));
/// assert!(!to_bool(&Value::from("no")));
/// assert!(!to_bool(&Value::from(0)));
/// assert!(to_bool(&Value::from(5)));
/// ```
pub fn to_bool(value: &Value) -> bool {
    to_bool_with_rule(value).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_is_empty() {
        assert_eq!(skip(&Value::from("foo")), "");
        assert_eq!(skip(&Value::from(vec![1, 2])), "");
    }

    #[test]
    fn test_ensure_sequence_wraps_scalars() {
        assert_eq!(ensure_sequence(Value::from(3)), Value::from(vec![3]));
        assert_eq!(
            ensure_sequence(Value::from(())),
            Value::from(vec![Value::from(())])
        );
    }

    #[test]
    fn test_ensure_sequence_keeps_mappings() {
        let map = Value::from_serialize(serde_json::json!({"baz": "qux"}));
        assert_eq!(ensure_sequence(map.clone()), map);
    }

    #[test]
    fn test_to_bool_strings() {
        for truthy in ["yes", "YES", "Yes", "1", "true", "TRUE"] {
            assert!(to_bool(&Value::from(truthy)), "{truthy} should be true");
        }
        for falsy in ["no", "0", "false", "", "y", "on"] {
            assert!(!to_bool(&Value::from(falsy)), "{falsy} should be false");
        }
    }

    #[test]
    fn test_to_bool_absent() {
        assert_eq!(to_bool_with_rule(&Value::from(())), (false, BoolRule::Absent));
        assert_eq!(to_bool_with_rule(&Value::UNDEFINED), (false, BoolRule::Absent));
    }

    #[test]
    fn test_to_bool_integers() {
        assert_eq!(to_bool_with_rule(&Value::from(5)), (true, BoolRule::Integer));
        assert!(!to_bool(&Value::from(0)));
        assert!(!to_bool(&Value::from(-3)));
    }

    #[test]
    fn test_to_bool_float_takes_fallback() {
        assert_eq!(
            to_bool_with_rule(&Value::from(2.5)),
            (false, BoolRule::Fallback)
        );
    }

    #[test]
    fn test_to_bool_collections() {
        assert_eq!(
            to_bool_with_rule(&Value::from(vec![1])),
            (true, BoolRule::Collection)
        );
        let empty: Vec<Value> = Vec::new();
        assert!(!to_bool(&Value::from(empty)));
        assert!(!to_bool(&Value::from_serialize(serde_json::json!({}))));
    }

    #[test]
    fn test_to_bool_bool() {
        assert_eq!(to_bool_with_rule(&Value::from(true)), (true, BoolRule::Bool));
        assert!(!to_bool(&Value::from(false)));
    }
}
