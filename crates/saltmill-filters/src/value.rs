//! Capability checks over MiniJinja values.
//!
//! Filters receive [`minijinja::Value`]s from the host engine. This module
//! answers the questions the filters branch on: what kind of value is this,
//! can it be a set member, and how do we walk its elements.

use minijinja::value::ValueKind;
use minijinja::Value;

use crate::error::{FilterError, Result};

/// Returns `true` if `value` can be used as a member of a set.
///
/// Scalars (strings, numbers, booleans, bytes and the absent values) are
/// hashable. Sequences, mappings and opaque objects are not.
pub fn is_hashable(value: &Value) -> bool {
    matches!(
        value.kind(),
        ValueKind::Undefined
            | ValueKind::None
            | ValueKind::Bool
            | ValueKind::Number
            | ValueKind::String
            | ValueKind::Bytes
    )
}

/// Returns `true` if `value` is a container: a sequence, an iterable or a mapping.
pub fn is_container(value: &Value) -> bool {
    matches!(
        value.kind(),
        ValueKind::Seq | ValueKind::Iterable | ValueKind::Map
    )
}

/// Returns `true` if every element of `elements` is hashable.
pub fn all_hashable(elements: &[Value]) -> bool {
    elements.iter().all(is_hashable)
}

/// Short, stable name of a value's kind for diagnostics.
pub fn kind_name(value: &Value) -> &'static str {
    match value.kind() {
        ValueKind::Undefined => "undefined",
        ValueKind::None => "none",
        ValueKind::Bool => "bool",
        ValueKind::Number if value.is_integer() => "integer",
        ValueKind::Number => "float",
        ValueKind::String => "string",
        ValueKind::Bytes => "bytes",
        ValueKind::Seq => "sequence",
        ValueKind::Map => "map",
        ValueKind::Iterable => "iterable",
        _ => "object",
    }
}

/// Collects the elements of `value` into a vector.
///
/// Strings yield their characters and mappings yield their keys, matching
/// how the template engine iterates them in a `for` loop.
pub fn elements(filter: &'static str, value: &Value) -> Result<Vec<Value>> {
    match value.kind() {
        ValueKind::Seq | ValueKind::Iterable | ValueKind::Map | ValueKind::String => value
            .try_iter()
            .map(|iter| iter.collect())
            .map_err(|_| FilterError::NotIterable {
                filter,
                kind: kind_name(value),
            }),
        _ => Err(FilterError::NotIterable {
            filter,
            kind: kind_name(value),
        }),
    }
}

/// Returns `true` if `container` holds `needle`.
///
/// Sequences test element equality, mappings test keys and strings test for a
/// substring. Nothing else contains anything.
pub fn contains(container: &Value, needle: &Value) -> bool {
    match container.kind() {
        ValueKind::String => match (container.as_str(), needle.as_str()) {
            (Some(haystack), Some(needle)) => haystack.contains(needle),
            _ => false,
        },
        ValueKind::Seq | ValueKind::Iterable | ValueKind::Map => container
            .try_iter()
            .map(|mut iter| iter.any(|item| &item == needle))
            .unwrap_or(false),
        _ => false,
    }
}

/// String form of a value: strings are taken verbatim, everything else is
/// formatted the way the engine would print it.
pub fn to_text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
