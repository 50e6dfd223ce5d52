//! Deterministic identifiers.

use minijinja::Value;
use uuid::Uuid;

use crate::value::to_text;

/// Version-5 (SHA-1, name-based) identifier of `value` under `namespace`.
///
/// The name is the value's string form, so `'5'` and `5` map to the same id.
pub fn deterministic_id(namespace: &Uuid, value: &Value) -> Uuid {
    Uuid::new_v5(namespace, to_text(value).as_bytes())
}
