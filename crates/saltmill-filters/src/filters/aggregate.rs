//! Numeric aggregates: `min`, `max` and `avg`.

use minijinja::value::ValueKind;
use minijinja::Value;

use crate::error::{FilterError, Result};
use crate::value::{elements, is_container};

/// Smallest element of `values` by natural ordering.
pub fn min(values: &Value) -> Result<Value> {
    elements("min", values)?
        .into_iter()
        .min()
        .ok_or(FilterError::EmptyInput { filter: "min" })
}

/// Largest element of `values` by natural ordering.
pub fn max(values: &Value) -> Result<Value> {
    elements("max", values)?
        .into_iter()
        .max()
        .ok_or(FilterError::EmptyInput { filter: "max" })
}

/// Arithmetic mean of a sequence.
///
/// A scalar is its own average: `5 | avg` is `5.0`, and numeric strings are
/// parsed.
pub fn average(value: &Value) -> Result<f64> {
    if !is_container(value) {
        return scalar_to_float(value);
    }

    let items = elements("avg", value)?;
    if items.is_empty() {
        return Err(FilterError::DivisionByZero { filter: "avg" });
    }
    let total = items.iter().map(number_to_float).sum::<Result<f64>>()?;
    Ok(total / items.len() as f64)
}

fn number_to_float(value: &Value) -> Result<f64> {
    match value.kind() {
        ValueKind::Bool => Ok(if value.is_true() { 1.0 } else { 0.0 }),
        ValueKind::Number => f64::try_from(value.clone()).map_err(|_| not_numeric(value)),
        _ => Err(not_numeric(value)),
    }
}

fn scalar_to_float(value: &Value) -> Result<f64> {
    match value.as_str() {
        Some(text) => text.trim().parse().map_err(|_| not_numeric(value)),
        None => number_to_float(value),
    }
}

fn not_numeric(value: &Value) -> FilterError {
    FilterError::NotNumeric {
        filter: "avg",
        value: value.to_string(),
    }
}
