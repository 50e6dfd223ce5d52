//! Deduplication and set algebra over sequences.
//!
//! Every operation picks one of two algorithms from the hashability of its
//! elements (see [`SetStrategy`]). When every element is hashable the result
//! is an unordered set: callers must not rely on its order. Otherwise the
//! result keeps first-occurrence order. Both algorithms agree as sets.

use std::collections::BTreeSet;

use minijinja::Value;

use crate::error::Result;
use crate::value::{all_hashable, elements};

/// Algorithm used by a set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetStrategy {
    /// All elements are hashable: operate on real sets. Order is unspecified.
    Hashed,
    /// Some element is not hashable: linear membership scans, first-occurrence order.
    OrderPreserving,
}

impl SetStrategy {
    /// Picks the strategy for the given element lists.
    pub fn select(inputs: &[&[Value]]) -> Self {
        if inputs.iter().all(|items| all_hashable(items)) {
            SetStrategy::Hashed
        } else {
            SetStrategy::OrderPreserving
        }
    }
}

/// Output of a set operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SetResult {
    pub strategy: SetStrategy,
    pub items: Vec<Value>,
}

impl SetResult {
    fn new(strategy: SetStrategy, items: Vec<Value>) -> Self {
        tracing::debug!(?strategy, len = items.len(), "set operation");
        Self { strategy, items }
    }

    /// Returns `true` if `value` is a member of the result.
    pub fn contains(&self, value: &Value) -> bool {
        self.items.contains(value)
    }
}

impl From<SetResult> for Value {
    fn from(result: SetResult) -> Self {
        Value::from(result.items)
    }
}

/// Distinct elements in first-occurrence order.
///
/// Each element is checked against the ones already accepted, which is
/// quadratic in the worst case. Inputs here are small template values.
pub fn unique_ordered(items: &[Value]) -> Vec<Value> {
    let mut seen: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(item) {
            seen.push(item.clone());
        }
    }
    seen
}

fn hashed(items: &[Value]) -> BTreeSet<Value> {
    items.iter().cloned().collect()
}

/// Distinct elements of `values`.
pub fn unique(values: &Value) -> Result<SetResult> {
    let items = elements("unique", values)?;
    Ok(match SetStrategy::select(&[&items[..]]) {
        SetStrategy::Hashed => {
            SetResult::new(SetStrategy::Hashed, hashed(&items).into_iter().collect())
        }
        SetStrategy::OrderPreserving => {
            SetResult::new(SetStrategy::OrderPreserving, unique_ordered(&items))
        }
    })
}

/// Elements found in either input.
pub fn union(a: &Value, b: &Value) -> Result<SetResult> {
    let (a, b) = (elements("union", a)?, elements("union", b)?);
    Ok(union_of(&a, &b))
}

fn union_of(a: &[Value], b: &[Value]) -> SetResult {
    match SetStrategy::select(&[a, b]) {
        SetStrategy::Hashed => {
            let items = hashed(a).union(&hashed(b)).cloned().collect();
            SetResult::new(SetStrategy::Hashed, items)
        }
        SetStrategy::OrderPreserving => {
            let joined: Vec<Value> = a.iter().chain(b).cloned().collect();
            SetResult::new(SetStrategy::OrderPreserving, unique_ordered(&joined))
        }
    }
}

/// Elements of `a` that also occur in `b`.
pub fn intersect(a: &Value, b: &Value) -> Result<SetResult> {
    let (a, b) = (elements("intersect", a)?, elements("intersect", b)?);
    Ok(intersect_of(&a, &b))
}

fn intersect_of(a: &[Value], b: &[Value]) -> SetResult {
    match SetStrategy::select(&[a, b]) {
        SetStrategy::Hashed => {
            let items = hashed(a).intersection(&hashed(b)).cloned().collect();
            SetResult::new(SetStrategy::Hashed, items)
        }
        SetStrategy::OrderPreserving => {
            let kept: Vec<Value> = a.iter().filter(|x| b.contains(x)).cloned().collect();
            SetResult::new(SetStrategy::OrderPreserving, unique_ordered(&kept))
        }
    }
}

/// Elements of `a` absent from `b`.
pub fn difference(a: &Value, b: &Value) -> Result<SetResult> {
    let (a, b) = (elements("difference", a)?, elements("difference", b)?);
    Ok(match SetStrategy::select(&[&a[..], &b[..]]) {
        SetStrategy::Hashed => {
            let items = hashed(&a).difference(&hashed(&b)).cloned().collect();
            SetResult::new(SetStrategy::Hashed, items)
        }
        SetStrategy::OrderPreserving => {
            let kept: Vec<Value> = a.iter().filter(|x| !b.contains(x)).cloned().collect();
            SetResult::new(SetStrategy::OrderPreserving, unique_ordered(&kept))
        }
    })
}

/// Elements found in exactly one of the inputs.
///
/// On the order-preserving path this is the union minus the intersection,
/// in union order.
pub fn symmetric_difference(a: &Value, b: &Value) -> Result<SetResult> {
    let (a, b) = (
        elements("symmetric_difference", a)?,
        elements("symmetric_difference", b)?,
    );
    Ok(match SetStrategy::select(&[&a[..], &b[..]]) {
        SetStrategy::Hashed => {
            let items = hashed(&a)
                .symmetric_difference(&hashed(&b))
                .cloned()
                .collect();
            SetResult::new(SetStrategy::Hashed, items)
        }
        SetStrategy::OrderPreserving => {
            let both = intersect_of(&a, &b);
            let items = union_of(&a, &b)
                .items
                .into_iter()
                .filter(|x| !both.contains(x))
                .collect();
            SetResult::new(SetStrategy::OrderPreserving, items)
        }
    })
}
