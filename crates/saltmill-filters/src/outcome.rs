//! Explicit results for filters that pass their input through on a type mismatch.

use std::fmt;

use minijinja::Value;

use crate::value::kind_name;

/// Why a filter declined to transform its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    /// Name of the offending argument.
    pub argument: &'static str,
    /// Kind the filter needed.
    pub expected: &'static str,
    /// Kind it was given.
    pub actual: &'static str,
}

impl TypeMismatch {
    pub fn new(argument: &'static str, expected: &'static str, actual: &Value) -> Self {
        Self {
            argument,
            expected,
            actual: kind_name(actual),
        }
    }
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "argument `{}` must be a {}, got {}",
            self.argument, self.expected, self.actual
        )
    }
}

/// Result of a pass-through filter.
///
/// `Transformed` carries the filter's output. `Rejected` means the filter did
/// nothing and carries the input unchanged, so callers can tell "did nothing"
/// apart from "succeeded with the same value".
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Transformed(T),
    Rejected { input: Value, reason: TypeMismatch },
}

impl<T> Outcome<T> {
    pub fn is_transformed(&self) -> bool {
        matches!(self, Outcome::Transformed(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }

    /// Returns the transformed value, if any.
    pub fn transformed(self) -> Option<T> {
        match self {
            Outcome::Transformed(value) => Some(value),
            Outcome::Rejected { .. } => None,
        }
    }
}

impl<T: Into<Value>> Outcome<T> {
    /// Collapses the outcome into the value handed back to the template.
    ///
    /// A rejected input is returned unchanged.
    pub fn into_value(self) -> Value {
        match self {
            Outcome::Transformed(value) => value.into(),
            Outcome::Rejected { input, .. } => input,
        }
    }
}
