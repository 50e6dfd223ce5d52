//! Error types for the filter library.
//!
//! Two classes of failure exist. Type mismatches in the extraction filters are
//! not errors at all: they surface as [`Outcome::Rejected`](crate::Outcome) and
//! the registrar hands the input back unchanged. Everything in [`FilterError`]
//! is fatal and aborts the render pass that invoked the filter.

use thiserror::Error;

/// Fatal errors raised by filters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// An aggregate was asked for the extreme of an empty sequence.
    #[error("{filter}() arg is an empty sequence")]
    EmptyInput { filter: &'static str },

    /// The average of an empty sequence was requested.
    #[error("{filter}(): division by zero on an empty sequence")]
    DivisionByZero { filter: &'static str },

    /// The pattern handed to a regex filter does not compile.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// The filter needs something it can iterate over.
    #[error("{filter}(): {kind} value is not iterable")]
    NotIterable {
        filter: &'static str,
        kind: &'static str,
    },

    /// A value could not be read as a number.
    #[error("{filter}(): cannot convert {value:?} to a float")]
    NotNumeric { filter: &'static str, value: String },

    /// A `regex_replace` replacement template is malformed.
    #[error("replacement {replacement:?}: {reason}")]
    InvalidReplacement {
        replacement: String,
        reason: &'static str,
    },

    /// The interpolation format is not a single-placeholder format string.
    #[error("interpolation format {format:?}: {reason}")]
    Interpolation {
        format: String,
        reason: &'static str,
    },
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

impl From<FilterError> for minijinja::Error {
    fn from(err: FilterError) -> Self {
        minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, err.to_string())
            .with_source(err)
    }
}
