//! # Saltmill Filters - Salt-style filters for MiniJinja
//!
//! A library of stateless filters for templates rendered with
//! [MiniJinja](https://docs.rs/minijinja). They coerce values, search and
//! rewrite text with regular expressions, compute set algebra over sequences,
//! derive deterministic identifiers and extract entries from tag mappings.
//!
//! ## Quick Start
//!
//! ```rust
//! use minijinja::{context, Environment};
//! use saltmill_filters::FilterRegistry;
//!
//! let mut env = Environment::new();
//! FilterRegistry::default().install(&mut env);
//!
//! let out = env
//!     .render_str(r#"{{ 'a b c' | regex_replace('\\s+', '_') }}"#, context! {})
//!     .unwrap();
//! assert_eq!(out, "a_b_c");
//! ```
//!
//! ## Hashable vs. unhashable inputs
//!
//! `unique`, `union`, `intersect`, `difference` and `symmetric_difference`
//! check whether every element can be a set member ([`is_hashable`]). If so
//! they return a set whose order is unspecified. If not, they fall back to
//! linear scans that keep first-occurrence order. See [`SetStrategy`].
//!
//! ## Pass-through on type mismatch
//!
//! `list_with_tag` and `interpolate_list_with_tag` return their input
//! unchanged when handed the wrong kinds of arguments. The typed functions in
//! [`filters`] report this as [`Outcome::Rejected`]; the registered filters
//! hand the input back to the template.
//!
//! ## Deterministic identifiers
//!
//! The `uuid` filter derives a version-5 UUID from the namespace in
//! [`FilterConfig`]. The default is [`DEFAULT_UUID_NAMESPACE`].
//!
//! ## Errors
//!
//! `min`/`max` of an empty sequence, `avg` of an empty sequence and invalid
//! regex patterns are [`FilterError`]s and abort the render.

pub mod config;
pub mod error;
pub mod filters;
pub mod outcome;
pub mod registry;
pub mod value;

pub use config::{FilterConfig, DEFAULT_UUID_NAMESPACE};
pub use error::{FilterError, Result};
pub use filters::{BoolRule, RegexFlags, SetResult, SetStrategy};
pub use outcome::{Outcome, TypeMismatch};
pub use registry::{FilterFn, FilterRegistry, FILTER_NAMES, LEGACY_ALIASES};
pub use value::{all_hashable, is_hashable};
