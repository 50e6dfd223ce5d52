//! # Saltmill - render Jinja templates with Salt-style filters
//!
//! The harness loads a context document, merges the filters from
//! [`saltmill_filters`] into a MiniJinja environment and renders a template
//! against the context.
//!
//! ```rust
//! use saltmill::{run, Cli};
//!
//! let mut out = Vec::new();
//! run(&Cli { demo: true, ..Cli::default() }, &mut out).unwrap();
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.starts_with("Pillar data:"));
//! assert!(out.contains("roles:     admin, dev"));
//! ```

pub mod cli;
pub mod context;
pub mod demo;
pub mod engine;
pub mod error;

pub use cli::{run, usage, usage_error, Cli, USAGE_EXIT_CODE};
pub use context::Context;
pub use engine::Engine;
pub use error::HarnessError;
