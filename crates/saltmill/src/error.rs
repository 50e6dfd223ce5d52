//! Error types for the command-line harness.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a harness run.
///
/// A context document that fails to parse is not one of them: it is reported
/// and rendering continues without a context.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A context or template file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template path has no usable file name.
    #[error("invalid template path: {}", .0.display())]
    TemplatePath(PathBuf),

    /// Template lookup, syntax or render failure, including fatal filter errors.
    #[error("template error: {0:#}")]
    Template(#[from] minijinja::Error),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
