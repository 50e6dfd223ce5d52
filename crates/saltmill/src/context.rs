//! Context documents.
//!
//! A context document is a YAML file (JSON works too, being a YAML subset)
//! whose top-level mapping becomes the template's variables.

use std::fs;
use std::path::Path;

use minijinja::{context, Value};

use crate::error::HarnessError;

/// A loaded context document.
#[derive(Debug, Clone, PartialEq)]
pub enum Context {
    /// The document parsed.
    Loaded(serde_yaml::Value),
    /// The document did not parse. Rendering proceeds with no variables.
    Malformed(String),
}

impl Context {
    /// Parses a context document from text.
    ///
    /// Parse failures are not errors: they yield [`Context::Malformed`].
    pub fn parse(text: &str) -> Self {
        match serde_yaml::from_str(text) {
            Ok(value) => Context::Loaded(value),
            Err(err) => {
                tracing::warn!(error = %err, "context document did not parse");
                Context::Malformed(err.to_string())
            }
        }
    }

    /// Reads and parses a context document from `path`.
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded context document");
        Ok(Self::parse(&text))
    }

    /// The parse error, if the document was malformed.
    pub fn parse_error(&self) -> Option<&str> {
        match self {
            Context::Loaded(_) => None,
            Context::Malformed(msg) => Some(msg),
        }
    }

    /// The value handed to the template engine.
    pub fn to_value(&self) -> Value {
        match self {
            Context::Loaded(value) => Value::from_serialize(value),
            Context::Malformed(_) => context! {},
        }
    }

    /// Human-readable dump of the context, one tab-indented YAML line per row.
    pub fn describe(&self) -> String {
        let yaml = match self {
            Context::Loaded(value) => {
                serde_yaml::to_string(value).unwrap_or_else(|_| "~".to_string())
            }
            Context::Malformed(_) => "~".to_string(),
        };
        yaml.lines()
            .map(|line| format!("\t{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
