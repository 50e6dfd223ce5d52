//! Command-line surface.
//!
//! ```text
//! saltmill [-d] [-p <context>] [-t <template>] [--namespace <uuid>]
//! ```
//!
//! Omitting `-p` or `-t` falls back to the built-in demo file for that role;
//! `-d` uses both demo files regardless of the others.

use std::io::Write;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use saltmill_filters::{FilterConfig, FilterRegistry};
use uuid::Uuid;

use crate::context::Context;
use crate::demo::{DEMO_CONTEXT, DEMO_TEMPLATE, DEMO_TEMPLATE_NAME};
use crate::engine::Engine;
use crate::error::HarnessError;

/// Exit status for malformed command lines.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Render a template against a context document with Salt-style filters.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "saltmill", version)]
pub struct Cli {
    /// Run with the built-in demo context and template
    #[arg(short, long)]
    pub demo: bool,

    /// Context document to render with (YAML or JSON)
    #[arg(short, long, value_name = "PATH")]
    pub pillar: Option<PathBuf>,

    /// Template to render
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Namespace for identifiers produced by the `uuid` filter
    #[arg(long, value_name = "UUID")]
    pub namespace: Option<Uuid>,
}

impl Cli {
    pub fn filter_config(&self) -> FilterConfig {
        self.namespace
            .map(FilterConfig::with_namespace)
            .unwrap_or_default()
    }

    fn pillar_path(&self) -> Option<&PathBuf> {
        self.pillar.as_ref().filter(|_| !self.demo)
    }

    fn template_path(&self) -> Option<&PathBuf> {
        self.template.as_ref().filter(|_| !self.demo)
    }
}

/// Full help text.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Message printed for a command line that does not parse: the error, then usage.
pub fn usage_error(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");
    format!("\nERROR: {message}\n\n{}", usage())
}

/// Loads the context, prints it, then renders and prints the template.
///
/// A malformed context document is reported on stderr and the template is
/// rendered without variables.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), HarnessError> {
    let registry = FilterRegistry::new(cli.filter_config()).with_legacy_aliases();
    let mut engine = Engine::new(&registry);

    let context = match cli.pillar_path() {
        Some(path) => Context::load(path)?,
        None => Context::parse(DEMO_CONTEXT),
    };
    if let Some(err) = context.parse_error() {
        eprintln!("{err}");
    }

    writeln!(out, "Pillar data:")?;
    writeln!(out, "{}", context.describe())?;
    writeln!(out, "Template:")?;

    let rendered = match cli.template_path() {
        Some(path) => engine.render_file(path, &context)?,
        None => {
            engine.add_template(DEMO_TEMPLATE_NAME, DEMO_TEMPLATE)?;
            engine.render_named(DEMO_TEMPLATE_NAME, &context)?
        }
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
