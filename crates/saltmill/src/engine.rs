//! The render pass.
//!
//! [`Engine`] wraps a MiniJinja environment with the filter registry merged
//! in. Templates are loaded from the filesystem relative to their own
//! directory, so `{% include %}` of sibling files works.

use std::path::Path;

use minijinja::{path_loader, AutoEscape, Environment};
use saltmill_filters::FilterRegistry;

use crate::context::Context;
use crate::error::HarnessError;

/// MiniJinja environment with the filters installed.
///
/// # Example
///
/// ```rust
/// use saltmill::{Context, Engine};
/// use saltmill_filters::FilterRegistry;
///
/// let engine = Engine::new(&FilterRegistry::default());
/// let ctx = Context::parse("roles: [admin, dev, admin]");
/// let out = engine
///     .render_str("{{ roles | unique | sort | join(',') }}", &ctx)
///     .unwrap();
/// assert_eq!(out, "admin,dev");
/// ```
pub struct Engine {
    env: Environment<'static>,
}

impl Engine {
    /// Creates an environment with every filter in `registry` installed.
    ///
    /// Output is never HTML-escaped: templates render configuration and
    /// plain text.
    pub fn new(registry: &FilterRegistry) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        registry.install(&mut env);
        Self { env }
    }

    /// Renders template source directly.
    pub fn render_str(&self, source: &str, ctx: &Context) -> Result<String, HarnessError> {
        Ok(self.env.render_str(source, ctx.to_value())?)
    }

    /// Registers a named template that lives in memory.
    pub fn add_template(
        &mut self,
        name: &'static str,
        source: &'static str,
    ) -> Result<(), HarnessError> {
        self.env.add_template(name, source)?;
        Ok(())
    }

    /// Renders a template previously registered or reachable through the loader.
    pub fn render_named(&self, name: &str, ctx: &Context) -> Result<String, HarnessError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(ctx.to_value())?)
    }

    /// Renders the template file at `path`.
    ///
    /// The file's directory becomes the loader root.
    pub fn render_file(&mut self, path: &Path, ctx: &Context) -> Result<String, HarnessError> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| HarnessError::TemplatePath(path.to_path_buf()))?;
        let root = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };

        tracing::debug!(template = name, root = %root.display(), "rendering template file");
        self.env.set_loader(path_loader(root));
        self.render_named(name, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new(&FilterRegistry::default())
    }

    #[test]
    fn test_render_str_with_filters() {
        let ctx = Context::parse("flag: 'yes'");
        let out = engine().render_str("{{ flag | to_bool }}", &ctx).unwrap();
        assert_eq!(out, "True");
    }

    #[test]
    fn test_no_html_escaping() {
        let ctx = Context::parse("cmd: \"a & b <c>\"");
        let mut engine = engine();
        engine.add_template("page.html", "{{ cmd }}").unwrap();
        assert_eq!(engine.render_named("page.html", &ctx).unwrap(), "a & b <c>");
    }

    #[test]
    fn test_named_template() {
        let mut engine = engine();
        engine.add_template("greeting", "Hello, {{ name }}!").unwrap();
        let out = engine
            .render_named("greeting", &Context::parse("name: World"))
            .unwrap();
        assert_eq!(out, "Hello, World!");
    }

    #[test]
    fn test_malformed_context_renders_undefined() {
        let ctx = Context::parse("name: [unclosed");
        let out = engine().render_str("[{{ name }}]", &ctx).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_missing_template_file() {
        let err = engine()
            .render_file(Path::new("/nonexistent/dir/missing.j2"), &Context::parse("{}"))
            .unwrap_err();
        assert!(matches!(err, HarnessError::Template(_)));
    }

    #[test]
    fn test_fatal_filter_error_aborts() {
        let err = engine()
            .render_str("{{ [] | avg }}", &Context::parse("{}"))
            .unwrap_err();
        assert!(err.to_string().contains("division by zero"));
    }
}
