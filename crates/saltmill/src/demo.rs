//! Built-in demo context and template.

/// Demo context document.
pub const DEMO_CONTEXT: &str = include_str!("../demo/demo.yaml");

/// Demo template exercising every filter family.
pub const DEMO_TEMPLATE: &str = include_str!("../demo/demo.j2");

/// Name the demo template is registered under.
pub const DEMO_TEMPLATE_NAME: &str = "demo.j2";
