//! Filter registration.
//!
//! [`FilterRegistry`] maps filter names to type-erased functions. The host
//! engine merges it into its own namespace with [`FilterRegistry::install`];
//! the registry never reaches into engine state on its own.
//!
//! ```rust
//! use minijinja::{context, Environment};
//! use saltmill_filters::FilterRegistry;
//!
//! let mut env = Environment::new();
//! FilterRegistry::default().install(&mut env);
//!
//! let out = env
//!     .render_str("{{ 'yes' | to_bool }} {{ 'a b' | quote }}", context! {})
//!     .unwrap();
//! assert_eq!(out, "True 'a b'");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use minijinja::value::{from_args, Kwargs, Rest};
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::config::FilterConfig;
use crate::filters::{self, BoolRule, Groups, RegexFlags};
use crate::outcome::Outcome;
use crate::value::{kind_name, to_text};

/// A filter as the engine sees it: positional values in, one value out.
///
/// The first element of the slice is the filtered value. Keyword arguments,
/// when given, arrive as a trailing kwargs value.
pub type FilterFn = Arc<dyn Fn(&[Value]) -> Result<Value, Error> + Send + Sync>;

/// Names every registry exposes.
pub const FILTER_NAMES: &[&str] = &[
    "skip",
    "sequence",
    "to_bool",
    "quote",
    "regex_escape",
    "regex_search",
    "regex_match",
    "regex_replace",
    "uuid",
    "unique",
    "min",
    "max",
    "avg",
    "union",
    "intersect",
    "difference",
    "symmetric_difference",
    "list_with_tag",
    "interpolate_list_with_tag",
];

/// Older names still found in templates, paired with the filter they stand for.
pub const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("skip_filter", "skip"),
    ("ensure_sequence_filter", "sequence"),
    ("uuid_", "uuid"),
    ("lst_min", "min"),
    ("lst_max", "max"),
    ("lst_avg", "avg"),
];

/// Named filters ready to be merged into a template engine.
#[derive(Clone)]
pub struct FilterRegistry {
    config: FilterConfig,
    filters: BTreeMap<&'static str, FilterFn>,
}

impl FilterRegistry {
    /// Builds the registry with every filter in [`FILTER_NAMES`].
    pub fn new(config: FilterConfig) -> Self {
        let mut registry = Self {
            config,
            filters: BTreeMap::new(),
        };
        registry.register_coercion();
        registry.register_text();
        registry.register_identity();
        registry.register_sets();
        registry.register_aggregates();
        registry.register_tags();
        registry
    }

    /// Also exposes the names in [`LEGACY_ALIASES`].
    pub fn with_legacy_aliases(mut self) -> Self {
        for (alias, target) in LEGACY_ALIASES {
            if let Some(f) = self.filters.get(*target).cloned() {
                self.filters.insert(*alias, f);
            }
        }
        self
    }

    /// The configuration the filters were built with.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.keys().copied()
    }

    pub fn get(&self, name: &str) -> Option<&FilterFn> {
        self.filters.get(name)
    }

    /// Invokes a filter by name, outside any engine.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, Error> {
        let f = self.get(name).ok_or_else(|| {
            Error::new(ErrorKind::UnknownFilter, format!("filter {name} is unknown"))
        })?;
        f(args)
    }

    /// Merges every filter into `env`, replacing built-ins of the same name.
    pub fn install(&self, env: &mut Environment<'_>) {
        for (name, f) in &self.filters {
            let f = Arc::clone(f);
            env.add_filter(*name, move |args: Rest<Value>| f(&args[..]));
        }
    }

    fn add<F>(&mut self, name: &'static str, f: F)
    where
        F: Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        self.filters.insert(name, Arc::new(f));
    }

    fn register_coercion(&mut self) {
        self.add("skip", |args| {
            let (value,): (Value,) = from_args(args)?;
            Ok(Value::from(filters::skip(&value)))
        });

        self.add("sequence", |args| {
            let (value,): (Value,) = from_args(args)?;
            Ok(filters::ensure_sequence(value))
        });

        self.add("to_bool", |args| {
            let (value,): (Value,) = from_args(args)?;
            let (result, rule) = filters::to_bool_with_rule(&value);
            if rule == BoolRule::Fallback {
                tracing::debug!(
                    filter = "to_bool",
                    kind = kind_name(&value),
                    "hashable value of no known kind is false"
                );
            }
            Ok(Value::from(result))
        });
    }

    fn register_text(&mut self) {
        self.add("quote", |args| {
            let (value,): (Value,) = from_args(args)?;
            Ok(Value::from(filters::quote(&to_text(&value)).into_owned()))
        });

        self.add("regex_escape", |args| {
            let (value,): (Value,) = from_args(args)?;
            Ok(Value::from(filters::regex_escape(&to_text(&value))))
        });

        self.add("regex_search", |args| {
            let (text, pattern, kwargs): (Value, String, Kwargs) = from_args(args)?;
            let flags = regex_flags(&kwargs)?;
            let found = filters::regex_search(&to_text(&text), &pattern, flags)?;
            Ok(groups_value(found))
        });

        self.add("regex_match", |args| {
            let (text, pattern, kwargs): (Value, String, Kwargs) = from_args(args)?;
            let flags = regex_flags(&kwargs)?;
            let found = filters::regex_match(&to_text(&text), &pattern, flags)?;
            Ok(groups_value(found))
        });

        self.add("regex_replace", |args| {
            let (text, pattern, replacement, kwargs): (Value, String, String, Kwargs) =
                from_args(args)?;
            let flags = regex_flags(&kwargs)?;
            let replaced = filters::regex_replace(&to_text(&text), &pattern, &replacement, flags)?;
            Ok(Value::from(replaced))
        });
    }

    fn register_identity(&mut self) {
        let namespace = self.config.uuid_namespace;
        self.add("uuid", move |args| {
            let (value,): (Value,) = from_args(args)?;
            Ok(Value::from(
                filters::deterministic_id(&namespace, &value).to_string(),
            ))
        });
    }

    fn register_sets(&mut self) {
        self.add("unique", |args| {
            let (values,): (Value,) = from_args(args)?;
            Ok(filters::unique(&values)?.into())
        });
        self.add("union", |args| {
            let (a, b): (Value, Value) = from_args(args)?;
            Ok(filters::union(&a, &b)?.into())
        });
        self.add("intersect", |args| {
            let (a, b): (Value, Value) = from_args(args)?;
            Ok(filters::intersect(&a, &b)?.into())
        });
        self.add("difference", |args| {
            let (a, b): (Value, Value) = from_args(args)?;
            Ok(filters::difference(&a, &b)?.into())
        });
        self.add("symmetric_difference", |args| {
            let (a, b): (Value, Value) = from_args(args)?;
            Ok(filters::symmetric_difference(&a, &b)?.into())
        });
    }

    fn register_aggregates(&mut self) {
        self.add("min", |args| {
            let (values,): (Value,) = from_args(args)?;
            Ok(filters::min(&values)?)
        });
        self.add("max", |args| {
            let (values,): (Value,) = from_args(args)?;
            Ok(filters::max(&values)?)
        });
        self.add("avg", |args| {
            let (values,): (Value,) = from_args(args)?;
            Ok(Value::from(filters::average(&values)?))
        });
    }

    fn register_tags(&mut self) {
        self.add("list_with_tag", |args| {
            let (mapping, tag): (Value, Value) = from_args(args)?;
            Ok(pass_through(
                "list_with_tag",
                filters::list_with_tag(&mapping, &tag),
            ))
        });
        self.add("interpolate_list_with_tag", |args| {
            let (mapping, tag, format): (Value, Value, Value) = from_args(args)?;
            Ok(pass_through(
                "interpolate_list_with_tag",
                filters::interpolate_list_with_tag(&mapping, &tag, &format)?,
            ))
        });
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("config", &self.config)
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Reads the `ignorecase` and `multiline` keyword flags.
fn regex_flags(kwargs: &Kwargs) -> Result<RegexFlags, Error> {
    let ignorecase = kwargs.get::<Option<bool>>("ignorecase")?.unwrap_or(false);
    let multiline = kwargs.get::<Option<bool>>("multiline")?.unwrap_or(false);
    kwargs.assert_all_used()?;
    Ok(RegexFlags::new(ignorecase, multiline))
}

/// No match renders as nothing.
fn groups_value(found: Option<Groups>) -> Value {
    match found {
        Some(groups) => groups
            .into_iter()
            .map(|group| group.map_or_else(|| Value::from(()), Value::from))
            .collect(),
        None => Value::UNDEFINED,
    }
}

fn pass_through(filter: &'static str, outcome: Outcome<Vec<Value>>) -> Value {
    if let Outcome::Rejected { reason, .. } = &outcome {
        tracing::debug!(filter, %reason, "input returned unchanged");
    }
    outcome.into_value()
}
