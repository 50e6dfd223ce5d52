//! Tag-indexed extraction from mappings.
//!
//! A tag mapping maps keys to sequences of tag strings:
//!
//! ```yaml
//! items:
//!   item1: [tag1, tag2]
//!   item2: [tag1]
//! ```
//!
//! Both filters return their first argument unchanged when it is not a mapping
//! or the other arguments are not strings. The [`Outcome`] says which happened.

use minijinja::value::ValueKind;
use minijinja::Value;

use crate::error::{FilterError, Result};
use crate::outcome::{Outcome, TypeMismatch};
use crate::value::contains;

fn check_args(mapping: &Value, tag: &Value) -> std::result::Result<(), TypeMismatch> {
    if mapping.kind() != ValueKind::Map {
        return Err(TypeMismatch::new("dct", "map", mapping));
    }
    if tag.as_str().is_none() {
        return Err(TypeMismatch::new("tag", "string", tag));
    }
    Ok(())
}

fn tagged_keys(mapping: &Value, tag: &Value) -> Vec<Value> {
    let Ok(keys) = mapping.try_iter() else {
        return Vec::new();
    };
    keys.filter(|key| {
        mapping
            .get_item(key)
            .map_or(false, |tags| contains(&tags, tag))
    })
    .collect()
}

/// Keys of `mapping` whose tags include `tag`, in the mapping's iteration order.
pub fn list_with_tag(mapping: &Value, tag: &Value) -> Outcome<Vec<Value>> {
    match check_args(mapping, tag) {
        Ok(()) => Outcome::Transformed(tagged_keys(mapping, tag)),
        Err(reason) => Outcome::Rejected {
            input: mapping.clone(),
            reason,
        },
    }
}

/// Like [`list_with_tag`], with each key substituted into `format`.
///
/// `format` holds exactly one `%s` placeholder; `%%` is a literal percent.
/// The format is only checked once some key carries the tag.
pub fn interpolate_list_with_tag(
    mapping: &Value,
    tag: &Value,
    format: &Value,
) -> Result<Outcome<Vec<Value>>> {
    let checked = check_args(mapping, tag).and_then(|()| {
        format
            .as_str()
            .ok_or_else(|| TypeMismatch::new("interpolation", "string", format))
    });
    let format = match checked {
        Ok(format) => format,
        Err(reason) => {
            return Ok(Outcome::Rejected {
                input: mapping.clone(),
                reason,
            })
        }
    };

    let keys = tagged_keys(mapping, tag);
    if keys.is_empty() {
        return Ok(Outcome::Transformed(keys));
    }

    let pieces = split_format(format)?;
    let items = keys
        .into_iter()
        .map(|key| {
            let key = key.as_str().map_or_else(|| key.to_string(), str::to_string);
            Value::from(format!("{}{}{}", pieces.0, key, pieces.1))
        })
        .collect();
    Ok(Outcome::Transformed(items))
}

/// Splits a single-placeholder format into the text before and after `%s`.
fn split_format(format: &str) -> Result<(String, String)> {
    let mut before = String::new();
    let mut after = String::new();
    let mut seen = false;
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        let out = if seen { &mut after } else { &mut before };
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some('s') if !seen => seen = true,
            Some('s') => return Err(interpolation(format, "more than one %s placeholder")),
            _ => return Err(interpolation(format, "unsupported format specifier")),
        }
    }

    if !seen {
        return Err(interpolation(format, "no %s placeholder"));
    }
    Ok((before, after))
}

fn interpolation(format: &str, reason: &'static str) -> FilterError {
    FilterError::Interpolation {
        format: format.to_string(),
        reason,
    }
}
