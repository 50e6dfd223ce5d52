//! The filter functions.
//!
//! Each function here is pure and typed against [`minijinja::Value`]. The
//! [`FilterRegistry`](crate::FilterRegistry) adapts them to the engine's
//! calling convention.
//!
//! | Name | Function |
//! |------|----------|
//! | `skip` | [`skip`] |
//! | `sequence` | [`ensure_sequence`] |
//! | `to_bool` | [`to_bool`] |
//! | `quote` | [`quote`] |
//! | `regex_escape` | [`regex_escape`] |
//! | `regex_search` | [`regex_search`] |
//! | `regex_match` | [`regex_match`] |
//! | `regex_replace` | [`regex_replace`] |
//! | `uuid` | [`deterministic_id`] |
//! | `unique` | [`unique`] |
//! | `min`, `max`, `avg` | [`min`], [`max`], [`average`] |
//! | `union`, `intersect`, `difference`, `symmetric_difference` | [`union`], [`intersect`], [`difference`], [`symmetric_difference`] |
//! | `list_with_tag` | [`list_with_tag`] |
//! | `interpolate_list_with_tag` | [`interpolate_list_with_tag`] |

mod aggregate;
mod coerce;
mod ident;
mod sets;
mod tags;
mod text;

pub use aggregate::{average, max, min};
pub use coerce::{ensure_sequence, skip, to_bool, to_bool_with_rule, BoolRule};
pub use ident::deterministic_id;
pub use sets::{
    difference, intersect, symmetric_difference, union, unique, unique_ordered, SetResult,
    SetStrategy,
};
pub use tags::{interpolate_list_with_tag, list_with_tag};
pub use text::{quote, regex_escape, regex_match, regex_replace, regex_search, Groups, RegexFlags};
