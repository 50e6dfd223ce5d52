//! Library configuration.

use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

/// Namespace used by the `uuid` filter unless configured otherwise.
///
/// This is Salt's `GLOBAL_UUID`, so identifiers match the ones Salt states
/// render for the same input.
pub const DEFAULT_UUID_NAMESPACE: Uuid = uuid!("91633ebf-1c86-5e33-935a-28061f4b480e");

/// Immutable settings injected into a [`FilterRegistry`](crate::FilterRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Namespace for version-5 identifiers derived by the `uuid` filter.
    pub uuid_namespace: Uuid,
}

impl FilterConfig {
    pub fn with_namespace(uuid_namespace: Uuid) -> Self {
        Self { uuid_namespace }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            uuid_namespace: DEFAULT_UUID_NAMESPACE,
        }
    }
}
