// tunables for a SectionMap, meant to be embedded in the host adapter's config
use serde::{Deserialize, Serialize};

/// What `update_item` does when no stored item has the same identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingUpdatePolicy {
    /// Leave the map untouched and report `Ok(None)`.
    #[default]
    Ignore,
    /// Fail with `SectionMapError::ItemNotFound`.
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionMapConfig {
    /// Pre-allocation hint for all lookup tables.
    pub capacity: usize,
    pub missing_update: MissingUpdatePolicy,
}

impl SectionMapConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity, ..Self::default() }
    }

    pub fn strict() -> Self {
        Self { missing_update: MissingUpdatePolicy::Reject, ..Self::default() }
    }
}
