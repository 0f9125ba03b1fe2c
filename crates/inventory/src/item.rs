//! Leaf item: a named thing with a weight.

use serde::{Deserialize, Serialize};

/// A loose item. Pure value: identity is the display name, behaviour is a
/// weight query. Names are not guaranteed unique across the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    weight: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight carried when this item is picked up. For a leaf this is just
    /// the declared weight.
    pub fn current_weight(&self) -> u32 {
        self.weight
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (weight: {})", self.name, self.weight)
    }
}
