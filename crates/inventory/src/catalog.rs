//! Item catalog: the lookup collaborator the loot session draws items from.

use crate::config::CatalogConfig;
use crate::item::Item;

/// Ordered catalog of loose items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn build(config: CatalogConfig) -> Self {
        Self {
            items: config
                .items
                .into_iter()
                .map(|spec| Item::new(spec.name, spec.weight))
                .collect(),
        }
    }

    /// Trimmed, case-insensitive lookup. Returns an owned copy; a miss is a
    /// normal empty result, not an error.
    pub fn find(&self, name: &str) -> Option<Item> {
        let needle = name.trim();
        self.items
            .iter()
            .find(|item| item.name().trim().eq_ignore_ascii_case(needle))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// One line per item, sorted by name.
    pub fn render(&self) -> String {
        let mut sorted: Vec<&Item> = self.items.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted.iter().map(|item| format!("{item}\n")).collect()
    }
}
