//! Container registry: builds the container forest from directives and
//! hands out independent copies by name.

use crate::config::RegistryConfig;
use crate::container::Container;

/// Ordered registry of top-level containers.
///
/// Lookups return a structural deep copy, never the live entry — a caller's
/// loot session mutates its own tree without touching the canonical one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRegistry {
    containers: Vec<Container>,
}

impl ContainerRegistry {
    /// Assemble the forest from the four directive groups, each processed
    /// fully before the next: regular containers, composites, magic copies
    /// of regulars, magic copies of composites.
    ///
    /// A directive referencing an unregistered name is skipped with a
    /// warning; loading favours partial success over aborting.
    pub fn build(config: RegistryConfig) -> Self {
        let mut registry = Self::default();

        for spec in config.containers {
            registry
                .containers
                .push(Container::new(spec.name, spec.tare_weight, spec.capacity));
        }

        for spec in config.composites {
            let mut mother = Container::new(spec.name, 0, 0);
            for member in &spec.members {
                match registry.find(member) {
                    Some(sub) => mother.attach(sub),
                    None => tracing::warn!(
                        member = %member,
                        mother = %mother.name(),
                        "composite member not registered; skipping"
                    ),
                }
            }
            registry.containers.push(mother);
        }

        for spec in config.magic.into_iter().chain(config.magic_composites) {
            match registry.find(&spec.source) {
                Some(source) => registry.containers.push(source.to_magic(spec.name)),
                None => tracing::warn!(
                    source = %spec.source,
                    magic = %spec.name,
                    "magic conversion source not registered; skipping"
                ),
            }
        }

        tracing::debug!(count = registry.len(), "container registry built");
        registry
    }

    /// Trimmed, case-insensitive lookup returning an independent deep copy.
    /// A miss is a normal empty result, not an error.
    pub fn find(&self, name: &str) -> Option<Container> {
        let needle = name.trim();
        self.containers
            .iter()
            .find(|container| container.name().trim().eq_ignore_ascii_case(needle))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.containers.iter().map(Container::name).collect()
    }

    /// Render every registered container's tree, ordered by name.
    pub fn render_all(&self) -> String {
        let mut sorted: Vec<&Container> = self.containers.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
            .iter()
            .map(|container| container.list_items())
            .collect()
    }
}
