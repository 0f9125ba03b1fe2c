//! Inventory domain: hierarchical containers with weight-capacity placement.
//!
//! This crate contains business rules only, implemented purely as
//! deterministic domain logic (no IO, no prompts, no file formats). The
//! surrounding shell feeds it directives and renders what it returns.

pub mod catalog;
pub mod config;
pub mod container;
pub mod item;
pub mod registry;

pub use catalog::ItemCatalog;
pub use config::{CatalogConfig, CompositeSpec, ContainerSpec, ItemSpec, MagicSpec, RegistryConfig};
pub use container::{Container, ContainerKind, Node, Placement};
pub use item::Item;
pub use registry::ContainerRegistry;
