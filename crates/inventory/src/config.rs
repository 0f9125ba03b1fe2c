//! Construction directives for catalogs and registries.
//!
//! All types are plain serde-friendly data; nothing here touches the
//! filesystem. Callers hand fully built configs to [`crate::ItemCatalog`]
//! and [`crate::ContainerRegistry`] — there are no implicit config paths.

use serde::{Deserialize, Serialize};

/// One catalog item: `(name, weight)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub weight: u32,
}

/// One regular container: `(name, tare_weight, capacity)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub name: String,
    pub tare_weight: u32,
    pub capacity: u32,
}

/// One composite container: a mother assembled from already-registered
/// containers looked up by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeSpec {
    pub name: String,
    pub members: Vec<String>,
}

/// One magic conversion: a new magic container copied from a registered
/// source. The source stays registered unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicSpec {
    pub name: String,
    pub source: String,
}

/// Item catalog input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub items: Vec<ItemSpec>,
}

/// Container registry input: four independent directive groups, processed
/// fully in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
    #[serde(default)]
    pub composites: Vec<CompositeSpec>,
    #[serde(default)]
    pub magic: Vec<MagicSpec>,
    #[serde(default)]
    pub magic_composites: Vec<MagicSpec>,
}
