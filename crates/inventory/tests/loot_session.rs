//! Black-box loot session: build catalogs from serde input, pick a
//! container, loot against it, and check the rendered state.

use serde_json::json;
use stowage_inventory::{CatalogConfig, ContainerRegistry, ItemCatalog, RegistryConfig};

fn sample_registry() -> ContainerRegistry {
    let config: RegistryConfig = serde_json::from_value(json!({
        "containers": [
            { "name": "Backpack", "tare_weight": 2, "capacity": 10 },
            { "name": "Pouch", "tare_weight": 1, "capacity": 3 }
        ],
        "composites": [
            { "name": "Rig", "members": ["Backpack", "Pouch"] }
        ],
        "magic": [
            { "name": "Enchanted Backpack", "source": "Backpack" }
        ]
    }))
    .expect("registry config deserializes");
    ContainerRegistry::build(config)
}

fn sample_catalog() -> ItemCatalog {
    let config: CatalogConfig = serde_json::from_value(json!({
        "items": [
            { "name": "Rope", "weight": 5 },
            { "name": "Anvil", "weight": 8 },
            { "name": "Flint", "weight": 1 }
        ]
    }))
    .expect("catalog config deserializes");
    ItemCatalog::build(config)
}

#[test]
fn loot_session_against_a_plain_container() {
    let catalog = sample_catalog();
    let registry = sample_registry();

    let mut session = registry.find("backpack").expect("backpack registered");

    let rope = catalog.find("Rope").expect("rope in catalog");
    let placement = session.add_item(rope).expect("rope fits");
    assert_eq!(placement.container, "Backpack");

    // 5 used of 10: the anvil (8) no longer fits, and the rejection leaves
    // the session untouched.
    let anvil = catalog.find("Anvil").expect("anvil in catalog");
    session.add_item(anvil).expect_err("anvil rejected");
    assert_eq!(session.used_capacity(), 5);

    assert_eq!(
        session.list_items(),
        "Backpack (total weight: 7, empty weight: 2, capacity: 5/10)\n\
         \u{20}  Rope (weight: 5)\n"
    );

    // The canonical registry entry never saw any of this.
    assert_eq!(registry.find("Backpack").unwrap().child_count(), 0);
}

#[test]
fn loot_session_against_a_composite_lands_in_members_first() {
    let catalog = sample_catalog();
    let registry = sample_registry();

    let mut rig = registry.find("Rig").expect("rig registered");
    assert_eq!(rig.capacity(), 13);

    // First fit: the backpack member takes the rope; success is attributed
    // to the rig the session targeted.
    let placement = rig.add_item(catalog.find("Rope").unwrap()).unwrap();
    assert_eq!(placement.container, "Rig");

    let listing = rig.list_items();
    assert!(listing.starts_with("Rig (total weight: 8, empty weight: 3, capacity: 0/0)\n"));
    assert!(listing.contains("Rope (weight: 5)"));
}

#[test]
fn loot_session_against_a_magic_container_stays_weightless() {
    let catalog = sample_catalog();
    let registry = sample_registry();

    let mut magic = registry.find("Enchanted Backpack").expect("magic registered");
    magic.add_item(catalog.find("Rope").unwrap()).unwrap();
    magic.add_item(catalog.find("Flint").unwrap()).unwrap();

    assert_eq!(magic.total_carried_weight(), 2);
    assert_eq!(magic.used_capacity(), 6);
}
