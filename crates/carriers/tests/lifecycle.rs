//! End-to-end: provision -> checkout -> host renumbering -> teardown.

use std::sync::Arc;

use shiprate_carriers::{
    load_definitions, CarrierModule, CarrierRegistry, ConfigStore, InMemoryCarrierRegistry,
    InMemoryConfigStore, ModuleSettings,
};
use shiprate_core::CarrierId;
use shiprate_shipping::ShippingQuote;

const DEFINITIONS: &str = r#"[
    {
        "name": "Tiered by weight",
        "delay": "2-3 days",
        "config": {
            "method": "weight",
            "ranges": [
                {"lower": 0.0, "upper": 1.0},
                {"lower": 1.0, "upper": 5.0},
                {"lower": 5.0, "upper": 30.0}
            ],
            "behavior": "disable_carrier",
            "formula": {"kind": "per_range", "amounts": [490, 790, 1290]}
        }
    },
    {
        "name": "Tiered by price",
        "delay": "48h",
        "config": {
            "method": "price",
            "ranges": [
                {"lower": 0.0, "upper": 5000.0},
                {"lower": 5000.0, "upper": 10000.0}
            ],
            "behavior": "clamp_to_largest",
            "formula": {"kind": "per_range", "amounts": [700, 300], "add_base": true}
        }
    },
    {
        "name": "Flat rate",
        "config": {"method": "price", "needs_range": false, "flat_cost": 4200}
    },
    {
        "name": "Pickup",
        "config": {"method": "free", "needs_range": false}
    }
]"#;

struct Harness {
    store: Arc<InMemoryConfigStore>,
    registry: Arc<InMemoryCarrierRegistry>,
    module: CarrierModule<Arc<InMemoryConfigStore>, Arc<InMemoryCarrierRegistry>>,
}

fn harness() -> Harness {
    shiprate_observability::init();

    let store = Arc::new(InMemoryConfigStore::new());
    let registry = Arc::new(InMemoryCarrierRegistry::new());
    let module = CarrierModule::new(ModuleSettings::default(), store.clone(), registry.clone());
    Harness {
        store,
        registry,
        module,
    }
}

#[test]
fn checkout_prices_each_carrier_by_its_ranges() {
    let h = harness();
    let ids = h
        .module
        .provision(&load_definitions(DEFINITIONS).unwrap())
        .unwrap();
    let (weight, price, flat, pickup) = (ids[0], ids[1], ids[2], ids[3]);

    // Weight tiers: boundaries belong to the upper range.
    assert_eq!(h.module.order_shipping_cost(weight, 0.5).unwrap(), ShippingQuote::Cost(490));
    assert_eq!(h.module.order_shipping_cost(weight, 1.0).unwrap(), ShippingQuote::Cost(790));
    assert_eq!(h.module.order_shipping_cost(weight, 29.9).unwrap(), ShippingQuote::Cost(1_290));
    assert_eq!(
        h.module.order_shipping_cost(weight, 30.0).unwrap(),
        ShippingQuote::Inapplicable
    );

    // Price tiers clamp and add the upstream cost.
    assert_eq!(
        h.module.package_shipping_cost(price, 2_000.0, 150).unwrap(),
        ShippingQuote::Cost(850)
    );
    assert_eq!(
        h.module.package_shipping_cost(price, 250_000.0, 150).unwrap(),
        ShippingQuote::Cost(450)
    );

    assert_eq!(h.module.order_shipping_cost(flat, 99.0).unwrap(), ShippingQuote::Cost(4_200));
    assert_eq!(h.module.order_shipping_cost(pickup, 99.0).unwrap(), ShippingQuote::Cost(0));
}

#[test]
fn renumbered_carrier_keeps_pricing_and_ownership() {
    let h = harness();
    let ids = h
        .module
        .provision(&load_definitions(DEFINITIONS).unwrap())
        .unwrap();
    let old = ids[0];

    let new = h.registry.renumber(old).unwrap();
    let tracked = h.module.on_carrier_updated(old, new).unwrap();

    assert_eq!(tracked.len(), ids.len());
    assert_eq!(tracked[0], new);
    assert_eq!(&tracked[1..], &ids[1..]);
    assert!(h.module.owns(new).unwrap());
    assert!(!h.module.owns(old).unwrap());

    assert_eq!(h.module.order_shipping_cost(new, 2.0).unwrap(), ShippingQuote::Cost(790));
    assert!(h.module.order_shipping_cost(old, 2.0).is_err());

    // The host may fire the same hook twice.
    assert_eq!(h.module.on_carrier_updated(old, new).unwrap(), tracked);
}

#[test]
fn teardown_removes_renumbered_carriers_and_setting() {
    let h = harness();
    let ids = h
        .module
        .provision(&load_definitions(DEFINITIONS).unwrap())
        .unwrap();
    let new = h.registry.renumber(ids[1]).unwrap();
    h.module.on_carrier_updated(ids[1], new).unwrap();

    let removed = h.module.teardown().unwrap();
    assert_eq!(removed, vec![ids[0], new, ids[2], ids[3]]);

    for id in removed {
        assert!(h.registry.get(id).unwrap().is_none());
    }
    // The replaced record stays for history; it was never ours to delete.
    assert!(h.registry.get(ids[1]).unwrap().is_some());
    assert_eq!(h.store.get(&ModuleSettings::default().carrier_ids_key).unwrap(), None);
}

#[test]
fn corrupted_setting_does_not_break_hooks() {
    let h = harness();
    let key = ModuleSettings::default().carrier_ids_key;
    h.store.set(&key, "{corrupted".to_string()).unwrap();

    assert!(h
        .module
        .on_carrier_updated(CarrierId::new(1), CarrierId::new(2))
        .unwrap()
        .is_empty());
    assert!(h.module.teardown().unwrap().is_empty());
    assert_eq!(h.store.get(&key).unwrap(), None);
}
