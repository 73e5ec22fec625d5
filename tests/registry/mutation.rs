//! Integration tests for adding and discarding names

use stdnames_registry::{NameSet, NamesRegistry, StandardName};

fn keys(set: &NameSet) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}

// =============================================================================
// add
// =============================================================================

#[test]
fn add_is_idempotent() {
    let mut registry = NamesRegistry::new();
    assert!(registry.add("air__temperature").unwrap());
    assert_eq!(registry.len(), 1);

    assert!(!registry.add("air__temperature").unwrap());
    assert_eq!(registry.len(), 1);
}

#[test]
fn add_rejects_bad_names() {
    let mut registry = NamesRegistry::new();
    let err = registry.add("air_temperature").unwrap_err();
    assert_eq!(err.bad_names(), ["air_temperature".to_string()]);
    assert!(registry.is_empty());
}

#[test]
fn indexes_follow_added_names() {
    let mut registry = NamesRegistry::new();
    registry.add("air__temperature").unwrap();
    registry.add("water__temperature").unwrap();

    assert_eq!(keys(&registry.objects()), ["air", "water"]);
    assert_eq!(keys(&registry.quantities()), ["temperature"]);
    assert!(registry.operators().is_empty());
    assert!(registry.is_consistent());
}

#[test]
fn operator_index_holds_owning_names() {
    let mut registry = NamesRegistry::new();
    registry.add("air__log_of_pressure").unwrap();
    registry.add("water__mean_of_log_of_depth").unwrap();

    assert_eq!(keys(&registry.operators()), ["log", "mean"]);
    assert_eq!(
        keys(&registry.names_with_operator("log")),
        ["air__log_of_pressure", "water__mean_of_log_of_depth"]
    );
    assert_eq!(keys(&registry.names_with_object("air")), ["air__log_of_pressure"]);
    assert_eq!(keys(&registry.names_with_quantity("depth")), ["water__mean_of_log_of_depth"]);
    assert!(registry.names_with_object("land").is_empty());
}

// =============================================================================
// discard
// =============================================================================

#[test]
fn discard_cleans_empty_buckets() {
    let mut registry = NamesRegistry::new();
    registry.add("air__temperature").unwrap();

    assert!(registry.discard("air__temperature"));
    assert!(!registry.objects().contains("air"));
    assert!(!registry.quantities().contains("temperature"));
    assert!(registry.is_empty());
}

#[test]
fn discard_keeps_shared_buckets() {
    let mut registry = NamesRegistry::new();
    registry.add("air__temperature").unwrap();
    registry.add("water__temperature").unwrap();

    registry.discard("air__temperature");
    assert_eq!(keys(&registry.quantities()), ["temperature"]);
    assert_eq!(keys(&registry.names_with_quantity("temperature")), ["water__temperature"]);
    assert!(registry.is_consistent());
}

#[test]
fn discard_ignores_unknown_and_invalid() {
    let mut registry = NamesRegistry::new();
    registry.add("air__temperature").unwrap();

    assert!(!registry.discard("water__temperature"));
    assert!(!registry.discard("not a name"));
    assert_eq!(registry.len(), 1);
}

// =============================================================================
// Snapshots and set algebra
// =============================================================================

#[test]
fn snapshots_are_independent() {
    let mut registry = NamesRegistry::new();
    registry.add("air__temperature").unwrap();
    let before = registry.names();

    registry.add("water__temperature").unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(registry.names().len(), 2);
}

#[test]
fn union_of_registries() {
    let mut a = NamesRegistry::with_version("1.0.0");
    a.add("air__temperature").unwrap();
    let mut b = NamesRegistry::new();
    b.add("water__temperature").unwrap();

    let both = a.union(&b);
    assert_eq!(both.len(), 2);
    assert_eq!(both.version(), "1.0.0");
    assert_eq!(a.len(), 1);
}

#[test]
fn collect_and_extend() {
    let mut registry: NamesRegistry = ["air__temperature", "water__temperature"]
        .into_iter()
        .map(|name| StandardName::new(name).unwrap())
        .collect();
    registry.extend([StandardName::new("wind__speed").unwrap()]);

    let names: Vec<&str> = registry.iter().map(String::as_str).collect();
    assert_eq!(names, ["air__temperature", "water__temperature", "wind__speed"]);
}
