//! Integration tests for StandardName

use std::collections::{BTreeSet, HashSet};

use stdnames_grammar::{ErrorKind, StandardName};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_exposes_parts() {
    let name = StandardName::new("air__log_of_pressure").unwrap();
    assert_eq!(name.name(), "air__log_of_pressure");
    assert_eq!(name.object(), "air");
    assert_eq!(name.quantity(), "pressure");
    assert_eq!(name.operators(), ["log"]);
}

#[test]
fn new_rejects_bad_names() {
    let err = StandardName::new("air_temperature").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::BadName(_)));
}

#[test]
fn parse_and_try_from() {
    let parsed: StandardName = "air__temperature".parse().unwrap();
    let converted = StandardName::try_from("air__temperature").unwrap();
    assert_eq!(parsed, converted);
    assert!(StandardName::try_from(String::from("bad")).is_err());
}

#[test]
fn from_parts_builds_name() {
    let name = StandardName::from_parts("air", "pressure", &["log"]).unwrap();
    assert_eq!(name, "air__log_of_pressure");
}

// =============================================================================
// Reconstruction
// =============================================================================

#[test]
fn with_methods_return_new_names() {
    let name = StandardName::new("air__temperature").unwrap();

    let water = name.with_object("water").unwrap();
    assert_eq!(water, "water__temperature");
    assert_eq!(name, "air__temperature");

    let speed = name.with_quantity("speed").unwrap();
    assert_eq!(speed.name(), "air__speed");

    let mean = name.with_operators(&["mean"]).unwrap();
    assert_eq!(mean.name(), "air__mean_of_temperature");
}

#[test]
fn with_object_rejects_bad_parts() {
    let name = StandardName::new("air__temperature").unwrap();
    assert!(name.with_object("Air").is_err());
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn equality_and_hash_use_full_name() {
    let a = StandardName::new("air__temperature").unwrap();
    let b = StandardName::new("air__temperature").unwrap();

    let set: HashSet<StandardName> = [a.clone(), b].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert_eq!(a.to_string(), "air__temperature");
}

#[test]
fn ordering_is_lexicographic() {
    let names: BTreeSet<StandardName> = ["water__temperature", "air__temperature"]
        .into_iter()
        .map(|name| StandardName::new(name).unwrap())
        .collect();
    let names: Vec<&str> = names.iter().map(StandardName::name).collect();
    assert_eq!(names, ["air__temperature", "water__temperature"]);
}
