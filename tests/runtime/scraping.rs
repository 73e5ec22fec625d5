//! Integration tests for scraping and validation

use std::fs;

use stdnames_runtime::{find_all_names, scrape_paths, validate_names, validate_paths};

// =============================================================================
// Scraping
// =============================================================================

#[test]
fn scrape_mixed_text() {
    let text = "\
A file with text and names (air__temperature) mixed in. Some names
have double underscores (like, Water__Temperature) by are not
valid names. Others, like water__temperature, or \"wind__speed\" are good.";

    let names: Vec<String> = find_all_names(text.lines()).into_iter().collect();
    assert_eq!(names, ["air__temperature", "water__temperature", "wind__speed"]);
}

#[test]
fn scrape_several_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.md");
    let second = dir.path().join("b.md");
    fs::write(&first, "* `air__temperature`\n").unwrap();
    fs::write(&second, "| sea_water__salinity | air__temperature |\n").unwrap();

    let names: Vec<String> = scrape_paths([&first, &second]).unwrap().into_iter().collect();
    assert_eq!(names, ["air__temperature", "sea_water__salinity"]);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn validate_lists_invalid_names() {
    let invalid: Vec<String> =
        validate_names(["air__temperature", "Water__temperature", "water_temperature"])
            .into_iter()
            .collect();
    assert_eq!(invalid, ["Water__temperature", "water_temperature"]);
}

#[test]
fn validate_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "# header\nair__temperature\n\nwater__temperature\n").unwrap();

    assert!(validate_paths([&path]).unwrap().is_empty());
}
