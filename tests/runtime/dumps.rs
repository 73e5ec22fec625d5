//! Integration tests for rendering registries

use stdnames_registry::{ErrorPolicy, NamesRegistry};
use stdnames_runtime::{Field, Format, RenderOptions, as_sql_commands, dumps, render};

fn registry() -> NamesRegistry {
    NamesRegistry::from_lines(
        ["water__temperature", "air__temperature", "air__log_of_pressure"],
        ErrorPolicy::Raise,
    )
    .unwrap()
}

// =============================================================================
// render
// =============================================================================

#[test]
fn every_format_renders_headings() {
    let options = RenderOptions::new().with_heading("names");
    let items = ["air__temperature"];

    assert_eq!(
        render(Format::Wiki, items, &options),
        "= names =\n<tt>\nair__temperature<br/>\n</tt>"
    );
    assert_eq!(render(Format::Yaml, items, &options), "names:\n  - air__temperature");
    assert_eq!(render(Format::Myst, items, &options), "# names\n* air__temperature");
    assert_eq!(render(Format::Text, items, &options), "names\nair__temperature");
}

#[test]
fn render_without_heading() {
    let options = RenderOptions::new();
    assert_eq!(render(Format::Wiki, ["a"], &options), "<tt>\na<br/>\n</tt>");
    assert_eq!(render(Format::Myst, ["a", "b"], &options), "* a\n* b");
}

// =============================================================================
// dumps
// =============================================================================

#[test]
fn dumps_myst_sections() {
    let text = dumps(&registry(), Format::Myst, &[Field::Objects, Field::Operators], true, "\n");
    assert_eq!(text, "# objects\n* air\n* water\n\n# operators\n* log");
}

#[test]
fn dumps_wiki_with_crlf() {
    let text = dumps(&registry(), Format::Wiki, &[Field::Quantities], true, "\r\n");
    assert_eq!(text, "= quantities =\r\n<tt>\r\npressure<br/>\r\ntemperature<br/>\r\n</tt>");
}

// =============================================================================
// SQL
// =============================================================================

#[test]
fn sql_tables_are_alphabetical() {
    let sql = as_sql_commands(&registry(), "\n");
    let tables: Vec<&str> = sql
        .lines()
        .filter_map(|line| line.strip_prefix("CREATE TABLE "))
        .map(|rest| rest.trim_end_matches(" ("))
        .collect();
    assert_eq!(tables, ["names", "objects", "operators", "quantities"]);
}

#[test]
fn sql_rows_follow_sorted_values() {
    let sql = as_sql_commands(&registry(), "\n");
    let rows: Vec<&str> = sql.lines().filter(|line| line.starts_with("INSERT INTO \"names\"")).collect();
    assert_eq!(
        rows,
        [
            "INSERT INTO \"names\" VALUES(1,'air__log_of_pressure');",
            "INSERT INTO \"names\" VALUES(2,'air__temperature');",
            "INSERT INTO \"names\" VALUES(3,'water__temperature');",
        ]
    );
    assert!(sql.contains("INSERT INTO \"operators\" VALUES(1,'log');"));
}
