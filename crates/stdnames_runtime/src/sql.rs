//! SQL text export.
//!
//! The dump mirrors what an SQLite `.dump` of the four name tables looks
//! like: one transaction, tables in alphabetical order, each followed by its
//! rows.

use stdnames_registry::NamesRegistry;

use crate::dump::Field;

fn create_table(table: &str, newline: &str) -> String {
    [
        format!("CREATE TABLE {table} ("),
        "    id       integer primary key,".to_string(),
        "    name     text,".to_string(),
        "    unique(name)".to_string(),
        ");".to_string(),
    ]
    .join(newline)
}

fn quote(value: &str) -> String {
    value.replace('\'', "''")
}

/// Renders `registry` as SQL commands that create and fill one table per
/// field.
///
/// Row ids start at 1 and follow the sorted order of the values.
///
/// # Examples
///
/// ```
/// use stdnames_registry::NamesRegistry;
/// use stdnames_runtime::as_sql_commands;
///
/// let mut registry = NamesRegistry::new();
/// registry.add("air__temperature").unwrap();
/// let sql = as_sql_commands(&registry, "\n");
/// assert!(sql.starts_with("BEGIN TRANSACTION;\nCREATE TABLE names ("));
/// assert!(sql.contains("INSERT INTO \"objects\" VALUES(1,'air');"));
/// assert!(sql.ends_with("COMMIT;"));
/// ```
#[must_use]
pub fn as_sql_commands(registry: &NamesRegistry, newline: &str) -> String {
    let mut fields = Field::ALL;
    fields.sort_by_key(|field| field.as_str());

    let mut lines = vec!["BEGIN TRANSACTION;".to_string()];
    for field in fields {
        let table = field.as_str();
        lines.push(create_table(table, newline));
        for (id, value) in field.of(registry).iter().enumerate() {
            lines.push(format!(
                "INSERT INTO \"{table}\" VALUES({},'{}');",
                id + 1,
                quote(value)
            ));
        }
    }
    lines.push("COMMIT;".to_string());

    lines.join(newline)
}
