// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! SQL rendering for the two populators.

use std::fmt::Write as _;

use super::schema::Column;

/// What the S3 populator writes into an audit column.
#[derive(Clone, Copy)]
enum AuditValue {
    Now,
    ProcessName,
    Null,
}

/// An audit column appended to every lakehouse table.
struct AuditColumn {
    name: &'static str,
    catalog_type: &'static str,
    value: AuditValue,
}

const AUDIT_COLUMNS: [AuditColumn; 4] = [
    AuditColumn {
        name: "fecha_audit_create",
        catalog_type: "TIMESTAMP",
        value: AuditValue::Now,
    },
    AuditColumn {
        name: "proceso_audit_create",
        catalog_type: "STRING",
        value: AuditValue::ProcessName,
    },
    AuditColumn {
        name: "fecha_audit_update",
        catalog_type: "TIMESTAMP",
        value: AuditValue::Null,
    },
    AuditColumn {
        name: "proceso_audit_update",
        catalog_type: "STRING",
        value: AuditValue::Null,
    },
];

impl AuditColumn {
    fn populator_value(&self, process_name: &str) -> String {
        match self.value {
            AuditValue::Now => "current_timestamp".to_string(),
            AuditValue::ProcessName => format!("'{}'", process_name.replace('\'', "''")),
            AuditValue::Null => "null".to_string(),
        }
    }
}

/// Join `lines` as a comma-separated, indented column list.
fn column_list(lines: &[String]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        let separator = if i + 1 == lines.len() { "" } else { "," };
        let _ = writeln!(out, "    {line}{separator}");
    }
    out
}

/// `CREATE EXTERNAL TABLE` statement for the Glue catalog.
#[must_use]
pub fn render_catalog_sql(
    database: &str,
    table: &str,
    location_prefix: &str,
    columns: &[Column],
) -> String {
    let lines: Vec<String> = columns
        .iter()
        .map(|column| format!("`{}` {}", column.name, column.data_type))
        .chain(
            AUDIT_COLUMNS
                .iter()
                .map(|audit| format!("{} {}", audit.name, audit.catalog_type)),
        )
        .collect();

    format!(
        "CREATE EXTERNAL TABLE IF NOT EXISTS {database}.{table} (\n{})\nSTORED AS PARQUET\nLOCATION '{}/{table}';\n",
        column_list(&lines),
        location_prefix.trim_end_matches('/'),
    )
}

/// `SELECT` that copies `schema` from the source database into the lakehouse
/// layout, renaming each column to its alias.
///
/// `aliases` pairs with `columns` by position.
#[must_use]
pub fn render_s3_sql(
    source_database: &str,
    schema: &str,
    process_name: &str,
    columns: &[Column],
    aliases: &[String],
) -> String {
    let lines: Vec<String> = columns
        .iter()
        .zip(aliases)
        .map(|(column, alias)| format!("`{}` AS {alias}", column.name))
        .chain(
            AUDIT_COLUMNS
                .iter()
                .map(|audit| format!("{} AS {}", audit.populator_value(process_name), audit.name)),
        )
        .collect();

    format!(
        "SELECT\n{}FROM {source_database}.{schema};\n",
        column_list(&lines)
    )
}
