// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! SQL populator generation.
//!
//! ```text
//! <schemas_path>/<schema>.txt
//!        |  replacements[schema] --> interface
//!        |  interfaces[interface] --> lakehouse_name, aliases
//!        v
//!   normalize + align_aliases
//!        |
//!        +--> <catalog_output>/<lakehouse_name><table_suffix>.sql
//!        |      CREATE EXTERNAL TABLE ... STORED AS PARQUET LOCATION ...
//!        '--> <s3_output>/<lakehouse_name><table_suffix><populator_suffix>.sql
//!               SELECT `col` AS alias, ..., audit columns FROM <source>.<schema>
//! ```

pub mod schema;
pub mod sql;
pub mod text;


use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{error, info, warn};

use crate::config::types::{GenerateConfig, InterfaceConfig};
use crate::core::progress::item_bar;
use crate::error::{ConfigError, FsError, Result};

use schema::{list_schemas, load_schema};
use sql::{render_catalog_sql, render_s3_sql};
use text::{Normalizer, align_aliases};

/// Files written for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTable {
    pub schema: String,
    pub table: String,
    pub catalog_path: PathBuf,
    pub s3_path: PathBuf,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub generated: Vec<GeneratedTable>,
    /// Schemas without a `replacements` entry.
    pub unmapped: Vec<String>,
    /// Schemas whose file could not be read.
    pub failed: Vec<String>,
}

/// Generate both populators for every schema file in `schemas_path`.
///
/// # Errors
///
/// Returns an error if a directory cannot be read or created, an output
/// file cannot be written, or a replacement names an interface that is not
/// configured.
pub fn run_generate(config: &GenerateConfig) -> Result<GenerateReport> {
    let schemas = list_schemas(&config.schemas_path)
        .with_context(|| format!("failed to list schemas in {}", config.schemas_path.display()))?;
    info!(
        "Found {} schema(s) in {}",
        schemas.len(),
        config.schemas_path.display()
    );

    for dir in [&config.catalog_output, &config.s3_output] {
        std::fs::create_dir_all(dir).map_err(|e| FsError::io(dir, e))?;
    }

    let normalizer = Normalizer::new()?;
    let mut report = GenerateReport::default();

    let pb = item_bar(schemas.len());
    for (name, path) in &schemas {
        pb.set_message(name.clone());
        info!("Processing schema {name}");

        let Some(interface_name) = lookup(&config.replacements, name) else {
            warn!("Schema {name} not found in replacements, skipping");
            report.unmapped.push(name.clone());
            pb.inc(1);
            continue;
        };
        let interface = resolve_interface(config, name, interface_name)?;

        let columns = match load_schema(path) {
            Ok(columns) => columns,
            Err(e) => {
                error!("Skipping schema {name}: {e}");
                report.failed.push(name.clone());
                pb.inc(1);
                continue;
            }
        };

        let normalized: Vec<String> = columns
            .iter()
            .map(|column| normalizer.normalize(&column.name))
            .collect();
        let aliases = align_aliases(&normalized, &interface.aliases);

        let table = format!("{}{}", interface.lakehouse_name, config.table_suffix);
        let catalog_path = config.catalog_output.join(format!("{table}.sql"));
        let s3_path = config
            .s3_output
            .join(format!("{table}{}.sql", config.populator_suffix));

        write_sql(
            &catalog_path,
            &render_catalog_sql(
                &config.lakehouse_database,
                &table,
                &config.location_prefix,
                &columns,
            ),
        )?;
        info!("Generated Glue catalog populator for {name} at {}", catalog_path.display());

        write_sql(
            &s3_path,
            &render_s3_sql(
                &config.source_database,
                name,
                &config.process_name,
                &columns,
                &aliases,
            ),
        )?;
        info!("Generated S3 populator for {name} at {}", s3_path.display());

        report.generated.push(GeneratedTable {
            schema: name.clone(),
            table,
            catalog_path,
            s3_path,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        "Generated {} table(s), {} unmapped, {} failed",
        report.generated.len(),
        report.unmapped.len(),
        report.failed.len()
    );
    Ok(report)
}

/// Exact key first, then lowercased; keys set through environment variables
/// arrive lowercased.
fn lookup<'a, V>(map: &'a std::collections::BTreeMap<String, V>, key: &str) -> Option<&'a V> {
    map.get(key).or_else(|| map.get(&key.to_lowercase()))
}

fn resolve_interface<'a>(
    config: &'a GenerateConfig,
    schema: &str,
    interface_name: &str,
) -> Result<&'a InterfaceConfig> {
    let invalid = |message: String| ConfigError::InvalidValue {
        section: "generate.replacements".to_string(),
        key: schema.to_string(),
        message,
    };
    let interface = lookup(&config.interfaces, interface_name)
        .ok_or_else(|| invalid(format!("unknown interface '{interface_name}'")))?;
    if interface.lakehouse_name.trim().is_empty() {
        return Err(invalid(format!(
            "interface '{interface_name}' has no lakehouse_name"
        ))
        .into());
    }
    Ok(interface)
}

fn write_sql(path: &Path, sql: &str) -> Result<()> {
    std::fs::write(path, sql).map_err(|e| FsError::io(path, e))?;
    Ok(())
}
