// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schemas command implementation for lakeops.

use crate::cli::schemas::{DumpArgs, SchemasArgs, SchemasSubcommand};
use crate::config::Config;
use crate::config::types::GlueConfig;
use crate::core::exec::SystemRunner;
use crate::error::Result;
use crate::glue::dump_schemas;

/// Main handler for schemas command.
///
/// Skipped tables are reported but do not fail the command.
///
/// # Errors
///
/// Returns an error if `glue.database` is missing or the output directory
/// cannot be written.
pub async fn run_schemas_command(args: &SchemasArgs, config: &Config) -> Result<()> {
    match &args.subcommand {
        SchemasSubcommand::Dump(dump) => {
            let glue = glue_config(dump, &config.glue);
            let tables = if dump.tables.is_empty() {
                &glue.tables
            } else {
                &dump.tables
            };
            let report = dump_schemas(&SystemRunner, &glue, tables).await?;
            for table in &report.skipped {
                eprintln!("Skipped {table}");
            }
            Ok(())
        }
    }
}

/// Applies command-line overrides on top of `[glue]`.
fn glue_config(args: &DumpArgs, base: &GlueConfig) -> GlueConfig {
    let mut glue = base.clone();
    if let Some(database) = &args.database {
        glue.database.clone_from(database);
    }
    if let Some(dir) = &args.output_dir {
        glue.output_dir.clone_from(dir);
    }
    glue
}
