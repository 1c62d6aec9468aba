// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schemas command arguments.

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the `schemas` command.
#[derive(Debug, Clone, Args)]
pub struct SchemasArgs {
    /// Schemas subcommand.
    #[command(subcommand)]
    pub subcommand: SchemasSubcommand,
}

/// Schemas subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum SchemasSubcommand {
    /// Dumps Glue table columns to one text file per table.
    Dump(DumpArgs),
}

/// Arguments for the dump subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct DumpArgs {
    /// Glue database, overrides glue.database.
    #[arg(long, value_name = "NAME")]
    pub database: Option<String>,

    /// Output directory, overrides glue.output_dir.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Tables to dump; defaults to glue.tables.
    #[arg(value_name = "TABLE")]
    pub tables: Vec<String>,
}
