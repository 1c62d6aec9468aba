// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Directory containing the schema files, overrides generate.schemas_path.
    #[arg(long = "schemas-path", value_name = "DIR")]
    pub schemas_path: Option<PathBuf>,

    /// Directory for Glue catalog SQL files, overrides generate.catalog_output.
    #[arg(long = "catalog-output", value_name = "DIR")]
    pub catalog_output: Option<PathBuf>,

    /// Directory for S3 populator SQL files, overrides generate.s3_output.
    #[arg(long = "s3-output", value_name = "DIR")]
    pub s3_output: Option<PathBuf>,
}
