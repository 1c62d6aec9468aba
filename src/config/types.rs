// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for lakeops.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, HookConfig, GlueConfig, GenerateConfig
//! HookConfig.formatters: name → FormatterConfig { program, args, patterns }
//! GenerateConfig.replacements: schema → interface
//! GenerateConfig.interfaces: interface → InterfaceConfig { lakehouse_name, aliases }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Pre-commit hook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookConfig {
    /// Remote holding the base branch.
    pub remote: String,
    /// Branch every commit must be rebased on.
    pub base_branch: String,
    /// Require `<remote>/<base_branch>` to be an ancestor of `HEAD`.
    pub check_rebase: bool,
    /// Fetch the base branch and require the local copy to match it.
    pub check_base_fresh: bool,
    /// `git add` formatted files again so the fixes land in the commit.
    pub restage: bool,
    /// Formatters by name. A staged file goes to the first one, in name
    /// order, whose patterns match.
    pub formatters: BTreeMap<String, FormatterConfig>,
}

impl Default for HookConfig {
    fn default() -> Self {
        let mut formatters = BTreeMap::new();
        formatters.insert(
            "black".to_string(),
            FormatterConfig::new("black", &[], &["**/*.py", "**/*.pyi"]),
        );
        formatters.insert(
            "prettier".to_string(),
            FormatterConfig::new(
                "npx",
                &["prettier", "--write"],
                &["**/*.{js,jsx,mjs,cjs,ts,tsx,json,css,scss,md,yaml,yml,html}"],
            ),
        );
        formatters.insert(
            "sqlfluff".to_string(),
            FormatterConfig::new("sqlfluff", &["fix", "--force"], &["**/*.sql"]),
        );

        Self {
            remote: "origin".to_string(),
            base_branch: "main".to_string(),
            check_rebase: true,
            check_base_fresh: true,
            restage: true,
            formatters,
        }
    }
}

impl HookConfig {
    /// The remote-tracking name of the base branch, e.g. `origin/main`.
    #[must_use]
    pub fn remote_base(&self) -> String {
        format!("{}/{}", self.remote, self.base_branch)
    }
}

/// One external formatter or linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatterConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Executable looked up on `PATH`.
    pub program: String,
    /// Arguments placed before the file list.
    #[serde(default)]
    pub args: Vec<String>,
    /// Glob patterns matched against repository-relative paths.
    pub patterns: Vec<String>,
}

const fn enabled_by_default() -> bool {
    true
}

impl FormatterConfig {
    #[must_use]
    pub fn new(program: &str, args: &[&str], patterns: &[&str]) -> Self {
        Self {
            enabled: true,
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            patterns: patterns.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Glue schema dump configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlueConfig {
    /// Glue catalog database holding the tables.
    pub database: String,
    /// Directory receiving one `<table>.txt` per table.
    pub output_dir: PathBuf,
    /// Tables to dump.
    pub tables: Vec<String>,
    /// AWS CLI `--profile`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// AWS CLI `--region`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for GlueConfig {
    fn default() -> Self {
        Self {
            database: String::new(),
            output_dir: PathBuf::from("outputs/table-schemas"),
            tables: Vec::new(),
            profile: None,
            region: None,
        }
    }
}

/// SQL populator generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Directory with the dumped `<schema>.txt` files.
    pub schemas_path: PathBuf,
    /// Output directory for `CREATE EXTERNAL TABLE` files.
    pub catalog_output: PathBuf,
    /// Output directory for S3 `SELECT` populators.
    pub s3_output: PathBuf,
    /// Database the catalog tables are created in.
    pub lakehouse_database: String,
    /// S3 prefix; the table name is appended to form `LOCATION`.
    pub location_prefix: String,
    /// Database the S3 populators select from.
    pub source_database: String,
    /// Appended to the lakehouse interface name to form the table name.
    pub table_suffix: String,
    /// Appended to the table name to form the S3 populator file stem.
    pub populator_suffix: String,
    /// Written into `proceso_audit_create`.
    pub process_name: String,
    /// Schema file stem → interface name.
    pub replacements: BTreeMap<String, String>,
    /// Interface name → lakehouse naming.
    pub interfaces: BTreeMap<String, InterfaceConfig>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            schemas_path: PathBuf::from("outputs/table-schemas"),
            catalog_output: PathBuf::from("outputs/glue-catalog-populators"),
            s3_output: PathBuf::from("outputs/s3-populator"),
            lakehouse_database: "pae_dataplatform_lakehouse".to_string(),
            location_prefix: "s3://$LAKEHOUSE_BUCKET/intervencionesdepozo/eventos/structured"
                .to_string(),
            source_database: "$SOURCE_DATABASE".to_string(),
            table_suffix: "_th".to_string(),
            populator_suffix: "_lh_sec".to_string(),
            process_name: "drilling-standarized2lakehouse-pipeline".to_string(),
            replacements: BTreeMap::new(),
            interfaces: BTreeMap::new(),
        }
    }
}

/// Lakehouse naming for one ingestion interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterfaceConfig {
    /// Lakehouse interface name, before `table_suffix`.
    pub lakehouse_name: String,
    /// Lakehouse field names, in the order of the ingestion request.
    pub aliases: Vec<String>,
}
