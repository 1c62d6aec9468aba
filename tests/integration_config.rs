// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::io::Write;

use lakeops::config::Config;
use lakeops::config::loader::ConfigLoader;
use lakeops::logging::LogLevel;
use tempfile::NamedTempFile;

const PROJECT_TOML: &str = r#"
[global]
output_log_level = 2

[hook]
base_branch = "develop"

[hook.formatters.prettier]
enabled = false

[hook.formatters.sqlfluff]
args = ["fix", "--force", "--dialect", "athena"]

[glue]
database = "pae_raw"
tables = ["eventos_pozo", "intervenciones"]
region = "us-east-1"

[generate]
source_database = "pae_raw"

[generate.replacements]
eventos_pozo = "EVENTOS"

[generate.interfaces.EVENTOS]
lakehouse_name = "eventos_intervencion"
aliases = ["id_evento", "fecha_inicio", "profundidad_m"]
"#;

fn write_toml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write temp file");
    file
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_project_file() {
    let file = write_toml(PROJECT_TOML);
    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.hook.remote_base(), "origin/develop");
    assert!(!config.hook.formatters["prettier"].enabled);
    assert_eq!(config.hook.formatters["prettier"].program, "npx");
    assert_eq!(
        config.hook.formatters["sqlfluff"].args,
        ["fix", "--force", "--dialect", "athena"]
    );
    assert_eq!(config.glue.tables, ["eventos_pozo", "intervenciones"]);
    assert_eq!(config.glue.region.as_deref(), Some("us-east-1"));
    assert_eq!(config.generate.source_database, "pae_raw");
    insta::assert_debug_snapshot!(config.generate.interfaces["EVENTOS"], @r#"
    InterfaceConfig {
        lakehouse_name: "eventos_intervencion",
        aliases: [
            "id_evento",
            "fecha_inicio",
            "profundidad_m",
        ],
    }
    "#);
}

#[test]
fn config_later_files_override_earlier() {
    let base = write_toml(PROJECT_TOML);
    let local = write_toml("[glue]\ndatabase = \"pae_raw_dev\"\n");

    let loader = ConfigLoader::new()
        .add_toml_file(base.path())
        .add_toml_file(local.path());
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.glue.database, "pae_raw_dev");
    assert_eq!(config.glue.tables, ["eventos_pozo", "intervenciones"]);
}

#[test]
fn config_set_overrides_beat_files() {
    let file = write_toml(PROJECT_TOML);
    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .apply_overrides(&[
            "hook.base_branch=main",
            "global.output_log_level=5",
            "generate.table_suffix=_t",
        ])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.hook.base_branch, "main");
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
    assert_eq!(config.generate.table_suffix, "_t");
}

#[test]
fn config_invalid_toml_is_error() {
    let file = write_toml("[glue\ndatabase = ");
    assert!(Config::from_file(file.path()).is_err());
}

#[test]
fn config_json_output_round_trips_through_serde() {
    let config = Config::parse(PROJECT_TOML).unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["glue"]["database"], "pae_raw");
    assert_eq!(json["hook"]["formatters"]["black"]["program"], "black");
    assert!(json["glue"].get("profile").is_none());
}
