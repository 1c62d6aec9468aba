// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{dump_schemas, get_table_invocation};
use crate::config::types::GlueConfig;
use crate::core::exec::scripted::ScriptedRunner;
use crate::error::OpsError;

fn glue_config(output_dir: &Path) -> GlueConfig {
    GlueConfig {
        database: "raw_zone".to_string(),
        output_dir: output_dir.to_path_buf(),
        ..GlueConfig::default()
    }
}

fn tables(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn get_table(table: &str) -> String {
    format!("aws glue get-table --database-name raw_zone --name {table} ")
}

#[test]
fn test_get_table_invocation() {
    let config = GlueConfig {
        database: "raw_zone".to_string(),
        profile: Some("data".to_string()),
        region: Some("us-east-1".to_string()),
        ..GlueConfig::default()
    };
    let invocation = get_table_invocation(&config, "eventos");
    insta::assert_snapshot!(
        invocation.command_line(),
        @"aws glue get-table --database-name raw_zone --name eventos --query Table.StorageDescriptor.Columns[*].[Name,Type] --output text --profile data --region us-east-1"
    );
    assert_eq!(
        invocation.environment().get("AWS_PAGER").map(String::as_str),
        Some("")
    );
}

#[tokio::test]
async fn test_one_file_per_table() {
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().join("table-schemas");
    let runner = ScriptedRunner::new()
        .stdout(&get_table("eventos"), "id_evento\tbigint\nfecha\ttimestamp\n")
        .stdout(&get_table("pozos"), "pozo\tstring\n");

    let report = dump_schemas(&runner, &glue_config(&out), &tables(&["eventos", "pozos"]))
        .await
        .unwrap();

    assert_eq!(runner.count("aws glue get-table"), 2);
    assert!(report.skipped.is_empty());
    assert_eq!(report.dumped.len(), 2);
    assert_eq!(
        std::fs::read_to_string(out.join("eventos.txt")).unwrap(),
        "id_evento\tbigint\nfecha\ttimestamp\n"
    );
    assert_eq!(
        std::fs::read_to_string(out.join("pozos.txt")).unwrap(),
        "pozo\tstring\n"
    );

    let mut written: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, ["eventos.txt", "pozos.txt"]);
}

#[tokio::test]
async fn test_failed_table_is_removed_and_skipped() {
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path();
    std::fs::write(out.join("missing.txt"), "stale\tstring\n").unwrap();

    let runner = ScriptedRunner::new()
        .exit(
            &get_table("missing"),
            254,
            "An error occurred (EntityNotFoundException)",
        )
        .stdout(&get_table("pozos"), "pozo\tstring\n");

    let report = dump_schemas(&runner, &glue_config(out), &tables(&["missing", "pozos"]))
        .await
        .unwrap();

    assert_eq!(report.skipped, ["missing"]);
    assert_eq!(report.dumped.len(), 1);
    assert!(!out.join("missing.txt").exists());
    assert!(out.join("pozos.txt").exists());
}

#[tokio::test]
async fn test_missing_aws_skips_every_table() {
    let temp = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new().missing("aws");

    let report = dump_schemas(
        &runner,
        &glue_config(temp.path()),
        &tables(&["eventos", "pozos"]),
    )
    .await
    .unwrap();

    assert!(runner.calls().is_empty());
    assert_eq!(report.skipped, ["eventos", "pozos"]);
    assert!(report.dumped.is_empty());
}

#[tokio::test]
async fn test_missing_database_is_config_error() {
    let temp = tempfile::tempdir().unwrap();
    let config = GlueConfig {
        output_dir: temp.path().to_path_buf(),
        ..GlueConfig::default()
    };
    let runner = ScriptedRunner::new();

    let err = dump_schemas(&runner, &config, &tables(&["eventos"]))
        .await
        .unwrap_err();
    assert!(matches!(err, OpsError::Config(_)));
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: missing required config key 'database' in section '[glue]'"
    );
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_no_tables_is_a_no_op() {
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().join("never-created");
    let runner = ScriptedRunner::new();

    let report = dump_schemas(&runner, &glue_config(&out), &[]).await.unwrap();
    assert_eq!(report, super::DumpReport::default());
    assert!(!out.exists());
}

#[tokio::test]
async fn test_table_names_with_paths_are_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().join("table-schemas");
    let outside = temp.path().join("outside.txt");
    std::fs::write(&outside, "keep\n").unwrap();
    let runner = ScriptedRunner::new();

    for bad in ["../outside", "nested/table", ".."] {
        let err = dump_schemas(&runner, &glue_config(&out), &tables(&["eventos", bad]))
            .await
            .unwrap_err();
        assert!(matches!(err, OpsError::Config(_)), "{bad}: {err}");
    }

    let err = dump_schemas(&runner, &glue_config(&out), &tables(&["../outside"]))
        .await
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: invalid value for 'tables' in section '[glue]': '../outside' is not a plain table name"
    );
    assert!(runner.calls().is_empty());
    assert!(!out.exists());
    assert_eq!(std::fs::read_to_string(&outside).unwrap(), "keep\n");
}

#[tokio::test]
async fn test_schema_bytes_are_written_unchanged() {
    let temp = tempfile::tempdir().unwrap();
    let stdout = b"a\xf1o\tint\n".to_vec();
    let runner = ScriptedRunner::new().respond(
        &get_table("pozos"),
        crate::core::process::builder::ProcessOutput::from_bytes(0, stdout.clone(), Vec::new()),
    );

    dump_schemas(&runner, &glue_config(temp.path()), &tables(&["pozos"]))
        .await
        .unwrap();
    assert_eq!(std::fs::read(temp.path().join("pozos.txt")).unwrap(), stdout);
}
