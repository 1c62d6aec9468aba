// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Glue schema dump.
//!
//! ```text
//! for table in tables:
//!   aws glue get-table --database-name <db> --name <table>
//!       --query "Table.StorageDescriptor.Columns[*].[Name,Type]" --output text
//!     ok   --> <output_dir>/<table>.txt   (name<TAB>type per line)
//!     fail --> warn, remove <table>.txt, next table
//! ```

#[cfg(test)]
mod tests;

use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::types::GlueConfig;
use crate::core::exec::{CommandRunner, Invocation};
use crate::core::progress::item_bar;
use crate::error::{ConfigError, FsError, OpsResult};

/// JMESPath selecting `[Name, Type]` for every column.
pub const COLUMNS_QUERY: &str = "Table.StorageDescriptor.Columns[*].[Name,Type]";

/// Outcome of a dump run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpReport {
    /// Tables written, with their output files.
    pub dumped: Vec<(String, PathBuf)>,
    /// Tables that failed and were skipped.
    pub skipped: Vec<String>,
}

/// Build the `aws glue get-table` call for one table.
#[must_use]
pub fn get_table_invocation(config: &GlueConfig, table: &str) -> Invocation {
    let mut invocation = Invocation::new("aws")
        .args(["glue", "get-table", "--database-name"])
        .arg(config.database.as_str())
        .args(["--name", table, "--query", COLUMNS_QUERY, "--output", "text"])
        .env("AWS_PAGER", "");
    if let Some(profile) = &config.profile {
        invocation = invocation.args(["--profile", profile.as_str()]);
    }
    if let Some(region) = &config.region {
        invocation = invocation.args(["--region", region.as_str()]);
    }
    invocation
}

/// Dump the column list of every table in `tables` to
/// `<output_dir>/<table>.txt`.
///
/// A table whose command fails is logged, has its output file removed and
/// is reported as skipped; the remaining tables are still dumped.
///
/// # Errors
///
/// Returns a `ConfigError` if `glue.database` is not set or a table name is
/// not a plain file name, or an `FsError` if the output directory or a file
/// in it cannot be written.
pub async fn dump_schemas(
    runner: &dyn CommandRunner,
    config: &GlueConfig,
    tables: &[String],
) -> OpsResult<DumpReport> {
    if config.database.trim().is_empty() {
        return Err(ConfigError::MissingKey {
            section: "glue".to_string(),
            key: "database".to_string(),
        }
        .into());
    }

    let mut report = DumpReport::default();
    if tables.is_empty() {
        info!("No tables to dump");
        return Ok(report);
    }

    if let Some(table) = tables.iter().find(|table| !is_plain_table_name(table)) {
        return Err(ConfigError::InvalidValue {
            section: "glue".to_string(),
            key: "tables".to_string(),
            message: format!("'{table}' is not a plain table name"),
        }
        .into());
    }

    let output_dir = config.output_dir.as_path();
    std::fs::create_dir_all(output_dir).map_err(|e| FsError::io(output_dir, e))?;

    let aws_available = runner.locate("aws").is_some();
    if !aws_available {
        warn!("'aws' is not in PATH; every table will be skipped");
    }

    let pb = item_bar(tables.len());
    for table in tables {
        pb.set_message(table.clone());
        let target = output_dir.join(format!("{table}.txt"));

        let columns = if aws_available {
            fetch_columns(runner, config, table).await
        } else {
            None
        };
        match columns {
            Some(columns) => {
                write_atomically(output_dir, &target, &columns)?;
                debug!(table = %table, path = %target.display(), "schema written");
                report.dumped.push((table.clone(), target));
            }
            None => {
                warn!("Skipping table {table}");
                remove_stale(&target)?;
                report.skipped.push(table.clone());
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        "Dumped {} table(s) to {}, skipped {}",
        report.dumped.len(),
        output_dir.display(),
        report.skipped.len()
    );
    Ok(report)
}

/// A table name must map to a file directly inside the output directory.
fn is_plain_table_name(table: &str) -> bool {
    !table.is_empty()
        && table != "."
        && table != ".."
        && !table.contains(['/', '\\', '\0'])
}

/// Runs `get-table`; `None` on any failure.
async fn fetch_columns(
    runner: &dyn CommandRunner,
    config: &GlueConfig,
    table: &str,
) -> Option<Vec<u8>> {
    let invocation = get_table_invocation(config, table);
    debug!(command = %invocation.command_line(), "fetching schema");
    match runner.run(&invocation).await {
        Ok(output) if output.success() => Some(output.stdout_bytes().to_vec()),
        Ok(output) => {
            warn!(
                "get-table failed for {table} (exit code {}): {}",
                output.exit_code(),
                output.stderr().trim()
            );
            None
        }
        Err(e) => {
            warn!("get-table could not run for {table}: {e:#}");
            None
        }
    }
}

fn write_atomically(dir: &Path, target: &Path, contents: &[u8]) -> OpsResult<()> {
    let mut file = NamedTempFile::new_in(dir).map_err(|e| FsError::io(dir, e))?;
    file.write_all(contents)
        .map_err(|e| FsError::io(file.path(), e))?;
    file.persist(target)
        .map_err(|e| FsError::io(target, e.error))?;
    Ok(())
}

fn remove_stale(target: &Path) -> OpsResult<()> {
    match std::fs::remove_file(target) {
        Ok(()) => {
            debug!(path = %target.display(), "removed stale schema file");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FsError::io(target, e).into()),
    }
}
