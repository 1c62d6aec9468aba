// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dumped schema files.
//!
//! ```text
//! <schemas_path>/<schema>.txt
//!   id_evento<TAB>bigint
//!   fecha<TAB>timestamp
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsError, OpsResult};

/// One source column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// Parse `name<TAB>type` lines. Lines that do not split into exactly two
/// fields are ignored.
#[must_use]
pub fn parse_schema(content: &str) -> Vec<Column> {
    content
        .lines()
        .filter_map(|line| {
            let mut parts = line.trim().split('\t');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(data_type), None) => Some(Column::new(name, data_type)),
                _ => None,
            }
        })
        .collect()
}

/// Read and parse one schema file.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be read.
pub fn load_schema(path: &Path) -> OpsResult<Vec<Column>> {
    let content = std::fs::read_to_string(path).map_err(|e| FsError::io(path, e))?;
    Ok(parse_schema(&content))
}

/// `.txt` files directly inside `dir` as `(stem, path)`, sorted by stem.
///
/// # Errors
///
/// Returns an `FsError` if the directory cannot be read.
pub fn list_schemas(dir: &Path) -> OpsResult<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(dir).map_err(|e| FsError::io(dir, e))?;

    let mut schemas = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FsError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            debug!(path = %path.display(), "not a schema file");
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            schemas.push((stem.to_string(), path.clone()));
        }
    }

    schemas.sort();
    Ok(schemas)
}
