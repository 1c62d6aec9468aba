// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Progress bars for per-item loops.
//!
//! indicatif hides the bar by itself when stderr is not a terminal, so
//! hooks, pipes and tests see only the log lines.

use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressStyle};

/// Pre-validated style for counted items.
fn item_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

/// Bar over `total` items.
#[must_use]
pub fn item_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX));
    pb.set_style(item_style());
    pb
}
