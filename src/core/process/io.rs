// lakeops: Lakehouse ingestion tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks
//!   each reader returns its captured bytes, or a read error
//!   wait
//!   --> ProcessOutput { stdout, stderr, exit_code }
//! ```

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::trace;

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result};

type ReaderHandle = JoinHandle<std::result::Result<Vec<u8>, ProcessError>>;

/// Spawns a reader task for one stream if anything wants its lines.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<ReaderHandle>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    stream.map(|stream| {
        let name = process_name.to_string();
        tokio::spawn(async move { read_stream(stream, flags, &name, stream_name).await })
    })
}

/// Waits for a reader task and returns the bytes it kept.
async fn join_reader(handle: Option<ReaderHandle>, stream_name: &str) -> Result<Vec<u8>> {
    match handle {
        Some(handle) => {
            let kept = handle
                .await
                .with_context(|| format!("{stream_name} reader task failed"))??;
            Ok(kept)
        }
        None => Ok(Vec::new()),
    }
}

impl ProcessBuilder {
    /// Runs the child process, handling I/O streaming and waiting for completion.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_config(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_config(), name, "stderr");

        let exit_status = child.wait().await?;

        let stdout = join_reader(stdout_handle, "stdout").await?;
        let stderr = join_reader(stderr_handle, "stderr").await?;

        Ok(ProcessOutput::from_bytes(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
        ))
    }
}

/// Reads a stream chunk by chunk up to each newline, forwarding and/or
/// keeping the raw bytes. Output need not be UTF-8 or newline-terminated.
async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> std::result::Result<Vec<u8>, ProcessError>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut kept = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .await
            .map_err(|source| ProcessError::ReadFailed {
                process: process_name.to_string(),
                stream: stream_name,
                source,
            })?;
        if read == 0 {
            break;
        }
        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            let text = String::from_utf8_lossy(&line);
            let text = text.trim_end_matches('\n');
            trace!(process = %process_name, stream = %stream_name, line = %text, "output");
        }
        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            kept.extend_from_slice(&line);
        }
    }

    Ok(kept)
}
