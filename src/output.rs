//! Output naming and file writes for the CLI host.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use time::macros::format_description;

/// Filename-safe UTC timestamp, e.g. `2026-01-02T03-04-05`.
///
/// # Errors
///
/// Returns a format error if `now` cannot be rendered (years outside 0..=9999).
pub fn timestamp(now: OffsetDateTime) -> Result<String, time::error::Format> {
    now.format(format_description!("[year]-[month]-[day]T[hour]-[minute]-[second]"))
}

/// File name for a rendered viewport preview.
#[must_use]
pub fn preview_file_name(timestamp: &str) -> String {
    format!("viewport_preview_{timestamp}.png")
}

/// Write `bytes` to `dir/name`, creating `dir` if needed. Returns the full path.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory or file cannot be written.
pub async fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(name);
    tokio::fs::write(&path, bytes).await?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(path)
}
