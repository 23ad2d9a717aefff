//! JSON metadata output for the post renderer.
//!
//! # Output Structure
//!
//! Files are organized by date with edition names:
//! ```text
//! output_dir/
//! ├── caption.txt
//! └── 2026-10-16/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```
//!
//! A later run in the same edition overwrites that edition's file.

use crate::models::PostMetadata;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`PostMetadata`] to `{output_dir}/{local_date}/{edition}.json`.
///
/// Creates the date directory when needed and returns the written path.
#[instrument(level = "info", skip_all, fields(%output_dir))]
pub async fn write_post_metadata(
    metadata: &PostMetadata<'_>,
    output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(metadata)?;

    let date_dir = Path::new(output_dir).join(&metadata.local_date);
    info!(path = %date_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&date_dir).await {
        error!(path = %date_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = date_dir.join(format!("{}.json", metadata.edition));
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote post metadata");
    Ok(path)
}
