//! Upload directory bootstrap.

use std::path::Path;

use anyhow::{Context, Result};

/// Creates the upload directory (and parents) if it does not exist yet.
pub fn ensure_upload_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        tracing::debug!(path = %dir.display(), "Upload directory present");
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create upload directory {}", dir.display()))?;
    tracing::info!(path = %dir.display(), "Created upload directory");
    Ok(())
}
