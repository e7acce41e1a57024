//! Environment/runtime helpers
//!
//! Sanity checks run before the server binds.

use std::path::Path;

use tracing::{info, warn};

/// Make sure the parent directory of a file-backed SQLite database exists.
///
/// Postgres URLs and in-memory SQLite URLs need nothing on disk and are left alone.
pub async fn ensure_db_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = rest.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        info!("using in-memory sqlite database");
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        if tokio::fs::metadata(parent).await.is_err() {
            warn!(dir = %parent.display(), "sqlite data directory missing; creating it");
        }
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    Ok(())
}
