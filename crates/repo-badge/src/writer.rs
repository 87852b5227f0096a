//! Persisting the rendered badge.

use std::path::Path;

use tracing::info;

use crate::error::{BadgeError, Result};

pub const DEFAULT_OUTPUT_PATH: &str = "assets/repo-count.svg";

/// Ensure the parent directory of a file path exists.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| BadgeError::io_path("creating directory", parent, e))
}

/// Writes `svg` to `path`, replacing any previous badge.
pub async fn write_badge(path: &Path, svg: &str) -> Result<()> {
    ensure_parent_dir(path).await?;
    tokio::fs::write(path, svg.as_bytes())
        .await
        .map_err(|e| BadgeError::io_path("writing badge", path, e))?;
    info!(path = %path.display(), bytes = svg.len(), "Wrote badge");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("assets").join("nested").join("repo-count.svg");

        write_badge(&path, "<svg/>").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[tokio::test]
    async fn overwrites_existing_badge() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repo-count.svg");
        std::fs::write(&path, "old badge with more bytes").unwrap();

        write_badge(&path, "<svg>new</svg>").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg>new</svg>");
    }

    #[tokio::test]
    async fn reports_path_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("assets");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("repo-count.svg");

        let err = write_badge(&path, "<svg/>").await.unwrap_err();

        match err {
            BadgeError::Io { op, path: failed, .. } => {
                assert_eq!(op, "creating directory");
                assert_eq!(failed, blocker);
            }
            other => panic!("expected io error, got {other}"),
        }
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_directory() {
        assert!(ensure_parent_dir(Path::new("repo-count.svg")).await.is_ok());
    }
}
