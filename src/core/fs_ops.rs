// src/core/fs_ops.rs
//! File system helpers shared by the server, the store and the CLI

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Ensure the parent directory of a file exists
    pub async fn ensure_parent_exists(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::ensure_dir_exists(parent).await,
            _ => Ok(()),
        }
    }

    pub async fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read and parse a JSON document
    pub async fn read_json(path: &Path) -> Result<serde_json::Value> {
        let content = Self::read_file_safe(path).await?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in file: {}", path.display()))
    }

    /// Resolve `relative` against `base` unless it is already absolute
    pub fn normalize_path(base: &Path, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            base.join(relative)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let base = Path::new("/srv/app");
        assert_eq!(
            FsOps::normalize_path(base, Path::new("data/orientation.db")),
            PathBuf::from("/srv/app/data/orientation.db")
        );
        assert_eq!(
            FsOps::normalize_path(base, Path::new("/var/log/api.log")),
            PathBuf::from("/var/log/api.log")
        );
    }

    #[tokio::test]
    async fn test_ensure_parent_exists_accepts_bare_file_names() {
        assert!(FsOps::ensure_parent_exists(Path::new("orientation.db"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_read_json_reports_missing_file() {
        let err = FsOps::read_json(Path::new("/definitely/not/here.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
