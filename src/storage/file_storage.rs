use crate::{
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File-based storage: one JSON file per key under the data directory
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    /// Creates a FileStorage rooted at `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            root_path: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn slot_file(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(BoardError::StorageError(format!(
                "Invalid storage key: {key}"
            )));
        }
        Ok(self.root_path.join(format!("{key}.json")))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.slot_file(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.slot_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        // Write to a sibling temp file, then rename over the slot
        let temp_path = file_path.with_extension("json.tmp");
        fs::write(&temp_path, value).await?;
        fs::rename(&temp_path, &file_path).await?;

        debug!(path = %file_path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_missing_slot() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".taskboard"));

        assert_eq!(storage.get("kanban-data").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".taskboard"));

        storage.set("kanban-data", r#"{"a":1}"#).await.unwrap();

        let file = temp_dir.path().join(".taskboard").join("kanban-data.json");
        assert!(file.exists());
        assert!(!file.with_extension("json.tmp").exists());
        assert_eq!(
            storage.get("kanban-data").await.unwrap().as_deref(),
            Some(r#"{"a":1}"#)
        );
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.set("slot", "first").await.unwrap();
        storage.set("slot", "second").await.unwrap();

        assert_eq!(storage.get("slot").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(matches!(
            storage.set("../outside", "x").await,
            Err(BoardError::StorageError(_))
        ));
        assert!(storage.get("").await.is_err());
    }
}
