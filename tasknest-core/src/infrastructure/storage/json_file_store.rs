use crate::shared::error::TaskNestError;
use crate::shared::TaskNestResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;

/// JSON array of `T` kept in a single file.
///
/// Loading is forgiving: a missing or unreadable file yields an empty list.
/// Saving reports failures to the caller.
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    private: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            private: false,
            _marker: PhantomData,
        }
    }

    /// Restrict the file to its owner after every write (unix only)
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record, or an empty list if the file is missing or corrupt
    pub async fn load_all(&self) -> Vec<T> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist yet", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&data) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Load every record, reporting I/O and parse failures
    pub async fn try_load_all(&self) -> TaskNestResult<Vec<T>> {
        let data = fs::read(&self.path).await?;
        let items = serde_json::from_slice(&data)?;
        Ok(items)
    }

    /// Write all records as pretty-printed JSON, creating parent directories
    pub async fn save_all(&self, items: &[T]) -> TaskNestResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TaskNestError::storage(format!("Failed to create dir: {}", e)))?;
            }
        }

        let data = serde_json::to_vec_pretty(items)?;
        fs::write(&self.path, data)
            .await
            .map_err(|e| TaskNestError::storage(format!("Write failed: {}", e)))?;

        if self.private {
            restrict_permissions(&self.path).await?;
        }

        log::debug!("Saved {} record(s) to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Remove the file. Returns whether a file was actually removed.
    pub async fn delete(&self) -> TaskNestResult<bool> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(TaskNestError::storage(format!("Delete failed: {}", e))),
        }
    }

    pub async fn exists(&self) -> bool {
        fs::metadata(&self.path).await.is_ok()
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> TaskNestResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> TaskNestResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    fn note(text: &str) -> Note {
        Note { text: text.to_string() }
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Note> = JsonFileStore::new(dir.path().join("missing.json"));

        assert!(store.load_all().await.is_empty());
        assert!(store.try_load_all().await.is_err());
        assert!(!store.exists().await);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("deeper").join("notes.json"));

        store.save_all(&[note("a"), note("b")]).await.unwrap();

        assert!(store.exists().await);
        assert_eq!(store.load_all().await, vec![note("a"), note("b")]);
    }

    #[tokio::test]
    async fn test_empty_list_written_as_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Note> = JsonFileStore::new(dir.path().join("empty.json"));

        store.save_all(&[]).await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "[]");
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_output_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("pretty.json"));

        store.save_all(&[note("x")]).await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n"));
        assert!(raw.contains("  {"));
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty_then_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        std::fs::write(&path, "{ corrupted json content").unwrap();
        let store: JsonFileStore<Note> = JsonFileStore::new(&path);

        assert!(store.load_all().await.is_empty());
        assert!(matches!(store.try_load_all().await, Err(TaskNestError::Storage(_))));

        store.save_all(&[note("fresh")]).await.unwrap();
        assert_eq!(store.load_all().await, vec![note("fresh")]);
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("gone.json"));

        store.save_all(&[note("bye")]).await.unwrap();
        assert!(store.delete().await.unwrap());
        assert!(!store.delete().await.unwrap());
        assert!(store.load_all().await.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_private_store_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("secret.json")).private();

        store.save_all(&[note("s")]).await.unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
