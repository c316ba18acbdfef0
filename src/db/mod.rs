//! Flat key-value storage persisted as a single JSON object on disk.
//!
//! Values are arbitrary JSON documents addressed by string keys, mirroring a
//! browser's local storage. Every write rewrites the whole file.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

pub mod keys {
    pub const FAVORITES: &str = "animeFinderFavorites";

    pub const LANGUAGE: &str = "animeFinderLanguage";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt storage file {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for key '{key}': {source}")]
    Value {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone)]
pub struct Store {
    path: PathBuf,
    entries: Arc<RwLock<Map<String, Value>>>,
}

impl Store {
    /// Opens the store at `path`. A missing file is an empty store.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                    path: path.display().to_string(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No storage file at {}, starting empty", path.display());
                Map::new()
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// Opens the store at `path`, setting a corrupt file aside as
    /// `<name>.corrupt` and starting empty instead of failing.
    pub async fn open_or_reset(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        match Self::new(path).await {
            Err(StoreError::Corrupt { path: bad, source }) => {
                error!(path = %bad, error = %source, "Storage file is corrupt, starting empty");

                let mut backup = path.as_os_str().to_owned();
                backup.push(".corrupt");
                if let Err(e) = tokio::fs::rename(path, &backup).await {
                    warn!(error = %e, "Could not move corrupt storage file aside");
                }
                Ok(Self::in_memory(path))
            }
            other => other,
        }
    }

    /// Store that lives only in memory until the first write.
    #[must_use]
    pub fn in_memory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Arc::new(RwLock::new(Map::new())),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|source| StoreError::Value {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Value {
            key: key.to_string(),
            source,
        })?;

        let mut entries = self.entries.write().await;
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value);

        // memory only changes once the file is written
        self.flush(&updated).await?;
        *entries = updated;
        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(key) {
            return Ok(false);
        }

        let mut updated = entries.clone();
        updated.remove(key);
        self.flush(&updated).await?;
        *entries = updated;
        Ok(true)
    }

    async fn flush(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })?;

        // write-then-rename so a crash never leaves a half-written file
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;

        info!(path = %self.path.display(), keys = entries.len(), "Storage saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("anime-finder-store-{}-{name}", std::process::id()))
            .join("storage.json")
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let store = Store::new(temp_path("missing")).await.unwrap();
        let value: Option<String> = store.get("anything").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_persists_across_instances() {
        let path = temp_path("persist");
        let store = Store::new(&path).await.unwrap();
        store.set(keys::LANGUAGE, &"en").await.unwrap();

        let reopened = Store::new(&path).await.unwrap();
        let lang: Option<String> = reopened.get(keys::LANGUAGE).await.unwrap();
        assert_eq!(lang.as_deref(), Some("en"));

        assert!(reopened.remove(keys::LANGUAGE).await.unwrap());
        assert!(!reopened.remove(keys::LANGUAGE).await.unwrap());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_error() {
        let path = temp_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let result = Store::new(&path).await;
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_open_or_reset_sets_corrupt_file_aside() {
        let path = temp_path("reset");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{\"animeFinderFavorites\": [").unwrap();

        let store = Store::open_or_reset(&path).await.unwrap();
        let favorites: Option<Vec<i32>> = store.get(keys::FAVORITES).await.unwrap();
        assert!(favorites.is_none());
        assert!(!path.exists());
        assert!(path.with_extension("json.corrupt").exists());

        store.set(keys::LANGUAGE, &"en").await.unwrap();
        assert!(Store::new(&path).await.is_ok());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_memory_unchanged() {
        let dir = temp_path("readonly");
        let blocker = dir.parent().unwrap().to_path_buf();
        std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        // a plain file where the parent directory should be
        std::fs::write(&blocker, "").unwrap();

        let store = Store::in_memory(blocker.join("storage.json"));
        assert!(store.set(keys::LANGUAGE, &"en").await.is_err());
        let lang: Option<String> = store.get(keys::LANGUAGE).await.unwrap();
        assert!(lang.is_none());

        let _ = std::fs::remove_file(&blocker);
    }

    #[tokio::test]
    async fn test_wrong_type_is_value_error() {
        let store = Store::in_memory(temp_path("typed"));
        store.entries.write().await.insert(
            keys::FAVORITES.to_string(),
            Value::String("oops".to_string()),
        );

        let result: Result<Option<Vec<i32>>, _> = store.get(keys::FAVORITES).await;
        assert!(matches!(result, Err(StoreError::Value { .. })));
    }
}
