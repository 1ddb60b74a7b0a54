use std::path::PathBuf;

use super::cache::{entry_path, write_atomic, CacheKey};
use crate::error::AppResult;

/// On-disk JSON store of computed menus, one pretty-printed file per title
#[derive(Debug, Clone)]
pub struct MenuCache {
    root: PathBuf,
}

impl MenuCache {
    pub fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Retrieves a value from the cache by key
    ///
    /// Missing, unreadable or undecodable entries are all treated as a miss.
    pub async fn get_from_cache<T: serde::de::DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let path = entry_path(&self.root, key)?;

        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed reading menu cache");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed decoding menu cache entry");
                None
            }
        }
    }

    /// Stores a value in the cache, logging instead of failing on errors
    pub async fn set_in_cache<T: serde::Serialize>(&self, key: &CacheKey, value: &T) {
        let Some(path) = entry_path(&self.root, key) else {
            tracing::debug!(key = %key, "Key has no cacheable file name, skipping write");
            return;
        };

        if let Err(e) = Self::write(&path, value).await {
            tracing::warn!(key = %key, error = %e, "Failed writing menu cache");
        }
    }

    async fn write<T: serde::Serialize>(path: &std::path::Path, value: &T) -> AppResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        write_atomic(path, json.as_bytes()).await
    }
}
