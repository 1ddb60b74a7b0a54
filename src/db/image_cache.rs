use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::cache::{entry_path, write_atomic, CacheKey};
use crate::error::{AppError, AppResult};

/// Prefix every persisted image value must carry
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Content-addressed on-disk store of generated food photos.
///
/// Entries are stored as raw PNG bytes under `sha256(key).png` and handed
/// back as `data:image/png;base64,` URIs.
#[derive(Debug, Clone)]
pub struct DiskImageCache {
    root: PathBuf,
}

impl DiskImageCache {
    pub fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the cached image as a data URI, or `None` on a miss or read failure
    pub async fn get(&self, key: &CacheKey) -> Option<String> {
        let path = entry_path(&self.root, key)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Some(format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed reading image cache");
                None
            }
        }
    }

    /// Persists a PNG data URI. Values without the PNG data URI prefix are ignored.
    ///
    /// Returns whether the image was written.
    pub async fn set(&self, key: &CacheKey, data_uri: &str) -> bool {
        let Some(encoded) = data_uri.strip_prefix(PNG_DATA_URI_PREFIX) else {
            tracing::debug!(key = %key, "Refusing to cache value without PNG data URI prefix");
            return false;
        };
        let Some(path) = entry_path(&self.root, key) else {
            return false;
        };

        match Self::write(&path, encoded).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed writing image cache");
                false
            }
        }
    }

    async fn write(path: &std::path::Path, encoded: &str) -> AppResult<()> {
        let payload = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::InvalidInput(format!("Invalid base64 image data: {}", e)))?;
        write_atomic(path, &payload).await
    }
}
