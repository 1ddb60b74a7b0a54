use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    db::{image_cache::PNG_DATA_URI_PREFIX, CacheKey, DiskImageCache, ImageLru},
    models::MenuItem,
    services::{llm::ImageGenerator, menu::prompts},
};

/// Resolves a photo for a menu item: memory, then disk, then generation
#[derive(Clone)]
pub struct ImageService {
    generator: Arc<dyn ImageGenerator>,
    disk: DiskImageCache,
    memory: Arc<Mutex<ImageLru>>,
}

impl ImageService {
    pub fn new(generator: Arc<dyn ImageGenerator>, disk: DiskImageCache) -> Self {
        Self {
            generator,
            disk,
            memory: Arc::new(Mutex::new(ImageLru::default())),
        }
    }

    /// Returns a `data:image/png;base64,` URI for the item, or `None` when
    /// no image could be found or generated.
    pub async fn image_for(&self, item: &MenuItem) -> Option<String> {
        if let Some(existing) = item.image_data.as_ref().filter(|d| !d.is_empty()) {
            return Some(existing.clone());
        }

        let key = CacheKey::image(&item.name);
        if key.as_str().is_empty() {
            return None;
        }

        if let Some(cached) = self.memory.lock().await.get(key.as_str()) {
            tracing::debug!(key = %key, "Image memory cache hit");
            return Some(cached);
        }

        if let Some(cached) = self.disk.get(&key).await {
            tracing::debug!(key = %key, "Image disk cache hit");
            self.remember(&key, &cached).await;
            return Some(cached);
        }

        let encoded = match self
            .generator
            .generate_image(&prompts::food_photo(&item.name))
            .await
        {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!(item = %item.name, error = %e, "Image generation failed");
                return None;
            }
        };

        let data_uri = format!("{}{}", PNG_DATA_URI_PREFIX, encoded);
        if !self.disk.set(&key, &data_uri).await {
            tracing::warn!(key = %key, "Generated image was not persisted to disk");
        }
        self.remember(&key, &data_uri).await;

        tracing::info!(item = %item.name, "Generated food image");
        Some(data_uri)
    }

    async fn remember(&self, key: &CacheKey, data_uri: &str) {
        self.memory
            .lock()
            .await
            .insert(key.as_str().to_string(), data_uri.to_string());
    }
}
