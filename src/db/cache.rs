use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Generated photo of a menu item, keyed by its normalized name
    Image(String),
    /// Computed menu for a movie title
    Menu(String),
}

impl CacheKey {
    /// Image key for a menu item name: trimmed and lowercased
    pub fn image(item_name: &str) -> Self {
        CacheKey::Image(item_name.trim().to_lowercase())
    }

    pub fn menu(title: &str) -> Self {
        CacheKey::Menu(title.to_string())
    }

    /// The raw key string, as used for in-memory lookups
    pub fn as_str(&self) -> &str {
        match self {
            CacheKey::Image(name) => name,
            CacheKey::Menu(title) => title,
        }
    }

    /// File name of the cache entry, or `None` when the key cannot be stored
    pub fn file_name(&self) -> Option<String> {
        match self {
            CacheKey::Image(name) if name.is_empty() => None,
            CacheKey::Image(name) => {
                let digest = Sha256::digest(name.as_bytes());
                Some(format!("{}.png", hex::encode(digest)))
            }
            CacheKey::Menu(title) => {
                let safe = sanitize_title(title);
                if safe.is_empty() {
                    None
                } else {
                    Some(format!("{}.json", safe))
                }
            }
        }
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Image(name) => write!(f, "image:{}", name),
            CacheKey::Menu(title) => write!(f, "menu:{}", title.to_lowercase()),
        }
    }
}

/// Lowercases a title and collapses every run of characters outside
/// `[a-z0-9_-]` into a single hyphen, trimming hyphens at both ends.
pub fn sanitize_title(title: &str) -> String {
    static UNSAFE_RUN: OnceLock<Regex> = OnceLock::new();
    let re = UNSAFE_RUN.get_or_init(|| Regex::new(r"[^a-z0-9_-]+").expect("static regex"));

    re.replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Resolves a key to its path under `root`
pub(crate) fn entry_path(root: &Path, key: &CacheKey) -> Option<PathBuf> {
    key.file_name().map(|name| root.join(name))
}

/// Writes `bytes` to a sibling temp file and renames it over `path`, so
/// concurrent readers never observe a partially written entry.
pub(crate) async fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let tmp = path.with_file_name(format!(".{}.tmp", Uuid::new_v4()));
    tokio::fs::write(&tmp, bytes).await?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_key_normalizes_name() {
        let key = CacheKey::image("  Royale With Cheese ");
        assert_eq!(key, CacheKey::Image("royale with cheese".to_string()));
    }

    #[test]
    fn test_image_file_name_is_sha256_hex() {
        let key = CacheKey::image("abc");
        assert_eq!(
            key.file_name().unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad.png"
        );
    }

    #[test]
    fn test_image_file_name_case_insensitive() {
        assert_eq!(
            CacheKey::image("Milkshake").file_name(),
            CacheKey::image("milkshake ").file_name()
        );
    }

    #[test]
    fn test_empty_image_key_has_no_file() {
        assert_eq!(CacheKey::image("   ").file_name(), None);
    }

    #[test]
    fn test_menu_file_name_sanitized() {
        let key = CacheKey::menu("Pulp Fiction");
        assert_eq!(key.file_name().unwrap(), "pulp-fiction.json");
    }

    #[test]
    fn test_sanitize_collapses_runs_and_trims() {
        assert_eq!(sanitize_title("  Star Wars: Episode IV!! "), "star-wars-episode-iv");
        assert_eq!(sanitize_title("WALL·E"), "wall-e");
        assert_eq!(sanitize_title("the_matrix-1999"), "the_matrix-1999");
        assert_eq!(sanitize_title("--Alien--"), "alien");
    }

    #[test]
    fn test_menu_key_without_safe_chars_has_no_file() {
        assert_eq!(CacheKey::menu("!!!").file_name(), None);
    }

    #[test]
    fn test_cache_key_display() {
        assert_eq!(CacheKey::menu("Inception").to_string(), "menu:inception");
        assert_eq!(CacheKey::image("Popcorn").to_string(), "image:popcorn");
    }
}
