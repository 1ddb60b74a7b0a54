pub mod cache;
pub mod image_cache;
pub mod memory;
pub mod menu_cache;

pub use cache::CacheKey;
pub use image_cache::DiskImageCache;
pub use memory::ImageLru;
pub use menu_cache::MenuCache;
