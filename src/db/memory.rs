use std::collections::{HashMap, VecDeque};

/// Number of images kept in memory before the least recently used is evicted
pub const IMAGE_LRU_CAPACITY: usize = 100;

/// Bounded in-memory cache of image data URIs in front of the disk cache
#[derive(Debug)]
pub struct ImageLru {
    capacity: usize,
    entries: HashMap<String, String>,
    /// Front is least recently used
    order: VecDeque<String>,
}

impl Default for ImageLru {
    fn default() -> Self {
        Self::new(IMAGE_LRU_CAPACITY)
    }
}

impl ImageLru {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&mut self, key: &str) -> Option<String> {
        let value = self.entries.get(key)?.clone();
        self.touch(key);
        Some(value)
    }

    pub fn insert(&mut self, key: String, value: String) {
        if self.entries.insert(key.clone(), value).is_some() {
            self.touch(&key);
            return;
        }

        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let mut lru = ImageLru::default();
        assert_eq!(lru.get("popcorn"), None);
        assert!(lru.is_empty());
    }

    #[test]
    fn test_evicts_oldest_past_capacity() {
        let mut lru = ImageLru::default();
        for i in 0..=IMAGE_LRU_CAPACITY {
            lru.insert(format!("item-{}", i), format!("data-{}", i));
        }

        assert_eq!(lru.len(), IMAGE_LRU_CAPACITY);
        assert_eq!(lru.get("item-0"), None);
        assert_eq!(lru.get("item-1"), Some("data-1".to_string()));
        assert_eq!(
            lru.get(&format!("item-{}", IMAGE_LRU_CAPACITY)),
            Some(format!("data-{}", IMAGE_LRU_CAPACITY))
        );
    }

    #[test]
    fn test_read_refreshes_recency() {
        let mut lru = ImageLru::new(2);
        lru.insert("a".into(), "1".into());
        lru.insert("b".into(), "2".into());

        assert!(lru.get("a").is_some());
        lru.insert("c".into(), "3".into());

        assert_eq!(lru.get("b"), None);
        assert_eq!(lru.get("a"), Some("1".to_string()));
        assert_eq!(lru.get("c"), Some("3".to_string()));
    }

    #[test]
    fn test_reinsert_replaces_without_growing() {
        let mut lru = ImageLru::new(2);
        lru.insert("a".into(), "1".into());
        lru.insert("a".into(), "2".into());

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.get("a"), Some("2".to_string()));
    }
}
