use std::{
    collections::{HashMap, VecDeque},
    path::{Path, PathBuf},
};

use log::debug;

use crate::extract::ExtractedNames;

/// A bounded cache of extraction results keyed by font file path.
///
/// The capacity is injected by whoever owns the cache; inserting past it
/// evicts the least recently used entry. A hit refreshes recency.
pub struct FontNameCache {
    capacity: usize,
    entries: HashMap<PathBuf, ExtractedNames>,
    // least recently used at the front
    order: VecDeque<PathBuf>,
}

impl FontNameCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&mut self, path: &Path) -> Option<&ExtractedNames> {
        if !self.entries.contains_key(path) {
            return None;
        }

        self.touch(path);
        self.entries.get(path)
    }

    /// Stores the names extracted from `path`, evicting the least recently
    /// used entry if the cache is full. Re-inserting an existing path
    /// replaces its value and refreshes its recency.
    pub fn insert(&mut self, path: PathBuf, names: ExtractedNames) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.insert(path.clone(), names).is_some() {
            self.touch(&path);
            return;
        }

        self.order.push_back(path);

        if self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                debug!("evicting cached font names for {}", oldest.display());
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn remove(&mut self, path: &Path) -> Option<ExtractedNames> {
        if let Some(position) = self.order.iter().position(|p| p == path) {
            self.order.remove(position);
        }

        self.entries.remove(path)
    }

    fn touch(&mut self, path: &Path) {
        if let Some(position) = self.order.iter().position(|p| p == path) {
            if let Some(entry) = self.order.remove(position) {
                self.order.push_back(entry);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn names(family: &str) -> ExtractedNames {
        ExtractedNames {
            family_name: Some(family.to_owned()),
            full_name: None,
        }
    }

    #[test]
    fn eviction_is_oldest_first() {
        let mut cache = FontNameCache::new(2);

        cache.insert(PathBuf::from("a.ttf"), names("A"));
        cache.insert(PathBuf::from("b.ttf"), names("B"));
        cache.insert(PathBuf::from("c.ttf"), names("C"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(Path::new("a.ttf")).is_none());
        assert!(cache.get(Path::new("b.ttf")).is_some());
        assert!(cache.get(Path::new("c.ttf")).is_some());
    }

    #[test]
    fn a_hit_refreshes_recency() {
        let mut cache = FontNameCache::new(2);

        cache.insert(PathBuf::from("a.ttf"), names("A"));
        cache.insert(PathBuf::from("b.ttf"), names("B"));

        // touch "a" so that "b" is now the oldest
        assert!(cache.get(Path::new("a.ttf")).is_some());
        cache.insert(PathBuf::from("c.ttf"), names("C"));

        assert!(cache.get(Path::new("a.ttf")).is_some());
        assert!(cache.get(Path::new("b.ttf")).is_none());
    }

    #[test]
    fn reinsert_replaces_value_without_growing() {
        let mut cache = FontNameCache::new(2);

        cache.insert(PathBuf::from("a.ttf"), names("A"));
        cache.insert(PathBuf::from("a.ttf"), names("A2"));

        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get(Path::new("a.ttf")).unwrap().family_name.as_deref(),
            Some("A2")
        );
    }

    #[test]
    fn remove_drops_the_entry() {
        let mut cache = FontNameCache::new(2);

        cache.insert(PathBuf::from("a.ttf"), names("A"));

        assert!(cache.remove(Path::new("a.ttf")).is_some());
        assert!(cache.is_empty());
        assert!(cache.remove(Path::new("a.ttf")).is_none());
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = FontNameCache::new(0);

        cache.insert(PathBuf::from("a.ttf"), names("A"));

        assert!(cache.is_empty());
    }
}
