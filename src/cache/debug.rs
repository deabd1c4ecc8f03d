//! Debug rendering cache.

use dashmap::DashMap;

/// Bundle name → fully expanded per-file debug markup.
///
/// Unlike [`BundleCache`](super::BundleCache) this is not render-once:
/// every debug render overwrites its entry, so live edits to source files
/// are always reflected.
pub struct DebugCache {
    entries: DashMap<String, String>,
}

impl DebugCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn insert(&self, key: &str, markup: String) {
        self.entries.insert(key.to_string(), markup);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|m| m.clone())
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DebugCache {
    fn default() -> Self {
        Self::new()
    }
}
