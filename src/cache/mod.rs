//! Process-wide bundle caches.
//!
//! [`BundleCache`] gives release renders their "render once" semantics: a
//! key is populated exactly once per process (until an explicit `clear`),
//! with writers serialized through a render lock and re-checking presence
//! after acquiring it. [`DebugCache`] is the opposite: debug renders always
//! overwrite, because debug mode assumes live-edited sources.

mod debug;

pub use debug::DebugCache;

use parking_lot::{Mutex, MutexGuard, RwLock};
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

use crate::error::BundleError;

/// A rendered bundle: its tag markup and the resolved member files that
/// produced it.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub markup: String,
    pub files: Vec<PathBuf>,
}

/// Render-once cache from bundle key to rendered markup.
pub struct BundleCache {
    entries: RwLock<FxHashMap<String, CacheEntry>>,
    render_lock: Mutex<()>,
}

impl BundleCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            render_lock: Mutex::new(()),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Rendered markup for `key`.
    ///
    /// Errors with [`BundleError::KeyNotFound`] if the key was never
    /// populated; callers are expected to check `contains_key` or render
    /// first.
    pub fn get(&self, key: &str) -> Result<String, BundleError> {
        self.markup(key)
            .ok_or_else(|| BundleError::KeyNotFound(key.to_string()))
    }

    /// Fast-path lookup without the error wrapping.
    pub fn markup(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).map(|e| e.markup.clone())
    }

    /// Resolved member files recorded for `key` when it was rendered.
    pub fn files(&self, key: &str) -> Option<Vec<PathBuf>> {
        self.entries.read().get(key).map(|e| e.files.clone())
    }

    /// Insert if absent. A present key is left untouched, preserving the
    /// render-once invariant.
    pub fn add(&self, key: &str, markup: String, files: Vec<PathBuf>) {
        self.entries
            .write()
            .entry(key.to_string())
            .or_insert(CacheEntry { markup, files });
    }

    /// Serialize bundle population. Holders must re-check `contains_key`
    /// before doing any expensive work; a concurrent writer for the same
    /// key may have completed first.
    pub(crate) fn render_guard(&self) -> MutexGuard<'_, ()> {
        self.render_lock.lock()
    }

    /// Remove all entries. For test isolation, not normal operation.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for BundleCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide bundle cache shared by all bundles built via
/// [`ScriptBundle::new`](crate::ScriptBundle::new).
pub static BUNDLE_CACHE: LazyLock<Arc<BundleCache>> = LazyLock::new(|| Arc::new(BundleCache::new()));

/// Process-wide debug rendering cache.
pub static DEBUG_CACHE: LazyLock<Arc<DebugCache>> = LazyLock::new(|| Arc::new(DebugCache::new()));
