//! Filesystem capability consumed by the render pipeline.
//!
//! The pipeline never touches `std::fs` directly; it goes through [`AssetFs`]
//! so tests can substitute counting or in-memory implementations. [`DiskFs`]
//! is the default implementation, rooted at an application directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolution, existence, read and write for bundle member and output files.
pub trait AssetFs: Send + Sync {
    /// Resolve an app-relative path expression to a filesystem path.
    fn resolve(&self, app_path: &str) -> PathBuf;

    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> io::Result<String>;

    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Disk-backed [`AssetFs`] rooted at an application directory.
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetFs for DiskFs {
    /// Resolve an app-relative path under the root.
    ///
    /// A query-string suffix belongs to the served URL, not the file, and is
    /// stripped (`scripts/app.js?v=1` resolves to `<root>/scripts/app.js`).
    /// Leading `~/` and `/` are treated as the app root.
    fn resolve(&self, app_path: &str) -> PathBuf {
        let path = app_path.split('?').next().unwrap_or(app_path);
        let path = path.trim_start_matches("~/").trim_start_matches('/');
        self.root.join(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }
}

/// Debug-status capability: ambient mode plus a per-bundle override.
///
/// Debug mode serves original, individually-tagged files for live editing;
/// release mode serves the minified, cache-busted artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugStatus {
    ambient: bool,
    forced: Option<bool>,
}

impl DebugStatus {
    pub fn new(ambient: bool) -> Self {
        Self {
            ambient,
            forced: None,
        }
    }

    /// Force debug mode for this instance, overriding the ambient value.
    pub fn force_debug(&mut self) {
        self.forced = Some(true);
    }

    /// Force release mode for this instance, overriding the ambient value.
    pub fn force_release(&mut self) {
        self.forced = Some(false);
    }

    pub fn is_debugging_enabled(&self) -> bool {
        self.forced.unwrap_or(self.ambient)
    }
}
