//! Script bundle builder and rendering.
//!
//! [`ScriptBundle`] accumulates an ordered list of member files plus
//! remote/CDN URIs, then renders them either as one tag per file (debug) or
//! as a single minified, cache-busted artifact (release). Release renders
//! are cached process-wide and computed once per key; the release path
//! lives in `pipeline`.

mod pipeline;


use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{BUNDLE_CACHE, BundleCache, DEBUG_CACHE, DebugCache};
use crate::error::BundleError;
use crate::fs::{AssetFs, DebugStatus, DiskFs};
use crate::minify::Minifier;
use crate::tag;

/// Fluent builder for a named script bundle.
///
/// Accumulation calls (`add`, `add_remote`, `with_minifier`, ...) configure
/// the bundle; `render`/`render_named` produce markup. Mutating a bundle
/// after its first render has no effect on already-cached output.
///
/// ```no_run
/// use squish::{Minifier, ScriptBundle};
///
/// let markup = ScriptBundle::new("/var/www/site")
///     .add("scripts/jquery.min.js")
///     .add("scripts/app.js")
///     .with_minifier(Minifier::Full)
///     .render("scripts/bundle-#.js")?;
/// # Ok::<(), squish::BundleError>(())
/// ```
pub struct ScriptBundle {
    files: Vec<String>,
    remote_files: Vec<String>,
    minifier: Minifier,
    render_only_if_missing: bool,
    debug: DebugStatus,
    fs: Arc<dyn AssetFs>,
    cache: Arc<BundleCache>,
    debug_cache: Arc<DebugCache>,
}

impl ScriptBundle {
    /// Bundle rooted at an application directory, using the process-wide
    /// caches and the ambient release mode.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_parts(
            Arc::new(DiskFs::new(root)),
            DebugStatus::default(),
            Arc::clone(&BUNDLE_CACHE),
            Arc::clone(&DEBUG_CACHE),
        )
    }

    /// Bundle with injected collaborators. Tests use this to isolate caches
    /// and substitute filesystem fakes.
    pub fn with_parts(
        fs: Arc<dyn AssetFs>,
        debug: DebugStatus,
        cache: Arc<BundleCache>,
        debug_cache: Arc<DebugCache>,
    ) -> Self {
        Self {
            files: Vec::new(),
            remote_files: Vec::new(),
            minifier: Minifier::default(),
            render_only_if_missing: false,
            debug,
            fs,
            cache,
            debug_cache,
        }
    }

    /// Append a local member file. Order is significant and duplicates are
    /// allowed; the concatenation follows this order exactly.
    pub fn add(mut self, path: impl Into<String>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Append a remote/CDN file with a local fallback.
    ///
    /// In release mode the remote URI is emitted as its own tag, never
    /// minified or cached as content. In debug mode the local fallback
    /// joins the ordinary member list so developers serve editable copies.
    /// The routing is decided here, so call `force_debug` first if needed.
    pub fn add_remote(mut self, local: impl Into<String>, remote: impl Into<String>) -> Self {
        if self.debug.is_debugging_enabled() {
            self.files.push(local.into());
        } else {
            self.remote_files.push(remote.into());
        }
        self
    }

    pub fn with_minifier(mut self, minifier: Minifier) -> Self {
        self.minifier = minifier;
        self
    }

    /// Reuse an existing output file instead of recomputing, so an already
    /// published artifact survives process restarts un-minified.
    pub fn render_only_if_missing(mut self) -> Self {
        self.render_only_if_missing = true;
        self
    }

    /// Force debug mode for this bundle, overriding the ambient status.
    pub fn force_debug(mut self) -> Self {
        self.debug.force_debug();
        self
    }

    /// Force release mode for this bundle, overriding the ambient status.
    pub fn force_release(mut self) -> Self {
        self.debug.force_release();
        self
    }

    /// Render using the output path expression itself as the cache key.
    pub fn render(&self, render_to: &str) -> Result<String, BundleError> {
        self.render_as(render_to, render_to)
    }

    /// Render to `render_to`, cached under the explicit key `name`.
    pub fn render_named(&self, name: &str, render_to: &str) -> Result<String, BundleError> {
        self.render_as(render_to, name)
    }

    /// Markup of an already-rendered bundle, looked up by name.
    ///
    /// Reads the debug cache in debug mode, the bundle cache otherwise.
    pub fn rendered(&self, name: &str) -> Result<String, BundleError> {
        if self.debug.is_debugging_enabled() {
            self.debug_cache
                .get(name)
                .ok_or_else(|| BundleError::KeyNotFound(name.to_string()))
        } else {
            self.cache.get(name)
        }
    }

    /// Drop all cached renders (bundle and debug caches). Test isolation
    /// only; release caches are meant to live for the whole process.
    pub fn clear_cache(&self) {
        self.cache.clear();
        self.debug_cache.clear();
    }

    fn render_as(&self, render_to: &str, key: &str) -> Result<String, BundleError> {
        if self.debug.is_debugging_enabled() {
            return Ok(self.render_debug(key));
        }
        pipeline::render_release(self, render_to, key)
    }

    /// Debug branch: one tag per member file, in order, always recomputed.
    /// No minification, no hashing, no output file.
    fn render_debug(&self, key: &str) -> String {
        let markup: String = self.files.iter().map(|f| tag::script(f)).collect();
        self.debug_cache.insert(key, markup.clone());
        markup
    }
}
