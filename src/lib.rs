//! squish - asset bundling engine.
//!
//! Builds a named, ordered collection of script files into either a debug
//! rendering (one `<script>` tag per original file) or a release rendering:
//! one concatenated, minified, content-addressed output file referenced by a
//! single tag. Release renders are computed once per bundle key and cached
//! for the life of the process, with double-checked locking so concurrent
//! first renders converge on one result.
//!
//! ```no_run
//! use squish::{Minifier, ScriptBundle};
//!
//! let markup = ScriptBundle::new("/var/www/site")
//!     .add_remote("scripts/jquery.js", "https://cdn.example.com/jquery.js")
//!     .add("scripts/app.js")
//!     .add("scripts/widgets.js")
//!     .with_minifier(Minifier::Full)
//!     .render("scripts/bundle-#.js")?;
//! # Ok::<(), squish::BundleError>(())
//! ```

mod bundle;
mod cache;
mod error;
mod fs;
pub mod hash;
pub mod logger;
mod minify;
pub mod tag;

pub use bundle::ScriptBundle;
pub use cache::{BUNDLE_CACHE, BundleCache, CacheEntry, DEBUG_CACHE, DebugCache};
pub use error::BundleError;
pub use fs::{AssetFs, DebugStatus, DiskFs};
pub use minify::{CompressError, Compressor, Minifier, get as get_compressor, identifier};
