//! Release render pipeline.
//!
//! Double-checked cache population: a lock-free fast path for populated
//! keys, then a render lock with a mandatory presence re-check before any
//! minification or file write. Without the re-check, N concurrent
//! first-time renders of one bundle would each minify and write the same
//! output file.

use std::path::PathBuf;

use super::ScriptBundle;
use crate::error::BundleError;
use crate::hash;
use crate::minify::{self, Compressor};
use crate::tag::{self, HASH_MARKER, MIN_JS_SUFFIX};

pub(super) fn render_release(
    bundle: &ScriptBundle,
    render_to: &str,
    key: &str,
) -> Result<String, BundleError> {
    // Fast path: no lock once the key is populated.
    if let Some(markup) = bundle.cache.markup(key) {
        return Ok(markup);
    }

    let _guard = bundle.cache.render_guard();
    // Re-check under the lock: another writer may have won.
    if let Some(markup) = bundle.cache.markup(key) {
        return Ok(markup);
    }

    let compressor = minify::get(bundle.minifier.identifier())?;

    // A `#` marker embeds the hash in the filename itself, so the minified
    // concatenation is needed up front. It is computed once and reused for
    // the write below.
    let mut render_to = render_to.to_string();
    let hash_in_filename = render_to.contains(HASH_MARKER);
    let mut minified = None;
    let mut digest = None;
    if hash_in_filename {
        let content = concat_minified(bundle, compressor)?;
        let h = hash::fingerprint(&content);
        render_to = render_to.replace(HASH_MARKER, &h);
        digest = Some(h);
        minified = Some(content);
    }

    let output = bundle.fs.resolve(&render_to);

    let content = if bundle.render_only_if_missing && bundle.fs.exists(&output) {
        bundle
            .fs
            .read(&output)
            .map_err(|e| BundleError::OutputRead {
                path: output.display().to_string(),
                source: e,
            })?
    } else {
        let content = match minified.take() {
            Some(content) => content,
            None => concat_minified(bundle, compressor)?,
        };
        bundle
            .fs
            .write(&output, &content)
            .map_err(|e| BundleError::OutputWrite {
                path: output.display().to_string(),
                source: e,
            })?;
        content
    };

    let digest = match digest {
        Some(digest) => digest,
        None => hash::fingerprint(&content),
    };

    let bundle_tag = if hash_in_filename {
        // Hash already in the filename, no query suffix.
        tag::script(&render_to)
    } else {
        tag::script(&tag::with_revision(&render_to, &digest))
    };

    // Remote tags first, then the local bundle tag.
    let mut markup: String = bundle.remote_files.iter().map(|uri| tag::script(uri)).collect();
    markup.push_str(&bundle_tag);

    let resolved: Vec<PathBuf> = bundle.files.iter().map(|f| bundle.fs.resolve(f)).collect();

    crate::debug!("bundle"; "rendered `{key}` -> {}", output.display());
    bundle.cache.add(key, markup.clone(), resolved);
    Ok(markup)
}

/// Concatenate member files in order, compressing each through `compressor`
/// except pre-minified `.min.js` files, which pass through verbatim.
fn concat_minified(
    bundle: &ScriptBundle,
    compressor: &dyn Compressor,
) -> Result<String, BundleError> {
    let mut output = String::new();
    for file in &bundle.files {
        let path = bundle.fs.resolve(file);
        let content = bundle
            .fs
            .read(&path)
            .map_err(|e| BundleError::file_processing(file.clone(), e))?;
        if file.ends_with(MIN_JS_SUFFIX) {
            output.push_str(&content);
        } else {
            let compressed = compressor
                .compress(&content)
                .map_err(|e| BundleError::file_processing(file.clone(), e))?;
            output.push_str(&compressed);
        }
    }
    Ok(output)
}
