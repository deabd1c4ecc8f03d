//! Minifier strategies and their registry.
//!
//! A [`Compressor`] is a pure text transform. Concrete strategies are
//! registered under string identifiers; [`get`] looks them up and fails with
//! [`BundleError::UnknownMinifier`] for unregistered identifiers. The caller
//! facing [`Minifier`] enum maps onto identifiers with a total function, so
//! bundles built through the enum can never hit that error.

mod js;

use thiserror::Error;

use crate::error::BundleError;

/// A pure, side-effect-free content transform.
pub trait Compressor: Send + Sync {
    fn compress(&self, source: &str) -> Result<String, CompressError>;
}

/// Failure inside a single compressor invocation.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("javascript parse error: {0}")]
    Parse(String),
}

/// Registered compressor identifiers.
pub mod identifier {
    /// Passthrough, no transformation.
    pub const NOOP: &str = "noop";
    /// Whitespace and comment removal only.
    pub const WHITESPACE: &str = "whitespace";
    /// Compression without identifier mangling.
    pub const COMPRESS: &str = "compress";
    /// Compression plus identifier mangling.
    pub const MANGLE: &str = "mangle";
    /// Smallest-output compression plus mangling. Always registered; the
    /// fallback for unmapped enum values.
    pub const FULL: &str = "full";
}

static NOOP: js::NoOp = js::NoOp;
static WHITESPACE: js::Whitespace = js::Whitespace;
static COMPRESS: js::Compress = js::Compress;
static MANGLE: js::Mangle = js::Mangle;
static FULL: js::Full = js::Full;

/// Look up a compressor by its raw registry identifier.
pub fn get(id: &str) -> Result<&'static dyn Compressor, BundleError> {
    match id {
        identifier::NOOP => Ok(&NOOP),
        identifier::WHITESPACE => Ok(&WHITESPACE),
        identifier::COMPRESS => Ok(&COMPRESS),
        identifier::MANGLE => Ok(&MANGLE),
        identifier::FULL => Ok(&FULL),
        other => Err(BundleError::UnknownMinifier(other.to_string())),
    }
}

/// Closed set of minifier choices exposed to bundle builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Minifier {
    /// Concatenate files verbatim.
    NoOp,
    /// Strip whitespace and comments, keep the code as written.
    Whitespace,
    /// Compress without renaming identifiers.
    Compress,
    /// Compress and mangle identifiers.
    Mangle,
    /// Smallest output: aggressive compression plus mangling.
    #[default]
    Full,
}

impl Minifier {
    /// Map to the registry identifier. Total: every variant resolves to a
    /// registered compressor, with [`identifier::FULL`] as the default arm.
    pub fn identifier(self) -> &'static str {
        match self {
            Minifier::NoOp => identifier::NOOP,
            Minifier::Whitespace => identifier::WHITESPACE,
            Minifier::Compress => identifier::COMPRESS,
            Minifier::Mangle => identifier::MANGLE,
            Minifier::Full => identifier::FULL,
        }
    }
}
