//! JavaScript compressors backed by oxc.
//!
//! All passes share one shape: parse, optionally run the oxc minifier, then
//! emit with minified codegen. The passes differ only in their
//! `MinifierOptions`.

use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::{CompressError, Compressor};

fn minify_source(source: &str, options: Option<MinifierOptions>) -> Result<String, CompressError> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CompressError::Parse(message));
    }
    let mut program = ret.program;
    let scoping = match options {
        Some(options) => Minifier::new(options).minify(&allocator, &mut program).scoping,
        None => None,
    };
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(scoping)
        .build(&program)
        .code;
    Ok(code)
}

/// Passthrough compressor.
pub struct NoOp;

impl Compressor for NoOp {
    fn compress(&self, source: &str) -> Result<String, CompressError> {
        Ok(source.to_string())
    }
}

/// Whitespace/comment removal via minified codegen, no compression.
pub struct Whitespace;

impl Compressor for Whitespace {
    fn compress(&self, source: &str) -> Result<String, CompressError> {
        minify_source(source, None)
    }
}

/// Compression with original identifiers preserved.
pub struct Compress;

impl Compressor for Compress {
    fn compress(&self, source: &str) -> Result<String, CompressError> {
        minify_source(
            source,
            Some(MinifierOptions {
                mangle: None,
                compress: Some(CompressOptions::default()),
            }),
        )
    }
}

/// Compression plus identifier mangling.
pub struct Mangle;

impl Compressor for Mangle {
    fn compress(&self, source: &str) -> Result<String, CompressError> {
        minify_source(
            source,
            Some(MinifierOptions {
                mangle: Some(MangleOptions::default()),
                compress: Some(CompressOptions::default()),
            }),
        )
    }
}

/// Smallest output: aggressive compression plus mangling.
pub struct Full;

impl Compressor for Full {
    fn compress(&self, source: &str) -> Result<String, CompressError> {
        minify_source(
            source,
            Some(MinifierOptions {
                mangle: Some(MangleOptions::default()),
                compress: Some(CompressOptions::smallest()),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "// setup\nexport function add(first, second) {\n    return first + second;\n}\n";

    #[test]
    fn test_noop_is_identity() {
        assert_eq!(NoOp.compress(SOURCE).unwrap(), SOURCE);
    }

    #[test]
    fn test_whitespace_strips_comments_and_spacing() {
        let out = Whitespace.compress(SOURCE).unwrap();
        assert!(!out.contains("setup"));
        assert!(!out.contains('\n') || out.trim_end().lines().count() == 1);
        // No compression: identifiers survive as written.
        assert!(out.contains("first"));
        assert!(out.len() < SOURCE.len());
    }

    #[test]
    fn test_compress_removes_dead_branches() {
        let out = Compress
            .compress("if (true) { used(); } else { unused(); }")
            .unwrap();
        assert!(out.contains("used"));
        assert!(!out.contains("unused"));
    }

    #[test]
    fn test_mangle_renames_parameters() {
        let out = Mangle.compress(SOURCE).unwrap();
        // Exported name is preserved, parameters are not.
        assert!(out.contains("add"));
        assert!(!out.contains("first"));
    }

    #[test]
    fn test_full_is_smaller_than_source() {
        let out = Full.compress(SOURCE).unwrap();
        assert!(out.len() < SOURCE.len());
        assert!(!out.contains("first"));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Full.compress("function {").unwrap_err();
        assert!(matches!(err, CompressError::Parse(_)));
    }

    #[test]
    fn test_deterministic_output() {
        let a = Full.compress(SOURCE).unwrap();
        let b = Full.compress(SOURCE).unwrap();
        assert_eq!(a, b);
    }
}
