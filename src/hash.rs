//! Content hashing for cache-busting.
//!
//! Uses `rustc_hash::FxHasher` for fast, deterministic hashing of bundle
//! content. The digest is an 8-char hex fingerprint, short enough to embed
//! in filenames and query strings.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute hash and return as 8-char hex fingerprint.
///
/// Same content always yields the same fingerprint; any content change
/// yields a different one (modulo truncated-hash collisions).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    format!("{:016x}", compute(value))[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_deterministic() {
        let a = fingerprint("var x=1;");
        let b = fingerprint("var x=1;");
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        assert_ne!(fingerprint("var x=1;"), fingerprint("var x=2;"));
    }

    #[test]
    fn test_fingerprint_is_hex() {
        assert!(fingerprint("anything").chars().all(|c| c.is_ascii_hexdigit()));
    }
}
