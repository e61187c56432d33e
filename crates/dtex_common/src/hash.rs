//! Content hashing for convergence detection.

use std::fmt;

/// A 64-bit content hash computed using XXH3.
///
/// Two artifacts with the same `ContentHash` are assumed to have identical
/// content. The hash is order-sensitive over the whole byte stream and is
/// meant for change detection only, never for integrity or security.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(u64);

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-64.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(xxhash_rust::xxh3::xxh3_64(data))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:08x}..)", self.0 >> 32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = ContentHash::from_bytes(b"\\relax\n\\newlabel{sec:intro}{{1}{1}}");
        let b = ContentHash::from_bytes(b"\\relax\n\\newlabel{sec:intro}{{1}{1}}");
        assert_eq!(a, b);
    }

    #[test]
    fn single_byte_change_differs() {
        let a = ContentHash::from_bytes(b"\\newlabel{eq:1}{{1}{2}}");
        let b = ContentHash::from_bytes(b"\\newlabel{eq:1}{{1}{3}}");
        assert_ne!(a, b);
    }

    #[test]
    fn order_sensitive() {
        let a = ContentHash::from_bytes(b"ab");
        let b = ContentHash::from_bytes(b"ba");
        assert_ne!(a, b);
    }

    #[test]
    fn display_format() {
        let h = ContentHash::from_bytes(b"test");
        let s = format!("{h}");
        assert_eq!(s.len(), 16, "Display should be 16 hex chars");
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn debug_abbreviated() {
        let h = ContentHash::from_bytes(b"test");
        let s = format!("{h:?}");
        assert!(s.starts_with("ContentHash("));
        assert!(s.ends_with("..)"));
    }
}
