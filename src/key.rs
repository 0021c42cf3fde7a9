//! Canonical keys for pair aggregation.
//!
//! A key is derived from the two entities of a record. In ordered mode the
//! key is the record itself, so `(a, b)` and `(b, a)` stay distinct. In
//! unordered mode the smaller entity always comes first, so both
//! orientations collapse to the same key.
//!
//! Entities compare as byte sequences, which gives the same ordering as
//! `memcmp` on the raw line contents.

/// How a record is turned into a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keep `(a, b)` exactly as read.
    Ordered,
    /// Sort the two entities so `(a, b)` and `(b, a)` are one key.
    Unordered,
}

/// A canonical pair key. Ordering is by `a`, then by `b`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    pub a: Vec<u8>,
    pub b: Vec<u8>,
}

impl PairKey {
    pub fn new(a: impl Into<Vec<u8>>, b: impl Into<Vec<u8>>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// True when both sides are the same entity.
    #[inline]
    pub fn is_self_pair(&self) -> bool {
        self.a == self.b
    }
}

/// Build the canonical key for a record.
///
/// Equal entities map to `(a, a)` in either mode.
#[inline]
pub fn normalize(a: Vec<u8>, b: Vec<u8>, mode: Mode) -> PairKey {
    match mode {
        Mode::Ordered => PairKey { a, b },
        Mode::Unordered if a <= b => PairKey { a, b },
        Mode::Unordered => PairKey { a: b, b: a },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(a: &str, b: &str, mode: Mode) -> PairKey {
        normalize(a.into(), b.into(), mode)
    }

    #[test]
    fn test_ordered_is_identity() {
        assert_eq!(key("y", "x", Mode::Ordered), PairKey::new("y", "x"));
        assert_ne!(key("x", "y", Mode::Ordered), key("y", "x", Mode::Ordered));
    }

    #[test]
    fn test_unordered_collapses_orientation() {
        assert_eq!(key("y", "x", Mode::Unordered), PairKey::new("x", "y"));
        assert_eq!(key("x", "y", Mode::Unordered), key("y", "x", Mode::Unordered));
    }

    #[test]
    fn test_equal_entities() {
        let k = key("same", "same", Mode::Unordered);
        assert_eq!(k, PairKey::new("same", "same"));
        assert!(k.is_self_pair());
    }

    #[test]
    fn test_byte_ordering() {
        // Prefix sorts first; uppercase sorts before lowercase.
        assert_eq!(key("abc", "ab", Mode::Unordered), PairKey::new("ab", "abc"));
        assert_eq!(key("b", "B", Mode::Unordered), PairKey::new("B", "b"));
        // Bytes compare unsigned.
        assert_eq!(
            normalize(vec![0x80], vec![0x7f], Mode::Unordered),
            PairKey::new(vec![0x7f], vec![0x80])
        );
    }

    #[test]
    fn test_no_whitespace_folding() {
        assert_ne!(key("x ", "y", Mode::Unordered), key("x", "y", Mode::Unordered));
    }

    #[test]
    fn test_key_ordering() {
        let mut keys = vec![
            PairKey::new("y", "x"),
            PairKey::new("x", "z"),
            PairKey::new("x", "y"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                PairKey::new("x", "y"),
                PairKey::new("x", "z"),
                PairKey::new("y", "x"),
            ]
        );
    }
}
