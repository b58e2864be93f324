//! Content fingerprint type.

use std::fmt;

/// A 32-byte BLAKE3 fingerprint of file content.
///
/// Exact and sampled fingerprints share this type and the same 64-character
/// lowercase hex form, so either can key a deduplication index. They are not
/// comparable with each other: the same file gives different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Digest length in bytes.
    pub const SIZE: usize = 32;

    /// Wraps a raw digest.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex form, 64 characters.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Parses the 64-character hex form, in either case.
    pub fn from_hex(text: &str) -> Option<Self> {
        let text = text.as_bytes();
        if text.len() != Self::SIZE * 2 {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(text.chunks_exact(2)) {
            *byte = (nibble(pair[0])? << 4) | nibble(pair[1])?;
        }
        Some(Self(bytes))
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl AsRef<[u8]> for ContentHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_form() {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&[0x00, 0x1F, 0xA0, 0xFF]);
        let hash = ContentHash::new(bytes);

        let hex = hash.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("001fa0ff00"));
        assert_eq!(hex, hash.to_string());
    }

    #[test]
    fn test_from_hex_accepts_either_case() {
        let hash = ContentHash::new([0xC3; 32]);
        assert_eq!(ContentHash::from_hex(&hash.to_hex()), Some(hash));
        assert_eq!(ContentHash::from_hex(&"C3".repeat(32)), Some(hash));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(ContentHash::from_hex("abc").is_none());
        assert!(ContentHash::from_hex(&"zz".repeat(32)).is_none());
        assert!(ContentHash::from_hex(&"0".repeat(63)).is_none());
        // Multi-byte characters never split into valid nibbles
        assert!(ContentHash::from_hex(&"é".repeat(32)).is_none());
    }

    #[test]
    fn test_usable_as_set_key() {
        let mut seen = std::collections::HashSet::new();
        assert!(seen.insert(ContentHash::new([1; 32])));
        assert!(!seen.insert(ContentHash::new([1; 32])));
        assert_eq!(ContentHash::new([9; 32]).as_ref().len(), ContentHash::SIZE);
    }
}
