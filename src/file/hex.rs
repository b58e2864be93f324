//! Byte-hex text: the canonical form signatures are matched against.

use std::fmt;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// A byte sequence rendered as space-separated, two-digit uppercase hex.
///
/// `[0x89, 0x50, 0x4E, 0x47]` renders as `"89 50 4E 47"`. Every token starts
/// at a multiple of three characters, so a substring search for another
/// rendered sequence can only hit on byte boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteHex(String);

impl ByteHex {
    /// Renders `data` as byte-hex text.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut text = String::with_capacity(data.len().saturating_mul(3));
        push_hex(&mut text, data, false);
        Self(text)
    }

    /// Returns the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no bytes were rendered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of rendered bytes.
    pub fn byte_len(&self) -> usize {
        self.0.len().div_ceil(3)
    }

    /// Appends more bytes, continuing the same sequence.
    pub fn extend_from_bytes(&mut self, data: &[u8]) {
        let continued = !self.0.is_empty();
        self.0.reserve(data.len().saturating_mul(3));
        push_hex(&mut self.0, data, continued);
    }

    /// Consumes the value and returns the text.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Writes `data` as byte-hex into `out`.
///
/// When `continued` is set the first token is preceded by a separator, so that
/// consecutive calls produce the same text as a single call over the joined
/// input.
pub(crate) fn push_hex(out: &mut String, data: &[u8], continued: bool) {
    for (i, byte) in data.iter().enumerate() {
        if continued || i > 0 {
            out.push(' ');
        }
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0xf) as usize] as char);
    }
}

impl AsRef<str> for ByteHex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ByteHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let hex = ByteHex::from_bytes(&[0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(hex.as_str(), "89 50 4E 47");
        assert_eq!(hex.byte_len(), 4);
    }

    #[test]
    fn test_single_digit_bytes_are_padded() {
        let hex = ByteHex::from_bytes(&[0x00, 0x01, 0x0a]);
        assert_eq!(hex.as_str(), "00 01 0A");
    }

    #[test]
    fn test_empty() {
        let hex = ByteHex::from_bytes(&[]);
        assert!(hex.is_empty());
        assert_eq!(hex.byte_len(), 0);
    }

    #[test]
    fn test_extend_matches_single_render() {
        let mut hex = ByteHex::default();
        hex.extend_from_bytes(b"he");
        hex.extend_from_bytes(b"");
        hex.extend_from_bytes(b"llo");
        assert_eq!(hex, ByteHex::from_bytes(b"hello"));
    }
}
