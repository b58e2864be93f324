//! BLAKE3-based streaming hasher.

use crate::file::push_hex;

use super::ContentHash;

/// A streaming BLAKE3 hasher.
///
/// Besides raw bytes it can absorb bytes in their byte-hex rendering
/// ([`update_hex`](Self::update_hex)) without materializing the full text.
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
    hex_started: bool,
    scratch: String,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
            hex_started: false,
            scratch: String::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Updates the hasher with the byte-hex rendering of `data`.
    ///
    /// Successive calls hash the same text as one call over the joined input,
    /// including the separators between calls.
    pub fn update_hex(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.scratch.clear();
        push_hex(&mut self.scratch, data, self.hex_started);
        self.state.update(self.scratch.as_bytes());
        self.hex_started = true;
    }

    /// Finalizes and returns the hash.
    pub fn finalize(&self) -> ContentHash {
        ContentHash::new(self.state.finalize().into())
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        self.state.reset();
        self.hex_started = false;
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> ContentHash {
        ContentHash::new(blake3::hash(data).into())
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::ByteHex;

    #[test]
    fn test_raw_and_hex_inputs_differ() {
        let raw = Blake3Hasher::hash(b"PK");
        let mut hasher = Blake3Hasher::new();
        hasher.update_hex(b"PK");

        assert_ne!(raw, hasher.finalize());
        assert_eq!(hasher.finalize(), Blake3Hasher::hash(b"50 4B"));
    }

    #[test]
    fn test_split_raw_updates() {
        let mut hasher = Blake3Hasher::new();
        for piece in [&b"\x89PN"[..], b"G", b"\r\n"] {
            hasher.update(piece);
        }
        assert_eq!(hasher.finalize(), Blake3Hasher::hash(b"\x89PNG\r\n"));
    }

    #[test]
    fn test_incremental_hex_matches_rendered_text() {
        let mut hasher = Blake3Hasher::new();
        hasher.update_hex(b"hel");
        hasher.update_hex(b"");
        hasher.update_hex(b"lo");

        let text = ByteHex::from_bytes(b"hello");
        assert_eq!(hasher.finalize(), Blake3Hasher::hash(text.as_str().as_bytes()));
    }

    #[test]
    fn test_reset_clears_separator_state() {
        let mut hasher = Blake3Hasher::new();
        hasher.update_hex(b"some data");

        hasher.reset();
        hasher.update_hex(b"hi");

        assert_eq!(hasher.finalize(), Blake3Hasher::hash(b"68 69"));
    }
}
