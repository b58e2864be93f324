//! The Chunk type - a contiguous byte range of a file.

use bytes::Bytes;
use std::fmt;

/// A fixed-size slice of a file, ready for upload.
///
/// `index` is the byte offset of the chunk's first byte, not a sequence
/// number. Chunks of one file are contiguous: each starts where the previous
/// one ends.
///
/// # Example
///
/// ```
/// use magicchunk::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk::new(Bytes::from_static(b"hello world"), 1024);
///
/// assert_eq!(chunk.len(), 11);
/// assert_eq!(chunk.range(), 1024..1035);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Byte offset of the chunk in the file.
    pub index: u64,

    /// The chunk data (zero-copy slice of the file where possible).
    pub data: Bytes,
}

impl Chunk {
    /// Creates a new chunk at the given offset.
    pub fn new(data: impl Into<Bytes>, index: u64) -> Self {
        Self {
            index,
            data: data.into(),
        }
    }

    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the start offset.
    pub fn start(&self) -> u64 {
        self.index
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.index + self.data.len() as u64
    }

    /// Returns the chunk as a range.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.start()..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes @ {})", self.len(), self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_follow_index() {
        let chunk = Chunk::new(&b"upload"[..], 524_288);
        assert_eq!(chunk.len(), 6);
        assert_eq!(chunk.start(), 524_288);
        assert_eq!(chunk.range(), 524_288..524_294);
    }

    #[test]
    fn test_adjacent_chunks_meet() {
        let data = Bytes::from_static(b"0123456789");
        let first = Chunk::new(data.slice(..4), 0);
        let second = Chunk::new(data.slice(4..), first.end());
        assert_eq!(second.start(), 4);
        assert_eq!(second.end(), 10);
    }

    #[test]
    fn test_display_shows_size_and_offset() {
        let chunk = Chunk::new(vec![0u8; 3], 9);
        assert_eq!(chunk.to_string(), "Chunk(3 bytes @ 9)");
        assert!(Chunk::new(Bytes::new(), 0).is_empty());
    }

    #[test]
    fn test_into_data_shares_bytes() {
        let data = Bytes::from_static(b"abc");
        let chunk = Chunk::new(data.clone(), 7);
        assert_eq!(chunk.data(), &data);
        assert_eq!(chunk.into_data(), data);
    }
}
