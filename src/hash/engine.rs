//! Exact and sampled content fingerprints.
//!
//! - [`hash_exact`] hashes the byte-hex rendering of the whole content. Equal
//!   content always gives equal hashes and different content, with
//!   overwhelming probability, different ones.
//! - [`hash_sampled`] hashes a head window plus a few anchor bytes per stride.
//!   It is a cheap pre-filter for large files: **different files may share a
//!   sampled hash**. Confirm candidates with [`hash_exact`].

use std::ops::Range;

use crate::file::FileHandle;

use super::{Blake3Hasher, ContentHash};

/// Size of the fully read head window, and of each stride after it (2 MiB).
pub const SAMPLE_WINDOW: u64 = 2 * 1024 * 1024;

/// Bytes read at each stride anchor.
pub const SAMPLE_LEN: u64 = 2;

/// Piece size used when streaming content into the hex hasher.
const HEX_PIECE: usize = 64 * 1024;

/// Returns the byte ranges read by the sampled hash for a file of `size` bytes.
///
/// - `[0, min(size, SAMPLE_WINDOW))` in full
/// - for every full stride `[s, s + SAMPLE_WINDOW)` after the head: two bytes
///   at its start, its midpoint and its end
/// - the final stride, if it reaches end of file, in full
///
/// Ranges are ordered and never overlap.
pub fn sample_ranges(size: u64) -> Vec<Range<u64>> {
    let mut ranges = Vec::new();
    if size == 0 {
        return ranges;
    }

    ranges.push(0..size.min(SAMPLE_WINDOW));

    let mut offset = SAMPLE_WINDOW;
    while offset < size {
        let end = offset + SAMPLE_WINDOW;
        if end >= size {
            ranges.push(offset..size);
        } else {
            let mid = offset + SAMPLE_WINDOW / 2;
            ranges.push(offset..offset + SAMPLE_LEN);
            ranges.push(mid..mid + SAMPLE_LEN);
            ranges.push(end - SAMPLE_LEN..end);
        }
        offset = end;
    }

    ranges
}

/// Fingerprints the complete content.
///
/// The digest covers the byte-hex rendering of `data`, streamed in pieces so
/// the text is never held in memory at once.
pub fn hash_exact(data: &[u8]) -> ContentHash {
    let mut hasher = Blake3Hasher::new();
    for piece in data.chunks(HEX_PIECE) {
        hasher.update_hex(piece);
    }
    hasher.finalize()
}

/// Fingerprints a sample of the content; see [`sample_ranges`].
///
/// Deterministic, but not collision-free across different content.
pub fn hash_sampled(data: &[u8]) -> ContentHash {
    let mut hasher = Blake3Hasher::new();
    for range in sample_ranges(data.len() as u64) {
        hasher.update(&data[range.start as usize..range.end as usize]);
    }
    hasher.finalize()
}

/// Fingerprints a file, exactly or by sampling.
pub fn hash_file(file: &FileHandle, exact: bool) -> ContentHash {
    tracing::debug!(file = %file.name(), size = file.size(), exact, "hashing");
    if exact {
        hash_exact(file.data())
    } else {
        hash_sampled(file.data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::ByteHex;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn test_sample_ranges_small_file() {
        assert!(sample_ranges(0).is_empty());
        assert_eq!(sample_ranges(10), vec![0..10]);
        assert_eq!(sample_ranges(SAMPLE_WINDOW), vec![0..SAMPLE_WINDOW]);
    }

    #[test]
    fn test_sample_ranges_tail_read_in_full() {
        let size = SAMPLE_WINDOW + 100;
        assert_eq!(
            sample_ranges(size),
            vec![0..SAMPLE_WINDOW, SAMPLE_WINDOW..size]
        );
    }

    #[test]
    fn test_sample_ranges_anchors() {
        let size = 5 * MIB;
        let ranges = sample_ranges(size);
        assert_eq!(
            ranges,
            vec![
                0..2 * MIB,
                2 * MIB..2 * MIB + 2,
                3 * MIB..3 * MIB + 2,
                4 * MIB - 2..4 * MIB,
                4 * MIB..5 * MIB,
            ]
        );
        for pair in ranges.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_exact_hash_covers_hex_text() {
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let text = ByteHex::from_bytes(&data);
        assert_eq!(
            hash_exact(&data),
            Blake3Hasher::hash(text.as_str().as_bytes())
        );
    }

    #[test]
    fn test_exact_hash_deterministic() {
        assert_eq!(hash_exact(b"same bytes"), hash_exact(b"same bytes"));
        assert_ne!(hash_exact(b"same bytes"), hash_exact(b"same bytez"));
        assert_ne!(hash_exact(b"a"), hash_exact(b"a\0"));
    }

    #[test]
    fn test_sampled_hash_small_file_is_plain_hash() {
        let data = vec![3u8; 1000];
        assert_eq!(hash_sampled(&data), Blake3Hasher::hash(&data));
    }

    #[test]
    fn test_hash_file_selects_mode() {
        let file = FileHandle::new("a.bin", vec![9u8; 64]);
        assert_eq!(hash_file(&file, true), hash_exact(file.data()));
        assert_eq!(hash_file(&file, false), hash_sampled(file.data()));
        assert_eq!(
            hash_file(&file, true).to_hex().len(),
            hash_file(&file, false).to_hex().len()
        );
    }
}
