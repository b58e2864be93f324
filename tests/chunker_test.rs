// Integration tests for fixed-size chunking
// Tests cover: boundary layout, reader/bytes agreement, coverage properties

use std::io::Read;

use bytes::Bytes;
use magicchunk::{Chunker, FileHandle, chunk_file};
use proptest::prelude::*;

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_empty_input() {
    let chunker = Chunker::new(16);

    assert!(chunker.chunk_bytes(Bytes::new()).is_empty());
    assert_eq!(chunker.chunk(&b""[..]).count(), 0);
    assert_eq!(chunker.chunk_count(0), 0);
}

#[test]
fn test_data_below_chunk_size() {
    let chunks = Chunker::new(64).chunk_bytes(vec![0xAA; 3]);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].len(), 3);
    assert_eq!(chunks[0].index, 0);
}

#[test]
fn test_exact_multiple_has_no_tail() {
    let chunks = Chunker::new(4).chunk_bytes(vec![1u8; 12]);

    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.len() == 4));
}

#[test]
fn test_one_past_multiple_has_one_byte_tail() {
    let chunks = Chunker::new(4).chunk_bytes(vec![1u8; 13]);

    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[3].range(), 12..13);
}

#[test]
fn test_zero_chunk_size_uses_default() {
    let chunker = Chunker::new(0);
    assert_eq!(chunker.chunk_size(), magicchunk::DEFAULT_CHUNK_SIZE);
}

#[test]
fn test_chunk_file_covers_handle() {
    let file = FileHandle::new("notes.bin", (0..=255u8).collect::<Vec<_>>());
    let chunks = chunk_file(&file, 100);

    let offsets: Vec<u64> = chunks.iter().map(|c| c.index).collect();
    assert_eq!(offsets, vec![0, 100, 200]);
    assert_eq!(chunks[2].data, file.slice(200..256));
}

// ============================================================================
// Reader Tests
// ============================================================================

/// Reader that returns at most `step` bytes per call.
struct Dribble {
    data: Vec<u8>,
    pos: usize,
    step: usize,
}

impl Read for Dribble {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn test_reader_matches_bytes_under_short_reads() {
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    let chunker = Chunker::new(1024);

    let expected = chunker.chunk_bytes(data.clone());
    let from_reader: Vec<_> = chunker
        .chunk(Dribble {
            data,
            pos: 0,
            step: 7,
        })
        .collect::<Result<_, _>>()
        .expect("in-memory reader never fails");

    assert_eq!(expected, from_reader);
}

#[test]
fn test_reader_error_is_reported_once() {
    struct Failing;
    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk gone"))
        }
    }

    let mut iter = Chunker::new(8).chunk(Failing);
    assert!(matches!(iter.next(), Some(Err(magicchunk::Error::Io(_)))));
    assert!(iter.next().is_none());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_chunks_tile_the_input(
        data in proptest::collection::vec(any::<u8>(), 0..4096),
        chunk_size in 1usize..700,
    ) {
        let chunker = Chunker::new(chunk_size);
        let chunks = chunker.chunk_bytes(data.clone());

        let expected = data.len().div_ceil(chunk_size);
        prop_assert_eq!(chunks.len(), expected);
        prop_assert_eq!(chunker.chunk_count(data.len() as u64), expected as u64);

        let mut offset = 0u64;
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.index, offset);
            prop_assert!(!chunk.is_empty());
            if i + 1 < chunks.len() {
                prop_assert_eq!(chunk.len(), chunk_size);
            }
            offset = chunk.end();
        }
        prop_assert_eq!(offset, data.len() as u64);

        let joined: Vec<u8> = chunks.iter().flat_map(|c| c.data.iter().copied()).collect();
        prop_assert_eq!(joined, data);
    }
}
