//! Fixed-size chunking - Chunker and ChunkIter.
//!
//! This module implements synchronous chunking at fixed byte boundaries. It
//! provides two main types:
//!
//! - [`Chunker`] - Holds the chunk size and chunks in-memory data or readers
//! - [`ChunkIter`] - Iterator that yields chunks from a [`std::io::Read`] source
//!
//! Boundaries depend only on the chunk size and the file size: chunk `k`
//! covers `[k * chunk_size, min((k + 1) * chunk_size, size))`.
//!
//! # Example
//!
//! ```ignore
//! use magicchunk::Chunker;
//! use std::fs::File;
//!
//! let file = File::open("data.bin")?;
//! let chunker = Chunker::new(512 * 1024);
//!
//! for chunk in chunker.chunk(file) {
//!     let chunk = chunk?;
//!     println!("Chunk: {} bytes @ {}", chunk.len(), chunk.index);
//! }
//! # Ok::<(), magicchunk::Error>(())
//! ```

use std::io::{ErrorKind, Read};

use bytes::Bytes;

use crate::chunk::Chunk;
use crate::config::DEFAULT_CHUNK_SIZE;
use crate::error::Error;
use crate::file::FileHandle;

/// Splits data into contiguous chunks of a fixed size.
///
/// The last chunk may be shorter. Empty input yields no chunks.
///
/// # Example
///
/// ```
/// use magicchunk::Chunker;
///
/// let chunker = Chunker::new(4);
/// let chunks = chunker.chunk_bytes(&b"hello world"[..]);
///
/// let offsets: Vec<u64> = chunks.iter().map(|c| c.index).collect();
/// assert_eq!(offsets, vec![0, 4, 8]);
/// assert_eq!(chunks[2].len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    chunk_size: usize,
}

impl Chunker {
    /// Creates a new chunker.
    ///
    /// A zero `chunk_size` falls back to the default of 512 KiB.
    pub fn new(chunk_size: usize) -> Self {
        let chunk_size = if chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size
        };
        Self { chunk_size }
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns how many chunks a file of `size` bytes is split into.
    pub fn chunk_count(&self, size: u64) -> u64 {
        size.div_ceil(self.chunk_size as u64)
    }

    /// Creates a chunking iterator from a reader.
    ///
    /// The iterator produces the same boundaries as [`Chunker::chunk_bytes`]
    /// on the fully read data, however the reader splits its reads.
    pub fn chunk<R: Read>(self, reader: R) -> ChunkIter<R> {
        ChunkIter::new(reader, self.chunk_size)
    }

    /// Chunks an in-memory buffer.
    ///
    /// Chunks are zero-copy slices of `data`.
    pub fn chunk_bytes(&self, data: impl Into<Bytes>) -> Vec<Chunk> {
        let data = data.into();
        let mut chunks = Vec::with_capacity(data.len().div_ceil(self.chunk_size));
        let mut offset = 0usize;

        while offset < data.len() {
            let end = offset.saturating_add(self.chunk_size).min(data.len());
            chunks.push(Chunk::new(data.slice(offset..end), offset as u64));
            offset = end;
        }

        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

/// Splits `file` into chunks of `chunk_size` bytes.
///
/// A zero `chunk_size` falls back to the default of 512 KiB.
pub fn chunk_file(file: &FileHandle, chunk_size: usize) -> Vec<Chunk> {
    Chunker::new(chunk_size).chunk_bytes(file.data().clone())
}

/// An iterator that yields fixed-size chunks from a reader.
///
/// Every chunk except the last is exactly `chunk_size` bytes. Short reads are
/// accumulated until a chunk is full or the reader is exhausted.
pub struct ChunkIter<R> {
    reader: R,
    chunk_size: usize,
    offset: u64,
    finished: bool,
}

impl<R: Read> ChunkIter<R> {
    fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size,
            offset: 0,
            finished: false,
        }
    }

    /// Returns the offset of the next chunk.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<Chunk, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut buf = vec![0u8; self.chunk_size];
        let mut filled = 0;

        while filled < self.chunk_size {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.finished = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }

        if filled == 0 {
            return None;
        }

        buf.truncate(filled);
        let chunk = Chunk::new(buf, self.offset);
        self.offset += filled as u64;
        Some(Ok(chunk))
    }
}
