//! Chunking engine for splitting files.
//!
//! - [`Chunker`] - Fixed-size chunker over bytes or readers
//! - [`ChunkIter`] - Lazy chunk iterator over a [`std::io::Read`] source

mod iter;

pub use iter::{ChunkIter, Chunker, chunk_file};
