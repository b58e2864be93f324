//! magicchunk
//!
//! Check that a file's suffix matches its content, fix it if asked, and split
//! the file into fixed-size chunks for upload.
//!
//! A file goes through three steps:
//!
//! - **classify**: its bytes are rendered as byte-hex text (`"89 50 4E 47"`)
//!   and searched for the magic patterns of a [`SignatureRegistry`]
//! - **decide**: a suffix that disagrees with the content is tolerated,
//!   fixed from the detected type, or rejected, per [`PipelineConfig`]
//! - **chunk**: the file is cut into contiguous [`Chunk`]s of `chunk_size`
//!   bytes, each tagged with its byte offset
//!
//! Independently, [`hash_exact`] and [`hash_sampled`] fingerprint content for
//! deduplication. The sampled hash is a heuristic: different files may share
//! it.
//!
//! The crate intentionally:
//! - does NOT upload chunks
//! - does NOT persist configuration
//! - does NOT process several files concurrently
//! - does NOT provide cryptographic integrity
//!
//! # Sync
//!
//! ```
//! use magicchunk::{ConfigOverride, FileHandle, Pipeline, ProcessOutcome};
//!
//! let pipeline = Pipeline::new();
//! let file = FileHandle::new("photo.png", &b"\x89PNG\r\n\x1a\n"[..]);
//!
//! match pipeline.process_file(&file, Some(&ConfigOverride::new().chunk_size(4))) {
//!     ProcessOutcome::Chunked { chunks, .. } => assert_eq!(chunks.len(), 2),
//!     ProcessOutcome::Rejected(rejection) => panic!("{rejection}"),
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use magicchunk::Pipeline;
//! use tokio_util::compat::TokioAsyncReadCompatExt;
//!
//! async fn demo() -> Result<(), magicchunk::Error> {
//!     let reader = tokio::fs::File::open("photo.png").await?.compat();
//!     let outcome = Pipeline::new().process_reader("photo.png", reader, None).await?;
//!     if let Some(code) = outcome.code() {
//!         println!("rejected with {code}");
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod error;
mod file;
mod hash;
mod pipeline;
mod signature;

#[cfg(feature = "async-io")]
mod async_io;

//
// Public surface
//

pub use chunk::Chunk;
pub use chunker::{ChunkIter, Chunker, chunk_file};
pub use config::{
    ConfigOverride, DEFAULT_CHUNK_SIZE, DEFAULT_FILE_MAX_SIZE, MatchMode, PipelineConfig,
};
pub use error::{Error, Result};
pub use file::{ByteHex, FileHandle, SplitName, split_suffix};
pub use hash::{
    Blake3Hasher, ContentHash, SAMPLE_LEN, SAMPLE_WINDOW, hash_exact, hash_file, hash_sampled,
    sample_ranges,
};
pub use pipeline::{Pipeline, ProcessOutcome, RejectCode, Rejection};
pub use signature::{MagicPattern, MatchResult, SignatureEntry, SignatureMatcher, SignatureRegistry};

#[cfg(feature = "async-io")]
pub use async_io::{
    ChunkStream, chunk_async, hash_exact_async, hash_sampled_async, read_all, read_as_byte_hex,
    read_file,
};
