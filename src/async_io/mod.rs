//! Async I/O support.
//!
//! This module provides asynchronous reading, hashing and chunking using the
//! `futures-io` traits, making it runtime-agnostic and compatible with tokio,
//! async-std, smol, and other async runtimes.
//!
//! - [`chunk_async`] - Creates an async stream of fixed-size chunks
//! - [`read_file`] / [`read_as_byte_hex`] - Load a reader
//! - [`hash_exact_async`] / [`hash_sampled_async`] - Fingerprint a reader
//!
//! This module requires the `async-io` feature to be enabled.

mod reader;
mod stream;

pub use reader::{hash_exact_async, hash_sampled_async, read_all, read_as_byte_hex, read_file};
pub use stream::{ChunkStream, chunk_async};
