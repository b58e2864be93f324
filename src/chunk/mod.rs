//! Chunk types.
//!
//! - [`Chunk`] - Fixed-size slice of a file with its byte offset

mod data;

pub use data::Chunk;
