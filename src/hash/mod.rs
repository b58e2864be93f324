//! Content fingerprints for deduplication.
//!
//! Fingerprints identify content, they are not a security boundary.
//!
//! - [`ContentHash`] - 32-byte BLAKE3 digest
//! - [`Blake3Hasher`] - Streaming hasher, raw or byte-hex input
//! - [`hash_exact`] / [`hash_sampled`] - Whole-content and sampled fingerprints

mod blake3;
mod digest;
mod engine;

pub use blake3::Blake3Hasher;
pub use digest::ContentHash;
pub use engine::{SAMPLE_LEN, SAMPLE_WINDOW, hash_exact, hash_file, hash_sampled, sample_ranges};
