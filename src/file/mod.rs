//! File types.
//!
//! - [`FileHandle`] - Named, immutable blob
//! - [`ByteHex`] - Space-separated uppercase hex rendering of bytes
//! - [`split_suffix`] - Base name / suffix split

mod handle;
mod hex;

pub use handle::{FileHandle, SplitName, split_suffix};
pub use hex::ByteHex;

pub(crate) use hex::push_hex;
