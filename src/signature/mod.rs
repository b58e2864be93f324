//! File type signatures.
//!
//! - [`SignatureRegistry`] - Ordered table of type tags, patterns, content types
//! - [`SignatureMatcher`] - Classifies content and fixes suffixes
//! - [`MatchResult`] - Outcome of one classification

mod fix;
mod matcher;
mod registry;

pub use matcher::{MatchResult, SignatureMatcher};
pub use registry::{MagicPattern, SignatureEntry, SignatureRegistry};
