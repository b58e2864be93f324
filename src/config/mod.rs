//! Configuration for the file pipeline.
//!
//! This module provides types to configure how a file is classified, chunked
//! and hashed:
//!
//! - [`PipelineConfig`] - The complete, validated settings used by one call
//! - [`ConfigOverride`] - A partial set of settings layered over a base
//! - [`MatchMode`] - How a magic pattern is located in the file's bytes
//!
//! A base configuration is never modified by a per-call override:
//! [`PipelineConfig::merged`] returns a fresh value.
//!
//! # Example
//!
//! ```
//! use magicchunk::{ConfigOverride, PipelineConfig};
//!
//! let base = PipelineConfig::default();
//! let call = base.merged(&ConfigOverride::new().chunk_size(64 * 1024).auto_fix_suffix(true));
//!
//! assert_eq!(call.chunk_size(), 64 * 1024);
//! assert_eq!(base.chunk_size(), 512 * 1024);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default maximum file size (100 MiB).
pub const DEFAULT_FILE_MAX_SIZE: u64 = 100 * 1024 * 1024;

/// Default upload chunk size (512 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 512 * 1024;

/// How a registered magic pattern is located within a file's byte-hex text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchMode {
    /// The pattern may appear anywhere in the content.
    #[default]
    Contains,
    /// The pattern must appear at offset 0.
    Prefix,
}

/// Settings for one pipeline invocation.
///
/// Defaults:
/// - suffix mismatches are tolerated
/// - size limits are not enforced
/// - suffixes are not auto-fixed
/// - `file_max_size` is 100 MiB, `chunk_size` is 512 KiB
/// - the exact hash is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    ignore_unmatch_suffix: bool,
    ignore_unmatch_spec: bool,
    auto_fix_suffix: bool,
    file_max_size: u64,
    chunk_size: usize,
    exact_hash: bool,
    match_mode: MatchMode,
}

impl PipelineConfig {
    /// Creates a configuration with the given size limits.
    ///
    /// Returns error if either size is zero.
    pub fn new(file_max_size: u64, chunk_size: usize) -> Result<Self, Error> {
        let config = Self {
            file_max_size,
            chunk_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets whether a suffix that disagrees with the content is tolerated.
    pub fn with_ignore_unmatch_suffix(mut self, ignore: bool) -> Self {
        self.ignore_unmatch_suffix = ignore;
        self
    }

    /// Sets whether files larger than `file_max_size` are tolerated.
    pub fn with_ignore_unmatch_spec(mut self, ignore: bool) -> Self {
        self.ignore_unmatch_spec = ignore;
        self
    }

    /// Sets whether a mismatched suffix is rewritten from the detected type.
    pub fn with_auto_fix_suffix(mut self, fix: bool) -> Self {
        self.auto_fix_suffix = fix;
        self
    }

    /// Sets the maximum accepted file size in bytes.
    pub fn with_file_max_size(mut self, size: u64) -> Self {
        self.file_max_size = size;
        self
    }

    /// Sets the chunk size in bytes.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Selects the exact (`true`) or sampled (`false`) hash.
    pub fn with_exact_hash(mut self, exact: bool) -> Self {
        self.exact_hash = exact;
        self
    }

    /// Sets the magic pattern matching mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Returns whether suffix mismatches are tolerated.
    pub fn ignore_unmatch_suffix(&self) -> bool {
        self.ignore_unmatch_suffix
    }

    /// Returns whether oversized files are tolerated.
    pub fn ignore_unmatch_spec(&self) -> bool {
        self.ignore_unmatch_spec
    }

    /// Returns whether mismatched suffixes are fixed.
    pub fn auto_fix_suffix(&self) -> bool {
        self.auto_fix_suffix
    }

    /// Returns the maximum accepted file size.
    pub fn file_max_size(&self) -> u64 {
        self.file_max_size
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns whether the exact hash is used.
    pub fn exact_hash(&self) -> bool {
        self.exact_hash
    }

    /// Returns the matching mode.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }
        if self.file_max_size == 0 {
            return Err(Error::InvalidConfig {
                message: "file max size must be non-zero",
            });
        }
        Ok(())
    }

    /// Returns a new configuration with `overrides` layered over `self`.
    ///
    /// A zero chunk size or file size in the override counts as unset.
    pub fn merged(&self, overrides: &ConfigOverride) -> Self {
        Self {
            ignore_unmatch_suffix: overrides
                .ignore_unmatch_suffix
                .unwrap_or(self.ignore_unmatch_suffix),
            ignore_unmatch_spec: overrides
                .ignore_unmatch_spec
                .unwrap_or(self.ignore_unmatch_spec),
            auto_fix_suffix: overrides.auto_fix_suffix.unwrap_or(self.auto_fix_suffix),
            file_max_size: overrides
                .file_max_size
                .filter(|&size| size > 0)
                .unwrap_or(self.file_max_size),
            chunk_size: overrides
                .chunk_size
                .filter(|&size| size > 0)
                .unwrap_or(self.chunk_size),
            exact_hash: overrides.exact_hash.unwrap_or(self.exact_hash),
            match_mode: overrides.match_mode.unwrap_or(self.match_mode),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ignore_unmatch_suffix: true,
            ignore_unmatch_spec: true,
            auto_fix_suffix: false,
            file_max_size: DEFAULT_FILE_MAX_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            exact_hash: true,
            match_mode: MatchMode::Contains,
        }
    }
}

/// A partial configuration; unset fields fall back to the base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigOverride {
    /// See [`PipelineConfig::ignore_unmatch_suffix`].
    pub ignore_unmatch_suffix: Option<bool>,
    /// See [`PipelineConfig::ignore_unmatch_spec`].
    pub ignore_unmatch_spec: Option<bool>,
    /// See [`PipelineConfig::auto_fix_suffix`].
    pub auto_fix_suffix: Option<bool>,
    /// See [`PipelineConfig::file_max_size`].
    pub file_max_size: Option<u64>,
    /// See [`PipelineConfig::chunk_size`].
    pub chunk_size: Option<usize>,
    /// See [`PipelineConfig::exact_hash`].
    pub exact_hash: Option<bool>,
    /// See [`PipelineConfig::match_mode`].
    pub match_mode: Option<MatchMode>,
}

impl ConfigOverride {
    /// Creates an empty override.
    pub const fn new() -> Self {
        Self {
            ignore_unmatch_suffix: None,
            ignore_unmatch_spec: None,
            auto_fix_suffix: None,
            file_max_size: None,
            chunk_size: None,
            exact_hash: None,
            match_mode: None,
        }
    }

    /// Overrides `ignore_unmatch_suffix`.
    pub fn ignore_unmatch_suffix(mut self, ignore: bool) -> Self {
        self.ignore_unmatch_suffix = Some(ignore);
        self
    }

    /// Overrides `ignore_unmatch_spec`.
    pub fn ignore_unmatch_spec(mut self, ignore: bool) -> Self {
        self.ignore_unmatch_spec = Some(ignore);
        self
    }

    /// Overrides `auto_fix_suffix`.
    pub fn auto_fix_suffix(mut self, fix: bool) -> Self {
        self.auto_fix_suffix = Some(fix);
        self
    }

    /// Overrides `file_max_size`.
    pub fn file_max_size(mut self, size: u64) -> Self {
        self.file_max_size = Some(size);
        self
    }

    /// Overrides `chunk_size`.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Overrides `exact_hash`.
    pub fn exact_hash(mut self, exact: bool) -> Self {
        self.exact_hash = Some(exact);
        self
    }

    /// Overrides `match_mode`.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = Some(mode);
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }
}
