//! The file pipeline: classify, reject / fix / pass, then chunk.
//!
//! [`Pipeline`] owns a [`SignatureRegistry`] and a base [`PipelineConfig`].
//! Every call may pass a [`ConfigOverride`]; it is merged into a copy of the
//! base for that call only.
//!
//! ```text
//! START ──empty──────────────────────────────▶ Rejected(EmptyFile)
//!   │   ──too large (limit enforced)──────────▶ Rejected(FileTooLarge)
//!   ▼
//! CLASSIFIED ──match, or mismatch tolerated──▶ PASSED ─┐
//!   │        ──mismatch, auto-fix───────────▶ FIXED  ─┼─▶ CHUNKED
//!   │        ──mismatch, strict─────────────▶ Rejected(UnmatchFileType)
//! ```
//!
//! # Example
//!
//! ```
//! use magicchunk::{ConfigOverride, FileHandle, Pipeline};
//!
//! let pipeline = Pipeline::new();
//! let file = FileHandle::new("photo.txt", &b"\x89PNG\r\n\x1a\n"[..]);
//!
//! let strict = ConfigOverride::new().ignore_unmatch_suffix(false);
//! assert_eq!(pipeline.process_file(&file, Some(&strict)).code(), Some(-2));
//!
//! let fixing = strict.auto_fix_suffix(true);
//! let outcome = pipeline.process_file(&file, Some(&fixing));
//! assert_eq!(outcome.file().unwrap().name(), "photo.png");
//! ```

mod outcome;

pub use outcome::{ProcessOutcome, RejectCode, Rejection};

use crate::chunk::Chunk;
use crate::chunker::chunk_file;
use crate::config::{ConfigOverride, PipelineConfig};
use crate::error::Error;
use crate::file::FileHandle;
use crate::hash::{ContentHash, hash_file};
use crate::signature::{MatchResult, SignatureMatcher, SignatureRegistry};

/// Classifies, optionally renames, and chunks files.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    registry: SignatureRegistry,
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a pipeline with the built-in registry and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the base configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Result<Self, Error> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Replaces the registry.
    pub fn with_registry(mut self, registry: SignatureRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Returns the base configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Returns the registry.
    pub fn registry(&self) -> &SignatureRegistry {
        &self.registry
    }

    /// Returns the registry for modification.
    pub fn registry_mut(&mut self) -> &mut SignatureRegistry {
        &mut self.registry
    }

    /// Layers `overrides` permanently onto the base configuration.
    pub fn set_global_config(&mut self, overrides: &ConfigOverride) {
        self.config = self.config.merged(overrides);
        tracing::debug!(config = ?self.config, "base configuration updated");
    }

    /// Registers a file type; see [`SignatureRegistry::register_type`].
    pub fn register_type(
        &mut self,
        tag: &str,
        pattern: &str,
        content_type: &str,
    ) -> Result<(), Error> {
        self.registry.register_type(tag, pattern, content_type)?;
        Ok(())
    }

    /// Returns the configuration a call with `overrides` would use.
    pub fn effective_config(&self, overrides: Option<&ConfigOverride>) -> PipelineConfig {
        match overrides {
            Some(overrides) => self.config.merged(overrides),
            None => self.config,
        }
    }

    /// Returns a matcher over this pipeline's registry in the base match mode.
    pub fn matcher(&self) -> SignatureMatcher<'_> {
        SignatureMatcher::new(&self.registry, self.config.match_mode())
    }

    /// Classifies `file` by suffix and content.
    pub fn match_type(&self, file: &FileHandle) -> MatchResult {
        self.matcher().match_file(file)
    }

    /// Renames `file` after its detected type; see [`SignatureMatcher::fix_suffix`].
    pub fn fix_suffix(&self, file: &FileHandle) -> FileHandle {
        self.matcher().fix_suffix(file)
    }

    /// Splits `file` with the effective chunk size.
    pub fn chunk(&self, file: &FileHandle, overrides: Option<&ConfigOverride>) -> Vec<Chunk> {
        chunk_file(file, self.effective_config(overrides).chunk_size())
    }

    /// Fingerprints `file`, exactly or by sampling per the effective configuration.
    pub fn hash(&self, file: &FileHandle, overrides: Option<&ConfigOverride>) -> ContentHash {
        hash_file(file, self.effective_config(overrides).exact_hash())
    }

    /// Runs `file` through the pipeline.
    ///
    /// Expected failures come back as [`ProcessOutcome::Rejected`]; check
    /// [`ProcessOutcome::code`] before using the chunks.
    pub fn process_file(
        &self,
        file: &FileHandle,
        overrides: Option<&ConfigOverride>,
    ) -> ProcessOutcome {
        let config = self.effective_config(overrides);

        if file.is_empty() {
            tracing::debug!(file = %file.name(), "rejected: empty file");
            return ProcessOutcome::rejected(RejectCode::EmptyFile);
        }

        if !config.ignore_unmatch_spec() && file.size() > config.file_max_size() {
            tracing::debug!(
                file = %file.name(),
                size = file.size(),
                max = config.file_max_size(),
                "rejected: file too large"
            );
            return ProcessOutcome::rejected(RejectCode::FileTooLarge);
        }

        let file = if config.ignore_unmatch_suffix() {
            tracing::trace!(file = %file.name(), "suffix mismatches tolerated");
            file.clone()
        } else {
            let matcher = SignatureMatcher::new(&self.registry, config.match_mode());
            let result = matcher.match_file(file);
            if result.is_match {
                file.clone()
            } else if config.auto_fix_suffix() {
                matcher.fix_suffix_with_hex(file, &result.raw_hex)
            } else {
                tracing::debug!(
                    file = %file.name(),
                    detected = %result.detected_type,
                    "rejected: suffix does not match content"
                );
                return ProcessOutcome::rejected(RejectCode::UnmatchFileType);
            }
        };

        let chunks = chunk_file(&file, config.chunk_size());
        tracing::debug!(
            file = %file.name(),
            chunks = chunks.len(),
            chunk_size = config.chunk_size(),
            "chunked"
        );
        ProcessOutcome::Chunked { file, chunks }
    }
}
