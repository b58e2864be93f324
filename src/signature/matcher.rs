//! Magic pattern matching against byte-hex text.

use crate::config::MatchMode;
use crate::file::{ByteHex, FileHandle};

use super::{MagicPattern, SignatureEntry, SignatureRegistry};

/// The outcome of classifying one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether the claimed suffix is registered and its pattern was found.
    pub is_match: bool,
    /// The registry tag found by scanning the content, if any.
    ///
    /// Always `None` for an unregistered claimed suffix.
    pub detected_tag: Option<String>,
    /// Lowercase suffix for the detected type.
    ///
    /// The claimed suffix when it is not registered or the scan finds nothing.
    pub detected_type: String,
    /// Content type for the detected type.
    ///
    /// Falls back to the file's own content type when the scan finds nothing.
    pub content_type: String,
    /// The content rendered as byte-hex text.
    pub raw_hex: ByteHex,
}

/// Classifies content against a [`SignatureRegistry`].
///
/// # Example
///
/// ```
/// use magicchunk::{ByteHex, MatchMode, SignatureMatcher, SignatureRegistry};
///
/// let registry = SignatureRegistry::default();
/// let matcher = SignatureMatcher::new(&registry, MatchMode::Contains);
///
/// let result = matcher.match_hex(ByteHex::from_bytes(b"\x89PNG\r\n"), "png");
/// assert!(result.is_match);
/// assert_eq!(result.detected_type, "png");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SignatureMatcher<'a> {
    registry: &'a SignatureRegistry,
    mode: MatchMode,
}

impl<'a> SignatureMatcher<'a> {
    /// Creates a matcher over `registry`.
    pub fn new(registry: &'a SignatureRegistry, mode: MatchMode) -> Self {
        Self { registry, mode }
    }

    /// Returns the registry.
    pub fn registry(&self) -> &'a SignatureRegistry {
        self.registry
    }

    /// Returns the matching mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns true if `pattern` is found in `hex` under the current mode.
    pub fn pattern_found(&self, hex: &ByteHex, pattern: &MagicPattern) -> bool {
        match self.mode {
            MatchMode::Contains => hex.as_str().contains(pattern.hex().as_str()),
            MatchMode::Prefix => hex.as_str().starts_with(pattern.hex().as_str()),
        }
    }

    /// Returns true if any of the entry's patterns is found in `hex`.
    pub fn entry_found(&self, hex: &ByteHex, entry: &SignatureEntry) -> bool {
        entry
            .patterns()
            .iter()
            .any(|pattern| self.pattern_found(hex, pattern))
    }

    /// Returns the first entry, in registration order, whose pattern is found.
    pub fn detect(&self, hex: &ByteHex) -> Option<&'a SignatureEntry> {
        self.registry.iter().find(|entry| self.entry_found(hex, entry))
    }

    /// Classifies `hex` against a claimed suffix.
    ///
    /// The claim is case-insensitive. A non-empty claim the registry does not
    /// know never matches and skips the content scan: the result reports the
    /// claimed suffix itself. An empty claim never matches but is scanned.
    pub fn match_hex(&self, hex: ByteHex, claimed_suffix: &str) -> MatchResult {
        let claimed = claimed_suffix.to_ascii_uppercase();

        let is_match = match self.registry.get(&claimed) {
            Some(entry) => self.entry_found(&hex, entry),
            None if claimed.is_empty() => false,
            None => {
                tracing::debug!(suffix = %claimed, "suffix not registered");
                return self.undetected(hex, &claimed);
            }
        };

        match self.detect(&hex) {
            Some(entry) => MatchResult {
                is_match,
                detected_tag: Some(entry.tag().to_string()),
                detected_type: entry.extension(),
                content_type: entry.content_type().to_string(),
                raw_hex: hex,
            },
            None => MatchResult {
                is_match,
                ..self.undetected(hex, &claimed)
            },
        }
    }

    fn undetected(&self, hex: ByteHex, claimed: &str) -> MatchResult {
        MatchResult {
            is_match: false,
            detected_tag: None,
            detected_type: claimed.to_ascii_lowercase(),
            content_type: self
                .registry
                .content_type(claimed)
                .unwrap_or_default()
                .to_string(),
            raw_hex: hex,
        }
    }

    /// Classifies a file by its name's suffix and its content.
    pub fn match_file(&self, file: &FileHandle) -> MatchResult {
        let mut result = self.match_hex(file.to_byte_hex(), file.suffix());
        if result.detected_tag.is_none() {
            result.content_type = file.content_type().to_string();
        }
        result
    }
}
