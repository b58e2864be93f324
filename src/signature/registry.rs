//! Signature registry: type tag → magic pattern(s) and content type.

use std::collections::HashMap;
use std::fmt;

use crate::error::Error;
use crate::file::ByteHex;

/// A magic byte pattern, kept both as bytes and as byte-hex text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MagicPattern {
    bytes: Vec<u8>,
    hex: ByteHex,
}

impl MagicPattern {
    /// Creates a pattern from raw bytes.
    ///
    /// Returns error if `bytes` is empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.is_empty() {
            return Err(Error::InvalidPattern {
                pattern: String::new(),
                reason: "pattern must not be empty",
            });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
            hex: ByteHex::from_bytes(bytes),
        })
    }

    /// Parses whitespace-separated hex bytes such as `"89 50 4E 47"`.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let invalid = |reason| Error::InvalidPattern {
            pattern: text.to_string(),
            reason,
        };
        let bytes = text
            .split_whitespace()
            .map(|token| {
                if token.len() != 2 {
                    return Err(invalid("each byte must be two hex digits"));
                }
                u8::from_str_radix(token, 16).map_err(|_| invalid("not a hex byte"))
            })
            .collect::<Result<Vec<u8>, Error>>()?;
        if bytes.is_empty() {
            return Err(invalid("pattern must not be empty"));
        }
        Self::from_bytes(&bytes)
    }

    /// Returns the pattern bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the pattern as byte-hex text.
    pub fn hex(&self) -> &ByteHex {
        &self.hex
    }

    /// Returns the pattern length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; patterns are non-empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for MagicPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.hex, f)
    }
}

/// One registered file type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEntry {
    tag: String,
    patterns: Vec<MagicPattern>,
    content_type: String,
}

impl SignatureEntry {
    /// Returns the uppercase type tag, e.g. `"PNG"`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the accepted patterns, in registration order.
    pub fn patterns(&self) -> &[MagicPattern] {
        &self.patterns
    }

    /// Returns the MIME content type (may be empty).
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the tag as a lowercase file suffix.
    pub fn extension(&self) -> String {
        self.tag.to_ascii_lowercase()
    }
}

/// Built-in signatures: (tag, patterns, content type), in scan order.
///
/// XLS and DOC share the OLE2 header; XLS comes first and wins a scan.
const BUILTIN_SIGNATURES: &[(&str, &[&str], &str)] = &[
    ("JPEG", &["FF D8 FF E0"], "image/jpeg"),
    ("JPG", &["FF D8 FF E1"], "image/jpeg"),
    ("PNG", &["89 50 4E 47"], "image/png"),
    ("GIF", &["47 49 46 38"], "image/gif"),
    ("TIFF", &["49 49 2A 00"], "image/tiff"),
    ("BMP", &["42 4D"], "image/bmp"),
    ("DWG", &["41 43 31 30"], ""),
    ("PSD", &["38 42 50 53"], ""),
    ("RTF", &["7B 5C 72 74 66"], "application/msword"),
    ("XML", &["3C 3F 78 6D 6C"], "text/xml"),
    ("HTML", &["68 74 6D 6C 3E"], "text/html"),
    (
        "EML",
        &["44 65 6C 69 76 65 72 79 2D 64 61 74 65 3A"],
        "message/rfc822",
    ),
    ("DBX", &["CF AD 12 FE C5 FD 74 6F"], ""),
    ("PST", &["21 42 44 4E"], ""),
    ("XLS", &["D0 CF 11 E0"], "application/vnd.ms-excel"),
    ("DOC", &["D0 CF 11 E0"], "application/msword"),
    ("MDB", &["53 74 61 6E 64 61 72 64 20 4A"], "application/msaccess"),
    ("WPD", &["FF 57 50 43"], ""),
    ("PDF", &["25 50 44 46 2D 31 2E"], "application/pdf"),
    ("QDF", &["AC 9E BD 8F"], ""),
    ("PWL", &["E3 82 85 96"], ""),
    ("ZIP", &["50 4B 03 04"], "application/x-zip-compressed"),
    ("RAR", &["52 61 72 21"], ""),
    ("WAV", &["57 41 56 45"], "audio/wav"),
    ("AVI", &["41 56 49 20"], "video/avi"),
    ("RAM", &["2E 72 61 FD"], ""),
    ("RM", &["2E 52 4D 46"], ""),
    // Pack header and sequence header.
    ("MPG", &["00 00 01 BA", "00 00 01 B3"], "audio/mpeg"),
    ("MOV", &["6D 6F 6F 76"], "video/quicktime"),
    ("ASF", &["30 26 B2 75 8E 66 CF 11"], "video/x-ms-asf"),
    ("MID", &["4D 54 68 64"], "audio/mid"),
    ("MP3", &["49 44 33"], "audio/mpeg"),
];

/// Content types for tags with no usable signature.
const BUILTIN_CONTENT_TYPES: &[(&str, &str)] = &[("TXT", "text/plain")];

/// An insertion-ordered table of file type signatures.
///
/// Scans visit entries in registration order, so when two types share a
/// pattern the earlier one is reported. Registries are plain values: build one
/// per test or per pipeline, there is no process-wide table.
///
/// # Example
///
/// ```
/// use magicchunk::SignatureRegistry;
///
/// let mut registry = SignatureRegistry::default();
/// registry.register_type("webp", "52 49 46 46", "image/webp")?;
///
/// assert_eq!(registry.get("WEBP").unwrap().content_type(), "image/webp");
/// assert_eq!(registry.content_type("txt"), Some("text/plain"));
/// # Ok::<(), magicchunk::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRegistry {
    entries: Vec<SignatureEntry>,
    index: HashMap<String, usize>,
    content_types: HashMap<String, String>,
}

impl SignatureRegistry {
    /// Creates a registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            content_types: HashMap::new(),
        }
    }

    /// Registers `tag` with a single pattern, replacing any patterns it had.
    ///
    /// A re-registered tag keeps its position in the scan order; only its
    /// patterns and content type change.
    pub fn register_type(
        &mut self,
        tag: &str,
        pattern: &str,
        content_type: &str,
    ) -> Result<&mut Self, Error> {
        let pattern = MagicPattern::parse(pattern)?;
        self.register(tag, vec![pattern], content_type)
    }

    /// Registers `tag` with the given patterns, replacing any it had.
    pub fn register(
        &mut self,
        tag: &str,
        patterns: Vec<MagicPattern>,
        content_type: &str,
    ) -> Result<&mut Self, Error> {
        let tag = normalize_tag(tag)?;
        if patterns.is_empty() {
            return Err(Error::InvalidPattern {
                pattern: String::new(),
                reason: "at least one pattern is required",
            });
        }

        match self.index.get(&tag) {
            Some(&i) => {
                tracing::warn!(tag = %tag, "replacing registered signature");
                let entry = &mut self.entries[i];
                entry.patterns = patterns;
                entry.content_type = content_type.to_string();
            }
            None => {
                tracing::trace!(tag = %tag, "registering signature");
                self.index.insert(tag.clone(), self.entries.len());
                self.entries.push(SignatureEntry {
                    tag,
                    patterns,
                    content_type: content_type.to_string(),
                });
            }
        }
        Ok(self)
    }

    /// Adds an alternative pattern to an already registered tag.
    ///
    /// Registers the tag with an empty content type if it is new.
    pub fn add_pattern(&mut self, tag: &str, pattern: &str) -> Result<&mut Self, Error> {
        let pattern = MagicPattern::parse(pattern)?;
        let tag = normalize_tag(tag)?;
        match self.index.get(&tag) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                if !entry.patterns.contains(&pattern) {
                    entry.patterns.push(pattern);
                }
                Ok(self)
            }
            None => self.register(&tag, vec![pattern], ""),
        }
    }

    /// Records a content type for a tag that has no signature.
    pub fn register_content_type(
        &mut self,
        tag: &str,
        content_type: &str,
    ) -> Result<&mut Self, Error> {
        let tag = normalize_tag(tag)?;
        self.content_types.insert(tag, content_type.to_string());
        Ok(self)
    }

    /// Looks up an entry by tag, case-insensitively.
    pub fn get(&self, tag: &str) -> Option<&SignatureEntry> {
        self.index
            .get(&tag.to_ascii_uppercase())
            .map(|&i| &self.entries[i])
    }

    /// Returns true if `tag` has a signature.
    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Returns the content type recorded for `tag`, with or without a signature.
    pub fn content_type(&self, tag: &str) -> Option<&str> {
        match self.get(tag) {
            Some(entry) => Some(entry.content_type()),
            None => self
                .content_types
                .get(&tag.to_ascii_uppercase())
                .map(String::as_str),
        }
    }

    /// Iterates entries in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &SignatureEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries with a signature.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no signature is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SignatureRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for (tag, patterns, content_type) in BUILTIN_SIGNATURES {
            let index = registry.entries.len();
            registry.index.insert((*tag).to_string(), index);
            registry.entries.push(SignatureEntry {
                tag: (*tag).to_string(),
                patterns: patterns.iter().filter_map(|p| builtin_pattern(p)).collect(),
                content_type: (*content_type).to_string(),
            });
        }
        for (tag, content_type) in BUILTIN_CONTENT_TYPES {
            registry
                .content_types
                .insert((*tag).to_string(), (*content_type).to_string());
        }
        registry
    }
}

fn builtin_pattern(text: &str) -> Option<MagicPattern> {
    let pattern = MagicPattern::parse(text);
    debug_assert!(pattern.is_ok(), "bad built-in pattern {text}");
    pattern.ok()
}

fn normalize_tag(tag: &str) -> Result<String, Error> {
    let tag = tag.trim();
    if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(Error::InvalidTag {
            tag: tag.to_string(),
        });
    }
    Ok(tag.to_ascii_uppercase())
}
