//! The FileHandle type - a named, immutable blob.

use std::fmt;
use std::ops::Range;

use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;

use super::ByteHex;

/// A trailing `.<suffix>` preceded by at least one word character.
static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(.*[A-Za-z0-9_])\.([A-Za-z0-9_]+)$").expect("suffix pattern is valid")
});

/// A file name split into base name and suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitName<'a> {
    /// The name without its final `.<suffix>`.
    pub base: &'a str,
    /// The suffix without the dot; empty when the name has none.
    pub suffix: &'a str,
}

/// Splits `filename` at its final `.`.
///
/// A suffix must be made of ASCII word characters and must follow a word
/// character, so `".bashrc"` and `"notes."` have no suffix and keep their
/// full name as the base.
///
/// ```
/// use magicchunk::split_suffix;
///
/// let split = split_suffix("archive.tar.gz");
/// assert_eq!(split.base, "archive.tar");
/// assert_eq!(split.suffix, "gz");
/// ```
pub fn split_suffix(filename: &str) -> SplitName<'_> {
    match SUFFIX_RE.captures(filename) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(base), Some(suffix)) => SplitName {
                base: base.as_str(),
                suffix: suffix.as_str(),
            },
            _ => SplitName {
                base: filename,
                suffix: "",
            },
        },
        None => SplitName {
            base: filename,
            suffix: "",
        },
    }
}

/// A named blob handed to the pipeline.
///
/// The handle is immutable: renaming produces a new handle that shares the
/// same underlying bytes.
///
/// # Example
///
/// ```
/// use magicchunk::FileHandle;
///
/// let file = FileHandle::new("photo.png", &b"\x89PNG\r\n"[..]);
/// assert_eq!(file.size(), 6);
/// assert_eq!(file.suffix(), "png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    content_type: String,
    data: Bytes,
}

impl FileHandle {
    /// Creates a handle with an empty content type.
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content_type: String::new(),
            data: data.into(),
        }
    }

    /// Sets the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Returns a new handle over the same bytes with a different name and content type.
    pub fn renamed(&self, name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: self.data.clone(),
        }
    }

    /// Returns the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the content type (may be empty).
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Returns true if the file has no content.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the content.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns a zero-copy slice of the content, clamped to the file size.
    pub fn slice(&self, range: Range<u64>) -> Bytes {
        let len = self.data.len() as u64;
        let start = range.start.min(len) as usize;
        let end = range.end.clamp(range.start.min(len), len) as usize;
        self.data.slice(start..end)
    }

    /// Splits the name into base and suffix.
    pub fn split_name(&self) -> SplitName<'_> {
        split_suffix(&self.name)
    }

    /// Returns the suffix of the name (may be empty).
    pub fn suffix(&self) -> &str {
        self.split_name().suffix
    }

    /// Renders the full content as byte-hex text.
    pub fn to_byte_hex(&self) -> ByteHex {
        ByteHex::from_bytes(&self.data)
    }

    /// Consumes the handle and returns the content.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes", self.name, self.data.len())?;
        if !self.content_type.is_empty() {
            write!(f, ", {}", self.content_type)?;
        }
        write!(f, ")")
    }
}
