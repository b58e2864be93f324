//! Suffix correction from detected content.

use crate::file::{ByteHex, FileHandle};

use super::SignatureMatcher;

impl SignatureMatcher<'_> {
    /// Renames `file` after the first registered type found in its content.
    ///
    /// The new name is `<base>.<tag in lowercase>` and the content type comes
    /// from the registry. When no type is found the returned handle equals
    /// the input. The input is never modified.
    ///
    /// # Example
    ///
    /// ```
    /// use magicchunk::{FileHandle, MatchMode, SignatureMatcher, SignatureRegistry};
    ///
    /// let registry = SignatureRegistry::default();
    /// let matcher = SignatureMatcher::new(&registry, MatchMode::Contains);
    ///
    /// let file = FileHandle::new("photo.txt", &b"\x89PNG\r\n"[..]);
    /// let fixed = matcher.fix_suffix(&file);
    ///
    /// assert_eq!(fixed.name(), "photo.png");
    /// assert_eq!(fixed.content_type(), "image/png");
    /// assert_eq!(file.name(), "photo.txt");
    /// ```
    pub fn fix_suffix(&self, file: &FileHandle) -> FileHandle {
        self.fix_suffix_with_hex(file, &file.to_byte_hex())
    }

    /// Same as [`fix_suffix`](Self::fix_suffix), reusing an already rendered byte-hex.
    pub fn fix_suffix_with_hex(&self, file: &FileHandle, hex: &ByteHex) -> FileHandle {
        let Some(entry) = self.detect(hex) else {
            tracing::debug!(file = %file.name(), "no signature found, keeping name");
            return file.clone();
        };

        let name = format!("{}.{}", file.split_name().base, entry.extension());
        tracing::debug!(from = %file.name(), to = %name, "fixed suffix");
        file.renamed(name, entry.content_type())
    }
}
