//! Pipeline outcomes: chunks on success, a coded rejection otherwise.

use std::fmt;

use crate::chunk::Chunk;
use crate::file::FileHandle;

/// Why a file was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectCode {
    /// The file has no content.
    EmptyFile,
    /// The suffix disagrees with the content and mismatches are not tolerated.
    UnmatchFileType,
    /// The file exceeds `file_max_size` and size limits are enforced.
    FileTooLarge,
}

impl RejectCode {
    /// Returns the numeric code.
    pub const fn code(self) -> i32 {
        match self {
            RejectCode::EmptyFile => -1,
            RejectCode::UnmatchFileType => -2,
            RejectCode::FileTooLarge => -3,
        }
    }

    /// Returns the human readable message.
    pub const fn message(self) -> &'static str {
        match self {
            RejectCode::EmptyFile => "empty file",
            RejectCode::UnmatchFileType => "unmatch file type",
            RejectCode::FileTooLarge => "file too large",
        }
    }
}

/// A coded, expected failure of [`Pipeline::process_file`](crate::Pipeline::process_file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// The reason.
    pub code: RejectCode,
    /// Message for the caller.
    pub message: &'static str,
}

impl From<RejectCode> for Rejection {
    fn from(code: RejectCode) -> Self {
        Self {
            code,
            message: code.message(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code.code())
    }
}

/// The result of running one file through the pipeline.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The file passed (possibly renamed) and was chunked.
    Chunked {
        /// The file that was chunked: the input, or its suffix-fixed copy.
        file: FileHandle,
        /// Chunks covering the whole file, in order.
        chunks: Vec<Chunk>,
    },
    /// The file was rejected.
    Rejected(Rejection),
}

impl ProcessOutcome {
    pub(crate) fn rejected(code: RejectCode) -> Self {
        ProcessOutcome::Rejected(code.into())
    }

    /// Returns the numeric rejection code, or `None` on success.
    pub fn code(&self) -> Option<i32> {
        match self {
            ProcessOutcome::Chunked { .. } => None,
            ProcessOutcome::Rejected(rejection) => Some(rejection.code.code()),
        }
    }

    /// Returns the rejection message, or `None` on success.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ProcessOutcome::Chunked { .. } => None,
            ProcessOutcome::Rejected(rejection) => Some(rejection.message),
        }
    }

    /// Returns true if the file was chunked.
    pub fn is_chunked(&self) -> bool {
        matches!(self, ProcessOutcome::Chunked { .. })
    }

    /// Returns the chunks on success.
    pub fn chunks(&self) -> Option<&[Chunk]> {
        match self {
            ProcessOutcome::Chunked { chunks, .. } => Some(chunks),
            ProcessOutcome::Rejected(_) => None,
        }
    }

    /// Returns the chunked file on success.
    pub fn file(&self) -> Option<&FileHandle> {
        match self {
            ProcessOutcome::Chunked { file, .. } => Some(file),
            ProcessOutcome::Rejected(_) => None,
        }
    }

    /// Converts into a `Result`, chunks on success.
    pub fn into_result(self) -> Result<(FileHandle, Vec<Chunk>), Rejection> {
        match self {
            ProcessOutcome::Chunked { file, chunks } => Ok((file, chunks)),
            ProcessOutcome::Rejected(rejection) => Err(rejection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(RejectCode::EmptyFile.code(), -1);
        assert_eq!(RejectCode::UnmatchFileType.code(), -2);
        assert_eq!(RejectCode::FileTooLarge.code(), -3);
    }

    #[test]
    fn test_rejected_accessors() {
        let outcome = ProcessOutcome::rejected(RejectCode::EmptyFile);
        assert_eq!(outcome.code(), Some(-1));
        assert_eq!(outcome.message(), Some("empty file"));
        assert!(outcome.chunks().is_none());
        assert!(!outcome.is_chunked());
        assert_eq!(
            outcome.into_result().unwrap_err().to_string(),
            "empty file (-1)"
        );
    }

    #[test]
    fn test_chunked_accessors() {
        let file = FileHandle::new("a.bin", &b"abc"[..]);
        let outcome = ProcessOutcome::Chunked {
            file: file.clone(),
            chunks: vec![Chunk::new(&b"abc"[..], 0)],
        };
        assert_eq!(outcome.code(), None);
        assert_eq!(outcome.message(), None);
        assert_eq!(outcome.chunks().map(<[Chunk]>::len), Some(1));
        assert_eq!(outcome.file(), Some(&file));
    }
}
