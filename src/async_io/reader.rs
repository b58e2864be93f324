//! Async byte-source boundary: load, render and fingerprint readers.
//!
//! Each function reads through `futures_io` traits, so any runtime works.
//! A reader is consumed sequentially; do not share one between calls.

use bytes::Bytes;
use futures_io::{AsyncRead, AsyncSeek};
use futures_util::io::{AsyncReadExt, AsyncSeekExt};
use std::io::SeekFrom;

use crate::config::ConfigOverride;
use crate::error::Error;
use crate::file::{ByteHex, FileHandle};
use crate::hash::{Blake3Hasher, ContentHash, sample_ranges};
use crate::pipeline::{Pipeline, ProcessOutcome};

/// Read size used when streaming.
const READ_PIECE: usize = 64 * 1024;

/// Reads `reader` to the end.
pub async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> Result<Bytes, Error> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).await?;
    Ok(Bytes::from(data))
}

/// Reads `reader` to the end into a named [`FileHandle`].
pub async fn read_file<R: AsyncRead + Unpin>(
    name: impl Into<String>,
    reader: R,
) -> Result<FileHandle, Error> {
    Ok(FileHandle::new(name, read_all(reader).await?))
}

/// Reads `reader` to the end and renders it as byte-hex text.
pub async fn read_as_byte_hex<R: AsyncRead + Unpin>(mut reader: R) -> Result<ByteHex, Error> {
    let mut hex = ByteHex::default();
    let mut buf = vec![0u8; READ_PIECE];
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        hex.extend_from_bytes(&buf[..n]);
    }
    Ok(hex)
}

/// Exact fingerprint of everything `reader` yields.
///
/// Equal to [`hash_exact`](crate::hash_exact) over the same bytes.
pub async fn hash_exact_async<R: AsyncRead + Unpin>(mut reader: R) -> Result<ContentHash, Error> {
    let mut hasher = Blake3Hasher::new();
    let mut buf = vec![0u8; READ_PIECE];
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        hasher.update_hex(&buf[..n]);
    }
    Ok(hasher.finalize())
}

/// Sampled fingerprint of a seekable source of `size` bytes.
///
/// Only the ranges from [`sample_ranges`] are read. Equal to
/// [`hash_sampled`](crate::hash_sampled) over the same bytes; a source
/// shorter than `size` fails with an I/O error.
pub async fn hash_sampled_async<R: AsyncRead + AsyncSeek + Unpin>(
    mut reader: R,
    size: u64,
) -> Result<ContentHash, Error> {
    let mut hasher = Blake3Hasher::new();
    let mut buf = Vec::new();
    for range in sample_ranges(size) {
        let len = (range.end - range.start) as usize;
        buf.resize(len, 0);
        reader.seek(SeekFrom::Start(range.start)).await?;
        reader.read_exact(&mut buf).await?;
        hasher.update(&buf);
    }
    Ok(hasher.finalize())
}

impl Pipeline {
    /// Loads `reader` into a file named `name` and runs it through the pipeline.
    ///
    /// I/O failures surface as [`Error::Io`]; expected rejections are in the
    /// returned [`ProcessOutcome`].
    pub async fn process_reader<R: AsyncRead + Unpin>(
        &self,
        name: impl Into<String>,
        reader: R,
        overrides: Option<&ConfigOverride>,
    ) -> Result<ProcessOutcome, Error> {
        let file = read_file(name, reader).await?;
        Ok(self.process_file(&file, overrides))
    }
}
