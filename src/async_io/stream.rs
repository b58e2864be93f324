//! Fixed-size upload chunks from an async byte source.
//!
//! The stream reads through `futures_io::AsyncRead` and holds at most one
//! chunk in memory.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use magicchunk::chunk_async;
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), magicchunk::Error> {
//!     let mut stream = chunk_async(reader, 512 * 1024);
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("Chunk: {} bytes @ {}", chunk.len(), chunk.index);
//!     }
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::chunk::Chunk;
use crate::config::DEFAULT_CHUNK_SIZE;
use crate::error::Error;

pin_project! {
    /// A stream that yields fixed-size chunks from an async reader.
    ///
    /// Boundaries are identical to [`Chunker::chunk_bytes`](crate::Chunker::chunk_bytes)
    /// over the same bytes, however the reader splits its reads.
    pub struct ChunkStream<R> {
        #[pin]
        reader: R,
        chunk_size: usize,
        buffer: Vec<u8>,
        filled: usize,
        offset: u64,
        finished: bool,
    }
}

impl<R> ChunkStream<R> {
    /// Creates a new chunk stream from an async reader.
    ///
    /// A zero `chunk_size` falls back to the default of 512 KiB.
    pub fn new(reader: R, chunk_size: usize) -> Self {
        let chunk_size = if chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size
        };
        Self {
            reader,
            chunk_size,
            buffer: Vec::new(),
            filled: 0,
            offset: 0,
            finished: false,
        }
    }

    /// Returns the offset of the next chunk.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

/// Takes the filled part of `buffer` as a chunk at `offset` and advances it.
fn take_chunk(buffer: &[u8], filled: &mut usize, offset: &mut u64) -> Chunk {
    let chunk = Chunk::new(Bytes::copy_from_slice(&buffer[..*filled]), *offset);
    *offset += *filled as u64;
    *filled = 0;
    chunk
}

impl<R: AsyncRead> Stream for ChunkStream<R> {
    type Item = Result<Chunk, Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        if this.buffer.len() != *this.chunk_size {
            this.buffer.resize(*this.chunk_size, 0);
        }

        loop {
            if *this.filled == *this.chunk_size {
                let chunk = take_chunk(this.buffer, this.filled, this.offset);
                return Poll::Ready(Some(Ok(chunk)));
            }

            let filled = *this.filled;
            match this.reader.as_mut().poll_read(cx, &mut this.buffer[filled..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(Error::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    // End of stream - emit remaining data if any
                    *this.finished = true;
                    if *this.filled == 0 {
                        return Poll::Ready(None);
                    }
                    let chunk = take_chunk(this.buffer, this.filled, this.offset);
                    return Poll::Ready(Some(Ok(chunk)));
                }
                Poll::Ready(Ok(n)) => *this.filled += n,
            }
        }
    }
}

/// Creates a fixed-size chunk stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use magicchunk::chunk_async;
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let stream = chunk_async(tokio_reader.compat(), 512 * 1024);
/// ```
pub fn chunk_async<R: AsyncRead>(reader: R, chunk_size: usize) -> ChunkStream<R> {
    ChunkStream::new(reader, chunk_size)
}
