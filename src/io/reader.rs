use std::io;

#[cfg(feature = "tokio")]
use std::{
    pin::Pin,
    task::{Poll, ready},
};
#[cfg(feature = "tokio")]
use tokio::io::{AsyncRead, ReadBuf};

/// Outcome of a single read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// `n` bytes were read, `0 < n <= len`.
    Read(usize),
    /// No more data will ever arrive.
    Eof,
}

/// Byte stream adapter.
///
/// Performs one bounded read per call into a caller supplied buffer, and tells end of stream
/// apart from data. A read may return fewer bytes than requested.
#[derive(Debug)]
pub struct StreamReader<R> {
    io: R,
}

impl<R> StreamReader<R> {
    /// Create new [`StreamReader`].
    #[inline]
    pub fn new(io: R) -> Self {
        Self { io }
    }

    /// Returns shared reference to the underlying stream.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.io
    }

    /// Returns mutable reference to the underlying stream.
    #[inline]
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.io
    }

    /// Destruct into the underlying stream.
    #[inline]
    pub fn into_inner(self) -> R {
        self.io
    }
}

impl<R: io::Read> StreamReader<R> {
    /// Read once into `buf`, blocking until data arrives, the stream ends, or an error occurs.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying read fails, or if `buf` is empty.
    pub fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        if buf.is_empty() {
            return Err(empty_buffer());
        }
        match self.io.read(buf)? {
            0 => Ok(ReadOutcome::Eof),
            read => Ok(ReadOutcome::Read(read)),
        }
    }
}

#[cfg(feature = "tokio")]
impl<R: AsyncRead + Unpin> StreamReader<R> {
    /// Poll a single read into `buf`.
    pub fn poll_read_into(
        &mut self,
        cx: &mut std::task::Context,
        buf: &mut [u8],
    ) -> Poll<io::Result<ReadOutcome>> {
        if buf.is_empty() {
            return Poll::Ready(Err(empty_buffer()));
        }
        let mut buf = ReadBuf::new(buf);
        ready!(Pin::new(&mut self.io).poll_read(cx, &mut buf))?;
        match buf.filled().len() {
            0 => Poll::Ready(Ok(ReadOutcome::Eof)),
            read => Poll::Ready(Ok(ReadOutcome::Read(read))),
        }
    }

    /// Read once into `buf`, see [`read_into`][StreamReader::read_into].
    #[inline]
    pub async fn read_into_async(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        std::future::poll_fn(|cx| self.poll_read_into(cx, buf)).await
    }
}

fn empty_buffer() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "read into an empty buffer")
}
