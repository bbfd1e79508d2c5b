//! Line reader.
//!
//! Splits a byte stream on `\n`, regardless of how the stream fragments its reads. The `\n` is
//! not part of the yielded line, a preceding `\r` is. When the stream ends, a non-empty trailing
//! line without `\n` is yielded last. Lines are decoded lossily.
use std::{io, task::Poll};

#[cfg(feature = "tokio")]
use std::{pin::Pin, task::ready};
#[cfg(feature = "tokio")]
use tokio::io::AsyncRead;

use crate::{
    config::Config,
    io::{ReadOutcome, StreamReader, WorkBuffer},
    log::trace,
};


/// Iterator of lines from a blocking stream.
#[derive(Debug)]
pub struct Lines<R> {
    io: StreamReader<R>,
    lines: LineBuffer,
}

impl<R> Lines<R> {
    /// Create new [`Lines`] with default [`Config`].
    #[inline]
    pub fn new(io: R) -> Self {
        Self::with_config(io, Config::default())
    }

    /// Create new [`Lines`] with given [`Config`].
    #[inline]
    pub fn with_config(io: R, config: Config) -> Self {
        Self {
            io: StreamReader::new(io),
            lines: LineBuffer::new(config),
        }
    }

    /// Destruct into the underlying stream, buffered bytes are dropped.
    #[inline]
    pub fn into_inner(self) -> R {
        self.io.into_inner()
    }
}

impl<R: io::Read> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Poll::Ready(line) = self.lines.next_line() {
                return line.map(Ok);
            }
            let outcome = self.io.read_into(self.lines.reserve());
            if let Err(err) = self.lines.on_read(outcome) {
                return Some(Err(err));
            }
        }
    }
}

/// Stream of lines from an async stream.
#[cfg(feature = "tokio")]
#[derive(Debug)]
pub struct LinesStream<R> {
    io: StreamReader<R>,
    lines: LineBuffer,
}

#[cfg(feature = "tokio")]
impl<R> LinesStream<R> {
    /// Create new [`LinesStream`] with default [`Config`].
    #[inline]
    pub fn new(io: R) -> Self {
        Self::with_config(io, Config::default())
    }

    /// Create new [`LinesStream`] with given [`Config`].
    #[inline]
    pub fn with_config(io: R, config: Config) -> Self {
        Self {
            io: StreamReader::new(io),
            lines: LineBuffer::new(config),
        }
    }

    /// Destruct into the underlying stream, buffered bytes are dropped.
    #[inline]
    pub fn into_inner(self) -> R {
        self.io.into_inner()
    }
}

#[cfg(feature = "tokio")]
impl<R: AsyncRead + Unpin> futures_core::Stream for LinesStream<R> {
    type Item = io::Result<String>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> Poll<Option<Self::Item>> {
        let me = self.get_mut();
        loop {
            if let Poll::Ready(line) = me.lines.next_line() {
                return Poll::Ready(line.map(Ok));
            }
            let outcome = ready!(me.io.poll_read_into(cx, me.lines.reserve()));
            if let Err(err) = me.lines.on_read(outcome) {
                return Poll::Ready(Some(Err(err)));
            }
        }
    }
}

// ===== LineBuffer =====

#[derive(Debug)]
struct LineBuffer {
    buffer: WorkBuffer,
    eof: bool,
}

impl LineBuffer {
    fn new(config: Config) -> Self {
        Self {
            buffer: WorkBuffer::with_capacity(config.initial_capacity),
            eof: false,
        }
    }

    /// Returns `Poll::Pending` if more bytes are required.
    fn next_line(&mut self) -> Poll<Option<String>> {
        let filled = self.buffer.filled();

        if let Some(at) = filled.iter().position(|&byte| byte == b'\n') {
            let line = String::from_utf8_lossy(&filled[..at]).into_owned();
            self.buffer.consume(at + 1);
            return Poll::Ready(Some(line));
        }

        if !self.eof {
            return Poll::Pending;
        }

        if filled.is_empty() {
            return Poll::Ready(None);
        }

        let line = String::from_utf8_lossy(filled).into_owned();
        self.buffer.clear();
        Poll::Ready(Some(line))
    }

    fn reserve(&mut self) -> &mut [u8] {
        if self.buffer.grow_if_full() {
            trace!("line buffer grew to {} bytes", self.buffer.capacity());
        }
        self.buffer.spare_mut()
    }

    fn on_read(&mut self, outcome: io::Result<ReadOutcome>) -> io::Result<()> {
        match outcome {
            Ok(ReadOutcome::Read(read)) => {
                self.buffer.advance_filled(read);
                Ok(())
            }
            Ok(ReadOutcome::Eof) => {
                self.eof = true;
                Ok(())
            }
            Err(err) => {
                self.buffer.clear();
                self.eof = true;
                Err(err)
            }
        }
    }
}
