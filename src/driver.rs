use std::io;

#[cfg(feature = "tokio")]
use tokio::io::AsyncRead;

use crate::{
    config::Config,
    error::Error,
    io::{ReadOutcome, StreamReader, WorkBuffer},
    log::{debug, trace},
    request::{Request, TERMINATOR},
};


/// Read a request line from a blocking stream.
///
/// See [`RequestReader::read_request`].
pub fn request_from_reader<R: io::Read>(io: R) -> Result<Request, Error> {
    RequestReader::new(io).read_request()
}

/// Read a request line from an async stream.
///
/// See [`RequestReader::read_request_async`].
#[cfg(feature = "tokio")]
pub async fn request_from_async_reader<R: AsyncRead + Unpin>(io: R) -> Result<Request, Error> {
    RequestReader::new(io).read_request_async().await
}

/// Reads a stream into a growing buffer until a request line is parsed.
///
/// Each read is followed by a parse attempt over every buffered byte. Once the request line is
/// parsed, it and its terminator are discarded from the buffer, anything received after it is kept
/// and available from [`buffered`]. The next read request parses those bytes before reading the
/// stream again, so pipelined request lines are not lost.
///
/// [`buffered`]: RequestReader::buffered
#[derive(Debug)]
pub struct RequestReader<R> {
    io: StreamReader<R>,
    buffer: WorkBuffer,
}

impl<R> RequestReader<R> {
    /// Create new [`RequestReader`] with default [`Config`].
    #[inline]
    pub fn new(io: R) -> Self {
        Self::with_config(io, Config::default())
    }

    /// Create new [`RequestReader`] with given [`Config`].
    pub fn with_config(io: R, config: Config) -> Self {
        Self {
            io: StreamReader::new(io),
            buffer: WorkBuffer::with_capacity(config.initial_capacity),
        }
    }

    /// Returns bytes read but not consumed by the parser.
    #[inline]
    pub fn buffered(&self) -> &[u8] {
        self.buffer.filled()
    }

    /// Returns the current read buffer capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns shared reference to the underlying stream.
    #[inline]
    pub fn get_ref(&self) -> &R {
        self.io.get_ref()
    }

    /// Returns mutable reference to the underlying stream.
    #[inline]
    pub fn get_mut(&mut self) -> &mut R {
        self.io.get_mut()
    }

    /// Destruct into the underlying stream, buffered bytes are dropped.
    #[inline]
    pub fn into_inner(self) -> R {
        self.io.into_inner()
    }

    fn reserve(&mut self) {
        if self.buffer.grow_if_full() {
            trace!("read buffer grew to {} bytes", self.buffer.capacity());
        }
    }

    /// Feed the buffer to the parser after `read` more bytes arrived.
    fn feed(&mut self, request: &mut Request, read: usize) -> Result<(), Error> {
        self.buffer.advance_filled(read);
        trace!("read {read} bytes, {} buffered", self.buffer.len());
        self.parse(request)
    }

    /// Parse bytes left over from a previous request line, if any.
    fn parse_buffered(&mut self, request: &mut Request) -> Result<(), Error> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        trace!("parsing {} buffered bytes", self.buffer.len());
        self.parse(request)
    }

    fn parse(&mut self, request: &mut Request) -> Result<(), Error> {
        let consumed = request.advance(self.buffer.filled())?;
        if consumed > 0 {
            self.buffer.consume(consumed + TERMINATOR.len());
            trace!("consumed {consumed} bytes, {} left", self.buffer.len());
        }
        Ok(())
    }

    fn complete(request: Request) -> Result<Request, Error> {
        #[cfg(feature = "log")]
        if let Some(reqline) = request.request_line() {
            debug!("request line: {reqline}");
        }
        Ok(request)
    }

    fn incomplete() -> Result<Request, Error> {
        debug!("stream ended before the request line was complete");
        Err(Error::Incomplete)
    }
}

impl<R: io::Read> RequestReader<R> {
    /// Read until a request line is parsed.
    ///
    /// Bytes already buffered from a previous call are parsed first, the stream is only read when
    /// they do not hold a complete request line.
    ///
    /// # Errors
    ///
    /// Returns error if the stream fails, if the request line is malformed, or if the stream ends
    /// before the request line is complete.
    pub fn read_request(&mut self) -> Result<Request, Error> {
        let mut request = Request::new();
        self.parse_buffered(&mut request)?;

        while !request.is_done() {
            self.reserve();
            match self.io.read_into(self.buffer.spare_mut())? {
                ReadOutcome::Read(read) => self.feed(&mut request, read)?,
                ReadOutcome::Eof => return Self::incomplete(),
            }
        }

        Self::complete(request)
    }
}

#[cfg(feature = "tokio")]
impl<R: AsyncRead + Unpin> RequestReader<R> {
    /// Read until a request line is parsed, see [`read_request`].
    ///
    /// [`read_request`]: RequestReader::read_request
    pub async fn read_request_async(&mut self) -> Result<Request, Error> {
        let mut request = Request::new();
        self.parse_buffered(&mut request)?;

        while !request.is_done() {
            self.reserve();
            match self.io.read_into_async(self.buffer.spare_mut()).await? {
                ReadOutcome::Read(read) => self.feed(&mut request, read)?,
                ReadOutcome::Eof => return Self::incomplete(),
            }
        }

        Self::complete(request)
    }
}
