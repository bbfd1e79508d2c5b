use std::io;

use crate::request::ParseError;

/// Error returned when reading a request from a stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request line is malformed, or the parser was misused.
    #[error("failed to parse request: {0}")]
    Parse(#[from] ParseError),
    /// Underlying stream failed.
    #[error("failed to read request: {0}")]
    Io(#[from] io::Error),
    /// Stream ended before the request line terminator.
    #[error("incomplete request: stream ended before the request line was complete")]
    Incomplete,
}

impl Error {
    /// Returns `true` if the error comes from the request line content.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Parse(err) if err.is_malformed())
    }
}
