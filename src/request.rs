//! HTTP Request line parser.
//!
//! [`Request::advance`] works on chunked bytes. Given the whole buffered input so far, the parser
//! looks for the `\r\n` terminator. If it is not found, `Ok(0)` is returned and nothing is
//! consumed, the caller should read more and call again with the same bytes plus the new ones.
//! Once found, the line is validated and the parser is [`Done`].
//!
//! [`Done`]: ParserState::Done
mod error;
mod matches;
mod parser;

#[cfg(test)]
mod test;

pub use error::ParseError;
pub use parser::{RequestLine, TERMINATOR};

/// Parser state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParserState {
    /// Waiting for the request line terminator.
    #[default]
    Initialized,
    /// Request line is parsed.
    Done(RequestLine),
}

/// HTTP Request.
///
/// Owns the parser state, and the request line once it is parsed.
#[derive(Debug, Default)]
pub struct Request {
    state: ParserState,
}

impl Request {
    /// Create new [`Request`] waiting for its request line.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the parser with all currently buffered bytes.
    ///
    /// Returns the number of bytes consumed, excluding the terminator. `Ok(0)` means more bytes
    /// are required.
    ///
    /// # Errors
    ///
    /// Returns error if the request line is malformed, or if the request line has already been
    /// parsed.
    pub fn advance(&mut self, data: &[u8]) -> Result<usize, ParseError> {
        match self.state {
            ParserState::Initialized => match parser::parse_reqline(data)? {
                Some((reqline, consumed)) => {
                    self.state = ParserState::Done(reqline);
                    Ok(consumed)
                }
                None => Ok(0),
            },
            ParserState::Done(_) => Err(ParseError::Completed),
        }
    }

    /// Returns shared reference to [`ParserState`].
    #[inline]
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Returns `true` if the request line is parsed.
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.state, ParserState::Done(_))
    }

    /// Returns shared reference to [`RequestLine`] if it is parsed.
    #[inline]
    pub fn request_line(&self) -> Option<&RequestLine> {
        match &self.state {
            ParserState::Done(reqline) => Some(reqline),
            ParserState::Initialized => None,
        }
    }

    /// Destruct request into [`RequestLine`] if it is parsed.
    #[inline]
    pub fn into_request_line(self) -> Option<RequestLine> {
        match self.state {
            ParserState::Done(reqline) => Some(reqline),
            ParserState::Initialized => None,
        }
    }
}
