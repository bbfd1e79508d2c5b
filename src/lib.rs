//! Incremental HTTP/1.1 request line decoder.
//!
//! Bytes arriving over a stream are collected in a growable [`WorkBuffer`] and offered to a
//! [`Request`] parser as they come, so a request line split across any number of reads decodes the
//! same as one delivered whole.
//!
//! ```
//! let mut reader = reqline::RequestReader::new(&b"GET /coffee HTTP/1.1\r\nHost: "[..]);
//! let request = reader.read_request().unwrap();
//! let line = request.request_line().unwrap();
//!
//! assert_eq!(line.method(), b"GET");
//! assert_eq!(line.request_target(), b"/coffee");
//! assert_eq!(line.http_version(), b"1.1");
//! assert_eq!(reader.buffered(), b"Host: ");
//! ```
//!
//! [`WorkBuffer`]: io::WorkBuffer
#![warn(missing_debug_implementations)]
#![cfg_attr(test, deny(unused_variables))]

mod log;

pub mod io;
pub mod request;
pub mod lines;

mod config;
mod driver;
mod error;

#[cfg(feature = "tokio")]
pub mod rt;

pub use config::Config;
pub use driver::{RequestReader, request_from_reader};
pub use error::Error;
pub use lines::Lines;
pub use request::{ParseError, ParserState, Request, RequestLine};

#[cfg(feature = "tokio")]
pub use driver::request_from_async_reader;
#[cfg(feature = "tokio")]
pub use lines::LinesStream;
