use bytes::Bytes;
use std::str::Utf8Error;

use super::{error::ParseError, matches};

/// Request line separator.
pub const TERMINATOR: &[u8] = b"\r\n";

const SUPPORTED_VERSION: &[u8] = b"1.1";

/// Decoded HTTP request line, e.g. `GET /coffee HTTP/1.1`.
///
/// Fields are kept as the bytes that were sent, no text encoding is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: Bytes,
    request_target: Bytes,
    http_version: Bytes,
}

impl RequestLine {
    /// Returns the request method, e.g. `GET`.
    #[inline]
    pub fn method(&self) -> &[u8] {
        &self.method
    }

    /// Returns the request target as sent, e.g. `/coffee`.
    #[inline]
    pub fn request_target(&self) -> &[u8] {
        &self.request_target
    }

    /// Returns the version number after the `/`, e.g. `1.1`.
    #[inline]
    pub fn http_version(&self) -> &[u8] {
        &self.http_version
    }

    /// Returns the request method as `str`.
    ///
    /// # Errors
    ///
    /// Returns error if the method is not valid UTF-8.
    #[inline]
    pub fn method_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.method)
    }

    /// Returns the request target as `str`.
    ///
    /// # Errors
    ///
    /// Returns error if the request target is not valid UTF-8.
    #[inline]
    pub fn request_target_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.request_target)
    }

    /// Returns the version number as `str`, always `1.1`.
    #[inline]
    pub fn http_version_str(&self) -> &str {
        // only `SUPPORTED_VERSION` is ever accepted
        std::str::from_utf8(&self.http_version).unwrap_or_default()
    }
}

/// Invalid UTF-8 is displayed lossily.
impl std::fmt::Display for RequestLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} HTTP/{}",
            String::from_utf8_lossy(&self.method),
            String::from_utf8_lossy(&self.request_target),
            self.http_version_str(),
        )
    }
}

// ===== Request Line =====

/// Parse a request line from the front of `bytes`.
///
/// Returns `Ok(None)` if the terminator is not found yet, otherwise the request line and its
/// length excluding the terminator.
pub(crate) fn parse_reqline(bytes: &[u8]) -> Result<Option<(RequestLine, usize)>, ParseError> {
    let Some(len) = matches::find_crlf(bytes) else {
        return Ok(None);
    };

    let fields = bytes[..len].split(|&byte| byte == b' ').collect::<Vec<_>>();
    let [method, request_target, version] = fields[..] else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    if method.iter().any(u8::is_ascii_lowercase) {
        return Err(ParseError::LowercaseMethod);
    }

    let mut version = version.split(|&byte| byte == b'/');
    let (Some(_), Some(http_version), None) = (version.next(), version.next(), version.next())
    else {
        return Err(ParseError::InvalidVersionFormat);
    };
    if http_version != SUPPORTED_VERSION {
        return Err(ParseError::UnsupportedVersion);
    }

    let reqline = RequestLine {
        method: Bytes::copy_from_slice(method),
        request_target: Bytes::copy_from_slice(request_target),
        http_version: Bytes::copy_from_slice(http_version),
    };

    Ok(Some((reqline, len)))
}
