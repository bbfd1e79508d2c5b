/// Request line parsing error.
///
/// Every variant is fatal for the connection, more bytes will not fix it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Request line does not split into exactly three fields.
    #[error("malformed request line: expected 3 space-separated fields, found {0}")]
    FieldCount(usize),
    /// Method contains lowercase letters.
    #[error("malformed request line: method cannot contain lowercase letters")]
    LowercaseMethod,
    /// Version does not contain exactly one `/`.
    #[error("malformed request line: invalid version format")]
    InvalidVersionFormat,
    /// Version other than `1.1`.
    #[error("malformed request line: unsupported version, only 1.1 is accepted")]
    UnsupportedVersion,
    /// Parser invoked after the request line is complete.
    #[error("parser invoked after completion")]
    Completed,
}

impl ParseError {
    /// Returns `true` if the error is caused by the request line content, rather than by the
    /// parser being misused.
    #[inline]
    pub const fn is_malformed(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}
