//! Byte searching for the request line parser.

const BLOCK: usize = size_of::<usize>();
const MSB: usize = usize::from_le_bytes([0b1000_0000; BLOCK]);
const LSB: usize = usize::from_le_bytes([0b0000_0001; BLOCK]);
const CR: usize = usize::from_le_bytes([b'\r'; BLOCK]);

/// Returns the offset of the first `\r\n` in `bytes`.
///
/// A bare `\n` is not a line terminator. A trailing `\r` with nothing after it returns `None`,
/// the `\n` may still arrive with the next read.
pub(crate) fn find_crlf(bytes: &[u8]) -> Option<usize> {
    let mut offset = 0;
    while let Some(cr) = find_cr(&bytes[offset..]) {
        let at = offset + cr;
        match bytes.get(at + 1) {
            Some(b'\n') => return Some(at),
            Some(_) => offset = at + 1,
            None => return None,
        }
    }
    None
}

/// Find the first `\r`, one word at a time.
fn find_cr(bytes: &[u8]) -> Option<usize> {
    let mut state = bytes;

    while let Some((chunk, rest)) = state.split_first_chunk::<BLOCK>() {
        // zero byte wherever the input is '\r'
        let block = usize::from_le_bytes(*chunk) ^ CR;
        let found = block.wrapping_sub(LSB) & !block & MSB;
        if found != 0 {
            // lowest set bit is exact, borrows only propagate upward
            let nth = (found.trailing_zeros() / 8) as usize;
            return Some(bytes.len() - state.len() + nth);
        }
        state = rest;
    }

    state
        .iter()
        .position(|&byte| byte == b'\r')
        .map(|nth| bytes.len() - state.len() + nth)
}
