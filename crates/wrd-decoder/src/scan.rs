//! Terminator scans and text conversion shared by both decoders.
//!
//! Keeping these in one place is what makes the two modes agree byte for
//! byte on where a string or line ends.

/// Offset of the first NUL byte in `buf`.
pub(crate) fn find_nul(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == 0)
}

/// Offset of the first `\n` in `buf`.
pub(crate) fn find_newline(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n')
}

/// End of the line content given the index of its `\n`: one earlier when
/// the byte right before the newline is `\r`.
pub(crate) fn line_end(buf: &[u8], newline: usize) -> usize {
    if newline > 0 && buf[newline - 1] == b'\r' {
        newline - 1
    } else {
        newline
    }
}

/// Owned text from raw bytes. Invalid UTF-8 sequences become U+FFFD, so
/// text reads never fail for content reasons.
pub(crate) fn to_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
