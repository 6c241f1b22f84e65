use ::bytes::BufMut;
use ::bytes::Bytes;
use ::bytes::BytesMut;

use crate::PartHeader;

const CRLF: &[u8] = b"\r\n";
const DASHES: &[u8] = b"--";

/// The CRLF placed before every boundary line except the very first one.
pub fn delimiter(is_first: bool) -> &'static [u8] {
    if is_first { b"" } else { CRLF }
}

/// Everything written before a part's content:
/// the delimiter, the boundary line, and the header block.
///
/// `inline_content` is appended straight after the headers,
/// used for plain text fields so they need no separate source.
pub fn part_opening(
    is_first: bool,
    boundary: &str,
    header: &PartHeader,
    inline_content: &[u8],
) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_slice(delimiter(is_first));
    buf.put_slice(DASHES);
    buf.put_slice(boundary.as_bytes());
    buf.put_slice(CRLF);
    header.write_to(&mut buf);
    buf.put_slice(inline_content);

    buf.freeze()
}

/// The final `--boundary--` line ending the message.
pub fn closing_boundary(is_first: bool, boundary: &str) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_slice(delimiter(is_first));
    buf.put_slice(DASHES);
    buf.put_slice(boundary.as_bytes());
    buf.put_slice(DASHES);
    buf.put_slice(CRLF);

    buf.freeze()
}
