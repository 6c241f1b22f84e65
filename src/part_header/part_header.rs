use ::bytes::BufMut;
use ::bytes::BytesMut;
use ::std::collections::BTreeMap;
use ::std::fmt::Write as _;

use crate::part_header::canonical_header_name;
use crate::part_header::escape_quotes;
use crate::part_header::guess_content_type;

pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_TYPE: &str = "Content-Type";

///
/// The header block of one part of a multipart message.
///
/// Use [`PartHeader::field()`], [`PartHeader::file()`], or [`PartHeader::form_data()`]
/// to build one, and then pass it to [`Composer::add_part()`](crate::Composer::add_part()).
///
/// Header names are written in sorted order,
/// so the same header always produces the same bytes.
///
/// ```rust
/// use ::multipart_composer::PartHeader;
///
/// let header = PartHeader::file("upload", "notes.txt")
///     .add("X-Checksum", "abc");
///
/// assert_eq!(header.get("Content-Type"), Some("text/plain; charset=utf-8"));
/// ```
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartHeader {
    headers: BTreeMap<String, Vec<String>>,
}

impl PartHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a `form-data` disposition from the given parameters.
    ///
    /// Parameters are written in sorted order, with their values quoted and escaped.
    /// If a key is given more than once, the last value is used.
    pub fn form_data<I, K, V>(disposition: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let disposition: BTreeMap<String, String> = disposition
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        let mut value = String::from("form-data");
        for (key, param) in &disposition {
            // Writing to a String cannot fail.
            let _ = write!(value, "; {key}=\"{}\"", escape_quotes(param));
        }

        Self::new().set(CONTENT_DISPOSITION, value)
    }

    /// A header for a plain form field.
    pub fn field(name: &str) -> Self {
        Self::form_data([("name", name)])
    }

    /// A header for a file upload.
    ///
    /// The content type is guessed from the extension of `file_name`.
    pub fn file(field_name: &str, file_name: &str) -> Self {
        Self::form_data([("name", field_name), ("filename", file_name)])
            .set(CONTENT_TYPE, guess_content_type(file_name))
    }

    /// Sets a header, replacing any values it already had.
    pub fn set<N, V>(mut self, name: N, value: V) -> Self
    where
        N: AsRef<str>,
        V: Into<String>,
    {
        let name = canonical_header_name(name.as_ref());
        self.headers.insert(name, vec![value.into()]);
        self
    }

    /// Adds a header value, keeping any values it already had.
    /// Each value is written on its own line.
    pub fn add<N, V>(mut self, name: N, value: V) -> Self
    where
        N: AsRef<str>,
        V: Into<String>,
    {
        let name = canonical_header_name(name.as_ref());
        self.headers.entry(name).or_default().push(value.into());
        self
    }

    /// Returns the first value for this header.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    pub fn values(&self, name: &str) -> &[String] {
        self.headers
            .get(&canonical_header_name(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Writes each header line followed by the blank line ending the block.
    pub(crate) fn write_to(&self, buf: &mut BytesMut) {
        for (name, values) in &self.headers {
            for value in values {
                buf.put_slice(name.as_bytes());
                buf.put_slice(b": ");
                buf.put_slice(value.as_bytes());
                buf.put_slice(b"\r\n");
            }
        }

        buf.put_slice(b"\r\n");
    }
}



#[cfg(test)]
mod test_file {
    use super::*;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn it_should_have_name_and_filename() {
        let header = PartHeader::file("file", "test.txt");

        assert_eq!(
            header.get(CONTENT_DISPOSITION),
            Some(r#"form-data; filename="test.txt"; name="file""#)
        );
    }

    #[test]
    fn it_should_guess_content_type() {
        let header = PartHeader::file("file", "test.txt");

        assert_eq!(header.get(CONTENT_TYPE), Some("text/plain; charset=utf-8"));
    }

    #[test]
    fn it_should_fall_back_to_octet_stream() {
        let header = PartHeader::file("file", "my");

        assert_eq!(header.get(CONTENT_TYPE), Some("application/octet-stream"));
    }
}

#[cfg(test)]
mod test_set_and_add {
    use super::*;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn it_should_replace_values_on_set() {
        let header = PartHeader::new()
            .add("x-tag", "one")
            .set("X-Tag", "two");

        assert_eq!(header.values("x-tag"), ["two".to_string()]);
    }

    #[test]
    fn it_should_keep_values_in_order_on_add() {
        let header = PartHeader::new().add("x-tag", "one").add("X-TAG", "two");

        assert_eq!(header.values("X-Tag"), ["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn it_should_return_nothing_for_missing_header() {
        let header = PartHeader::new();

        assert!(header.values("X-Missing").is_empty());
        assert!(header.is_empty());
    }
}

#[cfg(test)]
mod test_write_to {
    use super::*;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn it_should_write_sorted_lines_and_blank_line() {
        let header = PartHeader::file("file", "my")
            .add("X-Tag", "one")
            .add("X-Tag", "two");
        let mut buf = BytesMut::new();

        header.write_to(&mut buf);

        assert_eq!(
            String::from_utf8_lossy(&buf),
            "Content-Disposition: form-data; filename=\"my\"; name=\"file\"\r\n\
             Content-Type: application/octet-stream\r\n\
             X-Tag: one\r\n\
             X-Tag: two\r\n\
             \r\n"
        );
    }

    #[test]
    fn it_should_write_only_blank_line_when_empty() {
        let mut buf = BytesMut::new();

        PartHeader::new().write_to(&mut buf);

        assert_eq!(&buf[..], b"\r\n");
    }
}
