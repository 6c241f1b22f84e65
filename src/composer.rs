use ::http::HeaderMap;
use ::http::HeaderValue;
use ::http::header;
use ::std::fs::File;
use ::std::path::Path;

use crate::BoundaryGenerator;
use crate::ComposeError;
use crate::ComposedReader;
use crate::ComposerConfig;
use crate::ContentSource;
use crate::FileSource;
use crate::PartHeader;
use crate::Result;
use crate::boundary::format_form_data_content_type;
use crate::boundary::validate_boundary;
use crate::internals::SourceChain;
use crate::internals::closing_boundary;
use crate::internals::part_opening;
use crate::part_header::CONTENT_DISPOSITION;

///
/// Builds a `multipart/form-data` body out of parts whose content is read later.
///
/// Each part added records its boundary line and headers,
/// and the source its content comes from. Nothing is read from the sources
/// until the body returned by [`Composer::detach()`] is read.
///
/// ```rust
/// use ::multipart_composer::Composer;
/// use ::std::io::Read;
///
/// let mut composer = Composer::new();
/// composer.set_boundary("B")?;
/// composer.add_field("comment", "a comment");
///
/// let mut body = String::new();
/// composer.detach().read_to_string(&mut body)?;
///
/// assert_eq!(
///     body,
///     "--B\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\na comment\r\n--B--\r\n"
/// );
/// #
/// # Ok::<(), Box<dyn ::std::error::Error>>(())
/// ```
///
/// If files or other owned sources are added,
/// make sure to call [`Composer::close()`] if the body is never detached.
///
#[derive(Debug)]
pub struct Composer<'a> {
    boundary: String,
    close_owned: bool,
    chain: SourceChain<'a>,
    boundary_generator: BoundaryGenerator,
}

impl<'a> Composer<'a> {
    /// A new composer, with a random boundary.
    pub fn new() -> Self {
        Self::new_with_boundary_generator(BoundaryGenerator::new())
    }

    /// A new composer set up from the config given.
    ///
    /// This will fail if the config holds an invalid boundary.
    pub fn new_with_config(config: ComposerConfig) -> Result<Self> {
        let mut composer = Self::new();
        composer.close_owned = config.close_owned;

        if let Some(boundary) = config.boundary {
            composer.set_boundary(&boundary)?;
        }

        Ok(composer)
    }

    /// A new composer, drawing its random boundaries from the generator given.
    pub fn new_with_boundary_generator(mut boundary_generator: BoundaryGenerator) -> Self {
        Self {
            boundary: boundary_generator.generate(),
            close_owned: true,
            chain: SourceChain::new(),
            boundary_generator,
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Replaces the boundary with an explicit one.
    ///
    /// This must be called before any parts are added,
    /// or after the body has been detached (or cleared).
    /// The boundary must be 1 to 70 characters from the RFC 2046 `bchars` set.
    pub fn set_boundary(&mut self, boundary: &str) -> Result<()> {
        self.ensure_empty("set_boundary")?;
        validate_boundary(boundary).map_err(|reason| ComposeError::InvalidBoundary {
            boundary: boundary.to_string(),
            reason,
        })?;

        ::tracing::debug!(boundary, "set multipart boundary");
        self.boundary = boundary.to_string();
        Ok(())
    }

    /// Replaces the boundary with a newly generated random one.
    ///
    /// The same restrictions as [`Composer::set_boundary()`] apply.
    pub fn reset_boundary(&mut self) -> Result<()> {
        self.ensure_empty("reset_boundary")?;

        self.boundary = self.boundary_generator.generate();
        ::tracing::debug!(boundary = %self.boundary, "reset multipart boundary");
        Ok(())
    }

    pub fn is_closing_owned(&self) -> bool {
        self.close_owned
    }

    /// Sets if owned sources are released on close.
    ///
    /// Sources added before this is changed keep their ownership.
    /// It only affects sources added later, and future closes and detaches.
    pub fn set_close_owned(&mut self, close_owned: bool) {
        self.close_owned = close_owned;
    }

    /// True when no parts have been added since creation, or the last detach.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The `Content-Type` to send with the composed body,
    /// i.e. `multipart/form-data; boundary=...`.
    pub fn form_data_content_type(&self) -> String {
        format_form_data_content_type(&self.boundary)
    }

    pub fn content_type_header(&self) -> Result<HeaderValue> {
        let header_value = HeaderValue::from_str(&self.form_data_content_type())?;
        Ok(header_value)
    }

    /// The headers an HTTP request carrying this body needs.
    ///
    /// `Content-Length` is only included when a length is given.
    pub fn request_headers(&self, content_length: Option<u64>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, self.content_type_header()?);

        if let Some(content_length) = content_length {
            headers.insert(header::CONTENT_LENGTH, HeaderValue::from(content_length));
        }

        Ok(headers)
    }

    /// Adds a part with the header given, and content read from the source.
    ///
    /// The source becomes owned if it can be released,
    /// and owned sources are being closed.
    pub fn add_part<S>(&mut self, header: &PartHeader, source: S)
    where
        S: ContentSource + 'a,
    {
        let mut source: Box<dyn ContentSource + 'a> = Box::new(source);
        let is_owned = self.close_owned && source.as_release().is_some();

        self.push_part(header, b"", Some((source, is_owned)));
    }

    /// Adds a text field.
    pub fn add_field(&mut self, name: &str, value: &str) {
        self.push_part(&PartHeader::field(name), value.as_bytes(), None);
    }

    /// Adds a field, with its value read from the source.
    pub fn add_field_reader<S>(&mut self, name: &str, source: S)
    where
        S: ContentSource + 'a,
    {
        self.add_part(&PartHeader::field(name), source);
    }

    /// Opens the file, and adds it as a file part named after the file.
    ///
    /// The opened file is owned by the composer.
    /// This is refused when owned sources are not being closed.
    pub fn add_file<P>(&mut self, field_name: &str, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if !self.close_owned {
            return Err(ComposeError::OwnershipDisabled {
                path: path.to_path_buf(),
            });
        }

        let source = FileSource::open(path).map_err(|source| ComposeError::OpenFailure {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|file_name| file_name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let header = PartHeader::file(field_name, &file_name);
        let source: Box<dyn ContentSource + 'a> = Box::new(source);
        self.push_part(&header, b"", Some((source, true)));
        Ok(())
    }

    /// Adds an already opened file as a file part.
    ///
    /// The file is owned by the composer from here on.
    /// Fails if the file's size cannot be read.
    pub fn add_file_handle(&mut self, field_name: &str, file_name: &str, file: File) -> Result<()> {
        let source = FileSource::from_file(file).map_err(|source| ComposeError::OpenFailure {
            path: file_name.into(),
            source,
        })?;

        let header = PartHeader::file(field_name, file_name);
        let source: Box<dyn ContentSource + 'a> = Box::new(source);
        self.push_part(&header, b"", Some((source, true)));
        Ok(())
    }

    /// Adds a file part, with its content read from the source.
    ///
    /// The content type is guessed from `file_name`.
    pub fn add_file_reader<S>(&mut self, field_name: &str, file_name: &str, source: S)
    where
        S: ContentSource + 'a,
    {
        self.add_part(&PartHeader::file(field_name, file_name), source);
    }

    /// The exact length of the body [`Composer::detach()`] would return.
    ///
    /// Fails if any source cannot report its size. Nothing is changed either way.
    pub fn total_size(&self) -> Result<u64> {
        let closing_len = closing_boundary(self.is_empty(), &self.boundary).len() as u64;
        self.chain.total_size(closing_len)
    }

    /// Ends the message, and moves all parts into the returned body.
    ///
    /// The composer is left empty, ready for reuse.
    /// If owned sources are being closed, the body takes over closing them.
    pub fn detach(&mut self) -> ComposedReader<'a> {
        let closing = closing_boundary(self.is_empty(), &self.boundary);
        self.chain.push_framing(closing);

        ::tracing::debug!(
            elements = self.chain.len(),
            owned = self.chain.owned_count(),
            close_owned = self.close_owned,
            "detached multipart body"
        );

        ComposedReader::new(self.chain.take(), self.close_owned)
    }

    /// The same as [`Composer::detach()`], and also returns the body's length.
    ///
    /// If any source cannot report its size this fails,
    /// and the composer is left as it was.
    pub fn detach_with_size(&mut self) -> Result<(ComposedReader<'a>, u64)> {
        let size = self.total_size()?;
        Ok((self.detach(), size))
    }

    /// Releases every owned source, keeping the parts added.
    ///
    /// Does nothing when owned sources are not being closed.
    /// Every source is attempted, and the first failure is returned.
    pub fn close(&mut self) -> Result<()> {
        if !self.close_owned {
            return Ok(());
        }

        self.chain.release_owned()
    }

    /// Closes, and then drops all parts.
    /// This allows the boundary to be changed again.
    ///
    /// The parts are dropped even if closing fails.
    pub fn clear(&mut self) -> Result<()> {
        let result = self.close();
        drop(self.chain.take());

        result
    }

    fn ensure_empty(&self, operation: &'static str) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ComposeError::InvalidState { operation })
        }
    }

    fn push_part(
        &mut self,
        header: &PartHeader,
        inline_content: &[u8],
        content: Option<(Box<dyn ContentSource + 'a>, bool)>,
    ) {
        let opening = part_opening(self.is_empty(), &self.boundary, header, inline_content);
        self.chain.push_framing(opening);

        if let Some((source, is_owned)) = content {
            self.chain.push_content(source, is_owned);
        }

        ::tracing::debug!(
            disposition = header.get(CONTENT_DISPOSITION),
            elements = self.chain.len(),
            "added multipart part"
        );
    }
}

impl Default for Composer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_set_boundary {
    use super::*;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn it_should_set_simple_boundary() {
        let mut composer = Composer::new();

        composer.set_boundary("foo").unwrap();

        assert_eq!(composer.boundary(), "foo");
    }

    #[test]
    fn it_should_reject_after_part_added() {
        let mut composer = Composer::new();
        let original = composer.boundary().to_string();
        composer.add_field("foo", "bar");

        let result = composer.set_boundary("foo");

        assert!(matches!(
            result,
            Err(ComposeError::InvalidState {
                operation: "set_boundary"
            })
        ));
        assert_eq!(composer.boundary(), original);
    }

    #[test]
    fn it_should_keep_previous_boundary_when_invalid() {
        let mut composer = Composer::new();
        composer.set_boundary("foo").unwrap();

        let result = composer.set_boundary(&"0123456789".repeat(8));

        assert!(matches!(result, Err(ComposeError::InvalidBoundary { .. })));
        assert_eq!(composer.boundary(), "foo");
    }

    #[test]
    fn it_should_allow_setting_again_after_clear() {
        let mut composer = Composer::new();
        composer.add_field("foo", "bar");
        composer.clear().unwrap();

        composer.set_boundary("foo").unwrap();

        assert_eq!(composer.boundary(), "foo");
    }

    #[test]
    fn it_should_allow_setting_again_after_detach() {
        let mut composer = Composer::new();
        composer.add_field("foo", "bar");
        let _body = composer.detach();

        composer.set_boundary("foo").unwrap();

        assert_eq!(composer.boundary(), "foo");
    }
}



#[cfg(test)]
mod test_form_data_content_type {
    use super::*;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn it_should_quote_special_boundary() {
        let mut composer = Composer::new();
        composer.set_boundary("foo / bar").unwrap();

        assert_eq!(
            composer.form_data_content_type(),
            "multipart/form-data; boundary=\"foo / bar\""
        );
    }

    #[test]
    fn it_should_build_request_headers_with_length() {
        let mut composer = Composer::new();
        composer.set_boundary("B").unwrap();

        let headers = composer.request_headers(Some(68)).unwrap();

        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "multipart/form-data; boundary=B"
        );
        assert_eq!(headers.get(header::CONTENT_LENGTH).unwrap(), "68");
    }

    #[test]
    fn it_should_build_request_headers_without_length() {
        let composer = Composer::new();

        let headers = composer.request_headers(None).unwrap();

        assert!(headers.get(header::CONTENT_LENGTH).is_none());
    }
}
