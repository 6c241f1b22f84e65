use ::std::fs::File;
use ::std::io;
use ::std::io::Read;
use ::std::path::Path;

use crate::ContentSource;
use crate::KnownSize;
use crate::Release;

/// An opened file, closed when the source is released.
pub type FileSource = OwnedReader<File>;

///
/// A reader the composer owns, and drops when it is released.
///
/// Once released any further reads fail.
///
#[derive(Debug)]
pub struct OwnedReader<R> {
    inner: Option<R>,
    size: Option<u64>,
}

impl<R> OwnedReader<R>
where
    R: Read + Send,
{
    pub fn new(inner: R) -> Self {
        Self {
            inner: Some(inner),
            size: None,
        }
    }

    pub fn sized(inner: R, size: u64) -> Self {
        Self {
            inner: Some(inner),
            size: Some(size),
        }
    }

    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }
}

impl OwnedReader<File> {
    /// Opens the file for reading, and records its size.
    pub fn open<P>(path: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Self::from_file(file)
    }

    /// Takes over an already open file, recording its size.
    pub fn from_file(file: File) -> io::Result<Self> {
        let size = file.metadata()?.len();
        Ok(Self::sized(file, size))
    }
}

impl<R> Read for OwnedReader<R>
where
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.as_mut() {
            Some(inner) => inner.read(buf),
            None => Err(io::Error::other("reading from a released source")),
        }
    }
}

impl<R> ContentSource for OwnedReader<R>
where
    R: Read + Send,
{
    fn as_known_size(&self) -> Option<&dyn KnownSize> {
        self.size.is_some().then_some(self as &dyn KnownSize)
    }

    fn as_release(&mut self) -> Option<&mut dyn Release> {
        Some(self)
    }
}

impl<R> KnownSize for OwnedReader<R> {
    fn known_size(&self) -> u64 {
        self.size.unwrap_or_default()
    }
}

impl<R> Release for OwnedReader<R> {
    fn release(&mut self) -> io::Result<()> {
        drop(self.inner.take());
        Ok(())
    }
}

#[cfg(test)]
mod test_open {
    use super::*;
    use ::std::io::Write;

    #[test]
    fn it_should_record_file_size() {
        let mut file = ::tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"text file content").unwrap();

        let source = FileSource::open(file.path()).unwrap();

        let size = source.as_known_size().map(KnownSize::known_size);
        assert_eq!(size, Some(17));
    }

    #[test]
    fn it_should_error_for_missing_file() {
        let dir = ::tempfile::tempdir().unwrap();

        let result = FileSource::open(dir.path().join("missing.txt"));

        assert!(result.is_err());
    }
}
