use ::std::io;
use ::std::io::Read;

use crate::ContentSource;
use crate::KnownSize;

///
/// Wraps any reader as a [`ContentSource`], such as a pipe or a socket.
///
/// Without a declared size the composed message length cannot be computed.
/// Use [`ReaderSource::sized()`] when the length is known up front.
/// The reader is never released by the composer.
///
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
    size: Option<u64>,
}

impl<R> ReaderSource<R>
where
    R: Read + Send,
{
    pub fn new(inner: R) -> Self {
        Self { inner, size: None }
    }

    pub fn sized(inner: R, size: u64) -> Self {
        Self {
            inner,
            size: Some(size),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Read for ReaderSource<R>
where
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> ContentSource for ReaderSource<R>
where
    R: Read + Send,
{
    fn as_known_size(&self) -> Option<&dyn KnownSize> {
        self.size.is_some().then_some(self as &dyn KnownSize)
    }
}

impl<R> KnownSize for ReaderSource<R> {
    fn known_size(&self) -> u64 {
        self.size.unwrap_or_default()
    }
}
