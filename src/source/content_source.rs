use ::std::fs::File;
use ::std::io;
use ::std::io::Cursor;
use ::std::io::Empty;
use ::std::io::Read;

///
/// Anything that can supply the content of a part.
///
/// Reading is the only required capability.
/// A source can also report its total size by returning itself from
/// [`ContentSource::as_known_size()`], and can be released (closed)
/// by returning itself from [`ContentSource::as_release()`].
///
/// The [`Composer`](crate::Composer) only ever probes these,
/// and never assumes them.
///
pub trait ContentSource: Read + Send {
    fn as_known_size(&self) -> Option<&dyn KnownSize> {
        None
    }

    fn as_release(&mut self) -> Option<&mut dyn Release> {
        None
    }
}

/// A source that knows how many bytes it will produce.
pub trait KnownSize {
    fn known_size(&self) -> u64;
}

/// A source holding a resource that must be freed once it is no longer needed.
pub trait Release {
    /// Frees the underlying resource.
    ///
    /// Releasing an already released source must succeed.
    fn release(&mut self) -> io::Result<()>;
}

impl ContentSource for &[u8] {
    fn as_known_size(&self) -> Option<&dyn KnownSize> {
        Some(self)
    }
}

impl KnownSize for &[u8] {
    fn known_size(&self) -> u64 {
        self.len() as u64
    }
}

impl<T> ContentSource for Cursor<T>
where
    T: AsRef<[u8]> + Send,
{
    fn as_known_size(&self) -> Option<&dyn KnownSize> {
        Some(self)
    }
}

impl<T> KnownSize for Cursor<T>
where
    T: AsRef<[u8]>,
{
    /// Only the bytes not yet read are counted.
    fn known_size(&self) -> u64 {
        let len = self.get_ref().as_ref().len() as u64;
        len.saturating_sub(self.position())
    }
}

impl ContentSource for Empty {
    fn as_known_size(&self) -> Option<&dyn KnownSize> {
        Some(self)
    }
}

impl KnownSize for Empty {
    fn known_size(&self) -> u64 {
        0
    }
}

/// A borrowed file stays the caller's responsibility; it is never released.
impl ContentSource for &File {}
