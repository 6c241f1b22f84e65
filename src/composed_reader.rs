use ::bytes::Bytes;
use ::bytes::BytesMut;
use ::std::io;
use ::std::io::Read;

use crate::Result;
use crate::internals::ChainElement;
use crate::internals::release_all;

///
/// The complete multipart body, returned by
/// [`Composer::detach()`](crate::Composer::detach())
/// and [`Composer::detach_with_size()`](crate::Composer::detach_with_size()).
///
/// Reading pulls from each part's source in turn,
/// so content is only read as the body is consumed.
/// It can only be read through once.
///
/// Call [`ComposedReader::close()`] when done with it (including on failure),
/// to release any files and sources the composer owned.
///
#[derive(Debug)]
pub struct ComposedReader<'a> {
    elements: Vec<ChainElement<'a>>,
    current: usize,
    is_releasing: bool,
}

impl<'a> ComposedReader<'a> {
    pub(crate) fn new(elements: Vec<ChainElement<'a>>, is_releasing: bool) -> Self {
        Self {
            elements,
            current: 0,
            is_releasing,
        }
    }

    /// Releases every owned source this body holds.
    ///
    /// If the composer was not closing owned sources when this was detached,
    /// this does nothing.
    /// All sources are attempted, and the first failure is returned.
    pub fn close(&mut self) -> Result<()> {
        if !self.is_releasing {
            return Ok(());
        }

        release_all(&mut self.elements)
    }

    /// Turns this into an iterator of byte chunks, each at most `chunk_size` long.
    pub fn into_chunks(self, chunk_size: usize) -> ComposedChunks<'a> {
        ComposedChunks {
            reader: self,
            chunk_size: chunk_size.max(1),
            is_finished: false,
        }
    }
}

impl Read for ComposedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        while let Some(element) = self.elements.get_mut(self.current) {
            let read_len = element.read(buf)?;
            if read_len > 0 {
                return Ok(read_len);
            }

            self.current += 1;
            ::tracing::trace!(position = self.current, "advancing to next multipart element");
        }

        Ok(0)
    }
}

///
/// A [`ComposedReader`] read as a sequence of [`Bytes`] chunks.
///
/// Ends after the last chunk, or after the first error.
///
#[derive(Debug)]
pub struct ComposedChunks<'a> {
    reader: ComposedReader<'a>,
    chunk_size: usize,
    is_finished: bool,
}

impl ComposedChunks<'_> {
    /// See [`ComposedReader::close()`].
    pub fn close(&mut self) -> Result<()> {
        self.reader.close()
    }
}

impl Iterator for ComposedChunks<'_> {
    type Item = io::Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished {
            return None;
        }

        let mut chunk = BytesMut::zeroed(self.chunk_size);
        match self.reader.read(&mut chunk) {
            Ok(0) => {
                self.is_finished = true;
                None
            }
            Ok(read_len) => {
                chunk.truncate(read_len);
                Some(Ok(chunk.freeze()))
            }
            Err(err) => {
                self.is_finished = true;
                Some(Err(err))
            }
        }
    }
}
