use ::bytes::Bytes;
use ::std::fmt::Debug;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;
use ::std::io;
use ::std::io::Cursor;
use ::std::io::Read;

use crate::ComposeError;
use crate::ContentSource;
use crate::Result;

/// One piece of the message body, in wire order.
pub enum ChainElement<'a> {
    /// Boundary lines and headers written by the composer itself.
    Framing(Cursor<Bytes>),

    /// Content supplied by the caller.
    Content {
        source: Box<dyn ContentSource + 'a>,
        is_owned: bool,
    },
}

impl ChainElement<'_> {
    pub fn known_size(&self) -> Option<u64> {
        match self {
            Self::Framing(framing) => Some(framing.get_ref().len() as u64),
            Self::Content { source, .. } => source
                .as_known_size()
                .map(|known_size| known_size.known_size()),
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Content { is_owned: true, .. })
    }

    /// Releases this element if it is owned, and able to be released.
    pub fn release_if_owned(&mut self) -> io::Result<()> {
        match self {
            Self::Content {
                source,
                is_owned: true,
            } => match source.as_release() {
                Some(releasable) => releasable.release(),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

impl Read for ChainElement<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Framing(framing) => framing.read(buf),
            Self::Content { source, .. } => source.read(buf),
        }
    }
}

impl Debug for ChainElement<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Framing(framing) => f
                .debug_tuple("Framing")
                .field(&framing.get_ref().len())
                .finish(),
            Self::Content { is_owned, .. } => f
                .debug_struct("Content")
                .field("is_owned", is_owned)
                .finish_non_exhaustive(),
        }
    }
}

///
/// The ordered framing chunks and content sources making up a message body.
///
/// Elements are never reordered.
///
#[derive(Debug, Default)]
pub struct SourceChain<'a> {
    elements: Vec<ChainElement<'a>>,
}

impl<'a> SourceChain<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn push_framing(&mut self, framing: Bytes) {
        self.elements.push(ChainElement::Framing(Cursor::new(framing)));
    }

    pub fn push_content(&mut self, source: Box<dyn ContentSource + 'a>, is_owned: bool) {
        self.elements
            .push(ChainElement::Content { source, is_owned });
    }

    /// Sums the size of every element, plus `trailing` bytes still to be appended.
    ///
    /// Fails on the first element unable to report a size.
    pub fn total_size(&self, trailing: u64) -> Result<u64> {
        self.elements
            .iter()
            .enumerate()
            .try_fold(trailing, |total, (position, element)| {
                element
                    .known_size()
                    .map(|size| total + size)
                    .ok_or(ComposeError::SizeUnavailable { position })
            })
    }

    pub fn owned_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| element.is_owned())
            .count()
    }

    /// Releases every owned element, see [`release_all`].
    pub fn release_owned(&mut self) -> Result<()> {
        release_all(&mut self.elements)
    }

    /// Moves all elements out, leaving the chain empty.
    pub fn take(&mut self) -> Vec<ChainElement<'a>> {
        ::std::mem::take(&mut self.elements)
    }
}

/// Attempts to release every owned element.
///
/// All releases are tried. The first failure is returned,
/// and any later failures are only logged.
pub fn release_all(elements: &mut [ChainElement<'_>]) -> Result<()> {
    let mut first_error = None;

    for (position, element) in elements.iter_mut().enumerate() {
        if let Err(err) = element.release_if_owned() {
            if first_error.is_none() {
                first_error = Some(err);
            } else {
                ::tracing::warn!(position, error = %err, "ignoring failure to release source");
            }
        }
    }

    match first_error {
        Some(source) => Err(ComposeError::CloseFailure { source }),
        None => Ok(()),
    }
}
