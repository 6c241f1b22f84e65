//!
//! Sources supplying the content of each part.
//!
//! Any [`ContentSource`] can be added to a [`Composer`](crate::Composer).
//! Slices, cursors, and borrowed files work directly.
//! [`ReaderSource`] adapts other readers, and [`OwnedReader`] / [`FileSource`]
//! hand ownership of a reader over to the composer.
//!

mod content_source;
pub use self::content_source::*;

mod reader_source;
pub use self::reader_source::*;

mod owned_reader;
pub use self::owned_reader::*;
