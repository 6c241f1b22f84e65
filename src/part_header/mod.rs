//!
//! Building the header block written at the start of each part.
//!

mod part_header;
pub use self::part_header::*;

mod escape_quotes;
pub use self::escape_quotes::*;

mod canonical_header_name;
pub(crate) use self::canonical_header_name::*;

mod guess_content_type;
pub use self::guess_content_type::*;
