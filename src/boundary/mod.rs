//!
//! Boundary generation, validation, and rendering into a `Content-Type`.
//!

mod boundary_generator;
pub use self::boundary_generator::*;

mod validate_boundary;
pub use self::validate_boundary::*;

mod format_content_type;
pub use self::format_content_type::*;
