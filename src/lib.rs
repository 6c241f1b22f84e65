//!
//! Multipart Composer builds `multipart/form-data` request bodies
//! without reading field or file contents into memory first:
//!
//!  * You create a [`Composer`],
//!  * add fields and files to it, which are only recorded, not read,
//!  * then detach a [`ComposedReader`], which reads each part in turn as it is consumed.
//!
//! The body, and its content type, can then be handed to any HTTP client.
//!
//! ## Getting Started
//!
//! ```rust
//! # fn test() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::multipart_composer::Composer;
//!
//! let mut composer = Composer::new();
//! composer.add_field("comment", "a comment");
//! composer.add_file("file", "Cargo.toml")?;
//!
//! let content_type = composer.form_data_content_type();
//! let (mut body, content_length) = composer.detach_with_size()?;
//!
//! // ... send `body` with `content_type` and `content_length` ...
//!
//! body.close()?;
//! #
//! # Ok(())
//! # }
//! ```
//!
//! ## Ownership
//!
//! Files added by path, or as an open [`File`](::std::fs::File), are owned by the composer.
//! They are released when the composer is closed, or by the body once detached.
//! Other sources are owned when they are able to be released, see [`ContentSource`].
//!
//! If a composer is abandoned before its body is detached,
//! call [`Composer::close()`] to release what it owns.
//!
//! ## Boundaries
//!
//! Each composer starts with a random 60 character boundary.
//! This can be replaced with [`Composer::set_boundary()`], or a seeded
//! [`BoundaryGenerator`] can be given for reproducible boundaries.
//!

pub(crate) mod internals;

pub mod boundary;
pub use self::boundary::BoundaryGenerator;

pub mod part_header;
pub use self::part_header::PartHeader;

pub mod source;
pub use self::source::*;

mod compose_error;
pub use self::compose_error::*;

mod composed_reader;
pub use self::composed_reader::*;

mod composer_config_builder;
pub use self::composer_config_builder::*;

mod composer_config;
pub use self::composer_config::*;

mod composer;
pub use self::composer::*;

pub use ::bytes;
pub use ::http;
