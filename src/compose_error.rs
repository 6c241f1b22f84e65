use ::std::io;
use ::std::path::PathBuf;
use ::thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T, E = ComposeError> = ::std::result::Result<T, E>;

/// Everything that can go wrong while composing a multipart message.
///
/// Validation failures (`InvalidBoundary`, `InvalidState`, `OwnershipDisabled`)
/// and `SizeUnavailable` leave the [`Composer`](crate::Composer) untouched.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("multipart: invalid boundary '{boundary}', {reason}")]
    InvalidBoundary {
        boundary: String,
        reason: BoundaryViolation,
    },

    #[error("multipart: {operation} called after parts were added")]
    InvalidState { operation: &'static str },

    #[error("multipart: adding file '{}' by path is forbidden while owned sources are not closed", .path.display())]
    OwnershipDisabled { path: PathBuf },

    #[error("multipart: failed to open '{}'", .path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("multipart: source at position {position} does not report its size")]
    SizeUnavailable { position: usize },

    #[error("multipart: failed to release an owned source")]
    CloseFailure {
        #[source]
        source: io::Error,
    },

    #[error("multipart: content type cannot be used as a header value")]
    InvalidHeaderValue(#[from] ::http::header::InvalidHeaderValue),
}

/// Why a boundary was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundaryViolation {
    #[error("it is empty")]
    Empty,

    #[error("it is {len} bytes long, the limit is 70")]
    TooLong { len: usize },

    #[error("character {character:?} at {index} is not allowed")]
    IllegalCharacter { character: char, index: usize },
}
