//! Errors returned by name lookups.

/// Broad category of an [`Error`], for callers that map errors onto status codes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The string is not the canonical name of any primitive type.
    #[error("Invalid element type string: \"{0}\".")]
    InvalidArgument(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type for name lookups.
pub type Result<T> = std::result::Result<T, Error>;
