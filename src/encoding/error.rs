use std::io;

use thiserror::Error;

/// An enumeration of potential errors that appear during bencode encoding.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The value (or one of its children) has a shape with no bencode representation.
    #[error("values of type `{0}` cannot be encoded as bencode")]
    UnsupportedType(&'static str),

    /// A dictionary contained the same key more than once.
    #[error("duplicate dictionary key {}", String::from_utf8_lossy(.0))]
    DuplicateKey(Vec<u8>),

    /// The value is nested deeper than the encoder allows.
    #[error("maximum nesting depth of {max_depth} exceeded")]
    NestingTooDeep {
        /// The limit that was configured on the encoder
        max_depth: usize,
    },

    /// Text handed to [`Integer`](crate::encoding::Integer) parsing is not a canonical
    /// decimal integer.
    #[error("invalid integer literal {0:?}")]
    InvalidInteger(String),

    /// The output sink rejected a write.
    #[error(transparent)]
    Write(#[from] io::Error),

    /// Error raised by a `Serialize` implementation.
    #[cfg(feature = "serde")]
    #[error("serialization failed: {0}")]
    Custom(String),
}

/// The broad category an [`Error`] belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input contained a shape bencode cannot express (including duplicate keys).
    UnsupportedType,
    /// The sink failed.
    WriteFailure,
    /// The depth ceiling was hit.
    DepthExceeded,
    /// A big integer literal was malformed.
    InvalidInteger,
    /// A `Serialize` implementation reported its own error.
    Custom,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedType(_) | Error::DuplicateKey(_) => ErrorKind::UnsupportedType,
            Error::NestingTooDeep { .. } => ErrorKind::DepthExceeded,
            Error::InvalidInteger(_) => ErrorKind::InvalidInteger,
            Error::Write(_) => ErrorKind::WriteFailure,
            #[cfg(feature = "serde")]
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    pub(crate) fn unsupported_type(name: &'static str) -> Self {
        Error::UnsupportedType(name)
    }
}
