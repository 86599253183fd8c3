//! Custom error

use std::fmt::Display;

/// Errors produced by encoding or decoding an AMQP 1.0 value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Custom error with message
    #[error("{0}")]
    Message(String),

    /// IO error
    #[error("IO {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format code
    #[error("invalid format code 0x{0:02x}")]
    InvalidFormatCode(u8),

    /// A format code was recognized but is not legal in the current context
    #[error("unexpected format code 0x{code:02x} while decoding {context}")]
    UnexpectedCode {
        /// what the decoder was trying to read
        context: &'static str,
        /// the offending byte
        code: u8,
    },

    /// A length prefix exceeds the bytes remaining in the reader
    #[error("invalid length")]
    InvalidLength,

    /// A bounded reader was asked to read past its declared limit
    #[error("bounded reader limit reached")]
    LimitReached,

    /// A payload or element count is too large for any wire encoding
    #[error("value too long to encode")]
    TooLong,

    /// Found invalid UTF-8 where a string was expected
    #[error("invalid UTF-8 encoding")]
    InvalidUtf8Encoding,

    /// Found a non-ASCII byte where a symbol was expected
    #[error("invalid symbol encoding, symbols must be ASCII")]
    InvalidSymbolEncoding,

    /// A described composite did not start with the expected descriptor
    #[error("descriptor mismatch: expected {expected}, found {found}")]
    DescriptorMismatch {
        /// the descriptor the caller's schema expects
        expected: String,
        /// the descriptor actually found on the wire
        found: String,
    },

    /// A composite carried more fields than the schema declares
    #[error("composite carries {found} fields, schema only declares {declared}")]
    TooManyFields {
        /// number of fields declared on the wire
        found: usize,
        /// number of fields the schema knows about
        declared: usize,
    },

    /// A required composite field was missing or null
    #[error("{0} is required")]
    RequiredFieldMissing(&'static str),

    /// The decoder or encoder has no implementation for the requested type
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Failed to unmarshal a particular positional field of a composite
    #[error("unmarshaling field {index}: {source}")]
    Field {
        /// zero-based field index
        index: usize,
        /// underlying error
        #[source]
        source: Box<Error>,
    },

    /// The destination type passed to `unmarshal`/`marshal` has no matching codec branch
    #[error("unable to {0} into/from the given destination type")]
    UnsupportedSink(&'static str),
}

impl Error {
    pub(crate) fn custom<T: Display>(msg: T) -> Self {
        Self::Message(msg.to_string())
    }

    /// Wrap `self` as having occurred while unmarshaling field `index` of a composite.
    pub fn with_field_index(self, index: usize) -> Self {
        match self {
            // Avoid doubly wrapping: keep the innermost field index, which is the
            // one that actually identifies the offending byte range.
            Error::Field { .. } => self,
            other => Error::Field {
                index,
                source: Box::new(other),
            },
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Error::InvalidUtf8Encoding
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(_: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8Encoding
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
