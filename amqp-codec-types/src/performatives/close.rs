//! 2.7.9 Close: close a connection.

use crate::composite_schema;
use crate::definitions::AmqpError;

/// Closes a connection, optionally carrying the error that caused it to close.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Close {
    /// The error that caused the connection to close, if any.
    pub error: Option<AmqpError>,
}

impl Close {
    /// Creates a `Close` performative with the given error, or no error for a normal
    /// close.
    pub fn new(error: Option<AmqpError>) -> Self {
        Self { error }
    }
}

composite_schema! {
    struct Close, code = 0x18;
    error: Option<AmqpError> = (optional),
}
