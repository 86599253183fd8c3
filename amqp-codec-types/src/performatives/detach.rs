//! 2.7.7 Detach: detach a link from a session.

use crate::composite_schema;
use crate::definitions::{AmqpError, Handle};

/// Detaches a link endpoint from its session, optionally carrying the error that
/// caused the detach.
#[derive(Debug, Clone, PartialEq)]
pub struct Detach {
    /// The handle of the link being detached.
    pub handle: Handle,

    /// Whether this is the final detach, closing the link entirely rather than merely
    /// suspending it.
    pub closed: bool,

    /// The error that caused the detach, if any.
    pub error: Option<AmqpError>,
}

impl Detach {
    /// Creates a `Detach` for the given handle, with `closed` false and no error.
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            closed: false,
            error: None,
        }
    }
}

composite_schema! {
    struct Detach, code = 0x16;
    handle: Handle = (required),
    closed: bool = (default, false),
    error: Option<AmqpError> = (optional),
}

#[cfg(test)]
mod tests {
    use super::*;
    use amqp_codec::dispatch::{marshal, unmarshal};
    use amqp_codec::read::SliceReader;

    #[test]
    fn detach_round_trips_with_defaults_applied() {
        let detach = Detach::new(2);
        let mut buf = Vec::new();
        marshal(&mut buf, &detach).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: Detach = unmarshal(&mut r).unwrap();
        assert!(!decoded.closed);
        assert_eq!(decoded.error, None);
    }

    #[test]
    fn closed_detach_with_an_error_round_trips() {
        let detach = Detach {
            handle: 2,
            closed: true,
            error: Some(AmqpError::new("amqp:link:detach-forced")),
        };
        let mut buf = Vec::new();
        marshal(&mut buf, &detach).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: Detach = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, detach);
    }
}
