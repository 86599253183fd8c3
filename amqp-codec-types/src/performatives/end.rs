//! 2.7.8 End: end a session.

use crate::composite_schema;
use crate::definitions::AmqpError;

/// Ends a session, optionally carrying the error that caused it to end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct End {
    /// The error that caused the session to end, if any.
    pub error: Option<AmqpError>,
}

impl End {
    /// Creates an `End` performative with no error, a normal close.
    pub fn new(error: Option<AmqpError>) -> Self {
        Self { error }
    }
}

composite_schema! {
    struct End, code = 0x17;
    error: Option<AmqpError> = (optional),
}

#[cfg(test)]
mod tests {
    use super::*;
    use amqp_codec::dispatch::marshal;
    use amqp_codec::format_code::EncodingCodes as Code;

    #[test]
    fn empty_end_matches_the_documented_wire_bytes() {
        let end = End::default();
        let mut buf = Vec::new();
        marshal(&mut buf, &end).unwrap();
        assert_eq!(buf, vec![0x0, Code::SmallUlong as u8, 0x17, Code::List0 as u8]);
    }

    #[test]
    fn end_with_an_error_round_trips() {
        use amqp_codec::dispatch::unmarshal;
        use amqp_codec::read::SliceReader;

        let end = End::new(Some(AmqpError::new("amqp:internal-error")));
        let mut buf = Vec::new();
        marshal(&mut buf, &end).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: End = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, end);
    }
}
