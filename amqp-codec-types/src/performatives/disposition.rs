//! 2.7.6 Disposition: inform a peer of delivery state changes.

use crate::composite_schema;
use crate::definitions::{DeliveryNumber, Role};
use crate::delivery_state::DeliveryState;

/// Informs the remote peer of delivery state changes for one or more deliveries,
/// identified by a contiguous range of delivery ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Disposition {
    /// Whether the sender of this frame is acting as sender or receiver of the
    /// deliveries being updated.
    pub role: Role,

    /// The lower bound of the delivery-id range this disposition covers.
    pub first: DeliveryNumber,

    /// The upper bound of the range, inclusive; absent means the range is just `first`.
    pub last: Option<DeliveryNumber>,

    /// Whether the delivery range is settled by the issuer of this frame.
    pub settled: bool,

    /// The state of every delivery in the range, as seen by the issuer of this frame.
    pub state: Option<DeliveryState>,

    /// Whether the issuer permits this disposition to be batched with others.
    pub batchable: bool,
}

impl Disposition {
    /// Creates a `Disposition` for the given role and delivery range, with every other
    /// field at its default or absent.
    pub fn new(role: Role, first: DeliveryNumber) -> Self {
        Self {
            role,
            first,
            last: None,
            settled: false,
            state: None,
            batchable: false,
        }
    }
}

composite_schema! {
    struct Disposition, code = 0x15;
    role: Role = (required),
    first: DeliveryNumber = (required),
    last: Option<DeliveryNumber> = (optional),
    settled: bool = (default, false),
    state: Option<DeliveryState> = (optional),
    batchable: bool = (default, false),
}

#[cfg(test)]
mod tests {
    use super::*;
    use amqp_codec::dispatch::{marshal, unmarshal};
    use amqp_codec::format_code::EncodingCodes as Code;
    use amqp_codec::read::SliceReader;
    use crate::delivery_state::Accepted;

    #[test]
    fn disposition_round_trips_with_defaults_applied() {
        let disposition = Disposition::new(Role::Sender, 0);
        let mut buf = Vec::new();
        marshal(&mut buf, &disposition).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: Disposition = unmarshal(&mut r).unwrap();
        assert!(!decoded.settled);
        assert!(!decoded.batchable);
        assert_eq!(decoded.last, None);
    }

    #[test]
    fn settled_accepted_disposition_matches_the_documented_wire_bytes() {
        let disposition = Disposition {
            role: Role::Receiver,
            first: 0,
            last: None,
            settled: true,
            state: Some(DeliveryState::Accepted(Accepted {})),
            batchable: false,
        };
        let mut buf = Vec::new();
        marshal(&mut buf, &disposition).unwrap();

        // `batchable` is a `default` field, which always marshals its current value
        // rather than vanishing when it equals the default, so all six fields are
        // present on the wire here even though `batchable` is `false`.
        assert_eq!(
            buf,
            vec![
                0x0,
                Code::SmallUlong as u8,
                0x15,
                Code::List8 as u8,
                0xa,
                0x6,
                Code::BooleanTrue as u8,
                Code::Uint0 as u8,
                Code::Null as u8,
                Code::BooleanTrue as u8,
                0x0,
                Code::SmallUlong as u8,
                0x24,
                Code::List0 as u8,
                Code::BooleanFalse as u8,
            ]
        );

        let mut r = SliceReader::new(&buf);
        let decoded: Disposition = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, disposition);
    }
}
