//! 2.7.3 Attach: attach a link to a session.

use amqp_codec::primitives::Symbol;
use indexmap::IndexMap;

use crate::composite_schema;
use crate::definitions::{DeliveryTag, Fields, Handle, ReceiverSettleMode, Role, SenderSettleMode, SequenceNo};
use crate::delivery_state::DeliveryState;
use crate::messaging::{Source, Target};

/// Attaches a link to a session. The first frame sent on a newly allocated link.
#[derive(Debug, Clone, PartialEq)]
pub struct Attach {
    /// The link's name; uniquely identifies the link among all links between the two
    /// participating containers.
    pub name: String,

    /// The handle this end assigns to the link, unique among the session's open links.
    pub handle: Handle,

    /// Whether this end of the link is the sender or the receiver.
    pub role: Role,

    /// The sender's settlement policy. The receiver's desired value when set at the
    /// receiver; the sender's actual value when set at the sender.
    pub snd_settle_mode: SenderSettleMode,

    /// The receiver's settlement policy, with the symmetric desired/actual meaning.
    pub rcv_settle_mode: ReceiverSettleMode,

    /// The source of messages for this link, absent if the link has no source.
    pub source: Option<Source>,

    /// The target of messages for this link, absent if the link has no target.
    pub target: Option<Target>,

    /// Unsettled delivery state this end of the link knows about, keyed by delivery
    /// tag, exchanged when resuming a link.
    pub unsettled: Option<IndexMap<DeliveryTag, DeliveryState>>,

    /// Whether `unsettled` lists every unsettled delivery, or only as many as fit.
    pub incomplete_unsettled: bool,

    /// The sender's initial value for `delivery-count`. Required when `role` is
    /// sender; ignored when `role` is receiver.
    pub initial_delivery_count: Option<SequenceNo>,

    /// The largest message, in bytes, this link endpoint is willing to accept, or
    /// `None` for no limit.
    pub max_message_size: Option<u64>,

    /// Extension capabilities the sender supports.
    pub offered_capabilities: Option<Vec<Symbol>>,

    /// Extension capabilities the sender can use.
    pub desired_capabilities: Option<Vec<Symbol>>,

    /// Link properties.
    pub properties: Option<Fields>,
}

impl Attach {
    /// Creates an `Attach` performative with the given name, handle, and role, and
    /// every other field at its default or absent.
    pub fn new(name: impl Into<String>, handle: Handle, role: Role) -> Self {
        Self {
            name: name.into(),
            handle,
            role,
            snd_settle_mode: SenderSettleMode::Mixed,
            rcv_settle_mode: ReceiverSettleMode::First,
            source: None,
            target: None,
            unsettled: None,
            incomplete_unsettled: false,
            initial_delivery_count: None,
            max_message_size: None,
            offered_capabilities: None,
            desired_capabilities: None,
            properties: None,
        }
    }
}

composite_schema! {
    struct Attach, code = 0x12;
    name: String = (required),
    handle: Handle = (required),
    role: Role = (required),
    snd_settle_mode: SenderSettleMode = (default, SenderSettleMode::Mixed),
    rcv_settle_mode: ReceiverSettleMode = (default, ReceiverSettleMode::First),
    source: Option<Source> = (optional),
    target: Option<Target> = (optional),
    unsettled: Option<IndexMap<DeliveryTag, DeliveryState>> = (optional),
    incomplete_unsettled: bool = (default, false),
    initial_delivery_count: Option<SequenceNo> = (optional),
    max_message_size: Option<u64> = (optional),
    offered_capabilities: Option<Vec<Symbol>> = (optional),
    desired_capabilities: Option<Vec<Symbol>> = (optional),
    properties: Option<Fields> = (optional),
}

#[cfg(test)]
mod tests {
    use super::*;
    use amqp_codec::dispatch::{marshal, unmarshal};
    use amqp_codec::read::SliceReader;

    #[test]
    fn attach_round_trips_with_defaults_applied() {
        let attach = Attach::new("link-1", 0, Role::Sender);
        let mut buf = Vec::new();
        marshal(&mut buf, &attach).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: Attach = unmarshal(&mut r).unwrap();
        assert_eq!(decoded.snd_settle_mode, SenderSettleMode::Mixed);
        assert_eq!(decoded.rcv_settle_mode, ReceiverSettleMode::First);
        assert!(!decoded.incomplete_unsettled);
        assert_eq!(decoded.source, None);
    }

    #[test]
    fn attach_with_a_source_and_unsettled_map_round_trips() {
        use crate::delivery_state::Accepted;

        let mut attach = Attach::new("link-1", 3, Role::Receiver);
        attach.source = Some(Source {
            address: Some("queue-1".to_string()),
            ..Default::default()
        });
        attach.initial_delivery_count = Some(0);
        let mut unsettled = IndexMap::new();
        unsettled.insert(vec![1u8, 2, 3], DeliveryState::Accepted(Accepted {}));
        attach.unsettled = Some(unsettled);

        let mut buf = Vec::new();
        marshal(&mut buf, &attach).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: Attach = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, attach);
    }
}
