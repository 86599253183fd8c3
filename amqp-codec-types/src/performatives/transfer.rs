//! 2.7.5 Transfer: transfer a message.

use crate::composite_schema;
use crate::definitions::{DeliveryNumber, DeliveryTag, Handle, MessageFormat, ReceiverSettleMode};
use crate::delivery_state::DeliveryState;

/// Transfers a message. The work horse frame that carries message payload, one frame
/// per transfer (a large message spans multiple transfer frames on the same link).
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    /// The link this transfer flows on.
    pub handle: Handle,

    /// The identifier of the delivery. Required on the first transfer of a
    /// multi-transfer delivery, may be omitted on continuations.
    pub delivery_id: Option<DeliveryNumber>,

    /// The application-assigned tag identifying this delivery. Required on the first
    /// transfer of a multi-transfer delivery, may be omitted on continuations.
    pub delivery_tag: Option<DeliveryTag>,

    /// Indicates the format of the message's encoded payload. Required on the first
    /// transfer of a multi-transfer delivery, may be omitted on continuations.
    pub message_format: Option<MessageFormat>,

    /// Whether this delivery is already settled at the sender. Absent means `false`.
    pub settled: Option<bool>,

    /// Whether this is not the final transfer of a multi-transfer delivery. Defaults
    /// to `false`.
    pub more: bool,

    /// The receiver settlement policy desired for this delivery, overriding the
    /// link-negotiated value for this one delivery.
    pub rcv_settle_mode: Option<ReceiverSettleMode>,

    /// The sender's state for this delivery at the time of sending.
    pub state: Option<DeliveryState>,

    /// Whether this transfer is resuming a previously suspended delivery.
    pub resume: bool,

    /// Whether the delivery is aborted; if set, `more` is ignored and any data sent
    /// so far for this delivery MUST be discarded.
    pub aborted: bool,

    /// Whether the sender permits this transfer to be batched with others for
    /// settlement purposes.
    pub batchable: bool,
}

impl Transfer {
    /// Creates a `Transfer` performative for the given link handle, with every other
    /// field at its default or absent.
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            delivery_id: None,
            delivery_tag: None,
            message_format: None,
            settled: None,
            more: false,
            rcv_settle_mode: None,
            state: None,
            resume: false,
            aborted: false,
            batchable: false,
        }
    }
}

composite_schema! {
    struct Transfer, code = 0x14;
    handle: Handle = (required),
    delivery_id: Option<DeliveryNumber> = (optional),
    delivery_tag: Option<DeliveryTag> = (optional),
    message_format: Option<MessageFormat> = (optional),
    settled: Option<bool> = (optional),
    more: bool = (default, false),
    rcv_settle_mode: Option<ReceiverSettleMode> = (optional),
    state: Option<DeliveryState> = (optional),
    resume: bool = (default, false),
    aborted: bool = (default, false),
    batchable: bool = (default, false),
}
