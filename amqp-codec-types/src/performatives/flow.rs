//! 2.7.4 Flow: update link or session flow-control state.

use crate::composite_schema;
use crate::definitions::{Fields, Handle, SequenceNo, TransferNumber};

/// Updates link or session flow-control state.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    /// The expected transfer-id of the next incoming transfer frame. Set once the begin
    /// for this session has been seen, absent otherwise.
    pub next_incoming_id: Option<TransferNumber>,

    /// The maximum number of incoming transfer frames the endpoint can currently receive.
    pub incoming_window: u32,

    /// The transfer-id that will be assigned to the next outgoing transfer frame.
    pub next_outgoing_id: TransferNumber,

    /// The maximum number of outgoing transfer frames the endpoint could send, absent
    /// restrictions imposed by the peer's incoming-window.
    pub outgoing_window: u32,

    /// If set, the flow frame carries link-specific state for this handle; if absent, it
    /// carries only session-endpoint state.
    pub handle: Option<Handle>,

    /// The current delivery-count of the link endpoint. Unset unless `handle` is set.
    pub delivery_count: Option<SequenceNo>,

    /// The current maximum number of messages the receiver endpoint can handle. Unset
    /// unless `handle` is set.
    pub link_credit: Option<u32>,

    /// The number of messages awaiting credit at the sender endpoint. Unset unless
    /// `handle` is set.
    pub available: Option<u32>,

    /// The sender's (or, in the other direction, the receiver's desired) drain mode.
    pub drain: bool,

    /// If true, the receiver should send its state at the earliest opportunity.
    pub echo: bool,

    /// A registry of commonly defined link state properties.
    pub properties: Option<Fields>,
}

impl Flow {
    /// Creates a `Flow` performative with the given windows and every other field at its
    /// default or absent.
    pub fn new(next_outgoing_id: TransferNumber, incoming_window: u32, outgoing_window: u32) -> Self {
        Self {
            next_incoming_id: None,
            incoming_window,
            next_outgoing_id,
            outgoing_window,
            handle: None,
            delivery_count: None,
            link_credit: None,
            available: None,
            drain: false,
            echo: false,
            properties: None,
        }
    }
}

composite_schema! {
    struct Flow, code = 0x13;
    next_incoming_id: Option<TransferNumber> = (optional),
    incoming_window: u32 = (required),
    next_outgoing_id: TransferNumber = (required),
    outgoing_window: u32 = (required),
    handle: Option<Handle> = (optional),
    delivery_count: Option<SequenceNo> = (optional),
    link_credit: Option<u32> = (optional),
    available: Option<u32> = (optional),
    drain: bool = (default, false),
    echo: bool = (default, false),
    properties: Option<Fields> = (optional),
}
