//! 2.7.2 Begin: begin a session on a channel.

use amqp_codec::primitives::Symbol;

use crate::composite_schema;
use crate::definitions::{Fields, Handle, TransferNumber};

/// Begins a session on a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Begin {
    /// If set, this session is being created to act as the reverse half of a session
    /// already begun on the opposite end by the peer's `begin` with this channel as its
    /// own channel number.
    pub remote_channel: Option<u16>,

    /// The transfer-id to assign to the first transfer sent on this session.
    pub next_outgoing_id: TransferNumber,

    /// The initial incoming transfer window, in number of transfer frames.
    pub incoming_window: u32,

    /// The initial outgoing transfer window.
    pub outgoing_window: u32,

    /// The maximum handle value this endpoint will accept for a link on this session.
    /// Defaults to `u32::MAX` when absent.
    pub handle_max: Handle,

    /// Extension capabilities the sender supports.
    pub offered_capabilities: Option<Vec<Symbol>>,

    /// Extension capabilities the sender can use.
    pub desired_capabilities: Option<Vec<Symbol>>,

    /// Session properties.
    pub properties: Option<Fields>,
}

impl Begin {
    /// Creates a `Begin` performative with the given transfer windows and every other
    /// field at its default or absent.
    pub fn new(next_outgoing_id: TransferNumber, incoming_window: u32, outgoing_window: u32) -> Self {
        Self {
            remote_channel: None,
            next_outgoing_id,
            incoming_window,
            outgoing_window,
            handle_max: u32::MAX,
            offered_capabilities: None,
            desired_capabilities: None,
            properties: None,
        }
    }
}

composite_schema! {
    struct Begin, code = 0x11;
    remote_channel: Option<u16> = (optional),
    next_outgoing_id: u32 = (required),
    incoming_window: u32 = (required),
    outgoing_window: u32 = (required),
    handle_max: u32 = (default, u32::MAX),
    offered_capabilities: Option<Vec<Symbol>> = (optional),
    desired_capabilities: Option<Vec<Symbol>> = (optional),
    properties: Option<Fields> = (optional),
}
