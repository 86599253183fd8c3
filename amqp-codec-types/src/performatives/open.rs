//! 2.7.1 Open: negotiate connection parameters.

use amqp_codec::primitives::Symbol;

use crate::composite_schema;
use crate::definitions::{Fields, IetfLanguageTag, Milliseconds};

/// Negotiates connection parameters. The first frame sent on a connection in either
/// direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Open {
    /// The container id of the sending peer. Uniquely identifies this container within
    /// its administrative domain.
    pub container_id: String,

    /// The name of the host the sending peer connected to, as used in DNS/TLS SNI.
    pub hostname: Option<String>,

    /// The largest frame size the sending peer is able to accept on this connection.
    /// Defaults to `u32::MAX` (no specific limit) when absent.
    pub max_frame_size: u32,

    /// The highest channel number that can be used on the connection. Defaults to
    /// `u16::MAX` when absent.
    pub channel_max: u16,

    /// The idle timeout, in milliseconds, after which a peer may consider the
    /// connection dead if no frame has been received.
    pub idle_time_out: Option<Milliseconds>,

    /// Locales available for outgoing text.
    pub outgoing_locales: Option<Vec<IetfLanguageTag>>,

    /// The locales the sending peer can understand for incoming text.
    pub incoming_locales: Option<Vec<IetfLanguageTag>>,

    /// Extension capabilities the sender supports.
    pub offered_capabilities: Option<Vec<Symbol>>,

    /// Extension capabilities the sender can use, provided the receiver supports them.
    pub desired_capabilities: Option<Vec<Symbol>>,

    /// Connection properties.
    pub properties: Option<Fields>,
}

impl Open {
    /// Creates an `Open` performative with the given container id and every optional
    /// field absent.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            hostname: None,
            max_frame_size: u32::MAX,
            channel_max: u16::MAX,
            idle_time_out: None,
            outgoing_locales: None,
            incoming_locales: None,
            offered_capabilities: None,
            desired_capabilities: None,
            properties: None,
        }
    }
}

composite_schema! {
    struct Open, code = 0x10;
    container_id: String = (required),
    hostname: Option<String> = (optional),
    max_frame_size: u32 = (default, u32::MAX),
    channel_max: u16 = (default, u16::MAX),
    idle_time_out: Option<Milliseconds> = (optional),
    outgoing_locales: Option<Vec<IetfLanguageTag>> = (optional),
    incoming_locales: Option<Vec<IetfLanguageTag>> = (optional),
    offered_capabilities: Option<Vec<Symbol>> = (optional),
    desired_capabilities: Option<Vec<Symbol>> = (optional),
    properties: Option<Fields> = (optional),
}
