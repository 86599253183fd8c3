//! 3.5.4 Target: the destination terminus of a link.

use amqp_codec::primitives::Symbol;

use crate::composite_schema;
use crate::definitions::{Fields, Seconds, TerminusDurability, TerminusExpiryPolicy};

/// The destination terminus of a link. Simplified relative to [`Source`](super::Source)
/// the same way: `address` is a plain string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Target {
    /// The address of the target, or `None` for a dynamically created node.
    pub address: Option<String>,

    /// Whether the target's terminus state survives connection/session/link loss.
    pub durable: TerminusDurability,

    /// When the target terminus is discarded if no link attaches to it.
    pub expiry_policy: TerminusExpiryPolicy,

    /// Duration, in seconds, that a dynamic node's lease lasts after its links detach.
    pub timeout: Seconds,

    /// Whether the sender is requesting the receiver create a dynamic node.
    pub dynamic: bool,

    /// Properties the sender of `attach` wishes the dynamically created node to have.
    pub dynamic_node_properties: Option<Fields>,

    /// Extension capabilities the target supports.
    pub capabilities: Option<Vec<Symbol>>,
}

composite_schema! {
    struct Target, code = 0x29;
    address: Option<String> = (optional),
    durable: TerminusDurability = (default, TerminusDurability::None),
    expiry_policy: TerminusExpiryPolicy = (default, TerminusExpiryPolicy::SessionEnd),
    timeout: Seconds = (default, 0),
    dynamic: bool = (default, false),
    dynamic_node_properties: Option<Fields> = (optional),
    capabilities: Option<Vec<Symbol>> = (optional),
}
