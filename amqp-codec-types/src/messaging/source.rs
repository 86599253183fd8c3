//! 3.5.3 Source: the originating terminus of a link.

use amqp_codec::primitives::Symbol;
use amqp_codec::value::MapSymbolAny;

use crate::composite_schema;
use crate::definitions::{Fields, Seconds, TerminusDurability, TerminusExpiryPolicy};
use crate::delivery_state::Outcome;

/// The originating terminus of a link. Simplified relative to the full AMQP 1.0
/// `source` type: `address` is a plain string rather than the `message-id`/`string`
/// union the protocol permits (this crate does not model UUID-valued addresses), and
/// `filter` is a symbol-keyed value map rather than a dedicated filter-set type, since
/// no filter descriptor is otherwise implemented here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    /// The address of the source, or `None` for a dynamically created node.
    pub address: Option<String>,

    /// Whether the source's terminus state survives connection/session/link loss.
    pub durable: TerminusDurability,

    /// When the source terminus is discarded if no link attaches to it.
    pub expiry_policy: TerminusExpiryPolicy,

    /// Duration, in seconds, that a dynamic node's lease lasts after its links detach.
    pub timeout: Seconds,

    /// Whether the receiver is requesting the sender create a dynamic node.
    pub dynamic: bool,

    /// Properties the sender of `attach` wishes the dynamically created node to have.
    pub dynamic_node_properties: Option<Fields>,

    /// Requests that a receiving link endpoint distribute deliveries either by copying
    /// or by moving.
    pub distribution_mode: Option<Symbol>,

    /// Filters restricting which messages flow from this source.
    pub filter: Option<MapSymbolAny>,

    /// The outcome to assume for a delivery if none is explicitly settled.
    pub default_outcome: Option<Outcome>,

    /// The outcomes this source can signal for a delivery.
    pub outcomes: Option<Vec<Symbol>>,

    /// Extension capabilities the source supports.
    pub capabilities: Option<Vec<Symbol>>,
}

composite_schema! {
    struct Source, code = 0x28;
    address: Option<String> = (optional),
    durable: TerminusDurability = (default, TerminusDurability::None),
    expiry_policy: TerminusExpiryPolicy = (default, TerminusExpiryPolicy::SessionEnd),
    timeout: Seconds = (default, 0),
    dynamic: bool = (default, false),
    dynamic_node_properties: Option<Fields> = (optional),
    distribution_mode: Option<Symbol> = (optional),
    filter: Option<MapSymbolAny> = (optional),
    default_outcome: Option<Outcome> = (optional),
    outcomes: Option<Vec<Symbol>> = (optional),
    capabilities: Option<Vec<Symbol>> = (optional),
}
