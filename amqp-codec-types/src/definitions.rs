//! Part 2.8 Definitions: the small scalar types shared across performatives and
//! message sections, and the AMQP error record.
//!
//! Grounded on `fe2o3-amqp-types::definitions`: the type aliases for fields whose wire
//! representation is just a renamed primitive (`Handle`, `Seconds`, `DeliveryTag`, ...),
//! and the restricted enums whose wire representation is a single scalar rather than a
//! composite (`Role`, `SenderSettleMode`, `ReceiverSettleMode`, `TerminusDurability`,
//! `TerminusExpiryPolicy`). `ConnectionError`/`SessionError`/`LinkError`'s per-domain
//! condition symbols are out of scope for this expansion; `ErrorCondition` carries the
//! condition as a plain `Symbol`, which is wire-compatible with every one of the
//! teacher's condition enums (they all bottom out in a symbol on the wire).

use amqp_codec::dispatch::{Marshal, Unmarshal};
use amqp_codec::primitives::Symbol;
use amqp_codec::read::Read;
use amqp_codec::value::{MapSymbolAny, Value};
use amqp_codec::write::Write;
use amqp_codec::{Error, Result};

use crate::composite_schema;

/// 2.8.4 Handle: the local alias a session assigns to a link endpoint.
pub type Handle = u32;

/// 2.8.5 Seconds.
pub type Seconds = u32;

/// 2.8.6 Milliseconds.
pub type Milliseconds = u32;

/// 2.8.7 Delivery Tag: up to 32 octets of binary data.
pub type DeliveryTag = Vec<u8>;

/// 2.8.8 Delivery Number.
pub type DeliveryNumber = u32;

/// 2.8.9 Transfer Number.
pub type TransferNumber = u32;

/// 2.8.10 Sequence No.
pub type SequenceNo = u32;

/// 2.8.11 Message Format.
pub type MessageFormat = u32;

/// 2.8.12 IETF Language Tag.
pub type IetfLanguageTag = Symbol;

/// 2.8.13 Fields: a symbol-keyed map of dynamically-typed values, used for connection
/// and link `properties`.
pub type Fields = MapSymbolAny;

/// 2.8.1 Role: whether a link endpoint is the sender or the receiver half.
///
/// Encodes as a single `boolean`: `false` is sender, `true` is receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// The sending endpoint.
    #[default]
    Sender,
    /// The receiving endpoint.
    Receiver,
}

impl Marshal for Role {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        matches!(self, Role::Receiver).marshal(w)
    }
}

impl Unmarshal for Role {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        Ok(if bool::unmarshal(r)? { Role::Receiver } else { Role::Sender })
    }
}

/// 2.8.2 Sender Settle Mode: settlement policy for a sender.
///
/// Encodes as a single `ubyte`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SenderSettleMode {
    /// The sender will send all deliveries initially unsettled.
    Unsettled,
    /// The sender will send all deliveries settled to the receiver.
    Settled,
    /// The sender may choose to settle or not, per delivery.
    #[default]
    Mixed,
}

impl Marshal for SenderSettleMode {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        let code: u8 = match self {
            SenderSettleMode::Unsettled => 0,
            SenderSettleMode::Settled => 1,
            SenderSettleMode::Mixed => 2,
        };
        code.marshal(w)
    }
}

impl Unmarshal for SenderSettleMode {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        match u8::unmarshal(r)? {
            0 => Ok(SenderSettleMode::Unsettled),
            1 => Ok(SenderSettleMode::Settled),
            2 => Ok(SenderSettleMode::Mixed),
            other => Err(Error::Message(format!("invalid sender-settle-mode {other}"))),
        }
    }
}

/// 2.8.3 Receiver Settle Mode: settlement policy for a receiver.
///
/// Encodes as a single `ubyte`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReceiverSettleMode {
    /// The receiver spontaneously settles deliveries as soon as they're received.
    #[default]
    First,
    /// The receiver only settles after an explicit disposition from the application.
    Second,
}

impl Marshal for ReceiverSettleMode {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        let code: u8 = match self {
            ReceiverSettleMode::First => 0,
            ReceiverSettleMode::Second => 1,
        };
        code.marshal(w)
    }
}

impl Unmarshal for ReceiverSettleMode {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        match u8::unmarshal(r)? {
            0 => Ok(ReceiverSettleMode::First),
            1 => Ok(ReceiverSettleMode::Second),
            other => Err(Error::Message(format!("invalid receiver-settle-mode {other}"))),
        }
    }
}

/// 3.5.5 Terminus Durability.
///
/// Encodes as a single `uint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminusDurability {
    /// No terminus state is retained.
    #[default]
    None,
    /// Only configuration (not message state) is retained.
    Configuration,
    /// Both configuration and unsettled delivery state are retained.
    UnsettledState,
}

impl Marshal for TerminusDurability {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        let code: u32 = match self {
            TerminusDurability::None => 0,
            TerminusDurability::Configuration => 1,
            TerminusDurability::UnsettledState => 2,
        };
        code.marshal(w)
    }
}

impl Unmarshal for TerminusDurability {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        match u32::unmarshal(r)? {
            0 => Ok(TerminusDurability::None),
            1 => Ok(TerminusDurability::Configuration),
            2 => Ok(TerminusDurability::UnsettledState),
            other => Err(Error::Message(format!("invalid terminus-durability {other}"))),
        }
    }
}

/// 3.5.6 Terminus Expiry Policy.
///
/// Encodes as a single `symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TerminusExpiryPolicy {
    /// The terminus is expired when the link is detached.
    LinkDetach,
    /// The terminus is expired when the session ends.
    #[default]
    SessionEnd,
    /// The terminus is expired when the connection is closed.
    ConnectionClose,
    /// The terminus never expires.
    Never,
}

impl TerminusExpiryPolicy {
    fn as_str(&self) -> &'static str {
        match self {
            TerminusExpiryPolicy::LinkDetach => "link-detach",
            TerminusExpiryPolicy::SessionEnd => "session-end",
            TerminusExpiryPolicy::ConnectionClose => "connection-close",
            TerminusExpiryPolicy::Never => "never",
        }
    }
}

impl Marshal for TerminusExpiryPolicy {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        Symbol::new(self.as_str()).marshal(w)
    }
}

impl Unmarshal for TerminusExpiryPolicy {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        let symbol = Symbol::unmarshal(r)?;
        match symbol.as_str() {
            "link-detach" => Ok(TerminusExpiryPolicy::LinkDetach),
            "session-end" => Ok(TerminusExpiryPolicy::SessionEnd),
            "connection-close" => Ok(TerminusExpiryPolicy::ConnectionClose),
            "never" => Ok(TerminusExpiryPolicy::Never),
            _ => Err(Error::Message(format!("invalid terminus-expiry-policy symbol {symbol}"))),
        }
    }
}

/// 2.8.14 Error: the condition/description/info record carried by `end`, `close`,
/// `detach`, and `rejected`.
///
/// Named `AmqpError` here, not `Error`, so it does not collide with
/// [`amqp_codec::Error`].
#[derive(Debug, Clone, PartialEq)]
pub struct AmqpError {
    /// A symbolic value indicating the error condition, e.g. `amqp:not-found`.
    pub condition: Symbol,
    /// A description of the error intended for the peer's operator.
    pub description: Option<String>,
    /// A map carrying information supplementary to the condition.
    pub info: Option<Fields>,
}

impl AmqpError {
    /// Creates a new `AmqpError` record with the given condition and no description or
    /// supplementary info.
    pub fn new(condition: impl Into<Symbol>) -> Self {
        Self {
            condition: condition.into(),
            description: None,
            info: None,
        }
    }
}

composite_schema! {
    struct AmqpError, code = 0x1d;
    condition: Symbol = (required),
    description: Option<String> = (optional),
    info: Option<Fields> = (optional),
}
