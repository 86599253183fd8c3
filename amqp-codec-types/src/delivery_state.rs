//! 3.4 Delivery State: the five states a transfer's delivery can be stamped with as it
//! moves across a link, plus the terminal subset ("outcome") a sender may propose as a
//! `default-outcome` on a [`crate::messaging::Source`].
//!
//! `DeliveryState` and [`Outcome`] are both descriptor-dispatched sum types rather than a
//! single fixed composite, so their `Marshal`/`Unmarshal` impls are hand-written here
//! instead of going through [`crate::composite_schema`]: encoding matches on the active
//! variant and delegates, and decoding peeks the composite's descriptor byte to pick
//! which variant's decoder to run before consuming anything.

use amqp_codec::dispatch::{Marshal, Unmarshal};
use amqp_codec::read::Read;
use amqp_codec::write::Write;
use amqp_codec::{Error, Result};

use crate::composite_schema;
use crate::definitions::Fields;
use crate::AmqpError;

/// 3.4 Delivery State: the disposition a transfer's delivery currently carries.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryState {
    /// 3.4.1 Received: partial progress through a multi-frame delivery.
    Received(Received),
    /// 3.4.2 Accepted: the delivery was accepted by the receiver.
    Accepted(Accepted),
    /// 3.4.3 Rejected: the delivery was rejected due to an error.
    Rejected(Rejected),
    /// 3.4.4 Released: the delivery was released for redelivery.
    Released(Released),
    /// 3.4.5 Modified: the delivery was released, with annotations to apply on redelivery.
    Modified(Modified),
}

impl DeliveryState {
    /// Whether this state is terminal, i.e. also a valid [`Outcome`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DeliveryState::Received(_))
    }
}

impl From<Outcome> for DeliveryState {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Accepted(v) => DeliveryState::Accepted(v),
            Outcome::Rejected(v) => DeliveryState::Rejected(v),
            Outcome::Released(v) => DeliveryState::Released(v),
            Outcome::Modified(v) => DeliveryState::Modified(v),
        }
    }
}

impl Marshal for DeliveryState {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        match self {
            DeliveryState::Received(v) => v.marshal(w),
            DeliveryState::Accepted(v) => v.marshal(w),
            DeliveryState::Rejected(v) => v.marshal(w),
            DeliveryState::Released(v) => v.marshal(w),
            DeliveryState::Modified(v) => v.marshal(w),
        }
    }
}

impl Unmarshal for DeliveryState {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        match peek_descriptor_code(r)? {
            0x23 => Ok(DeliveryState::Received(Received::unmarshal(r)?)),
            0x24 => Ok(DeliveryState::Accepted(Accepted::unmarshal(r)?)),
            0x25 => Ok(DeliveryState::Rejected(Rejected::unmarshal(r)?)),
            0x26 => Ok(DeliveryState::Released(Released::unmarshal(r)?)),
            0x27 => Ok(DeliveryState::Modified(Modified::unmarshal(r)?)),
            other => Err(Error::UnexpectedCode {
                context: "delivery state descriptor",
                code: other,
            }),
        }
    }
}

/// The terminal subset of [`DeliveryState`]: a delivery in one of these states will not
/// change state again, which is what makes it a valid `default-outcome` for a source.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 3.4.2 Accepted.
    Accepted(Accepted),
    /// 3.4.3 Rejected.
    Rejected(Rejected),
    /// 3.4.4 Released.
    Released(Released),
    /// 3.4.5 Modified.
    Modified(Modified),
}

impl Marshal for Outcome {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        match self {
            Outcome::Accepted(v) => v.marshal(w),
            Outcome::Rejected(v) => v.marshal(w),
            Outcome::Released(v) => v.marshal(w),
            Outcome::Modified(v) => v.marshal(w),
        }
    }
}

impl Unmarshal for Outcome {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        match peek_descriptor_code(r)? {
            0x24 => Ok(Outcome::Accepted(Accepted::unmarshal(r)?)),
            0x25 => Ok(Outcome::Rejected(Rejected::unmarshal(r)?)),
            0x26 => Ok(Outcome::Released(Released::unmarshal(r)?)),
            0x27 => Ok(Outcome::Modified(Modified::unmarshal(r)?)),
            other => Err(Error::UnexpectedCode {
                context: "outcome descriptor",
                code: other,
            }),
        }
    }
}

/// Reads the third byte of an upcoming composite header (`0x00`, `SmallUlong`,
/// descriptor code) without consuming any of it, so the caller can route to the right
/// concrete type's own `Unmarshal`, which re-reads the header itself.
///
/// Every descriptor this crate emits fits in a `SmallUlong`, so the header is always
/// exactly these three bytes; a peer that sent a wider or symbolic descriptor here would
/// be using a delivery state this implementation does not know, which is reported the
/// same as an unknown numeric code.
fn peek_descriptor_code<R: Read>(r: &mut R) -> Result<u8> {
    let peeked = r.peek_bytes(3);
    peeked.get(2).copied().ok_or(Error::InvalidLength)
}

/// 3.4.1 Received: records the sender's or receiver's progress through a multi-frame
/// delivery it has not yet fully received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Received {
    /// The last transfer frame's section number to have been successfully processed.
    pub section_number: u32,
    /// The byte offset within that section up to which data has been processed.
    pub section_offset: u64,
}

composite_schema! {
    struct Received, code = 0x23;
    section_number: u32 = (required),
    section_offset: u64 = (required),
}

/// 3.4.2 Accepted: the receiver took responsibility for the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accepted {}

composite_schema! {
    struct Accepted, code = 0x24;
}

/// 3.4.3 Rejected: the receiver judged the message unprocessable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rejected {
    /// The error that caused the rejection, if the receiver supplied one.
    pub error: Option<AmqpError>,
}

composite_schema! {
    struct Rejected, code = 0x25;
    error: Option<AmqpError> = (optional),
}

/// 3.4.4 Released: the receiver is giving up responsibility for the message without
/// having processed it, making it eligible for redelivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Released {}

composite_schema! {
    struct Released, code = 0x26;
}

/// 3.4.5 Modified: like [`Released`], but the receiver asks for annotations to be
/// applied, or flags the message as undeliverable, before it is redelivered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Modified {
    /// If true, the sender should not attempt to redeliver this message.
    pub delivery_failed: Option<bool>,
    /// If true, the message should not be redelivered to this receiver.
    pub undeliverable_here: Option<bool>,
    /// Annotations to merge into the message's existing `message-annotations` before
    /// redelivery.
    pub message_annotations: Option<Fields>,
}

composite_schema! {
    struct Modified, code = 0x27;
    delivery_failed: Option<bool> = (optional),
    undeliverable_here: Option<bool> = (optional),
    message_annotations: Option<Fields> = (optional),
}
