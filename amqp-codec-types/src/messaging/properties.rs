//! 3.2.4 Properties: the immutable properties of a message.

use amqp_codec::primitives::{Symbol, Timestamp};

use crate::composite_schema;
use crate::definitions::SequenceNo;

/// Immutable properties of a message. Simplified relative to the full AMQP 1.0
/// `properties` type: `message-id`/`correlation-id` are plain strings rather than the
/// ulong/uuid/binary/string union the protocol permits, and `to`/`reply-to` are plain
/// strings rather than the `address` union (this crate does not model UUID- or
/// binary-valued message or node identifiers).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    /// Application-supplied identifier for the message.
    pub message_id: Option<String>,
    /// The identity of the user responsible for producing the message.
    pub user_id: Option<Vec<u8>>,
    /// The address of the node the message is destined for.
    pub to: Option<String>,
    /// A common field for summary information about the message content and purpose.
    pub subject: Option<String>,
    /// The address of the node to send replies to.
    pub reply_to: Option<String>,
    /// Identifies the message this one is a reply to.
    pub correlation_id: Option<String>,
    /// MIME type describing the message body's encoding.
    pub content_type: Option<Symbol>,
    /// The content encoding applied to the message body.
    pub content_encoding: Option<Symbol>,
    /// Absolute time past which the message is considered expired.
    pub absolute_expiry_time: Option<Timestamp>,
    /// Absolute time the message was created.
    pub creation_time: Option<Timestamp>,
    /// Identifies the group the message belongs to.
    pub group_id: Option<String>,
    /// The relative position of this message within its group.
    pub group_sequence: Option<SequenceNo>,
    /// The group a reply to this message belongs to.
    pub reply_to_group_id: Option<String>,
}

composite_schema! {
    struct Properties, code = 0x73;
    message_id: Option<String> = (optional),
    user_id: Option<Vec<u8>> = (optional),
    to: Option<String> = (optional),
    subject: Option<String> = (optional),
    reply_to: Option<String> = (optional),
    correlation_id: Option<String> = (optional),
    content_type: Option<Symbol> = (optional),
    content_encoding: Option<Symbol> = (optional),
    absolute_expiry_time: Option<Timestamp> = (optional),
    creation_time: Option<Timestamp> = (optional),
    group_id: Option<String> = (optional),
    group_sequence: Option<SequenceNo> = (optional),
    reply_to_group_id: Option<String> = (optional),
}
