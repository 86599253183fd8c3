//! Part 3.2/3.5 Message Format and Messaging: the composite sections that make up a
//! message's transfer encoding, plus the source/target terminus descriptions attached
//! to a link by `attach`.

use amqp_codec::composite::{read_described_prefix, write_described_prefix};
use amqp_codec::dispatch::{Marshal, Unmarshal};
use amqp_codec::read::Read;
use amqp_codec::value::{MapStringAny, MapSymbolAny, Value};
use amqp_codec::write::Write;
use amqp_codec::Result;

use crate::composite_schema;
use crate::definitions::Milliseconds;

mod properties;
mod source;
mod target;

pub use properties::Properties;
pub use source::Source;
pub use target::Target;

/// 3.2.1 Header: transport headers controlling how a message is handled in transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    /// Whether the message survives an intermediary restart.
    pub durable: bool,
    /// Relative message priority; higher values are more urgent. Defaults to 4.
    pub priority: u8,
    /// Duration past which the message is considered expired by any intermediary.
    pub ttl: Option<Milliseconds>,
    /// Whether this is the first time an intermediary has attempted to deliver this
    /// message.
    pub first_acquirer: bool,
    /// The number of prior unsuccessful delivery attempts.
    pub delivery_count: u32,
}

composite_schema! {
    struct Header, code = 0x70;
    durable: bool = (default, false),
    priority: u8 = (default, 4),
    ttl: Option<Milliseconds> = (optional),
    first_acquirer: bool = (default, false),
    delivery_count: u32 = (default, 0),
}

/// A symbol-keyed map of dynamically-typed values, the body shape shared by
/// [`DeliveryAnnotations`], [`MessageAnnotations`], and [`Footer`].
fn marshal_basic_symbol_map<W: Write>(w: &mut W, code: u8, map: &MapSymbolAny) -> Result<()> {
    write_described_prefix(w, code)?;
    map.marshal(w)
}

fn unmarshal_basic_symbol_map<R: Read>(r: &mut R, code: u64) -> Result<MapSymbolAny> {
    read_described_prefix(r, code)?;
    MapSymbolAny::unmarshal(r)
}

/// 3.2.2 Delivery Annotations: annotations for the current delivery hop only, not
/// forwarded past the next intermediary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeliveryAnnotations(pub MapSymbolAny);

impl Marshal for DeliveryAnnotations {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        marshal_basic_symbol_map(w, 0x71, &self.0)
    }
}

impl Unmarshal for DeliveryAnnotations {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        Ok(DeliveryAnnotations(unmarshal_basic_symbol_map(r, 0x71)?))
    }
}

/// 3.2.3 Message Annotations: annotations intended to travel with the message for its
/// entire journey.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageAnnotations(pub MapSymbolAny);

impl Marshal for MessageAnnotations {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        marshal_basic_symbol_map(w, 0x72, &self.0)
    }
}

impl Unmarshal for MessageAnnotations {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        Ok(MessageAnnotations(unmarshal_basic_symbol_map(r, 0x72)?))
    }
}

/// 3.2.5 Application Properties: a string-keyed map for application-specific message
/// metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationProperties(pub MapStringAny);

impl Marshal for ApplicationProperties {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_described_prefix(w, 0x74)?;
        self.0.marshal(w)
    }
}

impl Unmarshal for ApplicationProperties {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_described_prefix(r, 0x74)?;
        Ok(ApplicationProperties(MapStringAny::unmarshal(r)?))
    }
}

/// 3.2.6 Data: an opaque binary message body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Data(pub Vec<u8>);

impl Marshal for Data {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_described_prefix(w, 0x75)?;
        self.0.marshal(w)
    }
}

impl Unmarshal for Data {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_described_prefix(r, 0x75)?;
        Ok(Data(Vec::<u8>::unmarshal(r)?))
    }
}

/// 3.2.7 AMQP Sequence: a message body section carrying a list of values.
///
/// Each element decodes through [`Value`], so it is subject to the same scope limit as
/// [`amqp_codec::value::Value`] itself: an element that is a nested compound or
/// described type is not representable and surfaces as
/// [`amqp_codec::Error::NotImplemented`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AmqpSequence(pub Vec<Value>);

impl Marshal for AmqpSequence {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_described_prefix(w, 0x76)?;
        let mut elements = Vec::with_capacity(self.0.len());
        for value in &self.0 {
            let mut buf = amqp_codec::pool::acquire();
            value.marshal(&mut buf)?;
            elements.push(buf.into_vec());
        }
        amqp_codec::collection::write_list(w, &elements)
    }
}

impl Unmarshal for AmqpSequence {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_described_prefix(r, 0x76)?;
        let Some(header) = amqp_codec::collection::read_list_header(r)? else {
            return Ok(AmqpSequence(Vec::new()));
        };
        let mut values = Vec::with_capacity(header.count);
        for _ in 0..header.count {
            values.push(Value::unmarshal(r)?);
        }
        Ok(AmqpSequence(values))
    }
}

/// 3.2.8 AMQP Value: a message body section carrying a single value directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AmqpValue(pub Value);

impl Marshal for AmqpValue {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_described_prefix(w, 0x77)?;
        self.0.marshal(w)
    }
}

impl Unmarshal for AmqpValue {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_described_prefix(r, 0x77)?;
        Ok(AmqpValue(Value::unmarshal(r)?))
    }
}

/// 3.2.9 Footer: transport footers, conceptually identical to [`MessageAnnotations`]
/// but attached after the message body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Footer(pub MapSymbolAny);

impl Marshal for Footer {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        marshal_basic_symbol_map(w, 0x78, &self.0)
    }
}

impl Unmarshal for Footer {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        Ok(Footer(unmarshal_basic_symbol_map(r, 0x78)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amqp_codec::dispatch::{marshal, unmarshal};
    use amqp_codec::primitives::Symbol;
    use amqp_codec::read::SliceReader;
    use indexmap::IndexMap;

    #[test]
    fn header_round_trips_with_defaults_applied() {
        let header = Header::default();
        let mut buf = Vec::new();
        marshal(&mut buf, &header).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: Header = unmarshal(&mut r).unwrap();
        assert_eq!(decoded.priority, 4);
        assert!(!decoded.durable);
    }

    #[test]
    fn data_round_trips_as_a_basic_encoded_binary_body() {
        let data = Data(vec![1, 2, 3, 4]);
        let mut buf = Vec::new();
        marshal(&mut buf, &data).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: Data = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn amqp_value_round_trips_a_scalar_body() {
        let value = AmqpValue(Value::String("hello".to_string()));
        let mut buf = Vec::new();
        marshal(&mut buf, &value).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: AmqpValue = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn amqp_sequence_round_trips_a_list_of_values() {
        let seq = AmqpSequence(vec![Value::Ulong(1), Value::Bool(true), Value::String("x".to_string())]);
        let mut buf = Vec::new();
        marshal(&mut buf, &seq).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: AmqpSequence = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, seq);
    }

    #[test]
    fn empty_amqp_sequence_round_trips() {
        let seq = AmqpSequence(Vec::new());
        let mut buf = Vec::new();
        marshal(&mut buf, &seq).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: AmqpSequence = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, seq);
    }

    #[test]
    fn message_annotations_round_trips_a_symbol_keyed_map() {
        let mut map = IndexMap::new();
        map.insert(Symbol::new("x-opt-priority-boost"), Value::Bool(true));
        let annotations = MessageAnnotations(map);

        let mut buf = Vec::new();
        marshal(&mut buf, &annotations).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: MessageAnnotations = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, annotations);
    }

    #[test]
    fn application_properties_round_trips_a_string_keyed_map() {
        let mut map = IndexMap::new();
        map.insert("retry-count".to_string(), Value::Ulong(2));
        let props = ApplicationProperties(map);

        let mut buf = Vec::new();
        marshal(&mut buf, &props).unwrap();

        let mut r = SliceReader::new(&buf);
        let decoded: ApplicationProperties = unmarshal(&mut r).unwrap();
        assert_eq!(decoded, props);
    }
}
