//! The described-type (composite) protocol
//!
//! A composite is `0x00` + descriptor + a list body whose positional elements map onto a
//! schema's fields. This module supplies the header read/write and the field-trimming
//! encoder; each concrete composite in `amqp-codec-types` supplies its own field sinks
//! (see [`decode_fields`]) since the field types - and therefore the null/default policy
//! for each - differ per composite.

use std::convert::TryFrom;

use crate::collection::{read_list_header, write_list};
use crate::descriptor::{read_descriptor, write_descriptor, Descriptor};
use crate::error::{Error, Result};
use crate::format_code::EncodingCodes as Code;
use crate::read::Read;
use crate::write::Write;

/// The header of a described composite: its descriptor and the number of fields
/// actually present on the wire (which may be fewer than the schema declares, per
/// trailing-field omission).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeHeader {
    /// The descriptor found on the wire, numeric or symbolic.
    pub descriptor: Descriptor,
    /// Number of list elements following the header.
    pub field_count: usize,
}

/// Reads a composite header. Consumes one byte: `Null` yields `Ok(None)` (the enclosing
/// context applies its own null handler); otherwise the byte must be the described-type
/// marker, after which the descriptor and list header are read.
pub fn read_composite_header(r: &mut impl Read) -> Result<Option<CompositeHeader>> {
    let code = Code::try_from(r.read_one()?)?;
    if code == Code::Null {
        return Ok(None);
    }
    if code != Code::DescribedType {
        return Err(Error::UnexpectedCode {
            context: "composite",
            code: code as u8,
        });
    }
    let descriptor = read_descriptor(r)?;
    let header = read_list_header(r)?.ok_or_else(|| Error::custom("composite body must not be null"))?;
    Ok(Some(CompositeHeader {
        descriptor,
        field_count: header.count,
    }))
}

/// Verifies that `header.descriptor` names `expected_code`, and that it does not declare
/// more fields than `declared_len` schema entries can accept.
pub fn check_composite_header(header: &CompositeHeader, expected_code: u64, declared_len: usize) -> Result<()> {
    if !header.descriptor.matches(expected_code) {
        return Err(Error::DescriptorMismatch {
            expected: format!("0x{expected_code:02x}"),
            found: header.descriptor.to_string(),
        });
    }
    if header.field_count > declared_len {
        return Err(Error::TooManyFields {
            found: header.field_count,
            declared: declared_len,
        });
    }
    Ok(())
}

/// Decodes a composite's present fields by calling `sinks[i]` for each of the first
/// `field_count` entries, left to right. Trailing schema entries beyond `field_count` are
/// never called - a caller that wants default-on-absence behavior pre-initializes the
/// local the sink writes into, so an un-called sink is indistinguishable from one that
/// decoded a default.
///
/// Each sink is responsible for interpreting a null value on the wire: a required field's
/// sink should return [`Error::RequiredFieldMissing`] if its decode yields nothing, while
/// a defaultable field's sink can simply leave its target unchanged.
pub fn decode_fields<'a, R: Read>(
    r: &mut R,
    field_count: usize,
    sinks: &mut [Box<dyn FnMut(&mut R) -> Result<()> + 'a>],
) -> Result<()> {
    for (index, sink) in sinks.iter_mut().enumerate().take(field_count) {
        sink(r).map_err(|e| e.with_field_index(index))?;
    }
    Ok(())
}

/// Encodes a composite from an already-emitted descriptor code and a schema's worth of
/// optionally-omitted, already-encoded field bodies.
///
/// Trailing `None` fields vanish from the wire entirely; an earlier `None` becomes a
/// single `Null` byte so later fields keep their positional index.
pub fn write_composite(w: &mut impl Write, descriptor_code: u8, fields: &[Option<Vec<u8>>]) -> Result<()> {
    w.write_one(Code::DescribedType as u8);
    write_descriptor(w, descriptor_code)?;

    let last_set = fields.iter().rposition(Option::is_some);
    let elements: Vec<Vec<u8>> = match last_set {
        None => Vec::new(),
        Some(last) => fields[..=last]
            .iter()
            .map(|field| field.clone().unwrap_or_else(|| vec![Code::Null as u8]))
            .collect(),
    };
    write_list(w, &elements)
}

/// Writes the `0x00` + descriptor prefix for a described type whose body is a direct
/// primitive or compound value rather than a fields-list (`Data`, `AmqpValue`,
/// `AmqpSequence`, and the map-keyed message sections). The caller writes the body
/// itself immediately after this returns.
pub fn write_described_prefix(w: &mut impl Write, descriptor_code: u8) -> Result<()> {
    w.write_one(Code::DescribedType as u8);
    write_descriptor(w, descriptor_code)
}

/// Reads and checks the `0x00` + descriptor prefix for a directly-bodied described type.
/// Unlike [`read_composite_header`], this does not assume a list follows; the caller
/// reads its own body shape (binary/any/list/map) immediately after this returns.
pub fn read_described_prefix(r: &mut impl Read, expected_code: u64) -> Result<()> {
    let code = Code::try_from(r.read_one()?)?;
    if code != Code::DescribedType {
        return Err(Error::UnexpectedCode {
            context: "described value",
            code: code as u8,
        });
    }
    let descriptor = read_descriptor(r)?;
    if !descriptor.matches(expected_code) {
        return Err(Error::DescriptorMismatch {
            expected: format!("0x{expected_code:02x}"),
            found: descriptor.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::de::read_string;
    use crate::read::SliceReader;
    use crate::ser::write_string;

    fn encoded(s: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        write_string(&mut buf, s).unwrap();
        buf
    }

    #[test]
    fn open_with_a_single_field_matches_the_documented_wire_prefix() {
        let fields = vec![Some(encoded("container-1"))];
        let mut buf = Vec::new();
        write_composite(&mut buf, 0x10, &fields).unwrap();
        assert_eq!(&buf[..3], &[Code::DescribedType as u8, Code::SmallUlong as u8, 0x10]);
        assert_eq!(buf[3], Code::List8 as u8);
    }

    #[test]
    fn trailing_omitted_fields_vanish_from_the_wire() {
        let fields = vec![Some(encoded("a")), None, None];
        let mut buf = Vec::new();
        write_composite(&mut buf, 0x10, &fields).unwrap();

        let mut r = SliceReader::new(&buf);
        let header = read_composite_header(&mut r).unwrap().unwrap();
        assert_eq!(header.field_count, 1);
    }

    #[test]
    fn an_omitted_field_before_a_present_one_becomes_a_null_placeholder() {
        let fields = vec![None, Some(encoded("b"))];
        let mut buf = Vec::new();
        write_composite(&mut buf, 0x10, &fields).unwrap();

        let mut r = SliceReader::new(&buf);
        let header = read_composite_header(&mut r).unwrap().unwrap();
        assert_eq!(header.field_count, 2);

        let mut first: Option<String> = None;
        let mut second: Option<String> = None;
        let mut sinks: Vec<Box<dyn FnMut(&mut SliceReader<'_>) -> Result<()> + '_>> = vec![
            Box::new(|r| {
                if r.peek_one()? == Code::Null as u8 {
                    r.read_one()?;
                } else {
                    first = Some(read_string(r)?);
                }
                Ok(())
            }),
            Box::new(|r| {
                second = Some(read_string(r)?);
                Ok(())
            }),
        ];
        decode_fields(&mut r, header.field_count, &mut sinks).unwrap();
        drop(sinks);
        assert_eq!(first, None);
        assert_eq!(second, Some("b".to_string()));
    }

    #[test]
    fn descriptor_mismatch_is_rejected() {
        let fields = vec![Some(encoded("x"))];
        let mut buf = Vec::new();
        write_composite(&mut buf, 0x10, &fields).unwrap();
        let mut r = SliceReader::new(&buf);
        let header = read_composite_header(&mut r).unwrap().unwrap();
        assert!(check_composite_header(&header, 0x11, 5).is_err());
    }

    #[test]
    fn more_fields_than_the_schema_declares_is_rejected() {
        let fields = vec![Some(encoded("x")), Some(encoded("y"))];
        let mut buf = Vec::new();
        write_composite(&mut buf, 0x10, &fields).unwrap();
        let mut r = SliceReader::new(&buf);
        let header = read_composite_header(&mut r).unwrap().unwrap();
        assert!(check_composite_header(&header, 0x10, 1).is_err());
    }

    #[test]
    fn null_composite_decodes_to_none() {
        let buf = [Code::Null as u8];
        let mut r = SliceReader::new(&buf);
        assert!(read_composite_header(&mut r).unwrap().is_none());
    }

    #[test]
    fn described_prefix_round_trips_and_checks_the_descriptor() {
        let mut buf = Vec::new();
        write_described_prefix(&mut buf, 0x75).unwrap();
        write_string(&mut buf, "body").unwrap();

        let mut r = SliceReader::new(&buf);
        read_described_prefix(&mut r, 0x75).unwrap();
        assert_eq!(read_string(&mut r).unwrap(), "body");
    }

    #[test]
    fn described_prefix_rejects_the_wrong_descriptor() {
        let mut buf = Vec::new();
        write_described_prefix(&mut buf, 0x75).unwrap();
        let mut r = SliceReader::new(&buf);
        assert!(read_described_prefix(&mut r, 0x76).is_err());
    }
}
