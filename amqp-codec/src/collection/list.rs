use crate::error::Result;
use crate::format_code::EncodingCodes as Code;
use crate::read::Read;
use crate::write::Write;

use super::{read_compound_header, write_compound_header, CompoundHeader};

/// Reads a list (or array) header: `Null`, `List0`, `List8`/`Array8`, or
/// `List32`/`Array32`.
///
/// Returns `Ok(None)` for `Null`. `List0` yields `count = 0, payload_size = 0`.
pub fn read_list_header(r: &mut impl Read) -> Result<Option<CompoundHeader>> {
    read_compound_header(r, "list", Code::List8, Code::List32, true)
}

/// Writes a list from already-encoded element byte blobs, choosing `List0`, `List8`, or
/// `List32` by count and total payload size.
pub fn write_list(w: &mut impl Write, elements: &[Vec<u8>]) -> Result<()> {
    if elements.is_empty() {
        w.write_one(Code::List0 as u8);
        return Ok(());
    }
    let payload_len: usize = elements.iter().map(Vec::len).sum();
    write_compound_header(w, Code::List8, Code::List32, elements.len(), payload_len)?;
    for element in elements {
        w.write_slice(element);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::SliceReader;

    #[test]
    fn empty_list_encodes_as_single_byte() {
        let mut buf = Vec::new();
        write_list(&mut buf, &[]).unwrap();
        assert_eq!(buf, vec![Code::List0 as u8]);
    }

    #[test]
    fn two_hundred_fifty_four_one_byte_fields_use_list8() {
        // The size byte covers the count byte plus the element payload, so the largest
        // element payload List8 can declare is 254 (255 - the 1 count byte).
        let elements: Vec<Vec<u8>> = (0..254u8).map(|b| vec![b]).collect();
        let mut buf = Vec::new();
        write_list(&mut buf, &elements).unwrap();
        assert_eq!(buf[0], Code::List8 as u8);
        assert_eq!(buf[1], 255); // payload (254) + count byte
        assert_eq!(buf[2], 254);
    }

    #[test]
    fn adding_one_more_field_promotes_to_list32() {
        let elements: Vec<Vec<u8>> = (0..255u8).map(|b| vec![b]).collect();
        let mut buf = Vec::new();
        write_list(&mut buf, &elements).unwrap();
        assert_eq!(buf[0], Code::List32 as u8);
    }

    #[test]
    fn header_round_trips_through_a_list() {
        let elements = vec![vec![1u8, 2], vec![3u8]];
        let mut buf = Vec::new();
        write_list(&mut buf, &elements).unwrap();
        let mut r = SliceReader::new(&buf);
        let header = read_list_header(&mut r).unwrap().unwrap();
        assert_eq!(header.count, 2);
        assert_eq!(header.payload_size, 3);
    }

    #[test]
    fn null_list_decodes_to_none() {
        let buf = [Code::Null as u8];
        let mut r = SliceReader::new(&buf);
        assert!(read_list_header(&mut r).unwrap().is_none());
    }
}
