//! Dynamic map encoding
//!
//! A map's element-count on the wire counts keys and values separately (`entries * 2`),
//! and - unlike list/array - the 8-bit/32-bit cutoff is `count < 255`, not `< 256`.

use crate::bounded::BoundedReader;
use crate::error::Result;
use crate::format_code::EncodingCodes as Code;
use crate::read::Read;
use crate::write::Write;

use super::{read_compound_header, write_compound_header_with_threshold};

const MAP_COUNT_THRESHOLD: usize = 255;

/// Reads a map header and hands back an iterator-style reader over its entries.
///
/// Returns `Ok(None)` for `Null`.
pub fn read_map_header<'a, R: Read>(r: &'a mut R) -> Result<Option<MapReader<'a, R>>> {
    let header = match read_compound_header(r, "map", Code::Map8, Code::Map32, false)? {
        Some(h) => h,
        None => return Ok(None),
    };
    let payload_size = header.payload_size;
    Ok(Some(MapReader {
        bounded: BoundedReader::new(r, payload_size),
        pairs: header.count / 2,
        consumed: 0,
    }))
}

/// A bounded view over a map's entries, decoded two sinks at a time.
///
/// Created by [`read_map_header`]. Must not outlive the single map decode it was created
/// for.
pub struct MapReader<'a, R> {
    bounded: BoundedReader<'a, R>,
    pairs: usize,
    consumed: usize,
}

impl<'a, R: Read> MapReader<'a, R> {
    /// The number of key/value pairs this map declares.
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    /// Whether any pairs remain to be read.
    pub fn more(&self) -> bool {
        self.consumed < self.pairs
    }

    /// Decodes the next key/value pair using the given sinks, one call per pair.
    pub fn next<K, V>(
        &mut self,
        key_sink: impl FnOnce(&mut BoundedReader<'a, R>) -> Result<K>,
        value_sink: impl FnOnce(&mut BoundedReader<'a, R>) -> Result<V>,
    ) -> Result<(K, V)> {
        let key = key_sink(&mut self.bounded)?;
        let value = value_sink(&mut self.bounded)?;
        self.consumed += 1;
        Ok((key, value))
    }
}

/// Writes a map from already-encoded key/value byte blobs.
pub fn write_map(w: &mut impl Write, pairs: &[(Vec<u8>, Vec<u8>)]) -> Result<()> {
    let payload_len: usize = pairs
        .iter()
        .map(|(k, v)| k.len() + v.len())
        .sum();
    let count = pairs.len() * 2;
    write_compound_header_with_threshold(w, Code::Map8, Code::Map32, count, payload_len, MAP_COUNT_THRESHOLD)?;
    for (key, value) in pairs {
        w.write_slice(key);
        w.write_slice(value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::de::{read_bool, read_string};
    use crate::ser::{write_bool, write_string};
    use crate::read::SliceReader;

    fn encoded_string(s: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        write_string(&mut buf, s).unwrap();
        buf
    }

    fn encoded_bool(b: bool) -> Vec<u8> {
        let mut buf = Vec::new();
        write_bool(&mut buf, b);
        buf
    }

    #[test]
    fn encodes_two_entry_map_as_map8_matching_the_documented_byte_layout() {
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
    fn round_trips_entries_through_the_sink_based_reader() {
        let pairs = vec![
            (encoded_string("a"), encoded_bool(true)),
            (encoded_string("b"), encoded_bool(false)),
        ];
        let mut buf = Vec::new();
        write_map(&mut buf, &pairs).unwrap();

        let mut r = SliceReader::new(&buf);
        let mut map_reader = read_map_header(&mut r).unwrap().unwrap();
        assert_eq!(map_reader.pairs(), 2);

        let mut decoded = Vec::new();
        while map_reader.more() {
            let (k, v) = map_reader.next(|r| read_string(r), |r| read_bool(r)).unwrap();
            decoded.push((k, v));
        }
        assert_eq!(
            decoded,
            vec![("a".to_string(), Some(true)), ("b".to_string(), Some(false))]
        );
    }

    #[test]
    fn a_map_whose_entries_overrun_its_declared_size_hits_the_limit() {
        // Declares a Map8 body of 1 byte (just the count) but then supplies a full
        // string-and-bool pair, which must not be readable through the bounded view.
        let buf = [Code::Map8 as u8, 0x02, 0x02];
        let mut r = SliceReader::new(&buf);
        let mut map_reader = read_map_header(&mut r).unwrap().unwrap();
        assert!(map_reader.more());
        let result = map_reader.next(|r| read_string(r), |r| read_bool(r));
        assert!(result.is_err());
    }

    #[test]
    fn null_map_decodes_to_none() {
        let buf = [Code::Null as u8];
        let mut r = SliceReader::new(&buf);
        assert!(read_map_header(&mut r).unwrap().is_none());
    }
}
