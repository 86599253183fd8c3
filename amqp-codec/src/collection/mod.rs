//! List, map, and array encodings
//!
//! All three compound types share the same header shape (a size prefix followed by a
//! count) and the same size-variant selection rule on encode: prefer the 8-bit form,
//! fall back to 32-bit once the count or payload no longer fits in a byte.

mod array;
mod list;
mod map;

pub use array::{read_symbol_array, write_symbol_array};
pub use list::{read_list_header, write_list};
pub use map::{read_map_header, write_map, MapReader};

use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::fixed_width::SMALL_WIDTH_MAX;
use crate::format_code::EncodingCodes as Code;
use crate::read::Read;
use crate::write::Write;

/// The decoded header of a list, array, or map: how many elements it declares, and how
/// many bytes of payload follow (not counting the count field itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundHeader {
    /// Number of elements (for maps: number of keys plus number of values).
    pub count: usize,
    /// Bytes of payload following the count field.
    pub payload_size: usize,
}

/// Reads a compound header for `small_code`/`large_code`, optionally accepting `List0`
/// and/or `Null`.
pub(crate) fn read_compound_header(
    r: &mut impl Read,
    context: &'static str,
    small_code: Code,
    large_code: Code,
    allow_list0: bool,
) -> Result<Option<CompoundHeader>> {
    let code = Code::try_from(r.read_one()?)?;

    if code == Code::Null {
        return Ok(None);
    }
    if allow_list0 && code == Code::List0 {
        return Ok(Some(CompoundHeader {
            count: 0,
            payload_size: 0,
        }));
    }

    let (size, count, count_width) = if code == small_code {
        let size = r.read_one()? as usize;
        let count = r.read_one()? as usize;
        (size, count, 1)
    } else if code == large_code {
        let size = u32::from_be_bytes(r.read_const_bytes()?) as usize;
        let count = u32::from_be_bytes(r.read_const_bytes()?) as usize;
        (size, count, 4)
    } else {
        return Err(Error::UnexpectedCode {
            context,
            code: code as u8,
        });
    };

    if count > r.remaining() {
        return Err(Error::InvalidLength);
    }
    let payload_size = size
        .checked_sub(count_width)
        .ok_or(Error::InvalidLength)?;
    if payload_size > r.remaining() {
        return Err(Error::InvalidLength);
    }

    Ok(Some(CompoundHeader { count, payload_size }))
}

/// Writes a compound header (size + count) for already-encoded element bytes, choosing
/// the 8-bit or 32-bit variant by count and payload size, per §4.2.
///
/// `payload_len` is the total length of the elements that will be written after this
/// header; `count` is the element count the encoder declares (for maps: pairs * 2).
pub(crate) fn write_compound_header(
    w: &mut impl Write,
    small_code: Code,
    large_code: Code,
    count: usize,
    payload_len: usize,
) -> Result<()> {
    write_compound_header_with_threshold(w, small_code, large_code, count, payload_len, SMALL_WIDTH_MAX + 1)
}

/// Same as [`write_compound_header`] but with an explicit count threshold for choosing
/// the 8-bit variant. Maps use 255 rather than 256 (see [`crate::collection::map`]).
pub(crate) fn write_compound_header_with_threshold(
    w: &mut impl Write,
    small_code: Code,
    large_code: Code,
    count: usize,
    payload_len: usize,
    count_threshold: usize,
) -> Result<()> {
    if count < count_threshold && payload_len < SMALL_WIDTH_MAX {
        let size: u8 = (payload_len + 1)
            .try_into()
            .map_err(|_| Error::TooLong)?;
        w.write_one(small_code as u8);
        w.write_one(size);
        w.write_one(count as u8);
    } else {
        let size: u32 = (payload_len + 4)
            .try_into()
            .map_err(|_| Error::TooLong)?;
        let count: u32 = count.try_into().map_err(|_| Error::TooLong)?;
        w.write_one(large_code as u8);
        w.write_slice(&size.to_be_bytes());
        w.write_slice(&count.to_be_bytes());
    }
    Ok(())
}
