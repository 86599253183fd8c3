//! Primitive encoders
//!
//! Each function writes the smallest legal encoding for the value it is given, per
//! §4.1 of the wire-format contract: a zero-valued `uint`/`ulong` collapses to its
//! zero-width code, and variable-length values choose the 8-bit form below 256 bytes.

use crate::error::{Error, Result};
use crate::fixed_width::SMALL_WIDTH_MAX;
use crate::format_code::EncodingCodes as Code;
use crate::primitives::Symbol;
use crate::primitives::Timestamp;
use crate::write::Write;

/// Writes the `Null` code.
pub fn write_null(w: &mut impl Write) {
    w.write_one(Code::Null as u8);
}

/// Writes a boolean as one of the dedicated `BooleanTrue`/`BooleanFalse` codes.
pub fn write_bool(w: &mut impl Write, value: bool) {
    w.write_one(if value { Code::BooleanTrue } else { Code::BooleanFalse } as u8);
}

/// Writes a `ubyte`.
pub fn write_ubyte(w: &mut impl Write, value: u8) {
    w.write_one(Code::UByte as u8);
    w.write_one(value);
}

/// Writes a `ushort`.
pub fn write_ushort(w: &mut impl Write, value: u16) {
    w.write_one(Code::UShort as u8);
    w.write_slice(&value.to_be_bytes());
}

/// Writes a `uint`, collapsing zero to `Uint0`.
pub fn write_uint(w: &mut impl Write, value: u32) {
    if value == 0 {
        w.write_one(Code::Uint0 as u8);
    } else {
        w.write_one(Code::UInt as u8);
        w.write_slice(&value.to_be_bytes());
    }
}

/// Writes a `ulong`, collapsing zero to `Ulong0`.
pub fn write_ulong(w: &mut impl Write, value: u64) {
    if value == 0 {
        w.write_one(Code::Ulong0 as u8);
    } else {
        w.write_one(Code::ULong as u8);
        w.write_slice(&value.to_be_bytes());
    }
}

/// Writes a `byte`.
pub fn write_byte(w: &mut impl Write, value: i8) {
    w.write_one(Code::Byte as u8);
    w.write_one(value as u8);
}

/// Writes a `short`.
pub fn write_short(w: &mut impl Write, value: i16) {
    w.write_one(Code::Short as u8);
    w.write_slice(&value.to_be_bytes());
}

/// Writes an `int`.
pub fn write_int(w: &mut impl Write, value: i32) {
    w.write_one(Code::Int as u8);
    w.write_slice(&value.to_be_bytes());
}

/// Writes a `long`.
pub fn write_long(w: &mut impl Write, value: i64) {
    w.write_one(Code::Long as u8);
    w.write_slice(&value.to_be_bytes());
}

/// Writes a `timestamp`.
pub fn write_timestamp(w: &mut impl Write, value: Timestamp) {
    w.write_one(Code::Timestamp as u8);
    w.write_slice(&value.milliseconds().to_be_bytes());
}

/// Writes a binary blob, choosing `VBin8`/`VBin32` by length.
pub fn write_binary(w: &mut impl Write, value: &[u8]) -> Result<()> {
    write_variable_width(w, Code::VBin8, Code::VBin32, value)
}

/// Writes a UTF-8 string, choosing `Str8`/`Str32` by length.
pub fn write_string(w: &mut impl Write, value: &str) -> Result<()> {
    write_variable_width(w, Code::Str8, Code::Str32, value.as_bytes())
}

/// Writes a symbol, choosing `Sym8`/`Sym32` by length.
///
/// The source marks `Symbol` values as ASCII by convention rather than re-validating on
/// every encode; this implementation does the same, trusting [`Symbol::try_new`] (or the
/// caller) to have enforced that at construction time.
pub fn write_symbol(w: &mut impl Write, value: &Symbol) -> Result<()> {
    write_variable_width(w, Code::Sym8, Code::Sym32, value.as_str().as_bytes())
}

fn write_variable_width(w: &mut impl Write, small: Code, large: Code, payload: &[u8]) -> Result<()> {
    if payload.len() <= SMALL_WIDTH_MAX {
        w.write_one(small as u8);
        w.write_one(payload.len() as u8);
    } else {
        let len: u32 = payload
            .len()
            .try_into()
            .map_err(|_| Error::TooLong)?;
        w.write_one(large as u8);
        w.write_slice(&len.to_be_bytes());
    }
    w.write_slice(payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_uint_and_ulong_collapse_to_zero_width() {
        let mut buf = Vec::new();
        write_uint(&mut buf, 0);
        assert_eq!(buf, vec![Code::Uint0 as u8]);

        let mut buf = Vec::new();
        write_ulong(&mut buf, 0);
        assert_eq!(buf, vec![Code::Ulong0 as u8]);
    }

    #[test]
    fn nonzero_uint_uses_full_width() {
        let mut buf = Vec::new();
        write_uint(&mut buf, 42);
        assert_eq!(buf, vec![Code::UInt as u8, 0, 0, 0, 42]);
    }

    #[test]
    fn string_length_255_uses_str8() {
        let s = "a".repeat(255);
        let mut buf = Vec::new();
        write_string(&mut buf, &s).unwrap();
        assert_eq!(buf[0], Code::Str8 as u8);
        assert_eq!(buf[1], 255);
    }

    #[test]
    fn string_length_256_uses_str32() {
        let s = "a".repeat(256);
        let mut buf = Vec::new();
        write_string(&mut buf, &s).unwrap();
        assert_eq!(buf[0], Code::Str32 as u8);
        assert_eq!(&buf[1..5], &256u32.to_be_bytes());
    }

    #[test]
    fn bool_uses_dedicated_codes() {
        let mut buf = Vec::new();
        write_bool(&mut buf, true);
        assert_eq!(buf, vec![Code::BooleanTrue as u8]);

        let mut buf = Vec::new();
        write_bool(&mut buf, false);
        assert_eq!(buf, vec![Code::BooleanFalse as u8]);
    }
}
