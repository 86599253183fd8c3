//! Primitive decoders
//!
//! Integer readers are deliberately permissive: they accept *any* code in the
//! appropriate signedness family and widen it to a 64-bit accumulator, per §4.1. This
//! matches how a peer is free to choose the most compact legal encoding for a value -
//! a decoder that only accepted one exact code per field would reject perfectly valid
//! frames from another implementation.

use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::format_code::EncodingCodes as Code;
use crate::primitives::{Symbol, Timestamp};
use crate::read::Read;
use crate::value::Value;

/// Reads a value from the unsigned integer family (`Ubyte`, `UShort`, `UInt`,
/// `SmallUint`, `Uint0`, `ULong`, `SmallUlong`, `Ulong0`), widened to `u64`.
///
/// Returns `Ok(None)` if the next code is `Null`.
pub fn read_uint(r: &mut impl Read) -> Result<Option<u64>> {
    let code = Code::try_from(r.read_one()?)?;
    let value = match code {
        Code::Null => return Ok(None),
        Code::Uint0 | Code::Ulong0 => 0,
        Code::UByte => r.read_one()? as u64,
        Code::UShort => u16::from_be_bytes(r.read_const_bytes()?) as u64,
        Code::UInt | Code::SmallUint => {
            if code == Code::SmallUint {
                r.read_one()? as u64
            } else {
                u32::from_be_bytes(r.read_const_bytes()?) as u64
            }
        }
        Code::ULong => u64::from_be_bytes(r.read_const_bytes()?),
        Code::SmallUlong => r.read_one()? as u64,
        other => {
            return Err(Error::UnexpectedCode {
                context: "unsigned integer",
                code: other as u8,
            })
        }
    };
    Ok(Some(value))
}

/// Reads a value from the signed integer family (`Byte`, `Short`, `Int`, `SmallInt`,
/// `Long`, `SmallLong`), widened to `i64`.
pub fn read_int(r: &mut impl Read) -> Result<i64> {
    let code = Code::try_from(r.read_one()?)?;
    let value = match code {
        Code::Byte | Code::SmallInt | Code::SmallLong => r.read_one()? as i8 as i64,
        Code::Short => i16::from_be_bytes(r.read_const_bytes()?) as i64,
        Code::Int => i32::from_be_bytes(r.read_const_bytes()?) as i64,
        Code::Long => i64::from_be_bytes(r.read_const_bytes()?),
        other => {
            return Err(Error::UnexpectedCode {
                context: "signed integer",
                code: other as u8,
            })
        }
    };
    Ok(value)
}

/// Reads a boolean. Accepts `Boolean` (next byte 0/nonzero), `BooleanTrue`,
/// `BooleanFalse`, and `Null`.
pub fn read_bool(r: &mut impl Read) -> Result<Option<bool>> {
    let code = Code::try_from(r.read_one()?)?;
    let value = match code {
        Code::Null => return Ok(None),
        Code::BooleanTrue => true,
        Code::BooleanFalse => false,
        Code::Boolean => r.read_one()? != 0,
        other => {
            return Err(Error::UnexpectedCode {
                context: "boolean",
                code: other as u8,
            })
        }
    };
    Ok(Some(value))
}

/// Reads a `Timestamp`. Requires the `Timestamp` code; does not accept `Null`.
pub fn read_timestamp(r: &mut impl Read) -> Result<Timestamp> {
    let code = Code::try_from(r.read_one()?)?;
    if code != Code::Timestamp {
        return Err(Error::UnexpectedCode {
            context: "timestamp",
            code: code as u8,
        });
    }
    let millis = i64::from_be_bytes(r.read_const_bytes()?);
    Ok(Timestamp::from_milliseconds(millis))
}

/// Reads a binary blob. `Null` yields an empty buffer.
///
/// Use [`read_binary_opt`] where a composite field must distinguish "absent/null" from
/// "present but empty".
pub fn read_binary(r: &mut impl Read) -> Result<Vec<u8>> {
    Ok(read_binary_opt(r)?.unwrap_or_default())
}

/// Reads a binary blob, returning `Ok(None)` for `Null` rather than collapsing it to an
/// empty buffer.
pub fn read_binary_opt(r: &mut impl Read) -> Result<Option<Vec<u8>>> {
    read_variable_width(r, Code::VBin8, Code::VBin32, "binary")
}

/// Reads a UTF-8 string. `Null` yields an empty string.
///
/// Use [`read_string_opt`] where a composite field must distinguish "absent/null" from
/// "present but empty".
pub fn read_string(r: &mut impl Read) -> Result<String> {
    Ok(read_string_opt(r)?.unwrap_or_default())
}

/// Reads a UTF-8 string, returning `Ok(None)` for `Null`.
pub fn read_string_opt(r: &mut impl Read) -> Result<Option<String>> {
    match read_variable_width(r, Code::Str8, Code::Str32, "string")? {
        Some(bytes) => Ok(Some(String::from_utf8(bytes)?)),
        None => Ok(None),
    }
}

/// Reads a symbol. `Null` yields an empty symbol.
///
/// Use [`read_symbol_opt`] where a composite field must distinguish "absent/null" from
/// "present but empty".
pub fn read_symbol(r: &mut impl Read) -> Result<Symbol> {
    Ok(read_symbol_opt(r)?.unwrap_or_default())
}

/// Reads a symbol, returning `Ok(None)` for `Null`.
pub fn read_symbol_opt(r: &mut impl Read) -> Result<Option<Symbol>> {
    match read_variable_width(r, Code::Sym8, Code::Sym32, "symbol")? {
        Some(bytes) => Ok(Some(Symbol::new(String::from_utf8(bytes)?))),
        None => Ok(None),
    }
}

fn read_variable_width(
    r: &mut impl Read,
    small: Code,
    large: Code,
    context: &'static str,
) -> Result<Option<Vec<u8>>> {
    let code = Code::try_from(r.read_one()?)?;
    if code == Code::Null {
        return Ok(None);
    }
    let len = if code == small {
        r.read_one()? as usize
    } else if code == large {
        u32::from_be_bytes(r.read_const_bytes()?) as usize
    } else {
        return Err(Error::UnexpectedCode {
            context,
            code: code as u8,
        });
    };
    if len > r.remaining() {
        return Err(Error::InvalidLength);
    }
    Ok(Some(r.read_bytes(len)?))
}

/// Dynamically decodes the next value without knowing its type ahead of time.
///
/// Peeks one byte to determine the wire type, then dispatches. Floats, decimals, char,
/// UUID and the compound (list/map/array/described) codes are recognized but not
/// implemented.
pub fn read_any(r: &mut impl Read) -> Result<Option<Value>> {
    let peeked = r.peek_one()?;
    let code = Code::try_from(peeked)?;
    let value = match code {
        Code::Null => {
            r.read_one()?;
            return Ok(None);
        }
        Code::Boolean | Code::BooleanTrue | Code::BooleanFalse => {
            Value::Bool(read_bool(r)?.expect("code was checked to not be Null"))
        }
        Code::UByte
        | Code::UShort
        | Code::UInt
        | Code::SmallUint
        | Code::Uint0
        | Code::ULong
        | Code::SmallUlong
        | Code::Ulong0 => Value::Ulong(read_uint(r)?.expect("code was checked to not be Null")),
        Code::Byte | Code::Short | Code::Int | Code::SmallInt | Code::Long | Code::SmallLong => {
            Value::Long(read_int(r)?)
        }
        Code::VBin8 | Code::VBin32 => Value::Binary(read_binary(r)?),
        Code::Str8 | Code::Str32 => Value::String(read_string(r)?),
        Code::Sym8 | Code::Sym32 => Value::Symbol(read_symbol(r)?),
        Code::Timestamp => Value::Timestamp(read_timestamp(r)?),
        Code::Float | Code::Double | Code::Decimal32 | Code::Decimal64 | Code::Decimal128 => {
            return Err(Error::NotImplemented("floating point / decimal decoding"))
        }
        Code::Char => return Err(Error::NotImplemented("char decoding")),
        Code::Uuid => return Err(Error::NotImplemented("uuid decoding")),
        Code::List0
        | Code::List8
        | Code::List32
        | Code::Map8
        | Code::Map32
        | Code::Array8
        | Code::Array32
        | Code::DescribedType => return Err(Error::NotImplemented("dynamic decode of compound types")),
    };
    Ok(Some(value))
}
