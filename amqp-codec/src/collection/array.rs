//! Homogeneous arrays of symbols
//!
//! `Array<Symbol>` is the only array element type this implementation's consumers
//! actually need (offered/desired capabilities, outcomes, IETF language tags - see
//! `amqp-codec-types`), so this module specializes in it rather than building out a
//! fully generic `Array<T>` machinery the schema library would never exercise.

use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::format_code::EncodingCodes as Code;
use crate::primitives::Symbol;
use crate::read::Read;
use crate::write::Write;

use super::{read_compound_header, write_compound_header};

/// Reads an array of symbols: a header, a single element-type code, then that many
/// symbol payloads (each omitting its own type code).
///
/// Returns `Ok(None)` for `Null`.
pub fn read_symbol_array(r: &mut impl Read) -> Result<Option<Vec<Symbol>>> {
    let header = match read_compound_header(r, "symbol array", Code::Array8, Code::Array32, false)? {
        Some(h) => h,
        None => return Ok(None),
    };

    let element_code = Code::try_from(r.read_one()?)?;
    if element_code != Code::Sym8 && element_code != Code::Sym32 {
        return Err(Error::UnexpectedCode {
            context: "symbol array element",
            code: element_code as u8,
        });
    }

    let mut symbols = Vec::with_capacity(header.count);
    for _ in 0..header.count {
        let len = match element_code {
            Code::Sym8 => r.read_one()? as usize,
            _ => u32::from_be_bytes(r.read_const_bytes()?) as usize,
        };
        if len > r.remaining() {
            return Err(Error::InvalidLength);
        }
        let bytes = r.read_bytes(len)?;
        symbols.push(Symbol::new(String::from_utf8(bytes)?));
    }
    Ok(Some(symbols))
}

/// Writes an array of symbols, choosing `Sym8` as the element code unless any symbol's
/// length exceeds 255, in which case `Sym32` is used for every element.
pub fn write_symbol_array(w: &mut impl Write, symbols: &[Symbol]) -> Result<()> {
    if symbols.is_empty() {
        return Err(Error::custom("arrays must not be empty"));
    }

    let use_sym32 = symbols.iter().any(|s| s.as_str().len() > 255);
    let element_code = if use_sym32 { Code::Sym32 } else { Code::Sym8 };

    let mut encoded = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let bytes = symbol.as_str().as_bytes();
        let mut blob = Vec::with_capacity(bytes.len() + 4);
        if use_sym32 {
            let len: u32 = bytes.len().try_into().map_err(|_| Error::TooLong)?;
            blob.extend_from_slice(&len.to_be_bytes());
        } else {
            blob.push(bytes.len() as u8);
        }
        blob.extend_from_slice(bytes);
        encoded.push(blob);
    }

    let payload_len: usize = encoded.iter().map(Vec::len).sum::<usize>() + 1; // + element type code
    write_compound_header(w, Code::Array8, Code::Array32, symbols.len(), payload_len)?;
    w.write_one(element_code as u8);
    for blob in encoded {
        w.write_slice(&blob);
    }
    Ok(())
}
