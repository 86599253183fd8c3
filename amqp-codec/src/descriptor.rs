//! Composite descriptors
//!
//! A descriptor names which composite schema a described type's list body should be
//! read against. The wire permits two forms - a numeric code or a symbolic name - and a
//! decoder must accept either, even though this implementation only ever emits the
//! numeric form.

use std::convert::TryFrom;

use crate::de::{read_symbol, read_uint};
use crate::error::{Error, Result};
use crate::format_code::EncodingCodes as Code;
use crate::primitives::Symbol;
use crate::read::Read;
use crate::write::Write;

/// A composite's descriptor, as found on the wire: either its numeric code or its
/// symbolic name. Both identify the same schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// A symbolic descriptor, e.g. `amqp:open:list`.
    Name(Symbol),
    /// A numeric descriptor, e.g. `0x10` for `open`.
    Code(u64),
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Descriptor::Name(name) => write!(f, "{name}"),
            Descriptor::Code(code) => write!(f, "0x{code:02x}"),
        }
    }
}

impl Descriptor {
    /// Whether this descriptor identifies the composite named by `code`, whatever form
    /// it was written in.
    pub fn matches(&self, code: u64) -> bool {
        matches!(self, Descriptor::Code(c) if *c == code)
    }
}

/// Writes a descriptor as a small-ulong, the only form this implementation emits.
pub fn write_descriptor(w: &mut impl Write, code: u8) -> Result<()> {
    w.write_one(Code::SmallUlong as u8);
    w.write_one(code);
    Ok(())
}

/// Reads a descriptor, accepting either the numeric or symbolic wire form.
pub fn read_descriptor(r: &mut impl Read) -> Result<Descriptor> {
    let peeked = Code::try_from(r.peek_one()?)?;
    match peeked {
        Code::Sym8 | Code::Sym32 => Ok(Descriptor::Name(read_symbol(r)?)),
        _ => {
            let code = read_uint(r)?.ok_or_else(|| Error::custom("descriptor must not be null"))?;
            Ok(Descriptor::Code(code))
        }
    }
}
