//! Top-level `marshal`/`unmarshal` entry points
//!
//! Routes by the *static* Rust type of the destination/source rather than a runtime tag,
//! which is the idiomatic substitute for the source's reflection-based dispatch: the
//! compiler picks the branch at the call site instead of a type switch at runtime. Most
//! composite field decoding goes through the sink closures in [`crate::composite`]
//! directly, since each field's null/default policy is schema-specific; this module is
//! the crate's generic, public entry point for the scalar and "any" cases in §4.4.

use indexmap::IndexMap;

use crate::collection::{read_map_header, read_symbol_array, write_map, write_symbol_array};
use crate::de::{read_any, read_binary, read_bool, read_int, read_string, read_symbol, read_timestamp, read_uint};
use crate::error::{Error, Result};
use crate::primitives::{Symbol, Timestamp};
use crate::read::Read;
use crate::ser::{
    write_binary, write_bool, write_byte, write_int, write_long, write_short, write_string, write_symbol,
    write_timestamp, write_ubyte, write_uint, write_ulong, write_ushort,
};
use crate::value::{MapStringAny, Value};
use crate::write::Write;

/// A type that can be decoded directly from the wire (the "static kind of sink" rows of
/// §4.4 that are not themselves composites).
pub trait Unmarshal: Sized {
    /// Decodes a value of this type. Implementations that have no concept of `Null`
    /// (e.g. `i64`) treat it as [`Error::RequiredFieldMissing`]; wrap the destination in
    /// `Option<T>` to accept `Null` as `None` instead.
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self>;
}

/// A type that can be encoded directly to the wire.
pub trait Marshal {
    /// Encodes `self`.
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()>;
}

/// Decodes a `T` from `r`, the crate's generic decode entry point.
pub fn unmarshal<T: Unmarshal, R: Read>(r: &mut R) -> Result<T> {
    T::unmarshal(r)
}

/// Encodes `value` to `w`, the crate's generic encode entry point.
pub fn marshal<T: Marshal, W: Write>(w: &mut W, value: &T) -> Result<()> {
    value.marshal(w)
}

macro_rules! unsigned_unmarshal {
    ($ty:ty, $name:literal) => {
        impl Unmarshal for $ty {
            fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
                read_uint(r)?
                    .ok_or(Error::RequiredFieldMissing($name))?
                    .try_into()
                    .map_err(|_| Error::custom(concat!($name, " out of range")))
            }
        }
    };
}

unsigned_unmarshal!(u8, "ubyte");
unsigned_unmarshal!(u16, "ushort");
unsigned_unmarshal!(u32, "uint");
unsigned_unmarshal!(u64, "ulong");

macro_rules! signed_unmarshal {
    ($ty:ty, $name:literal) => {
        impl Unmarshal for $ty {
            fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
                read_int(r)?
                    .try_into()
                    .map_err(|_| Error::custom(concat!($name, " out of range")))
            }
        }
    };
}

signed_unmarshal!(i8, "byte");
signed_unmarshal!(i16, "short");
signed_unmarshal!(i32, "int");
signed_unmarshal!(i64, "long");

impl Unmarshal for bool {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_bool(r)?.ok_or(Error::RequiredFieldMissing("boolean"))
    }
}

impl Unmarshal for String {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_string(r)
    }
}

impl Unmarshal for Symbol {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_symbol(r)
    }
}

impl Unmarshal for Vec<u8> {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_binary(r)
    }
}

impl Unmarshal for Timestamp {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_timestamp(r)
    }
}

impl Unmarshal for Vec<Symbol> {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        read_symbol_array(r)?.ok_or(Error::RequiredFieldMissing("symbol array"))
    }
}

impl Unmarshal for Value {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        Ok(read_any(r)?.unwrap_or(Value::Null))
    }
}

/// Pointer-to-pointer semantics: a `Null` on the wire decodes to `None` rather than
/// allocating; any other value decodes to `Some` by recursing on `T`.
impl<T: Unmarshal> Unmarshal for Option<T> {
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        if r.peek_one()? == crate::format_code::EncodingCodes::Null as u8 {
            r.read_one()?;
            return Ok(None);
        }
        Ok(Some(T::unmarshal(r)?))
    }
}

/// Decodes any symbol/string/ulong-keyed, arbitrarily-valued map, not just the three
/// fixed shapes §4.4 calls out by name (`MapAnyAny`/`MapStringAny`/`MapSymbolAny`):
/// `IndexMap<K, V>` is foreign, but `Unmarshal` is local, so the blanket impl is sound
/// under the orphan rule. This also covers schema-specific maps such as `unsettled`'s
/// `IndexMap<DeliveryTag, DeliveryState>` without a fourth hardcoded impl.
impl<K, V> Unmarshal for IndexMap<K, V>
where
    K: Unmarshal + std::hash::Hash + Eq,
    V: Unmarshal,
{
    fn unmarshal<R: Read>(r: &mut R) -> Result<Self> {
        unmarshal_map(r, K::unmarshal, V::unmarshal)
    }
}

fn unmarshal_map<R: Read, K, V>(
    r: &mut R,
    mut key: impl FnMut(&mut crate::bounded::BoundedReader<'_, R>) -> Result<K>,
    mut value: impl FnMut(&mut crate::bounded::BoundedReader<'_, R>) -> Result<V>,
) -> Result<IndexMap<K, V>>
where
    K: std::hash::Hash + Eq,
{
    let mut map = IndexMap::new();
    let Some(mut reader) = read_map_header(r)? else {
        return Ok(map);
    };
    while reader.more() {
        let (k, v) = reader.next(&mut key, &mut value)?;
        map.insert(k, v);
    }
    Ok(map)
}

macro_rules! unsigned_marshal {
    ($ty:ty, $write:expr) => {
        impl Marshal for $ty {
            fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
                $write(w, (*self).into());
                Ok(())
            }
        }
    };
}

impl Marshal for u8 {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_ubyte(w, *self);
        Ok(())
    }
}
impl Marshal for u16 {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_ushort(w, *self);
        Ok(())
    }
}
unsigned_marshal!(u32, write_uint);
unsigned_marshal!(u64, write_ulong);

impl Marshal for i8 {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_byte(w, *self);
        Ok(())
    }
}
impl Marshal for i16 {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_short(w, *self);
        Ok(())
    }
}
impl Marshal for i32 {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_int(w, *self);
        Ok(())
    }
}
impl Marshal for i64 {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_long(w, *self);
        Ok(())
    }
}

impl Marshal for bool {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_bool(w, *self);
        Ok(())
    }
}

impl Marshal for String {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_string(w, self)
    }
}

impl Marshal for Symbol {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_symbol(w, self)
    }
}

impl Marshal for Vec<u8> {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_binary(w, self)
    }
}

impl Marshal for Timestamp {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_timestamp(w, *self);
        Ok(())
    }
}

impl Marshal for Vec<Symbol> {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        write_symbol_array(w, self)
    }
}

impl<T: Marshal> Marshal for Option<T> {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        match self {
            Some(value) => value.marshal(w),
            None => {
                crate::ser::write_null(w);
                Ok(())
            }
        }
    }
}

/// Encodes a map whose keys/values are already-encoded byte blobs produced by the
/// caller's own [`Marshal`] calls. Exposed because `IndexMap<K, V>` cannot itself borrow
/// a reader/writer pair the way [`Marshal`]/[`Unmarshal`] expect.
pub fn marshal_map<W: Write, K: Marshal, V: Marshal>(w: &mut W, map: &IndexMap<K, V>) -> Result<()> {
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let mut key_buf = Vec::new();
        key.marshal(&mut key_buf)?;
        let mut value_buf = Vec::new();
        value.marshal(&mut value_buf)?;
        pairs.push((key_buf, value_buf));
    }
    write_map(w, &pairs)
}

impl Marshal for Value {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        match self {
            Value::Null => {
                crate::ser::write_null(w);
                Ok(())
            }
            Value::Bool(v) => v.marshal(w),
            Value::Ulong(v) => v.marshal(w),
            Value::Long(v) => v.marshal(w),
            Value::Binary(v) => v.marshal(w),
            Value::String(v) => v.marshal(w),
            Value::Symbol(v) => v.marshal(w),
            Value::Timestamp(v) => v.marshal(w),
        }
    }
}

impl<K: Marshal, V: Marshal> Marshal for IndexMap<K, V> {
    fn marshal<W: Write>(&self, w: &mut W) -> Result<()> {
        marshal_map(w, self)
    }
}
