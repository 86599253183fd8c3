//! The dynamic `Value` type used when the concrete wire type is not known at the call site

use crate::primitives::{Binary, Symbol, Timestamp};

/// A heterogeneous AMQP value, as produced by [`crate::de::read_any`].
///
/// Only the wire types that `read_any` actually implements are represented here. Floats,
/// decimals, char, UUID and the compound types are deliberately absent: the dynamic
/// decoder returns [`crate::error::Error::NotImplemented`] for those codes rather than
/// silently losing precision or forcing every caller to handle a variant that can never
/// be constructed anyway.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// The `Null` code.
    Null,
    /// `Boolean`/`BooleanTrue`/`BooleanFalse`.
    Bool(bool),
    /// Any member of the unsigned integer family, widened to 64 bits.
    Ulong(u64),
    /// Any member of the signed integer family, widened to 64 bits.
    Long(i64),
    /// `VBin8`/`VBin32`.
    Binary(Binary),
    /// `Str8`/`Str32`.
    String(String),
    /// `Sym8`/`Sym32`.
    Symbol(Symbol),
    /// `Timestamp`.
    Timestamp(Timestamp),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Ulong(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Symbol> for Value {
    fn from(v: Symbol) -> Self {
        Value::Symbol(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}

/// A map keyed and valued by dynamic [`Value`]s, as used by `attach`'s `unsettled` map
/// and similar "any key, any value" wire maps.
pub type MapAnyAny = indexmap::IndexMap<Value, Value>;

/// A map from `string` keys to dynamic [`Value`]s.
pub type MapStringAny = indexmap::IndexMap<String, Value>;

/// A map from `symbol` keys to dynamic [`Value`]s, used for `fields` (e.g. connection and
/// link `properties`).
pub type MapSymbolAny = indexmap::IndexMap<Symbol, Value>;
