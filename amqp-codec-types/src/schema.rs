//! `composite_schema!`: wires a plain, already-declared struct to the composite codec
//! from an ordered, policy-tagged field list.
//!
//! This is a statically-typed analogue of `#[derive(SerializeComposite,
//! DeserializeComposite)]` plus `#[amqp_contract(...)]` field attributes: instead of a
//! derive macro driven by runtime reflection over field attributes, each field's wire
//! policy is spelled out at the call site and expanded at compile time into direct
//! calls against [`amqp_codec::composite`].
//!
//! Every field is one of three shapes:
//!
//! - `name: Type = (required)` - the struct field holds the bare `Type`; a null or
//!   absent value on decode is [`amqp_codec::Error::RequiredFieldMissing`].
//! - `name: Type = (default, expr)` - the struct field holds the bare `Type`; a null or
//!   absent value decodes to `expr`.
//! - `name: Option<Type> = (optional)` - absent/null decodes to `None`.
//!
//! Field order is wire order; it must match the AMQP 1.0 type's positional field list
//! for the composite exactly, the same constraint `#[amqp_contract]` field order
//! carries.

#[doc(hidden)]
#[macro_export]
macro_rules! __field_decode_local {
    ($field:ident, $fty:ty, required) => {
        let mut $field: Option<$fty> = None;
    };
    ($field:ident, $fty:ty, default, $arg:expr) => {
        let mut $field: $fty = $arg;
    };
    ($field:ident, $fty:ty, optional) => {
        let mut $field: $fty = None;
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_sink {
    ($field:ident, $fty:ty, required) => {
        Box::new(|r| {
            $field = <Option<$fty> as ::amqp_codec::dispatch::Unmarshal>::unmarshal(r)?;
            Ok(())
        })
    };
    ($field:ident, $fty:ty, default, $arg:expr) => {
        Box::new(|r| {
            if let Some(v) = <Option<$fty> as ::amqp_codec::dispatch::Unmarshal>::unmarshal(r)? {
                $field = v;
            }
            Ok(())
        })
    };
    ($field:ident, $fty:ty, optional) => {
        Box::new(|r| {
            $field = <$fty as ::amqp_codec::dispatch::Unmarshal>::unmarshal(r)?;
            Ok(())
        })
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_finalize {
    ($field:ident, $fty:ty, required) => {
        $field.ok_or(::amqp_codec::Error::RequiredFieldMissing(stringify!($field)))?
    };
    ($field:ident, $fty:ty, default, $arg:expr) => {
        $field
    };
    ($field:ident, $fty:ty, optional) => {
        $field
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_marshal_entry {
    ($self:ident, $field:ident, $fty:ty, required) => {{
        let mut buf = ::amqp_codec::pool::acquire();
        ::amqp_codec::dispatch::Marshal::marshal(&$self.$field, &mut buf)?;
        Some(buf.into_vec())
    }};
    ($self:ident, $field:ident, $fty:ty, default, $arg:expr) => {{
        let mut buf = ::amqp_codec::pool::acquire();
        ::amqp_codec::dispatch::Marshal::marshal(&$self.$field, &mut buf)?;
        Some(buf.into_vec())
    }};
    ($self:ident, $field:ident, $fty:ty, optional) => {
        match &$self.$field {
            Some(v) => {
                let mut buf = ::amqp_codec::pool::acquire();
                ::amqp_codec::dispatch::Marshal::marshal(v, &mut buf)?;
                Some(buf.into_vec())
            }
            None => None,
        }
    };
}

/// Declares `Marshal`/`Unmarshal` for a list-bodied composite whose struct is already
/// defined elsewhere (kept separate from field codegen so every field can still carry
/// its own doc comment).
#[macro_export]
macro_rules! composite_schema {
    (
        struct $name:ident, code = $code:expr;
        $( $field:ident : $fty:ty = ( $policy:ident $(, $arg:expr)? ) ),* $(,)?
    ) => {
        impl ::amqp_codec::dispatch::Marshal for $name {
            fn marshal<W: ::amqp_codec::write::Write>(&self, w: &mut W) -> ::amqp_codec::Result<()> {
                #[allow(unused_mut)]
                let mut fields: Vec<Option<Vec<u8>>> = Vec::new();
                $(
                    fields.push($crate::__field_marshal_entry!(self, $field, $fty, $policy $(, $arg)?));
                )*
                ::amqp_codec::composite::write_composite(w, $code as u8, &fields)
            }
        }

        impl ::amqp_codec::dispatch::Unmarshal for $name {
            fn unmarshal<R: ::amqp_codec::read::Read>(r: &mut R) -> ::amqp_codec::Result<Self> {
                let header = ::amqp_codec::composite::read_composite_header(r)?
                    .ok_or_else(|| ::amqp_codec::Error::RequiredFieldMissing(stringify!($name)))?;

                let declared_len: usize = {
                    let names: &[&str] = &[ $( stringify!($field) ),* ];
                    names.len()
                };
                ::amqp_codec::composite::check_composite_header(&header, $code, declared_len)?;

                $(
                    $crate::__field_decode_local!($field, $fty, $policy $(, $arg)?);
                )*

                {
                    #[allow(unused_mut)]
                    let mut sinks: Vec<Box<dyn FnMut(&mut R) -> ::amqp_codec::Result<()> + '_>> = vec![
                        $( $crate::__field_sink!($field, $fty, $policy $(, $arg)?) ),*
                    ];
                    ::amqp_codec::composite::decode_fields(r, header.field_count, &mut sinks)?;
                }

                Ok($name {
                    $( $field: $crate::__field_finalize!($field, $fty, $policy $(, $arg)?), )*
                })
            }
        }
    };
}
