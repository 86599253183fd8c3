//! Semantic wrapper types that route to their own wire encoding
//!
//! The scalar AMQP 1.0 types that map one-to-one onto a Rust primitive (`bool`, `u8`,
//! `i32`, ...) are used directly. The types in this module exist because their wire
//! encoding cannot be inferred from a bare Rust primitive alone: a `Symbol` must be
//! distinguished from a general `String`, and a `Timestamp` is a distinct type from a
//! plain `i64` even though both are 8 bytes on the wire.

mod symbol;
mod timestamp;

pub use symbol::Symbol;
pub use timestamp::Timestamp;

/// A binary blob, as decoded from `VBin8`/`VBin32`.
pub type Binary = Vec<u8>;
