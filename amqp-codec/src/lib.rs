//! Type-tagged binary codec for the AMQP 1.0 wire format.
//!
//! This crate implements only the codec: primitives, collections, and described
//! composites (§3-4 of the wire format). It knows nothing about connections, sessions,
//! links, or the SASL handshake - those live above it in a transport crate. The concrete
//! composite schemas for AMQP's own performatives, message sections, and SASL frames live
//! in the sibling `amqp-codec-types` crate, which is built entirely on the primitives
//! exported here.
//!
//! ```
//! use amqp_codec::{de, ser};
//!
//! let mut buf = Vec::new();
//! ser::write_uint(&mut buf, 42);
//! let mut reader = amqp_codec::read::SliceReader::new(&buf);
//! assert_eq!(de::read_uint(&mut reader).unwrap(), Some(42));
//! ```

#![warn(missing_docs)]

pub mod bounded;
pub mod collection;
pub mod composite;
pub mod de;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub(crate) mod fixed_width;
pub mod format_code;
pub mod pool;
pub mod primitives;
pub mod read;
pub mod ser;
pub mod value;
pub mod write;

pub use error::{Error, Result};
