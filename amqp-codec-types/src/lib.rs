//! Concrete AMQP 1.0 composite schemas: protocol performatives, message sections,
//! delivery states, and SASL frames, each wired to the described-type codec in
//! [`amqp_codec::composite`] via the [`composite_schema!`] macro.
//!
//! ```
//! use amqp_codec::dispatch::{marshal, unmarshal};
//! use amqp_codec::read::SliceReader;
//! use amqp_codec_types::performatives::Open;
//!
//! let open = Open::new("container-1");
//! let mut buf = Vec::new();
//! marshal(&mut buf, &open).unwrap();
//!
//! let mut r = SliceReader::new(&buf);
//! let decoded: Open = unmarshal(&mut r).unwrap();
//! assert_eq!(decoded.container_id, "container-1");
//! ```

#![warn(missing_docs)]

pub mod schema;

pub mod definitions;
pub mod delivery_state;
pub mod messaging;
pub mod performatives;
pub mod sasl;

pub use definitions::AmqpError;
pub use delivery_state::DeliveryState;
