// Copyright 2018 TiKV Project Authors. Licensed under Apache-2.0.

//! Wire codec for the MPP processor request/response schema.
//!
//! An MPP (massively parallel processing) processor receives a [`Request`] describing a unit of
//! work over a list of [`KeyRange`]s and answers with a [`Response`]. This crate sizes, encodes
//! and decodes those messages in the protocol-buffers wire format, byte-compatible with any other
//! proto3 implementation of the same schema.
//!
//! The messages embedded from other schemas (`kvrpcpb::Context`, `errorpb::Error`, ...) live in
//! [`proto`] and are encoded by prost; everything is reached through the [`Message`] trait.
//!
//! ```rust
//! # use mpp_processor::{KeyRange, Message, Request};
//! let req = Request {
//!     tp: 104,
//!     ranges: vec![KeyRange::new(b"a".to_vec(), b"z".to_vec())],
//!     ..Default::default()
//! };
//! let encoded = req.marshal()?;
//! assert_eq!(encoded.len(), req.size());
//! assert_eq!(Request::unmarshal(&encoded)?, req);
//! # Ok::<(), mpp_processor::Error>(())
//! ```
//!
//! Fields unknown to this version are kept and written back unchanged, unless decoding with a
//! [`Config`] that discards them:
//!
//! ```rust
//! # use mpp_processor::{Config, KeyRange, Message};
//! // start = [0x01], then field 99 (varint 5)
//! let buf = [0x0a, 0x01, 0x01, 0x98, 0x06, 0x05];
//! let range = KeyRange::unmarshal(&buf)?;
//! assert_eq!(range.marshal()?, buf.to_vec());
//!
//! let config = Config::new().discard_unknown_fields(true);
//! let range = KeyRange::unmarshal_with_config(&buf, &config)?;
//! assert!(range.unknown_fields.is_empty());
//! # Ok::<(), mpp_processor::Error>(())
//! ```

pub mod codec;
mod config;
mod errors;
pub mod mpp_processor;
pub mod proto;
mod shared_bytes;

#[cfg(test)]
mod proptests;

#[doc(inline)]
pub use crate::codec::Message;
#[doc(inline)]
pub use crate::config::Config;
#[doc(inline)]
pub use crate::errors::{Error, Result};
#[doc(inline)]
pub use crate::mpp_processor::{KeyRange, Request, Response};
#[doc(inline)]
pub use crate::shared_bytes::SharedBytes;
