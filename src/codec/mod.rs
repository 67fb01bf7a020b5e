// Copyright 2019 TiKV Project Authors. Licensed under Apache-2.0.

//! The protocol-buffers wire codec.
//!
//! Every message, whether hand-coded in [`mpp_processor`](crate::mpp_processor) or generated by
//! prost in [`proto`](crate::proto), is reached through the [`Message`] trait, so a container
//! never needs to know the shape of what it embeds.

use std::fmt;

use log::debug;

use crate::{config::Config, internal_err, Error, Result};

pub mod field;
pub mod varint;
pub mod wire;

pub use varint::{decode_varint, encode_varint, sizeof_varint, MAX_VARINT_LEN};
pub use wire::{decode_length, skip, WireType, MAX_FIELD_NUMBER};

/// Decode state threaded through nested messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeContext {
    depth_remaining: u32,
    discard_unknown_fields: bool,
}

impl DecodeContext {
    pub fn new(config: &Config) -> Self {
        DecodeContext {
            depth_remaining: config.recursion_limit,
            discard_unknown_fields: config.discard_unknown_fields,
        }
    }

    /// The context for a message embedded one level deeper.
    pub fn enter_nested(self) -> Result<Self> {
        if self.depth_remaining == 0 {
            return Err(Error::RecursionLimitReached);
        }
        Ok(DecodeContext {
            depth_remaining: self.depth_remaining - 1,
            ..self
        })
    }

    pub fn depth_remaining(&self) -> u32 {
        self.depth_remaining
    }

    pub fn discards_unknown_fields(&self) -> bool {
        self.discard_unknown_fields
    }
}

impl Default for DecodeContext {
    fn default() -> Self {
        DecodeContext::new(&Config::default())
    }
}

/// A message that can be sized, encoded and decoded in the protobuf wire format.
pub trait Message: Default + fmt::Debug + Send + Sync {
    /// The exact number of bytes [`marshal_into`](Message::marshal_into) writes.
    fn size(&self) -> usize;

    /// Encodes the message into the front of `buf` and returns the number of bytes written.
    ///
    /// `buf` must hold at least [`size`](Message::size) bytes.
    fn marshal_into(&self, buf: &mut [u8]) -> Result<usize>;

    /// Decodes `buf` into `self`, merging with the fields already present.
    ///
    /// On error `self` may be left partially updated.
    fn merge_with_context(&mut self, buf: &[u8], ctx: DecodeContext) -> Result<()>;

    /// Drops the unknown fields kept by this message and by the messages it embeds.
    fn discard_unknown(&mut self) {}

    /// Resets every field to its default value.
    fn clear(&mut self) {
        *self = Self::default();
    }

    fn marshal(&self) -> Result<Vec<u8>> {
        let size = self.size();
        let mut buf = vec![0; size];
        let written = self.marshal_into(&mut buf)?;
        if written != size {
            return Err(internal_err!(
                "{} wrote {} bytes but reported a size of {}",
                std::any::type_name::<Self>(),
                written,
                size
            ));
        }
        Ok(buf)
    }

    fn merge(&mut self, buf: &[u8]) -> Result<()> {
        self.merge_with_context(buf, DecodeContext::default())
            .map_err(log_decode_error::<Self>)
    }

    fn unmarshal(buf: &[u8]) -> Result<Self> {
        Self::unmarshal_with_config(buf, &Config::default())
    }

    fn unmarshal_with_config(buf: &[u8], config: &Config) -> Result<Self> {
        let mut msg = Self::default();
        msg.merge_with_context(buf, DecodeContext::new(config))
            .map_err(log_decode_error::<Self>)?;
        Ok(msg)
    }
}

fn log_decode_error<M>(e: Error) -> Error {
    debug!("failed to decode {}: {}", std::any::type_name::<M>(), e);
    e
}

/// Implements [`Message`] for prost-generated types.
///
/// prost keeps no unknown fields and enforces its own recursion limit, so the decode context is
/// not forwarded.
#[macro_export]
macro_rules! impl_message_for_prost {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Message for $ty {
                fn size(&self) -> usize {
                    ::prost::Message::encoded_len(self)
                }

                fn marshal_into(&self, buf: &mut [u8]) -> $crate::Result<usize> {
                    let len = ::prost::Message::encoded_len(self);
                    let mut dst = buf;
                    ::prost::Message::encode(self, &mut dst)?;
                    Ok(len)
                }

                fn merge_with_context(
                    &mut self,
                    buf: &[u8],
                    _ctx: $crate::codec::DecodeContext,
                ) -> $crate::Result<()> {
                    ::prost::Message::merge(self, buf)?;
                    Ok(())
                }

                fn clear(&mut self) {
                    ::prost::Message::clear(self)
                }
            }
        )*
    };
}
