// Copyright 2019 TiKV Project Authors. Licensed under Apache-2.0.

//! Per-field building blocks shared by the hand-written message codecs.

use log::trace;

use super::{
    varint::{decode_varint, encode_varint, sizeof_varint},
    wire::{advance, decode_length, encode_key, key_len, skip_field, WireType},
    DecodeContext, Message,
};
use crate::{internal_err, Error, Result};

/// A decoded tag whose field number is positive and whose wire type is not end-group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldKey {
    pub field_number: u32,
    pub wire_type: u8,
}

impl FieldKey {
    /// Checks that a known field arrived with the wire type the schema declares for it.
    pub fn expect(&self, wire_type: WireType, field: &'static str) -> Result<()> {
        if self.wire_type == wire_type as u8 {
            Ok(())
        } else {
            Err(Error::WireTypeMismatch {
                field,
                wire_type: self.wire_type,
            })
        }
    }
}

/// Reads the tag of the field starting at `buf[offset]`; `message` names the enclosing message
/// in errors.
///
/// The field number is the low 32 bits of `key >> 3` read as a signed integer. Only zero and
/// negative numbers are illegal; anything above the schema's fields is left to the caller to keep
/// as an unknown field.
pub fn decode_key(buf: &[u8], offset: usize, message: &'static str) -> Result<(FieldKey, usize)> {
    let (key, offset) = decode_varint(buf, offset)?;
    let wire_type = (key & 0x7) as u8;
    if wire_type == WireType::EndGroup as u8 {
        return Err(Error::WireTypeEndGroup { message });
    }
    let field_number = (key >> 3) as i32;
    if field_number <= 0 {
        return Err(Error::IllegalTag {
            message,
            field_number: key >> 3,
            wire_type,
        });
    }
    Ok((
        FieldKey {
            field_number: field_number as u32,
            wire_type,
        },
        offset,
    ))
}

#[inline]
pub fn varint_len(field_number: u32, value: u64) -> usize {
    key_len(field_number) + sizeof_varint(value)
}

#[inline]
pub fn bytes_len(field_number: u32, len: usize) -> usize {
    key_len(field_number) + sizeof_varint(len as u64) + len
}

#[inline]
pub fn message_len<M: Message>(field_number: u32, msg: &M) -> usize {
    bytes_len(field_number, msg.size())
}

pub fn check_capacity(required: usize, buf: &[u8]) -> Result<()> {
    if buf.len() < required {
        return Err(Error::BufferTooSmall {
            required,
            remaining: buf.len(),
        });
    }
    Ok(())
}

#[inline]
pub fn encode_varint_field(field_number: u32, value: u64, buf: &mut [u8], offset: usize) -> usize {
    let offset = encode_key(buf, offset, field_number, WireType::Varint);
    encode_varint(buf, offset, value)
}

#[inline]
pub fn encode_bytes(field_number: u32, value: &[u8], buf: &mut [u8], offset: usize) -> usize {
    let offset = encode_key(buf, offset, field_number, WireType::LengthDelimited);
    let offset = encode_varint(buf, offset, value.len() as u64);
    encode_raw(value, buf, offset)
}

#[inline]
pub fn encode_raw(value: &[u8], buf: &mut [u8], offset: usize) -> usize {
    let end = offset + value.len();
    buf[offset..end].copy_from_slice(value);
    end
}

/// Writes `msg` as an embedded message.
///
/// The child must write exactly `msg.size()` bytes; anything else means its size and encode
/// logic disagree, and the whole encode fails.
pub fn encode_message<M: Message>(
    field_number: u32,
    msg: &M,
    buf: &mut [u8],
    offset: usize,
) -> Result<usize> {
    let len = msg.size();
    let offset = encode_key(buf, offset, field_number, WireType::LengthDelimited);
    let offset = encode_varint(buf, offset, len as u64);
    let end = offset + len;
    check_capacity(end, buf)?;
    let written = msg.marshal_into(&mut buf[offset..end])?;
    if written != len {
        return Err(internal_err!(
            "{} wrote {} bytes but reported a size of {}",
            std::any::type_name::<M>(),
            written,
            len
        ));
    }
    Ok(end)
}

/// Reads a length-delimited value, returning its content and the offset just past it.
pub fn decode_bytes(buf: &[u8], offset: usize) -> Result<(&[u8], usize)> {
    let (len, offset) = decode_length(buf, offset)?;
    let end = advance(buf, offset, len)?;
    Ok((&buf[offset..end], end))
}

pub fn decode_int64(buf: &[u8], offset: usize) -> Result<(i64, usize)> {
    let (value, offset) = decode_varint(buf, offset)?;
    Ok((value as i64, offset))
}

/// Replaces `dst` with the length-delimited value at `buf[offset]`, reusing its allocation.
pub fn merge_bytes(dst: &mut Vec<u8>, buf: &[u8], offset: usize) -> Result<usize> {
    let (value, offset) = decode_bytes(buf, offset)?;
    dst.clear();
    dst.extend_from_slice(value);
    Ok(offset)
}

pub fn merge_string(
    dst: &mut String,
    field: &'static str,
    buf: &[u8],
    offset: usize,
) -> Result<usize> {
    let (value, offset) = decode_bytes(buf, offset)?;
    let value = std::str::from_utf8(value).map_err(|_| Error::InvalidUtf8 { field })?;
    dst.clear();
    dst.push_str(value);
    Ok(offset)
}

/// Decodes the embedded message at `buf[offset]` into `msg`, merging with what it already holds.
pub fn merge_message<M: Message>(
    msg: &mut M,
    buf: &[u8],
    offset: usize,
    ctx: DecodeContext,
) -> Result<usize> {
    let ctx = ctx.enter_nested()?;
    let (value, offset) = decode_bytes(buf, offset)?;
    msg.merge_with_context(value, ctx)?;
    Ok(offset)
}

/// Skips the unrecognised field starting at `buf[field_start]` (its tag included) and keeps its
/// raw bytes in `unknown_fields` unless the context discards them.
pub fn skip_unknown(
    buf: &[u8],
    field_start: usize,
    key: FieldKey,
    ctx: DecodeContext,
    unknown_fields: &mut Vec<u8>,
) -> Result<usize> {
    let end = skip_field(buf, field_start, ctx.depth_remaining())?;
    if ctx.discards_unknown_fields() {
        trace!(
            "discarding unknown field {} (wire type {})",
            key.field_number,
            key.wire_type
        );
    } else {
        trace!(
            "preserving unknown field {} (wire type {}, {} bytes)",
            key.field_number,
            key.wire_type,
            end - field_start
        );
        unknown_fields.extend_from_slice(&buf[field_start..end]);
    }
    Ok(end)
}
