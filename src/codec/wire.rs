// Copyright 2019 TiKV Project Authors. Licensed under Apache-2.0.

use super::varint::{decode_varint, encode_varint, sizeof_varint};
use crate::{config::Config, Error, Result};

/// The largest field number a schema may declare.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// The low three bits of a field tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl TryFrom<u64> for WireType {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        match value {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            3 => Ok(WireType::StartGroup),
            4 => Ok(WireType::EndGroup),
            5 => Ok(WireType::Fixed32),
            _ => Err(Error::IllegalWireType(value as u8)),
        }
    }
}

/// Writes the tag for `field_number` and returns the offset just past it.
#[inline]
pub fn encode_key(buf: &mut [u8], offset: usize, field_number: u32, wire_type: WireType) -> usize {
    encode_varint(buf, offset, tag(field_number, wire_type))
}

/// Encoded length of the tag for `field_number`; the wire type never changes it.
#[inline]
pub fn key_len(field_number: u32) -> usize {
    sizeof_varint(tag(field_number, WireType::Varint))
}

#[inline]
fn tag(field_number: u32, wire_type: WireType) -> u64 {
    (u64::from(field_number) << 3) | wire_type as u64
}

/// Reads a length prefix at `buf[offset]`.
///
/// A prefix that would be negative as a signed 64-bit integer, or does not fit in `usize`, is an
/// [`Error::InvalidLength`]. Whether the content is actually present is left to the caller.
pub fn decode_length(buf: &[u8], offset: usize) -> Result<(usize, usize)> {
    let (len, offset) = decode_varint(buf, offset)?;
    if len > i64::MAX as u64 {
        return Err(Error::InvalidLength);
    }
    let len = usize::try_from(len).map_err(|_| Error::InvalidLength)?;
    Ok((len, offset))
}

/// Returns `offset + n` if that many bytes remain in `buf`.
#[inline]
pub(crate) fn advance(buf: &[u8], offset: usize, n: usize) -> Result<usize> {
    offset
        .checked_add(n)
        .filter(|end| *end <= buf.len())
        .ok_or(Error::UnexpectedEof)
}

/// Skips the whole field (tag and value) that starts at `buf[offset]` and returns the offset of
/// the next field.
///
/// Groups are skipped recursively up to the default recursion limit.
pub fn skip(buf: &[u8], offset: usize) -> Result<usize> {
    skip_field(buf, offset, Config::default().recursion_limit)
}

pub(crate) fn skip_field(buf: &[u8], offset: usize, depth_remaining: u32) -> Result<usize> {
    let (key, mut offset) = decode_varint(buf, offset)?;
    match WireType::try_from(key & 0x7)? {
        WireType::Varint => {
            let (_, offset) = decode_varint(buf, offset)?;
            Ok(offset)
        }
        WireType::Fixed64 => advance(buf, offset, 8),
        WireType::LengthDelimited => {
            let (len, offset) = decode_length(buf, offset)?;
            advance(buf, offset, len)
        }
        WireType::StartGroup => {
            if depth_remaining == 0 {
                return Err(Error::RecursionLimitReached);
            }
            loop {
                let (inner, after_key) = decode_varint(buf, offset)?;
                if inner & 0x7 == WireType::EndGroup as u64 {
                    return Ok(after_key);
                }
                offset = skip_field(buf, offset, depth_remaining - 1)?;
            }
        }
        // Only reachable inside a group; the tag is all there is.
        WireType::EndGroup => Ok(offset),
        WireType::Fixed32 => advance(buf, offset, 4),
    }
}
