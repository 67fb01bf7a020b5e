// Copyright 2019 TiKV Project Authors. Licensed under Apache-2.0.

//! Base-128 varints: seven bits per byte, least significant group first, with the high bit
//! set on every byte except the last.

use crate::{Error, Result};

/// The longest encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

/// Writes `value` at `buf[offset..]` and returns the offset just past it.
///
/// The caller guarantees that `buf` has room for [`sizeof_varint(value)`](sizeof_varint) bytes.
#[inline]
pub fn encode_varint(buf: &mut [u8], mut offset: usize, mut value: u64) -> usize {
    while value >= 0x80 {
        buf[offset] = (value as u8 & 0x7f) | 0x80;
        value >>= 7;
        offset += 1;
    }
    buf[offset] = value as u8;
    offset + 1
}

/// Returns the number of bytes [`encode_varint`] writes for `value`.
#[inline]
pub fn sizeof_varint(mut value: u64) -> usize {
    let mut n = 1;
    while value >= 0x80 {
        value >>= 7;
        n += 1;
    }
    n
}

/// Reads a varint starting at `buf[offset]`, returning the value and the offset just past it.
///
/// Bits beyond the 64th carried by a tenth byte are dropped; an eleventh byte is an
/// [`Error::IntOverflow`].
#[inline]
pub fn decode_varint(buf: &[u8], mut offset: usize) -> Result<(u64, usize)> {
    let mut value = 0u64;
    let mut shift = 0u32;
    loop {
        if shift >= 64 {
            return Err(Error::IntOverflow);
        }
        let byte = *buf.get(offset).ok_or(Error::UnexpectedEof)?;
        offset += 1;
        value |= u64::from(byte & 0x7f) << shift;
        if byte < 0x80 {
            return Ok((value, offset));
        }
        shift += 7;
    }
}
