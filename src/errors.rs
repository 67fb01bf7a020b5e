// Copyright 2018 TiKV Project Authors. Licensed under Apache-2.0.

use std::result;
use thiserror::Error;

/// An error raised while encoding or decoding MPP processor messages.
#[derive(Debug, Error)]
pub enum Error {
    /// A varint ran past 10 bytes without terminating.
    #[error("proto: integer overflow")]
    IntOverflow,
    /// The input ended before a tag, length-prefixed or fixed-width value was complete.
    #[error("unexpected EOF")]
    UnexpectedEof,
    /// A length prefix was negative or does not fit the platform's address space.
    #[error("proto: negative length found during unmarshaling")]
    InvalidLength,
    /// A top-level tag used the deprecated end-group wire type.
    #[error("proto: {message}: wiretype end group for non-group")]
    WireTypeEndGroup { message: &'static str },
    /// The tag's field number is zero or out of range.
    #[error("proto: {message}: illegal tag {field_number} (wire type {wire_type})")]
    IllegalTag {
        message: &'static str,
        field_number: u64,
        wire_type: u8,
    },
    /// A known field arrived with a wire type other than the one the schema declares.
    #[error("proto: wrong wireType = {wire_type} for field {field}")]
    WireTypeMismatch { field: &'static str, wire_type: u8 },
    /// The skip routine met a wire type outside 0..=5.
    #[error("proto: illegal wireType {0}")]
    IllegalWireType(u8),
    /// Embedded messages or groups are nested deeper than the configured limit.
    #[error("proto: recursion limit reached")]
    RecursionLimitReached,
    /// A string field holds bytes that are not valid UTF-8.
    #[error("proto: invalid UTF-8 data in field {field}")]
    InvalidUtf8 { field: &'static str },
    /// The destination buffer cannot hold the encoded message.
    #[error("buffer too small: need {required} bytes, {remaining} available")]
    BufferTooSmall { required: usize, remaining: usize },
    /// Wraps a `prost::DecodeError` raised by a collaborator message.
    #[error("prost decode error: {0}")]
    Decode(#[from] prost::DecodeError),
    /// Wraps a `prost::EncodeError` raised by a collaborator message.
    #[error("prost encode error: {0}")]
    Encode(#[from] prost::EncodeError),
    #[error("{}", message)]
    InternalError { message: String },
}

/// A result holding an [`Error`](enum@Error).
pub type Result<T> = result::Result<T, Error>;

#[macro_export]
macro_rules! internal_err {
    ($e:expr) => ({
        $crate::Error::InternalError {
            message: format!("[{}:{}]: {}", file!(), line!(),  $e)
        }
    });
    ($f:tt, $($arg:expr),+) => ({
        internal_err!(format!($f, $($arg),+))
    });
}
