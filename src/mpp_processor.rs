// Copyright 2019 TiKV Project Authors. Licensed under Apache-2.0.

//! Request and response messages exchanged with an MPP processor.
//!
//! | Message    | Field            | Number | Encoding                         |
//! |------------|------------------|--------|----------------------------------|
//! | `KeyRange` | `start`          | 1      | bytes                            |
//! |            | `end`            | 2      | bytes                            |
//! | `Request`  | `context`        | 1      | `kvrpcpb::Context`               |
//! |            | `tp`             | 2      | varint (int64)                   |
//! |            | `data`           | 3      | bytes                            |
//! |            | `ranges`         | 4      | repeated `KeyRange`              |
//! | `Response` | `data`           | 1      | bytes, always written            |
//! |            | `region_error`   | 2      | `errorpb::Error`                 |
//! |            | `locked`         | 3      | `kvrpcpb::LockInfo`              |
//! |            | `other_error`    | 4      | string                           |
//! |            | `range`          | 5      | `KeyRange`                       |
//! |            | `exec_details`   | 6      | `kvrpcpb::ExecDetails`           |
//!
//! Fields holding their default value are not written, except `Response::data`. Fields this
//! version does not know are kept verbatim in `unknown_fields` and written back after the known
//! ones.

#[cfg(test)]
use proptest_derive::Arbitrary;

use crate::{
    codec::{
        field::{self, decode_key},
        DecodeContext, Message, WireType,
    },
    proto::{errorpb, kvrpcpb},
    Result, SharedBytes,
};

/// \[start, end)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct KeyRange {
    pub start: Vec<u8>,
    pub end: Vec<u8>,
    #[cfg_attr(test, proptest(value = "Vec::new()"))]
    pub unknown_fields: Vec<u8>,
}

impl KeyRange {
    pub fn new(start: Vec<u8>, end: Vec<u8>) -> Self {
        KeyRange {
            start,
            end,
            unknown_fields: Vec::new(),
        }
    }
}

impl Message for KeyRange {
    fn size(&self) -> usize {
        let mut n = 0;
        if !self.start.is_empty() {
            n += field::bytes_len(1, self.start.len());
        }
        if !self.end.is_empty() {
            n += field::bytes_len(2, self.end.len());
        }
        n + self.unknown_fields.len()
    }

    fn marshal_into(&self, buf: &mut [u8]) -> Result<usize> {
        field::check_capacity(self.size(), buf)?;
        let mut i = 0;
        if !self.start.is_empty() {
            i = field::encode_bytes(1, &self.start, buf, i);
        }
        if !self.end.is_empty() {
            i = field::encode_bytes(2, &self.end, buf, i);
        }
        Ok(field::encode_raw(&self.unknown_fields, buf, i))
    }

    fn merge_with_context(&mut self, buf: &[u8], ctx: DecodeContext) -> Result<()> {
        let mut i = 0;
        while i < buf.len() {
            let (key, next) = decode_key(buf, i, "KeyRange")?;
            i = match key.field_number {
                1 => {
                    key.expect(WireType::LengthDelimited, "start")?;
                    field::merge_bytes(&mut self.start, buf, next)?
                }
                2 => {
                    key.expect(WireType::LengthDelimited, "end")?;
                    field::merge_bytes(&mut self.end, buf, next)?
                }
                _ => field::skip_unknown(buf, i, key, ctx, &mut self.unknown_fields)?,
            };
        }
        Ok(())
    }

    fn discard_unknown(&mut self) {
        self.unknown_fields.clear();
    }
}

/// A unit of work for an MPP processor; `tp` selects how `data` is interpreted.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Request {
    pub context: Option<kvrpcpb::Context>,
    pub tp: i64,
    pub data: Vec<u8>,
    /// Order is significant.
    pub ranges: Vec<KeyRange>,
    pub unknown_fields: Vec<u8>,
}

impl Message for Request {
    fn size(&self) -> usize {
        let mut n = 0;
        if let Some(context) = &self.context {
            n += field::message_len(1, context);
        }
        if self.tp != 0 {
            n += field::varint_len(2, self.tp as u64);
        }
        if !self.data.is_empty() {
            n += field::bytes_len(3, self.data.len());
        }
        for range in &self.ranges {
            n += field::message_len(4, range);
        }
        n + self.unknown_fields.len()
    }

    fn marshal_into(&self, buf: &mut [u8]) -> Result<usize> {
        field::check_capacity(self.size(), buf)?;
        let mut i = 0;
        if let Some(context) = &self.context {
            i = field::encode_message(1, context, buf, i)?;
        }
        if self.tp != 0 {
            i = field::encode_varint_field(2, self.tp as u64, buf, i);
        }
        if !self.data.is_empty() {
            i = field::encode_bytes(3, &self.data, buf, i);
        }
        for range in &self.ranges {
            i = field::encode_message(4, range, buf, i)?;
        }
        Ok(field::encode_raw(&self.unknown_fields, buf, i))
    }

    fn merge_with_context(&mut self, buf: &[u8], ctx: DecodeContext) -> Result<()> {
        let mut i = 0;
        while i < buf.len() {
            let (key, next) = decode_key(buf, i, "Request")?;
            i = match key.field_number {
                1 => {
                    key.expect(WireType::LengthDelimited, "context")?;
                    let context = self.context.get_or_insert_with(Default::default);
                    field::merge_message(context, buf, next, ctx)?
                }
                2 => {
                    key.expect(WireType::Varint, "tp")?;
                    let (tp, next) = field::decode_int64(buf, next)?;
                    self.tp = tp;
                    next
                }
                3 => {
                    key.expect(WireType::LengthDelimited, "data")?;
                    field::merge_bytes(&mut self.data, buf, next)?
                }
                4 => {
                    key.expect(WireType::LengthDelimited, "ranges")?;
                    let mut range = KeyRange::default();
                    let next = field::merge_message(&mut range, buf, next, ctx)?;
                    self.ranges.push(range);
                    next
                }
                _ => field::skip_unknown(buf, i, key, ctx, &mut self.unknown_fields)?,
            };
        }
        Ok(())
    }

    fn discard_unknown(&mut self) {
        self.unknown_fields.clear();
        for range in &mut self.ranges {
            range.discard_unknown();
        }
    }
}

/// The result of processing a [`Request`].
///
/// `region_error` and `other_error` may both be set; the codec does not treat them as exclusive.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Response {
    pub data: SharedBytes,
    pub region_error: Option<errorpb::Error>,
    pub locked: Option<kvrpcpb::LockInfo>,
    pub other_error: String,
    /// The range actually covered, possibly a subset of the requested one.
    pub range: Option<KeyRange>,
    pub exec_details: Option<kvrpcpb::ExecDetails>,
    pub unknown_fields: Vec<u8>,
}

impl Response {
    /// An empty response whose `data` will be decoded into `buf`'s allocation.
    ///
    /// ```rust
    /// # use mpp_processor::{Message, Response};
    /// let mut resp = Response::with_data_buffer(Vec::with_capacity(1024));
    /// resp.merge(&[0x0a, 0x02, 0xbe, 0xef]).unwrap();
    /// let buf = resp.take_data().into_inner();
    /// assert_eq!(buf, vec![0xbe, 0xef]);
    /// assert!(buf.capacity() >= 1024);
    /// ```
    pub fn with_data_buffer(buf: Vec<u8>) -> Self {
        Response {
            data: SharedBytes::reuse(buf),
            ..Default::default()
        }
    }

    /// Moves the payload buffer out, leaving an empty one behind.
    pub fn take_data(&mut self) -> SharedBytes {
        std::mem::take(&mut self.data)
    }
}

impl Message for Response {
    fn size(&self) -> usize {
        let mut n = field::bytes_len(1, self.data.size());
        if let Some(region_error) = &self.region_error {
            n += field::message_len(2, region_error);
        }
        if let Some(locked) = &self.locked {
            n += field::message_len(3, locked);
        }
        if !self.other_error.is_empty() {
            n += field::bytes_len(4, self.other_error.len());
        }
        if let Some(range) = &self.range {
            n += field::message_len(5, range);
        }
        if let Some(exec_details) = &self.exec_details {
            n += field::message_len(6, exec_details);
        }
        n + self.unknown_fields.len()
    }

    fn marshal_into(&self, buf: &mut [u8]) -> Result<usize> {
        field::check_capacity(self.size(), buf)?;
        let mut i = crate::codec::wire::encode_key(buf, 0, 1, WireType::LengthDelimited);
        i = crate::codec::encode_varint(buf, i, self.data.size() as u64);
        i += self.data.marshal_into(&mut buf[i..]);
        if let Some(region_error) = &self.region_error {
            i = field::encode_message(2, region_error, buf, i)?;
        }
        if let Some(locked) = &self.locked {
            i = field::encode_message(3, locked, buf, i)?;
        }
        if !self.other_error.is_empty() {
            i = field::encode_bytes(4, self.other_error.as_bytes(), buf, i);
        }
        if let Some(range) = &self.range {
            i = field::encode_message(5, range, buf, i)?;
        }
        if let Some(exec_details) = &self.exec_details {
            i = field::encode_message(6, exec_details, buf, i)?;
        }
        Ok(field::encode_raw(&self.unknown_fields, buf, i))
    }

    fn merge_with_context(&mut self, buf: &[u8], ctx: DecodeContext) -> Result<()> {
        let mut i = 0;
        while i < buf.len() {
            let (key, next) = decode_key(buf, i, "Response")?;
            i = match key.field_number {
                1 => {
                    key.expect(WireType::LengthDelimited, "data")?;
                    let (data, next) = field::decode_bytes(buf, next)?;
                    self.data.unmarshal_in_place(data);
                    next
                }
                2 => {
                    key.expect(WireType::LengthDelimited, "region_error")?;
                    let region_error = self.region_error.get_or_insert_with(Default::default);
                    field::merge_message(region_error, buf, next, ctx)?
                }
                3 => {
                    key.expect(WireType::LengthDelimited, "locked")?;
                    let locked = self.locked.get_or_insert_with(Default::default);
                    field::merge_message(locked, buf, next, ctx)?
                }
                4 => {
                    key.expect(WireType::LengthDelimited, "other_error")?;
                    field::merge_string(&mut self.other_error, "other_error", buf, next)?
                }
                5 => {
                    key.expect(WireType::LengthDelimited, "range")?;
                    let range = self.range.get_or_insert_with(Default::default);
                    field::merge_message(range, buf, next, ctx)?
                }
                6 => {
                    key.expect(WireType::LengthDelimited, "exec_details")?;
                    let exec_details = self.exec_details.get_or_insert_with(Default::default);
                    field::merge_message(exec_details, buf, next, ctx)?
                }
                _ => field::skip_unknown(buf, i, key, ctx, &mut self.unknown_fields)?,
            };
        }
        Ok(())
    }

    fn discard_unknown(&mut self) {
        self.unknown_fields.clear();
        if let Some(range) = &mut self.range {
            range.discard_unknown();
        }
    }

    /// Resets every field but keeps the allocation behind `data`.
    fn clear(&mut self) {
        let mut data = self.take_data();
        data.clear();
        *self = Response {
            data,
            ..Default::default()
        };
    }
}
