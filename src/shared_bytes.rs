// Copyright 2019 TiKV Project Authors. Licensed under Apache-2.0.

use std::ops::Deref;

/// The payload buffer of a [`Response`](crate::Response).
///
/// Responses are on the hot path, so the buffer is meant to be handed in by whoever pools them
/// ([`SharedBytes::reuse`]) and handed back afterwards ([`SharedBytes::into_inner`]). Decoding
/// overwrites the content in place and keeps the allocation; the codec never frees or swaps it.
///
/// ```rust
/// # use mpp_processor::SharedBytes;
/// let mut data = SharedBytes::reuse(Vec::with_capacity(64));
/// data.unmarshal_in_place(b"chunk");
/// assert_eq!(&*data, b"chunk");
/// assert!(data.into_inner().capacity() >= 64);
/// ```
#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SharedBytes {
    buf: Vec<u8>,
}

impl SharedBytes {
    pub fn new() -> Self {
        SharedBytes::default()
    }

    /// Wraps a recycled buffer, dropping its content but keeping its capacity.
    pub fn reuse(mut buf: Vec<u8>) -> Self {
        buf.clear();
        SharedBytes { buf }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Empties the buffer without releasing its allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// The encoded length of the content (without tag or length prefix).
    #[inline]
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Copies the content to the front of `buf`, which must hold [`size`](Self::size) bytes.
    pub fn marshal_into(&self, buf: &mut [u8]) -> usize {
        buf[..self.buf.len()].copy_from_slice(&self.buf);
        self.buf.len()
    }

    /// Replaces the content with `src`, reusing the current allocation when it is large enough.
    pub fn unmarshal_in_place(&mut self, src: &[u8]) {
        self.buf.clear();
        self.buf.extend_from_slice(src);
    }
}

impl Deref for SharedBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl AsRef<[u8]> for SharedBytes {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl From<Vec<u8>> for SharedBytes {
    fn from(buf: Vec<u8>) -> SharedBytes {
        SharedBytes { buf }
    }
}

impl From<&[u8]> for SharedBytes {
    fn from(buf: &[u8]) -> SharedBytes {
        SharedBytes { buf: buf.to_vec() }
    }
}

impl From<SharedBytes> for Vec<u8> {
    fn from(bytes: SharedBytes) -> Vec<u8> {
        bytes.buf
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unmarshal_reuses_allocation() {
        let mut data = SharedBytes::reuse(vec![7; 32]);
        assert!(data.is_empty());
        let ptr = data.as_slice().as_ptr();
        let capacity = data.capacity();

        data.unmarshal_in_place(&[1, 2, 3]);
        assert_eq!(data.as_slice(), &[1, 2, 3]);
        assert_eq!(data.as_slice().as_ptr(), ptr);
        assert_eq!(data.capacity(), capacity);

        // A second decode overwrites rather than appends.
        data.unmarshal_in_place(&[4]);
        assert_eq!(&*data, &[4]);
    }

    #[test]
    fn test_conversions() {
        let empty = SharedBytes::new();
        assert!(empty.is_empty());
        assert_eq!(empty, SharedBytes::default());

        let borrowed: &[u8] = b"xyz";
        let data = SharedBytes::from(borrowed);
        assert_eq!(data.as_slice(), borrowed);
        assert_eq!(data, SharedBytes::from(b"xyz".to_vec()));
    }

    #[test]
    fn test_marshal_into() {
        let data = SharedBytes::from(b"abc".to_vec());
        let mut buf = [0u8; 4];
        assert_eq!(data.size(), 3);
        assert_eq!(data.marshal_into(&mut buf), 3);
        assert_eq!(&buf, b"abc\0");
        assert_eq!(Vec::from(data), b"abc".to_vec());
    }
}
