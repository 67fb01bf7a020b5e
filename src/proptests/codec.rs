// Copyright 2019 TiKV Project Authors. Licensed under Apache-2.0.

use super::{arb_bytes, arb_request, arb_response};
use crate::{
    codec::{encode_varint, sizeof_varint, skip},
    Error, KeyRange, Message, Request, Response,
};
use proptest::{
    arbitrary::any, prop_assert, prop_assert_eq, prop_assume, proptest, sample::Index,
};

/// An unknown varint field as it appears on the wire.
fn unknown_varint_field(field_number: u32, value: u64) -> Vec<u8> {
    let tag = u64::from(field_number) << 3;
    let mut buf = vec![0; sizeof_varint(tag) + sizeof_varint(value)];
    let offset = encode_varint(&mut buf, 0, tag);
    encode_varint(&mut buf, offset, value);
    buf
}

proptest! {
    #[test]
    fn request_round_trip(req in arb_request()) {
        let encoded = req.marshal().unwrap();
        prop_assert_eq!(encoded.len(), req.size());
        let decoded = Request::unmarshal(&encoded).unwrap();
        prop_assert_eq!(&decoded, &req);
        prop_assert_eq!(decoded.marshal().unwrap(), encoded);
    }

    #[test]
    fn response_round_trip(resp in arb_response()) {
        let encoded = resp.marshal().unwrap();
        prop_assert_eq!(encoded.len(), resp.size());
        prop_assert_eq!(Response::unmarshal(&encoded).unwrap(), resp);
    }

    #[test]
    fn ranges_keep_their_order(ranges in super::arb_batch(any::<KeyRange>(), None)) {
        let req = Request {
            ranges: ranges.clone(),
            ..Default::default()
        };
        let decoded = Request::unmarshal(&req.marshal().unwrap()).unwrap();
        prop_assert_eq!(decoded.ranges, ranges);
    }

    #[test]
    fn truncated_field_is_unexpected_eof(start in arb_bytes(), cut in any::<Index>()) {
        prop_assume!(!start.is_empty());
        let encoded = KeyRange::new(start, vec![]).marshal().unwrap();
        let len = 1 + cut.index(encoded.len() - 1);
        prop_assert!(matches!(
            KeyRange::unmarshal(&encoded[..len]),
            Err(Error::UnexpectedEof)
        ));
    }

    #[test]
    fn truncated_tp_is_unexpected_eof(tp in any::<i64>(), cut in any::<Index>()) {
        prop_assume!(tp != 0);
        let encoded = Request { tp, ..Default::default() }.marshal().unwrap();
        let len = 1 + cut.index(encoded.len() - 1);
        prop_assert!(matches!(
            Request::unmarshal(&encoded[..len]),
            Err(Error::UnexpectedEof)
        ));
    }

    #[test]
    fn truncated_request_fails_inside_every_field(req in arb_request()) {
        let encoded = req.marshal().unwrap();
        let mut boundaries = vec![0];
        let mut offset = 0;
        while offset < encoded.len() {
            offset = skip(&encoded, offset).unwrap();
            boundaries.push(offset);
        }

        for len in 0..encoded.len() {
            let result = Request::unmarshal(&encoded[..len]);
            if boundaries.contains(&len) {
                prop_assert!(result.is_ok(), "cut at field boundary {}", len);
            } else {
                prop_assert!(
                    matches!(result, Err(Error::UnexpectedEof)),
                    "cut at {} of {}: {:?}",
                    len,
                    encoded.len(),
                    result
                );
            }
        }
    }

    #[test]
    fn unknown_fields_survive_round_trip(
        range in any::<KeyRange>(),
        field_number in 3u32..=i32::MAX as u32,
        value in any::<u64>(),
    ) {
        let mut encoded = range.marshal().unwrap();
        encoded.extend(unknown_varint_field(field_number, value));

        let decoded = KeyRange::unmarshal(&encoded).unwrap();
        prop_assert_eq!(&decoded.start, &range.start);
        prop_assert_eq!(&decoded.end, &range.end);
        prop_assert_eq!(decoded.marshal().unwrap(), encoded);
    }

    #[test]
    fn data_buffer_is_reused(resp in arb_response()) {
        let encoded = resp.marshal().unwrap();
        let capacity = resp.data.size() + 64;
        let mut decoded = Response::with_data_buffer(Vec::with_capacity(capacity));
        decoded.merge(&encoded).unwrap();
        prop_assert!(decoded.data.capacity() >= capacity);
        prop_assert_eq!(decoded, resp);
    }
}
