// Copyright 2019 TiKV Project Authors. Licensed under Apache-2.0.

// Note: strategies for the prost-generated collaborators live here rather than as derives because
// the generated code is checked in and regenerated by `proto-build`.

use proptest::{
    arbitrary::any,
    collection::vec,
    option,
    prop_compose,
    strategy::Strategy,
};

use crate::{
    proto::{errorpb, kvrpcpb, metapb},
    KeyRange, Request, Response, SharedBytes,
};

mod codec;

pub(crate) const PROPTEST_BYTES_MAX: usize = 256;
pub(crate) const PROPTEST_BATCH_SIZE_MAX: usize = 16;

pub fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..PROPTEST_BYTES_MAX)
}

pub fn arb_batch<T: core::fmt::Debug>(
    single_strategy: impl Strategy<Value = T>,
    max_batch_size: impl Into<Option<usize>>,
) -> impl Strategy<Value = Vec<T>> {
    let max_batch_size = max_batch_size.into().unwrap_or(PROPTEST_BATCH_SIZE_MAX);
    vec(single_strategy, 0..max_batch_size)
}

prop_compose! {
    pub fn arb_context()(
        region_id in any::<u64>(),
        epoch in option::of((any::<u64>(), any::<u64>())),
        peer in option::of((any::<u64>(), any::<u64>())),
        term in any::<u64>(),
        priority in 0i32..3,
        not_fill_cache in any::<bool>(),
    ) -> kvrpcpb::Context {
        kvrpcpb::Context {
            region_id,
            region_epoch: epoch.map(|(conf_ver, version)| metapb::RegionEpoch { conf_ver, version }),
            peer: peer.map(|(id, store_id)| metapb::Peer { id, store_id }),
            term,
            priority,
            not_fill_cache,
            ..Default::default()
        }
    }
}

prop_compose! {
    pub fn arb_region_error()(
        message in "[a-z ]{0,32}",
        busy in option::of(("[a-z]{0,8}", any::<u64>())),
        not_found in option::of(any::<u64>()),
    ) -> errorpb::Error {
        errorpb::Error {
            message,
            server_is_busy: busy.map(|(reason, backoff_ms)| errorpb::ServerIsBusy { reason, backoff_ms }),
            region_not_found: not_found.map(|region_id| errorpb::RegionNotFound { region_id }),
            ..Default::default()
        }
    }
}

prop_compose! {
    pub fn arb_lock_info()(
        primary_lock in arb_bytes(),
        lock_version in any::<u64>(),
        key in arb_bytes(),
        lock_ttl in any::<u64>(),
    ) -> kvrpcpb::LockInfo {
        kvrpcpb::LockInfo {
            primary_lock,
            lock_version,
            key,
            lock_ttl,
        }
    }
}

prop_compose! {
    pub fn arb_exec_details()(
        handle_time in option::of((any::<i64>(), any::<i64>())),
        write in option::of((any::<i64>(), any::<i64>())),
    ) -> kvrpcpb::ExecDetails {
        kvrpcpb::ExecDetails {
            handle_time: handle_time
                .map(|(wait_ms, process_ms)| kvrpcpb::HandleTime { wait_ms, process_ms }),
            scan_detail: write.map(|(total, processed)| kvrpcpb::ScanDetail {
                write: Some(kvrpcpb::ScanInfo { total, processed }),
                ..Default::default()
            }),
        }
    }
}

prop_compose! {
    pub fn arb_request()(
        context in option::of(arb_context()),
        tp in any::<i64>(),
        data in arb_bytes(),
        ranges in arb_batch(any::<KeyRange>(), None),
    ) -> Request {
        Request {
            context,
            tp,
            data,
            ranges,
            unknown_fields: Vec::new(),
        }
    }
}

prop_compose! {
    pub fn arb_response()(
        data in arb_bytes(),
        region_error in option::of(arb_region_error()),
        locked in option::of(arb_lock_info()),
        other_error in "\\PC{0,32}",
        range in option::of(any::<KeyRange>()),
        exec_details in option::of(arb_exec_details()),
    ) -> Response {
        Response {
            data: SharedBytes::from(data),
            region_error,
            locked,
            other_error,
            range,
            exec_details,
            unknown_fields: Vec::new(),
        }
    }
}
