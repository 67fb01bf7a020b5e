// Copyright 2020 TiKV Project Authors. Licensed under Apache-2.0.

//! Collaborator messages referenced by the MPP processor schema.
//!
//! These are prost-generated from `proto/*.proto` by the `proto-build` tool. The codec only
//! reaches them through [`Message`](crate::Message).

#![allow(clippy::large_enum_variant)]
#![allow(clippy::enum_variant_names)]

pub use protos::*;

#[allow(clippy::doc_lazy_continuation)]
mod protos {
    include!("generated/mod.rs");
}

crate::impl_message_for_prost!(
    errorpb::Error,
    kvrpcpb::Context,
    kvrpcpb::LockInfo,
    kvrpcpb::ExecDetails,
);
