pub mod errorpb {
    include!("errorpb.rs");
}
pub mod kvrpcpb {
    include!("kvrpcpb.rs");
}
pub mod metapb {
    include!("metapb.rs");
}
