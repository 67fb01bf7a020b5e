// Copyright 2023 TiKV Project Authors. Licensed under Apache-2.0.

// The mpp_processor messages themselves are hand-coded in `src/mpp_processor.rs`
// so they can keep unknown fields; only their collaborators are generated here.
fn main() {
    tonic_build::configure()
        .emit_rerun_if_changed(false)
        .build_client(false)
        .build_server(false)
        .include_file("mod.rs")
        .out_dir("src/generated")
        .compile(
            &glob::glob("proto/*.proto")
                .unwrap()
                .collect::<Result<Vec<_>, _>>()
                .unwrap(),
            &["proto"],
        )
        .unwrap();
}
