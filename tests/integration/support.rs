//! Shared fixtures for integration tests that exercise real processes.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::path::Path;

/// Build a minimal agent package archive: a gzipped tar containing
/// `<dir>/bin/huker` as an executable shell script that exits cleanly.
pub fn make_agent_archive(archive_path: &Path, dir_name: &str) {
    let file = std::fs::File::create(archive_path).expect("create archive");
    let enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    let mut builder = tar::Builder::new(enc);

    let payload = b"#!/bin/sh\nexit 0\n";
    let mut header = tar::Header::new_gnu();
    header.set_size(payload.len() as u64);
    header.set_mode(0o755);
    header.set_cksum();
    builder
        .append_data(
            &mut header,
            format!("{dir_name}/bin/huker"),
            payload.as_slice(),
        )
        .expect("append agent script");

    let enc = builder.into_inner().expect("finish tar");
    enc.finish().expect("finish gzip");
}

/// Write an executable shell script.
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, body).expect("write script");
    let mut perms = std::fs::metadata(path).expect("stat script").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("chmod script");
}
