// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn recognizes_known_ids() {
    assert_eq!(Distro::from_id("ubuntu"), Distro::Ubuntu);
    assert_eq!(Distro::from_id("ALMALINUX"), Distro::Alma);
}

#[test]
fn unknown_id_defaults_unknown() {
    assert_eq!(Distro::from_id("plan9"), Distro::Unknown);
}

#[test]
fn detect_from_reads_os_release() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "NAME=\"Ubuntu\"\nID=ubuntu\nVERSION_ID=\"24.04\"").unwrap();
    assert_eq!(Distro::detect_from(file.path()), Distro::Ubuntu);
}

#[test]
fn detect_from_missing_file_is_unknown() {
    assert_eq!(Distro::detect_from(Path::new("/does/not/exist")), Distro::Unknown);
}
