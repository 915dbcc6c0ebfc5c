// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn looks_like_unix_path_detects_extensionless_trailing_segment() {
    assert!(looks_like_unix_path("/tmp/some/dir"));
    assert!(!looks_like_unix_path("/tmp/archive.zip"));
}

#[test]
fn file_from_url_takes_the_last_segment() {
    assert_eq!(file_from_url("https://example.com/path/to/file.zip"), "file.zip");
}

#[test]
fn decompress_archive_extracts_and_removes_source() {
    let dir = tempfile::tempdir().unwrap();
    let archive_path = dir.path().join("data.zip");
    {
        let file = std::fs::File::create(&archive_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("hello.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        use std::io::Write as _;
        writer.write_all(b"hi").unwrap();
        writer.finish().unwrap();
    }

    let destination = dir.path().join("out");
    let result = decompress_archive(archive_path.to_str().unwrap(), Some(destination.to_str().unwrap())).unwrap();
    assert!(result.is_success());
    assert!(destination.join("hello.txt").exists());
    assert!(!archive_path.exists());
}
