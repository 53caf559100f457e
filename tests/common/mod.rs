//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Write a media stand-in whose content is the duration the stub ffprobe reports
pub fn create_test_video(path: &Path, duration: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, duration).unwrap();
}

/// Write an executable shell script
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

/// Stub ffprobe that prints the probed file's content as its duration.
/// The path is the seventh argument.
#[cfg(unix)]
pub fn stub_ffprobe(dir: &Path) -> PathBuf {
    write_script(&dir.join("ffprobe"), r#"cat "$7""#)
}

/// Stub ffmpeg that copies input ($4) to output ($11) and fails with
/// status 3 for inputs whose name contains "bad"
#[cfg(unix)]
pub fn stub_ffmpeg(dir: &Path) -> PathBuf {
    write_script(
        &dir.join("ffmpeg"),
        r#"case "$4" in *bad*) exit 3;; esac
cp "$4" "${11}""#,
    )
}
