// Shared helpers for integration tests.
//
// Provides temporary-directory-backed INI fixtures so each integration test
// can exercise real file I/O without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// A small configuration with a duplicated section name, mixed spacing,
/// blank lines, and free text — the shapes the parser must tolerate.
pub const SAMPLE: &str = "\
[network]
host = 10.0.0.1
port=8080
secure = on

ignored prose between sections
[limits]
retries   =   3

[network]
host = 10.0.0.2
";

/// Write `content` into a fresh temporary directory and return the
/// directory guard together with the file path.
///
/// The guard must be kept alive for the duration of the test; dropping it
/// deletes the directory.
pub fn write_ini(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("sample.ini");
    std::fs::write(&path, content).expect("write INI fixture");
    (dir, path)
}
