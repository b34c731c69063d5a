// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

// ============================================================================
// Message Builders
// ============================================================================

/// 2020-09-13 12:26:40 UTC in microseconds.
pub const T0: u64 = 1_600_000_000_000_000;

/// Microseconds per minute.
pub const MINUTE: u64 = 60_000_000;

/// Build a message: TSMS header for `micros` followed by `payload_len`
/// filler bytes that never form a header.
pub fn message(micros: u64, payload_len: usize) -> Vec<u8> {
    let mut msg = format!("0001 0002 {micros:016X}  TSMS").into_bytes();
    msg.extend((0..payload_len).map(|i| b'a' + (i % 26) as u8));
    msg
}

/// Expected `YYYYMMDD-HHMMSS` stamp for `micros`.
pub fn stamp(micros: u64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp((micros / 1_000_000) as i64, 0)
        .unwrap()
        .format("%Y%m%d-%H%M%S")
        .to_string()
}

/// Small deterministic generator for message sizes.
pub struct Lcg(pub u64);

impl Lcg {
    pub fn next_below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

// ============================================================================
// Temporary Directories
// ============================================================================

/// Create a unique temporary directory.
pub fn temp_dir(name: &str) -> (PathBuf, CleanupGuard) {
    let random = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "msgsplit_{}_{}_{}",
        name,
        std::process::id(),
        random
    ));
    fs::create_dir_all(&dir).unwrap();
    (dir.clone(), CleanupGuard(dir))
}

/// Cleanup guard for test temporary files
#[derive(Debug)]
pub struct CleanupGuard(PathBuf);

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

// ============================================================================
// Gzip Helpers
// ============================================================================

/// Decompress a gzip file.
pub fn gunzip(path: &Path) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(File::open(path).unwrap())
        .read_to_end(&mut out)
        .unwrap();
    out
}

/// Write `data` as a gzip file.
pub fn write_gzip(path: &Path, data: &[u8]) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::fast());
    enc.write_all(data).unwrap();
    enc.finish().unwrap();
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
