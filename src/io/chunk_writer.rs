// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Gzip chunk writer with rename-on-commit.
//!
//! A chunk is written under a temporary name in the output directory and
//! only renamed to its final name by [`ChunkWriter::commit`]. Dropping a
//! writer without committing leaves the temporary file behind and never
//! produces a file under a final name.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::warn;

use crate::{Result, SplitError};

const WRITE_BUFFER_SIZE: usize = 256 * 1024;

/// Temporary file name for the chunk with sequence number `index`.
pub fn temp_file_name(index: u32) -> String {
    format!("temp_part_{index:05}.gz")
}

/// A chunk that has been renamed to its final path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedChunk {
    /// Final path
    pub path: PathBuf,
    /// Uncompressed bytes written
    pub bytes: u64,
}

/// Writes one gzip-compressed chunk.
pub struct ChunkWriter {
    encoder: GzEncoder<BufWriter<File>>,
    temp_path: PathBuf,
    bytes: u64,
}

impl ChunkWriter {
    /// Create the temporary file for chunk `index` in `dir`.
    ///
    /// `level` is the gzip level, 1 (fastest) to 9 (smallest).
    pub fn create(dir: &Path, index: u32, level: u32) -> Result<Self> {
        let temp_path = dir.join(temp_file_name(index));
        let file = File::create(&temp_path)
            .map_err(|e| SplitError::io(format!("create {}", temp_path.display()), e))?;

        let buffered = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
        Ok(Self {
            encoder: GzEncoder::new(buffered, Compression::new(level)),
            temp_path,
            bytes: 0,
        })
    }

    /// Path of the temporary file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Uncompressed bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.encoder
            .write_all(data)
            .map_err(|e| SplitError::io("write chunk", e))?;
        self.bytes += data.len() as u64;
        Ok(())
    }

    /// Copy up to `limit` bytes from `source`; returns the count copied.
    ///
    /// Fewer than `limit` bytes means the source is exhausted.
    pub fn copy_from<R: Read + ?Sized>(&mut self, source: &mut R, limit: u64) -> Result<u64> {
        let copied = std::io::copy(&mut (&mut *source).take(limit), &mut self.encoder)
            .map_err(|e| SplitError::io("copy input to chunk", e))?;
        self.bytes += copied;
        Ok(copied)
    }

    /// Finish compression, close the file and rename it to `final_name`
    /// in the same directory.
    pub fn commit(self, final_name: &str) -> Result<CommittedChunk> {
        let buffered = self
            .encoder
            .finish()
            .map_err(|e| SplitError::io("finish compression", e))?;
        let file = buffered
            .into_inner()
            .map_err(|e| SplitError::io("flush chunk", e.into_error()))?;
        drop(file);

        let path = self.temp_path.with_file_name(final_name);
        if path.exists() {
            warn!(path = %path.display(), "overwriting existing chunk");
        }

        fs::rename(&self.temp_path, &path).map_err(|e| {
            SplitError::io(
                format!(
                    "rename {} to {}",
                    self.temp_path.display(),
                    path.display()
                ),
                e,
            )
        })?;

        Ok(CommittedChunk {
            path,
            bytes: self.bytes,
        })
    }
}
