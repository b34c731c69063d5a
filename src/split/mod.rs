// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Splitter controller.
//!
//! Drives one ordered pass over the input:
//!
//! 1. Strip the leading preamble up to the first message header.
//! 2. Open a chunk, write the carried residual, then copy `chunk_size`
//!    bytes straight from the input.
//! 3. Scan onward to the next header and write everything before it.
//! 4. Commit the chunk as `{prefix}_{start}_{end}_.gz` and carry the header
//!    onward as the seed of the next chunk.
//!
//! The end timestamp of one chunk is the start timestamp of the next.
//! Chunks hold at least `chunk_size` bytes, except the last, and always
//! end on a message boundary.

pub mod config;
pub mod naming;
pub mod report;

use std::io::Read;

use tracing::{debug, info, warn};

use crate::header::HeaderSignature;
use crate::io::{BoundaryScanner, ChunkWriter, ScanOutcome};
use crate::{Result, SplitError};

pub use config::{
    SplitConfig, SplitConfigBuilder, BYTES_PER_MEGABYTE, DEFAULT_CHUNK_MEGABYTES,
    DEFAULT_COMPRESSION_LEVEL, DEFAULT_PREFIX,
};
pub use naming::{ChunkName, NamingScheme, CHUNK_EXTENSION};
pub use report::{ChunkRecord, SplitReport};

/// Largest preamble rendered into the log.
const PREAMBLE_LOG_LIMIT: usize = 4096;

/// Controller state between chunks.
enum SplitState {
    StrippingLeadingHeader,
    Accumulating {
        /// Bytes from the last boundary onward
        residual: Vec<u8>,
        /// Timestamp of the boundary that starts the chunk
        start: String,
    },
    Done,
}

/// Splits a message log into boundary-aligned gzip chunks.
#[derive(Debug, Clone)]
pub struct Splitter {
    config: SplitConfig,
    signature: HeaderSignature,
}

impl Splitter {
    /// Create a splitter, compiling the configured header signature.
    pub fn new(config: SplitConfig) -> Result<Self> {
        config.validate()?;
        let signature = HeaderSignature::new(&config.header)?;
        Ok(Self { config, signature })
    }

    /// Configuration in use.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split `source` to the end.
    pub fn run<R: Read + ?Sized>(&self, source: &mut R) -> Result<SplitReport> {
        self.run_with(source, |_| {})
    }

    /// Split `source` to the end, calling `on_chunk` after each commit.
    pub fn run_with<R, F>(&self, source: &mut R, mut on_chunk: F) -> Result<SplitReport>
    where
        R: Read + ?Sized,
        F: FnMut(&ChunkRecord),
    {
        if !self.config.output_dir.is_dir() {
            return Err(SplitError::invalid_config(
                "output_dir",
                format!("{} is not a directory", self.config.output_dir.display()),
            ));
        }

        let scanner = BoundaryScanner::new(&self.signature, self.config.read_quantum);
        let mut report = SplitReport::default();
        let mut state = SplitState::StrippingLeadingHeader;
        let mut index: u32 = 1;

        loop {
            state = match state {
                SplitState::StrippingLeadingHeader => {
                    self.strip_leading(&scanner, source, &mut report)?
                }
                SplitState::Accumulating { residual, start } => {
                    let (record, next) =
                        self.write_chunk(&scanner, source, index, residual, start)?;
                    on_chunk(&record);
                    report.push(record);
                    index += 1;
                    next
                }
                SplitState::Done => break,
            };
        }

        Ok(report)
    }

    /// Discard everything before the first header.
    ///
    /// Searches from offset 0, so a stream that starts with a header has
    /// no preamble.
    fn strip_leading<R: Read + ?Sized>(
        &self,
        scanner: &BoundaryScanner<'_>,
        source: &mut R,
        report: &mut SplitReport,
    ) -> Result<SplitState> {
        match scanner.scan_from(source, Vec::new(), 0)? {
            ScanOutcome::Boundary { before, from } => {
                if !before.is_empty() {
                    let shown = &before[..before.len().min(PREAMBLE_LOG_LIMIT)];
                    info!(
                        bytes = before.len(),
                        "Message header found and discarded:\n{}",
                        String::from_utf8_lossy(shown)
                    );
                }
                report.preamble_bytes = before.len() as u64;
                report.input_bytes = report.preamble_bytes;

                let start = self.signature.timestamp(&from)?;
                Ok(SplitState::Accumulating {
                    residual: from,
                    start,
                })
            }
            ScanOutcome::EndOfStream { remaining } => {
                warn!(
                    bytes = remaining.len(),
                    "no message header found, input treated as preamble"
                );
                report.preamble_bytes = remaining.len() as u64;
                report.input_bytes = report.preamble_bytes;
                Ok(SplitState::Done)
            }
        }
    }

    /// Write one chunk seeded with `residual` and commit it.
    fn write_chunk<R: Read + ?Sized>(
        &self,
        scanner: &BoundaryScanner<'_>,
        source: &mut R,
        index: u32,
        residual: Vec<u8>,
        start: String,
    ) -> Result<(ChunkRecord, SplitState)> {
        let mut writer = ChunkWriter::create(
            &self.config.output_dir,
            index,
            self.config.compression_level,
        )?;
        writer.write_bytes(&residual)?;
        drop(residual);

        // The tail of the size block seeds the boundary scan, so a header
        // cut by the size limit is still found.
        let size = self.config.chunk_size;
        let held = size.min(self.signature.search_floor() as u64);
        writer.copy_from(source, size - held)?;
        debug!(
            temp = %writer.temp_path().display(),
            bytes = writer.bytes_written(),
            "size block copied, scanning for boundary"
        );

        let mut seed = Vec::with_capacity(held as usize);
        (&mut *source)
            .take(held)
            .read_to_end(&mut seed)
            .map_err(|e| SplitError::io("read input", e))?;

        let (end, next) = match scanner.scan_from(source, seed, 0)? {
            ScanOutcome::Boundary { before, from } => {
                writer.write_bytes(&before)?;
                let end = self.signature.timestamp(&from)?;
                let next = SplitState::Accumulating {
                    residual: from,
                    start: end.clone(),
                };
                (end, next)
            }
            ScanOutcome::EndOfStream { remaining } => {
                writer.write_bytes(&remaining)?;
                (String::new(), SplitState::Done)
            }
        };

        let file_name = ChunkName {
            prefix: &self.config.prefix,
            start: &start,
            end: &end,
            index,
        }
        .file_name(self.config.naming);

        let committed = writer.commit(&file_name)?;
        info!(
            index,
            bytes = committed.bytes,
            file = %file_name,
            "chunk written"
        );

        let record = ChunkRecord {
            index,
            file_name,
            path: committed.path,
            start,
            end,
            bytes: committed.bytes,
        };
        Ok((record, next))
    }
}
