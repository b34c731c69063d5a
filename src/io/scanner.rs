// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Boundary scanner.
//!
//! Pulls bytes from a source into a growing buffer until a message header
//! is found, then hands the buffer back split at the header. The scanner
//! keeps nothing between calls: the caller owns both halves of the result.

use std::io::Read;

use tracing::debug;

use crate::header::HeaderSignature;
use crate::{Result, SplitError};

/// Default number of bytes pulled from the source per read.
pub const DEFAULT_READ_QUANTUM: usize = 1024;

/// Result of a boundary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A header was found.
    Boundary {
        /// Bytes before the header
        before: Vec<u8>,
        /// The header and everything buffered after it
        from: Vec<u8>,
    },
    /// The source ran dry without another header.
    EndOfStream {
        /// Everything buffered
        remaining: Vec<u8>,
    },
}

impl ScanOutcome {
    /// Split into `(before, from)`, with `None` for end of stream.
    pub fn into_parts(self) -> (Vec<u8>, Option<Vec<u8>>) {
        match self {
            ScanOutcome::Boundary { before, from } => (before, Some(from)),
            ScanOutcome::EndOfStream { remaining } => (remaining, None),
        }
    }
}

/// Finds message boundaries in a byte stream.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryScanner<'a> {
    signature: &'a HeaderSignature,
    read_quantum: usize,
}

impl<'a> BoundaryScanner<'a> {
    /// Create a scanner.
    ///
    /// A zero read quantum is raised to one byte.
    pub fn new(signature: &'a HeaderSignature, read_quantum: usize) -> Self {
        Self {
            signature,
            read_quantum: read_quantum.max(1),
        }
    }

    /// Read from `source` until the next header.
    ///
    /// Starts from an empty buffer and only accepts headers at or after
    /// [`HeaderSignature::search_floor`].
    pub fn next_boundary<R: Read + ?Sized>(&self, source: &mut R) -> Result<ScanOutcome> {
        self.scan_from(source, Vec::new(), self.signature.search_floor())
    }

    /// Search `seed` for a header at or after `floor`, reading more from
    /// `source` while none is found.
    ///
    /// After each read only the region a new match could touch is searched
    /// again. Headers have a fixed length, so this finds exactly what a
    /// full rescan of the buffer would.
    pub fn scan_from<R: Read + ?Sized>(
        &self,
        source: &mut R,
        seed: Vec<u8>,
        floor: usize,
    ) -> Result<ScanOutcome> {
        let overlap = self.signature.header_len().saturating_sub(1);
        let mut buffer = seed;
        let mut start = floor;

        loop {
            if let Some(idx) = self.signature.find_at(&buffer, start) {
                debug!(offset = idx, buffered = buffer.len(), "message boundary found");
                let from = buffer.split_off(idx);
                return Ok(ScanOutcome::Boundary {
                    before: buffer,
                    from,
                });
            }

            start = start.max(buffer.len().saturating_sub(overlap));

            if self.fill(source, &mut buffer)? == 0 {
                return Ok(ScanOutcome::EndOfStream { remaining: buffer });
            }
        }
    }

    /// Append up to one read quantum; returns 0 only at end of stream.
    fn fill<R: Read + ?Sized>(&self, source: &mut R, buffer: &mut Vec<u8>) -> Result<usize> {
        (&mut *source)
            .take(self.read_quantum as u64)
            .read_to_end(buffer)
            .map_err(|e| SplitError::io("read input", e))
    }
}
