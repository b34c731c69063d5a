// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Split run report.

use std::path::PathBuf;

use serde::Serialize;

/// One committed chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkRecord {
    /// 1-based sequence number
    pub index: u32,
    /// Final file name
    pub file_name: String,
    /// Final path
    pub path: PathBuf,
    /// Timestamp of the first message
    pub start: String,
    /// Timestamp of the next message, empty for the last chunk
    pub end: String,
    /// Uncompressed bytes in the chunk
    pub bytes: u64,
}

/// Summary of a split run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Leading bytes discarded before the first header
    pub preamble_bytes: u64,
    /// Total bytes read from the input
    pub input_bytes: u64,
    /// Chunks in write order
    pub chunks: Vec<ChunkRecord>,
}

impl SplitReport {
    /// Record a committed chunk.
    pub fn push(&mut self, record: ChunkRecord) {
        self.input_bytes += record.bytes;
        self.chunks.push(record);
    }

    /// Bytes written across all chunks.
    pub fn chunk_bytes(&self) -> u64 {
        self.chunks.iter().map(|c| c.bytes).sum()
    }

    /// Number of chunks written.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: u32, bytes: u64) -> ChunkRecord {
        ChunkRecord {
            index,
            file_name: format!("P_{index}_.gz"),
            path: PathBuf::from(format!("P_{index}_.gz")),
            start: String::new(),
            end: String::new(),
            bytes,
        }
    }

    #[test]
    fn test_totals() {
        let mut report = SplitReport {
            preamble_bytes: 2,
            input_bytes: 2,
            chunks: Vec::new(),
        };
        report.push(record(1, 100));
        report.push(record(2, 40));
        assert_eq!(report.chunk_count(), 2);
        assert_eq!(report.chunk_bytes(), 140);
        assert_eq!(report.input_bytes, 142);
    }

    #[test]
    fn test_serialize() {
        let mut report = SplitReport::default();
        report.push(record(1, 10));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["chunks"][0]["index"], 1);
        assert_eq!(json["chunks"][0]["bytes"], 10);
        assert_eq!(json["input_bytes"], 10);
    }
}
