// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Chunk file names.

/// Extension of every output chunk.
pub const CHUNK_EXTENSION: &str = "gz";

/// How final chunk names are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingScheme {
    /// `{prefix}_{start}_{end}_.gz`
    #[default]
    Timestamps,
    /// `{prefix}_{start}_{end}_{index:05}.gz`
    Indexed,
}

/// Parts of a chunk name, known once the chunk is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkName<'a> {
    /// Output prefix
    pub prefix: &'a str,
    /// Timestamp of the first message, or empty
    pub start: &'a str,
    /// Timestamp of the message after the chunk, or empty at end of stream
    pub end: &'a str,
    /// 1-based sequence number
    pub index: u32,
}

impl ChunkName<'_> {
    /// Render the final file name.
    pub fn file_name(&self, scheme: NamingScheme) -> String {
        match scheme {
            NamingScheme::Timestamps => format!(
                "{}_{}_{}_.{}",
                self.prefix, self.start, self.end, CHUNK_EXTENSION
            ),
            NamingScheme::Indexed => format!(
                "{}_{}_{}_{:05}.{}",
                self.prefix, self.start, self.end, self.index, CHUNK_EXTENSION
            ),
        }
    }
}
