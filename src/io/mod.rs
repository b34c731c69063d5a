// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O collaborators of the splitter.
//!
//! - [`source`] - Input selection (stdin, plain file, gzip file)
//! - [`scanner`] - Boundary scanning over a byte stream
//! - [`chunk_writer`] - Gzip output with rename-on-commit

pub mod chunk_writer;
pub mod scanner;
pub mod source;

pub use chunk_writer::{temp_file_name, ChunkWriter, CommittedChunk};
pub use scanner::{BoundaryScanner, ScanOutcome, DEFAULT_READ_QUANTUM};
pub use source::{InputSource, STDIN_PATH};
