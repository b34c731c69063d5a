// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # msgsplit
//!
//! Split a log of concatenated TSMS messages into gzip chunks that never
//! cut a message in half.
//!
//! Each chunk holds at least the configured number of bytes and is
//! extended to the next message header. Chunks are named after the
//! wall-clock time of their first message and of the message that follows
//! them: `{prefix}_{start}_{end}_.gz`.
//!
//! ## Architecture
//!
//! - `header/` - Header signature and timestamp decoding
//! - `io/` - Input sources, boundary scanning, chunk writing
//! - `split/` - Configuration, naming and the splitter controller
//! - `core/` - Error types
//!
//! ## Example
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use msgsplit::{InputSource, SplitConfigBuilder, Splitter};
//!
//! let config = SplitConfigBuilder::new()
//!     .prefix("FOURSIGHT")
//!     .chunk_megabytes(50)
//!     .compression_level(5)
//!     .build()?;
//!
//! let mut input = InputSource::from_path("capture.bin.gz").open()?;
//! let report = Splitter::new(config)?.run(&mut input)?;
//! for chunk in &report.chunks {
//!     println!("{}: {} bytes", chunk.file_name, chunk.bytes);
//! }
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use self::core::{Result, SplitError};

// Header layout and timestamps
pub mod header;

pub use header::{HeaderFormat, HeaderSignature};

// Sources, scanner, chunk writer
pub mod io;

pub use io::{BoundaryScanner, ChunkWriter, InputSource, ScanOutcome};

// Splitter controller
pub mod split;

pub use split::{
    ChunkName, ChunkRecord, NamingScheme, SplitConfig, SplitConfigBuilder, SplitReport, Splitter,
};
