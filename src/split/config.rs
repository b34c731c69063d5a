// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Builder pattern for splitter configuration.

use std::path::PathBuf;

use crate::header::HeaderFormat;
use crate::io::DEFAULT_READ_QUANTUM;
use crate::{Result, SplitError};

use super::naming::NamingScheme;

/// Default output name prefix.
pub const DEFAULT_PREFIX: &str = "FOURSIGHT";

/// Default chunk size in megabytes.
pub const DEFAULT_CHUNK_MEGABYTES: u64 = 50;

/// Bytes per megabyte for chunk size conversion.
pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Default gzip compression level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 5;

/// Configuration for a split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Prefix of every output file name
    pub prefix: String,
    /// Minimum uncompressed bytes per chunk before looking for a boundary
    pub chunk_size: u64,
    /// Gzip level (1-9)
    pub compression_level: u32,
    /// Directory that receives temporary and final chunk files
    pub output_dir: PathBuf,
    /// Output file naming
    pub naming: NamingScheme,
    /// Bytes pulled per read while scanning for a boundary
    pub read_quantum: usize,
    /// Message header layout
    pub header: HeaderFormat,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            chunk_size: DEFAULT_CHUNK_MEGABYTES * BYTES_PER_MEGABYTE,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            output_dir: PathBuf::from("."),
            naming: NamingScheme::default(),
            read_quantum: DEFAULT_READ_QUANTUM,
            header: HeaderFormat::default(),
        }
    }
}

impl SplitConfig {
    /// Check all settings.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(SplitError::invalid_config("prefix", "must not be empty"));
        }
        if self.prefix.contains(|c: char| c == '/' || c == '\\') {
            return Err(SplitError::invalid_config(
                "prefix",
                format!("'{}' must not contain path separators", self.prefix),
            ));
        }
        if self.chunk_size == 0 {
            return Err(SplitError::invalid_config(
                "chunk_size",
                "must be greater than zero",
            ));
        }
        if !(1..=9).contains(&self.compression_level) {
            return Err(SplitError::invalid_config(
                "compression_level",
                format!("{} is not between 1 and 9", self.compression_level),
            ));
        }
        if self.read_quantum == 0 {
            return Err(SplitError::invalid_config(
                "read_quantum",
                "must be greater than zero",
            ));
        }
        self.header.validate()
    }
}

/// Builder for [`SplitConfig`].
#[derive(Debug, Clone, Default)]
pub struct SplitConfigBuilder {
    config: SplitConfig,
}

impl SplitConfigBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output name prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the chunk size in bytes.
    pub fn chunk_size(mut self, bytes: u64) -> Self {
        self.config.chunk_size = bytes;
        self
    }

    /// Set the chunk size in megabytes.
    pub fn chunk_megabytes(mut self, megabytes: u64) -> Self {
        self.config.chunk_size = megabytes.saturating_mul(BYTES_PER_MEGABYTE);
        self
    }

    /// Set the gzip compression level (1-9).
    pub fn compression_level(mut self, level: u32) -> Self {
        self.config.compression_level = level;
        self
    }

    /// Set the output directory.
    pub fn output_dir<P: AsRef<std::path::Path>>(mut self, dir: P) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the output naming scheme.
    pub fn naming(mut self, naming: NamingScheme) -> Self {
        self.config.naming = naming;
        self
    }

    /// Set the scanner read quantum in bytes.
    pub fn read_quantum(mut self, bytes: usize) -> Self {
        self.config.read_quantum = bytes;
        self
    }

    /// Set the message header layout.
    pub fn header(mut self, header: HeaderFormat) -> Self {
        self.config.header = header;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<SplitConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SplitConfigBuilder::new().build().unwrap();
        assert_eq!(config.prefix, "FOURSIGHT");
        assert_eq!(config.chunk_size, 50 * 1024 * 1024);
        assert_eq!(config.compression_level, 5);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.naming, NamingScheme::Timestamps);
        assert_eq!(config.read_quantum, 1024);
    }

    #[test]
    fn test_builder_setters() {
        let config = SplitConfigBuilder::new()
            .prefix("RUN")
            .chunk_megabytes(2)
            .compression_level(9)
            .output_dir("/tmp/out")
            .naming(NamingScheme::Indexed)
            .read_quantum(4096)
            .build()
            .unwrap();
        assert_eq!(config.prefix, "RUN");
        assert_eq!(config.chunk_size, 2 * 1024 * 1024);
        assert_eq!(config.compression_level, 9);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.naming, NamingScheme::Indexed);
        assert_eq!(config.read_quantum, 4096);
    }

    #[test]
    fn test_invalid_compression_level() {
        for level in [0, 10] {
            let err = SplitConfigBuilder::new()
                .compression_level(level)
                .build()
                .unwrap_err();
            assert!(matches!(err, SplitError::InvalidConfig { ref field, .. } if field == "compression_level"));
        }
    }

    #[test]
    fn test_invalid_chunk_size() {
        assert!(SplitConfigBuilder::new().chunk_size(0).build().is_err());
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(SplitConfigBuilder::new().prefix("").build().is_err());
        assert!(SplitConfigBuilder::new().prefix("a/b").build().is_err());
    }

    #[test]
    fn test_invalid_read_quantum() {
        assert!(SplitConfigBuilder::new().read_quantum(0).build().is_err());
    }
}
