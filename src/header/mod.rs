// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message header layout and signature matching.
//!
//! Every message in a TSMS log starts with a fixed 32-byte ASCII header:
//!
//! ```text
//! offset  0    5    10                28  30
//!         XXXX XXXX TTTTTTTTTTTTTTTT  TSMS
//! ```
//!
//! `X` and `T` are upper-case hex digits separated by single whitespace
//! bytes. `T` is the wall-clock time of the message in microseconds since
//! the Unix epoch. The layout is described by [`HeaderFormat`] and compiled
//! once into a [`HeaderSignature`], which is then passed explicitly to the
//! scanner and decoder.

pub mod timestamp;

use std::ops::Range;

use regex::bytes::Regex;

use crate::{Result, SplitError};

pub use timestamp::{decode_timestamp, format_timestamp, TIMESTAMP_FORMAT};

/// Regex source for the TSMS header signature.
///
/// `(?-u)` keeps `\s` to single ASCII whitespace bytes so every match is
/// exactly [`TSMS_HEADER_LEN`] bytes long.
pub const TSMS_SIGNATURE: &str = r"(?-u)[0-9A-F]{4}\s[0-9A-F]{4}\s[0-9A-F]{16}\s{2}TSMS";

/// Length of a TSMS header in bytes.
pub const TSMS_HEADER_LEN: usize = 4 + 1 + 4 + 1 + 16 + 2 + 4;

/// Byte range of the microsecond wall-clock field inside a TSMS header.
pub const TSMS_TIMESTAMP_FIELD: Range<usize> = 10..26;

/// Description of a message header layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFormat {
    /// Regex source matching exactly one header
    pub pattern: String,
    /// Length of a header match in bytes
    pub header_len: usize,
    /// Byte range of the hex-encoded microsecond timestamp
    pub timestamp_field: Range<usize>,
}

impl Default for HeaderFormat {
    fn default() -> Self {
        Self {
            pattern: TSMS_SIGNATURE.to_string(),
            header_len: TSMS_HEADER_LEN,
            timestamp_field: TSMS_TIMESTAMP_FIELD,
        }
    }
}

impl HeaderFormat {
    /// Check the layout for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.header_len == 0 {
            return Err(SplitError::invalid_config(
                "header_len",
                "header length must be greater than zero",
            ));
        }

        let field = &self.timestamp_field;
        if field.start >= field.end || field.end > self.header_len {
            return Err(SplitError::invalid_config(
                "timestamp_field",
                format!(
                    "range {}..{} must be non-empty and lie within the {}-byte header",
                    field.start, field.end, self.header_len
                ),
            ));
        }

        let width = field.end - field.start;
        if width % 2 != 0 || width > 16 {
            return Err(SplitError::invalid_config(
                "timestamp_field",
                format!("field width {width} must be an even number of hex digits, at most 16"),
            ));
        }

        Ok(())
    }
}

/// Compiled header signature.
///
/// Built once at startup and shared by reference; holds no mutable state.
#[derive(Debug, Clone)]
pub struct HeaderSignature {
    regex: Regex,
    header_len: usize,
    timestamp_field: Range<usize>,
}

impl HeaderSignature {
    /// Compile a header format.
    pub fn new(format: &HeaderFormat) -> Result<Self> {
        format.validate()?;

        let regex = Regex::new(&format.pattern)
            .map_err(|e| SplitError::invalid_pattern(&format.pattern, e.to_string()))?;

        Ok(Self {
            regex,
            header_len: format.header_len,
            timestamp_field: format.timestamp_field.clone(),
        })
    }

    /// Compile the standard TSMS header layout.
    pub fn tsms() -> Result<Self> {
        Self::new(&HeaderFormat::default())
    }

    /// Length of one header in bytes.
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Minimum offset at which a search may start once the buffer begins
    /// at a header: the next header cannot start before `header_len - 1`.
    pub fn search_floor(&self) -> usize {
        self.header_len.saturating_sub(1)
    }

    /// Byte range of the timestamp field inside a header.
    pub fn timestamp_field(&self) -> Range<usize> {
        self.timestamp_field.clone()
    }

    /// Find the first header starting at or after `start`.
    ///
    /// Bytes before `start` still count as context for the regex engine.
    pub fn find_at(&self, haystack: &[u8], start: usize) -> Option<usize> {
        if start > haystack.len() {
            return None;
        }
        self.regex.find_at(haystack, start).map(|m| m.start())
    }

    /// Check whether `bytes` begins with a header.
    pub fn is_header(&self, bytes: &[u8]) -> bool {
        bytes.len() >= self.header_len && self.find_at(&bytes[..self.header_len], 0) == Some(0)
    }

    /// Decode the wall-clock timestamp of the header at the start of `header`.
    ///
    /// An empty slice yields an empty string.
    pub fn timestamp(&self, header: &[u8]) -> Result<String> {
        decode_timestamp(header, &self.timestamp_field)
    }
}
