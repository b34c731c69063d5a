// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wall-clock timestamp decoding.

use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::{Result, SplitError};

/// Compact UTC format used in chunk names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Decode the hex microsecond field at `field` and format it as
/// `YYYYMMDD-HHMMSS` (UTC, seconds truncated).
///
/// An empty `header` yields an empty string: the end of the stream has no
/// boundary to name.
pub fn decode_timestamp(header: &[u8], field: &Range<usize>) -> Result<String> {
    if header.is_empty() {
        return Ok(String::new());
    }

    let micros = decode_micros(header, field)?;
    format_timestamp(micros).ok_or_else(|| {
        SplitError::malformed_timestamp(
            &header[field.clone()],
            format!("{micros} us is outside the representable time range"),
        )
    })
}

/// Parse the hex field into microseconds since the Unix epoch.
pub fn decode_micros(header: &[u8], field: &Range<usize>) -> Result<u64> {
    let raw = header.get(field.clone()).ok_or_else(|| {
        SplitError::malformed_timestamp(
            header,
            format!(
                "header is {} bytes, timestamp field needs {}..{}",
                header.len(),
                field.start,
                field.end
            ),
        )
    })?;

    let bytes = hex::decode(raw).map_err(|e| SplitError::malformed_timestamp(raw, e.to_string()))?;
    if bytes.len() > 8 {
        return Err(SplitError::malformed_timestamp(
            raw,
            "field does not fit in 64 bits",
        ));
    }

    Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}

/// Format microseconds since the epoch as `YYYYMMDD-HHMMSS`.
///
/// Returns `None` when the value is beyond the supported calendar range.
pub fn format_timestamp(micros: u64) -> Option<String> {
    let secs = i64::try_from(micros / MICROS_PER_SECOND).ok()?;
    DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}
