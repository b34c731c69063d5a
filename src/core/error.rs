// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for msgsplit.
//!
//! Provides error types for the splitting pipeline:
//! - Timestamp field decoding
//! - Input, output and rename I/O
//! - Configuration validation

use std::fmt;

/// Errors that can occur while splitting a message log.
#[derive(Debug, Clone)]
pub enum SplitError {
    /// Timestamp field of a message header could not be decoded
    MalformedTimestamp {
        /// Raw field contents (lossy)
        field: String,
        /// Why decoding failed
        reason: String,
    },

    /// Read, write or rename failure
    Io {
        /// Operation that failed (e.g. "open input", "rename chunk")
        operation: String,
        /// Error message
        message: String,
    },

    /// Invalid configuration value
    InvalidConfig {
        /// Name of the offending setting
        field: String,
        /// Validation error message
        reason: String,
    },

    /// Header signature pattern failed to compile
    InvalidPattern {
        /// Pattern source
        pattern: String,
        /// Compiler error message
        reason: String,
    },
}

impl SplitError {
    /// Create a malformed timestamp error.
    pub fn malformed_timestamp(field: &[u8], reason: impl Into<String>) -> Self {
        SplitError::MalformedTimestamp {
            field: String::from_utf8_lossy(field).into_owned(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error for the given operation.
    pub fn io(operation: impl Into<String>, err: std::io::Error) -> Self {
        SplitError::Io {
            operation: operation.into(),
            message: err.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SplitError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        SplitError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            SplitError::MalformedTimestamp { field, reason } => {
                vec![("field", field.clone()), ("reason", reason.clone())]
            }
            SplitError::Io { operation, message } => vec![
                ("operation", operation.clone()),
                ("message", message.clone()),
            ],
            SplitError::InvalidConfig { field, reason } => {
                vec![("field", field.clone()), ("reason", reason.clone())]
            }
            SplitError::InvalidPattern { pattern, reason } => {
                vec![("pattern", pattern.clone()), ("reason", reason.clone())]
            }
        }
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::MalformedTimestamp { field, reason } => {
                write!(f, "Malformed timestamp field '{field}': {reason}")
            }
            SplitError::Io { operation, message } => {
                write!(f, "I/O error during {operation}: {message}")
            }
            SplitError::InvalidConfig { field, reason } => {
                write!(f, "Invalid configuration for '{field}': {reason}")
            }
            SplitError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid header pattern '{pattern}': {reason}")
            }
        }
    }
}

impl std::error::Error for SplitError {}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        SplitError::io("stream", err)
    }
}

/// Result type for msgsplit operations.
pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_timestamp_error() {
        let err = SplitError::malformed_timestamp(b"00000ZZZ", "invalid hex digit");
        assert!(matches!(err, SplitError::MalformedTimestamp { .. }));
        assert_eq!(
            err.to_string(),
            "Malformed timestamp field '00000ZZZ': invalid hex digit"
        );
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SplitError::io("open input", io_err);
        assert_eq!(err.to_string(), "I/O error during open input: no such file");
    }

    #[test]
    fn test_invalid_config_error() {
        let err = SplitError::invalid_config("compression_level", "must be between 1 and 9");
        assert!(matches!(err, SplitError::InvalidConfig { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'compression_level': must be between 1 and 9"
        );
    }

    #[test]
    fn test_invalid_pattern_error() {
        let err = SplitError::invalid_pattern("(", "unclosed group");
        assert_eq!(err.to_string(), "Invalid header pattern '(': unclosed group");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: SplitError = io_err.into();
        assert!(matches!(err, SplitError::Io { .. }));
        assert_eq!(err.to_string(), "I/O error during stream: eof");
    }

    #[test]
    fn test_log_fields_malformed_timestamp() {
        let err = SplitError::malformed_timestamp(b"XYZ", "bad");
        let fields = err.log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], ("field", "XYZ".to_string()));
        assert_eq!(fields[1], ("reason", "bad".to_string()));
    }

    #[test]
    fn test_log_fields_io() {
        let err = SplitError::Io {
            operation: "rename chunk".to_string(),
            message: "disk full".to_string(),
        };
        let fields = err.log_fields();
        assert_eq!(fields[0], ("operation", "rename chunk".to_string()));
        assert_eq!(fields[1], ("message", "disk full".to_string()));
    }

    #[test]
    fn test_error_clone() {
        let err1 = SplitError::invalid_config("prefix", "empty");
        let err2 = err1.clone();
        assert_eq!(err1.to_string(), err2.to_string());
    }
}
