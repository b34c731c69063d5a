// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Input byte sources.
//!
//! The splitter reads from standard input, a plain file, or a gzip file.
//! The kind is picked from the path: `-` is stdin, a `.gz` suffix is gzip,
//! anything else is read as-is.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::{Result, SplitError};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Where the message log comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// Uncompressed file
    File(PathBuf),
    /// Gzip-compressed file, decompressed while reading
    Gzip(PathBuf),
}

impl InputSource {
    /// Select a source from a path argument.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.as_os_str() == STDIN_PATH {
            return InputSource::Stdin;
        }

        let is_gzip = path.extension().is_some_and(|e| e == "gz");

        if is_gzip {
            InputSource::Gzip(path.to_path_buf())
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    /// Check if reads are decompressed.
    pub fn is_compressed(&self) -> bool {
        matches!(self, InputSource::Gzip(_))
    }

    /// Open the source for sequential reading.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            InputSource::Stdin => Ok(Box::new(std::io::stdin().lock())),
            InputSource::File(path) => {
                let file = open_file(path)?;
                Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
            }
            InputSource::Gzip(path) => {
                let file = open_file(path)?;
                let buffered = BufReader::with_capacity(READ_BUFFER_SIZE, file);
                Ok(Box::new(MultiGzDecoder::new(buffered)))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Gzip(path) => write!(f, "{} (gzip)", path.display()),
        }
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| SplitError::io(format!("open {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("msgsplit_source_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_from_path() {
        assert_eq!(InputSource::from_path("-"), InputSource::Stdin);
        assert_eq!(
            InputSource::from_path("log.bin"),
            InputSource::File(PathBuf::from("log.bin"))
        );
        assert_eq!(
            InputSource::from_path("dir/log.bin.gz"),
            InputSource::Gzip(PathBuf::from("dir/log.bin.gz"))
        );
        assert!(!InputSource::from_path("gz").is_compressed());
    }

    #[test]
    fn test_gzip_suffix_is_case_sensitive() {
        assert!(InputSource::from_path("log.gz").is_compressed());
        assert_eq!(
            InputSource::from_path("LOG.GZ"),
            InputSource::File(PathBuf::from("LOG.GZ"))
        );
        assert!(!InputSource::from_path("log.Gz").is_compressed());
    }

    #[test]
    fn test_open_missing_file() {
        let source = InputSource::from_path("/nonexistent/msgsplit/input.bin");
        let err = source.open().err().unwrap();
        assert!(matches!(err, SplitError::Io { .. }));
    }

    #[test]
    fn test_read_plain_file() {
        let path = temp_file("plain.bin");
        std::fs::write(&path, b"plain contents").unwrap();

        let mut reader = InputSource::from_path(&path).open().unwrap();
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"plain contents");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_multi_member_gzip() {
        let path = temp_file("multi.bin.gz");
        let mut data = Vec::new();
        for part in [&b"first "[..], &b"second"[..]] {
            let mut enc = GzEncoder::new(Vec::new(), Compression::fast());
            enc.write_all(part).unwrap();
            data.extend(enc.finish().unwrap());
        }
        std::fs::write(&path, data).unwrap();

        let mut reader = InputSource::from_path(&path).open().unwrap();
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"first second");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_display() {
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
        assert_eq!(
            InputSource::from_path("a.gz").to_string(),
            "a.gz (gzip)"
        );
    }
}
