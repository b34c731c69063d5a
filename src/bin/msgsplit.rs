// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # msgsplit CLI
//!
//! Split a TSMS message log into gzip chunks named after the wall-clock
//! time of their first and last messages.
//!
//! ## Usage
//!
//! ```sh
//! # 50 MB chunks with the FOURSIGHT prefix
//! msgsplit capture.bin
//!
//! # Read a compressed capture, 10 MB chunks, fastest compression
//! msgsplit capture.bin.gz -p RUN42 -m 10 -c 1
//!
//! # Read stdin and print a JSON report
//! cat capture.bin | msgsplit - --json
//! ```

mod common;

use std::path::PathBuf;
use std::process;

use anyhow::Context as _;
use clap::Parser;
use tracing::{error, info};

use common::{format_bytes, Result};
use msgsplit::split::{DEFAULT_CHUNK_MEGABYTES, DEFAULT_COMPRESSION_LEVEL, DEFAULT_PREFIX};
use msgsplit::{InputSource, NamingScheme, SplitConfigBuilder, SplitError, Splitter};

/// Take the input file and split it into chunks of a specified size.
///
/// Chunks always end on a message boundary, so each one is at least the
/// requested size and at most one message longer.
#[derive(Parser, Clone, Debug)]
#[command(name = "msgsplit")]
#[command(about = "Split TSMS message logs into timestamp-named gzip chunks", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Input file (`-` for stdin, `.gz` files are decompressed)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// The prefix to use on the output files
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// The chunk size in megabytes
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_CHUNK_MEGABYTES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    megabytes: u64,

    /// The chunk size in bytes (overrides --megabytes)
    #[arg(long, value_name = "BYTES", conflicts_with = "megabytes")]
    chunk_bytes: Option<u64>,

    /// Compression for gzip, 1 fastest to 9 slowest (most compression)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_COMPRESSION_LEVEL,
        value_parser = clap::value_parser!(u32).range(1..=9)
    )]
    compression: u32,

    /// Directory for the output files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Append the chunk sequence number to each file name
    #[arg(long)]
    indexed: bool,

    /// Print a JSON report instead of progress lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    common::init_logging(cli.verbose, cli.quiet);

    let naming = if cli.indexed {
        NamingScheme::Indexed
    } else {
        NamingScheme::Timestamps
    };

    let mut builder = SplitConfigBuilder::new()
        .prefix(cli.prefix.as_str())
        .chunk_megabytes(cli.megabytes)
        .compression_level(cli.compression)
        .output_dir(&cli.output_dir)
        .naming(naming);
    if let Some(bytes) = cli.chunk_bytes {
        builder = builder.chunk_size(bytes);
    }
    let splitter = Splitter::new(builder.build()?)?;
    let config = splitter.config();

    let source = InputSource::from_path(&cli.file);
    info!(
        input = %source,
        compressed = source.is_compressed(),
        chunk_size = %format_bytes(config.chunk_size),
        level = config.compression_level,
        "splitting"
    );

    let mut reader = source.open()?;

    let json = cli.json;
    let report = splitter
        .run_with(&mut reader, |record| {
            if !json {
                println!("Part written: {}", record.index);
            }
        })
        .with_context(|| format!("failed to split {source}"))?;

    info!(
        chunks = report.chunk_count(),
        bytes = %format_bytes(report.input_bytes),
        written = %format_bytes(report.chunk_bytes()),
        preamble = report.preamble_bytes,
        "split complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn main() {
    let result = run();

    if let Err(e) = result {
        if let Some(err) = e.downcast_ref::<SplitError>() {
            let fields = err
                .log_fields()
                .into_iter()
                .map(|(key, value)| format!("{key}={value:?}"))
                .collect::<Vec<_>>()
                .join(" ");
            error!(%fields, "split failed");
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
