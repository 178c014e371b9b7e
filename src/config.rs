//! Configuration types for paircmp
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation
//!
//! Validation happens before any directory is touched, so an invalid
//! concurrency value can never start a partial run.

use crate::compare::{CompareOptions, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Maximum accepted concurrency ceiling. Values beyond this are almost
/// certainly a typo and would only exhaust thread-spawn resources.
pub const MAX_CONCURRENCY: usize = 1_000_000;

/// Compare every file in DIR1 against every file in DIR2
#[derive(Parser, Debug, Clone)]
#[command(
    name = "paircmp",
    version,
    about = "Compare every file in DIR1 against every file in DIR2, at most N comparisons at a time",
    long_about = "Enumerates the regular files directly inside two directories and compares \
                  every (DIR1, DIR2) file pair byte-for-byte, running at most N comparison \
                  tasks concurrently.\n\n\
                  One report line is printed per pair: the task id, both base names, the \
                  number of content bytes scanned, and an EQUAL/DIFFER/ERROR verdict.",
    after_help = "EXAMPLES:\n    \
        paircmp ./snapshots/monday ./snapshots/tuesday 8\n    \
        paircmp /etc/conf.d /srv/backup/conf.d 4 --no-size-check\n    \
        paircmp dir1 dir2 16 -p -q"
)]
pub struct CliArgs {
    /// First directory (outer loop of the comparison product)
    #[arg(value_name = "DIR1")]
    pub dir1: PathBuf,

    /// Second directory (inner loop of the comparison product)
    #[arg(value_name = "DIR2")]
    pub dir2: PathBuf,

    /// Maximum number of concurrently running comparisons
    #[arg(value_name = "N", allow_hyphen_values = true)]
    pub concurrency: i64,

    /// Disable the size-based fast reject (always read content)
    #[arg(long)]
    pub no_size_check: bool,

    /// Read chunk size in bytes
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_name = "BYTES")]
    pub chunk_size: usize,

    /// Show a progress spinner on stderr
    #[arg(short = 'p', long)]
    pub progress: bool,

    /// Quiet mode - suppress the header and summary
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (debug-level logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// First directory
    pub dir1: PathBuf,

    /// Second directory
    pub dir2: PathBuf,

    /// Concurrency ceiling (validated, 1..=MAX_CONCURRENCY)
    pub max_tasks: usize,

    /// Comparator tunables
    pub compare: CompareOptions,

    /// Show progress spinner
    pub show_progress: bool,

    /// Show header and summary
    pub show_banner: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl CompareConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.concurrency < 1 || args.concurrency > MAX_CONCURRENCY as i64 {
            return Err(ConfigError::InvalidConcurrency {
                value: args.concurrency,
                max: MAX_CONCURRENCY,
            });
        }

        if args.chunk_size < MIN_CHUNK_SIZE || args.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::InvalidChunkSize {
                size: args.chunk_size,
                min: MIN_CHUNK_SIZE,
                max: MAX_CHUNK_SIZE,
            });
        }

        Ok(Self {
            dir1: args.dir1,
            dir2: args.dir2,
            max_tasks: args.concurrency as usize,
            compare: CompareOptions {
                size_check: !args.no_size_check,
                chunk_size: args.chunk_size,
            },
            show_progress: args.progress,
            show_banner: !args.quiet,
            verbose: args.verbose,
        })
    }
}
