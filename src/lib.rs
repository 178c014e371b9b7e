//! paircmp - bounded-concurrency pairwise file comparator
//!
//! Compares every regular file in one directory against every regular
//! file in another (the full Cartesian product), running comparisons
//! concurrently but never exceeding a caller-specified ceiling of
//! simultaneously active tasks.
//!
//! # Features
//!
//! - **Bounded concurrency**: an admission loop gates task launches so
//!   at most N comparisons are ever in flight.
//!
//! - **Fast size reject**: files of unequal size are rejected from
//!   metadata alone, with zero content bytes read (can be disabled).
//!
//! - **Memory efficient**: the product is enumerated lazily with index
//!   loops; only the two file lists are ever held in memory.
//!
//! - **Failure isolation**: an open or read failure on one pair becomes
//!   an ERROR report line for that pair and never disturbs the rest of
//!   the run.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐        ┌──────────────┐
//! │   FileSet 1  │        │   FileSet 2  │
//! │ (DIR1 files) │        │ (DIR2 files) │
//! └──────┬───────┘        └───────┬──────┘
//!        │        (i, j)          │
//!        └─────────┬──────────────┘
//!                  ▼
//!        ┌──────────────────┐
//!        │    Dispatcher    │  active <= N
//!        │  spawn / reap    │◄─────────────┐
//!        └────────┬─────────┘              │
//!                 │ one thread per pair    │ TaskReport
//!                 ▼                        │ (verdict, bytes)
//!        ┌──────────────────┐              │
//!        │ Comparison tasks │──────────────┘
//!        │  chunked compare │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```bash
//! # Compare two snapshot directories, 8 comparisons at a time
//! paircmp ./snap/monday ./snap/tuesday 8
//!
//! # Force full content reads even when sizes differ
//! paircmp dir1 dir2 4 --no-size-check
//! ```

pub mod compare;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fileset;
pub mod progress;

pub use compare::{compare_files, CompareOptions, Comparison, Verdict};
pub use config::{CliArgs, CompareConfig};
pub use dispatch::{Dispatcher, RunSummary};
pub use error::{PaircmpError, Result};
pub use fileset::{FileEntry, FileSet};
