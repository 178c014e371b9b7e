//! Byte-level file comparison
//!
//! Two files are compared in fixed-size chunks (64 KiB by default, large
//! enough to amortize syscall overhead, small enough to bound per-task
//! memory). An optional fast path rejects files of unequal size before
//! any content is read.
//!
//! Outcomes are three-valued: `Equal`, `Differ`, or `Error`. Open and
//! read failures are folded into the `Error` verdict rather than
//! propagated, because a failure on one pair must never affect any other
//! pair in the run. Every outcome carries the number of content bytes
//! that were actually scanned before the verdict was reached.

use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Default read chunk size (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Chunk size bounds accepted by the CLI
pub const MIN_CHUNK_SIZE: usize = 512;
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Three-valued comparison verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Files have identical content
    Equal,

    /// Files differ in size or content
    Differ,

    /// The comparison itself failed (open or read error)
    Error,
}

impl Verdict {
    /// Token used in report lines
    pub fn token(&self) -> &'static str {
        match self {
            Verdict::Equal => "EQUAL",
            Verdict::Differ => "DIFFER",
            Verdict::Error => "ERROR",
        }
    }

    /// Per-task completion code: 0 = Equal, 1 = Differ, 3 = Error.
    /// Code 2 is reserved for CLI usage errors and never used here.
    pub fn completion_code(&self) -> u8 {
        match self {
            Verdict::Equal => 0,
            Verdict::Differ => 1,
            Verdict::Error => 3,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Outcome of comparing one pair of files
#[derive(Debug, Clone)]
pub struct Comparison {
    /// The verdict
    pub verdict: Verdict,

    /// Content bytes scanned before the verdict was reached. Zero for a
    /// size-based fast reject and for two empty files; on a content
    /// mismatch this counts the whole chunk that was scanned, not the
    /// offset of the first differing byte.
    pub bytes_compared: u64,

    /// Failure detail, present only for `Verdict::Error`
    pub detail: Option<String>,
}

impl Comparison {
    fn equal(bytes_compared: u64) -> Self {
        Self {
            verdict: Verdict::Equal,
            bytes_compared,
            detail: None,
        }
    }

    fn differ(bytes_compared: u64) -> Self {
        Self {
            verdict: Verdict::Differ,
            bytes_compared,
            detail: None,
        }
    }

    fn error(bytes_compared: u64, detail: String) -> Self {
        Self {
            verdict: Verdict::Error,
            bytes_compared,
            detail: Some(detail),
        }
    }
}

/// Tunables for the comparison loop
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Reject files of unequal size before reading any content
    pub size_check: bool,

    /// Read chunk size in bytes
    pub chunk_size: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            size_check: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Compare the content of two files.
///
/// With `size_check` enabled, files of unequal size are rejected with
/// zero bytes read. Otherwise both files are read in lockstep chunks and
/// compared byte-for-byte.
///
/// A read that drains one file while the other still has data is treated
/// as a defensive `Differ`: it can only happen when a file was mutated
/// between the size check and the read, and the files are demonstrably
/// not equal at that point.
pub fn compare_files(path_a: &Path, path_b: &Path, opts: &CompareOptions) -> Comparison {
    if opts.size_check {
        let size_a = match fs::metadata(path_a) {
            Ok(m) => m.len(),
            Err(e) => return Comparison::error(0, format!("stat {}: {e}", path_a.display())),
        };
        let size_b = match fs::metadata(path_b) {
            Ok(m) => m.len(),
            Err(e) => return Comparison::error(0, format!("stat {}: {e}", path_b.display())),
        };

        if size_a != size_b {
            return Comparison::differ(0);
        }
    }

    let mut file_a = match File::open(path_a) {
        Ok(f) => f,
        Err(e) => return Comparison::error(0, format!("open {}: {e}", path_a.display())),
    };
    let mut file_b = match File::open(path_b) {
        Ok(f) => f,
        Err(e) => return Comparison::error(0, format!("open {}: {e}", path_b.display())),
    };

    let mut buf_a = vec![0u8; opts.chunk_size];
    let mut buf_b = vec![0u8; opts.chunk_size];
    let mut bytes_compared: u64 = 0;

    loop {
        let n_a = match read_chunk(&mut file_a, &mut buf_a) {
            Ok(n) => n,
            Err(e) => {
                return Comparison::error(
                    bytes_compared,
                    format!("read {}: {e}", path_a.display()),
                )
            }
        };
        let n_b = match read_chunk(&mut file_b, &mut buf_b) {
            Ok(n) => n,
            Err(e) => {
                return Comparison::error(
                    bytes_compared,
                    format!("read {}: {e}", path_b.display()),
                )
            }
        };

        if n_a == 0 && n_b == 0 {
            return Comparison::equal(bytes_compared);
        }

        let common = n_a.min(n_b);
        if buf_a[..common] != buf_b[..common] {
            return Comparison::differ(bytes_compared + common as u64);
        }

        // Chunks fill completely until EOF, so unequal lengths mean one
        // file ended first: different lengths, hence different content.
        if n_a != n_b {
            return Comparison::differ(bytes_compared + common as u64);
        }

        bytes_compared += n_a as u64;
    }
}

/// Read until `buf` is full or EOF, retrying interrupted reads.
fn read_chunk(file: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
