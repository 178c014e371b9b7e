//! Comparison task unit
//!
//! One task owns exactly one (fileA, fileB) pair. It runs the content
//! comparator, prints its own report line, and sends a typed report back
//! over the completion channel. Tasks never retry and never talk to each
//! other; the report is the in-process replacement for a child exit
//! status, carrying the verdict plus the bytes-compared side channel.

use crate::compare::{compare_files, CompareOptions, Comparison};
use crate::fileset::FileEntry;
use crossbeam_channel::Sender;
use std::thread::{Builder, JoinHandle};
use tracing::warn;

/// One unit of comparison work: an ordered pair drawn from the product
#[derive(Debug, Clone)]
pub struct PairTask {
    /// Launch-order identity, printed in the report line
    pub id: u64,

    /// Position (i, j) in the product enumeration
    pub index: (usize, usize),

    /// File from the first set
    pub entry_a: FileEntry,

    /// File from the second set
    pub entry_b: FileEntry,
}

/// Completion report sent back to the dispatcher
#[derive(Debug)]
pub struct TaskReport {
    /// Task identity
    pub id: u64,

    /// Position (i, j) in the product enumeration
    pub index: (usize, usize),

    /// Comparison outcome
    pub comparison: Comparison,
}

impl PairTask {
    /// Spawn the task on its own named OS thread.
    ///
    /// The returned handle is dropped by the caller (the thread is
    /// detached); completion is observed through the channel, not
    /// through join. Spawn failure is returned to the dispatcher, which
    /// treats it as a recoverable per-pair launch failure.
    pub fn spawn(
        self,
        opts: CompareOptions,
        reports: Sender<TaskReport>,
    ) -> std::io::Result<JoinHandle<()>> {
        Builder::new()
            .name(format!("cmp-{}", self.id))
            .spawn(move || self.run(&opts, &reports))
    }

    /// Run the comparison and report the outcome.
    fn run(self, opts: &CompareOptions, reports: &Sender<TaskReport>) {
        let comparison = compare_files(&self.entry_a.path, &self.entry_b.path, opts);

        if let Some(detail) = &comparison.detail {
            warn!(
                task = self.id,
                file_a = %self.entry_a.name,
                file_b = %self.entry_b.name,
                "Comparison failed: {detail}"
            );
        }

        // A single println! holds the stdout lock for the whole line, so
        // concurrent tasks cannot interleave partial lines.
        println!(
            "task={} {} <-> {} bytes={} result={}",
            self.id,
            self.entry_a.name,
            self.entry_b.name,
            comparison.bytes_compared,
            comparison.verdict
        );

        let report = TaskReport {
            id: self.id,
            index: self.index,
            comparison,
        };

        // The dispatcher only drops the receiver after draining every
        // outstanding task, so this send can only fail if the dispatcher
        // itself died; nothing useful is left to do with the report.
        let _ = reports.send(report);
    }
}
