//! Dispatcher - drives the comparison product to completion
//!
//! The dispatcher is responsible for:
//! - Enumerating the full product of the two file sets lazily (nested
//!   index loops, never a materialized pair list)
//! - Admission control: blocking on the completion channel whenever the
//!   active count reaches the configured ceiling
//! - Reaping every spawned task exactly once, in whatever order tasks
//!   happen to finish
//! - Surviving spawn failures: a failed launch is logged and skipped,
//!   the run keeps going
//! - Aggregating verdict counts and bytes into the final summary
//!
//! All mutable bookkeeping (the active count, the tallies) lives on the
//! dispatcher's own thread and is only updated when a blocking receive
//! returns, so none of it needs synchronization.

use crate::compare::Verdict;
use crate::config::CompareConfig;
use crate::dispatch::task::{PairTask, TaskReport};
use crate::error::{DispatchError, Result};
use crate::fileset::FileSet;
use crossbeam_channel::{unbounded, Receiver};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// Result of a completed comparison run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Size of the product: |FileSet1| x |FileSet2|
    pub pairs_total: u64,

    /// Tasks actually launched (equals pairs_total unless launches failed)
    pub launched: u64,

    /// Pairs with identical content
    pub equal: u64,

    /// Pairs that differ in size or content
    pub differ: u64,

    /// Pairs whose comparison failed (open/read errors)
    pub errors: u64,

    /// Pairs skipped because the task could not be spawned
    pub launch_failures: u64,

    /// Total content bytes scanned across all tasks
    pub bytes_compared: u64,

    /// Highest number of simultaneously active tasks observed
    pub peak_active: usize,

    /// Wall-clock time for the run
    pub duration: Duration,
}

impl RunSummary {
    /// True when every pair in the product produced a report
    pub fn completed(&self) -> bool {
        self.launch_failures == 0
    }

    /// Reports received; always equals `launched` after a clean drain
    pub fn reaped(&self) -> u64 {
        self.equal + self.differ + self.errors
    }
}

/// Drives the full comparison product with bounded concurrency
#[derive(Debug)]
pub struct Dispatcher {
    /// Validated configuration
    config: CompareConfig,

    /// Files from the first directory (outer loop)
    set_a: FileSet,

    /// Files from the second directory (inner loop)
    set_b: FileSet,
}

impl Dispatcher {
    /// Enumerate both directories and build a dispatcher.
    ///
    /// Fails if either directory cannot be listed; that is the only
    /// fatal filesystem condition in a run.
    pub fn new(config: CompareConfig) -> Result<Self> {
        let set_a = FileSet::collect(&config.dir1)?;
        let set_b = FileSet::collect(&config.dir2)?;

        info!(
            dir1 = %config.dir1.display(),
            files1 = set_a.len(),
            dir2 = %config.dir2.display(),
            files2 = set_b.len(),
            max_tasks = config.max_tasks,
            "File sets collected"
        );

        Ok(Self {
            config,
            set_a,
            set_b,
        })
    }

    /// File counts of the two sets, for the header line
    pub fn file_counts(&self) -> (usize, usize) {
        (self.set_a.len(), self.set_b.len())
    }

    /// Run every comparison in the product to completion.
    ///
    /// At most `max_tasks` comparisons run at any instant. Completion
    /// order is unconstrained; the summary is the same regardless of the
    /// order reports arrive in.
    pub fn run(self) -> Result<RunSummary> {
        let start = Instant::now();
        let max_tasks = self.config.max_tasks;

        let mut summary = RunSummary {
            pairs_total: self.set_a.len() as u64 * self.set_b.len() as u64,
            ..RunSummary::default()
        };

        let (report_tx, report_rx) = unbounded::<TaskReport>();

        // Outstanding task count. Incremented on spawn, decremented once
        // per reaped report, only ever touched on this thread.
        let mut active: usize = 0;
        let mut next_id: u64 = 0;

        for i in 0..self.set_a.len() {
            for j in 0..self.set_b.len() {
                // Admission control: one blocking receive accounts for
                // exactly one completed task, so keep draining until the
                // count is back under the ceiling.
                while active >= max_tasks {
                    let report = report_rx
                        .recv()
                        .map_err(|_| DispatchError::ChannelClosed { outstanding: active })?;
                    active -= 1;
                    record(&mut summary, &report);
                }

                let task = PairTask {
                    id: next_id,
                    index: (i, j),
                    entry_a: self.set_a[i].clone(),
                    entry_b: self.set_b[j].clone(),
                };

                match task.spawn(self.config.compare.clone(), report_tx.clone()) {
                    Ok(_handle) => {
                        // Detached; completion arrives via the channel.
                        next_id += 1;
                        active += 1;
                        summary.launched += 1;
                        summary.peak_active = summary.peak_active.max(active);
                        trace!(task = next_id - 1, i, j, active, "Task launched");
                    }
                    Err(e) => {
                        // Resource exhaustion: skip this pair, free one
                        // slot if possible, keep the run going.
                        warn!(i, j, error = %e, "Failed to spawn comparison task, skipping pair");
                        summary.launch_failures += 1;

                        if active > 0 {
                            if let Ok(report) = report_rx.recv() {
                                active -= 1;
                                record(&mut summary, &report);
                            }
                        }
                    }
                }
            }
        }

        // Our own sender is no longer needed; once every task has sent
        // its report and exited, a further receive returns Err instead
        // of blocking forever.
        drop(report_tx);

        self.drain(&report_rx, &mut summary, &mut active)?;

        summary.duration = start.elapsed();

        info!(
            pairs = summary.pairs_total,
            equal = summary.equal,
            differ = summary.differ,
            errors = summary.errors,
            launch_failures = summary.launch_failures,
            peak_active = summary.peak_active,
            duration_ms = summary.duration.as_millis() as u64,
            "Run complete"
        );

        Ok(summary)
    }

    /// Reap every outstanding task after the product is exhausted.
    fn drain(
        &self,
        report_rx: &Receiver<TaskReport>,
        summary: &mut RunSummary,
        active: &mut usize,
    ) -> Result<()> {
        while *active > 0 {
            match report_rx.recv() {
                Ok(report) => {
                    *active -= 1;
                    record(summary, &report);
                }
                Err(_) => {
                    // Every live task holds a sender, so a closed channel
                    // means a task died without reporting.
                    return Err(DispatchError::ChannelClosed {
                        outstanding: *active,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

/// Fold one completion report into the running tallies.
fn record(summary: &mut RunSummary, report: &TaskReport) {
    debug!(
        task = report.id,
        verdict = %report.comparison.verdict,
        bytes = report.comparison.bytes_compared,
        "Task reaped"
    );

    summary.bytes_compared += report.comparison.bytes_compared;
    match report.comparison.verdict {
        Verdict::Equal => summary.equal += 1,
        Verdict::Differ => summary.differ += 1,
        Verdict::Error => summary.errors += 1,
    }
}
