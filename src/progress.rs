//! Progress and summary output
//!
//! The optional spinner renders on stderr via indicatif, keeping stdout
//! clean for the one-line-per-pair reports. The header and summary are
//! styled with console and suppressed in quiet mode.

use crate::dispatch::RunSummary;
use console::style;
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while comparisons are in flight
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Set a status message
    pub fn set_status(&self, status: &str) {
        self.bar.set_message(status.to_string());
    }

    /// Finish and clear the spinner
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a header before comparisons begin
pub fn print_header(dir1: &str, files1: usize, dir2: &str, files2: usize, max_tasks: usize) {
    println!(
        "{} {}",
        style("paircmp").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!(
        "  {} {} ({} files)",
        style("Dir 1:").bold(),
        dir1,
        format_number(files1 as u64)
    );
    println!(
        "  {} {} ({} files)",
        style("Dir 2:").bold(),
        dir2,
        format_number(files2 as u64)
    );
    println!(
        "  {} {} pairs, at most {} concurrent",
        style("Work:").bold(),
        format_number(files1 as u64 * files2 as u64),
        max_tasks
    );
    println!();
}

/// Print a summary of the run results
pub fn print_summary(summary: &RunSummary) {
    let duration_secs = summary.duration.as_secs_f64();
    let rate = if duration_secs > 0.0 {
        summary.reaped() as f64 / duration_secs
    } else {
        0.0
    };

    println!();
    println!("{}", style("Comparison Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!(
        "  {} {}",
        style("Pairs:").bold(),
        format_number(summary.pairs_total)
    );
    println!(
        "  {} {}",
        style("Equal:").bold(),
        format_number(summary.equal)
    );
    println!(
        "  {} {}",
        style("Differ:").bold(),
        format_number(summary.differ)
    );
    if summary.errors > 0 {
        println!(
            "  {} {}",
            style("Errors:").yellow().bold(),
            format_number(summary.errors)
        );
    }
    if summary.launch_failures > 0 {
        println!(
            "  {} {}",
            style("Launch failures:").yellow().bold(),
            format_number(summary.launch_failures)
        );
    }
    println!(
        "  {} {}",
        style("Bytes scanned:").bold(),
        format_size(summary.bytes_compared, BINARY)
    );
    println!(
        "  {} {:.1}s ({:.0} pairs/sec, peak {} active)",
        style("Duration:").bold(),
        duration_secs,
        rate,
        summary.peak_active
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
