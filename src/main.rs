//! paircmp - bounded-concurrency pairwise file comparator
//!
//! Entry point for the CLI application.
//!
//! Exit codes: 0 = run completed (pair verdicts are in the stdout
//! lines), 1 = a directory could not be listed or the run failed,
//! 2 = invalid arguments.

use anyhow::Context;
use clap::Parser;
use paircmp::config::{CliArgs, CompareConfig};
use paircmp::dispatch::Dispatcher;
use paircmp::error::PaircmpError;
use paircmp::progress::{print_header, print_summary, ProgressReporter};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments (clap exits with code 2 on usage errors)
    let args = CliArgs::parse();

    setup_logging(args.verbose);

    // Validate before touching either directory
    let config = match CompareConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<PaircmpError>()
                .map(PaircmpError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(config: CompareConfig) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(config.clone()).context("Failed to enumerate directories")?;

    let (files1, files2) = dispatcher.file_counts();

    if config.show_banner {
        print_header(
            &config.dir1.display().to_string(),
            files1,
            &config.dir2.display().to_string(),
            files2,
            config.max_tasks,
        );
    }

    let progress = if config.show_progress {
        let p = ProgressReporter::new();
        p.set_status(&format!("Comparing {} pairs...", files1 * files2));
        Some(p)
    } else {
        None
    };

    let summary = dispatcher.run().context("Comparison run failed")?;

    if let Some(ref p) = progress {
        p.finish_and_clear();
    }

    if config.show_banner {
        print_summary(&summary);
    }

    if !summary.completed() {
        warn!(
            launch_failures = summary.launch_failures,
            "Some pairs were skipped due to launch failures"
        );
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    // Default to warnings only: stdout carries the report lines and
    // stderr is reserved for structural failures.
    let filter = if verbose {
        EnvFilter::new("paircmp=debug,warn")
    } else {
        EnvFilter::new("paircmp=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
