//! Integration tests for paircmp
//!
//! These exercise the library end to end on real temporary directories:
//! file set enumeration, the comparison product, admission control, and
//! the aggregated summary.

use paircmp::compare::{compare_files, CompareOptions, Verdict, DEFAULT_CHUNK_SIZE};
use paircmp::config::CompareConfig;
use paircmp::dispatch::Dispatcher;
use paircmp::fileset::FileSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &[u8]) {
    let mut f = File::create(dir.join(name)).unwrap();
    f.write_all(content).unwrap();
}

fn config(dir1: &Path, dir2: &Path, max_tasks: usize) -> CompareConfig {
    CompareConfig {
        dir1: dir1.to_path_buf(),
        dir2: dir2.to_path_buf(),
        max_tasks,
        compare: CompareOptions::default(),
        show_progress: false,
        show_banner: false,
        verbose: false,
    }
}

#[test]
fn test_report_count_equals_product_size() {
    let d1 = tempdir().unwrap();
    let d2 = tempdir().unwrap();

    for n in 0..5 {
        write_file(d1.path(), &format!("left{n}.dat"), &[n; 10]);
    }
    for n in 0..7 {
        write_file(d2.path(), &format!("right{n}.dat"), &[n; 10]);
    }

    let summary = Dispatcher::new(config(d1.path(), d2.path(), 3))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.pairs_total, 35);
    assert_eq!(summary.reaped(), 35);
    assert_eq!(summary.equal + summary.differ + summary.errors, 35);
    assert!(summary.peak_active <= 3);
    assert!(summary.completed());
}

#[test]
fn test_known_scenario_one_equal_one_differ() {
    // D1 = {a.txt "foo"}, D2 = {b.txt "foo", c.txt "bar"}, N = 2
    let d1 = tempdir().unwrap();
    let d2 = tempdir().unwrap();

    write_file(d1.path(), "a.txt", b"foo");
    write_file(d2.path(), "b.txt", b"foo");
    write_file(d2.path(), "c.txt", b"bar");

    let summary = Dispatcher::new(config(d1.path(), d2.path(), 2))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.pairs_total, 2);
    assert_eq!(summary.equal, 1);
    assert_eq!(summary.differ, 1);
    assert_eq!(summary.errors, 0);
}

#[test]
fn test_empty_first_directory_is_not_an_error() {
    let d1 = tempdir().unwrap();
    let d2 = tempdir().unwrap();
    write_file(d2.path(), "only.txt", b"content");

    let summary = Dispatcher::new(config(d1.path(), d2.path(), 2))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.pairs_total, 0);
    assert_eq!(summary.reaped(), 0);
}

#[test]
fn test_self_compare_reads_whole_file() {
    let d = tempdir().unwrap();
    write_file(d.path(), "self.bin", &vec![7u8; 150_000]);
    let path = d.path().join("self.bin");

    let result = compare_files(&path, &path, &CompareOptions::default());
    assert_eq!(result.verdict, Verdict::Equal);
    assert_eq!(result.bytes_compared, 150_000);
}

#[test]
fn test_size_mismatch_never_reads_content() {
    let d = tempdir().unwrap();
    write_file(d.path(), "small.txt", b"abc");
    write_file(d.path(), "large.txt", b"abcdef");

    let result = compare_files(
        &d.path().join("small.txt"),
        &d.path().join("large.txt"),
        &CompareOptions::default(),
    );
    assert_eq!(result.verdict, Verdict::Differ);
    assert_eq!(result.bytes_compared, 0);
}

#[test]
fn test_verdict_symmetry_across_chunk_boundaries() {
    let d = tempdir().unwrap();
    let mut left = vec![1u8; 3 * 1024];
    let right = vec![1u8; 3 * 1024];
    left[2500] = 9;

    write_file(d.path(), "left.bin", &left);
    write_file(d.path(), "right.bin", &right);

    // Uneven chunk size so the mismatch lands mid-chunk
    let opts = CompareOptions {
        size_check: true,
        chunk_size: 1000,
    };

    let ab = compare_files(&d.path().join("left.bin"), &d.path().join("right.bin"), &opts);
    let ba = compare_files(&d.path().join("right.bin"), &d.path().join("left.bin"), &opts);
    assert_eq!(ab.verdict, Verdict::Differ);
    assert_eq!(ab.verdict, ba.verdict);
}

#[test]
fn test_large_concurrency_on_small_product() {
    let d1 = tempdir().unwrap();
    let d2 = tempdir().unwrap();
    write_file(d1.path(), "a", b"x");
    write_file(d2.path(), "b", b"x");

    // Ceiling far above the product size: peak can never exceed the
    // number of pairs actually launched.
    let summary = Dispatcher::new(config(d1.path(), d2.path(), 1000))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.pairs_total, 1);
    assert!(summary.peak_active <= 1);
}

#[test]
fn test_fileset_excludes_non_regular_entries() {
    let d = tempdir().unwrap();
    write_file(d.path(), "file.txt", b"data");
    std::fs::create_dir(d.path().join("dir")).unwrap();

    #[cfg(unix)]
    std::os::unix::fs::symlink(d.path().join("file.txt"), d.path().join("link")).unwrap();

    let set = FileSet::collect(d.path()).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].name, "file.txt");
}

#[test]
fn test_default_chunk_size_is_64k() {
    assert_eq!(DEFAULT_CHUNK_SIZE, 64 * 1024);
}
