//! Benchmarks for paircmp
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paircmp::compare::{compare_files, CompareOptions};
use paircmp::fileset::FileSet;
use std::fs;
use std::io::Write;

fn benchmark_compare_equal(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let content = vec![0x42u8; 1024 * 1024];

    let path_a = dir.path().join("a.bin");
    let path_b = dir.path().join("b.bin");
    fs::File::create(&path_a)
        .unwrap()
        .write_all(&content)
        .unwrap();
    fs::File::create(&path_b)
        .unwrap()
        .write_all(&content)
        .unwrap();

    c.bench_function("compare_equal_1mb", |b| {
        let opts = CompareOptions::default();
        b.iter(|| {
            let result = compare_files(&path_a, &path_b, &opts);
            black_box(result);
        })
    });
}

fn benchmark_size_fast_reject(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();

    let path_a = dir.path().join("a.bin");
    let path_b = dir.path().join("b.bin");
    fs::write(&path_a, vec![0u8; 1024 * 1024]).unwrap();
    fs::write(&path_b, vec![0u8; 1024 * 1024 + 1]).unwrap();

    c.bench_function("size_fast_reject_1mb", |b| {
        let opts = CompareOptions::default();
        b.iter(|| {
            let result = compare_files(&path_a, &path_b, &opts);
            black_box(result);
        })
    });
}

fn benchmark_fileset_collect(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    for n in 0..500 {
        fs::write(dir.path().join(format!("file-{n}.dat")), b"content").unwrap();
    }

    c.bench_function("fileset_collect_500", |b| {
        b.iter(|| {
            let set = FileSet::collect(dir.path()).unwrap();
            black_box(set);
        })
    });
}

criterion_group!(
    benches,
    benchmark_compare_equal,
    benchmark_size_fast_reject,
    benchmark_fileset_collect
);
criterion_main!(benches);
