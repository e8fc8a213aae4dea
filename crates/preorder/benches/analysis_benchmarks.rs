//! Generation and analysis pipeline benchmarks.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use preorder::{generate, prepare, write_dataset, Analyzer, GeneratorConfig};
use tempfile::TempDir;

fn config() -> GeneratorConfig {
    let reference = NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    GeneratorConfig::default().with_reference_time(reference)
}

/// Benchmark record generation.
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for rows in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("records", rows), rows, |b, rows| {
            b.iter(|| black_box(generate(*rows, config()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark the full load and analyze pipeline from disk.
fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");
    let dir = TempDir::new().unwrap();

    for rows in [1_000, 10_000, 50_000].iter() {
        let path = dir.path().join(format!("orders_{}.csv", rows));
        write_dataset(&path, &generate(*rows, config()).unwrap()).unwrap();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &path, |b, path| {
            b.iter(|| black_box(Analyzer::new().analyze(path).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark aggregation alone, without file IO.
fn bench_in_memory_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_memory_analysis");

    for rows in [1_000, 10_000].iter() {
        let records = generate(*rows, config()).unwrap();
        group.bench_with_input(BenchmarkId::new("rows", rows), &records, |b, records| {
            b.iter_with_setup(
                || prepare(records.clone()),
                |table| black_box(Analyzer::new().analyze_table(table).unwrap()),
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generation,
    bench_full_analysis,
    bench_in_memory_analysis,
);

criterion_main!(benches);
