//! Criterion benchmarks for profilog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use profilog::core::format;
use profilog::prelude::*;

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let site = CallSite::new("bench.rs", 1, "bench_formatting");
    let timestamp = chrono::Local::now();

    group.bench_function("default_template", |b| {
        b.iter(|| {
            format::render(
                black_box(profilog::DEFAULT_LOG_FORMAT),
                LogLevel::Info,
                black_box("benchmark message"),
                site,
                timestamp,
            )
        });
    });

    group.bench_function("message_only_template", |b| {
        b.iter(|| {
            format::render(
                black_box("%message%\n"),
                LogLevel::Info,
                black_box("benchmark message"),
                site,
                timestamp,
            )
        });
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .config(LogConfig::new().with_console_output(false))
        .queue_capacity(100_000)
        .build();
    let site = CallSite::new("bench.rs", 1, "bench_dispatch");

    group.bench_function("enqueue", |b| {
        b.iter(|| {
            logger.log(LogLevel::Info, black_box("benchmark message"), site);
        });
    });

    group.finish();
}

fn bench_profiling(c: &mut Criterion) {
    let mut group = c.benchmark_group("profiling");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .config(LogConfig::new().with_console_output(false))
        .queue_capacity(100_000)
        .build();

    group.bench_function("start_end", |b| {
        b.iter(|| {
            logger.start_profiling("bench");
            logger.end_profiling("bench");
        });
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_dispatch, bench_profiling);
criterion_main!(benches);
