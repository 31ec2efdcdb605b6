//! Criterion benchmarks for termlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io::{self, Write};
use termlog::{Logger, Target, Value};

/// Writer that swallows records without the discard fast path, so the full
/// formatting pipeline runs.
struct NullWriter;

impl Write for NullWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn formatting_logger() -> Logger {
    Logger::builder()
        .target(Target::writer(NullWriter))
        .no_color(true)
        .build()
}

// ============================================================================
// Record Formatting Benchmarks
// ============================================================================

fn bench_plain_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_formatting");
    group.throughput(Throughput::Elements(1));

    let logger = formatting_logger();

    group.bench_function("message_only", |b| {
        b.iter(|| {
            logger.info(black_box("request served"), &[]);
        });
    });

    let keyvals: Vec<Value> = vec![
        "status".into(),
        200.into(),
        "path".into(),
        "/healthz".into(),
        "elapsed_ms".into(),
        12.into(),
    ];
    group.bench_function("three_keyvals", |b| {
        b.iter(|| {
            logger.info(black_box("request served"), black_box(&keyvals));
        });
    });

    group.finish();
}

fn bench_escaped_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_escaping");
    group.throughput(Throughput::Elements(1));

    let logger = formatting_logger();

    let quoted: Vec<Value> = vec!["query".into(), "SELECT * FROM users WHERE id = 1".into()];
    group.bench_function("quoted_value", |b| {
        b.iter(|| {
            logger.info(black_box("db"), black_box(&quoted));
        });
    });

    let controls: Vec<Value> = vec!["blob".into(), "a\tb\x1b[0m\x01c".into()];
    group.bench_function("control_chars", |b| {
        b.iter(|| {
            logger.info(black_box("db"), black_box(&controls));
        });
    });

    let multiline: Vec<Value> = vec![
        "trace".into(),
        "frame one\nframe two\nframe three\nframe four".into(),
    ];
    group.bench_function("multiline_value", |b| {
        b.iter(|| {
            logger.info(black_box("panic"), black_box(&multiline));
        });
    });

    group.finish();
}

fn bench_fast_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("fast_paths");
    group.throughput(Throughput::Elements(1));

    let discard = Logger::builder().target(Target::Discard).build();
    group.bench_function("discard_target", |b| {
        b.iter(|| {
            discard.info(black_box("never formatted"), &[]);
        });
    });

    let gated = formatting_logger();
    gated.set_level(termlog::LogLevel::Error);
    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            gated.info(black_box("never formatted"), &[]);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_plain_records,
    bench_escaped_records,
    bench_fast_paths
);
criterion_main!(benches);
