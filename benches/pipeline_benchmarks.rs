//! Criterion benchmarks for rust_log_bridge

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_log_bridge::bridge::{coerce, flatten_into};
use rust_log_bridge::prelude::*;
use std::io;
use std::sync::Arc;

fn silent_producer<P: Processor + 'static>(processor: P) -> Producer {
    Producer::builder()
        .processor(processor)
        .diagnostics(Diagnostics::silent())
        .build()
        .expect("processor configured")
}

// ============================================================================
// Direct Emit Benchmarks
// ============================================================================

fn bench_direct_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_emit");
    group.throughput(Throughput::Elements(1));

    let producer = silent_producer(SimpleProcessor::new(TextExporter::new(io::sink())));
    let logger = producer.logger("bench", Vec::new());
    let ctx = Context::background();

    let plain = Record::new(Severity::Info, "Hello, world!");
    group.bench_function("text_no_attributes", |b| {
        b.iter(|| logger.emit(&ctx, black_box(&plain)));
    });

    let attributed = Record::new(Severity::Info, "Hello, world!")
        .with_attribute(KeyValue::string("example", "String"))
        .with_attribute(KeyValue::int("number", 123))
        .with_attribute(KeyValue::bool("flag", true));
    group.bench_function("text_three_attributes", |b| {
        b.iter(|| logger.emit(&ctx, black_box(&attributed)));
    });

    let json = silent_producer(SimpleProcessor::new(JsonExporter::new(io::sink())));
    let json_logger = json.logger("bench", Vec::new());
    group.bench_function("json_three_attributes", |b| {
        b.iter(|| json_logger.emit(&ctx, black_box(&attributed)));
    });

    group.finish();
}

// ============================================================================
// Bridged Emit Benchmarks
// ============================================================================

fn bench_bridged_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridged_emit");
    group.throughput(Throughput::Elements(1));

    let producer = silent_producer(SimpleProcessor::new(TextExporter::new(io::sink())));
    let handler = Handler::new(producer.logger("bench", Vec::new()))
        .with_diagnostics(Diagnostics::silent());
    let ctx = Context::background();

    group.bench_function("info_two_attrs", |b| {
        b.iter(|| {
            handler.info(
                &ctx,
                black_box("Hello, world!"),
                vec![Attr::new("example", "String"), Attr::new("number", 123)],
            )
        });
    });

    let grouped = handler
        .with_attrs(vec![Attr::new("service", "api")])
        .with_group("request");
    group.bench_function("info_in_group", |b| {
        b.iter(|| {
            grouped.info(
                &ctx,
                black_box("handled"),
                vec![Attr::group("http", vec![Attr::new("status", 200), Attr::new("path", "/")])],
            )
        });
    });

    group.finish();
}

// ============================================================================
// Attribute Conversion Benchmarks
// ============================================================================

#[derive(Debug)]
struct Token;

impl rust_log_bridge::bridge::LogValue for Token {
    fn log_value(&self) -> ForeignValue {
        ForeignValue::from("REDACTED")
    }
}

fn bench_attribute_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("attribute_conversion");
    let diagnostics = Diagnostics::silent();

    group.bench_function("coerce_scalar", |b| {
        b.iter(|| coerce(black_box(ForeignValue::Uint64(u64::MAX)), &diagnostics));
    });

    group.bench_function("coerce_lazy", |b| {
        b.iter(|| coerce(black_box(ForeignValue::Lazy(Arc::new(Token))), &diagnostics));
    });

    group.bench_function("flatten_nested_group", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(4);
            let attr = Attr::group(
                "outer",
                vec![
                    Attr::new("a", 1),
                    Attr::group("inner", vec![Attr::new("b", true), Attr::new("c", "x")]),
                    Attr::group("", vec![Attr::new("d", 2.5)]),
                ],
            );
            flatten_into("", black_box(attr), &mut out, &diagnostics);
            out
        });
    });

    group.finish();
}

// ============================================================================
// Level Mapping Benchmarks
// ============================================================================

fn bench_level_mapping(c: &mut Criterion) {
    c.bench_function("level_to_severity", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for level in -10..20 {
                acc += u32::from(Level(black_box(level)).to_severity().ordinal());
            }
            acc
        });
    });
}

criterion_group!(
    benches,
    bench_direct_emit,
    bench_bridged_emit,
    bench_attribute_conversion,
    bench_level_mapping,
);
criterion_main!(benches);
