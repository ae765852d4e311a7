//! Basic pipeline usage example
//!
//! Demonstrates emitting canonical records straight through a logger into
//! the text exporter.
//!
//! Run with: cargo run --example basic_usage

use rust_log_bridge::prelude::*;
use std::io;

fn main() -> Result<()> {
    println!("=== Rust Log Bridge - Basic Usage Example ===\n");

    // Untimed text exporter writing to stdout
    let producer = Producer::builder()
        .processor(SimpleProcessor::new(
            TextExporter::without_time(io::stdout()).with_colors(true),
        ))
        .build()?;

    let logger = producer.logger("basic_usage", vec![LoggerOption::version("0.1.0")]);
    let ctx = Context::background();

    println!("1. A record with attributes:");
    logger.emit(
        &ctx,
        &Record::new(Severity::Info, "Hello, world!")
            .with_attribute(KeyValue::string("example", "String"))
            .with_attribute(KeyValue::int("number", 123)),
    );

    println!("\n2. One record per severity tier:");
    for severity in [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ] {
        logger.emit(&ctx, &Record::new(severity, format!("{} message", severity)));
    }

    println!("\n3. Timestamped output:");
    let timed = Producer::builder()
        .processor(SimpleProcessor::new(
            TextExporter::new(io::stdout()).with_timestamp_format(TimestampFormat::Rfc3339),
        ))
        .build()?;
    timed.logger("basic_usage", Vec::new()).emit(
        &ctx,
        &Record::new(Severity::Warn2, "disk almost full")
            .with_timestamp(chrono::Utc::now())
            .with_observed_timestamp(chrono::Utc::now()),
    );

    producer.force_flush()?;
    timed.force_flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
