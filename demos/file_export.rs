//! File export example
//!
//! Demonstrates writing records to text and JSON lines files.
//!
//! Run with: cargo run --example file_export

use rust_log_bridge::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Log Bridge - File Export Example ===\n");

    let text_path = "bridge_example.log";
    let json_path = "bridge_example.jsonl";

    let text = Producer::builder()
        .processor(SimpleProcessor::new(TextExporter::to_file(text_path)?))
        .build()?;
    let json = Producer::builder()
        .processor(SimpleProcessor::new(
            JsonExporter::to_file(json_path)?.with_timestamp_format(TimestampFormat::UnixMillis),
        ))
        .build()?;

    let ctx = Context::background();
    let text_handler = Handler::new(text.logger("file_export", Vec::new()));
    let json_handler = Handler::new(json.logger("file_export", Vec::new()));

    println!("1. Writing 10 records to each file...");
    for i in 0..10 {
        let attrs = vec![Attr::new("iteration", i), Attr::new("even", i % 2 == 0)];
        text_handler.info(&ctx, format!("Iteration {}", i), attrs.clone());
        json_handler.info(&ctx, format!("Iteration {}", i), attrs);
    }

    println!("2. A record without an event time:");
    text_handler.handle(
        &ctx,
        ForeignRecord::new(Level::WARN, "replayed from queue").without_time(),
    )?;

    text.shutdown()?;
    json.shutdown()?;

    println!("\nText output ({}):", text_path);
    print!("{}", std::fs::read_to_string(text_path)?);
    println!("\nJSON output ({}):", json_path);
    print!("{}", std::fs::read_to_string(json_path)?);

    std::fs::remove_file(text_path)?;
    std::fs::remove_file(json_path)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
