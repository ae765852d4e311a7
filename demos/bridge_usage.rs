//! Leveled-log bridge example
//!
//! Demonstrates the adapter front end: foreign levels, bound attributes,
//! groups and lazily computed values.
//!
//! Run with: cargo run --example bridge_usage

use rust_log_bridge::bridge::LogValue;
use rust_log_bridge::prelude::*;
use rust_log_bridge::{info, warn};
use std::io;
use std::time::Duration;

#[derive(Debug)]
struct User {
    id: u64,
    email: String,
}

impl LogValue for User {
    // Only the id leaves the process
    fn log_value(&self) -> ForeignValue {
        ForeignValue::Group(vec![Attr::new("id", self.id)])
    }
}

fn main() -> Result<()> {
    println!("=== Rust Log Bridge - Bridge Usage Example ===\n");

    let producer = Producer::builder()
        .processor(SimpleProcessor::new(TextExporter::without_time(io::stdout())))
        .build()?;
    let handler = Handler::new(producer.logger("bridge_usage", Vec::new()));
    let ctx = Context::background();

    println!("1. Named levels:");
    handler.debug(&ctx, "cache warmed", vec![Attr::new("entries", 1024)]);
    handler.info(
        &ctx,
        "Hello, world!",
        vec![Attr::new("example", "String"), Attr::new("number", 123)],
    );
    handler.warn(&ctx, "slow request", vec![Attr::new("elapsed", Duration::from_millis(850))]);
    handler.error(&ctx, "upstream failed", vec![Attr::new("retry", false)]);

    println!("\n2. Levels between the named ones:");
    for level in [Level(-6), Level(2), Level(6), Level(12)] {
        handler.log(&ctx, level, format!("level {}", level), Vec::new());
    }

    println!("\n3. Bound attributes and groups:");
    let request = handler
        .with_attrs(vec![Attr::new("service", "checkout")])
        .with_group("request");
    request.info(
        &ctx,
        "handled",
        vec![
            Attr::new("method", "POST"),
            Attr::group("http", vec![Attr::new("status", 201)]),
        ],
    );

    println!("\n4. Lazy values:");
    let user = User {
        id: 42,
        email: "someone@example.com".to_string(),
    };
    println!("   (email {} is never logged)", user.email.len());
    handler.info(&ctx, "login", vec![Attr::lazy("user", user)]);

    println!("\n5. Macros:");
    info!(handler, &ctx, "from a macro", "port" => 8080);
    warn!(handler, &ctx, "also from a macro");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
