//! # Rust Log Bridge
//!
//! Normalizes log events into a canonical [`Record`] and moves them through a
//! synchronous `Producer -> Logger -> Processor -> Exporter` pipeline.
//!
//! ## Features
//!
//! - **Canonical model**: 24 graded severities plus `Undefined`, ordered attributes
//! - **Pluggable chain**: bring your own [`Processor`] or [`Exporter`]
//! - **Bridge**: adapt leveled, attribute-based front ends through [`bridge::Handler`]
//! - **Never fails the caller**: sink errors and panics go to [`Diagnostics`]
//!
//! ```
//! use rust_log_bridge::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let producer = Producer::builder()
//!     .processor(SimpleProcessor::new(TextExporter::without_time(buffer.clone())))
//!     .build()
//!     .unwrap();
//!
//! let logger = producer.logger("example", Vec::new());
//! logger.emit(
//!     &Context::background(),
//!     &Record::new(Severity::Info, "Hello, world!")
//!         .with_attribute(KeyValue::string("example", "String"))
//!         .with_attribute(KeyValue::int("number", 123)),
//! );
//!
//! assert_eq!(
//!     buffer.contents(),
//!     "Info body=\"Hello, world!\" example=\"String\" number=\"123\"\n"
//! );
//! ```

pub mod bridge;
pub mod core;
pub mod exporters;
pub mod macros;

pub mod prelude {
    pub use crate::bridge::{Attr, ForeignRecord, ForeignValue, Handler, Level};
    pub use crate::exporters::{InMemoryExporter, JsonExporter, SharedBuffer, TextExporter};
    pub use crate::core::{
        BridgeError, Context, Diagnostics, Exporter, KeyValue, Logger, LoggerConfig,
        LoggerOption, LoggerProducer, Processor, Producer, Record, Result, Severity,
        SimpleProcessor, TimestampFormat, Value,
    };
}

pub use crate::exporters::{InMemoryExporter, JsonExporter, SharedBuffer, TextExporter};
pub use crate::core::{
    BridgeError, CapturingDiagnostics, Context, DiagnosticHandler, Diagnostics, Exporter,
    InstrumentationScope, KeyValue, Logger, LoggerConfig, LoggerOption, LoggerProducer,
    PipelineMetrics, Processor, Producer, ProducerBuilder, Record, Result, SdkLogger, Severity,
    SimpleProcessor, TimestampFormat, Value,
};
