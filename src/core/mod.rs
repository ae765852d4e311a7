//! Core record model and pipeline traits

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod exporter;
pub mod logger;
pub mod metrics;
pub mod processor;
pub mod record;
pub mod severity;
pub mod timestamp;
pub mod value;

pub use config::{InstrumentationScope, LoggerConfig, LoggerOption};
pub use context::Context;
pub use diagnostics::{
    CapturingDiagnostics, DiagnosticHandler, Diagnostics, SilentDiagnostics, StderrDiagnostics,
};
pub use error::{BridgeError, Result};
pub use exporter::Exporter;
pub use logger::{Logger, LoggerProducer, Producer, ProducerBuilder, SdkLogger};
pub use metrics::PipelineMetrics;
pub use processor::{Processor, SimpleProcessor};
pub use record::Record;
pub use severity::Severity;
pub use timestamp::TimestampFormat;
pub use value::{KeyValue, Value};
