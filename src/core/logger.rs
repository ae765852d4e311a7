//! Logger and producer implementation

use super::{
    config::{InstrumentationScope, LoggerConfig, LoggerOption},
    context::Context,
    diagnostics::Diagnostics,
    error::{BridgeError, Result},
    metrics::PipelineMetrics,
    processor::Processor,
    record::Record,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Named emission endpoint.
///
/// `emit` has no return value: whatever happens further down the pipeline
/// stays there. A cancelled `ctx` does not stop the record, since log output
/// is often what explains the cancellation.
pub trait Logger: Send + Sync {
    fn emit(&self, ctx: &Context, record: &Record);
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn emit(&self, ctx: &Context, record: &Record) {
        (**self).emit(ctx, record)
    }
}

/// Factory of loggers bound to an instrumentation scope.
pub trait LoggerProducer: Send + Sync {
    fn logger(&self, name: &str, options: Vec<LoggerOption>) -> Arc<dyn Logger>;
}

/// Logger handed out by [`Producer`].
///
/// Scope attributes from [`LoggerConfig`] stay on the scope. They are not
/// merged into the attributes of emitted records.
#[derive(Clone)]
pub struct SdkLogger {
    scope: InstrumentationScope,
    processor: Arc<dyn Processor>,
    diagnostics: Diagnostics,
    metrics: Arc<PipelineMetrics>,
}

impl SdkLogger {
    pub fn scope(&self) -> &InstrumentationScope {
        &self.scope
    }
}

impl Logger for SdkLogger {
    fn emit(&self, ctx: &Context, record: &Record) {
        self.metrics.record_emitted();

        let result = catch_unwind(AssertUnwindSafe(|| self.processor.process(ctx, record)));
        if let Err(panic_info) = result {
            self.metrics.record_processor_panic();
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            self.diagnostics.warn(
                "processor panicked while handling record",
                &[("logger", self.scope.name.clone()), ("panic", panic_msg)],
            );
        }
    }
}

/// Creates loggers that all share one processor.
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
///
/// let exporter = TextExporter::without_time(Vec::new());
/// let producer = Producer::builder()
///     .processor(SimpleProcessor::new(exporter))
///     .build()
///     .unwrap();
///
/// let logger = producer.logger("example", vec![LoggerOption::version("1.0.0")]);
/// logger.emit(&Context::background(), &Record::new(Severity::Info, "ready"));
/// ```
#[derive(Clone)]
pub struct Producer {
    processor: Arc<dyn Processor>,
    diagnostics: Diagnostics,
    metrics: Arc<PipelineMetrics>,
}

impl Producer {
    pub fn builder() -> ProducerBuilder {
        ProducerBuilder::new()
    }

    /// Create a logger with its concrete type, for access to its scope.
    pub fn sdk_logger(
        &self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = LoggerOption>,
    ) -> SdkLogger {
        let config = LoggerConfig::from_options(options);
        SdkLogger {
            scope: InstrumentationScope::new(name, config),
            processor: Arc::clone(&self.processor),
            diagnostics: self.diagnostics.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }

    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn force_flush(&self) -> Result<()> {
        self.processor.force_flush()
    }

    pub fn shutdown(&self) -> Result<()> {
        self.processor.shutdown()
    }
}

impl LoggerProducer for Producer {
    fn logger(&self, name: &str, options: Vec<LoggerOption>) -> Arc<dyn Logger> {
        Arc::new(self.sdk_logger(name, options))
    }
}

/// Builder for [`Producer`]. Setting a field twice keeps the last value.
pub struct ProducerBuilder {
    processor: Option<Arc<dyn Processor>>,
    diagnostics: Option<Diagnostics>,
}

impl ProducerBuilder {
    pub fn new() -> Self {
        Self {
            processor: None,
            diagnostics: None,
        }
    }

    #[must_use]
    pub fn processor<P: Processor + 'static>(mut self, processor: P) -> Self {
        self.processor = Some(Arc::new(processor));
        self
    }

    #[must_use]
    pub fn shared_processor(mut self, processor: Arc<dyn Processor>) -> Self {
        self.processor = Some(processor);
        self
    }

    #[must_use]
    pub fn diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Fails when no processor was configured, so that emitting can never
    /// hit a missing processor later.
    pub fn build(self) -> Result<Producer> {
        let processor = self
            .processor
            .ok_or_else(|| BridgeError::config("Producer", "no processor configured"))?;

        Ok(Producer {
            processor,
            diagnostics: self.diagnostics.unwrap_or_default(),
            metrics: Arc::new(PipelineMetrics::new()),
        })
    }
}

impl Default for ProducerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CapturingDiagnostics, KeyValue, Severity};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingProcessor {
        bodies: Mutex<Vec<String>>,
    }

    impl Processor for RecordingProcessor {
        fn process(&self, _ctx: &Context, record: &Record) {
            self.bodies.lock().push(record.body.clone());
        }
    }

    struct PanickingProcessor;

    impl Processor for PanickingProcessor {
        fn process(&self, _ctx: &Context, _record: &Record) {
            panic!("exporter exploded");
        }
    }

    #[test]
    fn test_build_without_processor_fails() {
        let result = Producer::builder().build();
        assert!(matches!(
            result,
            Err(BridgeError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_builder_last_processor_wins() {
        let first = Arc::new(RecordingProcessor::default());
        let second = Arc::new(RecordingProcessor::default());

        let producer = Producer::builder()
            .processor(first.clone())
            .processor(second.clone())
            .build()
            .unwrap();

        producer
            .logger("test", Vec::new())
            .emit(&Context::background(), &Record::new(Severity::Info, "hi"));

        assert!(first.bodies.lock().is_empty());
        assert_eq!(*second.bodies.lock(), vec!["hi".to_string()]);
    }

    #[test]
    fn test_logger_scope_from_options() {
        let producer = Producer::builder()
            .processor(RecordingProcessor::default())
            .build()
            .unwrap();

        let logger = producer.sdk_logger(
            "payments",
            vec![
                LoggerOption::version("1.2.0"),
                LoggerOption::schema_url("https://example.com/v1"),
                LoggerOption::attributes(vec![KeyValue::string("region", "eu")]),
            ],
        );

        let scope = logger.scope();
        assert_eq!(scope.name, "payments");
        assert_eq!(scope.version, "1.2.0");
        assert_eq!(scope.schema_url, "https://example.com/v1");
        assert_eq!(scope.attributes.len(), 1);
    }

    #[test]
    fn test_scope_attributes_not_merged_into_records() {
        let processor = Arc::new(RecordingAttributes::default());
        let producer = Producer::builder()
            .processor(processor.clone())
            .build()
            .unwrap();

        let logger = producer.logger(
            "svc",
            vec![LoggerOption::attributes(vec![KeyValue::int("scope", 1)])],
        );
        logger.emit(&Context::background(), &Record::new(Severity::Info, "x"));

        assert_eq!(*processor.counts.lock(), vec![0]);
    }

    #[derive(Default)]
    struct RecordingAttributes {
        counts: Mutex<Vec<usize>>,
    }

    impl Processor for RecordingAttributes {
        fn process(&self, _ctx: &Context, record: &Record) {
            self.counts.lock().push(record.attributes.len());
        }
    }

    #[test]
    fn test_loggers_share_processor() {
        let processor = Arc::new(RecordingProcessor::default());
        let producer = Producer::builder()
            .processor(processor.clone())
            .build()
            .unwrap();

        let ctx = Context::background();
        producer
            .logger("a", Vec::new())
            .emit(&ctx, &Record::new(Severity::Info, "from a"));
        producer
            .logger("b", Vec::new())
            .emit(&ctx, &Record::new(Severity::Info, "from b"));

        assert_eq!(processor.bodies.lock().len(), 2);
        assert_eq!(producer.metrics().emitted_count(), 2);
    }

    #[test]
    fn test_cancelled_context_still_processed() {
        let processor = Arc::new(RecordingProcessor::default());
        let producer = Producer::builder()
            .processor(processor.clone())
            .build()
            .unwrap();

        let ctx = Context::background();
        ctx.cancel();
        producer
            .logger("cancel", Vec::new())
            .emit(&ctx, &Record::new(Severity::Error, "request cancelled"));

        assert_eq!(*processor.bodies.lock(), vec!["request cancelled".to_string()]);
    }

    #[test]
    fn test_processor_panic_is_isolated() {
        let capture = Arc::new(CapturingDiagnostics::new());
        let producer = Producer::builder()
            .processor(PanickingProcessor)
            .diagnostics(Diagnostics::new(capture.clone()))
            .build()
            .unwrap();

        producer
            .logger("fragile", Vec::new())
            .emit(&Context::background(), &Record::new(Severity::Info, "boom"));

        assert_eq!(producer.metrics().processor_panic_count(), 1);
        let warnings = capture.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("logger=fragile"));
        assert!(warnings[0].contains("exporter exploded"));
    }
}
