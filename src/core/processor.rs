//! Processor trait and the pass-through processor

use super::{context::Context, error::Result, exporter::Exporter, record::Record};
use std::sync::Arc;

/// Receives every emitted record, one call per `emit`, on the emitting
/// thread, and decides how and when it reaches an exporter.
///
/// `process` may be called concurrently from many threads. Implementations
/// that buffer or batch must synchronize internally. The record is only
/// borrowed for the duration of the call; clone it to keep it.
pub trait Processor: Send + Sync {
    fn process(&self, ctx: &Context, record: &Record);

    fn force_flush(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        self.force_flush()
    }
}

impl<P: Processor + ?Sized> Processor for Arc<P> {
    fn process(&self, ctx: &Context, record: &Record) {
        (**self).process(ctx, record)
    }

    fn force_flush(&self) -> Result<()> {
        (**self).force_flush()
    }

    fn shutdown(&self) -> Result<()> {
        (**self).shutdown()
    }
}

/// Forwards each record to its exporter immediately, as a batch of one.
#[derive(Debug)]
pub struct SimpleProcessor<E> {
    exporter: E,
}

impl<E: Exporter> SimpleProcessor<E> {
    pub fn new(exporter: E) -> Self {
        Self { exporter }
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }
}

impl<E: Exporter> Processor for SimpleProcessor<E> {
    fn process(&self, ctx: &Context, record: &Record) {
        self.exporter.export(ctx, &[Some(record)]);
    }

    fn force_flush(&self) -> Result<()> {
        self.exporter.force_flush()
    }

    fn shutdown(&self) -> Result<()> {
        self.exporter.shutdown()
    }
}
