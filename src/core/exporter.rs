//! Exporter trait for record sinks

use super::{context::Context, error::Result, record::Record};
use std::sync::Arc;

/// Terminal stage of the pipeline: serializes batches of records to a sink.
///
/// `export` may be called from many threads at once. Implementations must
/// be safe for concurrent use or serialize internally. They receive the
/// batch in emission order, must skip `None` entries, and must not surface
/// sink failures to the caller; report them on a diagnostic channel instead.
///
/// # Example
///
/// ```
/// use rust_log_bridge::core::{Context, Exporter, Record};
///
/// struct CountingExporter(std::sync::atomic::AtomicUsize);
///
/// impl Exporter for CountingExporter {
///     fn export(&self, _ctx: &Context, batch: &[Option<&Record>]) {
///         let n = batch.iter().flatten().count();
///         self.0.fetch_add(n, std::sync::atomic::Ordering::Relaxed);
///     }
///
///     fn name(&self) -> &str {
///         "counting"
///     }
/// }
/// ```
pub trait Exporter: Send + Sync {
    fn export(&self, ctx: &Context, batch: &[Option<&Record>]);

    fn force_flush(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        self.force_flush()
    }

    fn name(&self) -> &str;
}

impl<E: Exporter + ?Sized> Exporter for Arc<E> {
    fn export(&self, ctx: &Context, batch: &[Option<&Record>]) {
        (**self).export(ctx, batch)
    }

    fn force_flush(&self) -> Result<()> {
        (**self).force_flush()
    }

    fn shutdown(&self) -> Result<()> {
        (**self).shutdown()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<E: Exporter + ?Sized> Exporter for Box<E> {
    fn export(&self, ctx: &Context, batch: &[Option<&Record>]) {
        (**self).export(ctx, batch)
    }

    fn force_flush(&self) -> Result<()> {
        (**self).force_flush()
    }

    fn shutdown(&self) -> Result<()> {
        (**self).shutdown()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
