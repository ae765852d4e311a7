//! Emission context passed down the pipeline
//!
//! Carries a cancellation flag for the caller's own work. The pipeline never
//! consults it: a record emitted under a cancelled context is still processed
//! and exported.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// A fresh, never-cancelled context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Mark this context (and every clone of it) as cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
