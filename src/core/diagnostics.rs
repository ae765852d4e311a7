//! Diagnostic channel for problems the pipeline absorbs
//!
//! Unsupported attribute kinds, sink write failures and panics inside a
//! processor are reported here instead of reaching the code that emitted the
//! record. Create one [`Diagnostics`] handle at startup and pass clones of it
//! to every component that needs it.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Receiver of diagnostic warnings.
///
/// Implementations must not block for long and must never panic.
pub trait DiagnosticHandler: Send + Sync {
    fn warn(&self, message: &str, fields: &[(&str, String)]);
}

/// Writes warnings to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnostics;

impl DiagnosticHandler for StderrDiagnostics {
    fn warn(&self, message: &str, fields: &[(&str, String)]) {
        eprintln!("[LOG BRIDGE WARNING] {}", format_warning(message, fields));
    }
}

/// Drops every warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentDiagnostics;

impl DiagnosticHandler for SilentDiagnostics {
    fn warn(&self, _message: &str, _fields: &[(&str, String)]) {}
}

/// Keeps every warning in memory, formatted as `message key=value ...`.
#[derive(Debug, Default)]
pub struct CapturingDiagnostics {
    warnings: Mutex<Vec<String>>,
}

impl CapturingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.warnings.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.lock().is_empty()
    }
}

impl DiagnosticHandler for CapturingDiagnostics {
    fn warn(&self, message: &str, fields: &[(&str, String)]) {
        self.warnings.lock().push(format_warning(message, fields));
    }
}

fn format_warning(message: &str, fields: &[(&str, String)]) -> String {
    let mut line = message.to_string();
    for (key, value) in fields {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(value);
    }
    line
}

/// Shared handle to a [`DiagnosticHandler`].
#[derive(Clone)]
pub struct Diagnostics {
    handler: Arc<dyn DiagnosticHandler>,
}

impl Diagnostics {
    pub fn new(handler: Arc<dyn DiagnosticHandler>) -> Self {
        Self { handler }
    }

    pub fn stderr() -> Self {
        Self::new(Arc::new(StderrDiagnostics))
    }

    pub fn silent() -> Self {
        Self::new(Arc::new(SilentDiagnostics))
    }

    pub fn warn(&self, message: &str, fields: &[(&str, String)]) {
        self.handler.warn(message, fields);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}
