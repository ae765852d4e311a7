//! In-memory sinks for tests and demos

use crate::core::{Context, Exporter, Record};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Keeps a deep copy of every exported record.
///
/// Clones share the same storage, so one clone can be handed to a processor
/// while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExporter {
    records: Arc<Mutex<Vec<Record>>>,
}

impl InMemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Exporter for InMemoryExporter {
    fn export(&self, _ctx: &Context, batch: &[Option<&Record>]) {
        let mut records = self.records.lock();
        records.extend(batch.iter().flatten().map(|record| (*record).clone()));
    }

    fn name(&self) -> &str {
        "in_memory"
    }
}

/// Cloneable byte sink; every clone writes into the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer contents, with invalid UTF-8 replaced.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyValue, Severity};

    #[test]
    fn test_records_are_copied() {
        let exporter = InMemoryExporter::new();
        let mut record = Record::new(Severity::Info, "first").with_attribute(KeyValue::int("n", 1));

        exporter.export(&Context::background(), &[Some(&record), None]);
        record.attributes.push(KeyValue::int("n", 2));

        let stored = exporter.records();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].attributes.len(), 1);
    }

    #[test]
    fn test_clones_share_storage() {
        let exporter = InMemoryExporter::new();
        let handle = exporter.clone();

        exporter.export(&Context::background(), &[Some(&Record::new(Severity::Warn, "w"))]);
        assert_eq!(handle.len(), 1);

        handle.clear();
        assert!(exporter.is_empty());
    }

    #[test]
    fn test_shared_buffer_lines() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"a\nb\n").unwrap();

        assert_eq!(buffer.lines(), vec!["a".to_string(), "b".to_string()]);
    }
}
