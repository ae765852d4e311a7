//! JSON lines exporter
//!
//! Writes each record as a single-line JSON object. Attributes are kept as
//! an ordered array so duplicate keys and their order survive.

use crate::core::{
    BridgeError, Context, Diagnostics, Exporter, KeyValue, Record, Result, TimestampFormat,
};
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    observed_timestamp: Option<String>,
    severity_number: u8,
    severity_text: &'a str,
    body: &'a str,
    attributes: &'a [KeyValue],
}

pub struct JsonExporter<W: Write + Send> {
    writer: Mutex<Option<W>>,
    timestamp_format: TimestampFormat,
    diagnostics: Diagnostics,
}

impl<W: Write + Send> JsonExporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(Some(writer)),
            timestamp_format: TimestampFormat::Rfc3339,
            diagnostics: Diagnostics::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Serialize one record, without the trailing newline.
    pub fn to_json(&self, record: &Record) -> Result<String> {
        let json = JsonRecord {
            timestamp: self
                .timestamp_format
                .format_optional(record.timestamp.as_ref()),
            observed_timestamp: self
                .timestamp_format
                .format_optional(record.observed_timestamp.as_ref()),
            severity_number: record.severity.ordinal(),
            severity_text: &record.severity_text,
            body: &record.body,
            attributes: &record.attributes,
        };
        Ok(serde_json::to_string(&json)?)
    }
}

impl JsonExporter<BufWriter<File>> {
    pub fn to_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                BridgeError::io_operation("opening export file", path.display().to_string(), e)
            })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> Exporter for JsonExporter<W> {
    fn export(&self, _ctx: &Context, batch: &[Option<&Record>]) {
        let mut output = String::new();
        for record in batch.iter().flatten() {
            match self.to_json(record) {
                Ok(line) => {
                    output.push_str(&line);
                    output.push('\n');
                }
                Err(e) => self.diagnostics.warn(
                    "failed to serialize record",
                    &[("exporter", self.name().to_string()), ("error", e.to_string())],
                ),
            }
        }
        if output.is_empty() {
            return;
        }

        let mut guard = self.writer.lock();
        let Some(writer) = guard.as_mut() else {
            self.diagnostics
                .warn("export after shutdown ignored", &[("exporter", self.name().to_string())]);
            return;
        };

        if let Err(e) = writer.write_all(output.as_bytes()) {
            self.diagnostics.warn(
                "failed to write records",
                &[("exporter", self.name().to_string()), ("error", e.to_string())],
            );
        }
    }

    fn force_flush(&self) -> Result<()> {
        match self.writer.lock().as_mut() {
            Some(writer) => Ok(writer.flush()?),
            None => Err(BridgeError::exporter_shutdown(self.name())),
        }
    }

    fn shutdown(&self) -> Result<()> {
        match self.writer.lock().take() {
            Some(mut writer) => Ok(writer.flush()?),
            None => Err(BridgeError::exporter_shutdown(self.name())),
        }
    }

    fn name(&self) -> &str {
        "json"
    }
}
