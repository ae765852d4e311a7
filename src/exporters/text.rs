//! Line-oriented text exporter
//!
//! One line per record:
//!
//! ```text
//! [<Timestamp> <ObservedTimestamp> ]<SeverityText> body="<Body>" <Key>="<Value>" ...
//! ```
//!
//! The timestamp prefix is only written by exporters built with
//! [`TextExporter::new`]; an absent timestamp is left out together with its
//! separator.

use crate::core::{
    BridgeError, Context, Diagnostics, Exporter, Record, Result, TimestampFormat,
};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
#[cfg(feature = "console")]
use colored::Colorize;

pub struct TextExporter<W: Write + Send> {
    writer: Mutex<Option<W>>,
    include_time: bool,
    timestamp_format: TimestampFormat,
    use_colors: bool,
    diagnostics: Diagnostics,
}

impl<W: Write + Send> TextExporter<W> {
    /// Exporter that prefixes each line with both timestamps.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(Some(writer)),
            include_time: true,
            timestamp_format: TimestampFormat::default(),
            use_colors: false,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Exporter that never writes timestamps.
    pub fn without_time(writer: W) -> Self {
        let mut exporter = Self::new(writer);
        exporter.include_time = false;
        exporter
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Color the severity text. Only has an effect with the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Render one record as a complete line, newline included.
    pub fn format_record(&self, record: &Record) -> String {
        let mut line = String::new();

        if self.include_time {
            for ts in [&record.timestamp, &record.observed_timestamp] {
                if let Some(formatted) = self.timestamp_format.format_optional(ts.as_ref()) {
                    line.push_str(&formatted);
                    line.push(' ');
                }
            }
        }

        line.push_str(&self.severity_text(record));
        line.push_str(" body=\"");
        line.push_str(&sanitize(&record.body));
        line.push('"');

        for attribute in &record.attributes {
            line.push(' ');
            line.push_str(&sanitize(&attribute.key));
            line.push_str("=\"");
            line.push_str(&sanitize(&attribute.value.to_string()));
            line.push('"');
        }

        line.push('\n');
        line
    }

    #[cfg(feature = "console")]
    fn severity_text(&self, record: &Record) -> String {
        if self.use_colors {
            record
                .severity_text
                .color(record.severity.color_code())
                .to_string()
        } else {
            record.severity_text.clone()
        }
    }

    #[cfg(not(feature = "console"))]
    fn severity_text(&self, record: &Record) -> String {
        record.severity_text.clone()
    }
}

impl TextExporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl TextExporter<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn to_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                BridgeError::io_operation(
                    "opening export file",
                    path.display().to_string(),
                    e,
                )
            })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> Exporter for TextExporter<W> {
    fn export(&self, _ctx: &Context, batch: &[Option<&Record>]) {
        let mut output = String::new();
        for record in batch.iter().flatten() {
            output.push_str(&self.format_record(record));
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
        "text"
    }
}

impl<W: Write + Send> Drop for TextExporter<W> {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.get_mut().as_mut() {
            let _ = writer.flush();
        }
    }
}

/// Escape backslashes, line breaks and tabs so one record always stays on
/// one line and the escaping can be reversed.
fn sanitize(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
