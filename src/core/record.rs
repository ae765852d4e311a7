//! Canonical log record

use super::severity::Severity;
use super::value::KeyValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One log event at the moment of emission.
///
/// Processors and exporters only ever see a `&Record`; anything that needs
/// to keep a record beyond the call must clone it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Event time supplied by the caller. `None` means unknown and is
    /// omitted on export.
    pub timestamp: Option<DateTime<Utc>>,
    /// Time the pipeline first saw the event.
    pub observed_timestamp: Option<DateTime<Utc>>,
    pub severity: Severity,
    /// Canonical name of `severity`.
    pub severity_text: String,
    pub body: String,
    pub attributes: Vec<KeyValue>,
}

impl Record {
    /// Create a record whose severity text is derived from `severity`.
    pub fn new(severity: Severity, body: impl Into<String>) -> Self {
        Self {
            severity,
            severity_text: severity.name().to_string(),
            body: body.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self.severity_text = severity.name().to_string();
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_observed_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.observed_timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: KeyValue) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = KeyValue>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Whether `severity_text` is the canonical name of `severity`.
    pub fn is_consistent(&self) -> bool {
        self.severity_text == self.severity.name()
    }
}
