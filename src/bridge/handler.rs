//! Handler that turns foreign log calls into canonical records

use super::level::Level;
use super::value::{flatten_into, qualify, Attr};
use crate::core::{Context, Diagnostics, KeyValue, Logger, Record, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// One call of the foreign logging API.
#[derive(Debug, Clone)]
pub struct ForeignRecord {
    /// `None` when the caller did not record a time.
    pub time: Option<DateTime<Utc>>,
    pub level: Level,
    pub message: String,
    pub attrs: Vec<Attr>,
}

impl ForeignRecord {
    /// Record stamped with the current time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Some(Utc::now()),
            level,
            message: message.into(),
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    #[must_use]
    pub fn without_time(mut self) -> Self {
        self.time = None;
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}

/// Bridges a leveled logging front end onto a [`Logger`].
///
/// Derived handlers from [`with_attrs`](Handler::with_attrs) and
/// [`with_group`](Handler::with_group) are independent snapshots: binding
/// attributes on one never shows up on another.
///
/// Attributes inside an open group are keyed `group.key`; nested groups
/// compose as `outer.inner.key`.
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
/// use rust_log_bridge::bridge::{Attr, Handler};
/// use std::sync::Arc;
///
/// let exporter = InMemoryExporter::new();
/// let producer = Producer::builder()
///     .processor(SimpleProcessor::new(exporter.clone()))
///     .build()
///     .unwrap();
///
/// let handler = Handler::new(producer.logger("example", Vec::new()));
/// let ctx = Context::background();
/// handler.info(&ctx, "Hello, world!", vec![Attr::new("example", "String")]);
///
/// assert_eq!(exporter.records()[0].severity, Severity::Info);
/// ```
#[derive(Clone)]
pub struct Handler {
    logger: Arc<dyn Logger>,
    attrs: Vec<KeyValue>,
    group_prefix: String,
    diagnostics: Diagnostics,
}

impl Handler {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger,
            attrs: Vec::new(),
            group_prefix: String::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Replace the pre-bound canonical attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<KeyValue>) -> Self {
        self.attrs = attributes;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Every level is handled.
    pub fn enabled(&self, _level: Level) -> bool {
        true
    }

    /// Convert `record` and emit it. Always returns `Ok`.
    pub fn handle(&self, ctx: &Context, record: ForeignRecord) -> Result<()> {
        let severity = record.level.to_severity();

        let mut attributes = Vec::with_capacity(self.attrs.len() + record.attrs.len());
        attributes.extend(self.attrs.iter().cloned());
        for attr in record.attrs {
            flatten_into(&self.group_prefix, attr, &mut attributes, &self.diagnostics);
        }

        self.logger.emit(
            ctx,
            &Record {
                timestamp: record.time,
                observed_timestamp: Some(Utc::now()),
                severity,
                severity_text: severity.name().to_string(),
                body: record.message,
                attributes,
            },
        );
        Ok(())
    }

    /// New handler carrying this handler's attributes followed by `attrs`.
    pub fn with_attrs(&self, attrs: Vec<Attr>) -> Handler {
        let mut next = self.clone();
        next.attrs.reserve(attrs.len());
        for attr in attrs {
            flatten_into(&self.group_prefix, attr, &mut next.attrs, &self.diagnostics);
        }
        next
    }

    /// New handler that qualifies all later attribute keys with `name`.
    /// An empty name returns an equivalent handler.
    pub fn with_group(&self, name: &str) -> Handler {
        let mut next = self.clone();
        if !name.is_empty() {
            next.group_prefix = qualify(&self.group_prefix, name);
        }
        next
    }

    pub fn attributes(&self) -> &[KeyValue] {
        &self.attrs
    }

    pub fn log(&self, ctx: &Context, level: Level, message: impl Into<String>, attrs: Vec<Attr>) {
        // `handle` only returns Ok; emit failures end on the diagnostic channel
        let _ = self.handle(ctx, ForeignRecord::new(level, message).with_attrs(attrs));
    }

    pub fn debug(&self, ctx: &Context, message: impl Into<String>, attrs: Vec<Attr>) {
        self.log(ctx, Level::DEBUG, message, attrs);
    }

    pub fn info(&self, ctx: &Context, message: impl Into<String>, attrs: Vec<Attr>) {
        self.log(ctx, Level::INFO, message, attrs);
    }

    pub fn warn(&self, ctx: &Context, message: impl Into<String>, attrs: Vec<Attr>) {
        self.log(ctx, Level::WARN, message, attrs);
    }

    pub fn error(&self, ctx: &Context, message: impl Into<String>, attrs: Vec<Attr>) {
        self.log(ctx, Level::ERROR, message, attrs);
    }
}
