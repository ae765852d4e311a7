//! Logger configuration and instrumentation scope
//!
//! Options are applied in the order given; a later option writing the same
//! field replaces the earlier one.

use super::value::KeyValue;

/// A single named configuration value for [`LoggerConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoggerOption {
    Version(String),
    SchemaUrl(String),
    Attributes(Vec<KeyValue>),
}

impl LoggerOption {
    pub fn version(version: impl Into<String>) -> Self {
        LoggerOption::Version(version.into())
    }

    pub fn schema_url(url: impl Into<String>) -> Self {
        LoggerOption::SchemaUrl(url.into())
    }

    pub fn attributes(attributes: impl IntoIterator<Item = KeyValue>) -> Self {
        LoggerOption::Attributes(attributes.into_iter().collect())
    }

    fn apply(self, config: LoggerConfig) -> LoggerConfig {
        match self {
            LoggerOption::Version(version) => config.with_version(version),
            LoggerOption::SchemaUrl(url) => config.with_schema_url(url),
            LoggerOption::Attributes(attributes) => config.with_attributes(attributes),
        }
    }
}

/// Immutable per-logger configuration.
///
/// The attribute set is scope metadata. It is not copied into records by
/// the SDK logger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggerConfig {
    version: String,
    schema_url: String,
    attributes: Vec<KeyValue>,
}

impl LoggerConfig {
    pub fn from_options(options: impl IntoIterator<Item = LoggerOption>) -> Self {
        options
            .into_iter()
            .fold(LoggerConfig::default(), |config, option| option.apply(config))
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_schema_url(mut self, url: impl Into<String>) -> Self {
        self.schema_url = url.into();
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = KeyValue>) -> Self {
        self.attributes = attributes.into_iter().collect();
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn schema_url(&self) -> &str {
        &self.schema_url
    }

    pub fn attributes(&self) -> &[KeyValue] {
        &self.attributes
    }
}

/// Identity of the component a logger was created for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentationScope {
    pub name: String,
    pub version: String,
    pub schema_url: String,
    pub attributes: Vec<KeyValue>,
}

impl InstrumentationScope {
    pub fn new(name: impl Into<String>, config: LoggerConfig) -> Self {
        Self {
            name: name.into(),
            version: config.version,
            schema_url: config.schema_url,
            attributes: config.attributes,
        }
    }
}
