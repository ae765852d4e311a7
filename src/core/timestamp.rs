//! Timestamp formatting for exporters
//!
//! Record timestamps are optional; an absent timestamp renders as nothing
//! rather than as the Unix epoch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use rust_log_bridge::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with nanoseconds: `2025-01-08T10:30:45.123456789Z`
    Iso8601Nanos,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in nanoseconds: `1736332245123456000`
    ///
    /// Falls back to RFC 3339 for instants outside the `i64` nanosecond range.
    UnixNanos,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Nanos => datetime.format("%Y-%m-%dT%H:%M:%S%.9fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixNanos => match datetime.timestamp_nanos_opt() {
                Some(nanos) => nanos.to_string(),
                None => datetime.to_rfc3339(),
            },
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// `None` for an absent timestamp.
    #[must_use]
    pub fn format_optional(&self, datetime: Option<&DateTime<Utc>>) -> Option<String> {
        datetime.map(|dt| self.format(dt))
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis | TimestampFormat::UnixNanos)
    }
}
