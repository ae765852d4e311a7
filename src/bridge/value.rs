//! Foreign attribute values and their conversion to canonical attributes
//!
//! Conversion rules:
//!
//! - scalars map onto the closest canonical kind (`Uint64` wraps into `i64`,
//!   durations and instants become nanosecond counts);
//! - a lazy value is resolved once; a lazy value found in what it resolved
//!   to, directly or inside a group, is not resolved again;
//! - anything else degrades to its `Debug` rendering and raises a warning on
//!   the diagnostic channel;
//! - an attribute with an empty key and an `Empty` value is dropped, checked
//!   after lazy resolution;
//! - a group with an empty name is inlined, a named group with no members is
//!   dropped, and members of a named group get a `group.` key prefix.

use crate::core::{Diagnostics, KeyValue, Value};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A value computed only when the record is converted.
pub trait LogValue: fmt::Debug + Send + Sync {
    fn log_value(&self) -> ForeignValue;
}

/// Discriminant of a [`ForeignValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Empty,
    Bool,
    Int64,
    Uint64,
    Float64,
    Duration,
    Time,
    String,
    Group,
    Lazy,
    Any,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Default)]
pub enum ForeignValue {
    /// The unset value.
    #[default]
    Empty,
    Bool(bool),
    Int64(i64),
    Uint64(u64),
    Float64(f64),
    Duration(Duration),
    Time(DateTime<Utc>),
    String(String),
    Group(Vec<Attr>),
    Lazy(Arc<dyn LogValue>),
    Any(Arc<dyn fmt::Debug + Send + Sync>),
}

impl ForeignValue {
    pub fn kind(&self) -> Kind {
        match self {
            ForeignValue::Empty => Kind::Empty,
            ForeignValue::Bool(_) => Kind::Bool,
            ForeignValue::Int64(_) => Kind::Int64,
            ForeignValue::Uint64(_) => Kind::Uint64,
            ForeignValue::Float64(_) => Kind::Float64,
            ForeignValue::Duration(_) => Kind::Duration,
            ForeignValue::Time(_) => Kind::Time,
            ForeignValue::String(_) => Kind::String,
            ForeignValue::Group(_) => Kind::Group,
            ForeignValue::Lazy(_) => Kind::Lazy,
            ForeignValue::Any(_) => Kind::Any,
        }
    }

    pub fn lazy(value: impl LogValue + 'static) -> Self {
        ForeignValue::Lazy(Arc::new(value))
    }

    pub fn any(value: impl fmt::Debug + Send + Sync + 'static) -> Self {
        ForeignValue::Any(Arc::new(value))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ForeignValue::Empty)
    }

    /// The value itself, or for a lazy value the result of resolving it once.
    pub fn resolve(self) -> ForeignValue {
        match self {
            ForeignValue::Lazy(lazy) => lazy.log_value(),
            other => other,
        }
    }
}

impl From<bool> for ForeignValue {
    fn from(b: bool) -> Self {
        ForeignValue::Bool(b)
    }
}

impl From<i64> for ForeignValue {
    fn from(i: i64) -> Self {
        ForeignValue::Int64(i)
    }
}

impl From<i32> for ForeignValue {
    fn from(i: i32) -> Self {
        ForeignValue::Int64(i64::from(i))
    }
}

impl From<u64> for ForeignValue {
    fn from(u: u64) -> Self {
        ForeignValue::Uint64(u)
    }
}

impl From<u32> for ForeignValue {
    fn from(u: u32) -> Self {
        ForeignValue::Uint64(u64::from(u))
    }
}

impl From<f64> for ForeignValue {
    fn from(f: f64) -> Self {
        ForeignValue::Float64(f)
    }
}

impl From<Duration> for ForeignValue {
    fn from(d: Duration) -> Self {
        ForeignValue::Duration(d)
    }
}

impl From<DateTime<Utc>> for ForeignValue {
    fn from(t: DateTime<Utc>) -> Self {
        ForeignValue::Time(t)
    }
}

impl From<String> for ForeignValue {
    fn from(s: String) -> Self {
        ForeignValue::String(s)
    }
}

impl From<&str> for ForeignValue {
    fn from(s: &str) -> Self {
        ForeignValue::String(s.to_string())
    }
}

impl From<Vec<Attr>> for ForeignValue {
    fn from(attrs: Vec<Attr>) -> Self {
        ForeignValue::Group(attrs)
    }
}

/// Key/value pair of a foreign log call.
#[derive(Debug, Clone, Default)]
pub struct Attr {
    pub key: String,
    pub value: ForeignValue,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<ForeignValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn group(name: impl Into<String>, attrs: Vec<Attr>) -> Self {
        Self::new(name, ForeignValue::Group(attrs))
    }

    pub fn lazy(key: impl Into<String>, value: impl LogValue + 'static) -> Self {
        Self::new(key, ForeignValue::lazy(value))
    }

    pub fn any(key: impl Into<String>, value: impl fmt::Debug + Send + Sync + 'static) -> Self {
        Self::new(key, ForeignValue::any(value))
    }

    /// Empty key and unset value.
    pub fn is_zero(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }
}

/// Join a group prefix and a key with a dot.
pub(crate) fn qualify(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Convert one foreign attribute, appending zero or more canonical
/// attributes to `out`. `prefix` is the dotted path of enclosing groups.
pub fn flatten_into(prefix: &str, attr: Attr, out: &mut Vec<KeyValue>, diagnostics: &Diagnostics) {
    flatten_at_depth(prefix, attr, out, diagnostics, 0);
}

/// `depth` counts lazy resolutions on the path from the top-level attribute,
/// so members of a group produced by a lazy value are never resolved again.
fn flatten_at_depth(
    prefix: &str,
    attr: Attr,
    out: &mut Vec<KeyValue>,
    diagnostics: &Diagnostics,
    depth: usize,
) {
    let Attr { key, value } = attr;
    let (value, depth) = match value {
        ForeignValue::Lazy(lazy) if depth == 0 => (lazy.log_value(), depth + 1),
        other => (other, depth),
    };

    // Zero check on the resolved value
    if key.is_empty() && value.is_empty() {
        return;
    }

    match value {
        ForeignValue::Group(members) if key.is_empty() => {
            for member in members {
                flatten_at_depth(prefix, member, out, diagnostics, depth);
            }
        }
        ForeignValue::Group(members) => {
            if members.is_empty() {
                return;
            }
            let nested = qualify(prefix, &key);
            for member in members {
                flatten_at_depth(&nested, member, out, diagnostics, depth);
            }
        }
        value => out.push(KeyValue {
            key: qualify(prefix, &key),
            value: coerce_at_depth(value, depth, diagnostics),
        }),
    }
}

/// Convert a single foreign value into a canonical value.
pub fn coerce(value: ForeignValue, diagnostics: &Diagnostics) -> Value {
    coerce_at_depth(value, 0, diagnostics)
}

/// `depth` counts lazy resolutions already performed for this value.
fn coerce_at_depth(value: ForeignValue, depth: usize, diagnostics: &Diagnostics) -> Value {
    match value {
        ForeignValue::Bool(b) => Value::Bool(b),
        ForeignValue::Int64(i) => Value::Int(i),
        ForeignValue::Uint64(u) => Value::Int(u as i64),
        ForeignValue::Float64(f) => Value::Float(f),
        ForeignValue::Duration(d) => Value::Int(i64::try_from(d.as_nanos()).unwrap_or(i64::MAX)),
        ForeignValue::Time(t) => match t.timestamp_nanos_opt() {
            Some(nanos) => Value::Int(nanos),
            None => {
                diagnostics.warn(
                    "time attribute outside nanosecond range",
                    &[("time", t.to_rfc3339())],
                );
                Value::String(t.to_rfc3339())
            }
        },
        ForeignValue::String(s) => Value::String(s),
        ForeignValue::Empty => Value::String(String::new()),
        ForeignValue::Lazy(lazy) if depth == 0 => {
            coerce_at_depth(lazy.log_value(), depth + 1, diagnostics)
        }
        other => {
            diagnostics.warn("unknown attribute kind", &[("kind", other.kind().to_string())]);
            Value::String(fallback_string(&other))
        }
    }
}

fn fallback_string(value: &ForeignValue) -> String {
    match value {
        ForeignValue::Any(any) => format!("{:?}", any),
        ForeignValue::Lazy(lazy) => format!("{:?}", lazy),
        other => format!("{:?}", other),
    }
}
