//! Property-based tests for rust_log_bridge using proptest

use proptest::prelude::*;
use rust_log_bridge::bridge::{flatten_into, Attr, ForeignValue, Handler, Level, LogValue};
use rust_log_bridge::core::{Context, Diagnostics, KeyValue, Logger, Record, Severity, Value};
use rust_log_bridge::exporters::TextExporter;
use parking_lot::Mutex;
use std::sync::Arc;

fn severity_strategy() -> impl Strategy<Value = Severity> {
    (0usize..Severity::ALL.len()).prop_map(|idx| Severity::ALL[idx])
}

fn scalar_value() -> impl Strategy<Value = ForeignValue> {
    prop_oneof![
        any::<bool>().prop_map(ForeignValue::Bool),
        any::<i64>().prop_map(ForeignValue::Int64),
        any::<u64>().prop_map(ForeignValue::Uint64),
        "[a-z ]{0,12}".prop_map(ForeignValue::String),
        Just(ForeignValue::Empty),
    ]
}

fn attr_strategy() -> impl Strategy<Value = Attr> {
    ("[a-z]{0,4}", scalar_value()).prop_map(|(key, value)| Attr { key, value })
}

/// Hands back a fixed value when resolved.
#[derive(Debug)]
struct Deferred(ForeignValue);

impl LogValue for Deferred {
    fn log_value(&self) -> ForeignValue {
        self.0.clone()
    }
}

/// Nested groups and lazy values over scalars whose strings are never empty.
fn nested_attr_strategy() -> impl Strategy<Value = Attr> {
    let leaf = (
        "[a-z]{0,3}",
        prop_oneof![
            any::<i64>().prop_map(ForeignValue::Int64),
            "[a-z]{1,6}".prop_map(ForeignValue::String),
            Just(ForeignValue::Empty),
        ],
    )
        .prop_map(|(key, value)| Attr { key, value });

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            ("[a-z]{0,3}", prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(key, members)| Attr::group(key, members)),
            ("[a-z]{0,3}", inner).prop_map(|(key, attr)| Attr::lazy(key, Deferred(attr.value))),
        ]
    })
}

#[derive(Default)]
struct CollectingLogger {
    records: Mutex<Vec<Record>>,
}

impl Logger for CollectingLogger {
    fn emit(&self, _ctx: &Context, record: &Record) {
        self.records.lock().push(record.clone());
    }
}

fn flatten_all(attrs: Vec<Attr>) -> Vec<KeyValue> {
    let diagnostics = Diagnostics::silent();
    let mut out = Vec::new();
    for attr in attrs {
        flatten_into("", attr, &mut out, &diagnostics);
    }
    out
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Test that severity names parse back to the same severity
    #[test]
    fn test_severity_name_roundtrip(severity in severity_strategy()) {
        let parsed: Severity = severity.name().parse().unwrap();
        prop_assert_eq!(severity, parsed);

        let upper: Severity = severity.name().to_uppercase().parse().unwrap();
        prop_assert_eq!(severity, upper);
    }

    /// Test that ordinals round-trip and agree with ordering
    #[test]
    fn test_severity_ordinal_ordering(a in severity_strategy(), b in severity_strategy()) {
        prop_assert_eq!(Severity::from_ordinal(a.ordinal()), Some(a));
        prop_assert_eq!(a < b, a.ordinal() < b.ordinal());
        prop_assert_eq!(a == b, a.ordinal() == b.ordinal());
    }
}

// ============================================================================
// Level Mapping Tests
// ============================================================================

proptest! {
    /// Test that level mapping never reverses order
    #[test]
    fn test_level_mapping_non_decreasing(a in any::<i32>(), b in any::<i32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Level(lo).to_severity() <= Level(hi).to_severity());
    }

    /// Test that distinct levels inside the named range stay distinct
    #[test]
    fn test_level_mapping_strict_in_range(a in -8i32..=15, b in -8i32..=15) {
        prop_assume!(a < b);
        prop_assert!(Level(a).to_severity() < Level(b).to_severity());
    }

    /// Test that every mapped severity is a named one
    #[test]
    fn test_level_mapping_never_undefined(level in any::<i32>()) {
        let severity = Level(level).to_severity();
        prop_assert!(severity >= Severity::MIN);
        prop_assert!(severity <= Severity::MAX);
    }
}

// ============================================================================
// Attribute Conversion Tests
// ============================================================================

proptest! {
    /// Test that empty-key empty-value attributes never reach the output
    #[test]
    fn test_zero_attrs_never_exported(attrs in prop::collection::vec(attr_strategy(), 0..16)) {
        let expected: Vec<String> = attrs
            .iter()
            .filter(|attr| !attr.is_zero())
            .map(|attr| attr.key.clone())
            .collect();

        let out = flatten_all(attrs);
        let keys: Vec<String> = out.into_iter().map(|kv| kv.key).collect();
        prop_assert_eq!(keys, expected);
    }

    /// Test that an unnamed group is the same as its members written in place
    #[test]
    fn test_unnamed_group_inlined(
        before in prop::collection::vec(attr_strategy(), 0..4),
        members in prop::collection::vec(attr_strategy(), 0..6),
        after in prop::collection::vec(attr_strategy(), 0..4),
    ) {
        let mut grouped = before.clone();
        grouped.push(Attr::group("", members.clone()));
        grouped.extend(after.clone());

        let mut inline = before;
        inline.extend(members);
        inline.extend(after);

        prop_assert_eq!(flatten_all(grouped), flatten_all(inline));
    }

    /// Test that nested lazy values and groups always flatten to a finite
    /// list with no zero attribute in it
    #[test]
    fn test_nested_lazy_groups_flatten(attrs in prop::collection::vec(nested_attr_strategy(), 0..6)) {
        let out = flatten_all(attrs);
        for kv in &out {
            prop_assert!(
                !(kv.key.is_empty() && kv.value == Value::String(String::new())),
                "zero attribute exported: {:?}",
                out
            );
        }
    }

    /// Test that derived handlers never see each other's attributes
    #[test]
    fn test_with_attrs_independent(
        base in prop::collection::vec("[a-z]{1,4}", 0..4),
        left in prop::collection::vec("[a-z]{1,4}", 0..4),
        right in prop::collection::vec("[a-z]{1,4}", 0..4),
    ) {
        let to_attrs = |keys: &[String]| -> Vec<Attr> {
            keys.iter().map(|k| Attr::new(k.as_str(), 1)).collect()
        };

        let handler = Handler::new(Arc::new(CollectingLogger::default()))
            .with_attrs(to_attrs(&base));
        let left_handler = handler.with_attrs(to_attrs(&left));
        let right_handler = handler.with_attrs(to_attrs(&right));

        prop_assert_eq!(handler.attributes().len(), base.len());
        prop_assert_eq!(left_handler.attributes().len(), base.len() + left.len());
        prop_assert_eq!(right_handler.attributes().len(), base.len() + right.len());
    }
}

// ============================================================================
// Text Exporter Tests
// ============================================================================

proptest! {
    /// Test that any record renders as exactly one line
    #[test]
    fn test_text_line_is_single_line(
        body in ".*",
        key in ".*",
        value in ".*",
        severity in severity_strategy(),
    ) {
        let exporter = TextExporter::new(Vec::new());
        let record = Record::new(severity, body)
            .with_observed_timestamp(chrono::Utc::now())
            .with_attribute(KeyValue::string(key, value));

        let line = exporter.format_record(&record);
        prop_assert!(line.ends_with('\n'));
        prop_assert_eq!(line.matches('\n').count(), 1);
        prop_assert!(!line.contains('\r'));
    }
}
