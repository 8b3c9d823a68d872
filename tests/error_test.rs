//! Tests for read errors, failures and their combination.

use stillwater::prelude::*;
use waypoint::{
    merge_failures, Cause, ErrorBuilders, Failure, Location, ReadError, ReadErrors, ReadResult,
    ValueType,
};

#[test]
fn test_error_display() {
    let error = ReadError::new("must be at least 18")
        .with_code("min_value")
        .with_expected("18")
        .with_got("16");
    assert_eq!(error.to_string(), "must be at least 18 (expected: 18) (got: 16)");

    let critical = ReadError::new("unsupported version").critical();
    assert_eq!(critical.to_string(), "unsupported version [critical]");
}

#[test]
fn test_default_engine_errors() {
    let builders = ErrorBuilders::default();

    let missing = builders.path_missing();
    assert_eq!(missing.code, "path_missing");
    assert!(!missing.critical);

    let wrong = builders.invalid_type(ValueType::String, ValueType::Number);
    assert_eq!(wrong.code, "invalid_type");
    assert_eq!(wrong.expected.as_deref(), Some("string"));
    assert_eq!(wrong.got.as_deref(), Some("number"));
    assert_eq!(wrong.message, "expected string, got number");

    let cast = builders.value_cast("300", "u8");
    assert_eq!(cast.code, "value_cast");
    assert_eq!(cast.got.as_deref(), Some("300"));
}

#[test]
fn test_custom_builders_replace_payloads() {
    let builders = ErrorBuilders::default()
        .invalid_type_with(|expected, actual| {
            ReadError::new(format!("{} statt {}", actual, expected)).with_code("T1")
        })
        .value_cast_with(|value, target| ReadError::new(format!("{}:{}", value, target)).critical());

    assert_eq!(
        builders.invalid_type(ValueType::Array, ValueType::Null).message,
        "null statt array"
    );
    assert!(builders.value_cast("1.5", "i64").critical);
    assert_eq!(builders.path_missing(), ReadError::path_missing());
}

#[test]
fn test_errors_combine_in_order() {
    let left = ReadErrors::single(ReadError::new("a"));
    let right = ReadErrors::from_vec(vec![ReadError::new("b"), ReadError::new("c")]).unwrap();

    let combined = left.combine(right);
    let messages: Vec<_> = combined.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["a", "b", "c"]);
    assert_eq!(combined.to_string(), "a; b; c");
    assert!(ReadErrors::from_vec(Vec::new()).is_none());
}

#[test]
fn test_critical_tagging() {
    let errors = ReadErrors::from_vec(vec![ReadError::new("a"), ReadError::new("b")]).unwrap();
    assert!(!errors.has_critical());

    let tagged = errors.into_critical();
    assert!(tagged.iter().all(|e| e.critical));
}

#[test]
fn test_failure_combine_keeps_cause_order() {
    let first = Failure::new(Location::root() / "a", ReadError::new("x"));
    let second = Failure::new(Location::root() / "b", ReadError::new("y"));

    let combined = first.combine(second);
    let locations: Vec<_> = combined.causes().map(|c| c.location.to_string()).collect();
    assert_eq!(locations, vec!["#/a", "#/b"]);
    assert!(!combined.is_critical());
    assert_eq!(combined.at(&(Location::root() / "b")).len(), 1);
}

#[test]
fn test_failure_display() {
    let failure = Failure::from_causes(vec![
        Cause::new(Location::root() / "name", ReadError::path_missing()),
        Cause::new(Location::root(), ReadError::new("too few properties")),
    ])
    .unwrap();

    assert_eq!(
        failure.to_string(),
        "Read failed at 2 location(s):\n  1. #/name: missing required value\n  2. #: too few properties\n"
    );
}

#[test]
fn test_merge_failures_collects_only_failures() {
    let results = vec![
        ReadResult::success(Location::root() / "a", 1),
        ReadResult::failure(Location::root() / "b", ReadError::new("bad b")),
        ReadResult::success(Location::root() / "c", 3),
        ReadResult::failure(Location::root() / "d", ReadError::new("bad d")),
    ];

    let merged = merge_failures(results).unwrap();
    let locations: Vec<_> = merged.causes().map(|c| c.location.to_string()).collect();
    assert_eq!(locations, vec!["#/b", "#/d"]);

    let all_ok = vec![ReadResult::success(Location::root(), 1)];
    assert!(merge_failures(all_ok).is_none());
}

#[test]
fn test_result_combinators() {
    let doubled = ReadResult::success(Location::root() / "n", 21).map(|n| n * 2);
    assert_eq!(doubled.value(), Some(&42));
    assert_eq!(doubled.location(), Some(&(Location::root() / "n")));

    let checked = ReadResult::success(Location::root(), 5).and_then(|location, n| {
        if n > 10 {
            ReadResult::success(location.clone(), n)
        } else {
            ReadResult::failure(location.clone(), ReadError::new("too small"))
        }
    });
    assert!(checked.is_failure());
    assert_eq!(checked.failure_ref().unwrap().first().errors.first().message, "too small");
}
