//! Integration tests for array readers and collection validators.

use serde_json::json;
use waypoint::reader::{self, ReaderExt};
use waypoint::validator::array;
use waypoint::{ErrorBuilders, Failure, Location, ReadResult, Reader, ReaderContext, Value, ValueType};

/// Helper to extract the success value from a ReadResult
fn unwrap_success<T: std::fmt::Debug>(result: ReadResult<T>) -> T {
    result.into_result().unwrap()
}

/// Helper to extract the failure from a ReadResult
fn unwrap_failure<T: std::fmt::Debug>(result: ReadResult<T>) -> Failure {
    result.into_result().unwrap_err()
}

#[test]
fn test_list_reports_every_failing_index() {
    let builders = ErrorBuilders::default();
    let tags = reader::list(reader::string(&builders), &builders);
    let input = Value::from(json!(["a", 10, true, "b"]));

    let failure = unwrap_failure(tags.read(&ReaderContext::new(), &(Location::root() / "tags"), &input));

    let causes: Vec<_> = failure.causes().collect();
    assert_eq!(causes.len(), 2);
    assert_eq!(causes[0].location.to_string(), "#/tags[1]");
    assert_eq!(
        causes[0].errors.first(),
        &builders.invalid_type(ValueType::String, ValueType::Number)
    );
    assert_eq!(causes[1].location.to_string(), "#/tags[2]");
    assert_eq!(
        causes[1].errors.first(),
        &builders.invalid_type(ValueType::String, ValueType::Boolean)
    );
}

#[test]
fn test_empty_array_reads_as_empty_collection() {
    let builders = ErrorBuilders::default();
    let ctx = ReaderContext::new();
    let input = Value::from(json!([]));

    let list = unwrap_success(reader::list(reader::string(&builders), &builders).read(&ctx, &Location::root(), &input));
    assert!(list.is_empty());

    let set = unwrap_success(reader::set(reader::string(&builders), &builders).read(&ctx, &Location::root(), &input));
    assert!(set.is_empty());
}

#[test]
fn test_list_rejects_non_array() {
    let builders = ErrorBuilders::default();
    let tags = reader::list(reader::string(&builders), &builders);

    let failure = unwrap_failure(tags.read(&ReaderContext::new(), &Location::root(), &Value::from("a")));
    assert_eq!(failure.len(), 1);
    assert_eq!(failure.first().location, Location::root());
    assert_eq!(failure.first().errors.first().code, "invalid_type");
}

#[test]
fn test_set_keeps_first_seen_order() {
    let builders = ErrorBuilders::default();
    let codes = reader::set(reader::string(&builders), &builders);
    let input = Value::from(json!(["b", "a", "b", "c", "a"]));

    let set = unwrap_success(codes.read(&ReaderContext::new(), &Location::root(), &input));
    let ordered: Vec<_> = set.iter().map(String::as_str).collect();
    assert_eq!(ordered, vec!["b", "a", "c"]);
}

#[test]
fn test_nested_lists_extend_locations() {
    let builders = ErrorBuilders::default();
    let matrix = reader::list(reader::list(reader::integer::<i64>(&builders), &builders), &builders);
    let input = Value::from(json!([[1, 2], [3, "x"], []]));

    let failure = unwrap_failure(matrix.read(&ReaderContext::new(), &Location::root(), &input));
    assert_eq!(failure.len(), 1);
    assert_eq!(failure.first().location.to_string(), "#/[1][1]");
}

#[test]
fn test_collection_validators_on_read_values() {
    let builders = ErrorBuilders::default();
    let ctx = ReaderContext::new();
    let phones = reader::list(reader::string(&builders), &builders)
        .validation(array::min_items(1))
        .validation(array::is_unique(false, |phone: &String| phone.clone()));

    let failure = unwrap_failure(phones.read(&ctx, &(Location::root() / "phones"), &Value::from(json!([]))));
    assert_eq!(failure.first().location.to_string(), "#/phones");
    assert_eq!(failure.first().errors.first().code, "min_items");

    let failure = unwrap_failure(phones.read(
        &ctx,
        &(Location::root() / "phones"),
        &Value::from(json!(["1", "2", "1", "1"])),
    ));
    assert_eq!(failure.len(), 1);
    let errors: Vec<_> = failure.first().errors.iter().collect();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.code == "is_unique"));

    let ok = unwrap_success(phones.read(&ctx, &Location::root(), &Value::from(json!(["1", "2"]))));
    assert_eq!(ok, vec!["1", "2"]);
}

#[test]
fn test_element_validation_failures_accumulate_across_indices() {
    use waypoint::validator::string;

    let builders = ErrorBuilders::default();
    let names = reader::list(reader::string(&builders).validation(string::is_not_blank()), &builders);
    let input = Value::from(json!(["ann", " ", "", "bob"]));

    let failure = unwrap_failure(names.read(&ReaderContext::new(), &Location::root(), &input));
    let located: Vec<_> = failure
        .causes()
        .map(|c| (c.location.to_string(), c.errors.first().code.clone()))
        .collect();
    assert_eq!(
        located,
        vec![
            ("#/[1]".to_string(), "is_blank".to_string()),
            ("#/[2]".to_string(), "is_blank".to_string()),
        ]
    );
}
