//! Integration tests for the six property cardinalities.
//!
//! Every policy is checked against the four situations a member can be in:
//! missing, explicit null, present, and unreachable because a container on
//! the way has the wrong type.

use serde_json::json;
use waypoint::object::ObjectReader;
use waypoint::reader::{
    self, read_nullable, read_nullable_with_default, read_optional, read_optional_with_default,
    read_required, read_with_default,
};
use waypoint::{
    lookup, ErrorBuilders, Failure, JsonPath, Location, Reader, ReadResult, ReaderContext, Value,
    ValueType,
};

/// Helper to extract the success value from a ReadResult
fn unwrap_success<T: std::fmt::Debug>(result: ReadResult<T>) -> T {
    result.into_result().unwrap()
}

/// Helper to extract the failure from a ReadResult
fn unwrap_failure<T: std::fmt::Debug>(result: ReadResult<T>) -> Failure {
    result.into_result().unwrap_err()
}

fn document() -> Value {
    Value::from(json!({
        "present": "value",
        "nothing": null,
        "scalar": 42
    }))
}

fn path(name: &str) -> JsonPath {
    JsonPath::from_key(name)
}

/// `scalar.inner` walks through a number, which is a container mismatch.
fn unreachable() -> JsonPath {
    JsonPath::from_key("scalar") / "inner"
}

fn assert_invalid_type<T: std::fmt::Debug>(result: ReadResult<T>, expected: ValueType, actual: ValueType, at: Location) {
    let failure = unwrap_failure(result);
    assert_eq!(failure.len(), 1);
    assert_eq!(failure.first().location, at);
    assert_eq!(failure.first().errors.first(), &ErrorBuilders::default().invalid_type(expected, actual));
}

fn assert_path_missing<T: std::fmt::Debug>(result: ReadResult<T>, at: Location) {
    let failure = unwrap_failure(result);
    assert_eq!(failure.len(), 1);
    assert_eq!(failure.first().location, at);
    assert_eq!(failure.first().errors.first().code, "path_missing");
}

#[test]
fn test_required() {
    let doc = document();
    let ctx = ReaderContext::new();
    let b = ErrorBuilders::default();
    let r = reader::string(&b);
    let root = Location::root();

    assert_path_missing(
        read_required(&ctx, lookup(&root, &path("absent"), &doc), &r, &b),
        Location::root() / "absent",
    );
    assert_invalid_type(
        read_required(&ctx, lookup(&root, &path("nothing"), &doc), &r, &b),
        ValueType::String,
        ValueType::Null,
        Location::root() / "nothing",
    );
    assert_eq!(
        unwrap_success(read_required(&ctx, lookup(&root, &path("present"), &doc), &r, &b)),
        "value"
    );
    assert_invalid_type(
        read_required(&ctx, lookup(&root, &unreachable(), &doc), &r, &b),
        ValueType::Object,
        ValueType::Number,
        Location::root() / "scalar",
    );
}

#[test]
fn test_optional() {
    let doc = document();
    let ctx = ReaderContext::new();
    let b = ErrorBuilders::default();
    let r = reader::string(&b);
    let root = Location::root();

    assert_eq!(unwrap_success(read_optional(&ctx, lookup(&root, &path("absent"), &doc), &r, &b)), None);
    assert_eq!(unwrap_success(read_optional(&ctx, lookup(&root, &path("nothing"), &doc), &r, &b)), None);
    assert_eq!(
        unwrap_success(read_optional(&ctx, lookup(&root, &path("present"), &doc), &r, &b)),
        Some("value".to_string())
    );
    assert_invalid_type(
        read_optional(&ctx, lookup(&root, &unreachable(), &doc), &r, &b),
        ValueType::Object,
        ValueType::Number,
        Location::root() / "scalar",
    );
}

#[test]
fn test_nullable() {
    let doc = document();
    let ctx = ReaderContext::new();
    let b = ErrorBuilders::default();
    let r = reader::string(&b);
    let root = Location::root();

    assert_path_missing(
        read_nullable(&ctx, lookup(&root, &path("absent"), &doc), &r, &b),
        Location::root() / "absent",
    );
    assert_eq!(unwrap_success(read_nullable(&ctx, lookup(&root, &path("nothing"), &doc), &r, &b)), None);
    assert_eq!(
        unwrap_success(read_nullable(&ctx, lookup(&root, &path("present"), &doc), &r, &b)),
        Some("value".to_string())
    );
    assert_invalid_type(
        read_nullable(&ctx, lookup(&root, &unreachable(), &doc), &r, &b),
        ValueType::Object,
        ValueType::Number,
        Location::root() / "scalar",
    );
}

#[test]
fn test_defaultable() {
    let doc = document();
    let ctx = ReaderContext::new();
    let b = ErrorBuilders::default();
    let r = reader::string(&b);
    let root = Location::root();
    let default = || "default".to_string();

    assert_eq!(
        unwrap_success(read_with_default(&ctx, lookup(&root, &path("absent"), &doc), &r, default, &b)),
        "default"
    );
    assert_invalid_type(
        read_with_default(&ctx, lookup(&root, &path("nothing"), &doc), &r, default, &b),
        ValueType::String,
        ValueType::Null,
        Location::root() / "nothing",
    );
    assert_eq!(
        unwrap_success(read_with_default(&ctx, lookup(&root, &path("present"), &doc), &r, default, &b)),
        "value"
    );
    assert_invalid_type(
        read_with_default(&ctx, lookup(&root, &unreachable(), &doc), &r, default, &b),
        ValueType::Object,
        ValueType::Number,
        Location::root() / "scalar",
    );
}

#[test]
fn test_optional_with_default() {
    let doc = document();
    let ctx = ReaderContext::new();
    let b = ErrorBuilders::default();
    let r = reader::string(&b);
    let root = Location::root();
    let default = || "default".to_string();

    assert_eq!(
        unwrap_success(read_optional_with_default(&ctx, lookup(&root, &path("absent"), &doc), &r, default, &b)),
        Some("default".to_string())
    );
    assert_eq!(
        unwrap_success(read_optional_with_default(&ctx, lookup(&root, &path("nothing"), &doc), &r, default, &b)),
        None
    );
    assert_eq!(
        unwrap_success(read_optional_with_default(&ctx, lookup(&root, &path("present"), &doc), &r, default, &b)),
        Some("value".to_string())
    );
    assert_invalid_type(
        read_optional_with_default(&ctx, lookup(&root, &unreachable(), &doc), &r, default, &b),
        ValueType::Object,
        ValueType::Number,
        Location::root() / "scalar",
    );
}

#[test]
fn test_nullable_with_default() {
    let doc = document();
    let ctx = ReaderContext::new();
    let b = ErrorBuilders::default();
    let r = reader::string(&b);
    let root = Location::root();
    let default = || "default".to_string();

    assert_eq!(
        unwrap_success(read_nullable_with_default(&ctx, lookup(&root, &path("absent"), &doc), &r, default, &b)),
        "default"
    );
    assert_eq!(
        unwrap_success(read_nullable_with_default(&ctx, lookup(&root, &path("nothing"), &doc), &r, default, &b)),
        "default"
    );
    assert_eq!(
        unwrap_success(read_nullable_with_default(&ctx, lookup(&root, &path("present"), &doc), &r, default, &b)),
        "value"
    );
    assert_invalid_type(
        read_nullable_with_default(&ctx, lookup(&root, &unreachable(), &doc), &r, default, &b),
        ValueType::Object,
        ValueType::Number,
        Location::root() / "scalar",
    );
}

#[test]
fn test_present_value_of_wrong_type_is_reported_by_reader() {
    let doc = document();
    let ctx = ReaderContext::new();
    let b = ErrorBuilders::default();
    let root = Location::root();

    assert_invalid_type(
        read_optional(&ctx, lookup(&root, &path("scalar"), &doc), &reader::string(&b), &b),
        ValueType::String,
        ValueType::Number,
        Location::root() / "scalar",
    );
}

#[derive(Debug, PartialEq)]
struct Settings {
    name: String,
    retries: i64,
    label: Option<String>,
    region: Option<String>,
    owner: Option<String>,
    timeout: i64,
}

#[test]
fn test_all_policies_through_object_reader() {
    let mut builder = ObjectReader::builder();
    builder.fail_fast(false);
    let text = reader::string(builder.builders());
    let int = reader::integer::<i64>(builder.builders());

    let name = builder.property("name", text.clone()).required();
    let retries = builder.property("retries", int.clone()).defaultable(|| 3);
    let label = builder.property("label", text.clone()).optional();
    let region = builder
        .property("region", text.clone())
        .optional_with_default(|| "eu".to_string());
    let owner = builder.property("owner", text).nullable();
    let timeout = builder.property("timeout", int).nullable_with_default(|| 30);

    let settings = builder.build(move |_, location, mut values| {
        ReadResult::success(
            location.clone(),
            Settings {
                name: values.take(&name).unwrap_or_default(),
                retries: values[&retries],
                label: values.take(&label).flatten(),
                region: values.take(&region).flatten(),
                owner: values.take(&owner).flatten(),
                timeout: values[&timeout],
            },
        )
    });

    let input = Value::from(json!({"name": "svc", "owner": null, "timeout": null}));
    let result = settings.read(&ReaderContext::new(), &Location::root(), &input);

    assert_eq!(
        unwrap_success(result),
        Settings {
            name: "svc".into(),
            retries: 3,
            label: None,
            region: Some("eu".into()),
            owner: None,
            timeout: 30,
        }
    );

    // name missing, owner missing: two causes in declaration order
    let input = Value::from(json!({"retries": 1}));
    let failure = unwrap_failure(settings.read(&ReaderContext::new(), &Location::root(), &input));
    let locations: Vec<_> = failure.causes().map(|c| c.location.to_string()).collect();
    assert_eq!(locations, vec!["#/name", "#/owner"]);
}
