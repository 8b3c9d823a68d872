//! Tests for sharing readers and writers across threads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use serde_json::json;
use waypoint::object::validator::additional_properties;
use waypoint::object::ObjectReader;
use waypoint::reader::{self, ReaderExt};
use waypoint::validator::order;
use waypoint::writer::{self, ObjectWriter, Writer};
use waypoint::{ErrorBuilders, Location, ReadResult, Reader, ReaderContext, Value};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    age: i64,
}

fn user_reader(assembled: Arc<AtomicUsize>) -> ObjectReader<User> {
    let builders = ErrorBuilders::default();
    let mut builder = ObjectReader::builder();
    builder.fail_fast(false).before("closed", additional_properties());

    let name = builder.property("name", reader::string(&builders)).required();
    let age = builder
        .property("age", reader::integer::<i64>(&builders).validation(order::min(0)))
        .required();

    builder.build(move |_, location, mut values| {
        assembled.fetch_add(1, Ordering::SeqCst);
        ReadResult::success(
            location.clone(),
            User {
                name: values.take(&name).unwrap_or_default(),
                age: values[&age],
            },
        )
    })
}

#[test]
fn test_concurrent_reads() {
    let assembled = Arc::new(AtomicUsize::new(0));
    let reader = Arc::new(user_reader(assembled.clone()));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let reader = Arc::clone(&reader);
            thread::spawn(move || {
                let input = Value::from(json!({"name": format!("User{}", i), "age": 20 + i}));
                let user = reader
                    .read(&ReaderContext::new(), &Location::root(), &input)
                    .into_result()
                    .unwrap();
                assert_eq!(user.age, 20 + i);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(assembled.load(Ordering::SeqCst), 10);
}

#[test]
fn test_concurrent_failures_are_independent() {
    let reader = user_reader(Arc::new(AtomicUsize::new(0)));

    let handles: Vec<_> = (0..8usize)
        .map(|i| {
            let reader = reader.clone();
            thread::spawn(move || {
                let input = if i % 2 == 0 {
                    Value::from(json!({"name": "ok", "age": i as i64}))
                } else {
                    Value::from(json!({"age": -(i as i64)}))
                };
                reader.read(&ReaderContext::new(), &(Location::root() / "users" / i), &input)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        if i % 2 == 0 {
            assert!(result.is_success());
        } else {
            let failure = result.into_result().unwrap_err();
            let at = format!("#/users[{}]", i);
            let locations: Vec<_> = failure.causes().map(|c| c.location.to_string()).collect();
            assert_eq!(
                locations,
                vec![format!("{}.name", at), format!("{}.age", at)]
            );
        }
    }
}

#[test]
fn test_shared_writer() {
    let users = Arc::new(
        ObjectWriter::new()
            .required("name", writer::string(), |u: &User| &u.name)
            .required("age", writer::integer(), |u: &User| &u.age),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let users = Arc::clone(&users);
            thread::spawn(move || {
                users.write(&User {
                    name: format!("u{}", i),
                    age: i,
                })
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().unwrap();
        assert_eq!(value.get("age"), Some(&Value::from(i as i64)));
    }
}
