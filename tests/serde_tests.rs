//! Serde support for `Value` and `ValueHash`.

#![cfg(feature = "serde")]

use ordmap_ext::extension::from_values;
use ordmap_ext::prelude::*;
use rstest::rstest;

#[rstest]
fn test_value_hash_serializes_in_insertion_order() {
    let hash = from_values(vec![
        Value::from("z"),
        Value::from(vec![Value::from(1), Value::Nil]),
        Value::from("a"),
        Value::from(true),
    ])
    .unwrap();

    let json = serde_json::to_string(&hash).unwrap();
    assert_eq!(json, r#"{"z":[1,null],"a":true}"#);
}

#[rstest]
fn test_value_deserializes_untagged() {
    let value: Value = serde_json::from_str(r#"{"b":[1,"two"],"a":null}"#).unwrap();
    let Value::Map(map) = value else {
        panic!("expected a map");
    };

    assert_eq!(
        map.keys().cloned().collect::<Vec<_>>(),
        vec![Value::from("b"), Value::from("a")]
    );
    assert_eq!(map.fetch(&Value::from("a")), Ok(&Value::Nil));
    assert_eq!(map.key_of(&Value::from(vec![Value::from(1), Value::from("two")])), Some(&Value::from("b")));
}
