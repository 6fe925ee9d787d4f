//! Containment tests

mod common;

use common::{ints, nested, obj, profile, strs, v, val};
use deeply_core::{contains, contains_ignore_order, Mapping, TypeTag, Value};
use serde_json::json;

#[test]
fn test_contains_simple() {
    assert!(contains(&v(json!("a")), &v(json!("a"))));
    assert!(!contains(&v(json!("a")), &v(json!("b"))));
    assert!(contains(&ints(&[1, 2, 3]), &ints(&[1, 2, 3])));
}

#[test]
fn test_contains_map_left() {
    let mut a = nested();
    let b = nested();
    assert!(contains(&val(&a), &val(&b)));

    // fewer expected keys is still contained
    a.remove("a");
    assert!(contains(&val(&a), &val(&b)));

    a.insert("a", true.into()).unwrap();
    assert!(!contains(&val(&a), &val(&b)));
}

#[test]
fn test_contains_map_right() {
    let a = nested();
    let mut b = nested();
    assert!(contains(&val(&a), &val(&b)));

    b.remove("a");
    assert!(!contains(&val(&a), &val(&b)));

    b.insert("a", true.into()).unwrap();
    assert!(!contains(&val(&a), &val(&b)));
}

#[test]
fn test_contains_sequences_are_subsets() {
    assert!(contains(&ints(&[1, 2, 3]), &ints(&[1, 2, 3])));
    assert!(contains(&ints(&[1, 3, 2]), &ints(&[1, 2, 3])));
    assert!(contains(&ints(&[1, 2]), &ints(&[1, 2, 3])));
    assert!(!contains(&ints(&[1, 2, 3]), &ints(&[1, 2])));

    assert!(contains(&v(json!([1, 2])), &v(json!([3, 2, 1]))));
    assert!(!contains(&v(json!([1, 2, 3])), &v(json!([1, 2]))));
}

#[test]
fn test_contains_ignore_order() {
    assert!(!contains_ignore_order(&strs(&["a", "b", "c"]), &ints(&[1, 2, 3])));
    assert!(contains_ignore_order(&strs(&["a", "b", "c"]), &strs(&["b", "a", "c"])));
    assert!(contains_ignore_order(&ints(&[1, 2, 3]), &ints(&[1, 3, 2])));
    assert!(contains_ignore_order(&v(json!([1, 2, 3])), &v(json!([1, 3, 2]))));

    assert!(!contains_ignore_order(&ints(&[1, 2, 3]), &ints(&[1, 2])));
    assert!(!contains_ignore_order(&v(json!([1, 2, 3])), &v(json!([1, 2]))));
}

#[test]
fn test_contains_map_stable() {
    let items = |first: Value, second: Value| -> Value {
        Mapping::typed(
            TypeTag::sequence_of(TypeTag::Any),
            vec![("items", Value::from(vec![first, second]))],
        )
        .unwrap()
        .into()
    };
    let big = || v(json!({"high": 72057594037927936u64, "low": 18446744073709551615u64}));
    let small = || v(json!({"low": 2, "high": 1}));

    let a = items(big(), small());
    let b = items(big(), small());
    assert!(contains(&a, &b));
    assert!(contains(&b, &a));

    let swapped = items(small(), big());
    assert!(contains_ignore_order(&swapped, &b));
    assert!(contains_ignore_order(&b, &swapped));
    assert!(contains(&swapped, &b));

    // a typed mapping never contains an untyped one with the same entries
    assert!(!contains(&v(json!({"items": [{"low": 2, "high": 1}]})), &b));
}

#[test]
fn test_contains_greedy_duplicates() {
    assert!(!contains_ignore_order(&strs(&["a", "a", "a"]), &strs(&["a", "b", "c", "a"])));
    assert!(!contains_ignore_order(&strs(&["a", "a", "a"]), &strs(&["a", "b", "c"])));
    assert!(contains_ignore_order(&strs(&["a", "a"]), &strs(&["a", "b", "c", "a"])));
    assert!(contains_ignore_order(&strs(&["a", "c", "b"]), &strs(&["a", "b", "c"])));
}

#[test]
fn test_contains_nested_subsets() {
    let expect = v(json!({"user": {"name": "bob"}, "tags": [{"id": 1}]}));
    let actual = v(json!({
        "user": {"name": "bob", "age": 30},
        "tags": [{"id": 2, "x": 0}, {"id": 1, "x": 1}],
        "extra": true,
    }));
    assert!(contains(&expect, &actual));
    assert!(!contains(&actual, &expect));
}

#[test]
fn test_contains_boundary() {
    assert!(!contains(&strs(&["a", "a", "a"]), &strs(&["a", "b", "c"])));
    assert!(!contains(&strs(&["a", "b", "c"]), &strs(&["a", "a", "a"])));
    assert!(!contains(&Value::Null, &v(json!(false))));
    assert!(contains(&Value::Null, &Value::Null));

    let field1 = obj(vec![("field1", "hello".into())]);
    let field2 = obj(vec![("field2", "hello field1".into())]);
    assert!(!contains(&val(&field1), &val(&field2)));

    assert!(contains(&profile(), &profile()));
}
