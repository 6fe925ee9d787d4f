//! Shared builders for integration tests
#![allow(dead_code)]

use deeply_core::{Mapping, Sequence, TypeTag, Value};

/// Untyped value from JSON
pub fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Sequence declared as holding ints
pub fn ints(items: &[i64]) -> Value {
    Sequence::typed(TypeTag::Int, items.iter().map(|&n| Value::from(n)).collect())
        .unwrap()
        .into()
}

/// Sequence declared as holding strings
pub fn strs(items: &[&str]) -> Value {
    Sequence::typed(TypeTag::String, items.iter().map(|&s| Value::from(s)).collect())
        .unwrap()
        .into()
}

/// Untyped mapping
pub fn obj(entries: Vec<(&str, Value)>) -> Mapping {
    entries.into_iter().collect()
}

/// The nested fixture most suites start from: strings, a nested mapping,
/// typed string and int sequences
pub fn nested() -> Mapping {
    obj(vec![
        ("a", "a".into()),
        ("b", "b".into()),
        (
            "c",
            obj(vec![
                ("f", strs(&["a", "b", "c"])),
                ("d", "d".into()),
                ("e", ints(&[1, 2, 3])),
            ])
            .into(),
        ),
    ])
}

/// Mapping with every scalar kind, a nested mapping and an untyped sequence
pub fn profile() -> Value {
    v(serde_json::json!({
        "name": "Afra Gokce",
        "age": 1,
        "girl": true,
        "null": null,
        "greetings": {"hola": "mundo", "merhaba": "dunya"},
        "cities": ["Istanbul", "Jakarta"],
    }))
}

/// Pattern fixture: regex leaves against concrete values
pub fn patterned() -> (Mapping, Mapping) {
    let mut expect = nested();
    expect.insert("name", "^grip.*$".into()).unwrap();
    expect
        .insert("cities", strs(&["Jakarta", "Istanbul", ".*grad$"]))
        .unwrap();

    let mut actual = nested();
    actual.insert("name", "gripmock".into()).unwrap();
    actual
        .insert("cities", strs(&["Jakarta", "Istanbul", "Stalingrad"]))
        .unwrap();

    (expect, actual)
}

pub fn val(map: &Mapping) -> Value {
    Value::Mapping(map.clone())
}
