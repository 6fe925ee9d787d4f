//! Dynamic Value Model
//!
//! A closed, recursively nestable value type that every comparator walks:
//!
//! - `Null`, `Bool`, `Number`, `String` scalars
//! - `Sequence`: ordered list with a declared element tag
//! - `Mapping`: string-keyed entries with a declared value tag
//!
//! Values are built once from caller input (usually JSON) and never mutated
//! by the engine.
//!
//! # Example
//!
//! ```rust
//! use deeply_core::value::{Sequence, TypeTag, Value};
//!
//! let untyped = Value::from(serde_json::json!([1, 2, 3]));
//! let typed = Sequence::typed(TypeTag::Int, vec![1.into(), 2.into(), 3.into()]).unwrap();
//!
//! // Same elements, different declared element type
//! assert_ne!(untyped, Value::Sequence(typed));
//! ```

mod error;
mod json;
mod tag;

pub use error::{ValueError, ValueResult};
pub use tag::TypeTag;

use std::borrow::Cow;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Numeric scalar. The representation is part of the value: `Int(1)` and
/// `Float(1.0)` are not equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Declared tag of this number
    pub fn tag(&self) -> TypeTag {
        match self {
            Number::Int(_) => TypeTag::Int,
            Number::UInt(_) => TypeTag::UInt,
            Number::Float(_) => TypeTag::Float,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            // Shortest round-trip form without exponent: 1.0 -> "1", 5.5 -> "5.5"
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

/// A dynamically typed value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Sequence),
    Mapping(Mapping),
}

impl Value {
    /// Declared type tag of this value
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Bool,
            Value::Number(n) => n.tag(),
            Value::String(_) => TypeTag::String,
            Value::Sequence(seq) => TypeTag::sequence_of(seq.element_tag().clone()),
            Value::Mapping(map) => TypeTag::mapping_of(map.value_tag().clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for sequences and mappings
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Text form used when a pattern is tested against a non-string scalar.
    ///
    /// Strings render as themselves, numbers in their shortest decimal form
    /// and `Null` as the empty string. Booleans and containers have no text
    /// form.
    pub fn render_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Null => Some(Cow::Borrowed("")),
            Value::Bool(_) | Value::Sequence(_) | Value::Mapping(_) => None,
        }
    }
}

/// Ordered list of values sharing a declared element tag
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    element: TypeTag,
    items: Vec<Value>,
}

impl Sequence {
    /// Untyped sequence (element tag `Any`)
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            element: TypeTag::Any,
            items,
        }
    }

    /// Sequence whose elements must all conform to `element`
    pub fn typed(element: TypeTag, items: Vec<Value>) -> ValueResult<Self> {
        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| !element.accepts(item))
        {
            return Err(ValueError::NonConformingElement {
                index,
                declared: element,
                found: item.tag(),
            });
        }
        Ok(Self { element, items })
    }

    pub fn element_tag(&self) -> &TypeTag {
        &self.element
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Append a value, checking it against the element tag
    pub fn push(&mut self, value: Value) -> ValueResult<()> {
        if !self.element.accepts(&value) {
            return Err(ValueError::NonConformingElement {
                index: self.items.len(),
                declared: self.element.clone(),
                found: value.tag(),
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Remove the value at `index`, if present
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// String-keyed entries sharing a declared value tag. Key order carries no
/// meaning; iteration is in key order so traversal is deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    value: TypeTag,
    entries: BTreeMap<String, Value>,
}

impl Mapping {
    /// Mapping whose values must all conform to `value`. Keys must be unique.
    pub fn typed<K, I>(value: TypeTag, entries: I) -> ValueResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut map = Self {
            value,
            entries: BTreeMap::new(),
        };
        for (key, item) in entries {
            let key = key.into();
            if map.entries.contains_key(&key) {
                return Err(ValueError::DuplicateKey(key));
            }
            map.insert(key, item)?;
        }
        Ok(map)
    }

    pub fn value_tag(&self) -> &TypeTag {
        &self.value
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Insert or replace an entry, checking the value against the value tag.
    /// Returns the replaced value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> ValueResult<Option<Value>> {
        let key = key.into();
        if !self.value.accepts(&value) {
            return Err(ValueError::NonConformingEntry {
                key,
                declared: self.value.clone(),
                found: value.tag(),
            });
        }
        Ok(self.entries.insert(key, value))
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
    /// Untyped mapping; a repeated key keeps the last value
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            value: TypeTag::Any,
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::Int(i64::from(n)))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::Int(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::UInt(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::Float(n))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(Sequence::new(items))
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::Sequence(seq)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
