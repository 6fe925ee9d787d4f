//! Declared type tags

use std::fmt;

use super::{Number, Value};

/// Declared type of a value.
///
/// Scalars carry their own tag. Containers carry the tag of their elements
/// (or mapping values); `Any` marks an untyped container, the shape produced
/// by decoding JSON. Two containers are only comparable when their tags are
/// equal, so a sequence of `Int` never matches a sequence of `Any` even when
/// the elements look the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeTag {
    #[default]
    Any,
    Null,
    Bool,
    Int,
    UInt,
    Float,
    String,
    Sequence(Box<TypeTag>),
    Mapping(Box<TypeTag>),
}

impl TypeTag {
    /// Tag of a sequence holding `element` values
    pub fn sequence_of(element: TypeTag) -> Self {
        TypeTag::Sequence(Box::new(element))
    }

    /// Tag of a mapping holding `value` values
    pub fn mapping_of(value: TypeTag) -> Self {
        TypeTag::Mapping(Box::new(value))
    }

    /// Whether `value` may be stored in a container declared with this tag.
    ///
    /// Does not allocate: container tags are compared element-wise.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (TypeTag::Any, _) => true,
            (TypeTag::Null, Value::Null) => true,
            (TypeTag::Bool, Value::Bool(_)) => true,
            (TypeTag::Int, Value::Number(Number::Int(_))) => true,
            (TypeTag::UInt, Value::Number(Number::UInt(_))) => true,
            (TypeTag::Float, Value::Number(Number::Float(_))) => true,
            (TypeTag::String, Value::String(_)) => true,
            (TypeTag::Sequence(element), Value::Sequence(seq)) => **element == *seq.element_tag(),
            (TypeTag::Mapping(inner), Value::Mapping(map)) => **inner == *map.value_tag(),
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Any => f.write_str("any"),
            TypeTag::Null => f.write_str("null"),
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::Int => f.write_str("int"),
            TypeTag::UInt => f.write_str("uint"),
            TypeTag::Float => f.write_str("float"),
            TypeTag::String => f.write_str("string"),
            TypeTag::Sequence(element) => write!(f, "[]{}", element),
            TypeTag::Mapping(value) => write!(f, "map[string]{}", value),
        }
    }
}
