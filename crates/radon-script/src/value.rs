// src/value.rs
//! Literal values passed as operator arguments.

use indexmap::IndexMap;
use radon_types::LiteralKind;
use serde::ser::{Serialize, Serializer};

use crate::instruction::Instruction;

/// An argument value, after any nested builder has been snapshotted.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    /// Keyed entries in insertion order, e.g. the branches of a `match`.
    Map(IndexMap<String, Value>),
    /// An embedded sub-script.
    Script(Vec<Instruction>),
}

impl Value {
    /// How this value contributes to branch-based result typing.
    pub fn kind(&self) -> LiteralKind {
        match self {
            Value::Null => LiteralKind::Absent,
            Value::Boolean(_) => LiteralKind::Boolean,
            Value::Integer(_) | Value::Float(_) => LiteralKind::Numeric,
            Value::String(_) => LiteralKind::Text,
            Value::Bytes(_) | Value::Array(_) | Value::Map(_) | Value::Script(_) => LiteralKind::Opaque,
        }
    }

    /// Builds a map value from `(key, value)` pairs, keeping their order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(bytes) => serializer.serialize_bytes(bytes),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Map(entries) => serializer.collect_map(entries),
            Value::Script(instructions) => serializer.collect_seq(instructions),
        }
    }
}

// --- Conversions ---

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Integer(i64::from(i))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
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

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_kinds() {
        assert_eq!(Value::from(3i64).kind(), LiteralKind::Numeric);
        assert_eq!(Value::from(1.5f64).kind(), LiteralKind::Numeric);
        assert_eq!(Value::from("x").kind(), LiteralKind::Text);
        assert_eq!(Value::from(true).kind(), LiteralKind::Boolean);
        assert_eq!(Value::from(None::<i64>).kind(), LiteralKind::Absent);
        assert_eq!(Value::from(vec![0xCAu8]).kind(), LiteralKind::Opaque);
        assert_eq!(Value::Script(Vec::new()).kind(), LiteralKind::Opaque);
    }

    #[test]
    fn test_map_keeps_insertion_order() {
        let value = Value::map([("b", 1i64), ("a", 2i64)]);
        let Value::Map(entries) = value else { panic!("expected a map") };
        let keys: Vec<_> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
