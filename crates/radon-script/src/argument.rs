// src/argument.rs
//! Operator arguments as supplied by callers, and their normalization into values.

use radon_types::{LiteralKind, Operand, TypeDescriptor};

use crate::builder::ScriptBuilder;
use crate::value::Value;

/// An argument to [`ScriptBuilder::invoke`]: either a literal or another
/// builder whose script is embedded as a sub-script.
#[derive(Debug, Clone)]
pub enum Argument<'a> {
    Value(Value),
    Builder(&'a ScriptBuilder<'a>),
}

impl<'a> Argument<'a> {
    /// The value recorded in the instruction. A builder contributes a copy of
    /// its instructions as they are now; later calls on it do not reach back.
    pub fn normalize(&self) -> Value {
        match self {
            Argument::Value(value) => value.clone(),
            Argument::Builder(builder) => Value::Script(builder.instructions().to_vec()),
        }
    }
}

/// Replaces nested builders with snapshots of their scripts.
pub fn normalize(args: &[Argument<'_>]) -> Vec<Value> {
    args.iter().map(Argument::normalize).collect()
}

impl Operand for Argument<'_> {
    fn branches(&self) -> Option<Vec<LiteralKind>> {
        match self {
            Argument::Value(Value::Map(entries)) => Some(entries.values().map(Value::kind).collect()),
            _ => None,
        }
    }

    fn subscript_type(&self) -> Option<&TypeDescriptor> {
        match self {
            Argument::Builder(builder) => Some(builder.current_type()),
            Argument::Value(_) => None,
        }
    }
}

impl<'a, 't: 'a> From<&'a ScriptBuilder<'t>> for Argument<'a> {
    fn from(builder: &'a ScriptBuilder<'t>) -> Self {
        Argument::Builder(builder)
    }
}

impl From<Value> for Argument<'_> {
    fn from(value: Value) -> Self {
        Argument::Value(value)
    }
}

macro_rules! impl_from_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument<'_> {
                fn from(value: $ty) -> Self {
                    Argument::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_literal!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, &str, String, Vec<u8>, Vec<Value>);
