// src/defaults.rs
//! The standard RADON operator table.

use lazy_static::lazy_static;

use crate::system::TypeSystem;
use crate::types::{OutputType, TypeDescriptor, TypeTag};

lazy_static! {
    static ref RADON: TypeSystem = radon_type_system();
}

impl TypeSystem {
    /// The standard RADON table, built on first use.
    pub fn radon() -> &'static TypeSystem {
        &RADON
    }
}

fn nested(head: TypeTag, param: TypeTag) -> OutputType {
    OutputType::Literal(TypeDescriptor::with_params(head, [param]))
}

// Opcodes are grouped by the type they operate on: 0x1_ Array, 0x2_ Boolean,
// 0x3_ Bytes, 0x4_ Integer, 0x5_ Float, 0x6_ Map, 0x7_ String.
fn radon_type_system() -> TypeSystem {
    use crate::types::TypeTag::*;

    let mut ts = TypeSystem::new();

    // --- Array ---
    ts.define(Array, "count", 0x10, Integer);
    ts.define(Array, "filter", 0x11, OutputType::Same);
    ts.define(Array, "flatten", 0x12, OutputType::PopInner { container: Array });
    ts.define(Array, "getArray", 0x13, Array);
    ts.define(Array, "getBoolean", 0x14, Boolean);
    ts.define(Array, "getBytes", 0x15, Bytes);
    ts.define(Array, "getFloat", 0x16, Float);
    ts.define(Array, "getInteger", 0x17, Integer);
    ts.define(Array, "getMap", 0x18, Map);
    ts.define(Array, "getString", 0x19, String);
    ts.define(Array, "map", 0x1A, OutputType::Subscript);
    ts.define(Array, "reduce", 0x1B, OutputType::Inner);
    ts.define(Array, "some", 0x1C, Boolean);
    ts.define(Array, "sort", 0x1D, OutputType::Same);
    ts.define(Array, "take", 0x1E, OutputType::Same);

    // --- Boolean ---
    ts.define(Boolean, "asString", 0x20, String);
    ts.define(Boolean, "match", 0x21, OutputType::Match);
    ts.define(Boolean, "negate", 0x22, Boolean);

    // --- Bytes ---
    ts.define(Bytes, "asString", 0x30, String);
    ts.define(Bytes, "hash", 0x31, Bytes);

    // --- Integer ---
    ts.define(Integer, "absolute", 0x40, Integer);
    ts.define(Integer, "asBytes", 0x41, Bytes);
    ts.define(Integer, "asFloat", 0x42, Float);
    ts.define(Integer, "asString", 0x43, String);
    ts.define(Integer, "greaterThan", 0x44, Boolean);
    ts.define(Integer, "lessThan", 0x45, Boolean);
    ts.define(Integer, "match", 0x46, OutputType::Match);
    ts.define(Integer, "modulo", 0x47, Integer);
    ts.define(Integer, "multiply", 0x48, Integer);
    ts.define(Integer, "negate", 0x49, Integer);
    ts.define(Integer, "power", 0x4A, Integer);
    ts.define(Integer, "reciprocal", 0x4B, Float);
    ts.define(Integer, "sum", 0x4C, Integer);

    // --- Float ---
    ts.define(Float, "absolute", 0x50, Float);
    ts.define(Float, "asBytes", 0x51, Bytes);
    ts.define(Float, "asString", 0x52, String);
    ts.define(Float, "ceiling", 0x53, Integer);
    ts.define(Float, "greaterThan", 0x54, Boolean);
    ts.define(Float, "floor", 0x55, Integer);
    ts.define(Float, "lessThan", 0x56, Boolean);
    ts.define(Float, "modulo", 0x57, Float);
    ts.define(Float, "multiply", 0x58, Float);
    ts.define(Float, "negate", 0x59, Float);
    ts.define(Float, "power", 0x5A, Float);
    ts.define(Float, "reciprocal", 0x5B, Float);
    ts.define(Float, "round", 0x5C, Integer);
    ts.define(Float, "sum", 0x5D, Float);
    ts.define(Float, "truncate", 0x5E, Integer);

    // --- Map ---
    ts.define(Map, "entries", 0x60, nested(Array, Array));
    ts.define(Map, "getArray", 0x61, Array);
    ts.define(Map, "getBoolean", 0x62, Boolean);
    ts.define(Map, "getBytes", 0x63, Bytes);
    ts.define(Map, "getFloat", 0x64, Float);
    ts.define(Map, "getInteger", 0x65, Integer);
    ts.define(Map, "getMap", 0x66, Map);
    ts.define(Map, "getString", 0x67, String);
    ts.define(Map, "keys", 0x68, nested(Array, String));
    ts.define(Map, "values", 0x69, OutputType::Forward { container: Array });

    // --- String ---
    ts.define(String, "asBoolean", 0x70, Boolean);
    ts.define(String, "asBytes", 0x71, Bytes);
    ts.define(String, "asFloat", 0x72, Float);
    ts.define(String, "asInteger", 0x73, Integer);
    ts.define(String, "length", 0x74, Integer);
    ts.define(String, "match", 0x75, OutputType::Match);
    ts.define(String, "parseJSONArray", 0x76, Array);
    ts.define(String, "parseJSONMap", 0x77, Map);
    ts.define(String, "parseXML", 0x78, Map);
    ts.define(String, "toLowerCase", 0x79, String);
    ts.define(String, "toUpperCase", 0x7A, String);

    log::debug!("Built RADON type system with {} operators", ts.len());
    ts
}
