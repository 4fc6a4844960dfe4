// src/encoder.rs
//! CBOR serialization of finished scripts.
//!
//! A script is a definite-length array. Each element is either a bare unsigned
//! opcode or an array `[opcode, arg...]`, with sub-scripts nested in the same
//! shape. Integers use their shortest encoding and maps keep insertion order,
//! so equal scripts always encode to equal bytes.

use std::io::Write;

use crate::error::{ScriptError, ScriptResult};
use crate::instruction::Instruction;

/// Encodes `instructions` into a new buffer.
pub fn encode(instructions: &[Instruction]) -> ScriptResult<Vec<u8>> {
    let mut bytes = Vec::new();
    encode_to(instructions, &mut bytes)?;
    Ok(bytes)
}

/// Encodes `instructions` into `writer`.
pub fn encode_to<W: Write>(instructions: &[Instruction], writer: W) -> ScriptResult<()> {
    ciborium::into_writer(instructions, writer).map_err(|e| ScriptError::Encode(e.to_string()))?;
    log::trace!("Encoded script of {} instructions", instructions.len());
    Ok(())
}
