// src/instruction.rs
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::value::Value;

/// One step of a script: an opcode and its (possibly empty) arguments.
///
/// On the wire an instruction without arguments is the bare opcode; otherwise it
/// is the array `[opcode, arg...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub opcode: u8,
    pub args: Vec<Value>,
}

impl Instruction {
    pub fn new(opcode: u8, args: Vec<Value>) -> Self {
        Instruction { opcode, args }
    }

    /// An instruction without arguments.
    pub fn bare(opcode: u8) -> Self {
        Instruction { opcode, args: Vec::new() }
    }
}

impl Serialize for Instruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.args.is_empty() {
            return serializer.serialize_u8(self.opcode);
        }
        let mut seq = serializer.serialize_seq(Some(1 + self.args.len()))?;
        seq.serialize_element(&self.opcode)?;
        for arg in &self.args {
            seq.serialize_element(arg)?;
        }
        seq.end()
    }
}
