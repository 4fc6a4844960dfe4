// src/builder.rs
//! The script builder: chains operator calls, checking each one against the
//! current type and tracking the type it produces.

use std::io::Write;

use radon_types::{resolve, TypeDescriptor, TypeSystem};

use crate::argument::{normalize, Argument};
use crate::encoder;
use crate::error::{ScriptError, ScriptResult};
use crate::instruction::Instruction;

/// Owns a script under construction and the type of the value it currently produces.
///
/// Each successful call appends exactly one instruction and updates the type in
/// place. A rejected call leaves both untouched.
#[derive(Debug, Clone)]
pub struct ScriptBuilder<'t> {
    types: &'t TypeSystem,
    instructions: Vec<Instruction>,
    current: TypeDescriptor,
}

impl<'t> ScriptBuilder<'t> {
    /// Starts an empty script over values of type `initial`.
    pub fn new(types: &'t TypeSystem, initial: impl Into<TypeDescriptor>) -> Self {
        ScriptBuilder {
            types,
            instructions: Vec::new(),
            current: initial.into(),
        }
    }

    /// Applies `operator` to the current value.
    ///
    /// Preconditions: `operator` is declared for the head of the current type.
    /// Postconditions: on success one instruction was appended and the current
    /// type is the operator's resolved output type; on failure nothing changed.
    pub fn invoke(&mut self, operator: &str, args: &[Argument<'_>]) -> ScriptResult<&mut Self> {
        let types = self.types;
        let entry = types
            .lookup(self.current.head(), operator)
            .ok_or_else(|| self.unknown_operator(operator))?;

        let next = resolve(&self.current, &entry.output, args).map_err(|source| ScriptError::Resolve {
            ty: self.current.to_string(),
            operator: operator.to_string(),
            source,
        })?;
        let instruction = Instruction::new(entry.opcode, normalize(args));

        log::debug!(
            "{}::{}() -> {} (opcode {:#04x}, {} args)",
            self.current,
            operator,
            next,
            entry.opcode,
            instruction.args.len()
        );
        self.instructions.push(instruction);
        self.current = next;
        Ok(self)
    }

    /// Shorthand for [`invoke`](Self::invoke) without arguments.
    pub fn call(&mut self, operator: &str) -> ScriptResult<&mut Self> {
        self.invoke(operator, &[])
    }

    fn unknown_operator(&self, operator: &str) -> ScriptError {
        let available = self
            .types
            .operators(self.current.head())
            .map(|(name, entry)| format!("{}(): {}", name, entry.output))
            .collect();
        ScriptError::unknown_operator(self.current.to_string(), operator, available)
    }

    /// Type of the value the script produces so far.
    pub fn current_type(&self) -> &TypeDescriptor {
        &self.current
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn type_system(&self) -> &'t TypeSystem {
        self.types
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Serializes the script. The builder stays usable.
    pub fn encode(&self) -> ScriptResult<Vec<u8>> {
        encoder::encode(&self.instructions)
    }

    /// Serializes the script into `writer`.
    pub fn encode_to<W: Write>(&self, writer: W) -> ScriptResult<()> {
        encoder::encode_to(&self.instructions, writer)
    }

    /// Gives up the builder, keeping its instructions.
    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radon_types::TypeTag;

    #[test]
    fn test_new_builder_is_empty() {
        let builder = ScriptBuilder::new(TypeSystem::radon(), TypeTag::String);
        assert!(builder.is_empty());
        assert_eq!(builder.current_type(), &TypeDescriptor::new(TypeTag::String));
    }

    #[test]
    fn test_call_appends_bare_instruction() {
        let mut builder = ScriptBuilder::new(TypeSystem::radon(), TypeTag::String);
        builder.call("length").unwrap();
        assert_eq!(builder.instructions(), &[Instruction::bare(0x74)]);
        assert_eq!(builder.current_type(), &TypeDescriptor::new(TypeTag::Integer));
    }

    #[test]
    fn test_unknown_operator_changes_nothing() {
        let mut builder = ScriptBuilder::new(TypeSystem::radon(), TypeTag::String);
        builder.call("parseJSONMap").unwrap();

        assert!(builder.call("length").is_err());
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.current_type(), &TypeDescriptor::new(TypeTag::Map));
    }

    #[test]
    fn test_failed_resolution_changes_nothing() {
        // The lookup succeeds, but a bare Array has no element type to reduce to
        let mut builder = ScriptBuilder::new(TypeSystem::radon(), TypeTag::Array);
        let err = builder.invoke("reduce", &[2i64.into()]).unwrap_err();
        assert!(matches!(err, ScriptError::Resolve { .. }));
        assert!(builder.is_empty());
        assert_eq!(builder.current_type(), &TypeDescriptor::new(TypeTag::Array));
    }
}
