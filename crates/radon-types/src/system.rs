// src/system.rs
//! The operator table: for each type tag, the operators callable on it.

use fxhash::FxHashMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{TypeSystemError, TypeSystemResult};
use crate::types::{display_nested, OutputType, TemplateTag, TypeTag};

/// What an operator compiles to and what it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorEntry {
    /// Instruction code understood by the execution engine.
    pub opcode: u8,
    /// Declared output type, possibly resolved against the call site.
    pub output: OutputType,
}

/// Maps a type tag to the operators available on values of that type.
///
/// Operators keep their declaration order, which is the order they are listed
/// in diagnostics. A table is immutable once handed to a builder and can be
/// shared between any number of them.
#[derive(Debug, Clone, Default)]
pub struct TypeSystem {
    operators: FxHashMap<TypeTag, IndexMap<String, OperatorEntry>>,
}

/// On-disk shape of a single operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorConfig {
    /// Instruction code
    pub opcode: u8,

    /// Output type as a list of tag or marker names, outermost first
    pub output: Vec<String>,
}

impl TypeSystem {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an operator on `ty`.
    pub fn define(&mut self, ty: TypeTag, operator: impl Into<String>, opcode: u8, output: impl Into<OutputType>) {
        self.operators
            .entry(ty)
            .or_default()
            .insert(operator.into(), OperatorEntry { opcode, output: output.into() });
    }

    /// Adds an operator from a raw output-type template, validating marker placement.
    pub fn define_template(
        &mut self,
        ty: TypeTag,
        operator: &str,
        opcode: u8,
        template: &[TemplateTag],
    ) -> TypeSystemResult<()> {
        if template.is_empty() {
            return Err(TypeSystemError::EmptyTemplate {
                ty: ty.to_string(),
                operator: operator.to_string(),
            });
        }
        let output = OutputType::from_template(template).ok_or_else(|| TypeSystemError::InvalidTemplate {
            ty: ty.to_string(),
            operator: operator.to_string(),
            template: display_nested(template),
        })?;
        self.define(ty, operator, opcode, output);
        Ok(())
    }

    /// Loads a table from TOML.
    ///
    /// ```toml
    /// [String.parseJSONMap]
    /// opcode = 0x77
    /// output = ["Map"]
    /// ```
    pub fn from_toml(source: &str) -> TypeSystemResult<Self> {
        let config: IndexMap<String, IndexMap<String, OperatorConfig>> = toml::from_str(source)?;
        let mut system = TypeSystem::new();
        for (ty_name, operators) in &config {
            let ty: TypeTag = ty_name.parse()?;
            for (operator, entry) in operators {
                let template = entry
                    .output
                    .iter()
                    .map(|name| name.parse::<TemplateTag>())
                    .collect::<TypeSystemResult<Vec<_>>>()?;
                system.define_template(ty, operator, entry.opcode, &template)?;
            }
        }
        log::debug!("Loaded type system with {} operators over {} types", system.len(), system.operators.len());
        Ok(system)
    }

    /// Looks up `operator` on values of type `ty`.
    pub fn lookup(&self, ty: TypeTag, operator: &str) -> Option<&OperatorEntry> {
        self.operators.get(&ty).and_then(|ops| ops.get(operator))
    }

    /// Every operator declared on `ty`, in declaration order.
    pub fn operators(&self, ty: TypeTag) -> impl Iterator<Item = (&str, &OperatorEntry)> + '_ {
        self.operators
            .get(&ty)
            .into_iter()
            .flat_map(|ops| ops.iter().map(|(name, entry)| (name.as_str(), entry)))
    }

    /// Total number of operators across all types.
    pub fn len(&self) -> usize {
        self.operators.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
