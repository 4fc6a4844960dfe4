// src/types.rs
//! Type tags, pseudo-type markers and the descriptors built from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeSystemError;

/// A concrete value type understood by the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeTag {
    Array,
    Boolean,
    Bytes,
    Float,
    Integer,
    Map,
    String,
}

impl TypeTag {
    /// All tags, in declaration order.
    pub const ALL: [TypeTag; 7] = [
        TypeTag::Array,
        TypeTag::Boolean,
        TypeTag::Bytes,
        TypeTag::Float,
        TypeTag::Integer,
        TypeTag::Map,
        TypeTag::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Array => "Array",
            TypeTag::Boolean => "Boolean",
            TypeTag::Bytes => "Bytes",
            TypeTag::Float => "Float",
            TypeTag::Integer => "Integer",
            TypeTag::Map => "Map",
            TypeTag::String => "String",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = TypeSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| TypeSystemError::UnknownTypeTag(s.to_string()))
    }
}

/// Placeholder that may only appear in an operator's declared output type.
/// It never describes a runtime value; it is replaced when the operator is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoType {
    /// The element type of the current container.
    Inner,
    /// The type of the branch values supplied by the caller.
    Match,
    /// The type produced by a sub-script argument.
    Subscript,
    /// The current type, unchanged.
    Same,
}

impl PseudoType {
    pub const ALL: [PseudoType; 4] = [
        PseudoType::Inner,
        PseudoType::Match,
        PseudoType::Subscript,
        PseudoType::Same,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PseudoType::Inner => "Inner",
            PseudoType::Match => "Match",
            PseudoType::Subscript => "Subscript",
            PseudoType::Same => "Same",
        }
    }
}

impl fmt::Display for PseudoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One position of a declared output type, as written in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateTag {
    Type(TypeTag),
    Pseudo(PseudoType),
}

impl fmt::Display for TemplateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateTag::Type(tag) => tag.fmt(f),
            TemplateTag::Pseudo(pseudo) => pseudo.fmt(f),
        }
    }
}

impl FromStr for TemplateTag {
    type Err = TypeSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(pseudo) = PseudoType::ALL.into_iter().find(|p| p.name() == s) {
            return Ok(TemplateTag::Pseudo(pseudo));
        }
        s.parse().map(TemplateTag::Type)
    }
}

impl From<TypeTag> for TemplateTag {
    fn from(tag: TypeTag) -> Self {
        TemplateTag::Type(tag)
    }
}

impl From<PseudoType> for TemplateTag {
    fn from(pseudo: PseudoType) -> Self {
        TemplateTag::Pseudo(pseudo)
    }
}

/// Renders a sequence of tags the way types are written, e.g. `Array<Map<String>>`.
pub fn display_nested<T: fmt::Display>(tags: &[T]) -> String {
    match tags.split_first() {
        None => String::new(),
        Some((head, [])) => head.to_string(),
        Some((head, rest)) => format!("{}<{}>", head, display_nested(rest)),
    }
}

/// A possibly parametrized value type: a primary tag followed by the tags of
/// its nested type parameters. `Array<String>` is `[Array, String]`.
///
/// The head is stored apart from the parameters, so a descriptor is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    head: TypeTag,
    params: Vec<TypeTag>,
}

impl TypeDescriptor {
    /// A descriptor without type parameters.
    pub fn new(head: TypeTag) -> Self {
        TypeDescriptor { head, params: Vec::new() }
    }

    pub fn with_params(head: TypeTag, params: impl IntoIterator<Item = TypeTag>) -> Self {
        TypeDescriptor { head, params: params.into_iter().collect() }
    }

    /// Builds a descriptor from a flat tag list. Returns `None` for an empty list.
    pub fn from_tags(tags: impl IntoIterator<Item = TypeTag>) -> Option<Self> {
        let mut tags = tags.into_iter();
        let head = tags.next()?;
        Some(TypeDescriptor::with_params(head, tags))
    }

    pub fn head(&self) -> TypeTag {
        self.head
    }

    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }

    /// Head followed by every parameter.
    pub fn tags(&self) -> impl Iterator<Item = TypeTag> + '_ {
        std::iter::once(self.head).chain(self.params.iter().copied())
    }

    /// The descriptor one nesting level down, or `None` when there are no parameters.
    ///
    /// Postconditions: for `[Array, Map, String]` returns `[Map, String]`.
    pub fn inner(&self) -> Option<TypeDescriptor> {
        TypeDescriptor::from_tags(self.params.iter().copied())
    }

    /// Number of tags including the head.
    pub fn len(&self) -> usize {
        1 + self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<TypeTag> for TypeDescriptor {
    fn from(tag: TypeTag) -> Self {
        TypeDescriptor::new(tag)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<TypeTag> = self.tags().collect();
        f.write_str(&display_nested(&tags))
    }
}

/// The declared output type of an operator, classified from its template.
///
/// Each variant corresponds to exactly one resolution rule, so the resolver can
/// match exhaustively instead of inspecting template positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputType {
    /// `[Inner]`: unwrap one level of the current type.
    Inner,
    /// `[Match]`: taken from the branch values of the first argument.
    Match,
    /// `[Subscript]`: the current container around the sub-script's type.
    Subscript,
    /// `[Same]`: pass the current type through.
    Same,
    /// `[container, Same]`: keep the current container, pop the innermost parameter.
    PopInner { container: TypeTag },
    /// `[container, Inner]`: the declared container around the current parameters.
    Forward { container: TypeTag },
    /// A fully static type.
    Literal(TypeDescriptor),
}

impl OutputType {
    /// Classifies a template. Returns `None` when a marker sits anywhere other
    /// than alone in the template or as the sole parameter of a concrete head.
    pub fn from_template(template: &[TemplateTag]) -> Option<OutputType> {
        use TemplateTag::{Pseudo, Type};

        match template {
            [] => None,
            [Pseudo(PseudoType::Inner)] => Some(OutputType::Inner),
            [Pseudo(PseudoType::Match)] => Some(OutputType::Match),
            [Pseudo(PseudoType::Subscript)] => Some(OutputType::Subscript),
            [Pseudo(PseudoType::Same)] => Some(OutputType::Same),
            [Pseudo(_), ..] => None,
            [Type(container), Pseudo(PseudoType::Same)] => {
                Some(OutputType::PopInner { container: *container })
            }
            [Type(container), Pseudo(PseudoType::Inner)] => {
                Some(OutputType::Forward { container: *container })
            }
            tags => {
                let concrete = tags
                    .iter()
                    .map(|tag| match tag {
                        Type(tag) => Some(*tag),
                        Pseudo(_) => None,
                    })
                    .collect::<Option<Vec<_>>>()?;
                TypeDescriptor::from_tags(concrete).map(OutputType::Literal)
            }
        }
    }

    /// The template this output type was classified from.
    pub fn template(&self) -> Vec<TemplateTag> {
        match self {
            OutputType::Inner => vec![PseudoType::Inner.into()],
            OutputType::Match => vec![PseudoType::Match.into()],
            OutputType::Subscript => vec![PseudoType::Subscript.into()],
            OutputType::Same => vec![PseudoType::Same.into()],
            OutputType::PopInner { container } => {
                vec![(*container).into(), PseudoType::Same.into()]
            }
            OutputType::Forward { container } => {
                vec![(*container).into(), PseudoType::Inner.into()]
            }
            OutputType::Literal(descriptor) => descriptor.tags().map(TemplateTag::Type).collect(),
        }
    }
}

impl From<TypeTag> for OutputType {
    fn from(tag: TypeTag) -> Self {
        OutputType::Literal(TypeDescriptor::new(tag))
    }
}

impl From<TypeDescriptor> for OutputType {
    fn from(descriptor: TypeDescriptor) -> Self {
        OutputType::Literal(descriptor)
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_nested(&self.template()))
    }
}
