use miette::Diagnostic;
use thiserror::Error;

/// Result type for building and loading operator tables
pub type TypeSystemResult<T> = Result<T, TypeSystemError>;

/// Result type for output type resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors raised while building an operator table
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum TypeSystemError {
    /// A name that is neither a type tag nor a pseudo-type marker
    #[error("Unknown type tag `{0}`")]
    #[diagnostic(
        code(radon::types::unknown_tag),
        help("Type tags are Array, Boolean, Bytes, Float, Integer, Map and String; output types may also use Inner, Match, Subscript or Same")
    )]
    UnknownTypeTag(String),

    /// An operator declared without any output type
    #[error("Operator `{ty}::{operator}()` declares an empty output type")]
    #[diagnostic(code(radon::types::empty_template))]
    EmptyTemplate {
        ty: String,
        operator: String,
    },

    /// A pseudo-type marker in a position no resolution rule covers
    #[error("Operator `{ty}::{operator}()` declares an invalid output type `{template}`")]
    #[diagnostic(
        code(radon::types::invalid_template),
        help("A pseudo-type must be the whole output type, or the only parameter after a concrete type (e.g. `Array<Inner>`)")
    )]
    InvalidTemplate {
        ty: String,
        operator: String,
        template: String,
    },

    /// The table source could not be parsed
    #[error("Invalid type system table: {0}")]
    #[diagnostic(
        code(radon::types::parse),
        help("Each operator is a `[Type.operator]` table with an integer `opcode` and an `output` list")
    )]
    Parse(String),
}

impl From<toml::de::Error> for TypeSystemError {
    fn from(err: toml::de::Error) -> Self {
        TypeSystemError::Parse(err.to_string())
    }
}

/// Errors raised while computing an operator's output type
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// `Inner` applied to a type with no parameters
    #[error("Type `{ty}` has no inner type to unwrap")]
    #[diagnostic(code(radon::resolve::no_inner_type))]
    NoInnerType {
        ty: String,
    },

    /// `Match` called without a branch mapping as its first argument
    #[error("Expected a mapping of branches as the first argument")]
    #[diagnostic(code(radon::resolve::expected_branches))]
    ExpectedBranches,

    /// `Subscript` called without a sub-script as its first argument
    #[error("Expected a sub-script as the first argument")]
    #[diagnostic(code(radon::resolve::expected_subscript))]
    ExpectedSubscript,
}
