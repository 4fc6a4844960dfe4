use miette::Diagnostic;
use radon_types::ResolveError;
use thiserror::Error;

/// Result type for script building and encoding
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors raised while building or encoding a script
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// No operator with this name exists for the current type
    #[error("Method `{ty}::{operator}()` does not exist")]
    #[diagnostic(code(radon::script::unknown_operator))]
    UnknownOperator {
        /// Current type of the builder
        ty: String,
        /// Name that was looked up
        operator: String,
        /// Every operator valid for the current type, as `name(): Output`
        available: Vec<String>,
        #[help]
        help: Option<String>,
    },

    /// The operator exists, but its output type could not be resolved for these arguments
    #[error("Cannot apply `{ty}::{operator}()`: {source}")]
    #[diagnostic(code(radon::script::resolve))]
    Resolve {
        ty: String,
        operator: String,
        #[source]
        #[diagnostic_source]
        source: ResolveError,
    },

    /// The codec rejected the script
    #[error("Failed to encode script: {0}")]
    #[diagnostic(code(radon::script::encode))]
    Encode(String),
}

impl ScriptError {
    pub(crate) fn unknown_operator(ty: String, operator: &str, available: Vec<String>) -> Self {
        let help = if available.is_empty() {
            format!("`{}` has no methods", ty)
        } else {
            let listing: String = available.iter().map(|op| format!("\n- {}", op)).collect();
            format!("Available `{}` methods are:{}", ty, listing)
        };
        ScriptError::UnknownOperator {
            ty,
            operator: operator.to_string(),
            available,
            help: Some(help),
        }
    }
}
