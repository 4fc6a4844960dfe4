//! Type system for RADON scripts.
//!
//! This crate describes which operators can be applied to which values and what
//! those operators produce. It provides:
//! - [`TypeTag`] and [`TypeDescriptor`], the (possibly parametrized) value types
//! - [`OutputType`], an operator's declared result, which may refer to the call
//!   site through a pseudo-type marker
//! - [`TypeSystem`], the table mapping each type to its operators, either the
//!   built-in RADON table or one loaded from TOML
//! - [`resolve`], which turns a declared output type into a concrete one
//!
//! Script assembly and encoding live in `radon-script`.

pub mod error;
pub mod types;
pub mod system;
pub mod resolver;
mod defaults;

pub use error::{ResolveError, ResolveResult, TypeSystemError, TypeSystemResult};
pub use resolver::{resolve, LiteralKind, Operand};
pub use system::{OperatorConfig, OperatorEntry, TypeSystem};
pub use types::{display_nested, OutputType, PseudoType, TemplateTag, TypeDescriptor, TypeTag};
