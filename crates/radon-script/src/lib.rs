//! Type-checked assembly of RADON scripts.
//!
//! A [`ScriptBuilder`] starts from the type of the input value and lets callers
//! chain operators by name. Every call is checked against the operator table of
//! the current type; the builder records the matching instruction and moves on
//! to the operator's output type. The finished script is encoded as CBOR.
//!
//! ```
//! use radon_script::{create, Argument, TypeTag};
//!
//! # fn main() -> Result<(), radon_script::ScriptError> {
//! let mut script = create(TypeTag::String);
//! script
//!     .call("parseJSONMap")?
//!     .invoke("getFloat", &[Argument::from("price")])?
//!     .invoke("multiply", &[Argument::from(100i64)])?
//!     .call("round")?;
//! assert_eq!(script.current_type().to_string(), "Integer");
//! let bytes = script.encode()?;
//! assert_eq!(bytes[0], 0x84);
//! # Ok(())
//! # }
//! ```

pub mod argument;
pub mod builder;
pub mod encoder;
pub mod error;
pub mod instruction;
pub mod value;

pub use argument::{normalize, Argument};
pub use builder::ScriptBuilder;
pub use error::{ScriptError, ScriptResult};
pub use instruction::Instruction;
pub use value::Value;

pub use radon_types::{TypeDescriptor, TypeSystem, TypeTag};

/// Starts a script over the standard RADON operator table.
pub fn create(initial: impl Into<TypeDescriptor>) -> ScriptBuilder<'static> {
    ScriptBuilder::new(TypeSystem::radon(), initial)
}
