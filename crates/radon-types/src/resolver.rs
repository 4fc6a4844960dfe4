// src/resolver.rs
//! Output type resolution: turns an operator's declared output type into the
//! concrete type of the value it produces at a given call site.

use crate::error::{ResolveError, ResolveResult};
use crate::types::{OutputType, TypeDescriptor, TypeTag};

/// Coarse kind of a literal, as far as result typing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Numeric,
    Text,
    Boolean,
    /// Null or missing; carries no type information.
    Absent,
    /// Anything else (bytes, arrays, maps, sub-scripts).
    Opaque,
}

impl LiteralKind {
    /// The type a value of this kind produces, `None` for [`LiteralKind::Absent`].
    pub fn result_type(self) -> Option<TypeTag> {
        match self {
            LiteralKind::Numeric => Some(TypeTag::Float),
            LiteralKind::Text => Some(TypeTag::String),
            LiteralKind::Boolean => Some(TypeTag::Boolean),
            LiteralKind::Absent => None,
            LiteralKind::Opaque => Some(TypeTag::Bytes),
        }
    }
}

/// A call argument as seen by the resolver.
pub trait Operand {
    /// Kinds of the branch values, in order, when the argument is a branch mapping.
    fn branches(&self) -> Option<Vec<LiteralKind>>;

    /// Current type of the embedded sub-script, when the argument is one.
    fn subscript_type(&self) -> Option<&TypeDescriptor>;
}

/// Computes the type produced by an operator declared with `output`, called on
/// a value of type `previous` with `args`.
///
/// Pure: identical inputs always yield the identical result.
pub fn resolve<A: Operand>(previous: &TypeDescriptor, output: &OutputType, args: &[A]) -> ResolveResult<TypeDescriptor> {
    let resolved = match output {
        OutputType::Inner => previous.inner().ok_or_else(|| ResolveError::NoInnerType {
            ty: previous.to_string(),
        })?,
        OutputType::Match => {
            let branches = args.first().and_then(Operand::branches).ok_or(ResolveError::ExpectedBranches)?;
            match branch_type(&branches) {
                Some(tag) => TypeDescriptor::new(tag),
                None => previous.clone(),
            }
        }
        OutputType::Subscript => {
            let inner = args
                .first()
                .and_then(Operand::subscript_type)
                .ok_or(ResolveError::ExpectedSubscript)?;
            TypeDescriptor::with_params(previous.head(), inner.tags())
        }
        OutputType::Same => previous.clone(),
        OutputType::PopInner { .. } => {
            TypeDescriptor::with_params(previous.head(), previous.params().get(1).copied())
        }
        OutputType::Forward { container } => {
            TypeDescriptor::with_params(*container, previous.params().iter().copied())
        }
        OutputType::Literal(descriptor) => descriptor.clone(),
    };
    log::trace!("Resolved {} via {} to {}", previous, output, resolved);
    Ok(resolved)
}

/// The result type implied by a set of branches: that of the first branch.
/// No branches, or an absent first branch, leave the type unresolved.
fn branch_type(branches: &[LiteralKind]) -> Option<TypeTag> {
    let (first, rest) = branches.split_first()?;
    if rest.iter().any(|kind| kind != first) {
        log::warn!("Match branches disagree on their kind; typing the result from the first branch ({:?})", first);
    }
    first.result_type()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeTag::*;

    enum Arg {
        Branches(Vec<LiteralKind>),
        Script(TypeDescriptor),
        Plain,
    }

    impl Operand for Arg {
        fn branches(&self) -> Option<Vec<LiteralKind>> {
            match self {
                Arg::Branches(kinds) => Some(kinds.clone()),
                _ => None,
            }
        }

        fn subscript_type(&self) -> Option<&TypeDescriptor> {
            match self {
                Arg::Script(ty) => Some(ty),
                _ => None,
            }
        }
    }

    fn ty(tags: &[TypeTag]) -> TypeDescriptor {
        TypeDescriptor::from_tags(tags.iter().copied()).unwrap()
    }

    #[test]
    fn test_inner_unwraps_one_level() {
        let result = resolve::<Arg>(&ty(&[Array, Map, String]), &OutputType::Inner, &[]).unwrap();
        assert_eq!(result, ty(&[Map, String]));
    }

    #[test]
    fn test_inner_without_parameters_fails() {
        let err = resolve::<Arg>(&ty(&[Map]), &OutputType::Inner, &[]).unwrap_err();
        assert_eq!(err, ResolveError::NoInnerType { ty: "Map".to_string() });
    }

    #[test]
    fn test_match_takes_branch_type() {
        let args = [Arg::Branches(vec![LiteralKind::Numeric])];
        assert_eq!(resolve(&ty(&[Boolean]), &OutputType::Match, &args).unwrap(), ty(&[Float]));

        let args = [Arg::Branches(vec![LiteralKind::Text, LiteralKind::Text])];
        assert_eq!(resolve(&ty(&[Boolean]), &OutputType::Match, &args).unwrap(), ty(&[String]));

        let args = [Arg::Branches(vec![LiteralKind::Boolean])];
        assert_eq!(resolve(&ty(&[String]), &OutputType::Match, &args).unwrap(), ty(&[Boolean]));

        let args = [Arg::Branches(vec![LiteralKind::Opaque])];
        assert_eq!(resolve(&ty(&[String]), &OutputType::Match, &args).unwrap(), ty(&[Bytes]));
    }

    #[test]
    fn test_match_without_information_keeps_type() {
        let args = [Arg::Branches(vec![])];
        assert_eq!(resolve(&ty(&[Integer]), &OutputType::Match, &args).unwrap(), ty(&[Integer]));

        let args = [Arg::Branches(vec![LiteralKind::Absent])];
        assert_eq!(resolve(&ty(&[Integer]), &OutputType::Match, &args).unwrap(), ty(&[Integer]));
    }

    #[test]
    fn test_match_follows_first_branch() {
        let args = [Arg::Branches(vec![LiteralKind::Numeric, LiteralKind::Text])];
        assert_eq!(resolve(&ty(&[Boolean]), &OutputType::Match, &args).unwrap(), ty(&[Float]));

        let args = [Arg::Branches(vec![LiteralKind::Absent, LiteralKind::Boolean])];
        assert_eq!(resolve(&ty(&[Integer]), &OutputType::Match, &args).unwrap(), ty(&[Integer]));
    }

    #[test]
    fn test_match_requires_branches() {
        assert_eq!(
            resolve::<Arg>(&ty(&[Boolean]), &OutputType::Match, &[]).unwrap_err(),
            ResolveError::ExpectedBranches
        );
        assert_eq!(
            resolve(&ty(&[Boolean]), &OutputType::Match, &[Arg::Plain]).unwrap_err(),
            ResolveError::ExpectedBranches
        );
    }

    #[test]
    fn test_subscript_wraps_subscript_type() {
        let args = [Arg::Script(ty(&[String]))];
        let result = resolve(&ty(&[Array, String]), &OutputType::Subscript, &args).unwrap();
        assert_eq!(result, ty(&[Array, String]));

        let args = [Arg::Script(ty(&[Map, Float]))];
        let result = resolve(&ty(&[Array, String]), &OutputType::Subscript, &args).unwrap();
        assert_eq!(result, ty(&[Array, Map, Float]));
    }

    #[test]
    fn test_subscript_requires_script() {
        let err = resolve(&ty(&[Array]), &OutputType::Subscript, &[Arg::Plain]).unwrap_err();
        assert_eq!(err, ResolveError::ExpectedSubscript);
    }

    #[test]
    fn test_same_passes_through() {
        let previous = ty(&[Array, Integer]);
        assert_eq!(resolve::<Arg>(&previous, &OutputType::Same, &[]).unwrap(), previous);
    }

    #[test]
    fn test_pop_inner_keeps_container() {
        let output = OutputType::PopInner { container: Array };
        assert_eq!(
            resolve::<Arg>(&ty(&[Array, Array, Float]), &output, &[]).unwrap(),
            ty(&[Array, Float])
        );
        assert_eq!(resolve::<Arg>(&ty(&[Array, Float]), &output, &[]).unwrap(), ty(&[Array]));
    }

    #[test]
    fn test_forward_keeps_declared_container() {
        let output = OutputType::Forward { container: Array };
        assert_eq!(
            resolve::<Arg>(&ty(&[Map, Integer]), &output, &[]).unwrap(),
            ty(&[Array, Integer])
        );
    }

    #[test]
    fn test_literal_is_verbatim() {
        let output = OutputType::Literal(ty(&[Array, String]));
        assert_eq!(resolve::<Arg>(&ty(&[Map]), &output, &[]).unwrap(), ty(&[Array, String]));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let args = [Arg::Script(ty(&[Integer]))];
        let first = resolve(&ty(&[Array, String]), &OutputType::Subscript, &args).unwrap();
        let second = resolve(&ty(&[Array, String]), &OutputType::Subscript, &args).unwrap();
        assert_eq!(first, second);
    }
}
