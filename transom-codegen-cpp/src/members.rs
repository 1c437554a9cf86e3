//! Member-inspection helpers shared by the two walkers.
//!
//! Both documents must agree on which types get a synthesized default
//! constructor and how parameter lists are spelled, so those decisions live
//! here rather than in either walker.

use transom_syntax::{Parameter, SemanticModel, TypeDecl};

use crate::type_mapper::argument_type;

/// True when the type has at least one non-static, value-typed field, i.e.
/// a field that would be left uninitialized without a constructor.
pub(crate) fn has_initializable_members(decl: &TypeDecl, model: &dyn SemanticModel) -> bool {
    decl.fields()
        .flat_map(|f| f.declarators.iter())
        .any(|v| {
            model
                .declared_symbol(v.id)
                .is_some_and(|s| !s.is_static && s.ty.is_value_semantics())
        })
}

/// Resolve every parameter to a `(name, argument spelling)` pair.
///
/// `None` when any parameter fails to resolve, so callers can skip the whole
/// member before writing anything instead of emitting a torn signature.
pub(crate) fn resolve_parameters(
    params: &[Parameter],
    model: &dyn SemanticModel,
) -> Option<Vec<(String, String)>> {
    params
        .iter()
        .map(|p| {
            model
                .declared_symbol(p.id)
                .map(|s| (p.name.clone(), argument_type(&s.ty)))
        })
        .collect()
}

/// `template <typename T, typename U> ` prologue for a generic declaration.
pub(crate) fn template_prologue(type_parameters: &[String]) -> String {
    let mut out = String::from("template <");
    for (i, name) in type_parameters.iter().enumerate() {
        out.push_str("typename ");
        out.push_str(name);
        if i + 1 != type_parameters.len() {
            out.push_str(", ");
        }
    }
    out.push_str("> ");
    out
}
