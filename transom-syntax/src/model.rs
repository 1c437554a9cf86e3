//! The semantic query surface supplied by the host front-end.

use crate::symbol::Symbol;
use crate::tree::NodeId;
use crate::types::TypeDescriptor;

/// Read-only semantic information for a syntax tree.
///
/// Implemented by the host on top of its own binder/checker. Both walkers
/// consult the same model; neither mutates it, so one model instance may
/// serve concurrent traversals as long as the implementation tolerates
/// concurrent reads.
///
/// Returning `None` from either method is an ordinary answer, not an error:
/// the walkers skip the member or fall back to a generic rendering.
pub trait SemanticModel {
    /// The symbol declared by a declaration, parameter or variable node.
    fn declared_symbol(&self, node: NodeId) -> Option<Symbol>;

    /// The resolved type of an identifier or expression node.
    fn expression_type(&self, node: NodeId) -> Option<TypeDescriptor>;
}
