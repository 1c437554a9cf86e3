//! Declared symbols and accessibility.

use crate::types::TypeDescriptor;

/// Source-language accessibility of a declared member.
///
/// Ordered from most to least restrictive. The target language only has
/// three sections, so several of these collapse when bucketed; that mapping
/// lives with the emitter, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Accessibility {
    Private,
    ProtectedAndInternal,
    Protected,
    ProtectedOrInternal,
    Internal,
    Public,
}

/// Resolved information about a declared symbol.
///
/// `accessibility` is optional because the front-end may fail to determine
/// it; consumers that need to bucket by accessibility must treat `None` as
/// a hard error rather than defaulting.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub accessibility: Option<Accessibility>,
    pub is_static: bool,
    /// Set when the member overrides, implements or is declared virtual.
    pub is_virtual: bool,
    /// Const or read-only.
    pub is_const: bool,
    /// Generic type parameter names of a generic method, in order.
    pub type_parameters: Vec<String>,
    /// Field/property type, method return type, or parameter type.
    pub ty: TypeDescriptor,
}

impl Symbol {
    /// A plain symbol with the given name and type; flags off, public.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            accessibility: Some(Accessibility::Public),
            is_static: false,
            is_virtual: false,
            is_const: false,
            type_parameters: Vec::new(),
            ty,
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}
