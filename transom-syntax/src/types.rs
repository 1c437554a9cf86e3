//! Resolved semantic type descriptors.
//!
//! A [`TypeDescriptor`] is what the resolver answers when asked for the type
//! of a symbol or expression. It is a snapshot, not a handle: the emission
//! pipeline never asks follow-up questions about a descriptor, so everything
//! the type mapper needs (category, element/argument types, value vs.
//! reference semantics) is carried inline.

/// Resolved type information for a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    /// An array; `None` element means the front-end could not resolve it.
    Array { element: Option<Box<TypeDescriptor>> },
    Named(NamedType),
    /// An in-scope generic type parameter, by name.
    TypeParameter(String),
}

/// A named (class/struct/interface/enum) type, possibly generic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    /// Bare declared name, without arity markers or namespace.
    pub name: String,
    /// Type arguments of a generic instantiation, in declared order.
    pub type_arguments: Vec<TypeDescriptor>,
    pub is_reference: bool,
    pub kind: CompositeKind,
}

impl NamedType {
    /// A non-generic reference type with the given name.
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_arguments: Vec::new(),
            is_reference: true,
            kind: CompositeKind::Class,
        }
    }

    /// A non-generic value type with the given name.
    pub fn value(name: impl Into<String>, kind: CompositeKind) -> Self {
        Self {
            name: name.into(),
            type_arguments: Vec::new(),
            is_reference: false,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    Class,
    Interface,
    Struct,
    Enum,
}

/// Built-in types of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Void,
    Bool,
    Char,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Decimal,
    String,
    /// Raw pointer-sized handle.
    IntPtr,
    UIntPtr,
}

impl TypeDescriptor {
    /// Shorthand for a named type descriptor.
    pub fn named(named: NamedType) -> Self {
        TypeDescriptor::Named(named)
    }

    /// Whether values of this type live behind a reference in the source
    /// language. Strings are reference types there, but the mapper treats
    /// them separately, so they answer `false` here.
    pub fn is_reference_semantics(&self) -> bool {
        match self {
            TypeDescriptor::Named(n) => n.is_reference,
            TypeDescriptor::Array { .. } => true,
            TypeDescriptor::Primitive(_) | TypeDescriptor::TypeParameter(_) => false,
        }
    }

    /// Whether a field of this type holds its value inline and is left
    /// uninitialized without an explicit initializer. Strings and
    /// unconstrained type parameters do not count.
    pub fn is_value_semantics(&self) -> bool {
        match self {
            TypeDescriptor::Primitive(PrimitiveKind::String | PrimitiveKind::Void) => false,
            TypeDescriptor::Primitive(_) => true,
            TypeDescriptor::Named(n) => !n.is_reference,
            TypeDescriptor::Array { .. } | TypeDescriptor::TypeParameter(_) => false,
        }
    }
}
