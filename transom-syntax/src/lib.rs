//! Syntax tree and semantic-model surface for the transom transpiler.
//!
//! This crate owns everything the emission pipeline *reads* but never
//! produces: the parsed syntax tree (a closed set of tagged variants per
//! syntactic category), resolved type descriptors and symbols, the
//! [`SemanticModel`] query trait implemented by the host front-end, and the
//! [`ConversionSettings`] consumed by both walkers.
//!
//! The tree is immutable once built. Walkers in `transom-codegen-cpp`
//! traverse it read-only, once per output document, consulting the
//! resolver on demand.

mod model;
mod settings;
mod symbol;
mod tree;
mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use model::SemanticModel;
pub use settings::{ConversionSettings, PropertyStyle, SettingsError};
pub use symbol::{Accessibility, Symbol};
pub use tree::{
    BinaryOp, CompilationUnit, ConstructorDecl, EnumDecl, EnumMember, Expr, FieldDecl, Item,
    Literal, Member, MethodDecl, NamespaceDecl, NodeId, Parameter, PropertyDecl, Stmt, TypeDecl,
    TypeDeclKind, UsingDirective, VariableDeclarator,
};
pub use types::{CompositeKind, NamedType, PrimitiveKind, TypeDescriptor};
