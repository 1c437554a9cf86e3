//! The externally-supplied syntax tree.
//!
//! The front-end parses source text into this tree and hands it to the
//! walkers together with a [`SemanticModel`](crate::SemanticModel). Only the
//! declared subset of the source grammar is representable; the front-end is
//! expected to drop anything else before construction, and the walkers treat
//! whatever they cannot translate as skip-or-recurse, never as corruption.

/// Opaque handle tying a declaration or expression node to the resolver.
///
/// The front-end assigns ids when building the tree; the semantic model is
/// queried with the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// One parsed source file.
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    pub usings: Vec<UsingDirective>,
    pub items: Vec<Item>,
}

/// An `using Foo.Bar;` style import at the top of a unit.
#[derive(Debug, Clone)]
pub struct UsingDirective {
    /// Dotted namespace path as written in source.
    pub namespace: String,
}

/// A top-level or namespace-level declaration.
#[derive(Debug, Clone)]
pub enum Item {
    Namespace(NamespaceDecl),
    Type(TypeDecl),
    Enum(EnumDecl),
}

/// A namespace declaration; `name` keeps the dotted form (`Foo.Bar`).
#[derive(Debug, Clone)]
pub struct NamespaceDecl {
    pub name: String,
    pub items: Vec<Item>,
}

/// An enum declaration with its members in declared order.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    pub id: NodeId,
    pub name: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone)]
pub struct EnumMember {
    pub id: NodeId,
    pub name: String,
}

/// Whether a type declaration is a class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeclKind {
    Class,
    Interface,
}

/// A class or interface declaration.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub id: NodeId,
    pub name: String,
    pub kind: TypeDeclKind,
    /// Declared generic type parameter names, in order.
    pub type_parameters: Vec<String>,
    /// Declared base types, as written in source.
    pub bases: Vec<String>,
    pub members: Vec<Member>,
}

impl TypeDecl {
    /// True when an explicit zero-argument constructor is declared.
    pub fn has_default_constructor(&self) -> bool {
        self.members.iter().any(|m| match m {
            Member::Constructor(c) => c.parameters.is_empty(),
            _ => false,
        })
    }

    /// Iterate over field members.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(f) => Some(f),
            _ => None,
        })
    }
}

/// A member of a class or interface.
#[derive(Debug, Clone)]
pub enum Member {
    Field(FieldDecl),
    Property(PropertyDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
}

/// A field statement; several names may share one declared type.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub declarators: Vec<VariableDeclarator>,
}

/// One declared name inside a field or local declaration.
#[derive(Debug, Clone)]
pub struct VariableDeclarator {
    pub id: NodeId,
    pub name: String,
    pub initializer: Option<Expr>,
}

/// A property declaration; accessor presence is syntactic, the property
/// type and accessibility come from the resolver.
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    pub id: NodeId,
    pub name: String,
    pub has_getter: bool,
    pub has_setter: bool,
}

/// A method declaration. `body` is `None` for abstract/interface members.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub id: NodeId,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone)]
pub struct ConstructorDecl {
    pub id: NodeId,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub id: NodeId,
    pub name: String,
}

/// The declared statement subset.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `T a = x, b;` or `var a = x;` when `inferred` is set.
    LocalDeclaration {
        inferred: bool,
        declarators: Vec<VariableDeclarator>,
    },
    Expression(Expr),
    Return(Option<Expr>),
    Empty,
}

/// The declared expression subset.
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier {
        id: NodeId,
        name: String,
    },
    Literal(Literal),
    MemberAccess {
        id: NodeId,
        receiver: Box<Expr>,
        member: String,
    },
    Invocation {
        id: NodeId,
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    /// `new T(args)`.
    ObjectCreation {
        id: NodeId,
        type_name: String,
        arguments: Vec<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
    },
}

impl Expr {
    /// The resolver handle for this expression, when it has one.
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Expr::Identifier { id, .. }
            | Expr::MemberAccess { id, .. }
            | Expr::Invocation { id, .. }
            | Expr::ObjectCreation { id, .. } => Some(*id),
            Expr::Literal(_) | Expr::Binary { .. } | Expr::Assignment { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Literal {
    /// Unescaped string contents, without surrounding quotes.
    String(String),
    Char(char),
    /// Numeric literals keep their source spelling.
    Number(String),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
        }
    }
}
