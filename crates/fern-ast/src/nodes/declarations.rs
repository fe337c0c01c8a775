//! Declaration node types: functions, types, traits, impls, newtypes,
//! modules and imports.

use std::fmt;

use fern_source::types::Span;

use super::{AstNode, NodeId, NodeKind};

// ============================================================================
// Functions
// ============================================================================

/// A typed parameter of a single-clause function (`name: Type`).
#[derive(Debug, Clone)]
pub struct TypedParam {
    /// The parameter name
    pub name: String,
    /// The parameter type annotation
    pub ty: NodeId,
}

/// A trait bound in a function's where clause (`where T: Show`).
#[derive(Debug, Clone)]
pub struct WhereClause {
    /// The constrained type variable
    pub type_var: String,
    /// The required trait
    pub trait_name: String,
}

/// One clause of a multi-clause function: pattern parameters and a body.
#[derive(Debug, Clone)]
pub struct FnClause {
    /// The pattern parameters, in source order
    pub patterns: Vec<NodeId>,
    /// Optional return type annotation
    pub return_ty: Option<NodeId>,
    /// The clause body
    pub body: NodeId,
}

/// The body shape of a function declaration.
///
/// A function is either the single-clause shape (typed parameters, one body)
/// or the multi-clause shape (pattern parameters, one body per clause) -
/// never both on the same node.
#[derive(Debug, Clone)]
pub enum FnKind {
    /// Single clause with typed parameters
    Single {
        /// The typed parameters, in source order
        params: Vec<TypedParam>,
        /// Optional return type annotation
        return_ty: Option<NodeId>,
        /// Trait bounds on type variables
        where_clauses: Vec<WhereClause>,
        /// The function body
        body: NodeId,
    },
    /// Multiple clauses selected by pattern match at call time
    Clauses(Vec<FnClause>),
}

/// Represents a function declaration.
#[derive(Debug, Clone)]
pub struct FnDecl {
    /// The function name
    pub name: String,
    /// Whether the function is exported (`pub fn`)
    pub is_public: bool,
    /// The single-clause or multi-clause body
    pub fn_kind: FnKind,
    /// The span of this node in the source code
    pub span: Span,
}

impl FnDecl {
    /// Creates a new function declaration
    #[must_use]
    pub const fn new(name: String, is_public: bool, fn_kind: FnKind, span: Span) -> Self {
        Self { name, is_public, fn_kind, span }
    }

    /// Returns the number of clauses (1 for the single-clause shape).
    #[must_use]
    pub fn clause_count(&self) -> usize {
        match &self.fn_kind {
            FnKind::Single { .. } => 1,
            FnKind::Clauses(clauses) => clauses.len(),
        }
    }
}

impl AstNode for FnDecl {
    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = Vec::new();
        match &self.fn_kind {
            FnKind::Single { params, return_ty, body, .. } => {
                children.extend(params.iter().map(|p| p.ty));
                children.extend(*return_ty);
                children.push(*body);
            }
            FnKind::Clauses(clauses) => {
                for clause in clauses {
                    children.extend(&clause.patterns);
                    children.extend(clause.return_ty);
                    children.push(clause.body);
                }
            }
        }
        children
    }
}

impl fmt::Display for FnDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fn({}, {} clauses)", self.name, self.clause_count())
    }
}

// ============================================================================
// Type Declarations
// ============================================================================

/// A record field definition (`name: Type`).
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// The field name
    pub name: String,
    /// The field type annotation
    pub ty: NodeId,
}

/// A sum type variant definition (`Some(T)`, `None`).
#[derive(Debug, Clone)]
pub struct VariantDef {
    /// The variant (constructor) name
    pub name: String,
    /// The payload type annotations, empty for nullary variants
    pub args: Vec<NodeId>,
}

/// The body of a type declaration: record fields or sum variants.
#[derive(Debug, Clone)]
pub enum TypeBody {
    /// A record with named fields
    Record(Vec<FieldDef>),
    /// A sum of variants
    Sum(Vec<VariantDef>),
}

/// Represents a type declaration (record or sum) with optional type
/// parameters and derive clauses.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    /// The type name
    pub name: String,
    /// Whether the type is exported
    pub is_public: bool,
    /// The type parameter names, in source order
    pub type_params: Vec<String>,
    /// Derived traits
    pub derives: Vec<String>,
    /// Record fields or sum variants
    pub body: TypeBody,
    /// The span of this node in the source code
    pub span: Span,
}

impl TypeDecl {
    /// Creates a new type declaration
    #[must_use]
    pub const fn new(
        name: String,
        is_public: bool,
        type_params: Vec<String>,
        derives: Vec<String>,
        body: TypeBody,
        span: Span,
    ) -> Self {
        Self { name, is_public, type_params, derives, body, span }
    }
}

impl AstNode for TypeDecl {
    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        match &self.body {
            TypeBody::Record(fields) => fields.iter().map(|f| f.ty).collect(),
            TypeBody::Sum(variants) => {
                variants.iter().flat_map(|v| v.args.iter().copied()).collect()
            }
        }
    }
}

impl fmt::Display for TypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Type({})", self.name) }
}

// ============================================================================
// Traits and Impls
// ============================================================================

/// Represents a trait declaration.
#[derive(Debug, Clone)]
pub struct TraitDecl {
    /// The trait name
    pub name: String,
    /// The type parameter names
    pub type_params: Vec<String>,
    /// Super-trait constraints
    pub supertraits: Vec<String>,
    /// The method declarations (each an [`FnDecl`] node)
    pub methods: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl TraitDecl {
    /// Creates a new trait declaration
    #[must_use]
    pub const fn new(
        name: String,
        type_params: Vec<String>,
        supertraits: Vec<String>,
        methods: Vec<NodeId>,
        span: Span,
    ) -> Self {
        Self { name, type_params, supertraits, methods, span }
    }
}

impl AstNode for TraitDecl {
    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { self.methods.clone() }
}

impl fmt::Display for TraitDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Trait({})", self.name) }
}

/// Represents a trait implementation (`impl Show(Point): …`).
#[derive(Debug, Clone)]
pub struct ImplDecl {
    /// The implemented trait name
    pub trait_name: String,
    /// The type arguments the trait is implemented for
    pub type_args: Vec<NodeId>,
    /// The method definitions (each an [`FnDecl`] node)
    pub methods: Vec<NodeId>,
    /// The span of this node in the source code
    pub span: Span,
}

impl ImplDecl {
    /// Creates a new impl declaration
    #[must_use]
    pub const fn new(
        trait_name: String,
        type_args: Vec<NodeId>,
        methods: Vec<NodeId>,
        span: Span,
    ) -> Self {
        Self { trait_name, type_args, methods, span }
    }
}

impl AstNode for ImplDecl {
    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> {
        let mut children = self.type_args.clone();
        children.extend(&self.methods);
        children
    }
}

impl fmt::Display for ImplDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Impl({})", self.trait_name)
    }
}

// ============================================================================
// Newtypes
// ============================================================================

/// Represents a newtype declaration wrapping an inner type with a distinct
/// nominal constructor.
#[derive(Debug, Clone)]
pub struct NewtypeDecl {
    /// The newtype name
    pub name: String,
    /// The constructor name
    pub ctor: String,
    /// The wrapped inner type annotation
    pub inner: NodeId,
    /// Whether the newtype is exported
    pub is_public: bool,
    /// The span of this node in the source code
    pub span: Span,
}

impl NewtypeDecl {
    /// Creates a new newtype declaration
    #[must_use]
    pub const fn new(
        name: String,
        ctor: String,
        inner: NodeId,
        is_public: bool,
        span: Span,
    ) -> Self {
        Self { name, ctor, inner, is_public, span }
    }
}

impl AstNode for NewtypeDecl {
    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }

    fn children(&self) -> Vec<NodeId> { vec![self.inner] }
}

impl fmt::Display for NewtypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Newtype({})", self.name)
    }
}

// ============================================================================
// Modules and Imports
// ============================================================================

/// Represents a module declaration (`module fern.collections`).
#[derive(Debug, Clone)]
pub struct ModuleDecl {
    /// The dotted module path segments
    pub path: Vec<String>,
    /// The span of this node in the source code
    pub span: Span,
}

impl ModuleDecl {
    /// Creates a new module declaration
    #[must_use]
    pub const fn new(path: Vec<String>, span: Span) -> Self { Self { path, span } }
}

impl AstNode for ModuleDecl {
    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }
}

impl fmt::Display for ModuleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Module({})", self.path.join("."))
    }
}

/// Represents an import (`import fern.list`, `import fern.list with map, fold`,
/// `import fern.list as l`).
#[derive(Debug, Clone)]
pub struct ImportDecl {
    /// The dotted import path segments
    pub path: Vec<String>,
    /// Selectively imported items; empty means the whole module
    pub items: Vec<String>,
    /// Optional alias for the imported module
    pub alias: Option<String>,
    /// The span of this node in the source code
    pub span: Span,
}

impl ImportDecl {
    /// Creates a new import declaration
    #[must_use]
    pub const fn new(
        path: Vec<String>,
        items: Vec<String>,
        alias: Option<String>,
        span: Span,
    ) -> Self {
        Self { path, items, alias, span }
    }
}

impl AstNode for ImportDecl {
    fn kind(&self) -> NodeKind { NodeKind::Declaration }

    fn span(&self) -> Span { self.span }
}

impl fmt::Display for ImportDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Import({})", self.path.join("."))
    }
}
