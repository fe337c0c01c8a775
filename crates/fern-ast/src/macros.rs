//! Declarative macros for reducing boilerplate in AST node implementations.
//!
//! Rather than manually writing match arms for every trait implementation on
//! `AnyNode`, a master list of node variants drives the generation. Adding a
//! node type means adding the struct and one line to the master list; the
//! compiler then enforces that every trait covers it.

/// Master list of all AST node variants.
///
/// Each line follows the pattern `EnumVariant(Type),`. This macro invokes the
/// callback macro with the complete variant list and serves as the single
/// source of truth for all generated `AnyNode` implementations.
#[macro_export]
macro_rules! for_each_node_variant {
    ($callback:ident) => {
        $callback! {
            // Expressions
            BinaryExpr(BinaryExpr),
            BindExpr(BindExpr),
            BlockExpr(BlockExpr),
            CallExpr(CallExpr),
            DotExpr(DotExpr),
            ForExpr(ForExpr),
            IdentExpr(IdentExpr),
            IfExpr(IfExpr),
            IndexExpr(IndexExpr),
            LambdaExpr(LambdaExpr),
            ListCompExpr(ListCompExpr),
            ListExpr(ListExpr),
            LiteralExpr(LiteralExpr),
            LoopExpr(LoopExpr),
            MapExpr(MapExpr),
            MatchArm(MatchArm),
            MatchExpr(MatchExpr),
            RangeExpr(RangeExpr),
            ReceiveExpr(ReceiveExpr),
            RecordUpdateExpr(RecordUpdateExpr),
            SendExpr(SendExpr),
            SpawnExpr(SpawnExpr),
            StringInterpExpr(StringInterpExpr),
            TryExpr(TryExpr),
            TupleExpr(TupleExpr),
            UnaryExpr(UnaryExpr),
            WhileExpr(WhileExpr),
            WithExpr(WithExpr),
            // Statements
            BreakStmt(BreakStmt),
            ContinueStmt(ContinueStmt),
            DeferStmt(DeferStmt),
            ExpressionStmt(ExpressionStmt),
            LetStmt(LetStmt),
            ReturnStmt(ReturnStmt),
            // Declarations
            FnDecl(FnDecl),
            ImplDecl(ImplDecl),
            ImportDecl(ImportDecl),
            ModuleDecl(ModuleDecl),
            NewtypeDecl(NewtypeDecl),
            TraitDecl(TraitDecl),
            TypeDecl(TypeDecl),
            // Patterns
            ConstructorPattern(ConstructorPattern),
            IdentPattern(IdentPattern),
            LiteralPattern(LiteralPattern),
            RestPattern(RestPattern),
            TuplePattern(TuplePattern),
            WildcardPattern(WildcardPattern),
            // Type annotations
            FunctionType(FunctionType),
            NamedType(NamedType),
            TupleType(TupleType),
            // Top-level
            Program(Program),
        }
    };
}

/// Generates the `AstNode` trait implementation for `AnyNode`.
///
/// Every method is a match that delegates to the corresponding method on the
/// variant's inner type.
#[macro_export]
macro_rules! impl_astnode_for_anynode {
    ($($variant:ident($type:ty)),* $(,)?) => {
        impl $crate::nodes::AstNode for $crate::nodes::AnyNode {
            fn kind(&self) -> $crate::nodes::NodeKind {
                match self {
                    $(Self::$variant(node) => node.kind(),)*
                }
            }

            fn span(&self) -> fern_source::types::Span {
                match self {
                    $(Self::$variant(node) => node.span(),)*
                }
            }

            fn children(&self) -> Vec<$crate::nodes::NodeId> {
                match self {
                    $(Self::$variant(node) => node.children(),)*
                }
            }
        }
    };
}

/// Generates the `Display` trait implementation for `AnyNode` by delegating
/// to the inner type's `Display` for each variant.
#[macro_export]
macro_rules! impl_display_for_anynode {
    ($($variant:ident($type:ty)),* $(,)?) => {
        impl std::fmt::Display for $crate::nodes::AnyNode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant(node) => std::fmt::Display::fmt(node, f),)*
                }
            }
        }
    };
}
