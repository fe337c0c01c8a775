//! Tests for declaration parsing: functions, types, traits, impls,
//! newtypes, modules and imports.

use std::sync::Arc;

use fern_ast::nodes::{AnyNode, FnKind, NodeId, TypeBody};
use fern_parser::parser::Parser;
use fern_source::types::SourceManager;

fn create_parser(source: &'_ str) -> Parser<'_> {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.fern".to_string(), source.to_string());

    Parser::new(source, file_id, Arc::new(source_manager))
}

fn parse_stmt(source: &str) -> (Parser<'_>, NodeId) {
    let mut parser = create_parser(source);
    let id = parser.parse_statement().expect("declaration should parse");
    assert!(!parser.had_error(), "unexpected errors:\n{}", parser.diagnostics().emit());
    (parser, id)
}

fn data<'p>(parser: &'p Parser<'_>, id: NodeId) -> &'p AnyNode {
    &parser.ast().get_node(id).expect("node should exist").data
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn typed_function_is_single_clause() {
    let (parser, id) = parse_stmt("fn add(a: Int, b: Int) -> Int:\n    a + b\n");

    let AnyNode::FnDecl(decl) = data(&parser, id) else { panic!("expected fn") };
    assert_eq!(decl.name, "add");
    assert!(!decl.is_public);

    let FnKind::Single { params, return_ty, .. } = &decl.fn_kind else {
        panic!("expected single clause")
    };
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "a");
    assert!(return_ty.is_some());
}

#[test]
fn public_function() {
    let (parser, id) = parse_stmt("pub fn go():\n    1\n");

    let AnyNode::FnDecl(decl) = data(&parser, id) else { panic!("expected fn") };
    assert!(decl.is_public);
}

#[test]
fn function_with_where_clause() {
    let (parser, id) = parse_stmt("fn show_all(xs: List[T]) -> String where T: Show:\n    1\n");

    let AnyNode::FnDecl(decl) = data(&parser, id) else { panic!("expected fn") };
    let FnKind::Single { where_clauses, .. } = &decl.fn_kind else {
        panic!("expected single clause")
    };
    assert_eq!(where_clauses.len(), 1);
    assert_eq!(where_clauses[0].type_var, "T");
    assert_eq!(where_clauses[0].trait_name, "Show");
}

#[test]
fn pattern_function_is_a_clause() {
    let (parser, id) = parse_stmt("fn fact(0) -> 1");

    let AnyNode::FnDecl(decl) = data(&parser, id) else { panic!("expected fn") };
    let FnKind::Clauses(clauses) = &decl.fn_kind else { panic!("expected clauses") };
    assert_eq!(clauses.len(), 1);
    assert!(matches!(data(&parser, clauses[0].patterns[0]), AnyNode::LiteralPattern(_)));
}

#[test]
fn adjacent_clauses_merge_in_source_order() {
    let source = "fn fact(0) -> 1\nfn fact(n) -> n * fact(n - 1)\n";
    let mut parser = create_parser(source);
    let program = parser.parse_program();
    assert!(!parser.had_error(), "unexpected errors:\n{}", parser.diagnostics().emit());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    assert_eq!(top.statements.len(), 1, "both clauses should merge into one fn");

    let AnyNode::FnDecl(decl) = data(&parser, top.statements[0]) else { panic!("expected fn") };
    assert_eq!(decl.name, "fact");

    let FnKind::Clauses(clauses) = &decl.fn_kind else { panic!("expected clauses") };
    assert_eq!(clauses.len(), 2);

    // First clause: literal pattern 0; second: identifier pattern n
    assert!(matches!(data(&parser, clauses[0].patterns[0]), AnyNode::LiteralPattern(_)));
    assert!(matches!(data(&parser, clauses[1].patterns[0]), AnyNode::IdentPattern(_)));
}

#[test]
fn single_clause_stays_single_after_merge_pass() {
    let mut parser = create_parser("fn id(x) -> x\n");
    let program = parser.parse_program();
    assert!(!parser.had_error());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    let AnyNode::FnDecl(decl) = data(&parser, top.statements[0]) else { panic!("expected fn") };
    assert_eq!(decl.clause_count(), 1);
}

#[test]
fn non_adjacent_clauses_are_an_error() {
    let source = "fn f(0) -> 1\nfn g(x) -> x\nfn f(n) -> n\n";
    let mut parser = create_parser(source);
    let program = parser.parse_program();

    assert!(parser.had_error());

    // Parsing continues: all three declarations are present
    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    assert_eq!(top.statements.len(), 3);
}

// ============================================================================
// Types
// ============================================================================

#[test]
fn record_type() {
    let (parser, id) = parse_stmt("type Point:\n    x: Int\n    y: Int\n");

    let AnyNode::TypeDecl(decl) = data(&parser, id) else { panic!("expected type") };
    assert_eq!(decl.name, "Point");

    let TypeBody::Record(fields) = &decl.body else { panic!("expected record") };
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "x");
}

#[test]
fn sum_type_with_params_and_derives() {
    let source = "type Option[T] derive(Eq, Show):\n    Some(T)\n    None\n";
    let (parser, id) = parse_stmt(source);

    let AnyNode::TypeDecl(decl) = data(&parser, id) else { panic!("expected type") };
    assert_eq!(decl.type_params, vec!["T".to_string()]);
    assert_eq!(decl.derives, vec!["Eq".to_string(), "Show".to_string()]);

    let TypeBody::Sum(variants) = &decl.body else { panic!("expected sum") };
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].name, "Some");
    assert_eq!(variants[0].args.len(), 1);
    assert!(variants[1].args.is_empty());
}

#[test]
fn mixed_type_body_is_rejected() {
    let mut parser = create_parser("type Broken:\n    x: Int\n    Some(Int)\n");
    assert!(parser.parse_statement().is_err());
}

// ============================================================================
// Traits and Impls
// ============================================================================

#[test]
fn trait_with_method() {
    let source = "trait Show(T):\n    fn show(value: T) -> String:\n        describe(value)\n";
    let (parser, id) = parse_stmt(source);

    let AnyNode::TraitDecl(decl) = data(&parser, id) else { panic!("expected trait") };
    assert_eq!(decl.name, "Show");
    assert_eq!(decl.type_params, vec!["T".to_string()]);
    assert_eq!(decl.methods.len(), 1);
    assert!(matches!(data(&parser, decl.methods[0]), AnyNode::FnDecl(_)));
}

#[test]
fn trait_with_supertrait() {
    let source = "trait Ord(T) where Eq:\n    fn compare(a: T, b: T) -> Int:\n        0\n";
    let (parser, id) = parse_stmt(source);

    let AnyNode::TraitDecl(decl) = data(&parser, id) else { panic!("expected trait") };
    assert_eq!(decl.supertraits, vec!["Eq".to_string()]);
}

#[test]
fn impl_with_methods() {
    let source = "impl Show(Point):\n    fn show(value: Point) -> String:\n        \"point\"\n";
    let (parser, id) = parse_stmt(source);

    let AnyNode::ImplDecl(decl) = data(&parser, id) else { panic!("expected impl") };
    assert_eq!(decl.trait_name, "Show");
    assert_eq!(decl.type_args.len(), 1);
    assert_eq!(decl.methods.len(), 1);
}

// ============================================================================
// Newtypes
// ============================================================================

#[test]
fn newtype_declaration() {
    let (parser, id) = parse_stmt("newtype UserId = UserId(Int)");

    let AnyNode::NewtypeDecl(decl) = data(&parser, id) else { panic!("expected newtype") };
    assert_eq!(decl.name, "UserId");
    assert_eq!(decl.ctor, "UserId");
    assert!(matches!(data(&parser, decl.inner), AnyNode::NamedType(_)));
}

#[test]
fn public_newtype() {
    let (parser, id) = parse_stmt("pub newtype Meters = Meters(Float)");

    let AnyNode::NewtypeDecl(decl) = data(&parser, id) else { panic!("expected newtype") };
    assert!(decl.is_public);
}

// ============================================================================
// Modules and Imports
// ============================================================================

#[test]
fn module_declaration() {
    let (parser, id) = parse_stmt("module fern.collections.list");

    let AnyNode::ModuleDecl(decl) = data(&parser, id) else { panic!("expected module") };
    assert_eq!(decl.path, vec!["fern".to_string(), "collections".to_string(), "list".to_string()]);
}

#[test]
fn plain_import() {
    let (parser, id) = parse_stmt("import fern.list");

    let AnyNode::ImportDecl(decl) = data(&parser, id) else { panic!("expected import") };
    assert_eq!(decl.path.len(), 2);
    assert!(decl.items.is_empty());
    assert!(decl.alias.is_none());
}

#[test]
fn selective_import() {
    let (parser, id) = parse_stmt("import fern.list with map, fold");

    let AnyNode::ImportDecl(decl) = data(&parser, id) else { panic!("expected import") };
    assert_eq!(decl.items, vec!["map".to_string(), "fold".to_string()]);
}

#[test]
fn aliased_import() {
    let (parser, id) = parse_stmt("import fern.collections.map as m");

    let AnyNode::ImportDecl(decl) = data(&parser, id) else { panic!("expected import") };
    assert_eq!(decl.alias.as_deref(), Some("m"));
}
