//! Tests for type annotation parsing.

use std::sync::Arc;

use fern_ast::nodes::{AnyNode, NodeId};
use fern_parser::parser::Parser;
use fern_source::types::SourceManager;

fn create_parser(source: &'_ str) -> Parser<'_> {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.fern".to_string(), source.to_string());

    Parser::new(source, file_id, Arc::new(source_manager))
}

fn parse_type(source: &str) -> (Parser<'_>, NodeId) {
    let mut parser = create_parser(source);
    let id = parser.parse_type_expr().expect("type should parse");
    assert!(!parser.had_error(), "unexpected errors:\n{}", parser.diagnostics().emit());
    (parser, id)
}

fn data<'p>(parser: &'p Parser<'_>, id: NodeId) -> &'p AnyNode {
    &parser.ast().get_node(id).expect("node should exist").data
}

#[test]
fn bare_named_type() {
    let (parser, id) = parse_type("Int");

    let AnyNode::NamedType(named) = data(&parser, id) else { panic!("expected named type") };
    assert_eq!(named.name, "Int");
    assert!(named.args.is_empty());
}

#[test]
fn generic_type_arguments() {
    let (parser, id) = parse_type("Map[String, List[Int]]");

    let AnyNode::NamedType(map) = data(&parser, id) else { panic!("expected named type") };
    assert_eq!(map.name, "Map");
    assert_eq!(map.args.len(), 2);

    let AnyNode::NamedType(list) = data(&parser, map.args[1]) else { panic!("expected named") };
    assert_eq!(list.name, "List");
    assert_eq!(list.args.len(), 1);
}

#[test]
fn function_type() {
    let (parser, id) = parse_type("(Int, Int) -> Bool");

    let AnyNode::FunctionType(function) = data(&parser, id) else { panic!("expected fn type") };
    assert_eq!(function.params.len(), 2);

    let AnyNode::NamedType(ret) = data(&parser, function.ret) else { panic!("expected named") };
    assert_eq!(ret.name, "Bool");
}

#[test]
fn zero_argument_function_type() {
    let (parser, id) = parse_type("() -> Unit");

    let AnyNode::FunctionType(function) = data(&parser, id) else { panic!("expected fn type") };
    assert!(function.params.is_empty());
}

#[test]
fn curried_function_type() {
    let (parser, id) = parse_type("(Int) -> (Int) -> Int");

    // The arrow nests to the right
    let AnyNode::FunctionType(outer) = data(&parser, id) else { panic!("expected fn type") };
    assert!(matches!(data(&parser, outer.ret), AnyNode::FunctionType(_)));
}

#[test]
fn tuple_type() {
    let (parser, id) = parse_type("(Int, String)");

    let AnyNode::TupleType(tuple) = data(&parser, id) else { panic!("expected tuple type") };
    assert_eq!(tuple.elements.len(), 2);
}

#[test]
fn parenthesized_single_type_is_grouping() {
    let (parser, id) = parse_type("(Int)");
    assert!(matches!(data(&parser, id), AnyNode::NamedType(_)));
}

#[test]
fn rejects_non_type_tokens() {
    let mut parser = create_parser("42");
    assert!(parser.parse_type_expr().is_err());
}
