//! Tests for pattern parsing, through `let` and `match`.

use std::sync::Arc;

use fern_ast::nodes::{AnyNode, LiteralValue, NodeId};
use fern_parser::parser::Parser;
use fern_source::types::SourceManager;

fn create_parser(source: &'_ str) -> Parser<'_> {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.fern".to_string(), source.to_string());

    Parser::new(source, file_id, Arc::new(source_manager))
}

fn data<'p>(parser: &'p Parser<'_>, id: NodeId) -> &'p AnyNode {
    &parser.ast().get_node(id).expect("node should exist").data
}

/// Parse `let <pattern> = 0` and return the pattern node.
fn parse_pattern(pattern: &str) -> (Parser<'_>, NodeId) {
    let source = format!("let {pattern} = 0");
    let leaked: &'static str = Box::leak(source.into_boxed_str());

    let mut parser = create_parser(leaked);
    let id = parser.parse_statement().expect("let should parse");
    assert!(!parser.had_error(), "unexpected errors:\n{}", parser.diagnostics().emit());

    let AnyNode::LetStmt(stmt) = data(&parser, id) else { panic!("expected let") };
    let pattern_id = stmt.pattern;
    (parser, pattern_id)
}

#[test]
fn wildcard_pattern() {
    let (parser, id) = parse_pattern("_");
    assert!(matches!(data(&parser, id), AnyNode::WildcardPattern(_)));
}

#[test]
fn identifier_pattern_binds() {
    let (parser, id) = parse_pattern("result");

    let AnyNode::IdentPattern(pattern) = data(&parser, id) else { panic!("expected binding") };
    assert_eq!(pattern.name, "result");
}

#[test]
fn literal_patterns() {
    let (parser, id) = parse_pattern("42");
    let AnyNode::LiteralPattern(pattern) = data(&parser, id) else { panic!("expected literal") };
    let AnyNode::LiteralExpr(literal) = data(&parser, pattern.value) else {
        panic!("expected literal value")
    };
    assert_eq!(literal.value, LiteralValue::Int(42));

    let (parser, id) = parse_pattern("\"done\"");
    assert!(matches!(data(&parser, id), AnyNode::LiteralPattern(_)));

    let (parser, id) = parse_pattern("true");
    assert!(matches!(data(&parser, id), AnyNode::LiteralPattern(_)));
}

#[test]
fn negative_literal_pattern() {
    let (parser, id) = parse_pattern("-1");

    let AnyNode::LiteralPattern(pattern) = data(&parser, id) else { panic!("expected literal") };
    let AnyNode::LiteralExpr(literal) = data(&parser, pattern.value) else {
        panic!("expected literal value")
    };
    assert_eq!(literal.value, LiteralValue::Int(-1));
}

#[test]
fn tuple_pattern() {
    let (parser, id) = parse_pattern("(a, b, c)");

    let AnyNode::TuplePattern(pattern) = data(&parser, id) else { panic!("expected tuple") };
    assert_eq!(pattern.elements.len(), 3);
}

#[test]
fn parenthesized_single_pattern_is_grouping() {
    let (parser, id) = parse_pattern("(x)");
    assert!(matches!(data(&parser, id), AnyNode::IdentPattern(_)));
}

#[test]
fn list_pattern_with_rest() {
    let (parser, id) = parse_pattern("[head, ..tail]");

    let AnyNode::TuplePattern(pattern) = data(&parser, id) else { panic!("expected sequence") };
    assert_eq!(pattern.elements.len(), 2);

    let AnyNode::RestPattern(rest) = data(&parser, pattern.elements[1]) else {
        panic!("expected rest")
    };
    assert_eq!(rest.name.as_deref(), Some("tail"));
}

#[test]
fn anonymous_rest_pattern() {
    let (parser, id) = parse_pattern("[first, .._]");

    let AnyNode::TuplePattern(pattern) = data(&parser, id) else { panic!("expected sequence") };
    let AnyNode::RestPattern(rest) = data(&parser, pattern.elements[1]) else {
        panic!("expected rest")
    };
    assert!(rest.name.is_none());
}

#[test]
fn nullary_constructor_pattern() {
    let (parser, id) = parse_pattern("None");

    let AnyNode::ConstructorPattern(pattern) = data(&parser, id) else {
        panic!("expected constructor")
    };
    assert_eq!(pattern.name, "None");
    assert!(pattern.args.is_empty());
}

#[test]
fn constructor_pattern_with_arguments() {
    let (parser, id) = parse_pattern("Some(x)");

    let AnyNode::ConstructorPattern(pattern) = data(&parser, id) else {
        panic!("expected constructor")
    };
    assert_eq!(pattern.name, "Some");
    assert_eq!(pattern.args.len(), 1);
    assert!(matches!(data(&parser, pattern.args[0]), AnyNode::IdentPattern(_)));
}

#[test]
fn nested_constructor_pattern() {
    let (parser, id) = parse_pattern("Ok((status, Some(body)))");

    let AnyNode::ConstructorPattern(ok) = data(&parser, id) else { panic!("expected constructor") };
    let AnyNode::TuplePattern(tuple) = data(&parser, ok.args[0]) else { panic!("expected tuple") };
    assert!(matches!(data(&parser, tuple.elements[1]), AnyNode::ConstructorPattern(_)));
}

#[test]
fn patterns_in_match_arms() {
    let source = "match msg:\n    Ping => 1\n    Pong(n) => n\n    _ => 0\n";
    let mut parser = create_parser(source);
    let id = parser.parse_expression().expect("match should parse");
    assert!(!parser.had_error());

    let AnyNode::MatchExpr(match_expr) = data(&parser, id) else { panic!("expected match") };
    assert_eq!(match_expr.arms.len(), 3);

    let AnyNode::MatchArm(first) = data(&parser, match_expr.arms[0]) else { panic!("arm") };
    assert!(matches!(data(&parser, first.pattern), AnyNode::ConstructorPattern(_)));

    let AnyNode::MatchArm(last) = data(&parser, match_expr.arms[2]) else { panic!("arm") };
    assert!(matches!(data(&parser, last.pattern), AnyNode::WildcardPattern(_)));
}
