//! Tests for statement parsing and blocks.

use std::sync::Arc;

use fern_ast::nodes::{AnyNode, LiteralValue, NodeId};
use fern_parser::parser::Parser;
use fern_source::types::SourceManager;

fn create_parser(source: &'_ str) -> Parser<'_> {
    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file("test.fern".to_string(), source.to_string());

    Parser::new(source, file_id, Arc::new(source_manager))
}

fn parse_stmt(source: &str) -> (Parser<'_>, NodeId) {
    let mut parser = create_parser(source);
    let id = parser.parse_statement().expect("statement should parse");
    assert!(!parser.had_error(), "unexpected errors:\n{}", parser.diagnostics().emit());
    (parser, id)
}

fn data<'p>(parser: &'p Parser<'_>, id: NodeId) -> &'p AnyNode {
    &parser.ast().get_node(id).expect("node should exist").data
}

// ============================================================================
// Let
// ============================================================================

#[test]
fn let_binding() {
    let (parser, id) = parse_stmt("let x = 1");

    let AnyNode::LetStmt(stmt) = data(&parser, id) else { panic!("expected let") };
    assert!(stmt.ty.is_none());
    assert!(stmt.else_branch.is_none());
    assert!(matches!(data(&parser, stmt.pattern), AnyNode::IdentPattern(_)));
}

#[test]
fn let_with_type_annotation() {
    let (parser, id) = parse_stmt("let count: Int = 0");

    let AnyNode::LetStmt(stmt) = data(&parser, id) else { panic!("expected let") };
    let ty = stmt.ty.expect("type annotation");
    assert!(matches!(data(&parser, ty), AnyNode::NamedType(_)));
}

#[test]
fn let_with_tuple_pattern() {
    let (parser, id) = parse_stmt("let (a, b) = pair");

    let AnyNode::LetStmt(stmt) = data(&parser, id) else { panic!("expected let") };
    assert!(matches!(data(&parser, stmt.pattern), AnyNode::TuplePattern(_)));
}

#[test]
fn let_with_else() {
    let (parser, id) = parse_stmt("let Some(x) = find(key) else: fallback");

    let AnyNode::LetStmt(stmt) = data(&parser, id) else { panic!("expected let") };
    assert!(matches!(data(&parser, stmt.pattern), AnyNode::ConstructorPattern(_)));
    assert!(stmt.else_branch.is_some());
}

// ============================================================================
// Return
// ============================================================================

#[test]
fn bare_return() {
    let (parser, id) = parse_stmt("return");

    let AnyNode::ReturnStmt(stmt) = data(&parser, id) else { panic!("expected return") };
    assert!(stmt.value.is_none());
    assert!(stmt.condition.is_none());
}

#[test]
fn return_with_value() {
    let (parser, id) = parse_stmt("return total");

    let AnyNode::ReturnStmt(stmt) = data(&parser, id) else { panic!("expected return") };
    assert!(stmt.value.is_some());
    assert!(stmt.condition.is_none());
}

#[test]
fn return_with_postfix_if() {
    let (parser, id) = parse_stmt("return cached if fresh");

    let AnyNode::ReturnStmt(stmt) = data(&parser, id) else { panic!("expected return") };
    assert!(stmt.value.is_some());

    let condition = stmt.condition.expect("condition");
    assert!(matches!(data(&parser, condition), AnyNode::IdentExpr(_)));
}

#[test]
fn return_with_postfix_unless_negates() {
    let (parser, id) = parse_stmt("return 0 unless valid");

    let AnyNode::ReturnStmt(stmt) = data(&parser, id) else { panic!("expected return") };
    let condition = stmt.condition.expect("condition");

    // `unless c` is stored as `not c`
    assert!(matches!(data(&parser, condition), AnyNode::UnaryExpr(_)));
}

#[test]
fn block_final_return_does_not_capture_next_if() {
    // The dedent between `return n` and `if` keeps them separate
    let source = "fn f(n: Int) -> Int:\n    return n\nif g: h()\n";
    let mut parser = create_parser(source);
    let program = parser.parse_program();
    assert!(!parser.had_error(), "unexpected errors:\n{}", parser.diagnostics().emit());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    assert_eq!(top.statements.len(), 2);

    let AnyNode::FnDecl(decl) = data(&parser, top.statements[0]) else { panic!("expected fn") };
    let fern_ast::nodes::FnKind::Single { body, .. } = &decl.fn_kind else {
        panic!("expected single clause")
    };

    // The fn body holds a return with NO condition attached
    let return_id = parser
        .ast()
        .find_node(*body, |id| {
            matches!(parser.ast().get_node(id).map(|n| &n.data), Some(AnyNode::ReturnStmt(_)))
        })
        .expect("return inside body");
    let AnyNode::ReturnStmt(ret) = data(&parser, return_id) else { panic!("expected return") };
    assert!(ret.condition.is_none());
}

// ============================================================================
// Defer / Break / Continue
// ============================================================================

#[test]
fn defer_statement() {
    let (parser, id) = parse_stmt("defer close(file)");

    let AnyNode::DeferStmt(stmt) = data(&parser, id) else { panic!("expected defer") };
    assert!(matches!(data(&parser, stmt.value), AnyNode::CallExpr(_)));
}

#[test]
fn break_with_and_without_value() {
    let (parser, id) = parse_stmt("break 42");
    let AnyNode::BreakStmt(stmt) = data(&parser, id) else { panic!("expected break") };
    assert!(stmt.value.is_some());

    let (parser, id) = parse_stmt("break");
    let AnyNode::BreakStmt(stmt) = data(&parser, id) else { panic!("expected break") };
    assert!(stmt.value.is_none());
}

#[test]
fn continue_statement() {
    let (parser, id) = parse_stmt("continue");
    assert!(matches!(data(&parser, id), AnyNode::ContinueStmt(_)));
}

// ============================================================================
// Expression Statements
// ============================================================================

#[test]
fn bare_integer_is_an_expression_statement() {
    let mut parser = create_parser("42");
    let program = parser.parse_program();
    assert!(!parser.had_error());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    assert_eq!(top.statements.len(), 1);

    let AnyNode::ExpressionStmt(stmt) = data(&parser, top.statements[0]) else {
        panic!("expected expression statement")
    };
    let AnyNode::LiteralExpr(literal) = data(&parser, stmt.expr) else { panic!("expected literal") };
    assert_eq!(literal.value, LiteralValue::Int(42));
}

#[test]
fn call_on_next_line_is_not_an_argument_list() {
    // `f` and `(x)` are separated by a newline: two statements, no call
    let mut parser = create_parser("f\n(x)\n");
    let program = parser.parse_program();
    assert!(!parser.had_error());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    assert_eq!(top.statements.len(), 2);

    let AnyNode::ExpressionStmt(first) = data(&parser, top.statements[0]) else {
        panic!("expected expression statement")
    };
    assert!(matches!(data(&parser, first.expr), AnyNode::IdentExpr(_)));
}

// ============================================================================
// Blocks
// ============================================================================

#[test]
fn fn_block_with_final_expression() {
    let mut parser = create_parser("fn main():\n    let x = 1\n    x\n");
    let program = parser.parse_program();
    assert!(!parser.had_error(), "unexpected errors:\n{}", parser.diagnostics().emit());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    assert_eq!(top.statements.len(), 1);

    let AnyNode::FnDecl(decl) = data(&parser, top.statements[0]) else { panic!("expected fn") };
    let fern_ast::nodes::FnKind::Single { body, .. } = &decl.fn_kind else {
        panic!("expected single clause")
    };

    let AnyNode::BlockExpr(block) = data(&parser, *body) else { panic!("expected block") };
    assert_eq!(block.statements.len(), 1);
    assert!(matches!(data(&parser, block.statements[0]), AnyNode::LetStmt(_)));

    let value = block.value.expect("final expression");
    assert!(matches!(data(&parser, value), AnyNode::IdentExpr(_)));
}

#[test]
fn statement_only_block_has_no_value() {
    let mut parser = create_parser("fn setup():\n    let a = 1\n    let b = 2\n");
    let program = parser.parse_program();
    assert!(!parser.had_error());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    let AnyNode::FnDecl(decl) = data(&parser, top.statements[0]) else { panic!("expected fn") };
    let fern_ast::nodes::FnKind::Single { body, .. } = &decl.fn_kind else {
        panic!("expected single clause")
    };

    let AnyNode::BlockExpr(block) = data(&parser, *body) else { panic!("expected block") };
    assert_eq!(block.statements.len(), 2);
    assert!(block.value.is_none());
}

#[test]
fn nested_blocks_close_in_order() {
    let source = "fn outer():\n    if ready:\n        inner()\n    done()\nafterwards()\n";
    let mut parser = create_parser(source);
    let program = parser.parse_program();
    assert!(!parser.had_error(), "unexpected errors:\n{}", parser.diagnostics().emit());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    assert_eq!(top.statements.len(), 2);
}

#[test]
fn single_expression_block_is_unwrapped() {
    let mut parser = create_parser("fn answer():\n    42\n");
    let program = parser.parse_program();
    assert!(!parser.had_error());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    let AnyNode::FnDecl(decl) = data(&parser, top.statements[0]) else { panic!("expected fn") };
    let fern_ast::nodes::FnKind::Single { body, .. } = &decl.fn_kind else {
        panic!("expected single clause")
    };

    // No block wrapper around a lone expression
    assert!(matches!(data(&parser, *body), AnyNode::LiteralExpr(_)));
}

// ============================================================================
// Error Recovery
// ============================================================================

#[test]
fn error_recovery_reaches_later_statements() {
    // The broken first statement must not hide the valid fn after it
    let source = "let = 5\nfn ok():\n    1\n";
    let mut parser = create_parser(source);
    let program = parser.parse_program();

    assert!(parser.had_error());

    let AnyNode::Program(top) = data(&parser, program) else { panic!("expected program") };
    assert!(
        top.statements
            .iter()
            .any(|&id| matches!(data(&parser, id), AnyNode::FnDecl(_))),
        "the fn after the error should still be parsed"
    );
}

#[test]
fn one_error_reports_once_not_a_cascade() {
    let mut parser = create_parser("let = = =\n");
    let _ = parser.parse_program();

    assert!(parser.had_error());
    // Panic mode suppresses the follow-on errors of the same statement
    assert_eq!(parser.diagnostics().len(), 1);
}

#[test]
fn determinism_across_runs() {
    let source = "fn fact(0) -> 1\nfn fact(n) -> n * fact(n - 1)\nfn main():\n    fact(5)\n";

    let mut first = create_parser(source);
    let first_root = first.parse_program();
    let mut second = create_parser(source);
    let second_root = second.parse_program();

    let first_dump = format!("{:?}", first.ast().get_node(first_root));
    let second_dump = format!("{:?}", second.ast().get_node(second_root));

    assert_eq!(first.ast().node_count(), second.ast().node_count());
    assert_eq!(first_dump, second_dump);
}
