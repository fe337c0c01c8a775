//! Whole-program parsing, module and import declarations, and the
//! multi-clause grouping pass.

use fern_ast::nodes::{AnyNode, FnDecl, FnKind, ImportDecl, ModuleDecl, NodeId, NodeKind, Program};
use fern_source::types::Span;
use rustc_hash::FxHashSet;

use crate::diagnostics::{ParseError, ParseResult};
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse a whole program: top-level statements up to EOF.
    ///
    /// Errors are reported and recovered from inside the loop, so the
    /// returned [`Program`] always exists; check [`Parser::had_error`]
    /// before trusting it. Adjacent same-name function clauses are merged
    /// into multi-clause functions after the statement list is complete.
    pub fn parse_program(&mut self) -> NodeId {
        let mut statements = Vec::new();

        while !self.check(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.report_error(error);
                    self.synchronize();
                }
            }
        }

        let statements = self.merge_function_clauses(statements);

        let span = Span::new(0, self.source_len());
        let program = Program::new(statements, span);
        let root = self.alloc_node(NodeKind::Module, AnyNode::Program(program), span);
        self.set_root(root);

        root
    }

    /// Parse `module dotted.path`.
    pub(crate) fn parse_module_decl(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'module'

        let path = self.parse_dotted_path()?;

        let span = self.span_from(start);
        let decl = ModuleDecl::new(path, span);
        Ok(self.alloc_node(NodeKind::Declaration, AnyNode::ModuleDecl(decl), span))
    }

    /// Parse `import dotted.path [with item, …] [as alias]`.
    pub(crate) fn parse_import_decl(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'import'

        let path = self.parse_dotted_path()?;

        let mut items = Vec::new();
        if self.eat(TokenKind::With) {
            loop {
                items.push(self.expect_ident("imported item")?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        let alias = if self.eat(TokenKind::As) {
            Some(self.expect_ident("module alias")?)
        } else {
            None
        };

        let span = self.span_from(start);
        let decl = ImportDecl::new(path, items, alias, span);
        Ok(self.alloc_node(NodeKind::Declaration, AnyNode::ImportDecl(decl), span))
    }

    /// Parse `segment(.segment)*`.
    fn parse_dotted_path(&mut self) -> ParseResult<Vec<String>> {
        let mut path = vec![self.expect_ident("module path segment")?];

        while self.eat(TokenKind::Dot) {
            path.push(self.expect_ident("module path segment")?);
        }

        Ok(path)
    }

    /// Merge adjacent clause-shaped functions with identical names into
    /// single multi-clause function nodes.
    ///
    /// `fn fact(0) -> 1` directly followed by `fn fact(n) -> …` becomes
    /// one `fact` with two clauses in source order. Same-name function
    /// statements that are NOT adjacent are a syntax error, reported once
    /// per name; parsing output is otherwise unaffected.
    fn merge_function_clauses(&mut self, statements: Vec<NodeId>) -> Vec<NodeId> {
        let mut result: Vec<NodeId> = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut reported: FxHashSet<String> = FxHashSet::default();

        for id in statements {
            let Some(decl) = self.fn_decl_data(id) else {
                result.push(id);
                continue;
            };

            // Adjacent clause-shaped functions with the same name merge
            if let FnKind::Clauses(new_clauses) = &decl.fn_kind
                && let Some(&last_id) = result.last()
                && let Some(last) = self.fn_decl_data(last_id)
                && let FnKind::Clauses(existing) = &last.fn_kind
                && last.name == decl.name
            {
                let mut clauses = existing.clone();
                clauses.extend(new_clauses.iter().cloned());

                let span = last.span.merge(&decl.span);
                let merged =
                    FnDecl::new(last.name.clone(), last.is_public, FnKind::Clauses(clauses), span);
                let merged_id =
                    self.alloc_node(NodeKind::Declaration, AnyNode::FnDecl(merged), span);

                let _ = result.pop();
                result.push(merged_id);
                continue;
            }

            // A name that reappears later is no longer mergeable
            if !seen.insert(decl.name.clone()) && reported.insert(decl.name.clone()) {
                let error =
                    ParseError::non_adjacent_clauses(decl.name.clone(), self.source_span(decl.span));
                self.report_plain_error(error);
            }

            result.push(id);
        }

        result
    }

    /// Fetch the function declaration data behind a node, if it is one.
    fn fn_decl_data(&self, id: NodeId) -> Option<FnDecl> {
        match self.ast().get_node(id).map(|n| &n.data) {
            Some(AnyNode::FnDecl(decl)) => Some(decl.clone()),
            _ => None,
        }
    }
}
