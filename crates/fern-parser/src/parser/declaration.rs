//! Declaration parsing: functions, types, traits, impls and newtypes.

use fern_ast::nodes::{
    AnyNode,
    FieldDef,
    FnClause,
    FnDecl,
    FnKind,
    ImplDecl,
    NewtypeDecl,
    NodeId,
    NodeKind,
    TraitDecl,
    TypeBody,
    TypeDecl,
    TypedParam,
    VariantDef,
    WhereClause,
};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// One item of a type declaration body, before the record/sum decision.
enum TypeItem {
    Field(FieldDef),
    Variant(VariantDef),
}

impl Parser<'_> {
    /// Parse a function declaration.
    ///
    /// After `fn name (` the first parameter token decides the shape: an
    /// identifier immediately followed by `:` means typed parameters and a
    /// single clause; anything else means pattern parameters forming one
    /// clause of a potentially multi-clause function. The two shapes never
    /// mix on one node.
    pub(crate) fn parse_fn_decl(&mut self, is_public: bool) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'fn'

        let name = self.expect_ident("function name")?;
        self.expect(TokenKind::LParen)?;

        let typed = if self.check(TokenKind::RParen) {
            true
        } else if self.check(TokenKind::Ident) {
            // Peek one token: `ident :` marks a typed parameter
            let checkpoint = self.checkpoint();
            self.advance();
            let is_typed = self.check(TokenKind::Colon);
            self.rewind(checkpoint);
            is_typed
        } else {
            false
        };

        let fn_kind = if typed {
            self.parse_single_clause()?
        } else {
            self.parse_pattern_clause()?
        };

        let span = self.span_from(start);
        let decl = FnDecl::new(name, is_public, fn_kind, span);
        Ok(self.alloc_node(NodeKind::Declaration, AnyNode::FnDecl(decl), span))
    }

    /// Parse the typed-parameter shape:
    /// `(name: Type, …) [-> Type] [where T: Trait, …]: block`.
    fn parse_single_clause(&mut self) -> ParseResult<FnKind> {
        let mut params = Vec::new();

        while !self.check(TokenKind::RParen) {
            let name = self.expect_ident("parameter name")?;
            self.expect(TokenKind::Colon)?;
            let ty = self.parse_type_expr()?;
            params.push(TypedParam { name, ty });

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;

        let return_ty = if self.eat(TokenKind::Arrow) { Some(self.parse_type_expr()?) } else { None };

        let mut where_clauses = Vec::new();
        if self.eat(TokenKind::Where) {
            loop {
                let type_var = self.expect_ident("type variable")?;
                self.expect(TokenKind::Colon)?;
                let trait_name = self.expect_ident("trait name")?;
                where_clauses.push(WhereClause { type_var, trait_name });

                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::Colon)?;
        let body = self.parse_block()?;

        Ok(FnKind::Single { params, return_ty, where_clauses, body })
    }

    /// Parse one pattern clause: `(pattern, …) [: Type] -> body`.
    ///
    /// Adjacent clauses of the same name are merged into one multi-clause
    /// function after the whole program has been read.
    fn parse_pattern_clause(&mut self) -> ParseResult<FnKind> {
        let mut patterns = Vec::new();

        while !self.check(TokenKind::RParen) {
            patterns.push(self.parse_pattern()?);

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;

        let return_ty = if self.eat(TokenKind::Colon) { Some(self.parse_type_expr()?) } else { None };

        self.expect(TokenKind::Arrow)?;
        let body = self.parse_expression()?;

        Ok(FnKind::Clauses(vec![FnClause { patterns, return_ty, body }]))
    }

    /// Parse a type declaration:
    ///
    /// ```text
    /// type Option[T] derive(Eq, Show):
    ///     Some(T)
    ///     None
    /// ```
    ///
    /// The body is either record fields (`name: Type`) or sum variants
    /// (`Name(args)`), decided by the shape of its items.
    pub(crate) fn parse_type_decl(&mut self, is_public: bool) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'type'

        let name = self.expect_ident("type name")?;

        let mut type_params = Vec::new();
        if self.eat(TokenKind::LBracket) {
            while !self.check(TokenKind::RBracket) {
                type_params.push(self.expect_ident("type parameter")?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RBracket)?;
        }

        let mut derives = Vec::new();
        if self.eat(TokenKind::Derive) {
            self.expect(TokenKind::LParen)?;
            while !self.check(TokenKind::RParen) {
                derives.push(self.expect_ident("trait name")?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
        }

        self.expect(TokenKind::Colon)?;

        let base = self.dedents_seen();
        let mut fields = Vec::new();
        let mut variants = Vec::new();

        loop {
            match self.parse_type_item()? {
                TypeItem::Field(field) => fields.push(field),
                TypeItem::Variant(variant) => variants.push(variant),
            }

            if self.eat(TokenKind::Comma) {
                if self.dedents_seen() > base || !self.check(TokenKind::Ident) {
                    break;
                }
                continue;
            }

            if self.dedents_seen() > base
                || self.check(TokenKind::Eof)
                || !self.check(TokenKind::Ident)
            {
                break;
            }
        }

        if self.dedents_seen() > base {
            self.consume_dedent();
        }

        let body = match (fields.is_empty(), variants.is_empty()) {
            (false, true) => TypeBody::Record(fields),
            (true, false) => TypeBody::Sum(variants),
            (false, false) => {
                return Err(self.error("A type cannot mix record fields and sum variants"));
            }
            (true, true) => return Err(self.error("A type needs at least one field or variant")),
        };

        let span = self.span_from(start);
        let decl = TypeDecl::new(name, is_public, type_params, derives, body, span);
        Ok(self.alloc_node(NodeKind::Declaration, AnyNode::TypeDecl(decl), span))
    }

    /// One type-body item: `name: Type` is a record field, `Name[(args)]`
    /// a sum variant.
    fn parse_type_item(&mut self) -> ParseResult<TypeItem> {
        let name = self.expect_ident("field or variant name")?;

        if self.eat(TokenKind::Colon) {
            let ty = self.parse_type_expr()?;
            return Ok(TypeItem::Field(FieldDef { name, ty }));
        }

        let mut args = Vec::new();
        if self.check(TokenKind::LParen) && !self.newline_before_current() {
            self.advance();
            while !self.check(TokenKind::RParen) {
                args.push(self.parse_type_expr()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
        }

        Ok(TypeItem::Variant(VariantDef { name, args }))
    }

    /// Parse a trait declaration:
    ///
    /// ```text
    /// trait Ord(T) where Eq:
    ///     fn compare(left: T, right: T) -> Int: …
    /// ```
    pub(crate) fn parse_trait_decl(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'trait'

        let name = self.expect_ident("trait name")?;

        let mut type_params = Vec::new();
        if self.eat(TokenKind::LParen) {
            while !self.check(TokenKind::RParen) {
                type_params.push(self.expect_ident("type parameter")?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
        }

        let mut supertraits = Vec::new();
        if self.eat(TokenKind::Where) {
            loop {
                supertraits.push(self.expect_ident("super-trait name")?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::Colon)?;
        let methods = self.parse_method_block()?;

        let span = self.span_from(start);
        let decl = TraitDecl::new(name, type_params, supertraits, methods, span);
        Ok(self.alloc_node(NodeKind::Declaration, AnyNode::TraitDecl(decl), span))
    }

    /// Parse a trait implementation: `impl Show(Point): methods`.
    pub(crate) fn parse_impl_decl(&mut self) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'impl'

        let trait_name = self.expect_ident("trait name")?;

        self.expect(TokenKind::LParen)?;
        let mut type_args = Vec::new();
        while !self.check(TokenKind::RParen) {
            type_args.push(self.parse_type_expr()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;

        self.expect(TokenKind::Colon)?;
        let methods = self.parse_method_block()?;

        let span = self.span_from(start);
        let decl = ImplDecl::new(trait_name, type_args, methods, span);
        Ok(self.alloc_node(NodeKind::Declaration, AnyNode::ImplDecl(decl), span))
    }

    /// Parse the indented sequence of `fn` declarations inside a trait or
    /// impl body.
    fn parse_method_block(&mut self) -> ParseResult<Vec<NodeId>> {
        let base = self.dedents_seen();
        let mut methods = Vec::new();

        while self.check(TokenKind::Fn) {
            methods.push(self.parse_fn_decl(false)?);

            if self.dedents_seen() > base {
                break;
            }
        }

        if methods.is_empty() {
            return Err(self.error("Expected at least one 'fn' in the body"));
        }

        if self.dedents_seen() > base {
            self.consume_dedent();
        }

        Ok(methods)
    }

    /// Parse `newtype Name = Ctor(Type)`.
    pub(crate) fn parse_newtype_decl(&mut self, is_public: bool) -> ParseResult<NodeId> {
        let start = self.current_token().span.start;
        self.advance(); // consume 'newtype'

        let name = self.expect_ident("newtype name")?;
        self.expect(TokenKind::Eq)?;
        let ctor = self.expect_ident("constructor name")?;

        self.expect(TokenKind::LParen)?;
        let inner = self.parse_type_expr()?;
        self.expect(TokenKind::RParen)?;

        let span = self.span_from(start);
        let decl = NewtypeDecl::new(name, ctor, inner, is_public, span);
        Ok(self.alloc_node(NodeKind::Declaration, AnyNode::NewtypeDecl(decl), span))
    }
}
