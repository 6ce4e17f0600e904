use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextSize};

use crate::syntax::{SyntaxError, kind::SyntaxKind, lexer::Lexer};

/// Where a run of loosely parsed expression tokens stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExprMode {
    /// Simple statements and `var`/`const` initializers: `;`, a terminating newline or a closer.
    Stmt,
    /// `if`/`for`/`switch`/`select` headers: the `{` that opens the body.
    Header,
    /// `case`/`default` clauses: the `:` before the clause body.
    Case,
    /// Inside parentheses, brackets or literal values: only the matching closer.
    Nested,
}

pub struct Parser<'a> {
    tokens: Vec<(SyntaxKind, &'a str)>,
    starts: Vec<TextSize>,
    pos: usize,
    last: Option<SyntaxKind>,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let tokens: Vec<_> = Lexer::new(input).collect();
        let mut starts = Vec::with_capacity(tokens.len() + 1);
        let mut offset = TextSize::from(0);
        for (_, text) in &tokens {
            starts.push(offset);
            offset += TextSize::of(*text);
        }
        starts.push(offset);
        Self {
            tokens,
            starts,
            pos: 0,
            last: None,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    pub fn parse(mut self) -> (GreenNode, Vec<SyntaxError>) {
        self.builder.start_node(SyntaxKind::SourceFile.into());
        self.parse_source_file();
        self.skip_trivia();
        self.builder.finish_node();
        (self.builder.finish(), self.errors)
    }

    // ── declarations ────────────────────────────────────────────────────

    fn parse_source_file(&mut self) {
        if self.at(SyntaxKind::KwPackage) {
            self.parse_package_clause();
        } else {
            self.error("expected package clause");
        }

        while let Some(kind) = self.peek() {
            match kind {
                SyntaxKind::KwImport => self.parse_import_decl(),
                SyntaxKind::KwType => self.parse_type_decl(),
                SyntaxKind::KwVar => self.parse_value_decl(SyntaxKind::VarDecl),
                SyntaxKind::KwConst => self.parse_value_decl(SyntaxKind::ConstDecl),
                SyntaxKind::KwFunc => self.parse_func_decl(),
                SyntaxKind::Semicolon => self.bump(),
                _ => {
                    self.error("expected declaration");
                    self.bump();
                },
            }
        }
    }

    fn parse_package_clause(&mut self) {
        self.start_node(SyntaxKind::PackageClause);
        self.bump(); // package keyword
        self.expect(SyntaxKind::Ident, "package name");
        self.finish_node();
    }

    fn parse_import_decl(&mut self) {
        self.start_node(SyntaxKind::ImportDecl);
        self.bump(); // import keyword
        if self.at(SyntaxKind::LParen) {
            self.consume_balanced(SyntaxKind::LParen, SyntaxKind::RParen);
        } else {
            if self.at(SyntaxKind::Ident) || self.at(SyntaxKind::Dot) {
                self.bump();
            }
            if self.at(SyntaxKind::String) || self.at(SyntaxKind::RawString) {
                self.bump();
            } else {
                self.error("expected import path");
            }
        }
        self.finish_node();
    }

    fn parse_type_decl(&mut self) {
        self.start_node(SyntaxKind::TypeDecl);
        self.bump(); // type keyword
        if self.at(SyntaxKind::LParen) {
            self.bump();
            self.parse_group(Self::parse_type_spec);
            self.expect(SyntaxKind::RParen, "`)`");
        } else {
            self.parse_type_spec();
        }
        self.finish_node();
    }

    fn parse_type_spec(&mut self) {
        self.start_node(SyntaxKind::TypeSpec);
        if self.expect(SyntaxKind::Ident, "type name") {
            if self.at(SyntaxKind::LBracket) && self.looks_like_type_params() {
                self.parse_type_param_list();
            }
            if self.at(SyntaxKind::Equal) {
                self.bump();
            }
            self.parse_type();
        }
        self.finish_node();
    }

    fn parse_value_decl(
        &mut self,
        kind: SyntaxKind,
    ) {
        self.start_node(kind);
        self.bump(); // var / const keyword
        if self.at(SyntaxKind::LParen) {
            self.bump();
            self.parse_group(Self::parse_value_spec);
            self.expect(SyntaxKind::RParen, "`)`");
        } else {
            self.parse_value_spec();
        }
        self.finish_node();
    }

    fn parse_value_spec(&mut self) {
        self.start_node(SyntaxKind::ValueSpec);
        if self.expect(SyntaxKind::Ident, "identifier") {
            while self.at(SyntaxKind::Comma) && self.nth(1) == Some(SyntaxKind::Ident) {
                self.bump();
                self.bump();
            }
            if !self.newline_before(0) && self.peek().is_some_and(SyntaxKind::starts_type) {
                self.parse_type();
            }
            if self.at(SyntaxKind::Equal) {
                self.bump();
                self.start_node(SyntaxKind::ExprList);
                self.parse_expr_seq(ExprMode::Stmt);
                self.finish_node();
            }
        }
        self.finish_node();
    }

    /// Parenthesized `type (...)`, `var (...)` and `const (...)` bodies.
    fn parse_group(
        &mut self,
        mut parse_spec: impl FnMut(&mut Self),
    ) {
        while let Some(kind) = self.peek() {
            match kind {
                SyntaxKind::RParen => break,
                SyntaxKind::Semicolon => self.bump(),
                _ => {
                    let before = self.pos;
                    parse_spec(self);
                    if self.pos == before {
                        self.bump();
                    }
                },
            }
        }
    }

    fn parse_func_decl(&mut self) {
        self.start_node(SyntaxKind::FuncDecl);
        self.bump(); // func keyword
        if self.at(SyntaxKind::LParen) {
            self.start_node(SyntaxKind::Receiver);
            self.parse_param_list();
            self.finish_node();
        }
        self.expect(SyntaxKind::Ident, "function name");
        if self.at(SyntaxKind::LBracket) {
            self.parse_type_param_list();
        }
        self.parse_signature();
        if self.at(SyntaxKind::LBrace) {
            self.parse_block();
        }
        self.finish_node();
    }

    // ── signatures ──────────────────────────────────────────────────────

    fn parse_signature(&mut self) {
        if self.at(SyntaxKind::LParen) {
            self.parse_param_list();
        } else {
            self.error("expected parameter list");
            return;
        }

        if self.newline_before(0) {
            return;
        }
        if self.at(SyntaxKind::LParen) {
            self.start_node(SyntaxKind::Results);
            self.parse_param_list();
            self.finish_node();
        } else if self.peek().is_some_and(SyntaxKind::starts_type) {
            self.start_node(SyntaxKind::Results);
            self.start_node(SyntaxKind::Field);
            self.parse_type();
            self.finish_node();
            self.finish_node();
        }
    }

    fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::ParamList);
        let named = self.params_are_named();
        self.bump(); // (
        while !self.is_eof() && !self.at(SyntaxKind::RParen) {
            let before = self.pos;
            if named {
                self.parse_named_field_group();
            } else {
                self.start_node(SyntaxKind::Field);
                self.parse_param_type();
                self.finish_node();
            }
            if self.at(SyntaxKind::Comma) {
                self.bump();
            } else if self.pos == before {
                self.error("expected parameter");
                self.bump();
            } else if !self.at(SyntaxKind::RParen) {
                break;
            }
        }
        self.expect(SyntaxKind::RParen, "`)`");
        self.finish_node();
    }

    fn parse_type_param_list(&mut self) {
        self.start_node(SyntaxKind::TypeParamList);
        self.bump(); // [
        while !self.is_eof() && !self.at(SyntaxKind::RBracket) {
            let before = self.pos;
            self.parse_named_field_group();
            if self.at(SyntaxKind::Comma) {
                self.bump();
            } else if self.pos == before {
                self.error("expected type parameter");
                self.bump();
            } else if !self.at(SyntaxKind::RBracket) {
                break;
            }
        }
        self.expect(SyntaxKind::RBracket, "`]`");
        self.finish_node();
    }

    /// `a, b T` inside a parameter or type parameter list.
    fn parse_named_field_group(&mut self) {
        self.start_node(SyntaxKind::Field);
        if self.expect(SyntaxKind::Ident, "parameter name") {
            while self.at(SyntaxKind::Comma) && self.nth(1) == Some(SyntaxKind::Ident) {
                self.bump();
                self.bump();
            }
            if !self.at(SyntaxKind::Comma)
                && !self.at(SyntaxKind::RParen)
                && !self.at(SyntaxKind::RBracket)
            {
                self.parse_param_type();
            }
        }
        self.finish_node();
    }

    fn parse_param_type(&mut self) {
        if self.at(SyntaxKind::Ellipsis) {
            self.start_node(SyntaxKind::VariadicType);
            self.bump();
            self.parse_type();
            self.finish_node();
        } else {
            self.parse_type_elem();
        }
    }

    // ── types ───────────────────────────────────────────────────────────

    fn parse_type(&mut self) -> bool {
        let Some(kind) = self.peek() else {
            self.error("expected type");
            return false;
        };

        match kind {
            SyntaxKind::Ident => self.parse_type_name(),
            SyntaxKind::Star => {
                self.start_node(SyntaxKind::PointerType);
                self.bump();
                self.parse_type();
                self.finish_node();
            },
            SyntaxKind::LBracket => self.parse_array_type(),
            SyntaxKind::LParen => {
                self.start_node(SyntaxKind::ParenType);
                self.bump();
                self.parse_type();
                self.expect(SyntaxKind::RParen, "`)`");
                self.finish_node();
            },
            SyntaxKind::KwStruct => self.parse_struct_type(),
            SyntaxKind::KwMap => {
                self.start_node(SyntaxKind::MapType);
                self.bump();
                self.expect(SyntaxKind::LBracket, "`[`");
                self.parse_type();
                self.expect(SyntaxKind::RBracket, "`]`");
                self.parse_type();
                self.finish_node();
            },
            SyntaxKind::KwChan => {
                self.start_node(SyntaxKind::ChanType);
                self.bump();
                if self.at(SyntaxKind::Arrow) {
                    self.bump();
                }
                self.parse_type();
                self.finish_node();
            },
            SyntaxKind::Arrow => {
                self.start_node(SyntaxKind::ChanType);
                self.bump();
                self.expect(SyntaxKind::KwChan, "`chan`");
                self.parse_type();
                self.finish_node();
            },
            SyntaxKind::KwFunc => {
                self.start_node(SyntaxKind::FuncType);
                self.bump();
                self.parse_signature();
                self.finish_node();
            },
            SyntaxKind::KwInterface => self.parse_interface_type(),
            _ => {
                self.error("expected type");
                return false;
            },
        }
        true
    }

    fn parse_type_name(&mut self) {
        self.start_node(SyntaxKind::TypeName);
        self.bump();
        if self.at(SyntaxKind::Dot) && self.nth(1) == Some(SyntaxKind::Ident) {
            self.bump();
            self.bump();
        }
        if self.at(SyntaxKind::LBracket) && !self.newline_before(0) {
            self.start_node(SyntaxKind::TypeArgList);
            self.bump();
            while !self.is_eof() && !self.at(SyntaxKind::RBracket) {
                if !self.parse_type() {
                    break;
                }
                if self.at(SyntaxKind::Comma) {
                    self.bump();
                } else {
                    break;
                }
            }
            self.expect(SyntaxKind::RBracket, "`]`");
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_array_type(&mut self) {
        self.start_node(SyntaxKind::ArrayType);
        self.bump(); // [
        if !self.at(SyntaxKind::RBracket) {
            self.start_node(SyntaxKind::ArrayLen);
            if self.at(SyntaxKind::Ellipsis) {
                self.bump();
            } else {
                self.parse_expr_seq(ExprMode::Nested);
            }
            self.finish_node();
        }
        self.expect(SyntaxKind::RBracket, "`]`");
        self.parse_type();
        self.finish_node();
    }

    fn parse_struct_type(&mut self) {
        self.start_node(SyntaxKind::StructType);
        self.bump(); // struct keyword
        if self.expect(SyntaxKind::LBrace, "`{`") {
            while let Some(kind) = self.peek() {
                match kind {
                    SyntaxKind::RBrace => break,
                    SyntaxKind::Semicolon => self.bump(),
                    _ => {
                        let before = self.pos;
                        self.parse_field_decl();
                        if self.pos == before {
                            self.bump();
                        }
                    },
                }
            }
            self.expect(SyntaxKind::RBrace, "`}`");
        }
        self.finish_node();
    }

    fn parse_field_decl(&mut self) {
        self.start_node(SyntaxKind::Field);
        if self.at(SyntaxKind::Ident) && self.field_has_names() {
            self.bump();
            while self.at(SyntaxKind::Comma) && self.nth(1) == Some(SyntaxKind::Ident) {
                self.bump();
                self.bump();
            }
            self.parse_type();
        } else if self.peek().is_some_and(SyntaxKind::starts_type) {
            self.parse_type();
        } else {
            self.error("expected field declaration");
        }

        if (self.at(SyntaxKind::String) || self.at(SyntaxKind::RawString)) && !self.newline_before(0) {
            self.start_node(SyntaxKind::Tag);
            self.bump();
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_interface_type(&mut self) {
        self.start_node(SyntaxKind::InterfaceType);
        self.bump(); // interface keyword
        if self.expect(SyntaxKind::LBrace, "`{`") {
            while let Some(kind) = self.peek() {
                match kind {
                    SyntaxKind::RBrace => break,
                    SyntaxKind::Semicolon => self.bump(),
                    SyntaxKind::Ident
                        if self.nth(1) == Some(SyntaxKind::LParen) && !self.newline_before(1) =>
                    {
                        self.start_node(SyntaxKind::MethodElem);
                        self.bump();
                        self.parse_signature();
                        self.finish_node();
                    },
                    _ => {
                        let before = self.pos;
                        self.parse_type_elem();
                        if self.pos == before {
                            self.bump();
                        }
                    },
                }
            }
            self.expect(SyntaxKind::RBrace, "`}`");
        }
        self.finish_node();
    }

    /// A type, or a constraint union such as `~int | ~string`.
    fn parse_type_elem(&mut self) {
        let checkpoint = self.checkpoint();
        let mut union = false;
        loop {
            if self.at(SyntaxKind::Tilde) {
                union = true;
                self.bump();
            }
            if !self.parse_type() {
                break;
            }
            if self.at(SyntaxKind::Pipe) {
                union = true;
                self.bump();
                continue;
            }
            break;
        }
        if union {
            self.builder.start_node_at(checkpoint, SyntaxKind::TypeElem.into());
            self.finish_node();
        }
    }

    // ── statements ──────────────────────────────────────────────────────

    fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);
        self.bump(); // {
        while !self.is_eof() && !self.at(SyntaxKind::RBrace) {
            let before = self.pos;
            self.parse_stmt();
            if self.pos == before {
                self.error("unexpected token in block");
                self.bump();
            }
        }
        self.expect(SyntaxKind::RBrace, "`}`");
        self.finish_node();
    }

    fn parse_stmt(&mut self) {
        let Some(kind) = self.peek() else {
            return;
        };

        match kind {
            SyntaxKind::Semicolon => self.bump(),
            SyntaxKind::KwVar => self.parse_value_decl(SyntaxKind::VarDecl),
            SyntaxKind::KwConst => self.parse_value_decl(SyntaxKind::ConstDecl),
            SyntaxKind::KwType => self.parse_type_decl(),
            SyntaxKind::LBrace => self.parse_block(),
            SyntaxKind::KwIf => self.parse_if_stmt(),
            SyntaxKind::KwFor | SyntaxKind::KwSwitch | SyntaxKind::KwSelect => {
                self.start_node(SyntaxKind::Stmt);
                self.bump();
                self.parse_expr_seq(ExprMode::Header);
                if self.at(SyntaxKind::LBrace) {
                    self.parse_block();
                } else {
                    self.error("expected `{`");
                }
                self.finish_node();
            },
            SyntaxKind::KwCase | SyntaxKind::KwDefault => {
                self.start_node(SyntaxKind::Stmt);
                self.bump();
                self.parse_expr_seq(ExprMode::Case);
                self.expect(SyntaxKind::Colon, "`:`");
                self.finish_node();
            },
            SyntaxKind::Ident if self.nth(1) == Some(SyntaxKind::Colon) => {
                // label
                self.start_node(SyntaxKind::Stmt);
                self.bump();
                self.bump();
                self.finish_node();
            },
            _ => {
                self.start_node(SyntaxKind::Stmt);
                self.parse_expr_seq(ExprMode::Stmt);
                self.finish_node();
            },
        }
    }

    fn parse_if_stmt(&mut self) {
        self.start_node(SyntaxKind::Stmt);
        self.bump(); // if keyword
        self.parse_expr_seq(ExprMode::Header);
        if self.at(SyntaxKind::LBrace) {
            self.parse_block();
        } else {
            self.error("expected `{`");
        }
        if self.at(SyntaxKind::KwElse) {
            self.bump();
            if self.at(SyntaxKind::KwIf) {
                self.parse_if_stmt();
            } else if self.at(SyntaxKind::LBrace) {
                self.parse_block();
            } else {
                self.error("expected `if` or `{` after `else`");
            }
        }
        self.finish_node();
    }

    // ── expressions ─────────────────────────────────────────────────────

    /// Consumes expression tokens without building an expression tree. Only the
    /// constructs that can carry struct types get their own nodes: composite
    /// literals, function literals and type operands.
    fn parse_expr_seq(
        &mut self,
        mode: ExprMode,
    ) {
        let mut prev: Option<SyntaxKind> = None;
        while let Some(kind) = self.peek() {
            if mode == ExprMode::Stmt && self.newline_before(0) && prev.is_some_and(SyntaxKind::ends_statement_at_newline)
            {
                break;
            }

            match kind {
                SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace => break,
                SyntaxKind::Semicolon if matches!(mode, ExprMode::Stmt | ExprMode::Case) => break,
                SyntaxKind::Colon if mode == ExprMode::Case => break,
                SyntaxKind::LBrace if mode == ExprMode::Header => break,
                SyntaxKind::LBrace => self.parse_literal_value(),
                SyntaxKind::LParen => {
                    self.start_node(SyntaxKind::Expr);
                    self.bump();
                    self.parse_expr_seq(ExprMode::Nested);
                    self.expect(SyntaxKind::RParen, "`)`");
                    self.finish_node();
                },
                SyntaxKind::LBracket if prev.is_some_and(is_operand_end) => {
                    self.start_node(SyntaxKind::Expr);
                    self.bump();
                    self.parse_expr_seq(ExprMode::Nested);
                    self.expect(SyntaxKind::RBracket, "`]`");
                    self.finish_node();
                },
                SyntaxKind::LBracket | SyntaxKind::KwStruct | SyntaxKind::KwMap => self.parse_type_operand(),
                SyntaxKind::KwChan | SyntaxKind::KwInterface => {
                    self.parse_type();
                },
                SyntaxKind::KwFunc => self.parse_func_operand(),
                _ => self.bump(),
            }
            prev = self.last;
        }
    }

    /// `[]T`, `struct{...}` or `map[K]V`, optionally followed by a literal value.
    fn parse_type_operand(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_type();
        if self.at(SyntaxKind::LBrace) {
            self.builder.start_node_at(checkpoint, SyntaxKind::CompositeLit.into());
            self.parse_literal_value();
            self.finish_node();
        }
    }

    fn parse_func_operand(&mut self) {
        let checkpoint = self.checkpoint();
        self.start_node(SyntaxKind::FuncType);
        self.bump(); // func keyword
        self.parse_signature();
        self.finish_node();
        if self.at(SyntaxKind::LBrace) {
            self.builder.start_node_at(checkpoint, SyntaxKind::FuncLit.into());
            self.parse_block();
            self.finish_node();
        }
    }

    fn parse_literal_value(&mut self) {
        self.start_node(SyntaxKind::LiteralValue);
        self.bump(); // {
        while !self.is_eof() {
            self.parse_expr_seq(ExprMode::Nested);
            match self.peek() {
                Some(SyntaxKind::RBrace) | None => break,
                Some(_) => {
                    self.error("unbalanced delimiter in literal");
                    self.bump();
                },
            }
        }
        self.expect(SyntaxKind::RBrace, "`}`");
        self.finish_node();
    }

    // ── lookahead heuristics ────────────────────────────────────────────

    /// `type T[P any]` versus `type A [N]int`.
    fn looks_like_type_params(&self) -> bool {
        self.nth(1) == Some(SyntaxKind::Ident)
            && matches!(
                self.nth(2),
                Some(
                    SyntaxKind::Ident
                        | SyntaxKind::Comma
                        | SyntaxKind::Tilde
                        | SyntaxKind::KwInterface
                        | SyntaxKind::KwMap
                        | SyntaxKind::KwChan
                        | SyntaxKind::KwFunc
                        | SyntaxKind::KwStruct
                        | SyntaxKind::LBracket
                )
            )
    }

    /// Decides whether the struct field at the cursor starts with field names
    /// (`A, B int`) or is an embedded type (`T`, `pkg.T`, `List[T]`).
    fn field_has_names(&self) -> bool {
        if self.newline_before(1) {
            return false;
        }
        match self.nth(1) {
            Some(SyntaxKind::Comma) => true,
            Some(SyntaxKind::Dot | SyntaxKind::Semicolon | SyntaxKind::RBrace | SyntaxKind::String)
            | Some(SyntaxKind::RawString)
            | None => false,
            Some(SyntaxKind::LBracket) => {
                let Some(open) = self.nth_index(1) else {
                    return false;
                };
                self.bracket_starts_array_type(open)
            },
            Some(kind) => kind.starts_type(),
        }
    }

    /// Whether the parameter list at the cursor declares parameter names.
    fn params_are_named(&self) -> bool {
        let Some(open) = self.nth_index(0) else {
            return false;
        };
        let Some(close) = self.matching_close(open) else {
            return false;
        };

        let mut entry_start = true;
        let mut idx = self.next_significant(open + 1);
        while let Some(i) = idx {
            if i >= close {
                break;
            }
            let kind = self.tokens[i].0;
            if entry_start && kind == SyntaxKind::Ident {
                if let Some(next) = self.next_significant(i + 1)
                    && next < close
                {
                    let next_kind = self.tokens[next].0;
                    let named = match next_kind {
                        SyntaxKind::Comma | SyntaxKind::Dot => false,
                        SyntaxKind::Ellipsis => true,
                        SyntaxKind::LBracket => self.bracket_starts_array_type(next),
                        other => other.starts_type(),
                    };
                    if named {
                        return true;
                    }
                }
            }
            entry_start = kind == SyntaxKind::Comma;
            idx = match kind {
                SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => {
                    self.matching_close(i).and_then(|end| self.next_significant(end + 1))
                },
                _ => self.next_significant(i + 1),
            };
        }
        false
    }

    /// `[]T` or `[N]T` (an array type follows a name) rather than `Name[T]`.
    fn bracket_starts_array_type(
        &self,
        open: usize,
    ) -> bool {
        let Some(first) = self.next_significant(open + 1) else {
            return false;
        };
        if self.tokens[first].0 == SyntaxKind::RBracket {
            return true;
        }
        let Some(close) = self.matching_close(open) else {
            return false;
        };
        let Some(after) = self.next_significant(close + 1) else {
            return false;
        };
        !self.newline_between(close, after) && self.tokens[after].0.starts_type()
    }

    // ── token cursor ────────────────────────────────────────────────────

    fn start_node(
        &mut self,
        kind: SyntaxKind,
    ) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia();
        self.builder.checkpoint()
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].0.is_trivia() {
            self.bump_raw();
        }
    }

    /// Attaches pending trivia to the current node, then consumes one
    /// significant token.
    fn bump(&mut self) {
        self.skip_trivia();
        if self.pos < self.tokens.len() {
            if self.tokens[self.pos].0 == SyntaxKind::Error {
                self.error("unexpected character");
            }
            self.last = Some(self.tokens[self.pos].0);
            self.bump_raw();
        }
    }

    fn bump_raw(&mut self) {
        let (kind, text) = self.tokens[self.pos];
        self.builder.token(kind.into(), text);
        self.pos += 1;
    }

    fn expect(
        &mut self,
        kind: SyntaxKind,
        what: &str,
    ) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            self.error(&format!("expected {what}"));
            false
        }
    }

    fn consume_balanced(
        &mut self,
        open: SyntaxKind,
        close: SyntaxKind,
    ) {
        let mut depth = 0usize;
        while let Some(kind) = self.peek() {
            self.bump();
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
        }
        self.error("unclosed delimiter");
    }

    fn error(
        &mut self,
        message: &str,
    ) {
        let offset = self.nth_index(0).map_or(self.starts[self.tokens.len()], |idx| self.starts[idx]);
        self.errors.push(SyntaxError {
            message: message.to_string(),
            offset,
        });
    }

    fn is_eof(&self) -> bool {
        self.nth_index(0).is_none()
    }

    fn at(
        &self,
        kind: SyntaxKind,
    ) -> bool {
        self.peek() == Some(kind)
    }

    fn peek(&self) -> Option<SyntaxKind> {
        self.nth(0)
    }

    fn nth(
        &self,
        nth: usize,
    ) -> Option<SyntaxKind> {
        self.nth_index(nth).map(|idx| self.tokens[idx].0)
    }

    fn nth_index(
        &self,
        nth: usize,
    ) -> Option<usize> {
        let mut idx = self.next_significant(self.pos)?;
        for _ in 0..nth {
            idx = self.next_significant(idx + 1)?;
        }
        Some(idx)
    }

    fn next_significant(
        &self,
        from: usize,
    ) -> Option<usize> {
        (from..self.tokens.len()).find(|&idx| !self.tokens[idx].0.is_trivia())
    }

    /// Whether a line break separates the (nth - 1)th and nth significant tokens.
    fn newline_before(
        &self,
        nth: usize,
    ) -> bool {
        let Some(target) = self.nth_index(nth) else {
            return false;
        };
        let from = if nth == 0 {
            self.pos
        } else {
            match self.nth_index(nth - 1) {
                Some(idx) => idx + 1,
                None => return false,
            }
        };
        self.tokens[from..target].iter().any(|(kind, text)| kind.is_trivia() && text.contains('\n'))
    }

    fn newline_between(
        &self,
        from: usize,
        to: usize,
    ) -> bool {
        self.tokens[from + 1..to].iter().any(|(kind, text)| kind.is_trivia() && text.contains('\n'))
    }

    fn matching_close(
        &self,
        open: usize,
    ) -> Option<usize> {
        let mut depth = 0usize;
        for idx in open..self.tokens.len() {
            match self.tokens[idx].0 {
                SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => depth += 1,
                SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(idx);
                    }
                },
                _ => {},
            }
        }
        None
    }
}

fn is_operand_end(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Ident
            | SyntaxKind::String
            | SyntaxKind::RawString
            | SyntaxKind::RParen
            | SyntaxKind::RBracket
            | SyntaxKind::RBrace
    )
}

#[cfg(test)]
#[path = "../../tests/src/syntax/cst_parser_tests.rs"]
mod tests;
