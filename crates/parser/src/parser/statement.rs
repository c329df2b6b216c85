use super::*;
use crate::token::Word;
use global_common::Spanned;

mod module_item;

enum ForHead {
    For {
        init: Option<VarDeclOrExpr>,
        test: Option<Box<Expr>>,
        update: Option<Box<Expr>>,
    },
    ForIn {
        left: VarDeclOrPat,
        right: Box<Expr>,
    },
    ForOf {
        left: VarDeclOrPat,
        right: Box<Expr>,
    },
}

impl<'a> Parser<'a> {
    /// Module items up to `end`, which is consumed, or to the end of input
    /// when `end` is `None`.
    pub(super) fn parse_block_body(&mut self, end: Option<&Token>) -> PResult<Vec<ModuleItem>> {
        let mut items = vec![];
        loop {
            if eof!(self) {
                if end.is_some() {
                    unexpected!(self, "`}`")
                }
                break;
            }
            if let Some(end) = end {
                if self.input.is(end) {
                    self.input.bump();
                    break;
                }
            }

            items.push(self.parse_module_item()?);
        }
        Ok(items)
    }

    fn parse_module_item(&mut self) -> PResult<ModuleItem> {
        let start = self.input.cur_pos();

        if is!(self, "import")
            && !self.input.peeked_is(&tok!('('))
            && !self.input.peeked_is(&tok!('.'))
        {
            return self.parse_import(start).map(ModuleItem::from);
        }
        if is!(self, "export") {
            return self.parse_export(start).map(ModuleItem::from);
        }
        if self.syntax.flow
            && self.input.is_word("declare")
            && self.input.peeked_is(&tok!("export"))
            && !self.input.has_linebreak_between_cur_and_peeked()
        {
            return self.parse_declare_export(start).map(ModuleItem::from);
        }

        let stmt = self.parse_stmt_list_item()?;
        if self.ctx().in_declare_module && !matches!(stmt, Stmt::Decl(..)) {
            syntax_error!(self, stmt.span(), SyntaxError::InvalidDeclare)
        }
        Ok(ModuleItem::Stmt(stmt))
    }

    /// Statements of a block, up to but excluding the closing `}`.
    pub(super) fn parse_stmts(&mut self) -> PResult<Vec<Stmt>> {
        let mut stmts = vec![];
        while !eof!(self) && !is!(self, '}') {
            stmts.push(self.parse_stmt_list_item()?);
        }
        Ok(stmts)
    }

    /// A statement or a declaration.
    fn parse_stmt_list_item(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        if self.is_flow_decl_start() {
            return self.parse_flow_decl().map(Stmt::Decl);
        }

        match self.input.cur() {
            Some(&tok!("const")) => {
                let v = self.parse_var_stmt(false)?;
                return Ok(Stmt::Decl(Decl::Var(v)));
            }
            Some(&tok!("class")) => return self.parse_class_decl(start).map(Stmt::Decl),
            Some(&tok!('@')) => syntax_error!(self, SyntaxError::InvalidLeadingDecorator),
            _ => {}
        }

        // `let` is an identifier unless a binding follows it.
        if self.input.is_word("let")
            && matches!(
                self.input.peek(),
                Some(Token::Word(Word::Ident(..))) | Some(&tok!('[')) | Some(&tok!('{'))
            )
        {
            let v = self.parse_var_stmt(false)?;
            return Ok(Stmt::Decl(Decl::Var(v)));
        }

        self.parse_stmt()
    }

    /// Parse a statement, which is not a lexical declaration.
    fn parse_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        // Most types of statements are recognized by the keyword they
        // start with.
        match self.input.cur() {
            Some(&tok!("break")) | Some(&tok!("continue")) => {
                return self.parse_break_continue_stmt(start)
            }
            Some(&tok!("debugger")) => {
                self.input.bump();
                expect!(self, ';');
                return Ok(Stmt::Debugger(DebuggerStmt {
                    span: span!(self, start),
                }));
            }
            Some(&tok!("do")) => return self.parse_do_stmt(),
            Some(&tok!("for")) => return self.parse_for_stmt(),
            Some(&tok!("function")) => return self.parse_fn_decl(start, false).map(Stmt::Decl),
            Some(&tok!("if")) => return self.parse_if_stmt(),
            Some(&tok!("return")) => return self.parse_return_stmt(),
            Some(&tok!("switch")) => return self.parse_switch_stmt(),
            Some(&tok!("throw")) => return self.parse_throw_stmt(),
            Some(&tok!("try")) => return self.parse_try_stmt(),
            Some(&tok!("var")) => {
                let v = self.parse_var_stmt(false)?;
                return Ok(Stmt::Decl(Decl::Var(v)));
            }
            Some(&tok!("while")) => return self.parse_while_stmt(),
            Some(&tok!("with")) => return self.parse_with_stmt(),
            Some(&tok!('{')) => return self.parse_block().map(Stmt::Block),
            Some(&tok!(';')) => {
                self.input.bump();
                return Ok(Stmt::Empty(EmptyStmt {
                    span: span!(self, start),
                }));
            }
            _ => {}
        }

        // async function foo() {}
        if self.input.is_word("async")
            && self.input.peeked_is(&tok!("function"))
            && !self.input.has_linebreak_between_cur_and_peeked()
        {
            self.input.bump();
            return self.parse_fn_decl(start, true).map(Stmt::Decl);
        }

        // foo: for (;;) {}
        if is!(self, BindingIdent) && self.input.peeked_is(&tok!(':')) {
            let label = self.parse_ident()?;
            self.input.bump();
            return self.parse_labelled_stmt(start, label);
        }

        // If the statement does not start with a statement keyword or a
        // brace, it's an ExpressionStatement.
        let ctx = Context {
            no_in: false,
            ..self.ctx()
        };
        let expr = self.with_ctx(ctx).parse_expr()?;
        expect!(self, ';');

        Ok(Stmt::Expr(ExprStmt {
            span: span!(self, start),
            expr,
        }))
    }

    fn parse_labelled_stmt(&mut self, start: BytePos, label: Ident) -> PResult<Stmt> {
        let body = if is!(self, "function") {
            let fn_start = self.input.cur_pos();
            Stmt::Decl(self.parse_fn_decl(fn_start, false)?)
        } else {
            self.parse_stmt()?
        };

        Ok(Stmt::Labeled(LabeledStmt {
            span: span!(self, start),
            label,
            body: Box::new(body),
        }))
    }

    fn parse_break_continue_stmt(&mut self, start: BytePos) -> PResult<Stmt> {
        let is_break = self.input.is(&tok!("break"));
        self.input.bump();

        let label = if is!(self, ';') {
            None
        } else {
            Some(self.parse_ident()?)
        };
        expect!(self, ';');

        let span = span!(self, start);
        Ok(if is_break {
            Stmt::Break(BreakStmt { span, label })
        } else {
            Stmt::Continue(ContinueStmt { span, label })
        })
    }

    /// `var`, `let` or `const` declarations. Inside a `for` head the `;` is
    /// left to the caller and initializers are optional.
    fn parse_var_stmt(&mut self, for_loop: bool) -> PResult<VarDecl> {
        let start = self.input.cur_pos();
        let kind = match self.input.bump() {
            tok!("var") => VarDeclKind::Var,
            tok!("const") => VarDeclKind::Const,
            _ => VarDeclKind::Let,
        };

        let mut decls = vec![self.parse_var_declarator(kind, for_loop)?];
        while eat!(self, ',') {
            decls.push(self.parse_var_declarator(kind, for_loop)?);
        }

        if !for_loop {
            expect!(self, ';');
        }

        Ok(VarDecl {
            span: span!(self, start),
            kind,
            declare: false,
            decls,
        })
    }

    fn parse_var_declarator(&mut self, kind: VarDeclKind, for_loop: bool) -> PResult<VarDeclarator> {
        let start = self.input.cur_pos();

        let name = self.parse_binding_pat_or_ident()?;
        let name = self.parse_pat_annotation(start, name, false)?;

        let init = if eat!(self, '=') {
            Some(self.parse_assignment_expr()?)
        } else {
            // Destructuring and `const` need an initializer, except in the
            // head of `for (const x of xs)`.
            let needs_init = kind == VarDeclKind::Const || !matches!(name, Pat::Ident(..));
            if needs_init && !for_loop {
                syntax_error!(self, span!(self, start), SyntaxError::MissingDeclarator)
            }
            None
        };

        Ok(VarDeclarator {
            span: span!(self, start),
            name,
            init,
        })
    }

    fn parse_header_expr(&mut self) -> PResult<Box<Expr>> {
        expect!(self, '(');
        let ctx = self.bracketed_ctx();
        let val = self.with_ctx(ctx).parse_expr()?;
        expect!(self, ')');
        Ok(val)
    }

    fn parse_do_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();
        expect!(self, "do");

        let body = self.parse_stmt().map(Box::new)?;

        expect!(self, "while");
        let test = self.parse_header_expr()?;
        self.input.eat(&tok!(';'));

        Ok(Stmt::DoWhile(DoWhileStmt {
            span: span!(self, start),
            test,
            body,
        }))
    }

    fn parse_while_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();
        expect!(self, "while");

        let test = self.parse_header_expr()?;
        let body = self.parse_stmt().map(Box::new)?;

        Ok(Stmt::While(WhileStmt {
            span: span!(self, start),
            test,
            body,
        }))
    }

    fn parse_with_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();
        expect!(self, "with");

        let obj = self.parse_header_expr()?;
        let body = self.parse_stmt().map(Box::new)?;

        Ok(Stmt::With(WithStmt {
            span: span!(self, start),
            obj,
            body,
        }))
    }

    // Disambiguating between a `for` and a `for`/`in` or `for`/`of`
    // loop is non-trivial. Basically, we have to parse the init `var`
    // statement or expression, disallowing the `in` operator, and then check
    // whether the next token is `in` or `of`. When there is no init
    // part (semicolon immediately after the opening parenthesis), it
    // is a regular `for` loop.
    fn parse_for_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();
        expect!(self, "for");

        let await_start = self.input.cur_pos();
        let await_token = if self.ctx().in_async && self.eat_word("await") {
            Some(span!(self, await_start))
        } else {
            None
        };

        expect!(self, '(');
        let head = {
            let ctx = self.bracketed_ctx();
            self.with_ctx(ctx).parse_for_head()?
        };
        expect!(self, ')');

        let body = self.parse_stmt().map(Box::new)?;

        let span = span!(self, start);
        Ok(match head {
            ForHead::For { init, test, update } => {
                if let Some(await_token) = await_token {
                    syntax_error!(
                        self,
                        await_token,
                        SyntaxError::Unexpected {
                            got: "await".into(),
                            expected: "`(`",
                        }
                    )
                }
                Stmt::For(ForStmt {
                    span,
                    init,
                    test,
                    update,
                    body,
                })
            }
            ForHead::ForIn { left, right } => Stmt::ForIn(ForInStmt {
                span,
                left,
                right,
                body,
            }),
            ForHead::ForOf { left, right } => Stmt::ForOf(ForOfStmt {
                span,
                await_token,
                left,
                right,
                body,
            }),
        })
    }

    fn parse_for_head(&mut self) -> PResult<ForHead> {
        let is_let_decl = self.input.is_word("let")
            && matches!(
                self.input.peek(),
                Some(Token::Word(Word::Ident(..))) | Some(&tok!('[')) | Some(&tok!('{'))
            );

        if is!(self, "var") || is!(self, "const") || is_let_decl {
            let ctx = Context {
                no_in: true,
                ..self.ctx()
            };
            let decl = self.with_ctx(ctx).parse_var_stmt(true)?;

            if self.input.is_word("of") || is!(self, "in") {
                return self.parse_for_each_head(VarDeclOrPat::VarDecl(decl));
            }

            for d in &decl.decls {
                if d.init.is_none() {
                    syntax_error!(self, d.span, SyntaxError::MissingDeclarator)
                }
            }
            expect_exact!(self, ';');
            return self.parse_normal_for_head(Some(VarDeclOrExpr::VarDecl(decl)));
        }

        if self.input.eat(&tok!(';')) {
            return self.parse_normal_for_head(None);
        }

        let init = {
            let ctx = Context {
                no_in: true,
                ..self.ctx()
            };
            self.with_ctx(ctx).parse_expr()?
        };

        // for (a of b)
        if self.input.is_word("of") || is!(self, "in") {
            let pat = self.reparse_expr_as_pat(init)?;
            return self.parse_for_each_head(VarDeclOrPat::Pat(*pat));
        }

        expect_exact!(self, ';');
        self.parse_normal_for_head(Some(VarDeclOrExpr::Expr(init)))
    }

    fn parse_for_each_head(&mut self, left: VarDeclOrPat) -> PResult<ForHead> {
        let of = self.input.is_word("of");
        self.input.bump();
        if of {
            let right = self.parse_assignment_expr()?;
            Ok(ForHead::ForOf { left, right })
        } else {
            let right = self.parse_expr()?;
            Ok(ForHead::ForIn { left, right })
        }
    }

    fn parse_normal_for_head(&mut self, init: Option<VarDeclOrExpr>) -> PResult<ForHead> {
        let test = if self.input.eat(&tok!(';')) {
            None
        } else {
            let test = self.parse_expr().map(Some)?;
            expect_exact!(self, ';');
            test
        };

        let update = if self.input.is(&tok!(')')) {
            None
        } else {
            self.parse_expr().map(Some)?
        };

        Ok(ForHead::For { init, test, update })
    }

    fn parse_if_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();
        expect!(self, "if");

        let test = self.parse_header_expr()?;
        let cons = self.parse_stmt().map(Box::new)?;
        let alt = if eat!(self, "else") {
            Some(self.parse_stmt().map(Box::new)?)
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            span: span!(self, start),
            test,
            cons,
            alt,
        }))
    }

    fn parse_return_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();
        expect!(self, "return");

        if !self.ctx().in_function {
            syntax_error!(self, span!(self, start), SyntaxError::ReturnNotAllowed)
        }

        // In `return` (and `break`/`continue`), the keywords with
        // optional arguments, we eagerly look for a semicolon or the
        // possibility to insert one.
        let arg = if is!(self, ';') {
            None
        } else {
            Some(self.parse_expr()?)
        };
        expect!(self, ';');

        Ok(Stmt::Return(ReturnStmt {
            span: span!(self, start),
            arg,
        }))
    }

    fn parse_switch_stmt(&mut self) -> PResult<Stmt> {
        let switch_start = self.input.cur_pos();
        expect!(self, "switch");

        let discriminant = self.parse_header_expr()?;
        expect!(self, '{');

        let mut cases = vec![];
        while is!(self, "case") || is!(self, "default") {
            let case_start = self.input.cur_pos();
            let is_case = self.input.is(&tok!("case"));
            self.input.bump();

            let test = if is_case {
                let ctx = self.bracketed_ctx();
                Some(self.with_ctx(ctx).parse_expr()?)
            } else {
                None
            };
            expect!(self, ':');

            let mut cons = vec![];
            while !eof!(self) && !is!(self, "case") && !is!(self, "default") && !is!(self, '}') {
                cons.push(self.parse_stmt_list_item()?);
            }

            cases.push(SwitchCase {
                span: span!(self, case_start),
                test,
                cons,
            });
        }
        expect!(self, '}');

        Ok(Stmt::Switch(SwitchStmt {
            span: span!(self, switch_start),
            discriminant,
            cases,
        }))
    }

    fn parse_throw_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();
        expect!(self, "throw");

        if self.input.had_line_break_before_cur() {
            syntax_error!(self, SyntaxError::LineBreakInThrow)
        }

        let arg = self.parse_expr()?;
        expect!(self, ';');

        Ok(Stmt::Throw(ThrowStmt {
            span: span!(self, start),
            arg,
        }))
    }

    fn parse_try_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();
        expect!(self, "try");

        let block = self.parse_block()?;
        let handler = self.parse_catch_clause()?;
        let finalizer = if eat!(self, "finally") {
            Some(self.parse_block()?)
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            unexpected!(self, "`catch` or `finally`")
        }

        Ok(Stmt::Try(TryStmt {
            span: span!(self, start),
            block,
            handler,
            finalizer,
        }))
    }

    fn parse_catch_clause(&mut self) -> PResult<Option<CatchClause>> {
        let start = self.input.cur_pos();
        if !eat!(self, "catch") {
            return Ok(None);
        }

        let param = if eat!(self, '(') {
            let param_start = self.input.cur_pos();
            let pat = self.parse_binding_pat_or_ident()?;
            let pat = self.parse_pat_annotation(param_start, pat, false)?;
            expect!(self, ')');
            Some(pat)
        } else {
            None
        };
        let body = self.parse_block()?;

        Ok(Some(CatchClause {
            span: span!(self, start),
            param,
            body,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{parse_error, parse_module, stmt, text};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn for_heads() {
        assert!(matches!(stmt("for (;;) {}"), Stmt::For(..)));
        assert!(matches!(
            stmt("for (let i = 0, n = a.length; i < n; i++) {}"),
            Stmt::For(..)
        ));
        assert!(matches!(stmt("for (const k in obj) {}"), Stmt::ForIn(..)));
        assert!(matches!(stmt("for (const [k, v] of m) {}"), Stmt::ForOf(..)));
        assert!(matches!(stmt("for (x.y of z) ;"), Stmt::ForOf(..)));
        match stmt("async function f() { for await (const x of xs) {} }") {
            Stmt::Decl(Decl::Fn(f)) => match &f.function.body.unwrap().stmts[0] {
                Stmt::ForOf(ForOfStmt { await_token, .. }) => assert!(await_token.is_some()),
                s => panic!("{:?}", s),
            },
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn in_is_allowed_inside_brackets_of_for_init() {
        assert!(matches!(stmt("for (var i = ('a' in b); i;) {}"), Stmt::For(..)));
    }

    #[test]
    fn asi() {
        let program = parse_module("let a = 1\nlet b = a\n++b\nreturn_\nthrow_()");
        assert_eq!(program.body.len(), 5);
    }

    #[test]
    fn let_as_identifier() {
        assert!(matches!(stmt("let;"), Stmt::Expr(..)));
        assert!(matches!(stmt("let = 1;"), Stmt::Expr(..)));
    }

    #[test]
    fn statements() {
        let src = "outer: while (true) { switch (x) { case 1: break outer; default: continue outer; } }";
        match stmt(src) {
            Stmt::Labeled(LabeledStmt { label, body, .. }) => {
                assert_eq!(label.sym, *"outer");
                assert!(matches!(*body, Stmt::While(..)));
            }
            s => panic!("{:?}", s),
        }

        match stmt("try { a(); } catch ({ message }: Error) { } finally { b(); }") {
            Stmt::Try(t) => {
                assert!(t.handler.unwrap().param.unwrap().type_ann().is_some());
                assert!(t.finalizer.is_some());
            }
            s => panic!("{:?}", s),
        }

        let src = "do x++; while (x < 10) y();";
        let program = parse_module(src);
        assert_eq!(program.body.len(), 2);
        assert_eq!(text(src, program.body[0].span()), "do x++; while (x < 10)");
    }

    #[test]
    fn errors() {
        assert_eq!(*parse_error("return 1;").kind(), SyntaxError::ReturnNotAllowed);
        assert_eq!(*parse_error("throw\nx;").kind(), SyntaxError::LineBreakInThrow);
        assert_eq!(*parse_error("const x;").kind(), SyntaxError::MissingDeclarator);
        assert!(matches!(
            parse_error("try {}").kind(),
            SyntaxError::Unexpected { .. } | SyntaxError::Eof
        ));
        assert_eq!(
            *parse_error("@dec class A {}").kind(),
            SyntaxError::InvalidLeadingDecorator
        );
    }
}
