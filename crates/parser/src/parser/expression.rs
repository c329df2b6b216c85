use super::{util::ExprExt, *};
use crate::token::{Keyword, Word};
use either::Either;
use global_common::Spanned;

/// Everything in front of `=>`.
struct ArrowHead {
    is_async: bool,
    type_params: Option<TypeParamDecl>,
    params: Vec<Pat>,
    return_type: Option<TypeAnn>,
    predicate: Option<Predicate>,
}

impl<'a> Parser<'a> {
    /// Expression, including the comma operator.
    pub(super) fn parse_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        let expr = self.parse_assignment_expr()?;

        if is!(self, ',') {
            let mut exprs = vec![expr];
            while eat!(self, ',') {
                exprs.push(self.parse_assignment_expr()?);
            }

            return Ok(Box::new(Expr::Seq(SeqExpr {
                span: span!(self, start),
                exprs,
            })));
        }

        Ok(expr)
    }

    /// `parseMaybeAssign`
    pub(super) fn parse_assignment_expr(&mut self) -> PResult<Box<Expr>> {
        if self.ctx().in_generator && self.input.is_word("yield") {
            return self.parse_yield_expr();
        }

        if let Some(arrow) = self.try_parse_arrow_expr()? {
            return Ok(arrow);
        }

        let start = self.input.cur_pos();
        let cond = self.parse_cond_expr()?;
        self.finish_assignment_expr(start, cond)
    }

    fn finish_assignment_expr(&mut self, start: BytePos, left: Box<Expr>) -> PResult<Box<Expr>> {
        let op = match self.input.cur() {
            Some(Token::AssignOp(op)) => *op,
            _ => return Ok(left),
        };

        let left = if op == AssignOp::Assign {
            self.reparse_expr_as_pat(left)?
        } else if left.is_valid_simple_assignment_target() {
            Box::new(Pat::Expr(left))
        } else {
            syntax_error!(self, left.span(), SyntaxError::InvalidAssignTarget)
        };

        self.input.bump();
        let right = self.parse_assignment_expr()?;
        Ok(Box::new(Expr::Assign(AssignExpr {
            span: span!(self, start),
            op,
            left,
            right,
        })))
    }

    fn parse_yield_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        self.input.bump();

        if is!(self, ';')
            || (!is!(self, '*') && !self.input.cur().map(Token::starts_expr).unwrap_or(false))
        {
            Ok(Box::new(Expr::Yield(YieldExpr {
                span: span!(self, start),
                arg: None,
                delegate: false,
            })))
        } else {
            let has_star = eat!(self, '*');
            let arg = self.parse_assignment_expr()?;

            Ok(Box::new(Expr::Yield(YieldExpr {
                span: span!(self, start),
                arg: Some(arg),
                delegate: has_star,
            })))
        }
    }

    /// Arrow functions are recognized by looking for `=>` after what could
    /// be their parameters, backtracking if it is not there.
    fn try_parse_arrow_expr(&mut self) -> PResult<Option<Box<Expr>>> {
        let start = self.input.cur_pos();

        // `x => ...`
        if is!(self, BindingIdent) && self.input.peeked_is(&tok!("=>")) {
            let id = self.parse_binding_ident()?;
            let head = ArrowHead {
                is_async: false,
                type_params: None,
                params: vec![Pat::Ident(id)],
                return_type: None,
                predicate: None,
            };
            return self.parse_arrow_body(start, head).map(Some);
        }

        let is_async = self.input.is_word("async")
            && !self.input.has_linebreak_between_cur_and_peeked()
            && (self.input.peeked_is(&tok!('('))
                || self.input.peeked_is(&tok!('<'))
                || self.input.peeked_is_ident());
        if !is_async && !is!(self, '(') && !(self.syntax.flow && is!(self, '<')) {
            return Ok(None);
        }

        if self.ctx().in_cond_expr {
            // `a ? (x): T => y : z`; an arrow with a return type must be
            // followed by the `:` of the conditional.
            return Ok(self.try_parse(|p| {
                let head = match p.parse_arrow_head(is_async)? {
                    Some(head) => head,
                    None => return Ok(None),
                };
                let has_return_type = head.return_type.is_some();
                let arrow = p.parse_arrow_body(start, head)?;
                if has_return_type && !is!(p, ':') {
                    return Ok(None);
                }
                Ok(Some(arrow))
            }));
        }

        match self.try_parse(|p| p.parse_arrow_head(is_async)) {
            Some(head) => self.parse_arrow_body(start, head).map(Some),
            None => Ok(None),
        }
    }

    /// Returns `None` if the tokens do not form the head of an arrow
    /// function.
    fn parse_arrow_head(&mut self, is_async: bool) -> PResult<Option<ArrowHead>> {
        if is_async {
            self.input.bump();

            // `async x => ...`
            if is!(self, BindingIdent) {
                let id = self.parse_binding_ident()?;
                if !is!(self, "=>") || self.input.had_line_break_before_cur() {
                    return Ok(None);
                }
                return Ok(Some(ArrowHead {
                    is_async,
                    type_params: None,
                    params: vec![Pat::Ident(id)],
                    return_type: None,
                    predicate: None,
                }));
            }
        }

        let type_params = if is!(self, '<') {
            Some(self.parse_type_params_decl()?)
        } else {
            None
        };
        if !is!(self, '(') {
            return Ok(None);
        }

        let ctx = Context {
            in_async: is_async,
            in_generator: false,
            ..self.bracketed_ctx()
        };
        let params = self
            .with_ctx(ctx)
            .parse_formal_params()?
            .into_iter()
            .map(|param| param.pat)
            .collect();

        let (return_type, predicate) = if is!(self, ':') {
            let ctx = Context {
                no_anon_function_type: true,
                ..self.ctx()
            };
            self.with_ctx(ctx).parse_return_type_and_predicate()?
        } else {
            (None, None)
        };

        if !is!(self, "=>") || self.input.had_line_break_before_cur() {
            return Ok(None);
        }

        Ok(Some(ArrowHead {
            is_async,
            type_params,
            params,
            return_type,
            predicate,
        }))
    }

    fn parse_arrow_body(&mut self, start: BytePos, head: ArrowHead) -> PResult<Box<Expr>> {
        if self.input.had_line_break_before_cur() {
            syntax_error!(self, SyntaxError::LineBreakBeforeArrow)
        }
        expect!(self, "=>");

        let body = if is!(self, '{') {
            let ctx = self.fn_body_ctx(head.is_async, false);
            BlockStmtOrExpr::BlockStmt(self.with_ctx(ctx).parse_block()?)
        } else {
            let ctx = Context {
                in_async: head.is_async,
                in_generator: false,
                in_function: true,
                ..self.ctx()
            };
            BlockStmtOrExpr::Expr(self.with_ctx(ctx).parse_assignment_expr()?)
        };

        Ok(Box::new(Expr::Arrow(ArrowExpr {
            span: span!(self, start),
            params: head.params,
            body,
            is_async: head.is_async,
            type_params: head.type_params,
            return_type: head.return_type,
            predicate: head.predicate,
        })))
    }

    fn parse_cond_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        let test = self.parse_bin_expr()?;

        if !eat!(self, '?') {
            return Ok(test);
        }

        let ctx = Context {
            in_cond_expr: true,
            no_in: false,
            ..self.ctx()
        };
        let cons = self.with_ctx(ctx).parse_assignment_expr()?;
        expect!(self, ':');
        let alt = self.parse_assignment_expr()?;

        Ok(Box::new(Expr::Cond(CondExpr {
            span: span!(self, start),
            test,
            cons,
            alt,
        })))
    }

    fn parse_bin_expr(&mut self) -> PResult<Box<Expr>> {
        let left = if is!(self, '#') {
            // `#x in obj`
            Box::new(Expr::PrivateName(self.parse_private_name()?))
        } else {
            self.parse_unary_expr()?
        };

        self.parse_bin_op_recursively(left, 0)
    }

    /// Operator precedence parsing. Operators binding no tighter than
    /// `min_prec` are left to the caller.
    fn parse_bin_op_recursively(&mut self, mut left: Box<Expr>, min_prec: u8) -> PResult<Box<Expr>> {
        loop {
            let op = match self.cur_bin_op() {
                Some(op) => op,
                None => return Ok(left),
            };
            let prec = op.precedence();
            if prec <= min_prec {
                return Ok(left);
            }
            self.input.bump();

            let right = self.parse_unary_expr()?;
            // `**` is right associative.
            let right = if op == BinaryOp::Exp {
                self.parse_bin_op_recursively(right, prec - 1)?
            } else {
                self.parse_bin_op_recursively(right, prec)?
            };

            left = Box::new(Expr::Bin(BinExpr {
                span: span!(self, left.span().lo),
                op,
                left,
                right,
            }));
        }
    }

    fn cur_bin_op(&mut self) -> Option<BinaryOp> {
        if is!(self, '>') {
            self.input.rescan_cur(|l| l.rescan_greater());
        }

        let no_in = self.ctx().no_in;
        match self.input.cur()? {
            Token::BinOp(op) => Some((*op).into()),
            Token::Word(Word::Keyword(Keyword::In)) if !no_in => Some(BinaryOp::In),
            Token::Word(Word::Keyword(Keyword::InstanceOf)) => Some(BinaryOp::InstanceOf),
            _ => None,
        }
    }

    /// Parse unary expression and update expression.
    pub(super) fn parse_unary_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        // Parse update expression
        if is!(self, "++") || is!(self, "--") {
            let op = if is!(self, "++") {
                UpdateOp::PlusPlus
            } else {
                UpdateOp::MinusMinus
            };
            self.input.bump();

            let arg = self.parse_unary_expr()?;
            if !arg.is_valid_simple_assignment_target() {
                syntax_error!(self, arg.span(), SyntaxError::InvalidAssignTarget)
            }

            return Ok(Box::new(Expr::Update(UpdateExpr {
                span: span!(self, start),
                prefix: true,
                op,
                arg,
            })));
        }

        // Parse unary expression
        let op = match self.input.cur() {
            Some(&tok!("delete")) => Some(UnaryOp::Delete),
            Some(&tok!("void")) => Some(UnaryOp::Void),
            Some(&tok!("typeof")) => Some(UnaryOp::TypeOf),
            Some(&tok!('+')) => Some(UnaryOp::Plus),
            Some(&tok!('-')) => Some(UnaryOp::Minus),
            Some(&tok!('!')) => Some(UnaryOp::Bang),
            Some(&tok!('~')) => Some(UnaryOp::Tilde),
            _ => None,
        };
        if let Some(op) = op {
            self.input.bump();
            let arg = self.parse_unary_expr()?;
            return Ok(Box::new(Expr::Unary(UnaryExpr {
                span: span!(self, start),
                op,
                arg,
            })));
        }

        if self.input.is_word("await") && self.is_await_expr() {
            self.input.bump();
            let arg = self.parse_unary_expr()?;
            return Ok(Box::new(Expr::Await(AwaitExpr {
                span: span!(self, start),
                arg,
            })));
        }

        let expr = self.parse_lhs_expr()?;

        // Parse postfix update
        if (is!(self, "++") || is!(self, "--")) && !self.input.had_line_break_before_cur() {
            if !expr.is_valid_simple_assignment_target() {
                syntax_error!(self, expr.span(), SyntaxError::InvalidAssignTarget)
            }
            let op = if is!(self, "++") {
                UpdateOp::PlusPlus
            } else {
                UpdateOp::MinusMinus
            };
            self.input.bump();

            return Ok(Box::new(Expr::Update(UpdateExpr {
                span: span!(self, start),
                prefix: false,
                op,
                arg: expr,
            })));
        }

        Ok(expr)
    }

    /// `await` outside of async functions is an await expression only at the
    /// top level of a module.
    fn is_await_expr(&mut self) -> bool {
        let ctx = self.ctx();
        if ctx.in_async {
            return true;
        }
        !ctx.in_function
            && !self.input.has_linebreak_between_cur_and_peeked()
            && self.input.peek().map(Token::starts_expr).unwrap_or(false)
    }

    /// Parse call, dot, and `[]`-subscript expressions.
    pub(super) fn parse_lhs_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        if is!(self, "super") {
            self.input.bump();
            let obj = ExprOrSuper::Super(Super {
                span: span!(self, start),
            });
            return self.parse_subscripts(obj, start, false);
        }

        if is!(self, "import") {
            self.input.bump();
            let import_span = span!(self, start);

            if is!(self, '.') {
                let meta = self.parse_meta_prop(start, Ident::new("import".into(), import_span))?;
                return self.parse_subscripts(ExprOrSuper::Expr(meta), start, false);
            }

            let args = self.parse_args()?;
            let call = Box::new(Expr::Call(CallExpr {
                span: span!(self, start),
                callee: Callee::Import(Import { span: import_span }),
                args,
                type_args: None,
                optional: false,
            }));
            return self.parse_subscripts(ExprOrSuper::Expr(call), start, false);
        }

        let obj = if is!(self, "new") {
            self.parse_new_expr()?
        } else {
            self.parse_primary_expr()?
        };
        self.parse_subscripts(ExprOrSuper::Expr(obj), start, false)
    }

    /// `new.target`, `import.meta`
    fn parse_meta_prop(&mut self, start: BytePos, meta: Ident) -> PResult<Box<Expr>> {
        expect!(self, '.');
        let prop = self.parse_ident_name()?;
        Ok(Box::new(Expr::MetaProp(MetaPropExpr {
            span: span!(self, start),
            meta,
            prop,
        })))
    }

    pub(super) fn parse_new_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        expect!(self, "new");
        let new_span = span!(self, start);

        if is!(self, '.') {
            return self.parse_meta_prop(start, Ident::new("new".into(), new_span));
        }

        let callee_start = self.input.cur_pos();
        let callee = if is!(self, "new") {
            self.parse_new_expr()?
        } else {
            self.parse_primary_expr()?
        };
        let callee = self.parse_subscripts(ExprOrSuper::Expr(callee), callee_start, true)?;

        let type_args = if self.syntax.flow && is!(self, '<') {
            self.try_parse(|p| {
                let args = p.parse_type_args()?;
                Ok(if is!(p, '(') { Some(args) } else { None })
            })
        } else {
            None
        };

        let args = if is!(self, '(') {
            Some(self.parse_args()?)
        } else {
            None
        };

        Ok(Box::new(Expr::New(NewExpr {
            span: span!(self, start),
            callee,
            args,
            type_args,
        })))
    }

    fn parse_subscripts(
        &mut self,
        mut obj: ExprOrSuper,
        start: BytePos,
        no_call: bool,
    ) -> PResult<Box<Expr>> {
        loop {
            obj = match self.parse_subscript(obj, start, no_call)? {
                Either::Left(expr) => return Ok(expr),
                Either::Right(expr) => ExprOrSuper::Expr(expr),
            }
        }
    }

    /// Returns `Right` if this method should be called again.
    fn parse_subscript(
        &mut self,
        obj: ExprOrSuper,
        start: BytePos,
        no_call: bool,
    ) -> PResult<Either<Box<Expr>, Box<Expr>>> {
        // $obj.name, $obj.#name
        if eat!(self, '.') {
            let prop = self.parse_member_prop_name()?;
            return Ok(Either::Right(Box::new(Expr::Member(MemberExpr {
                span: span!(self, start),
                obj,
                prop,
                optional: false,
            }))));
        }

        // $obj[name()]
        if is!(self, '[') {
            let prop = self.parse_computed_prop_name()?;
            return Ok(Either::Right(Box::new(Expr::Member(MemberExpr {
                span: span!(self, start),
                obj,
                prop: MemberProp::Computed(prop),
                optional: false,
            }))));
        }

        if !no_call && eat!(self, "?.") {
            if is!(self, '(') {
                let args = self.parse_args()?;
                return Ok(Either::Right(Box::new(Expr::Call(CallExpr {
                    span: span!(self, start),
                    callee: obj.into_callee(),
                    args,
                    type_args: None,
                    optional: true,
                }))));
            }

            let prop = if is!(self, '[') {
                MemberProp::Computed(self.parse_computed_prop_name()?)
            } else {
                self.parse_member_prop_name()?
            };
            return Ok(Either::Right(Box::new(Expr::Member(MemberExpr {
                span: span!(self, start),
                obj,
                prop,
                optional: true,
            }))));
        }

        if !no_call && is!(self, '(') {
            let args = self.parse_args()?;
            return Ok(Either::Right(Box::new(Expr::Call(CallExpr {
                span: span!(self, start),
                callee: obj.into_callee(),
                args,
                type_args: None,
                optional: false,
            }))));
        }

        let expr = match obj {
            ExprOrSuper::Expr(expr) => expr,
            ExprOrSuper::Super(..) => unexpected!(self, "`.`, `[` or `(` after `super`"),
        };

        // $tag`...`
        if matches!(self.input.cur(), Some(Token::Template { .. })) {
            let tpl = self.parse_tpl()?;
            return Ok(Either::Right(Box::new(Expr::TaggedTpl(TaggedTpl {
                span: span!(self, start),
                tag: expr,
                type_args: None,
                tpl,
            }))));
        }

        // $f<T>(), $tag<T>`...`
        if !no_call && self.syntax.flow && is!(self, '<') {
            let type_args = self.try_parse(|p| {
                let args = p.parse_type_args()?;
                Ok(
                    if is!(p, '(') || matches!(p.input.cur(), Some(Token::Template { .. })) {
                        Some(args)
                    } else {
                        None
                    },
                )
            });

            if let Some(type_args) = type_args {
                if is!(self, '(') {
                    let args = self.parse_args()?;
                    return Ok(Either::Right(Box::new(Expr::Call(CallExpr {
                        span: span!(self, start),
                        callee: Callee::Expr(expr),
                        args,
                        type_args: Some(type_args),
                        optional: false,
                    }))));
                }

                let tpl = self.parse_tpl()?;
                return Ok(Either::Right(Box::new(Expr::TaggedTpl(TaggedTpl {
                    span: span!(self, start),
                    tag: expr,
                    type_args: Some(type_args),
                    tpl,
                }))));
            }
        }

        Ok(Either::Left(expr))
    }

    fn parse_member_prop_name(&mut self) -> PResult<MemberProp> {
        if is!(self, '#') {
            return Ok(MemberProp::PrivateName(self.parse_private_name()?));
        }
        Ok(MemberProp::Ident(self.parse_ident_name()?))
    }

    /// `[expr]`
    pub(super) fn parse_computed_prop_name(&mut self) -> PResult<ComputedPropName> {
        let start = self.input.cur_pos();
        expect!(self, '[');
        let ctx = self.bracketed_ctx();
        let expr = self.with_ctx(ctx).parse_expr()?;
        expect!(self, ']');
        Ok(ComputedPropName {
            span: span!(self, start),
            expr,
        })
    }

    /// `#name`
    pub(super) fn parse_private_name(&mut self) -> PResult<PrivateName> {
        let start = self.input.cur_pos();
        expect!(self, '#');
        let id = self.parse_ident_name()?;
        Ok(PrivateName {
            span: span!(self, start),
            id,
        })
    }

    pub(super) fn parse_args(&mut self) -> PResult<Vec<ExprOrSpread>> {
        expect!(self, '(');
        let ctx = self.bracketed_ctx();
        let args = self
            .with_ctx(ctx)
            .parse_delimited(&tok!(')'), |p| p.parse_expr_or_spread())?;
        expect!(self, ')');
        Ok(args)
    }

    /// AssignmentExpression[+In, ?Yield, ?Await]
    /// ...AssignmentExpression[+In, ?Yield, ?Await]
    pub(super) fn parse_expr_or_spread(&mut self) -> PResult<ExprOrSpread> {
        let start = self.input.cur_pos();

        let spread = if eat!(self, "...") {
            Some(span!(self, start))
        } else {
            None
        };
        let expr = self.parse_assignment_expr()?;
        Ok(ExprOrSpread { spread, expr })
    }

    pub(super) fn parse_primary_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        if is!(self, '/') || is!(self, "/=") {
            self.input.rescan_cur(|l| l.rescan_slash());
        }

        match self.input.cur() {
            Some(&tok!("this")) => {
                self.input.bump();
                Ok(Box::new(Expr::This(ThisExpr {
                    span: span!(self, start),
                })))
            }
            Some(&tok!("function")) => self.parse_fn_expr(start, false),
            Some(&tok!("class")) => self.parse_class_expr(start),
            Some(&tok!('(')) => self.parse_paren_expr(),
            Some(&tok!('[')) => self.parse_array_lit(),
            Some(&tok!('{')) => self.parse_object_lit(),
            Some(Token::Template { .. }) => Ok(Box::new(Expr::Tpl(self.parse_tpl()?))),
            Some(&tok!('<')) if self.syntax.jsx => {
                Ok(match self.parse_jsx_element_or_fragment()? {
                    Either::Left(fragment) => Box::new(Expr::JSXFragment(fragment)),
                    Either::Right(element) => Box::new(Expr::JSXElement(Box::new(element))),
                })
            }
            Some(Token::Word(Word::Ident(..))) => {
                if self.input.is_word("async")
                    && self.input.peeked_is(&tok!("function"))
                    && !self.input.has_linebreak_between_cur_and_peeked()
                {
                    self.input.bump();
                    return self.parse_fn_expr(start, true);
                }
                Ok(Box::new(Expr::Ident(self.parse_ident()?)))
            }
            Some(Token::Word(Word::Null | Word::True | Word::False))
            | Some(Token::Str { .. })
            | Some(Token::Num { .. })
            | Some(Token::BigInt { .. })
            | Some(Token::Regex { .. }) => Ok(Box::new(Expr::Lit(self.parse_lit()?))),
            _ => unexpected!(self, "an expression"),
        }
    }

    pub(super) fn parse_lit(&mut self) -> PResult<Lit> {
        let start = self.input.cur_pos();

        let v = match self.input.bump() {
            Token::Word(Word::Null) => Lit::Null(Null {
                span: span!(self, start),
            }),
            Token::Word(Word::True) => Lit::Bool(Bool {
                span: span!(self, start),
                value: true,
            }),
            Token::Word(Word::False) => Lit::Bool(Bool {
                span: span!(self, start),
                value: false,
            }),
            Token::Str { value, raw } => Lit::Str(Str {
                span: span!(self, start),
                value,
                raw,
            }),
            Token::Num { value, raw } => Lit::Num(Number {
                span: span!(self, start),
                value,
                raw,
            }),
            Token::BigInt { raw } => Lit::BigInt(BigInt {
                span: span!(self, start),
                raw,
            }),
            Token::Regex { exp, flags } => Lit::Regex(Regex {
                span: span!(self, start),
                exp,
                flags,
            }),
            Token::Error(err) => return Err(err),
            t => syntax_error!(
                self,
                span!(self, start),
                SyntaxError::Unexpected {
                    got: format!("{:?}", t),
                    expected: "a literal",
                }
            ),
        };
        Ok(v)
    }

    /// `(a, b)`, `(a: T)`
    ///
    /// Every element may carry a Flow type cast.
    fn parse_paren_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        expect!(self, '(');

        let ctx = self.bracketed_ctx();
        let mut p = self.with_ctx(ctx);

        let expr_start = p.input.cur_pos();
        let mut exprs = vec![];
        loop {
            let item_start = p.input.cur_pos();
            let item = p.parse_assignment_expr()?;
            let item = if p.syntax.flow && is!(p, ':') {
                let type_ann = p.parse_type_ann()?;
                Box::new(Expr::TypeCast(TypeCastExpr {
                    span: span!(p, item_start),
                    expr: item,
                    type_ann,
                }))
            } else {
                item
            };
            exprs.push(item);

            if !eat!(p, ',') {
                break;
            }
        }

        let expr = if exprs.len() == 1 {
            exprs.remove(0)
        } else {
            Box::new(Expr::Seq(SeqExpr {
                span: span!(p, expr_start),
                exprs,
            }))
        };
        expect!(p, ')');

        Ok(Box::new(Expr::Paren(ParenExpr {
            span: span!(p, start),
            expr,
        })))
    }

    fn parse_array_lit(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        expect!(self, '[');

        let ctx = self.bracketed_ctx();
        let mut p = self.with_ctx(ctx);

        let mut elems = vec![];
        while !eof!(p) && !is!(p, ']') {
            if eat!(p, ',') {
                elems.push(None);
                continue;
            }

            elems.push(Some(p.parse_expr_or_spread()?));
            if !is!(p, ']') {
                expect!(p, ',');
            }
        }
        expect!(p, ']');

        Ok(Box::new(Expr::Array(ArrayLit {
            span: span!(p, start),
            elems,
        })))
    }

    /// A template literal; the current token is its first chunk.
    pub(super) fn parse_tpl(&mut self) -> PResult<Tpl> {
        let start = self.input.cur_pos();

        let mut exprs = vec![];
        let mut quasis = vec![];
        loop {
            let chunk = self.input.cur_span();
            let (raw, tail) = match self.input.cur() {
                Some(Token::Template { .. }) => match self.input.bump() {
                    Token::Template { raw, tail } => (raw, tail),
                    _ => unreachable!(),
                },
                _ => unexpected!(self, "a template"),
            };

            // Without the delimiters: '`' or '}' before, '`' or '${' after.
            let end = if tail { 1 } else { 2 };
            quasis.push(TplElement {
                span: Span::new(BytePos(chunk.lo.0 + 1), BytePos(chunk.hi.0 - end)),
                tail,
                raw,
            });
            if tail {
                break;
            }

            let ctx = self.bracketed_ctx();
            exprs.push(self.with_ctx(ctx).parse_expr()?);
            if !is!(self, '}') {
                unexpected!(self, "`}`")
            }
            self.input.rescan_cur(|l| l.rescan_template_continuation());
        }

        Ok(Tpl {
            span: span!(self, start),
            exprs,
            quasis,
        })
    }
}

impl ExprOrSuperExt for ExprOrSuper {
    fn into_callee(self) -> Callee {
        match self {
            ExprOrSuper::Super(s) => Callee::Super(s),
            ExprOrSuper::Expr(e) => Callee::Expr(e),
        }
    }
}

trait ExprOrSuperExt {
    fn into_callee(self) -> Callee;
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{expr, parse_error, parse_module, text};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn precedence() {
        let e = expr("a + b * c ** d ** e;");
        match *e {
            Expr::Bin(BinExpr {
                op: BinaryOp::Add,
                ref right,
                ..
            }) => match **right {
                Expr::Bin(BinExpr {
                    op: BinaryOp::Mul,
                    ref right,
                    ..
                }) => match **right {
                    Expr::Bin(BinExpr {
                        op: BinaryOp::Exp,
                        ref right,
                        ..
                    }) => assert!(matches!(
                        **right,
                        Expr::Bin(BinExpr {
                            op: BinaryOp::Exp,
                            ..
                        })
                    )),
                    ref e => panic!("{:?}", e),
                },
                ref e => panic!("{:?}", e),
            },
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn shifts_are_rescanned() {
        let e = expr("a >>> b >= c;");
        match *e {
            Expr::Bin(BinExpr {
                op: BinaryOp::GtEq,
                left,
                ..
            }) => assert!(matches!(
                *left,
                Expr::Bin(BinExpr {
                    op: BinaryOp::ZeroFillRShift,
                    ..
                })
            )),
            e => panic!("{:?}", e),
        }

        let e = expr("a >>= 1;");
        assert!(matches!(
            *e,
            Expr::Assign(AssignExpr {
                op: AssignOp::RShiftAssign,
                ..
            })
        ));
    }

    #[test]
    fn relational_keywords() {
        let e = expr("'a' in b instanceof C;");
        match *e {
            Expr::Bin(BinExpr {
                op: BinaryOp::InstanceOf,
                left,
                ..
            }) => assert!(matches!(
                *left,
                Expr::Bin(BinExpr {
                    op: BinaryOp::In,
                    ..
                })
            )),
            e => panic!("{:?}", e),
        }

        let program = parse_module("for (var k in o) {}\nfor (var i = ('a' in o); i; ) {}");
        assert!(matches!(program.body[0], ModuleItem::Stmt(Stmt::ForIn(..))));
        assert!(matches!(program.body[1], ModuleItem::Stmt(Stmt::For(..))));
    }

    #[test]
    fn arrow_functions() {
        let src = "const f = async (x: number, y?: string): Promise<void> => {};";
        let program = parse_module(src);
        let arrow = match &program.body[0] {
            ModuleItem::Stmt(Stmt::Decl(Decl::Var(v))) => match v.decls[0].init.as_deref() {
                Some(Expr::Arrow(a)) => a.clone(),
                other => panic!("{:?}", other),
            },
            other => panic!("{:?}", other),
        };
        assert!(arrow.is_async);
        assert_eq!(arrow.params.len(), 2);
        assert_eq!(
            text(src, arrow.return_type.unwrap().span),
            ": Promise<void>"
        );

        assert!(matches!(*expr("x => x * 2;"), Expr::Arrow(..)));
        assert!(matches!(*expr("async x => x;"), Expr::Arrow(..)));
        assert!(matches!(*expr("<T>(x: T): T => x;"), Expr::Arrow(..)));
        assert!(matches!(*expr("async(x);"), Expr::Call(..)));
    }

    #[test]
    fn paren_is_not_an_arrow() {
        let e = expr("(a, b);");
        assert!(matches!(*e, Expr::Paren(..)));
    }

    #[test]
    fn type_cast() {
        let src = "(x: any);";
        match *expr(src) {
            Expr::Paren(ParenExpr { expr, .. }) => match *expr {
                Expr::TypeCast(cast) => {
                    assert_eq!(text(src, cast.span), "x: any");
                    assert_eq!(text(src, cast.type_ann.span), ": any");
                }
                e => panic!("{:?}", e),
            },
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn conditional_with_parenthesized_consequent() {
        let e = expr("a ? (b) : c;");
        match *e {
            Expr::Cond(CondExpr { cons, alt, .. }) => {
                assert!(matches!(*cons, Expr::Paren(..)));
                assert!(matches!(*alt, Expr::Ident(..)));
            }
            e => panic!("{:?}", e),
        }

        let e = expr("a ? (x): number => x : y;");
        match *e {
            Expr::Cond(CondExpr { cons, .. }) => assert!(matches!(*cons, Expr::Arrow(..))),
            e => panic!("{:?}", e),
        }

        let e = expr("a ? (x) : y => z;");
        match *e {
            Expr::Cond(CondExpr { cons, alt, .. }) => {
                assert!(matches!(*cons, Expr::Paren(..)));
                assert!(matches!(*alt, Expr::Arrow(..)));
            }
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn call_type_args() {
        let e = expr("f<string>(x);");
        assert!(matches!(
            *e,
            Expr::Call(CallExpr {
                type_args: Some(..),
                ..
            })
        ));

        let e = expr("a < b > c;");
        assert!(matches!(*e, Expr::Bin(..)));

        let e = expr("new Map<string, number>();");
        assert!(matches!(
            *e,
            Expr::New(NewExpr {
                type_args: Some(..),
                ..
            })
        ));
    }

    #[test]
    fn optional_chaining() {
        let e = expr("a?.b?.[c]?.(d);");
        match *e {
            Expr::Call(CallExpr { optional, callee, .. }) => {
                assert!(optional);
                assert!(matches!(callee, Callee::Expr(..)));
            }
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn regex_and_division() {
        let e = expr("a / b / c;");
        assert!(matches!(*e, Expr::Bin(..)));

        let e = expr("x = /ab+c/gi;");
        match *e {
            Expr::Assign(AssignExpr { right, .. }) => match *right {
                Expr::Lit(Lit::Regex(r)) => {
                    assert_eq!(&*r.exp, "ab+c");
                    assert_eq!(&*r.flags, "gi");
                }
                e => panic!("{:?}", e),
            },
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn templates() {
        let src = "tag`a${b}c${`d${e}`}`;";
        match *expr(src) {
            Expr::TaggedTpl(TaggedTpl { tpl, .. }) => {
                assert_eq!(tpl.quasis.len(), 3);
                assert_eq!(tpl.exprs.len(), 2);
                assert_eq!(text(src, tpl.quasis[0].span), "a");
                assert_eq!(text(src, tpl.quasis[1].span), "c");
                assert!(tpl.quasis[2].tail);
            }
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn destructuring_assignment() {
        let e = expr("[a, {b, c: d = 1}, ...rest] = x;");
        match *e {
            Expr::Assign(AssignExpr { left, .. }) => match *left {
                Pat::Array(ArrayPat { elems, .. }) => {
                    assert_eq!(elems.len(), 3);
                    assert!(matches!(elems[2], Some(Pat::Rest(..))));
                }
                p => panic!("{:?}", p),
            },
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn invalid_assignment_target() {
        let err = parse_error("a + b = c;");
        assert_eq!(*err.kind(), SyntaxError::InvalidAssignTarget);
    }

    #[test]
    fn meta_properties_and_dynamic_import() {
        assert!(matches!(*expr("import.meta.url;"), Expr::Member(..)));
        assert!(matches!(
            *expr("import('./m');"),
            Expr::Call(CallExpr {
                callee: Callee::Import(..),
                ..
            })
        ));
    }
}
