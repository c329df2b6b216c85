use super::*;

/// Where a call argument stays on the line of the call while the others do
/// not fit.
enum Hug {
    First,
    Last,
}

impl<'a> Emitter<'a> {
    pub fn emit_expr(&mut self, node: &Expr) -> Result {
        match node {
            Expr::This(_) => {
                keyword!(self, "this");
                Ok(())
            }
            Expr::Array(n) => self.emit_array_lit(n),
            Expr::Object(n) => self.emit_object_lit(n),
            Expr::Fn(n) => self.emit_fn_expr(n),
            Expr::Unary(n) => self.emit_unary_expr(n),
            Expr::Update(n) => self.emit_update_expr(n),
            Expr::Bin(n) => self.emit_bin_expr(n),
            Expr::Assign(n) => self.emit_assign_expr(n),
            Expr::Member(n) => self.emit_member_expr(n),
            Expr::Cond(n) => self.emit_cond_expr(n),
            Expr::Call(n) => self.emit_call_expr(n),
            Expr::New(n) => self.emit_new_expr(n),
            Expr::Seq(n) => self.emit_seq_expr(n),
            Expr::Ident(n) => self.emit_ident(n),
            Expr::Lit(n) => self.emit_lit(n),
            Expr::Tpl(n) => self.emit_tpl(n),
            Expr::TaggedTpl(n) => self.emit_tagged_tpl(n),
            Expr::Arrow(n) => self.emit_arrow_expr(n),
            Expr::Class(n) => self.emit_class_expr(n),
            Expr::Yield(n) => self.emit_yield_expr(n),
            Expr::MetaProp(n) => self.emit_meta_prop_expr(n),
            Expr::Await(n) => self.emit_await_expr(n),
            Expr::Paren(n) => self.emit_paren_expr(n),
            Expr::JSXElement(n) => self.emit_jsx_element(n),
            Expr::JSXFragment(n) => self.emit_jsx_fragment(n),
            Expr::TypeCast(n) => self.emit_type_cast_expr(n),
            Expr::As(n) => self.emit_as_expr(n),
            Expr::PrivateName(n) => self.emit_private_name(n),
        }
    }

    pub(crate) fn emit_ident(&mut self, node: &Ident) -> Result {
        self.wr.write_str(&node.sym)
    }

    fn emit_private_name(&mut self, node: &PrivateName) -> Result {
        punct!(self, "#");
        self.emit_ident(&node.id)
    }

    pub(crate) fn emit_lit(&mut self, node: &Lit) -> Result {
        match node {
            Lit::Str(s) => self.emit_str_lit(s),
            Lit::Bool(b) => {
                keyword!(self, if b.value { "true" } else { "false" });
                Ok(())
            }
            Lit::Null(_) => {
                keyword!(self, "null");
                Ok(())
            }
            Lit::Num(n) => self.wr.write_str(&n.raw),
            Lit::BigInt(n) => self.wr.write_str(&n.raw),
            Lit::Regex(n) => {
                punct!(self, "/");
                self.wr.write_str(&n.exp)?;
                punct!(self, "/");
                self.wr.write_str(&n.flags)
            }
        }
    }

    pub(crate) fn emit_str_lit(&mut self, node: &Str) -> Result {
        if self.cfg.preserve_quotes {
            return self.wr.write_str(&node.raw);
        }
        let text = util::requote(&node.raw, self.cfg.single_quote);
        self.wr.write_str(&text)
    }

    fn emit_array_lit(&mut self, node: &ArrayLit) -> Result {
        let mut format = ListFormat::ArrayLiteralExpressionElements;
        if let Some(Some(ExprOrSpread { spread: Some(..), .. })) = node.elems.last() {
            format -= ListFormat::TrailingCommaEs5;
        }
        self.emit_list(
            node.span,
            &node.elems,
            |e, elem| match elem {
                Some(elem) => e.emit_expr_or_spread(elem),
                None => Ok(()),
            },
            format,
        )
    }

    pub(crate) fn emit_expr_or_spread(&mut self, node: &ExprOrSpread) -> Result {
        if node.spread.is_some() {
            punct!(self, "...");
        }
        self.emit_expr(&node.expr)
    }

    fn emit_object_lit(&mut self, node: &ObjectLit) -> Result {
        let mut format = ListFormat::ObjectLiteralProperties;
        if let Some(PropOrSpread::Spread(..)) = node.props.last() {
            format -= ListFormat::TrailingCommaEs5;
        }
        self.emit_list(
            node.span,
            &node.props,
            |e, prop| e.emit_prop_or_spread(prop),
            format,
        )
    }

    fn emit_prop_or_spread(&mut self, node: &PropOrSpread) -> Result {
        match node {
            PropOrSpread::Spread(n) => {
                punct!(self, "...");
                self.emit_expr(&n.expr)
            }
            PropOrSpread::Prop(n) => self.emit_prop(n),
        }
    }

    fn emit_prop(&mut self, node: &Prop) -> Result {
        match node {
            Prop::Shorthand(n) => self.emit_ident(n),
            Prop::KeyValue(n) => {
                self.emit_prop_name(&n.key)?;
                punct!(self, ":");
                space!(self);
                self.emit_expr(&n.value)
            }
            Prop::Assign(n) => {
                self.emit_ident(&n.key)?;
                space!(self);
                operator!(self, "=");
                space!(self);
                self.emit_expr(&n.value)
            }
            Prop::Getter(n) => {
                keyword!(self, "get");
                space!(self);
                self.emit_prop_name(&n.key)?;
                self.emit_fn_sig_and_body(&n.function)
            }
            Prop::Setter(n) => {
                keyword!(self, "set");
                space!(self);
                self.emit_prop_name(&n.key)?;
                self.emit_fn_sig_and_body(&n.function)
            }
            Prop::Method(n) => {
                if n.function.is_async {
                    keyword!(self, "async");
                    space!(self);
                }
                if n.function.is_generator {
                    punct!(self, "*");
                }
                self.emit_prop_name(&n.key)?;
                self.emit_fn_sig_and_body(&n.function)
            }
        }
    }

    pub(crate) fn emit_prop_name(&mut self, node: &PropName) -> Result {
        match node {
            PropName::Ident(n) => self.emit_ident(n),
            PropName::Str(n) => self.emit_str_lit(n),
            PropName::Num(n) => self.wr.write_str(&n.raw),
            PropName::BigInt(n) => self.wr.write_str(&n.raw),
            PropName::Computed(n) => {
                punct!(self, "[");
                self.emit_expr(&n.expr)?;
                punct!(self, "]");
                Ok(())
            }
        }
    }

    pub(crate) fn emit_fn_expr(&mut self, node: &FnExpr) -> Result {
        if node.function.is_async {
            keyword!(self, "async");
            space!(self);
        }
        keyword!(self, "function");
        if node.function.is_generator {
            punct!(self, "*");
        }
        space!(self);
        opt!(self, emit_ident, node.ident);
        self.emit_fn_sig_and_body(&node.function)
    }

    fn emit_unary_expr(&mut self, node: &UnaryExpr) -> Result {
        operator!(self, node.op.as_str());

        let needs_space = node.op.is_word()
            || match node.arg.as_ref() {
                Expr::Unary(arg) => {
                    matches!(
                        (node.op, arg.op),
                        (UnaryOp::Minus, UnaryOp::Minus) | (UnaryOp::Plus, UnaryOp::Plus)
                    )
                }
                Expr::Update(arg) => {
                    arg.prefix
                        && matches!(
                            (node.op, arg.op),
                            (UnaryOp::Minus, UpdateOp::MinusMinus)
                                | (UnaryOp::Plus, UpdateOp::PlusPlus)
                        )
                }
                _ => false,
            };
        if needs_space {
            space!(self);
        }
        self.emit_expr(&node.arg)
    }

    fn emit_update_expr(&mut self, node: &UpdateExpr) -> Result {
        if node.prefix {
            operator!(self, node.op.as_str());
            self.emit_expr(&node.arg)
        } else {
            self.emit_expr(&node.arg)?;
            operator!(self, node.op.as_str());
            Ok(())
        }
    }

    fn emit_bin_expr(&mut self, node: &BinExpr) -> Result {
        // `for (var a = (b in c);;)`
        let needs_parens = node.op == BinaryOp::In && self.flags.contains(Flags::in_for_stmt_head);
        if needs_parens {
            punct!(self, "(");
        }
        self.emit_expr(&node.left)?;
        space!(self);
        operator!(self, node.op.as_str());
        space!(self);
        self.emit_expr(&node.right)?;
        if needs_parens {
            punct!(self, ")");
        }
        Ok(())
    }

    fn emit_assign_expr(&mut self, node: &AssignExpr) -> Result {
        self.emit_pat(&node.left)?;
        space!(self);
        operator!(self, node.op.as_str());
        space!(self);
        self.emit_expr(&node.right)
    }

    fn emit_member_expr(&mut self, node: &MemberExpr) -> Result {
        match &node.obj {
            ExprOrSuper::Super(_) => keyword!(self, "super"),
            ExprOrSuper::Expr(obj) => self.emit_expr(obj)?,
        }

        match &node.prop {
            MemberProp::Ident(ident) => {
                punct!(self, if node.optional { "?." } else { "." });
                self.emit_ident(ident)
            }
            MemberProp::PrivateName(name) => {
                punct!(self, if node.optional { "?." } else { "." });
                self.emit_private_name(name)
            }
            MemberProp::Computed(computed) => {
                if node.optional {
                    punct!(self, "?.");
                }
                punct!(self, "[");
                self.emit_expr(&computed.expr)?;
                punct!(self, "]");
                Ok(())
            }
        }
    }

    fn emit_cond_expr(&mut self, node: &CondExpr) -> Result {
        self.emit_expr(&node.test)?;
        space!(self);
        punct!(self, "?");
        space!(self);
        self.emit_expr(&node.cons)?;
        space!(self);
        punct!(self, ":");
        space!(self);
        self.emit_expr(&node.alt)
    }

    fn emit_call_expr(&mut self, node: &CallExpr) -> Result {
        match &node.callee {
            Callee::Super(_) => keyword!(self, "super"),
            Callee::Import(_) => keyword!(self, "import"),
            Callee::Expr(callee) => self.emit_expr(callee)?,
        }
        if node.optional {
            punct!(self, "?.");
        }
        opt!(self, emit_type_args, node.type_args);

        let args_span = if node.span.is_dummy() {
            node.span
        } else {
            Span::new(node.callee.span_hi(), node.span.hi)
        };
        self.emit_args(args_span, &node.args)
    }

    fn emit_new_expr(&mut self, node: &NewExpr) -> Result {
        keyword!(self, "new");
        space!(self);
        self.emit_expr(&node.callee)?;
        opt!(self, emit_type_args, node.type_args);
        match &node.args {
            Some(args) => {
                let args_span = if node.span.is_dummy() {
                    node.span
                } else {
                    Span::new(node.callee.span_hi(), node.span.hi)
                };
                self.emit_args(args_span, args)
            }
            None => {
                punct!(self, "(");
                punct!(self, ")");
                Ok(())
            }
        }
    }

    /// Argument list of a call, which keeps a leading or trailing callback on
    /// the line of the call when the arguments do not fit.
    fn emit_args(&mut self, parent_node: Span, args: &[ExprOrSpread]) -> Result {
        let format = ListFormat::CallExpressionArguments;
        let emit_arg = |e: &mut Self, arg: &ExprOrSpread| e.emit_expr_or_spread(arg);

        match self.list_layout(parent_node, args, &emit_arg, format)? {
            Layout::Measured(text) => return self.wr.write_str(&text),
            Layout::Flat => {
                return self.emit_list_items(parent_node, args, &emit_arg, format, false)
            }
            Layout::Broken => {}
        }

        if !self.has_comments_between(parent_node, args) {
            match (hug(args), args.split_first(), args.split_last()) {
                (Some(Hug::Last), _, Some((last, rest))) => {
                    if let Some(text) = self.render_args_inline(rest)? {
                        punct!(self, "(");
                        self.wr.write_str(&text)?;
                        if !rest.is_empty() {
                            punct!(self, ",");
                            space!(self);
                        }
                        self.emit_expr_or_spread(last)?;
                        punct!(self, ")");
                        return Ok(());
                    }
                }
                (Some(Hug::First), Some((first, rest)), _) => {
                    if let Some(text) = self.render_args_inline(rest)? {
                        punct!(self, "(");
                        self.emit_expr_or_spread(first)?;
                        punct!(self, ",");
                        space!(self);
                        self.wr.write_str(&text)?;
                        punct!(self, ")");
                        return Ok(());
                    }
                }
                _ => {}
            }
        }

        self.emit_list_items(parent_node, args, &emit_arg, format, true)
    }

    /// Prints `args` on one line, or returns `None` if they hold a line break
    /// or comments.
    fn render_args_inline(&self, args: &[ExprOrSpread]) -> Result<Option<String>> {
        if let (Some(first), Some(last)) = (args.first(), args.last()) {
            if self.has_pending_comments(first.span().to(last.span())) {
                return Ok(None);
            }
        }
        let text = self.render_flat(|e| {
            for (i, arg) in args.iter().enumerate() {
                if i != 0 {
                    punct!(e, ",");
                    space!(e);
                }
                e.emit_expr_or_spread(arg)?;
            }
            Ok(())
        })?;
        if text.contains('\n') {
            return Ok(None);
        }
        Ok(Some(text))
    }

    fn emit_seq_expr(&mut self, node: &SeqExpr) -> Result {
        self.emit_list(
            node.span,
            &node.exprs,
            |e, expr| e.emit_expr(expr),
            ListFormat::SequenceExpressionElements,
        )
    }

    fn emit_tpl(&mut self, node: &Tpl) -> Result {
        punct!(self, "`");
        for (i, quasi) in node.quasis.iter().enumerate() {
            if i != 0 {
                punct!(self, "${");
                if let Some(expr) = node.exprs.get(i - 1) {
                    self.emit_expr(expr)?;
                }
                punct!(self, "}");
            }
            self.wr.write_str(&quasi.raw)?;
        }
        punct!(self, "`");
        Ok(())
    }

    fn emit_tagged_tpl(&mut self, node: &TaggedTpl) -> Result {
        self.emit_expr(&node.tag)?;
        opt!(self, emit_type_args, node.type_args);
        self.emit_tpl(&node.tpl)
    }

    fn emit_arrow_expr(&mut self, node: &ArrowExpr) -> Result {
        if node.is_async {
            keyword!(self, "async");
            space!(self);
        }
        opt!(self, emit_type_params, node.type_params);

        let bare_param = match node.params.as_slice() {
            [Pat::Ident(BindingIdent {
                optional: false,
                type_ann: None,
                id,
                ..
            })] if self.cfg.arrow_parens == ArrowParens::Avoid
                && node.type_params.is_none()
                && node.return_type.is_none()
                && node.predicate.is_none() =>
            {
                Some(id)
            }
            _ => None,
        };
        match bare_param {
            Some(id) => self.emit_ident(id)?,
            None => self.emit_params(params_span(&node.params), &node.params, |p| p)?,
        }
        self.emit_return_type(node.return_type.as_ref(), node.predicate.as_ref())?;

        space!(self);
        operator!(self, "=>");
        space!(self);

        match &node.body {
            BlockStmtOrExpr::BlockStmt(block) => self.emit_block_stmt(block),
            BlockStmtOrExpr::Expr(expr) => {
                if let Expr::Object(..) = **expr {
                    punct!(self, "(");
                    self.emit_expr(expr)?;
                    punct!(self, ")");
                    Ok(())
                } else {
                    self.emit_expr(expr)
                }
            }
        }
    }

    fn emit_yield_expr(&mut self, node: &YieldExpr) -> Result {
        keyword!(self, "yield");
        if node.delegate {
            punct!(self, "*");
        }
        opt_leading_space!(self, emit_expr, node.arg);
        Ok(())
    }

    fn emit_meta_prop_expr(&mut self, node: &MetaPropExpr) -> Result {
        self.emit_ident(&node.meta)?;
        punct!(self, ".");
        self.emit_ident(&node.prop)
    }

    fn emit_await_expr(&mut self, node: &AwaitExpr) -> Result {
        keyword!(self, "await");
        space!(self);
        self.emit_expr(&node.arg)
    }

    fn emit_paren_expr(&mut self, node: &ParenExpr) -> Result {
        punct!(self, "(");
        self.emit_expr(&node.expr)?;
        punct!(self, ")");
        Ok(())
    }

    fn emit_type_cast_expr(&mut self, node: &TypeCastExpr) -> Result {
        self.emit_expr(&node.expr)?;
        self.emit_type_ann(&node.type_ann)
    }

    fn emit_as_expr(&mut self, node: &AsExpr) -> Result {
        self.emit_expr(&node.expr)?;
        space!(self);
        keyword!(self, "as");
        space!(self);
        self.emit_type(&node.type_ann)
    }
}

/// Patterns
impl<'a> Emitter<'a> {
    pub fn emit_pat(&mut self, node: &Pat) -> Result {
        match node {
            Pat::Ident(n) => {
                self.emit_ident(&n.id)?;
                if n.optional {
                    punct!(self, "?");
                }
                opt!(self, emit_type_ann, n.type_ann);
                Ok(())
            }
            Pat::Array(n) => self.emit_array_pat(n),
            Pat::Rest(n) => self.emit_rest_pat(n),
            Pat::Object(n) => self.emit_object_pat(n),
            Pat::Assign(n) => {
                self.emit_pat(&n.left)?;
                space!(self);
                operator!(self, "=");
                space!(self);
                self.emit_expr(&n.right)
            }
            Pat::Expr(n) => self.emit_expr(n),
        }
    }

    fn emit_array_pat(&mut self, node: &ArrayPat) -> Result {
        self.emit_list(
            node.span,
            &node.elems,
            |e, elem| match elem {
                Some(elem) => e.emit_pat(elem),
                None => Ok(()),
            },
            ListFormat::ArrayBindingPatternElements,
        )?;
        if node.optional {
            punct!(self, "?");
        }
        opt!(self, emit_type_ann, node.type_ann);
        Ok(())
    }

    fn emit_rest_pat(&mut self, node: &RestPat) -> Result {
        punct!(self, "...");
        self.emit_pat(&node.arg)?;
        opt!(self, emit_type_ann, node.type_ann);
        Ok(())
    }

    fn emit_object_pat(&mut self, node: &ObjectPat) -> Result {
        let mut format = ListFormat::ObjectBindingPatternElements;
        if let Some(ObjectPatProp::Rest(..)) = node.props.last() {
            format -= ListFormat::TrailingCommaEs5;
        }
        // The annotation is not part of the list.
        let props_span = match &node.type_ann {
            Some(ann) if !node.span.is_dummy() => Span::new(node.span.lo, ann.span.lo),
            _ => node.span,
        };
        self.emit_list(
            props_span,
            &node.props,
            |e, prop| e.emit_object_pat_prop(prop),
            format,
        )?;
        if node.optional {
            punct!(self, "?");
        }
        opt!(self, emit_type_ann, node.type_ann);
        Ok(())
    }

    fn emit_object_pat_prop(&mut self, node: &ObjectPatProp) -> Result {
        match node {
            ObjectPatProp::KeyValue(n) => {
                self.emit_prop_name(&n.key)?;
                punct!(self, ":");
                space!(self);
                self.emit_pat(&n.value)
            }
            ObjectPatProp::Assign(n) => {
                self.emit_ident(&n.key)?;
                if let Some(value) = &n.value {
                    space!(self);
                    operator!(self, "=");
                    space!(self);
                    self.emit_expr(value)?;
                }
                Ok(())
            }
            ObjectPatProp::Rest(n) => self.emit_rest_pat(n),
        }
    }

    /// `(a, b)` of a function or arrow.
    pub(crate) fn emit_params<N, F>(&mut self, parent_node: Span, params: &[N], pat: F) -> Result
    where
        N: Spanned,
        F: Fn(&N) -> &Pat,
    {
        let mut format = ListFormat::Parameters;
        if let Some(Pat::Rest(..)) = params.last().map(&pat) {
            format -= ListFormat::TrailingCommaAll;
        }
        self.emit_list(parent_node, params, |e, param| e.emit_pat(pat(param)), format)
    }

    /// `: T` and Flow `%checks` after a parameter list.
    pub(crate) fn emit_return_type(
        &mut self,
        return_type: Option<&TypeAnn>,
        predicate: Option<&Predicate>,
    ) -> Result {
        if let Some(return_type) = return_type {
            self.emit_type_ann(return_type)?;
        }
        if let Some(predicate) = predicate {
            if return_type.is_some() {
                space!(self);
            } else {
                punct!(self, ":");
                space!(self);
            }
            self.emit_predicate(predicate)?;
        }
        Ok(())
    }

    pub(crate) fn emit_predicate(&mut self, node: &Predicate) -> Result {
        punct!(self, "%");
        keyword!(self, "checks");
        if let Some(expr) = &node.expr {
            punct!(self, "(");
            self.emit_expr(expr)?;
            punct!(self, ")");
        }
        Ok(())
    }
}

/// Covers every parameter, or nothing if there are none.
pub(crate) fn params_span<N: Spanned>(params: &[N]) -> Span {
    match (params.first(), params.last()) {
        (Some(first), Some(last)) => first.span().to(last.span()),
        _ => DUMMY_SP,
    }
}

fn hug(args: &[ExprOrSpread]) -> Option<Hug> {
    fn huggable(arg: &ExprOrSpread) -> bool {
        arg.spread.is_none() && util::is_huggable(&arg.expr)
    }

    let (last, init) = args.split_last()?;
    if huggable(last) && !init.iter().any(huggable) {
        return Some(Hug::Last);
    }

    let (first, rest) = args.split_first()?;
    let is_callback = matches!(*first.expr, Expr::Fn(..) | Expr::Arrow(..));
    if is_callback && huggable(first) && !rest.is_empty() && !rest.iter().any(huggable) {
        return Some(Hug::First);
    }
    None
}
