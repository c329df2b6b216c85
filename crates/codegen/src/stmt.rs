use super::*;

impl<'a> Emitter<'a> {
    /// Emits `node` without a trailing line break.
    pub fn emit_stmt(&mut self, node: &Stmt) -> Result {
        match node {
            Stmt::Expr(e) => self.emit_expr_stmt(e),
            Stmt::Block(e) => self.emit_block_stmt(e),
            Stmt::Empty(_) => {
                semi!(self);
                Ok(())
            }
            Stmt::Debugger(_) => {
                keyword!(self, "debugger");
                formatting_semi!(self);
                Ok(())
            }
            Stmt::With(e) => self.emit_with_stmt(e),
            Stmt::Return(e) => self.emit_return_stmt(e),
            Stmt::Labeled(e) => self.emit_labeled_stmt(e),
            Stmt::Break(e) => self.emit_break_stmt(e),
            Stmt::Continue(e) => self.emit_continue_stmt(e),
            Stmt::If(e) => self.emit_if_stmt(e),
            Stmt::Switch(e) => self.emit_switch_stmt(e),
            Stmt::Throw(e) => self.emit_throw_stmt(e),
            Stmt::Try(e) => self.emit_try_stmt(e),
            Stmt::While(e) => self.emit_while_stmt(e),
            Stmt::DoWhile(e) => self.emit_do_while_stmt(e),
            Stmt::For(e) => self.emit_for_stmt(e),
            Stmt::ForIn(e) => self.emit_for_in_stmt(e),
            Stmt::ForOf(e) => self.emit_for_of_stmt(e),
            Stmt::Decl(e) => self.emit_decl(e),
        }
    }

    fn emit_expr_stmt(&mut self, node: &ExprStmt) -> Result {
        if !self.cfg.semicolons && util::starts_with_asi_hazard(&node.expr) {
            semi!(self);
        }

        // Would be parsed as a declaration or a block.
        let needs_parens = matches!(
            node.expr.as_ref(),
            Expr::Object(..) | Expr::Fn(..) | Expr::Class(..)
        );
        if needs_parens {
            punct!(self, "(");
            self.emit_expr(&node.expr)?;
            punct!(self, ")");
        } else {
            self.emit_expr(&node.expr)?;
        }
        formatting_semi!(self);
        Ok(())
    }

    pub(crate) fn emit_block_stmt(&mut self, node: &BlockStmt) -> Result {
        punct!(self, "{");
        self.emit_block_body(node.span, &node.stmts)?;
        punct!(self, "}");
        Ok(())
    }

    /// Statements between braces, each on its own indented line.
    fn emit_block_body(&mut self, span: Span, stmts: &[Stmt]) -> Result {
        let stmts = stmts
            .iter()
            .filter(|s| !matches!(s, Stmt::Empty(..)))
            .collect::<Vec<_>>();
        if stmts.is_empty() && !self.has_pending_comments(span) {
            return Ok(());
        }

        self.wr.increase_indent()?;
        self.wr.write_line()?;
        self.emit_body(&stmts, |e, s| e.emit_stmt(s))?;
        if !span.is_dummy() {
            self.emit_leading_comments(span.hi)?;
            self.wr.write_line()?;
        }
        self.wr.decrease_indent()?;
        Ok(())
    }

    /// Body of a control statement, after its head.
    fn emit_sub_stmt(&mut self, node: &Stmt) -> Result {
        match node {
            Stmt::Empty(..) => {
                semi!(self);
                Ok(())
            }
            _ => {
                space!(self);
                self.emit_stmt(node)
            }
        }
    }

    fn emit_with_stmt(&mut self, node: &WithStmt) -> Result {
        keyword!(self, "with");
        space!(self);
        punct!(self, "(");
        self.emit_expr(&node.obj)?;
        punct!(self, ")");
        self.emit_sub_stmt(&node.body)
    }

    fn emit_return_stmt(&mut self, node: &ReturnStmt) -> Result {
        keyword!(self, "return");
        opt_leading_space!(self, emit_expr, node.arg);
        formatting_semi!(self);
        Ok(())
    }

    fn emit_labeled_stmt(&mut self, node: &LabeledStmt) -> Result {
        self.emit_ident(&node.label)?;
        punct!(self, ":");
        self.emit_sub_stmt(&node.body)
    }

    fn emit_break_stmt(&mut self, node: &BreakStmt) -> Result {
        keyword!(self, "break");
        opt_leading_space!(self, emit_ident, node.label);
        formatting_semi!(self);
        Ok(())
    }

    fn emit_continue_stmt(&mut self, node: &ContinueStmt) -> Result {
        keyword!(self, "continue");
        opt_leading_space!(self, emit_ident, node.label);
        formatting_semi!(self);
        Ok(())
    }

    fn emit_if_stmt(&mut self, node: &IfStmt) -> Result {
        keyword!(self, "if");
        space!(self);
        punct!(self, "(");
        self.emit_expr(&node.test)?;
        punct!(self, ")");
        self.emit_sub_stmt(&node.cons)?;

        if let Some(alt) = &node.alt {
            if let Stmt::Block(..) = *node.cons {
                space!(self);
            } else {
                self.wr.write_line()?;
            }
            keyword!(self, "else");
            self.emit_sub_stmt(alt)?;
        }
        Ok(())
    }

    fn emit_switch_stmt(&mut self, node: &SwitchStmt) -> Result {
        keyword!(self, "switch");
        space!(self);
        punct!(self, "(");
        self.emit_expr(&node.discriminant)?;
        punct!(self, ")");
        space!(self);
        punct!(self, "{");
        if !node.cases.is_empty() || self.has_pending_comments(node.span) {
            self.wr.increase_indent()?;
            self.wr.write_line()?;
            self.emit_body(&node.cases, |e, case| e.emit_switch_case(case))?;
            if !node.span.is_dummy() {
                self.emit_leading_comments(node.span.hi)?;
                self.wr.write_line()?;
            }
            self.wr.decrease_indent()?;
        }
        punct!(self, "}");
        Ok(())
    }

    fn emit_switch_case(&mut self, node: &SwitchCase) -> Result {
        match &node.test {
            Some(test) => {
                keyword!(self, "case");
                space!(self);
                self.emit_expr(test)?;
            }
            None => keyword!(self, "default"),
        }
        punct!(self, ":");

        let cons = node
            .cons
            .iter()
            .filter(|s| !matches!(s, Stmt::Empty(..)))
            .collect::<Vec<_>>();
        match cons.as_slice() {
            [] => {}
            [Stmt::Block(block)] => {
                space!(self);
                self.emit_block_stmt(block)?;
            }
            _ => {
                self.wr.increase_indent()?;
                self.wr.write_line()?;
                self.emit_body(&cons, |e, s| e.emit_stmt(s))?;
                self.wr.decrease_indent()?;
            }
        }
        Ok(())
    }

    fn emit_throw_stmt(&mut self, node: &ThrowStmt) -> Result {
        keyword!(self, "throw");
        space!(self);
        self.emit_expr(&node.arg)?;
        formatting_semi!(self);
        Ok(())
    }

    fn emit_try_stmt(&mut self, node: &TryStmt) -> Result {
        keyword!(self, "try");
        space!(self);
        self.emit_block_stmt(&node.block)?;

        if let Some(handler) = &node.handler {
            space!(self);
            self.emit_catch_clause(handler)?;
        }

        if let Some(finalizer) = &node.finalizer {
            space!(self);
            keyword!(self, "finally");
            space!(self);
            self.emit_block_stmt(finalizer)?;
        }
        Ok(())
    }

    fn emit_catch_clause(&mut self, node: &CatchClause) -> Result {
        keyword!(self, "catch");
        space!(self);
        if let Some(param) = &node.param {
            punct!(self, "(");
            self.emit_pat(param)?;
            punct!(self, ")");
            space!(self);
        }
        self.emit_block_stmt(&node.body)
    }

    fn emit_while_stmt(&mut self, node: &WhileStmt) -> Result {
        keyword!(self, "while");
        space!(self);
        punct!(self, "(");
        self.emit_expr(&node.test)?;
        punct!(self, ")");
        self.emit_sub_stmt(&node.body)
    }

    fn emit_do_while_stmt(&mut self, node: &DoWhileStmt) -> Result {
        keyword!(self, "do");
        self.emit_sub_stmt(&node.body)?;
        if let Stmt::Block(..) = *node.body {
            space!(self);
        } else {
            self.wr.write_line()?;
        }
        keyword!(self, "while");
        space!(self);
        punct!(self, "(");
        self.emit_expr(&node.test)?;
        punct!(self, ")");
        formatting_semi!(self);
        Ok(())
    }

    fn emit_for_stmt(&mut self, node: &ForStmt) -> Result {
        keyword!(self, "for");
        space!(self);
        punct!(self, "(");
        if let Some(init) = &node.init {
            let old = self.flags.replace(Flags::in_for_stmt_head, true);
            let res = self.emit_var_decl_or_expr(init);
            self.flags.replace(Flags::in_for_stmt_head, old);
            res?;
        }
        semi!(self);
        opt_leading_space!(self, emit_expr, node.test);
        semi!(self);
        opt_leading_space!(self, emit_expr, node.update);
        punct!(self, ")");
        self.emit_sub_stmt(&node.body)
    }

    fn emit_for_in_stmt(&mut self, node: &ForInStmt) -> Result {
        keyword!(self, "for");
        space!(self);
        punct!(self, "(");
        self.emit_var_decl_or_pat(&node.left)?;
        space!(self);
        keyword!(self, "in");
        space!(self);
        self.emit_expr(&node.right)?;
        punct!(self, ")");
        self.emit_sub_stmt(&node.body)
    }

    fn emit_for_of_stmt(&mut self, node: &ForOfStmt) -> Result {
        keyword!(self, "for");
        space!(self);
        if node.await_token.is_some() {
            keyword!(self, "await");
            space!(self);
        }
        punct!(self, "(");
        self.emit_var_decl_or_pat(&node.left)?;
        space!(self);
        keyword!(self, "of");
        space!(self);
        self.emit_expr(&node.right)?;
        punct!(self, ")");
        self.emit_sub_stmt(&node.body)
    }

    fn emit_var_decl_or_pat(&mut self, node: &VarDeclOrPat) -> Result {
        match node {
            VarDeclOrPat::Pat(n) => self.emit_pat(n),
            VarDeclOrPat::VarDecl(n) => self.emit_var_decl(n),
        }
    }

    fn emit_var_decl_or_expr(&mut self, node: &VarDeclOrExpr) -> Result {
        match node {
            VarDeclOrExpr::Expr(n) => self.emit_expr(n),
            VarDeclOrExpr::VarDecl(n) => self.emit_var_decl(n),
        }
    }
}
