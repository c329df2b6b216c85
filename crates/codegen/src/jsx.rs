use super::*;

impl<'a> Emitter<'a> {
    pub(crate) fn emit_jsx_element(&mut self, node: &JSXElement) -> Result {
        self.emit_jsx_opening_element(&node.opening)?;
        self.emit_jsx_children(&node.children)?;
        if let Some(closing) = &node.closing {
            punct!(self, "</");
            self.emit_jsx_element_name(&closing.name)?;
            punct!(self, ">");
        }
        Ok(())
    }

    pub(crate) fn emit_jsx_fragment(&mut self, node: &JSXFragment) -> Result {
        punct!(self, "<>");
        self.emit_jsx_children(&node.children)?;
        punct!(self, "</>");
        Ok(())
    }

    fn emit_jsx_opening_element(&mut self, node: &JSXOpeningElement) -> Result {
        punct!(self, "<");
        self.emit_jsx_element_name(&node.name)?;
        opt!(self, emit_type_args, node.type_args);

        for attr in &node.attrs {
            space!(self);
            self.emit_jsx_attr_or_spread(attr)?;
        }

        if node.self_closing {
            space!(self);
            punct!(self, "/>");
        } else {
            punct!(self, ">");
        }
        Ok(())
    }

    fn emit_jsx_element_name(&mut self, node: &JSXElementName) -> Result {
        match node {
            JSXElementName::Ident(n) => self.emit_ident(n),
            JSXElementName::JSXMemberExpr(n) => self.emit_jsx_member_expr(n),
            JSXElementName::JSXNamespacedName(n) => self.emit_jsx_namespaced_name(n),
        }
    }

    fn emit_jsx_member_expr(&mut self, node: &JSXMemberExpr) -> Result {
        match &node.obj {
            JSXObject::Ident(i) => self.emit_ident(i)?,
            JSXObject::JSXMemberExpr(m) => self.emit_jsx_member_expr(m)?,
        }
        punct!(self, ".");
        self.emit_ident(&node.prop)
    }

    fn emit_jsx_namespaced_name(&mut self, node: &JSXNamespacedName) -> Result {
        self.emit_ident(&node.ns)?;
        punct!(self, ":");
        self.emit_ident(&node.name)
    }

    fn emit_jsx_attr_or_spread(&mut self, node: &JSXAttrOrSpread) -> Result {
        match node {
            JSXAttrOrSpread::JSXAttr(n) => self.emit_jsx_attr(n),
            JSXAttrOrSpread::SpreadElement(n) => {
                punct!(self, "{");
                punct!(self, "...");
                self.emit_expr(&n.expr)?;
                punct!(self, "}");
                Ok(())
            }
        }
    }

    fn emit_jsx_attr(&mut self, node: &JSXAttr) -> Result {
        match &node.name {
            JSXAttrName::Ident(n) => self.emit_ident(n)?,
            JSXAttrName::JSXNamespacedName(n) => self.emit_jsx_namespaced_name(n)?,
        }

        if let Some(value) = &node.value {
            punct!(self, "=");
            match value {
                // Attribute strings have no escapes, so the quotes stay.
                JSXAttrValue::Str(s) => self.wr.write_str(&s.raw)?,
                JSXAttrValue::JSXExprContainer(n) => self.emit_jsx_expr_container(n)?,
                JSXAttrValue::JSXElement(n) => self.emit_jsx_element(n)?,
                JSXAttrValue::JSXFragment(n) => self.emit_jsx_fragment(n)?,
            }
        }
        Ok(())
    }

    fn emit_jsx_children(&mut self, children: &[JSXElementChild]) -> Result {
        for child in children {
            match child {
                JSXElementChild::JSXText(n) => self.wr.write_str(&n.raw)?,
                JSXElementChild::JSXExprContainer(n) => self.emit_jsx_expr_container(n)?,
                JSXElementChild::JSXSpreadChild(n) => {
                    punct!(self, "{");
                    punct!(self, "...");
                    self.emit_expr(&n.expr)?;
                    punct!(self, "}");
                }
                JSXElementChild::JSXElement(n) => self.emit_jsx_element(n)?,
                JSXElementChild::JSXFragment(n) => self.emit_jsx_fragment(n)?,
            }
        }
        Ok(())
    }

    fn emit_jsx_expr_container(&mut self, node: &JSXExprContainer) -> Result {
        punct!(self, "{");
        match &node.expr {
            JSXExpr::JSXEmptyExpr(_) => {
                // `{/* comment */}`
                if !node.span.is_dummy() {
                    self.emit_inline_comments(node.span.hi)?;
                }
            }
            JSXExpr::Expr(expr) => self.emit_expr(expr)?,
        }
        punct!(self, "}");
        Ok(())
    }

    /// Emits pending comments ending before `pos` without separating them
    /// from the surrounding code.
    fn emit_inline_comments(&mut self, pos: BytePos) -> Result {
        while let Some(c) = self.pending_comments().first() {
            if c.span.hi > pos {
                break;
            }
            let c = c.clone();
            self.comment_pos += 1;

            self.emit_comment(&c)?;
            if c.kind == CommentKind::Line {
                self.wr.write_line()?;
            }
        }
        Ok(())
    }
}
