use super::*;
use either::Either;

impl<'a> Parser<'a> {
    /// Parse next token as JSX identifier, which may contain `-`.
    fn parse_jsx_ident(&mut self) -> PResult<Ident> {
        debug_assert!(self.syntax.jsx);

        if !is!(self, IdentName) {
            unexpected!(self, "a jsx identifier")
        }
        self.input.rescan_cur(|l| l.rescan_jsx_identifier());
        self.parse_ident_name()
    }

    /// Parse namespaced identifier.
    fn parse_jsx_namespaced_name(&mut self) -> PResult<JSXAttrName> {
        let ns = self.parse_jsx_ident()?;
        if !eat!(self, ':') {
            return Ok(JSXAttrName::Ident(ns));
        }

        let name = self.parse_jsx_ident()?;
        Ok(JSXAttrName::JSXNamespacedName(JSXNamespacedName { ns, name }))
    }

    /// Parses element name in any form - namespaced, member or single
    /// identifier.
    fn parse_jsx_element_name(&mut self) -> PResult<JSXElementName> {
        let mut node = match self.parse_jsx_namespaced_name()? {
            JSXAttrName::Ident(i) => JSXElementName::Ident(i),
            JSXAttrName::JSXNamespacedName(i) => JSXElementName::JSXNamespacedName(i),
        };
        while is!(self, '.') {
            let obj = match node {
                JSXElementName::Ident(i) => JSXObject::Ident(i),
                JSXElementName::JSXMemberExpr(i) => JSXObject::JSXMemberExpr(Box::new(i)),
                JSXElementName::JSXNamespacedName(..) => unexpected!(self, "`>`"),
            };
            self.input.bump();
            let prop = self.parse_jsx_ident()?;
            node = JSXElementName::JSXMemberExpr(JSXMemberExpr { obj, prop });
        }
        Ok(node)
    }

    /// Parses any type of JSX attribute value.
    fn parse_jsx_attr_value(&mut self) -> PResult<JSXAttrValue> {
        match self.input.cur() {
            Some(&tok!('{')) => {
                let node = self.parse_jsx_expr_container()?;
                match node.expr {
                    JSXExpr::JSXEmptyExpr(..) => {
                        syntax_error!(
                            self,
                            node.span,
                            SyntaxError::Unexpected {
                                got: "`}`".into(),
                                expected: "a non-empty expression",
                            }
                        )
                    }
                    JSXExpr::Expr(..) => Ok(JSXAttrValue::JSXExprContainer(node)),
                }
            }
            Some(&tok!('<')) => Ok(match self.parse_jsx_element_or_fragment()? {
                Either::Left(n) => JSXAttrValue::JSXFragment(n),
                Either::Right(n) => JSXAttrValue::JSXElement(Box::new(n)),
            }),
            _ => {
                self.input.rescan_cur(|l| l.rescan_jsx_string());
                Ok(JSXAttrValue::Str(self.parse_str_lit()?))
            }
        }
    }

    /// Parses JSX expression enclosed into curly brackets.
    fn parse_jsx_expr_container(&mut self) -> PResult<JSXExprContainer> {
        let start = self.input.cur_pos();
        expect!(self, '{');

        // `{/* comment */}` holds an empty expression spanning the braces'
        // interior.
        let expr = if is!(self, '}') {
            let span = Span::new(self.input.prev_span().hi, self.input.cur_pos());
            JSXExpr::JSXEmptyExpr(JSXEmptyExpr { span })
        } else {
            let ctx = self.bracketed_ctx();
            JSXExpr::Expr(self.with_ctx(ctx).parse_expr()?)
        };
        expect!(self, '}');

        Ok(JSXExprContainer {
            span: span!(self, start),
            expr,
        })
    }

    fn parse_jsx_spread_child(&mut self) -> PResult<JSXSpreadChild> {
        let start = self.input.cur_pos();
        expect!(self, '{');
        expect!(self, "...");
        let ctx = self.bracketed_ctx();
        let expr = self.with_ctx(ctx).parse_expr()?;
        expect!(self, '}');

        Ok(JSXSpreadChild {
            span: span!(self, start),
            expr,
        })
    }

    /// Parses following JSX attribute name-value pair.
    fn parse_jsx_attr(&mut self) -> PResult<JSXAttrOrSpread> {
        let start = self.input.cur_pos();

        if eat!(self, '{') {
            let dot3_start = self.input.cur_pos();
            expect!(self, "...");
            let dot3_token = span!(self, dot3_start);
            let ctx = self.bracketed_ctx();
            let expr = self.with_ctx(ctx).parse_assignment_expr()?;
            expect!(self, '}');
            return Ok(JSXAttrOrSpread::SpreadElement(SpreadElement {
                span: span!(self, start),
                dot3_token,
                expr,
            }));
        }

        let name = self.parse_jsx_namespaced_name()?;
        let value = if eat!(self, '=') {
            Some(self.parse_jsx_attr_value()?)
        } else {
            None
        };

        Ok(JSXAttrOrSpread::JSXAttr(JSXAttr {
            span: span!(self, start),
            name,
            value,
        }))
    }

    /// Parses JSX opening tag starting after "<".
    fn parse_jsx_opening_element_at(
        &mut self,
        start: BytePos,
    ) -> PResult<Either<JSXOpeningFragment, JSXOpeningElement>> {
        if eat!(self, '>') {
            return Ok(Either::Left(JSXOpeningFragment {
                span: span!(self, start),
            }));
        }

        let name = self.parse_jsx_element_name()?;

        let mut attrs = vec![];
        while !eof!(self) && !is!(self, '/') && !is!(self, '>') {
            attrs.push(self.parse_jsx_attr()?);
        }
        let self_closing = eat!(self, '/');
        if !eat!(self, '>') {
            unexpected!(self, "`>`")
        }

        Ok(Either::Right(JSXOpeningElement {
            name,
            span: span!(self, start),
            attrs,
            self_closing,
            type_args: None,
        }))
    }

    /// Parses JSX closing tag starting after "</".
    fn parse_jsx_closing_element_at(
        &mut self,
        start: BytePos,
    ) -> PResult<Either<JSXClosingFragment, JSXClosingElement>> {
        if eat!(self, '>') {
            return Ok(Either::Left(JSXClosingFragment {
                span: span!(self, start),
            }));
        }

        let name = self.parse_jsx_element_name()?;
        expect!(self, '>');
        Ok(Either::Right(JSXClosingElement {
            span: span!(self, start),
            name,
        }))
    }

    /// Children up to and including the closing tag. Each child position is
    /// read by the JSX child scanner, never by the ordinary lexer.
    fn parse_jsx_children(
        &mut self,
    ) -> PResult<(
        Vec<JSXElementChild>,
        Either<JSXClosingFragment, JSXClosingElement>,
    )> {
        let mut children = vec![];
        loop {
            self.input.scan_jsx_child();
            let start = self.input.cur_pos();

            match self.input.cur() {
                Some(Token::JSXText { .. }) => match self.input.bump() {
                    Token::JSXText { raw } => children.push(JSXElementChild::JSXText(JSXText {
                        span: span!(self, start),
                        raw,
                    })),
                    _ => unreachable!(),
                },
                Some(&tok!('{')) => {
                    if self.input.peeked_is(&tok!("...")) {
                        children.push(JSXElementChild::JSXSpreadChild(
                            self.parse_jsx_spread_child()?,
                        ));
                    } else {
                        children.push(JSXElementChild::JSXExprContainer(
                            self.parse_jsx_expr_container()?,
                        ));
                    }
                }
                Some(&tok!('<')) => {
                    if self.input.peeked_is(&tok!('/')) {
                        self.input.bump();
                        self.input.bump();
                        let closing = self.parse_jsx_closing_element_at(start)?;
                        return Ok((children, closing));
                    }
                    children.push(match self.parse_jsx_element_or_fragment()? {
                        Either::Left(f) => JSXElementChild::JSXFragment(f),
                        Either::Right(e) => JSXElementChild::JSXElement(Box::new(e)),
                    });
                }
                _ => unexpected!(self, "`<`, jsx text or `{`"),
            }
        }
    }

    /// Parses entire JSX element, including its opening tag, attributes,
    /// contents and closing tag.
    ///
    /// babel: `jsxParseElementAt`
    pub(super) fn parse_jsx_element_or_fragment(
        &mut self,
    ) -> PResult<Either<JSXFragment, JSXElement>> {
        debug_assert!(self.syntax.jsx);

        let start = self.input.cur_pos();
        expect!(self, '<');

        let opening = self.parse_jsx_opening_element_at(start)?;
        let self_closing = match opening {
            Either::Right(ref el) => el.self_closing,
            Either::Left(..) => false,
        };

        let (children, closing) = if self_closing {
            (vec![], None)
        } else {
            let (children, closing) = self.parse_jsx_children()?;
            (children, Some(closing))
        };
        let span = span!(self, start);

        Ok(match (opening, closing) {
            (Either::Left(opening), Some(Either::Left(closing))) => Either::Left(JSXFragment {
                span,
                opening,
                children,
                closing,
            }),
            (Either::Left(..), Some(Either::Right(closing))) => {
                syntax_error!(self, closing.span, SyntaxError::JSXExpectedClosingFragment)
            }
            (Either::Left(..), None) => unreachable!(),
            (Either::Right(opening), None) => Either::Right(JSXElement {
                span,
                opening,
                children,
                closing: None,
            }),
            (Either::Right(opening), Some(Either::Left(closing))) => syntax_error!(
                self,
                closing.span,
                SyntaxError::JSXExpectedClosingTag {
                    tag: qualified_jsx_name(&opening.name)
                }
            ),
            (Either::Right(opening), Some(Either::Right(closing))) => {
                if qualified_jsx_name(&closing.name) != qualified_jsx_name(&opening.name) {
                    syntax_error!(
                        self,
                        closing.span,
                        SyntaxError::JSXExpectedClosingTag {
                            tag: qualified_jsx_name(&opening.name)
                        }
                    )
                }
                Either::Right(JSXElement {
                    span,
                    opening,
                    children,
                    closing: Some(closing),
                })
            }
        })
    }
}

fn qualified_jsx_name(name: &JSXElementName) -> String {
    fn obj_name(obj: &JSXObject) -> String {
        match obj {
            JSXObject::Ident(i) => i.sym.to_string(),
            JSXObject::JSXMemberExpr(e) => format!("{}.{}", obj_name(&e.obj), e.prop.sym),
        }
    }

    match name {
        JSXElementName::Ident(i) => i.sym.to_string(),
        JSXElementName::JSXNamespacedName(n) => format!("{}:{}", n.ns.sym, n.name.sym),
        JSXElementName::JSXMemberExpr(e) => format!("{}.{}", obj_name(&e.obj), e.prop.sym),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{expr, parse_error, text};
    use super::*;
    use pretty_assertions::assert_eq;

    fn element(src: &str) -> JSXElement {
        match *expr(src) {
            Expr::JSXElement(e) => *e,
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn attributes() {
        let src = r#"<Foo.Bar data-id="a\n'b" {...rest} disabled on={() => 1} x:y=<i /> />;"#;
        let el = element(src);
        assert!(el.opening.self_closing);
        assert_eq!(qualified_jsx_name(&el.opening.name), "Foo.Bar");
        assert_eq!(el.opening.attrs.len(), 5);

        match &el.opening.attrs[0] {
            JSXAttrOrSpread::JSXAttr(JSXAttr {
                name: JSXAttrName::Ident(name),
                value: Some(JSXAttrValue::Str(s)),
                ..
            }) => {
                assert_eq!(name.sym, *"data-id");
                assert_eq!(s.value, *"a\\n'b");
            }
            a => panic!("{:?}", a),
        }
        assert!(matches!(
            el.opening.attrs[1],
            JSXAttrOrSpread::SpreadElement(..)
        ));
        match &el.opening.attrs[4] {
            JSXAttrOrSpread::JSXAttr(JSXAttr {
                name: JSXAttrName::JSXNamespacedName(..),
                value: Some(JSXAttrValue::JSXElement(..)),
                ..
            }) => {}
            a => panic!("{:?}", a),
        }
    }

    #[test]
    fn children() {
        let src = "<div>\n  Hello, {name}! // not a comment\n  {/* empty */}\n  <>{...items}</>\n</div>;";
        let el = element(src);
        assert_eq!(el.children.len(), 7);
        match &el.children[0] {
            JSXElementChild::JSXText(t) => assert_eq!(&*t.raw, "\n  Hello, "),
            c => panic!("{:?}", c),
        }
        match &el.children[2] {
            JSXElementChild::JSXText(t) => assert_eq!(&*t.raw, "! // not a comment\n  "),
            c => panic!("{:?}", c),
        }
        match &el.children[3] {
            JSXElementChild::JSXExprContainer(JSXExprContainer {
                expr: JSXExpr::JSXEmptyExpr(e),
                ..
            }) => assert_eq!(text(src, e.span), "/* empty */"),
            c => panic!("{:?}", c),
        }
        match &el.children[5] {
            JSXElementChild::JSXFragment(f) => {
                assert!(matches!(f.children[0], JSXElementChild::JSXSpreadChild(..)))
            }
            c => panic!("{:?}", c),
        }
        assert_eq!(text(src, el.closing.unwrap().span), "</div>");
    }

    #[test]
    fn expressions_continue_after_elements() {
        match *expr("a = <b>{x > y ? <c /> : null}</b> > 1;") {
            Expr::Assign(AssignExpr { right, .. }) => {
                assert!(matches!(*right, Expr::Bin(..)))
            }
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn mismatched_closing_tags() {
        assert_eq!(
            *parse_error("<a></b>;").kind(),
            SyntaxError::JSXExpectedClosingTag { tag: "a".into() }
        );
        assert_eq!(
            *parse_error("<a.b></a.c>;").kind(),
            SyntaxError::JSXExpectedClosingTag { tag: "a.b".into() }
        );
        assert_eq!(
            *parse_error("<></a>;").kind(),
            SyntaxError::JSXExpectedClosingFragment
        );
        assert_eq!(
            *parse_error("<a>text").kind(),
            SyntaxError::UnterminatedJSXContents
        );
    }
}
