//! 13.3.3 Destructuring Binding Patterns
use super::{util::ExprExt, *};
use global_common::Spanned;

impl<'a> Parser<'a> {
    /// Identifier, array pattern or object pattern, without an annotation.
    pub(super) fn parse_binding_pat_or_ident(&mut self) -> PResult<Pat> {
        match self.input.cur() {
            Some(&tok!('[')) => self.parse_array_binding_pat(),
            Some(&tok!('{')) => self.parse_object_binding_pat(),
            _ => Ok(Pat::Ident(self.parse_binding_ident()?)),
        }
    }

    /// babel: `parseBindingElement`
    pub(super) fn parse_binding_element(&mut self) -> PResult<Pat> {
        let start = self.input.cur_pos();
        let left = self.parse_binding_pat_or_ident()?;
        self.parse_default_value(start, left)
    }

    fn parse_default_value(&mut self, start: BytePos, left: Pat) -> PResult<Pat> {
        if eat!(self, '=') {
            let right = self.parse_assignment_expr()?;
            return Ok(Pat::Assign(AssignPat {
                span: span!(self, start),
                left: Box::new(left),
                right,
            }));
        }
        Ok(left)
    }

    fn parse_array_binding_pat(&mut self) -> PResult<Pat> {
        let start = self.input.cur_pos();
        expect!(self, '[');

        let mut elems = vec![];
        while !eof!(self) && !is!(self, ']') {
            if eat!(self, ',') {
                elems.push(None);
                continue;
            }

            if is!(self, "...") {
                let rest = self.parse_rest_pat(false)?;
                elems.push(Some(rest));
                if is!(self, ',') {
                    syntax_error!(self, SyntaxError::CommaAfterRestElement)
                }
                break;
            }

            elems.push(Some(self.parse_binding_element()?));
            if !is!(self, ']') {
                expect!(self, ',');
            }
        }
        expect!(self, ']');

        Ok(Pat::Array(ArrayPat {
            span: span!(self, start),
            elems,
            optional: false,
            type_ann: None,
        }))
    }

    fn parse_object_binding_pat(&mut self) -> PResult<Pat> {
        let start = self.input.cur_pos();
        expect!(self, '{');

        let mut props = vec![];
        while !eof!(self) && !is!(self, '}') {
            if is!(self, "...") {
                match self.parse_rest_pat(false)? {
                    Pat::Rest(rest) => props.push(ObjectPatProp::Rest(rest)),
                    _ => unreachable!(),
                }
                if is!(self, ',') {
                    syntax_error!(self, SyntaxError::CommaAfterRestElement)
                }
                break;
            }

            let prop_start = self.input.cur_pos();
            let is_ident_key = self.input.is_ident();
            let key = self.parse_prop_name()?;
            if eat!(self, ':') {
                let value = self.parse_binding_element()?;
                props.push(ObjectPatProp::KeyValue(KeyValuePatProp {
                    key,
                    value: Box::new(value),
                }));
            } else {
                let key = match key {
                    PropName::Ident(ident) if is_ident_key => ident,
                    _ => unexpected!(self, "`:`"),
                };
                let value = if eat!(self, '=') {
                    Some(self.parse_assignment_expr()?)
                } else {
                    None
                };
                props.push(ObjectPatProp::Assign(AssignPatProp {
                    span: span!(self, prop_start),
                    key,
                    value,
                }));
            }

            if !is!(self, '}') {
                expect!(self, ',');
            }
        }
        expect!(self, '}');

        Ok(Pat::Object(ObjectPat {
            span: span!(self, start),
            props,
            optional: false,
            type_ann: None,
        }))
    }

    /// `...pat`, with an annotation in parameter position.
    fn parse_rest_pat(&mut self, allow_annotation: bool) -> PResult<Pat> {
        let start = self.input.cur_pos();
        expect!(self, "...");
        let dot3_token = span!(self, start);

        let arg = self.parse_binding_pat_or_ident()?;
        let type_ann = if allow_annotation && self.syntax.flow && is!(self, ':') {
            Some(self.parse_type_ann()?)
        } else {
            None
        };
        if is!(self, '=') {
            syntax_error!(self, SyntaxError::RestPatInDeclaration)
        }

        Ok(Pat::Rest(RestPat {
            span: span!(self, start),
            dot3_token,
            arg: Box::new(arg),
            type_ann,
        }))
    }

    /// Attaches `?` and `: T` to a freshly parsed binding.
    pub(super) fn parse_pat_annotation(
        &mut self,
        start: BytePos,
        pat: Pat,
        allow_optional: bool,
    ) -> PResult<Pat> {
        if !self.syntax.flow {
            return Ok(pat);
        }

        let optional = allow_optional && eat!(self, '?');
        let type_ann = if is!(self, ':') {
            Some(self.parse_type_ann()?)
        } else {
            None
        };
        if !optional && type_ann.is_none() {
            return Ok(pat);
        }

        let span = span!(self, start);
        Ok(match pat {
            Pat::Ident(id) => Pat::Ident(BindingIdent {
                span,
                id: id.id,
                optional,
                type_ann,
            }),
            Pat::Array(arr) => Pat::Array(ArrayPat {
                span,
                optional,
                type_ann,
                ..arr
            }),
            Pat::Object(obj) => Pat::Object(ObjectPat {
                span,
                optional,
                type_ann,
                ..obj
            }),
            _ => syntax_error!(self, span, SyntaxError::InvalidPat),
        })
    }

    /// `(a, b?: T, { c } = {}, ...rest: Array<U>)`
    pub(super) fn parse_formal_params(&mut self) -> PResult<Vec<Param>> {
        expect!(self, '(');

        let mut params = vec![];
        while !eof!(self) && !is!(self, ')') {
            let start = self.input.cur_pos();
            let pat = if is!(self, "...") {
                let rest = self.parse_rest_pat(true)?;
                if is!(self, ',') {
                    syntax_error!(self, SyntaxError::TooManyRestParams)
                }
                rest
            } else {
                self.parse_formal_param_pat()?
            };
            params.push(Param {
                span: span!(self, start),
                pat,
            });

            if !is!(self, ')') {
                expect!(self, ',');
            }
        }
        expect!(self, ')');

        Ok(params)
    }

    fn parse_formal_param_pat(&mut self) -> PResult<Pat> {
        let start = self.input.cur_pos();

        // Flow `function f(this: T)`
        let pat = if is!(self, "this") && self.input.peeked_is(&tok!(':')) {
            let id = self.parse_ident_name()?;
            Pat::Ident(id.into())
        } else {
            self.parse_binding_pat_or_ident()?
        };
        let pat = self.parse_pat_annotation(start, pat, true)?;
        self.parse_default_value(start, pat)
    }

    /// Converts an expression parsed before `=` into the pattern it spells.
    pub(super) fn reparse_expr_as_pat(&mut self, expr: Box<Expr>) -> PResult<Box<Pat>> {
        self.expr_to_pat(expr).map(Box::new)
    }

    fn expr_to_pat(&mut self, expr: Box<Expr>) -> PResult<Pat> {
        let span = expr.span();
        match *expr {
            Expr::Ident(id) => Ok(Pat::Ident(id.into())),
            Expr::Array(ArrayLit { span, elems }) => {
                let count = elems.len();
                let mut pats = Vec::with_capacity(count);
                for (i, elem) in elems.into_iter().enumerate() {
                    let pat = match elem {
                        None => None,
                        Some(ExprOrSpread {
                            spread: Some(dot3_token),
                            expr,
                        }) => {
                            if i + 1 != count {
                                syntax_error!(self, expr.span(), SyntaxError::TooManyRestParams)
                            }
                            let rest_span = dot3_token.to(expr.span());
                            Some(Pat::Rest(RestPat {
                                span: rest_span,
                                dot3_token,
                                arg: Box::new(self.expr_to_pat(expr)?),
                                type_ann: None,
                            }))
                        }
                        Some(ExprOrSpread { spread: None, expr }) => Some(self.expr_to_pat(expr)?),
                    };
                    pats.push(pat);
                }
                Ok(Pat::Array(ArrayPat {
                    span,
                    elems: pats,
                    optional: false,
                    type_ann: None,
                }))
            }
            Expr::Object(ObjectLit { span, props }) => {
                let mut pats = Vec::with_capacity(props.len());
                for prop in props {
                    let pat = match prop {
                        PropOrSpread::Spread(SpreadElement {
                            span,
                            dot3_token,
                            expr,
                        }) => ObjectPatProp::Rest(RestPat {
                            span,
                            dot3_token,
                            arg: Box::new(self.expr_to_pat(expr)?),
                            type_ann: None,
                        }),
                        PropOrSpread::Prop(prop) => match *prop {
                            Prop::Shorthand(key) => ObjectPatProp::Assign(AssignPatProp {
                                span: key.span,
                                key,
                                value: None,
                            }),
                            Prop::Assign(AssignProp { key, value }) => {
                                ObjectPatProp::Assign(AssignPatProp {
                                    span: key.span.to(value.span()),
                                    key,
                                    value: Some(value),
                                })
                            }
                            Prop::KeyValue(KeyValueProp { key, value }) => {
                                ObjectPatProp::KeyValue(KeyValuePatProp {
                                    key,
                                    value: Box::new(self.expr_to_pat(value)?),
                                })
                            }
                            prop => syntax_error!(self, prop.span(), SyntaxError::InvalidPat),
                        },
                    };
                    pats.push(pat);
                }
                Ok(Pat::Object(ObjectPat {
                    span,
                    props: pats,
                    optional: false,
                    type_ann: None,
                }))
            }
            Expr::Assign(AssignExpr {
                span,
                op: AssignOp::Assign,
                left,
                right,
            }) => Ok(Pat::Assign(AssignPat { span, left, right })),
            expr => {
                if !expr.is_valid_simple_assignment_target() {
                    syntax_error!(self, span, SyntaxError::InvalidAssignTarget)
                }
                Ok(Pat::Expr(Box::new(expr)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{parse_error, parse_module, stmt, text};
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(src: &str) -> Vec<Param> {
        match stmt(src) {
            Stmt::Decl(Decl::Fn(FnDecl { function, .. })) => function.params,
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn annotated_params() {
        let src = "function f(a: string, b?: number, { c }: Props = {}, ...rest: Array<mixed>) {}";
        let params = params(src);
        assert_eq!(params.len(), 4);

        match &params[1].pat {
            Pat::Ident(b) => {
                assert!(b.optional);
                assert_eq!(text(src, b.span), "b?: number");
                assert_eq!(text(src, b.id.span), "b");
            }
            p => panic!("{:?}", p),
        }
        match &params[2].pat {
            Pat::Assign(AssignPat { left, .. }) => assert!(left.type_ann().is_some()),
            p => panic!("{:?}", p),
        }
        match &params[3].pat {
            Pat::Rest(rest) => assert_eq!(text(src, rest.span), "...rest: Array<mixed>"),
            p => panic!("{:?}", p),
        }
    }

    #[test]
    fn this_param() {
        let params = params("function f(this: Foo, x: number) {}");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn nested_destructuring() {
        let program = parse_module("const { a: [b, , c = 1], ...d } = e;");
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn rest_must_be_last() {
        let err = parse_error("function f(...a, b) {}");
        assert_eq!(*err.kind(), SyntaxError::TooManyRestParams);
    }
}
