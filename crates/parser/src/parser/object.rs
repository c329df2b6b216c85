//! Parser for object literal.

use super::*;
use crate::token::Word;

impl<'a> Parser<'a> {
    /// Parse an object literal. Patterns written as object literals are
    /// converted afterwards by `reparse_expr_as_pat`.
    pub(super) fn parse_object_lit(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        expect!(self, '{');

        let ctx = self.bracketed_ctx();
        let mut p = self.with_ctx(ctx);

        let props = p.parse_delimited(&tok!('}'), |p| p.parse_object_prop())?;
        expect!(p, '}');

        Ok(Box::new(Expr::Object(ObjectLit {
            span: span!(p, start),
            props,
        })))
    }

    /// ECMAScript 'PropertyName'
    pub(super) fn parse_prop_name(&mut self) -> PResult<PropName> {
        let start = self.input.cur_pos();

        let v = match self.input.cur() {
            Some(Token::Str { .. }) => match self.input.bump() {
                Token::Str { value, raw } => PropName::Str(Str {
                    span: span!(self, start),
                    value,
                    raw,
                }),
                _ => unreachable!(),
            },
            Some(Token::Num { .. }) => match self.input.bump() {
                Token::Num { value, raw } => PropName::Num(Number {
                    span: span!(self, start),
                    value,
                    raw,
                }),
                _ => unreachable!(),
            },
            Some(Token::BigInt { .. }) => match self.input.bump() {
                Token::BigInt { raw } => PropName::BigInt(BigInt {
                    span: span!(self, start),
                    raw,
                }),
                _ => unreachable!(),
            },
            Some(Token::Word(..)) => PropName::Ident(self.parse_ident_name()?),
            Some(&tok!('[')) => PropName::Computed(self.parse_computed_prop_name()?),
            _ => unexpected!(
                self,
                "an identifier, string literal, numeric literal or [ for the computed key"
            ),
        };

        Ok(v)
    }

    /// The current word is a modifier (`async`, `get`, `static`, ...) rather
    /// than the key of a member, because a key follows it.
    pub(super) fn is_modifier_before_key(&mut self) -> bool {
        if self.input.has_linebreak_between_cur_and_peeked()
            && self.input.is_word("async")
        {
            return false;
        }

        match self.input.peek() {
            Some(Token::Word(..))
            | Some(Token::Str { .. })
            | Some(Token::Num { .. })
            | Some(Token::BigInt { .. })
            | Some(&tok!('['))
            | Some(&tok!('#'))
            | Some(&tok!('*')) => true,
            _ => false,
        }
    }

    fn parse_object_prop(&mut self) -> PResult<PropOrSpread> {
        let start = self.input.cur_pos();

        if eat!(self, "...") {
            let dot3_token = span!(self, start);
            let expr = self.parse_assignment_expr()?;
            return Ok(PropOrSpread::Spread(SpreadElement {
                span: span!(self, start),
                dot3_token,
                expr,
            }));
        }

        let is_async = self.input.is_word("async") && self.is_modifier_before_key();
        if is_async {
            self.input.bump();
        }
        let is_generator = eat!(self, '*');

        let kind = if !is_async && !is_generator {
            if self.input.is_word("get") && self.is_modifier_before_key() {
                self.input.bump();
                MethodKind::Getter
            } else if self.input.is_word("set") && self.is_modifier_before_key() {
                self.input.bump();
                MethodKind::Setter
            } else {
                MethodKind::Method
            }
        } else {
            MethodKind::Method
        };

        let is_ident_key = matches!(self.input.cur(), Some(Token::Word(Word::Ident(..))));
        let key = self.parse_prop_name()?;

        if is_async || is_generator || kind != MethodKind::Method || is!(self, '(') || is!(self, '<')
        {
            let function = self.parse_fn_signature_and_body(start, is_async, is_generator)?;
            let span = span!(self, start);
            let prop = match kind {
                MethodKind::Method => Prop::Method(MethodProp {
                    span,
                    key,
                    function,
                }),
                MethodKind::Getter => Prop::Getter(GetterProp {
                    span,
                    key,
                    function,
                }),
                MethodKind::Setter => Prop::Setter(SetterProp {
                    span,
                    key,
                    function,
                }),
            };
            return Ok(PropOrSpread::Prop(Box::new(prop)));
        }

        if eat!(self, ':') {
            let value = self.parse_assignment_expr()?;
            return Ok(PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
                key,
                value,
            }))));
        }

        // `{ a }`, `{ a = 1 }`
        let ident = match key {
            PropName::Ident(ident) if is_ident_key => ident,
            _ => unexpected!(self, "`:`"),
        };
        if eat!(self, '=') {
            let value = self.parse_assignment_expr()?;
            return Ok(PropOrSpread::Prop(Box::new(Prop::Assign(AssignProp {
                key: ident,
                value,
            }))));
        }

        Ok(PropOrSpread::Prop(Box::new(Prop::Shorthand(ident))))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::expr;
    use super::*;

    fn props(src: &str) -> Vec<PropOrSpread> {
        match *expr(src) {
            Expr::Paren(ParenExpr { expr, .. }) => match *expr {
                Expr::Object(ObjectLit { props, .. }) => props,
                e => panic!("{:?}", e),
            },
            e => panic!("{:?}", e),
        }
    }

    #[test]
    fn property_kinds() {
        let props = props(
            "({ a, b: 1, 'c': 2, 3: 3, [d]: 4, ...e, f() {}, get g() { return 1 }, set g(v) {}, async h() {}, *i() {}, async *j() {} });",
        );
        assert_eq!(props.len(), 12);
        assert!(matches!(&props[0], PropOrSpread::Prop(p) if matches!(**p, Prop::Shorthand(..))));
        assert!(matches!(&props[5], PropOrSpread::Spread(..)));
        assert!(matches!(&props[7], PropOrSpread::Prop(p) if matches!(**p, Prop::Getter(..))));
        assert!(matches!(&props[8], PropOrSpread::Prop(p) if matches!(**p, Prop::Setter(..))));
        match &props[9] {
            PropOrSpread::Prop(p) => match &**p {
                Prop::Method(m) => assert!(m.function.is_async),
                p => panic!("{:?}", p),
            },
            p => panic!("{:?}", p),
        }
    }

    #[test]
    fn modifier_names_are_keys() {
        let props = props("({ get: 1, set() {}, async, static: 2 });");
        assert_eq!(props.len(), 4);
        assert!(matches!(&props[0], PropOrSpread::Prop(p) if matches!(**p, Prop::KeyValue(..))));
        assert!(matches!(&props[1], PropOrSpread::Prop(p) if matches!(**p, Prop::Method(..))));
        assert!(matches!(&props[2], PropOrSpread::Prop(p) if matches!(**p, Prop::Shorthand(..))));
    }

    #[test]
    fn typed_method() {
        let props = props("({ m<T>(x: T): T { return x; } });");
        match &props[0] {
            PropOrSpread::Prop(p) => match &**p {
                Prop::Method(m) => {
                    assert!(m.function.type_params.is_some());
                    assert!(m.function.return_type.is_some());
                }
                p => panic!("{:?}", p),
            },
            p => panic!("{:?}", p),
        }
    }
}
