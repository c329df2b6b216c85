use super::*;
use crate::token::{BinOpToken, Word};
use global_common::Spanned;

mod decl;

/// Which members an object type body accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ObjectTypeKind {
    /// `{ ... }` in type position: exact, spread and inexact forms.
    Type,
    Interface,
    /// `declare class` bodies: `static` and `proto` members.
    DeclareClass,
}

impl ObjectTypeKind {
    fn allows_modifiers(self) -> bool {
        self == ObjectTypeKind::DeclareClass
    }

    fn allows_spread(self) -> bool {
        self == ObjectTypeKind::Type
    }
}

impl<'a> Parser<'a> {
    /// `: T`, the returned span includes the colon.
    pub(super) fn parse_type_ann(&mut self) -> PResult<TypeAnn> {
        let start = self.input.cur_pos();
        expect!(self, ':');
        let type_ann = self.parse_type()?;
        Ok(TypeAnn {
            span: span!(self, start),
            type_ann,
        })
    }

    /// `flowParseType`
    pub(super) fn parse_type(&mut self) -> PResult<Box<Type>> {
        self.parse_union_type()
    }

    /// `flowParseUnionType`
    fn parse_union_type(&mut self) -> PResult<Box<Type>> {
        let start = self.input.cur_pos();
        eat!(self, '|');
        let first = self.parse_intersection_type()?;
        if !is!(self, '|') {
            return Ok(first);
        }

        let mut types = vec![first];
        while eat!(self, '|') {
            types.push(self.parse_intersection_type()?);
        }
        Ok(Box::new(Type::Union(UnionType {
            span: span!(self, start),
            types,
        })))
    }

    /// `flowParseIntersectionType`
    fn parse_intersection_type(&mut self) -> PResult<Box<Type>> {
        let start = self.input.cur_pos();
        eat!(self, '&');
        let first = self.parse_anon_fn_without_parens()?;
        if !is!(self, '&') {
            return Ok(first);
        }

        let mut types = vec![first];
        while eat!(self, '&') {
            types.push(self.parse_anon_fn_without_parens()?);
        }
        Ok(Box::new(Type::Intersection(IntersectionType {
            span: span!(self, start),
            types,
        })))
    }

    /// `string => void`
    ///
    /// `flowParseAnonFunctionWithoutParens`
    fn parse_anon_fn_without_parens(&mut self) -> PResult<Box<Type>> {
        let start = self.input.cur_pos();
        let param = self.parse_prefix_type()?;
        if self.ctx().no_anon_function_type || !is!(self, "=>") {
            return Ok(param);
        }

        self.input.bump();
        let return_type = self.parse_type()?;
        Ok(Box::new(Type::Fn(FnType {
            span: span!(self, start),
            type_params: None,
            params: vec![FnTypeParam {
                span: param.span(),
                name: None,
                optional: false,
                type_ann: param,
            }],
            rest: None,
            return_type,
            is_constructor: false,
        })))
    }

    /// `flowParsePrefixType`
    fn parse_prefix_type(&mut self) -> PResult<Box<Type>> {
        let start = self.input.cur_pos();
        if eat!(self, '?') {
            let type_ann = self.parse_prefix_type()?;
            return Ok(Box::new(Type::Nullable(NullableType {
                span: span!(self, start),
                type_ann,
            })));
        }
        self.parse_postfix_type()
    }

    /// `T[]`, `T[K]` and `T?.[K]`, none of which may follow a line break.
    ///
    /// `flowParsePostfixType`
    fn parse_postfix_type(&mut self) -> PResult<Box<Type>> {
        let start = self.input.cur_pos();
        let mut ty = self.parse_primary_type()?;
        let mut seen_optional = false;

        while (is!(self, '[') || is!(self, "?.")) && !self.input.had_line_break_before_cur() {
            let optional = eat!(self, "?.");
            seen_optional |= optional;
            expect!(self, '[');

            if !optional && eat!(self, ']') {
                ty = Box::new(Type::Array(ArrayType {
                    span: span!(self, start),
                    elem_type: ty,
                }));
                continue;
            }

            let index_type = {
                let ctx = self.bracketed_ctx();
                self.with_ctx(ctx).parse_type()?
            };
            expect!(self, ']');
            ty = Box::new(Type::IndexedAccess(IndexedAccessType {
                span: span!(self, start),
                obj_type: ty,
                index_type,
                // `T?.[K][L]` is optional all the way down.
                optional: seen_optional,
            }));
        }

        Ok(ty)
    }

    /// `flowParsePrimaryType`
    fn parse_primary_type(&mut self) -> PResult<Box<Type>> {
        let start = self.input.cur_pos();

        let ty = match self.input.cur() {
            Some(&tok!('{')) | Some(&tok!("{|")) => {
                Type::Object(self.parse_object_type(ObjectTypeKind::Type)?)
            }
            Some(&tok!('[')) => self.parse_tuple_type()?,
            Some(&tok!('<')) => {
                let type_params = Some(self.parse_type_params_decl()?);
                expect!(self, '(');
                let (params, rest) = self.parse_fn_type_params(None)?;
                expect!(self, ')');
                expect!(self, "=>");
                let return_type = self.parse_type()?;
                Type::Fn(FnType {
                    span: span!(self, start),
                    type_params,
                    params,
                    rest,
                    return_type,
                    is_constructor: false,
                })
            }
            Some(&tok!('(')) => return self.parse_paren_or_fn_type(),
            Some(&tok!('*')) => {
                self.input.bump();
                Type::Existential(ExistentialType {
                    span: span!(self, start),
                })
            }
            Some(&tok!("typeof")) => {
                self.input.bump();
                let expr = self.parse_type_name()?;
                Type::TypeOf(TypeOfType {
                    span: span!(self, start),
                    expr,
                })
            }
            Some(&tok!("this")) => {
                self.input.bump();
                Type::This(ThisType {
                    span: span!(self, start),
                })
            }
            Some(&tok!("void")) => {
                self.input.bump();
                Type::Keyword(KeywordType {
                    span: span!(self, start),
                    kind: KeywordKind::Void,
                })
            }
            Some(&tok!("null")) => {
                self.input.bump();
                Type::Keyword(KeywordType {
                    span: span!(self, start),
                    kind: KeywordKind::Null,
                })
            }
            Some(&tok!("true")) | Some(&tok!("false")) => {
                let value = self.input.is(&tok!("true"));
                self.input.bump();
                let span = span!(self, start);
                Type::Lit(LitType {
                    span,
                    lit: TypeLit::Bool(Bool { span, value }),
                })
            }
            Some(Token::Str { .. }) => {
                let lit = self.parse_str_lit()?;
                Type::Lit(LitType {
                    span: lit.span,
                    lit: TypeLit::Str(lit),
                })
            }
            Some(Token::Num { .. }) | Some(Token::BigInt { .. }) => self.parse_num_lit_type(start, false)?,
            Some(&Token::BinOp(BinOpToken::Sub)) => {
                self.input.bump();
                self.parse_num_lit_type(start, true)?
            }
            Some(Token::Word(Word::Ident(sym))) => match keyword_kind(sym) {
                Some(kind) => {
                    self.input.bump();
                    Type::Keyword(KeywordType {
                        span: span!(self, start),
                        kind,
                    })
                }
                None => {
                    let name = self.parse_type_name()?;
                    let type_args = if is!(self, '<') {
                        Some(self.parse_type_args()?)
                    } else {
                        None
                    };
                    Type::Ref(TypeRef {
                        span: span!(self, start),
                        name,
                        type_args,
                    })
                }
            },
            _ => unexpected!(self, "a type"),
        };

        Ok(Box::new(ty))
    }

    /// Numeric or bigint literal type; `negative` when a `-` was eaten.
    fn parse_num_lit_type(&mut self, start: BytePos, negative: bool) -> PResult<Type> {
        let lit = match self.input.cur() {
            Some(Token::Num { .. }) => match self.input.bump() {
                Token::Num { value, raw } => {
                    let (value, raw) = if negative {
                        (-value, format!("-{}", raw).into())
                    } else {
                        (value, raw)
                    };
                    TypeLit::Num(Number {
                        span: span!(self, start),
                        value,
                        raw,
                    })
                }
                _ => unreachable!(),
            },
            Some(Token::BigInt { .. }) => match self.input.bump() {
                Token::BigInt { raw } => TypeLit::BigInt(BigInt {
                    span: span!(self, start),
                    raw: if negative {
                        format!("-{}", raw).into()
                    } else {
                        raw
                    },
                }),
                _ => unreachable!(),
            },
            _ => unexpected!(self, "a numeric literal"),
        };

        Ok(Type::Lit(LitType {
            span: span!(self, start),
            lit,
        }))
    }

    fn parse_tuple_type(&mut self) -> PResult<Type> {
        let start = self.input.cur_pos();
        expect!(self, '[');
        let ctx = self.bracketed_ctx();
        let elem_types = self
            .with_ctx(ctx)
            .parse_delimited(&tok!(']'), |p| p.parse_type())?;
        expect!(self, ']');
        Ok(Type::Tuple(TupleType {
            span: span!(self, start),
            elem_types,
        }))
    }

    /// A parenthesized type, or the parameter list of a function type.
    ///
    /// `(A)` is a grouped type unless a `,` or `) =>` follows it. An
    /// identifier followed by `:` or `?` names a parameter.
    fn parse_paren_or_fn_type(&mut self) -> PResult<Box<Type>> {
        let start = self.input.cur_pos();
        expect!(self, '(');

        let mut first = None;
        if !is!(self, ')') && !is!(self, "...") {
            let is_grouped = if is!(self, IdentName) {
                !self.input.peeked_is(&tok!('?')) && !self.input.peeked_is(&tok!(':'))
            } else {
                true
            };

            if is_grouped {
                let ty = {
                    let ctx = self.bracketed_ctx();
                    self.with_ctx(ctx).parse_type()?
                };

                let is_params = is!(self, ',')
                    || (is!(self, ')') && self.input.peeked_is(&tok!("=>")));
                if self.ctx().no_anon_function_type || !is_params {
                    expect!(self, ')');
                    return Ok(Box::new(Type::Paren(ParenType {
                        span: span!(self, start),
                        type_ann: ty,
                    })));
                }

                eat!(self, ',');
                first = Some(ty);
            }
        }

        let (params, rest) = self.parse_fn_type_params(first)?;
        expect!(self, ')');
        expect!(self, "=>");
        let return_type = self.parse_type()?;

        Ok(Box::new(Type::Fn(FnType {
            span: span!(self, start),
            type_params: None,
            params,
            rest,
            return_type,
            is_constructor: false,
        })))
    }

    /// Parameters of a function type up to, but excluding, `)`. `first` is
    /// an unnamed parameter that was read as a grouped type.
    ///
    /// `flowParseFunctionTypeParams`
    fn parse_fn_type_params(
        &mut self,
        first: Option<Box<Type>>,
    ) -> PResult<(Vec<FnTypeParam>, Option<FnTypeParam>)> {
        let ctx = self.bracketed_ctx();
        let mut p = self.with_ctx(ctx);

        let mut params = vec![];
        if let Some(ty) = first {
            params.push(FnTypeParam {
                span: ty.span(),
                name: None,
                optional: false,
                type_ann: ty,
            });
        }

        while !is!(p, ')') && !is!(p, "...") {
            params.push(p.parse_fn_type_param()?);
            if !is!(p, ')') {
                expect!(p, ',');
            }
        }

        let rest = if is!(p, "...") {
            let start = p.input.cur_pos();
            p.input.bump();
            let param = p.parse_fn_type_param()?;
            eat!(p, ',');
            Some(FnTypeParam {
                span: span!(p, start),
                ..param
            })
        } else {
            None
        };

        Ok((params, rest))
    }

    /// `flowParseFunctionTypeParam`
    fn parse_fn_type_param(&mut self) -> PResult<FnTypeParam> {
        let start = self.input.cur_pos();

        let is_named = is!(self, IdentName)
            && (self.input.peeked_is(&tok!(':')) || self.input.peeked_is(&tok!('?')));
        if !is_named {
            let type_ann = self.parse_type()?;
            return Ok(FnTypeParam {
                span: span!(self, start),
                name: None,
                optional: false,
                type_ann,
            });
        }

        let name = self.parse_ident_name()?;
        let optional = eat!(self, '?');
        expect!(self, ':');
        let type_ann = self.parse_type()?;
        Ok(FnTypeParam {
            span: span!(self, start),
            name: Some(name),
            optional,
            type_ann,
        })
    }

    /// `A`, `A.B.C`
    pub(super) fn parse_type_name(&mut self) -> PResult<TypeName> {
        let mut name = TypeName::Ident(self.parse_ident_name()?);
        while eat!(self, '.') {
            let right = self.parse_ident_name()?;
            name = TypeName::Qualified(Box::new(QualifiedName { left: name, right }));
        }
        Ok(name)
    }

    /// `<T, U>` after a type name or before call arguments.
    ///
    /// `flowParseTypeParameterInstantiation`
    pub(super) fn parse_type_args(&mut self) -> PResult<TypeParamInstantiation> {
        let start = self.input.cur_pos();
        expect!(self, '<');
        let ctx = self.bracketed_ctx();
        let params = self
            .with_ctx(ctx)
            .parse_delimited(&tok!('>'), |p| p.parse_type())?;
        expect!(self, '>');
        Ok(TypeParamInstantiation {
            span: span!(self, start),
            params,
        })
    }

    /// `<+T: Bound = Default, U>`
    ///
    /// `flowParseTypeParameterDeclaration`
    pub(super) fn parse_type_params_decl(&mut self) -> PResult<TypeParamDecl> {
        let start = self.input.cur_pos();
        expect!(self, '<');

        let ctx = self.bracketed_ctx();
        let mut p = self.with_ctx(ctx);

        let mut params: Vec<TypeParam> = vec![];
        while !is!(p, '>') {
            let param_start = p.input.cur_pos();
            let variance = p.parse_variance()?;
            let name = p.parse_ident()?;
            let bound = if is!(p, ':') {
                Some(p.parse_type_ann()?)
            } else {
                None
            };
            let default = if eat!(p, '=') {
                Some(p.parse_type()?)
            } else {
                None
            };

            // A parameter without a default may not follow one with a default.
            if default.is_none() && params.iter().any(|param| param.default.is_some()) {
                syntax_error!(p, span!(p, param_start), SyntaxError::InvalidTypeParam)
            }

            params.push(TypeParam {
                span: span!(p, param_start),
                name,
                variance,
                bound,
                constraint: None,
                default,
            });

            if !is!(p, '>') {
                expect!(p, ',');
            }
        }
        expect!(p, '>');

        Ok(TypeParamDecl {
            span: span!(p, start),
            params,
        })
    }

    /// `+` or `-` in front of a property or type parameter.
    pub(super) fn parse_variance(&mut self) -> PResult<Option<Variance>> {
        if !self.syntax.flow {
            return Ok(None);
        }

        let start = self.input.cur_pos();
        let kind = match self.input.cur() {
            Some(&tok!('+')) => VarianceKind::Plus,
            Some(&tok!('-')) => VarianceKind::Minus,
            _ => return Ok(None),
        };
        self.input.bump();
        Ok(Some(Variance {
            span: span!(self, start),
            kind,
        }))
    }

    /// Return type of a function, optionally followed by `%checks`, or a
    /// bare `%checks`.
    pub(super) fn parse_return_type_and_predicate(
        &mut self,
    ) -> PResult<(Option<TypeAnn>, Option<Predicate>)> {
        let start = self.input.cur_pos();
        expect!(self, ':');

        if self.is_predicate() {
            let predicate = self.parse_predicate()?;
            return Ok((None, Some(predicate)));
        }

        let type_ann = self.parse_type()?;
        let return_type = TypeAnn {
            span: span!(self, start),
            type_ann,
        };
        let predicate = if self.is_predicate() {
            Some(self.parse_predicate()?)
        } else {
            None
        };
        Ok((Some(return_type), predicate))
    }

    fn is_predicate(&mut self) -> bool {
        is!(self, '%') && self.input.peeked_is_word("checks")
    }

    /// `%checks` or `%checks(expr)`
    ///
    /// `flowParsePredicate`
    pub(super) fn parse_predicate(&mut self) -> PResult<Predicate> {
        let start = self.input.cur_pos();
        expect!(self, '%');
        self.expect_word("checks")?;

        let expr = if !self.input.had_line_break_before_cur() && eat!(self, '(') {
            let ctx = self.bracketed_ctx();
            let expr = self.with_ctx(ctx).parse_expr()?;
            expect!(self, ')');
            Some(expr)
        } else {
            None
        };

        Ok(Predicate {
            span: span!(self, start),
            expr,
        })
    }

    /// `flowParseObjectType`
    pub(super) fn parse_object_type(&mut self, kind: ObjectTypeKind) -> PResult<ObjectType> {
        let start = self.input.cur_pos();

        let exact = kind == ObjectTypeKind::Type && eat!(self, "{|");
        if !exact {
            expect!(self, '{');
        }
        let close = if exact { tok!("|}") } else { tok!('}') };

        let ctx = self.bracketed_ctx();
        let mut p = self.with_ctx(ctx);

        let mut members = vec![];
        let mut inexact = None;
        while !p.input.is(&close) {
            if eof!(p) {
                unexpected!(p, if exact { "`|}`" } else { "`}`" })
            }

            let member_start = p.input.cur_pos();
            if kind.allows_spread() && eat!(p, "...") {
                let is_marker = p.input.is(&close) || is!(p, ',') || is!(p, ';');
                if !is_marker {
                    let type_ann = p.parse_type()?;
                    members.push(ObjectTypeMember::Spread(ObjectTypeSpread {
                        span: span!(p, member_start),
                        type_ann,
                    }));
                    p.eat_object_type_separator(&close)?;
                    continue;
                }

                if exact {
                    syntax_error!(
                        p,
                        span!(p, member_start),
                        SyntaxError::InexactInExactObjectType
                    )
                }
                if !p.input.is(&close) {
                    p.input.bump();
                }
                let span = span!(p, member_start);
                if !p.input.is(&close) {
                    syntax_error!(p, span, SyntaxError::InexactNotLast)
                }
                inexact = Some(span);
                continue;
            }

            members.push(p.parse_object_type_member(kind, member_start)?);
            p.eat_object_type_separator(&close)?;
        }
        p.input.bump();

        Ok(ObjectType {
            span: span!(p, start),
            exact,
            inexact,
            members,
        })
    }

    /// `flowObjectTypeSemicolon`
    fn eat_object_type_separator(&mut self, close: &Token) -> PResult<()> {
        if !self.input.eat(&tok!(';')) && !self.input.eat(&tok!(',')) && !self.input.is(close) {
            unexpected!(self, "`,` or `;`")
        }
        Ok(())
    }

    fn parse_object_type_member(
        &mut self,
        kind: ObjectTypeKind,
        start: BytePos,
    ) -> PResult<ObjectTypeMember> {
        let mut allow_static = kind.allows_modifiers();
        let mut proto = false;
        if kind.allows_modifiers() && self.input.is_word("proto") && !self.is_key_end_next() {
            self.input.bump();
            proto = true;
            allow_static = false;
        }

        let is_static = allow_static && self.input.is_word("static") && !self.is_key_end_next();
        if is_static {
            self.input.bump();
        }

        let variance = self.parse_variance()?;

        if eat!(self, '[') {
            if eat!(self, '[') {
                if proto || variance.is_some() {
                    syntax_error!(self, span!(self, start), SyntaxError::InvalidInternalSlot)
                }
                return self.parse_internal_slot(start, is_static);
            }
            if proto {
                unexpected!(self, "a property name")
            }
            return self.parse_indexer(start, is_static, variance);
        }

        if is!(self, '(') || is!(self, '<') {
            if proto || variance.is_some() {
                unexpected!(self, "a property name")
            }
            let fn_type = self.parse_method_sig()?;
            return Ok(ObjectTypeMember::CallProp(CallProperty {
                span: span!(self, start),
                is_static,
                fn_type,
            }));
        }

        let mut method_kind = MethodSigKind::Method;
        if (self.input.is_word("get") || self.input.is_word("set")) && self.is_literal_key_next() {
            method_kind = if self.input.is_word("get") {
                MethodSigKind::Getter
            } else {
                MethodSigKind::Setter
            };
            self.input.bump();
        }

        let key = self.parse_prop_name()?;

        if is!(self, '(') || is!(self, '<') {
            if proto || variance.is_some() {
                unexpected!(self, "`:`")
            }
            let fn_type = self.parse_method_sig()?;
            return Ok(ObjectTypeMember::Method(ObjectTypeMethod {
                span: span!(self, start),
                key,
                kind: method_kind,
                is_static,
                optional: false,
                fn_type,
            }));
        }

        if method_kind != MethodSigKind::Method {
            unexpected!(self, "`(`")
        }

        let optional = eat!(self, '?');
        expect!(self, ':');
        let value = self.parse_type()?;
        Ok(ObjectTypeMember::Prop(ObjectTypeProp {
            span: span!(self, start),
            key,
            value,
            optional,
            is_static,
            proto,
            variance,
            readonly: false,
        }))
    }

    /// The current word is a key itself: `static: T`, `proto?: T`.
    fn is_key_end_next(&mut self) -> bool {
        self.input.peeked_is(&tok!(':')) || self.input.peeked_is(&tok!('?'))
    }

    fn is_literal_key_next(&mut self) -> bool {
        matches!(
            self.input.peek(),
            Some(Token::Word(..)) | Some(Token::Str { .. }) | Some(Token::Num { .. })
        )
    }

    /// `[K]: V` or `[name: K]: V`, after the `[`.
    ///
    /// `flowParseObjectTypeIndexer`
    fn parse_indexer(
        &mut self,
        start: BytePos,
        is_static: bool,
        variance: Option<Variance>,
    ) -> PResult<ObjectTypeMember> {
        let id = if is!(self, IdentName) && self.input.peeked_is(&tok!(':')) {
            let id = self.parse_ident_name()?;
            self.input.bump();
            Some(id)
        } else {
            None
        };
        let key = self.parse_type()?;
        expect!(self, ']');
        expect!(self, ':');
        let value = self.parse_type()?;

        Ok(ObjectTypeMember::Indexer(Indexer {
            span: span!(self, start),
            id,
            key,
            value,
            is_static,
            variance,
            readonly: false,
        }))
    }

    /// `[[slot]]: T`, `[[slot]]?: T` or `[[call]](x: T): R`, after `[[`.
    ///
    /// `flowParseObjectTypeInternalSlot`
    fn parse_internal_slot(&mut self, start: BytePos, is_static: bool) -> PResult<ObjectTypeMember> {
        let id = self.parse_ident_name()?;
        expect!(self, ']');
        expect!(self, ']');

        let (value, optional, method) = if is!(self, '(') || is!(self, '<') {
            let fn_type = self.parse_method_sig()?;
            (Box::new(Type::Fn(fn_type)), false, true)
        } else {
            let optional = eat!(self, '?');
            expect!(self, ':');
            (self.parse_type()?, optional, false)
        };

        Ok(ObjectTypeMember::InternalSlot(InternalSlot {
            span: span!(self, start),
            id,
            value,
            optional,
            is_static,
            method,
        }))
    }

    /// `<T>(x: T): R` of a method, call property or declared function.
    ///
    /// `flowParseObjectTypeMethodish`
    pub(super) fn parse_method_sig(&mut self) -> PResult<FnType> {
        let start = self.input.cur_pos();
        let type_params = if is!(self, '<') {
            Some(self.parse_type_params_decl()?)
        } else {
            None
        };
        expect!(self, '(');
        let (params, rest) = self.parse_fn_type_params(None)?;
        expect!(self, ')');
        expect!(self, ':');
        let return_type = self.parse_type()?;

        Ok(FnType {
            span: span!(self, start),
            type_params,
            params,
            rest,
            return_type,
            is_constructor: false,
        })
    }

    /// `A<T>, B.C` after `extends`, `mixins` or `implements`.
    pub(super) fn parse_heritage_list(&mut self) -> PResult<Vec<InterfaceExtends>> {
        let mut list = vec![self.parse_interface_extends()?];
        while eat!(self, ',') {
            list.push(self.parse_interface_extends()?);
        }
        Ok(list)
    }

    /// `flowParseInterfaceExtends`
    fn parse_interface_extends(&mut self) -> PResult<InterfaceExtends> {
        let start = self.input.cur_pos();
        let name = self.parse_type_name()?;
        let type_args = if is!(self, '<') {
            Some(self.parse_type_args()?)
        } else {
            None
        };
        Ok(InterfaceExtends {
            span: span!(self, start),
            name,
            type_args,
        })
    }
}

/// Builtin type names which are not references.
fn keyword_kind(sym: &str) -> Option<KeywordKind> {
    Some(match sym {
        "any" => KeywordKind::Any,
        "mixed" => KeywordKind::Mixed,
        "empty" => KeywordKind::Empty,
        "number" => KeywordKind::Number,
        "string" => KeywordKind::String,
        "boolean" => KeywordKind::Boolean,
        "bool" => KeywordKind::Bool,
        "symbol" => KeywordKind::Symbol,
        "bigint" => KeywordKind::BigInt,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{parse_error, text, ty};
    use super::*;
    use pretty_assertions::assert_eq;

    fn object(src: &str) -> ObjectType {
        match *ty(src) {
            Type::Object(obj) => obj,
            t => panic!("{:?}", t),
        }
    }

    #[test]
    fn keywords_and_refs() {
        assert!(matches!(
            *ty("mixed"),
            Type::Keyword(KeywordType {
                kind: KeywordKind::Mixed,
                ..
            })
        ));
        assert!(matches!(
            *ty("void"),
            Type::Keyword(KeywordType {
                kind: KeywordKind::Void,
                ..
            })
        ));
        match *ty("React.Node<T>") {
            Type::Ref(TypeRef {
                name: TypeName::Qualified(q),
                type_args: Some(args),
                ..
            }) => {
                assert_eq!(q.right.sym, *"Node");
                assert_eq!(args.params.len(), 1);
            }
            t => panic!("{:?}", t),
        }
    }

    #[test]
    fn nested_type_args_close_one_at_a_time() {
        match *ty("Array<Array<?string>>") {
            Type::Ref(TypeRef {
                type_args: Some(args),
                ..
            }) => assert!(matches!(*args.params[0], Type::Ref(..))),
            t => panic!("{:?}", t),
        }
    }

    #[test]
    fn prefix_binds_looser_than_postfix() {
        match *ty("?string[]") {
            Type::Nullable(NullableType { type_ann, .. }) => {
                assert!(matches!(*type_ann, Type::Array(..)))
            }
            t => panic!("{:?}", t),
        }
        match *ty("(?string)[]") {
            Type::Array(ArrayType { elem_type, .. }) => {
                assert!(matches!(*elem_type, Type::Paren(..)))
            }
            t => panic!("{:?}", t),
        }
    }

    #[test]
    fn unions_and_intersections() {
        match *ty("| 'a' | 'b' & C | -1") {
            Type::Union(UnionType { types, .. }) => {
                assert_eq!(types.len(), 3);
                assert!(matches!(*types[1], Type::Intersection(..)));
                match &*types[2] {
                    Type::Lit(LitType {
                        lit: TypeLit::Num(n),
                        ..
                    }) => {
                        assert_eq!(n.value, -1.0);
                        assert_eq!(&*n.raw, "-1");
                    }
                    t => panic!("{:?}", t),
                }
            }
            t => panic!("{:?}", t),
        }
    }

    #[test]
    fn function_types() {
        let src = "type T = (string, cb?: (err: Error) => void, ...rest: Array<number>) => Promise<void>;";
        match *ty("(string, cb?: (err: Error) => void, ...rest: Array<number>) => Promise<void>") {
            Type::Fn(f) => {
                assert_eq!(f.params.len(), 2);
                assert!(f.params[0].name.is_none());
                assert!(f.params[1].optional);
                let rest = f.rest.unwrap();
                assert_eq!(text(src, rest.span), "...rest: Array<number>");
            }
            t => panic!("{:?}", t),
        }
        assert!(matches!(*ty("string => void"), Type::Fn(..)));
        assert!(matches!(*ty("(string) => void"), Type::Fn(..)));
        assert!(matches!(*ty("<T>(x: T) => T"), Type::Fn(..)));
        assert!(matches!(*ty("(A | B)"), Type::Paren(..)));
    }

    #[test]
    fn object_type_members() {
        let obj = object(
            "{ +a: string, -b?: number; [key: string]: mixed, (x: number): string, m<T>(x: T): T, get g(): number, ...Other, [[call]](): void }",
        );
        assert!(!obj.exact);
        assert!(obj.inexact.is_none());
        assert_eq!(obj.members.len(), 8);
        match &obj.members[0] {
            ObjectTypeMember::Prop(p) => {
                assert_eq!(p.variance.map(|v| v.kind), Some(VarianceKind::Plus))
            }
            m => panic!("{:?}", m),
        }
        match &obj.members[1] {
            ObjectTypeMember::Prop(p) => assert!(p.optional),
            m => panic!("{:?}", m),
        }
        match &obj.members[2] {
            ObjectTypeMember::Indexer(i) => assert_eq!(i.id.as_ref().unwrap().sym, *"key"),
            m => panic!("{:?}", m),
        }
        assert!(matches!(&obj.members[3], ObjectTypeMember::CallProp(..)));
        assert!(matches!(&obj.members[4], ObjectTypeMember::Method(..)));
        match &obj.members[5] {
            ObjectTypeMember::Method(m) => assert_eq!(m.kind, MethodSigKind::Getter),
            m => panic!("{:?}", m),
        }
        assert!(matches!(&obj.members[6], ObjectTypeMember::Spread(..)));
        match &obj.members[7] {
            ObjectTypeMember::InternalSlot(s) => assert!(s.method),
            m => panic!("{:?}", m),
        }
    }

    #[test]
    fn exact_and_inexact_objects() {
        let exact = object("{| a: 1 |}");
        assert!(exact.exact);
        assert_eq!(exact.members.len(), 1);

        let src = "type T = { a: 1, ... };";
        let inexact = object("{ a: 1, ... }");
        let span = inexact.inexact.unwrap();
        assert_eq!(text(src, span), "...");

        let err = parse_error("type T = { ..., a: 1 };");
        assert_eq!(*err.kind(), SyntaxError::InexactNotLast);
        let err = parse_error("type T = {| a: 1, ... |};");
        assert_eq!(*err.kind(), SyntaxError::InexactInExactObjectType);
    }

    #[test]
    fn indexed_access() {
        match *ty("Obj?.['a']['b']") {
            Type::IndexedAccess(IndexedAccessType {
                optional, obj_type, ..
            }) => {
                assert!(optional);
                assert!(matches!(*obj_type, Type::IndexedAccess(..)));
            }
            t => panic!("{:?}", t),
        }
        assert!(matches!(*ty("[string, number]"), Type::Tuple(..)));
        assert!(matches!(*ty("typeof x.y"), Type::TypeOf(..)));
        assert!(matches!(*ty("*"), Type::Existential(..)));
    }

    #[test]
    fn type_params() {
        let src = "type T<+A: string = 'x', -B = number> = A;";
        match super::super::test_utils::stmt(src) {
            Stmt::Decl(Decl::TypeAlias(alias)) => {
                let params = alias.type_params.unwrap().params;
                assert_eq!(params.len(), 2);
                assert_eq!(text(src, params[0].span), "+A: string = 'x'");
                assert!(params[0].bound.is_some());
                assert!(params[1].default.is_some());
            }
            s => panic!("{:?}", s),
        }

        let err = parse_error("type T<A = string, B> = A;");
        assert_eq!(*err.kind(), SyntaxError::InvalidTypeParam);
    }
}
