use super::*;

/// Parser for function expression and function declaration.
impl<'a> Parser<'a> {
    /// `function` (or `async function`, whose `async` is already eaten)
    /// as an expression.
    pub(super) fn parse_fn_expr(&mut self, start: BytePos, is_async: bool) -> PResult<Box<Expr>> {
        let (ident, function) = self.parse_fn(start, is_async, false)?;
        Ok(Box::new(Expr::Fn(FnExpr { ident, function })))
    }

    pub(super) fn parse_fn_decl(&mut self, start: BytePos, is_async: bool) -> PResult<Decl> {
        let (ident, function) = self.parse_fn(start, is_async, true)?;
        let ident = match ident {
            Some(ident) => ident,
            None => syntax_error!(self, SyntaxError::ExpectedIdent),
        };
        Ok(Decl::Fn(FnDecl {
            span: span!(self, start),
            ident,
            declare: false,
            function,
        }))
    }

    /// `export default function ...`, whose name is optional.
    pub(super) fn parse_default_fn(&mut self, start: BytePos, is_async: bool) -> PResult<DefaultDecl> {
        let (ident, function) = self.parse_fn(start, is_async, false)?;
        Ok(DefaultDecl::Fn(FnExpr { ident, function }))
    }

    fn parse_fn(
        &mut self,
        start: BytePos,
        is_async: bool,
        require_ident: bool,
    ) -> PResult<(Option<Ident>, Function)> {
        expect!(self, "function");
        let is_generator = eat!(self, '*');

        let ident = if is!(self, BindingIdent) {
            Some(self.parse_ident()?)
        } else if require_ident {
            syntax_error!(self, SyntaxError::ExpectedIdent)
        } else {
            None
        };

        let function = self.parse_fn_signature_and_body(start, is_async, is_generator)?;
        Ok((ident, function))
    }

    /// Type parameters, parameters, return type and body of a function or
    /// method whose name has been parsed.
    pub(super) fn parse_fn_signature_and_body(
        &mut self,
        start: BytePos,
        is_async: bool,
        is_generator: bool,
    ) -> PResult<Function> {
        let type_params = if self.syntax.flow && is!(self, '<') {
            Some(self.parse_type_params_decl()?)
        } else {
            None
        };

        let ctx = Context {
            in_async: is_async,
            in_generator: is_generator,
            ..self.bracketed_ctx()
        };
        let params = self.with_ctx(ctx).parse_formal_params()?;

        let (return_type, predicate) = if self.syntax.flow && is!(self, ':') {
            let ctx = self.bracketed_ctx();
            self.with_ctx(ctx).parse_return_type_and_predicate()?
        } else {
            (None, None)
        };

        let ctx = self.fn_body_ctx(is_async, is_generator);
        let body = self.with_ctx(ctx).parse_block()?;

        Ok(Function {
            params,
            span: span!(self, start),
            body: Some(body),
            is_generator,
            is_async,
            type_params,
            return_type,
            predicate,
        })
    }
}

impl<'a> Parser<'a> {
    pub(super) fn parse_class_decl(&mut self, start: BytePos) -> PResult<Decl> {
        let (ident, class) = self.parse_class(start, true)?;
        let ident = match ident {
            Some(ident) => ident,
            None => syntax_error!(self, SyntaxError::ExpectedIdent),
        };
        Ok(Decl::Class(ClassDecl {
            span: span!(self, start),
            ident,
            declare: false,
            class,
        }))
    }

    pub(super) fn parse_class_expr(&mut self, start: BytePos) -> PResult<Box<Expr>> {
        let (ident, class) = self.parse_class(start, false)?;
        Ok(Box::new(Expr::Class(ClassExpr { ident, class })))
    }

    pub(super) fn parse_default_class(&mut self, start: BytePos) -> PResult<DefaultDecl> {
        let (ident, class) = self.parse_class(start, false)?;
        Ok(DefaultDecl::Class(ClassExpr { ident, class }))
    }

    fn parse_class(
        &mut self,
        start: BytePos,
        require_ident: bool,
    ) -> PResult<(Option<Ident>, Class)> {
        let class_start = self.input.cur_pos();
        expect!(self, "class");

        let ident = if is!(self, BindingIdent) && !self.input.is_word("implements") {
            Some(self.parse_ident()?)
        } else if require_ident {
            syntax_error!(self, SyntaxError::ExpectedIdent)
        } else {
            None
        };

        let type_params = if self.syntax.flow && is!(self, '<') {
            Some(self.parse_type_params_decl()?)
        } else {
            None
        };

        let (super_class, super_type_args) = if eat!(self, "extends") {
            let super_class = self.parse_lhs_expr()?;
            let super_type_args = if self.syntax.flow && is!(self, '<') {
                Some(self.parse_type_args()?)
            } else {
                None
            };
            (Some(super_class), super_type_args)
        } else {
            (None, None)
        };

        let implements = if self.syntax.flow && self.eat_word("implements") {
            self.parse_heritage_list()?
        } else {
            vec![]
        };

        expect!(self, '{');
        let ctx = self.bracketed_ctx();
        let body = self.with_ctx(ctx).parse_class_body()?;
        expect!(self, '}');

        tracing::trace!(members = body.len(), "parsed class at {:?}", start);
        Ok((
            ident,
            Class {
                span: span!(self, class_start),
                body,
                super_class,
                super_type_args,
                type_params,
                implements,
            },
        ))
    }

    fn parse_class_body(&mut self) -> PResult<Vec<ClassMember>> {
        let mut elems = vec![];
        while !eof!(self) && !is!(self, '}') {
            if is_exact!(self, ';') {
                let start = self.input.cur_pos();
                self.input.bump();
                elems.push(ClassMember::Empty(EmptyStmt {
                    span: span!(self, start),
                }));
                continue;
            }
            elems.push(self.parse_class_member()?);
        }
        Ok(elems)
    }

    fn parse_class_member(&mut self) -> PResult<ClassMember> {
        let start = self.input.cur_pos();

        let declare =
            self.syntax.flow && self.input.is_word("declare") && self.is_modifier_before_key();
        if declare {
            self.input.bump();
        }

        let is_static = self.input.is_word("static") && self.is_modifier_before_key();
        if is_static {
            self.input.bump();
        }

        let variance = self.parse_variance()?;

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

        let key = if is!(self, '#') {
            Key::Private(self.parse_private_name()?)
        } else {
            Key::Public(self.parse_prop_name()?)
        };

        if is!(self, '(') || is!(self, '<') {
            let function = self.parse_fn_signature_and_body(start, is_async, is_generator)?;
            return Ok(ClassMember::Method(ClassMethod {
                span: span!(self, start),
                key,
                function,
                kind,
                is_static,
                optional: false,
            }));
        }

        if is_async || is_generator || kind != MethodKind::Method {
            unexpected!(self, "`(`")
        }

        let optional = self.syntax.flow && eat!(self, '?');
        let type_ann = if self.syntax.flow && is!(self, ':') {
            Some(self.parse_type_ann()?)
        } else {
            None
        };
        let value = if eat!(self, '=') {
            let ctx = self.fn_body_ctx(false, false);
            Some(self.with_ctx(ctx).parse_assignment_expr()?)
        } else {
            None
        };
        expect!(self, ';');

        Ok(ClassMember::ClassProp(ClassProp {
            span: span!(self, start),
            key,
            value,
            type_ann,
            is_static,
            variance,
            declare,
            readonly: false,
            optional,
        }))
    }

    /// Block statement of a function, arrow function or method body.
    pub(super) fn parse_block(&mut self) -> PResult<BlockStmt> {
        let start = self.input.cur_pos();
        expect!(self, '{');
        let stmts = self.parse_stmts()?;
        expect!(self, '}');
        Ok(BlockStmt {
            span: span!(self, start),
            stmts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{expr, stmt, text};
    use super::*;
    use pretty_assertions::assert_eq;

    fn class(src: &str) -> Class {
        match stmt(src) {
            Stmt::Decl(Decl::Class(ClassDecl { class, .. })) => class,
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn class_members() {
        let src = "class A<T> extends B<T> implements I, J<T> {
            static +x: number = 1;
            -y: string;
            z?: T;
            #p = 2;
            declare q: mixed;
            constructor(a: T) { super(); }
            get v(): T { return this.z; }
            static async *gen() {}
            ;
        }";
        let class = class(src);
        assert!(class.type_params.is_some());
        assert!(class.super_type_args.is_some());
        assert_eq!(class.implements.len(), 2);
        assert_eq!(class.body.len(), 9);

        match &class.body[0] {
            ClassMember::ClassProp(p) => {
                assert!(p.is_static);
                assert_eq!(p.variance.map(|v| v.kind), Some(VarianceKind::Plus));
                assert_eq!(text(src, p.span), "static +x: number = 1;");
            }
            m => panic!("{:?}", m),
        }
        match &class.body[2] {
            ClassMember::ClassProp(p) => assert!(p.optional),
            m => panic!("{:?}", m),
        }
        match &class.body[4] {
            ClassMember::ClassProp(p) => assert!(p.declare),
            m => panic!("{:?}", m),
        }
        match &class.body[6] {
            ClassMember::Method(m) => assert_eq!(m.kind, MethodKind::Getter),
            m => panic!("{:?}", m),
        }
        match &class.body[7] {
            ClassMember::Method(m) => {
                assert!(m.is_static);
                assert!(m.function.is_async);
                assert!(m.function.is_generator);
            }
            m => panic!("{:?}", m),
        }
    }

    #[test]
    fn modifier_words_as_member_names() {
        let class = class("class A { static; get = 1; async() {} static static() {} }");
        assert_eq!(class.body.len(), 4);
        match &class.body[3] {
            ClassMember::Method(m) => assert!(m.is_static),
            m => panic!("{:?}", m),
        }
    }

    #[test]
    fn function_predicates() {
        let src = "function isStr(x: mixed): boolean %checks { return typeof x === 'string'; }";
        match stmt(src) {
            Stmt::Decl(Decl::Fn(FnDecl { function, .. })) => {
                assert!(function.return_type.is_some());
                assert_eq!(text(src, function.predicate.unwrap().span), "%checks");
            }
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn generator_expressions() {
        match *expr("(function* g<T>(): Iterator<T> { yield 1; yield* g(); });") {
            Expr::Paren(ParenExpr { expr, .. }) => match *expr {
                Expr::Fn(FnExpr { function, ident }) => {
                    assert!(function.is_generator);
                    assert_eq!(ident.unwrap().sym, *"g");
                }
                e => panic!("{:?}", e),
            },
            e => panic!("{:?}", e),
        }
    }
}
