//! Flow declarations: type aliases, opaque types, interfaces and the
//! `declare` forms of library definitions.
use super::{super::*, ObjectTypeKind};
use crate::token::Word;

impl<'a> Parser<'a> {
    /// The current token starts a Flow declaration which is not also a valid
    /// expression statement: `type A`, `opaque type`, `interface I`, or
    /// `declare` followed by something declarable.
    pub(in crate::parser) fn is_flow_decl_start(&mut self) -> bool {
        if !self.syntax.flow || self.input.has_linebreak_between_cur_and_peeked() {
            return false;
        }

        if self.input.is_word("type") || self.input.is_word("interface") {
            return self.input.peeked_is_ident();
        }
        if self.input.is_word("opaque") {
            return self.input.peeked_is_word("type");
        }
        if self.input.is_word("declare") {
            return match self.input.peek() {
                Some(&tok!("var"))
                | Some(&tok!("const"))
                | Some(&tok!("function"))
                | Some(&tok!("class"))
                | Some(&tok!("export")) => true,
                Some(Token::Word(Word::Ident(w))) => matches!(
                    &**w,
                    "let" | "type" | "opaque" | "interface" | "module"
                ),
                _ => false,
            };
        }
        false
    }

    /// Declaration at the current token, which satisfies
    /// [Parser::is_flow_decl_start] and is not `declare export`.
    pub(in crate::parser) fn parse_flow_decl(&mut self) -> PResult<Decl> {
        let start = self.input.cur_pos();
        if self.input.is_word("type") {
            return self.parse_type_alias(start, false);
        }
        if self.input.is_word("opaque") {
            return self.parse_opaque_type(start, false);
        }
        if self.input.is_word("interface") {
            return self.parse_interface_decl(start, false);
        }

        self.expect_word("declare")?;
        self.parse_declare(start)
    }

    /// `type A<T> = B;`
    ///
    /// `flowParseTypeAlias`
    pub(in crate::parser) fn parse_type_alias(&mut self, start: BytePos, declare: bool) -> PResult<Decl> {
        self.expect_word("type")?;
        let id = self.parse_ident()?;
        let type_params = if is!(self, '<') {
            Some(self.parse_type_params_decl()?)
        } else {
            None
        };
        expect!(self, '=');
        let type_ann = self.parse_type()?;
        expect!(self, ';');

        Ok(Decl::TypeAlias(TypeAliasDecl {
            span: span!(self, start),
            declare,
            id,
            type_params,
            type_ann,
        }))
    }

    /// `opaque type A: Super = B;`, whose `= B` is absent when declared.
    ///
    /// `flowParseOpaqueType`
    pub(in crate::parser) fn parse_opaque_type(&mut self, start: BytePos, declare: bool) -> PResult<Decl> {
        self.expect_word("opaque")?;
        self.expect_word("type")?;
        let id = self.parse_ident()?;
        let type_params = if is!(self, '<') {
            Some(self.parse_type_params_decl()?)
        } else {
            None
        };
        let supertype = if eat!(self, ':') {
            Some(self.parse_type()?)
        } else {
            None
        };
        let impltype = if !declare && eat!(self, '=') {
            Some(self.parse_type()?)
        } else {
            None
        };
        expect!(self, ';');

        Ok(Decl::OpaqueType(OpaqueTypeDecl {
            span: span!(self, start),
            declare,
            id,
            type_params,
            supertype,
            impltype,
        }))
    }

    /// `flowParseInterface`
    pub(in crate::parser) fn parse_interface_decl(&mut self, start: BytePos, declare: bool) -> PResult<Decl> {
        self.expect_word("interface")?;
        let id = self.parse_ident()?;
        let type_params = if is!(self, '<') {
            Some(self.parse_type_params_decl()?)
        } else {
            None
        };
        let extends = if eat!(self, "extends") {
            self.parse_heritage_list()?
        } else {
            vec![]
        };
        let body = self.parse_object_type(ObjectTypeKind::Interface)?;

        Ok(Decl::Interface(InterfaceDecl {
            span: span!(self, start),
            declare,
            id,
            type_params,
            extends,
            body,
        }))
    }

    /// Everything after `declare` except `declare export`.
    ///
    /// `flowParseDeclare`
    fn parse_declare(&mut self, start: BytePos) -> PResult<Decl> {
        match self.input.cur() {
            Some(&tok!("function")) => self.parse_declare_fn(start, true),
            Some(&tok!("class")) => self.parse_declare_class(start, true),
            Some(&tok!("var")) | Some(&tok!("const")) => self.parse_declare_var(start, true),
            Some(Token::Word(Word::Ident(..))) => {
                if self.input.is_word("let") {
                    self.parse_declare_var(start, true)
                } else if self.input.is_word("type") {
                    self.parse_type_alias(start, true)
                } else if self.input.is_word("opaque") {
                    self.parse_opaque_type(start, true)
                } else if self.input.is_word("interface") {
                    self.parse_interface_decl(start, true)
                } else if self.input.is_word("module") {
                    self.parse_declare_module(start)
                } else {
                    syntax_error!(self, SyntaxError::InvalidDeclare)
                }
            }
            _ => syntax_error!(self, SyntaxError::InvalidDeclare),
        }
    }

    /// `function f<T>(x: T): R %checks(expr);`
    ///
    /// `flowParseDeclareFunction`
    fn parse_declare_fn(&mut self, start: BytePos, declare: bool) -> PResult<Decl> {
        Ok(Decl::DeclareFn(self.parse_declare_fn_decl(start, declare)?))
    }

    fn parse_declare_fn_decl(&mut self, start: BytePos, declare: bool) -> PResult<DeclareFnDecl> {
        expect!(self, "function");
        let id = self.parse_ident()?;
        let fn_type = self.parse_method_sig()?;
        let predicate = if is!(self, '%') {
            Some(self.parse_predicate()?)
        } else {
            None
        };
        expect!(self, ';');

        Ok(DeclareFnDecl {
            span: span!(self, start),
            declare,
            id,
            fn_type,
            predicate,
        })
    }

    /// `class C<T> extends B<T> mixins M implements I { static x: T }`
    ///
    /// `flowParseDeclareClass`
    fn parse_declare_class(&mut self, start: BytePos, declare: bool) -> PResult<Decl> {
        Ok(Decl::DeclareClass(self.parse_declare_class_decl(start, declare)?))
    }

    fn parse_declare_class_decl(
        &mut self,
        start: BytePos,
        declare: bool,
    ) -> PResult<DeclareClassDecl> {
        expect!(self, "class");
        let id = self.parse_ident()?;
        let type_params = if is!(self, '<') {
            Some(self.parse_type_params_decl()?)
        } else {
            None
        };

        let extends = if eat!(self, "extends") {
            Some(self.parse_heritage_list()?.remove(0))
        } else {
            None
        };
        let mixins = if self.eat_word("mixins") {
            self.parse_heritage_list()?
        } else {
            vec![]
        };
        let implements = if self.eat_word("implements") {
            self.parse_heritage_list()?
        } else {
            vec![]
        };
        let body = self.parse_object_type(ObjectTypeKind::DeclareClass)?;

        Ok(DeclareClassDecl {
            span: span!(self, start),
            declare,
            id,
            type_params,
            extends,
            mixins,
            implements,
            body,
        })
    }

    /// `var x: T, y: U;`
    fn parse_declare_var(&mut self, start: BytePos, declare: bool) -> PResult<Decl> {
        let kind = match self.input.bump() {
            tok!("var") => VarDeclKind::Var,
            tok!("const") => VarDeclKind::Const,
            _ => VarDeclKind::Let,
        };

        let mut decls = vec![];
        loop {
            let decl_start = self.input.cur_pos();
            let name = Pat::Ident(self.parse_binding_ident()?);
            let name = self.parse_pat_annotation(decl_start, name, false)?;
            decls.push(VarDeclarator {
                span: span!(self, decl_start),
                name,
                init: None,
            });
            if !eat!(self, ',') {
                break;
            }
        }
        expect!(self, ';');

        Ok(Decl::Var(VarDecl {
            span: span!(self, start),
            kind,
            declare,
            decls,
        }))
    }

    /// `module 'name' { ... }`, `module Name { ... }` or
    /// `module.exports: T;`
    ///
    /// `flowParseDeclareModule`
    fn parse_declare_module(&mut self, start: BytePos) -> PResult<Decl> {
        self.expect_word("module")?;

        if eat!(self, '.') {
            self.expect_word("exports")?;
            let type_ann = self.parse_type_ann()?;
            expect!(self, ';');
            return Ok(Decl::DeclareModuleExports(DeclareModuleExports {
                span: span!(self, start),
                type_ann,
            }));
        }

        let id = match self.input.cur() {
            Some(Token::Str { .. }) => ModuleName::Str(self.parse_str_lit()?),
            _ => ModuleName::Ident(self.parse_ident()?),
        };

        expect!(self, '{');
        let ctx = Context {
            in_declare_module: true,
            ..self.fn_body_ctx(false, false)
        };
        let body = self.with_ctx(ctx).parse_block_body(Some(&tok!('}')))?;

        Ok(Decl::Module(AmbientModuleDecl {
            span: span!(self, start),
            declare: true,
            id,
            body,
        }))
    }

    /// `declare export ...`
    ///
    /// `flowParseDeclareExportDeclaration`
    pub(in crate::parser) fn parse_declare_export(&mut self, start: BytePos) -> PResult<ModuleDecl> {
        self.expect_word("declare")?;
        expect!(self, "export");

        if eat!(self, "default") {
            let decl_start = self.input.cur_pos();
            if is!(self, "function") {
                let decl = self.parse_declare_fn_decl(decl_start, false)?;
                return Ok(ModuleDecl::ExportDefaultDecl(ExportDefaultDecl {
                    span: span!(self, start),
                    decl: DefaultDecl::DeclareFn(decl),
                    declare: true,
                }));
            }
            if is!(self, "class") {
                let decl = self.parse_declare_class_decl(decl_start, false)?;
                return Ok(ModuleDecl::ExportDefaultDecl(ExportDefaultDecl {
                    span: span!(self, start),
                    decl: DefaultDecl::DeclareClass(decl),
                    declare: true,
                }));
            }

            let type_ann = self.parse_type()?;
            expect!(self, ';');
            return Ok(ModuleDecl::DeclareExportDefaultType(
                DeclareExportDefaultType {
                    span: span!(self, start),
                    type_ann,
                },
            ));
        }

        if is!(self, '*') || is!(self, '{') {
            return self.parse_export_list(start, false, true);
        }

        let decl_start = self.input.cur_pos();
        let cur = self.input.cur().cloned();
        let decl = match cur.as_ref() {
            Some(&tok!("function")) => self.parse_declare_fn(decl_start, false)?,
            Some(&tok!("class")) => self.parse_declare_class(decl_start, false)?,
            Some(&tok!("var")) | Some(&tok!("const")) => self.parse_declare_var(decl_start, false)?,
            _ if self.input.is_word("let") => self.parse_declare_var(decl_start, false)?,
            _ if self.input.is_word("type") => self.parse_type_alias(decl_start, false)?,
            _ if self.input.is_word("opaque") => self.parse_opaque_type(decl_start, false)?,
            _ if self.input.is_word("interface") => self.parse_interface_decl(decl_start, false)?,
            _ => syntax_error!(self, SyntaxError::InvalidDeclare),
        };

        Ok(ModuleDecl::ExportDecl(ExportDecl {
            span: span!(self, start),
            decl,
            declare: true,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::test_utils::{module_decl, parse_error, parse_module, stmt, text};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_alias_and_opaque() {
        match stmt("type A<T> = Array<T>;") {
            Stmt::Decl(Decl::TypeAlias(a)) => {
                assert_eq!(a.id.sym, *"A");
                assert!(!a.declare);
            }
            s => panic!("{:?}", s),
        }
        match stmt("opaque type Id: string = string;") {
            Stmt::Decl(Decl::OpaqueType(o)) => {
                assert!(o.supertype.is_some());
                assert!(o.impltype.is_some());
            }
            s => panic!("{:?}", s),
        }
        match stmt("declare opaque type Id;") {
            Stmt::Decl(Decl::OpaqueType(o)) => {
                assert!(o.declare);
                assert!(o.impltype.is_none());
            }
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn type_is_still_an_identifier() {
        let program = parse_module("type = 1;\ntype\nFoo = 2;\ninterface;");
        assert_eq!(program.body.len(), 4);
    }

    #[test]
    fn interfaces() {
        match stmt("interface I<T> extends A, B.C<T> { m(): void; +p: T }") {
            Stmt::Decl(Decl::Interface(i)) => {
                assert_eq!(i.extends.len(), 2);
                assert_eq!(i.body.members.len(), 2);
            }
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn declare_function() {
        let src = "declare function f<T>(x: T): boolean %checks(typeof x === 'string');";
        match stmt(src) {
            Stmt::Decl(Decl::DeclareFn(f)) => {
                assert!(f.declare);
                assert_eq!(text(src, f.fn_type.span), "<T>(x: T): boolean");
                assert!(f.predicate.unwrap().expr.is_some());
            }
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn declare_class() {
        match stmt(
            "declare class A<T> extends B<T> mixins C implements D { static x: number; proto p: T; m(): void }",
        ) {
            Stmt::Decl(Decl::DeclareClass(c)) => {
                assert!(c.extends.is_some());
                assert_eq!(c.mixins.len(), 1);
                assert_eq!(c.implements.len(), 1);
                match &c.body.members[0] {
                    ObjectTypeMember::Prop(p) => assert!(p.is_static),
                    m => panic!("{:?}", m),
                }
                match &c.body.members[1] {
                    ObjectTypeMember::Prop(p) => assert!(p.proto),
                    m => panic!("{:?}", m),
                }
            }
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn declare_module() {
        match stmt(
            "declare module 'm' {
                import type { A } from 'a';
                declare export function f(): A;
                declare module.exports: { f: typeof f };
            }",
        ) {
            Stmt::Decl(Decl::Module(m)) => {
                assert!(matches!(m.id, ModuleName::Str(..)));
                assert_eq!(m.body.len(), 3);
            }
            s => panic!("{:?}", s),
        }

        let err = parse_error("declare module M { foo(); }");
        assert_eq!(*err.kind(), SyntaxError::InvalidDeclare);
    }

    #[test]
    fn declare_vars() {
        match stmt("declare var x: number, y: string;") {
            Stmt::Decl(Decl::Var(v)) => {
                assert!(v.declare);
                assert_eq!(v.decls.len(), 2);
                assert!(v.decls.iter().all(|d| d.name.type_ann().is_some()));
            }
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn declare_export_forms() {
        match module_decl("declare export default (x: number) => string;") {
            ModuleDecl::DeclareExportDefaultType(..) => {}
            d => panic!("{:?}", d),
        }
        match module_decl("declare export default class A {}") {
            ModuleDecl::ExportDefaultDecl(ExportDefaultDecl {
                decl: DefaultDecl::DeclareClass(..),
                declare: true,
                ..
            }) => {}
            d => panic!("{:?}", d),
        }
        match module_decl("declare export var x: number;") {
            ModuleDecl::ExportDecl(ExportDecl {
                decl: Decl::Var(v),
                declare: true,
                ..
            }) => assert!(!v.declare),
            d => panic!("{:?}", d),
        }
        match module_decl("declare export * from 'm';") {
            ModuleDecl::ExportAll(all) => assert!(all.declare),
            d => panic!("{:?}", d),
        }
        match module_decl("declare export { a, b as c };") {
            ModuleDecl::ExportNamed(named) => {
                assert!(named.declare);
                assert_eq!(named.specifiers.len(), 2);
            }
            d => panic!("{:?}", d),
        }

        let err = parse_error("declare foo;");
        assert!(matches!(err.kind(), SyntaxError::Unexpected { .. }));
    }

    #[test]
    fn declare_export_declarations() {
        let decl = |src: &str| match module_decl(src) {
            ModuleDecl::ExportDecl(ExportDecl {
                decl,
                declare: true,
                ..
            }) => decl,
            d => panic!("{:?}", d),
        };
        match decl("declare export let x: number;") {
            Decl::Var(v) => assert_eq!(v.kind, VarDeclKind::Let),
            d => panic!("{:?}", d),
        }
        assert!(matches!(decl("declare export function f(): void;"), Decl::DeclareFn(..)));
        assert!(matches!(decl("declare export class A {}"), Decl::DeclareClass(..)));
        assert!(matches!(decl("declare export type T = number;"), Decl::TypeAlias(..)));
        assert!(matches!(decl("declare export opaque type O;"), Decl::OpaqueType(..)));
        assert!(matches!(decl("declare export interface I {}"), Decl::Interface(..)));
    }
}
