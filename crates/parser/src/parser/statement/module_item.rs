use super::*;

impl<'a> Parser<'a> {
    pub(super) fn parse_import(&mut self, start: BytePos) -> PResult<ModuleDecl> {
        expect!(self, "import");

        // `import type from 'm'` binds a default named `type`.
        let kind = if is!(self, "typeof") {
            self.input.bump();
            ImportKind::TypeOf
        } else if self.syntax.flow
            && self.input.is_word("type")
            && (self.input.peeked_is(&tok!('{'))
                || self.input.peeked_is(&tok!('*'))
                || (self.input.peeked_is_ident() && !self.input.peeked_is_word("from")))
        {
            self.input.bump();
            ImportKind::Type
        } else {
            ImportKind::Value
        };

        // import 'mod';
        if kind == ImportKind::Value {
            if let Some(Token::Str { .. }) = self.input.cur() {
                let src = self.parse_str_lit()?;
                expect!(self, ';');
                return Ok(ModuleDecl::Import(ImportDecl {
                    span: span!(self, start),
                    specifiers: vec![],
                    src,
                    kind,
                }));
            }
        }

        let mut specifiers = vec![];
        if is!(self, BindingIdent) {
            let local = self.parse_ident()?;
            specifiers.push(ImportSpecifier::Default(ImportDefaultSpecifier {
                span: local.span,
                local,
            }));
            if !eat!(self, ',') {
                return self.parse_import_src(start, specifiers, kind);
            }
        }

        if is!(self, '*') {
            let ns_start = self.input.cur_pos();
            self.input.bump();
            self.expect_word("as")?;
            let local = self.parse_ident()?;
            specifiers.push(ImportSpecifier::Namespace(ImportStarAsSpecifier {
                span: span!(self, ns_start),
                local,
            }));
        } else {
            expect!(self, '{');
            let named = self.parse_delimited(&tok!('}'), |p| p.parse_import_specifier(kind))?;
            expect!(self, '}');
            specifiers.extend(named.into_iter().map(ImportSpecifier::Named));
        }

        self.parse_import_src(start, specifiers, kind)
    }

    fn parse_import_src(
        &mut self,
        start: BytePos,
        specifiers: Vec<ImportSpecifier>,
        kind: ImportKind,
    ) -> PResult<ModuleDecl> {
        self.expect_word("from")?;
        let src = self.parse_str_lit()?;
        expect!(self, ';');

        Ok(ModuleDecl::Import(ImportDecl {
            span: span!(self, start),
            specifiers,
            src,
            kind,
        }))
    }

    /// `a`, `a as b`, `type T`, `typeof v as w`
    ///
    /// `flowParseImportSpecifier`
    fn parse_import_specifier(&mut self, decl_kind: ImportKind) -> PResult<ImportNamedSpecifier> {
        let start = self.input.cur_pos();

        // In `{ type as T }`, `type` is the imported name.
        let is_kind_word = is!(self, "typeof") || self.input.is_word("type");
        let kind = if decl_kind == ImportKind::Value
            && is_kind_word
            && matches!(self.input.peek(), Some(Token::Word(..)))
            && !self.input.peeked_is_word("as")
        {
            match self.input.bump() {
                tok!("typeof") => ImportKind::TypeOf,
                _ => ImportKind::Type,
            }
        } else {
            ImportKind::Value
        };

        let is_ident = self.input.is_ident();
        let imported = self.parse_ident_name()?;
        if self.eat_word("as") {
            let local = self.parse_ident()?;
            return Ok(ImportNamedSpecifier {
                span: span!(self, start),
                local,
                imported: Some(imported),
                kind,
            });
        }

        if !is_ident {
            syntax_error!(self, imported.span, SyntaxError::ExpectedIdent)
        }
        Ok(ImportNamedSpecifier {
            span: span!(self, start),
            local: imported,
            imported: None,
            kind,
        })
    }

    pub(super) fn parse_export(&mut self, start: BytePos) -> PResult<ModuleDecl> {
        expect!(self, "export");

        if eat!(self, "default") {
            return self.parse_export_default(start);
        }

        if is!(self, '*') || is!(self, '{') {
            return self.parse_export_list(start, false, false);
        }

        // export type { A, B };
        if self.syntax.flow && self.input.is_word("type") && self.input.peeked_is(&tok!('{')) {
            self.input.bump();
            return self.parse_export_list(start, true, false);
        }

        let decl_start = self.input.cur_pos();
        let decl = if self.is_flow_decl_start() {
            self.parse_flow_decl()?
        } else {
            let cur = self.input.cur().cloned();
            match cur.as_ref() {
                Some(&tok!("var")) | Some(&tok!("const")) => Decl::Var(self.parse_var_stmt(false)?),
                Some(&tok!("function")) => self.parse_fn_decl(decl_start, false)?,
                Some(&tok!("class")) => self.parse_class_decl(decl_start)?,
                _ if self.input.is_word("let") => Decl::Var(self.parse_var_stmt(false)?),
                _ if self.input.is_word("async")
                    && self.input.peeked_is(&tok!("function"))
                    && !self.input.has_linebreak_between_cur_and_peeked() =>
                {
                    self.input.bump();
                    self.parse_fn_decl(decl_start, true)?
                }
                _ => unexpected!(self, "a declaration"),
            }
        };

        Ok(ModuleDecl::ExportDecl(ExportDecl {
            span: span!(self, start),
            decl,
            declare: false,
        }))
    }

    fn parse_export_default(&mut self, start: BytePos) -> PResult<ModuleDecl> {
        let decl_start = self.input.cur_pos();

        let decl = if is!(self, "function") {
            Some(self.parse_default_fn(decl_start, false)?)
        } else if is!(self, "class") {
            Some(self.parse_default_class(decl_start)?)
        } else if self.input.is_word("async")
            && self.input.peeked_is(&tok!("function"))
            && !self.input.has_linebreak_between_cur_and_peeked()
        {
            self.input.bump();
            Some(self.parse_default_fn(decl_start, true)?)
        } else {
            None
        };

        if let Some(decl) = decl {
            return Ok(ModuleDecl::ExportDefaultDecl(ExportDefaultDecl {
                span: span!(self, start),
                decl,
                declare: false,
            }));
        }

        let expr = self.parse_assignment_expr()?;
        expect!(self, ';');
        Ok(ModuleDecl::ExportDefaultExpr(ExportDefaultExpr {
            span: span!(self, start),
            expr,
        }))
    }

    /// `* from 'm'`, `* as ns from 'm'` or `{ a, b as c } [from 'm']` after
    /// `export`, `export type` or `declare export`.
    pub(in crate::parser) fn parse_export_list(
        &mut self,
        start: BytePos,
        type_only: bool,
        declare: bool,
    ) -> PResult<ModuleDecl> {
        if is!(self, '*') {
            let star_start = self.input.cur_pos();
            self.input.bump();

            if self.eat_word("as") {
                let name = self.parse_ident_name()?;
                let ns_span = span!(self, star_start);
                self.expect_word("from")?;
                let src = self.parse_str_lit()?;
                expect!(self, ';');
                return Ok(ModuleDecl::ExportNamed(NamedExport {
                    span: span!(self, start),
                    specifiers: vec![ExportSpecifier::Namespace(ExportNamespaceSpecifier {
                        span: ns_span,
                        name,
                    })],
                    src: Some(src),
                    type_only,
                    declare,
                }));
            }

            self.expect_word("from")?;
            let src = self.parse_str_lit()?;
            expect!(self, ';');
            return Ok(ModuleDecl::ExportAll(ExportAll {
                span: span!(self, start),
                src,
                declare,
            }));
        }

        expect!(self, '{');
        let specifiers = self.parse_delimited(&tok!('}'), |p| p.parse_export_specifier())?;
        expect!(self, '}');

        let src = if self.eat_word("from") {
            Some(self.parse_str_lit()?)
        } else {
            None
        };
        expect!(self, ';');

        Ok(ModuleDecl::ExportNamed(NamedExport {
            span: span!(self, start),
            specifiers,
            src,
            type_only,
            declare,
        }))
    }

    fn parse_export_specifier(&mut self) -> PResult<ExportSpecifier> {
        let start = self.input.cur_pos();
        let orig = self.parse_ident_name()?;
        let exported = if self.eat_word("as") {
            Some(self.parse_ident_name()?)
        } else {
            None
        };
        Ok(ExportSpecifier::Named(ExportNamedSpecifier {
            span: span!(self, start),
            orig,
            exported,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::test_utils::{module_decl, parse_error, parse_module, text};
    use super::*;
    use pretty_assertions::assert_eq;

    fn import(src: &str) -> ImportDecl {
        match module_decl(src) {
            ModuleDecl::Import(i) => i,
            d => panic!("{:?}", d),
        }
    }

    #[test]
    fn import_kinds() {
        assert_eq!(import("import type { A } from 'a';").kind, ImportKind::Type);
        assert_eq!(import("import typeof B from 'b';").kind, ImportKind::TypeOf);
        assert_eq!(import("import type T, { U } from 'c';").specifiers.len(), 2);
        assert_eq!(import("import * as ns from 'd';").kind, ImportKind::Value);

        let i = import("import type from 'e';");
        assert_eq!(i.kind, ImportKind::Value);
        assert_eq!(i.specifiers[0].local().sym, *"type");

        let i = import("import 'side-effect';");
        assert!(i.specifiers.is_empty());
        assert_eq!(i.src.value, *"side-effect");
    }

    #[test]
    fn inline_import_kinds() {
        let src = "import React, { type Node, typeof Comp as C, type as T, useState } from 'react';";
        let i = import(src);
        assert_eq!(i.specifiers.len(), 5);

        let kinds = i
            .specifiers
            .iter()
            .map(|s| match s {
                ImportSpecifier::Named(n) => Some((n.kind, &*n.local.sym)),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                None,
                Some((ImportKind::Type, "Node")),
                Some((ImportKind::TypeOf, "C")),
                Some((ImportKind::Value, "T")),
                Some((ImportKind::Value, "useState")),
            ]
        );
    }

    #[test]
    fn keyword_import_needs_rename() {
        assert_eq!(
            *parse_error("import { default } from 'a';").kind(),
            SyntaxError::ExpectedIdent
        );
        assert_eq!(import("import { default as a } from 'a';").specifiers.len(), 1);
    }

    #[test]
    fn exports() {
        let src = "export default class {}
export default async function () {}
export default a + b;
export * from 'a';
export * as ns from 'b';
export { a, b as default } from 'c';
export type { T };
export type U = number;
export opaque type V = string;
export interface W {}
export const x = 1;
export async function f() {}";
        let program = parse_module(src);
        assert_eq!(program.body.len(), 12);

        let decls = program
            .body
            .into_iter()
            .map(|item| match item {
                ModuleItem::ModuleDecl(d) => d,
                s => panic!("{:?}", s),
            })
            .collect::<Vec<_>>();
        assert!(matches!(decls[0], ModuleDecl::ExportDefaultDecl(..)));
        assert!(matches!(decls[2], ModuleDecl::ExportDefaultExpr(..)));
        assert!(matches!(decls[3], ModuleDecl::ExportAll(..)));
        match &decls[6] {
            ModuleDecl::ExportNamed(e) => {
                assert!(e.type_only);
                assert_eq!(text(src, e.span), "export type { T };");
            }
            d => panic!("{:?}", d),
        }
        match &decls[7] {
            ModuleDecl::ExportDecl(ExportDecl { decl, .. }) => {
                assert!(matches!(decl, Decl::TypeAlias(..)))
            }
            d => panic!("{:?}", d),
        }
    }

    #[test]
    fn export_declarations() {
        for (src, expected) in [
            ("export var a = 1;", VarDeclKind::Var),
            ("export let b = 2;", VarDeclKind::Let),
            ("export const c = 3;", VarDeclKind::Const),
        ] {
            match module_decl(src) {
                ModuleDecl::ExportDecl(ExportDecl {
                    decl: Decl::Var(v),
                    ..
                }) => assert_eq!(v.kind, expected),
                d => panic!("{:?}", d),
            }
        }
        match module_decl("export async function f() {}") {
            ModuleDecl::ExportDecl(ExportDecl {
                decl: Decl::Fn(f), ..
            }) => assert!(f.function.is_async),
            d => panic!("{:?}", d),
        }
        assert!(matches!(
            module_decl("export class A {}"),
            ModuleDecl::ExportDecl(ExportDecl {
                decl: Decl::Class(..),
                ..
            })
        ));
    }

    #[test]
    fn import_call_is_an_expression() {
        let program = parse_module("import('./lazy').then(init);");
        assert!(matches!(program.body[0], ModuleItem::Stmt(Stmt::Expr(..))));
    }
}
