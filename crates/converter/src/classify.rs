//! Decides whether a file asks for Flow and whether it actually uses it.
//!
//! Only the top level is inspected: a file whose types all live inside
//! function bodies counts as empty. The question answered is "is this file
//! a pragma without types", not "does this file contain a type anywhere".
use crate::{error::ConvertError, parse_source};
use ast::*;
use global_common::{BytePos, Comment, Comments, Spanned};
use parser::ParsedProgram;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PragmaClassification {
    NoFlowPragma,
    /// A top-level statement is Flow syntax. Whether a pragma exists does
    /// not matter then.
    FlowAnnotatedWithTypes,
    /// A pragma, but no Flow syntax at the top level.
    FlowAnnotatedEmpty,
}

pub fn classify(parsed: &ParsedProgram) -> PragmaClassification {
    let body = &parsed.program.body;
    let mut has_pragma = false;
    let mut has_flow = false;

    for (i, item) in body.iter().enumerate() {
        has_flow = has_flow || is_flow_item(item);
        has_pragma = has_pragma
            || leading_comments(&parsed.comments, body, i)
                .iter()
                .chain(trailing_comments(&parsed.comments, body, i))
                .any(is_pragma);
    }

    if has_flow {
        PragmaClassification::FlowAnnotatedWithTypes
    } else if has_pragma {
        PragmaClassification::FlowAnnotatedEmpty
    } else {
        PragmaClassification::NoFlowPragma
    }
}

pub fn classify_source(src: &str) -> Result<PragmaClassification, ConvertError> {
    Ok(classify(&parse_source(src)?))
}

/// Returns true if a comment leading a top-level statement is a pragma.
pub fn has_flow_pragma(parsed: &ParsedProgram) -> bool {
    let body = &parsed.program.body;
    (0..body.len()).any(|i| leading_comments(&parsed.comments, body, i).iter().any(is_pragma))
}

/// `@flow`, `$FlowFixMe ...`
fn is_pragma(c: &Comment) -> bool {
    let text = c.text.trim();
    text == "@flow" || text.starts_with("$FlowFixMe")
}

/// Comments between the previous statement and statement `i`.
fn leading_comments<'c>(comments: &'c Comments, body: &[ModuleItem], i: usize) -> &'c [Comment] {
    let lo = match i {
        0 => BytePos(0),
        _ => body[i - 1].span().hi,
    };
    comments.between(lo, body[i].span().lo)
}

/// Comments between statement `i` and the next one, or the end of the file.
fn trailing_comments<'c>(comments: &'c Comments, body: &[ModuleItem], i: usize) -> &'c [Comment] {
    let hi = body
        .get(i + 1)
        .map_or(BytePos(u32::MAX), |next| next.span().lo);
    comments.between(body[i].span().hi, hi)
}

fn is_flow_item(item: &ModuleItem) -> bool {
    match item {
        ModuleItem::ModuleDecl(decl) => match decl {
            ModuleDecl::Import(import) => {
                import.kind != ImportKind::Value
                    || import.specifiers.iter().any(|s| match s {
                        ImportSpecifier::Named(named) => named.kind != ImportKind::Value,
                        _ => false,
                    })
            }
            ModuleDecl::ExportDecl(export) => export.declare || is_flow_decl(&export.decl),
            ModuleDecl::ExportNamed(export) => export.type_only || export.declare,
            ModuleDecl::ExportDefaultDecl(export) => {
                export.declare
                    || match &export.decl {
                        DefaultDecl::Class(c) => class_has_flow(&c.class),
                        DefaultDecl::Fn(f) => function_has_flow(&f.function),
                        DefaultDecl::DeclareFn(..) | DefaultDecl::DeclareClass(..) => true,
                    }
            }
            ModuleDecl::ExportDefaultExpr(export) => expr_has_flow(&export.expr),
            ModuleDecl::ExportAll(export) => export.declare,
            ModuleDecl::DeclareExportDefaultType(..) => true,
            ModuleDecl::ExportAssignment(..) => false,
        },
        ModuleItem::Stmt(Stmt::Decl(decl)) => is_flow_decl(decl),
        ModuleItem::Stmt(Stmt::Expr(stmt)) => matches!(stmt.expr.unwrap_parens(), Expr::TypeCast(..)),
        ModuleItem::Stmt(..) => false,
    }
}

fn is_flow_decl(decl: &Decl) -> bool {
    match decl {
        Decl::TypeAlias(..)
        | Decl::OpaqueType(..)
        | Decl::Interface(..)
        | Decl::DeclareFn(..)
        | Decl::DeclareClass(..)
        | Decl::Module(..)
        | Decl::DeclareModuleExports(..) => true,
        Decl::Var(var) => {
            var.declare
                || var.decls.iter().any(|d| {
                    pat_has_flow(&d.name) || d.init.as_deref().map_or(false, expr_has_flow)
                })
        }
        Decl::Fn(f) => f.declare || function_has_flow(&f.function),
        Decl::Class(c) => c.declare || class_has_flow(&c.class),
    }
}

fn pat_has_flow(pat: &Pat) -> bool {
    match pat {
        Pat::Ident(i) => i.optional || i.type_ann.is_some(),
        Pat::Array(p) => p.optional || p.type_ann.is_some(),
        Pat::Object(p) => p.optional || p.type_ann.is_some(),
        Pat::Rest(p) => p.type_ann.is_some(),
        Pat::Assign(p) => pat_has_flow(&p.left),
        Pat::Expr(..) => false,
    }
}

fn function_has_flow(f: &Function) -> bool {
    f.type_params.is_some()
        || f.return_type.is_some()
        || f.predicate.is_some()
        || f.params.iter().any(|p| pat_has_flow(&p.pat))
}

fn class_has_flow(c: &Class) -> bool {
    c.type_params.is_some()
        || c.super_type_args.is_some()
        || !c.implements.is_empty()
        || c.body.iter().any(|member| match member {
            ClassMember::ClassProp(p) => p.type_ann.is_some() || p.variance.is_some(),
            ClassMember::Method(m) => function_has_flow(&m.function),
            ClassMember::Index(..) => true,
            ClassMember::Empty(..) => false,
        })
}

/// Function, arrow and class initializers, and casts.
fn expr_has_flow(expr: &Expr) -> bool {
    match expr.unwrap_parens() {
        Expr::Arrow(arrow) => {
            arrow.type_params.is_some()
                || arrow.return_type.is_some()
                || arrow.predicate.is_some()
                || arrow.params.iter().any(pat_has_flow)
        }
        Expr::Fn(f) => function_has_flow(&f.function),
        Expr::Class(c) => class_has_flow(&c.class),
        Expr::TypeCast(..) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PragmaClassification::*;

    fn class(src: &str) -> PragmaClassification {
        classify_source(src).unwrap()
    }

    #[test]
    fn pragma_without_types_is_empty() {
        assert_eq!(class("// @flow\nconst x = 1;"), FlowAnnotatedEmpty);
        assert_eq!(class("/* @flow */\nfunction f(a) { return a; }"), FlowAnnotatedEmpty);
        assert_eq!(class("const x = 1; // $FlowFixMe: later"), FlowAnnotatedEmpty);
    }

    #[test]
    fn types_win_over_pragma() {
        assert_eq!(class("// @flow\ntype T = ?string;"), FlowAnnotatedWithTypes);
        assert_eq!(class("type T = string;"), FlowAnnotatedWithTypes);
        assert_eq!(class("export function f(x: number) {}"), FlowAnnotatedWithTypes);
        assert_eq!(class("import { type A } from 'a';"), FlowAnnotatedWithTypes);
        assert_eq!(class("const f = (x): string => x;"), FlowAnnotatedWithTypes);
        assert_eq!(class("export default class A { x: number; }"), FlowAnnotatedWithTypes);
        assert_eq!(class("declare var x: number;"), FlowAnnotatedWithTypes);
        assert_eq!(class("(x: any);"), FlowAnnotatedWithTypes);
    }

    #[test]
    fn pragma_needs_exact_text() {
        assert_eq!(class("// @flow strict\nconst x = 1;"), NoFlowPragma);
        assert_eq!(class("// @noflow\nconst x = 1;"), NoFlowPragma);
        assert_eq!(class("const x = 1;"), NoFlowPragma);
    }

    #[test]
    fn bodies_are_not_scanned() {
        assert_eq!(
            class("// @flow\nfunction f() { const x: number = 1; }"),
            FlowAnnotatedEmpty
        );
        assert_eq!(
            class("// @flow\nfunction f() {\n  // @flow\n}"),
            FlowAnnotatedEmpty
        );
        assert_eq!(class("function f() {\n  // @flow\n}"), NoFlowPragma);
    }

    #[test]
    fn classification_is_idempotent() {
        for src in ["// @flow\nconst x = 1;", "type A = B;", "let a;"] {
            assert_eq!(class(src), class(src));
        }
    }

    #[test]
    fn flow_pragma_only_reads_leading_comments() {
        let parsed = parse_source("const x = 1; // @flow").unwrap();
        assert!(!has_flow_pragma(&parsed));
        let parsed = parse_source("// @flow\nconst x = 1;").unwrap();
        assert!(has_flow_pragma(&parsed));
    }
}
