use crate::{
    decl::{Decl, DeclareClassDecl, DeclareFnDecl},
    expr::{ClassExpr, Expr, FnExpr},
    ident::Ident,
    lit::Str,
    types::Type,
};
use global_common::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleDecl {
    Import(ImportDecl),
    ExportDecl(ExportDecl),
    ExportNamed(NamedExport),
    ExportDefaultDecl(ExportDefaultDecl),
    ExportDefaultExpr(ExportDefaultExpr),
    ExportAll(ExportAll),
    /// Flow `declare export default T;`
    DeclareExportDefaultType(DeclareExportDefaultType),
    /// `export = expr;`
    ExportAssignment(ExportAssignment),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    Value,
    /// `import type`
    Type,
    /// Flow `import typeof`
    TypeOf,
}

impl ImportKind {
    pub fn as_keyword(self) -> Option<&'static str> {
        match self {
            ImportKind::Value => None,
            ImportKind::Type => Some("type"),
            ImportKind::TypeOf => Some("typeof"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub span: Span,
    pub specifiers: Vec<ImportSpecifier>,
    pub src: Str,
    pub kind: ImportKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportSpecifier {
    /// `import foo from 'm'`
    Default(ImportDefaultSpecifier),
    /// `import * as foo from 'm'`
    Namespace(ImportStarAsSpecifier),
    /// `import { foo, bar as baz, type T } from 'm'`
    Named(ImportNamedSpecifier),
}

impl ImportSpecifier {
    pub fn local(&self) -> &Ident {
        match self {
            ImportSpecifier::Default(s) => &s.local,
            ImportSpecifier::Namespace(s) => &s.local,
            ImportSpecifier::Named(s) => &s.local,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDefaultSpecifier {
    pub span: Span,
    pub local: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStarAsSpecifier {
    pub span: Span,
    pub local: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportNamedSpecifier {
    pub span: Span,
    pub local: Ident,
    pub imported: Option<Ident>,
    /// Inline `type` / `typeof` marker.
    pub kind: ImportKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDecl {
    pub span: Span,
    pub decl: Decl,
    /// Flow `declare export ...`
    pub declare: bool,
}

/// `export { foo } from 'mod'`
/// `export { foo as bar } from 'mod'`
/// `export type { T }`
#[derive(Debug, Clone, PartialEq)]
pub struct NamedExport {
    pub span: Span,
    pub specifiers: Vec<ExportSpecifier>,
    pub src: Option<Str>,
    pub type_only: bool,
    /// Flow `declare export { ... }`
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportSpecifier {
    /// `export * as foo from 'src';`
    Namespace(ExportNamespaceSpecifier),

    Named(ExportNamedSpecifier),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportNamespaceSpecifier {
    pub span: Span,
    pub name: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportNamedSpecifier {
    pub span: Span,
    /// `foo` in `export { foo as bar }`
    pub orig: Ident,
    /// `Some(bar)` in `export { foo as bar }`
    pub exported: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaultDecl {
    pub span: Span,
    pub decl: DefaultDecl,
    /// Flow `declare export default ...`
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultDecl {
    Class(ClassExpr),
    Fn(FnExpr),
    /// `function f(): void;` in an ambient context.
    DeclareFn(DeclareFnDecl),
    /// Flow `declare export default class C {}`
    DeclareClass(DeclareClassDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaultExpr {
    pub span: Span,
    pub expr: Box<Expr>,
}

/// `export * from 'mod'`
#[derive(Debug, Clone, PartialEq)]
pub struct ExportAll {
    pub span: Span,
    pub src: Str,
    /// Flow `declare export * from 'mod'`
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclareExportDefaultType {
    pub span: Span,
    pub type_ann: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportAssignment {
    pub span: Span,
    pub expr: Box<Expr>,
}

spanned!(
    ImportDecl,
    ImportDefaultSpecifier,
    ImportStarAsSpecifier,
    ImportNamedSpecifier,
    ExportDecl,
    NamedExport,
    ExportNamespaceSpecifier,
    ExportNamedSpecifier,
    ExportDefaultDecl,
    ExportDefaultExpr,
    ExportAll,
    DeclareExportDefaultType,
    ExportAssignment,
);
spanned_enum!(ModuleDecl {
    Import,
    ExportDecl,
    ExportNamed,
    ExportDefaultDecl,
    ExportDefaultExpr,
    ExportAll,
    DeclareExportDefaultType,
    ExportAssignment
});
spanned_enum!(ImportSpecifier {
    Default,
    Namespace,
    Named
});
spanned_enum!(ExportSpecifier { Namespace, Named });
spanned_enum!(DefaultDecl {
    Class,
    Fn,
    DeclareFn,
    DeclareClass
});
