//! Declarations: `declare` forms, opaque types and `import typeof`.
//!
//! Some Flow statements have no single-statement counterpart and expand into
//! several, such as `declare module.exports: T`. Those are replaced as a whole
//! after their children were visited.
use super::{Fragment, Take, Transducer};
use crate::construct::{FlowConstruct, TsConstruct};
use ast::*;
use ecma_visit::VisitMutWith;
use global_common::{Spanned, DUMMY_SP};
use std::mem;

impl Transducer<'_> {
    /// Visits a statement list, expanding the statements which need it.
    pub(super) fn visit_mut_module_items(&mut self, items: &mut Vec<ModuleItem>) {
        let mut out = Vec::with_capacity(items.len());
        for mut item in items.drain(..) {
            item.visit_mut_with(self);
            match self.expand_item(&mut item) {
                Some(expanded) => {
                    self.record(item.span(), Fragment::Items(expanded.clone()));
                    out.extend(expanded);
                }
                None => out.push(item),
            }
        }
        *items = out;
    }

    /// Drops `declare` from a statement of an ambient module, where it is
    /// implied.
    pub(super) fn strip_inner_declare(&mut self, item: &mut ModuleItem) {
        if let ModuleItem::Stmt(Stmt::Decl(decl)) = item {
            if matches!(decl, Decl::Module(..)) {
                return;
            }
            let lo = decl.span().lo;
            if let Some(flag) = declare_flag(decl) {
                if mem::take(flag) {
                    self.strip_declare(lo);
                }
            }
        }
    }

    /// `declare export var x: T` becomes `export declare var x: T`. Types
    /// and interfaces need no `declare`.
    pub(super) fn rewrite_declare_export(&mut self, export: &mut ExportDecl) {
        export.declare = false;
        let plain = self.in_ambient_module
            || matches!(
                export.decl,
                Decl::TypeAlias(..) | Decl::Interface(..) | Decl::OpaqueType(..)
            );
        if !plain {
            if let Some(flag) = declare_flag(&mut export.decl) {
                *flag = true;
            }
        }
        let decl_lo = export.decl.span().lo;
        self.replace(
            export.span.with_hi(decl_lo),
            if plain { "export " } else { "export declare " },
        );
    }

    pub(super) fn rewrite_opaque(&mut self, n: &mut Decl) {
        if let Decl::OpaqueType(o) = n {
            self.report(
                o.span,
                FlowConstruct::OpaqueType,
                TsConstruct::TypeAlias,
                "opaque type widened to a type alias",
            );
            let type_ann = o
                .impltype
                .take()
                .or_else(|| o.supertype.take())
                .unwrap_or_else(|| Box::new(Type::keyword(KeywordKind::Unknown)));
            let alias = TypeAliasDecl {
                span: o.span,
                declare: o.declare,
                id: o.id.clone(),
                type_params: o.type_params.take(),
                type_ann,
            };
            let text = TypeAliasDecl {
                declare: alias.declare && self.written_declare(alias.span),
                ..alias.clone()
            };
            self.record(alias.span, Fragment::Items(vec![stmt(Decl::TypeAlias(text))]));
            *n = Decl::TypeAlias(alias);
        }
    }

    pub(super) fn rewrite_declare_class(&mut self, n: &mut Decl) {
        let d = match n.take() {
            Decl::DeclareClass(d) => d,
            other => {
                *n = other;
                return;
            }
        };
        let class = self.declared_class(d);
        let text = ClassDecl {
            declare: class.declare && self.written_declare(class.span),
            ..class.clone()
        };
        self.record(class.span, Fragment::Items(vec![stmt(Decl::Class(text))]));
        *n = Decl::Class(class);
    }

    /// An ambient class whose body is an object type becomes a class with
    /// bodiless members.
    fn declared_class(&mut self, d: DeclareClassDecl) -> ClassDecl {
        if let Some(mixin) = d.mixins.first() {
            self.report(
                mixin.span,
                FlowConstruct::Mixins,
                TsConstruct::Removed,
                "mixins dropped from declared class",
            );
        }

        let mut body = vec![];
        for member in d.body.members {
            match member {
                ObjectTypeMember::Prop(p) => body.push(ClassMember::ClassProp(ClassProp {
                    span: p.span,
                    key: Key::Public(p.key),
                    value: None,
                    type_ann: Some(TypeAnn::synth(*p.value)),
                    is_static: p.is_static,
                    variance: None,
                    declare: false,
                    readonly: p.readonly,
                    optional: p.optional,
                })),
                ObjectTypeMember::Method(m) => body.push(ClassMember::Method(declared_method(m))),
                ObjectTypeMember::Indexer(i) => body.push(ClassMember::Index(i)),
                ObjectTypeMember::CallProp(c) => self.report(
                    c.span,
                    FlowConstruct::FunctionType,
                    TsConstruct::Removed,
                    "call property dropped from declared class",
                ),
                ObjectTypeMember::Spread(s) => self.report(
                    s.span,
                    FlowConstruct::ObjectSpread,
                    TsConstruct::Removed,
                    "spread dropped from declared class",
                ),
                ObjectTypeMember::InternalSlot(..) => {}
            }
        }

        let (super_class, super_type_args) = match d.extends {
            Some(extends) => (Some(Box::new(name_expr(&extends.name))), extends.type_args),
            None => (None, None),
        };

        ClassDecl {
            span: d.span,
            ident: d.id,
            declare: d.declare,
            class: Class {
                span: d.span,
                body,
                super_class,
                super_type_args,
                type_params: d.type_params,
                implements: d.implements,
            },
        }
    }

    fn expand_item(&mut self, item: &mut ModuleItem) -> Option<Vec<ModuleItem>> {
        let declare = !self.in_ambient_module;
        match item {
            ModuleItem::Stmt(Stmt::Decl(Decl::DeclareModuleExports(d))) => {
                let ty = d.type_ann.type_ann.take();
                Some(vec![
                    const_decl("moduleExports", ty, declare),
                    ModuleItem::ModuleDecl(ModuleDecl::ExportAssignment(ExportAssignment {
                        span: DUMMY_SP,
                        expr: Box::new(Expr::Ident(Ident::synth("moduleExports"))),
                    })),
                ])
            }
            ModuleItem::ModuleDecl(ModuleDecl::DeclareExportDefaultType(d)) => {
                let ty = d.type_ann.take();
                Some(vec![
                    const_decl("_default", ty, declare),
                    export_default(Ident::synth("_default")),
                ])
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(d)) if d.declare => {
                let (ident, decl) = match &d.decl {
                    DefaultDecl::DeclareFn(f) => {
                        let f = DeclareFnDecl {
                            declare,
                            ..f.clone()
                        };
                        (f.id.clone(), Decl::DeclareFn(f))
                    }
                    DefaultDecl::DeclareClass(c) => {
                        let mut class = self.declared_class(c.clone());
                        class.declare = declare;
                        (class.ident.clone(), Decl::Class(class))
                    }
                    DefaultDecl::Class(..) | DefaultDecl::Fn(..) => return None,
                };
                Some(vec![stmt(decl), export_default(ident)])
            }
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => expand_typeof_import(import),
            _ => None,
        }
    }
}

fn declare_flag(decl: &mut Decl) -> Option<&mut bool> {
    match decl {
        Decl::Class(d) => Some(&mut d.declare),
        Decl::Fn(d) => Some(&mut d.declare),
        Decl::Var(d) => Some(&mut d.declare),
        Decl::TypeAlias(d) => Some(&mut d.declare),
        Decl::OpaqueType(d) => Some(&mut d.declare),
        Decl::Interface(d) => Some(&mut d.declare),
        Decl::DeclareFn(d) => Some(&mut d.declare),
        Decl::DeclareClass(d) => Some(&mut d.declare),
        Decl::Module(d) => Some(&mut d.declare),
        Decl::DeclareModuleExports(..) => None,
    }
}

fn declared_method(m: ObjectTypeMethod) -> ClassMethod {
    let is_constructor = m.key.static_name() == Some("constructor");
    let FnType {
        span,
        type_params,
        params,
        rest,
        return_type,
        ..
    } = m.fn_type;

    let mut params: Vec<Param> = params
        .into_iter()
        .enumerate()
        .map(|(i, p)| Param {
            span: p.span,
            pat: Pat::Ident(BindingIdent {
                span: p.span,
                id: p
                    .name
                    .unwrap_or_else(|| Ident::synth(&format!("arg{}", i))),
                optional: p.optional,
                type_ann: Some(TypeAnn::synth(*p.type_ann)),
            }),
        })
        .collect();
    if let Some(rest) = rest {
        let arg = rest.name.unwrap_or_else(|| Ident::synth("rest"));
        params.push(Param {
            span: rest.span,
            pat: Pat::Rest(RestPat {
                span: rest.span,
                dot3_token: DUMMY_SP,
                arg: Box::new(Pat::Ident(arg.into())),
                type_ann: Some(TypeAnn::synth(*rest.type_ann)),
            }),
        });
    }

    ClassMethod {
        span: m.span,
        key: Key::Public(m.key),
        function: Function {
            params,
            span,
            body: None,
            is_generator: false,
            is_async: false,
            type_params,
            return_type: if is_constructor {
                None
            } else {
                Some(TypeAnn::synth(*return_type))
            },
            predicate: None,
        },
        kind: match m.kind {
            MethodSigKind::Method => MethodKind::Method,
            MethodSigKind::Getter => MethodKind::Getter,
            MethodSigKind::Setter => MethodKind::Setter,
        },
        is_static: m.is_static,
        optional: m.optional,
    }
}

/// `A.B.C` as an expression.
fn name_expr(name: &TypeName) -> Expr {
    match name {
        TypeName::Ident(i) => Expr::Ident(i.clone()),
        TypeName::Qualified(q) => Expr::Member(MemberExpr {
            span: DUMMY_SP,
            obj: ExprOrSuper::Expr(Box::new(name_expr(&q.left))),
            prop: MemberProp::Ident(q.right.clone()),
            optional: false,
        }),
    }
}

fn stmt(decl: Decl) -> ModuleItem {
    ModuleItem::Stmt(Stmt::Decl(decl))
}

/// `declare const name: T;`
fn const_decl(name: &str, ty: Type, declare: bool) -> ModuleItem {
    stmt(Decl::Var(VarDecl {
        span: DUMMY_SP,
        kind: VarDeclKind::Const,
        declare,
        decls: vec![VarDeclarator {
            span: DUMMY_SP,
            name: Pat::Ident(BindingIdent {
                span: DUMMY_SP,
                id: Ident::synth(name),
                optional: false,
                type_ann: Some(TypeAnn::synth(ty)),
            }),
            init: None,
        }],
    }))
}

fn export_default(ident: Ident) -> ModuleItem {
    ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(ExportDefaultExpr {
        span: DUMMY_SP,
        expr: Box::new(Expr::Ident(ident)),
    }))
}

/// `import typeof A from 'm'` becomes `type A = typeof import('m')['default']`.
/// Value specifiers of the same statement stay in an import.
fn expand_typeof_import(import: &ImportDecl) -> Option<Vec<ModuleItem>> {
    let whole = import.kind == ImportKind::TypeOf;
    let any_typeof = import
        .specifiers
        .iter()
        .any(|s| matches!(s, ImportSpecifier::Named(n) if n.kind == ImportKind::TypeOf));
    if !whole && !any_typeof {
        return None;
    }

    let mut kept = vec![];
    let mut aliases = vec![];
    for specifier in &import.specifiers {
        let (local, imported) = match specifier {
            ImportSpecifier::Named(n) if whole || n.kind == ImportKind::TypeOf => {
                let imported = n.imported.as_ref().unwrap_or(&n.local);
                (n.local.clone(), Some(imported.sym.to_string()))
            }
            ImportSpecifier::Default(d) if whole => (d.local.clone(), Some("default".into())),
            ImportSpecifier::Namespace(ns) if whole => (ns.local.clone(), None),
            _ => {
                kept.push(specifier.clone());
                continue;
            }
        };
        aliases.push(typeof_alias(local, &import.src, imported.as_deref()));
    }

    let mut items = vec![];
    if !kept.is_empty() {
        items.push(ModuleItem::ModuleDecl(ModuleDecl::Import(ImportDecl {
            span: import.span,
            specifiers: kept,
            src: import.src.clone(),
            kind: ImportKind::Value,
        })));
    }
    items.extend(aliases);
    Some(items)
}

fn typeof_alias(local: Ident, src: &Str, imported: Option<&str>) -> ModuleItem {
    let module = Type::Import(ImportType {
        span: DUMMY_SP,
        arg: src.clone(),
        is_typeof: true,
    });
    let ty = match imported {
        Some(name) => Type::indexed(
            module,
            Type::Lit(LitType {
                span: DUMMY_SP,
                lit: TypeLit::Str(quoted_like(name, src)),
            }),
        ),
        None => module,
    };
    stmt(Decl::TypeAlias(TypeAliasDecl {
        span: DUMMY_SP,
        declare: false,
        id: local,
        type_params: None,
        type_ann: Box::new(ty),
    }))
}

/// A string literal quoted the way `like` is.
fn quoted_like(value: &str, like: &Str) -> Str {
    let mut s = Str::synth(value);
    if like.raw.starts_with('"') {
        s.raw = format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\"")).into();
    }
    s
}
