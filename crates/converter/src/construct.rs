//! The constructs the converter reads and writes, and the diagnostics
//! reported for approximations.
use ast::*;
use ecma_visit::{Visit, VisitWith};
use global_common::Span;
use serde::Serialize;
use std::fmt;

/// Flow-only syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlowConstruct {
    TypeAlias,
    Interface,
    OpaqueType,
    TypeAnnotation,
    GenericApplication,
    Union,
    Intersection,
    /// `?T`
    Nullable,
    /// `{| |}`
    ExactObject,
    /// `{ a: T, ... }`
    InexactObject,
    /// `{ ...A }`
    ObjectSpread,
    /// `$Keys<T>`, `$Shape<T>`, `Class<T>`, ...
    UtilityType,
    Tuple,
    FunctionType,
    /// `(string) => void`
    UnnamedFunctionParam,
    Declare,
    TypeOnlySpecifier,
    /// `import typeof`
    TypeofImport,
    /// `+T`, `-p: T`
    Variance,
    /// `(expr: T)`
    TypeCast,
    /// `%checks`
    Predicate,
    /// `*`
    Existential,
    /// `mixed`, `empty`, `bool`
    FlowKeyword,
    /// `T?.[K]`
    OptionalIndexedAccess,
    /// `[[slot]]: T`
    InternalSlot,
    /// `declare class C mixins M`
    Mixins,
}

/// What a Flow construct became.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TsConstruct {
    TypeAlias,
    Interface,
    TypeAnnotation,
    GenericApplication,
    Union,
    Intersection,
    /// `T | null | undefined`
    NullableUnion,
    ObjectLiteral,
    IndexSignature,
    /// `Partial<T>`, `Readonly<T>`, ...
    UtilityReference,
    /// A utility type expanded into the type it stands for.
    InlinedUtility,
    MappedType,
    Tuple,
    FunctionType,
    AmbientDeclaration,
    TypeOnlySpecifier,
    /// `typeof import('m')`
    ImportType,
    AsExpression,
    Readonly,
    Keyword,
    /// Nothing was emitted.
    Removed,
}

/// A construct which has no exact TypeScript equivalent and was
/// approximated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub span: Span,
    /// 1-based
    pub line: usize,
    /// 1-based, in chars
    pub column: usize,
    pub construct: FlowConstruct,
    pub emitted: TsConstruct,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Flow utility types the converter knows how to replace.
pub(crate) const UTILITY_TYPES: &[&str] = &[
    "$Keys",
    "$Values",
    "$ReadOnly",
    "$Exact",
    "$Shape",
    "$Partial",
    "$Diff",
    "$Rest",
    "$PropertyType",
    "$ElementType",
    "$NonMaybeType",
    "$ReadOnlyArray",
    "$ReadOnlyMap",
    "$ReadOnlySet",
    "$Call",
    "$KeyMirror",
    "$ObjMap",
    "$ObjMapi",
    "$Subtype",
    "$Supertype",
    "$FlowFixMe",
];

/// Collects every Flow-only node of a tree, wherever it is.
#[derive(Debug, Default)]
pub struct FlowConstructFinder {
    pub found: Vec<(FlowConstruct, Span)>,
}

impl FlowConstructFinder {
    pub fn find(program: &Program) -> Vec<(FlowConstruct, Span)> {
        let mut finder = FlowConstructFinder::default();
        program.visit_with(&mut finder);
        finder.found
    }

    fn add(&mut self, construct: FlowConstruct, span: Span) {
        self.found.push((construct, span));
    }
}

impl Visit for FlowConstructFinder {
    fn visit_type(&mut self, n: &Type) {
        match n {
            Type::Nullable(t) => self.add(FlowConstruct::Nullable, t.span),
            Type::Existential(t) => self.add(FlowConstruct::Existential, t.span),
            Type::Keyword(k)
                if matches!(k.kind, KeywordKind::Mixed | KeywordKind::Empty | KeywordKind::Bool) =>
            {
                self.add(FlowConstruct::FlowKeyword, k.span)
            }
            Type::IndexedAccess(t) if t.optional => {
                self.add(FlowConstruct::OptionalIndexedAccess, t.span)
            }
            Type::Ref(r) => {
                let name = &*r.name.last().sym;
                if UTILITY_TYPES.contains(&name) || (name == "Class" && r.type_args.is_some()) {
                    self.add(FlowConstruct::UtilityType, r.span)
                }
            }
            _ => {}
        }
        n.visit_children_with(self)
    }

    fn visit_object_type(&mut self, n: &ObjectType) {
        if n.exact {
            self.add(FlowConstruct::ExactObject, n.span);
        }
        if let Some(span) = n.inexact {
            self.add(FlowConstruct::InexactObject, span);
        }
        n.visit_children_with(self)
    }

    fn visit_object_type_spread(&mut self, n: &ObjectTypeSpread) {
        self.add(FlowConstruct::ObjectSpread, n.span);
        n.visit_children_with(self)
    }

    fn visit_internal_slot(&mut self, n: &InternalSlot) {
        self.add(FlowConstruct::InternalSlot, n.span);
    }

    fn visit_variance(&mut self, n: &Variance) {
        self.add(FlowConstruct::Variance, n.span);
    }

    fn visit_class_prop(&mut self, n: &ClassProp) {
        if let Some(variance) = &n.variance {
            self.add(FlowConstruct::Variance, variance.span);
        }
        n.visit_children_with(self)
    }

    fn visit_type_param(&mut self, n: &TypeParam) {
        if let Some(bound) = &n.bound {
            self.add(FlowConstruct::TypeAnnotation, bound.span);
        }
        n.visit_children_with(self)
    }

    fn visit_fn_type_param(&mut self, n: &FnTypeParam) {
        if n.name.is_none() {
            self.add(FlowConstruct::UnnamedFunctionParam, n.span);
        }
        n.visit_children_with(self)
    }

    fn visit_type_cast_expr(&mut self, n: &TypeCastExpr) {
        self.add(FlowConstruct::TypeCast, n.span);
        n.visit_children_with(self)
    }

    fn visit_predicate(&mut self, n: &Predicate) {
        self.add(FlowConstruct::Predicate, n.span);
    }

    fn visit_opaque_type_decl(&mut self, n: &OpaqueTypeDecl) {
        self.add(FlowConstruct::OpaqueType, n.span);
        n.visit_children_with(self)
    }

    fn visit_declare_class_decl(&mut self, n: &DeclareClassDecl) {
        self.add(FlowConstruct::Declare, n.span);
        if let Some(mixin) = n.mixins.first() {
            self.add(FlowConstruct::Mixins, mixin.span);
        }
        n.visit_children_with(self)
    }

    fn visit_declare_module_exports(&mut self, n: &DeclareModuleExports) {
        self.add(FlowConstruct::Declare, n.span);
        n.visit_children_with(self)
    }

    fn visit_module_decl(&mut self, n: &ModuleDecl) {
        match n {
            ModuleDecl::DeclareExportDefaultType(d) => self.add(FlowConstruct::Declare, d.span),
            ModuleDecl::ExportDecl(d) if d.declare => self.add(FlowConstruct::Declare, d.span),
            ModuleDecl::ExportDefaultDecl(d) if d.declare => {
                self.add(FlowConstruct::Declare, d.span)
            }
            ModuleDecl::ExportNamed(d) if d.declare => self.add(FlowConstruct::Declare, d.span),
            ModuleDecl::ExportAll(d) if d.declare => self.add(FlowConstruct::Declare, d.span),
            ModuleDecl::Import(d) if d.kind == ImportKind::TypeOf => {
                self.add(FlowConstruct::TypeofImport, d.span)
            }
            _ => {}
        }
        n.visit_children_with(self)
    }

    fn visit_import_named_specifier(&mut self, n: &ImportNamedSpecifier) {
        if n.kind == ImportKind::TypeOf {
            self.add(FlowConstruct::TypeofImport, n.span);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser::Syntax;

    fn find(src: &str) -> Vec<FlowConstruct> {
        let parsed = parser::parse(src, Syntax::default()).unwrap();
        FlowConstructFinder::find(&parsed.program)
            .into_iter()
            .map(|(c, _)| c)
            .collect()
    }

    #[test]
    fn finds_nested_constructs() {
        assert_eq!(
            find("function f() { const x = (y: ?mixed); }"),
            vec![
                FlowConstruct::TypeCast,
                FlowConstruct::Nullable,
                FlowConstruct::FlowKeyword
            ]
        );
        assert_eq!(
            find("type A = {| +a: $Keys<B> |};"),
            vec![
                FlowConstruct::ExactObject,
                FlowConstruct::Variance,
                FlowConstruct::UtilityType
            ]
        );
    }

    #[test]
    fn shared_syntax_is_not_reported() {
        assert!(find("type A = { a: string }; interface I { m(x: number): void }").is_empty());
        assert!(find("import type { A } from 'a'; const b = <div />;").is_empty());
    }
}
