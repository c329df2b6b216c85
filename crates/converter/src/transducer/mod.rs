//! Rewrites every Flow construct of a program into its TypeScript
//! counterpart.
//!
//! The tree is rewritten in place, children before parents. Every change is
//! also recorded as a [Rewrite] of the original text, so that the printer can
//! patch the source rather than reprint it. A token edit is recorded as
//! text. A restructured node is recorded as a fragment of the new tree, and
//! that fragment supersedes the edits recorded inside it.
use crate::{
    construct::{Diagnostic, FlowConstruct, TsConstruct},
    options::ConversionOptions,
};
use ast::*;
use ecma_visit::{VisitMut, VisitMutWith};
use global_common::{BytePos, Comments, LineIndex, Pos, Span, Spanned, DUMMY_SP};
use parser::ParsedProgram;
use rustc_hash::FxHashSet;
use std::mem;
use tracing::{debug, trace};

mod decls;
#[cfg(test)]
mod tests;
mod types;

/// Replacement of a range of the original text.
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    /// Empty for insertions.
    pub span: Span,
    pub fragment: Fragment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Text(String),
    Type(Box<Type>),
    /// Statements printed one per line.
    Items(Vec<ModuleItem>),
}

impl Fragment {
    /// Returns true for fragments printed from the tree, which replace
    /// everything recorded within their range.
    fn is_reprint(&self) -> bool {
        !matches!(self, Fragment::Text(..))
    }
}

#[derive(Debug)]
pub struct Transduced {
    /// The program with every Flow construct replaced.
    pub program: Program,
    pub comments: Comments,
    /// In recording order.
    pub rewrites: Vec<Rewrite>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn transduce(src: &str, parsed: ParsedProgram, options: &ConversionOptions) -> Transduced {
    let ParsedProgram {
        mut program,
        comments,
    } = parsed;

    let mut t = Transducer::new(src, options);
    program.visit_mut_with(&mut t);
    trace!(
        rewrites = t.rewrites.len(),
        diagnostics = t.diagnostics.len(),
        "transduced program"
    );

    Transduced {
        program,
        comments,
        rewrites: t.rewrites,
        diagnostics: t.diagnostics,
    }
}

/// Where a type sits, for the purpose of adding parentheses TypeScript
/// requires but Flow did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypePos {
    Free,
    /// Array element and indexed object.
    Operand,
    /// Also the operand of `?`, which becomes a union.
    UnionMember,
    IntersectionMember,
}

impl TypePos {
    fn needs_parens(self, ty: &Type) -> bool {
        match self {
            TypePos::Free => false,
            TypePos::Operand => matches!(
                ty,
                Type::Union(..) | Type::Intersection(..) | Type::Fn(..) | Type::KeyOf(..)
            ),
            TypePos::UnionMember => matches!(ty, Type::Fn(..)),
            TypePos::IntersectionMember => matches!(ty, Type::Union(..) | Type::Fn(..)),
        }
    }
}

fn is_nullable_union(ty: &Type) -> bool {
    match ty.unwrap_parens() {
        Type::Union(u) => {
            let has = |kind: KeywordKind| {
                u.types
                    .iter()
                    .any(|t| matches!(&**t, Type::Keyword(k) if k.kind == kind))
            };
            has(KeywordKind::Null) && has(KeywordKind::Undefined)
        }
        _ => false,
    }
}

fn strip_parens(ty: Type) -> Type {
    match ty {
        Type::Paren(p) => strip_parens(*p.type_ann),
        ty => ty,
    }
}

/// Moves a node out of the tree, leaving a placeholder to be overwritten.
trait Take: Sized {
    fn dummy() -> Self;

    fn take(&mut self) -> Self {
        mem::replace(self, Self::dummy())
    }
}

impl Take for Type {
    fn dummy() -> Self {
        Type::keyword(KeywordKind::Any)
    }
}

impl Take for Expr {
    fn dummy() -> Self {
        Expr::This(ThisExpr { span: DUMMY_SP })
    }
}

impl Take for Decl {
    fn dummy() -> Self {
        Decl::Var(VarDecl {
            span: DUMMY_SP,
            kind: VarDeclKind::Var,
            declare: false,
            decls: vec![],
        })
    }
}

struct Transducer<'a> {
    src: &'a str,
    options: &'a ConversionOptions,
    lines: LineIndex,
    rewrites: Vec<Rewrite>,
    diagnostics: Vec<Diagnostic>,
    reported: FxHashSet<(Span, FlowConstruct)>,
    pos: TypePos,
    in_ambient_module: bool,
}

impl<'a> Transducer<'a> {
    fn new(src: &'a str, options: &'a ConversionOptions) -> Self {
        Transducer {
            src,
            options,
            lines: LineIndex::new(src),
            rewrites: vec![],
            diagnostics: vec![],
            reported: Default::default(),
            pos: TypePos::Free,
            in_ambient_module: false,
        }
    }

    fn record(&mut self, span: Span, fragment: Fragment) {
        if fragment.is_reprint() {
            self.rewrites.retain(|r| !span.contains(r.span));
        }
        self.rewrites.push(Rewrite { span, fragment });
    }

    fn replace(&mut self, span: Span, text: &str) {
        self.record(span, Fragment::Text(text.into()));
    }

    fn insert(&mut self, pos: BytePos, text: &str) {
        self.record(Span::new(pos, pos), Fragment::Text(text.into()));
    }

    fn delete(&mut self, span: Span) {
        if !span.is_empty() {
            self.replace(span, "");
        }
    }

    fn report(&mut self, span: Span, construct: FlowConstruct, emitted: TsConstruct, message: &str) {
        if !self.reported.insert((span, construct)) {
            return;
        }
        let pos = self.lines.line_col(self.src, span.lo);
        let diagnostic = Diagnostic {
            span,
            line: pos.line,
            column: pos.col,
            construct,
            emitted,
            message: message.into(),
        };
        debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Position of `needle` within `lo..hi` of the source.
    fn find(&self, lo: BytePos, hi: BytePos, needle: &str) -> Option<BytePos> {
        Span::new(lo, hi)
            .snippet(self.src)
            .find(needle)
            .map(|i| lo + BytePos::from_usize(i))
    }

    /// First position at or after `pos` which is not whitespace.
    fn skip_whitespace(&self, pos: BytePos) -> BytePos {
        let rest = self.src.get(pos.to_usize()..).unwrap_or_default();
        pos + BytePos::from_usize(rest.len() - rest.trim_start().len())
    }

    /// Returns true if the source text of `span` starts with `declare`.
    fn written_declare(&self, span: Span) -> bool {
        span.snippet(self.src).starts_with("declare")
    }

    /// Deletes a `declare` keyword written at `lo`, with the whitespace
    /// following it.
    fn strip_declare(&mut self, lo: BytePos) {
        if self.written_declare(Span::new(lo, BytePos::from_usize(self.src.len()))) {
            let hi = self.skip_whitespace(lo + BytePos::from_usize("declare".len()));
            self.delete(Span::new(lo, hi));
        }
    }

    fn visit_type_in(&mut self, ty: &mut Type, pos: TypePos) {
        self.pos = pos;
        ty.visit_mut_with(self);
    }

    fn rewrite_keyword(&mut self, ty: &mut KeywordType) {
        let kind = match ty.kind {
            KeywordKind::Mixed => KeywordKind::Unknown,
            KeywordKind::Empty => KeywordKind::Never,
            KeywordKind::Bool => KeywordKind::Boolean,
            _ => return,
        };
        self.replace(ty.span, kind.as_str());
        ty.kind = kind;
    }

    /// `?T` becomes `T | null | undefined`. `inner_span` is where `T` was
    /// written.
    fn rewrite_nullable(&mut self, n: &mut Type, inner_span: Span) {
        if let Type::Nullable(t) = n {
            let span = t.span;
            if is_nullable_union(&t.type_ann) {
                // `?(?T)`, the inner type has both members already.
                let inner = t.type_ann.unwrap_parens().span();
                self.delete(Span::new(span.lo, inner.lo));
                self.delete(Span::new(inner.hi, span.hi));
                *n = strip_parens(t.type_ann.take()).with_span(span);
                return;
            }

            self.delete(Span::new(span.lo, inner_span.lo));
            self.insert(inner_span.hi, " | null | undefined");

            let mut types = match t.type_ann.take() {
                Type::Union(u) => u.types,
                inner => vec![Box::new(inner)],
            };
            types.push(Box::new(Type::keyword(KeywordKind::Null)));
            types.push(Box::new(Type::keyword(KeywordKind::Undefined)));
            *n = Type::Union(UnionType { span, types });
        }
    }

    /// `T?.[K]` becomes `NonNullable<T>[K]`. Further links of the chain only
    /// lose their flag.
    fn rewrite_optional_access(&mut self, t: &mut IndexedAccessType, obj: Span, index: Span) {
        t.optional = false;
        if let Some(q) = self.find(obj.hi, index.lo, "?.") {
            self.report(
                t.span,
                FlowConstruct::OptionalIndexedAccess,
                TsConstruct::UtilityReference,
                "optional indexed access approximated with NonNullable",
            );
            self.insert(obj.lo, "NonNullable<");
            self.replace(Span::new(q, q + BytePos(2)), ">");
            let obj_type = t.obj_type.take();
            *t.obj_type = Type::reference("NonNullable", vec![obj_type]).with_span(obj);
        }
    }

    /// Replaces `+` with `readonly` and deletes `-`. Returns whether the
    /// member became read-only.
    fn rewrite_variance(&mut self, variance: Variance) -> bool {
        match variance.kind {
            VarianceKind::Plus => {
                self.replace(variance.span, "readonly ");
                true
            }
            VarianceKind::Minus => {
                self.report(
                    variance.span,
                    FlowConstruct::Variance,
                    TsConstruct::Removed,
                    "write-only variance dropped",
                );
                self.delete(variance.span);
                false
            }
        }
    }

    /// Deletes `%checks` along with the colon when it stands in for the
    /// return type.
    fn remove_predicate(&mut self, predicate: Predicate, return_type: Option<Span>) {
        self.report(
            predicate.span,
            FlowConstruct::Predicate,
            TsConstruct::Removed,
            "%checks predicate dropped",
        );
        let lo = match return_type {
            Some(ty) => ty.hi,
            None => {
                let before = self.src.get(..predicate.span.lo.to_usize()).unwrap_or_default();
                let trimmed = before.trim_end();
                if trimmed.ends_with(':') {
                    BytePos::from_usize(trimmed.len() - 1)
                } else {
                    predicate.span.lo
                }
            }
        };
        self.delete(Span::new(lo, predicate.span.hi));
    }
}

impl VisitMut for Transducer<'_> {
    fn visit_mut_program(&mut self, n: &mut Program) {
        self.visit_mut_module_items(&mut n.body);
    }

    fn visit_mut_ambient_module_decl(&mut self, n: &mut AmbientModuleDecl) {
        n.id.visit_mut_with(self);
        let in_ambient_module = mem::replace(&mut self.in_ambient_module, true);
        for item in &mut n.body {
            self.strip_inner_declare(item);
        }
        self.visit_mut_module_items(&mut n.body);
        self.in_ambient_module = in_ambient_module;
    }

    fn visit_mut_type(&mut self, n: &mut Type) {
        let span = n.span();
        // Children are replaced while visited, so their source positions are
        // taken first.
        let (mut first, mut second) = (span, span);
        let pos = mem::replace(&mut self.pos, TypePos::Free);
        match n {
            Type::Nullable(t) => {
                first = t.type_ann.span();
                self.visit_type_in(&mut t.type_ann, TypePos::UnionMember);
            }
            Type::Array(t) => self.visit_type_in(&mut t.elem_type, TypePos::Operand),
            Type::IndexedAccess(t) => {
                first = t.obj_type.span();
                second = t.index_type.span();
                self.visit_type_in(&mut t.obj_type, TypePos::Operand);
                self.visit_type_in(&mut t.index_type, TypePos::Free);
            }
            Type::Union(t) => {
                for ty in &mut t.types {
                    self.visit_type_in(ty, TypePos::UnionMember);
                }
            }
            Type::Intersection(t) => {
                for ty in &mut t.types {
                    self.visit_type_in(ty, TypePos::IntersectionMember);
                }
            }
            _ => n.visit_mut_children_with(self),
        }
        self.pos = pos;

        match n {
            Type::Nullable(..) => self.rewrite_nullable(n, first),
            Type::Keyword(t) => self.rewrite_keyword(t),
            Type::Existential(t) => {
                self.report(
                    t.span,
                    FlowConstruct::Existential,
                    TsConstruct::Keyword,
                    "existential type approximated by any",
                );
                let span = t.span;
                self.replace(span, "any");
                *n = Type::Keyword(KeywordType {
                    span,
                    kind: KeywordKind::Any,
                });
            }
            Type::IndexedAccess(t) if t.optional => self.rewrite_optional_access(t, first, second),
            Type::Ref(..) => self.rewrite_ref(n),
            Type::Object(..) => self.rewrite_object(n),
            _ => {}
        }

        if pos.needs_parens(n) {
            self.insert(span.lo, "(");
            self.insert(span.hi, ")");
        }
    }

    fn visit_mut_object_type(&mut self, n: &mut ObjectType) {
        n.visit_mut_children_with(self);

        if n.exact {
            self.report(
                n.span,
                FlowConstruct::ExactObject,
                TsConstruct::ObjectLiteral,
                "exact object type approximated by an object type",
            );
            self.replace(Span::new(n.span.lo, n.span.lo + BytePos(2)), "{");
            self.replace(Span::new(n.span.hi - BytePos(2), n.span.hi), "}");
            n.exact = false;
        }

        if let Some(inexact) = n.inexact.take() {
            let lo = n
                .members
                .iter()
                .map(|m| m.span().hi)
                .filter(|hi| *hi <= inexact.lo)
                .max()
                .unwrap_or(inexact.lo);
            let gap = Span::new(lo, inexact.lo).snippet(self.src);
            let space = gap.len() - gap.trim_end().len();
            let rest = self.src.get(inexact.hi.to_usize()..).unwrap_or_default();
            if space > 0 && !rest.starts_with(char::is_whitespace) {
                // `a, ...}` keeps the space before the brace.
                self.delete(Span::new(lo, inexact.lo - BytePos::from_usize(space)));
                self.delete(inexact);
            } else {
                self.delete(Span::new(lo, inexact.hi));
            }
        }

        if n
            .members
            .iter()
            .any(|m| matches!(m, ObjectTypeMember::InternalSlot(..)))
        {
            for member in &n.members {
                if let ObjectTypeMember::InternalSlot(slot) = member {
                    self.report(
                        slot.span,
                        FlowConstruct::InternalSlot,
                        TsConstruct::Removed,
                        "internal slot dropped",
                    );
                }
            }
            n.members
                .retain(|m| !matches!(m, ObjectTypeMember::InternalSlot(..)));
            self.record(n.span, Fragment::Type(Box::new(Type::Object(n.clone()))));
        }
    }

    fn visit_mut_object_type_prop(&mut self, n: &mut ObjectTypeProp) {
        n.visit_mut_children_with(self);
        if let Some(variance) = n.variance.take() {
            n.readonly |= self.rewrite_variance(variance);
        }
    }

    fn visit_mut_indexer(&mut self, n: &mut Indexer) {
        n.visit_mut_children_with(self);
        if let Some(variance) = n.variance.take() {
            n.readonly |= self.rewrite_variance(variance);
        }
        if n.id.is_none() {
            self.insert(n.key.span().lo, "key: ");
            n.id = Some(Ident::synth("key"));
        }
    }

    fn visit_mut_class_prop(&mut self, n: &mut ClassProp) {
        n.visit_mut_children_with(self);
        if let Some(variance) = n.variance.take() {
            n.readonly |= self.rewrite_variance(variance);
        }
    }

    /// Names the parameters Flow allows to be unnamed.
    fn visit_mut_fn_type(&mut self, n: &mut FnType) {
        n.visit_mut_children_with(self);

        let bare = n.type_params.is_none()
            && n.rest.is_none()
            && n.params.len() == 1
            && !n.span.snippet(self.src).starts_with('(');
        for (i, param) in n.params.iter_mut().enumerate() {
            if param.name.is_some() {
                continue;
            }
            let name = format!("arg{}", i);
            if bare {
                self.insert(param.span.lo, &format!("({}: ", name));
                self.insert(param.span.hi, ")");
            } else {
                self.insert(param.span.lo, &format!("{}: ", name));
            }
            param.name = Some(Ident::synth(&name));
        }

        if let Some(rest) = &mut n.rest {
            if rest.name.is_none() {
                self.insert(rest.type_ann.span().lo, "rest: ");
                rest.name = Some(Ident::synth("rest"));
            }
        }
    }

    fn visit_mut_type_param(&mut self, n: &mut TypeParam) {
        let bound_lo = n.bound.as_ref().map(|b| b.type_ann.span().lo);
        n.visit_mut_children_with(self);
        if let Some(variance) = n.variance.take() {
            self.report(
                variance.span,
                FlowConstruct::Variance,
                TsConstruct::Removed,
                "variance of a type parameter dropped",
            );
            self.delete(variance.span);
        }
        if let (Some(bound), Some(lo)) = (n.bound.take(), bound_lo) {
            self.replace(Span::new(n.name.span.hi, lo), " extends ");
            n.constraint = Some(bound.type_ann);
        }
    }

    /// `(expr: T)` becomes `(expr as T)`.
    fn visit_mut_expr(&mut self, n: &mut Expr) {
        let cast_gap = match n {
            Expr::TypeCast(cast) => Some(Span::new(
                cast.expr.span().hi,
                cast.type_ann.type_ann.span().lo,
            )),
            _ => None,
        };
        n.visit_mut_children_with(self);
        if let Some(gap) = cast_gap {
            if let Expr::TypeCast(cast) = n {
                self.replace(gap, " as ");
                let as_expr = AsExpr {
                    span: cast.span,
                    expr: Box::new(cast.expr.take()),
                    type_ann: Box::new(cast.type_ann.type_ann.take()),
                };
                *n = Expr::As(as_expr);
            }
        }
    }

    fn visit_mut_function(&mut self, n: &mut Function) {
        n.visit_mut_children_with(self);
        if let Some(predicate) = n.predicate.take() {
            self.remove_predicate(predicate, n.return_type.as_ref().map(|r| r.span));
        }
    }

    fn visit_mut_arrow_expr(&mut self, n: &mut ArrowExpr) {
        n.visit_mut_children_with(self);
        if let Some(predicate) = n.predicate.take() {
            self.remove_predicate(predicate, n.return_type.as_ref().map(|r| r.span));
        }
    }

    fn visit_mut_declare_fn_decl(&mut self, n: &mut DeclareFnDecl) {
        n.visit_mut_children_with(self);
        if let Some(predicate) = n.predicate.take() {
            self.remove_predicate(predicate, Some(n.fn_type.span));
        }
    }

    fn visit_mut_decl(&mut self, n: &mut Decl) {
        n.visit_mut_children_with(self);
        match n {
            Decl::OpaqueType(..) => self.rewrite_opaque(n),
            Decl::DeclareClass(..) => self.rewrite_declare_class(n),
            _ => {}
        }
    }

    fn visit_mut_module_decl(&mut self, n: &mut ModuleDecl) {
        match n {
            ModuleDecl::ExportDecl(export) if export.declare => self.rewrite_declare_export(export),
            ModuleDecl::ExportNamed(export) if export.declare => {
                export.declare = false;
                self.strip_declare(export.span.lo);
            }
            ModuleDecl::ExportAll(export) if export.declare => {
                export.declare = false;
                self.strip_declare(export.span.lo);
            }
            _ => {}
        }
        n.visit_mut_children_with(self);
    }
}
