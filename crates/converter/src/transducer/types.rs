//! Utility types and object types.
use super::{Fragment, Transducer};
use crate::construct::{FlowConstruct, TsConstruct, UTILITY_TYPES};
use ast::*;
use ecma_visit::{Visit, VisitWith};
use global_common::{Span, Spanned, DUMMY_SP};
use rustc_hash::FxHashSet;
use std::mem;

/// What becomes of a reference to a utility type.
enum RefRewrite {
    /// Only the name changes.
    Rename(&'static str),
    /// The reference is replaced by its single argument.
    Unwrap,
    Replace(Type),
}

impl Transducer<'_> {
    pub(super) fn rewrite_ref(&mut self, n: &mut Type) {
        let r = match n {
            Type::Ref(r) => r,
            _ => return,
        };
        let name = path_of(&r.name);
        let args: Vec<Type> = r
            .type_args
            .iter()
            .flat_map(|a| a.params.iter().map(|t| (**t).clone()))
            .collect();
        let span = r.span;
        let inline = self.options.inline_utility_types;

        let rewrite = match (&*name, args.as_slice()) {
            ("$FlowFixMe", _) => RefRewrite::Replace(Type::keyword(KeywordKind::Any)),
            ("Object", []) => RefRewrite::Replace(Type::keyword(KeywordKind::Object)),
            ("$Keys", [t]) => RefRewrite::Replace(Type::keyof(t.clone())),
            ("$Values", [t]) => RefRewrite::Replace(Type::indexed(t.clone(), Type::keyof(t.clone()))),
            ("$ReadOnly", [t]) if inline => RefRewrite::Replace(readonly_inline(t)),
            ("$ReadOnly", [_]) => RefRewrite::Rename("Readonly"),
            ("$Shape" | "$Partial", [t]) if inline => RefRewrite::Replace(partial_inline(t)),
            ("$Shape" | "$Partial", [_]) => RefRewrite::Rename("Partial"),
            ("$Exact", [_]) => {
                self.report(
                    span,
                    FlowConstruct::ExactObject,
                    TsConstruct::ObjectLiteral,
                    "$Exact approximated by its argument",
                );
                RefRewrite::Unwrap
            }
            ("$Diff" | "$Rest", [a, b]) => {
                if name == "$Rest" {
                    self.report(
                        span,
                        FlowConstruct::UtilityType,
                        TsConstruct::UtilityReference,
                        "$Rest approximated by Omit",
                    );
                }
                RefRewrite::Replace(difference(a, b, inline))
            }
            ("$PropertyType" | "$ElementType", [t, k]) => {
                RefRewrite::Replace(Type::indexed(t.clone(), k.clone()))
            }
            ("$NonMaybeType", [t]) => match non_maybe_inline(t).filter(|_| inline) {
                Some(ty) => RefRewrite::Replace(ty),
                None => RefRewrite::Rename("NonNullable"),
            },
            ("$ReadOnlyArray", _) => RefRewrite::Rename("ReadonlyArray"),
            ("$ReadOnlyMap", _) => RefRewrite::Rename("ReadonlyMap"),
            ("$ReadOnlySet", _) => RefRewrite::Rename("ReadonlySet"),
            ("$Call", [f, rest @ ..]) => {
                self.report(
                    span,
                    FlowConstruct::UtilityType,
                    TsConstruct::UtilityReference,
                    "$Call approximated by ReturnType",
                );
                if rest.is_empty() {
                    RefRewrite::Rename("ReturnType")
                } else {
                    RefRewrite::Replace(Type::reference("ReturnType", vec![f.clone()]))
                }
            }
            ("$KeyMirror", [o]) => RefRewrite::Replace(mapped(o, |k| k, false, false)),
            ("$ObjMap" | "$ObjMapi", [o, f]) => {
                self.report(
                    span,
                    FlowConstruct::UtilityType,
                    TsConstruct::MappedType,
                    "mapping function approximated by its return type",
                );
                let value = Type::reference("ReturnType", vec![f.clone()]);
                RefRewrite::Replace(mapped(o, |_| value, false, false))
            }
            ("$Subtype" | "$Supertype", [_]) => {
                self.report(
                    span,
                    FlowConstruct::UtilityType,
                    TsConstruct::Removed,
                    "subtyping bound approximated by its argument",
                );
                RefRewrite::Unwrap
            }
            ("Class", [t]) => {
                self.report(
                    span,
                    FlowConstruct::UtilityType,
                    TsConstruct::FunctionType,
                    "Class<T> approximated by a constructor type",
                );
                RefRewrite::Replace(class_of(t.clone()))
            }
            ("React.Node", []) => RefRewrite::Rename("React.ReactNode"),
            ("React.Element", []) => RefRewrite::Rename("React.ReactElement"),
            ("React.Element", [t]) => RefRewrite::Replace(qualified_ref(
                "React.ReactElement",
                vec![qualified_ref("React.ComponentProps", vec![t.clone()])],
            )),
            ("React.ChildrenArray", [t]) => RefRewrite::Replace(Type::union(vec![
                t.clone(),
                Type::reference("ReadonlyArray", vec![t.clone()]),
            ])),
            ("React.StatelessFunctionalComponent", _) => RefRewrite::Rename("React.FC"),
            ("React.ElementProps", _) => RefRewrite::Rename("React.ComponentProps"),
            (name, _) if UTILITY_TYPES.contains(&name) => {
                self.report(
                    span,
                    FlowConstruct::UtilityType,
                    TsConstruct::Keyword,
                    &format!("unsupported use of {} replaced with any", name),
                );
                RefRewrite::Replace(Type::keyword(KeywordKind::Any))
            }
            _ => return,
        };

        match rewrite {
            RefRewrite::Rename(to) => {
                self.replace(r.name.span(), to);
                r.name = type_name(to);
            }
            RefRewrite::Unwrap => {
                let arg_span = match r.type_args.as_ref().and_then(|a| a.params.first()) {
                    Some(arg) => arg.span(),
                    None => return,
                };
                self.delete(Span::new(span.lo, arg_span.lo));
                self.delete(Span::new(arg_span.hi, span.hi));
                let arg = r
                    .type_args
                    .as_mut()
                    .and_then(|a| a.params.pop())
                    .map(|t| *t);
                if let Some(arg) = arg {
                    *n = arg.with_span(span);
                }
            }
            RefRewrite::Replace(ty) => {
                match &ty {
                    Type::Keyword(k) if r.type_args.is_none() => self.replace(span, k.kind.as_str()),
                    _ => self.record(span, Fragment::Type(Box::new(ty.clone()))),
                }
                *n = ty.with_span(span);
            }
        }
    }

    /// Spreads and indexers over keys TypeScript does not accept in an index
    /// signature turn the object into an intersection.
    pub(super) fn rewrite_object(&mut self, n: &mut Type) {
        let o = match n {
            Type::Object(o) => o,
            _ => return,
        };
        let needs_intersection = o.members.iter().any(|m| match m {
            ObjectTypeMember::Spread(..) => true,
            ObjectTypeMember::Indexer(i) => !is_index_key(&i.key),
            _ => false,
        });
        if !needs_intersection {
            return;
        }

        let span = o.span;
        let mut parts = vec![];
        let mut run = vec![];
        for member in mem::take(&mut o.members) {
            match member {
                ObjectTypeMember::Spread(spread) => {
                    self.report(
                        spread.span,
                        FlowConstruct::ObjectSpread,
                        TsConstruct::Intersection,
                        "object type spread approximated by an intersection",
                    );
                    flush(&mut run, &mut parts);
                    parts.push(*spread.type_ann);
                }
                ObjectTypeMember::Indexer(i) if !is_index_key(&i.key) => {
                    flush(&mut run, &mut parts);
                    let record = Type::reference("Record", vec![*i.key, *i.value]);
                    parts.push(if i.readonly {
                        Type::reference("Readonly", vec![record])
                    } else {
                        record
                    });
                }
                member => run.push(member),
            }
        }
        flush(&mut run, &mut parts);

        let ty = match parts.len() {
            1 => parts.pop().unwrap_or_else(|| Type::Object(ObjectType::synth(vec![]))),
            _ => Type::intersection(parts),
        };
        self.record(span, Fragment::Type(Box::new(ty.clone())));
        *n = ty.with_span(span);
    }
}

fn flush(run: &mut Vec<ObjectTypeMember>, parts: &mut Vec<Type>) {
    if !run.is_empty() {
        parts.push(Type::Object(ObjectType::synth(mem::take(run))));
    }
}

/// `string`, `number` and `symbol` may key an index signature.
fn is_index_key(key: &Type) -> bool {
    matches!(
        key.unwrap_parens(),
        Type::Keyword(KeywordType {
            kind: KeywordKind::String | KeywordKind::Number | KeywordKind::Symbol,
            ..
        })
    )
}

/// `React.Node`
pub(super) fn path_of(name: &TypeName) -> String {
    match name {
        TypeName::Ident(i) => i.sym.to_string(),
        TypeName::Qualified(q) => format!("{}.{}", path_of(&q.left), q.right.sym),
    }
}

fn type_name(path: &str) -> TypeName {
    let mut parts = path.split('.');
    let first = TypeName::Ident(Ident::synth(parts.next().unwrap_or_default()));
    parts.fold(first, |left, right| {
        TypeName::Qualified(Box::new(QualifiedName {
            left,
            right: Ident::synth(right),
        }))
    })
}

fn qualified_ref(path: &str, args: Vec<Type>) -> Type {
    Type::Ref(TypeRef {
        span: DUMMY_SP,
        name: type_name(path),
        type_args: if args.is_empty() {
            None
        } else {
            Some(TypeParamInstantiation::synth(args))
        },
    })
}

/// `{ [K in keyof T]: V }`
fn mapped(obj: &Type, value: impl FnOnce(Type) -> Type, readonly: bool, optional: bool) -> Type {
    let key = fresh_key(obj);
    Type::Mapped(MappedType {
        span: DUMMY_SP,
        readonly,
        type_param: Ident::synth(key),
        constraint: Box::new(Type::keyof(obj.clone())),
        optional,
        type_ann: Box::new(value(Type::reference(key, vec![]))),
    })
}

/// A name for the key of a mapped type which `ty` does not refer to.
fn fresh_key(ty: &Type) -> &'static str {
    let mut names = RefNames::default();
    ty.visit_with(&mut names);
    ["K", "Key", "P", "Prop"]
        .into_iter()
        .find(|k| !names.0.contains(*k))
        .unwrap_or("K_")
}

#[derive(Default)]
struct RefNames(FxHashSet<String>);

impl Visit for RefNames {
    fn visit_type_ref(&mut self, n: &TypeRef) {
        self.0.insert(n.name.first().sym.to_string());
        n.visit_children_with(self)
    }
}

fn readonly_inline(t: &Type) -> Type {
    match t.unwrap_parens() {
        Type::Object(o) => {
            let mut o = o.clone();
            for member in &mut o.members {
                match member {
                    ObjectTypeMember::Prop(p) => p.readonly = true,
                    ObjectTypeMember::Indexer(i) => i.readonly = true,
                    _ => {}
                }
            }
            Type::Object(o)
        }
        _ => mapped(t, |k| Type::indexed(t.clone(), k), true, false),
    }
}

fn partial_inline(t: &Type) -> Type {
    match t.unwrap_parens() {
        Type::Object(o) => {
            let mut o = o.clone();
            for member in &mut o.members {
                match member {
                    ObjectTypeMember::Prop(p) => p.optional = true,
                    ObjectTypeMember::Method(m) => m.optional = true,
                    _ => {}
                }
            }
            Type::Object(o)
        }
        _ => mapped(t, |k| Type::indexed(t.clone(), k), false, true),
    }
}

/// `$Diff<A, B>`: the properties of `A` not in `B`.
fn difference(a: &Type, b: &Type, inline: bool) -> Type {
    if inline {
        if let (Type::Object(a), Type::Object(b)) = (a.unwrap_parens(), b.unwrap_parens()) {
            let removed: FxHashSet<&str> = b.members.iter().filter_map(member_name).collect();
            let mut a = a.clone();
            a.members
                .retain(|m| member_name(m).map_or(true, |name| !removed.contains(name)));
            return Type::Object(a);
        }
    }
    Type::reference("Omit", vec![a.clone(), Type::keyof(b.clone())])
}

fn member_name(m: &ObjectTypeMember) -> Option<&str> {
    match m {
        ObjectTypeMember::Prop(p) => p.key.static_name(),
        ObjectTypeMember::Method(m) => m.key.static_name(),
        _ => None,
    }
}

/// Drops `null` and `void` from a union.
fn non_maybe_inline(t: &Type) -> Option<Type> {
    let u = match t.unwrap_parens() {
        Type::Union(u) => u,
        _ => return None,
    };
    let mut kept: Vec<Type> = u
        .types
        .iter()
        .filter(|t| {
            !matches!(
                t.unwrap_parens(),
                Type::Keyword(KeywordType {
                    kind: KeywordKind::Null | KeywordKind::Void | KeywordKind::Undefined,
                    ..
                })
            )
        })
        .map(|t| (**t).clone())
        .collect();
    match kept.len() {
        0 => Some(Type::keyword(KeywordKind::Never)),
        1 => kept.pop(),
        _ => Some(Type::union(kept)),
    }
}

/// `new (...args: any[]) => T`
fn class_of(t: Type) -> Type {
    Type::Fn(FnType {
        span: DUMMY_SP,
        type_params: None,
        params: vec![],
        rest: Some(FnTypeParam {
            span: DUMMY_SP,
            name: Some(Ident::synth("args")),
            optional: false,
            type_ann: Box::new(Type::Array(ArrayType {
                span: DUMMY_SP,
                elem_type: Box::new(Type::keyword(KeywordKind::Any)),
            })),
        }),
        return_type: Box::new(t),
        is_constructor: true,
    })
}
