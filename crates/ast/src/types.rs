//! Type syntax of both dialects.
//!
//! Nodes shared by Flow and TypeScript (references, unions, object literal
//! types, ...) print the same way in both. The Flow-only parts are the
//! [Type::Nullable] and [Type::Existential] variants, `exact`/`inexact`
//! object types, object type spreads and internal slots, variance markers,
//! colon bounds on type parameters, unnamed function type parameters and
//! optional indexed access. [Type::KeyOf], [Type::Mapped] and [Type::Import]
//! only come out of the converter.
#![allow(clippy::vec_box)]
use crate::{
    expr::Expr,
    ident::Ident,
    lit::{BigInt, Bool, Number, Str},
    prop::PropName,
};
use global_common::{Span, Spanned, DUMMY_SP};

/// `: T`, the span includes the colon.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnn {
    pub span: Span,
    pub type_ann: Box<Type>,
}

impl TypeAnn {
    pub fn synth(ty: Type) -> Self {
        TypeAnn {
            span: DUMMY_SP,
            type_ann: Box::new(ty),
        }
    }
}

/// `<T, U>` in declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParamDecl {
    pub span: Span,
    pub params: Vec<TypeParam>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParam {
    pub span: Span,
    pub name: Ident,
    pub variance: Option<Variance>,
    /// Flow `T: Bound`
    pub bound: Option<TypeAnn>,
    /// `T extends Bound`
    pub constraint: Option<Box<Type>>,
    pub default: Option<Box<Type>>,
}

/// `<T, U>` in references and calls.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParamInstantiation {
    pub span: Span,
    pub params: Vec<Box<Type>>,
}

impl TypeParamInstantiation {
    pub fn synth(params: Vec<Type>) -> Self {
        TypeParamInstantiation {
            span: DUMMY_SP,
            params: params.into_iter().map(Box::new).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarianceKind {
    /// `+`, covariant
    Plus,
    /// `-`, contravariant
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variance {
    pub span: Span,
    pub kind: VarianceKind,
}

/// Flow `%checks` / `%checks(expr)`
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub span: Span,
    pub expr: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Keyword(KeywordType),
    Lit(LitType),
    Ref(TypeRef),
    /// Flow `?T`
    Nullable(NullableType),
    Object(ObjectType),
    Array(ArrayType),
    Tuple(TupleType),
    Union(UnionType),
    Intersection(IntersectionType),
    Fn(FnType),
    /// `typeof x`
    TypeOf(TypeOfType),
    /// `T[K]`, Flow `T?.[K]`
    IndexedAccess(IndexedAccessType),
    Paren(ParenType),
    This(ThisType),
    /// Flow `*`
    Existential(ExistentialType),
    /// `keyof T`
    KeyOf(KeyOfType),
    /// `{ [K in T]: V }`
    Mapped(MappedType),
    /// `import('m')`
    Import(ImportType),
}

impl Type {
    pub fn keyword(kind: KeywordKind) -> Self {
        Type::Keyword(KeywordType {
            span: DUMMY_SP,
            kind,
        })
    }

    /// Reference to a plain name.
    pub fn reference(name: &str, args: Vec<Type>) -> Self {
        Type::Ref(TypeRef {
            span: DUMMY_SP,
            name: TypeName::Ident(Ident::synth(name)),
            type_args: if args.is_empty() {
                None
            } else {
                Some(TypeParamInstantiation::synth(args))
            },
        })
    }

    pub fn union(types: Vec<Type>) -> Self {
        Type::Union(UnionType {
            span: DUMMY_SP,
            types: types.into_iter().map(Box::new).collect(),
        })
    }

    pub fn intersection(types: Vec<Type>) -> Self {
        Type::Intersection(IntersectionType {
            span: DUMMY_SP,
            types: types.into_iter().map(Box::new).collect(),
        })
    }

    pub fn paren(ty: Type) -> Self {
        Type::Paren(ParenType {
            span: DUMMY_SP,
            type_ann: Box::new(ty),
        })
    }

    pub fn str_lit(value: &str) -> Self {
        Type::Lit(LitType {
            span: DUMMY_SP,
            lit: TypeLit::Str(Str::synth(value)),
        })
    }

    pub fn indexed(obj: Type, index: Type) -> Self {
        Type::IndexedAccess(IndexedAccessType {
            span: DUMMY_SP,
            obj_type: Box::new(obj),
            index_type: Box::new(index),
            optional: false,
        })
    }

    pub fn keyof(ty: Type) -> Self {
        Type::KeyOf(KeyOfType {
            span: DUMMY_SP,
            type_ann: Box::new(ty),
        })
    }

    /// Moves a node, usually a synthesized one, to the position of the node
    /// it replaces.
    pub fn set_span(&mut self, span: Span) {
        let s = match self {
            Type::Keyword(t) => &mut t.span,
            Type::Lit(t) => &mut t.span,
            Type::Ref(t) => &mut t.span,
            Type::Nullable(t) => &mut t.span,
            Type::Object(t) => &mut t.span,
            Type::Array(t) => &mut t.span,
            Type::Tuple(t) => &mut t.span,
            Type::Union(t) => &mut t.span,
            Type::Intersection(t) => &mut t.span,
            Type::Fn(t) => &mut t.span,
            Type::TypeOf(t) => &mut t.span,
            Type::IndexedAccess(t) => &mut t.span,
            Type::Paren(t) => &mut t.span,
            Type::This(t) => &mut t.span,
            Type::Existential(t) => &mut t.span,
            Type::KeyOf(t) => &mut t.span,
            Type::Mapped(t) => &mut t.span,
            Type::Import(t) => &mut t.span,
        };
        *s = span;
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.set_span(span);
        self
    }

    /// Strips any number of parentheses.
    pub fn unwrap_parens(&self) -> &Type {
        let mut t = self;
        while let Type::Paren(p) = t {
            t = &p.type_ann;
        }
        t
    }

    /// Returns the simple name of a reference without qualification.
    pub fn ref_name(&self) -> Option<&str> {
        match self {
            Type::Ref(TypeRef {
                name: TypeName::Ident(i),
                ..
            }) => Some(&i.sym),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    Any,
    /// Flow
    Mixed,
    /// Flow
    Empty,
    Void,
    Null,
    Number,
    String,
    Boolean,
    /// Flow alias of `boolean`
    Bool,
    Symbol,
    BigInt,
    Unknown,
    Never,
    Undefined,
    Object,
}

impl KeywordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordKind::Any => "any",
            KeywordKind::Mixed => "mixed",
            KeywordKind::Empty => "empty",
            KeywordKind::Void => "void",
            KeywordKind::Null => "null",
            KeywordKind::Number => "number",
            KeywordKind::String => "string",
            KeywordKind::Boolean => "boolean",
            KeywordKind::Bool => "bool",
            KeywordKind::Symbol => "symbol",
            KeywordKind::BigInt => "bigint",
            KeywordKind::Unknown => "unknown",
            KeywordKind::Never => "never",
            KeywordKind::Undefined => "undefined",
            KeywordKind::Object => "object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeywordType {
    pub span: Span,
    pub kind: KeywordKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LitType {
    pub span: Span,
    pub lit: TypeLit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeLit {
    Str(Str),
    /// Negative numbers keep the sign in `raw`.
    Num(Number),
    BigInt(BigInt),
    Bool(Bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    pub span: Span,
    pub name: TypeName,
    pub type_args: Option<TypeParamInstantiation>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeName {
    Ident(Ident),
    Qualified(Box<QualifiedName>),
}

impl TypeName {
    /// Rightmost identifier.
    pub fn last(&self) -> &Ident {
        match self {
            TypeName::Ident(i) => i,
            TypeName::Qualified(q) => &q.right,
        }
    }

    /// Leftmost identifier.
    pub fn first(&self) -> &Ident {
        match self {
            TypeName::Ident(i) => i,
            TypeName::Qualified(q) => q.left.first(),
        }
    }
}

/// `A.B`
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedName {
    pub left: TypeName,
    pub right: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NullableType {
    pub span: Span,
    pub type_ann: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub span: Span,
    /// Flow `{| |}`
    pub exact: bool,
    /// Flow explicit `...`; covers the marker and a following separator.
    pub inexact: Option<Span>,
    pub members: Vec<ObjectTypeMember>,
}

impl ObjectType {
    pub fn synth(members: Vec<ObjectTypeMember>) -> Self {
        ObjectType {
            span: DUMMY_SP,
            exact: false,
            inexact: None,
            members,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectTypeMember {
    Prop(ObjectTypeProp),
    Method(ObjectTypeMethod),
    /// `(x: T): R`
    CallProp(CallProperty),
    Indexer(Indexer),
    /// Flow `...T`
    Spread(ObjectTypeSpread),
    /// Flow `[[slot]]: T`
    InternalSlot(InternalSlot),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeProp {
    pub span: Span,
    pub key: PropName,
    pub value: Box<Type>,
    pub optional: bool,
    /// `static` in ambient class bodies.
    pub is_static: bool,
    /// Flow `proto` in ambient class bodies.
    pub proto: bool,
    pub variance: Option<Variance>,
    pub readonly: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodSigKind {
    Method,
    Getter,
    Setter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeMethod {
    pub span: Span,
    pub key: PropName,
    pub kind: MethodSigKind,
    pub is_static: bool,
    pub optional: bool,
    pub fn_type: FnType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallProperty {
    pub span: Span,
    pub is_static: bool,
    pub fn_type: FnType,
}

/// `[K]: V` (Flow), `[key: K]: V` (both)
#[derive(Debug, Clone, PartialEq)]
pub struct Indexer {
    pub span: Span,
    pub id: Option<Ident>,
    pub key: Box<Type>,
    pub value: Box<Type>,
    pub is_static: bool,
    pub variance: Option<Variance>,
    pub readonly: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeSpread {
    pub span: Span,
    pub type_ann: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InternalSlot {
    pub span: Span,
    pub id: Ident,
    pub value: Box<Type>,
    pub optional: bool,
    pub is_static: bool,
    pub method: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub span: Span,
    pub elem_type: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TupleType {
    pub span: Span,
    pub elem_types: Vec<Box<Type>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub span: Span,
    pub types: Vec<Box<Type>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionType {
    pub span: Span,
    pub types: Vec<Box<Type>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnType {
    pub span: Span,
    pub type_params: Option<TypeParamDecl>,
    pub params: Vec<FnTypeParam>,
    /// `...rest: T`; the span includes the dots.
    pub rest: Option<FnTypeParam>,
    pub return_type: Box<Type>,
    /// `new (...) => T`
    pub is_constructor: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnTypeParam {
    pub span: Span,
    /// `None` for Flow's unnamed parameters, `(string) => void`.
    pub name: Option<Ident>,
    pub optional: bool,
    pub type_ann: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeOfType {
    pub span: Span,
    pub expr: TypeName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedAccessType {
    pub span: Span,
    pub obj_type: Box<Type>,
    pub index_type: Box<Type>,
    /// Flow `T?.[K]`
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenType {
    pub span: Span,
    pub type_ann: Box<Type>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThisType {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExistentialType {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyOfType {
    pub span: Span,
    pub type_ann: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappedType {
    pub span: Span,
    pub readonly: bool,
    pub type_param: Ident,
    /// `keyof T` in `[K in keyof T]`
    pub constraint: Box<Type>,
    pub optional: bool,
    pub type_ann: Box<Type>,
}

/// `import('m')`, `typeof import('m')` when `is_typeof`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportType {
    pub span: Span,
    pub arg: Str,
    pub is_typeof: bool,
}

/// `extends A<T>` / `implements A<T>` / `mixins A`
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceExtends {
    pub span: Span,
    pub name: TypeName,
    pub type_args: Option<TypeParamInstantiation>,
}

impl Spanned for TypeName {
    fn span(&self) -> Span {
        match self {
            TypeName::Ident(i) => i.span,
            TypeName::Qualified(q) => q.left.span().to(q.right.span),
        }
    }
}

spanned!(
    TypeAnn,
    TypeParamDecl,
    TypeParam,
    TypeParamInstantiation,
    Variance,
    Predicate,
    KeywordType,
    LitType,
    TypeRef,
    NullableType,
    ObjectType,
    ObjectTypeProp,
    ObjectTypeMethod,
    CallProperty,
    Indexer,
    ObjectTypeSpread,
    InternalSlot,
    ArrayType,
    TupleType,
    UnionType,
    IntersectionType,
    FnType,
    FnTypeParam,
    TypeOfType,
    IndexedAccessType,
    ParenType,
    ThisType,
    ExistentialType,
    KeyOfType,
    MappedType,
    ImportType,
    InterfaceExtends,
);
spanned_enum!(Type {
    Keyword,
    Lit,
    Ref,
    Nullable,
    Object,
    Array,
    Tuple,
    Union,
    Intersection,
    Fn,
    TypeOf,
    IndexedAccess,
    Paren,
    This,
    Existential,
    KeyOf,
    Mapped,
    Import
});
spanned_enum!(TypeLit {
    Str,
    Num,
    BigInt,
    Bool
});
spanned_enum!(ObjectTypeMember {
    Prop,
    Method,
    CallProp,
    Indexer,
    Spread,
    InternalSlot
});
enum_from!(Type {
    Keyword(KeywordType),
    Lit(LitType),
    Ref(TypeRef),
    Nullable(NullableType),
    Object(ObjectType),
    Array(ArrayType),
    Tuple(TupleType),
    Union(UnionType),
    Intersection(IntersectionType),
    Fn(FnType),
    TypeOf(TypeOfType),
    IndexedAccess(IndexedAccessType),
    Paren(ParenType),
    This(ThisType),
    Existential(ExistentialType),
    KeyOf(KeyOfType),
    Mapped(MappedType),
    Import(ImportType),
});
