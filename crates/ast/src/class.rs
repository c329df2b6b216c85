use crate::{
    expr::Expr,
    function::Function,
    ident::PrivateName,
    prop::PropName,
    stmt::EmptyStmt,
    types::{Indexer, InterfaceExtends, TypeAnn, TypeParamDecl, TypeParamInstantiation, Variance},
};
use global_common::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    /// From the `class` keyword to the closing brace.
    pub span: Span,

    pub body: Vec<ClassMember>,

    pub super_class: Option<Box<Expr>>,

    pub super_type_args: Option<TypeParamInstantiation>,

    pub type_params: Option<TypeParamDecl>,

    pub implements: Vec<InterfaceExtends>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    /// Methods, getters, setters and the constructor.
    Method(ClassMethod),
    /// Class fields, including ambient `declare` fields.
    ClassProp(ClassProp),
    /// `[key: string]: T;` in an ambient class.
    Index(Indexer),
    Empty(EmptyStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Public(PropName),
    Private(PrivateName),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassProp {
    pub span: Span,

    pub key: Key,

    pub value: Option<Box<Expr>>,

    pub type_ann: Option<TypeAnn>,

    pub is_static: bool,

    /// Flow `+x` / `-x`
    pub variance: Option<Variance>,

    pub declare: bool,

    pub readonly: bool,

    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMethod {
    pub span: Span,
    pub key: Key,
    pub function: Function,
    pub kind: MethodKind,
    pub is_static: bool,
    pub optional: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Method,
    Getter,
    Setter,
}

spanned!(Class, ClassProp, ClassMethod);
spanned_enum!(ClassMember {
    Method,
    ClassProp,
    Index,
    Empty
});
spanned_enum!(Key { Public, Private });
