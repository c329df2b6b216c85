use crate::{expr::Expr, ident::BindingIdent, prop::PropName, types::TypeAnn, Ident};
use global_common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum Pat {
    Ident(BindingIdent),

    Array(ArrayPat),

    Rest(RestPat),

    Object(ObjectPat),

    Assign(AssignPat),

    /// Only for for-in / for-of loops and assignment targets. This is
    /// *syntactically* valid for binding patterns, but not semantically.
    Expr(Box<Expr>),
}

impl Pat {
    pub fn type_ann(&self) -> Option<&TypeAnn> {
        match self {
            Pat::Ident(p) => p.type_ann.as_ref(),
            Pat::Array(p) => p.type_ann.as_ref(),
            Pat::Rest(p) => p.type_ann.as_ref(),
            Pat::Object(p) => p.type_ann.as_ref(),
            Pat::Assign(p) => p.left.type_ann(),
            Pat::Expr(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPat {
    pub span: Span,

    pub elems: Vec<Option<Pat>>,

    /// Only in function parameters.
    pub optional: bool,

    pub type_ann: Option<TypeAnn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPat {
    pub span: Span,

    pub props: Vec<ObjectPatProp>,

    /// Only in function parameters.
    pub optional: bool,

    pub type_ann: Option<TypeAnn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignPat {
    pub span: Span,

    pub left: Box<Pat>,

    pub right: Box<Expr>,
}

/// EsTree `RestElement`
#[derive(Debug, Clone, PartialEq)]
pub struct RestPat {
    pub span: Span,

    pub dot3_token: Span,

    pub arg: Box<Pat>,

    pub type_ann: Option<TypeAnn>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectPatProp {
    KeyValue(KeyValuePatProp),

    Assign(AssignPatProp),

    Rest(RestPat),
}

/// `{key: value}`
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValuePatProp {
    pub key: PropName,

    pub value: Box<Pat>,
}

/// `{key}` or `{key = value}`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignPatProp {
    pub span: Span,
    pub key: Ident,

    pub value: Option<Box<Expr>>,
}

impl Spanned for KeyValuePatProp {
    fn span(&self) -> Span {
        self.key.span().to(self.value.span())
    }
}

spanned!(ArrayPat, ObjectPat, AssignPat, RestPat, AssignPatProp);
spanned_enum!(Pat {
    Ident,
    Array,
    Rest,
    Object,
    Assign,
    Expr
});
spanned_enum!(ObjectPatProp {
    KeyValue,
    Assign,
    Rest
});
