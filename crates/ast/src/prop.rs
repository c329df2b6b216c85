use crate::{
    expr::Expr,
    function::Function,
    ident::Ident,
    lit::{BigInt, Number, Str},
};
use global_common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum Prop {
    /// `a` in `{ a, }`
    Shorthand(Ident),

    /// `key: value` in `{ key: value, }`
    KeyValue(KeyValueProp),

    /// This is **invalid** for object literal, but valid inside a pattern
    /// written as an expression, e.g. `({ a = 1 } = obj)`.
    Assign(AssignProp),

    Getter(GetterProp),

    Setter(SetterProp),

    Method(MethodProp),
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueProp {
    pub key: PropName,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignProp {
    pub key: Ident,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetterProp {
    pub span: Span,
    pub key: PropName,
    pub function: Function,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetterProp {
    pub span: Span,
    pub key: PropName,
    pub function: Function,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodProp {
    pub span: Span,
    pub key: PropName,
    pub function: Function,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropName {
    Ident(Ident),
    /// String literal.
    Str(Str),
    /// Numeric literal.
    Num(Number),
    BigInt(BigInt),
    Computed(ComputedPropName),
}

impl PropName {
    /// The static name of the key, if it has one.
    pub fn static_name(&self) -> Option<&str> {
        match self {
            PropName::Ident(i) => Some(&i.sym),
            PropName::Str(s) => Some(&s.value),
            PropName::Num(n) => Some(&n.raw),
            PropName::BigInt(_) | PropName::Computed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedPropName {
    /// Span including `[` and `]`.
    pub span: Span,
    pub expr: Box<Expr>,
}

impl Spanned for KeyValueProp {
    fn span(&self) -> Span {
        self.key.span().to(self.value.span())
    }
}

impl Spanned for AssignProp {
    fn span(&self) -> Span {
        self.key.span.to(self.value.span())
    }
}

spanned!(GetterProp, SetterProp, MethodProp, ComputedPropName);
spanned_enum!(Prop {
    Shorthand,
    KeyValue,
    Assign,
    Getter,
    Setter,
    Method
});
spanned_enum!(PropName {
    Ident,
    Str,
    Num,
    BigInt,
    Computed
});
