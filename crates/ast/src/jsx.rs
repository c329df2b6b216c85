use crate::{
    expr::{Expr, SpreadElement},
    ident::Ident,
    lit::Str,
    types::TypeParamInstantiation,
};
use global_common::{JsWord, Span, Spanned};

/// Used for `obj` property of `JSXMemberExpr`.
#[derive(Debug, Clone, PartialEq)]
pub enum JSXObject {
    JSXMemberExpr(Box<JSXMemberExpr>),
    Ident(Ident),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JSXMemberExpr {
    pub obj: JSXObject,

    pub prop: Ident,
}

/// XML-based namespace syntax:
#[derive(Debug, Clone, PartialEq)]
pub struct JSXNamespacedName {
    pub ns: Ident,
    pub name: Ident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JSXEmptyExpr {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JSXExprContainer {
    pub span: Span,

    pub expr: JSXExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JSXExpr {
    JSXEmptyExpr(JSXEmptyExpr),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JSXSpreadChild {
    pub span: Span,

    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JSXElementName {
    Ident(Ident),
    JSXMemberExpr(JSXMemberExpr),
    JSXNamespacedName(JSXNamespacedName),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JSXOpeningElement {
    pub name: JSXElementName,

    pub span: Span,

    pub attrs: Vec<JSXAttrOrSpread>,

    pub self_closing: bool,

    /// Note: This field's name is different from one from babel because it is
    /// misleading
    pub type_args: Option<TypeParamInstantiation>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JSXAttrOrSpread {
    JSXAttr(JSXAttr),
    SpreadElement(SpreadElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JSXClosingElement {
    pub span: Span,
    pub name: JSXElementName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JSXAttr {
    pub span: Span,
    pub name: JSXAttrName,
    /// Babel uses Expr instead of JSXAttrValue
    pub value: Option<JSXAttrValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JSXAttrName {
    Ident(Ident),
    JSXNamespacedName(JSXNamespacedName),
}

#[derive(Debug, Clone, PartialEq)]
pub enum JSXAttrValue {
    /// Quoted text, which may span lines and carries no escapes.
    Str(Str),

    JSXExprContainer(JSXExprContainer),

    JSXElement(Box<JSXElement>),

    JSXFragment(JSXFragment),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JSXText {
    pub span: Span,
    pub raw: JsWord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JSXElement {
    pub span: Span,
    pub opening: JSXOpeningElement,
    pub children: Vec<JSXElementChild>,
    pub closing: Option<JSXClosingElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JSXElementChild {
    JSXText(JSXText),
    JSXExprContainer(JSXExprContainer),
    JSXSpreadChild(JSXSpreadChild),
    JSXElement(Box<JSXElement>),
    JSXFragment(JSXFragment),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JSXFragment {
    pub span: Span,

    pub opening: JSXOpeningFragment,

    pub children: Vec<JSXElementChild>,

    pub closing: JSXClosingFragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JSXOpeningFragment {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JSXClosingFragment {
    pub span: Span,
}

impl Spanned for JSXMemberExpr {
    fn span(&self) -> Span {
        self.obj.span().to(self.prop.span)
    }
}

impl Spanned for JSXNamespacedName {
    fn span(&self) -> Span {
        self.ns.span.to(self.name.span)
    }
}

spanned!(
    JSXEmptyExpr,
    JSXExprContainer,
    JSXSpreadChild,
    JSXOpeningElement,
    JSXClosingElement,
    JSXAttr,
    JSXText,
    JSXElement,
    JSXFragment,
    JSXOpeningFragment,
    JSXClosingFragment,
);
spanned_enum!(JSXObject {
    JSXMemberExpr,
    Ident
});
spanned_enum!(JSXExpr { JSXEmptyExpr, Expr });
spanned_enum!(JSXElementName {
    Ident,
    JSXMemberExpr,
    JSXNamespacedName
});
spanned_enum!(JSXAttrOrSpread {
    JSXAttr,
    SpreadElement
});
spanned_enum!(JSXAttrName {
    Ident,
    JSXNamespacedName
});
spanned_enum!(JSXAttrValue {
    Str,
    JSXExprContainer,
    JSXElement,
    JSXFragment
});
spanned_enum!(JSXElementChild {
    JSXText,
    JSXExprContainer,
    JSXSpreadChild,
    JSXElement,
    JSXFragment
});
