#![allow(clippy::vec_box)]
use crate::{
    class::Class,
    function::Function,
    ident::{Ident, PrivateName},
    jsx::{JSXElement, JSXFragment},
    lit::Lit,
    operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp},
    pat::Pat,
    prop::{ComputedPropName, Prop},
    stmt::BlockStmt,
    types::{Predicate, Type, TypeAnn, TypeParamDecl, TypeParamInstantiation},
};
use global_common::{JsWord, Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    This(ThisExpr),

    Array(ArrayLit),

    Object(ObjectLit),

    Fn(FnExpr),

    Unary(UnaryExpr),

    /// `++v`, `--v`, `v++`, `v--`
    Update(UpdateExpr),

    Bin(BinExpr),

    Assign(AssignExpr),

    /// `a.b`, `a[b]`, `a?.b`, `super.b`
    Member(MemberExpr),

    /// true ? 'a' : 'b'
    Cond(CondExpr),

    Call(CallExpr),

    /// `new Cat()`
    New(NewExpr),

    Seq(SeqExpr),

    Ident(Ident),

    Lit(Lit),

    Tpl(Tpl),

    TaggedTpl(TaggedTpl),

    Arrow(ArrowExpr),

    Class(ClassExpr),

    Yield(YieldExpr),

    /// `new.target`, `import.meta`
    MetaProp(MetaPropExpr),

    Await(AwaitExpr),

    Paren(ParenExpr),

    JSXElement(Box<JSXElement>),

    JSXFragment(JSXFragment),

    /// Flow: `(expr: T)`. The parentheses are a [ParenExpr] around this node.
    TypeCast(TypeCastExpr),

    /// `expr as T`
    As(AsExpr),

    PrivateName(PrivateName),
}

impl Expr {
    /// Strips any number of parentheses.
    pub fn unwrap_parens(&self) -> &Expr {
        let mut e = self;
        while let Expr::Paren(p) = e {
            e = &p.expr;
        }
        e
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThisExpr {
    pub span: Span,
}

/// Array literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLit {
    pub span: Span,
    pub elems: Vec<Option<ExprOrSpread>>,
}

/// Object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLit {
    pub span: Span,
    pub props: Vec<PropOrSpread>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropOrSpread {
    /// Spread properties, e.g., `{a: 1, ...obj, b: 2}`.
    Spread(SpreadElement),

    Prop(Box<Prop>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadElement {
    pub span: Span,
    pub dot3_token: Span,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub span: Span,
    pub op: UnaryOp,
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpr {
    pub span: Span,
    pub op: UpdateOp,
    pub prefix: bool,
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinExpr {
    pub span: Span,
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Function expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub ident: Option<Ident>,
    pub function: Function,
}

/// Class expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassExpr {
    pub ident: Option<Ident>,
    pub class: Class,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub span: Span,
    pub op: AssignOp,
    /// Plain expressions on the left are stored as [Pat::Expr].
    pub left: Box<Pat>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub span: Span,
    pub obj: ExprOrSuper,
    pub prop: MemberProp,
    /// `a?.b`
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberProp {
    Ident(Ident),
    PrivateName(PrivateName),
    Computed(ComputedPropName),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CondExpr {
    pub span: Span,
    pub test: Box<Expr>,
    pub cons: Box<Expr>,
    pub alt: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub span: Span,
    pub callee: Callee,
    pub args: Vec<ExprOrSpread>,
    pub type_args: Option<TypeParamInstantiation>,
    /// `a?.()`
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    Super(Super),
    /// `import('m')`
    Import(Import),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub span: Span,
    pub callee: Box<Expr>,
    /// `None` for `new C`
    pub args: Option<Vec<ExprOrSpread>>,
    pub type_args: Option<TypeParamInstantiation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeqExpr {
    pub span: Span,
    pub exprs: Vec<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowExpr {
    pub span: Span,
    pub params: Vec<Pat>,
    pub body: BlockStmtOrExpr,
    pub is_async: bool,
    pub type_params: Option<TypeParamDecl>,
    pub return_type: Option<TypeAnn>,
    pub predicate: Option<Predicate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldExpr {
    pub span: Span,
    pub arg: Option<Box<Expr>>,
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetaPropExpr {
    pub span: Span,
    pub meta: Ident,
    pub prop: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AwaitExpr {
    pub span: Span,
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tpl {
    pub span: Span,
    pub exprs: Vec<Box<Expr>>,
    pub quasis: Vec<TplElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaggedTpl {
    pub span: Span,
    pub tag: Box<Expr>,
    pub type_args: Option<TypeParamInstantiation>,
    pub tpl: Tpl,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TplElement {
    pub span: Span,
    pub tail: bool,
    /// Text between the delimiters, escapes untouched.
    pub raw: JsWord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr {
    pub span: Span,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeCastExpr {
    pub span: Span,
    pub expr: Box<Expr>,
    pub type_ann: TypeAnn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsExpr {
    pub span: Span,
    pub expr: Box<Expr>,
    pub type_ann: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprOrSuper {
    Super(Super),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Super {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Import {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOrSpread {
    pub spread: Option<Span>,
    pub expr: Box<Expr>,
}

impl Spanned for ExprOrSpread {
    fn span(&self) -> Span {
        match self.spread {
            Some(spread) => spread.to(self.expr.span()),
            None => self.expr.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockStmtOrExpr {
    BlockStmt(BlockStmt),
    Expr(Box<Expr>),
}

impl Spanned for FnExpr {
    fn span(&self) -> Span {
        self.function.span
    }
}

impl Spanned for ClassExpr {
    fn span(&self) -> Span {
        self.class.span
    }
}

spanned!(
    ThisExpr,
    ArrayLit,
    ObjectLit,
    SpreadElement,
    UnaryExpr,
    UpdateExpr,
    BinExpr,
    AssignExpr,
    MemberExpr,
    CondExpr,
    CallExpr,
    NewExpr,
    SeqExpr,
    ArrowExpr,
    YieldExpr,
    MetaPropExpr,
    AwaitExpr,
    Tpl,
    TaggedTpl,
    TplElement,
    ParenExpr,
    TypeCastExpr,
    AsExpr,
    Super,
    Import,
);

spanned_enum!(Expr {
    This,
    Array,
    Object,
    Fn,
    Unary,
    Update,
    Bin,
    Assign,
    Member,
    Cond,
    Call,
    New,
    Seq,
    Ident,
    Lit,
    Tpl,
    TaggedTpl,
    Arrow,
    Class,
    Yield,
    MetaProp,
    Await,
    Paren,
    JSXElement,
    JSXFragment,
    TypeCast,
    As,
    PrivateName,
});
spanned_enum!(PropOrSpread { Spread, Prop });
spanned_enum!(MemberProp {
    Ident,
    PrivateName,
    Computed
});
spanned_enum!(Callee { Super, Import, Expr });
spanned_enum!(ExprOrSuper { Super, Expr });
spanned_enum!(BlockStmtOrExpr { BlockStmt, Expr });

enum_from!(Expr {
    This(ThisExpr),
    Array(ArrayLit),
    Object(ObjectLit),
    Fn(FnExpr),
    Unary(UnaryExpr),
    Update(UpdateExpr),
    Bin(BinExpr),
    Assign(AssignExpr),
    Member(MemberExpr),
    Cond(CondExpr),
    Call(CallExpr),
    New(NewExpr),
    Seq(SeqExpr),
    Ident(Ident),
    Lit(Lit),
    Tpl(Tpl),
    TaggedTpl(TaggedTpl),
    Arrow(ArrowExpr),
    Class(ClassExpr),
    Yield(YieldExpr),
    MetaProp(MetaPropExpr),
    Await(AwaitExpr),
    Paren(ParenExpr),
    JSXFragment(JSXFragment),
    TypeCast(TypeCastExpr),
    As(AsExpr),
    PrivateName(PrivateName),
});

impl From<JSXElement> for Expr {
    fn from(e: JSXElement) -> Self {
        Expr::JSXElement(Box::new(e))
    }
}
