use crate::{
    pat::Pat,
    stmt::BlockStmt,
    types::{Predicate, TypeAnn, TypeParamDecl},
};
use global_common::Span;

/// Common parts of function and method.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub params: Vec<Param>,

    pub span: Span,

    /// `None` for overload signatures and ambient declarations.
    pub body: Option<BlockStmt>,

    pub is_generator: bool,

    pub is_async: bool,

    pub type_params: Option<TypeParamDecl>,

    pub return_type: Option<TypeAnn>,

    /// Flow `%checks`
    pub predicate: Option<Predicate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub span: Span,
    pub pat: Pat,
}

spanned!(Function, Param);
