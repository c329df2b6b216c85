use super::*;
use crate::token::Word;
use global_common::JsWord;
use std::ops::{Deref, DerefMut};

impl<'a> Parser<'a> {
    /// Original context is restored when returned guard is dropped.
    pub(super) fn with_ctx<'w>(&'w mut self, ctx: Context) -> WithCtx<'w, 'a> {
        let orig_ctx = self.ctx;
        self.ctx = ctx;
        WithCtx {
            orig_ctx,
            inner: self,
        }
    }

    /// Context for the body of a function or method.
    pub(super) fn fn_body_ctx(&self, is_async: bool, is_generator: bool) -> Context {
        Context {
            in_async: is_async,
            in_generator: is_generator,
            in_function: true,
            no_in: false,
            in_cond_expr: false,
            no_anon_function_type: false,
            ..self.ctx
        }
    }

    /// Context for a nested expression that is closed by a bracket, where
    /// the restrictions of the surrounding expression do not reach.
    pub(super) fn bracketed_ctx(&self) -> Context {
        Context {
            no_in: false,
            in_cond_expr: false,
            no_anon_function_type: false,
            ..self.ctx
        }
    }

    /// Identifier name, keywords included.
    ///
    /// `a` in `obj.a` or `{ a: 1 }`.
    pub(super) fn parse_ident_name(&mut self) -> PResult<Ident> {
        let start = self.input.cur_pos();
        let w = match self.input.cur() {
            Some(Token::Word(..)) => match self.input.bump() {
                Token::Word(w) => JsWord::from(w),
                _ => unreachable!(),
            },
            _ => unexpected!(self, "an identifier"),
        };
        Ok(Ident::new(w, span!(self, start)))
    }

    /// Identifier that is not a reserved word.
    pub(super) fn parse_ident(&mut self) -> PResult<Ident> {
        let start = self.input.cur_pos();
        let w = match self.input.cur() {
            Some(Token::Word(Word::Ident(..))) => match self.input.bump() {
                Token::Word(w) => JsWord::from(w),
                _ => unreachable!(),
            },
            Some(Token::Word(..)) => syntax_error!(self, SyntaxError::ExpectedIdent),
            _ => unexpected!(self, "an identifier"),
        };
        Ok(Ident::new(w, span!(self, start)))
    }

    pub(super) fn parse_binding_ident(&mut self) -> PResult<BindingIdent> {
        Ok(self.parse_ident()?.into())
    }

    /// Eats the contextual keyword `word`.
    pub(super) fn eat_word(&mut self, word: &str) -> bool {
        if self.input.is_word(word) {
            self.input.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn expect_word(&mut self, word: &'static str) -> PResult<()> {
        if !self.eat_word(word) {
            unexpected!(self, word)
        }
        Ok(())
    }

    /// `"..."` as a string literal.
    pub(super) fn parse_str_lit(&mut self) -> PResult<Str> {
        let start = self.input.cur_pos();
        match self.input.cur() {
            Some(Token::Str { .. }) => match self.input.bump() {
                Token::Str { value, raw } => Ok(Str {
                    span: span!(self, start),
                    value,
                    raw,
                }),
                _ => unreachable!(),
            },
            _ => unexpected!(self, "a string literal"),
        }
    }

    /// Comma separated list closed by `close`, allowing a trailing comma.
    pub(super) fn parse_delimited<T, F>(&mut self, close: &Token, mut item: F) -> PResult<Vec<T>>
    where
        F: FnMut(&mut Self) -> PResult<T>,
    {
        let mut items = vec![];
        while !self.input.is(close) {
            items.push(item(self)?);
            if !self.input.is(close) {
                expect!(self, ',');
            }
        }
        Ok(items)
    }
}

pub(super) struct WithCtx<'w, 'a> {
    inner: &'w mut Parser<'a>,
    orig_ctx: Context,
}

impl<'a> Deref for WithCtx<'_, 'a> {
    type Target = Parser<'a>;

    fn deref(&self) -> &Parser<'a> {
        self.inner
    }
}

impl<'a> DerefMut for WithCtx<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Parser<'a> {
        self.inner
    }
}

impl Drop for WithCtx<'_, '_> {
    fn drop(&mut self) {
        self.inner.ctx = self.orig_ctx;
    }
}

pub(super) trait ExprExt {
    fn as_expr(&self) -> &Expr;

    /// ECMAScript's "IsValidSimpleAssignmentTarget".
    fn is_valid_simple_assignment_target(&self) -> bool {
        match self.as_expr() {
            Expr::Ident(..) | Expr::Member(..) => true,
            Expr::Paren(ParenExpr { expr, .. }) => expr.is_valid_simple_assignment_target(),
            Expr::TypeCast(TypeCastExpr { expr, .. }) | Expr::As(AsExpr { expr, .. }) => {
                expr.is_valid_simple_assignment_target()
            }
            _ => false,
        }
    }
}

impl ExprExt for Box<Expr> {
    fn as_expr(&self) -> &Expr {
        self
    }
}

impl ExprExt for Expr {
    fn as_expr(&self) -> &Expr {
        self
    }
}
