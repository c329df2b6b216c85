#[macro_use]
mod macros;
mod class_and_fn;
mod expression;
mod flow;
mod input;
mod jsx;
mod object;
mod pat;
mod statement;
mod util;

use crate::{
    context::Context,
    error::{Error, SyntaxError},
    lexer::Lexer,
    token::Token,
    Syntax,
};
use ast::*;
use global_common::{BytePos, Comment, Span};
use input::Buffer;

/// When an error occurs, parsing stops and the error is returned.
pub type PResult<T> = Result<T, Error>;

/// EcmaScript parser.
#[derive(Clone)]
pub struct Parser<'a> {
    ctx: Context,
    syntax: Syntax,
    input: Buffer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str, syntax: Syntax) -> Self {
        Parser {
            ctx: Context::default(),
            syntax,
            input: Buffer::new(Lexer::new(src).with_flow(syntax.flow)),
        }
    }

    /// Comments read so far, in source order.
    pub fn take_comments(&mut self) -> Vec<Comment> {
        self.input.take_comments()
    }

    pub fn parse_program(&mut self) -> PResult<Program> {
        let start = self.input.cur_pos();
        let shebang = self.parse_shebang()?;

        let body = self.parse_block_body(None)?;
        let span = Span::new(start, self.input.last_pos());
        Ok(Program {
            span,
            body,
            shebang,
        })
    }

    fn parse_shebang(&mut self) -> PResult<Option<global_common::JsWord>> {
        match self.input.cur() {
            Some(Token::Shebang(..)) => match self.input.bump() {
                Token::Shebang(v) => Ok(Some(v)),
                _ => Ok(None),
            },
            _ => Ok(None),
        }
    }

    #[inline]
    fn ctx(&self) -> Context {
        self.ctx
    }

    /// Runs `f` and rewinds to the current token if it fails or declines.
    ///
    /// The lexer shares its comment store with the abandoned branch, so the
    /// restored buffer is resynced to drop comments read past it.
    fn try_parse<T, F>(&mut self, f: F) -> Option<T>
    where
        F: FnOnce(&mut Self) -> PResult<Option<T>>,
    {
        let snapshot = self.clone();
        match f(self) {
            Ok(Some(v)) => Some(v),
            Ok(None) | Err(..) => {
                *self = snapshot;
                self.input.resync();
                None
            }
        }
    }

    #[cold]
    fn unexpected_err(&mut self, expected: &'static str) -> Error {
        let span = self.input.cur_span();
        match self.input.cur() {
            Some(Token::Error(err)) => err.clone(),
            None => Error::new(span, SyntaxError::Eof),
            Some(..) => Error::new(
                span,
                SyntaxError::Unexpected {
                    got: self.input.dump_cur(),
                    expected,
                },
            ),
        }
    }

    fn pos(&mut self) -> BytePos {
        self.input.cur_pos()
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn parse_module(src: &str) -> Program {
        match Parser::new(src, Syntax::default()).parse_program() {
            Ok(program) => program,
            Err(err) => panic!("failed to parse {:?}: {}", src, err),
        }
    }

    pub fn parse_error(src: &str) -> Error {
        match Parser::new(src, Syntax::default()).parse_program() {
            Ok(program) => panic!("expected {:?} to fail, got {:?}", src, program),
            Err(err) => err,
        }
    }

    /// The single statement of `src`.
    pub fn stmt(src: &str) -> Stmt {
        let mut program = parse_module(src);
        assert_eq!(program.body.len(), 1, "{:?}", program.body);
        match program.body.pop() {
            Some(ModuleItem::Stmt(s)) => s,
            other => panic!("not a statement: {:?}", other),
        }
    }

    /// The expression of the single expression statement of `src`.
    pub fn expr(src: &str) -> Box<Expr> {
        match stmt(src) {
            Stmt::Expr(ExprStmt { expr, .. }) => expr,
            other => panic!("not an expression statement: {:?}", other),
        }
    }

    pub fn module_decl(src: &str) -> ModuleDecl {
        let mut program = parse_module(src);
        assert_eq!(program.body.len(), 1, "{:?}", program.body);
        match program.body.pop() {
            Some(ModuleItem::ModuleDecl(d)) => d,
            other => panic!("not a module declaration: {:?}", other),
        }
    }

    /// The annotation of `type T = ...;`.
    pub fn ty(src: &str) -> Box<Type> {
        match stmt(&format!("type T = {};", src)) {
            Stmt::Decl(Decl::TypeAlias(a)) => a.type_ann,
            other => panic!("not a type alias: {:?}", other),
        }
    }

    /// Source text under a span.
    pub fn text(src: &str, span: Span) -> &str {
        span.snippet(src)
    }
}
