use crate::{
    error::{Error, SyntaxError},
    lexer::{LexResult, Lexer},
    token::{Token, TokenAndSpan, Word},
};
use global_common::{BytePos, Comment, Span, DUMMY_SP};

/// This struct is responsible for managing current token and peeked token.
#[derive(Clone)]
pub(super) struct Buffer<'a> {
    iter: Lexer<'a>,
    /// Span of the previous token.
    prev_span: Span,
    cur: Option<TokenAndSpan>,
    /// Peeked token
    next: Option<TokenAndSpan>,
}

impl<'a> Buffer<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Buffer {
            iter: lexer,
            cur: None,
            prev_span: DUMMY_SP,
            next: None,
        }
    }

    #[inline]
    fn bump_inner(&mut self) {
        let prev = self.cur.take();
        if let Some(TokenAndSpan { span, .. }) = prev {
            self.prev_span = span;
        }

        // If we have peeked a token, take it instead of calling lexer.next()
        self.cur = self.next.take().or_else(|| self.iter.next());
    }

    #[cold]
    #[inline(never)]
    pub fn dump_cur(&mut self) -> String {
        match self.cur() {
            Some(v) => format!("{:?}", v),
            None => "<eof>".to_string(),
        }
    }

    /// Returns current token.
    pub fn bump(&mut self) -> Token {
        if self.cur.is_none() {
            self.bump_inner();
        }

        match self.cur.take() {
            Some(prev) => {
                self.prev_span = prev.span;
                prev.token
            }
            None => Token::Error(Error::new(self.prev_span.shrink_to_hi(), SyntaxError::Eof)),
        }
    }

    pub fn peek(&mut self) -> Option<&Token> {
        let _ = self.cur();

        if self.next.is_none() {
            self.next = self.iter.next();
        }

        self.next.as_ref().map(|ts| &ts.token)
    }

    /// Span of the peeked token.
    pub fn peek_span(&mut self) -> Option<Span> {
        let _ = self.peek();
        self.next.as_ref().map(|ts| ts.span)
    }

    /// Returns true on eof.
    pub fn had_line_break_before_cur(&mut self) -> bool {
        self.cur();

        self.cur
            .as_ref()
            .map(|it| it.had_line_break)
            .unwrap_or(true)
    }

    /// This returns true on eof.
    pub fn has_linebreak_between_cur_and_peeked(&mut self) -> bool {
        let _ = self.peek();
        self.next
            .as_ref()
            .map(|item| item.had_line_break)
            .unwrap_or(true)
    }

    /// Get current token. Returns `None` only on eof.
    #[inline]
    pub fn cur(&mut self) -> Option<&Token> {
        if self.cur.is_none() {
            self.bump_inner();
        }
        self.cur.as_ref().map(|item| &item.token)
    }

    #[inline]
    pub fn is(&mut self, expected: &Token) -> bool {
        match self.cur() {
            Some(t) => *expected == *t,
            _ => false,
        }
    }

    #[inline]
    pub fn peeked_is(&mut self, expected: &Token) -> bool {
        match self.peek() {
            Some(t) => *expected == *t,
            _ => false,
        }
    }

    #[inline]
    pub fn eat(&mut self, expected: &Token) -> bool {
        let v = self.is(expected);
        if v {
            self.bump();
        }
        v
    }

    /// Current token is the identifier or keyword `word`.
    pub fn is_word(&mut self, word: &str) -> bool {
        matches!(self.cur(), Some(Token::Word(w)) if w.as_str() == word)
    }

    pub fn peeked_is_word(&mut self, word: &str) -> bool {
        matches!(self.peek(), Some(Token::Word(w)) if w.as_str() == word)
    }

    /// Current token is a plain identifier, not a keyword or literal word.
    pub fn is_ident(&mut self) -> bool {
        matches!(self.cur(), Some(Token::Word(Word::Ident(..))))
    }

    pub fn peeked_is_ident(&mut self) -> bool {
        matches!(self.peek(), Some(Token::Word(Word::Ident(..))))
    }

    /// Returns start of current token.
    #[inline]
    pub fn cur_pos(&mut self) -> BytePos {
        let _ = self.cur();
        self.cur
            .as_ref()
            .map(|item| item.span.lo)
            .unwrap_or_else(|| {
                // eof
                self.last_pos()
            })
    }

    #[inline]
    pub fn cur_span(&mut self) -> Span {
        let _ = self.cur();
        self.cur
            .as_ref()
            .map(|item| item.span)
            .unwrap_or_else(|| self.prev_span.shrink_to_hi())
    }

    /// Returns last byte position of previous token.
    #[inline]
    pub fn last_pos(&self) -> BytePos {
        self.prev_span.hi
    }

    /// Returns span of the previous token.
    #[inline]
    pub fn prev_span(&self) -> Span {
        self.prev_span
    }

    pub fn src(&self) -> &'a str {
        self.iter.src()
    }

    pub fn take_comments(&self) -> Vec<Comment> {
        self.iter.take_comments()
    }

    /// Replaces the current token by reading it again with `read`.
    pub fn rescan_cur<F>(&mut self, read: F)
    where
        F: FnOnce(&mut Lexer<'a>) -> LexResult<Token>,
    {
        let _ = self.cur();
        let (start, had_line_break) = match &self.cur {
            Some(t) => (t.span.lo, t.had_line_break),
            None => return,
        };
        self.next = None;
        self.cur = Some(self.iter.rescan(start, had_line_break, read));
    }

    /// Reads the token following the previous one as a JSX child. The parser
    /// must not have looked past the previous token.
    pub fn scan_jsx_child(&mut self) {
        let start = match &self.cur {
            Some(t) => t.span.lo,
            None => self.prev_span.hi,
        };
        self.next = None;
        self.cur = Some(self.iter.rescan(start, false, |l| l.scan_jsx_child()));
    }

    /// Puts the lexer right behind the last token the buffer knows, dropping
    /// any lookahead. Used after restoring a snapshot, whose lexer shares
    /// its comment store with the abandoned branch.
    pub fn resync(&mut self) {
        let pos = match &self.cur {
            Some(t) => t.span.hi,
            None => self.prev_span.hi,
        };
        self.next = None;
        self.iter.reset_to(pos);
    }
}
