use super::{LexResult, Lexer};
use crate::error::{Error, SyntaxError};
use global_common::{BytePos, Comment, CommentKind, Input, Span};
use unicode_xid::UnicodeXID;

pub(crate) mod char_literals {
    pub const LINE_FEED: char = '\n';
    pub const CARRIAGE_RETURN: char = '\r';
    pub const LINE_SEPARATOR: char = '\u{2028}';
    pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';
    pub const ZERO_WIDTH_NON_JOINER: char = '\u{200c}';
    pub const ZERO_WIDTH_JOINER: char = '\u{200d}';
    pub const BYTE_ORDER_MARK: char = '\u{feff}';
}

/// See https://tc39.github.io/ecma262/#sec-line-terminators
pub(crate) fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        char_literals::LINE_FEED
            | char_literals::CARRIAGE_RETURN
            | char_literals::LINE_SEPARATOR
            | char_literals::PARAGRAPH_SEPARATOR
    )
}

/// https://tc39.github.io/ecma262/#sec-white-space
fn is_whitespace(ch: char) -> bool {
    match ch {
        '\t' | '\u{b}' | '\u{c}' | ' ' | '\u{a0}' | char_literals::BYTE_ORDER_MARK => true,
        _ => !ch.is_ascii() && ch.is_whitespace() && !is_line_break(ch),
    }
}

/// Test whether a given character code starts an identifier.
///
/// https://tc39.github.io/ecma262/#prod-IdentifierStart
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    match c {
        '$' | '_' | 'A'..='Z' | 'a'..='z' => true,
        _ if c.is_ascii() => false,
        _ => UnicodeXID::is_xid_start(c),
    }
}

/// Test whether a given character is part of an identifier.
#[inline]
pub(crate) fn is_ident_part(c: char) -> bool {
    match c {
        '$'
        | '_'
        | char_literals::ZERO_WIDTH_NON_JOINER
        | char_literals::ZERO_WIDTH_JOINER
        | '0'..='9'
        | 'A'..='Z'
        | 'a'..='z' => true,
        _ if c.is_ascii() => false,
        _ => UnicodeXID::is_xid_continue(c),
    }
}

pub(crate) fn is_valid_regex_flag(ch: char) -> bool {
    matches!(ch, 'd' | 'g' | 'i' | 'm' | 's' | 'u' | 'v' | 'y')
}

impl Lexer<'_> {
    #[inline]
    pub(super) fn cur(&self) -> Option<char> {
        self.input.cur()
    }

    #[inline]
    pub(super) fn peek(&self) -> Option<char> {
        self.input.peek()
    }

    #[inline]
    pub(super) fn peek_ahead(&self) -> Option<char> {
        self.input.peek_ahead()
    }

    #[inline]
    pub(super) fn bump(&mut self) {
        self.input.bump()
    }

    #[inline]
    pub(super) fn is(&self, c: u8) -> bool {
        self.input.is_byte(c)
    }

    #[inline]
    pub(super) fn eat(&mut self, c: u8) -> bool {
        self.input.eat_byte(c)
    }

    #[inline]
    pub(super) fn cur_pos(&self) -> BytePos {
        self.input.cur_pos()
    }

    pub(super) fn span(&self, start: BytePos) -> Span {
        Span::new(start, self.cur_pos())
    }

    /// Shorthand for `let span = self.span(start); self.error_span(span)`
    #[cold]
    #[inline(never)]
    pub(super) fn error<T>(&self, start: BytePos, kind: SyntaxError) -> LexResult<T> {
        let span = self.span(start);
        Err(Error::new(span, kind))
    }

    /// Skips whitespace and comments, recording the comments and whether a
    /// line break was crossed.
    pub(super) fn skip_space(&mut self) -> LexResult<()> {
        loop {
            let c = match self.cur() {
                Some(c) => c,
                None => return Ok(()),
            };

            if is_line_break(c) {
                self.had_line_break = true;
                self.bump();
            } else if is_whitespace(c) {
                self.bump();
            } else if c == '/' {
                match self.peek() {
                    Some('/') => self.skip_line_comment(2),
                    Some('*') => self.skip_block_comment()?,
                    _ => return Ok(()),
                }
            } else {
                return Ok(());
            }
        }
    }

    pub(super) fn skip_line_comment(&mut self, start_skip: usize) {
        let start = self.cur_pos();
        for _ in 0..start_skip {
            self.bump();
        }
        let text_start = self.cur_pos();
        self.input.uncons_while(|c| !is_line_break(c));
        let end = self.cur_pos();

        let text = self.input.slice(text_start, end).to_string();
        self.push_comment(Comment {
            kind: CommentKind::Line,
            span: Span::new(start, end),
            text,
        });
    }

    /// Expects current char to be '/' and next char to be '*'.
    pub(super) fn skip_block_comment(&mut self) -> LexResult<()> {
        let start = self.cur_pos();
        debug_assert_eq!(self.cur(), Some('/'));
        debug_assert_eq!(self.peek(), Some('*'));

        self.bump();
        self.bump();
        let text_start = self.cur_pos();

        while let Some(c) = self.cur() {
            if c == '*' && self.peek() == Some('/') {
                let text = self.input.slice(text_start, self.cur_pos()).to_string();
                self.bump();
                self.bump();
                self.push_comment(Comment {
                    kind: CommentKind::Block,
                    span: self.span(start),
                    text,
                });
                return Ok(());
            }
            if is_line_break(c) {
                self.had_line_break = true;
            }
            self.bump();
        }

        self.error(start, SyntaxError::UnterminatedBlockComment)
    }

    fn push_comment(&mut self, comment: Comment) {
        self.comments.borrow_mut().push(comment);
    }
}
