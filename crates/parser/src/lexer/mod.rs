//! ECMAScript lexer.
//!
//! The lexer never guesses from context. Tokens whose meaning depends on
//! the grammar position are always read in their short form and the parser
//! asks for a rescan from the token start: `/` and `/=` as a regular
//! expression, `}` as a template continuation, `>` as `>>`, `>=`, `>>>` and
//! the shift assignments, and identifiers, strings and text in JSX positions.

mod jsx;
mod number;
pub(crate) mod util;

use crate::{
    error::{Error, SyntaxError},
    token::{BinOpToken, Token, TokenAndSpan, Word},
};
use ast::AssignOp;
use global_common::{BytePos, Comment, Input, StringInput};
use std::{cell::RefCell, iter::FusedIterator, rc::Rc};
use util::{char_literals, is_ident_part, is_ident_start, is_line_break, is_valid_regex_flag};

pub(crate) type LexResult<T> = Result<T, Error>;

#[derive(Clone)]
pub struct Lexer<'a> {
    input: StringInput<'a>,
    /// Shared between clones so that a parser snapshot sees the comments
    /// read after it was taken; `reset_to` forgets them again.
    comments: Rc<RefCell<Vec<Comment>>>,
    had_line_break: bool,
    flow: bool,
}

impl FusedIterator for Lexer<'_> {}

impl Iterator for Lexer<'_> {
    type Item = TokenAndSpan;

    fn next(&mut self) -> Option<Self::Item> {
        self.had_line_break = self.input.is_at_start();

        let start = self.cur_pos();
        let token = match self.skip_space() {
            Ok(()) => {
                let start = self.cur_pos();
                match self.read_token() {
                    Ok(Some(token)) => Ok((start, token)),
                    Ok(None) => return None,
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        };

        let (start, token) = match token {
            Ok(t) => t,
            Err(err) => {
                // Make progress so that a caller ignoring the error terminates.
                if self.cur_pos() == start {
                    self.bump();
                }
                (start, Token::Error(err))
            }
        };

        Some(TokenAndSpan {
            token,
            had_line_break: self.had_line_break,
            span: self.span(start),
        })
    }
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            input: StringInput::new(src),
            comments: Default::default(),
            had_line_break: false,
            flow: true,
        }
    }

    pub(crate) fn with_flow(mut self, flow: bool) -> Self {
        self.flow = flow;
        self
    }

    pub(crate) fn src(&self) -> &'a str {
        self.input.source()
    }

    /// Comments read so far, in source order.
    pub(crate) fn take_comments(&self) -> Vec<Comment> {
        std::mem::take(&mut *self.comments.borrow_mut())
    }

    /// Moves the cursor back to `pos` and forgets every comment read at or
    /// after it.
    pub(crate) fn reset_to(&mut self, pos: BytePos) {
        self.input.reset_to(pos);
        let mut comments = self.comments.borrow_mut();
        let keep = comments.partition_point(|c| c.span.lo < pos);
        comments.truncate(keep);
    }

    /// Reads one token starting exactly at `start` with `read`. The caller
    /// supplies the line break flag of the token being replaced.
    pub(crate) fn rescan<F>(&mut self, start: BytePos, had_line_break: bool, read: F) -> TokenAndSpan
    where
        F: FnOnce(&mut Self) -> LexResult<Token>,
    {
        self.reset_to(start);
        let token = match read(self) {
            Ok(token) => token,
            Err(err) => {
                if self.cur_pos() == start {
                    self.bump();
                }
                Token::Error(err)
            }
        };
        TokenAndSpan {
            token,
            had_line_break,
            span: self.span(start),
        }
    }

    /// `/` or `/=` read again as a regular expression.
    pub(crate) fn rescan_slash(&mut self) -> LexResult<Token> {
        self.read_regexp()
    }

    /// `>` read again as the longest of `>`, `>=`, `>>`, `>>=`, `>>>` and
    /// `>>>=`.
    pub(crate) fn rescan_greater(&mut self) -> LexResult<Token> {
        debug_assert_eq!(self.cur(), Some('>'));
        self.bump();

        let mut op = BinOpToken::Gt;
        if self.eat(b'>') {
            op = BinOpToken::RShift;
            if self.eat(b'>') {
                op = BinOpToken::ZeroFillRShift;
            }
        }

        if self.eat(b'=') {
            return Ok(match op {
                BinOpToken::Gt => Token::BinOp(BinOpToken::GtEq),
                BinOpToken::RShift => Token::AssignOp(AssignOp::RShiftAssign),
                _ => Token::AssignOp(AssignOp::ZeroFillRShiftAssign),
            });
        }

        Ok(Token::BinOp(op))
    }

    /// `}` read again as the continuation of a template.
    pub(crate) fn rescan_template_continuation(&mut self) -> LexResult<Token> {
        debug_assert_eq!(self.cur(), Some('}'));
        self.bump();
        self.read_template_chunk()
    }

    fn read_token(&mut self) -> LexResult<Option<Token>> {
        let ch = match self.cur() {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match ch {
            // The interpretation of a dot depends on whether it is followed
            // by a digit or another two dots.
            '.' => self.read_token_dot()?,
            // Punctuation tokens.
            '(' => self.single(Token::LParen),
            ')' => self.single(Token::RParen),
            ';' => self.single(Token::Semi),
            ',' => self.single(Token::Comma),
            '[' => self.single(Token::LBracket),
            ']' => self.single(Token::RBracket),
            '{' => {
                self.bump();
                if self.flow && self.eat(b'|') {
                    Token::LBraceBar
                } else {
                    Token::LBrace
                }
            }
            '}' => self.single(Token::RBrace),
            ':' => self.single(Token::Colon),
            '?' => self.read_token_question(),
            '`' => {
                self.bump();
                self.read_template_chunk()?
            }
            '0' => match self.peek() {
                // '0x', '0X' - hex number
                Some('x') | Some('X') => self.read_radix_number(16)?,
                // '0o', '0O' - octal number
                Some('o') | Some('O') => self.read_radix_number(8)?,
                // '0b', '0B' - binary number
                Some('b') | Some('B') => self.read_radix_number(2)?,
                _ => self.read_number(false)?,
            },
            // Anything else beginning with a digit is an integer, octal
            // number, or float.
            '1'..='9' => self.read_number(false)?,

            // Quotes produce strings.
            '"' | '\'' => self.read_string(ch)?,

            '/' => {
                self.bump();
                if self.eat(b'=') {
                    tok!("/=")
                } else {
                    tok!('/')
                }
            }
            '%' | '*' => self.read_token_mult_modulo(ch),
            '|' | '&' => self.read_token_pipe_amp(ch),
            '^' => {
                self.bump();
                if self.eat(b'=') {
                    Token::AssignOp(AssignOp::BitXorAssign)
                } else {
                    tok!('^')
                }
            }
            '+' | '-' => self.read_token_plus_min(ch),
            '<' => self.read_token_lt(),
            // Always a single `>`; see `rescan_greater`.
            '>' => self.single(tok!('>')),
            '=' | '!' => self.read_token_eq_excl(ch),
            '~' => self.single(tok!('~')),
            '@' => self.single(Token::At),
            '#' => self.read_token_number_sign()?,
            // Identifier or keyword. '\uXXXX' sequences are allowed in
            // identifiers, so '\' also dispatches to that.
            c if c == '\\' || is_ident_start(c) => self.read_ident_or_keyword()?,
            c => {
                let start = self.cur_pos();
                self.bump();
                return self.error(start, SyntaxError::UnexpectedChar(c));
            }
        };

        Ok(Some(token))
    }

    #[inline]
    fn single(&mut self, token: Token) -> Token {
        self.bump();
        token
    }

    fn read_token_number_sign(&mut self) -> LexResult<Token> {
        debug_assert_eq!(self.cur(), Some('#'));
        let start = self.cur_pos();

        if self.input.is_at_start() && self.peek() == Some('!') {
            self.bump();
            self.bump();
            let text_start = self.cur_pos();
            self.input.uncons_while(|c| !is_line_break(c));
            let text = self.input.slice(text_start, self.cur_pos());
            return Ok(Token::Shebang(text.into()));
        }

        self.bump(); // '#'
        if matches!(self.cur(), Some(c) if c.is_ascii_digit()) {
            return self.error(start, SyntaxError::UnexpectedDigitAfterHash);
        }
        Ok(tok!('#'))
    }

    fn read_token_dot(&mut self) -> LexResult<Token> {
        debug_assert_eq!(self.cur(), Some('.'));

        match self.peek() {
            Some(next) if next.is_ascii_digit() => return self.read_number(true),
            _ => {}
        }

        self.bump(); // 1st '.'

        if self.is(b'.') && self.peek() == Some('.') {
            self.bump(); // 2nd '.'
            self.bump(); // 3rd '.'
            Ok(tok!("..."))
        } else {
            Ok(tok!('.'))
        }
    }

    fn read_token_mult_modulo(&mut self, ch: char) -> Token {
        debug_assert!(ch == '*' || ch == '%');
        self.bump();

        let mut token = if ch == '*' { tok!('*') } else { tok!('%') };

        // check for **
        if ch == '*' && self.eat(b'*') {
            token = tok!("**");
        }

        if self.eat(b'=') {
            token = Token::AssignOp(match token {
                tok!('*') => AssignOp::MulAssign,
                tok!('%') => AssignOp::ModAssign,
                _ => AssignOp::ExpAssign,
            });
        }

        token
    }

    fn read_token_pipe_amp(&mut self, ch: char) -> Token {
        debug_assert!(ch == '|' || ch == '&');
        self.bump();

        if ch == '|' && self.flow && self.is(b'}') {
            self.bump();
            return Token::BarRBrace;
        }

        // '|=', '&='
        if self.eat(b'=') {
            return Token::AssignOp(if ch == '&' {
                AssignOp::BitAndAssign
            } else {
                AssignOp::BitOrAssign
            });
        }

        // '||', '&&'
        if self.eat(ch as u8) {

            if self.eat(b'=') {
                return Token::AssignOp(if ch == '&' {
                    AssignOp::AndAssign
                } else {
                    AssignOp::OrAssign
                });
            }

            return if ch == '&' { tok!("&&") } else { tok!("||") };
        }

        if ch == '&' {
            tok!('&')
        } else {
            tok!('|')
        }
    }

    fn read_token_plus_min(&mut self, ch: char) -> Token {
        debug_assert!(ch == '+' || ch == '-');
        self.bump(); // '+' or '-'

        if self.eat(ch as u8) {
            if ch == '+' {
                tok!("++")
            } else {
                tok!("--")
            }
        } else if self.eat(b'=') {
            Token::AssignOp(if ch == '+' {
                AssignOp::AddAssign
            } else {
                AssignOp::SubAssign
            })
        } else if ch == '+' {
            tok!('+')
        } else {
            tok!('-')
        }
    }

    fn read_token_lt(&mut self) -> Token {
        debug_assert_eq!(self.cur(), Some('<'));
        self.bump();

        if self.eat(b'<') {
            if self.eat(b'=') {
                return Token::AssignOp(AssignOp::LShiftAssign);
            }
            return tok!("<<");
        }
        if self.eat(b'=') {
            return tok!("<=");
        }
        tok!('<')
    }

    fn read_token_eq_excl(&mut self, ch: char) -> Token {
        debug_assert!(ch == '=' || ch == '!');
        self.bump(); // '=' or '!'

        if self.eat(b'=') {
            if self.eat(b'=') {
                if ch == '!' {
                    tok!("!==")
                } else {
                    tok!("===")
                }
            } else if ch == '!' {
                tok!("!=")
            } else {
                tok!("==")
            }
        } else if ch == '=' && self.eat(b'>') {
            tok!("=>")
        } else if ch == '!' {
            tok!('!')
        } else {
            tok!('=')
        }
    }

    fn read_token_question(&mut self) -> Token {
        debug_assert_eq!(self.cur(), Some('?'));
        self.bump(); // '?'

        match self.cur() {
            Some('?') => {
                self.bump();
                if self.eat(b'=') {
                    Token::AssignOp(AssignOp::NullishAssign)
                } else {
                    tok!("??")
                }
            }
            // `a?.5:b` is a conditional.
            Some('.') if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) => {
                self.bump();
                tok!("?.")
            }
            _ => tok!('?'),
        }
    }

    fn read_regexp(&mut self) -> LexResult<Token> {
        debug_assert_eq!(self.cur(), Some('/'));
        let start = self.cur_pos();
        self.bump();

        let content_start = self.cur_pos();
        let mut escaped = false;
        let mut in_class = false;

        loop {
            let ch = match self.cur() {
                Some(ch) => ch,
                None => return self.error(start, SyntaxError::UnterminatedRegExp),
            };
            if is_line_break(ch) {
                // Regex literal cannot span multiple lines
                return self.error(start, SyntaxError::UnterminatedRegExp);
            }

            if escaped {
                escaped = false;
            } else {
                match ch {
                    '[' => in_class = true,
                    ']' if in_class => in_class = false,
                    '/' if !in_class => break,
                    _ => {}
                }
                escaped = ch == '\\';
            }
            self.bump();
        }

        let exp = self.input.slice(content_start, self.cur_pos()).into();
        self.bump(); // '/'

        let flags_start = self.cur_pos();
        let mut seen = String::with_capacity(8);
        while let Some(ch) = self.cur() {
            if is_valid_regex_flag(ch) {
                if seen.contains(ch) {
                    return self.error(flags_start, SyntaxError::DuplicateRegExpFlags);
                }
            } else if is_ident_part(ch) || ch == '\\' {
                return self.error(flags_start, SyntaxError::MalformedRegExpFlags);
            } else {
                break;
            }
            seen.push(ch);
            self.bump();
        }

        Ok(Token::Regex {
            exp,
            flags: seen.into(),
        })
    }

    /// Reads after a '`' or '}' up to and including the next '${' or '`'.
    fn read_template_chunk(&mut self) -> LexResult<Token> {
        let start = self.cur_pos();

        loop {
            match self.cur() {
                None => return self.error(start, SyntaxError::UnterminatedTpl),
                Some('`') => {
                    let raw = self.input.slice(start, self.cur_pos()).into();
                    self.bump();
                    return Ok(Token::Template { raw, tail: true });
                }
                Some('$') if self.peek() == Some('{') => {
                    let raw = self.input.slice(start, self.cur_pos()).into();
                    self.bump();
                    self.bump();
                    return Ok(Token::Template { raw, tail: false });
                }
                Some('\\') => {
                    self.bump();
                    self.bump();
                }
                Some(_) => self.bump(),
            }
        }
    }

    /// See https://tc39.github.io/ecma262/#sec-literals-string-literals
    fn read_string(&mut self, quote: char) -> LexResult<Token> {
        debug_assert!(quote == '\'' || quote == '"');
        let start = self.cur_pos();
        self.bump(); // ' or "

        let mut out = String::new();
        let mut chunk_start = self.cur_pos();

        loop {
            let ch = match self.cur() {
                Some(ch) => ch,
                None => return self.error(start, SyntaxError::UnterminatedStrLit),
            };
            if ch == quote {
                break;
            }
            if ch == '\\' {
                out.push_str(self.input.slice(chunk_start, self.cur_pos()));
                if let Some(c) = self.read_escaped_char()? {
                    out.push(c);
                }
                chunk_start = self.cur_pos();
            } else if ch == char_literals::LINE_FEED || ch == char_literals::CARRIAGE_RETURN {
                return self.error(start, SyntaxError::UnterminatedStrLit);
            } else {
                self.bump();
            }
        }

        out.push_str(self.input.slice(chunk_start, self.cur_pos()));
        self.bump(); // ' or "

        let raw = self.input.slice(start, self.cur_pos());
        Ok(Token::Str {
            value: out.into(),
            raw: raw.into(),
        })
    }

    /// Used to read escaped characters. Returns `None` for line
    /// continuations.
    fn read_escaped_char(&mut self) -> LexResult<Option<char>> {
        debug_assert_eq!(self.cur(), Some('\\'));
        let start = self.cur_pos();
        self.bump(); // '\'

        let ch = match self.cur() {
            Some(c) => c,
            None => return self.error(start, SyntaxError::InvalidEscape),
        };
        self.bump();

        let c = match ch {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'b' => '\u{0008}',
            'v' => '\u{000b}',
            'f' => '\u{000c}',
            'x' => return self.read_hex_char(start, 2).map(Some),
            'u' => return self.read_unicode_escape(start).map(Some),
            char_literals::CARRIAGE_RETURN => {
                self.eat(b'\n');
                return Ok(None);
            }
            char_literals::LINE_FEED
            | char_literals::LINE_SEPARATOR
            | char_literals::PARAGRAPH_SEPARATOR => return Ok(None),
            '0'..='7' => {
                let mut value = ch as u32 - '0' as u32;
                // Up to three octal digits, the whole value staying below 256.
                for _ in 0..2 {
                    match self.cur().and_then(|c| c.to_digit(8)) {
                        Some(v) if value * 8 + v <= 0xff => {
                            value = value * 8 + v;
                            self.bump();
                        }
                        _ => break,
                    }
                }
                match std::char::from_u32(value) {
                    Some(c) => c,
                    None => return self.error(start, SyntaxError::InvalidEscape),
                }
            }
            c => c,
        };

        Ok(Some(c))
    }

    fn read_hex_char(&mut self, start: BytePos, len: usize) -> LexResult<char> {
        let mut value = 0u32;
        for _ in 0..len {
            match self.cur().and_then(|c| c.to_digit(16)) {
                Some(d) => {
                    value = value * 16 + d;
                    self.bump();
                }
                None => return self.error(start, SyntaxError::InvalidEscape),
            }
        }
        match std::char::from_u32(value) {
            Some(c) => Ok(c),
            None => self.error(start, SyntaxError::InvalidEscape),
        }
    }

    /// Reads the part after `\u`.
    fn read_unicode_escape(&mut self, start: BytePos) -> LexResult<char> {
        if !self.eat(b'{') {
            return self.read_hex_char(start, 4);
        }

        let mut value = 0u32;
        let mut digits = 0;
        while let Some(d) = self.cur().and_then(|c| c.to_digit(16)) {
            value = value.saturating_mul(16).saturating_add(d);
            digits += 1;
            self.bump();
        }
        if digits == 0 || !self.eat(b'}') || value > 0x0010_FFFF {
            return self.error(start, SyntaxError::InvalidCodePoint);
        }
        match std::char::from_u32(value) {
            Some(c) => Ok(c),
            None => self.error(start, SyntaxError::InvalidCodePoint),
        }
    }

    /// Read an identifier, decoding `\u` escapes.
    fn read_word(&mut self) -> LexResult<String> {
        let start = self.cur_pos();
        let mut word = String::new();

        while let Some(ch) = self.cur() {
            if is_ident_part(ch) {
                self.bump();
                word.push(ch);
            } else if ch == '\\' {
                let esc_start = self.cur_pos();
                self.bump(); // '\'
                if !self.eat(b'u') {
                    return self.error(esc_start, SyntaxError::InvalidEscape);
                }
                let c = self.read_unicode_escape(esc_start)?;
                let valid = if word.is_empty() {
                    is_ident_start(c)
                } else {
                    is_ident_part(c)
                };
                if !valid {
                    return self.error(esc_start, SyntaxError::InvalidEscape);
                }
                word.push(c);
            } else {
                break;
            }
        }

        if word.is_empty() {
            return self.error(start, SyntaxError::ExpectedIdent);
        }
        Ok(word)
    }

    fn read_ident_or_keyword(&mut self) -> LexResult<Token> {
        let word = self.read_word()?;
        Ok(Token::Word(Word::from(&*word)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Keyword;
    use global_common::Span;
    use pretty_assertions::assert_eq;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::new(src).map(|t| t.token).collect()
    }

    fn ident(s: &str) -> Token {
        Token::Word(Word::Ident(s.into()))
    }

    #[test]
    fn punctuation_and_words() {
        assert_eq!(
            tokens("let x = a?.b ?? c;"),
            vec![
                ident("let"),
                ident("x"),
                tok!('='),
                ident("a"),
                tok!("?."),
                ident("b"),
                tok!("??"),
                ident("c"),
                tok!(';'),
            ]
        );
    }

    #[test]
    fn keywords_are_recognized() {
        assert_eq!(
            tokens("function typeof"),
            vec![
                Token::Word(Word::Keyword(Keyword::Function)),
                Token::Word(Word::Keyword(Keyword::TypeOf)),
            ]
        );
    }

    #[test]
    fn greater_than_is_never_combined() {
        assert_eq!(tokens("a >> b"), vec![ident("a"), tok!('>'), tok!('>'), ident("b")]);
    }

    #[test]
    fn rescan_greater_combines() {
        let mut lexer = Lexer::new("a >>>= b");
        lexer.next();
        let gt = lexer.next().map(|t| t.span.lo).unwrap();
        let t = lexer.rescan(gt, false, |l| l.rescan_greater());
        assert_eq!(t.token, Token::AssignOp(AssignOp::ZeroFillRShiftAssign));
        assert_eq!(t.span, Span::new(BytePos(2), BytePos(6)));
        assert_eq!(lexer.next().map(|t| t.token), Some(ident("b")));
    }

    #[test]
    fn exact_object_braces() {
        assert_eq!(
            tokens("{| a |}"),
            vec![Token::LBraceBar, ident("a"), Token::BarRBrace]
        );
        assert_eq!(tokens("{||}"), vec![Token::LBraceBar, Token::BarRBrace]);
        assert_eq!(tokens("a || b"), vec![ident("a"), tok!("||"), ident("b")]);
    }

    #[test]
    fn strings_keep_raw() {
        assert_eq!(
            tokens(r#"'a\'b' "\x41""#),
            vec![
                Token::Str {
                    value: "a'b".into(),
                    raw: r"'a\'b'".into(),
                },
                Token::Str {
                    value: "A".into(),
                    raw: r#""\x41""#.into(),
                },
            ]
        );
    }

    #[test]
    fn template_chunks() {
        let mut lexer = Lexer::new("`a${b}c`");
        assert_eq!(
            lexer.next().map(|t| t.token),
            Some(Token::Template {
                raw: "a".into(),
                tail: false,
            })
        );
        assert_eq!(lexer.next().map(|t| t.token), Some(ident("b")));
        let close = lexer.next().map(|t| t.span.lo).unwrap();
        let t = lexer.rescan(close, false, |l| l.rescan_template_continuation());
        assert_eq!(
            t.token,
            Token::Template {
                raw: "c".into(),
                tail: true,
            }
        );
    }

    #[test]
    fn regex_rescan() {
        let mut lexer = Lexer::new("/a[/]b/gi.test");
        let slash = lexer.next().map(|t| t.span.lo).unwrap();
        let t = lexer.rescan(slash, false, |l| l.rescan_slash());
        assert_eq!(
            t.token,
            Token::Regex {
                exp: "a[/]b".into(),
                flags: "gi".into(),
            }
        );
        assert_eq!(lexer.next().map(|t| t.token), Some(tok!('.')));
    }

    #[test]
    fn comments_are_collected_and_forgotten_on_reset() {
        let mut lexer = Lexer::new("a // one\n/* two */ b");
        let a = lexer.next().unwrap();
        let b = lexer.next().unwrap();
        assert!(b.had_line_break);
        assert_eq!(lexer.comments.borrow().len(), 2);

        lexer.reset_to(a.span.hi);
        assert!(lexer.comments.borrow().is_empty());
        assert_eq!(lexer.next().map(|t| t.token), Some(ident("b")));
        assert_eq!(lexer.take_comments().len(), 2);
    }

    #[test]
    fn shebang() {
        assert_eq!(
            tokens("#!/usr/bin/env node\nx"),
            vec![Token::Shebang("/usr/bin/env node".into()), ident("x")]
        );
    }

    #[test]
    fn unicode_identifiers() {
        assert_eq!(tokens("café \\u0061b"), vec![ident("café"), ident("ab")]);
    }
}
