use super::{util::is_ident_part, LexResult, Lexer};
use crate::{
    error::SyntaxError,
    token::{Token, Word},
};
use global_common::Input;

impl Lexer<'_> {
    /// Reads one child position inside an element: `{`, `<`, or the text up
    /// to either of them.
    pub(crate) fn scan_jsx_child(&mut self) -> LexResult<Token> {
        let start = self.cur_pos();

        match self.cur() {
            None => self.error(start, SyntaxError::UnterminatedJSXContents),
            Some('{') => {
                self.bump();
                Ok(tok!('{'))
            }
            Some('<') => {
                self.bump();
                Ok(tok!('<'))
            }
            Some(_) => {
                let raw = self.input.uncons_while(|c| c != '{' && c != '<');
                Ok(Token::JSXText { raw: raw.into() })
            }
        }
    }

    /// An identifier read again as a JSX name, which may contain `-`.
    pub(crate) fn rescan_jsx_identifier(&mut self) -> LexResult<Token> {
        let start = self.cur_pos();
        let name = self.input.uncons_while(|c| c == '-' || is_ident_part(c));
        if name.is_empty() {
            return self.error(start, SyntaxError::ExpectedIdent);
        }
        Ok(Token::Word(Word::Ident(name.into())))
    }

    /// A string read again as a JSX attribute value: no escapes, line breaks
    /// allowed.
    pub(crate) fn rescan_jsx_string(&mut self) -> LexResult<Token> {
        let start = self.cur_pos();
        let quote = match self.cur() {
            Some(c @ '"') | Some(c @ '\'') => c,
            _ => return self.error(start, SyntaxError::UnterminatedStrLit),
        };
        self.bump();

        let value = self.input.uncons_while(|c| c != quote).to_string();
        if !self.eat(quote as u8) {
            return self.error(start, SyntaxError::UnterminatedStrLit);
        }

        let raw = self.input.slice(start, self.cur_pos());
        Ok(Token::Str {
            value: value.into(),
            raw: raw.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use global_common::{BytePos, Span};

    #[test]
    fn child_text_runs_to_brace_or_tag() {
        let mut lexer = Lexer::new("<a> hi // there {x}</a>");
        let t = lexer.rescan(BytePos(3), false, |l| l.scan_jsx_child());
        assert_eq!(
            t.token,
            Token::JSXText {
                raw: " hi // there ".into()
            }
        );
        assert_eq!(t.span, Span::new(BytePos(3), BytePos(16)));
        assert!(lexer.take_comments().is_empty());
    }

    #[test]
    fn dashed_names() {
        let mut lexer = Lexer::new("data-id=\"x\"");
        let t = lexer.rescan(BytePos(0), false, |l| l.rescan_jsx_identifier());
        assert_eq!(t.token, Token::Word(Word::Ident("data-id".into())));
    }

    #[test]
    fn attribute_strings_have_no_escapes() {
        let mut lexer = Lexer::new("\"a\\n\nb\"");
        let t = lexer.rescan(BytePos(0), false, |l| l.rescan_jsx_string());
        assert_eq!(
            t.token,
            Token::Str {
                value: "a\\n\nb".into(),
                raw: "\"a\\n\nb\"".into(),
            }
        );
    }
}
