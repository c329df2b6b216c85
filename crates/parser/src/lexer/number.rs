//! Lexer methods related to reading numbers.
//!
//!
//! See https://tc39.github.io/ecma262/#sec-literals-numeric-literals
use super::{util::is_ident_start, LexResult, Lexer};
use crate::{error::SyntaxError, token::Token};
use global_common::Input;

impl Lexer<'_> {
    /// Reads an integer, octal integer, or floating-point number.
    pub(super) fn read_number(&mut self, starts_with_dot: bool) -> LexResult<Token> {
        debug_assert!(self.cur().is_some());
        let start = self.cur_pos();

        if starts_with_dot {
            debug_assert_eq!(self.cur(), Some('.'));
            self.bump();
            self.read_digits(10)?;
        } else {
            let legacy_octal = self.cur() == Some('0') && matches!(self.peek(), Some('0'..='9'));
            self.read_digits(10)?;

            if legacy_octal {
                self.ensure_not_ident(start)?;
                let raw = self.input.slice(start, self.cur_pos());
                let value = if raw.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
                    u64::from_str_radix(raw, 8).map(|v| v as f64)
                } else {
                    u64::from_str_radix(raw, 10).map(|v| v as f64)
                };
                return match value {
                    Ok(value) => Ok(Token::Num {
                        value,
                        raw: raw.into(),
                    }),
                    Err(_) => self.error(start, SyntaxError::InvalidNumber),
                };
            }

            if self.eat(b'n') {
                self.ensure_not_ident(start)?;
                let raw = self.input.slice(start, self.cur_pos());
                return Ok(Token::BigInt { raw: raw.into() });
            }

            if self.eat(b'.') {
                self.read_digits(10)?;
            }
        }

        if matches!(self.cur(), Some('e') | Some('E')) {
            self.bump();
            if matches!(self.cur(), Some('+') | Some('-')) {
                self.bump();
            }
            if self.read_digits(10)? == 0 {
                return self.error(start, SyntaxError::InvalidNumber);
            }
        }

        self.ensure_not_ident(start)?;

        let raw = self.input.slice(start, self.cur_pos());
        let value = if raw.contains('_') {
            raw.replace('_', "").parse::<f64>()
        } else {
            raw.parse::<f64>()
        };

        match value {
            Ok(value) => Ok(Token::Num {
                value,
                raw: raw.into(),
            }),
            Err(_) => self.error(start, SyntaxError::InvalidNumber),
        }
    }

    /// Reads `0x`, `0o` and `0b` literals.
    pub(super) fn read_radix_number(&mut self, radix: u32) -> LexResult<Token> {
        debug_assert!(radix == 2 || radix == 8 || radix == 16);
        debug_assert_eq!(self.cur(), Some('0'));
        let start = self.cur_pos();

        self.bump(); // 0
        self.bump(); // x, o, b

        let digits_start = self.cur_pos();
        if self.read_digits(radix)? == 0 {
            return self.error(start, SyntaxError::InvalidNumber);
        }
        let digits_end = self.cur_pos();

        if self.eat(b'n') {
            self.ensure_not_ident(start)?;
            let raw = self.input.slice(start, self.cur_pos());
            return Ok(Token::BigInt { raw: raw.into() });
        }

        self.ensure_not_ident(start)?;

        let value = self
            .input
            .slice(digits_start, digits_end)
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0f64, |acc, d| acc * radix as f64 + d as f64);

        let raw = self.input.slice(start, self.cur_pos());
        Ok(Token::Num {
            value,
            raw: raw.into(),
        })
    }

    /// Consumes digits of `radix` and numeric separators, returning the
    /// number of digits read.
    fn read_digits(&mut self, radix: u32) -> LexResult<usize> {
        let mut count = 0;
        let mut prev_was_separator = false;

        while let Some(c) = self.cur() {
            if c == '_' {
                if count == 0 || prev_was_separator {
                    let start = self.cur_pos();
                    return self.error(
                        start,
                        SyntaxError::NumericSeparatorIsAllowedOnlyBetweenTwoDigits,
                    );
                }
                prev_was_separator = true;
                self.bump();
                continue;
            }
            if c.is_digit(radix) {
                count += 1;
                prev_was_separator = false;
                self.bump();
            } else {
                break;
            }
        }

        if prev_was_separator {
            let start = self.cur_pos();
            return self.error(
                start,
                SyntaxError::NumericSeparatorIsAllowedOnlyBetweenTwoDigits,
            );
        }

        Ok(count)
    }

    fn ensure_not_ident(&self, start: global_common::BytePos) -> LexResult<()> {
        match self.cur() {
            Some(c) if is_ident_start(c) || c.is_ascii_digit() => {
                self.error(start, SyntaxError::IdentAfterNum)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{lexer::Lexer, token::Token};

    fn num(s: &str) -> (f64, String) {
        let mut lexer = Lexer::new(s);
        match lexer.next().map(|t| t.token) {
            Some(Token::Num { value, raw }) => (value, raw.to_string()),
            other => panic!("expected a number, got {:?}", other),
        }
    }

    #[test]
    fn decimal() {
        assert_eq!(num("42"), (42.0, "42".into()));
        assert_eq!(num("4.5e3"), (4500.0, "4.5e3".into()));
        assert_eq!(num(".5"), (0.5, ".5".into()));
        assert_eq!(num("5."), (5.0, "5.".into()));
    }

    #[test]
    fn radix() {
        assert_eq!(num("0xff"), (255.0, "0xff".into()));
        assert_eq!(num("0b101"), (5.0, "0b101".into()));
        assert_eq!(num("0o17"), (15.0, "0o17".into()));
    }

    #[test]
    fn separators_keep_raw() {
        assert_eq!(num("1_000_000"), (1_000_000.0, "1_000_000".into()));
    }

    #[test]
    fn legacy_octal() {
        assert_eq!(num("017").0, 15.0);
        assert_eq!(num("019").0, 19.0);
    }

    #[test]
    fn bigint() {
        let mut lexer = Lexer::new("10n");
        assert_eq!(
            lexer.next().map(|t| t.token),
            Some(Token::BigInt { raw: "10n".into() })
        );
    }

    #[test]
    fn ident_after_number_is_an_error() {
        let mut lexer = Lexer::new("3in");
        assert!(matches!(
            lexer.next().map(|t| t.token),
            Some(Token::Error(..))
        ));
    }
}
