use crate::pos::{BytePos, Pos};

/// Implementation of [Input] over an in-memory source string.
#[derive(Clone)]
pub struct StringInput<'a> {
    last_pos: BytePos,
    /// Current cursor, a byte offset into `orig`.
    pos: usize,
    orig: &'a str,
}

impl<'a> StringInput<'a> {
    pub fn new(src: &'a str) -> Self {
        StringInput {
            last_pos: BytePos(0),
            pos: 0,
            orig: src,
        }
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.orig
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.orig[self.pos..]
    }
}

impl<'a> Input for StringInput<'a> {
    #[inline]
    fn cur(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    #[inline]
    fn peek_ahead(&self) -> Option<char> {
        self.rest().chars().nth(2)
    }

    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.cur() {
            self.pos += c.len_utf8();
            self.last_pos = BytePos::from_usize(self.pos);
        }
    }

    #[inline]
    fn is_at_start(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    fn cur_pos(&self) -> BytePos {
        BytePos::from_usize(self.pos)
    }

    #[inline]
    fn last_pos(&self) -> BytePos {
        self.last_pos
    }

    #[inline]
    fn slice(&self, start: BytePos, end: BytePos) -> &str {
        &self.orig[start.to_usize()..end.to_usize()]
    }

    fn uncons_while<F>(&mut self, mut pred: F) -> &str
    where
        F: FnMut(char) -> bool,
    {
        let s = self.rest();
        let mut last = 0;

        for (i, c) in s.char_indices() {
            if pred(c) {
                last = i + c.len_utf8();
            } else {
                break;
            }
        }

        self.pos += last;
        self.last_pos = BytePos::from_usize(self.pos);

        &s[..last]
    }

    #[inline]
    fn reset_to(&mut self, to: BytePos) {
        self.pos = to.to_usize().min(self.orig.len());
        self.last_pos = to;
    }

    #[inline]
    fn is_byte(&self, c: u8) -> bool {
        self.rest().as_bytes().first() == Some(&c)
    }
}

pub trait Input: Clone {
    fn cur(&self) -> Option<char>;
    fn peek(&self) -> Option<char>;
    fn peek_ahead(&self) -> Option<char>;
    fn bump(&mut self);

    fn is_at_start(&self) -> bool;

    fn cur_pos(&self) -> BytePos;

    fn last_pos(&self) -> BytePos;

    fn slice(&self, start: BytePos, end: BytePos) -> &str;

    /// Takes items from stream, testing each one with predicate. returns the
    /// range of items which passed predicate.
    fn uncons_while<F>(&mut self, f: F) -> &str
    where
        F: FnMut(char) -> bool;

    /// Moves the cursor to `to`, which must be a char boundary.
    fn reset_to(&mut self, to: BytePos);

    /// Implementors can override the method to make it faster.
    #[inline]
    fn is_byte(&self, c: u8) -> bool {
        match self.cur() {
            Some(ch) => ch == c as char,
            _ => false,
        }
    }

    /// Implementors can override the method to make it faster.
    #[inline]
    fn eat_byte(&mut self, c: u8) -> bool {
        if self.is_byte(c) {
            self.bump();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_absolute_offsets() {
        let mut i = StringInput::new("ab→cd");
        i.bump();
        i.bump();
        i.bump();
        assert_eq!(i.cur(), Some('c'));
        let pos = i.cur_pos();
        assert_eq!(pos, BytePos(5));

        i.reset_to(BytePos(1));
        assert_eq!(i.cur(), Some('b'));
        i.reset_to(pos);
        assert_eq!(i.cur(), Some('c'));
        assert_eq!(i.cur_pos(), BytePos(5));
    }

    #[test]
    fn uncons_while_advances() {
        let mut i = StringInput::new("abc12");
        assert_eq!(i.uncons_while(|c| c.is_ascii_alphabetic()), "abc");
        assert_eq!(i.cur(), Some('1'));
        assert_eq!(i.last_pos(), BytePos(3));
    }
}
