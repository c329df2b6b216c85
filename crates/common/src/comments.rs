use crate::pos::{BytePos, Span, Spanned};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub kind: CommentKind,
    /// Covers the delimiters.
    pub span: Span,
    /// Text between the delimiters.
    pub text: String,
}

impl Spanned for Comment {
    fn span(&self) -> Span {
        self.span
    }
}

/// Every comment of a source file, ordered by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comments {
    list: Vec<Comment>,
}

impl Comments {
    /// `list` is sorted by start position before it is stored.
    pub fn new(mut list: Vec<Comment>) -> Self {
        list.sort_by_key(|c| c.span.lo);
        list.dedup_by_key(|c| c.span.lo);
        Comments { list }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[Comment] {
        &self.list
    }

    /// Comments which lie entirely within `lo..hi`.
    pub fn between(&self, lo: BytePos, hi: BytePos) -> &[Comment] {
        let start = self.list.partition_point(|c| c.span.lo < lo);
        let end = self.list.partition_point(|c| c.span.hi <= hi);
        if end <= start {
            return &[];
        }
        &self.list[start..end]
    }

    /// Returns true if any comment lies within `span`.
    pub fn has_within(&self, span: Span) -> bool {
        !self.between(span.lo, span.hi).is_empty()
    }

    /// Index of the first comment starting at or after `pos`.
    pub fn first_from(&self, pos: BytePos) -> usize {
        self.list.partition_point(|c| c.span.lo < pos)
    }
}

impl<'a> IntoIterator for &'a Comments {
    type IntoIter = std::slice::Iter<'a, Comment>;
    type Item = &'a Comment;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(lo: u32, hi: u32) -> Comment {
        Comment {
            kind: CommentKind::Block,
            span: Span::new(BytePos(lo), BytePos(hi)),
            text: String::new(),
        }
    }

    #[test]
    fn between_selects_enclosed_comments() {
        let c = Comments::new(vec![comment(10, 12), comment(0, 4), comment(20, 30)]);
        assert_eq!(c.between(BytePos(0), BytePos(12)).len(), 2);
        assert_eq!(c.between(BytePos(5), BytePos(25)).len(), 1);
        assert!(c.between(BytePos(13), BytePos(19)).is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let c = Comments::new(vec![comment(0, 4), comment(0, 4)]);
        assert_eq!(c.len(), 1);
    }
}
