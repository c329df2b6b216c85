use crate::pos::{BytePos, Pos};

/// Maps byte positions of one source file to lines and columns.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<BytePos>,
}

/// 1-based line, 1-based column counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

impl LineIndex {
    pub fn new(src: &str) -> Self {
        let mut line_starts = vec![BytePos(0)];
        for (i, b) in src.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(BytePos::from_usize(i + 1));
            }
        }
        LineIndex { line_starts }
    }

    /// 0-based line containing `pos`.
    pub fn line_of(&self, pos: BytePos) -> usize {
        self.line_starts.partition_point(|&start| start <= pos) - 1
    }

    pub fn line_start(&self, pos: BytePos) -> BytePos {
        self.line_starts[self.line_of(pos)]
    }

    pub fn line_col(&self, src: &str, pos: BytePos) -> LineCol {
        let line = self.line_of(pos);
        let start = self.line_starts[line].to_usize();
        let end = pos.to_usize().min(src.len());
        let col = src.get(start..end).map_or(0, |s| s.chars().count());
        LineCol {
            line: line + 1,
            col: col + 1,
        }
    }
}

/// Leading whitespace of the line containing `pos`.
pub fn indent_at(src: &str, pos: BytePos) -> &str {
    let pos = pos.to_usize().min(src.len());
    let start = src[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &src[start..];
    let len = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..len]
}

/// Returns true if `src[lo..hi]` contains a line break.
pub fn has_newline_between(src: &str, lo: BytePos, hi: BytePos) -> bool {
    src.get(lo.to_usize()..hi.to_usize())
        .map_or(false, |s| s.contains('\n'))
}

/// Returns true if `src[lo..hi]` contains an empty line.
pub fn has_blank_line_between(src: &str, lo: BytePos, hi: BytePos) -> bool {
    src.get(lo.to_usize()..hi.to_usize()).map_or(false, |s| {
        s.split('\n')
            .skip(1)
            .take(s.matches('\n').count().saturating_sub(1))
            .any(|l| l.trim().is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_counts_chars() {
        let src = "ab\n→x\n";
        let idx = LineIndex::new(src);
        assert_eq!(idx.line_col(src, BytePos(0)), LineCol { line: 1, col: 1 });
        assert_eq!(idx.line_col(src, BytePos(6)), LineCol { line: 2, col: 2 });
        assert_eq!(idx.line_start(BytePos(7)), BytePos(3));
    }

    #[test]
    fn indent_of_nested_line() {
        let src = "a\n    b;\n";
        assert_eq!(indent_at(src, BytePos(6)), "    ");
        assert_eq!(indent_at(src, BytePos(0)), "");
    }

    #[test]
    fn blank_lines() {
        let src = "a;\n\nb;\nc;";
        assert!(has_blank_line_between(src, BytePos(2), BytePos(4)));
        assert!(!has_blank_line_between(src, BytePos(6), BytePos(8)));
    }
}
