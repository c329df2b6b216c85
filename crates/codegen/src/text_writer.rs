use super::Result;
use unicode_width::UnicodeWidthStr;

/// Collects emitted code, tracking indentation and the display width of the
/// line being written.
///
/// -----
///
/// Ported from `createTextWriter` of the typescript compiler.
///
/// https://github.com/Microsoft/TypeScript/blob/45eaf42006/src/compiler/utilities.ts#L2548
pub struct JsWriter {
    indent: usize,
    indent_unit: String,
    line_start: bool,
    line_count: usize,
    line_width: usize,
    new_line: &'static str,
    out: String,
}

impl JsWriter {
    pub fn new(tab_width: u8, new_line: &'static str) -> Self {
        JsWriter {
            indent: 0,
            indent_unit: " ".repeat(usize::from(tab_width)),
            line_start: true,
            line_count: 0,
            line_width: 0,
            new_line,
            out: String::new(),
        }
    }

    /// Display width of the current line.
    pub fn line_width(&self) -> usize {
        self.line_width
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn write_indent_string(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(&self.indent_unit);
            self.line_width += self.indent_unit.len();
        }
    }

    fn raw_write(&mut self, data: &str) {
        self.out.push_str(data);
        match data.rfind('\n') {
            Some(last) => {
                self.line_count += data.matches('\n').count();
                self.line_width = data[last + 1..].width();
            }
            None => self.line_width += data.width(),
        }
    }

    fn write(&mut self, data: &str) {
        if !data.is_empty() {
            if self.line_start {
                self.write_indent_string();
                self.line_start = false;
            }

            self.raw_write(data);
        }
    }
}

impl JsWriter {
    pub(super) fn increase_indent(&mut self) -> Result {
        self.indent += 1;
        Ok(())
    }

    pub(super) fn decrease_indent(&mut self) -> Result {
        self.indent = self.indent.saturating_sub(1);
        Ok(())
    }

    pub(super) fn write_space(&mut self) -> Result {
        self.write(" ");
        Ok(())
    }

    pub(super) fn write_keyword(&mut self, s: &'static str) -> Result {
        self.write(s);
        Ok(())
    }

    pub(super) fn write_operator(&mut self, s: &str) -> Result {
        self.write(s);
        Ok(())
    }

    pub(super) fn write_punct(&mut self, s: &'static str) -> Result {
        self.write(s);
        Ok(())
    }

    /// Identifiers, literals and other text taken from the tree. May span
    /// lines.
    pub(super) fn write_str(&mut self, s: &str) -> Result {
        self.write(s);
        Ok(())
    }

    pub(super) fn write_line(&mut self) -> Result {
        if !self.line_start {
            self.raw_write(self.new_line);
            self.line_width = 0;
            self.line_start = true;
        }

        Ok(())
    }

    /// Ends the current line and leaves one empty line.
    pub(super) fn write_empty_line(&mut self) -> Result {
        self.write_line()?;
        self.raw_write(self.new_line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_lazily() {
        let mut w = JsWriter::new(2, "\n");
        w.write_punct("{").unwrap();
        w.increase_indent().unwrap();
        w.write_line().unwrap();
        w.write_line().unwrap();
        w.write_str("a").unwrap();
        w.decrease_indent().unwrap();
        w.write_line().unwrap();
        w.write_punct("}").unwrap();
        assert_eq!(w.into_string(), "{\n  a\n}");
    }

    #[test]
    fn tracks_width_across_multiline_text() {
        let mut w = JsWriter::new(4, "\n");
        w.write_str("`a\nbcd`").unwrap();
        assert_eq!(w.line_width(), 4);
        assert_eq!(w.line_count(), 1);
        w.write_str("漢").unwrap();
        assert_eq!(w.line_width(), 6);
    }
}
