/// Printing style of an [Emitter](crate::Emitter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Terminate statements with `;`. When off, statements which would
    /// otherwise continue the previous line get a leading `;`.
    pub semicolons: bool,
    pub single_quote: bool,
    /// Spaces per indentation level.
    pub tab_width: u8,
    pub trailing_comma: TrailingComma,
    /// `{ a }` rather than `{a}`.
    pub bracket_spacing: bool,
    pub arrow_parens: ArrowParens,
    /// Lists which do not fit are broken one element per line. `0` disables
    /// width-driven breaking.
    pub print_width: usize,
    /// Print string literals exactly as they were written.
    pub preserve_quotes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailingComma {
    /// Wherever the syntax allows one.
    All,
    /// Array and object literals, patterns and import/export lists.
    Es5,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowParens {
    /// `x => x` for a lone plain parameter.
    Avoid,
    Always,
}

impl Config {
    /// Settings for snippets spliced into otherwise untouched source text:
    /// nothing is broken for width and strings keep their quotes.
    pub fn fragment(tab_width: u8) -> Self {
        Config {
            semicolons: true,
            single_quote: false,
            tab_width,
            trailing_comma: TrailingComma::None,
            bracket_spacing: true,
            arrow_parens: ArrowParens::Always,
            print_width: 0,
            preserve_quotes: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            semicolons: true,
            single_quote: false,
            tab_width: 4,
            trailing_comma: TrailingComma::Es5,
            bracket_spacing: true,
            arrow_parens: ArrowParens::Always,
            print_width: 80,
            preserve_quotes: false,
        }
    }
}
