//! Parser for JavaScript with JSX and Flow type annotations.
//!
//! ```
//! use parser::{parse, Syntax};
//!
//! let parsed = parse("// @flow\ntype A = ?string;", Syntax::default()).unwrap();
//! assert_eq!(parsed.program.body.len(), 1);
//! assert_eq!(parsed.comments.len(), 1);
//! ```
#![deny(unreachable_patterns)]

pub use self::parser::{PResult, Parser};
use ast::Program;
use global_common::Comments;

#[macro_use]
mod macros;
mod context;
pub mod error;
pub mod lexer;
mod parser;
pub mod token;

/// The one syntax configuration every caller shares: module source, JSX and
/// Flow enabled, ES2020 expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub jsx: bool,
    pub flow: bool,
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax {
            jsx: true,
            flow: true,
        }
    }
}

/// A program together with the comments of its source.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProgram {
    pub program: Program,
    pub comments: Comments,
}

/// Parses `src` as a module.
pub fn parse(src: &str, syntax: Syntax) -> PResult<ParsedProgram> {
    let mut parser = Parser::new(src, syntax);
    let program = parser.parse_program()?;
    let comments = Comments::new(parser.take_comments());
    tracing::trace!(
        items = program.body.len(),
        comments = comments.len(),
        "parsed program"
    );
    Ok(ParsedProgram { program, comments })
}
