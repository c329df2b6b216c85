//! Positions, atoms and comment trivia shared by every crate of the
//! workspace.

pub use self::{
    comments::{Comment, CommentKind, Comments},
    input::{Input, StringInput},
    pos::{BytePos, Pos, Span, Spanned, DUMMY_SP},
    source::{LineCol, LineIndex},
};

pub mod comments;
pub mod input;
pub mod pos;
pub mod source;

/// Interned identifier and string contents.
pub type JsWord = string_cache::DefaultAtom;
