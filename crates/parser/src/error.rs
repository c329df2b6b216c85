use global_common::{Span, Spanned};
use std::{borrow::Cow, fmt};

/// A syntax error, boxed so that `PResult` stays one word wide on the happy
/// path.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    error: Box<(Span, SyntaxError)>,
}

impl Error {
    #[cold]
    pub(crate) fn new(span: Span, error: SyntaxError) -> Self {
        Self {
            error: Box::new((span, error)),
        }
    }

    pub fn kind(&self) -> &SyntaxError {
        &self.error.1
    }

    pub fn into_kind(self) -> SyntaxError {
        self.error.1
    }
}

impl Spanned for Error {
    fn span(&self) -> Span {
        self.error.0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error.1.msg())
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SyntaxError {
    Eof,
    Unexpected {
        got: String,
        expected: &'static str,
    },
    UnexpectedChar(char),

    UnterminatedBlockComment,
    UnterminatedStrLit,
    UnterminatedTpl,
    UnterminatedRegExp,
    UnterminatedJSXContents,
    InvalidNumber,
    NumericSeparatorIsAllowedOnlyBetweenTwoDigits,
    IdentAfterNum,
    InvalidEscape,
    InvalidCodePoint,
    DuplicateRegExpFlags,
    MalformedRegExpFlags,
    UnexpectedDigitAfterHash,

    InvalidAssignTarget,
    InvalidPat,
    LineBreakBeforeArrow,
    LineBreakInThrow,
    ReturnNotAllowed,
    TooManyRestParams,
    RestPatInDeclaration,
    CommaAfterRestElement,
    ExpectedIdent,
    MissingDeclarator,

    JSXExpectedClosingTag { tag: String },
    JSXExpectedClosingFragment,
    InvalidLeadingDecorator,

    /// Flow `declare` was followed by something that cannot be declared.
    InvalidDeclare,
    InvalidTypeParam,
    InexactInExactObjectType,
    InexactNotLast,
    InvalidInternalSlot,
}

impl SyntaxError {
    #[cold]
    pub fn msg(&self) -> Cow<'static, str> {
        match self {
            SyntaxError::Eof => "Unexpected eof".into(),
            SyntaxError::Unexpected { got, expected } => {
                format!("Unexpected token `{}`. Expected {}", got, expected).into()
            }
            SyntaxError::UnexpectedChar(c) => format!("Unexpected character {:?}", c).into(),

            SyntaxError::UnterminatedBlockComment => "Unterminated block comment".into(),
            SyntaxError::UnterminatedStrLit => "Unterminated string constant".into(),
            SyntaxError::UnterminatedTpl => "Unterminated template".into(),
            SyntaxError::UnterminatedRegExp => "Unterminated regexp literal".into(),
            SyntaxError::UnterminatedJSXContents => "Unterminated JSX contents".into(),
            SyntaxError::InvalidNumber => "Invalid number".into(),
            SyntaxError::NumericSeparatorIsAllowedOnlyBetweenTwoDigits => {
                "A numeric separator is only allowed between two digits".into()
            }
            SyntaxError::IdentAfterNum => {
                "Identifier cannot follow number without a separator".into()
            }
            SyntaxError::InvalidEscape => "Invalid escape sequence".into(),
            SyntaxError::InvalidCodePoint => "Invalid code point".into(),
            SyntaxError::DuplicateRegExpFlags => "Duplicate regular expression flag".into(),
            SyntaxError::MalformedRegExpFlags => "Invalid regular expression flag".into(),
            SyntaxError::UnexpectedDigitAfterHash => {
                "Unexpected digit after hash token".into()
            }

            SyntaxError::InvalidAssignTarget => "Invalid assignment target".into(),
            SyntaxError::InvalidPat => "Not a pattern".into(),
            SyntaxError::LineBreakBeforeArrow => "Unexpected line break before `=>`".into(),
            SyntaxError::LineBreakInThrow => "Illegal newline after throw".into(),
            SyntaxError::ReturnNotAllowed => "Return statement is not allowed here".into(),
            SyntaxError::TooManyRestParams => "Rest element must be final element".into(),
            SyntaxError::RestPatInDeclaration => {
                "Rest element cannot have a default value".into()
            }
            SyntaxError::CommaAfterRestElement => {
                "Trailing comma isn't permitted after a rest element".into()
            }
            SyntaxError::ExpectedIdent => "Expected an identifier".into(),
            SyntaxError::MissingDeclarator => "Missing initializer in declaration".into(),

            SyntaxError::JSXExpectedClosingTag { tag } => {
                format!("Expected corresponding JSX closing tag for <{}>", tag).into()
            }
            SyntaxError::JSXExpectedClosingFragment => {
                "Expected corresponding closing tag for JSX fragment".into()
            }
            SyntaxError::InvalidLeadingDecorator => "Decorators are not supported".into(),

            SyntaxError::InvalidDeclare => "Unexpected token after `declare`".into(),
            SyntaxError::InvalidTypeParam => "Invalid type parameter".into(),
            SyntaxError::InexactInExactObjectType => {
                "Explicit inexact syntax cannot appear in an exact object type".into()
            }
            SyntaxError::InexactNotLast => {
                "Explicit inexact syntax must appear at the end of an object type".into()
            }
            SyntaxError::InvalidInternalSlot => "Invalid internal slot".into(),
        }
    }
}
