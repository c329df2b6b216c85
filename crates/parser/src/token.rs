use crate::error::Error;
use ast::{AssignOp, BinaryOp};
use global_common::{JsWord, Span, Spanned};
use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, PartialEq)]
pub enum Token {
    /// Identifier, keyword, "null", "true", "false".
    Word(Word),

    /// '=>'
    Arrow,
    /// '#'
    Hash,
    /// '@'
    At,
    /// '.'
    Dot,
    /// '...'
    DotDotDot,
    /// '!'
    Bang,

    /// '('
    LParen,
    /// ')'
    RParen,
    /// `[`
    LBracket,
    /// ']'
    RBracket,
    /// '{'
    LBrace,
    /// '}'
    RBrace,
    /// '{|', opens an exact object type
    LBraceBar,
    /// '|}'
    BarRBrace,

    /// ';'
    Semi,
    /// ','
    Comma,
    /// ':'
    Colon,

    /// A template chunk from a '`' or '}' up to the next '${' or closing '`'.
    Template {
        raw: JsWord,
        /// Ended with '`'.
        tail: bool,
    },

    BinOp(BinOpToken),
    AssignOp(AssignOp),

    /// '?'
    QuestionMark,
    /// '?.'
    QuestionDot,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `~`
    Tilde,

    /// String literal. Span of this token contains quote.
    Str {
        value: JsWord,
        raw: JsWord,
    },

    /// Regexp literal, only produced by a rescan.
    Regex {
        exp: JsWord,
        flags: JsWord,
    },

    Num {
        value: f64,
        raw: JsWord,
    },

    BigInt {
        raw: JsWord,
    },

    /// Text between JSX tags, only produced by a rescan.
    JSXText {
        raw: JsWord,
    },

    Shebang(JsWord),
    Error(Error),
}

impl Token {
    pub(crate) fn starts_expr(&self) -> bool {
        match self {
            Token::Word(w) => w.starts_expr(),
            Token::BinOp(o) => o.starts_expr(),

            Token::Bang
            | Token::LParen
            | Token::LBracket
            | Token::LBrace
            | Token::Hash
            | Token::PlusPlus
            | Token::MinusMinus
            | Token::Tilde
            | Token::Template { .. }
            | Token::Str { .. }
            | Token::Regex { .. }
            | Token::Num { .. }
            | Token::BigInt { .. }
            | Token::AssignOp(AssignOp::DivAssign) => true,

            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BinOpToken {
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `===`
    EqEqEq,
    /// `!==`
    NotEqEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`, only produced by a rescan
    GtEq,
    /// `<<`
    LShift,
    /// `>>`, only produced by a rescan
    RShift,
    /// `>>>`, only produced by a rescan
    ZeroFillRShift,

    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,

    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,

    /// `**`
    Exp,

    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,

    /// `??`
    NullishCoalescing,
}

impl BinOpToken {
    fn starts_expr(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Lt | Self::Div)
    }
}

impl From<BinOpToken> for BinaryOp {
    fn from(t: BinOpToken) -> Self {
        match t {
            BinOpToken::EqEq => BinaryOp::EqEq,
            BinOpToken::NotEq => BinaryOp::NotEq,
            BinOpToken::EqEqEq => BinaryOp::EqEqEq,
            BinOpToken::NotEqEq => BinaryOp::NotEqEq,
            BinOpToken::Lt => BinaryOp::Lt,
            BinOpToken::LtEq => BinaryOp::LtEq,
            BinOpToken::Gt => BinaryOp::Gt,
            BinOpToken::GtEq => BinaryOp::GtEq,
            BinOpToken::LShift => BinaryOp::LShift,
            BinOpToken::RShift => BinaryOp::RShift,
            BinOpToken::ZeroFillRShift => BinaryOp::ZeroFillRShift,
            BinOpToken::Add => BinaryOp::Add,
            BinOpToken::Sub => BinaryOp::Sub,
            BinOpToken::Mul => BinaryOp::Mul,
            BinOpToken::Div => BinaryOp::Div,
            BinOpToken::Mod => BinaryOp::Mod,
            BinOpToken::BitOr => BinaryOp::BitOr,
            BinOpToken::BitXor => BinaryOp::BitXor,
            BinOpToken::BitAnd => BinaryOp::BitAnd,
            BinOpToken::LogicalOr => BinaryOp::LogicalOr,
            BinOpToken::LogicalAnd => BinaryOp::LogicalAnd,
            BinOpToken::Exp => BinaryOp::Exp,
            BinOpToken::NullishCoalescing => BinaryOp::NullishCoalescing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenAndSpan {
    pub token: Token,
    /// Had a line break before this token?
    pub had_line_break: bool,
    pub span: Span,
}

impl Spanned for TokenAndSpan {
    #[inline(always)]
    fn span(&self) -> Span {
        self.span
    }
}

/// `await`, `yield`, `let`, `async`, `of`, `type` and the other contextual
/// keywords are plain identifiers; the parser checks them by name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Word {
    Keyword(Keyword),

    Null,
    True,
    False,

    Ident(JsWord),
}

impl Word {
    fn starts_expr(&self) -> bool {
        match self {
            Word::Keyword(k) => k.starts_expr(),
            _ => true,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Word::Keyword(k) => k.as_str(),
            Word::Null => "null",
            Word::True => "true",
            Word::False => "false",
            Word::Ident(w) => w,
        }
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        match s {
            "null" => Word::Null,
            "true" => Word::True,
            "false" => Word::False,
            _ => match Keyword::from_name(s) {
                Some(k) => Word::Keyword(k),
                None => Word::Ident(s.into()),
            },
        }
    }
}

impl From<Word> for JsWord {
    fn from(w: Word) -> Self {
        match w {
            Word::Ident(w) => w,
            w => JsWord::from(w.as_str()),
        }
    }
}

impl Debug for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_str(), f)
    }
}

/// Words which are reserved in every context of module code.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default_,
    Delete,
    Do,
    Else,
    Export,
    Extends,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    InstanceOf,
    New,
    Return,
    Super,
    Switch,
    This,
    Throw,
    Try,
    TypeOf,
    Var,
    Void,
    While,
    With,
}

impl Keyword {
    fn from_name(s: &str) -> Option<Self> {
        Some(match s {
            "break" => Keyword::Break,
            "case" => Keyword::Case,
            "catch" => Keyword::Catch,
            "class" => Keyword::Class,
            "const" => Keyword::Const,
            "continue" => Keyword::Continue,
            "debugger" => Keyword::Debugger,
            "default" => Keyword::Default_,
            "delete" => Keyword::Delete,
            "do" => Keyword::Do,
            "else" => Keyword::Else,
            "export" => Keyword::Export,
            "extends" => Keyword::Extends,
            "finally" => Keyword::Finally,
            "for" => Keyword::For,
            "function" => Keyword::Function,
            "if" => Keyword::If,
            "import" => Keyword::Import,
            "in" => Keyword::In,
            "instanceof" => Keyword::InstanceOf,
            "new" => Keyword::New,
            "return" => Keyword::Return,
            "super" => Keyword::Super,
            "switch" => Keyword::Switch,
            "this" => Keyword::This,
            "throw" => Keyword::Throw,
            "try" => Keyword::Try,
            "typeof" => Keyword::TypeOf,
            "var" => Keyword::Var,
            "void" => Keyword::Void,
            "while" => Keyword::While,
            "with" => Keyword::With,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Class => "class",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Debugger => "debugger",
            Keyword::Default_ => "default",
            Keyword::Delete => "delete",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Export => "export",
            Keyword::Extends => "extends",
            Keyword::Finally => "finally",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::In => "in",
            Keyword::InstanceOf => "instanceof",
            Keyword::New => "new",
            Keyword::Return => "return",
            Keyword::Super => "super",
            Keyword::Switch => "switch",
            Keyword::This => "this",
            Keyword::Throw => "throw",
            Keyword::Try => "try",
            Keyword::TypeOf => "typeof",
            Keyword::Var => "var",
            Keyword::Void => "void",
            Keyword::While => "while",
            Keyword::With => "with",
        }
    }

    fn starts_expr(self) -> bool {
        matches!(
            self,
            Keyword::Function
                | Keyword::New
                | Keyword::This
                | Keyword::Super
                | Keyword::Class
                | Keyword::Import
                | Keyword::TypeOf
                | Keyword::Void
                | Keyword::Delete
        )
    }
}

impl Debug for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "keyword '{}'", self.as_str())
    }
}

impl Debug for Token {
    /// This method is called only in the case of parsing failure.
    #[cold]
    #[inline(never)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => write!(f, "{:?}", w),
            Token::Arrow => write!(f, "=>"),
            Token::Hash => write!(f, "#"),
            Token::At => write!(f, "@"),
            Token::Dot => write!(f, "."),
            Token::DotDotDot => write!(f, "..."),
            Token::Bang => write!(f, "!"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBraceBar => write!(f, "{{|"),
            Token::BarRBrace => write!(f, "|}}"),
            Token::Semi => write!(f, ";"),
            Token::Comma => write!(f, ","),
            Token::Colon => write!(f, ":"),
            Token::Template { raw, .. } => write!(f, "template token ({})", raw),
            Token::BinOp(op) => write!(f, "{}", BinaryOp::from(*op).as_str()),
            Token::AssignOp(op) => write!(f, "{}", op.as_str()),
            Token::QuestionMark => write!(f, "?"),
            Token::QuestionDot => write!(f, "?."),
            Token::PlusPlus => write!(f, "++"),
            Token::MinusMinus => write!(f, "--"),
            Token::Tilde => write!(f, "~"),
            Token::Str { raw, .. } => write!(f, "string literal ({})", raw),
            Token::Regex { exp, flags } => write!(f, "regexp literal (/{}/{})", exp, flags),
            Token::Num { raw, .. } => write!(f, "numeric literal ({})", raw),
            Token::BigInt { raw } => write!(f, "bigint literal ({})", raw),
            Token::JSXText { raw } => write!(f, "jsx text ({})", raw),
            Token::Shebang(s) => write!(f, "#!{}", s),
            Token::Error(e) => write!(f, "<lexing error: {}>", e),
        }
    }
}
