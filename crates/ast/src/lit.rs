use global_common::{JsWord, Span, DUMMY_SP};

#[derive(Debug, Clone, PartialEq)]
pub enum Lit {
    Str(Str),

    Bool(Bool),

    Null(Null),

    Num(Number),

    BigInt(BigInt),

    Regex(Regex),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Str {
    pub span: Span,

    /// Cooked value.
    pub value: JsWord,

    /// Source text including the quotes.
    pub raw: JsWord,
}

impl Str {
    /// A single-quoted string literal without a source position.
    pub fn synth(value: &str) -> Self {
        let mut raw = String::with_capacity(value.len() + 2);
        raw.push('\'');
        for c in value.chars() {
            match c {
                '\'' => raw.push_str("\\'"),
                '\\' => raw.push_str("\\\\"),
                '\n' => raw.push_str("\\n"),
                _ => raw.push(c),
            }
        }
        raw.push('\'');
        Str {
            span: DUMMY_SP,
            value: value.into(),
            raw: raw.into(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bool {
    pub span: Span,
    pub value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Null {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub span: Span,
    pub value: f64,
    /// Source text, kept so that printing never changes the literal.
    pub raw: JsWord,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub span: Span,
    /// Source text including the `n` suffix.
    pub raw: JsWord,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Regex {
    pub span: Span,
    pub exp: JsWord,
    pub flags: JsWord,
}

spanned!(Str, Bool, Null, Number, BigInt, Regex);
spanned_enum!(Lit {
    Str,
    Bool,
    Null,
    Num,
    BigInt,
    Regex
});
enum_from!(Lit {
    Str(Str),
    Bool(Bool),
    Null(Null),
    Num(Number),
    BigInt(BigInt),
    Regex(Regex)
});
