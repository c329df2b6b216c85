use crate::types::TypeAnn;
use global_common::{JsWord, Span, DUMMY_SP};

/// Identifier used as a pattern.
///
/// `span` covers the optional marker and the annotation, `id.span` only the
/// name.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingIdent {
    pub span: Span,
    pub id: Ident,
    /// `x?: T` in parameter position.
    pub optional: bool,
    pub type_ann: Option<TypeAnn>,
}

impl From<Ident> for BindingIdent {
    fn from(id: Ident) -> Self {
        BindingIdent {
            span: id.span,
            id,
            optional: false,
            type_ann: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub span: Span,
    pub sym: JsWord,
}

impl Ident {
    #[inline]
    pub const fn new(sym: JsWord, span: Span) -> Self {
        Ident { span, sym }
    }

    /// Identifier without a source position.
    pub fn synth(sym: &str) -> Self {
        Ident::new(sym.into(), DUMMY_SP)
    }

    /// Returns true for names that are reserved words in every context.
    pub fn is_reserved(sym: &str) -> bool {
        matches!(
            sym,
            "break"
                | "case"
                | "catch"
                | "class"
                | "const"
                | "continue"
                | "debugger"
                | "default"
                | "delete"
                | "do"
                | "else"
                | "export"
                | "extends"
                | "finally"
                | "for"
                | "function"
                | "if"
                | "import"
                | "in"
                | "instanceof"
                | "new"
                | "return"
                | "super"
                | "switch"
                | "this"
                | "throw"
                | "try"
                | "typeof"
                | "var"
                | "void"
                | "while"
                | "with"
                | "null"
                | "true"
                | "false"
                | "enum"
        )
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.sym
    }
}

/// `#name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrivateName {
    pub span: Span,
    pub id: Ident,
}

spanned!(BindingIdent, Ident, PrivateName);
