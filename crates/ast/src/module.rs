use crate::{module_decl::ModuleDecl, stmt::Stmt};
use global_common::{JsWord, Span};

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub span: Span,

    pub body: Vec<ModuleItem>,

    /// `#!...` line, without the `#!`.
    pub shebang: Option<JsWord>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleItem {
    ModuleDecl(ModuleDecl),
    Stmt(Stmt),
}

impl From<Stmt> for ModuleItem {
    fn from(s: Stmt) -> Self {
        Self::Stmt(s)
    }
}

impl From<ModuleDecl> for ModuleItem {
    fn from(d: ModuleDecl) -> Self {
        Self::ModuleDecl(d)
    }
}

spanned!(Program);
spanned_enum!(ModuleItem { ModuleDecl, Stmt });
