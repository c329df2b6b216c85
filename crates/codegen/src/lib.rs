//! Prints syntax trees back to source text.
//!
//! Flow-only nodes print in Flow syntax, everything else in the syntax shared
//! with TypeScript, so a tree from which the converter removed every Flow
//! construct prints as TypeScript.
//!
//! ```
//! use codegen::{to_code, Config};
//!
//! let src = "const a = [1,2]";
//! let parsed = parser::parse(src, Default::default()).unwrap();
//! let out = to_code(&parsed.program, src, Some(&parsed.comments), Config::default()).unwrap();
//! assert_eq!(out, "const a = [1, 2];\n");
//! ```
#![deny(unreachable_patterns)]

pub use self::{
    config::{ArrowParens, Config, TrailingComma},
    list::ListFormat,
    text_writer::JsWriter,
};
use ast::*;
use global_common::{source, BytePos, Comment, CommentKind, Comments, Span, Spanned, DUMMY_SP};
use std::fmt;
use unicode_width::UnicodeWidthStr;

#[macro_use]
mod macros;
mod config;
mod decl;
mod expr;
mod jsx;
pub mod list;
mod stmt;
#[cfg(test)]
mod tests;
pub mod text_writer;
mod types;
pub mod util;

pub type Result<T = ()> = std::result::Result<T, fmt::Error>;

/// Prints `program`, re-emitting `comments` between statements and members.
pub fn to_code(
    program: &Program,
    src: &str,
    comments: Option<&Comments>,
    cfg: Config,
) -> Result<String> {
    let mut e = Emitter::new(cfg, src);
    if let Some(comments) = comments {
        e = e.with_comments(comments, BytePos(0));
    }
    e.emit_program(program)?;
    Ok(e.finish())
}

/// Runs `op` on a fresh emitter and returns what it printed.
pub fn print_with<F>(cfg: Config, src: &str, op: F) -> Result<String>
where
    F: FnOnce(&mut Emitter<'_>) -> Result,
{
    let mut e = Emitter::new(cfg, src);
    op(&mut e)?;
    Ok(e.finish())
}

pub struct Emitter<'a> {
    cfg: Config,
    wr: JsWriter,
    /// Text the spans of the tree point into. Line breaks and blank lines of
    /// the source are looked up here.
    src: &'a str,
    comments: Option<&'a Comments>,
    /// Index of the next comment to re-emit.
    comment_pos: usize,
    flags: Flags,
}

impl<'a> Emitter<'a> {
    pub fn new(cfg: Config, src: &'a str) -> Self {
        Emitter {
            wr: JsWriter::new(cfg.tab_width, "\n"),
            cfg,
            src,
            comments: None,
            comment_pos: 0,
            flags: Flags::empty(),
        }
    }

    /// Re-emits `comments` starting with the first one at or after `from`.
    pub fn with_comments(mut self, comments: &'a Comments, from: BytePos) -> Self {
        self.comment_pos = comments.first_from(from);
        self.comments = Some(comments);
        self
    }

    pub fn finish(self) -> String {
        self.wr.into_string()
    }

    pub fn emit_program(&mut self, node: &Program) -> Result {
        if let Some(shebang) = &node.shebang {
            punct!(self, "#!");
            self.wr.write_str(shebang)?;
            self.wr.write_line()?;
        }
        self.emit_module_items(&node.body)?;
        self.emit_leading_comments(BytePos(u32::MAX))?;
        self.wr.write_line()
    }

    /// Emits `items` one per line.
    pub fn emit_module_items(&mut self, items: &[ModuleItem]) -> Result {
        let items = items
            .iter()
            .filter(|item| !matches!(item, ModuleItem::Stmt(Stmt::Empty(..))))
            .collect::<Vec<_>>();
        self.emit_body(&items, |e, item| e.emit_module_item(item))
    }

    pub fn emit_module_item(&mut self, node: &ModuleItem) -> Result {
        match node {
            ModuleItem::Stmt(stmt) => self.emit_stmt(stmt),
            ModuleItem::ModuleDecl(decl) => self.emit_module_decl(decl),
        }
    }

    fn emit_module_decl(&mut self, node: &ModuleDecl) -> Result {
        match node {
            ModuleDecl::Import(d) => self.emit_import(d),
            ModuleDecl::ExportDecl(d) => self.emit_export_decl(d),
            ModuleDecl::ExportNamed(d) => self.emit_named_export(d),
            ModuleDecl::ExportDefaultDecl(d) => self.emit_export_default_decl(d),
            ModuleDecl::ExportDefaultExpr(n) => self.emit_export_default_expr(n),
            ModuleDecl::ExportAll(d) => self.emit_export_all(d),
            ModuleDecl::DeclareExportDefaultType(d) => self.emit_declare_export_default_type(d),
            ModuleDecl::ExportAssignment(d) => self.emit_export_assignment(d),
        }
    }

    fn emit_export_decl(&mut self, node: &ExportDecl) -> Result {
        if node.declare {
            keyword!(self, "declare");
            space!(self);
        }
        keyword!(self, "export");
        space!(self);
        self.emit_decl(&node.decl)
    }

    fn emit_export_default_expr(&mut self, node: &ExportDefaultExpr) -> Result {
        keyword!(self, "export");
        space!(self);
        keyword!(self, "default");
        space!(self);

        let needs_parens = matches!(node.expr.as_ref(), Expr::Seq(..));
        if needs_parens {
            punct!(self, "(");
            self.emit_expr(&node.expr)?;
            punct!(self, ")");
        } else {
            self.emit_expr(&node.expr)?;
        }
        formatting_semi!(self);
        Ok(())
    }

    fn emit_export_default_decl(&mut self, node: &ExportDefaultDecl) -> Result {
        if node.declare {
            keyword!(self, "declare");
            space!(self);
        }
        keyword!(self, "export");
        space!(self);
        keyword!(self, "default");
        space!(self);
        match &node.decl {
            DefaultDecl::Class(n) => self.emit_class_expr(n),
            DefaultDecl::Fn(n) => self.emit_fn_expr(n),
            DefaultDecl::DeclareFn(n) => self.emit_declare_fn_decl(n),
            DefaultDecl::DeclareClass(n) => self.emit_declare_class_decl(n),
        }
    }

    fn emit_declare_export_default_type(&mut self, node: &DeclareExportDefaultType) -> Result {
        keyword!(self, "declare");
        space!(self);
        keyword!(self, "export");
        space!(self);
        keyword!(self, "default");
        space!(self);
        self.emit_type(&node.type_ann)?;
        formatting_semi!(self);
        Ok(())
    }

    fn emit_export_assignment(&mut self, node: &ExportAssignment) -> Result {
        keyword!(self, "export");
        space!(self);
        operator!(self, "=");
        space!(self);
        self.emit_expr(&node.expr)?;
        formatting_semi!(self);
        Ok(())
    }

    fn emit_import(&mut self, node: &ImportDecl) -> Result {
        keyword!(self, "import");
        space!(self);
        if let Some(kind) = node.kind.as_keyword() {
            keyword!(self, kind);
            space!(self);
        }

        if node.specifiers.is_empty() {
            self.emit_str_lit(&node.src)?;
            formatting_semi!(self);
            return Ok(());
        }

        let mut specifiers = vec![];
        let mut emitted_default = false;
        for specifier in &node.specifiers {
            match specifier {
                ImportSpecifier::Named(s) => {
                    specifiers.push(s);
                }
                ImportSpecifier::Default(s) => {
                    self.emit_ident(&s.local)?;
                    emitted_default = true;
                }
                ImportSpecifier::Namespace(ns) => {
                    if emitted_default {
                        punct!(self, ",");
                        space!(self);
                    }

                    punct!(self, "*");
                    space!(self);
                    keyword!(self, "as");
                    space!(self);
                    self.emit_ident(&ns.local)?;
                }
            }
        }

        if !specifiers.is_empty() {
            if emitted_default {
                punct!(self, ",");
                space!(self);
            }

            self.emit_list(
                node.span,
                &specifiers,
                |e, n| e.emit_import_specifier(n),
                ListFormat::NamedImportsOrExportsElements,
            )?;
        }

        space!(self);
        keyword!(self, "from");
        space!(self);
        self.emit_str_lit(&node.src)?;
        formatting_semi!(self);
        Ok(())
    }

    fn emit_import_specifier(&mut self, node: &ImportNamedSpecifier) -> Result {
        if let Some(kind) = node.kind.as_keyword() {
            keyword!(self, kind);
            space!(self);
        }

        if let Some(imported) = &node.imported {
            self.emit_ident(imported)?;
            space!(self);
            keyword!(self, "as");
            space!(self);
        }

        self.emit_ident(&node.local)
    }

    fn emit_export_specifier(&mut self, node: &ExportSpecifier) -> Result {
        match node {
            ExportSpecifier::Namespace(node) => self.emit_namespace_export_specifier(node),
            ExportSpecifier::Named(node) => self.emit_named_export_specifier(node),
        }
    }

    fn emit_namespace_export_specifier(&mut self, node: &ExportNamespaceSpecifier) -> Result {
        punct!(self, "*");
        space!(self);
        keyword!(self, "as");
        space!(self);
        self.emit_ident(&node.name)
    }

    fn emit_named_export_specifier(&mut self, node: &ExportNamedSpecifier) -> Result {
        self.emit_ident(&node.orig)?;
        if let Some(exported) = &node.exported {
            space!(self);
            keyword!(self, "as");
            space!(self);
            self.emit_ident(exported)?;
        }
        Ok(())
    }

    fn emit_named_export(&mut self, node: &NamedExport) -> Result {
        if node.declare {
            keyword!(self, "declare");
            space!(self);
        }
        keyword!(self, "export");
        space!(self);
        if node.type_only {
            keyword!(self, "type");
            space!(self);
        }

        match node.specifiers.as_slice() {
            [ExportSpecifier::Namespace(spec)] => self.emit_namespace_export_specifier(spec)?,
            specifiers => self.emit_list(
                node.span,
                specifiers,
                |e, n| e.emit_export_specifier(n),
                ListFormat::NamedImportsOrExportsElements,
            )?,
        }

        if let Some(src) = &node.src {
            space!(self);
            keyword!(self, "from");
            space!(self);
            self.emit_str_lit(src)?;
        }
        formatting_semi!(self);
        Ok(())
    }

    fn emit_export_all(&mut self, node: &ExportAll) -> Result {
        if node.declare {
            keyword!(self, "declare");
            space!(self);
        }
        keyword!(self, "export");
        space!(self);
        punct!(self, "*");
        space!(self);
        keyword!(self, "from");
        space!(self);
        self.emit_str_lit(&node.src)?;
        formatting_semi!(self);
        Ok(())
    }
}

/// Comments
impl<'a> Emitter<'a> {
    fn pending_comments(&self) -> &[Comment] {
        match self.comments {
            Some(comments) => comments.as_slice().get(self.comment_pos..).unwrap_or(&[]),
            None => &[],
        }
    }

    /// Returns true if a comment inside `span` is still to be emitted.
    fn has_pending_comments(&self, span: Span) -> bool {
        if span.is_dummy() {
            return false;
        }
        self.pending_comments()
            .iter()
            .take_while(|c| c.span.lo < span.hi)
            .any(|c| c.span.lo >= span.lo)
    }

    /// Returns true if a pending comment inside `parent` lies outside of
    /// every child.
    fn has_comments_between<N: Spanned>(&self, parent: Span, children: &[N]) -> bool {
        if parent.is_dummy() {
            return false;
        }
        self.pending_comments()
            .iter()
            .take_while(|c| c.span.lo < parent.hi)
            .filter(|c| c.span.lo >= parent.lo)
            .any(|c| !children.iter().any(|n| n.span().contains(c.span)))
    }

    /// Emits every pending comment which ends at or before `pos`, each on its
    /// own line unless a block comment shared its line with the following
    /// code.
    fn emit_leading_comments(&mut self, pos: BytePos) -> Result {
        while let Some(c) = self.pending_comments().first() {
            if c.span.hi > pos {
                break;
            }
            let c = c.clone();
            self.comment_pos += 1;

            self.emit_comment(&c)?;
            match c.kind {
                CommentKind::Line => self.wr.write_line()?,
                CommentKind::Block => {
                    let next = self
                        .pending_comments()
                        .first()
                        .map_or(pos, |next| next.span.lo.min(pos));
                    if source::has_newline_between(self.src, c.span.hi, next) {
                        self.wr.write_line()?;
                    } else {
                        space!(self);
                    }
                }
            }
        }
        Ok(())
    }

    /// Emits pending comments which start on the line `pos` is on.
    fn emit_trailing_comments(&mut self, pos: BytePos) -> Result {
        while let Some(c) = self.pending_comments().first() {
            if c.span.lo < pos || source::has_newline_between(self.src, pos, c.span.lo) {
                break;
            }
            let c = c.clone();
            self.comment_pos += 1;

            space!(self);
            self.emit_comment(&c)?;
        }
        Ok(())
    }

    fn emit_comment(&mut self, c: &Comment) -> Result {
        match c.kind {
            CommentKind::Line => {
                punct!(self, "//");
                self.wr.write_str(&c.text)?;
            }
            CommentKind::Block => {
                punct!(self, "/*");
                self.wr.write_str(&c.text)?;
                punct!(self, "*/");
            }
        }
        Ok(())
    }

    /// Returns true if the source has an empty line between `prev` and the
    /// code or comment which follows it before `next`.
    fn has_blank_line(&self, prev: Span, next: Span) -> bool {
        if prev.is_dummy() || next.is_dummy() {
            return false;
        }
        let end = self
            .pending_comments()
            .first()
            .map_or(next.lo, |c| c.span.lo.min(next.lo));
        source::has_blank_line_between(self.src, prev.hi, end)
    }

    /// Emits statement-like `items` one per line, keeping single blank lines
    /// and comments found between them in the source.
    fn emit_body<N, F>(&mut self, items: &[N], emit_item: F) -> Result
    where
        N: Spanned,
        F: Fn(&mut Self, &N) -> Result,
    {
        let mut prev: Option<Span> = None;
        for item in items {
            let span = item.span();
            if let Some(prev) = prev {
                if self.has_blank_line(prev, span) {
                    self.wr.write_empty_line()?;
                }
            }
            if !span.is_dummy() {
                self.emit_leading_comments(span.lo)?;
            }
            emit_item(self, item)?;
            if !span.is_dummy() {
                self.emit_trailing_comments(span.hi)?;
            }
            self.wr.write_line()?;
            prev = Some(span);
        }
        Ok(())
    }
}

/// How a list is laid out.
enum Layout {
    /// On one line.
    Flat,
    /// On one line, already printed while measuring.
    Measured(String),
    /// One element per line.
    Broken,
}

/// Lists
impl<'a> Emitter<'a> {
    fn emit_list<N, F>(
        &mut self,
        parent_node: Span,
        children: &[N],
        emit_child: F,
        format: ListFormat,
    ) -> Result
    where
        N: Spanned,
        F: Fn(&mut Self, &N) -> Result,
    {
        match self.list_layout(parent_node, children, &emit_child, format)? {
            Layout::Measured(text) => self.wr.write_str(&text),
            Layout::Flat => self.emit_list_items(parent_node, children, &emit_child, format, false),
            Layout::Broken => self.emit_list_items(parent_node, children, &emit_child, format, true),
        }
    }

    fn list_layout<N, F>(
        &mut self,
        parent_node: Span,
        children: &[N],
        emit_child: &F,
        format: ListFormat,
    ) -> Result<Layout>
    where
        N: Spanned,
        F: Fn(&mut Self, &N) -> Result,
    {
        if children.is_empty() {
            return Ok(Layout::Flat);
        }
        if format.contains(ListFormat::MultiLine) {
            return Ok(Layout::Broken);
        }
        if format.intersects(ListFormat::Breakable | ListFormat::PreserveLines)
            && self.has_comments_between(parent_node, children)
        {
            return Ok(Layout::Broken);
        }
        if format.contains(ListFormat::PreserveLines)
            && !parent_node.is_dummy()
            && source::has_newline_between(self.src, parent_node.lo, children[0].span_lo())
        {
            return Ok(Layout::Broken);
        }
        if self.flags.contains(Flags::flat)
            || !format.contains(ListFormat::Breakable)
            || self.cfg.print_width == 0
        {
            return Ok(Layout::Flat);
        }

        let text = self.render_flat(|e| {
            e.emit_list_items(parent_node, children, emit_child, format, false)
        })?;
        if self.fits(&text) {
            // The measured text lacks the comments inside the children.
            if self.has_pending_comments(parent_node) {
                Ok(Layout::Flat)
            } else {
                Ok(Layout::Measured(text))
            }
        } else {
            Ok(Layout::Broken)
        }
    }

    /// Prints with a scratch emitter which never breaks lists for width.
    fn render_flat<F>(&self, op: F) -> Result<String>
    where
        F: FnOnce(&mut Self) -> Result,
    {
        let mut e = Emitter {
            cfg: self.cfg.clone(),
            wr: JsWriter::new(self.cfg.tab_width, "\n"),
            src: self.src,
            comments: None,
            comment_pos: 0,
            flags: self.flags | Flags::flat,
        };
        op(&mut e)?;
        Ok(e.finish())
    }

    /// Returns true if `text` fits on the current line.
    fn fits(&self, text: &str) -> bool {
        !text.contains('\n') && self.wr.line_width() + text.width() <= self.cfg.print_width
    }

    fn emit_list_items<N, F>(
        &mut self,
        parent_node: Span,
        children: &[N],
        emit_child: &F,
        format: ListFormat,
        broken: bool,
    ) -> Result
    where
        N: Spanned,
        F: Fn(&mut Self, &N) -> Result,
    {
        self.wr.write_punct(format.opening_bracket())?;

        if children.is_empty() {
            self.wr.write_punct(format.closing_bracket())?;
            return Ok(());
        }

        if broken {
            if format.contains(ListFormat::Indented) {
                self.wr.increase_indent()?;
            }
            self.wr.write_line()?;

            let mut prev: Option<Span> = None;
            for (i, child) in children.iter().enumerate() {
                let span = child.span();
                if let Some(prev) = prev {
                    if format.contains(ListFormat::MultiLine) && self.has_blank_line(prev, span) {
                        self.wr.write_empty_line()?;
                    }
                }
                if !span.is_dummy() {
                    self.emit_leading_comments(span.lo)?;
                }

                emit_child(self, child)?;
                self.write_broken_delim(format, i + 1 == children.len())?;

                if !span.is_dummy() {
                    self.emit_trailing_comments(span.hi)?;
                }
                self.wr.write_line()?;
                prev = Some(span);
            }

            if !parent_node.is_dummy() {
                self.emit_leading_comments(parent_node.hi)?;
            }
            if format.contains(ListFormat::Indented) {
                self.wr.decrease_indent()?;
            }
        } else {
            if format.contains(ListFormat::SpaceBetweenBraces) {
                bracket_space!(self);
            }
            for (i, child) in children.iter().enumerate() {
                if i != 0 {
                    self.write_delim(format)?;
                    if format.contains(ListFormat::SpaceBetweenSiblings) {
                        space!(self);
                    }
                }
                emit_child(self, child)?;
            }
            if format.contains(ListFormat::SpaceBetweenBraces) {
                bracket_space!(self);
            }
        }

        self.wr.write_punct(format.closing_bracket())?;
        Ok(())
    }

    fn write_delim(&mut self, f: ListFormat) -> Result {
        if f.contains(ListFormat::CommaDelimited) {
            punct!(self, ",");
        } else if f.contains(ListFormat::SemicolonDelimited) {
            punct!(self, ";");
        } else if f.contains(ListFormat::BarDelimited) {
            space!(self);
            punct!(self, "|");
        } else if f.contains(ListFormat::AmpersandDelimited) {
            space!(self);
            punct!(self, "&");
        }

        Ok(())
    }

    /// Delimiter after a child of a list printed one child per line.
    fn write_broken_delim(&mut self, f: ListFormat, last: bool) -> Result {
        if f.contains(ListFormat::CommaDelimited) {
            if !last || self.allows_trailing_comma(f) {
                punct!(self, ",");
            }
        } else if f.contains(ListFormat::SemicolonDelimited) {
            formatting_semi!(self);
        }
        Ok(())
    }

    fn allows_trailing_comma(&self, f: ListFormat) -> bool {
        match self.cfg.trailing_comma {
            TrailingComma::All => {
                f.intersects(ListFormat::TrailingCommaEs5 | ListFormat::TrailingCommaAll)
            }
            TrailingComma::Es5 => f.contains(ListFormat::TrailingCommaEs5),
            TrailingComma::None => false,
        }
    }
}

#[allow(non_upper_case_globals)]
mod flags {
    bitflags::bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub(super) struct Flags: u8 {
            const in_for_stmt_head = 1 << 0;
            /// Measuring a list on one line.
            const flat = 1 << 1;
        }
    }

    impl Flags {
        pub(super) fn replace(&mut self, flag: Flags, value: bool) -> bool {
            debug_assert_eq!(flag.bits().count_ones(), 1);
            let old = self.contains(flag);
            self.set(flag, value);
            old
        }
    }
}

use flags::Flags;
