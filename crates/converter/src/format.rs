//! Turns a transduced program into text.
//!
//! Direct mode patches the original text with the recorded rewrites, so
//! everything the converter did not touch keeps its bytes. Styled mode
//! reprints the whole tree.
use crate::{
    error::ConvertError,
    options::StyleOptions,
    transducer::{Fragment, Rewrite, Transduced},
};
use codegen::Config;
use global_common::{source::indent_at, BytePos, Pos, Span};
use tracing::{trace, warn};

pub fn format(src: &str, transduced: &Transduced, style: &StyleOptions) -> Result<String, ConvertError> {
    if style.use_external_formatter {
        let code = codegen::to_code(
            &transduced.program,
            src,
            Some(&transduced.comments),
            style.into(),
        )?;
        return Ok(code);
    }
    print_direct(src, &transduced.rewrites, style.tab_width)
}

/// Applies `rewrites` to `src`. A rewrite overlapping one applied before it
/// is dropped.
pub fn print_direct(src: &str, rewrites: &[Rewrite], tab_width: u8) -> Result<String, ConvertError> {
    let mut order: Vec<&Rewrite> = rewrites.iter().collect();
    // Insertions at a position go before a replacement starting there.
    order.sort_by_key(|r| (r.span.lo, !r.span.is_empty()));

    let mut out = String::with_capacity(src.len() + src.len() / 8);
    let mut cursor = BytePos(0);
    for rewrite in order {
        if rewrite.span.lo < cursor {
            warn!(
                "dropping rewrite at {}..{} overlapping an earlier one",
                rewrite.span.lo.to_usize(),
                rewrite.span.hi.to_usize()
            );
            continue;
        }
        out.push_str(Span::new(cursor, rewrite.span.lo).snippet(src));
        out.push_str(&print_fragment(src, rewrite, tab_width)?);
        cursor = rewrite.span.hi;
    }
    out.push_str(src.get(cursor.to_usize()..).unwrap_or_default());

    trace!(rewrites = rewrites.len(), "patched source");
    Ok(out)
}

fn print_fragment(src: &str, rewrite: &Rewrite, tab_width: u8) -> Result<String, ConvertError> {
    let text = match &rewrite.fragment {
        Fragment::Text(text) => return Ok(text.clone()),
        Fragment::Type(ty) => {
            codegen::print_with(Config::fragment(tab_width), src, |e| e.emit_type(ty))?
        }
        Fragment::Items(items) => {
            let cfg = Config {
                semicolons: uses_semicolons(src, rewrite.span),
                ..Config::fragment(tab_width)
            };
            codegen::print_with(cfg, src, |e| e.emit_module_items(items))?
        }
    };
    Ok(reindent(&text, indent_at(src, rewrite.span.lo)))
}

/// Statements replacing `span` end with a semicolon if the replaced one did.
/// A statement ending with a block says nothing, so the rest of the file
/// decides.
fn uses_semicolons(src: &str, span: Span) -> bool {
    let text = span.snippet(src).trim_end();
    if text.ends_with(';') {
        return true;
    }
    text.ends_with('}') && src.lines().any(|l| l.trim_end().ends_with(';'))
}

/// Indents every line but the first, which continues the line being
/// replaced.
fn reindent(text: &str, indent: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.trim_end_matches('\n').split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{KeywordKind, Type};
    use pretty_assertions::assert_eq;

    fn text(lo: u32, hi: u32, s: &str) -> Rewrite {
        Rewrite {
            span: Span::new(BytePos(lo), BytePos(hi)),
            fragment: Fragment::Text(s.into()),
        }
    }

    #[test]
    fn untouched_source_is_copied() {
        let src = "const a = 1; // c\n";
        assert_eq!(print_direct(src, &[], 4).unwrap(), src);
    }

    #[test]
    fn insertions_precede_replacements() {
        let src = "type A = ?B;";
        let rewrites = vec![
            text(9, 10, ""),
            text(11, 11, " | null"),
            text(9, 9, "("),
            text(11, 11, ")"),
        ];
        assert_eq!(print_direct(src, &rewrites, 4).unwrap(), "type A = (B | null);");
    }

    #[test]
    fn overlapping_rewrites_are_dropped() {
        let src = "abcdef";
        let rewrites = vec![text(1, 4, "X"), text(2, 3, "Y")];
        assert_eq!(print_direct(src, &rewrites, 4).unwrap(), "aXef");
    }

    #[test]
    fn type_fragments_are_printed() {
        let src = "let x: mixed;";
        let rewrites = vec![Rewrite {
            span: Span::new(BytePos(7), BytePos(12)),
            fragment: Fragment::Type(Box::new(Type::keyword(KeywordKind::Unknown))),
        }];
        assert_eq!(print_direct(src, &rewrites, 4).unwrap(), "let x: unknown;");
    }

    #[test]
    fn reindents_continuation_lines() {
        assert_eq!(reindent("a\n\nb\n", "  "), "a\n\n  b");
    }

    #[test]
    fn semicolons_follow_the_replaced_statement() {
        let src = "declare class A {}\nlet x = 1;\n";
        assert!(uses_semicolons(src, Span::new(BytePos(0), BytePos(18))));
        assert!(uses_semicolons("let x = 1;", Span::new(BytePos(0), BytePos(10))));
        assert!(!uses_semicolons("let x = 1", Span::new(BytePos(0), BytePos(9))));
        assert!(!uses_semicolons("declare class A {}", Span::new(BytePos(0), BytePos(18))));
    }
}
