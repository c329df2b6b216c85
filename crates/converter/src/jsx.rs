//! Decides whether the converted file needs the `.tsx` extension.
use crate::parse_source;
use ast::*;
use ecma_visit::{Visit, VisitWith};

/// Returns true if `program` contains a JSX element or fragment anywhere.
pub fn detect_jsx(program: &Program) -> bool {
    let mut finder = JsxFinder { found: false };
    program.visit_with(&mut finder);
    finder.found
}

/// Like [detect_jsx], but answers `true` for source which does not parse:
/// a needless `.tsx` is harmless while a missing one breaks the output.
pub fn detect_jsx_source(src: &str) -> bool {
    match parse_source(src) {
        Ok(parsed) => detect_jsx(&parsed.program),
        Err(err) => {
            tracing::debug!("assuming jsx in unparsable source: {}", err);
            true
        }
    }
}

struct JsxFinder {
    found: bool,
}

impl Visit for JsxFinder {
    fn visit_expr(&mut self, n: &Expr) {
        if self.found {
            return;
        }
        match n {
            Expr::JSXElement(..) | Expr::JSXFragment(..) => self.found = true,
            _ => n.visit_children_with(self),
        }
    }

    fn visit_jsx_element(&mut self, _: &JSXElement) {
        self.found = true;
    }

    fn visit_jsx_fragment(&mut self, _: &JSXFragment) {
        self.found = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_jsx_at_any_depth() {
        assert!(detect_jsx_source("const a = <div />;"));
        assert!(detect_jsx_source("export default () => <></>;"));
        assert!(detect_jsx_source(
            "class A { render() { if (x) { return [1].map(i => <li key={i} />); } } }"
        ));
    }

    #[test]
    fn plain_code_has_no_jsx() {
        assert!(!detect_jsx_source("const a = b < c && d > e;"));
        assert!(!detect_jsx_source("// <div />\nconst s = '<div />';"));
        assert!(!detect_jsx_source(""));
    }

    #[test]
    fn unparsable_source_counts_as_jsx() {
        assert!(detect_jsx_source("const = ;"));
    }
}
