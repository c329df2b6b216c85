use ast::*;
use std::borrow::Cow;

/// Re-quotes the source text of a string literal with the preferred quote,
/// unless the contents hold more of those than of the other quote.
///
/// Escapes of the quote that is no longer the delimiter are removed, and bare
/// occurrences of the new delimiter are escaped. Every other escape is kept as
/// written.
pub fn requote(raw: &str, prefer_single: bool) -> Cow<'_, str> {
    let open = match raw.chars().next() {
        Some(q @ ('"' | '\'')) if raw.len() >= 2 && raw.ends_with(q) => q,
        _ => return Cow::Borrowed(raw),
    };
    let inner = &raw[1..raw.len() - 1];

    let (preferred, alternate) = if prefer_single {
        ('\'', '"')
    } else {
        ('"', '\'')
    };
    let preferred_count = inner.matches(preferred).count();
    let alternate_count = inner.matches(alternate).count();
    let quote = if preferred_count > alternate_count {
        alternate
    } else {
        preferred
    };
    if quote == open {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 2);
    out.push(quote);
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(q @ ('"' | '\'')) => {
                    if q == quote {
                        out.push('\\');
                    }
                    out.push(q);
                }
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push('\\'),
            },
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    Cow::Owned(out)
}

/// Returns true if a statement starting with `e` would continue the previous
/// line when it is not terminated by a semicolon.
pub fn starts_with_asi_hazard(e: &Expr) -> bool {
    match e {
        Expr::Paren(..) | Expr::Array(..) | Expr::Tpl(..) => true,
        Expr::Lit(Lit::Regex(..)) => true,
        // Printed inside parentheses at statement start.
        Expr::Object(..) | Expr::Fn(..) | Expr::Class(..) => true,
        Expr::Unary(u) => matches!(u.op, UnaryOp::Minus | UnaryOp::Plus),
        Expr::Update(u) => {
            if u.prefix {
                true
            } else {
                starts_with_asi_hazard(&u.arg)
            }
        }
        Expr::Bin(b) => starts_with_asi_hazard(&b.left),
        Expr::Cond(c) => starts_with_asi_hazard(&c.test),
        Expr::Seq(s) => s.exprs.first().map_or(false, |e| starts_with_asi_hazard(e)),
        Expr::Member(m) => match &m.obj {
            ExprOrSuper::Expr(obj) => starts_with_asi_hazard(obj),
            ExprOrSuper::Super(..) => false,
        },
        Expr::Call(c) => match &c.callee {
            Callee::Expr(callee) => starts_with_asi_hazard(callee),
            Callee::Super(..) | Callee::Import(..) => false,
        },
        Expr::TaggedTpl(t) => starts_with_asi_hazard(&t.tag),
        Expr::As(a) => starts_with_asi_hazard(&a.expr),
        Expr::TypeCast(..) => true,
        Expr::Assign(a) => match &*a.left {
            Pat::Expr(e) => starts_with_asi_hazard(e),
            Pat::Array(..) | Pat::Object(..) => true,
            _ => false,
        },
        Expr::Arrow(..) => true,
        _ => false,
    }
}

/// Returns true for a call argument which may stay on the line of the call
/// when the arguments do not fit, like a callback with a block body.
pub fn is_huggable(e: &Expr) -> bool {
    match e {
        Expr::Fn(..) => true,
        Expr::Arrow(a) => matches!(a.body, BlockStmtOrExpr::BlockStmt(..)),
        Expr::Object(o) => !o.props.is_empty(),
        Expr::Array(a) => !a.elems.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requote_prefers_configured_quote() {
        assert_eq!(requote("'a'", false), "\"a\"");
        assert_eq!(requote("\"a\"", true), "'a'");
        assert_eq!(requote("'a'", true), "'a'");
    }

    #[test]
    fn requote_keeps_quote_needing_fewer_escapes() {
        assert_eq!(requote("'say \"hi\"'", false), "'say \"hi\"'");
        assert_eq!(requote(r#""it's""#, true), r#""it's""#);
    }

    #[test]
    fn requote_moves_escapes() {
        assert_eq!(requote(r"'a\'b\n'", false), r#""a'b\n""#);
        assert_eq!(requote(r#""a\"b\"c'""#, true), r#"'a"b"c\''"#);
    }
}
