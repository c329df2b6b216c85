macro_rules! span {
    ($parser:expr, $start:expr) => {{
        let start: ::global_common::BytePos = $start;
        let end: ::global_common::BytePos = $parser.input.prev_span().hi;

        debug_assert!(
            start <= end,
            "assertion failed: (span.start <= span.end). start = {}, end = {}",
            start.0,
            end.0
        );
        ::global_common::Span::new(start, end)
    }};
}

/// This handles automatic semicolon insertion.
///
/// Returns bool.
macro_rules! is {
    ($parser:expr, BindingIdent) => {{
        $parser.input.is_ident()
    }};

    ($parser:expr, IdentName) => {{
        matches!($parser.input.cur(), Some(&$crate::token::Token::Word(..)))
    }};

    ($parser:expr, ';') => {{
        match $parser.input.cur() {
            Some(&$crate::token::Token::Semi) | None | Some(&tok!('}')) => true,
            _ => $parser.input.had_line_break_before_cur(),
        }
    }};

    ($parser:expr, $t:tt) => {
        is_exact!($parser, $t)
    };
}

macro_rules! is_exact {
    ($parser:expr, $t:tt) => {{
        $parser.input.is(&tok!($t))
    }};
}

/// This handles automatic semicolon insertion.
///
/// Returns bool.
macro_rules! eat {
    ($parser:expr, ';') => {{
        match $parser.input.cur() {
            Some(&$crate::token::Token::Semi) => {
                $parser.input.bump();
                true
            }
            None | Some(&tok!('}')) => true,
            _ => $parser.input.had_line_break_before_cur(),
        }
    }};

    ($parser:expr, $t:tt) => {{
        if is!($parser, $t) {
            $parser.input.bump();
            true
        } else {
            false
        }
    }};
}

/// Returns true on eof.
macro_rules! eof {
    ($parser:expr) => {
        $parser.input.cur().is_none()
    };
}

/// Returns an error describing the current token from the enclosing
/// function.
macro_rules! unexpected {
    ($parser:expr, $expected:expr) => {{
        return Err($parser.unexpected_err($expected));
    }};
}

macro_rules! syntax_error {
    ($parser:expr, $err:expr) => {
        syntax_error!($parser, $parser.input.cur_span(), $err)
    };

    ($parser:expr, $span:expr, $err:expr) => {{
        let err = $crate::error::Error::new($span, $err);
        tracing::trace!("syntax error: {}", err);
        return Err(err);
    }};
}

/// This handles automatic semicolon insertion.
macro_rules! expect {
    ($parser:expr, $t:tt) => {{
        if !eat!($parser, $t) {
            unexpected!($parser, concat!("`", stringify!($t), "`"))
        }
    }};
}

macro_rules! expect_exact {
    ($parser:expr, $t:tt) => {{
        if !is_exact!($parser, $t) {
            unexpected!($parser, concat!("`", stringify!($t), "`"))
        }
        $parser.input.bump();
    }};
}
