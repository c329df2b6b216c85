/// Token literals usable both as expressions and as patterns.
macro_rules! tok {
    ('#') => {
        $crate::token::Token::Hash
    };
    ('@') => {
        $crate::token::Token::At
    };
    ('.') => {
        $crate::token::Token::Dot
    };
    ("...") => {
        $crate::token::Token::DotDotDot
    };
    ('!') => {
        $crate::token::Token::Bang
    };
    ('(') => {
        $crate::token::Token::LParen
    };
    (')') => {
        $crate::token::Token::RParen
    };
    ('[') => {
        $crate::token::Token::LBracket
    };
    (']') => {
        $crate::token::Token::RBracket
    };
    ('{') => {
        $crate::token::Token::LBrace
    };
    ('}') => {
        $crate::token::Token::RBrace
    };
    ("{|") => {
        $crate::token::Token::LBraceBar
    };
    ("|}") => {
        $crate::token::Token::BarRBrace
    };
    (';') => {
        $crate::token::Token::Semi
    };
    (',') => {
        $crate::token::Token::Comma
    };
    (':') => {
        $crate::token::Token::Colon
    };
    ("=>") => {
        $crate::token::Token::Arrow
    };
    ('?') => {
        $crate::token::Token::QuestionMark
    };
    ("?.") => {
        $crate::token::Token::QuestionDot
    };
    ("++") => {
        $crate::token::Token::PlusPlus
    };
    ("--") => {
        $crate::token::Token::MinusMinus
    };
    ('~') => {
        $crate::token::Token::Tilde
    };

    // binary operators
    ("==") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::EqEq)
    };
    ("!=") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::NotEq)
    };
    ("===") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::EqEqEq)
    };
    ("!==") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::NotEqEq)
    };
    ('<') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::Lt)
    };
    ("<=") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::LtEq)
    };
    ('>') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::Gt)
    };
    ("<<") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::LShift)
    };
    ('+') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::Add)
    };
    ('-') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::Sub)
    };
    ('*') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::Mul)
    };
    ('/') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::Div)
    };
    ('%') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::Mod)
    };
    ('|') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::BitOr)
    };
    ('^') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::BitXor)
    };
    ('&') => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::BitAnd)
    };
    ("||") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::LogicalOr)
    };
    ("&&") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::LogicalAnd)
    };
    ("**") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::Exp)
    };
    ("??") => {
        $crate::token::Token::BinOp($crate::token::BinOpToken::NullishCoalescing)
    };

    // assignment
    ('=') => {
        $crate::token::Token::AssignOp(ast::AssignOp::Assign)
    };
    ("/=") => {
        $crate::token::Token::AssignOp(ast::AssignOp::DivAssign)
    };

    // keywords
    ("break") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Break))
    };
    ("case") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Case))
    };
    ("catch") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Catch))
    };
    ("class") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Class))
    };
    ("const") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Const))
    };
    ("continue") => {
        $crate::token::Token::Word($crate::token::Word::Keyword(
            $crate::token::Keyword::Continue,
        ))
    };
    ("debugger") => {
        $crate::token::Token::Word($crate::token::Word::Keyword(
            $crate::token::Keyword::Debugger,
        ))
    };
    ("default") => {
        $crate::token::Token::Word($crate::token::Word::Keyword(
            $crate::token::Keyword::Default_,
        ))
    };
    ("delete") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Delete))
    };
    ("do") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Do))
    };
    ("else") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Else))
    };
    ("export") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Export))
    };
    ("extends") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Extends))
    };
    ("finally") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Finally))
    };
    ("for") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::For))
    };
    ("function") => {
        $crate::token::Token::Word($crate::token::Word::Keyword(
            $crate::token::Keyword::Function,
        ))
    };
    ("if") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::If))
    };
    ("import") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Import))
    };
    ("in") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::In))
    };
    ("new") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::New))
    };
    ("return") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Return))
    };
    ("super") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Super))
    };
    ("switch") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Switch))
    };
    ("this") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::This))
    };
    ("throw") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Throw))
    };
    ("try") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Try))
    };
    ("typeof") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::TypeOf))
    };
    ("var") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Var))
    };
    ("void") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::Void))
    };
    ("while") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::While))
    };
    ("with") => {
        $crate::token::Token::Word($crate::token::Word::Keyword($crate::token::Keyword::With))
    };

    ("null") => {
        $crate::token::Token::Word($crate::token::Word::Null)
    };
    ("true") => {
        $crate::token::Token::Word($crate::token::Word::True)
    };
    ("false") => {
        $crate::token::Token::Word($crate::token::Word::False)
    };
}
