use std::fmt;

/// The four binary operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbol(&self) -> char {
        match *self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Binding strength, multiplicative binds tighter than additive.
    pub fn priority(&self) -> usize {
        match *self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }
}

/// Discriminant of a `Token`, used wherever only the variant matters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Number,
    Operator,
    OBracket,
    CBracket,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::OBracket => write!(f, "'('"),
            TokenKind::CBracket => write!(f, "')'"),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    Operator(Op),
    OBracket,
    CBracket,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match *self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
            Token::OBracket => TokenKind::OBracket,
            Token::CBracket => TokenKind::CBracket,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            // shortest representation that parses back to the same f64
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::OBracket => write!(f, "("),
            Token::CBracket => write!(f, ")"),
        }
    }
}

/// Render a lexeme sequence the way it would be typed, no separators.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect()
}
