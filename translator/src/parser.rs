use lexers::Token;
use std::fmt;
use std::ops::Deref;
use tracing::trace;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ParseError {
    MissingOBracket,
    MissingCBracket,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseError::MissingOBracket => write!(f, "')' without a matching '('"),
            ParseError::MissingCBracket => write!(f, "'(' without a matching ')'"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Postfix ordering of a lexeme sequence. Holds references into the
/// lexemes it was parsed from, brackets are dropped.
#[derive(PartialEq, Debug)]
pub struct RPNExpr<'a>(pub Vec<&'a Token>);

impl<'a> Deref for RPNExpr<'a> {
    type Target = [&'a Token];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for RPNExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
        }
        for token in tokens {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse(tokens: &[Token]) -> Result<RPNExpr<'_>, ParseError> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut stack: Vec<&Token> = Vec::new();

        for token in tokens {
            match *token {
                Token::Number(_) => out.push(token),
                Token::OBracket => stack.push(token),
                Token::CBracket => loop {
                    match stack.pop() {
                        Some(Token::OBracket) => break, // peel matching '('
                        Some(top) => out.push(top),
                        None => return Err(ParseError::MissingOBracket),
                    }
                },
                Token::Operator(op) => {
                    // >= keeps equal priorities left associative
                    while let Some(&top) = stack.last() {
                        match *top {
                            Token::Operator(prev) if prev.priority() >= op.priority() => {
                                trace!("pop {} before {}", prev.symbol(), op.symbol());
                                stack.pop();
                                out.push(top);
                            }
                            _ => break,
                        }
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match *top {
                Token::OBracket => return Err(ParseError::MissingCBracket),
                _ => out.push(top),
            }
        }
        Ok(RPNExpr(out))
    }
}
