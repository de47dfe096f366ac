#![deny(warnings)]

use crate::scanner::Scanner;
use crate::token::{Op, Token};
use std::fmt;
use std::str::FromStr;

/// Positions are zero based char indexes into the source.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LexError {
    /// A character that doesn't start any lexeme.
    Unrecognized { found: char, position: usize },
    /// A number literal of `len` chars too large for an f64.
    OutOfRange { position: usize, len: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match *self {
            LexError::Unrecognized { position, .. } => position,
            LexError::OutOfRange { position, .. } => position,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LexError::Unrecognized { found, position } =>
                write!(f, "unrecognized character '{}' at position {}", found, position),
            LexError::OutOfRange { position, len } =>
                write!(f, "number at position {} ({} digits) is out of range", position, len),
        }
    }
}

impl std::error::Error for LexError {}

/// Yields tokens left to right, stops at the first '=' or at the
/// first character it can't make sense of.
pub struct ArithTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    done: bool,
}

impl<I: Iterator<Item=char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        ArithTokenizer{src: Scanner::new(source), done: false}
    }

    fn get_token(&mut self) -> Option<Result<Token, LexError>> {
        let start = self.src.position();
        if let Some(symbol) = self.src.scan_arith_symbol() {
            let token = match symbol {
                '(' => Token::OBracket,
                ')' => Token::CBracket,
                '+' => Token::Operator(Op::Add),
                '-' => Token::Operator(Op::Sub),
                '*' => Token::Operator(Op::Mul),
                '/' => Token::Operator(Op::Div),
                _ => unreachable!(),
            };
            Some(Ok(token))
        } else if let Some(num) = self.src.scan_decimal() {
            // digit runs always parse, but overflow to inf instead of failing
            match f64::from_str(&num) {
                Ok(n) if n.is_finite() => Some(Ok(Token::Number(n))),
                _ => Some(Err(LexError::OutOfRange{position: start, len: num.chars().count()})),
            }
        } else {
            match self.src.next() {
                None => None,
                // calculator style terminator, rest of the input is ignored
                Some('=') => None,
                Some(found) => Some(Err(LexError::Unrecognized{found, position: start})),
            }
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for ArithTokenizer<I> {
    type Item = Result<Token, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.get_token();
        if !matches!(token, Some(Ok(_))) {
            self.done = true;
        }
        token
    }
}

/// Split `text` into its lexemes.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    ArithTokenizer::new(text.chars()).collect()
}

///////////////////////////////////////////////////////////////////////////////
