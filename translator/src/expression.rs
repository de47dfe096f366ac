use crate::error::TranslationError;
use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::reduce;
use crate::validator::{self, SyntaxError};
use lexers::{render, tokenize, LexError, Token};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// An arithmetic expression and the lexemes it was split into.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    lexemes: Vec<Token>,
}

impl Expression {
    pub fn new(text: &str) -> Result<Expression, LexError> {
        let lexemes = tokenize(text)?;
        debug!("{:?} -> {} lexemes", text, lexemes.len());
        Ok(Expression{source: text.to_string(), lexemes})
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn lexemes(&self) -> &[Token] {
        &self.lexemes
    }

    pub fn validate(&self) -> Result<(), SyntaxError> {
        validator::validate(&self.lexemes)
    }

    /// Validated postfix order of the lexemes.
    pub fn postfix(&self) -> Result<RPNExpr<'_>, TranslationError> {
        self.validate()?;
        let rpn = ShuntingParser::parse(&self.lexemes)?;
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }

    pub fn calculate(&self) -> Result<f64, TranslationError> {
        Ok(self.translate()?.answer)
    }

    pub fn translate(&self) -> Result<Translation<'_>, TranslationError> {
        let postfix = self.postfix()?;
        let answer = reduce(&postfix)?;
        debug!("answer: {}", answer);
        Ok(Translation{lexemes: &self.lexemes, postfix, answer})
    }
}

impl FromStr for Expression {
    type Err = LexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::new(s)
    }
}

/// Everything a successful run produces.
#[derive(Debug)]
pub struct Translation<'a> {
    pub lexemes: &'a [Token],
    pub postfix: RPNExpr<'a>,
    pub answer: f64,
}

impl fmt::Display for Translation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The source expression:")?;
        writeln!(f, "{}", render(self.lexemes))?;
        writeln!(f, "The postfix notation:")?;
        writeln!(f, "{}", self.postfix)?;
        writeln!(f, "The answer:")?;
        write!(f, "{}", self.answer)
    }
}

/// Tokenize, validate, convert and reduce `text` in one go.
pub fn evaluate(text: &str) -> Result<f64, TranslationError> {
    Expression::new(text)?.calculate()
}
