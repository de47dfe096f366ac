use crate::parser::ParseError;
use crate::rpneval::EvalErr;
use crate::validator::SyntaxError;
use lexers::LexError;
use std::fmt;

/// Whichever pipeline stage gave up first.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TranslationError {
    Lex(LexError),
    Syntax(SyntaxError),
    Parse(ParseError),
    Eval(EvalErr),
}

impl TranslationError {
    pub fn stage(&self) -> &'static str {
        match *self {
            TranslationError::Lex(_) => "lexical analysis",
            TranslationError::Syntax(_) => "syntactic analysis",
            TranslationError::Parse(_) => "postfix conversion",
            TranslationError::Eval(_) => "calculation",
        }
    }
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: ", self.stage())?;
        match self {
            TranslationError::Lex(e) => write!(f, "{}", e),
            TranslationError::Syntax(e) => write!(f, "{}", e),
            TranslationError::Parse(e) => write!(f, "{}", e),
            TranslationError::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TranslationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslationError::Lex(e) => Some(e),
            TranslationError::Syntax(e) => Some(e),
            TranslationError::Parse(e) => Some(e),
            TranslationError::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for TranslationError {
    fn from(e: LexError) -> Self {
        TranslationError::Lex(e)
    }
}

impl From<SyntaxError> for TranslationError {
    fn from(e: SyntaxError) -> Self {
        TranslationError::Syntax(e)
    }
}

impl From<ParseError> for TranslationError {
    fn from(e: ParseError) -> Self {
        TranslationError::Parse(e)
    }
}

impl From<EvalErr> for TranslationError {
    fn from(e: EvalErr) -> Self {
        TranslationError::Eval(e)
    }
}
