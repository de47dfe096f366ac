pub use error::TranslationError;
pub use expression::{evaluate, Expression, Translation};
pub use parser::{ParseError, RPNExpr, ShuntingParser};
pub use rpneval::{apply, reduce, EvalErr};
pub use validator::{is_valid, validate, SyntaxError};

mod error;
mod expression;

pub mod parser;

pub mod validator;

mod rpnprint;
mod rpneval;

#[cfg(test)]
mod oracle_test;
