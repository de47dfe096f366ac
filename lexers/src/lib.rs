mod scanner;
mod char_scanner;
mod token;
mod arith_tokenizer;

pub use scanner::Scanner;
pub use token::{render, Op, Token, TokenKind};
pub use arith_tokenizer::{tokenize, ArithTokenizer, LexError};
