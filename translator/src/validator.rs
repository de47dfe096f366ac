use lexers::{Token, TokenKind};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SyntaxError {
    Empty,
    /// `next` may not follow `current`, `position` is the index of `current`.
    Adjacency { position: usize, current: TokenKind, next: TokenKind },
    /// The expression can't end with this kind of token.
    Trailing { position: usize, kind: TokenKind },
    /// Brackets don't pair up. Negative depth means a ')' came first.
    Unbalanced { depth: isize },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SyntaxError::Empty => write!(f, "empty expression"),
            SyntaxError::Adjacency { position, current, next } => write!(
                f, "{} can't follow {} (token {})", next, current, position + 1),
            SyntaxError::Trailing { kind, .. } => write!(f, "expression ends with {}", kind),
            SyntaxError::Unbalanced { depth } if depth < 0 => write!(f, "missing '('"),
            SyntaxError::Unbalanced { .. } => write!(f, "missing ')'"),
        }
    }
}

impl std::error::Error for SyntaxError {}

// adjacency table: which kinds may not come right after `current`
fn forbids(current: TokenKind, next: TokenKind) -> bool {
    use TokenKind::*;
    match current {
        Operator | OBracket => matches!(next, Operator | CBracket),
        Number | CBracket => matches!(next, Number | OBracket),
    }
}

/// Check pairwise adjacency and bracket balance, reporting the first
/// violation left to right.
pub fn validate(tokens: &[Token]) -> Result<(), SyntaxError> {
    let last = tokens.last().ok_or(SyntaxError::Empty)?;
    let mut depth: isize = 0;

    for (position, pair) in tokens.windows(2).enumerate() {
        let (current, next) = (pair[0].kind(), pair[1].kind());
        if forbids(current, next) {
            return Err(SyntaxError::Adjacency { position, current, next });
        }
        match current {
            TokenKind::OBracket => depth += 1,
            TokenKind::CBracket => depth -= 1,
            _ => (),
        }
        if depth < 0 {
            return Err(SyntaxError::Unbalanced { depth });
        }
    }

    // the loop only visits tokens with a successor, account for the last one
    let position = tokens.len() - 1;
    match last.kind() {
        kind @ (TokenKind::Operator | TokenKind::OBracket) => {
            return Err(SyntaxError::Trailing { position, kind });
        }
        TokenKind::CBracket => depth -= 1,
        TokenKind::Number => (),
    }
    if depth != 0 {
        return Err(SyntaxError::Unbalanced { depth });
    }
    Ok(())
}

pub fn is_valid(tokens: &[Token]) -> bool {
    validate(tokens).is_ok()
}
