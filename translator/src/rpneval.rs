use crate::parser::RPNExpr;
use lexers::{Op, Token, TokenKind};
use std::fmt;
use tracing::trace;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum EvalErr {
    DivisionByZero,
    /// An operator found less than two values to work on.
    MissingOperand,
    /// More than one value left once the postfix ran out.
    DanglingOperands(usize),
    BadToken(TokenKind),
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EvalErr::DivisionByZero => write!(f, "division by zero"),
            EvalErr::MissingOperand => write!(f, "operator is missing an operand"),
            EvalErr::DanglingOperands(n) => write!(f, "{} values left without an operator", n),
            EvalErr::BadToken(kind) => write!(f, "unexpected {} in postfix notation", kind),
        }
    }
}

impl std::error::Error for EvalErr {}

/// Apply a binary operator. Only an exact zero divisor is refused.
pub fn apply(op: Op, lhs: f64, rhs: f64) -> Result<f64, EvalErr> {
    match op {
        Op::Add => Ok(lhs + rhs),
        Op::Sub => Ok(lhs - rhs),
        Op::Mul => Ok(lhs * rhs),
        Op::Div if rhs == 0.0 => Err(EvalErr::DivisionByZero),
        Op::Div => Ok(lhs / rhs),
    }
}

/// Run the postfix sequence on an operand stack.
pub fn reduce(rpn: &RPNExpr) -> Result<f64, EvalErr> {
    let mut operands = Vec::new();

    for token in rpn.iter() {
        match **token {
            Token::Number(num) => operands.push(num),
            Token::Operator(op) => {
                // pushed left to right, so the right hand side pops first
                let r = operands.pop().ok_or(EvalErr::MissingOperand)?;
                let l = operands.pop().ok_or(EvalErr::MissingOperand)?;
                let value = apply(op, l, r)?;
                trace!("{} {} {} = {}", l, op.symbol(), r, value);
                operands.push(value);
            }
            ref other => return Err(EvalErr::BadToken(other.kind())),
        }
    }
    match operands.len() {
        0 => Err(EvalErr::MissingOperand),
        1 => Ok(operands[0]),
        n => Err(EvalErr::DanglingOperands(n)),
    }
}
