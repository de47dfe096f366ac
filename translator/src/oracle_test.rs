// Differential test: the shunting parser + RPN reduction against a plain
// recursive descent evaluator over the same lexemes.
use crate::expression::Expression;
use crate::rpneval::{apply, EvalErr};
use crate::validator::validate;
use lexers::{Op, Token};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Oracle<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Oracle<'a> {
    fn eval(tokens: &'a [Token]) -> Result<f64, EvalErr> {
        let mut oracle = Oracle{tokens, pos: 0};
        let value = oracle.expr()?;
        assert_eq!(oracle.pos, tokens.len(), "trailing lexemes");
        Ok(value)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, EvalErr> {
        let mut acc = self.term()?;
        while let Some(&Token::Operator(op @ (Op::Add | Op::Sub))) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            acc = apply(op, acc, rhs)?;
        }
        Ok(acc)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, EvalErr> {
        let mut acc = self.factor()?;
        while let Some(&Token::Operator(op @ (Op::Mul | Op::Div))) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            acc = apply(op, acc, rhs)?;
        }
        Ok(acc)
    }

    // factor := number | '(' expr ')'
    fn factor(&mut self) -> Result<f64, EvalErr> {
        let token = self.peek().ok_or(EvalErr::MissingOperand)?;
        self.pos += 1;
        match *token {
            Token::Number(n) => Ok(n),
            Token::OBracket => {
                let value = self.expr()?;
                assert_eq!(self.peek(), Some(&Token::CBracket));
                self.pos += 1;
                Ok(value)
            }
            ref other => Err(EvalErr::BadToken(other.kind())),
        }
    }
}

fn random_number(rng: &mut StdRng) -> String {
    if rng.gen_bool(0.5) {
        rng.gen_range(0..20).to_string()
    } else {
        format!("{}.{}", rng.gen_range(0..100), rng.gen_range(0..100))
    }
}

fn random_expr(rng: &mut StdRng, depth: usize) -> String {
    if depth == 0 || rng.gen_bool(0.25) {
        return random_number(rng);
    }
    if rng.gen_bool(0.2) {
        return format!("({})", random_expr(rng, depth - 1));
    }
    let op = ['+', '-', '*', '/'][rng.gen_range(0..4)];
    format!("{}{}{}", random_expr(rng, depth - 1), op, random_expr(rng, depth - 1))
}

fn same(lhs: f64, rhs: f64) -> bool {
    lhs == rhs || (lhs.is_nan() && rhs.is_nan())
}

#[test]
fn shunting_matches_recursive_descent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut failures = 0;
    for _ in 0..2000 {
        let src = random_expr(&mut rng, 6);
        let expr = Expression::new(&src).unwrap();
        assert_eq!(validate(expr.lexemes()), Ok(()), "{}", src);

        let expected = Oracle::eval(expr.lexemes());
        let actual = expr.calculate().map_err(|e| match e {
            crate::error::TranslationError::Eval(e) => e,
            other => panic!("{}: {}", src, other),
        });
        match (expected, actual) {
            (Ok(e), Ok(a)) => assert!(same(e, a), "{}: {} != {}", src, e, a),
            (Err(e), Err(a)) => {
                assert_eq!(e, a, "{}", src);
                failures += 1;
            }
            (e, a) => panic!("{}: {:?} vs {:?}", src, e, a),
        }
    }
    // zeros are generated, make sure the error path got some exercise
    assert!(failures > 0);
}

#[test]
fn oracle_sanity() {
    let expr = Expression::new("(2+2)*2+1").unwrap();
    assert_eq!(Oracle::eval(expr.lexemes()), Ok(9.0));
    let expr = Expression::new("4-2-1").unwrap();
    assert_eq!(Oracle::eval(expr.lexemes()), Ok(1.0));
    let expr = Expression::new("1/(3-3)").unwrap();
    assert_eq!(Oracle::eval(expr.lexemes()), Err(EvalErr::DivisionByZero));
}
