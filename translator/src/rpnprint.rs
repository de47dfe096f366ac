use crate::parser::RPNExpr;
use crate::rpneval::EvalErr;
use lexers::{Op, Token};

// operands bind tighter than any operator
const LEAF_PRIORITY: usize = usize::MAX;

#[derive(Debug, Clone)]
enum AST {
    Leaf(f64),
    Node(Op, Box<AST>, Box<AST>),
}

impl RPNExpr<'_> {
    fn build_ast(&self) -> Result<AST, EvalErr> {
        let mut ops = Vec::new();
        for token in self.iter() {
            match **token {
                Token::Number(n) => ops.push(AST::Leaf(n)),
                Token::Operator(op) => {
                    let rhs = ops.pop().ok_or(EvalErr::MissingOperand)?;
                    let lhs = ops.pop().ok_or(EvalErr::MissingOperand)?;
                    ops.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                ref other => return Err(EvalErr::BadToken(other.kind())),
            }
        }
        match ops.len() {
            1 => ops.pop().ok_or(EvalErr::MissingOperand),
            0 => Err(EvalErr::MissingOperand),
            n => Err(EvalErr::DanglingOperands(n)),
        }
    }

    /// Render back to infix with only the brackets evaluation order needs.
    pub fn infix(&self) -> Result<String, EvalErr> {
        fn printer(root: &AST) -> (String, usize) {
            match root {
                AST::Leaf(n) => (format!("{}", n), LEAF_PRIORITY),
                AST::Node(op, lhs, rhs) => {
                    let (lhs, rhs) = (printer(lhs), printer(rhs));
                    let prio = op.priority();
                    let lh = if prio > lhs.1 {
                        format!("({})", lhs.0)
                    } else {
                        lhs.0
                    };
                    // everything is left associative, so an equal priority on
                    // the right was grouped explicitly: '2-(3-4)', '2+(3+4)'
                    let rh = if prio >= rhs.1 {
                        format!("({})", rhs.0)
                    } else {
                        rhs.0
                    };
                    (format!("{} {} {}", lh, op.symbol(), rh), prio)
                }
            }
        }

        Ok(printer(&self.build_ast()?).0)
    }
}

///////////////////////////////////////////////////////////////////////////////
