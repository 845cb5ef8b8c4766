//! Compiled expression tree.

use super::registry::Function;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}
impl BinaryOp {
    #[inline]
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Rem => a % b,
            BinaryOp::Pow => a.powf(b),
        }
    }
}


/// Names are resolved while parsing: constants fold into
/// [`Node::Number`] and calls carry the registry entry itself, so
/// evaluation never looks anything up.
#[derive(Debug, Clone)]
pub(crate) enum Node {
    Number(f64),
    Variable,
    Neg(Box<Node>),
    Binary { op: BinaryOp, lhs: Box<Node>, rhs: Box<Node> },
    Call { func: Function, args: Vec<Node> },
}

impl Node {
    pub(crate) fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Number(v)              => *v,
            Node::Variable               => x,
            Node::Neg(inner)             => -inner.eval(x),
            Node::Binary { op, lhs, rhs } => op.apply(lhs.eval(x), rhs.eval(x)),
            Node::Call { func, args }    => {
                let values: Vec<f64> = args.iter().map(|a| a.eval(x)).collect();
                // arity was checked when the call was parsed
                func.call(&values).unwrap_or(f64::NAN)
            }
        }
    }

    /// `true` if the tree references `x`.
    pub(crate) fn depends_on_x(&self) -> bool {
        match self {
            Node::Number(_)              => false,
            Node::Variable               => true,
            Node::Neg(inner)             => inner.depends_on_x(),
            Node::Binary { lhs, rhs, .. } => lhs.depends_on_x() || rhs.depends_on_x(),
            Node::Call { args, .. }      => args.iter().any(Node::depends_on_x),
        }
    }
}
