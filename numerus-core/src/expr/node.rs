use std::fmt;

use super::EvalError;

/// Binary operators of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Pow => 4,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        let value = match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs / rhs
            }
            BinOp::Pow => power(lhs, rhs)?,
        };
        checked(value)
    }
}

/// Integral exponents go through `powi`, which is exact for small cases.
fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if exponent < 0.0 && base == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    let integral = exponent.fract() == 0.0 && exponent.abs() <= f64::from(i32::MAX);
    if integral {
        #[allow(clippy::cast_possible_truncation)]
        Ok(base.powi(exponent as i32))
    } else {
        Ok(base.powf(exponent))
    }
}

fn checked(value: f64) -> Result<f64, EvalError> {
    if value.is_nan() {
        Err(EvalError::Domain)
    } else if value.is_infinite() {
        Err(EvalError::NonFinite)
    } else {
        Ok(value)
    }
}

/// Expression tree built once by the parser and walked on every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    Var,
    Neg(Box<Node>),
    Binary {
        op: BinOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
}

/// Precedence of unary minus, between `*` and `^`.
const NEG_PRECEDENCE: u8 = 3;
/// Precedence of atoms, which never need parentheses.
const ATOM_PRECEDENCE: u8 = 5;

impl Node {
    pub(crate) fn binary(op: BinOp, lhs: Node, rhs: Node) -> Self {
        Node::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub(crate) fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::Var => checked(x),
            Node::Neg(inner) => Ok(-inner.eval(x)?),
            Node::Binary { op, lhs, rhs } => op.apply(lhs.eval(x)?, rhs.eval(x)?),
        }
    }

    /// True if the tree mentions `x`.
    pub(crate) fn has_var(&self) -> bool {
        match self {
            Node::Number(_) => false,
            Node::Var => true,
            Node::Neg(inner) => inner.has_var(),
            Node::Binary { lhs, rhs, .. } => lhs.has_var() || rhs.has_var(),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Node::Number(_) | Node::Var => ATOM_PRECEDENCE,
            Node::Neg(_) => NEG_PRECEDENCE,
            Node::Binary { op, .. } => op.precedence(),
        }
    }

    /// Writes the node, parenthesized if it binds looser than `min`.
    fn write(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        let wrap = self.precedence() < min;
        if wrap {
            f.write_str("(")?;
        }
        match self {
            Node::Number(value) => write!(f, "{value}")?,
            Node::Var => f.write_str("x")?,
            Node::Neg(inner) => {
                f.write_str("-")?;
                inner.write(f, NEG_PRECEDENCE)?;
            }
            Node::Binary { op, lhs, rhs } => {
                let prec = op.precedence();
                // `^` is right associative, the rest are left associative.
                let (lhs_min, rhs_min) = if *op == BinOp::Pow {
                    (ATOM_PRECEDENCE, NEG_PRECEDENCE)
                } else {
                    (prec, prec + 1)
                };
                lhs.write(f, lhs_min)?;
                write!(f, "{}", op.symbol())?;
                rhs.write(f, rhs_min)?;
            }
        }
        if wrap {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, 0)
    }
}
