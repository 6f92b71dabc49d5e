//! Closed-grammar expressions in one variable `x`.
//!
//! Text is compiled once into an expression tree and evaluated by walking the
//! tree, so nothing outside the arithmetic grammar can ever run. The accepted
//! language is numbers, `x`, `+ - * /`, `^` (or `**`) for powers, parentheses,
//! and implicit multiplication between adjacent operands (`2x`, `x(x+1)`).
//! Whitespace is ignored and `X` is read as `x`. Nesting is capped, so
//! pathological text fails with [`ParseError::TooDeep`].

mod error;
mod lexer;
mod node;
mod parser;

use std::{fmt, str::FromStr};

pub use error::{EvalError, ParseError};

pub(crate) use lexer::{Token, tokenize};

use crate::Function;

use node::Node;
use parser::Parser;

/// A compiled single-variable expression.
///
/// Compiling validates the text against the grammar; evaluation afterwards
/// only fails for points where the arithmetic itself is undefined.
///
/// # Examples
/// ```
/// use numerus_core::Expression;
///
/// let f = Expression::compile("x^2 - 4").unwrap();
/// assert_eq!(f.evaluate(2.0), Ok(0.0));
/// assert_eq!(f.evaluate(0.0), Ok(-4.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    tree: Node,
}

impl Expression {
    /// Compiles `text` into an expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text contains anything outside the
    /// grammar or is not a single well-formed expression.
    pub fn compile(text: &str) -> Result<Self, ParseError> {
        let lexemes = tokenize(text)?;
        let tree = Parser::new(&lexemes).parse()?;
        Ok(Self {
            source: text.to_string(),
            tree,
        })
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] on division by zero, a result that is not a
    /// real number, or overflow.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        self.tree.eval(x)
    }

    /// Returns the text the expression was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the expression with every operator explicit, e.g. `2*x^2-4`
    /// for `2x^2 - 4`.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.tree.to_string()
    }

    /// True if the expression does not depend on `x`.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        !self.tree.has_var()
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Function for Expression {
    type Error = EvalError;

    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.evaluate(x)
    }
}
