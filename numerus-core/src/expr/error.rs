use thiserror::Error;

/// Errors that can occur when compiling an expression.
///
/// Positions are character offsets into the normalized text, that is after
/// whitespace has been stripped.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// The text is empty or only whitespace.
    #[error("expression is empty")]
    Empty,

    /// A character outside the grammar's alphabet.
    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A name other than `x`, such as `y` or `sin`.
    #[error("unknown identifier {name:?} at position {pos}; the only variable is `x`")]
    UnknownIdentifier { name: String, pos: usize },

    /// A digit run that is not a number, e.g. `1.2.3`.
    #[error("invalid number {text:?} at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    /// A valid token in a place the grammar does not allow it.
    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    /// The text ends where an operand is still expected.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// An opening parenthesis is never closed, or a closing one has no match.
    #[error("unbalanced parenthesis at position {pos}")]
    UnbalancedParen { pos: usize },

    /// Nesting goes deeper than the parser accepts.
    #[error("expression nests too deeply at position {pos}")]
    TooDeep { pos: usize },
}

/// Errors that can occur when evaluating a compiled expression at a point.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum EvalError {
    /// A divisor evaluated to zero, or zero was raised to a negative power.
    #[error("division by zero")]
    DivisionByZero,

    /// The result is not a real number, e.g. `(-8)^0.5`.
    #[error("result is undefined over the reals")]
    Domain,

    /// A value overflowed to infinity.
    #[error("result is not finite")]
    NonFinite,
}
