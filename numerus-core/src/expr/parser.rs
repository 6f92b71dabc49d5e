use super::{
    ParseError,
    lexer::{Lexeme, Token},
    node::{BinOp, Node},
};

/// Deepest nesting the parser accepts.
///
/// Bounds both the parser's own recursion (parentheses, signs, powers) and
/// the height of the tree it builds, so the tree can be evaluated and
/// dropped recursively.
pub(crate) const MAX_DEPTH: usize = 256;

/// A parsed subtree and its height; leaves have height zero.
type Parsed = Result<(Node, usize), ParseError>;

/// Recursive descent parser over a token stream.
///
/// ```text
/// expr  := term (('+' | '-') term)*
/// term  := unary (('*' | '/') unary)*
/// unary := ('+' | '-') unary | power
/// power := atom ('^' unary)?
/// atom  := number | 'x' | '(' expr ')'
/// ```
pub(crate) struct Parser<'a> {
    lexemes: &'a [Lexeme],
    next: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(lexemes: &'a [Lexeme]) -> Self {
        Self {
            lexemes,
            next: 0,
            depth: 0,
        }
    }

    /// Parses the whole stream into a single tree.
    pub(crate) fn parse(mut self) -> Result<Node, ParseError> {
        if self.lexemes.is_empty() {
            return Err(ParseError::Empty);
        }

        let (node, _) = self.expr()?;

        match self.peek() {
            None => Ok(node),
            Some(Lexeme {
                token: Token::RParen,
                pos,
            }) => Err(ParseError::UnbalancedParen { pos }),
            Some(lexeme) => Err(unexpected(lexeme)),
        }
    }

    fn peek(&self) -> Option<Lexeme> {
        self.lexemes.get(self.next).copied()
    }

    fn bump(&mut self) -> Option<Lexeme> {
        let lexeme = self.peek()?;
        self.next += 1;
        Some(lexeme)
    }

    /// Consumes the next token if `select` maps it to an operator.
    fn operator(&mut self, select: impl Fn(Token) -> Option<BinOp>) -> Option<(BinOp, usize)> {
        let lexeme = self.peek()?;
        let op = select(lexeme.token)?;
        self.next += 1;
        Some((op, lexeme.pos))
    }

    /// Parses `inner` one recursion level deeper, failing past [`MAX_DEPTH`].
    fn nested(&mut self, pos: usize, inner: impl FnOnce(&mut Self) -> Parsed) -> Parsed {
        if self.depth == MAX_DEPTH {
            return Err(ParseError::TooDeep { pos });
        }
        self.depth += 1;
        let parsed = inner(self)?;
        self.depth -= 1;
        Ok(parsed)
    }

    /// Parses a left-associative chain of `operand`s joined by `select`.
    fn chain(
        &mut self,
        operand: fn(&mut Self) -> Parsed,
        select: fn(Token) -> Option<BinOp>,
    ) -> Parsed {
        let (mut node, mut height) = operand(self)?;
        while let Some((op, pos)) = self.operator(select) {
            let (rhs, rhs_height) = operand(self)?;
            height = grow(height.max(rhs_height), pos)?;
            node = Node::binary(op, node, rhs);
        }
        Ok((node, height))
    }

    fn expr(&mut self) -> Parsed {
        self.chain(Self::term, |token| match token {
            Token::Plus => Some(BinOp::Add),
            Token::Minus => Some(BinOp::Sub),
            _ => None,
        })
    }

    fn term(&mut self) -> Parsed {
        self.chain(Self::unary, |token| match token {
            Token::Star => Some(BinOp::Mul),
            Token::Slash => Some(BinOp::Div),
            _ => None,
        })
    }

    fn unary(&mut self) -> Parsed {
        let Some(lexeme) = self.peek() else {
            return self.power();
        };
        let negate = match lexeme.token {
            Token::Minus => true,
            Token::Plus => false,
            _ => return self.power(),
        };

        self.next += 1;
        let (operand, height) = self.nested(lexeme.pos, Self::unary)?;
        if negate {
            Ok((Node::Neg(Box::new(operand)), grow(height, lexeme.pos)?))
        } else {
            Ok((operand, height))
        }
    }

    fn power(&mut self) -> Parsed {
        let (base, base_height) = self.atom()?;
        let Some((op, pos)) =
            self.operator(|token| (token == Token::Caret).then_some(BinOp::Pow))
        else {
            return Ok((base, base_height));
        };

        let (exponent, exponent_height) = self.nested(pos, Self::unary)?;
        let height = grow(base_height.max(exponent_height), pos)?;
        Ok((Node::binary(op, base, exponent), height))
    }

    fn atom(&mut self) -> Parsed {
        let lexeme = self.bump().ok_or(ParseError::UnexpectedEnd)?;
        match lexeme.token {
            Token::Number(value) => Ok((Node::Number(value), 0)),
            Token::Var => Ok((Node::Var, 0)),
            Token::LParen => {
                let inner = self.nested(lexeme.pos, Self::expr)?;
                match self.bump() {
                    Some(Lexeme {
                        token: Token::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(ParseError::UnbalancedParen { pos: lexeme.pos }),
                }
            }
            _ => Err(unexpected(lexeme)),
        }
    }
}

/// Height of a node one level above a subtree of height `height`.
fn grow(height: usize, pos: usize) -> Result<usize, ParseError> {
    if height == MAX_DEPTH {
        return Err(ParseError::TooDeep { pos });
    }
    Ok(height + 1)
}

fn unexpected(lexeme: Lexeme) -> ParseError {
    ParseError::UnexpectedToken {
        found: lexeme.token.to_string(),
        pos: lexeme.pos,
    }
}
