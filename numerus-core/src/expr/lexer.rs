use std::fmt;

use super::ParseError;

/// A token of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Var,
    Plus,
    Minus,
    Star,
    Slash,
    /// `^` or `**`.
    Caret,
    LParen,
    RParen,
}

impl Token {
    /// True for tokens that can end an operand.
    fn ends_operand(self) -> bool {
        matches!(self, Token::Number(_) | Token::Var | Token::RParen)
    }

    /// True for tokens that can start an operand.
    fn starts_operand(self) -> bool {
        matches!(self, Token::Number(_) | Token::Var | Token::LParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {value}"),
            Token::Var => f.write_str("`x`"),
            Token::Plus => f.write_str("`+`"),
            Token::Minus => f.write_str("`-`"),
            Token::Star => f.write_str("`*`"),
            Token::Slash => f.write_str("`/`"),
            Token::Caret => f.write_str("`^`"),
            Token::LParen => f.write_str("`(`"),
            Token::RParen => f.write_str("`)`"),
        }
    }
}

/// A token and its character offset in the normalized text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lexeme {
    pub(crate) token: Token,
    pub(crate) pos: usize,
}

/// Strips whitespace and lowercases.
pub(crate) fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Tokenizes `text`, inserting the multiplications implied by adjacency
/// such as `2x`, `x2`, `x(`, `)x` and `)(`.
///
/// # Errors
///
/// Returns an error for characters outside the grammar, identifiers other
/// than `x`, and malformed numeric literals.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Lexeme>, ParseError> {
    let chars: Vec<char> = normalize(text).chars().collect();
    let mut lexemes: Vec<Lexeme> = Vec::with_capacity(chars.len());
    let mut pos = 0;

    while pos < chars.len() {
        let start = pos;
        let token = match chars[pos] {
            c if c.is_ascii_digit() || c == '.' => {
                while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
                    pos += 1;
                }
                let text: String = chars[start..pos].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber { text, pos: start })?;
                Token::Number(value)
            }
            'x' => {
                pos += 1;
                Token::Var
            }
            c if c.is_alphabetic() => {
                while pos < chars.len() && chars[pos].is_alphanumeric() && chars[pos] != 'x' {
                    pos += 1;
                }
                return Err(ParseError::UnknownIdentifier {
                    name: chars[start..pos].iter().collect(),
                    pos: start,
                });
            }
            '*' if chars.get(pos + 1) == Some(&'*') => {
                pos += 2;
                Token::Caret
            }
            ch => {
                pos += 1;
                match ch {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '^' => Token::Caret,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    _ => return Err(ParseError::UnexpectedChar { ch, pos: start }),
                }
            }
        };

        if let Some(prev) = lexemes.last()
            && prev.token.ends_operand()
            && token.starts_operand()
        {
            lexemes.push(Lexeme {
                token: Token::Star,
                pos: start,
            });
        }
        lexemes.push(Lexeme { token, pos: start });
    }

    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        tokenize(text)
            .expect("should tokenize")
            .into_iter()
            .map(|lexeme| lexeme.token)
            .collect()
    }

    #[test]
    fn strips_whitespace_and_lowercases() {
        assert_eq!(normalize(" 3 X ^ 2 "), "3x^2");
        assert_eq!(
            tokens("X ^ 2"),
            vec![Token::Var, Token::Caret, Token::Number(2.0)]
        );
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            tokens("x**3*2"),
            vec![
                Token::Var,
                Token::Caret,
                Token::Number(3.0),
                Token::Star,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn inserts_implicit_multiplication() {
        use Token::*;
        assert_eq!(tokens("2x"), vec![Number(2.0), Star, Var]);
        assert_eq!(tokens("x2"), vec![Var, Star, Number(2.0)]);
        assert_eq!(tokens("x(1)"), vec![Var, Star, LParen, Number(1.0), RParen]);
        assert_eq!(tokens("(1)x"), vec![LParen, Number(1.0), RParen, Star, Var]);
        assert_eq!(
            tokens("(x)(x)"),
            vec![LParen, Var, RParen, Star, LParen, Var, RParen]
        );
        assert_eq!(tokens("xx"), vec![Var, Star, Var]);
    }

    #[test]
    fn whitespace_between_digits_joins_them() {
        assert_eq!(tokens("1 2"), vec![Token::Number(12.0)]);
    }

    #[test]
    fn rejects_unknown_identifiers() {
        assert_eq!(
            tokenize("sin(x)"),
            Err(ParseError::UnknownIdentifier {
                name: "sin".into(),
                pos: 0
            })
        );
    }

    #[test]
    fn rejects_foreign_characters() {
        assert_eq!(
            tokenize("x;1"),
            Err(ParseError::UnexpectedChar { ch: ';', pos: 1 })
        );
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            tokenize("1.2.3"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(tokenize("."), Err(ParseError::InvalidNumber { .. })));
    }
}
