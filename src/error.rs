use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A `)` without a matching `(`, or a `(` left open at the end of input
    UnbalancedParentheses { offset: usize },
    /// A character that is neither an operand, an operator nor a parenthesis
    InvalidCharacter { ch: char, offset: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedParentheses { offset } => {
                write!(f, "Unbalanced parenthesis at offset {offset}")
            }
            Self::InvalidCharacter { ch, offset } => {
                write!(f, "Invalid character {ch:?} at offset {offset}")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

pub type PResult<T> = Result<T, ErrorKind>;
