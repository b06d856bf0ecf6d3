mod converter;
mod lexer;
mod token;

pub use converter::{Converter, Strictness};
pub use lexer::Lexer;
pub use token::{
    has_higher_precedence, is_right_associative, precedence_of, Assoc, Operator, Precedence,
    Token,
};
