use std::str::CharIndices;

use unicode_general_category::{get_general_category, GeneralCategory};

use super::token::{Operator, Token};

/// Splits an expression into single-character tokens, paired with their byte offset.
///
/// Nothing is skipped here, whitespace included: characters outside the
/// known classes come out as [`Token::Invalid`] and the converter decides
/// what to do with them.
pub struct Lexer<'src> {
    chars: CharIndices<'src>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = (usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        let (off, c) = self.chars.next()?;
        Some((off, Self::classify(c)))
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            chars: src.char_indices(),
        }
    }

    pub fn classify(c: char) -> Token {
        match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if Self::is_operand(c) => Token::Operand(c),
            c => match Operator::from_char(c) {
                Some(op) => Token::Op(op),
                None => Token::Invalid(c),
            },
        }
    }

    /// Letters of any script and decimal digits. Other numerics like `²` or `Ⅻ` are not operands.
    fn is_operand(c: char) -> bool {
        matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::DecimalNumber
        )
    }
}
